use std::path::{Path, PathBuf};

use game_core::StatsEngine;
use game_types::{GameData, GameSession, Player, PlayerStats};
use tracing::{debug, info, warn};

use crate::errors::StoreError;
use crate::store::{SaveOutcome, ScoreStore};

/// Players, their win/loss counters and the game history, backed by a
/// `ScoreStore`.
///
/// Mutations are applied to a copy of the document and only become visible
/// once the copy has been written. A failed write leaves the repository as
/// it was, so the same call can simply be retried. Queries reload from disk
/// first so they never report stale in-memory state.
pub struct ScoreRepository {
    store: ScoreStore,
    data: GameData,
    pending_backup: Option<PathBuf>,
}

impl ScoreRepository {
    /// Repository starting from an empty state; call `reload` to read the store.
    pub fn new(store: ScoreStore) -> Self {
        Self {
            store,
            data: GameData::default(),
            pending_backup: None,
        }
    }

    /// Backup file holding the latest results when the primary file could
    /// not be replaced on the last write.
    pub fn pending_backup(&self) -> Option<&Path> {
        self.pending_backup.as_deref()
    }

    /// Replace in-memory state with the stored document. On failure the
    /// state is reset to empty and the error is returned.
    pub fn reload(&mut self) -> Result<(), StoreError> {
        match self.store.load() {
            Ok(data) => {
                self.data = data;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Error loading results, starting from empty state");
                self.data = GameData::default();
                Err(e)
            }
        }
    }

    pub fn get_or_create_player(&mut self, name: &str) -> Result<Player, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::InvalidArgument(
                "Player name cannot be empty".to_string(),
            ));
        }

        if let Some(player) = self.data.find_player(name) {
            return Ok(player.clone());
        }

        let player = Player::new(name);
        let mut next = self.data.clone();
        next.players.push(player.clone());
        self.commit(next)?;
        info!(player = %name, "Created player");

        Ok(player)
    }

    /// Every known player, best first.
    pub fn players(&mut self) -> Result<Vec<Player>, StoreError> {
        self.reload()?;

        let mut players = self.data.players.clone();
        players.sort_by(|a, b| StatsEngine::rank_order(&PlayerStats::from(a), &PlayerStats::from(b)));
        Ok(players)
    }

    /// Record a finished session and update both players' counters.
    ///
    /// Returns `false` without touching anything if a finished session with
    /// the same id has already been recorded.
    pub fn record_outcome(&mut self, session: &GameSession) -> Result<bool, StoreError> {
        let Some((winner, loser)) = seats_by_result(session) else {
            return Err(StoreError::InvalidArgument(
                "Cannot record a session without a winner from its players".to_string(),
            ));
        };

        if is_recorded(&self.data, session) {
            debug!(session_id = %session.id, "Session already recorded");
            return Ok(false);
        }

        let mut next = self.data.clone();
        remove_unfinished(&mut next, session);
        next.history.push(session.clone());
        player_entry(&mut next, &winner).add_game(true);
        player_entry(&mut next, &loser).add_game(false);

        self.commit(next)?;
        info!(session_id = %session.id, %winner, %loser, "Recorded game result");

        Ok(true)
    }

    /// Store a provisional copy of a running session, replacing any earlier
    /// provisional copy of the same match. Provisional entries never count
    /// towards statistics.
    pub fn save_in_progress(&mut self, session: &GameSession) -> Result<(), StoreError> {
        if session.is_finished() {
            return Err(StoreError::InvalidArgument(
                "Finished sessions must be recorded with record_outcome".to_string(),
            ));
        }
        if is_recorded(&self.data, session) {
            return Ok(());
        }

        let mut next = self.data.clone();
        remove_unfinished(&mut next, session);
        next.history.push(session.clone());
        self.commit(next)?;
        debug!(session_id = %session.id, words = session.used_words.len(), "Saved unfinished session");

        Ok(())
    }

    /// Head-to-head record of two players against each other.
    pub fn stats_for_pair(
        &mut self,
        player1_name: &str,
        player2_name: &str,
    ) -> Result<(PlayerStats, PlayerStats), StoreError> {
        if player1_name.trim().is_empty() || player2_name.trim().is_empty() {
            return Ok((PlayerStats::default(), PlayerStats::default()));
        }

        self.reload()?;
        Ok(StatsEngine::head_to_head(
            &self.data.history,
            player1_name,
            player2_name,
        ))
    }

    /// Global totals for every known player, best first.
    pub fn total_stats(&mut self) -> Result<Vec<PlayerStats>, StoreError> {
        self.reload()?;
        Ok(StatsEngine::leaderboard(&self.data.players))
    }

    /// Full history, finished and provisional entries alike.
    pub fn history(&mut self) -> Result<Vec<GameSession>, StoreError> {
        self.reload()?;
        Ok(self.data.history.clone())
    }

    /// Write `next` and adopt it as the current state once it is stored.
    fn commit(&mut self, mut next: GameData) -> Result<(), StoreError> {
        next.last_updated = Some(chrono::Utc::now().to_rfc3339());

        match self.store.save(&next)? {
            SaveOutcome::Committed => self.pending_backup = None,
            SaveOutcome::BackedUp(backup) => {
                warn!(
                    backup = %backup.display(),
                    primary = %self.store.path().display(),
                    "Latest results exist only in the backup file"
                );
                self.pending_backup = Some(backup);
            }
        }

        self.data = next;
        Ok(())
    }
}

fn is_recorded(data: &GameData, session: &GameSession) -> bool {
    data.history
        .iter()
        .any(|entry| entry.id == session.id && entry.is_finished())
}

fn remove_unfinished(data: &mut GameData, session: &GameSession) {
    let before = data.history.len();
    data.history
        .retain(|entry| entry.is_finished() || !entry.same_match(session));

    let removed = before - data.history.len();
    if removed > 0 {
        debug!(removed, base_word = %session.base_word, "Replaced unfinished session");
    }
}

fn player_entry<'a>(data: &'a mut GameData, name: &str) -> &'a mut Player {
    let index = match data.players.iter().position(|p| p.has_name(name)) {
        Some(index) => index,
        None => {
            data.players.push(Player::new(name.trim()));
            data.players.len() - 1
        }
    };
    &mut data.players[index]
}

/// `(winner, loser)` spelled as in the session's seating, if the session has
/// a winner who is one of its players.
fn seats_by_result(session: &GameSession) -> Option<(String, String)> {
    let winner = [&session.player1_name, &session.player2_name]
        .into_iter()
        .find(|name| session.was_won_by(name))?;
    let loser = session.loser_name()?;
    Some((winner.clone(), loser.to_string()))
}
