use game_types::{GameSession, Player, PlayerStats};
use std::cmp::Ordering;

pub struct StatsEngine;

impl StatsEngine {
    /// Head-to-head record of two players, counting only finished games
    /// played between them in either seating
    pub fn head_to_head(
        history: &[GameSession],
        player1_name: &str,
        player2_name: &str,
    ) -> (PlayerStats, PlayerStats) {
        if player1_name.trim().is_empty() || player2_name.trim().is_empty() {
            return (PlayerStats::default(), PlayerStats::default());
        }

        let games: Vec<&GameSession> = history
            .iter()
            .filter(|session| session.is_finished() && session.is_between(player1_name, player2_name))
            .collect();

        let games_played = games.len() as u32;
        let wins_of = |name: &str| games.iter().filter(|session| session.was_won_by(name)).count() as u32;

        (
            PlayerStats {
                name: player1_name.to_string(),
                games_played,
                wins: wins_of(player1_name),
            },
            PlayerStats {
                name: player2_name.to_string(),
                games_played,
                wins: wins_of(player2_name),
            },
        )
    }

    /// Global totals for every player, best first
    pub fn leaderboard(players: &[Player]) -> Vec<PlayerStats> {
        let mut stats: Vec<PlayerStats> = players.iter().map(PlayerStats::from).collect();
        stats.sort_by(Self::rank_order);
        stats
    }

    /// Wins descending, then games descending, then name ascending
    pub fn rank_order(a: &PlayerStats, b: &PlayerStats) -> Ordering {
        b.wins
            .cmp(&a.wins)
            .then_with(|| b.games_played.cmp(&a.games_played))
            .then_with(|| a.name.cmp(&b.name))
    }
}
