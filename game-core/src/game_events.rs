use game_types::SessionId;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    GameStarted {
        session_id: SessionId,
        base_word: String,
        players: (String, String),
    },
    WordAccepted {
        session_id: SessionId,
        player: String,
        word: String,
    },
    CommandIssued {
        session_id: SessionId,
        command: String,
    },
    GameEnded {
        session_id: SessionId,
        winner: String,
        loser: String,
        reason: String,
    },
}

impl GameEvent {
    pub fn session_id(&self) -> SessionId {
        match self {
            GameEvent::GameStarted { session_id, .. } => *session_id,
            GameEvent::WordAccepted { session_id, .. } => *session_id,
            GameEvent::CommandIssued { session_id, .. } => *session_id,
            GameEvent::GameEnded { session_id, .. } => *session_id,
        }
    }
}

/// Event handler trait for processing game events
pub trait GameEventHandler: Send {
    fn handle_event(&mut self, event: &GameEvent);
}

/// Simple event bus for distributing game events
pub struct GameEventBus {
    handlers: Vec<Box<dyn GameEventHandler>>,
}

impl GameEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Bus with a `TracingEventHandler` already attached
    pub fn with_tracing() -> Self {
        let mut bus = Self::new();
        bus.add_handler(Box::new(TracingEventHandler));
        bus
    }

    pub fn add_handler(&mut self, handler: Box<dyn GameEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn publish(&mut self, event: GameEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(&event);
        }
    }
}

impl Default for GameEventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Writes every event to the tracing subscriber
pub struct TracingEventHandler;

impl GameEventHandler for TracingEventHandler {
    fn handle_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::GameStarted {
                session_id,
                base_word,
                players,
            } => info!(%session_id, %base_word, player1 = %players.0, player2 = %players.1, "Game started"),
            GameEvent::WordAccepted {
                session_id,
                player,
                word,
            } => debug!(%session_id, %player, %word, "Word accepted"),
            GameEvent::CommandIssued { session_id, command } => {
                debug!(%session_id, %command, "Command issued")
            }
            GameEvent::GameEnded {
                session_id,
                winner,
                loser,
                reason,
            } => info!(%session_id, %winner, %loser, %reason, "Game ended"),
        }
    }
}
