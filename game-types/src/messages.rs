/// Out-of-band commands a player can type instead of a word.
///
/// Commands never consume a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    ShowWords,
    Score,
    TotalScore,
    Unknown(String),
}

impl GameCommand {
    pub const PREFIX: char = '/';

    /// Parse a submitted token. Returns `None` for anything that is not a
    /// command and should go through the word pipeline instead.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if !token.starts_with(Self::PREFIX) {
            return None;
        }

        let command = match token.to_lowercase().as_str() {
            "/show-words" => GameCommand::ShowWords,
            "/score" => GameCommand::Score,
            "/total-score" => GameCommand::TotalScore,
            _ => GameCommand::Unknown(token.to_string()),
        };
        Some(command)
    }
}
