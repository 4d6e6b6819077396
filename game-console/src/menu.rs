use game_types::Language;

/// Entries of the numbered main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    StartGame,
    ChooseLanguage,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::StartGame),
            "2" => Some(MenuChoice::ChooseLanguage),
            "3" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Entry of the language sub-menu
pub fn parse_language_choice(input: &str) -> Option<Language> {
    match input.trim() {
        "1" => Some(Language::Russian),
        "2" => Some(Language::English),
        _ => None,
    }
}
