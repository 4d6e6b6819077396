use std::collections::HashMap;
use game_types::Language;

/// Inclusive bounds on the base word length, counted in letters.
pub const BASE_WORD_MIN_LEN: usize = 8;
pub const BASE_WORD_MAX_LEN: usize = 30;

#[derive(Debug, Clone, Copy)]
pub struct WordValidator {
    language: Language,
}

impl WordValidator {
    /// Create a validator for the alphabet of the given language
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Check that the word is non-empty and uses only letters of the
    /// configured alphabet, in either case
    pub fn is_only_letters(&self, word: &str) -> bool {
        !word.is_empty() && word.chars().all(|c| self.is_alphabet_letter(c))
    }

    fn is_alphabet_letter(&self, c: char) -> bool {
        match self.language {
            Language::Russian => matches!(c, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё'),
            Language::English => c.is_ascii_alphabetic(),
        }
    }

    /// Check if a base word is acceptable for starting a game
    pub fn is_valid_base_word(&self, word: &str) -> bool {
        let length = word.chars().count();
        self.is_only_letters(word) && (BASE_WORD_MIN_LEN..=BASE_WORD_MAX_LEN).contains(&length)
    }

    /// Check whether `candidate` uses no letter more often than `base_word` does
    pub fn can_be_made_from(base_word: &str, candidate: &str) -> bool {
        let base_letters = count_letters(base_word);
        let candidate_letters = count_letters(candidate);

        candidate_letters
            .iter()
            .all(|(letter, count)| base_letters.get(letter).is_some_and(|available| count <= available))
    }
}

fn count_letters(text: &str) -> HashMap<char, usize> {
    let mut letters = HashMap::new();
    for ch in text.chars().flat_map(char::to_lowercase) {
        *letters.entry(ch).or_insert(0) += 1;
    }
    letters
}
