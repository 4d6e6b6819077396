use game_types::{Language, LossReason, PlayerStats};
use std::fmt::Display;
use std::path::Path;

const RULE: &str = "══════════════════════════════════════════════════";

/// Console messages in the selected language.
#[derive(Debug, Clone, Copy)]
pub struct Texts {
    language: Language,
}

impl Texts {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    fn pick(&self, ru: &str, en: &str) -> String {
        match self.language {
            Language::Russian => ru.to_string(),
            Language::English => en.to_string(),
        }
    }

    pub fn menu_lines(&self) -> Vec<String> {
        vec![
            self.pick("Игра в Слова", "The Word Game"),
            self.pick("1. Начать игру", "1. Start Game"),
            self.pick("2. Выбор языка", "2. Choose Language"),
            self.pick("3. Выход", "3. Exit"),
        ]
    }

    pub fn menu_prompt(&self) -> String {
        self.pick("Ваш выбор: ", "Your choice: ")
    }

    pub fn input_error(&self) -> String {
        self.pick("Ошибка ввода!", "Input error!")
    }

    pub fn exit(&self) -> String {
        self.pick("Выход", "Exit")
    }

    pub fn enter_first_player(&self) -> String {
        self.pick("Введите имя первого игрока:", "Enter first player name:")
    }

    pub fn enter_second_player(&self) -> String {
        self.pick("Введите имя второго игрока:", "Enter second player name:")
    }

    pub fn names_must_differ(&self) -> String {
        self.pick(
            "Имена игроков должны различаться.",
            "Player names must be different.",
        )
    }

    pub fn enter_base_word(&self) -> String {
        self.pick(
            "Введите начальное слово (от 8 до 30 букв):",
            "Enter the base word (8-30 letters):",
        )
    }

    pub fn invalid_base_word(&self) -> String {
        self.pick(
            "Ошибка: слово должно содержать только буквы (8-30).",
            "Error: only letters (8-30).",
        )
    }

    pub fn game_started(&self, base_word: &str) -> String {
        match self.language {
            Language::Russian => format!("Игра началась! Базовое слово: {}", base_word),
            Language::English => format!("Game started! Base word: {}", base_word),
        }
    }

    pub fn available_commands(&self) -> String {
        self.pick(
            "Доступные команды: /show-words, /score, /total-score",
            "Available commands: /show-words, /score, /total-score",
        )
    }

    pub fn turn_prompt(&self, player: &str, number: u8, seconds: u64) -> String {
        match self.language {
            Language::Russian => format!(
                "{} (Игрок {}), введите слово за {} секунд:",
                player, number, seconds
            ),
            Language::English => format!(
                "{} (Player {}), enter a word within {} seconds:",
                player, number, seconds
            ),
        }
    }

    pub fn word_accepted(&self, word: &str) -> String {
        match self.language {
            Language::Russian => format!("Слово принято: {}", word),
            Language::English => format!("Word accepted: {}", word),
        }
    }

    pub fn reason(&self, reason: &LossReason) -> String {
        match reason {
            LossReason::TimeExpired => self.pick("Время вышло!", "Time is up!"),
            LossReason::InvalidAlphabet => {
                self.pick("Использованы неверные символы!", "Invalid alphabet!")
            }
            LossReason::WordAlreadyUsed => {
                self.pick("Слово уже использовалось!", "Word already used!")
            }
            LossReason::NotFromBaseWord => self.pick(
                "Нельзя составить из букв исходного слова!",
                "Cannot be made from base word!",
            ),
            LossReason::ApplicationClosed { player } => match self.language {
                Language::Russian => {
                    format!("Приложение было закрыто во время хода игрока {}", player)
                }
                Language::English => format!("Application was closed during {}'s turn", player),
            },
        }
    }

    pub fn game_over(&self) -> String {
        self.pick("ИГРА ОКОНЧЕНА!", "GAME OVER!")
    }

    pub fn saving_interrupted_game(&self) -> String {
        self.pick("СОХРАНЕНИЕ ПРЕРВАННОЙ ИГРЫ", "SAVING INTERRUPTED GAME")
    }

    pub fn winner(&self, name: &str) -> String {
        match self.language {
            Language::Russian => format!("Победитель: {}", name),
            Language::English => format!("Winner: {}", name),
        }
    }

    pub fn loser(&self, name: &str) -> String {
        match self.language {
            Language::Russian => format!("Проиграл: {}", name),
            Language::English => format!("Loser: {}", name),
        }
    }

    pub fn loss_reason(&self, reason: &LossReason) -> String {
        match self.language {
            Language::Russian => format!("Причина проигрыша: {}", self.reason(reason)),
            Language::English => format!("Reason for loss: {}", self.reason(reason)),
        }
    }

    /// Framed end-of-game block shared by normal and interrupted endings.
    pub fn result_banner(
        &self,
        title: &str,
        winner: &str,
        loser: &str,
        reason: &LossReason,
    ) -> Vec<String> {
        vec![
            String::new(),
            RULE.to_string(),
            title.to_string(),
            RULE.to_string(),
            self.winner(winner),
            self.loser(loser),
            self.loss_reason(reason),
            RULE.to_string(),
        ]
    }

    pub fn language_menu_lines(&self) -> Vec<String> {
        vec![
            self.pick("Выберите язык:", "Choose language:"),
            "1. Русский".to_string(),
            "2. English".to_string(),
        ]
    }

    pub fn language_changed(&self) -> String {
        self.pick("Язык: русский", "Language: English")
    }

    pub fn result_in_backup(&self, backup: &Path) -> String {
        match self.language {
            Language::Russian => format!(
                "Внимание: результат сохранён только в резервной копии {}",
                backup.display()
            ),
            Language::English => format!(
                "Warning: the result was saved only to the backup file {}",
                backup.display()
            ),
        }
    }

    pub fn press_enter(&self) -> String {
        self.pick(
            "Нажмите Enter, чтобы вернуться в меню...",
            "Press Enter to return to menu...",
        )
    }

    pub fn unknown_command(&self, command: &str) -> String {
        match self.language {
            Language::Russian => format!("Неизвестная команда: {}", command),
            Language::English => format!("Unknown command: {}", command),
        }
    }

    pub fn no_words_yet(&self) -> String {
        self.pick("Пока не введено ни одного слова.", "No words entered yet.")
    }

    pub fn used_words(&self) -> String {
        self.pick("Использованные слова:", "Used words:")
    }

    pub fn current_players_stats(&self) -> String {
        self.pick("Статистика текущих игроков:", "Current players statistics:")
    }

    pub fn total_stats(&self) -> String {
        self.pick(
            "Общая статистика всех игроков:",
            "Total statistics of all players:",
        )
    }

    pub fn no_player_data(&self) -> String {
        self.pick("Нет данных об игроках.", "No player data available.")
    }

    pub fn stats_line(&self, stats: &PlayerStats) -> String {
        match self.language {
            Language::Russian => format!(
                "{}: Игр сыграно: {}, Побед: {}",
                stats.name, stats.games_played, stats.wins
            ),
            Language::English => format!(
                "{}: Games played: {}, Wins: {}",
                stats.name, stats.games_played, stats.wins
            ),
        }
    }

    pub fn stats_error(&self, error: &impl Display) -> String {
        match self.language {
            Language::Russian => format!("Ошибка загрузки статистики: {}", error),
            Language::English => format!("Error loading statistics: {}", error),
        }
    }

    pub fn error(&self, error: &impl Display) -> String {
        match self.language {
            Language::Russian => format!("Произошла ошибка: {}", error),
            Language::English => format!("An error occurred: {}", error),
        }
    }

    pub fn store_reset(&self, error: &impl Display) -> String {
        match self.language {
            Language::Russian => format!(
                "Не удалось загрузить результаты ({}). Начинаем с пустой статистики.",
                error
            ),
            Language::English => format!(
                "Could not load results ({}). Starting with empty statistics.",
                error
            ),
        }
    }

    pub fn save_failed(&self, error: &impl Display) -> String {
        match self.language {
            Language::Russian => format!("Ошибка при сохранении результатов: {}", error),
            Language::English => format!("Error saving results: {}", error),
        }
    }
}
