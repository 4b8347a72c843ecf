use serde::{Deserialize, Serialize};

/// The four option slots every question carries.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum OptionLetter {
    A,
    B,
    C,
    D,
}

impl OptionLetter {
    /// Fixed A→D scan order; text matching ties break on the first hit.
    pub const ALL: [OptionLetter; 4] = [
        OptionLetter::A,
        OptionLetter::B,
        OptionLetter::C,
        OptionLetter::D,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OptionLetter::A => "A",
            OptionLetter::B => "B",
            OptionLetter::C => "C",
            OptionLetter::D => "D",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            OptionLetter::A => 0,
            OptionLetter::B => 1,
            OptionLetter::C => 2,
            OptionLetter::D => 3,
        }
    }

    /// Parses a bare letter (trimmed). Anything else is not a letter.
    pub fn parse(raw: &str) -> Option<OptionLetter> {
        match raw.trim() {
            "A" => Some(OptionLetter::A),
            "B" => Some(OptionLetter::B),
            "C" => Some(OptionLetter::C),
            "D" => Some(OptionLetter::D),
            _ => None,
        }
    }
}

/// English text plus an optional Hindi rendering. Blank cells load as `None`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BilingualText {
    pub english: String,
    pub hindi: Option<String>,
}

impl BilingualText {
    pub fn new(english: impl Into<String>) -> Self {
        Self {
            english: english.into(),
            hindi: None,
        }
    }

    pub fn with_hindi(english: impl Into<String>, hindi: impl Into<String>) -> Self {
        Self {
            english: english.into(),
            hindi: Some(hindi.into()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    pub question: BilingualText,
    /// Indexed by `OptionLetter::index()`; all four slots always exist.
    pub options: [BilingualText; 4],
    /// Either a bare letter or the literal English option text. Resolved at
    /// read time by `answer::normalize`, never rewritten on the stored bank.
    pub correct_answer_raw: String,
}

impl QuestionRecord {
    pub fn option(&self, letter: OptionLetter) -> &BilingualText {
        &self.options[letter.index()]
    }
}

/// A named, fully loaded question set. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    pub name: String,
    pub records: Vec<QuestionRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Setup,
    Test,
    Notes,
    Results,
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Home
    }
}

/// Fixed for the lifetime of one session. `timer_minutes == 0` means untimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub question_count: usize,
    pub timer_minutes: u32,
}
