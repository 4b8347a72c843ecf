// src/view_models.rs

use crate::model::OptionLetter;

/// One bank entry on the home screen.
#[derive(Clone, Debug)]
pub struct BankCard {
    pub name: String,
    pub deletable: bool,
}

/// One selectable option row on the test screen.
#[derive(Clone, Debug)]
pub struct OptionRow {
    pub letter: OptionLetter,
    pub english: String,
    pub hindi: Option<String>,
}

impl OptionRow {
    pub fn label(&self) -> String {
        match &self.hindi {
            Some(hindi) => format!("{}: {} ({hindi})", self.letter.as_str(), self.english),
            None => format!("{}: {}", self.letter.as_str(), self.english),
        }
    }
}

/// One reviewed question on the results screen.
#[derive(Clone, Debug)]
pub struct ReviewRow {
    pub number_1based: usize,
    pub question_english: String,
    pub question_hindi: Option<String>,
    /// "B - Pacific", or "Not answered".
    pub user_label: String,
    /// Unresolved correct answers show the stored string verbatim.
    pub correct_label: String,
    pub is_correct: bool,
}

/// One question card on the study-notes screen.
#[derive(Clone, Debug)]
pub struct NoteCard {
    pub index: usize,
    pub question_english: String,
    pub question_hindi: Option<String>,
    pub options: Vec<OptionRow>,
    pub revealed: bool,
    pub answer_label: String,
}
