use super::*;
use crate::answer::{self, Answer};
use crate::model::{OptionLetter, QuestionRecord};
use crate::storage::DEFAULT_BANK;

fn option_rows(record: &QuestionRecord) -> Vec<OptionRow> {
    OptionLetter::ALL
        .iter()
        .map(|&letter| {
            let text = record.option(letter);
            OptionRow {
                letter,
                english: text.english.clone(),
                hindi: text.hindi.clone(),
            }
        })
        .collect()
}

/// "B - Pacific" for a resolved letter, the raw string verbatim otherwise.
fn answer_label(record: &QuestionRecord, ans: &Answer) -> String {
    match ans {
        Answer::Letter(letter) => {
            format!("{} - {}", letter.as_str(), record.option(*letter).english)
        }
        Answer::Unresolved(raw) => raw.clone(),
    }
}

impl QuizApp {
    pub fn bank_cards(&self) -> Vec<BankCard> {
        self.banks
            .iter()
            .map(|name| BankCard {
                name: name.clone(),
                deletable: name != DEFAULT_BANK,
            })
            .collect()
    }

    pub fn current_option_rows(&self) -> Vec<OptionRow> {
        self.current_record().map(option_rows).unwrap_or_default()
    }

    pub fn review_rows(&self) -> Vec<ReviewRow> {
        let Some(questions) = self.session.questions.as_ref() else {
            return Vec::new();
        };
        let Some(report) = self.score_report() else {
            return Vec::new();
        };

        questions
            .iter()
            .zip(&report.per_question)
            .enumerate()
            .map(|(i, (record, scored))| {
                let user_label = match scored.user {
                    Some(letter) => answer_label(record, &Answer::Letter(letter)),
                    None => "Not answered".to_string(),
                };
                ReviewRow {
                    number_1based: i + 1,
                    question_english: record.question.english.clone(),
                    question_hindi: record.question.hindi.clone(),
                    user_label,
                    correct_label: answer_label(record, &scored.correct),
                    is_correct: scored.is_correct,
                }
            })
            .collect()
    }

    /// Study-mode cards; the answer label is resolved fresh on every build,
    /// never cached on the record.
    pub fn note_cards(&self) -> Vec<NoteCard> {
        let Some(bank) = self.active_bank.as_ref() else {
            return Vec::new();
        };
        bank.records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let resolved =
                    answer::normalize(record, Some(record.correct_answer_raw.as_str()))
                    .unwrap_or_else(|| Answer::Unresolved(record.correct_answer_raw.clone()));
                NoteCard {
                    index: i,
                    question_english: record.question.english.clone(),
                    question_hindi: record.question.hindi.clone(),
                    options: option_rows(record),
                    revealed: self.session.revealed.contains(&i),
                    answer_label: answer_label(record, &resolved),
                }
            })
            .collect()
    }
}
