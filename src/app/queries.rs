use super::*;
use crate::model::{OptionLetter, QuestionRecord};
use crate::scorer::{self, ScoreReport};

impl QuizApp {
    /// Slider floor: 10 questions, or the whole bank when it is smaller.
    pub fn min_question_count(&self, total: usize) -> usize {
        total.min(10).max(1)
    }

    /// Slider ceiling: 100 questions, or the whole bank when it is smaller.
    pub fn max_question_count(&self, total: usize) -> usize {
        total.min(100).max(1)
    }

    pub fn active_bank_size(&self) -> usize {
        self.active_bank.as_ref().map_or(0, |b| b.records.len())
    }

    /// The question currently on screen during a test.
    pub fn current_record(&self) -> Option<&QuestionRecord> {
        self.session
            .questions
            .as_ref()?
            .get(self.session.current_question)
    }

    pub fn current_answer(&self) -> Option<OptionLetter> {
        self.session
            .answers
            .get(self.session.current_question)
            .copied()
            .flatten()
    }

    pub fn on_last_question(&self) -> bool {
        let total = self.session.total_questions();
        total > 0 && self.session.current_question == total - 1
    }

    /// Derived on demand from the session; calling it twice is harmless.
    pub fn score_report(&self) -> Option<ScoreReport> {
        let questions = self.session.questions.as_ref()?;
        Some(scorer::score(questions, &self.session.answers))
    }
}
