use std::collections::HashSet;
use std::time::Instant;

use crate::model::{OptionLetter, QuestionRecord, Screen, SessionConfig};

/// The mutable state of one quiz session. Created blank at Home, filled at
/// launch, read-only once `submitted`, and replaced wholesale by `reset`.
#[derive(Debug, Default)]
pub struct SessionState {
    pub screen: Screen,
    pub selected_bank: Option<String>,
    /// Fixed length and order once sampled; never re-sampled mid-session.
    pub questions: Option<Vec<QuestionRecord>>,
    /// One slot per sampled question, dense over `0..questions.len()`.
    pub answers: Vec<Option<OptionLetter>>,
    pub current_question: usize,
    pub started_at: Option<Instant>,
    pub timer_minutes: u32,
    /// Monotonic within a session: once true it never flips back.
    pub submitted: bool,
    /// Study-mode reveals; independent of `answers`, grows only.
    pub revealed: HashSet<usize>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_questions(&self) -> usize {
        self.questions.as_ref().map_or(0, Vec::len)
    }

    /// Home → Setup.
    pub fn select_bank(&mut self, name: &str) {
        if self.screen != Screen::Home {
            return;
        }
        self.selected_bank = Some(name.to_string());
        self.screen = Screen::Setup;
    }

    /// Home → Notes, with a clean reveal set.
    pub fn study_bank(&mut self, name: &str) {
        if self.screen != Screen::Home {
            return;
        }
        self.selected_bank = Some(name.to_string());
        self.revealed.clear();
        self.screen = Screen::Notes;
    }

    /// Setup → Home.
    pub fn cancel_setup(&mut self) {
        if self.screen != Screen::Setup {
            return;
        }
        self.screen = Screen::Home;
    }

    /// Setup → Test. The caller has already sampled; this zero-initializes
    /// the answer slots and arms the timer.
    pub fn launch(&mut self, questions: Vec<QuestionRecord>, config: SessionConfig, now: Instant) {
        if self.screen != Screen::Setup {
            return;
        }
        self.answers = vec![None; questions.len()];
        self.questions = Some(questions);
        self.current_question = 0;
        self.timer_minutes = config.timer_minutes;
        self.started_at = Some(now);
        self.submitted = false;
        self.screen = Screen::Test;
    }

    /// Records an answer for a question slot; overwriting is fine.
    pub fn answer(&mut self, index: usize, letter: OptionLetter) {
        if self.screen != Screen::Test || self.submitted {
            return;
        }
        if let Some(slot) = self.answers.get_mut(index) {
            *slot = Some(letter);
        }
    }

    /// Moves the cursor by `delta`, clamped to the sampled range.
    pub fn navigate(&mut self, delta: isize) {
        if self.screen != Screen::Test || self.submitted {
            return;
        }
        let total = self.total_questions();
        if total == 0 {
            return;
        }
        let target = self.current_question as isize + delta;
        self.current_question = target.clamp(0, total as isize - 1) as usize;
    }

    /// Test → Results. Manual submit, abort and timer expiry all land here.
    pub fn submit(&mut self) {
        if self.screen != Screen::Test {
            return;
        }
        self.submitted = true;
        self.screen = Screen::Results;
    }

    /// Remaining whole seconds, or `None` when untimed or not started.
    /// Elapsed time is clamped at zero, so backwards clock reads never
    /// produce a negative (or inflated) remainder.
    pub fn remaining_seconds(&self, now: Instant) -> Option<u64> {
        if self.timer_minutes == 0 {
            return None;
        }
        let started = self.started_at?;
        let elapsed = now.saturating_duration_since(started).as_secs();
        Some((self.timer_minutes as u64 * 60).saturating_sub(elapsed))
    }

    /// Polled on every repaint while testing. Fires the auto-submit at most
    /// once, identically to a manual submit. Returns whether it fired.
    pub fn poll_timer(&mut self, now: Instant) -> bool {
        if self.screen != Screen::Test || self.submitted {
            return false;
        }
        match self.remaining_seconds(now) {
            Some(0) => {
                self.submit();
                true
            }
            _ => false,
        }
    }

    /// Study mode only; reveals are monotonic, there is no un-reveal.
    pub fn reveal(&mut self, index: usize) {
        if self.screen != Screen::Notes {
            return;
        }
        self.revealed.insert(index);
    }

    /// Notes → Home.
    pub fn leave_notes(&mut self) {
        if self.screen != Screen::Notes {
            return;
        }
        self.screen = Screen::Home;
    }

    /// Replaces the session with a fresh blank one.
    pub fn reset(&mut self) {
        *self = SessionState::new();
    }
}
