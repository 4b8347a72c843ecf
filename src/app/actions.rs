use super::*;
use crate::model::{OptionLetter, SessionConfig};
use crate::sampler;
use crate::storage::BankStorage;
use log::{info, warn};
use std::time::Instant;

impl QuizApp {
    pub fn refresh_banks(&mut self) {
        self.banks = self.storage.list();
    }

    /// Home → Setup. The bank is loaded up front so the setup form can be
    /// clamped to its size; load failures stay on Home with a message.
    pub fn take_quiz(&mut self, name: &str) {
        match self.storage.load(name) {
            Ok(bank) => {
                let total = bank.records.len();
                self.setup.question_count = self.setup.question_count.clamp(
                    self.min_question_count(total),
                    self.max_question_count(total),
                );
                self.active_bank = Some(bank);
                self.session.select_bank(name);
                self.message.clear();
            }
            Err(e) => self.recover_to_home(e),
        }
    }

    /// Home → Notes.
    pub fn study_notes(&mut self, name: &str) {
        match self.storage.load(name) {
            Ok(bank) => {
                self.active_bank = Some(bank);
                self.session.study_bank(name);
                self.message.clear();
            }
            Err(e) => self.recover_to_home(e),
        }
    }

    /// Setup → Test. Re-loads the bank fresh, samples, and launches. An
    /// invalid count or a storage failure never creates a session.
    pub fn confirm_launch(&mut self) {
        let Some(name) = self.session.selected_bank.clone() else {
            return;
        };
        let bank = match self.storage.load(&name) {
            Ok(b) => b,
            Err(e) => return self.recover_to_home(e),
        };

        let count = self.setup.question_count;
        let timer_minutes = if self.setup.enable_timer {
            self.setup.timer_minutes
        } else {
            0
        };

        match sampler::sample(&bank, count, &mut rand::rng()) {
            Ok(questions) => {
                info!(
                    "starting session: bank '{name}', {count} questions, {timer_minutes} min timer"
                );
                self.active_bank = Some(bank);
                self.session.launch(
                    questions,
                    SessionConfig {
                        question_count: count,
                        timer_minutes,
                    },
                    Instant::now(),
                );
                self.message.clear();
            }
            Err(e) => {
                warn!("sampling rejected for bank '{name}': {e}");
                self.message = e.to_string();
            }
        }
    }

    pub fn cancel_setup(&mut self) {
        self.session.cancel_setup();
        self.active_bank = None;
        self.message.clear();
    }

    /// Records the answer for the question currently on screen.
    pub fn select_answer(&mut self, letter: OptionLetter) {
        let index = self.session.current_question;
        self.session.answer(index, letter);
    }

    pub fn navigate(&mut self, delta: isize) {
        self.session.navigate(delta);
    }

    pub fn submit_test(&mut self) {
        self.session.submit();
    }

    /// Abort is just the other door into Results; nothing to roll back.
    pub fn abort_test(&mut self) {
        self.session.submit();
        self.message = "Test aborted.".to_string();
    }

    /// Called every repaint while a timed test runs.
    pub fn poll_timer(&mut self, now: Instant) {
        if self.session.poll_timer(now) {
            self.message = "Time is up! Your test was submitted automatically.".to_string();
        }
    }

    pub fn reveal_option(&mut self, index: usize) {
        self.session.reveal(index);
    }

    pub fn leave_notes(&mut self) {
        self.session.leave_notes();
        self.active_bank = None;
    }

    /// Results (or anywhere) → Home with a fresh blank session.
    pub fn new_session(&mut self) {
        self.session.reset();
        self.active_bank = None;
        self.message.clear();
        self.refresh_banks();
    }

    /// Reads the CSV named in the add-bank form and saves it as a new bank.
    pub fn add_bank(&mut self) {
        let name = self.add_bank_form.name.trim().to_string();
        let path = self.add_bank_form.csv_path.trim().to_string();
        if name.is_empty() || path.is_empty() {
            self.message = "Enter both a test name and a CSV file path.".to_string();
            return;
        }
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) => {
                self.message = format!("Could not read '{path}': {e}");
                return;
            }
        };
        match self.storage.save(&name, &raw) {
            Ok(()) => {
                info!("added bank '{name}' from {path}");
                self.add_bank_form = AddBankForm::default();
                self.refresh_banks();
                self.message = format!("Test '{name}' added.");
            }
            Err(e) => self.message = e.to_string(),
        }
    }

    pub fn remove_bank(&mut self, name: &str) {
        match self.storage.delete(name) {
            Ok(()) => {
                info!("deleted bank '{name}'");
                self.refresh_banks();
                self.message = format!("Test '{name}' deleted.");
            }
            Err(e) => self.message = e.to_string(),
        }
    }

    /// Storage errors never corrupt the session: surface the message and
    /// put the user back on Home.
    fn recover_to_home(&mut self, e: StorageError) {
        warn!("storage error: {e}");
        self.message = e.to_string();
        self.active_bank = None;
        self.session.reset();
        self.refresh_banks();
    }
}
