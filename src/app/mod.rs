use crate::model::QuestionBank;
use crate::session::SessionState;
use crate::storage::{FsBankStorage, StorageError};

// Submodules
pub mod actions;
pub mod queries;
pub mod view_models;

// Re-export of the view model structs
pub use crate::view_models::{BankCard, NoteCard, OptionRow, ReviewRow};

/// Form state for the setup screen. `timer_minutes` only applies while the
/// timer is enabled; a disabled timer launches an untimed session.
#[derive(Clone, Debug)]
pub struct SetupForm {
    pub enable_timer: bool,
    pub timer_minutes: u32,
    pub question_count: usize,
}

impl Default for SetupForm {
    fn default() -> Self {
        Self {
            enable_timer: true,
            timer_minutes: 20,
            question_count: 20,
        }
    }
}

/// Form state for the add-bank sidebar on the home screen.
#[derive(Clone, Debug, Default)]
pub struct AddBankForm {
    pub name: String,
    pub csv_path: String,
}

pub struct QuizApp {
    pub session: SessionState,
    pub storage: FsBankStorage,
    /// Cached `storage.list()`; refreshed after every save/delete.
    pub banks: Vec<String>,
    /// The bank backing the current Setup or Notes screen. The launch path
    /// re-loads fresh from storage instead of trusting this copy.
    pub active_bank: Option<QuestionBank>,
    pub setup: SetupForm,
    pub add_bank_form: AddBankForm,
    /// One-line status shown under the current view.
    pub message: String,
}

impl QuizApp {
    pub const BANK_DIR: &'static str = "uploaded_tests";

    pub fn new() -> Result<Self, StorageError> {
        Self::with_bank_dir(Self::BANK_DIR)
    }

    pub fn with_bank_dir(dir: &str) -> Result<Self, StorageError> {
        let storage = FsBankStorage::new(dir)?;
        let mut app = Self {
            session: SessionState::new(),
            storage,
            banks: Vec::new(),
            active_bank: None,
            setup: SetupForm::default(),
            add_bank_form: AddBankForm::default(),
            message: String::new(),
        };
        app.refresh_banks();
        Ok(app)
    }
}
