use std::fs;
use std::path::PathBuf;

use log::warn;
use serde::Deserialize;
use thiserror::Error;

use crate::model::{BilingualText, QuestionBank, QuestionRecord};

/// Always present, always listed first, never deletable.
pub const DEFAULT_BANK: &str = "Paper 10 (Default)";

const REQUIRED_COLUMNS: [&str; 6] = [
    "Question (English)",
    "Option A (English)",
    "Option B (English)",
    "Option C (English)",
    "Option D (English)",
    "Correct Answer (English)",
];

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("bank '{0}' not found")]
    NotFound(String),
    #[error("bank '{name}' is malformed: {reason}")]
    Malformed { name: String, reason: String },
    #[error("bank '{0}' is protected and cannot be deleted")]
    Protected(String),
    #[error("'{0}' is not a usable bank name")]
    InvalidName(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Named question sets, stored and loaded as delimited text tables.
/// Reads are stateless and idempotent; re-reading per setup view is fine.
pub trait BankStorage {
    fn list(&self) -> Vec<String>;
    fn load(&self, name: &str) -> Result<QuestionBank, StorageError>;
    fn save(&self, name: &str, raw: &str) -> Result<(), StorageError>;
    fn delete(&self, name: &str) -> Result<(), StorageError>;
}

/// One CSV file per bank under a single directory, `<name>.csv`.
pub struct FsBankStorage {
    dir: PathBuf,
}

/// One CSV row. Hindi columns are optional; blank cells come back as `None`.
#[derive(Debug, Deserialize)]
struct BankRow {
    #[serde(rename = "Question (English)")]
    question_en: String,
    #[serde(rename = "Question (Hindi)", default)]
    question_hi: Option<String>,
    #[serde(rename = "Option A (English)")]
    option_a_en: String,
    #[serde(rename = "Option B (English)")]
    option_b_en: String,
    #[serde(rename = "Option C (English)")]
    option_c_en: String,
    #[serde(rename = "Option D (English)")]
    option_d_en: String,
    #[serde(rename = "Option A (Hindi)", default)]
    option_a_hi: Option<String>,
    #[serde(rename = "Option B (Hindi)", default)]
    option_b_hi: Option<String>,
    #[serde(rename = "Option C (Hindi)", default)]
    option_c_hi: Option<String>,
    #[serde(rename = "Option D (Hindi)", default)]
    option_d_hi: Option<String>,
    #[serde(rename = "Correct Answer (English)")]
    correct: String,
}

fn text(english: String, hindi: Option<String>) -> BilingualText {
    let hindi = hindi.filter(|h| !h.trim().is_empty());
    BilingualText { english, hindi }
}

impl From<BankRow> for QuestionRecord {
    fn from(row: BankRow) -> Self {
        QuestionRecord {
            question: text(row.question_en, row.question_hi),
            options: [
                text(row.option_a_en, row.option_a_hi),
                text(row.option_b_en, row.option_b_hi),
                text(row.option_c_en, row.option_c_hi),
                text(row.option_d_en, row.option_d_hi),
            ],
            correct_answer_raw: row.correct,
        }
    }
}

/// Parses a whole bank table, rejecting it at load time rather than letting
/// a bad row surface mid-session. Rows are never silently dropped.
pub fn parse_bank(name: &str, raw: &str) -> Result<QuestionBank, StorageError> {
    let malformed = |reason: String| StorageError::Malformed {
        name: name.to_string(),
        reason,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(raw.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| malformed(format!("unreadable header row: {e}")))?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(malformed(format!("missing required column '{column}'")));
        }
    }

    let mut records = Vec::new();
    for (i, row) in reader.deserialize::<BankRow>().enumerate() {
        let row = row.map_err(|e| malformed(format!("row {}: {e}", i + 1)))?;
        records.push(QuestionRecord::from(row));
    }
    if records.is_empty() {
        return Err(malformed("bank has no question rows".to_string()));
    }

    Ok(QuestionBank {
        name: name.to_string(),
        records,
    })
}

impl FsBankStorage {
    /// Opens (creating if needed) the bank directory and seeds the embedded
    /// default bank when its file is missing.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        let storage = Self { dir };
        let default_path = storage.path(DEFAULT_BANK);
        if !default_path.exists() {
            fs::write(&default_path, include_str!("data/default_bank.csv"))?;
        }
        Ok(storage)
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.csv"))
    }

    fn check_name(name: &str) -> Result<(), StorageError> {
        let trimmed = name.trim();
        if trimmed.is_empty() || trimmed.contains(['/', '\\']) {
            return Err(StorageError::InvalidName(name.to_string()));
        }
        Ok(())
    }
}

impl BankStorage for FsBankStorage {
    fn list(&self) -> Vec<String> {
        let mut names = Vec::new();
        match fs::read_dir(&self.dir) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    let path = entry.path();
                    if path.extension().is_some_and(|e| e == "csv") {
                        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                            if stem != DEFAULT_BANK {
                                names.push(stem.to_string());
                            }
                        }
                    }
                }
            }
            Err(e) => warn!("could not list bank directory {}: {e}", self.dir.display()),
        }
        names.sort();
        names.insert(0, DEFAULT_BANK.to_string());
        names
    }

    fn load(&self, name: &str) -> Result<QuestionBank, StorageError> {
        let path = self.path(name);
        if !path.exists() {
            return Err(StorageError::NotFound(name.to_string()));
        }
        let raw = fs::read_to_string(&path)?;
        parse_bank(name, &raw)
    }

    /// Validates the whole table before writing: a malformed upload is
    /// rejected in one piece, not saved and discovered later.
    fn save(&self, name: &str, raw: &str) -> Result<(), StorageError> {
        Self::check_name(name)?;
        parse_bank(name, raw)?;
        fs::write(self.path(name.trim()), raw)?;
        Ok(())
    }

    fn delete(&self, name: &str) -> Result<(), StorageError> {
        if name == DEFAULT_BANK {
            return Err(StorageError::Protected(name.to_string()));
        }
        let path = self.path(name);
        if !path.exists() {
            return Err(StorageError::NotFound(name.to_string()));
        }
        fs::remove_file(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const GOOD_BANK: &str = "\
Question (English),Question (Hindi),Option A (English),Option B (English),Option C (English),Option D (English),Option A (Hindi),Option B (Hindi),Option C (Hindi),Option D (Hindi),Correct Answer (English)
Closest planet to the sun?,,Venus,Mars,Mercury,Jupiter,,,,,Mercury
Largest ocean?,,Atlantic,Pacific,Indian,Arctic,,,,,B
";

    fn storage() -> (tempfile::TempDir, FsBankStorage) {
        let dir = tempdir().unwrap();
        let storage = FsBankStorage::new(dir.path()).unwrap();
        (dir, storage)
    }

    #[test]
    fn default_bank_is_seeded_and_loads() {
        let (_dir, storage) = storage();
        let bank = storage.load(DEFAULT_BANK).unwrap();
        assert!(!bank.records.is_empty());
        assert_eq!(bank.name, DEFAULT_BANK);
    }

    #[test]
    fn list_puts_default_first_and_sorts_the_rest() {
        let (_dir, storage) = storage();
        storage.save("Zulu Paper", GOOD_BANK).unwrap();
        storage.save("Alpha Paper", GOOD_BANK).unwrap();
        assert_eq!(
            storage.list(),
            vec![
                DEFAULT_BANK.to_string(),
                "Alpha Paper".to_string(),
                "Zulu Paper".to_string()
            ]
        );
    }

    #[test]
    fn saved_bank_round_trips() {
        let (_dir, storage) = storage();
        storage.save("Paper 11", GOOD_BANK).unwrap();
        let bank = storage.load("Paper 11").unwrap();
        assert_eq!(bank.records.len(), 2);
        assert_eq!(bank.records[0].correct_answer_raw, "Mercury");
        assert_eq!(bank.records[0].question.hindi, None);
    }

    #[test]
    fn missing_required_column_is_rejected_at_save_and_load() {
        let (dir, storage) = storage();
        let no_correct = "\
Question (English),Option A (English),Option B (English),Option C (English),Option D (English)
Closest planet?,Venus,Mars,Mercury,Jupiter
";
        assert!(matches!(
            storage.save("Broken", no_correct),
            Err(StorageError::Malformed { .. })
        ));
        // A file written behind the storage's back still fails at load.
        fs::write(dir.path().join("Sneaky.csv"), no_correct).unwrap();
        assert!(matches!(
            storage.load("Sneaky"),
            Err(StorageError::Malformed { .. })
        ));
    }

    #[test]
    fn empty_bank_is_malformed() {
        let (_dir, storage) = storage();
        let header_only = "Question (English),Question (Hindi),Option A (English),Option B (English),Option C (English),Option D (English),Correct Answer (English)\n";
        assert!(matches!(
            storage.save("Empty", header_only),
            Err(StorageError::Malformed { .. })
        ));
    }

    #[test]
    fn hindi_columns_are_optional() {
        let (_dir, storage) = storage();
        let english_only = "\
Question (English),Option A (English),Option B (English),Option C (English),Option D (English),Correct Answer (English)
Closest planet?,Venus,Mars,Mercury,Jupiter,C
";
        storage.save("English Only", english_only).unwrap();
        let bank = storage.load("English Only").unwrap();
        assert_eq!(bank.records[0].question.hindi, None);
        assert_eq!(bank.records[0].options[0].hindi, None);
    }

    #[test]
    fn missing_bank_is_not_found() {
        let (_dir, storage) = storage();
        assert!(matches!(
            storage.load("Nowhere"),
            Err(StorageError::NotFound(_))
        ));
        assert!(matches!(
            storage.delete("Nowhere"),
            Err(StorageError::NotFound(_))
        ));
    }

    #[test]
    fn default_bank_cannot_be_deleted() {
        let (_dir, storage) = storage();
        assert!(matches!(
            storage.delete(DEFAULT_BANK),
            Err(StorageError::Protected(_))
        ));
        // No side effect: the default still lists and loads.
        assert_eq!(storage.list()[0], DEFAULT_BANK);
        assert!(storage.load(DEFAULT_BANK).is_ok());
    }

    #[test]
    fn deleting_a_custom_bank_removes_it_from_list() {
        let (_dir, storage) = storage();
        storage.save("Paper 12", GOOD_BANK).unwrap();
        assert!(storage.list().contains(&"Paper 12".to_string()));
        storage.delete("Paper 12").unwrap();
        assert!(!storage.list().contains(&"Paper 12".to_string()));
    }

    #[test]
    fn unusable_names_are_rejected() {
        let (_dir, storage) = storage();
        assert!(matches!(
            storage.save("  ", GOOD_BANK),
            Err(StorageError::InvalidName(_))
        ));
        assert!(matches!(
            storage.save("../escape", GOOD_BANK),
            Err(StorageError::InvalidName(_))
        ));
    }
}
