use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::answer::{self, Answer};
use crate::model::{QuestionBank, QuestionRecord};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SampleError {
    #[error("requested {requested} questions but the bank has {available}")]
    InvalidCount { requested: usize, available: usize },
}

/// Draws `count` records uniformly without replacement, in randomized order.
///
/// Each drawn record's `correct_answer_raw` is replaced by its normalized
/// letter for this session's copy; unresolved strings are kept as-is and the
/// stored bank is never touched. The caller supplies the random source so
/// tests can seed it; production passes `rand::rng()`.
pub fn sample<R: Rng + ?Sized>(
    bank: &QuestionBank,
    count: usize,
    rng: &mut R,
) -> Result<Vec<QuestionRecord>, SampleError> {
    if count < 1 || count > bank.records.len() {
        return Err(SampleError::InvalidCount {
            requested: count,
            available: bank.records.len(),
        });
    }

    let mut drawn = bank.records.clone();
    drawn.shuffle(rng);
    drawn.truncate(count);

    for record in &mut drawn {
        if let Some(Answer::Letter(letter)) =
            answer::normalize(record, Some(record.correct_answer_raw.as_str()))
        {
            record.correct_answer_raw = letter.as_str().to_string();
        }
    }

    Ok(drawn)
}
