use crate::answer::{self, Answer};
use crate::model::{OptionLetter, QuestionRecord};

#[derive(Debug, Clone, PartialEq)]
pub struct QuestionScore {
    pub user: Option<OptionLetter>,
    pub correct: Answer,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReport {
    pub correct_count: usize,
    pub total: usize,
    pub per_question: Vec<QuestionScore>,
}

impl ScoreReport {
    pub fn percentage(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        self.correct_count as f32 / self.total as f32 * 100.0
    }
}

/// Scores a sampled question set against its answer slots.
///
/// The stored correct answer is re-normalized here; normalization is
/// idempotent, so this is safe whether the caller holds sampled (already
/// lettered) or raw records. Unanswered questions count incorrect and stay
/// in the denominator. Pure: repeated calls give identical reports.
pub fn score(questions: &[QuestionRecord], answers: &[Option<OptionLetter>]) -> ScoreReport {
    let mut correct_count = 0;
    let per_question = questions
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let correct = answer::normalize(record, Some(record.correct_answer_raw.as_str()))
                .unwrap_or_else(|| Answer::Unresolved(record.correct_answer_raw.clone()));
            let user = answers.get(i).copied().flatten();
            let is_correct = match (user, &correct) {
                (Some(u), Answer::Letter(c)) => u == *c,
                _ => false,
            };
            if is_correct {
                correct_count += 1;
            }
            QuestionScore {
                user,
                correct,
                is_correct,
            }
        })
        .collect();

    ScoreReport {
        correct_count,
        total: questions.len(),
        per_question,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BilingualText;

    fn record(correct: &str) -> QuestionRecord {
        QuestionRecord {
            question: BilingualText::new("Closest planet to the sun?"),
            options: [
                BilingualText::new("Venus"),
                BilingualText::new("Mars"),
                BilingualText::new("Mercury"),
                BilingualText::new("Jupiter"),
            ],
            correct_answer_raw: correct.to_string(),
        }
    }

    #[test]
    fn mixed_letter_and_text_correct_answers() {
        // Correct answers "Mercury" (letter C) and "B"; user picks C then A.
        let questions = vec![record("Mercury"), record("B")];
        let answers = vec![Some(OptionLetter::C), Some(OptionLetter::A)];
        let report = score(&questions, &answers);
        assert_eq!(report.correct_count, 1);
        assert_eq!(report.total, 2);
        assert!(report.per_question[0].is_correct);
        assert!(!report.per_question[1].is_correct);
    }

    #[test]
    fn all_unanswered_scores_zero_with_full_denominator() {
        let questions = vec![record("A"), record("B"), record("C")];
        let report = score(&questions, &[None, None, None]);
        assert_eq!(report.correct_count, 0);
        assert_eq!(report.total, 3);
        assert!(report.per_question.iter().all(|q| !q.is_correct));
    }

    #[test]
    fn unresolvable_correct_answer_never_matches() {
        let questions = vec![record("Pluto")];
        let report = score(&questions, &[Some(OptionLetter::A)]);
        assert!(!report.per_question[0].is_correct);
        assert_eq!(
            report.per_question[0].correct,
            Answer::Unresolved("Pluto".to_string())
        );
    }

    #[test]
    fn scoring_is_idempotent() {
        let questions = vec![record("Mercury"), record("B")];
        let answers = vec![Some(OptionLetter::C), None];
        assert_eq!(score(&questions, &answers), score(&questions, &answers));
    }

    #[test]
    fn empty_set_has_zero_percentage() {
        let report = score(&[], &[]);
        assert_eq!(report.total, 0);
        assert_eq!(report.percentage(), 0.0);
    }

    #[test]
    fn percentage_reflects_correct_share() {
        let questions = vec![record("A"), record("B"), record("C"), record("D")];
        let answers = vec![
            Some(OptionLetter::A),
            Some(OptionLetter::B),
            Some(OptionLetter::A),
            None,
        ];
        let report = score(&questions, &answers);
        assert_eq!(report.correct_count, 2);
        assert_eq!(report.percentage(), 50.0);
    }
}
