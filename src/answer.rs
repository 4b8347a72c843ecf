use crate::model::{OptionLetter, QuestionRecord};

/// A recorded or stored answer after normalization. `Unresolved` keeps the
/// raw string verbatim: it is displayed as-is and never equals a letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Letter(OptionLetter),
    Unresolved(String),
}

impl Answer {
    pub fn letter(&self) -> Option<OptionLetter> {
        match self {
            Answer::Letter(l) => Some(*l),
            Answer::Unresolved(_) => None,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Answer::Letter(l) => l.as_str().to_string(),
            Answer::Unresolved(raw) => raw.clone(),
        }
    }
}

/// Maps a raw answer (bare letter or literal English option text) onto an
/// option letter for one record.
///
/// Precedence: letter match first, then option text compared trimmed against
/// each option's English text in A→D order. No match returns the raw string
/// unchanged — callers score it as incorrect and display it verbatim.
///
/// Pure; called fresh each time, the result is never cached on the record.
pub fn normalize(record: &QuestionRecord, raw: Option<&str>) -> Option<Answer> {
    let raw = raw?;
    if let Some(letter) = OptionLetter::parse(raw) {
        return Some(Answer::Letter(letter));
    }
    let trimmed = raw.trim();
    for letter in OptionLetter::ALL {
        if record.option(letter).english.trim() == trimmed {
            return Some(Answer::Letter(letter));
        }
    }
    Some(Answer::Unresolved(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BilingualText;

    fn record() -> QuestionRecord {
        QuestionRecord {
            question: BilingualText::new("Closest planet to the sun?"),
            options: [
                BilingualText::new("Venus"),
                BilingualText::new("Mars"),
                BilingualText::new("Mercury"),
                BilingualText::new("Jupiter"),
            ],
            correct_answer_raw: "Mercury".to_string(),
        }
    }

    #[test]
    fn none_stays_unanswered() {
        assert_eq!(normalize(&record(), None), None);
    }

    #[test]
    fn bare_letter_passes_through() {
        assert_eq!(
            normalize(&record(), Some(" B ")),
            Some(Answer::Letter(OptionLetter::B))
        );
    }

    #[test]
    fn option_text_maps_to_its_letter() {
        assert_eq!(
            normalize(&record(), Some("Mercury")),
            Some(Answer::Letter(OptionLetter::C))
        );
        assert_eq!(
            normalize(&record(), Some("  Venus  ")),
            Some(Answer::Letter(OptionLetter::A))
        );
    }

    #[test]
    fn duplicate_option_text_resolves_to_first_in_scan_order() {
        let mut r = record();
        r.options[3] = BilingualText::new("Venus");
        assert_eq!(
            normalize(&r, Some("Venus")),
            Some(Answer::Letter(OptionLetter::A))
        );
    }

    #[test]
    fn unmatched_text_is_returned_verbatim() {
        assert_eq!(
            normalize(&record(), Some("Pluto")),
            Some(Answer::Unresolved("Pluto".to_string()))
        );
    }

    #[test]
    fn normalize_is_idempotent_on_letters() {
        let r = record();
        let first = normalize(&r, Some("Mercury")).unwrap();
        let relabel = first.label();
        let again = normalize(&r, Some(relabel.as_str())).unwrap();
        assert_eq!(first, again);
    }
}
