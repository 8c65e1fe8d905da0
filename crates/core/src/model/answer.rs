use serde::{Deserialize, Serialize};

//
// ─── ANSWER VOCABULARY ─────────────────────────────────────────────────────────
//

const TRUE_ANSWER: &str = "Verdadero";
const FALSE_ANSWER: &str = "Falso";

/// Invert an answer within the fixed two-valued vocabulary.
///
/// `"Verdadero"` and `"Falso"` swap; any other value maps to the empty
/// string (unknown). The swap is an involution on the two known values.
#[must_use]
pub fn invert(answer: &str) -> String {
    match answer {
        TRUE_ANSWER => FALSE_ANSWER.to_string(),
        FALSE_ANSWER => TRUE_ANSWER.to_string(),
        _ => String::new(),
    }
}

//
// ─── ANSWER RECORDS ────────────────────────────────────────────────────────────
//

/// A curated answer as stored in the lookup tables. Read-only; never
/// written back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub answer: String,
    pub explanation: String,
}

impl AnswerRecord {
    #[must_use]
    pub fn new(answer: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            explanation: explanation.into(),
        }
    }
}

/// The result a resolution actually displayed, possibly a deliberate
/// inversion of the stored record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAnswer {
    pub answer: String,
    pub explanation: String,
}

impl ResolvedAnswer {
    /// The stored record, verbatim.
    #[must_use]
    pub fn truthful(record: &AnswerRecord) -> Self {
        Self {
            answer: record.answer.clone(),
            explanation: record.explanation.clone(),
        }
    }

    /// The inverted answer with the explanation withheld.
    #[must_use]
    pub fn inverted(record: &AnswerRecord) -> Self {
        Self {
            answer: invert(&record.answer),
            explanation: String::new(),
        }
    }
}

/// Outcome of an answer resolution. A miss is a normal outcome, not a
/// fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Answer(ResolvedAnswer),
    NotFound,
}

impl Resolution {
    #[must_use]
    pub fn as_answer(&self) -> Option<&ResolvedAnswer> {
        match self {
            Resolution::Answer(resolved) => Some(resolved),
            Resolution::NotFound => None,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Resolution::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inversion_swaps_the_two_valued_vocabulary() {
        assert_eq!(invert("Verdadero"), "Falso");
        assert_eq!(invert("Falso"), "Verdadero");
    }

    #[test]
    fn inversion_is_an_involution() {
        for answer in ["Verdadero", "Falso"] {
            assert_eq!(invert(&invert(answer)), answer);
        }
    }

    #[test]
    fn unknown_answers_invert_to_empty() {
        assert_eq!(invert("42"), "");
        assert_eq!(invert(""), "");
        assert_eq!(invert("verdadero"), "");
    }

    #[test]
    fn inverted_resolution_withholds_the_explanation() {
        let record = AnswerRecord::new("Verdadero", "because X");
        let resolved = ResolvedAnswer::inverted(&record);
        assert_eq!(resolved.answer, "Falso");
        assert_eq!(resolved.explanation, "");
    }
}
