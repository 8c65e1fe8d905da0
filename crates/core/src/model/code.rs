use std::fmt;

use thiserror::Error;

//
// ─── ERRORS (domain validation) ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodeError {
    #[error("Attachment codes must contain between 1 and 3 characters, got {0}.")]
    Length(usize),

    #[error("Attachment codes must be numeric, got {0:?}.")]
    NotNumeric(String),
}

//
// ─── ATTACHMENT CODES ──────────────────────────────────────────────────────────
//

/// One of the three positional codes identifying a remote attachment.
///
/// Accepts anything that renders as a numeral of 1 to 3 characters, so both
/// integers and numeric strings validate. Malformed codes never reach the
/// network.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttachmentCode(String);

impl AttachmentCode {
    /// # Errors
    ///
    /// Returns `CodeError` if the rendered value is empty, longer than
    /// three characters, or contains a non-digit.
    pub fn new(raw: impl fmt::Display) -> Result<Self, CodeError> {
        let rendered = raw.to_string();

        if rendered.is_empty() || rendered.len() > 3 {
            return Err(CodeError::Length(rendered.len()));
        }
        if !rendered.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodeError::NotNumeric(rendered));
        }

        Ok(Self(rendered))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AttachmentCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_integers_and_numeric_strings() {
        assert_eq!(AttachmentCode::new(7).unwrap().as_str(), "7");
        assert_eq!(AttachmentCode::new("042").unwrap().as_str(), "042");
        assert_eq!(AttachmentCode::new(999).unwrap().as_str(), "999");
    }

    #[test]
    fn rejects_out_of_bounds_lengths() {
        assert_eq!(AttachmentCode::new("").unwrap_err(), CodeError::Length(0));
        assert_eq!(
            AttachmentCode::new(1000).unwrap_err(),
            CodeError::Length(4)
        );
    }

    #[test]
    fn rejects_non_numeric_values() {
        assert_eq!(
            AttachmentCode::new("1a").unwrap_err(),
            CodeError::NotNumeric("1a".into())
        );
        assert_eq!(
            AttachmentCode::new(-1).unwrap_err(),
            CodeError::NotNumeric("-1".into())
        );
    }
}
