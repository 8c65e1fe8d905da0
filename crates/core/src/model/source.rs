use thiserror::Error;
use url::Url;

//
// ─── ERRORS (domain validation) ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("Image source cannot be empty.")]
    Empty,

    #[error("Image source must end in .png or start with http, got {0:?}.")]
    UnsupportedSource(String),

    #[error("Image source is not a valid URL: {0:?}.")]
    InvalidUrl(String),
}

//
// ─── DROPPED IMAGE SOURCES ─────────────────────────────────────────────────────
//

/// The URL behind a dropped image, validated before any fetch.
///
/// Accepted shapes match what the drop surface hands over: a `.png`
/// resource or anything already carrying an `http` scheme prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSource(Url);

impl ImageSource {
    /// # Errors
    ///
    /// Returns `SourceError` if the raw text is empty, has an unsupported
    /// shape, or does not parse as a URL.
    pub fn parse(raw: &str) -> Result<Self, SourceError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SourceError::Empty);
        }
        if !trimmed.ends_with(".png") && !trimmed.starts_with("http") {
            return Err(SourceError::UnsupportedSource(trimmed.to_string()));
        }

        let url =
            Url::parse(trimmed).map_err(|_| SourceError::InvalidUrl(trimmed.to_string()))?;
        Ok(Self(url))
    }

    #[must_use]
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_png_and_http_sources() {
        assert!(ImageSource::parse("https://example.com/q/1.png").is_ok());
        assert!(ImageSource::parse("http://example.com/attachment?id=3").is_ok());
    }

    #[test]
    fn rejects_other_shapes() {
        assert_eq!(
            ImageSource::parse("ftp://example.com/q.jpg").unwrap_err(),
            SourceError::UnsupportedSource("ftp://example.com/q.jpg".into())
        );
        assert_eq!(ImageSource::parse("   ").unwrap_err(), SourceError::Empty);
    }

    #[test]
    fn rejects_unparsable_urls() {
        assert_eq!(
            ImageSource::parse("question.png").unwrap_err(),
            SourceError::InvalidUrl("question.png".into())
        );
    }
}
