use std::fmt;

use sha2::{Digest, Sha256};

/// Deterministic digest of image pixel content, used as a lookup key.
///
/// The digest covers the image dimensions followed by the flattened sample
/// sequence in order, so identical pixel content always yields the same key
/// across runs and platforms, and any differing sample changes the key.
/// SHA-256 is used for its stability, not as a security boundary: this is a
/// deduplication key, and nothing here defends against adversarial
/// collisions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Digest decoded pixel samples together with their dimensions.
    #[must_use]
    pub fn of_image(width: u32, height: u32, samples: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(width.to_be_bytes());
        hasher.update(height.to_be_bytes());
        hasher.update(samples);
        Self(hex::encode(hasher.finalize()))
    }

    /// Wrap a key as stored in the fingerprint table.
    #[must_use]
    pub fn from_key(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
