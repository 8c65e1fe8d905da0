use std::collections::HashMap;
use std::sync::Arc;

use rand::rng;
use rand::Rng;

use algebruh_core::Fingerprint;
use algebruh_core::model::{PrivilegeMode, Resolution, ResolvedAnswer};
use storage::AnswerStore;

use crate::error::ResolveError;

/// Default odds of the deliberate wrong answer in normal mode: 1-in-8.
const DEFAULT_WRONG_ANSWER_ODDS: u32 = 8;

/// Maps fetched images to displayed answers for one window instance.
///
/// Holds the per-session resolution log: once a fingerprint has resolved,
/// the same displayed result replays for the rest of the session, so
/// re-dropping an image cannot re-roll a randomized wrong answer. Misses
/// are never logged; a record arriving in a later store build could still
/// resolve.
pub struct AnswerResolver {
    store: Arc<AnswerStore>,
    mode: PrivilegeMode,
    wrong_answer_odds: u32,
    log: HashMap<Fingerprint, ResolvedAnswer>,
}

impl AnswerResolver {
    #[must_use]
    pub fn new(store: Arc<AnswerStore>, mode: PrivilegeMode) -> Self {
        Self {
            store,
            mode,
            wrong_answer_odds: DEFAULT_WRONG_ANSWER_ODDS,
            log: HashMap::new(),
        }
    }

    /// Override the 1-in-N odds of the deliberate wrong answer in normal
    /// mode. `1` makes every first resolution wrong; values are clamped to
    /// at least 1.
    #[must_use]
    pub fn with_wrong_answer_odds(mut self, odds: u32) -> Self {
        self.wrong_answer_odds = odds.max(1);
        self
    }

    #[must_use]
    pub fn mode(&self) -> PrivilegeMode {
        self.mode
    }

    /// True when the fingerprint already has a logged (replayable) result.
    #[must_use]
    pub fn has_replay(&self, fingerprint: &Fingerprint) -> bool {
        self.log.contains_key(fingerprint)
    }

    /// Decode image bytes, fingerprint the pixel content, and resolve.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::Decode` if the bytes are not a decodable
    /// image.
    pub fn resolve_image(&mut self, bytes: &[u8]) -> Result<Resolution, ResolveError> {
        let pixels = image::load_from_memory(bytes)?.to_rgba8();
        let fingerprint =
            Fingerprint::of_image(pixels.width(), pixels.height(), pixels.as_raw());
        Ok(self.resolve(fingerprint))
    }

    /// Resolve a fingerprint against the store under the session's
    /// privilege mode.
    pub fn resolve(&mut self, fingerprint: Fingerprint) -> Resolution {
        if let Some(logged) = self.log.get(&fingerprint) {
            return Resolution::Answer(logged.clone());
        }

        let Some(record) = self.store.lookup_by_fingerprint(&fingerprint) else {
            // Deliberately not logged: a later store build may know it.
            return Resolution::NotFound;
        };

        let resolved = match self.mode {
            PrivilegeMode::Admin => ResolvedAnswer::truthful(record),
            PrivilegeMode::DecoyAdmin => ResolvedAnswer::inverted(record),
            PrivilegeMode::Normal => {
                if rng().random_range(0..self.wrong_answer_odds) == 0 {
                    ResolvedAnswer::inverted(record)
                } else {
                    ResolvedAnswer::truthful(record)
                }
            }
        };

        self.log.insert(fingerprint, resolved.clone());
        Resolution::Answer(resolved)
    }
}
