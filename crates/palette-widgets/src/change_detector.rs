#![forbid(unsafe_code)]

//! Cheap "has the bound domain changed?" check.

use crate::domain::Fingerprint;

/// True iff a rebuild is needed: forced, never built, or the fingerprint
/// moved.
#[inline]
#[must_use]
pub fn should_rebuild(last: Option<Fingerprint>, current: Fingerprint, forced: bool) -> bool {
    forced || last != Some(current)
}

/// Remembers the fingerprint of the last rebuild.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChangeDetector {
    last: Option<Fingerprint>,
}

impl ChangeDetector {
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Decide whether to rebuild for `current`. When the answer is yes,
    /// `current` becomes the stored fingerprint.
    pub fn observe(&mut self, current: Fingerprint, forced: bool) -> bool {
        if !should_rebuild(self.last, current, forced) {
            return false;
        }
        self.last = Some(current);
        true
    }

    /// Fingerprint of the last rebuild, if any.
    #[must_use]
    pub fn last(&self) -> Option<Fingerprint> {
        self.last
    }
}
