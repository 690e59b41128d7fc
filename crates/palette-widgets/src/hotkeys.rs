#![forbid(unsafe_code)]

//! Binding of a numbered hotkey range to display positions.

use palette_core::keybinding::{HotkeyRef, HotkeyRegistry, lint_hotkey_names};

/// Fixed, ordered hotkey slots. Slot `i` belongs to display position `i`.
#[derive(Debug, Clone, Default)]
pub struct HotkeyBinder {
    slots: Vec<HotkeyRef>,
}

impl HotkeyBinder {
    /// Resolve `count` slots named from `prefix` against `registry`.
    ///
    /// A positive count with no prefix is reported through `tracing` and
    /// then bound with an empty prefix; the load-time lint pass is where
    /// that configuration is rejected.
    #[must_use]
    pub fn new(registry: &HotkeyRegistry, prefix: Option<&str>, count: usize) -> Self {
        let lint = lint_hotkey_names("palette", prefix, count);
        for problem in &lint.problems {
            tracing::warn!(problem = %problem, "hotkey configuration");
        }
        Self {
            slots: lint
                .names
                .into_iter()
                .map(|name| registry.reference(name))
                .collect(),
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.slots.len()
    }

    /// The slot for display position `index`, if it is within range.
    #[must_use]
    pub fn slot_for(&self, index: usize) -> Option<HotkeyRef> {
        self.slots.get(index).cloned()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(HotkeyRef::name)
    }
}
