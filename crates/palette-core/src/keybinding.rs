#![forbid(unsafe_code)]

//! Named hotkeys and the registry that resolves them.
//!
//! Widgets never store a concrete key combination. They hold a [`HotkeyRef`]
//! that resolves against the shared [`HotkeyRegistry`] at match time, so a
//! player rebinding a key takes effect on the next key event without any
//! widget rebuild.
//!
//! # Slot naming
//!
//! Palettes bind a fixed range of numbered hotkeys. Slot `i` (0-based) is
//! named `prefix + format!("{:02}", i + 1)`, so prefix `"Production"` with
//! three slots yields `Production01`, `Production02`, `Production03`.

use crate::event::{KeyCode, KeyEvent, Modifiers};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

/// A concrete key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hotkey {
    pub code: KeyCode,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl Hotkey {
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// Exact match on key and modifier set.
    #[must_use]
    pub fn is_activated_by(&self, event: &KeyEvent) -> bool {
        event.code == self.code && event.modifiers == self.modifiers
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.contains(Modifiers::CTRL) {
            f.write_str("Ctrl+")?;
        }
        if self.modifiers.contains(Modifiers::ALT) {
            f.write_str("Alt+")?;
        }
        if self.modifiers.contains(Modifiers::META) {
            f.write_str("Meta+")?;
        }
        if self.modifiers.contains(Modifiers::SHIFT) {
            f.write_str("Shift+")?;
        }
        write!(f, "{}", self.code)
    }
}

/// Shared table of named hotkeys.
///
/// Cloning produces another handle to the same table.
#[derive(Debug, Clone, Default)]
pub struct HotkeyRegistry {
    bindings: Rc<RefCell<HashMap<String, Option<Hotkey>>>>,
}

impl HotkeyRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind (or rebind) `name`. Passing `None` clears the binding but keeps
    /// the name registered.
    pub fn bind(&self, name: impl Into<String>, hotkey: Option<Hotkey>) {
        self.bindings.borrow_mut().insert(name.into(), hotkey);
    }

    /// Current value of `name`, if registered and bound.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Hotkey> {
        self.bindings.borrow().get(name).copied().flatten()
    }

    /// Whether `name` has been registered at all.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.borrow().contains_key(name)
    }

    /// A live reference to `name`. Unregistered names produce a reference
    /// that never matches until the name is bound.
    #[must_use]
    pub fn reference(&self, name: impl Into<String>) -> HotkeyRef {
        HotkeyRef {
            name: Rc::from(name.into()),
            registry: self.clone(),
        }
    }

    /// References for a numbered slot range.
    #[must_use]
    pub fn slot_references(&self, prefix: &str, count: usize) -> Vec<HotkeyRef> {
        hotkey_slot_names(prefix, count)
            .into_iter()
            .map(|name| self.reference(name))
            .collect()
    }
}

/// A named hotkey resolved on demand.
#[derive(Clone)]
pub struct HotkeyRef {
    name: Rc<str>,
    registry: HotkeyRegistry,
}

impl HotkeyRef {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The currently bound combination.
    #[must_use]
    pub fn value(&self) -> Option<Hotkey> {
        self.registry.get(&self.name)
    }

    #[must_use]
    pub fn is_activated_by(&self, event: &KeyEvent) -> bool {
        self.value().is_some_and(|hk| hk.is_activated_by(event))
    }
}

impl PartialEq for HotkeyRef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && Rc::ptr_eq(&self.registry.bindings, &other.registry.bindings)
    }
}

impl Eq for HotkeyRef {}

impl fmt::Debug for HotkeyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HotkeyRef")
            .field("name", &self.name)
            .field("value", &self.value())
            .finish()
    }
}

/// Compose the names of a numbered hotkey slot range.
#[must_use]
pub fn hotkey_slot_names(prefix: &str, count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("{prefix}{i:02}")).collect()
}

/// Result of statically checking a palette's hotkey configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotkeyLint {
    /// Every hotkey name the widget will look up.
    pub names: Vec<String>,
    /// Problems found; empty when the configuration is consistent.
    pub problems: Vec<String>,
}

/// Check a `(prefix, count)` pair the way the widget loader's lint pass does.
///
/// `location` identifies the widget in messages. A positive count without a
/// prefix is a problem; names are still produced (with an empty prefix) so
/// that downstream checks can continue.
#[must_use]
pub fn lint_hotkey_names(location: &str, prefix: Option<&str>, count: usize) -> HotkeyLint {
    if count == 0 {
        return HotkeyLint::default();
    }
    let mut problems = Vec::new();
    let prefix = match prefix {
        Some(p) if !p.is_empty() => p,
        _ => {
            problems.push(format!(
                "{location} must define HotkeyPrefix if HotkeyCount > 0."
            ));
            ""
        }
    };
    HotkeyLint {
        names: hotkey_slot_names(prefix, count),
        problems,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_names_are_two_digit() {
        assert_eq!(
            hotkey_slot_names("Select", 3),
            vec!["Select01", "Select02", "Select03"]
        );
        assert_eq!(hotkey_slot_names("P", 12)[11], "P12");
        assert!(hotkey_slot_names("P", 0).is_empty());
    }

    #[test]
    fn reference_tracks_rebinds() {
        let reg = HotkeyRegistry::new();
        let r = reg.reference("Select01");
        let f1 = KeyEvent::new(KeyCode::F(1));
        assert!(!r.is_activated_by(&f1));

        reg.bind("Select01", Some(Hotkey::new(KeyCode::F(1), Modifiers::empty())));
        assert!(r.is_activated_by(&f1));

        reg.bind("Select01", Some(Hotkey::new(KeyCode::F(2), Modifiers::empty())));
        assert!(!r.is_activated_by(&f1));
    }

    #[test]
    fn activation_requires_exact_modifiers() {
        let hk = Hotkey::new(KeyCode::Char('q'), Modifiers::CTRL);
        assert!(hk.is_activated_by(&KeyEvent::new(KeyCode::Char('q')).with_modifiers(Modifiers::CTRL)));
        assert!(!hk.is_activated_by(&KeyEvent::new(KeyCode::Char('q'))));
        assert!(!hk.is_activated_by(
            &KeyEvent::new(KeyCode::Char('q')).with_modifiers(Modifiers::CTRL | Modifiers::SHIFT)
        ));
    }

    #[test]
    fn display_format() {
        let hk = Hotkey::new(KeyCode::F(3), Modifiers::CTRL | Modifiers::SHIFT);
        assert_eq!(hk.to_string(), "Ctrl+Shift+F3");
        assert_eq!(Hotkey::new(KeyCode::Char('a'), Modifiers::empty()).to_string(), "A");
    }

    #[test]
    fn lint_flags_missing_prefix() {
        let lint = lint_hotkey_names("SELECTION_PALETTE", None, 2);
        assert_eq!(lint.names, vec!["01", "02"]);
        assert_eq!(lint.problems.len(), 1);
        assert!(lint.problems[0].contains("SELECTION_PALETTE"));

        let ok = lint_hotkey_names("X", Some("Sel"), 2);
        assert!(ok.problems.is_empty());

        let none = lint_hotkey_names("X", None, 0);
        assert!(none.names.is_empty() && none.problems.is_empty());
    }

    #[test]
    fn refs_compare_by_name_and_registry() {
        let a = HotkeyRegistry::new();
        let b = HotkeyRegistry::new();
        assert_eq!(a.reference("X"), a.reference("X"));
        assert_ne!(a.reference("X"), b.reference("X"));
        assert_ne!(a.reference("X"), a.reference("Y"));
    }
}
