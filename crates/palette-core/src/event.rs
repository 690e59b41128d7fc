#![forbid(unsafe_code)]

//! Canonical pointer and keyboard events consumed by the palette widgets.

use crate::geometry::Point;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Keyboard modifier state attached to an input event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL  = 0b0010;
        const ALT   = 0b0100;
        const META  = 0b1000;
    }
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// What happened to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseEventKind {
    /// Button pressed.
    Down(MouseButton),
    /// Button released.
    Up(MouseButton),
    /// Pointer moved with no button change.
    Moved,
    /// Wheel scrolled. Positive values scroll toward the start of the content.
    Scroll(i32),
}

/// A pointer event in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub position: Point,
    pub modifiers: Modifiers,
}

impl MouseEvent {
    /// Create an event without modifiers.
    #[must_use]
    pub const fn new(kind: MouseEventKind, position: Point) -> Self {
        Self {
            kind,
            position,
            modifiers: Modifiers::empty(),
        }
    }

    /// Attach modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Shorthand for a button press at `position`.
    #[must_use]
    pub const fn down(button: MouseButton, position: Point) -> Self {
        Self::new(MouseEventKind::Down(button), position)
    }

    /// Shorthand for a button release at `position`.
    #[must_use]
    pub const fn up(button: MouseButton, position: Point) -> Self {
        Self::new(MouseEventKind::Up(button), position)
    }

    /// Shorthand for a pointer move to `position`.
    #[must_use]
    pub const fn moved(position: Point) -> Self {
        Self::new(MouseEventKind::Moved, position)
    }

    /// The button involved, if any.
    #[must_use]
    pub const fn button(&self) -> Option<MouseButton> {
        match self.kind {
            MouseEventKind::Down(b) | MouseEventKind::Up(b) => Some(b),
            MouseEventKind::Moved | MouseEventKind::Scroll(_) => None,
        }
    }
}

/// Physical key identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    Char(char),
    F(u8),
    Tab,
    Enter,
    Escape,
    Backspace,
    Up,
    Down,
    Left,
    Right,
}

impl std::fmt::Display for KeyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{}", c.to_ascii_uppercase()),
            Self::F(n) => write!(f, "F{n}"),
            Self::Tab => f.write_str("Tab"),
            Self::Enter => f.write_str("Enter"),
            Self::Escape => f.write_str("Escape"),
            Self::Backspace => f.write_str("Backspace"),
            Self::Up => f.write_str("Up"),
            Self::Down => f.write_str("Down"),
            Self::Left => f.write_str("Left"),
            Self::Right => f.write_str("Right"),
        }
    }
}

/// Key press phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyEventKind {
    #[default]
    Press,
    Repeat,
    Release,
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
    pub kind: KeyEventKind,
}

impl KeyEvent {
    /// A key press with no modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
            kind: KeyEventKind::Press,
        }
    }

    /// Attach modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the key phase.
    #[must_use]
    pub const fn with_kind(mut self, kind: KeyEventKind) -> Self {
        self.kind = kind;
        self
    }

    /// True for presses and auto-repeats.
    #[must_use]
    pub const fn is_down(&self) -> bool {
        !matches!(self.kind, KeyEventKind::Release)
    }

    /// Copy of this event with the shift modifier cleared.
    #[must_use]
    pub fn without_shift(mut self) -> Self {
        self.modifiers.remove(Modifiers::SHIFT);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn without_shift_keeps_other_modifiers() {
        let e = KeyEvent::new(KeyCode::F(1)).with_modifiers(Modifiers::SHIFT | Modifiers::CTRL);
        assert_eq!(e.without_shift().modifiers, Modifiers::CTRL);
    }

    #[test]
    fn release_is_not_down() {
        let e = KeyEvent::new(KeyCode::Char('a')).with_kind(KeyEventKind::Release);
        assert!(!e.is_down());
        assert!(KeyEvent::new(KeyCode::Char('a')).is_down());
    }

    #[test]
    fn mouse_button_accessor() {
        let p = Point::new(3, 4);
        assert_eq!(
            MouseEvent::down(MouseButton::Right, p).button(),
            Some(MouseButton::Right)
        );
        assert_eq!(MouseEvent::moved(p).button(), None);
    }
}
