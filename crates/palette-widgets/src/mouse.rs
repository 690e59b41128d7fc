#![forbid(unsafe_code)]

//! Shared mouse event result type for palette mouse handling.

/// Result of routing a pointer event through a palette or tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseResult {
    /// Not over anything this widget owns.
    Ignored,
    /// A press that hit no icon. The disabled cue was played.
    Missed,
    /// Over an icon or control but not a press; swallowed.
    Consumed,
    /// Pointer moved over icon `index`, which is now the tooltip target.
    Hovered(usize),
    /// A press on icon `index` mutated the domain.
    Activated(usize),
    /// A press on icon `index` had no effect. The disabled cue was played.
    Rejected(usize),
    /// Scroll position changed.
    Scrolled,
}

impl MouseResult {
    /// Whether the event should stop propagating to widgets underneath.
    #[must_use]
    pub const fn is_handled(self) -> bool {
        !matches!(self, Self::Ignored | Self::Missed)
    }
}
