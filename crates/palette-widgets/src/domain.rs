#![forbid(unsafe_code)]

//! Interfaces to the game-side data the palettes display and mutate.
//!
//! Palettes never store a domain object. Every tick and every input call
//! receives the domain by reference, so a palette cannot observe anything
//! stale across ticks: it compares a [`Fingerprint`] to decide whether to
//! rebuild, and it re-reads the live domain whenever it mutates it.

use palette_core::geometry::Size;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

/// Owner of a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(pub u32);

/// Opaque summary of domain membership. Equal fingerprints mean "nothing a
/// palette cares about has changed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Fingerprint(pub u64);

impl Fingerprint {
    /// Fingerprint of any hashable value.
    #[must_use]
    pub fn of<T: Hash + ?Sized>(value: &T) -> Self {
        let mut h = FxHasher::default();
        value.hash(&mut h);
        Self(h.finish())
    }

    /// Order-sensitive combination of two fingerprints.
    #[must_use]
    pub fn combine(self, other: Fingerprint) -> Self {
        Self::of(&(self.0, other.0))
    }
}

/// Render handle for an icon: a sprite sequence (if the item has one) and
/// the palette it is drawn with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct IconArt {
    pub sequence: Option<String>,
    pub palette: String,
}

impl IconArt {
    #[must_use]
    pub fn new(sequence: impl Into<String>, palette: impl Into<String>) -> Self {
        Self {
            sequence: Some(sequence.into()),
            palette: palette.into(),
        }
    }
}

/// A selectable unit.
pub trait SelectionItem: Clone + PartialEq {
    fn owner(&self) -> PlayerId;
    fn is_dead(&self) -> bool;
    fn is_in_world(&self) -> bool;
    /// Identity of the unit's type. Tooltips cache on it.
    fn kind(&self) -> &str;
    /// Human readable name shown in tooltips.
    fn display_name(&self) -> String {
        self.kind().to_string()
    }
    fn icon_art(&self) -> IconArt {
        IconArt::default()
    }
}

/// Maps an item to the name of its selection class.
pub trait Classifier<I> {
    fn class_of(&self, item: &I) -> String;
}

impl<I, F> Classifier<I> for F
where
    F: Fn(&I) -> String,
{
    fn class_of(&self, item: &I) -> String {
        self(item)
    }
}

/// The player's current unit selection.
///
/// Foreground items are the active selection. Background items were
/// demoted by subgroup cycling; they stay part of the combined selection
/// but are not shown in the palette.
pub trait SelectionDomain {
    type Item: SelectionItem;

    /// Foreground selection in selection order.
    fn items(&self) -> &[Self::Item];
    fn background_items(&self) -> &[Self::Item] {
        &[]
    }
    /// Changes whenever foreground membership changes.
    fn fingerprint(&self) -> Fingerprint;
    /// Changes only when the player edits the selection directly.
    fn manual_fingerprint(&self) -> Fingerprint {
        self.fingerprint()
    }
    fn local_player(&self) -> Option<PlayerId>;
    /// The player whose view is rendered (spectating); falls back to the
    /// local player when `None`.
    fn render_player(&self) -> Option<PlayerId> {
        None
    }
    fn contains(&self, item: &Self::Item) -> bool {
        self.items().contains(item)
    }

    /// Make `items` the whole foreground selection.
    fn replace(&mut self, items: Vec<Self::Item>);
    /// Drop `item` from the selection entirely.
    fn remove(&mut self, item: &Self::Item);
    /// Move `item` from the foreground to the background.
    fn demote(&mut self, item: &Self::Item);
    /// Add `item` to the foreground, taking it out of the background.
    fn add(&mut self, item: Self::Item);
}

/// Identifier of a production queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QueueId(pub u32);

/// An item a queue can currently build.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildableItem {
    pub name: String,
    pub art: IconArt,
}

impl BuildableItem {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            art: IconArt::default(),
        }
    }
}

/// One entry in a production queue.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueuedItem {
    pub name: String,
    pub done: bool,
}

/// A production queue.
pub trait ProductionQueue {
    fn id(&self) -> QueueId;
    /// Tab group this queue belongs to.
    fn group(&self) -> &str;
    fn is_enabled(&self) -> bool;
    fn buildable_items(&self) -> Vec<BuildableItem>;
    fn all_queued(&self) -> Vec<QueuedItem>;
    /// Changes whenever buildable or queued items change.
    fn fingerprint(&self) -> Fingerprint;

    /// Queue `count` more of `item`.
    fn start(&mut self, item: &str, count: u32);
    /// Cancel up to `count` entries of `item`.
    fn cancel(&mut self, item: &str, count: u32);
    /// Take a completed `item` off the queue for placement. Returns false if
    /// none is done.
    fn pick_up(&mut self, item: &str) -> bool;

    fn has_done_item(&self) -> bool {
        self.all_queued().iter().any(|q| q.done)
    }

    fn queued_count(&self, item: &str) -> usize {
        self.all_queued().iter().filter(|q| q.name == item).count()
    }
}

/// All production queues of the local player.
pub trait QueueProvider {
    type Queue: ProductionQueue;

    fn queues(&self) -> &[Self::Queue];
    fn queue_mut(&mut self, id: QueueId) -> Option<&mut Self::Queue>;

    fn queue(&self, id: QueueId) -> Option<&Self::Queue> {
        self.queues().iter().find(|q| q.id() == id)
    }
}

/// Pixel size of rendered text.
pub trait TextMeasure {
    fn measure(&self, text: &str) -> Size;
}

/// Fixed-advance measurement: every char is `advance` wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonospaceMeasure {
    pub advance: i32,
    pub line_height: i32,
}

impl TextMeasure for MonospaceMeasure {
    fn measure(&self, text: &str) -> Size {
        let chars = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
        Size::new(chars.saturating_mul(self.advance), self.line_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_deterministic() {
        assert_eq!(Fingerprint::of("abc"), Fingerprint::of("abc"));
        assert_ne!(Fingerprint::of("abc"), Fingerprint::of("abd"));
    }

    #[test]
    fn combine_is_order_sensitive() {
        let a = Fingerprint(1);
        let b = Fingerprint(2);
        assert_ne!(a.combine(b), b.combine(a));
        assert_eq!(a.combine(b), a.combine(b));
    }

    #[test]
    fn closures_classify() {
        let by_len = |s: &String| s.len().to_string();
        assert_eq!(by_len.class_of(&"four".to_string()), "4");
    }

    #[test]
    fn monospace_measure() {
        let m = MonospaceMeasure {
            advance: 6,
            line_height: 10,
        };
        assert_eq!(m.measure("Tank"), Size::new(24, 10));
        assert_eq!(m.measure(""), Size::new(0, 10));
    }
}
