#![forbid(unsafe_code)]

//! Placed icons and the rectangle-to-icon map used for hit testing.

use crate::domain::IconArt;
use palette_core::event::KeyEvent;
use palette_core::geometry::{Point, Rect};
use palette_core::keybinding::HotkeyRef;

/// One cell of a palette, created fresh on every rebuild.
#[derive(Debug, Clone, PartialEq)]
pub struct Icon<T> {
    /// Class (selection) or item name (production).
    pub class: String,
    /// Backing item: the class representative for selections.
    pub item: T,
    pub hotkey: Option<HotkeyRef>,
    pub art: IconArt,
    /// Items collapsed into this icon.
    pub count: usize,
    pub rect: Rect,
}

impl<T> Icon<T> {
    #[inline]
    #[must_use]
    pub fn position(&self) -> Point {
        self.rect.location()
    }

    /// Count overlay text; only drawn for stacks of two or more.
    #[must_use]
    pub fn count_label(&self) -> Option<String> {
        (self.count > 1).then(|| self.count.to_string())
    }
}

/// Icons of the current page in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct IconMap<T> {
    icons: Vec<Icon<T>>,
    event_bounds: Rect,
}

impl<T> Default for IconMap<T> {
    fn default() -> Self {
        Self {
            icons: Vec::new(),
            event_bounds: Rect::EMPTY,
        }
    }
}

impl<T> IconMap<T> {
    /// Build a map; event bounds are the union of all icon rectangles.
    #[must_use]
    pub fn new(icons: Vec<Icon<T>>) -> Self {
        let event_bounds = icons
            .iter()
            .fold(Rect::EMPTY, |acc, icon| acc.union(&icon.rect));
        Self {
            icons,
            event_bounds,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Icon<T>> {
        self.icons.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Icon<T>> {
        self.icons.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Icon<T>] {
        &self.icons
    }

    /// Union of the icon rectangles; [`Rect::EMPTY`] when there are none.
    #[must_use]
    pub fn event_bounds(&self) -> Rect {
        self.event_bounds
    }

    /// Display index of the first icon containing `point`.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        if !self.event_bounds.contains(point) {
            return None;
        }
        self.icons.iter().position(|icon| icon.rect.contains(point))
    }

    /// Display index of the first icon whose hotkey `event` activates.
    #[must_use]
    pub fn hotkey_match(&self, event: &KeyEvent) -> Option<usize> {
        self.icons.iter().position(|icon| {
            icon.hotkey
                .as_ref()
                .is_some_and(|hk| hk.is_activated_by(event))
        })
    }
}

impl<'a, T> IntoIterator for &'a IconMap<T> {
    type Item = &'a Icon<T>;
    type IntoIter = std::slice::Iter<'a, Icon<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.icons.iter()
    }
}
