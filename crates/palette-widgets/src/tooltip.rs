#![forbid(unsafe_code)]

//! Tooltip for the icon under the pointer: the item's display name followed
//! by its slot hotkey in parentheses.

use crate::domain::{SelectionItem, TextMeasure};
use crate::icon::Icon;
use palette_core::keybinding::Hotkey;

/// Measured tooltip contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipLayout {
    pub name: String,
    /// `"(Ctrl+1)"`, or `None` when the slot has no bound hotkey.
    pub hotkey_text: Option<String>,
    pub hotkey_x: i32,
    pub width: i32,
}

/// Tooltip model, recomputed only when the hovered kind or its hotkey
/// changes.
#[derive(Debug, Clone, Default)]
pub struct SelectionTooltip {
    /// X of the name label; also used as the padding unit.
    name_x: i32,
    cached: Option<(String, Option<Hotkey>)>,
    layout: Option<TooltipLayout>,
}

impl SelectionTooltip {
    #[must_use]
    pub fn new(name_x: i32) -> Self {
        Self {
            name_x,
            ..Self::default()
        }
    }

    /// Current layout, if an icon has been shown.
    #[must_use]
    pub fn layout(&self) -> Option<&TooltipLayout> {
        self.layout.as_ref()
    }

    /// Visible iff there is a hovered icon.
    #[must_use]
    pub fn is_visible<I>(icon: Option<&Icon<I>>) -> bool {
        icon.is_some()
    }

    /// Refresh for the hovered `icon`. Returns the layout to draw, or
    /// `None` when nothing is hovered.
    pub fn update<I: SelectionItem>(
        &mut self,
        icon: Option<&Icon<I>>,
        measure: &dyn TextMeasure,
    ) -> Option<&TooltipLayout> {
        let icon = icon?;
        let hotkey = icon.hotkey.as_ref().and_then(|h| h.value());
        let kind = icon.item.kind();
        let unchanged = self
            .cached
            .as_ref()
            .is_some_and(|(k, h)| k == kind && *h == hotkey);
        if !unchanged {
            self.layout = Some(self.measure(&icon.item, hotkey, measure));
            self.cached = Some((kind.to_string(), hotkey));
        }
        self.layout.as_ref()
    }

    fn measure<I: SelectionItem>(
        &self,
        item: &I,
        hotkey: Option<Hotkey>,
        measure: &dyn TextMeasure,
    ) -> TooltipLayout {
        let name = item.display_name();
        let name_width = measure.measure(&name).width;
        let (hotkey_text, hotkey_x, hotkey_width) = match hotkey {
            Some(hk) => {
                let text = format!("({hk})");
                let width = measure.measure(&text).width + 2 * self.name_x;
                (Some(text), name_width + 2 * self.name_x, width)
            }
            None => (None, 0, self.name_x),
        };
        tracing::trace!(name = %name, ?hotkey, "tooltip measured");
        TooltipLayout {
            width: name_width + hotkey_width + self.name_x,
            name,
            hotkey_text,
            hotkey_x,
        }
    }
}
