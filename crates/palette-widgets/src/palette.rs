#![forbid(unsafe_code)]

//! Shared machinery of the icon palettes.
//!
//! [`PaletteCore`] owns everything a palette keeps between ticks: the grid
//! policy, the row window, the change detector, the hotkey slots, and the
//! icon map of the current page. The concrete palettes supply the ordered
//! entry list on rebuild and decide what a click means.
//!
//! # Rebuild pipeline
//!
//! 1. [`PaletteCore::observe`] compares the domain fingerprint to the last
//!    one; an unchanged fingerprint ends the tick.
//! 2. [`PaletteCore::rebuild`] stores the full ordered entry list.
//! 3. The page selected by the row window is placed on the grid, hotkey slot
//!    `i` is attached to display position `i`, the container is resized, and
//!    the event bounds are recomputed.
//! 4. If the number of displayed icons changed, `icon_count_changed` fires.
//!
//! Scrolling re-runs step 3 against the stored entry list.

use crate::change_detector::ChangeDetector;
use crate::config::PaletteConfig;
use crate::domain::{Fingerprint, IconArt};
use crate::hotkeys::HotkeyBinder;
use crate::icon::{Icon, IconMap};
use crate::mouse::MouseResult;
use palette_core::event::{KeyEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind};
use palette_core::geometry::{Point, Rect};
use palette_core::keybinding::HotkeyRegistry;
use palette_layout::{IconGrid, RowWindow};
use palette_runtime::{ClickSounds, Notifier, Subscription, UiContext};
use std::cell::Cell;
use std::rc::Rc;

/// Fired when the number of displayed icons changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconCountChanged {
    pub old: usize,
    pub new: usize,
}

/// One entry of the full, ordered icon list.
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteEntry<T> {
    pub class: String,
    pub item: T,
    pub art: IconArt,
    pub count: usize,
}

/// Outcome of hit-testing a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PointerRoute {
    /// Fully handled; nothing left for the palette to decide.
    Done(MouseResult),
    /// A button went down over icon `index`.
    Press {
        index: usize,
        button: MouseButton,
        modifiers: Modifiers,
    },
}

/// State and behavior shared by every icon palette.
#[derive(Debug)]
pub struct PaletteCore<T> {
    grid: IconGrid,
    window: RowWindow,
    detector: ChangeDetector,
    binder: HotkeyBinder,
    entries: Vec<PaletteEntry<T>>,
    icons: IconMap<T>,
    bounds: Rect,
    anchor: Rc<Cell<Point>>,
    tooltip_icon: Option<Icon<T>>,
    icon_count_changed: Notifier<IconCountChanged>,
    sounds: ClickSounds,
    sprite_offset: Point,
    icon_scale: f32,
    count_offset: Point,
    tooltip_container: Option<String>,
    tooltip_template: String,
    visible: bool,
}

impl<T: Clone> PaletteCore<T> {
    /// Build an empty palette occupying `bounds`. The width is replaced by
    /// the grid width; the anchor is the grid's corner of the result.
    #[must_use]
    pub fn new(config: &PaletteConfig, registry: &HotkeyRegistry, bounds: Rect) -> Self {
        let grid = config.grid();
        let bounds = Rect::new(bounds.x, bounds.y, grid.width(), bounds.height);
        let anchor = grid.anchor_of(bounds);
        Self {
            window: RowWindow::new(grid.columns(), config.max_icon_row_offset()),
            grid,
            detector: ChangeDetector::new(),
            binder: HotkeyBinder::new(
                registry,
                config.hotkey_prefix.as_deref(),
                config.hotkey_count,
            ),
            entries: Vec::new(),
            icons: IconMap::default(),
            bounds,
            anchor: Rc::new(Cell::new(anchor)),
            tooltip_icon: None,
            icon_count_changed: Notifier::new(),
            sounds: config.sounds(),
            sprite_offset: config.icon_sprite_offset,
            icon_scale: config.icon_scale,
            count_offset: config.count_offset,
            tooltip_container: config.tooltip_container.clone(),
            tooltip_template: config.tooltip_template.clone(),
            visible: true,
        }
    }

    /// Whether the domain changed since the last rebuild. A `true` answer
    /// records `current` as seen.
    pub fn observe(&mut self, current: Fingerprint, forced: bool) -> bool {
        self.detector.observe(current, forced)
    }

    /// Replace the full entry list and lay out the current page.
    pub fn rebuild(&mut self, entries: Vec<PaletteEntry<T>>) {
        self.entries = entries;
        self.layout_page();
    }

    fn layout_page(&mut self) {
        let _span = tracing::debug_span!(
            "palette_rebuild",
            total = self.entries.len(),
            offset = self.window.offset()
        )
        .entered();

        let old_count = self.icons.len();
        if self.window.set_total_items(self.entries.len()) {
            tracing::debug!(offset = self.window.offset(), "row offset clamped");
        }

        let anchor = self.anchor.get();
        let range = self.window.visible_range();
        let icons = self.entries[range]
            .iter()
            .enumerate()
            .map(|(i, entry)| Icon {
                class: entry.class.clone(),
                item: entry.item.clone(),
                hotkey: self.binder.slot_for(i),
                art: entry.art.clone(),
                count: entry.count,
                rect: self.grid.rect_for(i, anchor),
            })
            .collect();
        self.icons = IconMap::new(icons);

        let displayed = self.icons.len();
        self.bounds = self
            .grid
            .resize_bounds(self.bounds, self.grid.rows_for(displayed));

        tracing::debug!(
            total = self.entries.len(),
            displayed,
            offset = self.window.offset(),
            "palette icons rebuilt"
        );

        if old_count != displayed {
            self.icon_count_changed.emit(&IconCountChanged {
                old: old_count,
                new: displayed,
            });
        }
    }

    /// Scroll one row up and re-page. No-op at the top.
    pub fn scroll_up(&mut self) -> bool {
        if !self.window.scroll_up() {
            return false;
        }
        self.layout_page();
        true
    }

    /// Scroll one row down and re-page. No-op at the bottom.
    pub fn scroll_down(&mut self) -> bool {
        if !self.window.scroll_down() {
            return false;
        }
        self.layout_page();
        true
    }

    /// Return to the first row, re-paging if the offset moved.
    pub fn scroll_to_top(&mut self) {
        if self.window.offset() == 0 {
            return;
        }
        self.window.scroll_to_top();
        self.layout_page();
    }

    /// Change the page height. The offset is clamped and the page redone.
    pub fn set_max_icon_row_offset(&mut self, rows: usize) {
        self.window.set_max_visible_rows(rows);
        self.layout_page();
    }

    /// Move the anchor and re-place the current page.
    pub fn set_anchor(&mut self, anchor: Point) {
        self.anchor.set(anchor);
        self.layout_page();
    }

    /// Shared handle to the anchor, for layout code that repositions the
    /// palette from inside an `icon_count_changed` callback. Changes are
    /// picked up by the next layout.
    #[must_use]
    pub fn anchor_handle(&self) -> Rc<Cell<Point>> {
        Rc::clone(&self.anchor)
    }

    /// Subscribe to icon count changes.
    pub fn on_icon_count_changed(
        &self,
        callback: impl Fn(&IconCountChanged) + 'static,
    ) -> Subscription {
        self.icon_count_changed.subscribe(callback)
    }

    pub(crate) fn route_pointer(&mut self, event: &MouseEvent, ctx: &mut UiContext) -> PointerRoute {
        let Some(index) = self.icons.hit_test(event.position) else {
            if let MouseEventKind::Down(_) = event.kind {
                tracing::trace!(x = event.position.x, y = event.position.y, "palette click missed");
                ctx.play(&self.sounds.disabled);
                return PointerRoute::Done(MouseResult::Missed);
            }
            return PointerRoute::Done(MouseResult::Ignored);
        };

        match event.kind {
            MouseEventKind::Moved => {
                if self.tooltip_container.is_some() {
                    self.tooltip_icon = self.icons.get(index).cloned();
                }
                PointerRoute::Done(MouseResult::Hovered(index))
            }
            MouseEventKind::Down(button) => PointerRoute::Press {
                index,
                button,
                modifiers: event.modifiers,
            },
            MouseEventKind::Up(_) | MouseEventKind::Scroll(_) => {
                PointerRoute::Done(MouseResult::Consumed)
            }
        }
    }

    /// Icon activated by `event` and the batch modifiers to apply.
    ///
    /// Shift is stripped before matching so that a slot's hotkey plus shift
    /// reaches the same icon with the shift behavior.
    pub(crate) fn hotkey_target(&self, event: &KeyEvent) -> Option<(usize, Modifiers)> {
        let batch = event.modifiers & Modifiers::SHIFT;
        let stripped = event.without_shift();
        self.icons.hotkey_match(&stripped).map(|index| (index, batch))
    }

    /// Play the click cue for an icon press and turn it into a result.
    pub(crate) fn finish_press(
        &self,
        ctx: &mut UiContext,
        index: usize,
        handled: bool,
    ) -> MouseResult {
        ctx.click(&self.sounds, handled);
        if handled {
            MouseResult::Activated(index)
        } else {
            MouseResult::Rejected(index)
        }
    }

    /// Forget the tooltip target when the pointer leaves the palette.
    pub fn mouse_exited(&mut self) {
        if self.tooltip_container.is_some() {
            self.tooltip_icon = None;
        }
    }
}

impl<T> PaletteCore<T> {
    #[must_use]
    pub fn grid(&self) -> &IconGrid {
        &self.grid
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    #[must_use]
    pub fn icons(&self) -> &IconMap<T> {
        &self.icons
    }

    /// Container rectangle after the last layout.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Union of the icon rectangles; pointer events outside it never hit.
    #[must_use]
    pub fn event_bounds(&self) -> Rect {
        self.icons.event_bounds()
    }

    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor.get()
    }

    #[must_use]
    pub fn displayed_icon_count(&self) -> usize {
        self.icons.len()
    }

    /// Entries in the full list, displayed or not.
    #[must_use]
    pub fn total_icon_count(&self) -> usize {
        self.entries.len()
    }

    /// Rows the container is sized for.
    #[must_use]
    pub fn rows_count(&self) -> usize {
        self.grid.rows_for(self.icons.len())
    }

    #[must_use]
    pub fn icon_row_offset(&self) -> usize {
        self.window.offset()
    }

    #[must_use]
    pub fn max_icon_row_offset(&self) -> usize {
        self.window.max_visible_rows()
    }

    #[must_use]
    pub fn can_scroll_up(&self) -> bool {
        self.window.can_scroll_up()
    }

    #[must_use]
    pub fn can_scroll_down(&self) -> bool {
        self.window.can_scroll_down()
    }

    /// Scroll controls are shown only when the list does not fit one page.
    #[must_use]
    pub fn needs_scroll_buttons(&self) -> bool {
        self.window.is_paged()
    }

    /// Icon under the pointer. Always `None` without a tooltip container.
    #[must_use]
    pub fn tooltip_icon(&self) -> Option<&Icon<T>> {
        self.tooltip_icon.as_ref()
    }

    #[must_use]
    pub fn tooltip_container(&self) -> Option<&str> {
        self.tooltip_container.as_deref()
    }

    /// Template to instantiate in the tooltip container, if there is one.
    #[must_use]
    pub fn tooltip_template(&self) -> Option<&str> {
        self.tooltip_container
            .as_ref()
            .map(|_| self.tooltip_template.as_str())
    }

    #[must_use]
    pub fn sounds(&self) -> &ClickSounds {
        &self.sounds
    }

    #[must_use]
    pub fn hotkey_count(&self) -> usize {
        self.binder.count()
    }

    /// Where the sprite of an icon at `position` is centered.
    #[must_use]
    pub fn sprite_center(&self, position: Point) -> Point {
        let icon = self.grid.icon();
        position + Point::new(icon.width / 2, icon.height / 2) + self.sprite_offset
    }

    /// Scale applied to icon sprites when drawn.
    #[must_use]
    pub fn icon_scale(&self) -> f32 {
        self.icon_scale
    }

    /// Where the count overlay of an icon at `position` is drawn.
    #[must_use]
    pub fn count_position(&self, position: Point) -> Point {
        position + self.count_offset
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Whether a rebuild has ever happened.
    #[must_use]
    pub fn has_built(&self) -> bool {
        self.detector.last().is_some()
    }

    /// Fingerprint of the last rebuild.
    #[must_use]
    pub fn last_fingerprint(&self) -> Option<Fingerprint> {
        self.detector.last()
    }
}
