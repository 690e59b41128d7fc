#![forbid(unsafe_code)]

//! Horizontal strip of production queue tabs between two scroll arrows.
//!
//! Queues are grouped by their tab group ("Infantry", "Vehicle", ...). The
//! strip shows the tabs of one group at a time; a queue has a visible tab
//! only while it can build something. Each tab is named by a per-group
//! counter, so the first infantry queue is "1", the second "2", and names
//! are never reused within a group.
//!
//! The current queue is owned by the [`ProductionPalette`]; the strip only
//! reads and writes it.
//!
//! ```text
//!  ┌──┬───┬───┬───┬───────┬──┐
//!  │◀ │ 1 │ 2 │ 3 │       │ ▶│
//!  └──┴───┴───┴───┴───────┴──┘
//!   arrow   tabs (1px overlap)  arrow
//! ```

use crate::config::TabStripConfig;
use crate::domain::{ProductionQueue, QueueId, QueueProvider, TextMeasure};
use crate::group::contributes_tab;
use crate::mouse::MouseResult;
use crate::production_palette::ProductionPalette;
use palette_core::event::{MouseButton, MouseEvent, MouseEventKind};
use palette_core::geometry::{Point, Rect};
use palette_layout::PixelScroll;
use palette_runtime::{ClickSounds, UiContext, WidgetId};
use rustc_hash::FxHashMap;

/// One queue's tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueTab {
    pub name: String,
    pub queue: QueueId,
}

/// The tabs of one queue group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabGroup {
    group: String,
    tabs: Vec<QueueTab>,
    next_queue_name: u32,
}

impl TabGroup {
    #[must_use]
    pub fn new(group: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            tabs: Vec::new(),
            next_queue_name: 1,
        }
    }

    #[must_use]
    pub fn group(&self) -> &str {
        &self.group
    }

    #[must_use]
    pub fn tabs(&self) -> &[QueueTab] {
        &self.tabs
    }

    /// Name the next new queue will get.
    #[must_use]
    pub fn next_queue_name(&self) -> u32 {
        self.next_queue_name
    }

    /// Add a tab for `queue` unless it already has one.
    pub fn add_queue(&mut self, queue: QueueId) -> &QueueTab {
        if let Some(pos) = self.tabs.iter().position(|t| t.queue == queue) {
            return &self.tabs[pos];
        }
        let name = self.next_queue_name.to_string();
        self.next_queue_name += 1;
        self.tabs.push(QueueTab { name, queue });
        &self.tabs[self.tabs.len() - 1]
    }

    pub fn remove_queue(&mut self, queue: QueueId) -> bool {
        let before = self.tabs.len();
        self.tabs.retain(|t| t.queue != queue);
        self.tabs.len() != before
    }
}

/// Draw state of a scroll arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrowState {
    pub rect: Rect,
    pub disabled: bool,
    pub pressed: bool,
    pub hovered: bool,
}

/// Draw state of one visible tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabLayout {
    pub rect: Rect,
    pub name: String,
    pub queue: QueueId,
    pub label_position: Point,
    pub highlighted: bool,
    pub hovered: bool,
    /// The queue has a completed item.
    pub alerted: bool,
}

/// Everything needed to draw the strip for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabStripLayout {
    pub left: ArrowState,
    pub right: ArrowState,
    /// Tabs are clipped to this rectangle.
    pub clip: Rect,
    pub tabs: Vec<TabLayout>,
}

/// The production tab strip.
#[derive(Debug)]
pub struct ControlGroupTabs {
    id: WidgetId,
    groups: FxHashMap<String, TabGroup>,
    queue_group: Option<String>,
    bounds: Rect,
    tab_width: i32,
    arrow_width: i32,
    scroll: PixelScroll,
    scroll_speed: Option<f32>,
    left_pressed: bool,
    right_pressed: bool,
    sounds: ClickSounds,
}

impl ControlGroupTabs {
    /// A strip with one (empty) tab group per name in `groups`.
    pub fn new<G, S>(id: WidgetId, config: &TabStripConfig, bounds: Rect, groups: G) -> Self
    where
        G: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let groups = groups
            .into_iter()
            .map(|g| {
                let g = g.into();
                (g.clone(), TabGroup::new(g))
            })
            .collect();
        Self {
            id,
            groups,
            queue_group: None,
            bounds,
            tab_width: config.tab_width,
            arrow_width: config.arrow_width,
            scroll: PixelScroll::new(bounds.width as f32, config.arrow_width as f32),
            scroll_speed: config.scroll_speed,
            left_pressed: false,
            right_pressed: false,
            sounds: config.sounds(),
        }
    }

    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    #[must_use]
    pub fn group(&self, name: &str) -> Option<&TabGroup> {
        self.groups.get(name)
    }

    #[must_use]
    pub fn queue_group(&self) -> Option<&str> {
        self.queue_group.as_deref()
    }

    #[must_use]
    pub fn list_offset(&self) -> f32 {
        self.scroll.offset()
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.scroll.set_viewport_width(bounds.width as f32);
    }

    /// Bring the tab groups in line with the provider: every queue gets a
    /// tab in its group, and tabs of vanished queues are dropped.
    pub fn sync_queues<P: QueueProvider + ?Sized>(&mut self, provider: &P) {
        for queue in provider.queues() {
            let group = queue.group();
            if !self.groups.contains_key(group) {
                self.groups.insert(group.to_string(), TabGroup::new(group));
            }
            if let Some(tabs) = self.groups.get_mut(group) {
                tabs.add_queue(queue.id());
            }
        }
        for TabGroup { group, tabs, .. } in self.groups.values_mut() {
            tabs.retain(|t| provider.queue(t.queue).is_some_and(|q| q.group() == group.as_str()));
        }
    }

    /// Show `group`, scrolled to the start, and select its next tab.
    pub fn set_queue_group<P: QueueProvider + ?Sized>(
        &mut self,
        group: Option<&str>,
        provider: &P,
        palette: &mut ProductionPalette,
    ) {
        self.scroll.reset();
        self.queue_group = group.map(str::to_string);
        self.select_next_tab(false, provider, palette);
    }

    /// Make `queue` current in the palette and show its group.
    pub fn set_current_queue<P: QueueProvider + ?Sized>(
        &mut self,
        queue: Option<QueueId>,
        provider: &P,
        palette: &mut ProductionPalette,
    ) {
        palette.set_current_queue(queue);
        self.queue_group = queue
            .and_then(|id| provider.queue(id))
            .map(|q| q.group().to_string());
    }

    /// Cycle to the tab after the current one, queues with a completed item
    /// first. Wraps to the first tab. Without a current group this does
    /// nothing and still reports success.
    pub fn select_next_tab<P: QueueProvider + ?Sized>(
        &mut self,
        reverse: bool,
        provider: &P,
        palette: &mut ProductionPalette,
    ) -> bool {
        let Some(tabs) = self.queue_group.as_ref().and_then(|g| self.groups.get(g)) else {
            return true;
        };

        let mut queues: Vec<QueueId> = tabs.tabs.iter().map(|t| t.queue).collect();
        queues.sort_by_key(|id| !provider.queue(*id).is_some_and(|q| q.has_done_item()));
        if reverse {
            queues.reverse();
        }

        let current = palette.current_queue();
        let next = queues
            .iter()
            .skip_while(|q| Some(**q) != current)
            .nth(1)
            .or_else(|| queues.first())
            .copied();

        tracing::debug!(?current, ?next, reverse, "select next production tab");
        self.set_current_queue(next, provider, palette);
        true
    }

    /// Pick up a completed item from the current queue.
    pub fn pick_up_completed<P: QueueProvider + ?Sized>(
        &self,
        provider: &mut P,
        palette: &mut ProductionPalette,
    ) -> bool {
        palette.pick_up_completed(provider)
    }

    #[must_use]
    pub fn left_arrow_rect(&self) -> Rect {
        Rect::new(self.bounds.x, self.bounds.y, self.arrow_width, self.bounds.height)
    }

    #[must_use]
    pub fn right_arrow_rect(&self) -> Rect {
        Rect::new(
            self.bounds.right() - self.arrow_width,
            self.bounds.y,
            self.arrow_width,
            self.bounds.height,
        )
    }

    #[must_use]
    pub fn can_scroll_left(&self) -> bool {
        self.scroll.can_scroll_start()
    }

    #[must_use]
    pub fn can_scroll_right(&self) -> bool {
        self.scroll.can_scroll_end()
    }

    fn visible_tabs<P: QueueProvider + ?Sized>(&self, provider: &P) -> Vec<QueueTab> {
        let Some(tabs) = self.queue_group.as_ref().and_then(|g| self.groups.get(g)) else {
            return Vec::new();
        };
        tabs.tabs
            .iter()
            .filter(|t| provider.queue(t.queue).is_some_and(|q| contributes_tab(q)))
            .cloned()
            .collect()
    }

    /// Tabs overlap by one pixel. At least one pixel per tab.
    fn tab_stride(&self) -> i32 {
        (self.tab_width - 1).max(1)
    }

    fn update_content_width(&mut self, visible: usize) {
        let count = i32::try_from(visible).unwrap_or(i32::MAX);
        self.scroll
            .set_content_width(count.saturating_mul(self.tab_stride()) as f32);
    }

    /// X of the first tab's left edge.
    fn tabs_origin(&self) -> Point {
        let left = self.left_arrow_rect();
        Point::new(left.right() - 1 + self.scroll.offset() as i32, left.y)
    }

    /// Compute the frame's draw state. `None` when no tab is visible.
    pub fn layout<P: QueueProvider + ?Sized>(
        &mut self,
        provider: &P,
        palette: &ProductionPalette,
        ctx: &UiContext,
        measure: &dyn TextMeasure,
    ) -> Option<TabStripLayout> {
        let visible = self.visible_tabs(provider);
        if visible.is_empty() {
            return None;
        }
        self.update_content_width(visible.len());

        let mouse = ctx.last_mouse_pos();
        let over = ctx.is_mouse_over(self.id);
        let left_rect = self.left_arrow_rect();
        let right_rect = self.right_arrow_rect();
        let left = ArrowState {
            rect: left_rect,
            disabled: !self.can_scroll_left(),
            pressed: self.left_pressed,
            hovered: over && left_rect.contains(mouse),
        };
        let right = ArrowState {
            rect: right_rect,
            disabled: !self.can_scroll_right(),
            pressed: self.right_pressed,
            hovered: over && right_rect.contains(mouse),
        };

        let origin = self.tabs_origin();
        let stride = self.tab_stride();
        let current = palette.current_queue();
        let tabs = visible
            .into_iter()
            .enumerate()
            .map(|(i, tab)| {
                let x = origin.x + i32::try_from(i).unwrap_or(i32::MAX).saturating_mul(stride);
                let rect = Rect::new(x, origin.y, self.tab_width, self.bounds.height);
                let text = measure.measure(&tab.name);
                TabLayout {
                    rect,
                    label_position: Point::new(
                        rect.x + (rect.width - text.width) / 2,
                        rect.y + (rect.height - text.height) / 2,
                    ),
                    highlighted: Some(tab.queue) == current,
                    hovered: !left.hovered && !right.hovered && over && rect.contains(mouse),
                    alerted: provider.queue(tab.queue).is_some_and(|q| q.has_done_item()),
                    name: tab.name,
                    queue: tab.queue,
                }
            })
            .collect();

        Some(TabStripLayout {
            left,
            right,
            clip: Rect::new(
                left_rect.right(),
                self.bounds.y + 1,
                right_rect.left() - left_rect.right() - 1,
                self.bounds.height,
            ),
            tabs,
        })
    }

    fn scroll_step(&mut self, direction: i32, ctx: &UiContext) {
        let speed = self.scroll_speed.unwrap_or_else(|| ctx.scroll_speed());
        self.scroll.scroll_by(direction as f32 * speed);
    }

    /// Per-frame update: a held arrow keeps scrolling.
    pub fn tick(&mut self, ctx: &UiContext) {
        if self.left_pressed {
            self.scroll_step(1, ctx);
        }
        if self.right_pressed {
            self.scroll_step(-1, ctx);
        }
    }

    /// Release pointer capture and both arrows.
    pub fn yield_mouse_focus(&mut self, ctx: &mut UiContext) -> bool {
        self.left_pressed = false;
        self.right_pressed = false;
        ctx.yield_mouse_focus(self.id)
    }

    pub fn handle_mouse<P: QueueProvider + ?Sized>(
        &mut self,
        event: &MouseEvent,
        provider: &P,
        palette: &mut ProductionPalette,
        ctx: &mut UiContext,
    ) -> MouseResult {
        if let MouseEventKind::Scroll(delta) = event.kind {
            self.scroll_step(delta, ctx);
            return MouseResult::Scrolled;
        }

        if event.button() != Some(MouseButton::Left) {
            return MouseResult::Consumed;
        }
        let down = matches!(event.kind, MouseEventKind::Down(_));
        if down && !ctx.take_mouse_focus(self.id) {
            return MouseResult::Consumed;
        }
        if !ctx.has_mouse_focus(self.id) {
            return MouseResult::Consumed;
        }
        if matches!(event.kind, MouseEventKind::Up(_)) {
            self.yield_mouse_focus(ctx);
            return MouseResult::Consumed;
        }

        let visible = self.visible_tabs(provider);
        self.update_content_width(visible.len());

        self.left_pressed = self.left_arrow_rect().contains(event.position);
        self.right_pressed = self.right_arrow_rect().contains(event.position);
        if self.left_pressed || self.right_pressed {
            let enabled = (self.left_pressed && self.can_scroll_left())
                || (self.right_pressed && self.can_scroll_right());
            ctx.click(&self.sounds, enabled);
            return MouseResult::Consumed;
        }

        let offset_x = event.position.x - self.tabs_origin().x;
        let content_width = self.scroll.content_width() as i32;
        if offset_x > 0 && offset_x < content_width {
            let index = usize::try_from(offset_x / self.tab_stride()).unwrap_or(0);
            if let Some(tab) = visible.get(index) {
                self.set_current_queue(Some(tab.queue), provider, palette);
                ctx.play(&self.sounds.enabled);
                return MouseResult::Activated(index);
            }
        }
        MouseResult::Consumed
    }
}
