#![forbid(unsafe_code)]

//! Sidebar that flips between the selection palette and the production
//! palette.
//!
//! One palette is active at a time. The production type buttons (one per
//! queue group) and the selection tab button switch between them, and the
//! per-frame [`SidebarTabs::tick`] switches automatically:
//!
//! - With nothing selected and no production icons on show, the first
//!   enabled production group is opened.
//! - When the player changes the selection by hand, the production palette
//!   is shown for a producing selection and the selection palette
//!   otherwise.
//!
//! The shared scroll buttons and the mirrored background rows always follow
//! the active palette.

use crate::config::SidebarConfig;
use crate::domain::{Fingerprint, ProductionQueue, QueueProvider, SelectionDomain, SelectionItem};
use crate::group::contributes_tab;
use crate::mirror_rows::MirrorRows;
use crate::mouse::MouseResult;
use crate::production_palette::ProductionPalette;
use crate::selection_palette::SelectionPalette;
use palette_core::event::{KeyEvent, MouseEvent};
use palette_layout::IconGrid;
use palette_runtime::{Subscription, UiContext};
use std::cell::{Cell, Ref, RefCell};
use std::fmt;
use std::rc::Rc;

/// Which palette the sidebar shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActivePalette {
    Selection,
    #[default]
    Production,
}

/// Draw state of a sidebar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    pub disabled: bool,
    pub highlighted: bool,
    /// Something is waiting for the player, such as a finished building.
    pub alerted: bool,
}

impl ButtonState {
    /// Image for a button whose plain image is `base`.
    #[must_use]
    pub fn image_name(&self, base: &str) -> String {
        if self.disabled {
            format!("{base}-disabled")
        } else if self.alerted {
            format!("{base}-alert")
        } else {
            base.to_string()
        }
    }
}

/// Visibility and enablement of the shared scroll buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollButtons {
    pub visible: bool,
    pub up_disabled: bool,
    pub down_disabled: bool,
}

/// The sidebar coordinator. Owns both palettes.
pub struct SidebarTabs<I> {
    selection: SelectionPalette<I>,
    production: ProductionPalette,
    groups: Vec<String>,
    active: Rc<Cell<ActivePalette>>,
    rows: Rc<RefCell<MirrorRows>>,
    manual_fingerprint: Option<Fingerprint>,
    _subscriptions: [Subscription; 2],
}

impl<I: fmt::Debug> fmt::Debug for SidebarTabs<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SidebarTabs")
            .field("selection", &self.selection)
            .field("production", &self.production)
            .field("groups", &self.groups)
            .field("active", &self.active.get())
            .field("manual_fingerprint", &self.manual_fingerprint)
            .finish_non_exhaustive()
    }
}

impl<I: SelectionItem> SidebarTabs<I> {
    /// Sidebar with one production type button per entry of `groups`, in
    /// order. The production palette starts active.
    pub fn new<G, S>(
        selection: SelectionPalette<I>,
        production: ProductionPalette,
        groups: G,
        rows: MirrorRows,
    ) -> Self
    where
        G: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let active = Rc::new(Cell::new(ActivePalette::default()));
        let rows = Rc::new(RefCell::new(rows));

        let shown = Rc::clone(&active);
        let selection_rows = MirrorRows::attach(&rows, selection.core(), move || {
            shown.get() == ActivePalette::Selection
        });
        let shown = Rc::clone(&active);
        let production_rows = MirrorRows::attach(&rows, production.core(), move || {
            shown.get() == ActivePalette::Production
        });

        let mut sidebar = Self {
            selection,
            production,
            groups: groups.into_iter().map(Into::into).collect(),
            active,
            rows,
            manual_fingerprint: None,
            _subscriptions: [selection_rows, production_rows],
        };
        sidebar.show(ActivePalette::Production);
        sidebar.update_rows(0);
        sidebar
    }

    #[must_use]
    pub fn selection(&self) -> &SelectionPalette<I> {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionPalette<I> {
        &mut self.selection
    }

    #[must_use]
    pub fn production(&self) -> &ProductionPalette {
        &self.production
    }

    pub fn production_mut(&mut self) -> &mut ProductionPalette {
        &mut self.production
    }

    #[must_use]
    pub fn active(&self) -> ActivePalette {
        self.active.get()
    }

    #[must_use]
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    #[must_use]
    pub fn rows(&self) -> Ref<'_, MirrorRows> {
        self.rows.borrow()
    }

    fn show(&mut self, palette: ActivePalette) {
        if self.active.get() != palette {
            tracing::debug!(?palette, "sidebar palette switched");
        }
        self.active.set(palette);
        self.selection
            .core_mut()
            .set_visible(palette == ActivePalette::Selection);
        self.production
            .core_mut()
            .set_visible(palette == ActivePalette::Production);
    }

    fn active_grid(&self) -> &IconGrid {
        match self.active.get() {
            ActivePalette::Selection => self.selection.core().grid(),
            ActivePalette::Production => self.production.core().grid(),
        }
    }

    fn update_rows(&self, icons: usize) {
        let rows = self.active_grid().rows_for(icons);
        self.rows.borrow_mut().sync(rows);
    }

    /// Open the production palette on the first enabled queue of `group`,
    /// scrolled to the top, and pick up a completed item if there is one.
    pub fn select_production_group<P: QueueProvider + ?Sized>(
        &mut self,
        group: &str,
        provider: &mut P,
    ) {
        self.show(ActivePalette::Production);
        let queue = provider
            .queues()
            .iter()
            .find(|q| q.group() == group && q.is_enabled())
            .map(ProductionQueue::id);
        self.production.set_current_queue(queue);
        self.production.core_mut().scroll_to_top();
        self.production.pick_up_completed(provider);
        self.update_rows(self.production.core().displayed_icon_count());
    }

    /// Open the selection palette, scrolled to the top.
    pub fn activate_selection_tab(&mut self) {
        self.show(ActivePalette::Selection);
        self.selection.core_mut().scroll_to_top();
        self.update_rows(self.selection.core().displayed_icon_count());
    }

    /// Button state of the production type button for `group`.
    #[must_use]
    pub fn type_button_state<P: QueueProvider + ?Sized>(
        &self,
        group: &str,
        provider: &P,
    ) -> ButtonState {
        let current = self.production.current_queue();
        let mut state = ButtonState {
            disabled: true,
            ..ButtonState::default()
        };
        for queue in provider.queues().iter().filter(|q| q.group() == group) {
            if contributes_tab(queue) {
                state.disabled = false;
            }
            if queue.has_done_item() {
                state.alerted = true;
            }
            if self.active.get() == ActivePalette::Production && current == Some(queue.id()) {
                state.highlighted = true;
            }
        }
        state
    }

    #[must_use]
    pub fn selection_tab_state<D>(&self, domain: &D) -> ButtonState
    where
        D: SelectionDomain<Item = I> + ?Sized,
    {
        ButtonState {
            disabled: !self.selection.has_selection(domain),
            highlighted: self.active.get() == ActivePalette::Selection,
            alerted: false,
        }
    }

    /// Scroll buttons for the active palette.
    #[must_use]
    pub fn scroll_buttons(&self) -> ScrollButtons {
        let (paged, up, down) = match self.active.get() {
            ActivePalette::Selection => {
                let core = self.selection.core();
                (core.needs_scroll_buttons(), core.can_scroll_up(), core.can_scroll_down())
            }
            ActivePalette::Production => {
                let core = self.production.core();
                (core.needs_scroll_buttons(), core.can_scroll_up(), core.can_scroll_down())
            }
        };
        ScrollButtons {
            visible: paged,
            up_disabled: !up,
            down_disabled: !down,
        }
    }

    pub fn scroll_up(&mut self) -> bool {
        match self.active.get() {
            ActivePalette::Selection => self.selection.core_mut().scroll_up(),
            ActivePalette::Production => self.production.core_mut().scroll_up(),
        }
    }

    pub fn scroll_down(&mut self) -> bool {
        match self.active.get() {
            ActivePalette::Selection => self.selection.core_mut().scroll_down(),
            ActivePalette::Production => self.production.core_mut().scroll_down(),
        }
    }

    /// Limit both palettes' page heights to what fits on a screen
    /// `screen_height` pixels tall.
    pub fn set_maximum_visible_rows(&mut self, config: &SidebarConfig, screen_height: i32) {
        let selection = self.selection.core().grid();
        let production = self.production.core().grid();
        let limits = (
            config.max_row_offset(screen_height, selection.icon().height, selection.maximum_rows()),
            config.max_row_offset(screen_height, production.icon().height, production.maximum_rows()),
        );
        if let (Some(selection), Some(production)) = limits {
            tracing::debug!(selection, production, screen_height, "sidebar page heights");
            self.selection.core_mut().set_max_icon_row_offset(selection);
            self.production.core_mut().set_max_icon_row_offset(production);
        }
    }

    /// Per-frame update of both palettes followed by the automatic tab
    /// switching.
    pub fn tick<D, P>(&mut self, domain: &D, provider: &mut P)
    where
        D: SelectionDomain<Item = I> + ?Sized,
        P: QueueProvider + ?Sized,
    {
        self.selection.tick(domain);
        self.production.tick(provider);

        let manual = domain.manual_fingerprint();
        let seen = *self.manual_fingerprint.get_or_insert(manual);

        let nothing_to_build = self.production.current_queue().is_none()
            || self.production.core().displayed_icon_count() == 0;
        if !self.selection.has_selection(domain) && nothing_to_build {
            let first_enabled = self
                .groups
                .iter()
                .find(|g| !self.type_button_state(g, &*provider).disabled)
                .cloned();
            if let Some(group) = first_enabled {
                self.select_production_group(&group, provider);
            }
        } else if seen != manual {
            self.manual_fingerprint = Some(manual);
            if self.selection.is_producer() {
                self.show(ActivePalette::Production);
                self.production.core_mut().scroll_to_top();
                self.update_rows(self.production.core().displayed_icon_count());
            } else {
                self.activate_selection_tab();
            }
        }
    }

    /// Route a pointer event to the active palette.
    pub fn handle_mouse<D, P>(
        &mut self,
        event: &MouseEvent,
        domain: &mut D,
        provider: &mut P,
        ctx: &mut UiContext,
    ) -> MouseResult
    where
        D: SelectionDomain<Item = I> + ?Sized,
        P: QueueProvider + ?Sized,
    {
        match self.active.get() {
            ActivePalette::Selection => self.selection.handle_mouse(event, domain, ctx),
            ActivePalette::Production => self.production.handle_mouse(event, provider, ctx),
        }
    }

    /// Route a key event to the active palette.
    pub fn handle_key<D, P>(
        &mut self,
        event: &KeyEvent,
        domain: &mut D,
        provider: &mut P,
        ctx: &mut UiContext,
    ) -> bool
    where
        D: SelectionDomain<Item = I> + ?Sized,
        P: QueueProvider + ?Sized,
    {
        match self.active.get() {
            ActivePalette::Selection => self.selection.handle_key(event, domain, ctx),
            ActivePalette::Production => self.production.handle_key(event, provider, ctx),
        }
    }
}
