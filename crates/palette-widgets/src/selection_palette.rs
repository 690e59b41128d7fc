#![forbid(unsafe_code)]

//! Palette of the player's selected units, one icon per class.
//!
//! # Input
//!
//! | Gesture | Effect |
//! |---------|--------|
//! | Left click | Select only the clicked class |
//! | Shift + left click | Remove the clicked class from the selection |
//! | Right click | Remove the clicked class from the selection |
//! | Other buttons | Nothing; disabled cue |
//! | Slot hotkey | As a left click; holding shift removes |
//!
//! Clicks act on the live selection: the members of the clicked class are
//! re-read from the domain at click time, never from the last rebuild.

use crate::config::PaletteConfig;
use crate::domain::{Classifier, Fingerprint, SelectionDomain, SelectionItem};
use crate::group::{ClassGroups, class_members, valid_selection};
use crate::mouse::MouseResult;
use crate::palette::{PaletteCore, PaletteEntry, PointerRoute};
use palette_core::event::{KeyEvent, Modifiers, MouseButton, MouseEvent};
use palette_core::geometry::Rect;
use palette_core::keybinding::HotkeyRegistry;
use palette_runtime::UiContext;
use std::fmt;

/// Icon palette bound to a [`SelectionDomain`].
pub struct SelectionPalette<I> {
    core: PaletteCore<I>,
    classifier: Box<dyn Classifier<I>>,
    producer: bool,
}

impl<I: fmt::Debug> fmt::Debug for SelectionPalette<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionPalette")
            .field("core", &self.core)
            .field("producer", &self.producer)
            .finish_non_exhaustive()
    }
}

impl<I: SelectionItem> SelectionPalette<I> {
    #[must_use]
    pub fn new(
        config: &PaletteConfig,
        registry: &HotkeyRegistry,
        bounds: Rect,
        classifier: impl Classifier<I> + 'static,
    ) -> Self {
        Self {
            core: PaletteCore::new(config, registry, bounds),
            classifier: Box::new(classifier),
            producer: false,
        }
    }

    #[must_use]
    pub fn core(&self) -> &PaletteCore<I> {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut PaletteCore<I> {
        &mut self.core
    }

    #[must_use]
    pub fn classifier(&self) -> &dyn Classifier<I> {
        &*self.classifier
    }

    /// Per-frame update: rebuild if the selection changed.
    pub fn tick<D>(&mut self, domain: &D) -> bool
    where
        D: SelectionDomain<Item = I> + ?Sized,
    {
        self.refresh(domain, false)
    }

    /// Rebuild when the fingerprint moved or `forced` is set. Returns
    /// whether a rebuild happened.
    pub fn refresh<D>(&mut self, domain: &D, forced: bool) -> bool
    where
        D: SelectionDomain<Item = I> + ?Sized,
    {
        if !self.core.observe(domain.fingerprint(), forced) {
            return false;
        }
        let selected = valid_selection(domain);
        let groups = ClassGroups::build(&selected, &*self.classifier);
        let entries = groups
            .iter()
            .map(|group| {
                let representative = group.representative();
                PaletteEntry {
                    class: group.name().to_string(),
                    item: representative.clone(),
                    art: representative.icon_art(),
                    count: group.count(),
                }
            })
            .collect();
        self.core.rebuild(entries);
        true
    }

    /// Whether the live selection has anything this palette would show.
    /// Before the first rebuild this is optimistically true.
    #[must_use]
    pub fn has_selection<D>(&self, domain: &D) -> bool
    where
        D: SelectionDomain<Item = I> + ?Sized,
    {
        !self.core.has_built() || !valid_selection(domain).is_empty()
    }

    /// Fingerprint of the selection the icons were built from.
    #[must_use]
    pub fn selection_fingerprint(&self) -> Option<Fingerprint> {
        self.core.last_fingerprint()
    }

    /// Marks the current selection as a production structure, which makes
    /// the sidebar open the production palette on manual selection changes.
    pub fn set_producer(&mut self, producer: bool) {
        self.producer = producer;
    }

    #[must_use]
    pub fn is_producer(&self) -> bool {
        self.producer
    }

    pub fn handle_mouse<D>(
        &mut self,
        event: &MouseEvent,
        domain: &mut D,
        ctx: &mut UiContext,
    ) -> MouseResult
    where
        D: SelectionDomain<Item = I> + ?Sized,
    {
        match self.core.route_pointer(event, ctx) {
            PointerRoute::Done(result) => result,
            PointerRoute::Press {
                index,
                button,
                modifiers,
            } => self.activate(index, button, modifiers, domain, ctx),
        }
    }

    /// Hotkey activation. Only key presses count, and only while there is
    /// a selection.
    pub fn handle_key<D>(&mut self, event: &KeyEvent, domain: &mut D, ctx: &mut UiContext) -> bool
    where
        D: SelectionDomain<Item = I> + ?Sized,
    {
        if !event.is_down() || !self.has_selection(domain) {
            return false;
        }
        let Some((index, batch)) = self.core.hotkey_target(event) else {
            return false;
        };
        self.activate(index, MouseButton::Left, batch, domain, ctx);
        true
    }

    fn activate<D>(
        &mut self,
        index: usize,
        button: MouseButton,
        modifiers: Modifiers,
        domain: &mut D,
        ctx: &mut UiContext,
    ) -> MouseResult
    where
        D: SelectionDomain<Item = I> + ?Sized,
    {
        let Some(class) = self.core.icons().get(index).map(|icon| icon.class.clone()) else {
            return MouseResult::Ignored;
        };
        let members = class_members(domain, &*self.classifier, &class);

        let handled = match button {
            MouseButton::Left if modifiers.contains(Modifiers::SHIFT) => {
                members.iter().for_each(|item| domain.remove(item));
                true
            }
            MouseButton::Left => {
                domain.replace(members);
                true
            }
            MouseButton::Right => {
                members.iter().for_each(|item| domain.remove(item));
                true
            }
            MouseButton::Middle => false,
        };

        tracing::debug!(class = %class, ?button, handled, "selection palette click");
        self.core.finish_press(ctx, index, handled)
    }
}
