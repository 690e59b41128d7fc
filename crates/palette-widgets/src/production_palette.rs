#![forbid(unsafe_code)]

//! Palette of the items the current production queue can build.
//!
//! One icon per buildable item, in queue order; the count overlay shows how
//! many of that item are queued.
//!
//! | Gesture | Effect |
//! |---------|--------|
//! | Left click | Pick up a completed item, else queue one (five with shift) |
//! | Right click | Cancel one (five with shift); disabled cue if none queued |
//! | Slot hotkey | As a left click |

use crate::config::PaletteConfig;
use crate::domain::{BuildableItem, Fingerprint, ProductionQueue, QueueId, QueueProvider};
use crate::mouse::MouseResult;
use crate::palette::{PaletteCore, PaletteEntry, PointerRoute};
use palette_core::event::{KeyEvent, Modifiers, MouseButton, MouseEvent};
use palette_core::geometry::Rect;
use palette_core::keybinding::HotkeyRegistry;
use palette_runtime::UiContext;

/// Items queued or cancelled per click while shift is held.
pub const BATCH_SIZE: u32 = 5;

fn batch_count(modifiers: Modifiers) -> u32 {
    if modifiers.contains(Modifiers::SHIFT) {
        BATCH_SIZE
    } else {
        1
    }
}

/// Icon palette bound to one queue of a [`QueueProvider`].
#[derive(Debug)]
pub struct ProductionPalette {
    core: PaletteCore<BuildableItem>,
    current_queue: Option<QueueId>,
}

impl ProductionPalette {
    #[must_use]
    pub fn new(config: &PaletteConfig, registry: &HotkeyRegistry, bounds: Rect) -> Self {
        Self {
            core: PaletteCore::new(config, registry, bounds),
            current_queue: None,
        }
    }

    #[must_use]
    pub fn core(&self) -> &PaletteCore<BuildableItem> {
        &self.core
    }

    pub fn core_mut(&mut self) -> &mut PaletteCore<BuildableItem> {
        &mut self.core
    }

    #[must_use]
    pub fn current_queue(&self) -> Option<QueueId> {
        self.current_queue
    }

    /// Switch queues. The next tick rebuilds because the fingerprint
    /// includes the queue identity.
    pub fn set_current_queue(&mut self, queue: Option<QueueId>) {
        if self.current_queue != queue {
            tracing::debug!(?queue, "production palette queue changed");
        }
        self.current_queue = queue;
    }

    fn fingerprint<P: QueueProvider + ?Sized>(&self, provider: &P) -> Fingerprint {
        let Some(id) = self.current_queue else {
            return Fingerprint::default();
        };
        let queue = provider
            .queue(id)
            .map_or_else(Fingerprint::default, ProductionQueue::fingerprint);
        Fingerprint::of(&id.0).combine(queue)
    }

    pub fn tick<P: QueueProvider + ?Sized>(&mut self, provider: &P) -> bool {
        self.refresh(provider, false)
    }

    pub fn refresh<P: QueueProvider + ?Sized>(&mut self, provider: &P, forced: bool) -> bool {
        if !self.core.observe(self.fingerprint(provider), forced) {
            return false;
        }
        let entries = self
            .current_queue
            .and_then(|id| provider.queue(id))
            .map(|queue| {
                queue
                    .buildable_items()
                    .into_iter()
                    .map(|item| PaletteEntry {
                        class: item.name.clone(),
                        count: queue.queued_count(&item.name),
                        art: item.art.clone(),
                        item,
                    })
                    .collect()
            })
            .unwrap_or_default();
        self.core.rebuild(entries);
        true
    }

    /// Pick up the first completed item of the current queue, if any.
    pub fn pick_up_completed<P: QueueProvider + ?Sized>(&mut self, provider: &mut P) -> bool {
        let Some(queue) = self.current_queue.and_then(|id| provider.queue_mut(id)) else {
            return false;
        };
        let done = queue.all_queued().into_iter().find(|q| q.done);
        match done {
            Some(item) => queue.pick_up(&item.name),
            None => false,
        }
    }

    pub fn handle_mouse<P: QueueProvider + ?Sized>(
        &mut self,
        event: &MouseEvent,
        provider: &mut P,
        ctx: &mut UiContext,
    ) -> MouseResult {
        match self.core.route_pointer(event, ctx) {
            PointerRoute::Done(result) => result,
            PointerRoute::Press {
                index,
                button,
                modifiers,
            } => self.activate(index, button, modifiers, provider, ctx),
        }
    }

    pub fn handle_key<P: QueueProvider + ?Sized>(
        &mut self,
        event: &KeyEvent,
        provider: &mut P,
        ctx: &mut UiContext,
    ) -> bool {
        if !event.is_down() || self.current_queue.is_none() {
            return false;
        }
        let Some((index, batch)) = self.core.hotkey_target(event) else {
            return false;
        };
        self.activate(index, MouseButton::Left, batch, provider, ctx);
        true
    }

    fn activate<P: QueueProvider + ?Sized>(
        &mut self,
        index: usize,
        button: MouseButton,
        modifiers: Modifiers,
        provider: &mut P,
        ctx: &mut UiContext,
    ) -> MouseResult {
        let Some(name) = self.core.icons().get(index).map(|icon| icon.class.clone()) else {
            return MouseResult::Ignored;
        };
        let Some(queue) = self.current_queue.and_then(|id| provider.queue_mut(id)) else {
            return self.core.finish_press(ctx, index, false);
        };

        let count = batch_count(modifiers);
        let handled = match button {
            MouseButton::Left => {
                let completed = queue.all_queued().iter().any(|q| q.done && q.name == name);
                if completed {
                    queue.pick_up(&name)
                } else {
                    queue.start(&name, count);
                    true
                }
            }
            MouseButton::Right => {
                if queue.queued_count(&name) == 0 {
                    false
                } else {
                    queue.cancel(&name, count);
                    true
                }
            }
            MouseButton::Middle => false,
        };

        tracing::debug!(item = %name, ?button, count, handled, "production palette click");
        self.core.finish_press(ctx, index, handled)
    }
}
