#![forbid(unsafe_code)]

//! Explicit UI context threaded through tick and input calls.
//!
//! Widgets never reach for process-wide UI state. Everything they need to
//! know about the surrounding UI (which widget the pointer is over, where
//! the pointer last was, which widget holds pointer capture) and every side
//! effect they may trigger outside themselves (audio feedback) goes through
//! a [`UiContext`] passed in by the caller.

use palette_core::geometry::Point;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Identifier a widget uses to claim hover or pointer capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub u32);

/// Receiver for named audio cues ("ClickSound", "ClickDisabledSound", ...).
pub trait FeedbackSink {
    fn play(&mut self, cue: &str);
}

/// Feedback sink that discards every cue.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentFeedback;

impl FeedbackSink for SilentFeedback {
    fn play(&mut self, _cue: &str) {}
}

/// Feedback sink that records cue names. Clones share the same log, so a
/// caller can keep one handle and give another to the context.
#[derive(Debug, Clone, Default)]
pub struct FeedbackLog {
    played: Rc<RefCell<Vec<String>>>,
}

impl FeedbackLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every cue played so far, oldest first.
    #[must_use]
    pub fn played(&self) -> Vec<String> {
        self.played.borrow().clone()
    }

    /// The most recent cue.
    #[must_use]
    pub fn last(&self) -> Option<String> {
        self.played.borrow().last().cloned()
    }

    pub fn clear(&self) {
        self.played.borrow_mut().clear();
    }
}

impl FeedbackSink for FeedbackLog {
    fn play(&mut self, cue: &str) {
        self.played.borrow_mut().push(cue.to_string());
    }
}

/// The names of the two click cues a widget plays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickSounds {
    pub enabled: String,
    pub disabled: String,
}

impl Default for ClickSounds {
    fn default() -> Self {
        Self {
            enabled: "ClickSound".to_string(),
            disabled: "ClickDisabledSound".to_string(),
        }
    }
}

/// Per-frame UI state shared between widgets.
pub struct UiContext {
    mouse_over: Option<WidgetId>,
    mouse_focus: Option<WidgetId>,
    last_mouse_pos: Point,
    scroll_speed: f32,
    feedback: Box<dyn FeedbackSink>,
}

impl fmt::Debug for UiContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiContext")
            .field("mouse_over", &self.mouse_over)
            .field("mouse_focus", &self.mouse_focus)
            .field("last_mouse_pos", &self.last_mouse_pos)
            .field("scroll_speed", &self.scroll_speed)
            .finish_non_exhaustive()
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new(Box::new(SilentFeedback))
    }
}

impl UiContext {
    /// Create a context that sends cues to `feedback`.
    #[must_use]
    pub fn new(feedback: Box<dyn FeedbackSink>) -> Self {
        Self {
            mouse_over: None,
            mouse_focus: None,
            last_mouse_pos: Point::ZERO,
            scroll_speed: 10.0,
            feedback,
        }
    }

    /// Set pixels scrolled per tab-strip step.
    #[must_use]
    pub fn with_scroll_speed(mut self, speed: f32) -> Self {
        self.scroll_speed = speed;
        self
    }

    #[must_use]
    pub fn scroll_speed(&self) -> f32 {
        self.scroll_speed
    }

    /// Record the pointer position and the widget under it.
    pub fn set_pointer(&mut self, position: Point, over: Option<WidgetId>) {
        self.last_mouse_pos = position;
        self.mouse_over = over;
    }

    #[must_use]
    pub fn last_mouse_pos(&self) -> Point {
        self.last_mouse_pos
    }

    #[must_use]
    pub fn mouse_over(&self) -> Option<WidgetId> {
        self.mouse_over
    }

    #[must_use]
    pub fn is_mouse_over(&self, id: WidgetId) -> bool {
        self.mouse_over == Some(id)
    }

    /// Claim pointer capture. Fails if another widget holds it.
    pub fn take_mouse_focus(&mut self, id: WidgetId) -> bool {
        match self.mouse_focus {
            Some(owner) if owner != id => false,
            _ => {
                self.mouse_focus = Some(id);
                true
            }
        }
    }

    /// Release pointer capture if `id` holds it.
    pub fn yield_mouse_focus(&mut self, id: WidgetId) -> bool {
        if self.mouse_focus == Some(id) {
            self.mouse_focus = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn has_mouse_focus(&self, id: WidgetId) -> bool {
        self.mouse_focus == Some(id)
    }

    /// Play a named cue.
    pub fn play(&mut self, cue: &str) {
        tracing::trace!(cue, "feedback");
        self.feedback.play(cue);
    }

    /// Play the enabled or disabled click cue.
    pub fn click(&mut self, sounds: &ClickSounds, enabled: bool) {
        if enabled {
            self.play(&sounds.enabled);
        } else {
            self.play(&sounds.disabled);
        }
    }
}
