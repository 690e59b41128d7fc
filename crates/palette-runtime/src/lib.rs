#![forbid(unsafe_code)]

//! Runtime plumbing shared by the palette widgets.
//!
//! - [`reactive`]: observer lists ([`Notifier`]) for fan-out notifications
//!   such as "icon count changed".
//! - [`context`]: the explicit [`UiContext`] carrying hover, pointer capture,
//!   scroll speed, and audio feedback.

pub mod context;
pub mod reactive;

pub use context::{ClickSounds, FeedbackLog, FeedbackSink, SilentFeedback, UiContext, WidgetId};
pub use reactive::{Notifier, Subscription, SubscriptionId};
