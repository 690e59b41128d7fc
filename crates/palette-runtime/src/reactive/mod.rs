#![forbid(unsafe_code)]

//! Change notification for palette widgets.
//!
//! - [`Notifier`]: a multicast event source with ordered fan-out.
//! - [`Subscription`]: RAII guard; dropping it stops delivery.
//!
//! # Architecture
//!
//! `Notifier<E>` uses `Rc<RefCell<..>>` for single-threaded shared ownership,
//! matching the tick model: every emit happens on the thread that owns the
//! widgets.
//!
//! # Invariants
//!
//! 1. Subscribers are notified in registration order.
//! 2. `unsubscribe` takes effect before the next emit.
//! 3. Dropping a [`Subscription`] removes the callback before the next emit.

pub mod notifier;

pub use notifier::{Notifier, Subscription, SubscriptionId};
