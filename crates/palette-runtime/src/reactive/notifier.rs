#![forbid(unsafe_code)]

//! Multicast event notifier with explicit subscription management.
//!
//! # Design
//!
//! [`Notifier<E>`] keeps an ordered list of subscriber callbacks in shared,
//! reference-counted storage (`Rc<RefCell<..>>`). [`Notifier::emit`] calls
//! every live subscriber, in registration order, with a reference to the
//! event.
//!
//! Subscribers can leave two ways:
//! - explicitly, via [`Notifier::unsubscribe`], which removes the entry
//!   immediately;
//! - implicitly, by dropping the [`Subscription`] guard, after which the
//!   callback is never invoked again and its entry is pruned on the next
//!   emit.
//!
//! # Failure Modes
//!
//! - **Re-entrant emit**: callbacks are collected before any is invoked, so a
//!   subscriber may subscribe, unsubscribe, or emit again from inside its
//!   callback. Subscribers added during an emit first hear the next one.
//! - **Subscriber leak**: guards stored forever keep their callbacks alive.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

type CallbackRc<E> = Rc<dyn Fn(&E)>;
type CallbackWeak<E> = Weak<dyn Fn(&E)>;

/// Identifier of one subscription, unique per notifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

struct NotifierInner<E> {
    next_id: u64,
    emitted: u64,
    subscribers: Vec<(SubscriptionId, CallbackWeak<E>)>,
}

/// A fan-out event source.
///
/// Cloning a `Notifier` creates another handle to the **same** subscriber
/// list.
///
/// # Invariants
///
/// 1. Subscribers are called in registration order.
/// 2. An unsubscribed or dropped subscriber is never called again.
/// 3. `emit_count` increments by exactly one per `emit`, even with no
///    subscribers.
pub struct Notifier<E> {
    inner: Rc<RefCell<NotifierInner<E>>>,
}

impl<E> Clone for Notifier<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E> fmt::Debug for Notifier<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Notifier")
            .field("subscriber_count", &inner.subscribers.len())
            .field("emitted", &inner.emitted)
            .finish()
    }
}

impl<E: 'static> Default for Notifier<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: 'static> Notifier<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(NotifierInner {
                next_id: 0,
                emitted: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Register `callback`. Keep the returned guard alive for as long as the
    /// callback should run.
    pub fn subscribe(&self, callback: impl Fn(&E) + 'static) -> Subscription {
        let strong: CallbackRc<E> = Rc::new(callback);
        let weak = Rc::downgrade(&strong);
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.subscribers.push((id, weak));
        Subscription {
            id,
            _guard: Box::new(strong),
        }
    }

    /// Remove a subscriber immediately. Returns false if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.subscribers.len();
        inner.subscribers.retain(|(sid, _)| *sid != id);
        inner.subscribers.len() != before
    }

    /// Deliver `event` to every live subscriber and prune dead ones.
    pub fn emit(&self, event: &E) {
        let callbacks: Vec<CallbackRc<E>> = {
            let mut inner = self.inner.borrow_mut();
            inner.emitted += 1;
            inner.subscribers.retain(|(_, w)| w.strong_count() > 0);
            inner
                .subscribers
                .iter()
                .filter_map(|(_, w)| w.upgrade())
                .collect()
        };
        tracing::trace!(subscribers = callbacks.len(), "notifier emit");
        for cb in &callbacks {
            cb(event);
        }
    }

    /// Registered subscribers, including dropped ones not yet pruned.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Number of `emit` calls so far.
    #[must_use]
    pub fn emit_count(&self) -> u64 {
        self.inner.borrow().emitted
    }
}

/// RAII guard for a subscriber callback.
///
/// Dropping it makes the callback unreachable; the notifier's weak entry
/// fails to upgrade from then on.
pub struct Subscription {
    id: SubscriptionId,
    _guard: Box<dyn std::any::Any>,
}

impl Subscription {
    #[must_use]
    pub fn id(&self) -> SubscriptionId {
        self.id
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
