//! Collaborator interfaces the navigation bar consumes.
//!
//! The bar never reaches for ambient state: the router and the identity
//! store are injected through these traits, which keeps every consumer
//! testable against in-memory doubles.

use std::sync::Arc;

use crate::core::error::NavError;
use crate::models::{Destination, IdentityUpdate, NavMode, NavRoute};

/// Navigation operations the host router exposes to the bar.
pub trait RouterPort: Send + Sync {
    /// The route the application is currently on.
    fn current_route(&self) -> NavRoute;

    /// Request navigation to `dest`. May be rejected (e.g. a transition
    /// is already in flight); the caller decides whether to retry.
    fn navigate(&self, dest: Destination, mode: NavMode) -> Result<(), NavError>;
}

/// Identity store exposing the signed-in user to subscribers.
pub trait IdentityPort: Send + Sync {
    /// Register `on_change` for identity notifications.
    ///
    /// Implementations deliver the current state immediately, then every
    /// subsequent change, until the returned [`Subscription`] is dropped.
    fn subscribe(&self, on_change: IdentityCallback) -> Subscription;
}

/// Callback invoked with every identity notification.
pub type IdentityCallback = Box<dyn Fn(IdentityUpdate) + Send + Sync>;

/// Shared router handle passed through component props.
pub type SharedRouter = Arc<dyn RouterPort>;

/// Shared identity handle passed through component props.
pub type SharedIdentity = Arc<dyn IdentityPort>;

/// Guard tying an identity subscription to its subscriber's lifetime.
///
/// Dropping the guard (or calling [`Subscription::cancel`]) unsubscribes;
/// either way the unsubscribe action runs exactly once. A subscription
/// must never outlive the component that opened it.
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(unsubscribe: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// Unsubscribe eagerly instead of waiting for drop.
    pub fn cancel(mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_drop_unsubscribes_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let sub = Subscription::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        drop(sub);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cancel_then_drop_unsubscribes_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let sub = Subscription::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        sub.cancel();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
