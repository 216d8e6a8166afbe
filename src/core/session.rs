//! Identity store backed by browser storage.
//!
//! Holds the signed-in user summary, persists it to localStorage, and
//! notifies subscribers on every change. Subscribers receive the current
//! state immediately on subscribe, so a freshly mounted profile button
//! renders without waiting for the next sign-in event.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

#[cfg(target_arch = "wasm32")]
use crate::config::SESSION_KEY;
use crate::core::ports::{IdentityCallback, IdentityPort, Subscription};
use crate::models::{IdentityUpdate, UserIdentitySummary};
#[cfg(target_arch = "wasm32")]
use crate::utils::log;

type SubscriberList = Arc<Mutex<Vec<(u64, IdentityCallback)>>>;

/// Process-wide identity store implementing [`IdentityPort`].
pub struct SessionStore {
    subscribers: SubscriberList,
    current: Mutex<IdentityUpdate>,
    next_id: AtomicU64,
}

impl SessionStore {
    /// Create a store seeded from the persisted session, if any.
    pub fn new() -> Self {
        let initial = load_persisted()
            .map(IdentityUpdate::SignedIn)
            .unwrap_or(IdentityUpdate::SignedOut);
        Self::with_initial(initial)
    }

    /// Create a store with an explicit initial state (used by tests and
    /// by hosts that already know the session).
    pub fn with_initial(initial: IdentityUpdate) -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(Vec::new())),
            current: Mutex::new(initial),
            next_id: AtomicU64::new(0),
        }
    }

    /// Record a sign-in: persist the summary and notify subscribers.
    pub fn sign_in(&self, summary: UserIdentitySummary) {
        persist(Some(&summary));
        let update = IdentityUpdate::SignedIn(summary);
        *self.current.lock().unwrap() = update.clone();
        self.notify(&update);
    }

    /// Record a sign-out: clear persistence and notify subscribers.
    pub fn sign_out(&self) {
        persist(None);
        *self.current.lock().unwrap() = IdentityUpdate::SignedOut;
        self.notify(&IdentityUpdate::SignedOut);
    }

    fn notify(&self, update: &IdentityUpdate) {
        let subscribers = self.subscribers.lock().unwrap();
        for (_, callback) in subscribers.iter() {
            callback(update.clone());
        }
    }

    #[cfg(test)]
    fn subscriber_count(&self) -> usize {
        self.subscribers.lock().unwrap().len()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityPort for SessionStore {
    fn subscribe(&self, on_change: IdentityCallback) -> Subscription {
        on_change(self.current.lock().unwrap().clone());

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.subscribers.lock().unwrap().push((id, on_change));

        let subscribers = self.subscribers.clone();
        Subscription::new(move || {
            subscribers.lock().unwrap().retain(|(sub_id, _)| *sub_id != id);
        })
    }
}

/// Load the persisted session summary from localStorage.
#[cfg(target_arch = "wasm32")]
fn load_persisted() -> Option<UserIdentitySummary> {
    let storage = crate::utils::dom::local_storage()?;
    let raw = storage.get_item(SESSION_KEY).ok()??;
    match serde_json::from_str(&raw) {
        Ok(summary) => Some(summary),
        Err(err) => {
            log::warn(&format!("Stored session is unreadable: {err}"));
            None
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn load_persisted() -> Option<UserIdentitySummary> {
    None
}

/// Write (or clear) the persisted session summary.
#[cfg(target_arch = "wasm32")]
fn persist(summary: Option<&UserIdentitySummary>) {
    let Some(storage) = crate::utils::dom::local_storage() else {
        return;
    };
    let result = match summary {
        Some(summary) => match serde_json::to_string(summary) {
            Ok(raw) => storage.set_item(SESSION_KEY, &raw),
            Err(err) => {
                log::warn(&format!("Could not serialize session: {err}"));
                return;
            }
        },
        None => storage.remove_item(SESSION_KEY),
    };
    if result.is_err() {
        log::warn("Could not update stored session");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn persist(_summary: Option<&UserIdentitySummary>) {}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use super::*;

    fn signed_in(name: &str) -> IdentityUpdate {
        IdentityUpdate::SignedIn(UserIdentitySummary::new(name, None))
    }

    #[test]
    fn test_subscribe_replays_current_state() {
        let store = SessionStore::with_initial(signed_in("maria lopez"));
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = seen.clone();
        let _sub = store.subscribe(Box::new(move |update| {
            sink.lock().unwrap().push(update);
        }));

        assert_eq!(*seen.lock().unwrap(), vec![signed_in("maria lopez")]);
    }

    #[test]
    fn test_sign_in_and_out_notify_wholesale() {
        let store = SessionStore::with_initial(IdentityUpdate::SignedOut);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = seen.clone();
        let _sub = store.subscribe(Box::new(move |update| {
            sink.lock().unwrap().push(update);
        }));

        store.sign_in(UserIdentitySummary::new("maria lopez", None));
        store.sign_out();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                IdentityUpdate::SignedOut,
                signed_in("maria lopez"),
                IdentityUpdate::SignedOut,
            ]
        );
    }

    #[test]
    fn test_dropped_subscription_stops_notifications() {
        let store = SessionStore::with_initial(IdentityUpdate::SignedOut);
        let notifications = Arc::new(AtomicUsize::new(0));

        let counter = notifications.clone();
        let sub = store.subscribe(Box::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(notifications.load(Ordering::SeqCst), 1);
        assert_eq!(store.subscriber_count(), 1);

        drop(sub);
        assert_eq!(store.subscriber_count(), 0);

        store.sign_in(UserIdentitySummary::new("maria lopez", None));
        assert_eq!(notifications.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_mount_then_immediate_unmount_leaves_no_subscriber() {
        let store = SessionStore::with_initial(IdentityUpdate::SignedOut);
        let sub = store.subscribe(Box::new(|_| {}));
        drop(sub);
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_independent_subscribers() {
        let store = SessionStore::with_initial(IdentityUpdate::SignedOut);
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let counter = first.clone();
        let sub_a = store.subscribe(Box::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        let counter = second.clone();
        let _sub_b = store.subscribe(Box::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        drop(sub_a);
        store.sign_out();

        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 2);
    }
}
