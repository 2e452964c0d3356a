//! Process-wide shared state
//!
//! Theme, authentication identity and the two peripheral connection flags
//! each live in exactly one owner. Readers either read the latest value or
//! subscribe and get woken on every write. All of it is built on
//! `tokio::sync::watch`, which already gives "last write wins, every
//! subscriber sees it" semantics.

use tokio::sync::watch;

use bvision_core::{Identity, Peripheral, Theme};

/// Single-owner observable value
#[derive(Debug)]
pub struct Observable<T> {
    tx: watch::Sender<T>,
}

impl<T> Observable<T> {
    pub fn new(value: T) -> Self {
        let (tx, _rx) = watch::channel(value);
        Self { tx }
    }

    /// Replace the value and notify subscribers.
    ///
    /// Works with zero subscribers, unlike `watch::Sender::send`.
    pub fn set(&self, value: T) {
        self.tx.send_replace(value);
    }

    /// Mutate in place and notify subscribers
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        self.tx.send_modify(f);
    }

    /// Borrow the current value for the duration of `f`
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.tx.borrow())
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.tx.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl<T: Clone> Observable<T> {
    pub fn get(&self) -> T {
        self.tx.borrow().clone()
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

// ─────────────────────────────────────────────────────────────────
// Peripheral connections
// ─────────────────────────────────────────────────────────────────

/// Point-in-time copy of both connection flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectionSnapshot {
    pub glasses: bool,
    pub stick: bool,
}

impl ConnectionSnapshot {
    pub fn connected(&self, peripheral: Peripheral) -> bool {
        match peripheral {
            Peripheral::Glasses => self.glasses,
            Peripheral::Stick => self.stick,
        }
    }
}

/// Write half of the connection flags, owned by the device transport
#[derive(Debug)]
pub struct ConnectionLinks {
    glasses: watch::Sender<bool>,
    stick: watch::Sender<bool>,
}

impl ConnectionLinks {
    fn sender(&self, peripheral: Peripheral) -> &watch::Sender<bool> {
        match peripheral {
            Peripheral::Glasses => &self.glasses,
            Peripheral::Stick => &self.stick,
        }
    }

    /// Publish a connection change.
    ///
    /// Repeated reports of the same value do not wake subscribers.
    pub fn report(&self, peripheral: Peripheral, connected: bool) {
        let changed = self.sender(peripheral).send_if_modified(|current| {
            if *current == connected {
                false
            } else {
                *current = connected;
                true
            }
        });

        if changed {
            tracing::debug!("{} connection changed: {}", peripheral, connected);
        }
    }

    pub fn is_reported_connected(&self, peripheral: Peripheral) -> bool {
        *self.sender(peripheral).borrow()
    }
}

/// Read-only view of the connection flags
#[derive(Debug, Clone)]
pub struct ConnectionState {
    glasses: watch::Receiver<bool>,
    stick: watch::Receiver<bool>,
}

impl ConnectionState {
    fn receiver(&self, peripheral: Peripheral) -> &watch::Receiver<bool> {
        match peripheral {
            Peripheral::Glasses => &self.glasses,
            Peripheral::Stick => &self.stick,
        }
    }

    /// Most recently reported value for `peripheral`.
    ///
    /// Keeps returning the last value if the transport went away.
    pub fn connected(&self, peripheral: Peripheral) -> bool {
        *self.receiver(peripheral).borrow()
    }

    pub fn snapshot(&self) -> ConnectionSnapshot {
        ConnectionSnapshot {
            glasses: self.connected(Peripheral::Glasses),
            stick: self.connected(Peripheral::Stick),
        }
    }

    /// Fresh receiver that wakes on every change for `peripheral`
    pub fn subscribe(&self, peripheral: Peripheral) -> watch::Receiver<bool> {
        let mut rx = self.receiver(peripheral).clone();
        rx.mark_unchanged();
        rx
    }
}

/// Create the linked write/read halves of the connection flags
pub fn connection_channels(glasses: bool, stick: bool) -> (ConnectionLinks, ConnectionState) {
    let (glasses_tx, glasses_rx) = watch::channel(glasses);
    let (stick_tx, stick_rx) = watch::channel(stick);
    (
        ConnectionLinks {
            glasses: glasses_tx,
            stick: stick_tx,
        },
        ConnectionState {
            glasses: glasses_rx,
            stick: stick_rx,
        },
    )
}

// ─────────────────────────────────────────────────────────────────
// Aggregate
// ─────────────────────────────────────────────────────────────────

/// Everything the settings rows read or write outside their own row
#[derive(Debug)]
pub struct SharedState {
    pub theme: Observable<Theme>,
    pub auth: Observable<Option<Identity>>,
    pub connections: ConnectionState,
}

impl SharedState {
    pub fn new(theme: Theme, identity: Option<Identity>, connections: ConnectionState) -> Self {
        Self {
            theme: Observable::new(theme),
            auth: Observable::new(identity),
            connections,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    /// Flip dark mode, returning the new theme
    pub fn toggle_theme(&self) -> Theme {
        let mut next = Theme::default();
        self.theme.update(|theme| {
            *theme = theme.toggled();
            next = *theme;
        });
        next
    }

    pub fn identity(&self) -> Option<Identity> {
        self.auth.get()
    }

    pub fn set_identity(&self, identity: Option<Identity>) {
        self.auth.set(identity);
    }

    pub fn is_signed_in(&self) -> bool {
        self.auth.with(Option::is_some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared() -> (ConnectionLinks, SharedState) {
        let (links, connections) = connection_channels(false, false);
        (links, SharedState::new(Theme::Light, None, connections))
    }

    #[test]
    fn test_observable_get_set_without_subscribers() {
        let value = Observable::new(1);
        assert_eq!(value.subscriber_count(), 0);
        value.set(5);
        assert_eq!(value.get(), 5);
        value.update(|v| *v += 1);
        assert_eq!(value.get(), 6);
    }

    #[test]
    fn test_observable_subscriber_sees_latest_write() {
        let value = Observable::new("a".to_string());
        let mut rx = value.subscribe();

        value.set("b".to_string());
        value.set("c".to_string());

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), "c");
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_observable_wakes_subscriber() {
        let value = Observable::new(Theme::Light);
        let mut rx = value.subscribe();

        let waiter = tokio::spawn(async move {
            rx.changed().await.unwrap();
            *rx.borrow()
        });

        value.set(Theme::Dark);
        assert_eq!(waiter.await.unwrap(), Theme::Dark);
    }

    #[test]
    fn test_toggle_theme_alternates_without_drift() {
        let (_links, shared) = shared();
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(shared.toggle_theme());
        }
        assert_eq!(
            seen,
            vec![Theme::Dark, Theme::Light, Theme::Dark, Theme::Light]
        );
        assert_eq!(shared.theme(), Theme::Light);
    }

    #[test]
    fn test_auth_set_and_clear() {
        let (_links, shared) = shared();
        assert!(!shared.is_signed_in());

        shared.set_identity(Some(Identity::new("ana@example.com", "ana")));
        assert!(shared.is_signed_in());

        shared.set_identity(None);
        assert_eq!(shared.identity(), None);
    }

    #[test]
    fn test_connections_reflect_latest_report() {
        let (links, shared) = shared();
        assert!(!shared.connections.connected(Peripheral::Glasses));

        links.report(Peripheral::Glasses, true);
        links.report(Peripheral::Stick, true);
        links.report(Peripheral::Stick, false);

        let snapshot = shared.connections.snapshot();
        assert!(snapshot.glasses);
        assert!(!snapshot.stick);
    }

    #[test]
    fn test_connections_survive_transport_drop() {
        let (links, shared) = shared();
        links.report(Peripheral::Glasses, true);
        drop(links);
        assert!(shared.connections.connected(Peripheral::Glasses));
    }

    #[test]
    fn test_duplicate_report_does_not_wake() {
        let (links, shared) = shared();
        let rx = shared.connections.subscribe(Peripheral::Stick);

        links.report(Peripheral::Stick, false);
        assert!(!rx.has_changed().unwrap());

        links.report(Peripheral::Stick, true);
        assert!(rx.has_changed().unwrap());
        assert!(links.is_reported_connected(Peripheral::Stick));
    }

    #[tokio::test]
    async fn test_interleaved_external_writes() {
        let (links, shared) = shared();
        let links = std::sync::Arc::new(links);

        let mut handles = Vec::new();
        for i in 0..16 {
            let links = links.clone();
            handles.push(tokio::spawn(async move {
                let peripheral = if i % 2 == 0 {
                    Peripheral::Glasses
                } else {
                    Peripheral::Stick
                };
                links.report(peripheral, i % 3 == 0);
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        links.report(Peripheral::Glasses, true);
        links.report(Peripheral::Stick, false);
        assert_eq!(
            shared.connections.snapshot(),
            ConnectionSnapshot {
                glasses: true,
                stick: false
            }
        );
    }
}
