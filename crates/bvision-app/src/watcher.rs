//! Shared-state watchers
//!
//! Bridges watch-channel writes (device transport, theme, identity) into the
//! TEA message channel so every write triggers a redraw.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use bvision_core::Peripheral;

use crate::message::Message;
use crate::store::SharedState;

/// Forward every change of one connection flag as a message
fn watch_connection(
    peripheral: Peripheral,
    mut rx: watch::Receiver<bool>,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let connected = *rx.borrow_and_update();
            let msg = Message::ConnectionChanged {
                peripheral,
                connected,
            };
            if msg_tx.send(msg).await.is_err() {
                tracing::debug!("Message channel closed, stopping {} watcher", peripheral);
                return;
            }
        }
        tracing::debug!("{} transport dropped", peripheral);
    })
}

/// Forward every change of an observable as a redraw request
fn watch_redraw<T: Send + Sync + 'static>(
    mut rx: watch::Receiver<T>,
    msg_tx: mpsc::Sender<Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            rx.borrow_and_update();
            if msg_tx.send(Message::SharedStateChanged).await.is_err() {
                return;
            }
        }
    })
}

/// Spawn one watcher per shared value
pub fn spawn_state_watchers(
    shared: &SharedState,
    msg_tx: &mpsc::Sender<Message>,
) -> Vec<JoinHandle<()>> {
    let mut handles: Vec<JoinHandle<()>> = Peripheral::ALL
        .iter()
        .map(|&p| watch_connection(p, shared.connections.subscribe(p), msg_tx.clone()))
        .collect();

    handles.push(watch_redraw(shared.theme.subscribe(), msg_tx.clone()));
    handles.push(watch_redraw(shared.auth.subscribe(), msg_tx.clone()));
    handles
}
