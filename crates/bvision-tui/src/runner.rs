//! Main TUI runner - entry point and event loop
//!
//! Owns the terminal and the navigator, feeds terminal input and
//! shared-state changes through `process_message`, and redraws after
//! every batch.

use tokio::sync::mpsc;

use bvision_app::config::Settings;
use bvision_app::message::Message;
use bvision_app::navigation::{Navigator, RouteStack};
use bvision_app::process::process_message;
use bvision_app::state::AppState;
use bvision_app::store::SharedState;
use bvision_app::{signals, watcher};
use bvision_core::prelude::*;
use bvision_core::Layout;

use crate::{event, render, terminal};

/// Run the settings screen until the user quits
pub async fn run(settings: Settings, layout: Layout, shared: SharedState) -> Result<()> {
    terminal::install_panic_hook();

    let mut state = AppState::new(settings, layout, shared);
    info!(
        "Starting with {} rows, theme {:?}",
        state.layout.len(),
        state.shared.theme()
    );

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());
    let watchers = watcher::spawn_state_watchers(&state.shared, &msg_tx);

    let mut navigator = RouteStack::default();
    let mut term = ratatui::init();

    let result = run_loop(&mut term, &mut state, msg_rx, &mut navigator);

    for handle in watchers {
        handle.abort();
    }
    ratatui::restore();

    if let Err(ref e) = result {
        error!("Event loop failed: {}", e);
    }
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    navigator: &mut dyn Navigator,
) -> Result<()> {
    while !state.should_quit() {
        drain_pending(state, &mut msg_rx, navigator);

        terminal.draw(|frame| render::view(frame, &*state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, navigator);
        }
    }

    info!("Quitting from {}", state.current_route);
    Ok(())
}

/// Process every queued external message without blocking
fn drain_pending(
    state: &mut AppState,
    msg_rx: &mut mpsc::Receiver<Message>,
    navigator: &mut dyn Navigator,
) -> usize {
    let mut processed = 0;
    while let Ok(msg) = msg_rx.try_recv() {
        process_message(state, msg, navigator);
        processed += 1;
    }
    processed
}

#[cfg(test)]
mod tests {
    use super::*;
    use bvision_app::store::connection_channels;
    use bvision_core::{Peripheral, Theme};
    use std::time::Duration;

    fn state_with_links() -> (AppState, bvision_app::ConnectionLinks) {
        let (links, connections) = connection_channels(false, false);
        let shared = SharedState::new(Theme::Light, None, connections);
        (
            AppState::new(Settings::default(), Layout::default_settings(), shared),
            links,
        )
    }

    #[tokio::test]
    async fn test_drain_pending_applies_watcher_messages() {
        let (mut state, links) = state_with_links();
        let (tx, mut rx) = mpsc::channel(16);
        let watchers = watcher::spawn_state_watchers(&state.shared, &tx);
        let mut nav = RouteStack::default();

        links.report(Peripheral::Glasses, true);
        tokio::time::sleep(Duration::from_millis(50)).await;

        assert_eq!(drain_pending(&mut state, &mut rx, &mut nav), 1);
        assert_eq!(state.announcement.as_deref(), Some("Glasses connected"));

        for handle in watchers {
            handle.abort();
        }
    }

    #[tokio::test]
    async fn test_drain_pending_stops_on_quit() {
        let (mut state, _links) = state_with_links();
        let (tx, mut rx) = mpsc::channel(4);
        let mut nav = RouteStack::default();

        tx.send(Message::Quit).await.unwrap();
        assert_eq!(drain_pending(&mut state, &mut rx, &mut nav), 1);
        assert!(state.should_quit());
        assert_eq!(drain_pending(&mut state, &mut rx, &mut nav), 0);
    }
}
