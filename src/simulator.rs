//! Simulated device transport
//!
//! Stands in for the Bluetooth link to the glasses and the stick by
//! walking a fixed connect/disconnect cycle through `ConnectionLinks`.

use std::time::Duration;

use tokio::task::JoinHandle;

use bvision_app::store::ConnectionLinks;
use bvision_core::Peripheral;

/// Connection events replayed in order, then repeated
const CYCLE: [(Peripheral, bool); 4] = [
    (Peripheral::Glasses, true),
    (Peripheral::Stick, true),
    (Peripheral::Glasses, false),
    (Peripheral::Stick, false),
];

/// Event reported at `step` of the cycle
pub fn event_at(step: usize) -> (Peripheral, bool) {
    CYCLE[step % CYCLE.len()]
}

/// Periodic connection writer
#[derive(Debug)]
pub struct DeviceSimulator {
    links: ConnectionLinks,
    period: Duration,
}

impl DeviceSimulator {
    pub fn new(links: ConnectionLinks, period: Duration) -> Self {
        Self { links, period }
    }

    /// Report the next event after every period until aborted
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.period);
            // First tick fires immediately; start from a disconnected state
            interval.tick().await;

            let mut step = 0;
            loop {
                interval.tick().await;
                let (peripheral, connected) = event_at(step);
                tracing::debug!("Simulated {} connected={}", peripheral, connected);
                self.links.report(peripheral, connected);
                step += 1;
            }
        })
    }
}
