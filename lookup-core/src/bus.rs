//! Crossterm input pump
//!
//! A background task reads crossterm in short batches and forwards the
//! events components care about as [`EventKind`] values.

use crate::event::EventKind;
use crossterm::event::{self, Event};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Upper bound on reads per wake-up, so a paste cannot starve rendering
const MAX_EVENTS_PER_BATCH: usize = 20;

/// Translate a crossterm event. Paste and unknown events map to `None`.
pub fn event_kind(event: Event) -> Option<EventKind> {
    match event {
        Event::Key(key) => Some(EventKind::Key(key)),
        Event::Mouse(mouse) => Some(EventKind::Mouse(mouse)),
        Event::Resize(width, height) => Some(EventKind::Resize(width, height)),
        Event::FocusGained => Some(EventKind::Focus(true)),
        Event::FocusLost => Some(EventKind::Focus(false)),
        _ => None,
    }
}

/// Start polling crossterm until `cancel_token` fires or `tx` closes.
///
/// On cancellation any input still buffered is read and discarded so it
/// does not leak into the shell after the terminal is restored.
pub fn spawn_event_poller(
    tx: mpsc::UnboundedSender<EventKind>,
    poll_timeout: Duration,
    loop_sleep: Duration,
    cancel_token: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = cancel_token.cancelled() => {
                    info!("input poller stopping");
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(loop_sleep) => {
                    let mut read = 0;
                    while read < MAX_EVENTS_PER_BATCH && event::poll(poll_timeout).unwrap_or(false) {
                        read += 1;
                        let Some(kind) = event::read().ok().and_then(event_kind) else {
                            continue;
                        };
                        if tx.send(kind).is_err() {
                            debug!("input channel closed");
                            return;
                        }
                    }
                }
            }
        }
    })
}
