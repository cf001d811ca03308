//! Input relay: the task between the terminal and the dispatch loop.
//!
//! Reads raw terminal events, normalizes key presses to [`Token`]s and
//! sends them on a capacity-1 channel. The send waits while a token is
//! still pending, so a busy dispatch loop slows the relay down instead of
//! losing keys.
//!
//! Ctrl+C never reaches the channel: the relay flips the shutdown signal
//! and stops. A failing event source is reported on the fatal channel.

use std::io;

use crossterm::event::{Event, EventStream};
use futures::{Stream, StreamExt};
use log::{debug, info, warn};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::core::{DashError, UiLog};
use crate::tui::token::{Token, normalize};

/// Channel ends owned by the relay.
pub struct RelayChannels {
    pub tokens: mpsc::Sender<Token>,
    pub fatal: mpsc::Sender<DashError>,
    pub shutdown: watch::Sender<bool>,
}

/// Spawn the relay over the real terminal event stream.
pub fn spawn(channels: RelayChannels, log: UiLog) -> JoinHandle<()> {
    tokio::spawn(relay(EventStream::new(), channels, log))
}

/// Forward normalized key presses from `events` until quit, error, or the
/// end of the stream.
pub async fn relay<S>(mut events: S, channels: RelayChannels, log: UiLog)
where
    S: Stream<Item = io::Result<Event>> + Unpin,
{
    while let Some(event) = events.next().await {
        let key = match event {
            Ok(Event::Key(key)) => key,
            Ok(other) => {
                debug!("Ignoring terminal event {:?}", other);
                continue;
            }
            Err(e) => {
                warn!("Terminal event stream failed: {}", e);
                let _ = channels.fatal.send(DashError::Io(e)).await;
                return;
            }
        };

        let Some(token) = normalize(key) else {
            continue;
        };

        if token == Token::Quit {
            info!("Ctrl+C received, shutting down");
            log.write("relay", "quit requested");
            let _ = channels.shutdown.send(true);
            return;
        }

        if channels.tokens.send(token).await.is_err() {
            warn!("Dispatch loop dropped the token receiver");
            return;
        }
    }
    info!("Terminal event stream ended");
}
