//! # TUI Adapter
//!
//! The ratatui/crossterm layer: terminal setup, the input relay, the
//! dispatch loop and everything they draw.
//!
//! ## Tasks
//!
//! ```text
//!  terminal ─▶ relay task ──(Token, cap 1)──▶ dispatch loop ─▶ terminal
//!                  │                              ▲
//!                  ├──(shutdown: watch)───────────┤
//!                  └──(fatal: DashError)──────────┘
//! ```
//!
//! The relay only normalizes and forwards. The dispatch loop owns all UI
//! state and renders once per consumed token.

pub mod component;
pub mod components;
pub mod dispatch;
pub mod focus;
pub mod layout;
pub mod relay;
pub mod screen;
pub mod token;

use std::sync::Arc;

use log::{info, warn};
use tokio::sync::{mpsc, watch};

use crate::core::config::ResolvedConfig;
use crate::core::{DashError, UiLog};
use crate::store::RecordStore;
use crate::tui::dispatch::Dashboard;
use crate::tui::layout::DashboardLayout;
use crate::tui::relay::RelayChannels;

/// Restores the terminal however `run` exits.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        ratatui::restore();
        info!("Terminal restored");
    }
}

/// Take over the terminal and run the dashboard until quit or a fatal error.
///
/// Fails before any UI task starts if the terminal cannot be initialized
/// or is too small for the layout.
pub async fn run(
    config: &ResolvedConfig,
    store: Arc<dyn RecordStore>,
    log: UiLog,
) -> Result<(), DashError> {
    let mut terminal = ratatui::try_init()?;
    let _guard = TerminalGuard;

    let size = terminal.size()?;
    let layout = DashboardLayout::compute(size.width, size.height)?;
    info!("Terminal {}x{}, layout computed", size.width, size.height);

    let mut dashboard = Dashboard::new(layout, store, log.clone(), config.theme);
    dashboard.debug_log = config.debug_log;

    let (token_tx, token_rx) = mpsc::channel(1);
    let (fatal_tx, fatal_rx) = mpsc::channel(1);
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let relay = relay::spawn(
        RelayChannels {
            tokens: token_tx,
            fatal: fatal_tx,
            shutdown: shutdown_tx,
        },
        log,
    );

    let result = dashboard
        .run(&mut terminal, token_rx, fatal_rx, shutdown_rx)
        .await;

    relay.abort();
    if let Err(ref e) = result {
        warn!("Dashboard stopped: {}", e);
    }
    result
}
