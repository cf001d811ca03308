//! # Core
//!
//! Pieces of tbdui that know nothing about the terminal:
//!
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │   config     │   │   log_sink   │   │    error     │
//!     │ (toml + env) │   │ (UiLog, Arc) │   │ (DashError)  │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            └──────────────────┼──────────────────┘
//!                               ▼
//!                         tui / main.rs
//! ```
//!
//! ## Modules
//!
//! - [`config`]: `~/.tbdui/config.toml`, env overrides, required startup parameters
//! - [`log_sink`]: the in-app diagnostic buffer shared by the UI tasks
//! - [`error`]: fatal runtime errors of the UI tasks

pub mod config;
pub mod error;
pub mod log_sink;

pub use error::DashError;
pub use log_sink::UiLog;
