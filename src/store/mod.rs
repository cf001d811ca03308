//! # Record Store
//!
//! The dashboard consumes exactly one capability from the backing
//! key-value/document store: "list all records of the configured
//! collection". [`RecordStore`] is that seam; [`HttpRecordStore`] is the
//! reqwest-backed implementation wired in by `main.rs`.

pub mod http;
pub mod provider;

pub use http::HttpRecordStore;
pub use provider::{Record, RecordStore, StoreError, record_label};
