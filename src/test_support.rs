//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::store::{Record, RecordStore, StoreError};

/// A store that always returns the same records.
pub struct FixedStore {
    records: Vec<Record>,
}

impl FixedStore {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl RecordStore for FixedStore {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn all_records(&self) -> Result<Vec<Record>, StoreError> {
        Ok(self.records.clone())
    }
}

/// A store whose every scan fails at the network level.
pub struct FailingStore;

#[async_trait]
impl RecordStore for FailingStore {
    fn name(&self) -> &str {
        "failing"
    }

    async fn all_records(&self) -> Result<Vec<Record>, StoreError> {
        Err(StoreError::Network("connection refused".to_string()))
    }
}
