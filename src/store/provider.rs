use std::fmt;

use async_trait::async_trait;

/// An opaque record as returned by the store.
pub type Record = serde_json::Value;

/// Errors that can occur while talking to the store.
/// None of them are fatal: the dashboard prints them into the output field.
#[derive(Debug)]
pub enum StoreError {
    /// Store misconfigured (bad endpoint, bad table name).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The store answered with a non-success status.
    Api { status: u16, message: String },
    /// The response body (or a record) could not be (de)serialized.
    Parse(String),
    /// The collection holds no records.
    Empty(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Config(msg) => write!(f, "config error: {msg}"),
            StoreError::Network(msg) => write!(f, "network error: {msg}"),
            StoreError::Api { status, message } => {
                write!(f, "store error (HTTP {status}): {message}")
            }
            StoreError::Parse(msg) => write!(f, "parse error: {msg}"),
            StoreError::Empty(table) => write!(f, "no records in {table}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::Parse(e.to_string())
    }
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Returns the name of the collection this store reads.
    fn name(&self) -> &str;

    /// Fetches every record of the configured collection.
    async fn all_records(&self) -> Result<Vec<Record>, StoreError>;
}

/// Short label for a record, used as a row in the record list.
///
/// Prefers the first string among `id`, `name` and `table`, falling back to
/// `record N` (1-based).
pub fn record_label(record: &Record, index: usize) -> String {
    ["id", "name", "table"]
        .iter()
        .find_map(|key| record.get(key).and_then(|v| v.as_str()))
        .map(str::to_string)
        .unwrap_or_else(|| format!("record {}", index + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_label_prefers_id() {
        let record = json!({"name": "acme", "id": "int-1"});
        assert_eq!(record_label(&record, 0), "int-1");
    }

    #[test]
    fn test_record_label_falls_back_to_name() {
        let record = json!({"id": 42, "name": "acme"});
        assert_eq!(record_label(&record, 3), "acme");
    }

    #[test]
    fn test_record_label_positional_fallback() {
        assert_eq!(record_label(&json!([1, 2]), 4), "record 5");
        assert_eq!(record_label(&json!({"other": "x"}), 0), "record 1");
    }

    #[test]
    fn test_error_display() {
        let err = StoreError::Api {
            status: 503,
            message: "unavailable".to_string(),
        };
        assert_eq!(err.to_string(), "store error (HTTP 503): unavailable");
        assert_eq!(
            StoreError::Empty("dev-integrations".to_string()).to_string(),
            "no records in dev-integrations"
        );
    }
}
