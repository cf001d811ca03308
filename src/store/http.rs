//! HTTP record store.
//!
//! Scans a collection with a single request:
//!
//! ```text
//! GET {endpoint}/tables/{environment}-{collection}/items
//! Authorization: Basic <access key id>:<secret>
//! x-region: <region>
//! ```
//!
//! The body is either a bare JSON array of records or an object carrying
//! them under `Items` (scan-style) or `items`.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::core::config::StartupParams;
use crate::store::{Record, RecordStore, StoreError};

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum ScanResponse {
    Bare(Vec<Record>),
    Wrapped {
        #[serde(alias = "Items")]
        items: Vec<Record>,
    },
}

impl ScanResponse {
    fn into_records(self) -> Vec<Record> {
        match self {
            ScanResponse::Bare(records) | ScanResponse::Wrapped { items: records } => records,
        }
    }
}

/// Record store reached over HTTP with static credentials.
pub struct HttpRecordStore {
    base_url: String,
    table: String,
    params: StartupParams,
    client: reqwest::Client,
}

impl HttpRecordStore {
    pub fn new(endpoint: impl Into<String>, collection: &str, params: StartupParams) -> Self {
        let endpoint = endpoint.into();
        let table = format!("{}-{}", params.environment, collection);
        Self {
            base_url: endpoint.trim_end_matches('/').to_string(),
            table,
            params,
            client: reqwest::Client::new(),
        }
    }

}

#[async_trait]
impl RecordStore for HttpRecordStore {
    fn name(&self) -> &str {
        &self.table
    }

    async fn all_records(&self) -> Result<Vec<Record>, StoreError> {
        if self.base_url.is_empty() {
            return Err(StoreError::Config("store endpoint is empty".to_string()));
        }

        let url = format!("{}/tables/{}/items", self.base_url, self.table);
        info!("Scanning {} (region={})", url, self.params.region);

        let response = self
            .client
            .get(&url)
            .basic_auth(&self.params.access_key_id, Some(&self.params.secret_access_key))
            .header("x-region", &self.params.region)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        debug!("Store response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Store API error: {} - {}", status, err_body);
            return Err(StoreError::Api {
                status,
                message: err_body,
            });
        }

        let scan: ScanResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Parse(e.to_string()))?;
        let records = scan.into_records();
        info!("Scan of {} returned {} records", self.table, records.len());
        Ok(records)
    }
}
