//! Google Sheets implementation of [`LookupSource`] over the values REST
//! endpoint. Row parsing and matching are pure functions, tested without
//! the network.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use google_auth::ServiceAccountAuth;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::error::LookupError;
use crate::models::{find_by_code, LookupRecord};
use crate::source::LookupSource;

const SHEETS_BASE_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Reads one spreadsheet; each lookup table is a sheet title within it.
pub struct GoogleSheetsSource {
    http: reqwest::Client,
    auth: Arc<ServiceAccountAuth>,
    spreadsheet_id: String,
}

#[derive(Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<Vec<serde_json::Value>>,
}

impl GoogleSheetsSource {
    pub fn new(auth: Arc<ServiceAccountAuth>, spreadsheet_id: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            auth,
            spreadsheet_id,
        }
    }

    fn values_url(&self, table: &str) -> Result<reqwest::Url, LookupError> {
        let mut url = reqwest::Url::parse(SHEETS_BASE_URL)
            .map_err(|e| LookupError::Request(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| LookupError::Request("base url cannot be a base".to_string()))?
            .push(&self.spreadsheet_id)
            .push("values")
            .push(table);
        Ok(url)
    }

    async fn fetch_rows(&self, table: &str) -> Result<Vec<LookupRecord>, LookupError> {
        let token = self
            .auth
            .token()
            .await
            .map_err(|e| LookupError::Auth(e.to_string()))?;

        let response = self
            .http
            .get(self.values_url(table)?)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| LookupError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LookupError::Request(format!(
                "sheet \"{}\": status {}",
                table,
                response.status()
            )));
        }

        let body: ValueRange = response
            .json()
            .await
            .map_err(|e| LookupError::Malformed(e.to_string()))?;

        Ok(records_from_values(body.values))
    }
}

#[async_trait]
impl LookupSource for GoogleSheetsSource {
    #[instrument(skip(self))]
    async fn get_record(
        &self,
        table: &str,
        key: &str,
    ) -> Result<Option<LookupRecord>, LookupError> {
        info!(table = %table, "Fetching lookup table");
        let rows = self.fetch_rows(table).await?;
        let record = find_by_code(rows, key);
        info!(table = %table, key = %key, found = record.is_some(), "Lookup finished");
        Ok(record)
    }
}

/// First value row is the header; every later row becomes a record keyed by
/// it. Cells past the header width are dropped; missing trailing cells are
/// simply absent from the record.
fn records_from_values(values: Vec<Vec<serde_json::Value>>) -> Vec<LookupRecord> {
    let mut rows = values.into_iter();
    let Some(header_row) = rows.next() else {
        return Vec::new();
    };
    let header: Vec<String> = header_row.into_iter().map(cell_to_string).collect();

    rows.map(|row| {
        let mut record = HashMap::new();
        for (i, cell) in row.into_iter().enumerate() {
            if let Some(name) = header.get(i) {
                record.insert(name.clone(), cell_to_string(cell));
            }
        }
        LookupRecord::new(record)
    })
    .collect()
}

fn cell_to_string(cell: serde_json::Value) -> String {
    match cell {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_records_from_values_maps_headers_to_cells() {
        let values = vec![
            vec![json!("Code"), json!("Bank name"), json!("IBAN")],
            vec![json!("bhd-bbk"), json!("Acme Bank"), json!("DE123")],
        ];

        let records = records_from_values(values);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].field("Code"), "bhd-bbk");
        assert_eq!(records[0].field("Bank name"), "Acme Bank");
        assert_eq!(records[0].field("IBAN"), "DE123");
    }

    #[test]
    fn test_records_from_values_ragged_rows() {
        let values = vec![
            vec![json!("Code"), json!("IBAN")],
            vec![json!("short")],
            vec![json!("long"), json!("DE1"), json!("ignored-extra")],
        ];

        let records = records_from_values(values);
        assert_eq!(records.len(), 2);
        assert!(records[0].get("IBAN").is_none());
        assert_eq!(records[0].field("IBAN"), "");
        assert_eq!(records[1].field("IBAN"), "DE1");
    }

    #[test]
    fn test_records_from_values_empty_sheet() {
        assert!(records_from_values(Vec::new()).is_empty());
        assert!(records_from_values(vec![vec![json!("Code")]]).is_empty());
    }

    #[test]
    fn test_cell_to_string_non_string_cells() {
        assert_eq!(cell_to_string(json!(42)), "42");
        assert_eq!(cell_to_string(json!(null)), "");
        assert_eq!(cell_to_string(json!("plain")), "plain");
    }
}
