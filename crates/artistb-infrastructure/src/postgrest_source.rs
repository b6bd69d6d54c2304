//! PostgrestRowSource - REST implementation of `RowSource`.
//!
//! Talks to the `/rest/v1` endpoint of a hosted Postgres backend using the
//! public (anon) key. Only the two read shapes the resolver needs are
//! implemented: equality lookup with `limit=1`, and a bounded table scan.

use artistb_core::config::BackendConfig;
use artistb_core::{ArtistbError, Result, Row, RowSource};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;

const REST_PATH: &str = "rest/v1";

/// Row source backed by the hosted backend's REST API.
#[derive(Clone)]
pub struct PostgrestRowSource {
    client: Client,
    rest_url: String,
    anon_key: String,
}

impl PostgrestRowSource {
    /// Creates a row source for the given backend.
    ///
    /// Uses the HTTP client's default timeouts; no retries are attempted.
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| ArtistbError::transport(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: &BackendConfig) -> Self {
        Self {
            client,
            rest_url: format!("{}/{}", config.url.trim_end_matches('/'), REST_PATH),
            anon_key: config.anon_key.clone(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/{}", self.rest_url, table)
    }

    async fn fetch_rows(&self, table: &str, query: &[(&str, String)]) -> Result<Vec<Row>> {
        let response = self
            .client
            .get(self.table_url(table))
            .query(query)
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
            .header("Accept", "application/json")
            .send()
            .await?;

        let response = check_status(response, table).await?;
        let body: Value = response.json().await?;
        rows_from_body(body, table)
    }
}

async fn check_status(response: Response, table: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(ArtistbError::http(status.as_u16(), table, error_text))
}

/// Keeps the object rows of a JSON array response.
fn rows_from_body(body: Value, table: &str) -> Result<Vec<Row>> {
    match body {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(row) => Some(row),
                _ => None,
            })
            .collect()),
        other => Err(ArtistbError::Serialization {
            format: "JSON".to_string(),
            message: format!("expected an array of rows from '{}', got {}", table, kind(&other)),
        }),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[async_trait]
impl RowSource for PostgrestRowSource {
    async fn find_one(&self, table: &str, column: &str, value: &str) -> Result<Option<Row>> {
        let query = [
            ("select", "*".to_string()),
            (column, format!("eq.{}", value)),
            ("limit", "1".to_string()),
        ];
        let rows = self.fetch_rows(table, &query).await?;
        Ok(rows.into_iter().next())
    }

    async fn read_table(&self, table: &str, limit: usize) -> Result<Vec<Row>> {
        let query = [("select", "*".to_string()), ("limit", limit.to_string())];
        self.fetch_rows(table, &query).await
    }
}
