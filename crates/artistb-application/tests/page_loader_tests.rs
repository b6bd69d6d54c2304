use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use artistb_application::{ArtistPageLoader, LoadReport, PROFILE_KEYS, PROFILE_TABLES};
use artistb_core::config::LoaderSettings;
use artistb_core::row::coerce_string;
use artistb_core::{ArtistPageData, ArtistbError, Backend, Result, Row, RowSource};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    FindOne(String, String),
    ReadTable(String, usize),
}

// In-memory backend: unknown tables answer 404 like the REST API does
#[derive(Default)]
struct InMemoryRowSource {
    tables: HashMap<String, Vec<Row>>,
    unreachable: Vec<String>,
    calls: Arc<Mutex<Vec<Call>>>,
}

impl InMemoryRowSource {
    fn new() -> Self {
        Self::default()
    }

    fn with_table(mut self, table: &str, rows: Value) -> Self {
        let rows = rows
            .as_array()
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .filter_map(|row| row.as_object().cloned())
            .collect();
        self.tables.insert(table.to_string(), rows);
        self
    }

    fn with_unreachable(mut self, table: &str) -> Self {
        self.unreachable.push(table.to_string());
        self
    }

    fn calls(&self) -> Arc<Mutex<Vec<Call>>> {
        self.calls.clone()
    }

    fn table(&self, table: &str) -> Result<&Vec<Row>> {
        if self.unreachable.iter().any(|t| t == table) {
            return Err(ArtistbError::transport("connection reset"));
        }
        self.tables
            .get(table)
            .ok_or_else(|| ArtistbError::http(404, table, "relation does not exist"))
    }
}

#[async_trait]
impl RowSource for InMemoryRowSource {
    async fn find_one(&self, table: &str, column: &str, value: &str) -> Result<Option<Row>> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::FindOne(table.to_string(), column.to_string()));
        let rows = self.table(table)?;
        Ok(rows
            .iter()
            .find(|row| row.get(column).and_then(coerce_string).as_deref() == Some(value))
            .cloned())
    }

    async fn read_table(&self, table: &str, limit: usize) -> Result<Vec<Row>> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::ReadTable(table.to_string(), limit));
        let rows = self.table(table)?;
        Ok(rows.iter().take(limit).cloned().collect())
    }
}

fn jane_profile_table() -> InMemoryRowSource {
    InMemoryRowSource::new().with_table(
        "artists",
        json!([
            {"id": "p-jane", "user_id": "u-jane", "username": "janedoe", "name": "Jane Doe"},
            {"id": "p-john", "user_id": "u-john", "username": "johnroe", "name": "John Roe"}
        ]),
    )
}

#[tokio::test]
async fn test_unknown_username_returns_empty_page() {
    let source = jane_profile_table().with_table("artworks", json!([{"id": 1, "title": "Tide"}]));
    let calls = source.calls();
    let loader = ArtistPageLoader::new(Backend::connected(source));

    let (data, report) = loader.load_with_report("nobody").await;

    assert_eq!(data, ArtistPageData::empty());
    assert!(report.backend_configured);
    assert_eq!(report.profile_table, None);

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), PROFILE_TABLES.len() * PROFILE_KEYS.len());
    assert!(calls.iter().all(|call| matches!(call, Call::FindOne(..))));
}

#[tokio::test]
async fn test_unconfigured_backend_returns_empty_page() {
    let loader = ArtistPageLoader::new(Backend::Unconfigured);
    let (data, report) = loader.load_with_report("janedoe").await;

    assert_eq!(data, ArtistPageData::empty());
    assert_eq!(
        report,
        LoadReport {
            backend_configured: false,
            ..LoadReport::default()
        }
    );
}

#[tokio::test]
async fn test_profile_probe_order_skips_missing_tables_and_columns() {
    let source = InMemoryRowSource::new()
        .with_table("artist_profiles", json!([{"username": "someone-else"}]))
        .with_table("profiles", json!([{"handle": "mira", "display_name": "Mira K."}]));
    let calls = source.calls();
    let loader = ArtistPageLoader::new(Backend::connected(source));

    let (data, report) = loader.load_with_report("mira").await;

    let artist = data.artist.expect("profile should resolve");
    assert_eq!(artist.name, "Mira K.");
    assert_eq!(artist.username, "mira");
    assert_eq!(report.profile_table, Some("profiles"));
    assert_eq!(report.profile_column, Some("handle"));

    let probes: Vec<Call> = calls
        .lock()
        .unwrap()
        .iter()
        .filter(|call| matches!(call, Call::FindOne(..)))
        .cloned()
        .collect();
    assert_eq!(probes.len(), 3 + 3 + 2);
    assert_eq!(probes.last(), Some(&Call::FindOne("profiles".into(), "handle".into())));
}

#[tokio::test]
async fn test_first_table_with_owned_rows_wins() {
    let source = jane_profile_table()
        .with_table("artworks", json!([{"id": 1, "title": "Not hers", "user_id": "u-john"}]))
        .with_table(
            "works",
            json!([
                {"id": 2, "title": "Tide", "user_id": "U-JANE", "price": 2600},
                {"id": 3, "title": "Other", "user_id": "u-john"}
            ]),
        )
        .with_table("products", json!([{"id": 4, "title": "Print", "vendor": "Jane Doe"}]));
    let loader = ArtistPageLoader::new(Backend::connected(source));

    let (data, report) = loader.load_with_report("janedoe").await;

    let titles: Vec<_> = data.artworks.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["Tide"]);
    assert_eq!(data.artworks[0].price_label, "$2,600");
    assert_eq!(report.artwork_table, Some("works"));
}

#[tokio::test]
async fn test_sold_and_price_labels_through_loader() {
    let source = jane_profile_table().with_table(
        "artworks",
        json!([
            {"id": 1, "title": "Sold one", "artist_id": "p-jane", "sold": true, "price": 2600},
            {"id": 2, "title": "Half", "artist_id": "p-jane", "price": "2600.5"},
            {"id": 3, "title": "Ask", "artist_id": "p-jane"}
        ]),
    );
    let loader = ArtistPageLoader::new(Backend::connected(source));

    let data = loader.load("janedoe").await;
    let labels: Vec<_> = data
        .artworks
        .iter()
        .map(|a| (a.available_for_sale, a.price_label.as_str()))
        .collect();
    assert_eq!(
        labels,
        vec![(false, "Sold"), (true, "$2,600.50"), (true, "Price on request")]
    );
}

#[tokio::test]
async fn test_exhibitions_sorted_newest_first() {
    let source = jane_profile_table().with_table(
        "shows",
        json!([
            {"id": "old", "title": "Spring", "user_id": "u-jane", "start_date": "2025-05-01"},
            {"id": "none", "title": "Undated", "user_id": "u-jane"},
            {"id": "new", "title": "Winter", "user_id": "u-jane", "start_date": "2026-01-10"}
        ]),
    );
    let loader = ArtistPageLoader::new(Backend::connected(source));

    let (data, report) = loader.load_with_report("janedoe").await;

    let ids: Vec<_> = data.exhibitions.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["new", "old", "none"]);
    assert_eq!(
        data.exhibitions[0].start,
        Some(Utc.with_ymd_and_hms(2026, 1, 10, 0, 0, 0).unwrap())
    );
    assert_eq!(report.exhibition_table, Some("shows"));
}

#[tokio::test]
async fn test_handle_fallback_matches_case_insensitively() {
    let source = InMemoryRowSource::new()
        .with_table("artists", json!([{"username": "janedoe", "handle": "janedoe"}]))
        .with_table("artworks", json!([{"id": 1, "title": "Tide", "artist_handle": "JaneDoe"}]));
    let loader = ArtistPageLoader::new(Backend::connected(source));

    let data = loader.load("janedoe").await;
    assert_eq!(data.artworks.len(), 1);
}

#[tokio::test]
async fn test_untitled_rows_are_dropped_and_counted() {
    let source = jane_profile_table()
        .with_table(
            "artworks",
            json!([
                {"id": 1, "title": "", "user_id": "u-jane"},
                {"id": 2, "user_id": "u-jane"},
                {"id": 3, "title": "Tide", "user_id": "u-jane"},
                {"id": 4, "user_id": "u-john"}
            ]),
        )
        .with_table("exhibitions", json!([{"id": "x", "name": "  ", "user_id": "u-jane"}]));
    let loader = ArtistPageLoader::new(Backend::connected(source));

    let (data, report) = loader.load_with_report("janedoe").await;

    assert_eq!(data.artworks.len(), 1);
    assert_eq!(data.artworks[0].title, "Tide");
    assert!(data.exhibitions.is_empty());
    assert_eq!(report.dropped_artworks, 2);
    assert_eq!(report.dropped_exhibitions, 1);
    assert_eq!(report.exhibition_table, None);
}

#[tokio::test]
async fn test_unreachable_table_is_skipped() {
    let source = jane_profile_table()
        .with_unreachable("artworks")
        .with_table("works", json!([{"id": 1, "title": "Tide", "user_id": "u-jane"}]));
    let loader = ArtistPageLoader::new(Backend::connected(source));

    let (data, report) = loader.load_with_report("janedoe").await;
    assert_eq!(data.artworks.len(), 1);
    assert_eq!(report.artwork_table, Some("works"));
}

#[tokio::test]
async fn test_loader_settings_bound_table_scans() {
    let source = jane_profile_table()
        .with_table(
            "artworks",
            json!([
                {"id": 1, "title": "A", "user_id": "u-jane"},
                {"id": 2, "title": "B", "user_id": "u-jane"}
            ]),
        )
        .with_table("exhibitions", json!([]));
    let calls = source.calls();
    let settings = LoaderSettings {
        artwork_limit: 1,
        exhibition_limit: 7,
    };
    let loader = ArtistPageLoader::with_settings(Backend::connected(source), settings);

    let data = loader.load("janedoe").await;
    assert_eq!(data.artworks.len(), 1);

    let calls = calls.lock().unwrap();
    assert!(calls.contains(&Call::ReadTable("artworks".into(), 1)));
    assert!(calls.contains(&Call::ReadTable("exhibitions".into(), 7)));
    assert!(calls.contains(&Call::ReadTable("shows".into(), 7)));
}

#[tokio::test]
async fn test_page_data_serializes_for_web_consumers() {
    let source = jane_profile_table().with_table(
        "artworks",
        json!([{"id": 1, "title": "Tide", "user_id": "u-jane", "sold": "true"}]),
    );
    let loader = ArtistPageLoader::new(Backend::connected(source));

    let value = serde_json::to_value(loader.load("janedoe").await).unwrap();
    assert_eq!(value["artist"]["userId"], json!("u-jane"));
    assert_eq!(value["artworks"][0]["availableForSale"], json!(false));
    assert_eq!(value["artworks"][0]["priceLabel"], json!("Sold"));
    assert_eq!(value["exhibitions"], json!([]));
}
