//! ArtistPageLoader - the public read path.
//!
//! Loads everything a public artist page needs for one username:
//! 1. Resolve the profile (see [`ProfileResolver`]); without one, stop.
//! 2. Scan artwork tables in order, keeping rows owned by the artist, and
//!    stop at the first table that yields any.
//! 3. Same for exhibition tables, then sort exhibitions newest first.
//!
//! Every backend failure degrades to "no data"; nothing here returns an error.

use artistb_core::config::LoaderSettings;
use artistb_core::{
    ArtistArtwork, ArtistExhibition, ArtistPageData, ArtistbError, Backend, OwnershipMatcher, Row,
};

use crate::profile_resolver::ProfileResolver;
use crate::report::LoadReport;

/// Candidate artwork tables, in scan order.
pub const ARTWORK_TABLES: &[&str] = &["artworks", "works", "products"];
/// Candidate exhibition tables, in scan order.
pub const EXHIBITION_TABLES: &[&str] = &["exhibitions", "shows"];

/// Result of scanning one family of content tables.
struct Collected<T> {
    items: Vec<T>,
    table: Option<&'static str>,
    dropped: usize,
}

#[derive(Debug, Clone)]
pub struct ArtistPageLoader {
    backend: Backend,
    resolver: ProfileResolver,
    settings: LoaderSettings,
}

impl ArtistPageLoader {
    pub fn new(backend: Backend) -> Self {
        Self::with_settings(backend, LoaderSettings::default())
    }

    pub fn with_settings(backend: Backend, settings: LoaderSettings) -> Self {
        Self {
            resolver: ProfileResolver::new(backend.clone()),
            backend,
            settings,
        }
    }

    /// Loads the page data for `username`.
    pub async fn load(&self, username: &str) -> ArtistPageData {
        self.load_with_report(username).await.0
    }

    /// Same as [`load`](Self::load), plus a report of which tables supplied
    /// the data and how many owned rows were dropped as malformed.
    pub async fn load_with_report(&self, username: &str) -> (ArtistPageData, LoadReport) {
        let mut report = LoadReport {
            backend_configured: self.backend.is_configured(),
            ..LoadReport::default()
        };

        let Some(resolved) = self.resolver.resolve(username).await else {
            return (ArtistPageData::empty(), report);
        };
        report.profile_table = Some(resolved.table);
        report.profile_column = Some(resolved.column);

        let artist = resolved.profile;
        let matcher = OwnershipMatcher::for_artist(&artist);

        let artworks = self
            .collect_owned(
                ARTWORK_TABLES,
                self.settings.artwork_limit,
                &matcher,
                ArtistArtwork::from_row,
            )
            .await;
        report.artwork_table = artworks.table;
        report.dropped_artworks = artworks.dropped;

        let mut exhibitions = self
            .collect_owned(
                EXHIBITION_TABLES,
                self.settings.exhibition_limit,
                &matcher,
                ArtistExhibition::from_row,
            )
            .await;
        report.exhibition_table = exhibitions.table;
        report.dropped_exhibitions = exhibitions.dropped;

        exhibitions.items.sort_by(ArtistExhibition::cmp_newest_first);

        tracing::info!(
            "[ArtistPageLoader] Loaded '{}': {} artworks, {} exhibitions",
            username,
            artworks.items.len(),
            exhibitions.items.len()
        );

        let data = ArtistPageData {
            artist: Some(artist),
            artworks: artworks.items,
            exhibitions: exhibitions.items,
        };
        (data, report)
    }

    /// Scans `tables` in order and returns the owned, well-formed rows of the
    /// first table that has any. Tables that fail to read are skipped.
    async fn collect_owned<T>(
        &self,
        tables: &'static [&'static str],
        limit: usize,
        matcher: &OwnershipMatcher,
        map: fn(&Row) -> Option<T>,
    ) -> Collected<T> {
        let mut dropped = 0;

        for &table in tables {
            let rows = match self.backend.read_table(table, limit).await {
                Ok(rows) => rows,
                Err(e) => {
                    log_skip(table, &e);
                    continue;
                }
            };

            let mut items = Vec::new();
            for row in rows.iter().filter(|row| matcher.matches(row)) {
                match map(row) {
                    Some(item) => items.push(item),
                    None => dropped += 1,
                }
            }

            if !items.is_empty() {
                tracing::debug!(
                    "[ArtistPageLoader] Using {} ({} of {} rows owned)",
                    table,
                    items.len(),
                    rows.len()
                );
                return Collected {
                    items,
                    table: Some(table),
                    dropped,
                };
            }
        }

        Collected {
            items: Vec::new(),
            table: None,
            dropped,
        }
    }
}

fn log_skip(table: &str, error: &ArtistbError) {
    if error.is_http() {
        tracing::debug!("[ArtistPageLoader] Skipping {}: {}", table, error);
    } else {
        tracing::warn!("[ArtistPageLoader] Skipping {}: {}", table, error);
    }
}
