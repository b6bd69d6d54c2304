use anyhow::{Context, Result};
use artistb_application::{ArtistPageLoader, LoadReport};
use artistb_core::{ArtistArtwork, ArtistExhibition, ArtistPageData};
use artistb_infrastructure::ConfigService;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The page view model as JSON
    Json,
    /// Plain-text overview
    Summary,
}

#[derive(Serialize)]
struct ReportedPage<'a> {
    page: &'a ArtistPageData,
    report: &'a LoadReport,
}

pub async fn run(
    service: &ConfigService,
    username: &str,
    format: OutputFormat,
    with_report: bool,
) -> Result<()> {
    let config = service
        .resolve()
        .context("Failed to load configuration")?;
    let backend = config
        .connect()
        .context("Failed to create backend client")?;

    let loader = ArtistPageLoader::with_settings(backend, config.loader);
    let (data, report) = loader.load_with_report(username).await;

    match format {
        OutputFormat::Json => {
            let json = if with_report {
                serde_json::to_string_pretty(&ReportedPage {
                    page: &data,
                    report: &report,
                })?
            } else {
                serde_json::to_string_pretty(&data)?
            };
            println!("{}", json);
        }
        OutputFormat::Summary => {
            println!("{}", render_summary(username, &data, &report, Utc::now()));
        }
    }

    Ok(())
}

/// Plain-text rendering of a loaded page, as of `now`.
fn render_summary(
    username: &str,
    data: &ArtistPageData,
    report: &LoadReport,
    now: DateTime<Utc>,
) -> String {
    let Some(artist) = data.artist.as_ref() else {
        let mut line = format!("No published profile for '{}'", username);
        if !report.backend_configured {
            line.push_str(" (backend not configured)");
        }
        return line;
    };

    let mut lines = vec![format!("{} (@{})", artist.name, artist.handle)];

    let details: Vec<String> = [
        artist.nationality.clone(),
        artist.birth_year.as_ref().map(|year| format!("b. {}", year)),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !details.is_empty() {
        lines.push(details.join(", "));
    }
    if let (Some(table), Some(column)) = (report.profile_table, report.profile_column) {
        lines.push(format!("Profile: {}.{}", table, column));
    }

    lines.push(String::new());
    lines.push(section_heading("Artworks", data.artworks.len(), report.artwork_table));
    lines.extend(data.artworks.iter().map(artwork_line));
    if report.dropped_artworks > 0 {
        lines.push(format!("  ({} malformed rows skipped)", report.dropped_artworks));
    }

    lines.push(String::new());
    lines.push(section_heading(
        "Exhibitions",
        data.exhibitions.len(),
        report.exhibition_table,
    ));
    lines.extend(data.exhibitions.iter().map(|show| exhibition_line(show, now)));
    if report.dropped_exhibitions > 0 {
        lines.push(format!("  ({} malformed rows skipped)", report.dropped_exhibitions));
    }

    lines.join("\n")
}

fn section_heading(title: &str, count: usize, table: Option<&str>) -> String {
    match table {
        Some(table) => format!("{} ({}, from {})", title, count, table),
        None => format!("{} ({})", title, count),
    }
}

fn artwork_line(work: &ArtistArtwork) -> String {
    let mut parts = vec![match work.year.as_deref() {
        Some(year) => format!("{} ({})", work.title, year),
        None => work.title.clone(),
    }];
    if let Some(medium) = work.medium.as_deref() {
        parts.push(medium.to_string());
    }
    parts.push(work.price_label.clone());
    format!("  - {}", parts.join(" | "))
}

fn exhibition_line(show: &ArtistExhibition, now: DateTime<Utc>) -> String {
    let heading = show.heading_parts();
    let mut parts = vec![match heading.secondary {
        Some(secondary) => format!("{}: {}", heading.primary, secondary),
        None => heading.primary.to_string(),
    }];
    parts.extend(show.date_label());
    parts.extend(show.location.clone());
    format!(
        "  - [{}] {}",
        show.status_at(now).label(),
        parts.join(" | ")
    )
}
