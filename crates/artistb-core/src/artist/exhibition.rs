//! ArtistExhibition view model and its render-time helpers.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::format::format_range;
use crate::media::{ImageRef, image_by_keys};
use crate::row::{Row, coerce_bool, coerce_date, first_present, string_by_keys};

const ID_KEYS: &[&str] = &["id", "uuid", "handle", "slug"];
const TITLE_KEYS: &[&str] = &["title", "name"];
const HANDLE_KEYS: &[&str] = &["handle", "slug"];
const ARTIST_KEYS: &[&str] = &["artist", "artist_name"];
const LOCATION_KEYS: &[&str] = &["location", "subtitle", "venue"];
const SUMMARY_KEYS: &[&str] = &["summary", "teaser", "short_text", "description"];
const START_KEYS: &[&str] = &["start_date", "start", "startdate"];
const END_KEYS: &[&str] = &["end_date", "end", "enddate"];
const GROUP_KEYS: &[&str] = &["is_group", "isgroup"];
const HERO_KEYS: &[&str] = &[
    "hero_image",
    "cover_image",
    "image_url",
    "image",
    "coverimage",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistExhibition {
    pub id: String,
    pub handle: String,
    pub title: String,
    /// Artist label as entered on the show (may differ from the profile name)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_group: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<ImageRef>,
}

/// Where an exhibition sits relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExhibitionStatus {
    Current,
    Upcoming,
    Past,
}

impl ExhibitionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Current => "CURRENT EXHIBITION",
            Self::Upcoming => "UPCOMING EXHIBITION",
            Self::Past => "PAST EXHIBITION",
        }
    }

    /// Call-to-action text for the exhibition card.
    pub fn action_label(&self) -> &'static str {
        match self {
            Self::Current => "View Exhibition",
            Self::Upcoming => "Learn More",
            Self::Past => "View Exhibition Archive",
        }
    }
}

/// Primary and secondary heading lines for an exhibition card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingParts<'a> {
    pub primary: &'a str,
    pub secondary: Option<&'a str>,
}

impl ArtistExhibition {
    /// Maps an exhibition row, or `None` when it has no id or no title.
    ///
    /// Dates and the group flag come from the first alias that is present at
    /// all; an unparseable value there leaves the field empty rather than
    /// falling through to the next alias.
    pub fn from_row(row: &Row) -> Option<Self> {
        let id = string_by_keys(row, ID_KEYS)?;
        let title = string_by_keys(row, TITLE_KEYS)?;

        Some(Self {
            handle: string_by_keys(row, HANDLE_KEYS).unwrap_or_else(|| id.clone()),
            id,
            title,
            artist: string_by_keys(row, ARTIST_KEYS),
            location: string_by_keys(row, LOCATION_KEYS),
            summary: string_by_keys(row, SUMMARY_KEYS),
            start: first_present(row, START_KEYS).and_then(coerce_date),
            end: first_present(row, END_KEYS).and_then(coerce_date),
            is_group: first_present(row, GROUP_KEYS).and_then(coerce_bool),
            hero: image_by_keys(row, HERO_KEYS),
        })
    }

    /// The date used to order exhibitions: start, else end, else the epoch.
    pub fn sort_key(&self) -> DateTime<Utc> {
        self.start
            .or(self.end)
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }

    /// Most recent (or soonest upcoming) first.
    pub fn cmp_newest_first(a: &Self, b: &Self) -> Ordering {
        b.sort_key().cmp(&a.sort_key())
    }

    pub fn status_at(&self, now: DateTime<Utc>) -> ExhibitionStatus {
        match self.start {
            Some(start) if start <= now && self.end.is_none_or(|end| end >= now) => {
                ExhibitionStatus::Current
            }
            Some(start) if start > now => ExhibitionStatus::Upcoming,
            _ => ExhibitionStatus::Past,
        }
    }

    /// Solo shows lead with the artist; group shows and shows without an
    /// artist label lead with the title.
    pub fn heading_parts(&self) -> HeadingParts<'_> {
        match self.artist.as_deref() {
            Some(artist) if self.is_group != Some(true) => HeadingParts {
                primary: artist,
                secondary: Some(self.title.as_str()),
            },
            artist => HeadingParts {
                primary: self.title.as_str(),
                secondary: artist,
            },
        }
    }

    /// `10 Jan 2026 - 12 Feb 2026`, or `None` without a start date.
    pub fn date_label(&self) -> Option<String> {
        self.start
            .as_ref()
            .map(|start| format_range(start, self.end.as_ref()))
    }
}
