//! ArtistArtwork view model.

use serde::{Deserialize, Serialize};

use crate::format::price_label;
use crate::media::{ImageRef, image_by_keys};
use crate::row::{Row, coerce_bool, parse_number, string_by_keys};

const ID_KEYS: &[&str] = &["id", "uuid", "handle", "slug"];
const TITLE_KEYS: &[&str] = &["title", "name"];
const HANDLE_KEYS: &[&str] = &["handle", "slug"];
const YEAR_KEYS: &[&str] = &["year", "date"];
const MEDIUM_KEYS: &[&str] = &["medium", "material"];
const IMAGE_KEYS: &[&str] = &[
    "image_url",
    "featured_image",
    "thumbnail",
    "image",
    "coverimage",
];
const PRICE_KEYS: &[&str] = &["price", "price_amount", "amount"];
const CURRENCY_KEYS: &[&str] = &["currency", "currency_code"];
const EXHIBITION_KEYS: &[&str] = &["exhibition_handle", "exhibition_slug"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistArtwork {
    pub id: String,
    pub handle: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    pub available_for_sale: bool,
    /// "Sold", a formatted price, or "Price on request"
    pub price_label: String,
    /// Handle of the exhibition the work was shown in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exhibition_handle: Option<String>,
}

impl ArtistArtwork {
    /// Maps an artwork row, or `None` when it has no id or no title.
    pub fn from_row(row: &Row) -> Option<Self> {
        let id = string_by_keys(row, ID_KEYS)?;
        let title = string_by_keys(row, TITLE_KEYS)?;

        let available_for_sale = availability(row);
        let amount = string_by_keys(row, PRICE_KEYS).and_then(|raw| parse_number(&raw));
        let currency = string_by_keys(row, CURRENCY_KEYS);

        Some(Self {
            handle: string_by_keys(row, HANDLE_KEYS).unwrap_or_else(|| id.clone()),
            id,
            title,
            year: string_by_keys(row, YEAR_KEYS),
            medium: string_by_keys(row, MEDIUM_KEYS),
            image: image_by_keys(row, IMAGE_KEYS),
            available_for_sale,
            price_label: price_label(available_for_sale, amount, currency.as_deref()),
            exhibition_handle: string_by_keys(row, EXHIBITION_KEYS),
        })
    }
}

/// `sold: true` always wins; otherwise `available_for_sale`, then
/// `available`, defaulting to true.
fn availability(row: &Row) -> bool {
    if row.get("sold").and_then(coerce_bool) == Some(true) {
        return false;
    }
    row.get("available_for_sale")
        .and_then(coerce_bool)
        .or_else(|| row.get("available").and_then(coerce_bool))
        .unwrap_or(true)
}
