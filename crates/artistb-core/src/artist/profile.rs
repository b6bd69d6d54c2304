//! ArtistProfile view model.

use serde::{Deserialize, Serialize};

use crate::format::to_paragraph_html;
use crate::media::{ImageRef, image_by_keys};
use crate::row::{Row, string_by_keys};

const HANDLE_KEYS: &[&str] = &["handle", "slug", "username"];
const NAME_KEYS: &[&str] = &["name", "title", "full_name", "display_name"];
const BIO_KEYS: &[&str] = &[
    "bio_html",
    "bio",
    "biography",
    "about",
    "description",
    "long_text",
];
const ID_KEYS: &[&str] = &["id", "uuid"];
const USER_ID_KEYS: &[&str] = &["user_id", "userid", "owner_id"];
const NATIONALITY_KEYS: &[&str] = &["nationality", "country", "origin"];
const BIRTH_YEAR_KEYS: &[&str] = &["birth_year", "birthyear", "birth", "born"];
const COVER_KEYS: &[&str] = &[
    "coverimage",
    "cover_image",
    "hero_image",
    "image_url",
    "image",
];

/// A resolved artist profile.
///
/// `username` is the lookup key and is always present; every other field is
/// best-effort, read from whichever columns the backend table happens to use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistProfile {
    /// Backend row id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Id of the auth user that owns the profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub username: String,
    /// Display slug; may equal `username`
    pub handle: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio_html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<ImageRef>,
}

impl ArtistProfile {
    /// Maps a profile row found by looking up `username`.
    ///
    /// Never fails: the handle falls back to the username and the name falls
    /// back to the handle.
    pub fn from_row(row: &Row, username: &str) -> Self {
        let handle = string_by_keys(row, HANDLE_KEYS).unwrap_or_else(|| username.to_string());
        let name = string_by_keys(row, NAME_KEYS).unwrap_or_else(|| handle.clone());
        let bio = string_by_keys(row, BIO_KEYS);

        Self {
            id: string_by_keys(row, ID_KEYS),
            user_id: string_by_keys(row, USER_ID_KEYS),
            username: username.to_string(),
            handle,
            name,
            nationality: string_by_keys(row, NATIONALITY_KEYS),
            birth_year: string_by_keys(row, BIRTH_YEAR_KEYS),
            bio_html: to_paragraph_html(bio.as_deref()),
            cover: image_by_keys(row, COVER_KEYS),
        }
    }
}
