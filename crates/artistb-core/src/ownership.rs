//! Deciding whether an artwork or exhibition row belongs to an artist.
//!
//! Content tables are not guaranteed to carry an owner id, so matching runs
//! in two tiers:
//!
//! 1. Owner id: the first populated owner column on the row against the
//!    profile's `user_id` and `id`.
//! 2. Identity strings: handle / name / username columns on the row against
//!    the profile's handle, username and display name.
//!
//! Both tiers compare after trimming and lowercasing. The string tier can
//! accept rows of a different artist who shares a name; nothing here breaks
//! such ties.

use crate::artist::ArtistProfile;
use crate::row::{Row, string_by_keys};

const OWNER_ID_KEYS: &[&str] = &["user_id", "owner_id", "artist_id", "profile_id"];
const HANDLE_KEYS: &[&str] = &["artist_handle", "artist_slug", "artist_username", "artist"];
const NAME_KEYS: &[&str] = &["artist_name", "vendor", "creator", "author"];
const USERNAME_KEYS: &[&str] = &["profile_username", "username"];

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Ownership test for one resolved artist, reusable across many rows.
#[derive(Debug, Clone)]
pub struct OwnershipMatcher {
    ids: Vec<String>,
    identities: Vec<String>,
}

impl OwnershipMatcher {
    pub fn for_artist(artist: &ArtistProfile) -> Self {
        let ids = [artist.user_id.as_deref(), artist.id.as_deref()]
            .into_iter()
            .flatten()
            .map(normalize)
            .filter(|id| !id.is_empty())
            .collect();

        let identities = [
            artist.handle.as_str(),
            artist.username.as_str(),
            artist.name.as_str(),
        ]
        .into_iter()
        .map(normalize)
        .filter(|identity| !identity.is_empty())
        .collect();

        Self { ids, identities }
    }

    /// True when the row's owner id matches, or failing that, when one of
    /// its identity columns equals the artist's handle, username or name.
    pub fn matches(&self, row: &Row) -> bool {
        if let Some(owner) = string_by_keys(row, OWNER_ID_KEYS) {
            let owner = normalize(&owner);
            if self.ids.iter().any(|id| *id == owner) {
                return true;
            }
        }

        [HANDLE_KEYS, NAME_KEYS, USERNAME_KEYS]
            .into_iter()
            .filter_map(|keys| string_by_keys(row, keys))
            .map(|value| normalize(&value))
            .any(|value| self.identities.contains(&value))
    }
}

/// One-off form of [`OwnershipMatcher::matches`].
pub fn belongs_to(row: &Row, artist: &ArtistProfile) -> bool {
    OwnershipMatcher::for_artist(artist).matches(row)
}
