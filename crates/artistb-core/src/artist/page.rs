//! The aggregate view model behind a public artist page.

use serde::{Deserialize, Serialize};

use super::{ArtistArtwork, ArtistExhibition, ArtistProfile};

/// Everything the public page renders for one username.
///
/// `artist` is `None` both when no profile exists and when no backend is
/// configured; artworks and exhibitions are then always empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistPageData {
    pub artist: Option<ArtistProfile>,
    pub artworks: Vec<ArtistArtwork>,
    pub exhibitions: Vec<ArtistExhibition>,
}

impl ArtistPageData {
    /// The page for an unknown or unpublished username.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_published(&self) -> bool {
        self.artist.is_some()
    }
}
