//! Artist view models.
//!
//! # Module Structure
//!
//! - `profile`: the resolved artist profile
//! - `artwork`: artworks with availability and price labels
//! - `exhibition`: exhibitions with status, heading and date helpers
//! - `page`: the aggregate returned for a public page load
//!
//! Each model is built from a loosely typed [`Row`](crate::row::Row) with
//! `from_row`; rows missing required fields map to `None`.

mod artwork;
mod exhibition;
mod page;
mod profile;

pub use artwork::ArtistArtwork;
pub use exhibition::{ArtistExhibition, ExhibitionStatus, HeadingParts};
pub use page::ArtistPageData;
pub use profile::ArtistProfile;
