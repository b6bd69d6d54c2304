//! Domain layer of artistb: view models for public artist pages and the
//! heuristics that read them out of backend tables whose schema this
//! workspace does not control.

pub mod artist;
pub mod config;
pub mod error;
pub mod format;
pub mod media;
pub mod ownership;
pub mod row;
pub mod source;

// Re-export common types
pub use artist::{ArtistArtwork, ArtistExhibition, ArtistPageData, ArtistProfile, ExhibitionStatus};
pub use error::{ArtistbError, Result};
pub use ownership::OwnershipMatcher;
pub use row::Row;
pub use source::{Backend, RowSource};
