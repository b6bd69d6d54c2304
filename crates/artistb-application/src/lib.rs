pub mod page_loader;
pub mod profile_resolver;
pub mod report;

pub use page_loader::{ARTWORK_TABLES, ArtistPageLoader, EXHIBITION_TABLES};
pub use profile_resolver::{PROFILE_KEYS, PROFILE_TABLES, ProfileResolver, ResolvedProfile};
pub use report::LoadReport;
