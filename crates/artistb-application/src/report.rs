//! Side-channel diagnostics for a page load.

use serde::Serialize;

/// Where a page load found its data.
///
/// Purely informational: the page data itself is the same whether or not
/// the report is requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadReport {
    pub backend_configured: bool,
    pub profile_table: Option<&'static str>,
    pub profile_column: Option<&'static str>,
    pub artwork_table: Option<&'static str>,
    pub exhibition_table: Option<&'static str>,
    /// Owned artwork rows dropped for a missing id or title
    pub dropped_artworks: usize,
    /// Owned exhibition rows dropped for a missing id or title
    pub dropped_exhibitions: usize,
}
