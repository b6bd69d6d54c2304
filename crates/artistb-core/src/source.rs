//! Backend abstraction for reading raw rows.
//!
//! Defines the interface the resolver uses to query the hosted relational
//! store, decoupling probing logic from the transport (REST API, fixtures).

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::row::Row;

/// Read-only access to backend tables.
///
/// # Implementation Notes
///
/// Implementations should return `Err` for anything the backend rejects
/// (unknown table, unknown column, auth failure). Callers decide whether an
/// error is fatal; the page loader treats every error as "no data".
#[async_trait]
pub trait RowSource: Send + Sync {
    /// Finds at most one row of `table` where `column` equals `value`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(row))`: a row matched
    /// - `Ok(None)`: no row matched
    /// - `Err(_)`: the query could not be run
    async fn find_one(&self, table: &str, column: &str, value: &str) -> Result<Option<Row>>;

    /// Reads up to `limit` rows of `table`, in backend order.
    async fn read_table(&self, table: &str, limit: usize) -> Result<Vec<Row>>;
}

/// The backend handed to the resolver: either a live row source or the
/// explicit "not configured" state.
#[derive(Clone)]
pub enum Backend {
    Connected(Arc<dyn RowSource>),
    /// No service URL / key; every read behaves as if the backend were empty
    Unconfigured,
}

impl Backend {
    pub fn connected(source: impl RowSource + 'static) -> Self {
        Self::Connected(Arc::new(source))
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, Self::Connected(_))
    }

    pub async fn find_one(&self, table: &str, column: &str, value: &str) -> Result<Option<Row>> {
        match self {
            Self::Connected(source) => source.find_one(table, column, value).await,
            Self::Unconfigured => Ok(None),
        }
    }

    pub async fn read_table(&self, table: &str, limit: usize) -> Result<Vec<Row>> {
        match self {
            Self::Connected(source) => source.read_table(table, limit).await,
            Self::Unconfigured => Ok(Vec::new()),
        }
    }
}

impl fmt::Debug for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connected(_) => f.write_str("Backend::Connected"),
            Self::Unconfigured => f.write_str("Backend::Unconfigured"),
        }
    }
}
