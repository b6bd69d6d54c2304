//! Error types for artistb.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the artistb workspace.
///
/// Expected absence (no profile, no rows, no backend configured) is never an
/// error in this crate; these variants cover configuration problems and
/// backend failures that callers may choose to soft-fail.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum ArtistbError {
    /// Configuration error (invalid config file, unusable backend URL)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The backend answered with a non-success status
    #[error("Backend error ({status}) on '{table}': {message}")]
    Http {
        status: u16,
        table: String,
        message: String,
    },

    /// Network / client construction failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON"
        message: String,
    },

    /// IO error (config file access)
    #[error("IO error: {message}")]
    Io { message: String },
}

impl ArtistbError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Http error for a table query
    pub fn http(status: u16, table: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Http {
            status,
            table: table.into(),
            message: message.into(),
        }
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if the backend rejected the query (missing table/column, auth).
    pub fn is_http(&self) -> bool {
        matches!(self, Self::Http { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for ArtistbError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for ArtistbError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ArtistbError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<reqwest::Error> for ArtistbError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Serialization {
                format: "JSON".to_string(),
                message: err.to_string(),
            }
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// A type alias for `Result<T, ArtistbError>`.
pub type Result<T> = std::result::Result<T, ArtistbError>;
