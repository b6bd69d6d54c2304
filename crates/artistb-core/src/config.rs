//! Configuration models.
//!
//! `RootConfig` mirrors the optional `config.toml`; `BackendConfig` is the
//! resolved, validated pair of service URL and public key.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_ARTWORK_LIMIT: usize = 200;
pub const DEFAULT_EXHIBITION_LIMIT: usize = 120;

/// Service URL and public (anon) API key of the hosted backend.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
}

impl BackendConfig {
    /// Builds a config from possibly missing, untrimmed values.
    ///
    /// Returns `None` unless both values are non-empty after trimming.
    pub fn from_parts(url: Option<&str>, anon_key: Option<&str>) -> Option<Self> {
        let url = url.map(str::trim).filter(|v| !v.is_empty())?;
        let anon_key = anon_key.map(str::trim).filter(|v| !v.is_empty())?;
        Some(Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        })
    }
}

// The key is public but still kept out of logs.
impl fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BackendConfig")
            .field("url", &self.url)
            .field("anon_key", &"<redacted>")
            .finish()
    }
}

/// Row limits for the content table scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderSettings {
    pub artwork_limit: usize,
    pub exhibition_limit: usize,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            artwork_limit: DEFAULT_ARTWORK_LIMIT,
            exhibition_limit: DEFAULT_EXHIBITION_LIMIT,
        }
    }
}

/// `[backend]` section of the config file. Either value may be left to the
/// environment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendSection {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub anon_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootConfig {
    #[serde(default)]
    pub backend: BackendSection,
    #[serde(default)]
    pub loader: LoaderSettings,
}
