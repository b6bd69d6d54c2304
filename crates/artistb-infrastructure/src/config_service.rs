//! Configuration service implementation.
//!
//! Resolves backend settings from an optional `config.toml`
//! (~/.config/artistb/config.toml by default) and the environment.
//!
//! Priority per value: config file > environment variables. A missing file is
//! the common case and not an error; a file that exists but does not parse is.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use artistb_core::config::{BackendConfig, LoaderSettings, RootConfig};
use artistb_core::{ArtistbError, Backend, Result};

use crate::postgrest_source::PostgrestRowSource;

/// Environment variables holding the service URL, in lookup order.
pub const URL_ENV_VARS: &[&str] = &["NEXT_PUBLIC_SUPABASE_URL", "SUPABASE_URL"];
/// Environment variables holding the public API key, in lookup order.
pub const KEY_ENV_VARS: &[&str] = &["NEXT_PUBLIC_SUPABASE_ANON_KEY", "SUPABASE_ANON_KEY"];

const APP_DIR: &str = "artistb";
const CONFIG_FILE: &str = "config.toml";

type EnvLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Settings after merging file and environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// `None` when either the URL or the key is missing
    pub backend: Option<BackendConfig>,
    pub loader: LoaderSettings,
}

impl ResolvedConfig {
    /// Builds the backend handle; an absent config yields `Backend::Unconfigured`.
    pub fn connect(&self) -> Result<Backend> {
        match &self.backend {
            Some(config) => {
                tracing::debug!("[ConfigService] Connecting to backend at {}", config.url);
                Ok(Backend::connected(PostgrestRowSource::new(config)?))
            }
            None => {
                tracing::info!("[ConfigService] Backend URL or key missing; running unconfigured");
                Ok(Backend::Unconfigured)
            }
        }
    }
}

/// Loads configuration from file and environment.
#[derive(Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
    env: EnvLookup,
}

impl ConfigService {
    /// Uses the default config path and the process environment.
    pub fn new() -> Self {
        Self {
            path: Self::default_config_path(),
            env: Arc::new(|name: &str| std::env::var(name).ok()),
        }
    }

    /// Uses an explicit config file path.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Ignores any config file; environment only.
    pub fn without_file(mut self) -> Self {
        self.path = None;
        self
    }

    /// Replaces environment lookup (tests, embedding).
    pub fn with_env_lookup(
        mut self,
        lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.env = Arc::new(lookup);
        self
    }

    /// `<config dir>/artistb/config.toml`, if the platform has a config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Reads the config file, or defaults when there is none.
    pub fn load_root_config(&self) -> Result<RootConfig> {
        let Some(path) = self.path.as_deref() else {
            return Ok(RootConfig::default());
        };
        if !path.exists() {
            tracing::debug!("[ConfigService] No config file at {}", path.display());
            return Ok(RootConfig::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            ArtistbError::config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Merges the file's `[backend]` section with the environment.
    pub fn backend_config(&self, root: &RootConfig) -> Option<BackendConfig> {
        let url = non_empty(root.backend.url.clone()).or_else(|| self.first_env(URL_ENV_VARS));
        let anon_key =
            non_empty(root.backend.anon_key.clone()).or_else(|| self.first_env(KEY_ENV_VARS));
        BackendConfig::from_parts(url.as_deref(), anon_key.as_deref())
    }

    pub fn resolve(&self) -> Result<ResolvedConfig> {
        let root = self.load_root_config()?;
        Ok(ResolvedConfig {
            backend: self.backend_config(&root),
            loader: root.loader,
        })
    }

    fn first_env(&self, names: &[&str]) -> Option<String> {
        names.iter().find_map(|name| non_empty((self.env)(name)))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConfigService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigService")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + Send + Sync + 'static {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_env_only_configuration() {
        let service = ConfigService::new().without_file().with_env_lookup(env(&[
            ("NEXT_PUBLIC_SUPABASE_URL", " https://demo.supabase.co "),
            ("NEXT_PUBLIC_SUPABASE_ANON_KEY", "anon"),
        ]));
        let resolved = service.resolve().unwrap();
        let backend = resolved.backend.unwrap();
        assert_eq!(backend.url, "https://demo.supabase.co");
        assert_eq!(backend.anon_key, "anon");
        assert_eq!(resolved.loader, LoaderSettings::default());
    }

    #[test]
    fn test_fallback_env_names_and_blank_values() {
        let service = ConfigService::new().without_file().with_env_lookup(env(&[
            ("NEXT_PUBLIC_SUPABASE_URL", "   "),
            ("SUPABASE_URL", "https://other.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
        ]));
        let backend = service.resolve().unwrap().backend.unwrap();
        assert_eq!(backend.url, "https://other.supabase.co");
    }

    #[test]
    fn test_missing_key_is_unconfigured() {
        let service = ConfigService::new()
            .without_file()
            .with_env_lookup(env(&[("NEXT_PUBLIC_SUPABASE_URL", "https://demo.supabase.co")]));
        let resolved = service.resolve().unwrap();
        assert!(resolved.backend.is_none());
        assert!(!resolved.connect().unwrap().is_configured());
    }

    #[test]
    fn test_file_overrides_environment() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[backend]\nurl = \"https://file.supabase.co\"\n\n[loader]\nexhibition_limit = 10\n",
        )
        .unwrap();

        let service = ConfigService::new().with_path(&path).with_env_lookup(env(&[
            ("NEXT_PUBLIC_SUPABASE_URL", "https://env.supabase.co"),
            ("NEXT_PUBLIC_SUPABASE_ANON_KEY", "env-key"),
        ]));
        let resolved = service.resolve().unwrap();
        let backend = resolved.backend.clone().unwrap();
        assert_eq!(backend.url, "https://file.supabase.co");
        assert_eq!(backend.anon_key, "env-key");
        assert_eq!(resolved.loader.exhibition_limit, 10);
        assert_eq!(resolved.loader.artwork_limit, 200);
        assert!(resolved.connect().unwrap().is_configured());
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new()
            .with_path(temp_dir.path().join("absent.toml"))
            .with_env_lookup(env(&[]));
        assert_eq!(service.resolve().unwrap(), ResolvedConfig::default());
    }

    #[test]
    fn test_malformed_file_is_a_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[backend\nurl = ").unwrap();

        let service = ConfigService::new().with_path(&path).with_env_lookup(env(&[]));
        let err = service.resolve().unwrap_err();
        assert!(err.is_config());
    }
}
