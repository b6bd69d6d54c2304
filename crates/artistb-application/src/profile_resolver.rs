//! ProfileResolver - finds the profile row for a username.
//!
//! The backend schema varies between deployments, so the resolver walks an
//! ordered list of (table, key column) candidates and stops at the first row
//! it finds. Query errors skip to the next candidate: a missing table or
//! column is expected, not exceptional.

use artistb_core::{ArtistProfile, Backend};

/// Candidate profile tables, in probe order.
pub const PROFILE_TABLES: &[&str] = &["artists", "artist_profiles", "profiles", "users"];
/// Candidate key columns within each profile table, in probe order.
pub const PROFILE_KEYS: &[&str] = &["username", "handle", "slug"];

/// A profile together with where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProfile {
    pub profile: ArtistProfile,
    pub table: &'static str,
    pub column: &'static str,
}

#[derive(Debug, Clone)]
pub struct ProfileResolver {
    backend: Backend,
}

impl ProfileResolver {
    pub fn new(backend: Backend) -> Self {
        Self { backend }
    }

    /// Returns the first matching profile, or `None` when no candidate
    /// matches or the backend is unconfigured.
    pub async fn resolve(&self, username: &str) -> Option<ResolvedProfile> {
        if !self.backend.is_configured() {
            tracing::debug!("[ProfileResolver] Backend unconfigured; no profile for '{}'", username);
            return None;
        }

        for &table in PROFILE_TABLES {
            for &column in PROFILE_KEYS {
                match self.backend.find_one(table, column, username).await {
                    Ok(Some(row)) => {
                        tracing::info!(
                            "[ProfileResolver] Resolved '{}' from {}.{}",
                            username,
                            table,
                            column
                        );
                        return Some(ResolvedProfile {
                            profile: ArtistProfile::from_row(&row, username),
                            table,
                            column,
                        });
                    }
                    Ok(None) => {
                        tracing::debug!("[ProfileResolver] No match in {}.{}", table, column);
                    }
                    Err(e) if e.is_http() => {
                        tracing::debug!("[ProfileResolver] Skipping {}.{}: {}", table, column, e);
                    }
                    Err(e) => {
                        tracing::warn!("[ProfileResolver] Skipping {}.{}: {}", table, column, e);
                    }
                }
            }
        }

        tracing::debug!("[ProfileResolver] No profile found for '{}'", username);
        None
    }
}
