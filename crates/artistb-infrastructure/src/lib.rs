pub mod config_service;
pub mod postgrest_source;

pub use crate::config_service::{ConfigService, ResolvedConfig};
pub use crate::postgrest_source::PostgrestRowSource;
