//! Application configuration.
//!
//! Configuration is resolved once at process start and is immutable after
//! the application factory completes. These are pure domain types with no
//! infrastructure dependencies.

use serde::{Deserialize, Serialize};

/// Environment variable holding the database connection string.
pub const DATABASE_URL_ENV: &str = "WHARF_DATABASE_URL";

/// Connection string used when no database URL is configured.
pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

/// Application configuration.
///
/// An incomplete environment falls back to in-memory defaults rather than
/// failing; resolution is infallible.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Secret key for signing operations.
    pub secret_key: String,

    /// Salt used when hashing passwords.
    pub password_salt: String,

    /// Whether debug behavior is enabled.
    pub debug: bool,

    /// Database connection string.
    pub database_url: String,
}

impl AppConfig {
    /// Create a configuration with the stock defaults and an in-memory
    /// database.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            secret_key: "changeme".to_string(),
            password_salt: "changeme".to_string(),
            debug: false,
            database_url: DEFAULT_DATABASE_URL.to_string(),
        }
    }

    /// Resolve configuration from the process environment.
    ///
    /// Reads [`DATABASE_URL_ENV`] for the database connection string and
    /// falls back to [`DEFAULT_DATABASE_URL`] when it is unset or empty.
    #[must_use]
    pub fn from_env() -> Self {
        let database_url = resolve_database_url(std::env::var(DATABASE_URL_ENV).ok().as_deref());
        Self {
            database_url,
            ..Self::with_defaults()
        }
    }

    /// Override the database URL.
    #[must_use]
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = url.into();
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Pick the effective database URL from an optional environment value.
fn resolve_database_url(env_value: Option<&str>) -> String {
    match env_value {
        Some(url) if !url.trim().is_empty() => url.to_string(),
        _ => DEFAULT_DATABASE_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_use_in_memory_database() {
        let config = AppConfig::with_defaults();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.secret_key, "changeme");
        assert_eq!(config.password_salt, "changeme");
        assert!(!config.debug);
    }

    #[test]
    fn env_value_overrides_default() {
        assert_eq!(
            resolve_database_url(Some("sqlite:///tmp/wharf-test.db")),
            "sqlite:///tmp/wharf-test.db"
        );
    }

    #[test]
    fn missing_or_blank_env_falls_back() {
        assert_eq!(resolve_database_url(None), DEFAULT_DATABASE_URL);
        assert_eq!(resolve_database_url(Some("")), DEFAULT_DATABASE_URL);
        assert_eq!(resolve_database_url(Some("   ")), DEFAULT_DATABASE_URL);
    }

    #[test]
    fn with_database_url_overrides() {
        let config = AppConfig::with_defaults().with_database_url("sqlite://x.db");
        assert_eq!(config.database_url, "sqlite://x.db");
    }
}
