//! Application settings loaded from environment variables.
//!
//! The configuration is built once at process start and handed down by
//! reference. Nothing below `main` reads the environment directly.

use std::env;

use super::constants::{
    DEFAULT_DB_HOST, DEFAULT_DB_MAX_CONNECTIONS, DEFAULT_DB_NAME, DEFAULT_DB_PORT,
    DEFAULT_DB_USER, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, POSTGRES_SCHEMES,
    SSL_MODE_RELAXED,
};
use crate::errors::{AppError, AppResult};

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub database: DatabaseSettings,
    pub basic_auth: BasicAuthSettings,
    pub server_host: String,
    pub server_port: u16,
}

/// Connection descriptor for the connection provider.
///
/// Either a full URL or discrete fields; the URL wins when both are present.
#[derive(Clone)]
pub struct DatabaseSettings {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    password: String,
    pub name: String,
    /// Encrypt without verifying the server certificate
    pub accept_invalid_certs: bool,
    pub max_connections: u32,
}

/// Credentials for the HTTP basic-auth gate
#[derive(Clone, Default)]
pub struct BasicAuthSettings {
    pub enabled: bool,
    pub username: String,
    password: String,
}

impl std::fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("url", &self.url.as_ref().map(|_| "[REDACTED]"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("name", &self.name)
            .field("accept_invalid_certs", &self.accept_invalid_certs)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl std::fmt::Debug for BasicAuthSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuthSettings")
            .field("enabled", &self.enabled)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_source(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_source<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = DatabaseSettings {
            url: lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()),
            host: lookup("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string()),
            port: lookup("DB_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DB_PORT),
            user: lookup("DB_USER").unwrap_or_else(|| DEFAULT_DB_USER.to_string()),
            password: lookup("DB_PASSWORD").unwrap_or_default(),
            name: lookup("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
            accept_invalid_certs: lookup("DATABASE_SSL_NO_VERIFY")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS),
        };

        let basic_auth = BasicAuthSettings {
            enabled: lookup("BASIC_AUTH_ENABLED")
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            username: lookup("BASIC_AUTH_USER").unwrap_or_default(),
            password: lookup("BASIC_AUTH_PASSWORD").unwrap_or_default(),
        };

        if basic_auth.enabled
            && (basic_auth.username.is_empty() || basic_auth.password.is_empty())
        {
            tracing::warn!("BASIC_AUTH_ENABLED is set but credentials are empty");
        }

        Self {
            database,
            basic_auth,
            server_host: lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SERVER_PORT),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

impl DatabaseSettings {
    /// Settings for an explicit connection URL with default pool options.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            host: DEFAULT_DB_HOST.to_string(),
            port: DEFAULT_DB_PORT,
            user: DEFAULT_DB_USER.to_string(),
            password: String::new(),
            name: DEFAULT_DB_NAME.to_string(),
            accept_invalid_certs: false,
            max_connections: DEFAULT_DB_MAX_CONNECTIONS,
        }
    }

    /// Relax TLS certificate verification.
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Resolve the descriptor into the URL handed to the driver.
    ///
    /// # Errors
    /// Returns `AppError::Connection` for a URL with a non-Postgres scheme.
    pub fn connection_url(&self) -> AppResult<String> {
        let base = match &self.url {
            Some(url) => {
                let url = url.trim();
                if !POSTGRES_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
                    return Err(AppError::connection(
                        "DATABASE_URL must start with postgres:// or postgresql://",
                    ));
                }
                url.to_string()
            }
            None => {
                if self.host.is_empty() || self.name.is_empty() {
                    return Err(AppError::connection("DB_HOST and DB_NAME must not be empty"));
                }
                let credentials = if self.password.is_empty() {
                    self.user.clone()
                } else {
                    format!("{}:{}", self.user, self.password)
                };
                format!(
                    "postgres://{}@{}:{}/{}",
                    credentials, self.host, self.port, self.name
                )
            }
        };

        if !self.accept_invalid_certs || base.contains("sslmode=") {
            return Ok(base);
        }

        let separator = if base.contains('?') { '&' } else { '?' };
        Ok(format!("{base}{separator}{SSL_MODE_RELAXED}"))
    }
}

impl BasicAuthSettings {
    /// Enabled gate expecting the given credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            enabled: true,
            username: username.into(),
            password: password.into(),
        }
    }

    /// Gate that lets every request through.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Byte-equal comparison against the configured credentials.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username.as_bytes() == username.as_bytes()
            && self.password.as_bytes() == password.as_bytes()
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_source(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_url_takes_precedence_over_discrete_fields() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://app@db.internal/calm"),
            ("DB_HOST", "ignored"),
        ]);

        assert_eq!(
            config.database.connection_url().unwrap(),
            "postgres://app@db.internal/calm"
        );
    }

    #[test]
    fn test_discrete_fields_build_url() {
        let config = config_from(&[
            ("DB_HOST", "db"),
            ("DB_PORT", "6543"),
            ("DB_USER", "calm"),
            ("DB_PASSWORD", "secret"),
            ("DB_NAME", "wellness"),
        ]);

        assert_eq!(
            config.database.connection_url().unwrap(),
            "postgres://calm:secret@db:6543/wellness"
        );
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = config_from(&[]);

        assert_eq!(
            config.database.connection_url().unwrap(),
            "postgres://postgres@localhost:5432/calmtunes"
        );
        assert!(!config.basic_auth.enabled);
        assert_eq!(config.database.max_connections, DEFAULT_DB_MAX_CONNECTIONS);
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_tls_relaxation_appends_sslmode() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://app@db/calm"),
            ("DATABASE_SSL_NO_VERIFY", "true"),
        ]);
        assert_eq!(
            config.database.connection_url().unwrap(),
            "postgres://app@db/calm?sslmode=require"
        );

        let with_query = DatabaseSettings::from_url("postgres://app@db/calm?application_name=x")
            .with_accept_invalid_certs(true);
        assert_eq!(
            with_query.connection_url().unwrap(),
            "postgres://app@db/calm?application_name=x&sslmode=require"
        );
    }

    #[test]
    fn test_tls_relaxation_keeps_explicit_sslmode() {
        let settings = DatabaseSettings::from_url("postgres://app@db/calm?sslmode=verify-full")
            .with_accept_invalid_certs(true);

        assert_eq!(
            settings.connection_url().unwrap(),
            "postgres://app@db/calm?sslmode=verify-full"
        );
    }

    #[test]
    fn test_malformed_url_is_connection_error() {
        let settings = DatabaseSettings::from_url("mysql://root@localhost/calm");
        let result = settings.connection_url();

        assert!(matches!(result, Err(AppError::Connection(_))));
    }

    #[test]
    fn test_basic_auth_flags() {
        let config = config_from(&[
            ("BASIC_AUTH_ENABLED", "TRUE"),
            ("BASIC_AUTH_USER", "admin"),
            ("BASIC_AUTH_PASSWORD", "s3cret"),
        ]);

        assert!(config.basic_auth.enabled);
        assert!(config.basic_auth.matches("admin", "s3cret"));
        assert!(!config.basic_auth.matches("Admin", "s3cret"));
        assert!(!config.basic_auth.matches("admin", "s3cret "));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://app:hunter2@db/calm"),
            ("BASIC_AUTH_PASSWORD", "topsecret"),
        ]);
        let rendered = format!("{:?}", config);

        assert!(!rendered.contains("hunter2"));
        assert!(!rendered.contains("topsecret"));
    }
}
