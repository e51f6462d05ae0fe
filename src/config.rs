//! Application configuration, read from the environment.
//!
//! # Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `SESSION_SECRET` | Comma-separated signing secrets, newest first | required |
//! | `COOKIE_EXPIRES_IN` | Session cookie lifetime in seconds | 30 days |
//! | `APP_ENV` | `production` enables the `Secure` cookie attribute | development |
//! | `DATABASE_URL` | `SQLite` connection string | `sqlite:rusty_jokes.db?mode=rwc` |
//! | `BIND_ADDR` | Address the server listens on | `127.0.0.1:8080` |
//!
//! # Example
//!
//! ```rust,no_run
//! use rusty_jokes::config::AppConfig;
//!
//! let config = AppConfig::from_env().expect("incomplete environment");
//! println!("listening on {}", config.bind_addr);
//! ```

use std::env;

use chrono::Duration;

use crate::session::SessionConfig;
use crate::{AppError, SecretString};

/// Where the application is running.
///
/// Controls the cookie `Secure` attribute: local development usually has no
/// TLS, so the attribute is only set in production.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeploymentMode {
    #[default]
    Development,
    Production,
}

impl DeploymentMode {
    fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("production") {
            Self::Production
        } else {
            Self::Development
        }
    }
}

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `SQLite` connection string.
    pub database_url: String,

    /// Address the HTTP server binds to.
    pub bind_addr: String,

    pub deployment_mode: DeploymentMode,

    /// Session cookie settings, including the signing secrets.
    pub session: SessionConfig,
}

impl AppConfig {
    /// Reads the configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ConfigurationError` when `SESSION_SECRET` is not
    /// set or `COOKIE_EXPIRES_IN` is not a number.
    pub fn from_env() -> Result<Self, AppError> {
        let secrets: Vec<SecretString> = env::var("SESSION_SECRET")
            .map_err(|_| AppError::ConfigurationError("SESSION_SECRET must be set".to_owned()))?
            .split(',')
            .map(|secret| SecretString::new(secret.trim()))
            .collect();

        let cookie_max_age = match env::var("COOKIE_EXPIRES_IN") {
            Ok(value) => {
                let seconds: i64 = value.parse().map_err(|_| {
                    AppError::ConfigurationError(
                        "COOKIE_EXPIRES_IN must be a number of seconds".to_owned(),
                    )
                })?;
                Duration::seconds(seconds)
            }
            Err(_) => Duration::days(30),
        };

        let deployment_mode = env::var("APP_ENV")
            .map(|value| DeploymentMode::from_name(&value))
            .unwrap_or_default();

        let session = SessionConfig {
            cookie_secure: deployment_mode == DeploymentMode::Production,
            cookie_max_age,
            secrets,
            ..SessionConfig::default()
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:rusty_jokes.db?mode=rwc".to_owned()),
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_owned()),
            deployment_mode,
            session,
        })
    }
}
