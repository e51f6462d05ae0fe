use std::fmt;

use chrono::Duration;

use crate::SecretString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SameSite {
    None,
    Lax,
    #[default]
    Strict,
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SameSite::None => f.write_str("None"),
            SameSite::Lax => f.write_str("Lax"),
            SameSite::Strict => f.write_str("Strict"),
        }
    }
}

/// Cookie attributes and signing secrets for the session cookie.
///
/// `secrets` is ordered newest first: the first entry signs new cookies,
/// every entry verifies existing ones. Rotating a secret means prepending
/// the new one and keeping the old around until cookies signed with it
/// have expired.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub cookie_path: String,
    pub cookie_domain: Option<String>,
    pub cookie_secure: bool,
    pub cookie_http_only: bool,
    pub cookie_same_site: SameSite,
    pub cookie_max_age: Duration,
    pub secrets: Vec<SecretString>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "RJ_session".to_owned(),
            cookie_path: "/".to_owned(),
            cookie_domain: None,
            cookie_secure: true,
            cookie_http_only: true,
            cookie_same_site: SameSite::Strict,
            cookie_max_age: Duration::days(30),
            secrets: vec![],
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.secrets.is_empty() {
            return Err("at least one session secret is required");
        }
        if self.secrets.iter().any(|s| s.len() < 32) {
            return Err("session secrets should be at least 32 bytes");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.cookie_name, "RJ_session");
        assert_eq!(config.cookie_path, "/");
        assert!(config.cookie_secure);
        assert!(config.cookie_http_only);
        assert_eq!(config.cookie_same_site, SameSite::Strict);
        assert_eq!(config.cookie_max_age, Duration::days(30));
    }

    #[test]
    fn test_validate_no_secrets() {
        let config = SessionConfig::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_short_secret() {
        let config = SessionConfig {
            secrets: vec![SecretString::new("short")],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_short_secret_in_rotation_list() {
        let config = SessionConfig {
            secrets: vec![
                SecretString::new("this-is-a-very-long-secret-key-for-testing"),
                SecretString::new("short"),
            ],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_valid_secrets() {
        let config = SessionConfig {
            secrets: vec![SecretString::new("this-is-a-very-long-secret-key-for-testing")],
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_same_site_display() {
        assert_eq!(SameSite::Strict.to_string(), "Strict");
        assert_eq!(SameSite::Lax.to_string(), "Lax");
        assert_eq!(SameSite::None.to_string(), "None");
    }
}
