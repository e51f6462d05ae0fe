//! Session lifecycle: issuing, reading, and destroying the session cookie.

use url::form_urlencoded;

use super::codec::{seal_session, unseal_session};
use super::{Session, SessionConfig};
use crate::{AppError, SecretString};

const LOGIN_PATH: &str = "/login";

/// Outcome of a session-guarded operation.
///
/// Callers must treat [`AuthCheck::Redirect`] as a terminal outcome and
/// perform the redirect; it is control flow, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthCheck {
    /// The request carries a valid identity and may proceed as this user.
    Authorized(String),
    /// No identity; send the caller to the login page.
    Redirect(SessionRedirect),
}

/// A redirect the HTTP layer must perform, optionally committing a cookie.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRedirect {
    pub location: String,
    pub set_cookie: Option<String>,
}

/// Issues, reads, and destroys session cookies.
///
/// The manager is framework-free: it consumes raw `Cookie` header values
/// and produces `Set-Cookie` strings and redirect locations, leaving the
/// HTTP wiring to the API layer.
///
/// # Example
///
/// ```rust
/// use rusty_jokes::{SecretString, SessionConfig, SessionManager};
///
/// let config = SessionConfig {
///     secrets: vec![SecretString::new("a-long-enough-secret-for-the-session")],
///     ..Default::default()
/// };
/// let sessions = SessionManager::new(config).unwrap();
///
/// let redirect = sessions.create_user_session("user-123", "/jokes");
/// assert_eq!(redirect.location, "/jokes");
/// assert!(redirect.set_cookie.unwrap().starts_with("RJ_session="));
/// ```
#[derive(Debug, Clone)]
pub struct SessionManager {
    config: SessionConfig,
    signing_secret: SecretString,
}

impl SessionManager {
    /// Creates a manager from a validated config.
    ///
    /// # Errors
    ///
    /// Returns `AppError::ConfigurationError` when the config has no
    /// secrets or a secret is too short. A misconfigured secret must stop
    /// the application at startup, not at first login.
    pub fn new(config: SessionConfig) -> Result<Self, AppError> {
        config
            .validate()
            .map_err(|msg| AppError::ConfigurationError(msg.to_owned()))?;

        let signing_secret = config.secrets.first().cloned().ok_or_else(|| {
            AppError::ConfigurationError("at least one session secret is required".to_owned())
        })?;

        Ok(Self {
            config,
            signing_secret,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Issues a session for `user_id`, returning the redirect that commits it.
    ///
    /// `redirect_to` must already be allow-list validated by the caller.
    #[must_use]
    pub fn create_user_session(&self, user_id: &str, redirect_to: &str) -> SessionRedirect {
        let sealed = seal_session(&Session::for_user(user_id), &self.signing_secret);
        SessionRedirect {
            location: redirect_to.to_owned(),
            set_cookie: Some(self.set_cookie_value(&sealed)),
        }
    }

    /// Reads the session carried by a `Cookie` header.
    ///
    /// A missing, malformed, or tampered cookie reads as anonymous.
    #[must_use]
    pub fn session_from_cookie_header(&self, cookie_header: Option<&str>) -> Session {
        cookie_header
            .and_then(|header| find_cookie_value(header, &self.config.cookie_name))
            .map(|value| unseal_session(value, &self.config.secrets))
            .unwrap_or_else(Session::anonymous)
    }

    /// The user id in the request's session, if any.
    #[must_use]
    pub fn user_id_from_cookie_header(&self, cookie_header: Option<&str>) -> Option<String> {
        self.session_from_cookie_header(cookie_header).into_user_id()
    }

    /// Gate for authenticated-only operations.
    ///
    /// Anonymous callers get a redirect to the login page carrying
    /// `redirectTo=<current_path>` so they come back after logging in.
    #[must_use]
    pub fn require_user_id(&self, cookie_header: Option<&str>, current_path: &str) -> AuthCheck {
        match self.user_id_from_cookie_header(cookie_header) {
            Some(user_id) => AuthCheck::Authorized(user_id),
            None => AuthCheck::Redirect(self.login_redirect(current_path)),
        }
    }

    /// Redirect to the login page with `redirectTo` set to `return_path`.
    #[must_use]
    pub fn login_redirect(&self, return_path: &str) -> SessionRedirect {
        let query: String = form_urlencoded::Serializer::new(String::new())
            .append_pair("redirectTo", return_path)
            .finish();

        SessionRedirect {
            location: format!("{LOGIN_PATH}?{query}"),
            set_cookie: None,
        }
    }

    /// Destroys the session and sends the user back to the login page.
    #[must_use]
    pub fn logout(&self) -> SessionRedirect {
        SessionRedirect {
            location: LOGIN_PATH.to_owned(),
            set_cookie: Some(self.removal_cookie_value()),
        }
    }

    fn set_cookie_value(&self, sealed: &str) -> String {
        let config = &self.config;
        let mut cookie = format!(
            "{}={}; Path={}; SameSite={}; Max-Age={}",
            config.cookie_name,
            sealed,
            config.cookie_path,
            config.cookie_same_site,
            config.cookie_max_age.num_seconds(),
        );

        if config.cookie_http_only {
            cookie.push_str("; HttpOnly");
        }
        if let Some(ref domain) = config.cookie_domain {
            cookie.push_str("; Domain=");
            cookie.push_str(domain);
        }
        if config.cookie_secure {
            cookie.push_str("; Secure");
        }

        cookie
    }

    fn removal_cookie_value(&self) -> String {
        format!(
            "{}=; Path={}; Max-Age=0",
            self.config.cookie_name, self.config.cookie_path,
        )
    }
}

/// Finds a cookie's value in a `Cookie` header.
///
/// Values may themselves contain `=` (base64 padding), so each pair is
/// split on the first `=` only.
fn find_cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> SessionManager {
        manager_with(SessionConfig::default())
    }

    fn manager_with(mut config: SessionConfig) -> SessionManager {
        if config.secrets.is_empty() {
            config.secrets = vec![SecretString::new("test-secret-key-that-is-long-enough")];
        }
        SessionManager::new(config).unwrap()
    }

    /// Extracts `name=value` from a full `Set-Cookie` string so it can be
    /// replayed as a `Cookie` header.
    fn as_cookie_header(set_cookie: &str) -> String {
        set_cookie.split(';').next().unwrap().to_owned()
    }

    #[test]
    fn test_rejects_missing_secrets() {
        let result = SessionManager::new(SessionConfig::default());
        assert!(matches!(result, Err(AppError::ConfigurationError(_))));
    }

    #[test]
    fn test_rejects_short_secret() {
        let config = SessionConfig {
            secrets: vec![SecretString::new("short")],
            ..Default::default()
        };
        assert!(matches!(
            SessionManager::new(config),
            Err(AppError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_create_user_session_cookie_attributes() {
        let redirect = manager().create_user_session("user-123", "/jokes");

        assert_eq!(redirect.location, "/jokes");
        let cookie = redirect.set_cookie.unwrap();
        assert!(cookie.starts_with("RJ_session="));
        assert!(cookie.contains("; Path=/"));
        assert!(cookie.contains("; SameSite=Strict"));
        assert!(cookie.contains("; Max-Age=2592000"));
        assert!(cookie.contains("; HttpOnly"));
        assert!(cookie.contains("; Secure"));
    }

    #[test]
    fn test_insecure_config_omits_secure_attribute() {
        let sessions = manager_with(SessionConfig {
            cookie_secure: false,
            ..Default::default()
        });
        let cookie = sessions
            .create_user_session("user-123", "/jokes")
            .set_cookie
            .unwrap();

        assert!(!cookie.contains("Secure"));
        assert!(cookie.contains("; HttpOnly"));
    }

    #[test]
    fn test_session_round_trip_through_header() {
        let sessions = manager();
        let redirect = sessions.create_user_session("user-123", "/jokes");
        let header = as_cookie_header(&redirect.set_cookie.unwrap());

        let session = sessions.session_from_cookie_header(Some(&header));
        assert_eq!(session.user_id(), Some("user-123"));
    }

    #[test]
    fn test_missing_header_is_anonymous() {
        let session = manager().session_from_cookie_header(None);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_tampered_cookie_is_anonymous() {
        let sessions = manager();
        let redirect = sessions.create_user_session("user-123", "/jokes");
        let header = as_cookie_header(&redirect.set_cookie.unwrap());
        let tampered = format!("{}tampered", header);

        assert!(!sessions
            .session_from_cookie_header(Some(&tampered))
            .is_authenticated());
    }

    #[test]
    fn test_require_user_id_authorized() {
        let sessions = manager();
        let redirect = sessions.create_user_session("user-123", "/jokes");
        let header = as_cookie_header(&redirect.set_cookie.unwrap());

        let check = sessions.require_user_id(Some(&header), "/jokes/new");
        assert_eq!(check, AuthCheck::Authorized("user-123".to_owned()));
    }

    #[test]
    fn test_require_user_id_redirects_anonymous() {
        let check = manager().require_user_id(None, "/jokes/new");

        let AuthCheck::Redirect(redirect) = check else {
            panic!("expected a redirect");
        };
        assert_eq!(redirect.location, "/login?redirectTo=%2Fjokes%2Fnew");
        assert_eq!(redirect.set_cookie, None);
    }

    #[test]
    fn test_logout_clears_cookie() {
        let redirect = manager().logout();

        assert_eq!(redirect.location, "/login");
        let cookie = redirect.set_cookie.unwrap();
        assert!(cookie.starts_with("RJ_session=;"));
        assert!(cookie.contains("Max-Age=0"));
    }

    #[test]
    fn test_rotation_keeps_old_cookies_valid() {
        let old = SecretString::new("old-secret-key-that-is-long-enough!");
        let new = SecretString::new("new-secret-key-that-is-long-enough!");

        let before = manager_with(SessionConfig {
            secrets: vec![old.clone()],
            ..Default::default()
        });
        let redirect = before.create_user_session("user-123", "/jokes");
        let header = as_cookie_header(&redirect.set_cookie.unwrap());

        // After rotation the old secret is still listed for verification
        let after = manager_with(SessionConfig {
            secrets: vec![new, old],
            ..Default::default()
        });
        let session = after.session_from_cookie_header(Some(&header));
        assert_eq!(session.user_id(), Some("user-123"));
    }

    #[test]
    fn test_new_cookies_signed_with_newest_secret() {
        let old = SecretString::new("old-secret-key-that-is-long-enough!");
        let new = SecretString::new("new-secret-key-that-is-long-enough!");

        let rotated = manager_with(SessionConfig {
            secrets: vec![new.clone(), old],
            ..Default::default()
        });
        let redirect = rotated.create_user_session("user-123", "/jokes");
        let header = as_cookie_header(&redirect.set_cookie.unwrap());

        // A manager that only knows the new secret can read it
        let new_only = manager_with(SessionConfig {
            secrets: vec![new],
            ..Default::default()
        });
        assert!(new_only
            .session_from_cookie_header(Some(&header))
            .is_authenticated());
    }

    #[test]
    fn test_find_cookie_value() {
        assert_eq!(
            find_cookie_value("RJ_session=abc.def; theme=dark", "RJ_session"),
            Some("abc.def")
        );
        assert_eq!(
            find_cookie_value("theme=dark; RJ_session=abc.def", "RJ_session"),
            Some("abc.def")
        );
        // Base64 padding inside the value survives
        assert_eq!(
            find_cookie_value("RJ_session=eyJ9==.cafe", "RJ_session"),
            Some("eyJ9==.cafe")
        );
        assert_eq!(find_cookie_value("theme=dark", "RJ_session"), None);
        assert_eq!(find_cookie_value("", "RJ_session"), None);
    }
}
