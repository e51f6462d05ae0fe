//! Client-held sessions: a signed cookie is the only session state.
//!
//! There is no server-side session store. The cookie value is a sealed
//! blob carrying at most one user id; the HMAC signature is the sole
//! integrity guarantee. See [`codec`] for the wire format and
//! [`SessionManager`] for the cookie lifecycle.

pub mod codec;
mod config;
mod manager;

pub use codec::{seal_session, unseal_session};
pub use config::{SameSite, SessionConfig};
pub use manager::{AuthCheck, SessionManager, SessionRedirect};

use serde::{Deserialize, Serialize};

/// The decoded content of a session cookie.
///
/// A session holds either no identity (anonymous) or exactly one user id.
/// Nothing else goes in the cookie.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "userId", default, skip_serializing_if = "Option::is_none")]
    user_id: Option<String>,
}

impl Session {
    /// A session with no identity.
    #[must_use]
    pub fn anonymous() -> Self {
        Self { user_id: None }
    }

    /// A session for the given user.
    #[must_use]
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    #[must_use]
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    #[must_use]
    pub fn into_user_id(self) -> Option<String> {
        self.user_id
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_session() {
        let session = Session::anonymous();
        assert!(!session.is_authenticated());
        assert_eq!(session.user_id(), None);
    }

    #[test]
    fn test_user_session() {
        let session = Session::for_user("01JC5W9ZKXQ2M4N6P8R0T2V4X6");
        assert!(session.is_authenticated());
        assert_eq!(session.user_id(), Some("01JC5W9ZKXQ2M4N6P8R0T2V4X6"));
    }

    #[test]
    fn test_default_is_anonymous() {
        assert_eq!(Session::default(), Session::anonymous());
    }

    #[test]
    fn test_payload_field_name() {
        let json = serde_json::to_string(&Session::for_user("abc")).unwrap();
        assert_eq!(json, r#"{"userId":"abc"}"#);

        let json = serde_json::to_string(&Session::anonymous()).unwrap();
        assert_eq!(json, "{}");
    }
}
