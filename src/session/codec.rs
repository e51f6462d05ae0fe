//! Sealing and unsealing of session cookie values.
//!
//! The wire format is `{base64 json payload}.{hex hmac-sha256 signature}`.
//! The signature is computed over the base64 payload, so it covers the exact
//! bytes that travel in the cookie.

use base64ct::{Base64, Encoding};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::Session;
use crate::SecretString;

type HmacSha256 = Hmac<Sha256>;

/// Seals a session into a signed cookie value.
///
/// Always signs with the given secret; callers doing rotation pass the
/// newest one.
pub fn seal_session(session: &Session, secret: &SecretString) -> String {
    // A session is a single optional string field; serializing it cannot fail.
    #[allow(clippy::expect_used)]
    let json = serde_json::to_vec(session).expect("session payload is serializable");
    let payload = Base64::encode_string(&json);
    let signature = compute_hmac(payload.as_bytes(), secret.expose_secret().as_bytes());
    format!("{}.{}", payload, hex::encode(signature))
}

/// Unseals a cookie value, trying each secret in order.
///
/// A value that is malformed, signed with an unknown secret, or tampered
/// with yields an anonymous session, never an error. Verification failure
/// means we cannot trust any claim inside the cookie, and an anonymous
/// session is exactly that.
pub fn unseal_session(cookie_value: &str, secrets: &[SecretString]) -> Session {
    let Some((payload, signature_hex)) = cookie_value.rsplit_once('.') else {
        return Session::anonymous();
    };

    let Ok(actual_sig) = hex::decode(signature_hex) else {
        return Session::anonymous();
    };

    let verified = secrets.iter().any(|secret| {
        let expected_sig = compute_hmac(payload.as_bytes(), secret.expose_secret().as_bytes());
        constant_time_eq(&expected_sig, &actual_sig)
    });

    if !verified {
        log::warn!(target: "rusty_jokes::session", "msg=\"session cookie tampered\" cookie_prefix=\"{}...\"", &cookie_value.chars().take(8).collect::<String>());
        return Session::anonymous();
    }

    let Ok(json) = Base64::decode_vec(payload) else {
        return Session::anonymous();
    };

    serde_json::from_slice(&json).unwrap_or_else(|_| Session::anonymous())
}

/// Computes HMAC-SHA256.
///
/// # Panics
///
/// This function cannot panic as HMAC accepts keys of any size.
fn compute_hmac(message: &[u8], key: &[u8]) -> Vec<u8> {
    // SAFETY: HmacSha256::new_from_slice only fails if the key is invalid,
    // but HMAC-SHA256 accepts keys of any length, so this cannot fail.
    #[allow(clippy::expect_used)]
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any size");
    mac.update(message);
    mac.finalize().into_bytes().to_vec()
}

/// Constant-time comparison to prevent timing attacks.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret() -> SecretString {
        SecretString::new("test-secret-key-that-is-long-enough")
    }

    #[test]
    fn test_seal_and_unseal() {
        let secrets = [secret()];
        let session = Session::for_user("user-123");

        let sealed = seal_session(&session, &secrets[0]);
        let unsealed = unseal_session(&sealed, &secrets);

        assert_eq!(unsealed, session);
        assert_eq!(unsealed.user_id(), Some("user-123"));
    }

    #[test]
    fn test_seal_and_unseal_anonymous() {
        let secrets = [secret()];

        let sealed = seal_session(&Session::anonymous(), &secrets[0]);
        let unsealed = unseal_session(&sealed, &secrets);

        assert!(!unsealed.is_authenticated());
    }

    #[test]
    fn test_tampered_signature_reads_anonymous() {
        let secrets = [secret()];
        let sealed = seal_session(&Session::for_user("user-123"), &secrets[0]);

        // Verify normal sealing works first
        assert!(unseal_session(&sealed, &secrets).is_authenticated());

        let payload = sealed.rsplit_once('.').unwrap().0;
        let tampered = format!("{}.{}", payload, "0".repeat(64));

        assert!(!unseal_session(&tampered, &secrets).is_authenticated());
    }

    #[test]
    fn test_tampered_payload_reads_anonymous() {
        let secrets = [secret()];
        let sealed = seal_session(&Session::for_user("user-123"), &secrets[0]);

        // Swap the payload for one claiming another user, keeping the signature
        let signature = sealed.rsplit_once('.').unwrap().1;
        let forged_payload =
            Base64::encode_string(br#"{"userId":"somebody-else"}"#);
        let forged = format!("{forged_payload}.{signature}");

        assert!(!unseal_session(&forged, &secrets).is_authenticated());
    }

    #[test]
    fn test_wrong_secret_reads_anonymous() {
        let sealed = seal_session(
            &Session::for_user("user-123"),
            &SecretString::new("secret-key-one-that-is-long-enough"),
        );

        let other = [SecretString::new("secret-key-two-that-is-long-enough")];
        assert!(!unseal_session(&sealed, &other).is_authenticated());
    }

    #[test]
    fn test_rotated_secret_still_verifies() {
        let old = SecretString::new("old-secret-key-that-is-long-enough!");
        let new = SecretString::new("new-secret-key-that-is-long-enough!");

        // Sealed before rotation, read after: the old secret is still listed
        let sealed = seal_session(&Session::for_user("user-123"), &old);
        let secrets = [new, old];

        let unsealed = unseal_session(&sealed, &secrets);
        assert_eq!(unsealed.user_id(), Some("user-123"));
    }

    #[test]
    fn test_delisted_secret_fails() {
        let retired = SecretString::new("retired-secret-that-is-long-enough!");
        let sealed = seal_session(&Session::for_user("user-123"), &retired);

        let secrets = [secret()];
        assert!(!unseal_session(&sealed, &secrets).is_authenticated());
    }

    #[test]
    fn test_malformed_values_read_anonymous() {
        let secrets = [secret()];

        // No separator
        assert!(!unseal_session("noseparator", &secrets).is_authenticated());

        // Invalid hex signature
        assert!(!unseal_session("payload.notahexsignature", &secrets).is_authenticated());

        // Empty string
        assert!(!unseal_session("", &secrets).is_authenticated());
    }

    #[test]
    fn test_deterministic_sealing() {
        let s = secret();
        let session = Session::for_user("user-123");

        assert_eq!(seal_session(&session, &s), seal_session(&session, &s));
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq(b"hello", b"hello"));
        assert!(!constant_time_eq(b"hello", b"world"));
        assert!(!constant_time_eq(b"hello", b"hello!"));
        assert!(!constant_time_eq(b"", b"x"));
        assert!(constant_time_eq(b"", b""));
    }
}
