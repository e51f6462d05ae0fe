use crate::AppError;
use argon2::{Algorithm, Argon2, Params, PasswordVerifier, Version};
use password_hash::{PasswordHash, PasswordHasher as ArgonPasswordHasher, SaltString};
use rand::rngs::OsRng;
use std::fmt;

/// A wrapper for sensitive string data that prevents accidental logging.
///
/// `SecretString` implements `Debug` and `Display` to show `[REDACTED]` instead
/// of the actual content, preventing sensitive data from being accidentally
/// logged or printed.
///
/// # Example
///
/// ```rust
/// use rusty_jokes::crypto::SecretString;
///
/// let password = SecretString::new("my_secret_password");
///
/// // Debug output shows [REDACTED]
/// assert_eq!(format!("{:?}", password), "SecretString([REDACTED])");
///
/// // Access the actual value when needed
/// assert_eq!(password.expose_secret(), "my_secret_password");
/// ```
#[derive(Clone)]
pub struct SecretString(String);

impl SecretString {
    /// Creates a new `SecretString` from any type that can be converted to a `String`.
    #[must_use]
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Exposes the secret value.
    ///
    /// Use this method only when you need to access the actual secret,
    /// such as when passing it to a hashing function.
    #[must_use]
    pub fn expose_secret(&self) -> &str {
        &self.0
    }

    /// Returns true if the secret is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the length of the secret in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretString([REDACTED])")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl PartialEq for SecretString {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for SecretString {}

/// Trait for password hashing and verification.
///
/// This trait allows pluggable password hashing implementations.
/// The default implementation is [`Argon2Hasher`].
///
/// # Example
///
/// ```rust
/// use rusty_jokes::crypto::{PasswordHasher, Argon2Hasher};
///
/// let hasher = Argon2Hasher::default();
/// let hash = hasher.hash("mypassword").unwrap();
/// assert!(hasher.verify("mypassword", &hash).unwrap());
/// assert!(!hasher.verify("wrongpassword", &hash).unwrap());
/// ```
pub trait PasswordHasher: Send + Sync {
    /// Hash a password.
    ///
    /// # Errors
    ///
    /// Returns `AppError::PasswordHashError` if hashing fails.
    fn hash(&self, password: &str) -> Result<String, AppError>;

    /// Verify a password against a hash.
    ///
    /// # Errors
    ///
    /// Returns `AppError::PasswordHashError` if the hash is malformed.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError>;
}

/// Argon2id password hasher with configurable parameters.
///
/// # Example
///
/// ```rust
/// use rusty_jokes::crypto::Argon2Hasher;
///
/// // Default settings (19 MiB memory, 2 iterations, 1 thread)
/// let hasher = Argon2Hasher::default();
///
/// // Production settings (OWASP recommendations)
/// let hasher = Argon2Hasher::production();
///
/// // Custom settings
/// let hasher = Argon2Hasher::new(32768, 4, 2);
/// ```
#[derive(Debug, Clone)]
pub struct Argon2Hasher {
    /// Memory cost in KiB
    memory_cost: u32,
    /// Number of iterations
    time_cost: u32,
    /// Degree of parallelism
    parallelism: u32,
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self {
            memory_cost: 19456, // 19 MiB - argon2 default
            time_cost: 2,
            parallelism: 1,
        }
    }
}

impl Argon2Hasher {
    /// Creates a new hasher with custom parameters.
    ///
    /// # Arguments
    ///
    /// * `memory_cost` - Memory usage in KiB
    /// * `time_cost` - Number of iterations
    /// * `parallelism` - Number of threads
    #[must_use]
    pub fn new(memory_cost: u32, time_cost: u32, parallelism: u32) -> Self {
        Self {
            memory_cost,
            time_cost,
            parallelism,
        }
    }

    /// Production-recommended settings based on OWASP guidelines.
    ///
    /// Parameters: 64 MiB memory, 3 iterations, 4 threads.
    #[must_use]
    pub fn production() -> Self {
        Self {
            memory_cost: 65536, // 64 MiB
            time_cost: 3,
            parallelism: 4,
        }
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        let params = Params::new(self.memory_cost, self.time_cost, self.parallelism, None)
            .map_err(|_| AppError::PasswordHashError)?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|_| AppError::PasswordHashError)
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let parsed = PasswordHash::new(hash).map_err(|_| AppError::PasswordHashError)?;

        // Verification uses params from the hash, not from config
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = Argon2Hasher::default();
        let hash = hasher.hash("twistypassword").unwrap();

        assert!(hasher.verify("twistypassword", &hash).unwrap());
        assert!(!hasher.verify("wrongpassword", &hash).unwrap());
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = Argon2Hasher::default();
        let hash1 = hasher.hash("twistypassword").unwrap();
        let hash2 = hasher.hash("twistypassword").unwrap();

        assert_ne!(hash1, hash2);
    }

    #[test]
    fn test_verify_malformed_hash() {
        let hasher = Argon2Hasher::default();
        let result = hasher.verify("anything", "not-a-phc-string");

        assert_eq!(result.unwrap_err(), AppError::PasswordHashError);
    }

    #[test]
    fn test_production_hashes_verify_with_default() {
        let production = Argon2Hasher::production();
        let hash = production.hash("twistypassword").unwrap();

        // Params are read back from the hash itself
        assert!(Argon2Hasher::default().verify("twistypassword", &hash).unwrap());
    }

    #[test]
    fn test_secret_string_debug_redacted() {
        let secret = SecretString::new("my_password");
        assert_eq!(format!("{secret:?}"), "SecretString([REDACTED])");
    }

    #[test]
    fn test_secret_string_display_redacted() {
        let secret = SecretString::new("my_password");
        assert_eq!(format!("{secret}"), "[REDACTED]");
    }

    #[test]
    fn test_secret_string_expose_secret() {
        let secret = SecretString::new("my_password");
        assert_eq!(secret.expose_secret(), "my_password");
    }

    #[test]
    fn test_secret_string_from_string() {
        let secret: SecretString = String::from("password").into();
        assert_eq!(secret.expose_secret(), "password");
    }

    #[test]
    fn test_secret_string_from_str() {
        let secret: SecretString = "password".into();
        assert_eq!(secret.expose_secret(), "password");
    }
}
