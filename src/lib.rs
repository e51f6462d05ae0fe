//! Backend for the jokes app: username/password authentication with
//! HMAC-signed cookie sessions, and joke storage over `SQLite`.
//!
//! The crate is organized around three layers:
//!
//! - [`actions`] - use cases (login, register, delete a joke) over
//!   repository traits, independent of any HTTP framework.
//! - [`session`] - the signed cookie session codec and lifecycle manager.
//! - [`api`] - the Axum HTTP surface wiring the two together.

pub mod actions;
pub mod api;
pub mod config;
pub mod crypto;
pub mod repository;
pub mod session;
pub mod sqlite;
pub mod validators;

pub use config::{AppConfig, DeploymentMode};
pub use crypto::{Argon2Hasher, PasswordHasher, SecretString};
pub use repository::{Joke, JokeRepository, JokeSummary, User, UserRepository};
pub use session::{AuthCheck, Session, SessionConfig, SessionManager, SessionRedirect};
pub use validators::ValidationError;

#[cfg(any(test, feature = "mocks"))]
pub use repository::{MockJokeRepository, MockUserRepository};

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    UserNotFound,
    UserAlreadyExists(String),
    InvalidCredentials,
    JokeNotFound,
    NotJokeOwner,
    MethodNotAllowed(String),
    PasswordHashError,
    Validation(ValidationError),
    ConfigurationError(String),
    DatabaseError(String),
}

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::UserNotFound => write!(f, "User not found"),
            AppError::UserAlreadyExists(username) => {
                write!(f, "User with username {username} already exists")
            }
            AppError::InvalidCredentials => write!(f, "Username/Password combination is incorrect"),
            AppError::JokeNotFound => write!(f, "What a joke! Not found."),
            AppError::NotJokeOwner => write!(f, "Pssh, nice try. That's not your joke"),
            AppError::MethodNotAllowed(method) => {
                write!(f, "The _method {method} is not supported")
            }
            AppError::PasswordHashError => write!(f, "Failed to hash password"),
            AppError::Validation(err) => write!(f, "{err}"),
            AppError::ConfigurationError(msg) => write!(f, "Configuration error: {msg}"),
            AppError::DatabaseError(msg) => write!(f, "Database error: {msg}"),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}
