//! Repository traits and data types.
//!
//! This module defines the storage abstractions used throughout rusty-jokes.
//! Implement these traits to use your own database or storage backend.
//!
//! # Traits
//!
//! | Trait | Description |
//! |-------|-------------|
//! | [`UserRepository`] | User lookup and creation |
//! | [`JokeRepository`] | Joke listing, lookup, creation, and deletion |
//!
//! # Data Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`User`] | User account data |
//! | [`Joke`] | A joke and its owner |
//! | [`JokeSummary`] | Joke id and name, for listings |
//!
//! # Mock Implementations
//!
//! Enable the `mocks` feature for in-memory implementations useful for testing:
//!
//! - [`MockUserRepository`]
//! - [`MockJokeRepository`]

mod joke;
mod user;

#[cfg(any(test, feature = "mocks"))]
mod joke_mock;
#[cfg(any(test, feature = "mocks"))]
mod user_mock;

pub use joke::Joke;
pub use joke::JokeRepository;
pub use joke::JokeSummary;
pub use user::User;
pub use user::UserRepository;

#[cfg(any(test, feature = "mocks"))]
pub use joke_mock::MockJokeRepository;
#[cfg(any(test, feature = "mocks"))]
pub use user_mock::MockUserRepository;
