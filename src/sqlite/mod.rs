//! `SQLite` database backend implementations.
//!
//! This module provides `SQLite`-backed implementations for the repository traits.

mod joke;
pub mod migrations;
mod user;

pub use joke::SqliteJokeRepository;
use sqlx::SqlitePool;
pub use user::SqliteUserRepository;

/// Creates all `SQLite` repository instances from a connection pool.
pub fn create_repositories(pool: SqlitePool) -> (SqliteUserRepository, SqliteJokeRepository) {
    (
        SqliteUserRepository::new(pool.clone()),
        SqliteJokeRepository::new(pool),
    )
}
