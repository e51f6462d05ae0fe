use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};
use ulid::Ulid;

use crate::{AppError, User, UserRepository};

#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRecord {
    id: String,
    username: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<UserRecord> for User {
    fn from(row: UserRecord) -> Self {
        User {
            id: row.id,
            username: row.username,
            password_hash: row.password_hash,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn find_user_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let row: Option<UserRecord> = sqlx::query_as(
            "SELECT id, username, password_hash, created_at, updated_at FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            log::error!(target: "rusty_jokes", "msg=\"database error\", operation=\"find_user_by_id\", error=\"{e}\"");
            AppError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Into::into))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, username), err))]
    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let row: Option<UserRecord> = sqlx::query_as(
            "SELECT id, username, password_hash, created_at, updated_at FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            log::error!(target: "rusty_jokes", "msg=\"database error\", operation=\"find_user_by_username\", error=\"{e}\"");
            AppError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Into::into))
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, username, password_hash), err)
    )]
    async fn create_user(&self, username: &str, password_hash: &str) -> Result<User, AppError> {
        let now = Utc::now();
        let id = Ulid::new().to_string();
        let row: UserRecord = sqlx::query_as(
            "INSERT INTO users (id, username, password_hash, created_at, updated_at) VALUES (?, ?, ?, ?, ?) RETURNING id, username, password_hash, created_at, updated_at",
        )
        .bind(&id)
        .bind(username)
        .bind(password_hash)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => {
                AppError::UserAlreadyExists(username.to_owned())
            }
            _ => {
                log::error!(target: "rusty_jokes", "msg=\"database error\", operation=\"create_user\", error=\"{e}\"");
                AppError::DatabaseError(e.to_string())
            }
        })?;

        Ok(row.into())
    }
}
