use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::Rng;
use sqlx::{FromRow, SqlitePool};
use ulid::Ulid;

use crate::{AppError, Joke, JokeRepository, JokeSummary};

#[derive(Clone)]
pub struct SqliteJokeRepository {
    pool: SqlitePool,
}

impl SqliteJokeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct JokeRecord {
    id: String,
    name: String,
    content: String,
    jokester_id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<JokeRecord> for Joke {
    fn from(row: JokeRecord) -> Self {
        Joke {
            id: row.id,
            name: row.name,
            content: row.content,
            jokester_id: row.jokester_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(FromRow)]
struct JokeSummaryRecord {
    id: String,
    name: String,
}

impl From<JokeSummaryRecord> for JokeSummary {
    fn from(row: JokeSummaryRecord) -> Self {
        JokeSummary {
            id: row.id,
            name: row.name,
        }
    }
}

#[async_trait]
impl JokeRepository for SqliteJokeRepository {
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn list_recent_jokes(&self, limit: u32) -> Result<Vec<JokeSummary>, AppError> {
        let rows: Vec<JokeSummaryRecord> =
            sqlx::query_as("SELECT id, name FROM jokes ORDER BY created_at DESC LIMIT ?")
                .bind(i64::from(limit))
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    log::error!(target: "rusty_jokes", "msg=\"database error\", operation=\"list_recent_jokes\", error=\"{e}\"");
                    AppError::DatabaseError(e.to_string())
                })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn random_joke(&self) -> Result<Option<Joke>, AppError> {
        let count = self.count_jokes().await?;
        if count == 0 {
            return Ok(None);
        }

        let offset = rand::thread_rng().gen_range(0..count);
        let row: Option<JokeRecord> = sqlx::query_as(
            "SELECT id, name, content, jokester_id, created_at, updated_at FROM jokes LIMIT 1 OFFSET ?",
        )
        .bind(offset)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            log::error!(target: "rusty_jokes", "msg=\"database error\", operation=\"random_joke\", error=\"{e}\"");
            AppError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Into::into))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn find_joke_by_id(&self, id: &str) -> Result<Option<Joke>, AppError> {
        let row: Option<JokeRecord> = sqlx::query_as(
            "SELECT id, name, content, jokester_id, created_at, updated_at FROM jokes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            log::error!(target: "rusty_jokes", "msg=\"database error\", operation=\"find_joke_by_id\", error=\"{e}\"");
            AppError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(Into::into))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, content), err))]
    async fn create_joke(
        &self,
        name: &str,
        content: &str,
        jokester_id: &str,
    ) -> Result<Joke, AppError> {
        let now = Utc::now();
        let id = Ulid::new().to_string();
        let row: JokeRecord = sqlx::query_as(
            "INSERT INTO jokes (id, name, content, jokester_id, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?) RETURNING id, name, content, jokester_id, created_at, updated_at",
        )
        .bind(&id)
        .bind(name)
        .bind(content)
        .bind(jokester_id)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            log::error!(target: "rusty_jokes", "msg=\"database error\", operation=\"create_joke\", error=\"{e}\"");
            AppError::DatabaseError(e.to_string())
        })?;

        Ok(row.into())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn delete_joke(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM jokes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                log::error!(target: "rusty_jokes", "msg=\"database error\", operation=\"delete_joke\", error=\"{e}\"");
                AppError::DatabaseError(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::JokeNotFound);
        }

        Ok(())
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    async fn count_jokes(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jokes")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                log::error!(target: "rusty_jokes", "msg=\"database error\", operation=\"count_jokes\", error=\"{e}\"");
                AppError::DatabaseError(e.to_string())
            })?;

        Ok(count)
    }
}
