//! Embedded database migrations for `SQLite`.
//!
//! Migrations are embedded at compile time and run programmatically at startup.
//!
//! # Example
//!
//! ```rust,ignore
//! use rusty_jokes::sqlite::migrations;
//! use sqlx::SqlitePool;
//!
//! async fn setup_database(pool: &SqlitePool) -> Result<(), sqlx::Error> {
//!     migrations::run(pool).await?;
//!     Ok(())
//! }
//! ```

use sqlx::{Executor, SqlitePool};

/// Core migrations - always required.
const CORE_MIGRATIONS: &[(&str, &str)] = &[
    (
        "20250115000001_create_users_table",
        include_str!("../../migrations_sqlite/core/20250115000001_create_users_table.sql"),
    ),
    (
        "20250115000002_create_jokes_table",
        include_str!("../../migrations_sqlite/core/20250115000002_create_jokes_table.sql"),
    ),
];

/// Runs all database migrations.
///
/// Migrations are executed in order and tracked in the `_rusty_jokes_migrations`
/// table, so running them again is a no-op.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Create migrations tracking table
    pool.execute(
        r"
        CREATE TABLE IF NOT EXISTS _rusty_jokes_migrations (
            name TEXT PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        )
        ",
    )
    .await?;

    run_migrations(pool, CORE_MIGRATIONS).await?;

    Ok(())
}

/// Runs a set of migrations against the database.
///
/// # Limitations
///
/// SQL statements are split by semicolons (`;`). This means migrations containing
/// semicolons within string literals will not work correctly. The bundled migrations
/// are designed to avoid this issue.
async fn run_migrations(pool: &SqlitePool, migrations: &[(&str, &str)]) -> Result<(), sqlx::Error> {
    for (name, sql) in migrations {
        // Check if already applied
        let applied: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM _rusty_jokes_migrations WHERE name = ?)",
        )
        .bind(*name)
        .fetch_one(pool)
        .await?;

        if !applied {
            // SQLite doesn't support multiple statements in one execute,
            // so we split by semicolons and run each statement.
            for statement in sql.split(';') {
                let trimmed = statement.trim();
                if !trimmed.is_empty() {
                    pool.execute(trimmed).await?;
                }
            }

            // Record migration
            sqlx::query("INSERT INTO _rusty_jokes_migrations (name) VALUES (?)")
                .bind(*name)
                .execute(pool)
                .await?;
        }
    }
    Ok(())
}
