//! Schema creation and demo data
//!
//! There are no migrations: the single `todos` table is created once with
//! `CREATE TABLE IF NOT EXISTS`.

use sqlx::SqlitePool;

use super::DbError;

const SCHEMA: &str = include_str!("schema.sql");

/// Items inserted by [`seed_samples`], as `(task, done)`.
pub const SAMPLE_TODOS: &[(&str, bool)] = &[
    ("Learn Flask fundamentals", true),
    ("Build a Todo List App", true),
    ("Switch to using SQLite", true),
    ("Perform black-box testing", false),
    ("Perform white-box testing", false),
];

/// Create the `todos` table if it does not exist yet.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), DbError> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    tracing::debug!("todos schema ready");
    Ok(())
}

/// Drop the `todos` table (and its rows) and create it again.
pub async fn reset_schema(pool: &SqlitePool) -> Result<(), DbError> {
    sqlx::query("DROP TABLE IF EXISTS todos")
        .execute(pool)
        .await?;
    tracing::warn!("dropped todos table");
    init_schema(pool).await
}

/// Insert [`SAMPLE_TODOS`], returning the number of rows written.
pub async fn seed_samples(pool: &SqlitePool) -> Result<u64, DbError> {
    let mut builder = sqlx::QueryBuilder::new("INSERT INTO todos (task, done) ");
    builder.push_values(SAMPLE_TODOS.iter(), |mut b, (task, done)| {
        b.push_bind(*task).push_bind(*done);
    });
    let result = builder.build().execute(pool).await?;

    tracing::info!(rows = result.rows_affected(), "seeded sample todos");
    Ok(result.rows_affected())
}
