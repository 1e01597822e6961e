use crate::config::AppConfig;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use sqlx::{
    migrate::MigrateDatabase, query, query_scalar, sqlite::SqlitePoolOptions, Sqlite, SqlitePool,
};

/// Creates the `project` and `skill` tables if they don't exist
pub async fn setup_database(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // List columns (tools, challenges, results, images) hold JSON arrays
    query(
        "CREATE TABLE IF NOT EXISTS project (
            id TEXT PRIMARY KEY NOT NULL,
            position INTEGER NOT NULL,
            title TEXT NOT NULL,
            description TEXT NOT NULL,
            role TEXT NOT NULL,
            problem TEXT NOT NULL,
            solution TEXT NOT NULL,
            tools TEXT NOT NULL DEFAULT '[]',
            challenges TEXT NOT NULL DEFAULT '[]',
            results TEXT NOT NULL DEFAULT '[]',
            demo_link TEXT,
            github_link TEXT,
            images TEXT NOT NULL DEFAULT '[]'
        )",
    )
    .execute(pool)
    .await?;

    query(
        "CREATE TABLE IF NOT EXISTS skill (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            chart TEXT NOT NULL,
            chart_position INTEGER NOT NULL,
            name TEXT NOT NULL,
            value INTEGER NOT NULL CHECK (value BETWEEN 0 AND 100),
            position INTEGER NOT NULL,
            project_ids TEXT NOT NULL DEFAULT '[]',
            UNIQUE(chart, name)
        )",
    )
    .execute(pool)
    .await?;

    // Added after the first schema; older databases lack it
    ensure_column_exists(
        pool,
        "project",
        "thumbnail",
        "ALTER TABLE project ADD COLUMN thumbnail TEXT NOT NULL DEFAULT ''",
    )
    .await?;
    ensure_column_exists(
        pool,
        "skill",
        "project_ids",
        "ALTER TABLE skill ADD COLUMN project_ids TEXT NOT NULL DEFAULT '[]'",
    )
    .await?;

    Ok(())
}

async fn ensure_column_exists(
    pool: &SqlitePool,
    table: &str,
    column: &str,
    alter_statement: &str,
) -> Result<(), sqlx::Error> {
    let count: i64 = query_scalar(&format!(
        "SELECT COUNT(*) FROM pragma_table_info('{table}') WHERE name = ?",
    ))
    .bind(column)
    .fetch_one(pool)
    .await?;

    if count == 0 {
        log::info!("migrating {table}: adding column {column}");
        query(alter_statement).execute(pool).await?;
    }

    Ok(())
}

/// Creates a connection pool for the configured database file and sets up the schema
pub async fn create_database_pool(config: &AppConfig) -> Result<SqlitePool> {
    let database_url = &config.database_url;
    log::info!("opening database {}", config.database_path.display());

    if let Some(parent) = config.database_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)
                .map_err(|e| eyre!("Failed to create database directory: {e}"))?;
        }
    }

    let db_exists = Sqlite::database_exists(database_url)
        .await
        .map_err(|e| eyre!("Error checking database: {e}"))?;

    if !db_exists {
        log::info!("database does not exist, creating it");
        Sqlite::create_database(database_url)
            .await
            .map_err(|e| eyre!("Failed to create SQLite database: {e}"))?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .after_connect(|conn, _| {
            Box::pin(async move {
                use sqlx::Executor as _;
                conn.execute("PRAGMA foreign_keys = ON;").await?;
                conn.execute("PRAGMA journal_mode = WAL;").await?;
                conn.execute("PRAGMA synchronous = NORMAL;").await?;
                Ok(())
            })
        })
        .connect(database_url)
        .await
        .map_err(|e| eyre!("Failed to connect to SQLite database: {e}"))?;

    setup_database(&pool)
        .await
        .map_err(|e| eyre!("Failed to set up database schema: {e}"))?;

    log::debug!("database ready");
    Ok(pool)
}

/// Single-connection in-memory database with the schema applied.
#[cfg(test)]
pub(crate) async fn memory_pool() -> Result<SqlitePool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    setup_database(&pool).await?;
    Ok(pool)
}
