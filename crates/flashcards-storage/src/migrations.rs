//! Schema management
//!
//! The schema only ever grows. Each revision adds columns to the `questions`
//! table and checks for them first, so files written by any earlier build
//! open cleanly. The revision number lives in `PRAGMA user_version`.

use rusqlite::{Connection, Result};

pub const QUESTIONS_TABLE: &str = "questions";

pub const SCHEMA_VERSION: i32 = 3;

/// Outcome of [`ensure_schema`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaReport {
    /// `user_version` found in the file before any revision ran.
    pub previous_version: i32,
    /// `user_version` after this call.
    pub current_version: i32,
    /// Whether the `questions` table had to be created.
    pub created: bool,
}

pub fn ensure_schema(conn: &Connection) -> Result<SchemaReport> {
    let previous_version = get_schema_version(conn)?;
    let created = !table_exists(conn, QUESTIONS_TABLE)?;

    if previous_version < 1 {
        migrate_v1(conn)?;
    }
    if previous_version < 2 {
        migrate_v2(conn)?;
    }
    if previous_version < 3 {
        migrate_v3(conn)?;
    }

    let current_version = if previous_version < SCHEMA_VERSION {
        set_schema_version(conn, SCHEMA_VERSION)?;
        SCHEMA_VERSION
    } else {
        if previous_version > SCHEMA_VERSION {
            tracing::warn!(
                found = previous_version,
                supported = SCHEMA_VERSION,
                "Database was written by a newer schema revision"
            );
        }
        previous_version
    };

    Ok(SchemaReport {
        previous_version,
        current_version,
        created,
    })
}

fn get_schema_version(conn: &Connection) -> Result<i32> {
    conn.pragma_query_value(None, "user_version", |row| row.get(0))
}

fn set_schema_version(conn: &Connection, version: i32) -> Result<()> {
    conn.pragma_update(None, "user_version", version)
}

fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)",
        [table],
        |row| row.get(0),
    )
}

fn table_columns(conn: &Connection, table: &str) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table})"))?;
    let columns = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<Result<Vec<_>>>()?;
    Ok(columns)
}

fn add_column_if_missing(
    conn: &Connection,
    table: &str,
    column: &str,
    definition: &str,
) -> Result<()> {
    if table_columns(conn, table)?.iter().any(|c| c == column) {
        return Ok(());
    }

    tracing::info!(table, column, "Adding column");
    conn.execute(
        &format!("ALTER TABLE {table} ADD COLUMN {column} {definition}"),
        [],
    )?;
    Ok(())
}

fn migrate_v1(conn: &Connection) -> Result<()> {
    tracing::info!("Running migration v1: questions table");

    // AUTOINCREMENT keeps ids from being handed out again after the newest row is deleted
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            topic TEXT NOT NULL,
            subject TEXT NOT NULL
        );
    "#,
    )
}

fn migrate_v2(conn: &Connection) -> Result<()> {
    tracing::info!("Running migration v2: image attachments");

    add_column_if_missing(conn, QUESTIONS_TABLE, "question_image_data", "BLOB")?;
    add_column_if_missing(conn, QUESTIONS_TABLE, "answer_image_data", "BLOB")
}

fn migrate_v3(conn: &Connection) -> Result<()> {
    tracing::info!("Running migration v3: image MIME types");

    add_column_if_missing(conn, QUESTIONS_TABLE, "question_image_mime", "TEXT")?;
    add_column_if_missing(conn, QUESTIONS_TABLE, "answer_image_mime", "TEXT")
}
