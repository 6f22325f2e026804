/// Local settings database: schema setup and preference queries.
mod migrations;
mod settings;

use anyhow::{Context, Result};
use rusqlite::Connection;

pub use settings::{SqliteStore, THEME_KEY, get_setting};

/// Environment variable overriding the database location.
pub const DB_PATH_ENV: &str = "PIXELHEAD_DB";

/// Opens (or creates) the SQLite database and runs migrations.
pub fn init(db_path: &str) -> Result<Connection> {
    let conn = Connection::open(db_path)
        .with_context(|| format!("could not open settings database at {db_path}"))?;
    migrations::run_migrations(&conn)?;
    Ok(conn)
}

/// Returns the database path: `$PIXELHEAD_DB` if set, otherwise a file
/// inside the user's data directory. Falls back to `./pixelhead.db` when
/// no data dir is found.
pub fn default_db_path() -> String {
    if let Ok(path) = std::env::var(DB_PATH_ENV) {
        if !path.is_empty() {
            return path;
        }
    }
    match crate::logging::data_dir() {
        Some(dir) => dir.join("pixelhead.db").to_string_lossy().into_owned(),
        None => "pixelhead.db".to_string(),
    }
}
