/// Key/value settings queries.
use anyhow::Result;
use chrono::{DateTime, Local};
use rusqlite::Connection;

use crate::theme::PreferenceStore;
use crate::types::ThemeMode;

/// Settings key holding the explicit theme preference.
pub const THEME_KEY: &str = "theme";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Setting {
    pub key: String,
    pub value: String,
    pub updated_at: Option<DateTime<Local>>,
}

pub fn get_setting(key: &str, conn: &Connection) -> Result<Option<Setting>> {
    let mut stmt = conn.prepare("SELECT key, value, updated_at FROM settings WHERE key = ?1")?;
    let mut rows = stmt.query([key])?;
    if let Some(row) = rows.next()? {
        let updated_at: Option<String> = row.get(2)?;
        Ok(Some(Setting {
            key: row.get(0)?,
            value: row.get(1)?,
            updated_at: updated_at
                .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
                .map(|dt| dt.with_timezone(&Local)),
        }))
    } else {
        Ok(None)
    }
}

pub fn set_setting(key: &str, value: &str, conn: &Connection) -> Result<()> {
    conn.execute(
        "INSERT INTO settings (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        (key, value, Local::now().to_rfc3339()),
    )?;
    Ok(())
}

/// Returns whether a row was removed.
pub fn delete_setting(key: &str, conn: &Connection) -> Result<bool> {
    let removed = conn.execute("DELETE FROM settings WHERE key = ?1", [key])?;
    Ok(removed > 0)
}

/// Theme preference persisted in the settings table.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    #[cfg(test)]
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}

impl PreferenceStore for SqliteStore {
    fn load(&self) -> Result<Option<ThemeMode>> {
        let Some(setting) = get_setting(THEME_KEY, &self.conn)? else {
            return Ok(None);
        };
        match setting.value.parse::<ThemeMode>() {
            Ok(mode) => Ok(Some(mode)),
            Err(err) => {
                tracing::warn!(%err, "ignoring unreadable theme preference");
                Ok(None)
            }
        }
    }

    fn save(&mut self, mode: ThemeMode) -> Result<()> {
        set_setting(THEME_KEY, mode.as_str(), &self.conn)
    }

    fn clear(&mut self) -> Result<()> {
        delete_setting(THEME_KEY, &self.conn)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations::run_migrations;

    fn memory_conn() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn settings_round_trip() {
        let conn = memory_conn();
        assert_eq!(get_setting("theme", &conn).unwrap(), None);
        set_setting("theme", "dark", &conn).unwrap();
        set_setting("theme", "light", &conn).unwrap();
        let setting = get_setting("theme", &conn).unwrap().unwrap();
        assert_eq!(setting.value, "light");
        assert!(setting.updated_at.is_some());
        assert!(delete_setting("theme", &conn).unwrap());
        assert!(!delete_setting("theme", &conn).unwrap());
    }

    #[test]
    fn store_reads_back_what_it_saved() {
        let mut store = SqliteStore::new(memory_conn());
        assert_eq!(store.load().unwrap(), None);
        store.save(ThemeMode::Dark).unwrap();
        assert_eq!(store.load().unwrap(), Some(ThemeMode::Dark));
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn garbage_preference_counts_as_absent() {
        let store = SqliteStore::new(memory_conn());
        set_setting(THEME_KEY, "sepia", store.conn()).unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
