//! SQLite-backed persistence.
//!
//! The schema is a single key-value table. The session history lives
//! under one named slot as a serialized JSON array, read once at startup
//! and rewritten whole on every append. The CLI also uses the kv table
//! to carry the engine's transient state between invocations.

use rusqlite::{params, Connection};

use super::SessionStore;
use crate::error::{CoreError, StorageError};
use crate::timer::TimerSession;

/// Key-value slot holding the serialized session history.
pub const SESSIONS_KEY: &str = "pomodoro_sessions";

/// SQLite database at `~/.config/habitflow/habitflow.db`.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database, creating the file and schema if needed.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self, CoreError> {
        let path = super::data_dir()?.join("habitflow.db");
        let conn = Connection::open(&path)
            .map_err(|source| StorageError::OpenFailed { path, source })?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    pub fn open_memory() -> Result<Self, CoreError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StorageError::QueryFailed(e.to_string()))?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), StorageError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    pub fn kv_get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let mut rows = stmt.query(params![key])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

impl SessionStore for Database {
    fn load(&self) -> Result<Vec<TimerSession>, StorageError> {
        match self.kv_get(SESSIONS_KEY)? {
            Some(json) => {
                serde_json::from_str(&json).map_err(|e| StorageError::Corrupt(e.to_string()))
            }
            None => Ok(Vec::new()),
        }
    }

    fn append(&self, session: &TimerSession) -> Result<(), StorageError> {
        let mut sessions = self.load()?;
        sessions.push(session.clone());
        let json = serde_json::to_string(&sessions)
            .map_err(|e| StorageError::Corrupt(e.to_string()))?;
        self.kv_set(SESSIONS_KEY, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::TimerMode;

    fn session(at: &str) -> TimerSession {
        TimerSession {
            mode: TimerMode::Focus,
            duration: TimerMode::Focus.duration_secs(),
            completed_at: at.parse().unwrap(),
        }
    }

    #[test]
    fn kv_round_trip() {
        let db = Database::open_memory().unwrap();
        assert!(db.kv_get("test").unwrap().is_none());
        db.kv_set("test", "hello").unwrap();
        assert_eq!(db.kv_get("test").unwrap().unwrap(), "hello");
        db.kv_set("test", "world").unwrap();
        assert_eq!(db.kv_get("test").unwrap().unwrap(), "world");
    }

    #[test]
    fn empty_store_loads_empty_history() {
        let db = Database::open_memory().unwrap();
        assert!(db.load().unwrap().is_empty());
    }

    #[test]
    fn append_preserves_order() {
        let db = Database::open_memory().unwrap();
        let a = session("2024-03-01T09:00:00Z");
        let b = session("2024-03-01T10:00:00Z");
        db.append(&a).unwrap();
        db.append(&b).unwrap();
        assert_eq!(db.load().unwrap(), vec![a, b]);
    }

    #[test]
    fn corrupt_slot_is_an_error_not_a_silent_wipe() {
        let db = Database::open_memory().unwrap();
        db.kv_set(SESSIONS_KEY, "not json").unwrap();
        assert!(matches!(db.load(), Err(StorageError::Corrupt(_))));
    }
}
