//! SQLite persistence layer.
//!
//! RULE: Only store.rs talks to the database. The persistence manager
//! calls store methods — nothing else executes SQL.

use crate::error::SimResult;
use rusqlite::{params, Connection, OptionalExtension};

pub struct SaveStore {
    conn: Connection,
}

impl SaveStore {
    /// Open (or create) the save database at `path`.
    pub fn open(path: &str) -> SimResult<Self> {
        let conn = Connection::open(path)?;
        // WAL mode: better concurrent read performance.
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> SimResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> SimResult<()> {
        self.conn
            .execute_batch(include_str!("../../migrations/001_foundation.sql"))?;
        Ok(())
    }

    /// Write a save payload under `key`, replacing any previous save.
    pub fn write_save(&self, key: &str, payload: &str) -> SimResult<()> {
        let saved_at = chrono::Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO save_slot (key, payload, saved_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET payload = ?2, saved_at = ?3",
            params![key, payload, saved_at],
        )?;
        Ok(())
    }

    /// Read the save payload under `key`, if any.
    pub fn read_save(&self, key: &str) -> SimResult<Option<String>> {
        let payload = self
            .conn
            .query_row(
                "SELECT payload FROM save_slot WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(payload)
    }
}
