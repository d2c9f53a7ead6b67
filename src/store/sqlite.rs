//! SQLite-backed slot storage.

use chrono::{DateTime, Utc};
use color_eyre::{eyre::eyre, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::sync::{Mutex, MutexGuard};

use crate::api::types::Task;

use super::traits::{Snapshot, SnapshotStore, TokenStore};

const TOKEN_SLOT: &str = "session_token";
const SNAPSHOT_SLOT: &str = "task_snapshot";

/// Schema for the slot table.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS slots (
    slot TEXT PRIMARY KEY,
    value BLOB NOT NULL,
    saved_at TEXT NOT NULL DEFAULT (datetime('now'))
);
"#;

/// Single-file store holding both persistence slots.
pub struct SqliteStore {
  conn: Mutex<Connection>,
}

impl SqliteStore {
  /// Open or create the store at the default location.
  pub fn open() -> Result<Self> {
    let path = Self::default_path()?;

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)
        .map_err(|e| eyre!("Failed to create data directory: {}", e))?;
    }

    let conn = Connection::open(&path)
      .map_err(|e| eyre!("Failed to open store at {}: {}", path.display(), e))?;

    Self::from_connection(conn)
  }

  fn from_connection(conn: Connection) -> Result<Self> {
    conn
      .execute_batch(SCHEMA)
      .map_err(|e| eyre!("Failed to run store migrations: {}", e))?;

    Ok(Self {
      conn: Mutex::new(conn),
    })
  }

  /// Get the default database path
  fn default_path() -> Result<std::path::PathBuf> {
    let data_dir = dirs::data_dir()
      .or_else(|| dirs::home_dir().map(|p| p.join(".local/share")))
      .ok_or_else(|| eyre!("Could not determine data directory"))?;

    Ok(data_dir.join("taskdeck").join("taskdeck.db"))
  }

  fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
    self.conn.lock().map_err(|e| eyre!("Lock poisoned: {}", e))
  }

  fn get_slot(&self, slot: &str) -> Result<Option<(Vec<u8>, String)>> {
    let conn = self.lock()?;

    let mut stmt = conn
      .prepare("SELECT value, saved_at FROM slots WHERE slot = ?")
      .map_err(|e| eyre!("Failed to prepare slot query: {}", e))?;

    stmt
      .query_row(params![slot], |row| Ok((row.get(0)?, row.get(1)?)))
      .optional()
      .map_err(|e| eyre!("Failed to read slot {}: {}", slot, e))
  }

  fn put_slot(&self, slot: &str, value: &[u8]) -> Result<()> {
    let conn = self.lock()?;

    conn
      .execute(
        "INSERT OR REPLACE INTO slots (slot, value, saved_at) VALUES (?, ?, datetime('now'))",
        params![slot, value],
      )
      .map_err(|e| eyre!("Failed to write slot {}: {}", slot, e))?;

    Ok(())
  }

  fn clear_slot(&self, slot: &str) -> Result<()> {
    let conn = self.lock()?;

    conn
      .execute("DELETE FROM slots WHERE slot = ?", params![slot])
      .map_err(|e| eyre!("Failed to clear slot {}: {}", slot, e))?;

    Ok(())
  }
}

impl TokenStore for SqliteStore {
  fn load(&self) -> Result<Option<String>> {
    // A token that isn't valid UTF-8 reads as absent
    Ok(
      self
        .get_slot(TOKEN_SLOT)?
        .and_then(|(value, _)| String::from_utf8(value).ok()),
    )
  }

  fn save(&self, token: &str) -> Result<()> {
    self.put_slot(TOKEN_SLOT, token.as_bytes())
  }

  fn clear(&self) -> Result<()> {
    self.clear_slot(TOKEN_SLOT)
  }
}

impl SnapshotStore for SqliteStore {
  fn read(&self) -> Result<Option<Snapshot>> {
    let row = match self.get_slot(SNAPSHOT_SLOT)? {
      Some(row) => row,
      None => return Ok(None),
    };

    let (value, saved_at_str) = row;

    // A snapshot that no longer decodes is treated as absent
    let tasks: Vec<Task> = match serde_json::from_slice(&value) {
      Ok(tasks) => tasks,
      Err(_) => return Ok(None),
    };

    let saved_at = match parse_datetime(&saved_at_str) {
      Ok(saved_at) => saved_at,
      Err(_) => return Ok(None),
    };

    Ok(Some(Snapshot { tasks, saved_at }))
  }

  fn write(&self, tasks: &[Task]) -> Result<()> {
    let value =
      serde_json::to_vec(tasks).map_err(|e| eyre!("Failed to serialize snapshot: {}", e))?;
    self.put_slot(SNAPSHOT_SLOT, &value)
  }
}

/// Parse a datetime string from SQLite format.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>> {
  // SQLite stores as "YYYY-MM-DD HH:MM:SS"
  chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
    .map(|dt| dt.and_utc())
    .map_err(|e| eyre!("Failed to parse datetime '{}': {}", s, e))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::api::types::{TaskPriority, TaskStatus};

  fn store() -> SqliteStore {
    let conn = Connection::open_in_memory().unwrap();
    SqliteStore::from_connection(conn).unwrap()
  }

  fn task(id: &str, title: &str) -> Task {
    Task {
      id: id.into(),
      title: title.into(),
      description: None,
      status: TaskStatus::Pending,
      priority: TaskPriority::Medium,
      created_at: "2025-05-24T10:00:00.000Z".into(),
      updated_at: "2025-05-24T10:00:00.000Z".into(),
    }
  }

  #[test]
  fn test_token_roundtrip() {
    let store = store();
    assert_eq!(TokenStore::load(&store).unwrap(), None);

    store.save("jwt-abc").unwrap();
    assert_eq!(TokenStore::load(&store).unwrap(), Some("jwt-abc".into()));

    store.save("jwt-def").unwrap();
    assert_eq!(TokenStore::load(&store).unwrap(), Some("jwt-def".into()));
  }

  #[test]
  fn test_token_clear_is_idempotent() {
    let store = store();
    TokenStore::clear(&store).unwrap();

    store.save("jwt-abc").unwrap();
    TokenStore::clear(&store).unwrap();
    TokenStore::clear(&store).unwrap();
    assert_eq!(TokenStore::load(&store).unwrap(), None);
  }

  #[test]
  fn test_snapshot_roundtrip_preserves_order() {
    let store = store();
    let tasks = vec![task("c", "Third"), task("a", "First"), task("b", "Second")];

    store.write(&tasks).unwrap();
    let snapshot = store.read().unwrap().unwrap();
    assert_eq!(snapshot.tasks, tasks);
  }

  #[test]
  fn test_corrupt_snapshot_reads_as_absent() {
    let store = store();
    store.put_slot(SNAPSHOT_SLOT, b"{ not json").unwrap();
    assert!(store.read().unwrap().is_none());
  }

  #[test]
  fn test_snapshot_overwrites_previous() {
    let store = store();
    store.write(&[task("a", "First")]).unwrap();
    store.write(&[task("b", "Second")]).unwrap();

    let snapshot = store.read().unwrap().unwrap();
    assert_eq!(snapshot.tasks.len(), 1);
    assert_eq!(snapshot.tasks[0].id, "b");
  }
}
