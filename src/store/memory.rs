//! In-memory slot storage.
//!
//! Nothing survives the process: used by tests and by `--ephemeral` runs
//! where the user wants no trace on disk.

use chrono::Utc;
use color_eyre::Result;
use std::sync::Mutex;

use crate::api::types::Task;

use super::traits::{Snapshot, SnapshotStore, TokenStore};

#[derive(Default)]
pub struct MemoryStore {
  token: Mutex<Option<String>>,
  snapshot: Mutex<Option<Snapshot>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

impl TokenStore for MemoryStore {
  fn load(&self) -> Result<Option<String>> {
    Ok(self.token.lock().unwrap_or_else(|e| e.into_inner()).clone())
  }

  fn save(&self, token: &str) -> Result<()> {
    *self.token.lock().unwrap_or_else(|e| e.into_inner()) = Some(token.to_string());
    Ok(())
  }

  fn clear(&self) -> Result<()> {
    *self.token.lock().unwrap_or_else(|e| e.into_inner()) = None;
    Ok(())
  }
}

impl SnapshotStore for MemoryStore {
  fn read(&self) -> Result<Option<Snapshot>> {
    Ok(
      self
        .snapshot
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .clone(),
    )
  }

  fn write(&self, tasks: &[Task]) -> Result<()> {
    *self.snapshot.lock().unwrap_or_else(|e| e.into_inner()) = Some(Snapshot {
      tasks: tasks.to_vec(),
      saved_at: Utc::now(),
    });
    Ok(())
  }
}
