use chrono::{DateTime, Utc};
use color_eyre::Result;

use crate::api::types::Task;

/// Persisted copy of the task collection plus when it was written
#[derive(Debug, Clone)]
pub struct Snapshot {
  pub tasks: Vec<Task>,
  pub saved_at: DateTime<Utc>,
}

/// Accessor for the single persisted session-token slot.
///
/// The session store is the only writer.
pub trait TokenStore: Send + Sync {
  fn load(&self) -> Result<Option<String>>;
  fn save(&self, token: &str) -> Result<()>;
  /// Must succeed even when no token is stored
  fn clear(&self) -> Result<()>;
}

/// Accessor for the last-known-good task collection slot.
///
/// The task cache is the only writer. A missing, corrupt or
/// schema-mismatched snapshot reads as `None` — there is no migration
/// scheme for this slot.
pub trait SnapshotStore: Send + Sync {
  fn read(&self) -> Result<Option<Snapshot>>;
  fn write(&self, tasks: &[Task]) -> Result<()>;
}
