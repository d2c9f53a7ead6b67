//! Local persistence slots for offline support.
//!
//! Two slots back the whole client: the opaque session token and the
//! last-known-good task snapshot. The traits keep the session store and
//! task cache independent of where the bytes actually live; the SQLite
//! implementation covers normal runs and the in-memory one covers tests
//! and `--ephemeral` sessions.

mod memory;
mod sqlite;
mod traits;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use traits::{Snapshot, SnapshotStore, TokenStore};
