//! Offline-tolerant cache of the remote task collection.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use color_eyre::Result;
use tracing::{debug, warn};

use crate::api::types::{Task, TaskStatus};
use crate::store::SnapshotStore;

/// Where the collection currently held in memory came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSource {
  /// Latest successful remote fetch
  Remote,
  /// Persisted fallback, written at the contained time
  Snapshot(DateTime<Utc>),
}

/// Progress counts for the home view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskSummary {
  pub total: usize,
  pub pending: usize,
  pub in_progress: usize,
  pub completed: usize,
}

#[derive(Debug)]
struct TaskState {
  tasks: Vec<Task>,
  loading: bool,
  in_flight: bool,
  source: Option<TaskSource>,
}

/// Best-available snapshot of the user's tasks under unreliable
/// connectivity.
///
/// The collection is only ever replaced wholesale: either with a fresh
/// remote fetch or with the last persisted snapshot, never a merge of the
/// two. A failed synchronization surfaces no error — the `loading` flag
/// dropping back to false is the only completion signal, and consumers
/// keep rendering whatever the cache holds.
#[derive(Clone)]
pub struct TaskCache {
  snapshots: Arc<dyn SnapshotStore>,
  state: Arc<Mutex<TaskState>>,
}

impl TaskCache {
  pub fn new(snapshots: Arc<dyn SnapshotStore>) -> Self {
    Self {
      snapshots,
      state: Arc::new(Mutex::new(TaskState {
        tasks: Vec::new(),
        loading: true,
        in_flight: false,
        source: None,
      })),
    }
  }

  /// Current collection, in server order
  pub fn tasks(&self) -> Vec<Task> {
    self.lock().tasks.clone()
  }

  pub fn loading(&self) -> bool {
    self.lock().loading
  }

  pub fn source(&self) -> Option<TaskSource> {
    self.lock().source
  }

  pub fn summary(&self) -> TaskSummary {
    let state = self.lock();
    let mut summary = TaskSummary {
      total: state.tasks.len(),
      ..TaskSummary::default()
    };
    for task in &state.tasks {
      match task.status {
        TaskStatus::Pending => summary.pending += 1,
        TaskStatus::InProgress => summary.in_progress += 1,
        TaskStatus::Completed => summary.completed += 1,
      }
    }
    summary
  }

  /// Refresh the collection from the remote, falling back to the
  /// persisted snapshot.
  ///
  /// On success the fetched sequence replaces the collection and is then
  /// persisted verbatim. On any failure the last snapshot (if one decodes)
  /// replaces the collection instead; with no usable snapshot the current
  /// collection stays as it is. No branch raises an error.
  ///
  /// A call made while another is still in flight returns immediately —
  /// callers trigger refreshes on discrete events (mount, focus,
  /// post-mutation), so overlaps only happen on accidental double
  /// triggers and dropping them keeps the last-write winner well defined.
  pub async fn synchronize<F, Fut>(&self, fetcher: F)
  where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<Task>>>,
  {
    {
      let mut state = self.lock();
      if state.in_flight {
        debug!("synchronize already in flight, ignoring");
        return;
      }
      state.in_flight = true;
      state.loading = true;
    }

    match fetcher().await {
      Ok(fresh) => {
        debug!(count = fresh.len(), "task fetch succeeded");
        {
          let mut state = self.lock();
          state.tasks = fresh.clone();
          state.source = Some(TaskSource::Remote);
        }
        if let Err(e) = self.snapshots.write(&fresh) {
          warn!("failed to persist task snapshot: {e}");
        }
      }
      Err(e) => {
        debug!("task fetch failed, falling back to snapshot: {e}");
        match self.snapshots.read() {
          Ok(Some(snapshot)) => {
            let mut state = self.lock();
            state.tasks = snapshot.tasks;
            state.source = Some(TaskSource::Snapshot(snapshot.saved_at));
          }
          Ok(None) => debug!("no usable snapshot, keeping current collection"),
          Err(e) => warn!("failed to read task snapshot: {e}"),
        }
      }
    }

    let mut state = self.lock();
    state.loading = false;
    state.in_flight = false;
  }

  /// Return the cache to its initial empty state.
  ///
  /// Called when the protected area unmounts (logout).
  pub fn reset(&self) {
    let mut state = self.lock();
    state.tasks.clear();
    state.loading = true;
    state.source = None;
  }

  fn lock(&self) -> MutexGuard<'_, TaskState> {
    self.state.lock().unwrap_or_else(|e| e.into_inner())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::api::types::TaskPriority;
  use crate::session::{SessionStatus, SessionStore};
  use crate::store::MemoryStore;
  use color_eyre::eyre::eyre;
  use std::sync::atomic::{AtomicUsize, Ordering};
  use std::time::Duration;

  fn cache() -> (TaskCache, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (TaskCache::new(store.clone()), store)
  }

  fn task(id: &str, title: &str, status: TaskStatus) -> Task {
    Task {
      id: id.into(),
      title: title.into(),
      description: None,
      status,
      priority: TaskPriority::Medium,
      created_at: "2025-05-24T10:00:00.000Z".into(),
      updated_at: "2025-05-24T10:00:00.000Z".into(),
    }
  }

  fn three_tasks() -> Vec<Task> {
    vec![
      task("a", "First", TaskStatus::Pending),
      task("b", "Second", TaskStatus::InProgress),
      task("c", "Third", TaskStatus::Completed),
    ]
  }

  #[tokio::test]
  async fn test_synchronize_replaces_collection_and_persists() {
    let (cache, store) = cache();
    let fetched = three_tasks();

    let expected = fetched.clone();
    cache.synchronize(|| async move { Ok(fetched) }).await;

    assert_eq!(cache.tasks(), expected);
    assert_eq!(cache.source(), Some(TaskSource::Remote));
    assert!(!cache.loading());

    let snapshot = store.read().unwrap().unwrap();
    assert_eq!(snapshot.tasks, expected);
  }

  #[tokio::test]
  async fn test_synchronize_falls_back_to_snapshot() {
    let (cache, store) = cache();
    let saved = three_tasks();
    store.write(&saved).unwrap();

    cache
      .synchronize(|| async move { Err(eyre!("connection refused")) })
      .await;

    assert_eq!(cache.tasks(), saved);
    assert!(matches!(cache.source(), Some(TaskSource::Snapshot(_))));
    assert!(!cache.loading());
  }

  #[tokio::test]
  async fn test_synchronize_without_snapshot_keeps_collection() {
    let (cache, _) = cache();

    cache
      .synchronize(|| async move { Err(eyre!("connection refused")) })
      .await;

    assert_eq!(cache.tasks(), Vec::new());
    assert_eq!(cache.source(), None);
    assert!(!cache.loading());
  }

  #[tokio::test]
  async fn test_fallback_serves_latest_persisted_snapshot() {
    let (cache, store) = cache();
    let fetched = three_tasks();
    cache.synchronize(|| async move { Ok(fetched) }).await;

    // Make the persisted snapshot diverge to prove the fallback read ran
    store
      .write(&[task("z", "Other", TaskStatus::Pending)])
      .unwrap();

    cache
      .synchronize(|| async move { Err(eyre!("connection refused")) })
      .await;

    assert_eq!(cache.tasks().len(), 1);
    assert_eq!(cache.tasks()[0].id, "z");
  }

  #[tokio::test]
  async fn test_overlapping_synchronize_is_ignored() {
    let (cache, _) = cache();
    let calls = Arc::new(AtomicUsize::new(0));

    let slow_calls = calls.clone();
    let slow = cache.clone();
    let first = tokio::spawn(async move {
      slow
        .synchronize(|| async move {
          slow_calls.fetch_add(1, Ordering::SeqCst);
          tokio::time::sleep(Duration::from_millis(50)).await;
          Ok(vec![task("a", "First", TaskStatus::Pending)])
        })
        .await;
    });

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(cache.loading());

    // Issued while the first is pending: dropped without calling out
    let second_calls = calls.clone();
    cache
      .synchronize(|| async move {
        second_calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![task("b", "Second", TaskStatus::Pending)])
      })
      .await;

    first.await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(cache.tasks()[0].id, "a");
    assert!(!cache.loading());
  }

  #[tokio::test]
  async fn test_summary_counts_by_status() {
    let (cache, _) = cache();
    let fetched = three_tasks();
    cache.synchronize(|| async move { Ok(fetched) }).await;

    let summary = cache.summary();
    assert_eq!(summary.total, 3);
    assert_eq!(summary.pending, 1);
    assert_eq!(summary.in_progress, 1);
    assert_eq!(summary.completed, 1);
  }

  #[tokio::test]
  async fn test_reset_clears_collection() {
    let (cache, _) = cache();
    let fetched = three_tasks();
    cache.synchronize(|| async move { Ok(fetched) }).await;

    cache.reset();
    assert!(cache.tasks().is_empty());
    assert!(cache.loading());
    assert_eq!(cache.source(), None);
  }

  /// Fresh install → bootstrap → login → first sync → offline sync.
  #[tokio::test]
  async fn test_fresh_install_flow() {
    let store = Arc::new(MemoryStore::new());
    let session = SessionStore::new(store.clone());
    let cache = TaskCache::new(store.clone());

    // No persisted token: lands unauthenticated without a network call
    session
      .bootstrap(|_| async move { Err(eyre!("must not reach the network")) })
      .await;
    assert_eq!(session.status(), SessionStatus::Unauthenticated);

    // Valid credentials: token persisted, protected area admitted
    session
      .login("ada@example.com", "secret", |_, _| async move {
        Ok((
          crate::api::types::User {
            id: "u1".into(),
            name: "Ada".into(),
            email: "ada@example.com".into(),
          },
          "jwt-abc".to_string(),
        ))
      })
      .await
      .unwrap();
    assert_eq!(session.status(), SessionStatus::Authenticated);

    // Protected area mounts against a remote holding three tasks
    let fetched = three_tasks();
    let expected = fetched.clone();
    cache.synchronize(|| async move { Ok(fetched) }).await;
    assert_eq!(cache.tasks(), expected);

    // Device goes offline: the same three tasks come back from the
    // snapshot and no error surfaces
    cache
      .synchronize(|| async move { Err(eyre!("network unreachable")) })
      .await;
    assert_eq!(cache.tasks(), expected);
    assert!(matches!(cache.source(), Some(TaskSource::Snapshot(_))));
    assert!(!cache.loading());
  }
}
