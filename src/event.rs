use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};
use std::time::Duration;
use tokio::sync::mpsc;

/// Application events
#[derive(Debug)]
pub enum Event {
  /// Terminal key press
  Key(KeyEvent),
  /// Periodic tick for UI refresh
  Tick,
  /// Session store finished an async transition
  Session(SessionEvent),
  /// Task cache or mutation activity
  Tasks(TaskEvent),
  /// Connectivity transition from the probe
  Net { offline: bool },
}

/// Outcomes of async session operations
#[derive(Debug)]
pub enum SessionEvent {
  /// Bootstrap resolved to a terminal status
  Bootstrapped,
  /// Login or register round trip succeeded
  Authenticated,
  /// Login or register failed with a user-facing message
  Rejected(String),
}

/// Outcomes of async task operations
#[derive(Debug)]
pub enum TaskEvent {
  /// A synchronize call finished, either branch
  Synced,
  /// A create/update/delete call succeeded
  Mutated,
  /// A mutation was rejected with a user-facing message
  MutationFailed(String),
}

/// Event handler that produces events from terminal input and a tick timer
pub struct EventHandler {
  tx: mpsc::UnboundedSender<Event>,
  rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
  /// Create a new event handler with the given tick rate
  pub fn new(tick_rate: Duration) -> Self {
    let (tx, rx) = mpsc::unbounded_channel();

    // Spawn terminal event reader
    let key_tx = tx.clone();
    tokio::spawn(async move {
      loop {
        if event::poll(tick_rate).unwrap_or(false) {
          if let Ok(evt) = event::read() {
            if let CrosstermEvent::Key(key) = evt {
              if key_tx.send(Event::Key(key)).is_err() {
                break;
              }
            }
          }
        } else {
          // Tick
          if key_tx.send(Event::Tick).is_err() {
            break;
          }
        }
      }
    });

    Self { tx, rx }
  }

  /// Sender handle for async tasks to report back through
  pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
    self.tx.clone()
  }

  /// Receive the next event
  pub async fn next(&mut self) -> Option<Event> {
    self.rx.recv().await
  }
}
