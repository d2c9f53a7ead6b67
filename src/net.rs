//! Connectivity probe feeding the offline indicator.

use std::time::Duration;

use tokio::sync::mpsc;
use tracing::debug;
use url::Url;

use crate::event::Event;

/// Watch reachability of the task service.
///
/// Spawns a background loop that probes the server URL on an interval and
/// reports each offline/online transition over the app's event channel.
/// The flag gates write affordances only — reads always run and fall back
/// to the snapshot on their own.
pub fn spawn_probe(server: Url, interval: Duration, tx: mpsc::UnboundedSender<Event>) {
  tokio::spawn(async move {
    let client = reqwest::Client::new();
    let mut offline = false;

    loop {
      // Any HTTP response counts as reachable, error statuses included:
      // the signal is reachability, not service health
      let reachable = client.get(server.clone()).send().await.is_ok();

      if reachable == offline {
        offline = !reachable;
        debug!(offline, "connectivity changed");
        if tx.send(Event::Net { offline }).is_err() {
          break;
        }
      }

      tokio::time::sleep(interval).await;
    }
  });
}
