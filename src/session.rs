//! Authentication session: status, current user and the persisted token.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};

use color_eyre::{eyre::eyre, Result};
use tracing::{debug, warn};

use crate::api::types::User;
use crate::store::TokenStore;

/// Where the session currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
  /// Startup validation of a persisted token is still running
  Bootstrapping,
  Authenticated,
  Unauthenticated,
}

#[derive(Debug)]
struct SessionState {
  status: SessionStatus,
  user: Option<User>,
  token: Option<String>,
}

/// Single authoritative record of who is logged in.
///
/// Handles are cheap to clone and share one underlying state. The async
/// operations take the remote call as a closure, so the transport stays
/// out of the state machine and tests can substitute stubs.
///
/// Valid transitions: `Bootstrapping` resolves to `Authenticated` or
/// `Unauthenticated` exactly once; `login`/`register` move
/// `Unauthenticated → Authenticated`; `logout` moves anything to
/// `Unauthenticated`. The navigation guard keeps the login surface
/// unreachable while already authenticated.
#[derive(Clone)]
pub struct SessionStore {
  tokens: Arc<dyn TokenStore>,
  state: Arc<Mutex<SessionState>>,
}

impl SessionStore {
  pub fn new(tokens: Arc<dyn TokenStore>) -> Self {
    Self {
      tokens,
      state: Arc::new(Mutex::new(SessionState {
        status: SessionStatus::Bootstrapping,
        user: None,
        token: None,
      })),
    }
  }

  pub fn status(&self) -> SessionStatus {
    self.lock().status
  }

  pub fn user(&self) -> Option<User> {
    self.lock().user.clone()
  }

  /// Bearer credential for scoping remote calls
  pub fn token(&self) -> Option<String> {
    self.lock().token.clone()
  }

  /// Resolve the persisted token into a terminal status.
  ///
  /// Runs once at process start. Without a persisted token this issues no
  /// network call at all. Any validation failure purges the stale token.
  /// Never fails outward — the outcome is always a terminal status.
  pub async fn bootstrap<F, Fut>(&self, fetch_me: F)
  where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<User>>,
  {
    let token = match self.tokens.load() {
      Ok(Some(token)) => token,
      Ok(None) => {
        self.transition(SessionStatus::Unauthenticated, None, None);
        return;
      }
      Err(e) => {
        warn!("failed to read persisted token: {e}");
        self.transition(SessionStatus::Unauthenticated, None, None);
        return;
      }
    };

    match fetch_me(token.clone()).await {
      Ok(user) => {
        debug!(email = %user.email, "session restored from persisted token");
        self.transition(SessionStatus::Authenticated, Some(user), Some(token));
      }
      Err(e) => {
        debug!("persisted token rejected: {e}");
        if let Err(e) = self.tokens.clear() {
          warn!("failed to purge stale token: {e}");
        }
        self.transition(SessionStatus::Unauthenticated, None, None);
      }
    }
  }

  /// Exchange credentials for a session.
  ///
  /// On success the returned token is persisted before the in-memory
  /// transition, so a crash in between can only leave a valid token
  /// behind. On failure the remote message propagates unchanged and no
  /// state is written.
  pub async fn login<F, Fut>(&self, email: &str, password: &str, submit: F) -> Result<()>
  where
    F: FnOnce(String, String) -> Fut,
    Fut: Future<Output = Result<(User, String)>>,
  {
    if email.trim().is_empty() || password.is_empty() {
      return Err(eyre!("Email and password are required"));
    }

    let (user, token) = submit(email.trim().to_string(), password.to_string()).await?;

    self.tokens.save(&token)?;
    debug!(email = %user.email, "logged in");
    self.transition(SessionStatus::Authenticated, Some(user), Some(token));

    Ok(())
  }

  /// Create an account; same contract as `login`.
  pub async fn register<F, Fut>(
    &self,
    name: &str,
    email: &str,
    password: &str,
    submit: F,
  ) -> Result<()>
  where
    F: FnOnce(String, String, String) -> Fut,
    Fut: Future<Output = Result<(User, String)>>,
  {
    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
      return Err(eyre!("Name, email and password are required"));
    }

    let (user, token) = submit(
      name.trim().to_string(),
      email.trim().to_string(),
      password.to_string(),
    )
    .await?;

    self.tokens.save(&token)?;
    debug!(email = %user.email, "account created");
    self.transition(SessionStatus::Authenticated, Some(user), Some(token));

    Ok(())
  }

  /// Drop the session.
  ///
  /// Purges the persisted token unconditionally and never fails; calling
  /// it while already logged out is a no-op.
  pub fn logout(&self) {
    if let Err(e) = self.tokens.clear() {
      warn!("failed to purge token on logout: {e}");
    }
    debug!("logged out");
    self.transition(SessionStatus::Unauthenticated, None, None);
  }

  fn transition(&self, status: SessionStatus, user: Option<User>, token: Option<String>) {
    let mut state = self.lock();
    state.status = status;
    state.user = user;
    state.token = token;
  }

  fn lock(&self) -> MutexGuard<'_, SessionState> {
    self.state.lock().unwrap_or_else(|e| e.into_inner())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::store::MemoryStore;
  use std::sync::atomic::{AtomicBool, Ordering};

  fn session() -> (SessionStore, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (SessionStore::new(store.clone()), store)
  }

  fn user() -> User {
    User {
      id: "u1".into(),
      name: "Ada".into(),
      email: "ada@example.com".into(),
    }
  }

  #[tokio::test]
  async fn test_bootstrap_without_token_skips_network() {
    let (session, _) = session();
    assert_eq!(session.status(), SessionStatus::Bootstrapping);

    let called = Arc::new(AtomicBool::new(false));
    let flag = called.clone();
    session
      .bootstrap(|_| async move {
        flag.store(true, Ordering::SeqCst);
        Ok(user())
      })
      .await;

    assert!(!called.load(Ordering::SeqCst));
    assert_eq!(session.status(), SessionStatus::Unauthenticated);
  }

  #[tokio::test]
  async fn test_bootstrap_restores_session() {
    let (session, store) = session();
    store.save("jwt-abc").unwrap();

    session
      .bootstrap(|token| async move {
        assert_eq!(token, "jwt-abc");
        Ok(user())
      })
      .await;

    assert_eq!(session.status(), SessionStatus::Authenticated);
    assert_eq!(session.user().unwrap().name, "Ada");
    assert_eq!(session.token(), Some("jwt-abc".into()));
  }

  #[tokio::test]
  async fn test_bootstrap_rejection_purges_token() {
    let (session, store) = session();
    store.save("jwt-stale").unwrap();

    session
      .bootstrap(|_| async move { Err(eyre!("Invalid token")) })
      .await;

    assert_eq!(session.status(), SessionStatus::Unauthenticated);
    assert_eq!(session.user(), None);
    assert_eq!(store.load().unwrap(), None);
  }

  #[tokio::test]
  async fn test_login_persists_returned_token() {
    let (session, store) = session();
    session.bootstrap(|_| async move { Ok(user()) }).await;

    session
      .login("ada@example.com", "secret", |_, _| async move {
        Ok((user(), "jwt-fresh".to_string()))
      })
      .await
      .unwrap();

    assert_eq!(session.status(), SessionStatus::Authenticated);
    assert_eq!(store.load().unwrap(), Some("jwt-fresh".into()));
  }

  #[tokio::test]
  async fn test_login_rejection_writes_nothing() {
    let (session, store) = session();
    session.bootstrap(|_| async move { Ok(user()) }).await;

    let err = session
      .login("ada@example.com", "wrong", |_, _| async move {
        Err(eyre!("Invalid credentials"))
      })
      .await
      .unwrap_err();

    assert_eq!(err.to_string(), "Invalid credentials");
    assert_eq!(session.status(), SessionStatus::Unauthenticated);
    assert_eq!(store.load().unwrap(), None);
  }

  #[tokio::test]
  async fn test_login_requires_both_fields() {
    let (session, store) = session();
    session.bootstrap(|_| async move { Ok(user()) }).await;

    let called = Arc::new(AtomicBool::new(false));
    let flag = called.clone();
    let err = session
      .login("", "secret", |_, _| async move {
        flag.store(true, Ordering::SeqCst);
        Ok((user(), "jwt-abc".to_string()))
      })
      .await
      .unwrap_err();

    assert_eq!(err.to_string(), "Email and password are required");
    assert!(!called.load(Ordering::SeqCst));
    assert_eq!(store.load().unwrap(), None);
  }

  #[tokio::test]
  async fn test_register_persists_returned_token() {
    let (session, store) = session();
    session.bootstrap(|_| async move { Ok(user()) }).await;

    session
      .register("Ada", "ada@example.com", "secret", |_, _, _| async move {
        Ok((user(), "jwt-new".to_string()))
      })
      .await
      .unwrap();

    assert_eq!(session.status(), SessionStatus::Authenticated);
    assert_eq!(store.load().unwrap(), Some("jwt-new".into()));
  }

  #[tokio::test]
  async fn test_logout_is_idempotent() {
    let (session, store) = session();
    store.save("jwt-abc").unwrap();
    session.bootstrap(|_| async move { Ok(user()) }).await;
    assert_eq!(session.status(), SessionStatus::Authenticated);

    session.logout();
    assert_eq!(session.status(), SessionStatus::Unauthenticated);
    assert_eq!(session.user(), None);
    assert_eq!(store.load().unwrap(), None);

    // Logging out again changes nothing and does not fail
    session.logout();
    assert_eq!(session.status(), SessionStatus::Unauthenticated);
    assert_eq!(store.load().unwrap(), None);
  }
}
