//! Region admission derived from session status.

use crate::session::SessionStatus;

/// Broad areas the app can render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
  /// Neither area while bootstrap is still deciding
  Blank,
  /// Landing, login and register views
  Unauthenticated,
  /// Everything behind a valid session
  Protected,
}

/// The one region the given session status admits.
///
/// Pure derivation; the app applies it after every session transition and
/// resets its view stack when the rendered region is no longer admitted.
pub fn admitted_region(status: SessionStatus) -> Region {
  match status {
    SessionStatus::Bootstrapping => Region::Blank,
    SessionStatus::Authenticated => Region::Protected,
    SessionStatus::Unauthenticated => Region::Unauthenticated,
  }
}

/// Events that re-run task synchronization.
///
/// An explicit enumeration rather than a hidden side effect of the view
/// lifecycle: callers name the trigger, which keeps refresh behavior
/// auditable and keeps anything else from silently becoming one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshTrigger {
  /// Protected area just mounted
  Mount,
  /// A task view regained focus
  Focus,
  /// A create/update/delete round trip completed
  PostMutation,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_bootstrapping_admits_neither_area() {
    assert_eq!(admitted_region(SessionStatus::Bootstrapping), Region::Blank);
  }

  #[test]
  fn test_authenticated_admits_protected() {
    assert_eq!(
      admitted_region(SessionStatus::Authenticated),
      Region::Protected
    );
  }

  #[test]
  fn test_unauthenticated_admits_auth_area() {
    assert_eq!(
      admitted_region(SessionStatus::Unauthenticated),
      Region::Unauthenticated
    );
  }
}
