//! Wire shapes for the task service's JSON responses.

use reqwest::StatusCode;
use serde::Deserialize;

use super::types::User;

/// Standard `{success, message, data}` envelope the task endpoints use
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
  #[serde(default)]
  pub success: bool,
  #[serde(default)]
  pub message: Option<String>,
  #[serde(default)]
  pub data: Option<T>,
}

/// Auth endpoints return the user fields flattened next to the token
#[derive(Debug, Deserialize)]
pub struct AuthPayload {
  #[serde(flatten)]
  pub user: User,
  pub token: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
  #[serde(default)]
  message: Option<String>,
}

/// Pull the service's human-readable message out of an error body.
///
/// Falls back to the HTTP status when the body isn't the expected shape.
pub fn error_message(status: StatusCode, body: &str) -> String {
  serde_json::from_str::<ErrorBody>(body)
    .ok()
    .and_then(|b| b.message)
    .unwrap_or_else(|| format!("Request failed with status {}", status))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::api::types::Task;

  #[test]
  fn test_task_list_envelope() {
    let json = r#"{
      "success": true,
      "count": 1,
      "data": [{
        "_id": "a1",
        "title": "One",
        "status": "Pending",
        "priority": "Medium",
        "createdAt": "2025-05-24T10:00:00.000Z",
        "updatedAt": "2025-05-24T10:00:00.000Z"
      }]
    }"#;

    let envelope: Envelope<Vec<Task>> = serde_json::from_str(json).unwrap();
    assert!(envelope.success);
    assert_eq!(envelope.data.unwrap().len(), 1);
  }

  #[test]
  fn test_auth_payload_flattens_user() {
    let json = r#"{
      "_id": "u1",
      "name": "Ada",
      "email": "ada@example.com",
      "token": "jwt-token"
    }"#;

    let payload: AuthPayload = serde_json::from_str(json).unwrap();
    assert_eq!(payload.user.name, "Ada");
    assert_eq!(payload.token, "jwt-token");
  }

  #[test]
  fn test_error_message_prefers_body() {
    let body = r#"{"success": false, "message": "Invalid credentials"}"#;
    assert_eq!(
      error_message(StatusCode::UNAUTHORIZED, body),
      "Invalid credentials"
    );
  }

  #[test]
  fn test_error_message_falls_back_to_status() {
    assert_eq!(
      error_message(StatusCode::BAD_GATEWAY, "<html>oops</html>"),
      "Request failed with status 502 Bad Gateway"
    );
  }
}
