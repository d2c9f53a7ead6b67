use color_eyre::{eyre::eyre, Result};
use reqwest::Response;
use serde_json::json;
use url::Url;

use super::types::{Task, TaskDraft, User};
use super::wire::{self, AuthPayload, Envelope};

/// HTTP client for the task service.
///
/// Thin request/response wrapper: it shapes calls and decodes bodies into
/// domain types, and maps every failure into a single human-readable
/// message. Retry, fallback and session policy all live above it.
#[derive(Clone)]
pub struct ApiClient {
  http: reqwest::Client,
  base: Url,
}

impl ApiClient {
  pub fn new(base_url: &str) -> Result<Self> {
    let mut base =
      Url::parse(base_url).map_err(|e| eyre!("Invalid server URL {}: {}", base_url, e))?;

    // Keep a trailing slash so joins append instead of replacing the path
    if !base.path().ends_with('/') {
      base.set_path(&format!("{}/", base.path()));
    }

    let http = reqwest::Client::builder()
      .build()
      .map_err(|e| eyre!("Failed to create HTTP client: {}", e))?;

    Ok(Self { http, base })
  }

  pub fn base_url(&self) -> &Url {
    &self.base
  }

  fn endpoint(&self, path: &str) -> Result<Url> {
    self
      .base
      .join(path)
      .map_err(|e| eyre!("Invalid endpoint {}: {}", path, e))
  }

  /// Validate a persisted token and fetch the account it belongs to
  pub async fn me(&self, token: &str) -> Result<User> {
    let response = self
      .http
      .get(self.endpoint("auth/me")?)
      .bearer_auth(token)
      .send()
      .await
      .map_err(|e| eyre!("Failed to reach server: {}", e))?;

    let response = check(response).await?;
    response
      .json::<User>()
      .await
      .map_err(|e| eyre!("Failed to parse user: {}", e))
  }

  pub async fn login(&self, email: &str, password: &str) -> Result<AuthPayload> {
    let response = self
      .http
      .post(self.endpoint("auth/login")?)
      .json(&json!({ "email": email, "password": password }))
      .send()
      .await
      .map_err(|e| eyre!("Failed to reach server: {}", e))?;

    let response = check(response).await?;
    response
      .json::<AuthPayload>()
      .await
      .map_err(|e| eyre!("Failed to parse login response: {}", e))
  }

  pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<AuthPayload> {
    let response = self
      .http
      .post(self.endpoint("auth/register")?)
      .json(&json!({ "name": name, "email": email, "password": password }))
      .send()
      .await
      .map_err(|e| eyre!("Failed to reach server: {}", e))?;

    let response = check(response).await?;
    response
      .json::<AuthPayload>()
      .await
      .map_err(|e| eyre!("Failed to parse register response: {}", e))
  }

  /// Fetch the full task collection, in the service's creation order
  pub async fn list_tasks(&self, token: &str) -> Result<Vec<Task>> {
    let response = self
      .http
      .get(self.endpoint("tasks")?)
      .bearer_auth(token)
      .send()
      .await
      .map_err(|e| eyre!("Failed to reach server: {}", e))?;

    let response = check(response).await?;
    let envelope: Envelope<Vec<Task>> = response
      .json()
      .await
      .map_err(|e| eyre!("Failed to parse task list: {}", e))?;

    if !envelope.success {
      return Err(eyre!(
        "{}",
        envelope
          .message
          .unwrap_or_else(|| "Task list request failed".to_string())
      ));
    }

    envelope
      .data
      .ok_or_else(|| eyre!("Task list response carried no data"))
  }

  pub async fn create_task(&self, token: &str, draft: &TaskDraft) -> Result<()> {
    let response = self
      .http
      .post(self.endpoint("tasks")?)
      .bearer_auth(token)
      .json(draft)
      .send()
      .await
      .map_err(|e| eyre!("Failed to reach server: {}", e))?;

    check(response).await?;
    Ok(())
  }

  pub async fn update_task(&self, token: &str, id: &str, draft: &TaskDraft) -> Result<()> {
    let response = self
      .http
      .put(self.endpoint(&format!("tasks/{}", id))?)
      .bearer_auth(token)
      .json(draft)
      .send()
      .await
      .map_err(|e| eyre!("Failed to reach server: {}", e))?;

    check(response).await?;
    Ok(())
  }

  pub async fn delete_task(&self, token: &str, id: &str) -> Result<()> {
    let response = self
      .http
      .delete(self.endpoint(&format!("tasks/{}", id))?)
      .bearer_auth(token)
      .send()
      .await
      .map_err(|e| eyre!("Failed to reach server: {}", e))?;

    check(response).await?;
    Ok(())
  }
}

/// Turn a non-2xx response into the service's error message
async fn check(response: Response) -> Result<Response> {
  let status = response.status();
  if status.is_success() {
    return Ok(response);
  }

  let body = response.text().await.unwrap_or_default();
  Err(eyre!("{}", wire::error_message(status, &body)))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_endpoint_preserves_base_path() {
    let client = ApiClient::new("http://localhost:4000/api").unwrap();
    assert_eq!(
      client.endpoint("auth/me").unwrap().as_str(),
      "http://localhost:4000/api/auth/me"
    );
    assert_eq!(
      client.endpoint("tasks/abc123").unwrap().as_str(),
      "http://localhost:4000/api/tasks/abc123"
    );
  }

  #[test]
  fn test_rejects_invalid_url() {
    assert!(ApiClient::new("not a url").is_err());
  }
}
