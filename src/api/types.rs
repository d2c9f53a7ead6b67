use serde::{Deserialize, Serialize};

/// Account the current session belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  #[serde(rename = "_id")]
  pub id: String,
  pub name: String,
  pub email: String,
}

/// Task workflow state, serialized with the service's labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
  Pending,
  #[serde(rename = "In Progress")]
  InProgress,
  Completed,
}

impl TaskStatus {
  pub fn label(self) -> &'static str {
    match self {
      TaskStatus::Pending => "Pending",
      TaskStatus::InProgress => "In Progress",
      TaskStatus::Completed => "Completed",
    }
  }

  /// Cycle forward through the states (form selector)
  pub fn next(self) -> Self {
    match self {
      TaskStatus::Pending => TaskStatus::InProgress,
      TaskStatus::InProgress => TaskStatus::Completed,
      TaskStatus::Completed => TaskStatus::Pending,
    }
  }

  /// Cycle backward through the states
  pub fn prev(self) -> Self {
    match self {
      TaskStatus::Pending => TaskStatus::Completed,
      TaskStatus::InProgress => TaskStatus::Pending,
      TaskStatus::Completed => TaskStatus::InProgress,
    }
  }
}

/// Task priority, serialized with the service's labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskPriority {
  Low,
  Medium,
  High,
}

impl TaskPriority {
  pub fn label(self) -> &'static str {
    match self {
      TaskPriority::Low => "Low",
      TaskPriority::Medium => "Medium",
      TaskPriority::High => "High",
    }
  }

  pub fn next(self) -> Self {
    match self {
      TaskPriority::Low => TaskPriority::Medium,
      TaskPriority::Medium => TaskPriority::High,
      TaskPriority::High => TaskPriority::Low,
    }
  }

  pub fn prev(self) -> Self {
    match self {
      TaskPriority::Low => TaskPriority::High,
      TaskPriority::Medium => TaskPriority::Low,
      TaskPriority::High => TaskPriority::Medium,
    }
  }
}

/// A task as the service returns it.
///
/// The serde layout matches the wire format exactly (Mongo-style `_id`,
/// camelCase timestamps), so the same shape doubles as the persisted
/// snapshot format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
  #[serde(rename = "_id")]
  pub id: String,
  pub title: String,
  #[serde(default)]
  pub description: Option<String>,
  pub status: TaskStatus,
  pub priority: TaskPriority,
  pub created_at: String,
  pub updated_at: String,
}

/// Outgoing body for task create/update calls
#[derive(Debug, Clone, Serialize)]
pub struct TaskDraft {
  pub title: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub status: TaskStatus,
  pub priority: TaskPriority,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_task_wire_names() {
    let json = r#"{
      "_id": "6650f0a1",
      "title": "Write report",
      "description": "Quarterly numbers",
      "status": "In Progress",
      "priority": "High",
      "createdAt": "2025-05-24T10:00:00.000Z",
      "updatedAt": "2025-05-25T09:30:00.000Z"
    }"#;

    let task: Task = serde_json::from_str(json).unwrap();
    assert_eq!(task.id, "6650f0a1");
    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.priority, TaskPriority::High);
    assert_eq!(task.created_at, "2025-05-24T10:00:00.000Z");
  }

  #[test]
  fn test_task_missing_description() {
    let json = r#"{
      "_id": "6650f0a2",
      "title": "Buy milk",
      "status": "Pending",
      "priority": "Low",
      "createdAt": "2025-05-24T10:00:00.000Z",
      "updatedAt": "2025-05-24T10:00:00.000Z"
    }"#;

    let task: Task = serde_json::from_str(json).unwrap();
    assert_eq!(task.description, None);
  }

  #[test]
  fn test_task_snapshot_roundtrip() {
    let task = Task {
      id: "a1".into(),
      title: "Ship release".into(),
      description: None,
      status: TaskStatus::Completed,
      priority: TaskPriority::Medium,
      created_at: "2025-05-24T10:00:00.000Z".into(),
      updated_at: "2025-05-24T10:00:00.000Z".into(),
    };

    let bytes = serde_json::to_vec(&vec![task.clone()]).unwrap();
    let back: Vec<Task> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(back, vec![task]);
  }

  #[test]
  fn test_status_cycle_covers_all_states() {
    let start = TaskStatus::Pending;
    let mut seen = vec![start];
    let mut current = start.next();
    while current != start {
      seen.push(current);
      current = current.next();
    }
    assert_eq!(seen.len(), 3);
    assert_eq!(start.next().prev(), start);
  }
}
