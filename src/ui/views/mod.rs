pub mod home;
pub mod landing;
pub mod login;
pub mod profile;
pub mod register;
pub mod task_form;
pub mod task_list;

use ratatui::prelude::*;

use crate::api::types::{TaskPriority, TaskStatus};

pub(crate) fn status_color(status: TaskStatus) -> Color {
  match status {
    TaskStatus::Pending => Color::Yellow,
    TaskStatus::InProgress => Color::Blue,
    TaskStatus::Completed => Color::Green,
  }
}

pub(crate) fn priority_color(priority: TaskPriority) -> Color {
  match priority {
    TaskPriority::Low => Color::Green,
    TaskPriority::Medium => Color::Yellow,
    TaskPriority::High => Color::Red,
  }
}

/// Center a fixed-size box inside the given area, clamped to fit
pub(crate) fn centered_box(area: Rect, width: u16, height: u16) -> Rect {
  let width = width.min(area.width);
  let height = height.min(area.height);
  Rect {
    x: area.x + (area.width - width) / 2,
    y: area.y + (area.height - height) / 2,
    width,
    height,
  }
}
