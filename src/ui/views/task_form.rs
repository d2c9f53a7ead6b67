use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::TaskForm;
use crate::ui::components::form;

use super::{centered_box, priority_color, status_color};

/// Create/edit form for a single task
pub fn draw_task_form(frame: &mut Frame, area: Rect, form: &TaskForm) {
  let box_area = centered_box(area, 64, 10);
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // Header
      Constraint::Length(1),
      Constraint::Length(1), // Title
      Constraint::Length(1), // Description
      Constraint::Length(1), // Status
      Constraint::Length(1), // Priority
      Constraint::Length(1), // Error
      Constraint::Length(1),
      Constraint::Length(1), // Hint
      Constraint::Min(0),
    ])
    .split(box_area);

  let header = if form.editing.is_some() {
    "Edit task"
  } else {
    "New task"
  };
  frame.render_widget(
    Paragraph::new(Span::styled(
      header,
      Style::default().fg(Color::Cyan).bold(),
    )),
    rows[0],
  );

  form::draw_field(frame, rows[2], "Title", &form.title, form.focus == 0, false);
  form::draw_field(
    frame,
    rows[3],
    "Description",
    &form.description,
    form.focus == 1,
    false,
  );
  form::draw_selector(
    frame,
    rows[4],
    "Status",
    form.status.label(),
    status_color(form.status),
    form.focus == 2,
  );
  form::draw_selector(
    frame,
    rows[5],
    "Priority",
    form.priority.label(),
    priority_color(form.priority),
    form.focus == 3,
  );
  form::draw_error(frame, rows[6], form.error.as_deref());

  let hint = if form.submitting {
    Span::styled("Saving…", Style::default().fg(Color::Yellow))
  } else {
    Span::styled(
      "Enter: save   Tab: next field   ←/→: change value   Esc: cancel",
      Style::default().fg(Color::DarkGray),
    )
  };
  frame.render_widget(Paragraph::new(hint), rows[8]);
}
