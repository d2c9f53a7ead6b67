use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::AuthForm;
use crate::ui::components::form;

use super::centered_box;

/// Account creation form: name, email and password
pub fn draw_register(frame: &mut Frame, area: Rect, form: &AuthForm) {
  let box_area = centered_box(area, 56, 9);
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // Header
      Constraint::Length(1),
      Constraint::Length(1), // Name
      Constraint::Length(1), // Email
      Constraint::Length(1), // Password
      Constraint::Length(1), // Error
      Constraint::Length(1),
      Constraint::Length(1), // Hint
      Constraint::Min(0),
    ])
    .split(box_area);

  frame.render_widget(
    Paragraph::new(Span::styled(
      "Create account",
      Style::default().fg(Color::Cyan).bold(),
    )),
    rows[0],
  );

  form::draw_field(frame, rows[2], "Name", &form.name, form.focus == 0, false);
  form::draw_field(frame, rows[3], "Email", &form.email, form.focus == 1, false);
  form::draw_field(
    frame,
    rows[4],
    "Password",
    &form.password,
    form.focus == 2,
    true,
  );
  form::draw_error(frame, rows[5], form.error.as_deref());

  let hint = if form.submitting {
    Span::styled("Creating account…", Style::default().fg(Color::Yellow))
  } else {
    Span::styled(
      "Enter: create   Tab: next field   Esc: back",
      Style::default().fg(Color::DarkGray),
    )
  };
  frame.render_widget(Paragraph::new(hint), rows[7]);
}
