use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::AuthForm;
use crate::ui::components::form;

use super::centered_box;

/// Sign-in form: email and password
pub fn draw_login(frame: &mut Frame, area: Rect, form: &AuthForm) {
  let box_area = centered_box(area, 56, 8);
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // Header
      Constraint::Length(1),
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
      "Welcome back",
      Style::default().fg(Color::Cyan).bold(),
    )),
    rows[0],
  );

  form::draw_field(frame, rows[2], "Email", &form.email, form.focus == 0, false);
  form::draw_field(
    frame,
    rows[3],
    "Password",
    &form.password,
    form.focus == 1,
    true,
  );
  form::draw_error(frame, rows[4], form.error.as_deref());

  let hint = if form.submitting {
    Span::styled("Signing in…", Style::default().fg(Color::Yellow))
  } else {
    Span::styled(
      "Enter: sign in   Tab: next field   Esc: back",
      Style::default().fg(Color::DarkGray),
    )
  };
  frame.render_widget(Paragraph::new(hint), rows[6]);
}
