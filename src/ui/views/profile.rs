use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::api::types::User;

use super::centered_box;

/// Account details and the logout entry point
pub fn draw_profile(frame: &mut Frame, area: Rect, user: Option<&User>) {
  let box_area = centered_box(area, 48, 6);

  let mut lines = Vec::new();
  match user {
    Some(user) => {
      lines.push(Line::from(Span::styled(
        user.name.clone(),
        Style::default().fg(Color::Cyan).bold(),
      )));
      lines.push(Line::from(Span::raw(user.email.clone())));
    }
    None => lines.push(Line::from(Span::styled(
      "No account details available",
      Style::default().fg(Color::DarkGray),
    ))),
  }
  lines.push(Line::default());
  lines.push(Line::from(vec![
    Span::styled("x", Style::default().fg(Color::Red).bold()),
    Span::raw(" logout    "),
    Span::styled("q", Style::default().fg(Color::Cyan).bold()),
    Span::raw(" back"),
  ]));

  frame.render_widget(
    Paragraph::new(lines).alignment(Alignment::Center),
    box_area,
  );
}
