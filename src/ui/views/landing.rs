use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::centered_box;

/// Entry screen shown while logged out
pub fn draw_landing(frame: &mut Frame, area: Rect, title: &str) {
  let lines = vec![
    Line::from(Span::styled(
      title.to_string(),
      Style::default().fg(Color::Cyan).bold(),
    )),
    Line::from(Span::styled(
      "Organize smarter. Achieve more.",
      Style::default().fg(Color::DarkGray),
    )),
    Line::default(),
    Line::from("Track task progress easily"),
    Line::from("Manage priorities efficiently"),
    Line::from("Stay productive every day"),
    Line::default(),
    Line::from(vec![
      Span::styled("l", Style::default().fg(Color::Cyan).bold()),
      Span::raw(" login    "),
      Span::styled("r", Style::default().fg(Color::Cyan).bold()),
      Span::raw(" create account    "),
      Span::styled("q", Style::default().fg(Color::Cyan).bold()),
      Span::raw(" quit"),
    ]),
  ];

  let height = lines.len() as u16;
  let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
  frame.render_widget(paragraph, centered_box(area, 44, height));
}
