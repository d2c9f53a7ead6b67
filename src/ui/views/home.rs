use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

use crate::tasks::TaskSummary;

/// Progress overview shown right after login
pub fn draw_home(
  frame: &mut Frame,
  area: Rect,
  name: Option<&str>,
  summary: TaskSummary,
  loading: bool,
) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(2), // Greeting
      Constraint::Length(6), // Progress card
      Constraint::Length(1),
      Constraint::Length(1), // Hints
      Constraint::Min(0),
    ])
    .margin(1)
    .split(area);

  let greeting = format!("Welcome back, {}", name.unwrap_or("there"));
  frame.render_widget(
    Paragraph::new(Span::styled(greeting, Style::default().bold())),
    rows[0],
  );

  let card = Block::default()
    .borders(Borders::ALL)
    .title(" Progress Overview ");
  let inner = card.inner(rows[1]);
  frame.render_widget(card, rows[1]);

  if loading && summary.total == 0 {
    frame.render_widget(
      Paragraph::new(Span::styled(
        "Loading tasks…",
        Style::default().fg(Color::DarkGray),
      )),
      inner,
    );
  } else {
    let lines = Layout::default()
      .direction(Direction::Vertical)
      .constraints([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
      ])
      .split(inner);

    frame.render_widget(
      Paragraph::new(Line::from(vec![
        Span::styled("Pending     ", Style::default().fg(Color::Yellow)),
        Span::raw(summary.pending.to_string()),
      ])),
      lines[0],
    );
    frame.render_widget(
      Paragraph::new(Line::from(vec![
        Span::styled("In Progress ", Style::default().fg(Color::Blue)),
        Span::raw(summary.in_progress.to_string()),
      ])),
      lines[1],
    );
    frame.render_widget(
      Paragraph::new(Line::from(vec![
        Span::styled("Completed   ", Style::default().fg(Color::Green)),
        Span::raw(summary.completed.to_string()),
      ])),
      lines[2],
    );

    let ratio = if summary.total == 0 {
      0.0
    } else {
      summary.completed as f64 / summary.total as f64
    };
    let gauge = Gauge::default()
      .gauge_style(Style::default().fg(Color::Green))
      .label(format!("{} of {} done", summary.completed, summary.total))
      .ratio(ratio);
    frame.render_widget(gauge, lines[3]);
  }

  frame.render_widget(
    Paragraph::new(Span::styled(
      "t: tasks   n: new task   p: profile   :: command   q: quit",
      Style::default().fg(Color::DarkGray),
    )),
    rows[3],
  );
}
