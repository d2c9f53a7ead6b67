//! Shared rendering for labeled form rows.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::input::TextInput;

const LABEL_WIDTH: usize = 12;

fn label_span(label: &str, focused: bool) -> Span<'static> {
  let text = format!("{:>width$}: ", label, width = LABEL_WIDTH);
  if focused {
    Span::styled(text, Style::default().fg(Color::Cyan).bold())
  } else {
    Span::styled(text, Style::default().fg(Color::Gray))
  }
}

/// Draw a text field row; the focused field shows a cursor block
pub fn draw_field(
  frame: &mut Frame,
  area: Rect,
  label: &str,
  input: &TextInput,
  focused: bool,
  mask: bool,
) {
  let mut spans = vec![label_span(label, focused)];

  let value = input.display(mask);
  if focused {
    // Cursor position in characters, since masking swaps in multi-byte glyphs
    let byte_cursor = input.cursor_position().min(input.value().len());
    let cursor = input.value()[..byte_cursor].chars().count();
    let before: String = value.chars().take(cursor).collect();
    let after: String = value.chars().skip(cursor).collect();
    spans.push(Span::raw(before));
    spans.push(Span::styled(" ", Style::default().bg(Color::Cyan)));
    spans.push(Span::raw(after));
  } else {
    spans.push(Span::raw(value));
  }

  frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw a selector row cycled with Left/Right
pub fn draw_selector(
  frame: &mut Frame,
  area: Rect,
  label: &str,
  value: &str,
  color: Color,
  focused: bool,
) {
  let mut spans = vec![label_span(label, focused)];

  if focused {
    spans.push(Span::styled("◀ ", Style::default().fg(Color::DarkGray)));
  }
  spans.push(Span::styled(value.to_string(), Style::default().fg(color)));
  if focused {
    spans.push(Span::styled(" ▶", Style::default().fg(Color::DarkGray)));
  }

  frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the error line under a form, if any
pub fn draw_error(frame: &mut Frame, area: Rect, error: Option<&str>) {
  if let Some(error) = error {
    let line = Line::from(vec![
      Span::raw(" ".repeat(LABEL_WIDTH + 2)),
      Span::styled(error.to_string(), Style::default().fg(Color::Red)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
  }
}
