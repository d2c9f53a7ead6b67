use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::api::types::Task;

use super::{priority_color, status_color};

/// Task browser: filtered list on top, selected task's details below
pub fn draw_task_list(
  frame: &mut Frame,
  area: Rect,
  tasks: &[Task],
  selected: usize,
  loading: bool,
  filter: &str,
) {
  let rows = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Min(3), Constraint::Length(6)])
    .split(area);

  let title = if filter.is_empty() {
    format!(" Tasks ({}) ", tasks.len())
  } else {
    format!(" Tasks ({}) — /{} ", tasks.len(), filter)
  };
  let block = Block::default().borders(Borders::ALL).title(title);

  if tasks.is_empty() {
    let message = if loading {
      "Loading tasks…"
    } else if filter.is_empty() {
      "No tasks yet — press n to create one"
    } else {
      "No tasks match the filter"
    };
    frame.render_widget(
      Paragraph::new(Span::styled(message, Style::default().fg(Color::DarkGray)))
        .block(block),
      rows[0],
    );
  } else {
    let items: Vec<ListItem> = tasks
      .iter()
      .map(|task| {
        let line = Line::from(vec![
          Span::styled(
            format!("{:<12}", task.status.label()),
            Style::default().fg(status_color(task.status)),
          ),
          Span::styled(
            format!("{:<7}", task.priority.label()),
            Style::default().fg(priority_color(task.priority)),
          ),
          Span::raw(task.title.clone()),
        ]);
        ListItem::new(line)
      })
      .collect();

    let list = List::new(items)
      .block(block)
      .highlight_style(Style::default().bg(Color::DarkGray).bold())
      .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(selected.min(tasks.len().saturating_sub(1))));
    frame.render_stateful_widget(list, rows[0], &mut state);
  }

  draw_detail_panel(frame, rows[1], tasks.get(selected));
}

fn draw_detail_panel(frame: &mut Frame, area: Rect, task: Option<&Task>) {
  let block = Block::default().borders(Borders::ALL).title(" Detail ");
  let inner = block.inner(area);
  frame.render_widget(block, area);

  let Some(task) = task else {
    frame.render_widget(
      Paragraph::new(Span::styled(
        "n: new   e: edit   d: delete   /: filter   r: refresh   q: back",
        Style::default().fg(Color::DarkGray),
      )),
      inner,
    );
    return;
  };

  let description = task
    .description
    .as_deref()
    .unwrap_or("(no description)")
    .to_string();

  let lines = vec![
    Line::from(Span::styled(task.title.clone(), Style::default().bold())),
    Line::from(Span::raw(description)),
    Line::from(vec![
      Span::styled("created ", Style::default().fg(Color::DarkGray)),
      Span::raw(task.created_at.clone()),
      Span::styled("  updated ", Style::default().fg(Color::DarkGray)),
      Span::raw(task.updated_at.clone()),
    ]),
    Line::from(Span::styled(
      "n: new   e: edit   d: delete   /: filter   r: refresh   q: back",
      Style::default().fg(Color::DarkGray),
    )),
  ];

  frame.render_widget(Paragraph::new(lines), inner);
}
