pub mod components;
mod views;

use crate::app::{App, Mode, ViewState};
use crate::commands;
use crate::tasks::TaskSource;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
  let chunks = Layout::default()
    .direction(Direction::Vertical)
    .constraints([
      Constraint::Length(1), // Header
      Constraint::Min(1),    // Main content
      Constraint::Length(1), // Status bar
    ])
    .split(frame.area());

  draw_header(frame, chunks[0], app);

  // Draw current view
  match app.current_view() {
    Some(ViewState::Splash) | None => draw_splash(frame, chunks[1]),
    Some(ViewState::Landing) => views::landing::draw_landing(frame, chunks[1], app.title()),
    Some(ViewState::Login(form)) => views::login::draw_login(frame, chunks[1], form),
    Some(ViewState::Register(form)) => views::register::draw_register(frame, chunks[1], form),
    Some(ViewState::Home) => {
      let user = app.session().user();
      views::home::draw_home(
        frame,
        chunks[1],
        user.as_ref().map(|u| u.name.as_str()),
        app.task_cache().summary(),
        app.task_cache().loading(),
      );
    }
    Some(ViewState::TaskList { selected }) => {
      let tasks = app.filtered_tasks();
      views::task_list::draw_task_list(
        frame,
        chunks[1],
        &tasks,
        *selected,
        app.task_cache().loading(),
        app.search_filter(),
      );
    }
    Some(ViewState::TaskForm(form)) => views::task_form::draw_task_form(frame, chunks[1], form),
    Some(ViewState::Profile) => {
      let user = app.session().user();
      views::profile::draw_profile(frame, chunks[1], user.as_ref());
    }
  }

  // Draw status bar
  draw_status_bar(frame, chunks[2], app);
}

fn draw_splash(frame: &mut Frame, area: Rect) {
  let paragraph = Paragraph::new(Span::styled(
    "Checking authentication…",
    Style::default().fg(Color::DarkGray),
  ))
  .alignment(Alignment::Center);
  frame.render_widget(paragraph, views::centered_box(area, 30, 1));
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
  let mut spans = vec![Span::styled(
    format!(" {} ", app.title()),
    Style::default().fg(Color::Cyan).bold(),
  )];

  if let Some(user) = app.session().user() {
    spans.push(Span::styled(
      user.name,
      Style::default().fg(Color::DarkGray),
    ));
  }

  if app.offline() {
    spans.push(Span::styled(
      "   OFFLINE — showing saved data",
      Style::default().fg(Color::Red).bold(),
    ));
  } else if let Some(TaskSource::Snapshot(saved_at)) = app.task_cache().source() {
    spans.push(Span::styled(
      format!("   saved data from {}", saved_at.format("%Y-%m-%d %H:%M")),
      Style::default().fg(Color::Yellow),
    ));
  }

  frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
  let line = match app.mode() {
    Mode::Normal => {
      if let Some(notice) = app.notice() {
        Line::from(Span::styled(
          format!(" {}", notice),
          Style::default().fg(Color::Red),
        ))
      } else {
        Line::from(Span::styled(
          " :command  /filter  j/k: move  Enter: select  q: back  Ctrl-C: quit",
          Style::default().fg(Color::DarkGray),
        ))
      }
    }
    Mode::Command => command_line(app),
    Mode::Search => Line::from(Span::styled(
      format!("/{}", app.search_filter()),
      Style::default().fg(Color::Cyan),
    )),
  };

  frame.render_widget(Paragraph::new(line), area);
}

fn command_line(app: &App) -> Line<'static> {
  let mut spans = vec![Span::styled(
    format!(":{}", app.command_input()),
    Style::default().fg(Color::Yellow),
  )];

  let suggestions = commands::get_suggestions(app.command_input());
  if !suggestions.is_empty() {
    spans.push(Span::raw("   "));
    for (i, cmd) in suggestions.iter().take(5).enumerate() {
      let style = if i == app.selected_suggestion() {
        Style::default().fg(Color::Cyan).bold()
      } else {
        Style::default().fg(Color::DarkGray)
      };
      spans.push(Span::styled(format!("{} ", cmd.name), style));
    }
    if let Some(cmd) = suggestions.get(app.selected_suggestion()) {
      spans.push(Span::styled(
        format!("— {}", cmd.description),
        Style::default().fg(Color::DarkGray),
      ));
    }
  }

  Line::from(spans)
}
