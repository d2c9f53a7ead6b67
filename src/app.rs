use crate::api::client::ApiClient;
use crate::api::types::{Task, TaskDraft, TaskPriority, TaskStatus};
use crate::commands;
use crate::config::Config;
use crate::event::{Event, EventHandler, SessionEvent, TaskEvent};
use crate::guard::{self, Region, RefreshTrigger};
use crate::net;
use crate::session::SessionStore;
use crate::store::{MemoryStore, SnapshotStore, SqliteStore, TokenStore};
use crate::tasks::TaskCache;
use crate::ui;
use crate::ui::components::input::TextInput;
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
  disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;
use std::io::stdout;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

/// Input mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
  Normal,
  Command,
  Search,
}

/// Login/register form state
#[derive(Debug, Default)]
pub struct AuthForm {
  pub name: TextInput,
  pub email: TextInput,
  pub password: TextInput,
  pub focus: usize,
  pub error: Option<String>,
  pub submitting: bool,
}

/// Create/edit task form state
#[derive(Debug)]
pub struct TaskForm {
  /// Task id when editing an existing task
  pub editing: Option<String>,
  pub title: TextInput,
  pub description: TextInput,
  pub status: TaskStatus,
  pub priority: TaskPriority,
  pub focus: usize,
  pub error: Option<String>,
  pub submitting: bool,
}

impl TaskForm {
  fn new() -> Self {
    Self {
      editing: None,
      title: TextInput::new(),
      description: TextInput::new(),
      status: TaskStatus::Pending,
      priority: TaskPriority::Medium,
      focus: 0,
      error: None,
      submitting: false,
    }
  }

  fn edit(task: &Task) -> Self {
    Self {
      editing: Some(task.id.clone()),
      title: TextInput::with_value(task.title.clone()),
      description: TextInput::with_value(task.description.clone().unwrap_or_default()),
      status: task.status,
      priority: task.priority,
      focus: 0,
      error: None,
      submitting: false,
    }
  }
}

/// View state - each variant owns its data
#[derive(Debug)]
pub enum ViewState {
  /// Blank screen while bootstrap resolves
  Splash,
  Landing,
  Login(AuthForm),
  Register(AuthForm),
  Home,
  TaskList { selected: usize },
  TaskForm(TaskForm),
  Profile,
}

/// Which view currently has input focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ViewKind {
  Splash,
  Landing,
  Login,
  Register,
  Home,
  TaskList,
  TaskForm,
  Profile,
}

/// Main application state
pub struct App {
  /// Navigation stack - root is always at index 0
  view_stack: Vec<ViewState>,

  /// Current input mode
  mode: Mode,

  /// Command input buffer (after pressing :)
  command_input: String,

  /// Selected autocomplete suggestion index
  selected_suggestion: usize,

  /// Task title filter (after pressing /)
  search_filter: String,

  /// Application configuration
  config: Config,

  /// Task service client
  api: ApiClient,

  /// Authentication session
  session: SessionStore,

  /// Task collection cache
  tasks: TaskCache,

  /// Latest reading from the connectivity probe
  offline: bool,

  /// One-line notice shown in the status bar until the next key press
  notice: Option<String>,

  /// Event sender for async tasks
  event_tx: mpsc::UnboundedSender<Event>,

  /// Whether to quit
  should_quit: bool,
}

impl App {
  pub fn new(config: Config, ephemeral: bool) -> Result<Self> {
    let api = ApiClient::new(&config.server.url)?;

    let (tokens, snapshots): (Arc<dyn TokenStore>, Arc<dyn SnapshotStore>) = if ephemeral {
      let store = Arc::new(MemoryStore::new());
      (store.clone(), store)
    } else {
      let store = Arc::new(SqliteStore::open()?);
      (store.clone(), store)
    };

    let session = SessionStore::new(tokens);
    let tasks = TaskCache::new(snapshots);
    let (tx, _rx) = mpsc::unbounded_channel();

    Ok(Self {
      view_stack: vec![ViewState::Splash],
      mode: Mode::Normal,
      command_input: String::new(),
      selected_suggestion: 0,
      search_filter: String::new(),
      config,
      api,
      session,
      tasks,
      offline: false,
      notice: None,
      event_tx: tx,
      should_quit: false,
    })
  }

  pub async fn run(&mut self) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Create event handler
    let mut events = EventHandler::new(Duration::from_millis(250));
    self.event_tx = events.sender();

    // Resolve the persisted token into a session
    self.start_bootstrap();

    // Watch server reachability
    net::spawn_probe(
      self.api.base_url().clone(),
      Duration::from_secs(self.config.server.probe_interval_secs),
      self.event_tx.clone(),
    );

    // Main loop
    while !self.should_quit {
      // Draw UI
      terminal.draw(|frame| ui::draw(frame, self))?;

      // Handle events
      if let Some(event) = events.next().await {
        self.handle_event(event);
      }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    Ok(())
  }

  // Accessors for rendering

  pub fn current_view(&self) -> Option<&ViewState> {
    self.view_stack.last()
  }

  pub fn mode(&self) -> &Mode {
    &self.mode
  }

  pub fn command_input(&self) -> &str {
    &self.command_input
  }

  pub fn selected_suggestion(&self) -> usize {
    self.selected_suggestion
  }

  pub fn search_filter(&self) -> &str {
    &self.search_filter
  }

  pub fn offline(&self) -> bool {
    self.offline
  }

  pub fn notice(&self) -> Option<&str> {
    self.notice.as_deref()
  }

  pub fn session(&self) -> &SessionStore {
    &self.session
  }

  pub fn task_cache(&self) -> &TaskCache {
    &self.tasks
  }

  pub fn title(&self) -> &str {
    self.config.title.as_deref().unwrap_or("taskdeck")
  }

  /// Current collection narrowed by the title filter
  pub fn filtered_tasks(&self) -> Vec<Task> {
    let tasks = self.tasks.tasks();
    if self.search_filter.is_empty() {
      return tasks;
    }
    let needle = self.search_filter.to_lowercase();
    tasks
      .into_iter()
      .filter(|task| task.title.to_lowercase().contains(&needle))
      .collect()
  }

  // Event handling

  fn handle_event(&mut self, event: Event) {
    match event {
      Event::Key(key) => self.handle_key(key),
      Event::Tick => {} // UI refresh happens automatically
      Event::Session(event) => self.handle_session_event(event),
      Event::Tasks(event) => self.handle_task_event(event),
      Event::Net { offline } => self.offline = offline,
    }
  }

  fn handle_session_event(&mut self, event: SessionEvent) {
    match event {
      SessionEvent::Bootstrapped | SessionEvent::Authenticated => self.apply_guard(),
      SessionEvent::Rejected(message) => {
        if let Some(ViewState::Login(form) | ViewState::Register(form)) =
          self.view_stack.last_mut()
        {
          form.submitting = false;
          form.error = Some(message);
        }
      }
    }
  }

  fn handle_task_event(&mut self, event: TaskEvent) {
    match event {
      // The cache already holds the new state; the next draw picks it up
      TaskEvent::Synced => {}
      TaskEvent::Mutated => {
        if matches!(self.view_stack.last(), Some(ViewState::TaskForm(_))) {
          self.view_stack.pop();
        }
        self.trigger_sync(RefreshTrigger::PostMutation);
      }
      TaskEvent::MutationFailed(message) => {
        if let Some(ViewState::TaskForm(form)) = self.view_stack.last_mut() {
          form.submitting = false;
          form.error = Some(message);
        } else {
          self.notice = Some(message);
        }
      }
    }
  }

  /// Reset the view stack whenever the session status stops admitting the
  /// region currently on screen.
  fn apply_guard(&mut self) {
    let region = guard::admitted_region(self.session.status());
    if region == self.stack_region() {
      return;
    }

    match region {
      Region::Blank => {
        self.view_stack = vec![ViewState::Splash];
      }
      Region::Unauthenticated => {
        // Protected area unmounts: the collection goes with it
        self.tasks.reset();
        self.search_filter.clear();
        self.view_stack = vec![ViewState::Landing];
      }
      Region::Protected => {
        self.view_stack = vec![ViewState::Home];
        self.trigger_sync(RefreshTrigger::Mount);
      }
    }
  }

  fn stack_region(&self) -> Region {
    match self.view_stack.first() {
      Some(ViewState::Splash) | None => Region::Blank,
      Some(ViewState::Landing | ViewState::Login(_) | ViewState::Register(_)) => {
        Region::Unauthenticated
      }
      Some(_) => Region::Protected,
    }
  }

  // Async operations: spawn, then report back through the event channel

  fn start_bootstrap(&self) {
    let session = self.session.clone();
    let api = self.api.clone();
    let tx = self.event_tx.clone();

    tokio::spawn(async move {
      session
        .bootstrap(|token| {
          let api = api.clone();
          async move { api.me(&token).await }
        })
        .await;
      let _ = tx.send(Event::Session(SessionEvent::Bootstrapped));
    });
  }

  fn start_login(&self, email: String, password: String) {
    let session = self.session.clone();
    let api = self.api.clone();
    let tx = self.event_tx.clone();

    tokio::spawn(async move {
      let result = session
        .login(&email, &password, |email, password| {
          let api = api.clone();
          async move {
            let payload = api.login(&email, &password).await?;
            Ok((payload.user, payload.token))
          }
        })
        .await;

      let event = match result {
        Ok(()) => SessionEvent::Authenticated,
        Err(e) => SessionEvent::Rejected(e.to_string()),
      };
      let _ = tx.send(Event::Session(event));
    });
  }

  fn start_register(&self, name: String, email: String, password: String) {
    let session = self.session.clone();
    let api = self.api.clone();
    let tx = self.event_tx.clone();

    tokio::spawn(async move {
      let result = session
        .register(&name, &email, &password, |name, email, password| {
          let api = api.clone();
          async move {
            let payload = api.register(&name, &email, &password).await?;
            Ok((payload.user, payload.token))
          }
        })
        .await;

      let event = match result {
        Ok(()) => SessionEvent::Authenticated,
        Err(e) => SessionEvent::Rejected(e.to_string()),
      };
      let _ = tx.send(Event::Session(event));
    });
  }

  /// Kick a synchronization for one of the enumerated refresh triggers
  fn trigger_sync(&self, trigger: RefreshTrigger) {
    let Some(token) = self.session.token() else {
      return;
    };
    info!(?trigger, "refreshing tasks");

    let tasks = self.tasks.clone();
    let api = self.api.clone();
    let tx = self.event_tx.clone();

    tokio::spawn(async move {
      tasks
        .synchronize(|| async move { api.list_tasks(&token).await })
        .await;
      let _ = tx.send(Event::Tasks(TaskEvent::Synced));
    });
  }

  fn start_create(&self, draft: TaskDraft) {
    let Some(token) = self.session.token() else {
      return;
    };
    let api = self.api.clone();
    let tx = self.event_tx.clone();

    tokio::spawn(async move {
      let event = match api.create_task(&token, &draft).await {
        Ok(()) => TaskEvent::Mutated,
        Err(e) => TaskEvent::MutationFailed(e.to_string()),
      };
      let _ = tx.send(Event::Tasks(event));
    });
  }

  fn start_update(&self, id: String, draft: TaskDraft) {
    let Some(token) = self.session.token() else {
      return;
    };
    let api = self.api.clone();
    let tx = self.event_tx.clone();

    tokio::spawn(async move {
      let event = match api.update_task(&token, &id, &draft).await {
        Ok(()) => TaskEvent::Mutated,
        Err(e) => TaskEvent::MutationFailed(e.to_string()),
      };
      let _ = tx.send(Event::Tasks(event));
    });
  }

  fn start_delete(&self, id: String) {
    let Some(token) = self.session.token() else {
      return;
    };
    let api = self.api.clone();
    let tx = self.event_tx.clone();

    tokio::spawn(async move {
      let event = match api.delete_task(&token, &id).await {
        Ok(()) => TaskEvent::Mutated,
        Err(e) => TaskEvent::MutationFailed(e.to_string()),
      };
      let _ = tx.send(Event::Tasks(event));
    });
  }

  // Key handling

  fn handle_key(&mut self, key: KeyEvent) {
    self.notice = None;
    match self.mode {
      Mode::Normal => self.handle_normal_mode_key(key),
      Mode::Command => self.handle_command_mode_key(key),
      Mode::Search => self.handle_search_mode_key(key),
    }
  }

  fn current_kind(&self) -> ViewKind {
    match self.view_stack.last() {
      Some(ViewState::Landing) => ViewKind::Landing,
      Some(ViewState::Login(_)) => ViewKind::Login,
      Some(ViewState::Register(_)) => ViewKind::Register,
      Some(ViewState::Home) => ViewKind::Home,
      Some(ViewState::TaskList { .. }) => ViewKind::TaskList,
      Some(ViewState::TaskForm(_)) => ViewKind::TaskForm,
      Some(ViewState::Profile) => ViewKind::Profile,
      Some(ViewState::Splash) | None => ViewKind::Splash,
    }
  }

  fn handle_normal_mode_key(&mut self, key: KeyEvent) {
    // Ctrl-C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
      self.should_quit = true;
      return;
    }

    match self.current_kind() {
      ViewKind::Splash => {}
      ViewKind::Landing => self.handle_landing_key(key),
      ViewKind::Login => self.handle_login_key(key),
      ViewKind::Register => self.handle_register_key(key),
      ViewKind::Home => self.handle_home_key(key),
      ViewKind::TaskList => self.handle_task_list_key(key),
      ViewKind::TaskForm => self.handle_task_form_key(key),
      ViewKind::Profile => self.handle_profile_key(key),
    }
  }

  fn handle_landing_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Char('l') => self.view_stack.push(ViewState::Login(AuthForm::default())),
      KeyCode::Char('r') => self
        .view_stack
        .push(ViewState::Register(AuthForm::default())),
      KeyCode::Char('q') => self.should_quit = true,
      _ => {}
    }
  }

  fn handle_login_key(&mut self, key: KeyEvent) {
    if key.code == KeyCode::Esc {
      self.view_stack.pop();
      return;
    }

    let mut submit = None;
    if let Some(ViewState::Login(form)) = self.view_stack.last_mut() {
      if form.submitting {
        return;
      }
      match key.code {
        KeyCode::Tab | KeyCode::Down => form.focus = (form.focus + 1) % 2,
        KeyCode::BackTab | KeyCode::Up => form.focus = (form.focus + 1) % 2,
        KeyCode::Enter => {
          // The password is taken verbatim, never trimmed
          if form.email.value().trim().is_empty() || form.password.is_empty() {
            form.error = Some("Email and password are required".to_string());
            return;
          }
          form.error = None;
          form.submitting = true;
          submit = Some((
            form.email.value().trim().to_string(),
            form.password.value().to_string(),
          ));
        }
        _ => {
          let input = if form.focus == 0 {
            &mut form.email
          } else {
            &mut form.password
          };
          input.handle_key(key);
        }
      }
    }

    if let Some((email, password)) = submit {
      self.start_login(email, password);
    }
  }

  fn handle_register_key(&mut self, key: KeyEvent) {
    if key.code == KeyCode::Esc {
      self.view_stack.pop();
      return;
    }

    let mut submit = None;
    if let Some(ViewState::Register(form)) = self.view_stack.last_mut() {
      if form.submitting {
        return;
      }
      match key.code {
        KeyCode::Tab | KeyCode::Down => form.focus = (form.focus + 1) % 3,
        KeyCode::BackTab | KeyCode::Up => form.focus = (form.focus + 2) % 3,
        KeyCode::Enter => {
          if form.name.value().trim().is_empty()
            || form.email.value().trim().is_empty()
            || form.password.is_empty()
          {
            form.error = Some("Name, email and password are required".to_string());
            return;
          }
          form.error = None;
          form.submitting = true;
          submit = Some((
            form.name.value().trim().to_string(),
            form.email.value().trim().to_string(),
            form.password.value().to_string(),
          ));
        }
        _ => {
          let input = match form.focus {
            0 => &mut form.name,
            1 => &mut form.email,
            _ => &mut form.password,
          };
          input.handle_key(key);
        }
      }
    }

    if let Some((name, email, password)) = submit {
      self.start_register(name, email, password);
    }
  }

  fn handle_home_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Char('t') | KeyCode::Enter => {
        self.view_stack.push(ViewState::TaskList { selected: 0 });
        self.trigger_sync(RefreshTrigger::Focus);
      }
      KeyCode::Char('n') => self.open_task_form(None),
      KeyCode::Char('p') => self.view_stack.push(ViewState::Profile),
      KeyCode::Char('r') => self.trigger_sync(RefreshTrigger::Focus),
      KeyCode::Char(':') => self.enter_command_mode(),
      KeyCode::Char('q') => self.should_quit = true,
      _ => {}
    }
  }

  fn handle_task_list_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
      KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
      KeyCode::Char('n') => self.open_task_form(None),
      KeyCode::Char('e') | KeyCode::Enter => {
        if let Some(task) = self.selected_task() {
          self.open_task_form(Some(task));
        }
      }
      KeyCode::Char('d') => {
        if self.reject_if_offline() {
          return;
        }
        if let Some(task) = self.selected_task() {
          self.start_delete(task.id);
        }
      }
      KeyCode::Char('r') => self.trigger_sync(RefreshTrigger::Focus),
      KeyCode::Char('/') => {
        self.mode = Mode::Search;
        self.search_filter.clear();
      }
      KeyCode::Char(':') => self.enter_command_mode(),
      KeyCode::Char('q') | KeyCode::Esc => {
        self.view_stack.pop();
        // The home counts regain focus with the pop
        self.trigger_sync(RefreshTrigger::Focus);
      }
      _ => {}
    }
  }

  fn handle_task_form_key(&mut self, key: KeyEvent) {
    if key.code == KeyCode::Esc {
      self.view_stack.pop();
      return;
    }

    let mut submit = None;
    if let Some(ViewState::TaskForm(form)) = self.view_stack.last_mut() {
      if form.submitting {
        return;
      }
      match key.code {
        KeyCode::Tab | KeyCode::Down => form.focus = (form.focus + 1) % 4,
        KeyCode::BackTab | KeyCode::Up => form.focus = (form.focus + 3) % 4,
        KeyCode::Left if form.focus == 2 => form.status = form.status.prev(),
        KeyCode::Right if form.focus == 2 => form.status = form.status.next(),
        KeyCode::Left if form.focus == 3 => form.priority = form.priority.prev(),
        KeyCode::Right if form.focus == 3 => form.priority = form.priority.next(),
        KeyCode::Enter => {
          let title = form.title.value().trim().to_string();
          if title.is_empty() {
            form.error = Some("Task title is required".to_string());
            return;
          }
          let description = form.description.value().trim().to_string();
          form.error = None;
          form.submitting = true;
          submit = Some((
            form.editing.clone(),
            TaskDraft {
              title,
              description: if description.is_empty() {
                None
              } else {
                Some(description)
              },
              status: form.status,
              priority: form.priority,
            },
          ));
        }
        _ => {
          let input = match form.focus {
            0 => Some(&mut form.title),
            1 => Some(&mut form.description),
            _ => None,
          };
          if let Some(input) = input {
            input.handle_key(key);
          }
        }
      }
    }

    if let Some((editing, draft)) = submit {
      if self.reject_if_offline() {
        // Put the form back into an editable state
        if let Some(ViewState::TaskForm(form)) = self.view_stack.last_mut() {
          form.submitting = false;
        }
        return;
      }
      match editing {
        Some(id) => self.start_update(id, draft),
        None => self.start_create(draft),
      }
    }
  }

  fn handle_profile_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Char('x') => {
        self.session.logout();
        self.apply_guard();
      }
      KeyCode::Char(':') => self.enter_command_mode(),
      KeyCode::Char('q') | KeyCode::Esc => {
        self.view_stack.pop();
      }
      _ => {}
    }
  }

  fn handle_command_mode_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => {
        self.mode = Mode::Normal;
        self.command_input.clear();
        self.selected_suggestion = 0;
      }
      KeyCode::Enter => {
        self.execute_command();
        self.mode = Mode::Normal;
        self.selected_suggestion = 0;
      }
      KeyCode::Tab | KeyCode::Down => {
        // Navigate autocomplete suggestions
        let suggestions = commands::get_suggestions(&self.command_input);
        if !suggestions.is_empty() {
          self.selected_suggestion = (self.selected_suggestion + 1) % suggestions.len();
        }
      }
      KeyCode::BackTab | KeyCode::Up => {
        // Navigate autocomplete suggestions backwards
        let suggestions = commands::get_suggestions(&self.command_input);
        if !suggestions.is_empty() {
          self.selected_suggestion = if self.selected_suggestion == 0 {
            suggestions.len() - 1
          } else {
            self.selected_suggestion - 1
          };
        }
      }
      KeyCode::Backspace => {
        self.command_input.pop();
        self.selected_suggestion = 0; // Reset selection on input change
      }
      KeyCode::Char(c) => {
        self.command_input.push(c);
        self.selected_suggestion = 0; // Reset selection on input change
      }
      _ => {}
    }
  }

  fn handle_search_mode_key(&mut self, key: KeyEvent) {
    match key.code {
      KeyCode::Esc => {
        self.mode = Mode::Normal;
        self.search_filter.clear();
        self.reset_selection();
      }
      KeyCode::Enter => {
        // Apply filter and return to normal mode
        self.mode = Mode::Normal;
      }
      KeyCode::Backspace => {
        self.search_filter.pop();
        self.reset_selection();
      }
      KeyCode::Char(c) => {
        self.search_filter.push(c);
        self.reset_selection();
      }
      _ => {}
    }
  }

  fn execute_command(&mut self) {
    let input = self.command_input.trim().to_string();
    self.command_input.clear();
    if input.is_empty() {
      return;
    }

    let Some(cmd) = commands::resolve(&input) else {
      self.notice = Some(format!("Unknown command: {}", input));
      return;
    };

    match cmd.name {
      "home" => {
        self.view_stack = vec![ViewState::Home];
        self.trigger_sync(RefreshTrigger::Focus);
      }
      "tasks" => {
        self.view_stack = vec![ViewState::Home, ViewState::TaskList { selected: 0 }];
        self.trigger_sync(RefreshTrigger::Focus);
      }
      "new" => self.open_task_form(None),
      "profile" => self.view_stack = vec![ViewState::Home, ViewState::Profile],
      "logout" => {
        self.session.logout();
        self.apply_guard();
      }
      "quit" => self.should_quit = true,
      _ => {}
    }
  }

  // Helpers

  fn enter_command_mode(&mut self) {
    self.mode = Mode::Command;
    self.command_input.clear();
    self.selected_suggestion = 0;
  }

  /// Mutations are disabled while offline; reads keep their fallback
  fn reject_if_offline(&mut self) -> bool {
    if self.offline {
      self.notice = Some("You are offline. Changes are disabled.".to_string());
      true
    } else {
      false
    }
  }

  fn open_task_form(&mut self, task: Option<Task>) {
    if self.reject_if_offline() {
      return;
    }
    let form = match &task {
      Some(task) => TaskForm::edit(task),
      None => TaskForm::new(),
    };
    self.view_stack.push(ViewState::TaskForm(form));
  }

  fn selected_task(&self) -> Option<Task> {
    if let Some(ViewState::TaskList { selected }) = self.view_stack.last() {
      self.filtered_tasks().get(*selected).cloned()
    } else {
      None
    }
  }

  fn move_selection(&mut self, delta: i64) {
    let len = self.filtered_tasks().len();
    if let Some(ViewState::TaskList { selected }) = self.view_stack.last_mut() {
      if len == 0 {
        *selected = 0;
        return;
      }
      let next = (*selected as i64 + delta).clamp(0, len as i64 - 1);
      *selected = next as usize;
    }
  }

  fn reset_selection(&mut self) {
    if let Some(ViewState::TaskList { selected }) = self.view_stack.last_mut() {
      *selected = 0;
    }
  }
}
