//! Interactive interview manager: browse and select history rows, queue the
//! selection for dashboard analysis, create or resume sessions, and read
//! transcripts inline.

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use teamfit_client::ApiClient;
use teamfit_core::{HistoryState, SessionController};
use teamfit_types::{sample_history, InterviewRecord};

use crate::args::hints;
use crate::handoff;
use crate::presentation::presenters::{present_history, present_session, present_transcript};
use crate::presentation::view_models::{
    HistorySource, KeyHint, StatusBarViewModel, StatusLevel, TranscriptViewModel,
};
use crate::presentation::views::tui::{
    CreateFormView, FormFocus, HistoryListView, SessionPanel, StatusBarView, TranscriptPanel,
};

use super::HandlerContext;

const TICK_RATE: Duration = Duration::from_millis(250);

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    let client = ctx.client()?;
    let (records, source) = match client.fetch_interview_history() {
        Ok(records) => (records, HistorySource::Api),
        Err(_) => (sample_history(), HistorySource::Sample),
    };

    let mut app = App::new(
        records,
        source,
        ctx.data_dir.clone(),
        ctx.config.interview_base_url.clone(),
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &client);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &ApiClient,
) -> Result<()> {
    let mut last_tick = Instant::now();

    while !app.should_quit {
        terminal.draw(|f| draw(f, app))?;

        let timeout = TICK_RATE
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Raw mode swallows the usual SIGINT, so Ctrl+C arrives here.
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && key.code == KeyCode::Char('c')
                {
                    app.should_quit = true;
                } else {
                    app.handle_key(key.code, client);
                }
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            last_tick = Instant::now();
        }
    }
    Ok(())
}

struct CreateForm {
    name: String,
    role: String,
    email: String,
    focus: FormFocus,
    error: Option<String>,
}

impl CreateForm {
    fn new() -> Self {
        Self {
            name: String::new(),
            role: String::new(),
            email: String::new(),
            focus: FormFocus::Name,
            error: None,
        }
    }

    fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            FormFocus::Name => &mut self.name,
            FormFocus::Role => &mut self.role,
            FormFocus::Email => &mut self.email,
        }
    }
}

enum Mode {
    Browse,
    Search,
    Create(CreateForm),
    Session,
    Transcript {
        model: TranscriptViewModel,
        scroll: u16,
        from_session: bool,
    },
}

struct App {
    history: HistoryState,
    session: SessionController,
    source: HistorySource,
    mode: Mode,
    list: ListState,
    data_dir: PathBuf,
    interview_base_url: String,
    status_message: String,
    status_level: StatusLevel,
    should_quit: bool,
}

impl App {
    fn new(
        records: Vec<InterviewRecord>,
        source: HistorySource,
        data_dir: PathBuf,
        interview_base_url: String,
    ) -> Self {
        let mut history = HistoryState::new();
        history.load(records);
        let mut list = ListState::default();
        if history.visible_len() > 0 {
            list.select(Some(0));
        }

        let mut app = Self {
            history,
            session: SessionController::new(),
            source,
            mode: Mode::Browse,
            list,
            data_dir,
            interview_base_url,
            status_message: String::new(),
            status_level: StatusLevel::Info,
            should_quit: false,
        };
        if source == HistorySource::Sample {
            app.set_status(
                "Interview API unreachable, showing sample history",
                StatusLevel::Warning,
            );
        }
        app
    }

    fn handle_key(&mut self, code: KeyCode, client: &ApiClient) {
        match &mut self.mode {
            Mode::Browse => self.handle_browse_key(code, client),
            Mode::Search => self.handle_search_key(code),
            Mode::Create(_) => self.handle_create_key(code, client),
            Mode::Session => self.handle_session_key(code, client),
            Mode::Transcript {
                scroll,
                from_session,
                ..
            } => {
                let from_session = *from_session;
                match code {
                    KeyCode::Down | KeyCode::Char('j') => *scroll = scroll.saturating_add(1),
                    KeyCode::Up | KeyCode::Char('k') => *scroll = scroll.saturating_sub(1),
                    KeyCode::PageDown => *scroll = scroll.saturating_add(10),
                    KeyCode::PageUp => *scroll = scroll.saturating_sub(10),
                    KeyCode::Esc => {
                        self.mode = if from_session {
                            Mode::Session
                        } else {
                            Mode::Browse
                        };
                    }
                    KeyCode::Char('q') => self.should_quit = true,
                    _ => {}
                }
            }
        }
    }

    fn handle_browse_key(&mut self, code: KeyCode, client: &ApiClient) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Char(' ') => self.toggle_highlighted(),
            KeyCode::Char('a') => {
                self.history.select_all_visible();
            }
            KeyCode::Char('c') => self.history.clear_selection(),
            KeyCode::Char('A') => self.queue_analysis(),
            KeyCode::Char('/') => self.mode = Mode::Search,
            KeyCode::Char('f') => self.cycle_status_filter(),
            KeyCode::Char('n') => self.mode = Mode::Create(CreateForm::new()),
            KeyCode::Enter => self.resume_highlighted(),
            KeyCode::Char('t') => self.open_transcript_for_highlighted(client),
            KeyCode::Char('r') => self.reload(client),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c) => self.edit_search(|query| query.push(c)),
            KeyCode::Backspace => self.edit_search(|query| {
                query.pop();
            }),
            KeyCode::Enter => self.mode = Mode::Browse,
            KeyCode::Esc => {
                self.history.set_search("");
                self.clamp_selection();
                self.mode = Mode::Browse;
            }
            _ => {}
        }
    }

    fn handle_create_key(&mut self, code: KeyCode, client: &ApiClient) {
        let Mode::Create(form) = &mut self.mode else {
            return;
        };
        match code {
            KeyCode::Char(c) => {
                form.focused_field_mut().push(c);
                form.error = None;
            }
            KeyCode::Backspace => {
                form.focused_field_mut().pop();
            }
            KeyCode::Tab => form.focus = form.focus.next(),
            KeyCode::Enter => self.submit_create(client),
            KeyCode::Esc => self.mode = Mode::Browse,
            _ => {}
        }
    }

    fn handle_session_key(&mut self, code: KeyCode, client: &ApiClient) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc => self.mode = Mode::Browse,
            KeyCode::Char('t') => self.open_transcript_for_session(client),
            KeyCode::Char('r') => {
                if self.session.refresh() {
                    self.set_status("Interview link refreshed", StatusLevel::Info);
                }
            }
            KeyCode::Char('n') => {
                self.session.start_new();
                self.mode = Mode::Create(CreateForm::new());
            }
            _ => {}
        }
    }

    fn select_next(&mut self) {
        let len = self.history.visible_len();
        if len == 0 {
            return;
        }
        let next = match self.list.selected() {
            Some(i) if i >= len - 1 => i,
            Some(i) => i + 1,
            None => 0,
        };
        self.list.select(Some(next));
    }

    fn select_previous(&mut self) {
        let prev = match self.list.selected() {
            Some(i) if i > 0 => i - 1,
            Some(i) => i,
            None => 0,
        };
        self.list.select(Some(prev));
    }

    fn clamp_selection(&mut self) {
        let len = self.history.visible_len();
        match self.list.selected() {
            Some(_) if len == 0 => self.list.select(None),
            Some(i) if i >= len => self.list.select(Some(len - 1)),
            None if len > 0 => self.list.select(Some(0)),
            _ => {}
        }
    }

    fn highlighted_record(&self) -> Option<InterviewRecord> {
        let index = self.list.selected()?;
        self.history.visible_records().nth(index).cloned()
    }

    fn toggle_highlighted(&mut self) {
        let Some(record) = self.highlighted_record() else {
            return;
        };
        if self.history.toggle(&record.agent_id).is_ok() {
            self.select_next();
        }
    }

    fn edit_search(&mut self, edit: impl FnOnce(&mut String)) {
        let mut query = self.history.search().to_string();
        edit(&mut query);
        self.history.set_search(&query);
        self.clamp_selection();
    }

    fn cycle_status_filter(&mut self) {
        let next = match self.history.status_filter() {
            None => Some("completed".to_string()),
            Some("completed") => Some("in-progress".to_string()),
            Some(_) => None,
        };
        self.history.set_status_filter(next);
        self.clamp_selection();
    }

    /// Writes the selected rows to the pending-analysis hand-off the
    /// dashboard consumes on its next run.
    fn queue_analysis(&mut self) {
        let requests = self.history.selected_requests();
        if requests.is_empty() {
            self.set_status(
                "Please select at least one candidate for analysis.",
                StatusLevel::Warning,
            );
            return;
        }
        match handoff::write_pending(&self.data_dir, &requests) {
            Ok(_) => {
                self.set_status(
                    format!(
                        "Queued {} candidate(s) for analysis; run {}",
                        requests.len(),
                        hints::cmd::DASHBOARD_SHOW
                    ),
                    StatusLevel::Success,
                );
                self.history.clear_selection();
            }
            Err(err) => {
                self.set_status(format!("Failed to queue analysis: {}", err), StatusLevel::Error)
            }
        }
    }

    fn resume_highlighted(&mut self) {
        let Some(record) = self.highlighted_record() else {
            return;
        };
        self.session.resume(&record, &self.interview_base_url);
        self.mode = Mode::Session;
        self.set_status(
            format!("Resumed interview for {}", record.candidate_name),
            StatusLevel::Info,
        );
    }

    fn open_transcript_for_highlighted(&mut self, client: &ApiClient) {
        let Some(record) = self.highlighted_record() else {
            return;
        };
        match client.fetch_transcript(&record.agent_id, &record.candidate_name, &record.role) {
            Ok(data) => {
                let model =
                    present_transcript(&data, &record.agent_id, &record.candidate_name, None);
                self.mode = Mode::Transcript {
                    model,
                    scroll: 0,
                    from_session: false,
                };
            }
            Err(err) => {
                self.set_status(format!("Transcript unavailable: {}", err), StatusLevel::Error)
            }
        }
    }

    fn open_transcript_for_session(&mut self, client: &ApiClient) {
        let target = match self.session.transcript_target() {
            Ok(session) => session.clone(),
            Err(err) => {
                self.set_status(err.to_string(), StatusLevel::Error);
                return;
            }
        };
        match client.fetch_transcript(&target.agent_id, &target.candidate_name, &target.role) {
            Ok(data) => {
                let model =
                    present_transcript(&data, &target.agent_id, &target.candidate_name, None);
                // Target was checked above, so storing cannot fail.
                let _ = self.session.store_transcript(data);
                self.mode = Mode::Transcript {
                    model,
                    scroll: 0,
                    from_session: true,
                };
            }
            Err(err) => {
                self.set_status(format!("Transcript unavailable: {}", err), StatusLevel::Error)
            }
        }
    }

    fn submit_create(&mut self, client: &ApiClient) {
        let Mode::Create(form) = &self.mode else {
            return;
        };
        let name = form.name.clone();
        let role = form.role.clone();
        let email = form.email.clone();

        let outcome = SessionController::prepare_create(&name, &role, Some(&email))
            .map_err(|err| err.to_string())
            .and_then(|request| {
                client
                    .create_interview(&request)
                    .map_err(|err| format!("Failed to create interview: {}", err))
            });

        match outcome {
            Ok(session) => {
                let candidate = session.candidate_name.clone();
                self.session.begin(session);
                self.mode = Mode::Session;
                self.set_status(
                    format!("Interview session created for {}", candidate),
                    StatusLevel::Success,
                );
            }
            Err(message) => {
                if let Mode::Create(form) = &mut self.mode {
                    form.error = Some(message);
                }
            }
        }
    }

    fn reload(&mut self, client: &ApiClient) {
        match client.fetch_interview_history() {
            Ok(records) => {
                self.history.load(records);
                self.source = HistorySource::Api;
                self.set_status("History refreshed", StatusLevel::Success);
            }
            Err(err) => self.set_status(format!("Refresh failed: {}", err), StatusLevel::Error),
        }
        self.clamp_selection();
    }

    fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status_message = message.into();
        self.status_level = level;
    }

    fn status_bar(&self) -> StatusBarViewModel {
        let (context, key_hints) = match &self.mode {
            Mode::Browse => (
                format!(
                    "{} of {} interviews | {} selected",
                    self.history.visible_len(),
                    self.history.records().len(),
                    self.history.selection_count()
                ),
                vec![
                    KeyHint::new("Space", "select"),
                    KeyHint::new("A", "analyze"),
                    KeyHint::new("n", "new"),
                    KeyHint::new("t", "transcript"),
                    KeyHint::new("/", "search"),
                    KeyHint::new("q", "quit"),
                ],
            ),
            Mode::Search => (
                format!("search: {}_", self.history.search()),
                vec![KeyHint::new("Enter", "apply"), KeyHint::new("Esc", "clear")],
            ),
            Mode::Create(_) => (
                "new interview".to_string(),
                vec![
                    KeyHint::new("Tab", "field"),
                    KeyHint::new("Enter", "create"),
                    KeyHint::new("Esc", "cancel"),
                ],
            ),
            Mode::Session => (
                self.session
                    .session()
                    .map(|session| format!("session {}", session.agent_id))
                    .unwrap_or_default(),
                vec![
                    KeyHint::new("t", "transcript"),
                    KeyHint::new("r", "refresh"),
                    KeyHint::new("n", "new"),
                    KeyHint::new("Esc", "back"),
                ],
            ),
            Mode::Transcript { model, .. } => (
                format!("transcript {}", model.agent_id),
                vec![KeyHint::new("j/k", "scroll"), KeyHint::new("Esc", "back")],
            ),
        };

        StatusBarViewModel {
            context,
            status_message: self.status_message.clone(),
            status_level: self.status_level,
            key_hints,
        }
    }
}

fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    match &app.mode {
        Mode::Browse | Mode::Search => {
            let model = present_history(&app.history, app.source);
            let view = HistoryListView::new(&model);
            if view.is_empty() {
                view.render_empty(chunks[0], f.buffer_mut());
            } else {
                let (list, _) = view.build_list();
                f.render_stateful_widget(list, chunks[0], &mut app.list);
            }
        }
        Mode::Create(form) => {
            let view = CreateFormView {
                name: &form.name,
                role: &form.role,
                email: &form.email,
                focus: form.focus,
                error: form.error.as_deref(),
            };
            f.render_widget(view, chunks[0]);
        }
        Mode::Session => {
            if let Ok(model) = present_session(&app.session) {
                f.render_widget(SessionPanel::new(&model), chunks[0]);
            }
        }
        Mode::Transcript { model, scroll, .. } => {
            let panel = TranscriptPanel::new(model);
            let paragraph = Paragraph::new(panel.lines())
                .block(Block::default().title(panel.title()).borders(Borders::ALL))
                .wrap(Wrap { trim: false })
                .scroll((*scroll, 0));
            f.render_widget(paragraph, chunks[0]);
        }
    }

    let status = app.status_bar();
    f.render_widget(StatusBarView::new(&status), chunks[1]);
}
