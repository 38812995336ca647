//! Interactive dashboard: candidate list with sort/filter cycling, a detail
//! overlay, and in-place reload.

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::ListState,
    Frame, Terminal,
};
use teamfit_client::ApiClient;
use teamfit_core::{DashboardController, SortKey};
use teamfit_types::{AnalysisRequest, Recommendation};

use crate::handoff;
use crate::presentation::presenters::{present_candidate_detail, present_dashboard};
use crate::presentation::view_models::{
    CandidateDetailViewModel, DashboardViewModel, KeyHint, StatusBarViewModel, StatusLevel,
};
use crate::presentation::views::tui::{
    CandidateDetailPanel, CandidateListView, OverviewView, StatusBarView,
};

use super::HandlerContext;

const TICK_RATE: Duration = Duration::from_millis(250);

pub fn handle(ctx: &HandlerContext, analyze: Option<&str>) -> Result<()> {
    // Queued hand-offs are consumed up front, same as the plain command.
    let mut pending = handoff::take_pending(&ctx.data_dir).unwrap_or_default();
    if let Some(raw) = analyze {
        pending.extend(handoff::parse_inline(raw).unwrap_or_default());
    }
    let pending = (!pending.is_empty()).then_some(pending);

    let client = ctx.client()?;
    let mut controller = DashboardController::new();
    let token = controller.begin_load();
    let dataset = client
        .fetch_dashboard_data()
        .context("Failed to load dashboard data")?;
    controller.complete_load(token, dataset);

    let mut app = App::new(controller, pending);

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

struct App {
    controller: DashboardController,
    pending: Option<Vec<AnalysisRequest>>,
    model: DashboardViewModel,
    list: ListState,
    detail: Option<CandidateDetailViewModel>,
    status_message: String,
    status_level: StatusLevel,
    should_quit: bool,
}

impl App {
    fn new(controller: DashboardController, pending: Option<Vec<AnalysisRequest>>) -> Self {
        let model = present_dashboard(&controller, pending.as_deref());
        let mut list = ListState::default();
        if !model.candidates.is_empty() {
            list.select(Some(0));
        }
        Self {
            controller,
            pending,
            model,
            list,
            detail: None,
            status_message: String::new(),
            status_level: StatusLevel::Info,
            should_quit: false,
        }
    }

    fn handle_key(&mut self, code: KeyCode, client: &ApiClient) {
        // The detail overlay is modal: only dismissal gets through.
        if self.detail.is_some() {
            match code {
                KeyCode::Esc | KeyCode::Enter => self.detail = None,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            KeyCode::Enter => self.open_detail(),
            KeyCode::Char('s') => self.cycle_sort(),
            KeyCode::Char('f') => self.cycle_filter(),
            KeyCode::Char('r') => self.reload(client),
            _ => {}
        }
    }

    /// Rebuilds the ViewModel after any controller change and keeps the
    /// selection inside the visible range.
    fn refresh_model(&mut self) {
        self.model = present_dashboard(&self.controller, self.pending.as_deref());
        let len = self.model.candidates.len();
        match self.list.selected() {
            Some(_) if len == 0 => self.list.select(None),
            Some(i) if i >= len => self.list.select(Some(len - 1)),
            None if len > 0 => self.list.select(Some(0)),
            _ => {}
        }
    }

    fn select_next(&mut self) {
        let len = self.model.candidates.len();
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

    fn open_detail(&mut self) {
        let Some(id) = self
            .list
            .selected()
            .and_then(|i| self.model.candidates.get(i))
            .map(|card| card.id.clone())
        else {
            return;
        };
        match present_candidate_detail(&self.controller, &id) {
            Ok(detail) => self.detail = Some(detail),
            Err(err) => self.set_status(err.to_string(), StatusLevel::Error),
        }
    }

    fn cycle_sort(&mut self) {
        let next = match self.controller.sort() {
            SortKey::Compatibility => SortKey::Name,
            SortKey::Name => SortKey::Recommendation,
            SortKey::Recommendation => SortKey::Compatibility,
        };
        self.controller.set_sort(next);
        self.refresh_model();
    }

    fn cycle_filter(&mut self) {
        let next = match self.controller.filter() {
            None => Some(Recommendation::Highly),
            Some(Recommendation::Highly) => Some(Recommendation::Recommended),
            Some(Recommendation::Recommended) => Some(Recommendation::Conditionally),
            Some(Recommendation::Conditionally) => Some(Recommendation::Not),
            Some(Recommendation::Not) | Some(Recommendation::Other(_)) => None,
        };
        self.controller.set_filter(next);
        self.refresh_model();
    }

    /// Re-fetch in place. A failed fetch keeps the current dataset and only
    /// surfaces the error in the status bar.
    fn reload(&mut self, client: &ApiClient) {
        let token = self.controller.begin_load();
        match client.fetch_dashboard_data() {
            Ok(dataset) => {
                self.controller.complete_load(token, dataset);
                self.set_status("Dashboard refreshed", StatusLevel::Success);
            }
            Err(err) => self.set_status(format!("Refresh failed: {}", err), StatusLevel::Error),
        }
        self.refresh_model();
    }

    fn set_status(&mut self, message: impl Into<String>, level: StatusLevel) {
        self.status_message = message.into();
        self.status_level = level;
    }

    fn status_bar(&self) -> StatusBarViewModel {
        StatusBarViewModel {
            context: format!(
                "{} of {} candidates | sort: {} | status: {}",
                self.model.visible_candidates,
                self.model.total_candidates,
                self.model.sort,
                self.model.status_filter.to_lowercase()
            ),
            status_message: self.status_message.clone(),
            status_level: self.status_level,
            key_hints: vec![
                KeyHint::new("j/k", "move"),
                KeyHint::new("Enter", "detail"),
                KeyHint::new("s", "sort"),
                KeyHint::new("f", "filter"),
                KeyHint::new("r", "reload"),
                KeyHint::new("q", "quit"),
            ],
        }
    }
}

fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    f.render_widget(OverviewView::new(&app.model), chunks[0]);

    let list_view = CandidateListView::new(&app.model);
    if list_view.is_empty() {
        list_view.render_empty(chunks[1], f.buffer_mut());
    } else {
        let (list, _) = list_view.build_list();
        f.render_stateful_widget(list, chunks[1], &mut app.list);
    }

    let status = app.status_bar();
    f.render_widget(StatusBarView::new(&status), chunks[2]);

    if let Some(detail) = &app.detail {
        let area = centered_rect(70, 80, f.area());
        f.render_widget(CandidateDetailPanel::new(detail), area);
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
