//! Main TUI application - composes widgets and handles the event loop.
//!
//! # Keys
//!
//! - `Tab`/`Shift+Tab`: Switch between the cycles and initial price inputs
//! - `0`-`9`, `.`, `Backspace`: Edit the focused input
//! - `Enter`: Run a simulation (or dismiss an alert)
//! - `↑`/`↓`: Scroll the transaction log
//! - `q`/`Esc`: Quit (`Esc` dismisses an alert first)
//!
//! Moving the mouse over the price chart shows the price of the nearest cycle.

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};

use client::{ClientError, SimulationService};
use crossbeam_channel::{Receiver, Sender, unbounded};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use tokio::runtime::Handle;
use tracing::{debug, info, warn};
use types::SimulationResponse;

use crate::controller::{SimulationController, ViewState};
use crate::dashboard::{Dashboard, SimulationForm};
use crate::widgets::{AgentCards, FormPanel, PriceChart, StatsPanel, TransactionLog};

type Outcome = Result<SimulationResponse, ClientError>;

/// Highest frame rate that still gives a non-zero tick.
pub const MAX_FRAME_RATE: u64 = 1000;

/// TUI application state.
pub struct TuiApp {
    /// Everything drawn on screen.
    dashboard: Dashboard,
    controller: SimulationController,
    service: Arc<dyn SimulationService>,
    /// Runtime the simulation requests are spawned on.
    runtime: Handle,
    outcome_tx: Sender<Outcome>,
    outcome_rx: Receiver<Outcome>,
    /// Target frame rate.
    frame_rate: u64,
    /// Transaction log scroll offset.
    tx_scroll: usize,
    /// Where the price line was last plotted (for mouse hover).
    plot_area: Option<Rect>,
    /// Chart point under the mouse.
    hover_index: Option<usize>,
}

impl TuiApp {
    /// Create a new app that sends requests to `service` on `runtime`.
    pub fn new(service: Arc<dyn SimulationService>, runtime: Handle) -> Self {
        let (outcome_tx, outcome_rx) = unbounded();
        Self {
            dashboard: Dashboard::default(),
            controller: SimulationController::new(),
            service,
            runtime,
            outcome_tx,
            outcome_rx,
            frame_rate: 30,
            tx_scroll: 0,
            plot_area: None,
            hover_index: None,
        }
    }

    /// Pre-fill the form inputs.
    pub fn with_form(mut self, form: SimulationForm) -> Self {
        self.dashboard.form = form;
        self
    }

    /// Set the target frame rate (frames per second), clamped to `1..=MAX_FRAME_RATE`.
    pub fn frame_rate(mut self, fps: u64) -> Self {
        self.frame_rate = fps.clamp(1, MAX_FRAME_RATE);
        self
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn state(&self) -> ViewState {
        self.controller.state()
    }

    /// Run the TUI event loop.
    ///
    /// Blocks until the user quits.
    pub fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn run_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
        let tick_rate = Duration::from_millis(1000 / self.frame_rate);
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|f| self.draw(f))?;

            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key_event(key) {
                            info!("quit requested");
                            return Ok(());
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                    _ => {}
                }
            }

            if last_tick.elapsed() >= tick_rate {
                self.poll_outcomes();
                last_tick = Instant::now();
            }
        }
    }

    /// Handle keyboard input. Returns true if the app should quit.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        // An open alert swallows everything but its dismiss keys.
        if self.dashboard.alert.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dashboard.dismiss_alert();
            }
            return false;
        }

        let editable = self.controller.state() != ViewState::Running;
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Enter => self.submit(),
            KeyCode::Tab | KeyCode::BackTab if editable => self.dashboard.form.toggle_focus(),
            KeyCode::Char(c) if editable && !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.dashboard.form.push(c)
            }
            KeyCode::Backspace if editable => self.dashboard.form.backspace(),
            KeyCode::Up => self.tx_scroll = self.tx_scroll.saturating_sub(1),
            KeyCode::Down => {
                let max_scroll = self
                    .dashboard
                    .transactions
                    .as_ref()
                    .map(|t| t.rows().len().saturating_sub(1))
                    .unwrap_or(0);
                self.tx_scroll = (self.tx_scroll + 1).min(max_scroll);
            }
            _ => {}
        }
        false
    }

    /// Start a run and hand the request to the runtime.
    fn submit(&mut self) {
        let Ok(request) = self.controller.submit(&mut self.dashboard) else {
            return;
        };
        self.tx_scroll = 0;
        self.hover_index = None;

        let service = Arc::clone(&self.service);
        let sender = self.outcome_tx.clone();
        self.runtime.spawn(async move {
            let outcome = service.simulate(request).await;
            if sender.send(outcome).is_err() {
                warn!("simulation finished after the UI closed");
            }
        });
    }

    /// Apply finished runs (non-blocking).
    pub fn poll_outcomes(&mut self) {
        for outcome in self.outcome_rx.try_iter() {
            debug!(ok = outcome.is_ok(), "simulation outcome received");
            self.controller.complete(outcome, &mut self.dashboard);
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if !matches!(mouse.kind, MouseEventKind::Moved) {
            return;
        }
        self.hover_index = None;
        let (Some(plot), Some(spec)) = (self.plot_area, self.dashboard.canvas.active()) else {
            return;
        };
        let (x, y) = (mouse.column, mouse.row);
        if plot.width > 0
            && x >= plot.x
            && x < plot.right()
            && y >= plot.y
            && y < plot.bottom()
        {
            // Centre of the cell, as a fraction of the plotted width.
            let fraction = (f64::from(x - plot.x) + 0.5) / f64::from(plot.width);
            self.hover_index = spec.nearest_index(fraction * spec.x_max());
        }
    }

    /// Draw the UI.
    pub fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Length(3), // Form
                Constraint::Min(0),    // Content
                Constraint::Length(1), // Footer
            ])
            .split(area);

        self.draw_header(frame, main_chunks[0]);

        let editable = self.controller.state() != ViewState::Running;
        frame.render_widget(
            FormPanel::new(&self.dashboard.form).editable(editable),
            main_chunks[1],
        );

        self.plot_area = None;
        if self.dashboard.loading {
            self.draw_loading(frame, main_chunks[2]);
        } else if self.dashboard.results_visible {
            self.draw_results(frame, main_chunks[2]);
        } else {
            self.draw_hint(frame, main_chunks[2]);
        }

        self.draw_footer(frame, main_chunks[3]);

        if let Some(message) = &self.dashboard.alert {
            draw_alert(frame, area, message);
        }
    }

    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let badge = |label: &'static str, bg: Color| {
            Span::styled(
                label,
                Style::default()
                    .fg(Color::Black)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            )
        };
        let status = match self.controller.state() {
            ViewState::Idle if self.dashboard.results_visible => badge(" DONE ", Color::Green),
            ViewState::Idle => badge(" IDLE ", Color::Blue),
            ViewState::Running => badge(" RUNNING ", Color::Yellow),
            ViewState::Failed => badge(" FAILED ", Color::Red),
        };

        let title = Line::from(vec![
            Span::styled(
                "Crypto Market Simulator",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" │ "),
            status,
        ]);

        let header = Paragraph::new(title).style(Style::default().bg(Color::DarkGray));
        frame.render_widget(header, area);
    }

    fn draw_footer(&self, frame: &mut Frame, area: Rect) {
        let footer = Paragraph::new(Line::from(vec![
            Span::styled(" q", Style::default().fg(Color::Yellow)),
            Span::raw(" Quit  │ "),
            Span::styled("Enter", Style::default().fg(Color::Green)),
            Span::raw(" Run  │ "),
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(" Field  │ "),
            Span::styled("↑↓", Style::default().fg(Color::Cyan)),
            Span::raw(" Scroll trades"),
        ]))
        .style(Style::default().bg(Color::DarkGray));
        frame.render_widget(footer, area);
    }

    fn draw_loading(&self, frame: &mut Frame, area: Rect) {
        let loading = Paragraph::new("Running simulation…")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(loading, area);
    }

    fn draw_hint(&self, frame: &mut Frame, area: Rect) {
        let hint = Paragraph::new("Set the cycles and initial price, then press Enter.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(hint, area);
    }

    fn draw_results(&mut self, frame: &mut Frame, area: Rect) {
        // Left: statistics + agents, right: chart + transactions
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        let left_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(10), // Statistics
                Constraint::Min(5),     // Agents
            ])
            .split(content_chunks[0]);

        let right_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(content_chunks[1]);

        frame.render_widget(
            StatsPanel::new(self.dashboard.statistics.as_ref()),
            left_chunks[0],
        );
        frame.render_widget(AgentCards::new(&self.dashboard.agents), left_chunks[1]);

        let spec = self.dashboard.canvas.active();
        let title = self
            .hover_index
            .and_then(|i| {
                let spec = spec?;
                Some(format!("{} · {}", spec.labels.get(i)?, spec.tooltip(i)?))
            })
            .unwrap_or_else(|| "Price History".to_string());
        let chart = PriceChart::new(spec).title(&title);
        self.plot_area = chart.plot_area(right_chunks[0]);
        frame.render_widget(chart, right_chunks[0]);

        frame.render_widget(
            TransactionLog::new(self.dashboard.transactions.as_ref()).scroll_offset(self.tx_scroll),
            right_chunks[1],
        );
    }
}

/// Draw `message` in a centered modal box.
fn draw_alert(frame: &mut Frame, area: Rect, message: &str) {
    let popup = centered_rect(area, 50, 7);
    let text = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to dismiss",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let alert = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title("Alert")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        );
    frame.render_widget(Clear, popup);
    frame.render_widget(alert, popup);
}

/// A rect of at most `width` x `height` centered in `area`.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
