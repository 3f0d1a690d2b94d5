//! Main application state and TUI event loop for suburb-lens.
//!
//! [`App`] owns the dataset, the fetch orchestrator handle, the two input
//! buffers, and the last built [`DashboardFrame`]. Keyboard events mutate
//! state synchronously; fetch outcomes arrive on an mpsc channel drained
//! between input events, so the dataset has exactly one writer.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use lens_runtime::dataset::Dataset;
use lens_runtime::frame::{build_frame, DashboardFrame, Renderer};
use lens_runtime::orchestrator::{FetchOrchestrator, FetchOutcome};

use crate::chart_view::{self, ChartTab};
use crate::summary_view;
use crate::table_view;
use crate::themes::Theme;

/// Default suburb used when the suburb input is submitted empty.
const DEFAULT_SUBURB: &str = "Belmont North";

/// Which input box receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFocus {
    Search,
    Suburb,
}

/// Root application state for the suburb-lens TUI.
pub struct App {
    /// Active colour theme.
    pub theme: Theme,
    /// The single long-lived mutable state (raw + filtered listings).
    pub dataset: Dataset,
    /// Spawns background fetch tasks.
    pub orchestrator: FetchOrchestrator,
    /// Contents of the suburb input box.
    pub suburb_input: String,
    /// Optional property-type restriction forwarded to every fetch.
    pub property_type: Option<String>,
    /// Contents of the search input box; applied to the dataset on every
    /// keystroke.
    pub search_input: String,
    /// Which input box is focused.
    pub focus: InputFocus,
    /// Currently visible chart panel.
    pub chart_tab: ChartTab,
    /// Last rendered frame; everything `draw` paints comes from here.
    pub frame: DashboardFrame,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
}

impl Renderer for App {
    /// Fire-and-forget: store the frame for the next draw tick.
    fn render(&mut self, frame: &DashboardFrame) {
        self.frame = frame.clone();
    }
}

impl App {
    /// Construct the application with the given configuration.
    pub fn new(
        theme_name: &str,
        suburb: String,
        property_type: Option<String>,
        orchestrator: FetchOrchestrator,
    ) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
            dataset: Dataset::new(),
            orchestrator,
            suburb_input: suburb,
            property_type,
            search_input: String::new(),
            focus: InputFocus::Search,
            chart_tab: ChartTab::PricePerSqm,
            frame: DashboardFrame::default(),
            should_quit: false,
        }
    }

    // ── Event loop ────────────────────────────────────────────────────────

    /// Run the dashboard until the user quits.
    ///
    /// Starts an initial fetch immediately, then alternates between drawing,
    /// polling keyboard events with a short timeout, and draining fetch
    /// outcomes from `rx`.
    pub async fn run(mut self, mut rx: mpsc::Receiver<FetchOutcome>) -> io::Result<()> {
        self.start_fetch();

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(250);

        let result = loop {
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }

            // Drain any pending fetch outcomes (non-blocking).
            loop {
                match rx.try_recv() {
                    Ok(outcome) => self.apply_outcome(outcome),
                    Err(mpsc::error::TryRecvError::Empty) => break,
                    Err(mpsc::error::TryRecvError::Disconnected) => {
                        self.should_quit = true;
                        break;
                    }
                }
            }

            if self.should_quit {
                break Ok(());
            }
        };

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    // ── Input handling ────────────────────────────────────────────────────

    /// Apply one keyboard event to the application state.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.start_fetch();
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    InputFocus::Search => InputFocus::Suburb,
                    InputFocus::Suburb => InputFocus::Search,
                };
            }
            KeyCode::Left => self.chart_tab = self.chart_tab.prev(),
            KeyCode::Right => self.chart_tab = self.chart_tab.next(),
            KeyCode::Enter => {
                if self.focus == InputFocus::Suburb {
                    self.start_fetch();
                }
            }
            KeyCode::Backspace => match self.focus {
                InputFocus::Search => {
                    self.search_input.pop();
                    self.apply_query();
                }
                InputFocus::Suburb => {
                    self.suburb_input.pop();
                }
            },
            KeyCode::Char(c) => match self.focus {
                InputFocus::Search => {
                    self.search_input.push(c);
                    self.apply_query();
                }
                InputFocus::Suburb => self.suburb_input.push(c),
            },
            _ => {}
        }
    }

    /// Commit or discard one fetch outcome; redraws only when the dataset
    /// actually changed (stale outcomes change nothing).
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        let applied = match outcome {
            FetchOutcome::Loaded { seq, payload } => self.dataset.commit_fetch(seq, payload),
            FetchOutcome::Failed { seq, message } => self.dataset.fail_fetch(seq, &message),
        };
        if applied {
            self.refresh_frame();
        }
    }

    /// Begin a fetch for the suburb input's current contents.
    pub fn start_fetch(&mut self) {
        let trimmed = self.suburb_input.trim();
        let suburb = if trimmed.is_empty() {
            DEFAULT_SUBURB.to_string()
        } else {
            trimmed.to_string()
        };

        let description = match &self.property_type {
            Some(pt) => format!("{suburb} · {pt}"),
            None => suburb.clone(),
        };

        let seq = self.dataset.begin_fetch(&description);
        self.orchestrator
            .spawn_fetch(seq, suburb, self.property_type.clone());
        self.refresh_frame();
    }

    /// Re-run the filter pipeline for the current search input.
    fn apply_query(&mut self) {
        self.dataset.set_query(&self.search_input);
        self.refresh_frame();
    }

    /// Rebuild the dashboard frame from the dataset and hand it to the
    /// renderer side of this struct.
    fn refresh_frame(&mut self) {
        let frame = build_frame(&self.dataset);
        self.render(&frame);
    }

    // ── Drawing ───────────────────────────────────────────────────────────

    /// Render the current frame into the terminal.
    fn draw(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(1),
            ])
            .split(frame.area());

        summary_view::render_summary(
            frame,
            chunks[0],
            self.frame.summary.as_ref(),
            self.frame.rows.len(),
            &self.theme,
        );

        self.draw_inputs(frame, chunks[1]);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
            .split(chunks[2]);

        if self.frame.rows.is_empty() {
            table_view::render_no_listings(frame, main[0], &self.theme);
        } else {
            table_view::render_listing_table(frame, main[0], &self.frame.rows, &self.theme);
        }

        chart_view::render_chart(frame, main[1], self.chart_tab, &self.frame, &self.theme);

        self.draw_status(frame, chunks[3]);
    }

    fn draw_inputs(&self, frame: &mut Frame, area: Rect) {
        let boxes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(area);

        self.draw_input_box(
            frame,
            boxes[0],
            " Suburb (Enter fetches) ",
            &self.suburb_input,
            self.focus == InputFocus::Suburb,
        );
        self.draw_input_box(
            frame,
            boxes[1],
            " Search (filters as you type) ",
            &self.search_input,
            self.focus == InputFocus::Search,
        );
    }

    fn draw_input_box(
        &self,
        frame: &mut Frame,
        area: Rect,
        title: &str,
        content: &str,
        focused: bool,
    ) {
        let border_style = if focused {
            self.theme.input_active
        } else {
            self.theme.input_inactive
        };
        let text = if focused {
            format!("{content}▏")
        } else {
            content.to_string()
        };
        let paragraph = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(Span::styled(title.to_string(), border_style)),
        );
        frame.render_widget(paragraph, area);
    }

    fn draw_status(&self, frame: &mut Frame, area: Rect) {
        let status_style = if self.frame.status.starts_with("Error:") {
            self.theme.error
        } else {
            self.theme.info
        };

        let line = Line::from(vec![
            Span::styled(self.frame.status.clone(), status_style),
            Span::styled(
                "  ·  Esc quit · Tab focus · ←/→ chart · Ctrl+R refetch",
                self.theme.dim,
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
