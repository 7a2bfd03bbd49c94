//! TUI application model (Elm architecture).

use std::io;
use std::time::{Duration, Instant};

use crossbeam_channel::Receiver;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use fibspiral_core::constants::{
    DEFAULT_STEP_DELAY_MS, DEFAULT_TERMS, MAX_STEP_DELAY_MS, STEP_DELAY_INCREMENT_MS,
};
use fibspiral_core::sequence::Sequence;
use fibspiral_core::table::{rows, SequenceRow};
use fibspiral_core::term_count::TermCount;
use fibspiral_render::display_list::DisplayList;
use fibspiral_render::renderer::SpiralRenderer;
use fibspiral_render::sequencer::{AnimationSequencer, StartOutcome, StepOutcome};
use fibspiral_render::surface::Surface;

use crate::controls::render_controls;
use crate::footer::render_footer;
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::logs::{render_logs, ScrollState};
use crate::messages::TuiMessage;
use crate::spiral::{render_spiral, surface_size};
use crate::table::render_table;

/// Margin around the spiral, in braille dots.
const CANVAS_MARGIN: f64 = 2.0;
const MAX_INPUT_LEN: usize = 3;
const MAX_LOGS: usize = 500;
const PAGE_SIZE: usize = 10;
const TICK_RATE: Duration = Duration::from_millis(250);

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Term-count input as typed.
    pub term_input: String,
    /// Last generated sequence.
    pub sequence: Sequence,
    /// Table rows for `sequence`.
    pub rows: Vec<SequenceRow>,
    /// Everything painted so far, replayed on each frame.
    pub canvas: DisplayList,
    /// Last validation error.
    pub status: Option<String>,
    /// Log messages.
    pub logs: Vec<String>,
    pub log_scroll: ScrollState,
    pub table_scroll: ScrollState,
    /// Show logs toggle.
    pub show_logs: bool,
    pub terminal_width: u16,
    pub terminal_height: u16,
    sequencer: AnimationSequencer,
    rx: Receiver<TuiMessage>,
}

impl TuiApp {
    /// Create a new TUI app.
    #[must_use]
    pub fn new(rx: Receiver<TuiMessage>) -> Self {
        let mut app = Self {
            should_quit: false,
            term_input: DEFAULT_TERMS.to_string(),
            sequence: Sequence::default(),
            rows: Vec::new(),
            canvas: DisplayList::new(1.0, 1.0),
            status: None,
            logs: Vec::new(),
            log_scroll: ScrollState::new(),
            table_scroll: ScrollState::pinned(),
            show_logs: true,
            terminal_width: 80,
            terminal_height: 24,
            sequencer: AnimationSequencer::default().with_margin(CANVAS_MARGIN),
            rx,
        };
        app.canvas = app.blank_canvas();
        app
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.sequencer.is_running()
    }

    /// Delay the next animation will use.
    #[must_use]
    pub fn step_delay(&self) -> Duration {
        self.sequencer.step_delay()
    }

    /// Set the step delay, clamped to the supported range.
    pub fn set_step_delay(&mut self, delay: Duration) {
        let delay = delay.min(Duration::from_millis(MAX_STEP_DELAY_MS));
        self.sequencer.set_step_delay(delay);
    }

    /// Squares painted so far and the total, while running.
    #[must_use]
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.sequencer.progress()
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::SetTermsInput(input) => {
                if !self.is_running() {
                    self.term_input = input;
                }
            }
            TuiMessage::SetStepDelay(delay) => self.set_step_delay(delay),
            TuiMessage::Generate => self.generate(Instant::now()),
            TuiMessage::Reset => self.reset(),
            TuiMessage::Log(msg) => self.push_log(msg),
            TuiMessage::Error(err) => {
                self.push_log(format!("[ERROR] {err}"));
                self.status = Some(err);
            }
            TuiMessage::Quit => {
                self.should_quit = true;
            }
            TuiMessage::Tick => self.tick(Instant::now()),
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
                self.refit_canvas();
            }
            TuiMessage::KeyPress(action) => {
                self.handle_key_action(action);
            }
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::Generate => self.generate(Instant::now()),
            KeyAction::Reset => self.reset(),
            KeyAction::Digit(c) => {
                if !self.is_running() && self.term_input.len() < MAX_INPUT_LEN {
                    self.term_input.push(c);
                }
            }
            KeyAction::DeleteDigit => {
                if !self.is_running() {
                    self.term_input.pop();
                }
            }
            KeyAction::SlowerSteps => {
                let delay = self.step_delay() + Duration::from_millis(STEP_DELAY_INCREMENT_MS);
                self.set_step_delay(delay);
            }
            KeyAction::FasterSteps => {
                let delay = self
                    .step_delay()
                    .saturating_sub(Duration::from_millis(STEP_DELAY_INCREMENT_MS));
                self.set_step_delay(delay);
            }
            KeyAction::ToggleLogs => {
                self.show_logs = !self.show_logs;
                self.refit_canvas();
            }
            KeyAction::ScrollUp => self.table_scroll.scroll_up(),
            KeyAction::ScrollDown => self.table_scroll.scroll_down(self.rows.len()),
            KeyAction::PageUp => self.table_scroll.page_up(PAGE_SIZE),
            KeyAction::PageDown => self.table_scroll.page_down(PAGE_SIZE, self.rows.len()),
            KeyAction::Home => self.table_scroll.home(),
            KeyAction::End => self.table_scroll.end(self.rows.len()),
            KeyAction::None => {}
        }
    }

    /// Validate the input and start animating a new spiral.
    ///
    /// Ignored while an animation is running. Invalid input leaves the
    /// previous spiral in place and reports the error.
    pub fn generate(&mut self, now: Instant) {
        if self.is_running() {
            self.push_log("[WARN] Animation in progress; generate ignored".to_string());
            return;
        }

        let count = match TermCount::parse(&self.term_input) {
            Ok(count) => count,
            Err(err) => {
                tracing::debug!(input = %self.term_input, %err, "rejected term count");
                if let Some(input) = err.suggested_input() {
                    self.term_input = input;
                }
                self.push_log(format!("[ERROR] {err}"));
                self.status = Some(err.to_string());
                return;
            }
        };

        let (sequence, layout) = fibspiral_core::spiral(count);
        self.status = None;
        self.rows = rows(&sequence);
        self.table_scroll.reset();
        self.canvas = self.blank_canvas();
        let outcome = self
            .sequencer
            .start(layout, sequence.len(), &mut self.canvas, now);
        if outcome == StartOutcome::Started {
            self.push_log(format!(
                "Drawing {} squares, {}ms apart",
                sequence.len(),
                self.step_delay().as_millis()
            ));
        }
        self.sequence = sequence;
    }

    /// Restore default input and delay and clear everything drawn.
    ///
    /// Ignored while an animation is running.
    pub fn reset(&mut self) {
        if self.is_running() {
            self.push_log("[WARN] Animation in progress; reset ignored".to_string());
            return;
        }
        self.term_input = DEFAULT_TERMS.to_string();
        self.set_step_delay(Duration::from_millis(DEFAULT_STEP_DELAY_MS));
        self.sequence = Sequence::default();
        self.rows.clear();
        self.table_scroll.reset();
        self.canvas = self.blank_canvas();
        self.status = None;
        self.push_log("Reset".to_string());
    }

    /// Paint the next animation step if it is due.
    pub fn tick(&mut self, now: Instant) {
        if self.sequencer.advance(&mut self.canvas, now) == StepOutcome::Finished {
            self.push_log(format!("Spiral complete: {} squares", self.sequence.len()));
        }
    }

    /// How long the event loop may block before the next step is due.
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.sequencer
            .next_deadline()
            .map_or(TICK_RATE, |due| due.saturating_duration_since(now).min(TICK_RATE))
    }

    fn push_log(&mut self, line: String) {
        self.logs.push(line);
        if self.logs.len() > MAX_LOGS {
            self.logs.remove(0);
        }
        self.log_scroll.on_new_message(self.logs.len());
    }

    fn blank_canvas(&self) -> DisplayList {
        let (width, height) = surface_size(self.spiral_area());
        DisplayList::new(width, height)
    }

    /// Redraw the finished spiral at the current panel size.
    ///
    /// A running animation keeps its canvas until it completes.
    fn refit_canvas(&mut self) {
        if self.is_running() {
            return;
        }
        let mut canvas = self.blank_canvas();
        if !self.sequence.is_empty() {
            SpiralRenderer::with_margin(
                fibspiral_core::layout::layout(&self.sequence),
                self.sequence.len(),
                canvas.width(),
                canvas.height(),
                self.sequencer.margin(),
            )
            .render(&mut canvas);
        }
        self.canvas = canvas;
    }

    /// Where the spiral panel sits on the current terminal.
    #[must_use]
    pub fn spiral_area(&self) -> Rect {
        let area = Rect::new(0, 0, self.terminal_width, self.terminal_height);
        let (_, main, _, _) = Self::compute_layout(area, self.show_logs);
        Self::compute_main_layout(main).1
    }

    /// Split the screen into (header, main, logs, footer).
    ///
    /// The logs rect has zero height when logs are hidden.
    #[must_use]
    pub fn compute_layout(area: Rect, show_logs: bool) -> (Rect, Rect, Rect, Rect) {
        let logs_height = if show_logs { 7 } else { 0 };
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),           // header
                Constraint::Min(5),              // main content
                Constraint::Length(logs_height), // logs
                Constraint::Length(2),           // footer
            ])
            .split(area);

        (outer[0], outer[1], outer[2], outer[3])
    }

    /// Split the main area into (side column, spiral canvas).
    #[must_use]
    pub fn compute_main_layout(main: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(main);

        (chunks[0], chunks[1])
    }

    /// Split the side column into (controls, table).
    #[must_use]
    pub fn compute_side_layout(side: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(3)])
            .split(side);

        (chunks[0], chunks[1])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let running = self.is_running();
        let (header_area, main_area, logs_area, footer_area) =
            Self::compute_layout(frame.area(), self.show_logs);
        let (side_area, spiral_area) = Self::compute_main_layout(main_area);
        let (controls_area, table_area) = Self::compute_side_layout(side_area);

        render_header(
            frame,
            header_area,
            self.sequence.len(),
            self.step_delay(),
            self.progress(),
        );
        render_controls(
            frame,
            controls_area,
            &self.term_input,
            self.step_delay(),
            self.status.as_deref(),
            running,
        );
        render_table(frame, table_area, &self.rows, self.table_scroll.offset);
        render_spiral(frame, spiral_area, &self.canvas);
        if self.show_logs {
            render_logs(frame, logs_area, &self.logs, self.log_scroll.offset);
        }
        render_footer(frame, footer_area, running);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// Blocks on terminal events until the next animation step is due,
    /// paints due steps, and tears the terminal down on exit.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let size = terminal.size()?;
        self.terminal_width = size.width;
        self.terminal_height = size.height;
        self.refit_canvas();

        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        loop {
            // Messages first so an initial Generate is painted right away.
            self.update();
            self.tick(Instant::now());

            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                return Ok(());
            }

            if event::poll(self.poll_timeout(Instant::now()))? {
                match event::read()? {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        let action = map_key(key_event);
                        self.handle_key_action(action);
                    }
                    Event::Resize(w, h) => {
                        self.handle_message(TuiMessage::Resize {
                            width: w,
                            height: h,
                        });
                    }
                    _ => {}
                }
            }
        }
    }
}
