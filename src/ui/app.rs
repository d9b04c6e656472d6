//! Main TUI application state and logic

use super::panes::{
    render_output_pane, render_program_pane, render_status_bar, render_tape_pane,
    ProgramRenderData, ProgramScrollState, StatusRenderData, TapeScrollState,
};
use crate::interpreter::trace::{ExecutionTrace, TraceOutcome};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Delay between steps in auto-play mode
const PLAY_INTERVAL: Duration = Duration::from_millis(100);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Program,
    Tape,
    Output,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: program -> tape -> output)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Program => FocusedPane::Tape,
            FocusedPane::Tape => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Program,
        }
    }
}

/// The main application state
pub struct App {
    /// The recorded run being replayed
    pub trace: ExecutionTrace,

    /// Dialect the program was written in, for the pane title
    pub dialect: String,

    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub program_scroll: ProgramScrollState,
    pub tape_scroll: TapeScrollState,
    pub output_scroll: usize,

    pub should_quit: bool,

    pub status_message: String,

    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(trace: ExecutionTrace, dialect: impl Into<String>) -> Self {
        let status_message = match trace.outcome() {
            TraceOutcome::Halted => "Ready!".to_string(),
            TraceOutcome::Faulted(fault) => format!("Ready! (run faults at instruction {})", fault.offset()),
            TraceOutcome::Truncated => "Ready! (snapshot limit reached, trace truncated)".to_string(),
        };

        App {
            trace,
            dialect: dialect.into(),
            focused_pane: FocusedPane::Program,
            program_scroll: ProgramScrollState::default(),
            tape_scroll: TapeScrollState::default(),
            output_scroll: 0,
            should_quit: false,
            status_message,
            is_playing: false,
            last_play_time: Instant::now(),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= PLAY_INTERVAL {
                if self.trace.step_forward().is_ok() {
                    self.after_move("Playing...");
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Poll with timeout so auto-play keeps running
            if event::poll(Duration::from_millis(20))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(main_chunks[0]);

        // Left column: Program (top) | Output (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[0]);

        let is_fault = self.trace.is_at_fault();
        let (pc, cursor) = self
            .trace
            .current()
            .map_or((0, 0), |snapshot| (snapshot.pc, snapshot.cursor));

        render_program_pane(
            frame,
            left_rows[0],
            ProgramRenderData {
                program: self.trace.program(),
                pc,
                is_fault,
                dialect: &self.dialect,
            },
            self.focused_pane == FocusedPane::Program,
            &mut self.program_scroll,
        );

        let output = self.trace.output_at_current();
        render_output_pane(
            frame,
            left_rows[1],
            &output,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        if let Some(snapshot) = self.trace.current() {
            render_tape_pane(
                frame,
                columns[1],
                &snapshot.tape,
                cursor,
                self.focused_pane == FocusedPane::Tape,
                &mut self.tape_scroll,
            );
        }

        render_status_bar(
            frame,
            main_chunks[1],
            StatusRenderData {
                message: &self.status_message,
                position: self.trace.position(),
                total: self.trace.len(),
                is_playing: self.is_playing,
                is_fault,
                is_truncated: self.trace.is_truncated(),
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1);
                let stepped = (0..n).take_while(|_| self.trace.step_forward().is_ok()).count();
                self.after_move(&format!("Stepped forward {} step(s)", stepped));
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                match self.trace.step_backward() {
                    Ok(()) => self.after_move("Stepped backward"),
                    Err(e) => self.status_message = format!("Cannot step backward: {}", e),
                }
            }
            KeyCode::Right => {
                self.is_playing = false;
                match self.trace.step_forward() {
                    Ok(()) => self.after_move("Stepped forward"),
                    Err(e) => self.status_message = format!("Cannot step forward: {}", e),
                }
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Program => {
                    self.program_scroll.follow = false;
                    self.program_scroll.offset = self.program_scroll.offset.saturating_sub(1);
                }
                FocusedPane::Tape => {
                    self.tape_scroll.follow = false;
                    self.tape_scroll.offset = self.tape_scroll.offset.saturating_sub(1);
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Program => {
                    self.program_scroll.follow = false;
                    self.program_scroll.offset = self.program_scroll.offset.saturating_add(1);
                }
                FocusedPane::Tape => {
                    self.tape_scroll.follow = false;
                    self.tape_scroll.offset = self.tape_scroll.offset.saturating_add(1);
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.is_playing = !self.is_playing;
                    if self.is_playing {
                        // Backdate so the first step happens on the next tick
                        self.last_play_time = Instant::now()
                            .checked_sub(PLAY_INTERVAL)
                            .unwrap_or(Instant::now());
                        self.status_message = "Playing...".to_string();
                    } else {
                        self.status_message = "Paused".to_string();
                    }
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.trace.jump_to_end();
                self.after_move("Jumped to end");
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.trace.rewind_to_start();
                self.after_move("Jumped to start");
            }
            _ => {}
        }
    }

    /// Refresh scroll state and the status line after moving through the trace
    fn after_move(&mut self, message: &str) {
        self.program_scroll.follow = true;
        self.tape_scroll.follow = true;
        // Auto-scroll output to bottom
        self.output_scroll = usize::MAX;

        self.status_message = match self.trace.fault() {
            Some(fault) if self.trace.is_at_fault() => format!("Fault: {}", fault.diagnostic().message()),
            _ => message.to_string(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{load, registry};
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn app(source: &str) -> App {
        let program = load(source.as_bytes(), "Brainfuck", registry::builtin()).unwrap();
        let trace = ExecutionTrace::record(program, &mut std::io::empty(), usize::MAX);
        App::new(trace, "Brainfuck")
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_arrow_keys_move_through_trace() {
        let mut app = app("+++");
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.trace.position(), 2);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.trace.position(), 1);
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.trace.position(), 3);
        assert_eq!(app.status_message, "Stepped forward 2 step(s)");
    }

    #[test]
    fn test_end_of_faulted_run_reports_fault() {
        let mut app = app("+<");
        press(&mut app, KeyCode::Enter);
        assert!(app.status_message.starts_with("Fault: "));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.trace.position(), 0);
        assert_eq!(app.status_message, "Jumped to start");
    }

    #[test]
    fn test_tab_cycles_focus_and_q_quits() {
        let mut app = app("+");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Tape);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Program);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    fn draw(app: &mut App) {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
    }

    #[test]
    fn test_program_scroll_survives_render() {
        let mut app = app(&"+".repeat(2000));
        draw(&mut app);
        assert_eq!(app.program_scroll.offset, 0);

        for _ in 0..5 {
            press(&mut app, KeyCode::Down);
        }
        draw(&mut app);
        assert_eq!(app.program_scroll.offset, 5);
        assert!(!app.program_scroll.follow);

        // Stepping brings the current instruction back into view
        press(&mut app, KeyCode::Right);
        draw(&mut app);
        assert!(app.program_scroll.follow);
        assert_eq!(app.program_scroll.offset, 0);
    }

    #[test]
    fn test_play_steps_on_next_tick() {
        let mut app = app("+++");
        press(&mut app, KeyCode::Char(' '));
        assert!(app.is_playing);
        assert!(app.last_play_time.elapsed() >= PLAY_INTERVAL);
        assert_eq!(app.status_message, "Playing...");
    }

    #[test]
    fn test_render_smoke() {
        let mut app = app("++[>+<-]>.");
        press(&mut app, KeyCode::Enter);
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
    }
}
