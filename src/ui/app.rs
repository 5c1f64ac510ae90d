//! Main TUI application state and logic

use crate::constants::VIEWER_TICK_MS;
use crate::lessons::{self, Lesson};
use crate::transcript::Transcript;
use crate::xnor::{XnorMode, XnorReport};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Lessons,
    Output,
    Bits,
}

impl FocusedPane {
    /// Move focus to the next pane (lessons -> output -> bits)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Lessons => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Bits,
            FocusedPane::Bits => FocusedPane::Lessons,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Lessons => FocusedPane::Bits,
            FocusedPane::Output => FocusedPane::Lessons,
            FocusedPane::Bits => FocusedPane::Output,
        }
    }
}

/// The main application state
pub struct App {
    pub lessons: &'static [Lesson],

    /// Index of the selected lesson
    pub selected: usize,

    /// Output of the selected lesson
    pub transcript: Transcript,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    pub output_scroll: usize,

    /// XNOR operands and mode shown in the bits pane
    pub a: i32,
    pub b: i32,
    pub mode: XnorMode,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a viewer showing the first lesson and the given XNOR operands
    pub fn new(a: i32, b: i32, mode: XnorMode) -> Self {
        let mut app = App {
            lessons: lessons::all(),
            selected: 0,
            transcript: Transcript::new(),
            focused_pane: FocusedPane::Lessons,
            output_scroll: 0,
            a,
            b,
            mode,
            should_quit: false,
            status_message: String::from("Ready!"),
        };
        app.run_selected();
        app
    }

    /// The XNOR computation currently on display
    pub fn report(&self) -> XnorReport {
        XnorReport::new(self.a, self.b, self.mode)
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(VIEWER_TICK_MS))? {
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
        let size = frame.area();

        // Panes above, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(20), Constraint::Min(0)])
            .split(main_chunks[0]);

        // Right column: Output (top) | Bits (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(8)])
            .split(columns[1]);

        super::panes::render_lessons_pane(
            frame,
            columns[0],
            self.lessons,
            self.selected,
            self.focused_pane == FocusedPane::Lessons,
        );

        let output = self.transcript.get_output();
        super::panes::render_output_pane(
            frame,
            right_rows[0],
            &output,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        super::panes::render_bits_pane(
            frame,
            right_rows[1],
            &self.report(),
            self.focused_pane == FocusedPane::Bits,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.selected,
            self.lessons.len(),
            self.mode,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Lessons => {
                    if self.selected > 0 {
                        self.select(self.selected - 1);
                    }
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_sub(1);
                }
                FocusedPane::Bits => self.adjust_b(1),
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Lessons => {
                    if self.selected + 1 < self.lessons.len() {
                        self.select(self.selected + 1);
                    }
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_add(1);
                }
                FocusedPane::Bits => self.adjust_b(-1),
            },
            KeyCode::Char('m') | KeyCode::Char('M') => {
                self.mode = self.mode.toggle();
                self.status_message = format!("XNOR mode: {}", self.mode);
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_b(1),
            KeyCode::Char('-') => self.adjust_b(-1),
            KeyCode::Char(']') => self.adjust_a(1),
            KeyCode::Char('[') => self.adjust_a(-1),
            _ => {}
        }
    }

    fn select(&mut self, index: usize) {
        self.selected = index;
        self.output_scroll = 0;
        self.run_selected();
    }

    fn run_selected(&mut self) {
        self.transcript.clear();
        let lesson = &self.lessons[self.selected];
        lesson.run(&mut self.transcript);
        self.status_message = format!("Ran {}", lesson.name);
    }

    // Operands wrap instead of overflowing at the i32 bounds
    fn adjust_a(&mut self, delta: i32) {
        self.a = self.a.wrapping_add(delta);
        self.status_message = format!("a = {}", self.a);
    }

    fn adjust_b(&mut self, delta: i32) {
        self.b = self.b.wrapping_add(delta);
        self.status_message = format!("b = {}", self.b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn screen_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn starts_on_first_lesson() {
        let app = App::new(10, 10, XnorMode::Scalar);
        assert_eq!(app.selected, 0);
        assert_eq!(
            app.transcript.get_output().first().map(String::as_str),
            Some("Built-in Types:")
        );
    }

    #[test]
    fn arrow_keys_move_selection_and_rerun() {
        let mut app = App::new(10, 10, XnorMode::Scalar);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected, 0);

        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected, 1);
        assert_eq!(app.transcript.get_output()[0], "Word Size:");

        for _ in 0..100 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.selected, app.lessons.len() - 1);
    }

    #[test]
    fn mode_toggle_and_operand_keys() {
        let mut app = App::new(10, 10, XnorMode::Scalar);
        assert_eq!(app.report().result, 1);

        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.mode, XnorMode::Bitwise);
        assert_eq!(app.report().result, -1);

        press(&mut app, KeyCode::Char('-'));
        press(&mut app, KeyCode::Char(']'));
        assert_eq!((app.a, app.b), (11, 9));
    }

    #[test]
    fn operands_wrap_at_bounds() {
        let mut app = App::new(i32::MAX, i32::MIN, XnorMode::Bitwise);
        press(&mut app, KeyCode::Char(']'));
        press(&mut app, KeyCode::Char('-'));
        assert_eq!((app.a, app.b), (i32::MIN, i32::MAX));
    }

    #[test]
    fn focus_cycles_through_panes() {
        let mut app = App::new(10, 10, XnorMode::Scalar);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Output);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Lessons);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_pane, FocusedPane::Bits);
    }

    #[test]
    fn render_shows_every_pane() {
        let mut app = App::new(10, 5, XnorMode::Bitwise);
        let text = screen_text(&mut app);
        assert!(text.contains("Lessons"));
        assert!(text.contains("Output"));
        assert!(text.contains("XNOR (bitwise)"));
        assert!(text.contains("XNOR of 10 and 5 is: -16"));
        assert!(text.contains("BITWISE"));
    }

    #[test]
    fn q_quits() {
        let mut app = App::new(10, 10, XnorMode::Scalar);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
