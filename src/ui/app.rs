//! Main TUI application state and logic

use crate::menu::{Answer, Field, Flow, MenuChoice, Request};
use crate::session::Session;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    widgets::ListState,
    Frame, Terminal,
};
use std::io;
use tracing::debug;

/// Lines moved per PageUp/PageDown
const SCROLL_PAGE: usize = 5;

/// Answers collected so far for the selected menu entry
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    pub choice: MenuChoice,
    pub answers: Vec<Answer>,
    /// Text typed for the current field
    pub buffer: String,
    /// Why the last submission of the current field was rejected
    pub error: Option<String>,
}

impl Form {
    pub fn new(choice: MenuChoice) -> Self {
        Form {
            choice,
            answers: Vec::new(),
            buffer: String::new(),
            error: None,
        }
    }

    /// The field being asked for, `None` once every field is answered
    pub fn current_field(&self) -> Option<&'static Field> {
        self.choice.fields().get(self.answers.len())
    }

    fn is_complete(&self) -> bool {
        self.answers.len() == self.choice.fields().len()
    }
}

/// What keystrokes currently drive
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Menu,
    Input(Form),
}

/// The main application state
pub struct App {
    /// Roster, transcript and dispatcher
    pub session: Session,

    /// Highlighted menu entry
    pub menu_state: ListState,

    pub mode: Mode,

    /// Output pane scroll offset (`usize::MAX` follows the newest line)
    pub terminal_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app around `session` and print its banner
    pub fn new(mut session: Session) -> Self {
        session.open();
        App {
            session,
            menu_state: ListState::default().with_selected(Some(0)),
            mode: Mode::Menu,
            terminal_scroll: usize::MAX,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Blocks until the operator does something
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Currently highlighted menu entry
    pub fn selected(&self) -> MenuChoice {
        let i = self.menu_state.selected().unwrap_or(0);
        MenuChoice::ALL[i.min(MenuChoice::ALL.len() - 1)]
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Menu on the left, output and prompt on the right
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(30), Constraint::Min(0)])
            .split(main_chunks[0]);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(columns[1]);

        let form = match &self.mode {
            Mode::Menu => None,
            Mode::Input(form) => Some(form),
        };

        super::panes::render_menu_pane(frame, columns[0], &mut self.menu_state, form.is_none());

        super::panes::render_terminal_pane(
            frame,
            right_rows[0],
            self.session.transcript(),
            false,
            &mut self.terminal_scroll,
        );

        super::panes::render_prompt_pane(frame, right_rows[1], form);

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.session.roster().len(),
            form.is_some(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.mode {
            Mode::Menu => self.handle_menu_key(key),
            Mode::Input(_) => self.handle_input_key(key),
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        let count = MenuChoice::ALL.len();
        let current = self.selected().index();

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.submit(MenuChoice::Exit, Vec::new());
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.menu_state.select(Some((current + count - 1) % count));
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.menu_state.select(Some((current + 1) % count));
            }
            // Number keys pick the matching entry directly
            KeyCode::Char(c @ '1'..='9') => {
                if let Ok(choice) = MenuChoice::parse_selection(&c.to_string()) {
                    self.menu_state.select(Some(choice.index()));
                    self.activate(choice);
                }
            }
            KeyCode::Enter => self.activate(self.selected()),
            KeyCode::PageUp => {
                self.terminal_scroll = self.terminal_scroll.saturating_sub(SCROLL_PAGE);
            }
            KeyCode::PageDown => {
                self.terminal_scroll = self.terminal_scroll.saturating_add(SCROLL_PAGE);
            }
            _ => {}
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        let Mode::Input(form) = &mut self.mode else {
            return;
        };

        match key.code {
            KeyCode::Esc => {
                self.status_message = format!("{} cancelled", form.choice.label());
                self.mode = Mode::Menu;
            }
            KeyCode::Backspace => {
                form.buffer.pop();
            }
            KeyCode::Char(_)
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}
            KeyCode::Char(c) => {
                form.buffer.push(c);
            }
            KeyCode::Enter => {
                let Some(field) = form.current_field() else {
                    return;
                };
                match field.parse(&form.buffer) {
                    Ok(answer) => {
                        debug!(field = ?field.key, "field answered");
                        form.answers.push(answer);
                        form.buffer.clear();
                        form.error = None;
                    }
                    Err(err) => {
                        form.error = Some(err.to_string());
                        return;
                    }
                }
                if form.is_complete() {
                    let choice = form.choice;
                    let answers = std::mem::take(&mut form.answers);
                    self.mode = Mode::Menu;
                    self.submit(choice, answers);
                }
            }
            _ => {}
        }
    }

    /// Open the form for `choice`, or submit straight away when it asks nothing
    fn activate(&mut self, choice: MenuChoice) {
        if choice.fields().is_empty() {
            self.submit(choice, Vec::new());
        } else {
            self.status_message = choice.label().to_string();
            self.mode = Mode::Input(Form::new(choice));
        }
    }

    fn submit(&mut self, choice: MenuChoice, answers: Vec<Answer>) {
        let request = match Request::from_answers(choice, &answers) {
            Ok(request) => request,
            Err(err) => {
                self.status_message = err.to_string();
                return;
            }
        };

        debug!(%choice, "submitting form");
        let flow = self.session.dispatch(request);
        self.terminal_scroll = usize::MAX;
        self.status_message = format!("{} done", choice.label());
        if flow == Flow::Exit {
            self.should_quit = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::Roster;
    use crate::session::LookupPolicy;
    use ratatui::backend::TestBackend;

    fn app() -> App {
        App::new(Session::new(Roster::new(), LookupPolicy::Lenient))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_line(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn arrows_wrap_around_the_menu() {
        let mut app = app();
        assert_eq!(app.selected(), MenuChoice::AddStudent);
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected(), MenuChoice::Exit);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.selected(), MenuChoice::EnrollStudent);
    }

    #[test]
    fn add_student_through_the_form() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        assert!(matches!(app.mode, Mode::Input(_)));
        type_line(&mut app, "Alice");
        assert_eq!(app.mode, Mode::Menu);
        assert!(app
            .session
            .transcript()
            .contains("Student Alice added successfully. Student ID: 10000"));
    }

    #[test]
    fn bad_amount_keeps_the_form_open() {
        let mut app = app();
        press(&mut app, KeyCode::Char('1'));
        type_line(&mut app, "Alice");
        press(&mut app, KeyCode::Char('4'));
        type_line(&mut app, "10000");
        type_line(&mut app, "ten");
        match &app.mode {
            Mode::Input(form) => {
                assert!(form.error.is_some());
                assert_eq!(form.current_field().map(|f| f.message), Some("Enter amount:"));
            }
            Mode::Menu => panic!("form closed on a bad amount"),
        }
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        type_line(&mut app, "30");
        assert_eq!(app.mode, Mode::Menu);
        let alice = app.session.roster().find_student("10000").unwrap();
        assert_eq!(alice.balance(), 70.0);
    }

    #[test]
    fn escape_cancels_without_dispatching() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, Mode::Menu);
        assert!(app.session.roster().is_empty());
        assert!(!app.should_quit);
    }

    #[test]
    fn modified_keys_do_not_type() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        app.handle_key_event(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        app.handle_key_event(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        app.handle_key_event(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
        match &app.mode {
            Mode::Input(form) => assert_eq!(form.buffer, "A"),
            Mode::Menu => panic!("form closed"),
        }
    }

    #[test]
    fn exit_entry_quits_with_farewell() {
        let mut app = app();
        press(&mut app, KeyCode::Char('6'));
        assert!(app.should_quit);
        assert!(app.session.has_exited());
    }

    #[test]
    fn ctrl_c_quits_from_input_mode() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        app.handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert!(!app.session.has_exited());
    }

    #[test]
    fn render_shows_menu_and_banner() {
        let mut app = app();
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Add Student"));
        assert!(screen.contains("Show Student Status"));
        assert!(screen.contains("Welcome to the Student Management System"));
        assert!(screen.contains("0 students"));
    }
}
