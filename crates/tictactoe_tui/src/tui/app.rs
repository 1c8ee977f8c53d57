//! Application state and logic.

use super::form::{Field, SetupForm};
use super::input::move_cursor;
use crate::{GameConfig, status_line};
use crossterm::event::KeyCode;
use tictactoe::{Session, SessionEvent, SessionObserver, Snapshot};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Forwards session events into the UI's channel.
struct EventForwarder(mpsc::UnboundedSender<SessionEvent>);

impl SessionObserver for EventForwarder {
    fn on_event(&mut self, event: &SessionEvent) {
        if self.0.send(event.clone()).is_err() {
            debug!("UI event receiver dropped");
        }
    }
}

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Entering names and symbols.
    Setup,
    /// Board on screen.
    Playing,
}

/// Main application state.
pub struct App {
    session: Session,
    form: SetupForm,
    screen: Screen,
    cursor: (usize, usize),
    status_message: String,
    form_error: Option<String>,
    events: mpsc::UnboundedReceiver<SessionEvent>,
    should_quit: bool,
}

impl App {
    /// Creates the app on the setup screen, pre-filled from config.
    pub fn new(config: &GameConfig) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut session = Session::new();
        session.subscribe(Box::new(EventForwarder(tx)));
        Self {
            session,
            form: SetupForm::from_config(config),
            screen: Screen::Setup,
            cursor: (1, 1),
            status_message: "Enter player names".to_string(),
            form_error: None,
            events: rx,
            should_quit: false,
        }
    }

    /// Current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Setup form state.
    pub fn form(&self) -> &SetupForm {
        &self.form
    }

    /// Validation message for the setup form, if any.
    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    /// Board to render.
    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    /// Cursor position on the board.
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// The session being played.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Submits the setup form and starts a game.
    #[instrument(skip(self))]
    pub fn submit_form(&mut self) {
        let (one, two) = match self.form.submit() {
            Ok(players) => players,
            Err(e) => {
                debug!("Setup form incomplete");
                self.form_error = Some(e.to_string());
                return;
            }
        };
        match self.session.start(one, two) {
            Ok(()) => {
                self.form_error = None;
                self.screen = Screen::Playing;
                self.cursor = (1, 1);
            }
            Err(e) => self.form_error = Some(e.to_string()),
        }
        self.drain_events();
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match self.screen {
            Screen::Setup => self.handle_setup_key(key),
            Screen::Playing => self.handle_playing_key(key),
        }
        self.drain_events();
    }

    fn handle_setup_key(&mut self, key: KeyCode) {
        match (key, self.form.focus()) {
            (KeyCode::Esc, _) => self.should_quit = true,
            (KeyCode::Tab | KeyCode::Down, _) => self.form.focus_next(),
            (KeyCode::BackTab | KeyCode::Up, _) => self.form.focus_prev(),
            (KeyCode::Enter, _) => self.submit_form(),
            (KeyCode::Left | KeyCode::Right | KeyCode::Char(' '), Field::Symbol) => {
                self.form.toggle_symbol()
            }
            (KeyCode::Backspace, _) => self.form.backspace(),
            (KeyCode::Char(c), _) => self.form.input(c),
            _ => {}
        }
    }

    fn handle_playing_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.session.reset(),
            KeyCode::Char('n') => {
                info!("Returning to player setup");
                self.screen = Screen::Setup;
                self.status_message = "Enter player names".to_string();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let (row, col) = self.cursor;
                if let Err(e) = self.session.apply_move(row, col) {
                    self.status_message = e.to_string();
                }
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
    }

    /// Applies queued session events to the status line.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            debug!(?event, "Handling session event");
            self.status_message = match &event {
                SessionEvent::Finished(outcome) => outcome.to_string(),
                SessionEvent::Started { .. }
                | SessionEvent::MoveApplied(_)
                | SessionEvent::Reset => status_line(&self.session),
            };
        }
    }
}
