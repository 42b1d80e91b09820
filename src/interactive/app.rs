//! TUI application state and logic

use crate::commands::find_solutions;
use crate::core::normalize;
use crate::game::Session;
use crate::validation::Verdict;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest input the text field accepts
const MAX_INPUT_LEN: usize = 32;

/// Application state
pub struct App {
    pub session: Session,
    pub input_buffer: String,
    pub alert: Option<Alert>,
    pub messages: Vec<Message>,
    /// Number of accepted words the current root allows
    pub solutions: usize,
    pub should_quit: bool,
}

/// Modal rejection notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(session: Session) -> Self {
        let mut app = Self {
            session,
            input_buffer: String::new(),
            alert: None,
            messages: vec![Message {
                text: "Make words from the letters of the root word!".to_string(),
                style: MessageStyle::Info,
            }],
            solutions: 0,
            should_quit: false,
        };
        app.count_solutions();
        app
    }

    fn count_solutions(&mut self) {
        self.solutions = find_solutions(
            self.session.round().root(),
            self.session.oracle(),
            self.session.language(),
        )
        .len();
    }

    /// Submit the text field
    ///
    /// Accepted words clear the field; rejections raise an alert and keep
    /// the text so it can be corrected.
    pub fn submit_input(&mut self) {
        let input = self.input_buffer.clone();

        match self.session.submit(&input) {
            Some(Verdict::Accept { score_delta }) => {
                self.input_buffer.clear();
                self.add_message(
                    &format!("+{score_delta} for '{}'", normalize(&input)),
                    MessageStyle::Success,
                );
            }
            Some(Verdict::Reject(reason)) => {
                self.alert = Some(Alert {
                    title: reason.title().to_string(),
                    message: reason.message(self.session.round().root()),
                });
                self.add_message(reason.title(), MessageStyle::Error);
            }
            None => {}
        }
    }

    pub fn new_round(&mut self) {
        self.session.new_round();
        self.input_buffer.clear();
        self.alert = None;
        self.count_solutions();

        let root = self.session.round().root().text().to_uppercase();
        self.add_message(&format!("New word: {root}"), MessageStyle::Info);
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Number of accepted words this round
    #[must_use]
    pub fn found(&self) -> usize {
        self.session.round().used_words().len()
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.alert.is_some() {
            // The alert swallows everything until dismissed
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dismiss_alert();
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_round();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.input_buffer.chars().count() < MAX_INPUT_LEN {
                    self.input_buffer.push(c);
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => {
                self.submit_input();
            }
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(score) => {
            println!("Final score: {score}");
            Ok(())
        }
        Err(err) => Err(err),
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<usize> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.session.round().score())
}
