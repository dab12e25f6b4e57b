//! TUI application state and logic

use crate::core::{Game, Outcome};
use crate::wordlists::{SpellChecker, WordSource};
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
use tracing::{error, info};

/// Longest word the input field accepts
const MAX_INPUT_LEN: usize = 32;

/// Application state
pub struct App<C: SpellChecker, W: WordSource> {
    pub game: Game<C, W>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub title: String,
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<C: SpellChecker, W: WordSource> App<C, W> {
    #[must_use]
    pub fn new(game: Game<C, W>) -> Self {
        let mut app = Self {
            game,
            input_buffer: String::new(),
            messages: Vec::new(),
            should_quit: false,
        };
        app.add_message(
            "Welcome!",
            "Make words from the letters of the root word.",
            MessageStyle::Info,
        );
        app
    }

    /// Submit the input buffer
    ///
    /// Accepted words clear the input. Rejections keep it so the player can edit.
    pub fn submit_input(&mut self) {
        let outcome = self.game.submit(&self.input_buffer);

        match outcome {
            Outcome::Accepted { word, points } => {
                self.input_buffer.clear();
                self.add_message(
                    &format!("+{points}"),
                    &format!("'{word}' accepted"),
                    MessageStyle::Success,
                );
            }
            Outcome::Rejected(reason) if reason.is_silent() => {}
            Outcome::Rejected(reason) => {
                self.add_message(reason.title(), reason.message(), MessageStyle::Error);
            }
        }
    }

    pub fn new_round(&mut self) {
        self.game.start_round();
        self.input_buffer.clear();
        self.messages.clear();
        let root = self.game.round().root_word().to_uppercase();
        self.add_message(
            "New round",
            &format!("Root word is {root}"),
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, title: &str, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            title: title.to_string(),
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.new_round();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char(c) => {
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
pub fn run_tui<C: SpellChecker, W: WordSource>(app: App<C, W>) -> Result<()> {
    info!("Starting TUI");

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

    if let Err(err) = res {
        error!(error = %err, "TUI stopped with an error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B, C, W>(terminal: &mut Terminal<B>, mut app: App<C, W>) -> Result<()>
where
    B: ratatui::backend::Backend,
    C: SpellChecker,
    W: WordSource,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    info!(stats = ?app.game.stats(), "TUI finished");
    Ok(())
}
