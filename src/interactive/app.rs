//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::game::{GameError, GameStatus, NUM_BOARDS};
use crate::storage::{Session, StateStore};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Boards per row of the grid
pub const GRID_WIDTH: usize = 8;

const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a, S: StateStore> {
    pub session: Session<'a, S>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    /// Board shown in the detail panel (0-based)
    pub selected: usize,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a, S: StateStore> App<'a, S> {
    #[must_use]
    pub fn new(session: Session<'a, S>) -> Self {
        let mut app = Self {
            session,
            input_buffer: String::new(),
            messages: Vec::new(),
            selected: 0,
            should_quit: false,
        };
        app.add_message(
            "Guess a word to play it on all 64 boards.",
            MessageStyle::Info,
        );
        if app.session.state().num_guesses() > 0 {
            app.add_message(
                &format!(
                    "Resumed {} after {} guesses",
                    app.session.state().title(),
                    app.session.state().num_guesses()
                ),
                MessageStyle::Info,
            );
        }
        app.announce_if_over();
        app
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::F(2) => self.new_practice(),
            KeyCode::F(3) => self.back_to_daily(),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                if self.input_buffer.len() < WORD_LENGTH {
                    self.input_buffer.push(c.to_ascii_uppercase());
                }
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Left => self.move_selection(-1, 0),
            KeyCode::Right => self.move_selection(1, 0),
            KeyCode::Up => self.move_selection(0, -1),
            KeyCode::Down => self.move_selection(0, 1),
            _ => {}
        }
    }

    fn move_selection(&mut self, dx: isize, dy: isize) {
        let width = GRID_WIDTH as isize;
        let row = (self.selected / GRID_WIDTH) as isize;
        let col = (self.selected % GRID_WIDTH) as isize;
        let rows = (NUM_BOARDS / GRID_WIDTH) as isize;

        let col = (col + dx).rem_euclid(width);
        let row = (row + dy).rem_euclid(rows);
        self.selected = (row * width + col) as usize;
    }

    /// Play the input buffer as a guess
    ///
    /// The buffer is kept when the guess is rejected so it can be corrected.
    pub fn submit(&mut self) {
        let input = self.input_buffer.clone();
        match self.session.submit_guess(&input) {
            Ok(outcome) => {
                self.input_buffer.clear();
                if let Some(board) = outcome.solved_board {
                    self.selected = board;
                    self.add_message(
                        &format!("{input} solved board {}!", board + 1),
                        MessageStyle::Success,
                    );
                }
                self.announce_if_over();
            }
            Err(GameError::GameOver) => {
                self.input_buffer.clear();
                self.add_message(
                    "The game is over. F2 starts a practice puzzle.",
                    MessageStyle::Error,
                );
            }
            Err(GameError::InvalidGuess(reason)) => {
                self.add_message(&reason.to_string(), MessageStyle::Error);
            }
        }
    }

    fn announce_if_over(&mut self) {
        match self.session.state().status() {
            GameStatus::Won => self.add_message(
                &format!(
                    "🎉 All {NUM_BOARDS} boards solved in {} guesses!",
                    self.session.state().num_guesses()
                ),
                MessageStyle::Success,
            ),
            GameStatus::Lost => self.add_message(
                &format!(
                    "Out of guesses with {}/{NUM_BOARDS} boards solved. Answers revealed.",
                    self.session.state().boards_completed()
                ),
                MessageStyle::Error,
            ),
            GameStatus::InProgress => {}
        }
    }

    pub fn new_practice(&mut self) {
        self.session.enter_practice();
        self.reset_view();
        self.add_message("New practice puzzle started!", MessageStyle::Info);
    }

    pub fn back_to_daily(&mut self) {
        if !self.session.state().is_practice() {
            self.add_message("Already playing the daily puzzle", MessageStyle::Info);
            return;
        }
        self.session.exit_practice();
        self.reset_view();
        let title = self.session.state().title();
        self.add_message(&format!("Back to {title}"), MessageStyle::Info);
        self.announce_if_over();
    }

    fn reset_view(&mut self) {
        self.input_buffer.clear();
        self.messages.clear();
        self.selected = 0;
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<S: StateStore>(app: App<'_, S>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "TUI exited with an error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend, S: StateStore>(
    terminal: &mut Terminal<B>,
    mut app: App<'_, S>,
) -> Result<()> {
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

    Ok(())
}
