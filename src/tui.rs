//! TUI (Terminal User Interface) module for Hangman
//!
//! This module provides an interactive terminal interface using Ratatui.
//!
//! # State Machine
//! - `ChoosingAction` → `EnteringGuess` → back to `ChoosingAction`
//! - `GameOver` once a game ends; `N` starts another game, `ESC` leaves.
//! - `Farewell` after quitting; any key closes the screen.

use crate::error::ValidationError;
use crate::game_state::{
    Evaluation, GameBoardSnapshot, GameInterface, GameOutcome, GuessKind, INTRO_TEXT, TurnReport,
    UserAction, hang_status,
};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;

const MAX_GUESS_INPUT: usize = 32;

// Style constants for consistent UI
const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const FAILURE_STYLE: Style = Style::new().fg(Color::Red).add_modifier(Modifier::BOLD);
const INFO_STYLE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    ChoosingAction,
    EnteringGuess { kind: GuessKind },
    GameOver,
    Farewell,
}

/// Result of feeding one key to the current state.
#[derive(Debug, PartialEq, Eq)]
enum KeyResult {
    Pending,
    Action(UserAction),
    Rejected,
    Submitted(String),
    Closed,
    PlayAgain(bool),
}

/// Main TUI interface component.
///
/// Holds the last board snapshot and the text the player is typing; every
/// read redraws the whole frame.
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    state: TuiState,
    board: Option<GameBoardSnapshot>,
    current_input: String,
    message: String,
    message_style: Style,
    error_message: String,
    status: String,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            state: TuiState::ChoosingAction,
            board: None,
            current_input: String::new(),
            message: String::new(),
            message_style: MESSAGE_STYLE,
            error_message: String::new(),
            status: "Ready to start".to_string(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let state = self.state;
        let board = self.board.as_ref();
        let current_input = self.current_input.as_str();
        let message = (self.message.as_str(), self.message_style);
        let error_message = self.error_message.as_str();
        let status = self.status.as_str();

        self.terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),  // Title
                    Constraint::Length(10), // Game board
                    Constraint::Min(6),     // Messages
                    Constraint::Length(3),  // Input line
                    Constraint::Length(3),  // Status line
                    Constraint::Length(3),  // Instructions
                ])
                .split(f.area());

            render_title(f, chunks[0]);
            render_board(f, chunks[1], board);
            render_messages(f, chunks[2], message, error_message);
            render_input(f, chunks[3], state, current_input);
            render_status(f, chunks[4], status);
            render_instructions(f, chunks[5], state);
        })?;
        Ok(())
    }

    /// Log and handle draw errors appropriately
    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    /// Block until a key press that changes something. Input errors close
    /// the interface.
    fn next_key_result(&mut self) -> KeyResult {
        loop {
            if self.draw().is_err() {
                info_log!("next_key_result() - Draw failed, closing");
                return KeyResult::Closed;
            }
            let key = match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => key,
                Ok(other) => {
                    debug_log!("Ignoring event: {:?}", other);
                    continue;
                }
                Err(e) => {
                    log::warn!("Failed to read terminal event: {e}");
                    return KeyResult::Closed;
                }
            };
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return KeyResult::Closed;
            }
            match self.handle_key(key) {
                KeyResult::Pending => {}
                result => return result,
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> KeyResult {
        debug_log!("handle_key() - {:?} in {:?}", key.code, self.state);
        match self.state {
            TuiState::ChoosingAction => self.handle_menu_key(key),
            TuiState::EnteringGuess { kind } => self.handle_guess_key(key, kind),
            TuiState::GameOver => Self::handle_game_over_key(key),
            TuiState::Farewell => Self::handle_farewell_key(key),
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) -> KeyResult {
        match key.code {
            KeyCode::Char('1') => KeyResult::Action(UserAction::GuessLetter),
            KeyCode::Char('2') => KeyResult::Action(UserAction::GuessWord),
            KeyCode::Char('3') | KeyCode::Esc => KeyResult::Action(UserAction::Quit),
            KeyCode::Char(c) => {
                self.error_message = format!("'{c}' is not a valid option. Choose 1, 2 or 3.");
                KeyResult::Rejected
            }
            _ => KeyResult::Pending,
        }
    }

    fn handle_guess_key(&mut self, key: KeyEvent, kind: GuessKind) -> KeyResult {
        match key.code {
            KeyCode::Char(c)
                if !key.modifiers.contains(KeyModifiers::ALT)
                    && self.current_input.chars().count() < MAX_GUESS_INPUT =>
            {
                self.error_message.clear();
                self.current_input.push(c);
                KeyResult::Pending
            }
            KeyCode::Backspace => {
                self.current_input.pop();
                KeyResult::Pending
            }
            KeyCode::Enter if self.current_input.trim().is_empty() => {
                self.error_message = format!("Type your {kind} before pressing ENTER");
                KeyResult::Pending
            }
            KeyCode::Enter => KeyResult::Submitted(std::mem::take(&mut self.current_input)),
            KeyCode::Esc => KeyResult::Closed,
            _ => KeyResult::Pending,
        }
    }

    fn handle_game_over_key(key: KeyEvent) -> KeyResult {
        match key.code {
            KeyCode::Char('n' | 'N') => KeyResult::PlayAgain(true),
            KeyCode::Esc | KeyCode::Char('q' | 'Q') => KeyResult::PlayAgain(false),
            _ => KeyResult::Pending,
        }
    }

    fn handle_farewell_key(_key: KeyEvent) -> KeyResult {
        KeyResult::Closed
    }
}

/// Quitting leaves the session, so the final message must be acknowledged
/// before the alternate screen is torn down.
fn awaits_acknowledgement(outcome: GameOutcome) -> bool {
    outcome == GameOutcome::Quit
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("HANGMAN")
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, area);
}

fn render_board(f: &mut Frame, area: Rect, board: Option<&GameBoardSnapshot>) {
    let block = Block::default().title("Word to solve").borders(Borders::ALL);
    let Some(board) = board else {
        f.render_widget(Paragraph::new(INTRO_TEXT).block(block), area);
        return;
    };

    let mut cells = vec![Span::raw("  ")];
    for &c in &board.cells {
        let (bg, fg) = if c == '_' {
            (Color::DarkGray, Color::White)
        } else {
            (Color::Green, Color::Black)
        };
        cells.push(Span::styled(
            format!(" {} ", c.to_ascii_uppercase()),
            Style::default().fg(fg).bg(bg),
        ));
        cells.push(Span::raw(" "));
    }

    let failed_letters: Vec<String> = board.failed_letters.iter().map(char::to_string).collect();
    let lines = vec![
        Line::from(cells),
        Line::from(""),
        Line::from(vec![Span::styled("Hint: ", INFO_STYLE), Span::raw(board.hint.as_str())]),
        Line::from(format!("Guesses left: {}", board.guesses_left)),
        Line::from(format!("Failed letters: {}", failed_letters.join(", "))),
        Line::from(format!("Failed words: {}", board.failed_words.join(", "))),
        Line::from(vec![
            Span::styled("Hang status: ", INFO_STYLE),
            Span::styled(hang_status(board.hang_stages), FAILURE_STYLE),
        ]),
    ];
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_messages(f: &mut Frame, area: Rect, message: (&str, Style), error_message: &str) {
    let mut lines = Vec::new();
    if !message.0.is_empty() {
        lines.push(Line::from(vec![Span::styled(message.0, message.1)]));
    }
    if !error_message.is_empty() {
        lines.push(Line::from(vec![Span::styled(error_message, ERROR_STYLE)]));
    }
    let paragraph = Paragraph::new(lines)
        .block(Block::default().title("Information").borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, area: Rect, state: TuiState, current_input: &str) {
    let (title, text) = match state {
        TuiState::ChoosingAction => (
            "Your choice",
            "1. Guess a letter   2. Guess the full word   3. Quit the game".to_string(),
        ),
        TuiState::EnteringGuess { kind: GuessKind::Letter } => {
            ("Guess a letter", format!("> {current_input}_"))
        }
        TuiState::EnteringGuess { kind: GuessKind::Word } => {
            ("Guess the full word", format!("> {current_input}_"))
        }
        TuiState::GameOver | TuiState::Farewell => ("Game over", String::new()),
    };
    let paragraph = Paragraph::new(text).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_status(f: &mut Frame, area: Rect, status: &str) {
    let status_text = if status.is_empty() { "Ready" } else { status };
    let paragraph = Paragraph::new(status_text)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(paragraph, area);
}

fn render_instructions(f: &mut Frame, area: Rect, state: TuiState) {
    let text = match state {
        TuiState::ChoosingAction => "1/2/3: Choose an option | ESC: Quit",
        TuiState::EnteringGuess { .. } => {
            "Type your guess | ENTER: Submit | BACKSPACE: Delete | ESC: Quit"
        }
        TuiState::GameOver => "N: New Game | ESC: Quit",
        TuiState::Farewell => "Press any key to exit",
    };
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

impl GameInterface for TuiInterface {
    fn display_intro(&mut self) {
        self.message =
            "Welcome to Hangman! Read the hint, then guess a letter or the whole word.".to_string();
        self.message_style = MESSAGE_STYLE;
        self.draw_or_log();
    }

    fn render(&mut self, board: &GameBoardSnapshot) {
        if matches!(self.state, TuiState::GameOver | TuiState::Farewell) {
            // A fresh board after game over means a new game has started.
            self.message.clear();
            self.error_message.clear();
        }
        self.board = Some(board.clone());
        self.state = TuiState::ChoosingAction;
        self.status = format!("{} guesses left", board.guesses_left);
        self.draw_or_log();
    }

    fn read_menu_choice(&mut self) -> Option<UserAction> {
        self.state = TuiState::ChoosingAction;
        match self.next_key_result() {
            KeyResult::Action(action) => {
                self.error_message.clear();
                info_log!("read_menu_choice() - {:?}", action);
                Some(action)
            }
            KeyResult::Closed => Some(UserAction::Quit),
            _ => None,
        }
    }

    fn read_guess(&mut self, kind: GuessKind) -> Option<String> {
        self.state = TuiState::EnteringGuess { kind };
        self.current_input.clear();
        self.status = format!("Enter your {kind}");
        match self.next_key_result() {
            KeyResult::Submitted(guess) => {
                info_log!("read_guess() - Submitted '{}'", guess);
                Some(guess)
            }
            _ => None,
        }
    }

    fn display_turn(&mut self, report: &TurnReport) {
        self.error_message.clear();
        let (verdict, style) = match report.evaluation {
            Evaluation::Match => ("was a match", SUCCESS_STYLE),
            Evaluation::Mismatch => ("was NOT a match", FAILURE_STYLE),
        };
        self.message = format!("Your guess '{}' {verdict}!", report.guess);
        self.message_style = style;
        self.status = format!("{} guesses left", report.guesses_left);
        self.draw_or_log();
    }

    fn display_validation_error(&mut self, error: &ValidationError) {
        self.error_message = format!("[Input Error]: {error}. Try again...");
        self.draw_or_log();
    }

    fn report_outcome(&mut self, outcome: GameOutcome, word: &str) {
        self.state = TuiState::GameOver;
        let solved = word.to_uppercase();
        let (message, style) = match outcome {
            GameOutcome::Won => (format!("You won!!! Word solved: {solved}"), SUCCESS_STYLE),
            GameOutcome::Lost => (
                format!("No guesses left. The word was {solved}."),
                FAILURE_STYLE,
            ),
            GameOutcome::Quit => (
                format!("You quit. The word was {solved}. Goodbye."),
                MESSAGE_STYLE,
            ),
            GameOutcome::InProgress => (String::new(), MESSAGE_STYLE),
        };
        self.message = message;
        self.message_style = style;
        self.status = format!("Game over - {outcome}");
        if awaits_acknowledgement(outcome) {
            self.state = TuiState::Farewell;
            let _ = self.next_key_result();
        } else {
            self.draw_or_log();
        }
    }

    fn read_play_again(&mut self) -> bool {
        self.state = TuiState::GameOver;
        matches!(self.next_key_result(), KeyResult::PlayAgain(true))
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_only_quit_waits_for_acknowledgement() {
        assert!(awaits_acknowledgement(GameOutcome::Quit));
        assert!(!awaits_acknowledgement(GameOutcome::Won));
        assert!(!awaits_acknowledgement(GameOutcome::Lost));
    }

    #[test]
    fn test_farewell_closes_on_any_key() {
        for code in [KeyCode::Char('x'), KeyCode::Enter, KeyCode::Esc] {
            assert_eq!(TuiInterface::handle_farewell_key(press(code)), KeyResult::Closed);
        }
    }

    #[test]
    fn test_game_over_keys() {
        assert_eq!(
            TuiInterface::handle_game_over_key(press(KeyCode::Char('n'))),
            KeyResult::PlayAgain(true)
        );
        assert_eq!(
            TuiInterface::handle_game_over_key(press(KeyCode::Esc)),
            KeyResult::PlayAgain(false)
        );
        assert_eq!(
            TuiInterface::handle_game_over_key(press(KeyCode::Char('x'))),
            KeyResult::Pending
        );
    }
}
