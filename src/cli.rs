use crate::error::ValidationError;
use crate::game_state::{
    Evaluation, GameBoardSnapshot, GameInterface, GameOutcome, GuessKind, INTRO_TEXT, TurnReport,
    UserAction, hang_status, parse_menu_choice,
};
use clap::Parser;
use std::io::BufRead;
use std::path::PathBuf;

/// Hangman console game
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use the full-screen terminal interface
    #[arg(long)]
    pub tui: bool,

    /// Seed for the word draw, for reproducible games
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Write log output to this file
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Log debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

const SEPARATOR_WIDTH: usize = 50;
const INVALID_OPTION_MSG: &str = "[Invalid Input!]. Please enter a valid number [1-3].";

// UI Input/Output functions

/// Read one trimmed line; `None` on EOF or read failure.
fn read_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => None,
        Ok(_) => Some(input.trim().to_string()),
        Err(e) => {
            log::warn!("Failed to read input: {e}");
            None
        }
    }
}

fn format_list<T: std::fmt::Display>(items: &[T]) -> String {
    let joined: Vec<String> = items.iter().map(|item| format!("'{item}'")).collect();
    format!("[{}]", joined.join(", "))
}

#[must_use]
pub fn format_board(board: &GameBoardSnapshot) -> String {
    let sep = "=".repeat(SEPARATOR_WIDTH);
    format!(
        "{sep}\n\nWORD TO SOLVE: \n\t{}\n\t-> Hint: {}\n\n\tGuesses left: {}\n\t\
         Failed Letter Matches: {}\n\tFailed Word Matches: {}\n\nHANG STATUS: {}\n\n{sep}\n",
        format_list(&board.cells),
        board.hint,
        board.guesses_left,
        format_list(&board.failed_letters),
        format_list(&board.failed_words),
        hang_status(board.hang_stages),
    )
}

#[must_use]
pub fn format_turn(report: &TurnReport) -> String {
    let verdict = match report.evaluation {
        Evaluation::Match => "was a match",
        Evaluation::Mismatch => "was NOT a match",
    };
    format!("Your guess '{}', {verdict}! Next guess...", report.guess)
}

#[must_use]
pub fn format_outcome(outcome: GameOutcome, word: &str) -> String {
    let solved = word.to_uppercase();
    match outcome {
        GameOutcome::Won => format!("You won!!! Word solved: {solved}"),
        GameOutcome::Lost => {
            format!("There are no guesses left. The word was {solved}. Thanks for playing")
        }
        GameOutcome::Quit => "You chose to quit the game. Until next time. Goodbye.".to_string(),
        GameOutcome::InProgress => String::new(),
    }
}

pub fn display_menu() {
    println!("Choose a number from the following 3 options:");
    println!("1. Guess a letter");
    println!("2. Guess the full word");
    println!("3. Quit the game");
}

pub fn read_menu_choice<R: BufRead>(reader: &mut R) -> Option<UserAction> {
    display_menu();
    println!("--> Your choice? ");
    let Some(input) = read_line(reader) else {
        return Some(UserAction::Quit);
    };
    match parse_menu_choice(&input) {
        Ok(action) => Some(action),
        Err(e) => {
            log::debug!("Menu selection rejected: {e}");
            println!("{INVALID_OPTION_MSG}\n");
            None
        }
    }
}

pub fn read_guess<R: BufRead>(reader: &mut R, kind: GuessKind) -> Option<String> {
    match kind {
        GuessKind::Letter => println!("\tGuess a letter >: "),
        GuessKind::Word => println!("\tGuess the full word: "),
    }
    read_line(reader)
}

pub fn read_play_again<R: BufRead>(reader: &mut R) -> bool {
    println!("\nPlay again? (y/n)");
    read_line(reader).is_some_and(|answer| matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}

/// Line-oriented implementation of [`GameInterface`] over any `BufRead`.
pub struct CliInterface<R: BufRead> {
    reader: R,
}

impl<R: BufRead> CliInterface<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> GameInterface for CliInterface<R> {
    fn display_intro(&mut self) {
        println!("{INTRO_TEXT}\n");
    }

    fn render(&mut self, board: &GameBoardSnapshot) {
        println!("{}", format_board(board));
    }

    fn read_menu_choice(&mut self) -> Option<UserAction> {
        read_menu_choice(&mut self.reader)
    }

    fn read_guess(&mut self, kind: GuessKind) -> Option<String> {
        read_guess(&mut self.reader, kind)
    }

    fn display_turn(&mut self, report: &TurnReport) {
        if !report.outcome.is_finished() {
            println!("{}\n", format_turn(report));
        }
    }

    fn display_validation_error(&mut self, error: &ValidationError) {
        println!("[Input Error]: {error}. Try again...\n");
    }

    fn report_outcome(&mut self, outcome: GameOutcome, word: &str) {
        println!("{}", format_outcome(outcome, word));
    }

    fn read_play_again(&mut self) -> bool {
        read_play_again(&mut self.reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::ValidInput;
    use std::io::Cursor;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["hangman"]);
        assert!(!cli.tui);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.log_file, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_with_flags() {
        let cli = Cli::parse_from([
            "hangman",
            "--tui",
            "--seed",
            "17",
            "--log-file",
            "/tmp/h.log",
            "-v",
        ]);
        assert!(cli.tui);
        assert_eq!(cli.seed, Some(17));
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/h.log")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_read_menu_choice_valid() {
        let mut reader = Cursor::new("2\n");
        assert_eq!(read_menu_choice(&mut reader), Some(UserAction::GuessWord));
    }

    #[test]
    fn test_read_menu_choice_not_a_number() {
        let mut reader = Cursor::new("abc\n");
        assert_eq!(read_menu_choice(&mut reader), None);
    }

    #[test]
    fn test_read_menu_choice_out_of_range() {
        let mut reader = Cursor::new("7\n");
        assert_eq!(read_menu_choice(&mut reader), None);
    }

    #[test]
    fn test_read_menu_choice_eof_quits() {
        let mut reader = Cursor::new("");
        assert_eq!(read_menu_choice(&mut reader), Some(UserAction::Quit));
    }

    #[test]
    fn test_read_guess_trims() {
        let mut reader = Cursor::new("  e  \n");
        assert_eq!(read_guess(&mut reader, GuessKind::Letter), Some("e".to_string()));
    }

    #[test]
    fn test_read_guess_eof() {
        let mut reader = Cursor::new("");
        assert_eq!(read_guess(&mut reader, GuessKind::Word), None);
    }

    #[test]
    fn test_read_play_again() {
        assert!(read_play_again(&mut Cursor::new("y\n")));
        assert!(read_play_again(&mut Cursor::new("YES\n")));
        assert!(!read_play_again(&mut Cursor::new("n\n")));
        assert!(!read_play_again(&mut Cursor::new("")));
    }

    #[test]
    fn test_format_board() {
        let board = GameBoardSnapshot {
            word_len: 4,
            hint: "What you see on roads".to_string(),
            cells: vec!['_', 'a', '_', '_'],
            guesses_left: 5,
            failed_letters: vec!['z'],
            failed_words: vec!["bars".to_string()],
            hang_stages: 2,
        };
        let text = format_board(&board);
        assert!(text.contains("['_', 'a', '_', '_']"));
        assert!(text.contains("-> Hint: What you see on roads"));
        assert!(text.contains("Guesses left: 5"));
        assert!(text.contains("Failed Letter Matches: ['z']"));
        assert!(text.contains("Failed Word Matches: ['bars']"));
        assert!(text.contains("HANG STATUS: H  A  __"));
    }

    #[test]
    fn test_format_turn() {
        let report = TurnReport {
            guess: ValidInput::Letter('q'),
            evaluation: Evaluation::Mismatch,
            newly_revealed: 0,
            guesses_left: 6,
            outcome: GameOutcome::InProgress,
        };
        assert_eq!(format_turn(&report), "Your guess 'q', was NOT a match! Next guess...");
    }

    #[test]
    fn test_format_outcome() {
        assert_eq!(format_outcome(GameOutcome::Won, "bear"), "You won!!! Word solved: BEAR");
        assert!(format_outcome(GameOutcome::Lost, "tree").contains("The word was TREE"));
        assert!(format_outcome(GameOutcome::Quit, "tree").contains("quit"));
    }
}
