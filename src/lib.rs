// Library interface for hangman
// This allows integration tests to access internal modules

pub mod budget;
pub mod cli;
pub mod error;
pub mod game_state;
pub mod ledger;
pub mod logging;
pub mod reveal;
pub mod tui;
pub mod wordbank;

// Re-export commonly used items for easier testing
pub use budget::AttemptBudget;
pub use error::{BudgetExhaustedError, MenuSelectionError, TurnError, ValidationError};
pub use game_state::{
    Evaluation, GameBoardSnapshot, GameEngine, GameInterface, GameOutcome, GuessKind, TurnReport,
    UserAction, ValidInput, game_loop, parse_menu_choice, play_session,
};
pub use ledger::GuessLedger;
pub use reveal::RevealState;
pub use wordbank::{WordBank, WordEntry};
