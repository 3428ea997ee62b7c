use crate::game_state::{GameOutcome, GuessKind};
use thiserror::Error;

/// Reasons a guess is rejected before it is evaluated. Rejected guesses
/// never touch the ledger or the attempt budget.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("your {kind}, [{input}], should not be/contain any numbers")]
    NumericInput { input: String, kind: GuessKind },
    #[error(
        "your {kind}, [{input}], is {} letters long vs {expected}",
        .input.chars().count()
    )]
    LengthMismatch {
        input: String,
        kind: GuessKind,
        expected: usize,
    },
    #[error("your {kind}, [{input}], has already been used")]
    DuplicateGuess { input: String, kind: GuessKind },
}

impl ValidationError {
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            Self::NumericInput { input, .. }
            | Self::LengthMismatch { input, .. }
            | Self::DuplicateGuess { input, .. } => input,
        }
    }

    #[must_use]
    pub fn kind(&self) -> GuessKind {
        match self {
            Self::NumericInput { kind, .. }
            | Self::LengthMismatch { kind, .. }
            | Self::DuplicateGuess { kind, .. } => *kind,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MenuSelectionError {
    #[error("[{0}] is not a number")]
    NotANumber(String),
    #[error("{0} is not one of the menu options")]
    OutOfRange(i64),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("attempt budget already exhausted")]
pub struct BudgetExhaustedError;

/// Everything that can go wrong when submitting a guess to the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TurnError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    BudgetExhausted(#[from] BudgetExhaustedError),
    #[error("the game has already finished: {0}")]
    GameFinished(GameOutcome),
}

impl TurnError {
    /// Only validation failures are recoverable by re-prompting.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let numeric = ValidationError::NumericInput {
            input: "42".to_string(),
            kind: GuessKind::Letter,
        };
        assert_eq!(
            numeric.to_string(),
            "your letter guess, [42], should not be/contain any numbers"
        );

        let length = ValidationError::LengthMismatch {
            input: "bears".to_string(),
            kind: GuessKind::Word,
            expected: 4,
        };
        assert_eq!(
            length.to_string(),
            "your word guess, [bears], is 5 letters long vs 4"
        );
    }

    #[test]
    fn test_validation_error_accessors() {
        let err = ValidationError::DuplicateGuess {
            input: "z".to_string(),
            kind: GuessKind::Letter,
        };
        assert_eq!(err.input(), "z");
        assert_eq!(err.kind(), GuessKind::Letter);
    }

    #[test]
    fn test_turn_error_recoverability() {
        let invalid: TurnError = ValidationError::NumericInput {
            input: "1".to_string(),
            kind: GuessKind::Word,
        }
        .into();
        assert!(invalid.is_recoverable());
        assert!(!TurnError::from(BudgetExhaustedError).is_recoverable());
        assert!(!TurnError::GameFinished(GameOutcome::Won).is_recoverable());
    }
}
