use crate::error::BudgetExhaustedError;

/// Guesses allowed for short words.
pub const MIN_ATTEMPTS: usize = 7;

/// Remaining guesses before the game is forced to end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttemptBudget {
    remaining: usize,
}

impl AttemptBudget {
    /// Budget for a secret word of `len` letters: `max(7, len)`.
    #[must_use]
    pub fn for_word_len(len: usize) -> Self {
        Self {
            remaining: len.max(MIN_ATTEMPTS),
        }
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    pub fn consume(&mut self) -> Result<(), BudgetExhaustedError> {
        self.remaining = self.remaining.checked_sub(1).ok_or(BudgetExhaustedError)?;
        Ok(())
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_words_get_minimum() {
        assert_eq!(AttemptBudget::for_word_len(1).remaining(), 7);
        assert_eq!(AttemptBudget::for_word_len(4).remaining(), 7);
        assert_eq!(AttemptBudget::for_word_len(7).remaining(), 7);
    }

    #[test]
    fn test_long_words_get_their_length() {
        assert_eq!(AttemptBudget::for_word_len(8).remaining(), 8);
        assert_eq!(AttemptBudget::for_word_len(12).remaining(), 12);
    }

    #[test]
    fn test_consume_until_exhausted() {
        let mut budget = AttemptBudget::for_word_len(4);
        for expected in (0..7).rev() {
            assert!(budget.consume().is_ok());
            assert_eq!(budget.remaining(), expected);
        }
        assert!(budget.is_exhausted());
        assert_eq!(budget.consume(), Err(BudgetExhaustedError));
        assert_eq!(budget.remaining(), 0);
    }
}
