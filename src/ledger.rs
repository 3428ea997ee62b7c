/// Letters and whole words that were guessed and turned out wrong.
///
/// Entries keep the order in which they were recorded so the board can list
/// them as the player made them. Recording the same guess twice is a no-op.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuessLedger {
    failed_letters: Vec<char>,
    failed_words: Vec<String>,
}

impl GuessLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has_failed_letter(&self, letter: char) -> bool {
        self.failed_letters.contains(&letter)
    }

    #[must_use]
    pub fn has_failed_word(&self, word: &str) -> bool {
        self.failed_words.iter().any(|w| w == word)
    }

    pub fn record_failed_letter(&mut self, letter: char) {
        if !self.has_failed_letter(letter) {
            self.failed_letters.push(letter);
        }
    }

    pub fn record_failed_word(&mut self, word: &str) {
        if !self.has_failed_word(word) {
            self.failed_words.push(word.to_string());
        }
    }

    #[must_use]
    pub fn failed_letters(&self) -> &[char] {
        &self.failed_letters
    }

    #[must_use]
    pub fn failed_words(&self) -> &[String] {
        &self.failed_words
    }

    /// Total number of distinct failed guesses, letters and words combined.
    #[must_use]
    pub fn total_failures(&self) -> usize {
        self.failed_letters.len() + self.failed_words.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ledger() {
        let ledger = GuessLedger::new();
        assert!(!ledger.has_failed_letter('a'));
        assert!(!ledger.has_failed_word("bear"));
        assert_eq!(ledger.total_failures(), 0);
    }

    #[test]
    fn test_record_is_idempotent() {
        let mut ledger = GuessLedger::new();
        ledger.record_failed_letter('z');
        ledger.record_failed_letter('z');
        ledger.record_failed_word("wolf");
        ledger.record_failed_word("wolf");
        assert_eq!(ledger.failed_letters(), &['z']);
        assert_eq!(ledger.failed_words(), &["wolf".to_string()]);
        assert_eq!(ledger.total_failures(), 2);
    }

    #[test]
    fn test_insertion_order_kept() {
        let mut ledger = GuessLedger::new();
        for c in ['q', 'x', 'j'] {
            ledger.record_failed_letter(c);
        }
        assert_eq!(ledger.failed_letters(), &['q', 'x', 'j']);
    }

    #[test]
    fn test_letters_and_words_are_separate() {
        let mut ledger = GuessLedger::new();
        ledger.record_failed_word("a");
        assert!(ledger.has_failed_word("a"));
        assert!(!ledger.has_failed_letter('a'));
    }
}
