use std::fmt;

pub const PLACEHOLDER: char = '_';

/// Which positions of the secret word the player has uncovered.
///
/// Cells only ever go from hidden to revealed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealState {
    word: Vec<char>,
    cells: Vec<Option<char>>,
}

impl RevealState {
    #[must_use]
    pub fn new(word: &str) -> Self {
        let word: Vec<char> = word.chars().collect();
        let cells = vec![None; word.len()];
        Self { word, cells }
    }

    /// Reveal every position holding `letter`. Returns how many cells were
    /// newly uncovered; zero when the letter is absent or already shown.
    pub fn apply_letter(&mut self, letter: char) -> usize {
        let mut revealed = 0;
        for (&wch, cell) in self.word.iter().zip(self.cells.iter_mut()) {
            if wch == letter && cell.is_none() {
                *cell = Some(wch);
                revealed += 1;
            }
        }
        revealed
    }

    #[must_use]
    pub fn is_revealed(&self, letter: char) -> bool {
        self.cells.contains(&Some(letter))
    }

    #[must_use]
    pub fn is_fully_revealed(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    #[must_use]
    pub fn cells(&self) -> &[Option<char>] {
        &self.cells
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// One character per position, with [`PLACEHOLDER`] for hidden cells.
    #[must_use]
    pub fn render(&self) -> Vec<char> {
        self.cells
            .iter()
            .map(|cell| cell.unwrap_or(PLACEHOLDER))
            .collect()
    }
}

impl fmt::Display for RevealState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.render().iter().map(char::to_string).collect();
        write!(f, "{}", rendered.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_hidden() {
        let state = RevealState::new("tree");
        assert_eq!(state.len(), 4);
        assert_eq!(state.render(), vec!['_'; 4]);
        assert!(!state.is_fully_revealed());
    }

    #[test]
    fn test_apply_letter_reveals_all_positions() {
        let mut state = RevealState::new("tree");
        assert_eq!(state.apply_letter('e'), 2);
        assert_eq!(state.render(), vec!['_', '_', 'e', 'e']);
        assert!(state.is_revealed('e'));
    }

    #[test]
    fn test_apply_missing_letter_is_noop() {
        let mut state = RevealState::new("bell");
        assert_eq!(state.apply_letter('z'), 0);
        assert_eq!(state.revealed_count(), 0);
    }

    #[test]
    fn test_reapplying_letter_reveals_nothing_new() {
        let mut state = RevealState::new("bell");
        state.apply_letter('l');
        assert_eq!(state.apply_letter('l'), 0);
        assert_eq!(state.revealed_count(), 2);
    }

    #[test]
    fn test_full_reveal_in_any_order() {
        let orders = [
            ['b', 'e', 'a', 'r'],
            ['r', 'a', 'e', 'b'],
            ['a', 'b', 'r', 'e'],
        ];
        for order in orders {
            let mut state = RevealState::new("bear");
            for c in order {
                state.apply_letter(c);
            }
            assert!(state.is_fully_revealed(), "order {order:?}");
        }
    }

    #[test]
    fn test_display_joins_cells() {
        let mut state = RevealState::new("cars");
        state.apply_letter('a');
        assert_eq!(state.to_string(), "_ a _ _");
    }
}
