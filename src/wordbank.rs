use rand::Rng;
use rand::seq::IndexedRandom;

/// A secret word together with the clue shown to the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WordEntry {
    pub word: &'static str,
    pub hint: &'static str,
}

pub const EMBEDDED_WORDS: &[WordEntry] = &[
    WordEntry {
        word: "test",
        hint: "Before buying a device, you should do this",
    },
    WordEntry {
        word: "cars",
        hint: "What you see on roads",
    },
    WordEntry {
        word: "bell",
        hint: "This is a typical curve in statistics",
    },
    WordEntry {
        word: "bear",
        hint: "This eats salmons going up rivers",
    },
    WordEntry {
        word: "tree",
        hint: "You will find this in forests",
    },
];

/// Fixed pool of lowercase words, each paired with its hint.
#[derive(Clone, Debug)]
pub struct WordBank {
    entries: &'static [WordEntry],
}

impl WordBank {
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            entries: EMBEDDED_WORDS,
        }
    }

    /// Draw one entry uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> WordEntry {
        // The embedded pool is never empty, so the fallback is unreachable.
        self.entries
            .choose(rng)
            .copied()
            .unwrap_or(EMBEDDED_WORDS[0])
    }

    #[must_use]
    pub fn pick_random(&self) -> WordEntry {
        self.pick(&mut rand::rng())
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|entry| entry.word == word)
            .map(|entry| entry.hint)
    }

    pub fn entries(&self) -> impl Iterator<Item = &WordEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::embedded()
    }
}
