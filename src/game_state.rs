use crate::budget::AttemptBudget;
use crate::error::{MenuSelectionError, TurnError, ValidationError};
use crate::ledger::GuessLedger;
use crate::reveal::RevealState;
use crate::wordbank::{WordBank, WordEntry};
use crate::{debug_log, info_log};
use rand::Rng;
use std::fmt;

/// Word spelled out, one letter per failed guess, on the hang-status line.
pub const HANG_WORD: &str = "HANGMAN";
pub const HANG_STAGES: usize = HANG_WORD.len();

pub const INTRO_TEXT: &str = "\
Welcome to the Hangman console game
This game consists in guessing each letter of a random word

How To Play
A. Read the '-> Hint' then try guessing one letter or the entire word
B. Any letter or word guess that is not a match is recorded in the
   'failed letter matches' or 'failed word matches' boxes.
C. For each mismatch, 'HANG STATUS' displays one letter from the word 'HANGMAN'.
D. A match or mismatch only applies to letters or words not already used.
   If a letter or word was already used, the game prompts for another
   guess without any penalty.

Game Board elements:
1. [Word To Solve]: the random word to guess
2. [Hint]: a clue relating to the word
3. [Guesses left]: number of guess attempts left
4. [Failed letter matches]: letter guesses that were not a match
5. [Failed word matches]: word guesses that were not a match
6. [HANG STATUS]: one letter from the word 'HANGMAN' for every failed guess";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GuessKind {
    Letter,
    Word,
}

impl fmt::Display for GuessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter => write!(f, "letter guess"),
            Self::Word => write!(f, "word guess"),
        }
    }
}

/// A guess that passed validation, already normalized to lowercase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidInput {
    Letter(char),
    Word(String),
}

impl ValidInput {
    #[must_use]
    pub fn kind(&self) -> GuessKind {
        match self {
            Self::Letter(_) => GuessKind::Letter,
            Self::Word(_) => GuessKind::Word,
        }
    }
}

impl fmt::Display for ValidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(c) => write!(f, "{c}"),
            Self::Word(w) => write!(f, "{w}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evaluation {
    Match,
    Mismatch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Won,
    Lost,
    Quit,
}

impl GameOutcome {
    #[must_use]
    pub fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
            Self::Quit => "quit",
        };
        write!(f, "{text}")
    }
}

/// Menu entries offered before each guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserAction {
    GuessLetter,
    GuessWord,
    Quit,
}

/// Parse a raw menu line into an action: `1` letter, `2` word, `3` quit.
pub fn parse_menu_choice(input: &str) -> Result<UserAction, MenuSelectionError> {
    let trimmed = input.trim();
    let number: i64 = trimmed
        .parse()
        .map_err(|_| MenuSelectionError::NotANumber(trimmed.to_string()))?;
    match number {
        1 => Ok(UserAction::GuessLetter),
        2 => Ok(UserAction::GuessWord),
        3 => Ok(UserAction::Quit),
        other => Err(MenuSelectionError::OutOfRange(other)),
    }
}

/// What happened to one evaluated guess.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub guess: ValidInput,
    pub evaluation: Evaluation,
    /// Cells uncovered by this guess.
    pub newly_revealed: usize,
    pub guesses_left: usize,
    pub outcome: GameOutcome,
}

/// Plain data handed to the interface for drawing the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameBoardSnapshot {
    pub word_len: usize,
    pub hint: String,
    pub cells: Vec<char>,
    pub guesses_left: usize,
    pub failed_letters: Vec<char>,
    pub failed_words: Vec<String>,
    pub hang_stages: usize,
}

/// Render the hang-status line: one letter of [`HANG_WORD`] per stage
/// reached, `__` for the rest.
#[must_use]
pub fn hang_status(stages: usize) -> String {
    let shown = stages.min(HANG_STAGES);
    let mut line: String = HANG_WORD.chars().take(shown).map(|c| format!("{c}  ")).collect();
    line.push_str(&"__  ".repeat(HANG_STAGES - shown));
    line
}

/// Trim and lowercase a guess one character at a time. Characters whose
/// lowercase form is more than one char are kept as typed, so the length
/// checked is the length the player entered.
fn normalize_guess(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|c| {
            let mut lower = c.to_lowercase();
            match (lower.next(), lower.next()) {
                (Some(single), None) => single,
                _ => c,
            }
        })
        .collect()
}

/// State machine for a single game. Dropping it discards the game.
#[derive(Clone, Debug)]
pub struct GameEngine {
    target: String,
    hint: String,
    reveal: RevealState,
    ledger: GuessLedger,
    budget: AttemptBudget,
    solved_by_word: bool,
    quit: bool,
}

impl GameEngine {
    #[must_use]
    pub fn new(word: &str, hint: &str) -> Self {
        let target = word.to_lowercase();
        let reveal = RevealState::new(&target);
        let budget = AttemptBudget::for_word_len(reveal.len());
        info_log!("New game: {} letters, {} attempts", reveal.len(), budget.remaining());
        Self {
            target,
            hint: hint.to_string(),
            reveal,
            ledger: GuessLedger::new(),
            budget,
            solved_by_word: false,
            quit: false,
        }
    }

    #[must_use]
    pub fn from_entry(entry: WordEntry) -> Self {
        Self::new(entry.word, entry.hint)
    }

    pub fn from_bank<R: Rng + ?Sized>(bank: &WordBank, rng: &mut R) -> Self {
        Self::from_entry(bank.pick(rng))
    }

    #[must_use]
    pub fn target_word(&self) -> &str {
        &self.target
    }

    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    #[must_use]
    pub fn reveal(&self) -> &RevealState {
        &self.reveal
    }

    #[must_use]
    pub fn ledger(&self) -> &GuessLedger {
        &self.ledger
    }

    #[must_use]
    pub fn budget(&self) -> &AttemptBudget {
        &self.budget
    }

    /// Derived from the current state; a full reveal wins even on the guess
    /// that exhausts the budget.
    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        if self.quit {
            GameOutcome::Quit
        } else if self.solved_by_word || self.reveal.is_fully_revealed() {
            GameOutcome::Won
        } else if self.budget.is_exhausted() {
            GameOutcome::Lost
        } else {
            GameOutcome::InProgress
        }
    }

    /// Failed guesses so far, capped at [`HANG_STAGES`].
    #[must_use]
    pub fn hang_stages(&self) -> usize {
        self.ledger.total_failures().min(HANG_STAGES)
    }

    #[must_use]
    pub fn snapshot(&self) -> GameBoardSnapshot {
        GameBoardSnapshot {
            word_len: self.reveal.len(),
            hint: self.hint.clone(),
            cells: self.reveal.render(),
            guesses_left: self.budget.remaining(),
            failed_letters: self.ledger.failed_letters().to_vec(),
            failed_words: self.ledger.failed_words().to_vec(),
            hang_stages: self.hang_stages(),
        }
    }

    /// Check a raw guess. Rules apply in order and the first failure wins:
    /// all digits, wrong length, already tried.
    pub fn validate(&self, input: &str, kind: GuessKind) -> Result<ValidInput, ValidationError> {
        let input = normalize_guess(input);

        if !input.is_empty() && input.chars().all(char::is_numeric) {
            return Err(ValidationError::NumericInput { input, kind });
        }

        let expected = match kind {
            GuessKind::Letter => 1,
            GuessKind::Word => self.reveal.len(),
        };
        if input.chars().count() != expected {
            return Err(ValidationError::LengthMismatch {
                input,
                kind,
                expected,
            });
        }

        match kind {
            GuessKind::Letter => {
                let mut chars = input.chars();
                match chars.next() {
                    Some(letter)
                        if !self.ledger.has_failed_letter(letter)
                            && !self.reveal.is_revealed(letter) =>
                    {
                        Ok(ValidInput::Letter(letter))
                    }
                    _ => Err(ValidationError::DuplicateGuess { input, kind }),
                }
            }
            GuessKind::Word if self.ledger.has_failed_word(&input) => {
                Err(ValidationError::DuplicateGuess { input, kind })
            }
            GuessKind::Word => Ok(ValidInput::Word(input)),
        }
    }

    #[must_use]
    pub fn evaluate(&self, guess: &ValidInput) -> Evaluation {
        let matched = match guess {
            ValidInput::Letter(c) => self.target.contains(*c),
            ValidInput::Word(w) => *w == self.target,
        };
        if matched {
            Evaluation::Match
        } else {
            Evaluation::Mismatch
        }
    }

    /// Validate, evaluate and apply one guess.
    ///
    /// Every evaluated guess costs one attempt, except an exact word match
    /// which wins on the spot.
    pub fn submit_guess(
        &mut self,
        input: &str,
        kind: GuessKind,
    ) -> Result<TurnReport, TurnError> {
        let current = self.outcome();
        if current.is_finished() {
            return Err(TurnError::GameFinished(current));
        }

        let guess = self.validate(input, kind)?;
        let evaluation = self.evaluate(&guess);
        debug_log!("Guess {:?} evaluated as {:?}", guess, evaluation);

        let newly_revealed = match (&guess, evaluation) {
            (ValidInput::Letter(c), Evaluation::Match) => self.reveal.apply_letter(*c),
            (ValidInput::Letter(c), Evaluation::Mismatch) => {
                self.ledger.record_failed_letter(*c);
                0
            }
            (ValidInput::Word(_), Evaluation::Match) => {
                let hidden_before = self.reveal.len() - self.reveal.revealed_count();
                for c in self.target.chars() {
                    self.reveal.apply_letter(c);
                }
                self.solved_by_word = true;
                info_log!("Word guessed outright");
                hidden_before
            }
            (ValidInput::Word(w), Evaluation::Mismatch) => {
                self.ledger.record_failed_word(w);
                0
            }
        };

        // An exact word match wins without spending an attempt.
        if !self.solved_by_word {
            self.budget.consume().inspect_err(|_| {
                log::error!("Attempt budget consumed past zero");
            })?;
        }

        let report = self.report(guess, evaluation, newly_revealed);
        if report.outcome.is_finished() {
            info_log!(
                "Game finished: {} with {} attempts left",
                report.outcome,
                report.guesses_left
            );
        }
        Ok(report)
    }

    /// End the game at the player's request.
    pub fn quit(&mut self) -> GameOutcome {
        if !self.outcome().is_finished() {
            self.quit = true;
        }
        self.outcome()
    }

    fn report(
        &self,
        guess: ValidInput,
        evaluation: Evaluation,
        newly_revealed: usize,
    ) -> TurnReport {
        TurnReport {
            guess,
            evaluation,
            newly_revealed,
            guesses_left: self.budget.remaining(),
            outcome: self.outcome(),
        }
    }
}

/// The I/O boundary: collects raw input and displays plain game data.
pub trait GameInterface {
    fn display_intro(&mut self);

    fn render(&mut self, board: &GameBoardSnapshot);

    /// Ask for a menu action. `None` means the input was rejected and the
    /// caller should prompt again; closed input should yield `Quit`.
    fn read_menu_choice(&mut self) -> Option<UserAction>;

    /// Raw guess text, or `None` when input is closed.
    fn read_guess(&mut self, kind: GuessKind) -> Option<String>;

    fn display_turn(&mut self, report: &TurnReport);

    fn display_validation_error(&mut self, error: &ValidationError);

    fn report_outcome(&mut self, outcome: GameOutcome, word: &str);

    fn read_play_again(&mut self) -> bool;
}

/// Drive one game to completion through `interface`.
pub fn game_loop<I: GameInterface + ?Sized>(
    engine: &mut GameEngine,
    interface: &mut I,
) -> Result<GameOutcome, TurnError> {
    loop {
        interface.render(&engine.snapshot());

        let Some(action) = interface.read_menu_choice() else {
            continue;
        };
        debug_log!("Menu action: {:?}", action);

        let kind = match action {
            UserAction::GuessLetter => GuessKind::Letter,
            UserAction::GuessWord => GuessKind::Word,
            UserAction::Quit => return Ok(finish_by_quit(engine, interface)),
        };

        let Some(raw) = interface.read_guess(kind) else {
            return Ok(finish_by_quit(engine, interface));
        };

        match engine.submit_guess(&raw, kind) {
            Ok(report) => {
                interface.display_turn(&report);
                if report.outcome.is_finished() {
                    interface.report_outcome(report.outcome, engine.target_word());
                    return Ok(report.outcome);
                }
            }
            Err(TurnError::Invalid(err)) => {
                debug_log!("Rejected guess: {}", err);
                interface.display_validation_error(&err);
            }
            Err(err) => {
                log::error!("Game loop aborted: {err}");
                return Err(err);
            }
        }
    }
}

fn finish_by_quit<I: GameInterface + ?Sized>(
    engine: &mut GameEngine,
    interface: &mut I,
) -> GameOutcome {
    let outcome = engine.quit();
    info_log!("Player quit");
    interface.report_outcome(outcome, engine.target_word());
    outcome
}

/// Play games back to back until the player quits or declines another
/// round. Returns the outcome of every game played.
pub fn play_session<I, R>(
    bank: &WordBank,
    rng: &mut R,
    interface: &mut I,
) -> Result<Vec<GameOutcome>, TurnError>
where
    I: GameInterface + ?Sized,
    R: Rng + ?Sized,
{
    interface.display_intro();
    let mut outcomes = Vec::new();
    loop {
        let mut engine = GameEngine::from_bank(bank, rng);
        let outcome = game_loop(&mut engine, interface)?;
        outcomes.push(outcome);
        if outcome == GameOutcome::Quit || !interface.read_play_again() {
            info_log!("Session over after {} game(s)", outcomes.len());
            return Ok(outcomes);
        }
    }
}
