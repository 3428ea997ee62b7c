use anyhow::{Context, Result};
use hangman::cli::{CliInterface, parse_cli};
use hangman::logging::{LogTarget, default_log_path, init_logging};
use hangman::tui::TuiInterface;
use hangman::{GameInterface, GameOutcome, WordBank, play_session};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

fn main() -> Result<()> {
    let cli = parse_cli();

    // The alternate screen owns stdout/stderr, so the TUI logs to a file.
    let log_target = match (&cli.log_file, cli.tui) {
        (Some(path), _) => LogTarget::File(path.clone()),
        (None, true) => LogTarget::File(default_log_path()),
        (None, false) => LogTarget::Stderr,
    };
    init_logging(&log_target, cli.verbose).context("Failed to initialise logging")?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let bank = WordBank::embedded();
    log::info!("Starting hangman with {} words (tui: {})", bank.len(), cli.tui);

    let mut interface: Box<dyn GameInterface> = if cli.tui {
        Box::new(TuiInterface::new().context("Failed to set up the terminal")?)
    } else {
        Box::new(CliInterface::new(io::stdin().lock()))
    };

    let outcomes = play_session(&bank, &mut rng, interface.as_mut())?;
    drop(interface);

    let won = outcomes.iter().filter(|o| **o == GameOutcome::Won).count();
    log::info!("Played {} game(s), won {won}", outcomes.len());
    Ok(())
}
