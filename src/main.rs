use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::info;

use snake_tui::config::{Args, TICK_INTERVAL};
use snake_tui::game::Game;
use snake_tui::input::command_for;
use snake_tui::logger;
use snake_tui::render::RenderSink;
use snake_tui::term::TermManager;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_path = args.log_path();
    logger::init(&log_path).with_context(|| format!("cannot log to {}", log_path.display()))?;

    let grid = args.grid()?;
    info!("Starting snake-tui on a {}x{} board, debug {}", grid.width(), grid.height(), args.debug);

    let mut game = Game::new(grid, args.seed).with_debug(args.debug);
    let mut term = TermManager::new(&grid).context("cannot start the game")?;

    let result = term.setup()
        .context("failed to prepare the terminal")
        .and_then(|()| play(&mut game, &mut term));
    // The terminal goes back to normal before anything is reported
    let restored = term.restore().context("failed to restore the terminal");
    first_failure(result, restored)?;

    println!("Game Over! Score: {}", game.score());
    Ok(())
}

/// A failure while playing wins over a failure while restoring the terminal.
fn first_failure(played: anyhow::Result<()>, restored: anyhow::Result<()>) -> anyhow::Result<()> {
    played.and(restored)
}

fn play(game: &mut Game, term: &mut TermManager) -> anyhow::Result<()> {
    term.render(&game.frame())?;
    let mut next_tick = Instant::now() + TICK_INTERVAL;

    while !game.is_over() {
        let timeout = next_tick.saturating_duration_since(Instant::now());

        for key_ev in term.read_key_events(timeout)? {
            if let Some(command) = command_for(&key_ev) {
                game.handle(command);
            }
        }

        if game.is_over() {
            break;
        }

        if Instant::now() >= next_tick {
            game.tick();
            term.render(&game.frame())?;
            next_tick += TICK_INTERVAL;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn play_failure_is_reported_over_restore_failure() {
        let err = first_failure(Err(anyhow!("render failed")), Err(anyhow!("restore failed"))).unwrap_err();

        assert_eq!(err.to_string(), "render failed");
    }

    #[test]
    fn restore_failure_is_reported_after_a_clean_game() {
        let err = first_failure(Ok(()), Err(anyhow!("restore failed"))).unwrap_err();

        assert_eq!(err.to_string(), "restore failed");
        assert!(first_failure(Ok(()), Ok(())).is_ok());
    }
}
