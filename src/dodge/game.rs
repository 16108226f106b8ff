/// The dodge tick loop: one key, one update, one frame, then sleep out the
/// rest of the tick.

use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::Rng;

use crate::config::DodgeConfig;
use crate::dodge::compute::{apply_action, init_state, tick};
use crate::dodge::display;
use crate::dodge::keymap::{action_for, Action};
use crate::entities::GameStatus;
use crate::term::KeySource;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Caught by an enemy or quit with `q`.
    Finished { score: u32 },
    /// Ctrl+C.
    Interrupted,
}

pub fn run<K, W, R>(cfg: &DodgeConfig, keys: &mut K, out: &mut W, rng: &mut R) -> Result<Outcome>
where
    K: KeySource,
    W: Write,
    R: Rng,
{
    log::info!("dodge starting on a {}x{} grid", cfg.width, cfg.height);
    let mut state = init_state(cfg.width, cfg.height);
    let started = Instant::now();

    while state.status == GameStatus::Running {
        let frame_start = Instant::now();

        if let Some(key) = keys.poll_key().context("reading keyboard")? {
            match action_for(key) {
                Some(Action::Interrupt) => return Ok(Outcome::Interrupted),
                Some(action) => state = apply_action(&state, action),
                None => {}
            }
        }
        if state.status != GameStatus::Running {
            break;
        }

        state = tick(&state, started.elapsed(), cfg.spawn_interval, rng);
        display::render(out, &state).context("drawing frame")?;

        let elapsed = frame_start.elapsed();
        if elapsed < cfg.tick {
            std::thread::sleep(cfg.tick - elapsed);
        }
    }

    Ok(Outcome::Finished { score: state.score })
}
