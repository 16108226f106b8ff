/// The arena tick loop, including the win screen and the game-over pause.

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::terminal;
use rand::Rng;

use crate::arena::compute::{apply_action, init_state, tick};
use crate::arena::display;
use crate::arena::keymap::{running_action, win_action, Action};
use crate::arena::state::ArenaState;
use crate::config::ArenaConfig;
use crate::entities::GameStatus;
use crate::term::{Key, KeySource};

/// Used when the terminal size cannot be read, e.g. output is not a tty.
const FALLBACK_SIZE: (u16, u16) = (80, 24);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// `x` during play or `q` on the win screen.
    Quit,
    /// Health ran out.
    Defeated,
    /// Ctrl+C.
    Interrupted,
}

fn screen_size() -> (u16, u16) {
    terminal::size().unwrap_or(FALLBACK_SIZE)
}

fn sleep_rest(frame_start: Instant, tick: Duration) {
    let elapsed = frame_start.elapsed();
    if elapsed < tick {
        std::thread::sleep(tick - elapsed);
    }
}

pub fn run<K, W, R>(cfg: &ArenaConfig, keys: &mut K, out: &mut W, rng: &mut R) -> Result<Outcome>
where
    K: KeySource,
    W: Write,
    R: Rng,
{
    log::info!(
        "arena starting on a {}x{} map with {} enemies",
        cfg.width,
        cfg.height,
        cfg.enemies
    );
    let state = init_state(cfg, rng).context("placing the player and enemies")?;
    play(cfg, state, keys, out, rng)
}

/// Drive the loop from an existing state until the session ends.  A win
/// restarts from a freshly generated map; a defeat shows the game-over
/// banner and waits for one key.
pub fn play<K, W, R>(
    cfg: &ArenaConfig,
    mut state: ArenaState,
    keys: &mut K,
    out: &mut W,
    rng: &mut R,
) -> Result<Outcome>
where
    K: KeySource,
    W: Write,
    R: Rng,
{
    let mut last_update = Instant::now();

    loop {
        let frame_start = Instant::now();

        match state.status {
            GameStatus::Running => {
                let dt = frame_start.duration_since(last_update).as_secs_f32();
                last_update = frame_start;

                let key = keys.poll_key().context("reading keyboard")?;
                match key.and_then(running_action) {
                    Some(Action::Interrupt) => return Ok(Outcome::Interrupted),
                    Some(Action::Quit) => return Ok(Outcome::Quit),
                    Some(action) => state = apply_action(&state, action),
                    None => {}
                }

                state = tick(&state, dt, rng);
                display::render(out, &state).context("drawing frame")?;
            }
            GameStatus::Win => {
                display::render_win(out, screen_size()).context("drawing win screen")?;
                let key = keys.poll_key().context("reading keyboard")?;
                match key.and_then(win_action) {
                    Some(Action::Restart) => {
                        log::info!("starting another round");
                        state = init_state(cfg, rng).context("placing the player and enemies")?;
                        last_update = Instant::now();
                    }
                    Some(Action::Quit) => return Ok(Outcome::Quit),
                    Some(Action::Interrupt) => return Ok(Outcome::Interrupted),
                    _ => {}
                }
            }
            GameStatus::GameOver => {
                display::render_game_over(out, &state, screen_size())
                    .context("drawing game over")?;
                return match wait_for_key(keys, cfg.tick)? {
                    Key::Interrupt => Ok(Outcome::Interrupted),
                    _ => Ok(Outcome::Defeated),
                };
            }
        }

        sleep_rest(frame_start, cfg.tick);
    }
}

/// Block (politely) until any key arrives and hand it back.
fn wait_for_key<K: KeySource>(keys: &mut K, tick: Duration) -> Result<Key> {
    loop {
        if let Some(key) = keys.poll_key().context("reading keyboard")? {
            return Ok(key);
        }
        std::thread::sleep(tick);
    }
}
