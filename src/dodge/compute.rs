/// Pure game-logic functions for the dodge game.
///
/// Every public function takes an immutable reference to the current
/// `DodgeState` (and, where needed, the game time and an RNG handle) and
/// returns a brand-new `DodgeState`.

use std::time::Duration;

use rand::Rng;

use crate::dodge::keymap::Action;
use crate::dodge::state::{Direction, DodgeState, Entity};
use crate::entities::GameStatus;

pub const SCORE_PER_KILL: u32 = 10;

// ── Constructors ─────────────────────────────────────────────────────────────

/// Player in the middle of an empty grid.
pub fn init_state(width: u16, height: u16) -> DodgeState {
    DodgeState {
        player: Entity::player((width / 2) as i32, (height / 2) as i32),
        enemies: Vec::new(),
        bullets: Vec::new(),
        score: 0,
        status: GameStatus::Running,
        last_spawn: Duration::ZERO,
        width,
        height,
    }
}

// ── Input-driven state transitions ──────────────────────────────────────────

/// Step the player one tile; steps off the grid are ignored.
pub fn move_player(state: &DodgeState, dx: i32, dy: i32) -> DodgeState {
    let (x, y) = (state.player.x + dx, state.player.y + dy);
    if !state.contains(x, y) {
        return state.clone();
    }
    DodgeState {
        player: Entity { x, y, ..state.player.clone() },
        ..state.clone()
    }
}

/// Fire a bullet from the cell next to the player.  A bullet that would
/// start off the grid is never created.
pub fn player_shoot(state: &DodgeState, direction: Direction) -> DodgeState {
    let (dx, dy) = direction.delta();
    let (x, y) = (state.player.x + dx, state.player.y + dy);
    if !state.contains(x, y) {
        return state.clone();
    }
    let mut bullets = state.bullets.clone();
    bullets.push(Entity::bullet(x, y, direction));
    DodgeState { bullets, ..state.clone() }
}

pub fn apply_action(state: &DodgeState, action: Action) -> DodgeState {
    match action {
        Action::Move(dx, dy) => move_player(state, dx, dy),
        Action::Shoot(direction) => player_shoot(state, direction),
        Action::Quit | Action::Interrupt => DodgeState {
            status: GameStatus::GameOver,
            ..state.clone()
        },
    }
}

// ── Per-tick updates ─────────────────────────────────────────────────────────

/// Spawn one enemy on a random border cell if `interval` has passed since
/// the last spawn.
pub fn spawn_enemy(
    state: &DodgeState,
    now: Duration,
    interval: Duration,
    rng: &mut impl Rng,
) -> DodgeState {
    if now.saturating_sub(state.last_spawn) < interval {
        return state.clone();
    }
    let (w, h) = (state.width as i32, state.height as i32);
    let (x, y) = match rng.gen_range(0..4) {
        0 => (rng.gen_range(0..w), 0),
        1 => (rng.gen_range(0..w), h - 1),
        2 => (0, rng.gen_range(0..h)),
        _ => (w - 1, rng.gen_range(0..h)),
    };
    log::debug!("enemy spawned at ({x}, {y})");

    let mut enemies = state.enemies.clone();
    enemies.push(Entity::enemy(x, y));
    DodgeState {
        enemies,
        last_spawn: now,
        ..state.clone()
    }
}

/// Move every enemy one step along the rounded unit vector toward the
/// player.  An enemy ending on the player's cell ends the game.
pub fn move_enemies(state: &DodgeState) -> DodgeState {
    let player = &state.player;
    let enemies: Vec<Entity> = state
        .enemies
        .iter()
        .map(|e| {
            let dx = (player.x - e.x) as f64;
            let dy = (player.y - e.y) as f64;
            let dist = dx.hypot(dy);
            if dist == 0.0 {
                return e.clone();
            }
            Entity {
                x: e.x + (dx / dist).round() as i32,
                y: e.y + (dy / dist).round() as i32,
                ..e.clone()
            }
        })
        .collect();

    let caught = enemies.iter().any(|e| e.same_cell(player));
    if caught {
        log::info!("player caught, final score {}", state.score);
    }
    DodgeState {
        enemies,
        status: if caught { GameStatus::GameOver } else { state.status },
        ..state.clone()
    }
}

/// Advance bullets one tile.  Bullets leaving the grid disappear; a bullet
/// landing on an enemy removes that one enemy and itself.
pub fn update_bullets(state: &DodgeState) -> DodgeState {
    let mut enemies = state.enemies.clone();
    let mut bullets = Vec::with_capacity(state.bullets.len());
    let mut score = state.score;

    for bullet in &state.bullets {
        let (dx, dy) = bullet.velocity.unwrap_or((0, 0));
        let moved = Entity {
            x: bullet.x + dx,
            y: bullet.y + dy,
            ..bullet.clone()
        };
        if !state.contains(moved.x, moved.y) {
            continue;
        }
        if let Some(hit) = enemies.iter().position(|e| e.same_cell(&moved)) {
            enemies.remove(hit);
            score += SCORE_PER_KILL;
            log::debug!("enemy shot at ({}, {})", moved.x, moved.y);
            continue;
        }
        bullets.push(moved);
    }

    DodgeState {
        enemies,
        bullets,
        score,
        ..state.clone()
    }
}

/// One full tick: spawn, chase, then bullets.  A finished game is returned
/// unchanged.
pub fn tick(
    state: &DodgeState,
    now: Duration,
    spawn_interval: Duration,
    rng: &mut impl Rng,
) -> DodgeState {
    if state.status != GameStatus::Running {
        return state.clone();
    }
    let state = spawn_enemy(state, now, spawn_interval, rng);
    let state = move_enemies(&state);
    update_bullets(&state)
}
