/// Pure game-logic functions for the arena.
///
/// Every public function takes an immutable reference to the current
/// `ArenaState` (plus elapsed seconds and an RNG handle where needed) and
/// returns a brand-new `ArenaState`.  Side effects are limited to the
/// injected RNG.

use std::ops::Range;

use rand::Rng;

use crate::arena::keymap::Action;
use crate::arena::map::{Map, SpawnError};
use crate::arena::state::{ArenaState, Enemy, Player, Projectile};
use crate::config::ArenaConfig;
use crate::entities::{EntityKind, Faction, GameStatus};

pub const AMMO_PER_KILL: u32 = 2;
pub const DAMAGE_PER_HIT: u32 = 10;
/// Uniform noise added to each axis of an enemy's heading.
pub const ENEMY_JITTER: f32 = 0.2;
/// Seconds between enemy shots, re-rolled after each one.
pub const SHOOT_DELAY: Range<f32> = 1.0..3.0;

/// Unit vector along `(dx, dy)`, or zero when there is no displacement.
fn unit(dx: f32, dy: f32) -> (f32, f32) {
    let dist = dx.hypot(dy);
    if dist > 0.0 {
        (dx / dist, dy / dist)
    } else {
        (0.0, 0.0)
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Generate a fresh map and populate it.
pub fn init_state(cfg: &ArenaConfig, rng: &mut impl Rng) -> Result<ArenaState, SpawnError> {
    let map = Map::generate(cfg.width, cfg.height, cfg.wall_density, rng);
    new_round(map, cfg.enemies, rng)
}

/// Place the player and `enemies` enemies on random floor tiles of `map`.
pub fn new_round(map: Map, enemies: usize, rng: &mut impl Rng) -> Result<ArenaState, SpawnError> {
    let (px, py) = map.random_floor(rng)?;
    let enemies = (0..enemies)
        .map(|_| {
            let (x, y) = map.random_floor(rng)?;
            Ok(Enemy::new(x, y, 0.0, rng.gen_range(SHOOT_DELAY)))
        })
        .collect::<Result<Vec<_>, SpawnError>>()?;
    log::info!("new round: player at ({px}, {py}), {} enemies", enemies.len());

    Ok(ArenaState {
        map,
        player: Player::new(px, py),
        enemies,
        projectiles: Vec::new(),
        clock: 0.0,
        status: GameStatus::Running,
    })
}

// ── Input-driven state transitions ──────────────────────────────────────────

/// Step one tile onto floor; walls and the grid edge block the move.
pub fn move_player(state: &ArenaState, dx: i32, dy: i32) -> ArenaState {
    let (x, y) = (state.player.x + dx, state.player.y + dy);
    if !state.map.is_floor(x, y) {
        return state.clone();
    }
    ArenaState {
        player: Player { x, y, ..state.player.clone() },
        ..state.clone()
    }
}

/// Fire from the player's tile.  Costs one ammo; with none left nothing
/// happens.
pub fn player_shoot(state: &ArenaState, dx: i32, dy: i32) -> ArenaState {
    if state.player.ammo == 0 {
        return state.clone();
    }
    let mut projectiles = state.projectiles.clone();
    projectiles.push(Projectile::new(
        state.player.x as f32,
        state.player.y as f32,
        dx as f32,
        dy as f32,
        Faction::Player,
    ));
    ArenaState {
        player: Player {
            ammo: state.player.ammo - 1,
            ..state.player.clone()
        },
        projectiles,
        ..state.clone()
    }
}

/// Restart and interrupt are screen-level decisions left to the game loop.
pub fn apply_action(state: &ArenaState, action: Action) -> ArenaState {
    match action {
        Action::Move(dx, dy) => move_player(state, dx, dy),
        Action::Shoot(dx, dy) => player_shoot(state, dx, dy),
        Action::Quit => ArenaState {
            status: GameStatus::GameOver,
            ..state.clone()
        },
        Action::Restart | Action::Interrupt => state.clone(),
    }
}

// ── Per-tick updates ─────────────────────────────────────────────────────────

/// Fly every projectile for `dt` seconds and resolve what it lands on.
///
/// A projectile is dropped when it leaves the grid or enters a wall.  An
/// enemy shot on the player's tile costs `DAMAGE_PER_HIT` health; a player
/// shot on an enemy's tile removes that one enemy and refunds ammo.
pub fn update_projectiles(state: &ArenaState, dt: f32) -> ArenaState {
    let (w, h) = (state.width() as f32, state.height() as f32);
    let mut player = state.player.clone();
    let mut enemies = state.enemies.clone();
    let mut projectiles = Vec::with_capacity(state.projectiles.len());
    let mut status = state.status;

    for projectile in &state.projectiles {
        let moved = projectile.advanced(dt);
        if moved.x < 0.0 || moved.x >= w || moved.y < 0.0 || moved.y >= h {
            continue;
        }
        let cell = moved.cell();
        if !state.map.is_floor(cell.0, cell.1) {
            continue;
        }

        if moved.kind.opposes(EntityKind::Player) && cell == (player.x, player.y) {
            player.health = player.health.saturating_sub(DAMAGE_PER_HIT);
            if player.health == 0 && status == GameStatus::Running {
                log::info!("player killed at {:.1}s", state.clock);
                status = GameStatus::GameOver;
            }
            continue;
        }
        if moved.kind.opposes(EntityKind::Enemy) {
            if let Some(hit) = enemies.iter().position(|e| e.cell() == cell) {
                enemies.remove(hit);
                player.ammo += AMMO_PER_KILL;
                log::debug!("enemy down at {cell:?}, {} left", enemies.len());
                continue;
            }
        }
        projectiles.push(moved);
    }

    ArenaState {
        player,
        enemies,
        projectiles,
        status,
        ..state.clone()
    }
}

/// Chase the player with some jitter, then fire if the shot timer is due.
/// A move whose destination tile is a wall or off the grid is skipped, but
/// the enemy may still shoot.
pub fn update_enemies(state: &ArenaState, dt: f32, rng: &mut impl Rng) -> ArenaState {
    let (px, py) = (state.player.x as f32, state.player.y as f32);
    let now = state.clock;
    let mut projectiles = state.projectiles.clone();

    let enemies = state
        .enemies
        .iter()
        .map(|e| {
            let (ux, uy) = unit(px - e.x, py - e.y);
            let dx = ux + rng.gen_range(-ENEMY_JITTER..=ENEMY_JITTER);
            let dy = uy + rng.gen_range(-ENEMY_JITTER..=ENEMY_JITTER);
            let nx = e.x + dx * e.speed * dt;
            let ny = e.y + dy * e.speed * dt;

            let mut enemy = e.clone();
            if state.map.is_floor(nx.floor() as i32, ny.floor() as i32) {
                enemy.x = nx;
                enemy.y = ny;
            }

            if now - enemy.last_shot >= enemy.shoot_delay {
                let (sx, sy) = unit(px - enemy.x, py - enemy.y);
                projectiles.push(Projectile::new(enemy.x, enemy.y, sx, sy, Faction::Enemy));
                enemy.last_shot = now;
                enemy.shoot_delay = rng.gen_range(SHOOT_DELAY);
            }
            enemy
        })
        .collect();

    ArenaState {
        enemies,
        projectiles,
        ..state.clone()
    }
}

/// One full tick of `dt` seconds: projectiles, then enemies, then the win
/// check.  Only a running game advances.
pub fn tick(state: &ArenaState, dt: f32, rng: &mut impl Rng) -> ArenaState {
    if state.status != GameStatus::Running {
        return state.clone();
    }
    let state = ArenaState {
        clock: state.clock + dt,
        ..state.clone()
    };
    let state = update_projectiles(&state, dt);
    let mut state = update_enemies(&state, dt, rng);

    if state.status == GameStatus::Running && state.enemies.is_empty() {
        log::info!("arena cleared at {:.1}s", state.clock);
        state.status = GameStatus::Win;
    }
    state
}
