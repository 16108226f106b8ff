/// Entity and game-state records for the arena, pure data only.

use crate::arena::map::Map;
use crate::entities::{EntityKind, Faction, GameStatus};

pub const PLAYER_HEALTH: u32 = 100;
pub const PLAYER_AMMO: u32 = 10;
/// Tiles per second.
pub const ENEMY_SPEED: f32 = 0.5;
/// Tiles per second, per unit of direction.
pub const PROJECTILE_SPEED: f32 = 2.0;
pub const PLAYER_SHOT_GLYPH: char = '*';
pub const ENEMY_SHOT_GLYPH: char = '+';

/// The player always sits on a whole tile.
#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    pub health: u32,
    pub ammo: u32,
}

impl Player {
    pub fn new(x: i32, y: i32) -> Self {
        Player { x, y, health: PLAYER_HEALTH, ammo: PLAYER_AMMO }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    /// Game-clock time of this enemy's last shot.
    pub last_shot: f32,
    /// Seconds to wait after `last_shot`; re-rolled after every shot.
    pub shoot_delay: f32,
}

impl Enemy {
    pub fn new(x: i32, y: i32, now: f32, shoot_delay: f32) -> Self {
        Enemy {
            x: x as f32,
            y: y as f32,
            speed: ENEMY_SPEED,
            last_shot: now,
            shoot_delay,
        }
    }

    pub fn cell(&self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub speed: f32,
    pub kind: EntityKind,
}

impl Projectile {
    pub fn new(x: f32, y: f32, dx: f32, dy: f32, faction: Faction) -> Self {
        Projectile {
            x,
            y,
            dx,
            dy,
            speed: PROJECTILE_SPEED,
            kind: EntityKind::Projectile(faction),
        }
    }

    pub fn faction(&self) -> Faction {
        self.kind.faction()
    }

    pub fn glyph(&self) -> char {
        match self.faction() {
            Faction::Player => PLAYER_SHOT_GLYPH,
            Faction::Enemy => ENEMY_SHOT_GLYPH,
        }
    }

    pub fn cell(&self) -> (i32, i32) {
        (self.x.floor() as i32, self.y.floor() as i32)
    }

    /// Where the projectile is after `dt` seconds of flight.
    pub fn advanced(&self, dt: f32) -> Projectile {
        Projectile {
            x: self.x + self.dx * self.speed * dt,
            y: self.y + self.dy * self.speed * dt,
            ..self.clone()
        }
    }
}

#[derive(Clone, Debug)]
pub struct ArenaState {
    pub map: Map,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    /// Seconds of game time since the round started.
    pub clock: f32,
    pub status: GameStatus,
}

impl ArenaState {
    pub fn width(&self) -> u16 {
        self.map.width()
    }

    pub fn height(&self) -> u16 {
        self.map.height()
    }
}
