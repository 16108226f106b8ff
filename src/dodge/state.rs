/// Entity and game-state records for the dodge game, pure data only.

use std::time::Duration;

use crate::entities::{EntityKind, Faction, GameStatus, ENEMY_GLYPH, PLAYER_GLYPH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Arrow glyph a bullet travelling this way is drawn with.
    pub fn arrow(self) -> char {
        match self {
            Direction::Up => '↑',
            Direction::Down => '↓',
            Direction::Left => '←',
            Direction::Right => '→',
        }
    }
}

/// Player, enemy and bullet all share this shape; `kind` tells them apart
/// and only bullets carry a velocity.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub x: i32,
    pub y: i32,
    pub glyph: char,
    pub velocity: Option<(i32, i32)>,
    pub kind: EntityKind,
}

impl Entity {
    pub fn player(x: i32, y: i32) -> Self {
        Entity { x, y, glyph: PLAYER_GLYPH, velocity: None, kind: EntityKind::Player }
    }

    pub fn enemy(x: i32, y: i32) -> Self {
        Entity { x, y, glyph: ENEMY_GLYPH, velocity: None, kind: EntityKind::Enemy }
    }

    pub fn bullet(x: i32, y: i32, direction: Direction) -> Self {
        Entity {
            x,
            y,
            glyph: direction.arrow(),
            velocity: Some(direction.delta()),
            kind: EntityKind::Projectile(Faction::Player),
        }
    }

    pub fn same_cell(&self, other: &Entity) -> bool {
        self.x == other.x && self.y == other.y
    }
}

#[derive(Clone, Debug)]
pub struct DodgeState {
    pub player: Entity,
    pub enemies: Vec<Entity>,
    pub bullets: Vec<Entity>,
    pub score: u32,
    pub status: GameStatus,
    /// Game time of the most recent spawn (or of the start).
    pub last_spawn: Duration,
    pub width: u16,
    pub height: u16,
}

impl DodgeState {
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }
}
