/// Tags shared by both games: pure data, no logic beyond lookups.

pub const PLAYER_GLYPH: char = '@';
pub const ENEMY_GLYPH: char = 'E';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Faction {
    Player,
    Enemy,
}

/// Explicit role tag carried by every entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Player,
    Enemy,
    Projectile(Faction),
}

impl EntityKind {
    /// Which side the entity fights for.  Collisions only count between
    /// opposing factions.
    pub fn faction(self) -> Faction {
        match self {
            EntityKind::Player => Faction::Player,
            EntityKind::Enemy => Faction::Enemy,
            EntityKind::Projectile(f) => f,
        }
    }

    pub fn opposes(self, other: EntityKind) -> bool {
        self.faction() != other.faction()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    /// Arena only: every enemy is gone, waiting for restart or quit.
    Win,
    GameOver,
}
