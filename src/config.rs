/// Command-line arguments and the validated configs the games run with.
///
/// The `*Args` structs are what clap parses; `TryFrom` turns them into
/// `*Config` values whose invariants the game code relies on.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

// ── Defaults ─────────────────────────────────────────────────────────────────

pub const DEFAULT_WIDTH: u16 = 40;
pub const DEFAULT_HEIGHT: u16 = 20;
/// 50 ms ≈ 20 ticks per second.
pub const DEFAULT_TICK_MS: u64 = 50;
pub const DEFAULT_SPAWN_INTERVAL_MS: u64 = 1000;
pub const DEFAULT_ENEMIES: usize = 10;
/// Walls placed = width * height / density, so higher means fewer walls.
pub const DEFAULT_WALL_DENSITY: u32 = 30;
/// Largest accepted side.  The frame, status and hint rows are drawn below
/// the grid, so every row index has to stay well inside `u16`.
pub const MAX_GRID: u16 = 1000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid must be at least {min}x{min}, got {width}x{height}")]
    GridTooSmall { width: u16, height: u16, min: u16 },
    #[error("grid must be at most {max}x{max}, got {width}x{height}")]
    GridTooLarge { width: u16, height: u16, max: u16 },
    #[error("tick interval must be at least 1 ms")]
    ZeroTick,
    #[error("spawn interval must be at least 1 ms")]
    ZeroSpawnInterval,
    #[error("wall density must be at least 1")]
    ZeroWallDensity,
}

// ── dodge ────────────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "dodge", about = "Dodge the enemies, shoot them with arrows")]
pub struct DodgeArgs {
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u16,
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u16,
    /// Milliseconds per tick.
    #[arg(long, default_value_t = DEFAULT_TICK_MS)]
    pub tick_ms: u64,
    /// Milliseconds between enemy spawns.
    #[arg(long, default_value_t = DEFAULT_SPAWN_INTERVAL_MS)]
    pub spawn_interval_ms: u64,
    /// Seed for a reproducible run.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Write log output to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DodgeConfig {
    pub width: u16,
    pub height: u16,
    pub tick: Duration,
    pub spawn_interval: Duration,
    pub seed: Option<u64>,
}

impl Default for DodgeConfig {
    fn default() -> Self {
        DodgeConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick: Duration::from_millis(DEFAULT_TICK_MS),
            spawn_interval: Duration::from_millis(DEFAULT_SPAWN_INTERVAL_MS),
            seed: None,
        }
    }
}

impl TryFrom<&DodgeArgs> for DodgeConfig {
    type Error = ConfigError;

    fn try_from(args: &DodgeArgs) -> Result<Self, Self::Error> {
        check_grid(args.width, args.height, 1)?;
        if args.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        if args.spawn_interval_ms == 0 {
            return Err(ConfigError::ZeroSpawnInterval);
        }
        Ok(DodgeConfig {
            width: args.width,
            height: args.height,
            tick: Duration::from_millis(args.tick_ms),
            spawn_interval: Duration::from_millis(args.spawn_interval_ms),
            seed: args.seed,
        })
    }
}

// ── arena ────────────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(name = "arena", about = "Clear the walled arena of enemies")]
pub struct ArenaArgs {
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u16,
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u16,
    /// Milliseconds per tick.
    #[arg(long, default_value_t = DEFAULT_TICK_MS)]
    pub tick_ms: u64,
    /// Enemies placed at the start of each round.
    #[arg(long, default_value_t = DEFAULT_ENEMIES)]
    pub enemies: usize,
    /// Higher values mean fewer random walls.
    #[arg(long, default_value_t = DEFAULT_WALL_DENSITY)]
    pub wall_density: u32,
    /// Seed for a reproducible run.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Write log output to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArenaConfig {
    pub width: u16,
    pub height: u16,
    pub tick: Duration,
    pub enemies: usize,
    pub wall_density: u32,
    pub seed: Option<u64>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick: Duration::from_millis(DEFAULT_TICK_MS),
            enemies: DEFAULT_ENEMIES,
            wall_density: DEFAULT_WALL_DENSITY,
            seed: None,
        }
    }
}

impl TryFrom<&ArenaArgs> for ArenaConfig {
    type Error = ConfigError;

    fn try_from(args: &ArenaArgs) -> Result<Self, Self::Error> {
        // Border walls need at least one interior row and column.
        check_grid(args.width, args.height, 3)?;
        if args.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        if args.wall_density == 0 {
            return Err(ConfigError::ZeroWallDensity);
        }
        Ok(ArenaConfig {
            width: args.width,
            height: args.height,
            tick: Duration::from_millis(args.tick_ms),
            enemies: args.enemies,
            wall_density: args.wall_density,
            seed: args.seed,
        })
    }
}

fn check_grid(width: u16, height: u16, min: u16) -> Result<(), ConfigError> {
    if width < min || height < min {
        return Err(ConfigError::GridTooSmall { width, height, min });
    }
    if width > MAX_GRID || height > MAX_GRID {
        return Err(ConfigError::GridTooLarge { width, height, max: MAX_GRID });
    }
    Ok(())
}
