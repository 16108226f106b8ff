//! The richer variant: a walled arena, a fixed squad of enemies that chase
//! with jitter and shoot back, limited ammo, health, and a win screen that
//! can start a fresh round.

pub mod compute;
pub mod display;
pub mod game;
pub mod keymap;
pub mod map;
pub mod state;
