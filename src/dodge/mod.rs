//! The simple variant: enemies pour in from the border once a second and
//! chase the player one tile per tick.  Any enemy reaching the player ends
//! the run; every arrow that hits scores 10.

pub mod compute;
pub mod display;
pub mod game;
pub mod keymap;
pub mod state;
