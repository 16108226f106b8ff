//! Two terminal shooters sharing one crate.
//!
//! * [`dodge`]: survive enemies spawning on the border, shoot them with
//!   direction arrows.
//! * [`arena`]: clear a walled map of shooting enemies with limited ammo.
//!
//! Game logic lives in pure `compute` modules; terminal I/O is confined to the
//! `display`, `game` and [`term`] modules.

pub mod arena;
pub mod config;
pub mod dodge;
pub mod entities;
pub mod logging;
pub mod term;
