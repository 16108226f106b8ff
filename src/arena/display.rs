/// Rendering layer for the arena. All terminal output lives here.
///
/// `cells` and `status_line` are pure views of the state; the `render*`
/// functions translate them into crossterm commands.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    terminal, QueueableCommand,
};

use crate::arena::map::Tile;
use crate::arena::state::{ArenaState, ENEMY_SHOT_GLYPH, PLAYER_SHOT_GLYPH};
use crate::entities::{Faction, ENEMY_GLYPH, PLAYER_GLYPH};

pub const WIN_MESSAGE: &str = "You Win!";
pub const PLAY_AGAIN_MESSAGE: &str = "Press 'y' to play again or 'q' to quit";
pub const GAME_OVER_MESSAGE: &str = "Game Over";
pub const PRESS_ANY_KEY: &str = "Press any key to exit";

/// What occupies a cell, which decides both the character and its colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Floor,
    Wall,
    Player,
    Enemy,
    PlayerShot,
    EnemyShot,
}

impl Glyph {
    pub fn ch(self) -> char {
        match self {
            Glyph::Floor => Tile::Floor.glyph(),
            Glyph::Wall => Tile::Wall.glyph(),
            Glyph::Player => PLAYER_GLYPH,
            Glyph::Enemy => ENEMY_GLYPH,
            Glyph::PlayerShot => PLAYER_SHOT_GLYPH,
            Glyph::EnemyShot => ENEMY_SHOT_GLYPH,
        }
    }

    fn color(self) -> Color {
        match self {
            Glyph::Floor => Color::DarkGrey,
            Glyph::Wall => Color::Cyan,
            Glyph::Player => Color::Green,
            Glyph::Enemy => Color::Red,
            Glyph::PlayerShot => Color::Yellow,
            Glyph::EnemyShot => Color::Magenta,
        }
    }
}

const C_STATUS: Color = Color::Green;
const C_WIN: Color = Color::Green;
const C_GAME_OVER: Color = Color::Red;

fn put(rows: &mut [Vec<Glyph>], (x, y): (i32, i32), glyph: Glyph) {
    if x < 0 || y < 0 {
        return;
    }
    if let Some(cell) = rows.get_mut(y as usize).and_then(|r| r.get_mut(x as usize)) {
        *cell = glyph;
    }
}

/// The map with every live entity overlaid: projectiles, then enemies, then
/// the player on top.
pub fn cells(state: &ArenaState) -> Vec<Vec<Glyph>> {
    let (w, h) = (state.width() as i32, state.height() as i32);
    let mut rows: Vec<Vec<Glyph>> = (0..h)
        .map(|y| {
            (0..w)
                .map(|x| match state.map.tile(x, y) {
                    Some(Tile::Wall) => Glyph::Wall,
                    _ => Glyph::Floor,
                })
                .collect()
        })
        .collect();

    for p in &state.projectiles {
        let glyph = match p.faction() {
            Faction::Player => Glyph::PlayerShot,
            Faction::Enemy => Glyph::EnemyShot,
        };
        put(&mut rows, p.cell(), glyph);
    }
    for e in &state.enemies {
        put(&mut rows, e.cell(), Glyph::Enemy);
    }
    put(&mut rows, (state.player.x, state.player.y), Glyph::Player);
    rows
}

pub fn status_line(state: &ArenaState) -> String {
    format!(
        "Enemies Left: {} | Player Health: {} | Ammo: {}",
        state.enemies.len(),
        state.player.health,
        state.player.ammo
    )
}

/// Render one complete frame: grid plus the status line beneath it.
pub fn render<W: Write>(out: &mut W, state: &ArenaState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    for (y, row) in cells(state).iter().enumerate() {
        out.queue(cursor::MoveTo(0, y as u16))?;
        for glyph in row {
            out.queue(style::SetForegroundColor(glyph.color()))?;
            out.queue(Print(glyph.ch()))?;
        }
    }

    out.queue(cursor::MoveTo(0, state.height()))?;
    out.queue(style::SetForegroundColor(C_STATUS))?;
    out.queue(Print(status_line(state)))?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

fn centered<W: Write>(
    out: &mut W,
    (cols, rows): (u16, u16),
    row_offset: i32,
    text: &str,
    color: Color,
    bold: bool,
) -> std::io::Result<()> {
    let col = cols.saturating_sub(text.chars().count() as u16) / 2;
    let row = ((rows / 2) as i32 + row_offset).max(0) as u16;
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    if bold {
        out.queue(style::SetAttribute(Attribute::Bold))?;
    }
    out.queue(Print(text))?;
    out.queue(style::SetAttribute(Attribute::Reset))?;
    Ok(())
}

/// Full-screen win prompt centred in a `(cols, rows)` terminal.
pub fn render_win<W: Write>(out: &mut W, size: (u16, u16)) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    centered(out, size, -1, WIN_MESSAGE, C_WIN, true)?;
    centered(out, size, 1, PLAY_AGAIN_MESSAGE, C_STATUS, false)?;
    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}

/// The final frame with a game-over banner on top.
pub fn render_game_over<W: Write>(
    out: &mut W,
    state: &ArenaState,
    size: (u16, u16),
) -> std::io::Result<()> {
    render(out, state)?;
    centered(out, size, -1, GAME_OVER_MESSAGE, C_GAME_OVER, true)?;
    centered(out, size, 1, PRESS_ANY_KEY, C_STATUS, false)?;
    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}
