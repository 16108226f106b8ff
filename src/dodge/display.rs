/// Rendering for the dodge game.
///
/// `grid` builds the character picture from state alone; `render` writes it
/// to the terminal with the score above and the controls hint below.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal, QueueableCommand,
};

use crate::dodge::state::DodgeState;
use crate::entities::{ENEMY_GLYPH, PLAYER_GLYPH};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_SCORE: Color = Color::Yellow;
const C_FRAME: Color = Color::DarkBlue;
const C_PLAYER: Color = Color::White;
const C_ENEMY: Color = Color::Red;
const C_BULLET: Color = Color::Cyan;
const C_HINT: Color = Color::DarkGrey;

pub const CONTROLS_HINT: &str = "Controls: WASD - Move, IJKL - Shoot, Q - Quit";

/// One row per grid line.  Bullets go down first, then enemies, then the
/// player, so the player is never hidden.
pub fn grid(state: &DodgeState) -> Vec<Vec<char>> {
    let mut rows = vec![vec![' '; state.width as usize]; state.height as usize];
    let entities = state
        .bullets
        .iter()
        .chain(state.enemies.iter())
        .chain(std::iter::once(&state.player));
    for e in entities {
        if state.contains(e.x, e.y) {
            rows[e.y as usize][e.x as usize] = e.glyph;
        }
    }
    rows
}

fn glyph_color(c: char) -> Color {
    match c {
        PLAYER_GLYPH => C_PLAYER,
        ENEMY_GLYPH => C_ENEMY,
        _ => C_BULLET,
    }
}

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, state: &DodgeState) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(style::SetForegroundColor(C_SCORE))?;
    out.queue(Print(format!("Score: {}", state.score)))?;

    let rule = "=".repeat(state.width as usize + 2);
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(style::SetForegroundColor(C_FRAME))?;
    out.queue(Print(&rule))?;

    for (i, row) in grid(state).iter().enumerate() {
        out.queue(cursor::MoveTo(0, 2 + i as u16))?;
        out.queue(style::SetForegroundColor(C_FRAME))?;
        out.queue(Print('|'))?;
        for &c in row {
            if c == ' ' {
                out.queue(Print(' '))?;
            } else {
                out.queue(style::SetForegroundColor(glyph_color(c)))?;
                out.queue(Print(c))?;
            }
        }
        out.queue(style::SetForegroundColor(C_FRAME))?;
        out.queue(Print('|'))?;
    }

    let bottom = 2 + state.height;
    out.queue(cursor::MoveTo(0, bottom))?;
    out.queue(Print(&rule))?;

    out.queue(cursor::MoveTo(0, bottom + 2))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print(CONTROLS_HINT))?;

    out.queue(style::ResetColor)?;
    out.flush()?;
    Ok(())
}
