//! Key bindings.  While playing: arrows move, `W A S D Q E Z C` shoot in
//! eight directions, `X` quits.  On the win screen: `Y` restarts, `Q` quits.

use crate::term::Key;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Move(i32, i32),
    Shoot(i32, i32),
    Restart,
    Quit,
    Interrupt,
}

const SHOOT_KEYS: [(char, (i32, i32)); 8] = [
    ('w', (0, -1)),
    ('s', (0, 1)),
    ('a', (-1, 0)),
    ('d', (1, 0)),
    ('q', (-1, -1)),
    ('e', (1, -1)),
    ('z', (-1, 1)),
    ('c', (1, 1)),
];

pub fn running_action(key: Key) -> Option<Action> {
    match key {
        Key::Up => Some(Action::Move(0, -1)),
        Key::Down => Some(Action::Move(0, 1)),
        Key::Left => Some(Action::Move(-1, 0)),
        Key::Right => Some(Action::Move(1, 0)),
        Key::Char('x') => Some(Action::Quit),
        Key::Interrupt => Some(Action::Interrupt),
        Key::Char(c) => SHOOT_KEYS
            .iter()
            .find(|(k, _)| *k == c)
            .map(|&(_, (dx, dy))| Action::Shoot(dx, dy)),
    }
}

pub fn win_action(key: Key) -> Option<Action> {
    match key {
        Key::Char('y') => Some(Action::Restart),
        Key::Char('q') => Some(Action::Quit),
        Key::Interrupt => Some(Action::Interrupt),
        _ => None,
    }
}
