//! Key bindings: `WASD`/arrows move, `IJKL` shoot, `Q` quits.

use crate::dodge::state::Direction;
use crate::term::Key;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Move(i32, i32),
    Shoot(Direction),
    Quit,
    Interrupt,
}

pub fn action_for(key: Key) -> Option<Action> {
    match key {
        Key::Char('w') | Key::Up => Some(Action::Move(0, -1)),
        Key::Char('s') | Key::Down => Some(Action::Move(0, 1)),
        Key::Char('a') | Key::Left => Some(Action::Move(-1, 0)),
        Key::Char('d') | Key::Right => Some(Action::Move(1, 0)),

        Key::Char('i') => Some(Action::Shoot(Direction::Up)),
        Key::Char('k') => Some(Action::Shoot(Direction::Down)),
        Key::Char('j') => Some(Action::Shoot(Direction::Left)),
        Key::Char('l') => Some(Action::Shoot(Direction::Right)),

        Key::Char('q') => Some(Action::Quit),
        Key::Interrupt => Some(Action::Interrupt),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_wasd_agree() {
        assert_eq!(action_for(Key::Up), action_for(Key::Char('w')));
        assert_eq!(action_for(Key::Left), action_for(Key::Char('a')));
    }

    #[test]
    fn ijkl_shoot() {
        assert_eq!(action_for(Key::Char('l')), Some(Action::Shoot(Direction::Right)));
        assert_eq!(action_for(Key::Char('k')), Some(Action::Shoot(Direction::Down)));
    }

    #[test]
    fn unbound_keys_do_nothing() {
        assert_eq!(action_for(Key::Char('x')), None);
    }
}
