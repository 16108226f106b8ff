/// Keyboard capability used by both game loops.
///
/// The loops only ever need two things from the terminal: raw input mode
/// around the whole session, and a non-blocking "is there a key?" poll.
/// [`KeySource`] is that seam; [`CrosstermKeys`] implements it for real
/// terminals and tests drive the loops with a scripted source.

use std::io::{self, stdout};
use std::ops::{Deref, DerefMut};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal, ExecutableCommand,
};

/// A key press, already normalised (letters lowercased).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Up,
    Down,
    Left,
    Right,
    /// Ctrl+C.  Raw mode swallows SIGINT, so it arrives as a key instead.
    Interrupt,
}

pub trait KeySource {
    /// Enter raw input mode.
    fn acquire(&mut self) -> io::Result<()>;
    /// Leave raw input mode.
    fn release(&mut self) -> io::Result<()>;
    /// Return at most one pending key without blocking.
    fn poll_key(&mut self) -> io::Result<Option<Key>>;
}

impl<K: KeySource + ?Sized> KeySource for &mut K {
    fn acquire(&mut self) -> io::Result<()> {
        (**self).acquire()
    }

    fn release(&mut self) -> io::Result<()> {
        (**self).release()
    }

    fn poll_key(&mut self) -> io::Result<Option<Key>> {
        (**self).poll_key()
    }
}

/// Translate a crossterm key event.  Releases and unmapped keys are `None`.
pub fn key_from_event(ev: KeyEvent) -> Option<Key> {
    if ev.kind == KeyEventKind::Release {
        return None;
    }
    match ev.code {
        KeyCode::Char('c') | KeyCode::Char('C')
            if ev.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(Key::Interrupt)
        }
        KeyCode::Char(c) => Some(Key::Char(c.to_ascii_lowercase())),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        _ => None,
    }
}

// ── crossterm back end ───────────────────────────────────────────────────────

/// Raw mode plus the alternate screen on stdout.
#[derive(Default)]
pub struct CrosstermKeys;

impl KeySource for CrosstermKeys {
    fn acquire(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        stdout().execute(terminal::EnterAlternateScreen)?;
        stdout().execute(cursor::Hide)?;
        Ok(())
    }

    fn release(&mut self) -> io::Result<()> {
        stdout().execute(cursor::Show)?;
        stdout().execute(terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }

    fn poll_key(&mut self) -> io::Result<Option<Key>> {
        // Skip resize/mouse/focus events until a mapped key or an empty queue.
        while event::poll(Duration::ZERO)? {
            if let Event::Key(ev) = event::read()? {
                if let Some(key) = key_from_event(ev) {
                    return Ok(Some(key));
                }
            }
        }
        Ok(None)
    }
}

// ── Raw-mode guard ───────────────────────────────────────────────────────────

/// Holds a [`KeySource`] in raw mode and releases it on drop, including
/// during a panic unwind.
pub struct RawMode<K: KeySource> {
    keys: K,
}

impl<K: KeySource> RawMode<K> {
    pub fn acquire(mut keys: K) -> io::Result<Self> {
        keys.acquire()?;
        Ok(RawMode { keys })
    }
}

impl<K: KeySource> Deref for RawMode<K> {
    type Target = K;

    fn deref(&self) -> &K {
        &self.keys
    }
}

impl<K: KeySource> DerefMut for RawMode<K> {
    fn deref_mut(&mut self) -> &mut K {
        &mut self.keys
    }
}

impl<K: KeySource> Drop for RawMode<K> {
    fn drop(&mut self) {
        if let Err(err) = self.keys.release() {
            log::warn!("failed to restore terminal: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_are_lowercased() {
        let ev = KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT);
        assert_eq!(key_from_event(ev), Some(Key::Char('w')));
    }

    #[test]
    fn ctrl_c_is_interrupt() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_from_event(ev), Some(Key::Interrupt));
    }

    #[test]
    fn plain_c_is_a_letter() {
        assert_eq!(key_from_event(KeyEvent::from(KeyCode::Char('c'))), Some(Key::Char('c')));
    }

    #[test]
    fn release_and_unmapped_are_ignored() {
        let mut ev = KeyEvent::from(KeyCode::Left);
        ev.kind = KeyEventKind::Release;
        assert_eq!(key_from_event(ev), None);
        assert_eq!(key_from_event(KeyEvent::from(KeyCode::F(1))), None);
    }
}
