#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;

use terminal_shooters::term::{Key, KeySource};

/// Hands out a fixed sequence of keys, one per poll, then `None` forever.
/// Counts acquire/release calls so tests can check terminal restoration.
#[derive(Default)]
pub struct ScriptedKeys {
    pub queue: VecDeque<Option<Key>>,
    pub acquired: u32,
    pub released: u32,
}

impl ScriptedKeys {
    pub fn new(keys: &[Option<Key>]) -> Self {
        ScriptedKeys {
            queue: keys.iter().copied().collect(),
            ..Default::default()
        }
    }
}

impl KeySource for ScriptedKeys {
    fn acquire(&mut self) -> io::Result<()> {
        self.acquired += 1;
        Ok(())
    }

    fn release(&mut self) -> io::Result<()> {
        self.released += 1;
        Ok(())
    }

    fn poll_key(&mut self) -> io::Result<Option<Key>> {
        Ok(self.queue.pop_front().flatten())
    }
}
