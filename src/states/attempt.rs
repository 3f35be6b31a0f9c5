use crate::senses::Direction;
use crate::states::CAPACITY;

/// The symbols entered so far, in a fixed number of slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    slots: [Option<Direction>; CAPACITY],
    len: usize,
}

impl Attempt {
    pub fn new() -> Self {
        Attempt {
            slots: [None; CAPACITY],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends the symbol if fewer than `limit` symbols have
    /// been entered. Returns `false` if the symbol was ignored.
    ///
    /// The limit is capped to the number of slots.
    pub fn push(&mut self, symbol: Direction, limit: usize) -> bool {
        if self.len >= limit.min(CAPACITY) {
            return false;
        }

        self.slots[self.len] = Some(symbol);
        self.len += 1;
        true
    }

    /// Empties all slots.
    pub fn clear(&mut self) {
        self.slots = [None; CAPACITY];
        self.len = 0;
    }

    pub fn symbols<'a>(&'a self) -> impl Iterator<Item = Direction> + 'a {
        self.slots[..self.len].iter().filter_map(|s| *s)
    }
}

impl Default for Attempt {
    fn default() -> Self {
        Attempt::new()
    }
}
