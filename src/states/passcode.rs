use crate::senses::Direction;
use crate::states::Attempt;
use failure::{bail, Error};
use std::fmt;

/// Number of symbols an attempt can hold, and thus the
/// maximum length of a passcode.
pub const CAPACITY: usize = 12;

const DEFAULT_SEQUENCE: [Direction; 9] = [
    Direction::Right,
    Direction::Down,
    Direction::Up,
    Direction::Up,
    Direction::Left,
    Direction::Down,
    Direction::Down,
    Direction::Up,
    Direction::Down,
];

/// The reference sequence an attempt must match exactly.
#[derive(Clone, PartialEq, Eq)]
pub struct Passcode(Vec<Direction>);

impl Passcode {
    /// Checks that the sequence is not empty and fits into an
    /// attempt.
    pub fn new<I>(symbols: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Direction>,
    {
        let symbols: Vec<Direction> = symbols.into_iter().collect();
        if symbols.is_empty() {
            bail!("Passcode needs at least one symbol")
        }
        if symbols.len() > CAPACITY {
            bail!(
                "Passcode has {} symbols, but at most {} fit into an attempt",
                symbols.len(),
                CAPACITY
            )
        }
        Ok(Passcode(symbols))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn symbols(&self) -> &[Direction] {
        &self.0
    }

    /// `true` if the attempt has exactly the symbols of this
    /// passcode in the same order, no more and no less.
    pub fn matches(&self, attempt: &Attempt) -> bool {
        attempt.len() == self.len() && attempt.symbols().eq(self.0.iter().copied())
    }
}

impl Default for Passcode {
    fn default() -> Self {
        Passcode(DEFAULT_SEQUENCE.to_vec())
    }
}

/// Only the length, the sequence stays out of logs.
impl fmt::Debug for Passcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Passcode({} symbols)", self.0.len())
    }
}
