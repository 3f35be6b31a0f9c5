use crate::senses::{Buttons, Error, Gamepad};

/// Source of the buttons currently held down, e.g. a
/// controller that only reports levels.
pub trait Levels {
    fn held(&mut self) -> Result<Buttons, Error>;
}

/// Remembers the previously held buttons to report only
/// buttons that went from released to pressed.
#[derive(Debug, Clone, Copy)]
pub struct Edges {
    held: Buttons,
}

impl Edges {
    pub fn new() -> Self {
        Edges {
            held: Buttons::empty(),
        }
    }

    /// Takes the currently held buttons and returns the ones
    /// that were not held on the last update.
    pub fn update(&mut self, held: Buttons) -> Buttons {
        let pressed = held & !self.held;
        self.held = held;
        pressed
    }
}

impl Default for Edges {
    fn default() -> Self {
        Edges::new()
    }
}

/// Turns a level-reporting controller into an edge-triggered
/// gamepad.
pub struct LevelPad<L> {
    levels: L,
    edges: Edges,
}

impl<L: Levels> LevelPad<L> {
    pub fn new(levels: L) -> Self {
        LevelPad {
            levels,
            edges: Edges::new(),
        }
    }
}

impl<L: Levels> Gamepad for LevelPad<L> {
    /// A failed read leaves the remembered levels untouched,
    /// so a button held through the failure is not reported
    /// twice.
    fn read(&mut self) -> Result<Buttons, Error> {
        let held = self.levels.held()?;
        Ok(self.edges.update(held))
    }
}
