//! Gamepad input, reported as newly pressed buttons.

mod bg;
mod buttons;
mod edges;
mod err;
mod keys;
mod pad;
mod queue;

pub use bg::BackgroundPad;
pub use buttons::{Buttons, Direction};
pub use edges::{Edges, LevelPad, Levels};
pub use err::Error;
pub use keys::Keys;
pub use pad::Gamepad;
pub use queue::{QueueInput, QueuePad};

use std::time::Duration;

const KEYBOARD_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Gamepad emulated with keys on stdin, read in the background.
///
/// `w`/`k` up, `s`/`j` down, `a`/`h` left, `d`/`l` right,
/// `+`/`p` submit and `r`/`0` reset. Input may need a newline
/// to be flushed by the terminal.
pub fn keyboard_pad() -> BackgroundPad {
    BackgroundPad::spawn(Keys::stdin(), Some(KEYBOARD_POLL_INTERVAL))
}
