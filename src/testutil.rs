use crate::senses::{Buttons, Direction, Error, Gamepad};
use failure::format_err;
use std::time::Duration;

use crate::senses::Direction::{Down, Left, Right, Up};

/// The default passcode.
pub const CORRECT: [Direction; 9] = [Right, Down, Up, Up, Left, Down, Down, Up, Down];

const TOLERANCE: Duration = Duration::from_millis(70);

/// A gamepad that fails on every read.
pub struct BrokenPad;

impl Gamepad for BrokenPad {
    fn read(&mut self) -> Result<Buttons, Error> {
        Err(Error::Fatal(format_err!("gamepad unplugged")))
    }
}

pub fn assert_duration(topic: &str, expected: Duration, actual: Duration) {
    if actual > expected {
        let too_much = actual - expected;
        assert!(
            too_much < TOLERANCE,
            "Expected {topic} of {expected:?}, instead got {actual:?}, which is too long by {excess:?}",
            topic = topic,
            expected = expected,
            actual = actual,
            excess = too_much
        )
    } else {
        let too_little = expected - actual;
        assert!(
            too_little < TOLERANCE,
            "Expected {topic} of {expected:?}, actual: {actual:?}, is not long enough by {too_little:?}",
            topic = topic,
            expected = expected,
            actual = actual,
            too_little = too_little
        )
    }
}
