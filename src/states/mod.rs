//! The gate state machine and the passcode it checks.

mod attempt;
mod gate;
mod passcode;

pub use attempt::Attempt;
pub use gate::{Feedback, Gate, GateState, Outcome, Phase, Step};
pub use passcode::{Passcode, CAPACITY};
