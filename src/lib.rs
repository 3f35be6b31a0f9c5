//! Core functionality of the boot gate, used by the runner in
//! `main.rs` and by headless integration tests.
//!
//! The gate shows a passcode prompt on the TV and gamepad
//! screens, reads directional presses from one gamepad and
//! lets the boot continue once the passcode was entered or
//! after a while without input. It never stops the boot.

#[cfg(test)]
mod testutil;

mod err;
mod result;
mod util;

pub mod app;
pub mod check;
pub mod config;
pub mod log;
pub mod pace;
pub mod screens;
pub mod senses;
pub mod states;

pub use app::{App, Builder as AppBuilder, Passage};
pub use config::GateConfig;
pub use states::Outcome;
