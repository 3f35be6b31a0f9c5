//! The two screens the gate is shown on.

pub mod frames;
mod grid;
mod memory;
mod pair;
mod surface;
mod terminal;

pub use frames::Frame;
pub use grid::TextGrid;
pub use memory::{MemorySource, ScreenRecord};
pub use pair::Screens;
pub use surface::{Color, Screen, Surface, SurfaceSource};
pub use terminal::{TerminalSource, TerminalSurface};
