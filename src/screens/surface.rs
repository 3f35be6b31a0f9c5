use crate::result::Result;
use std::fmt;

/// Background color of a screen, as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0x00_00_00);
    pub const GREEN: Color = Color(0x00_ff_00);
    pub const RED: Color = Color(0xff_00_00);
    pub const BLUE: Color = Color(0x00_00_ff);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:06x}", self.0 & 0xff_ff_ff)
    }
}

/// The two screens the prompt is shown on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Tv,
    Gamepad,
}

impl Screen {
    pub fn name(self) -> &'static str {
        match self {
            Screen::Tv => "TV",
            Screen::Gamepad => "GAMEPAD",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A text grid that can be drawn to and then shown.
///
/// Whatever backs the surface is released when it is dropped.
pub trait Surface {
    /// Blanks all text and sets the background.
    fn clear(&mut self, color: Color) -> Result<()>;

    /// Writes text starting at the given cell. Text that does not
    /// fit is cut off.
    fn put_text(&mut self, column: u32, row: u32, text: &str) -> Result<()>;

    /// Makes everything drawn since the last present visible.
    fn present(&mut self) -> Result<()>;
}

/// Hands out surfaces for screens, e.g. by allocating buffers.
pub trait SurfaceSource {
    fn acquire(&mut self, screen: Screen) -> Result<Box<dyn Surface>>;
}
