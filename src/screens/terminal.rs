use crate::result::Result;
use crate::screens::{Color, Screen, Surface, SurfaceSource, TextGrid};

use log::debug;

use std::io::{stdout, Stdout, Write};

/// Grid sizes roughly matching the console font on each screen.
const TV_SIZE: (u32, u32) = (80, 18);
const GAMEPAD_SIZE: (u32, u32) = (60, 18);

/// Draws into a text grid and prints it to a writer when
/// presented, but only if something changed since the last
/// time.
pub struct TerminalSurface<W: Write> {
    screen: Screen,
    grid: TextGrid,
    out: W,
    last_presented: Option<(Color, Vec<String>)>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(screen: Screen, out: W) -> Self {
        let (columns, rows) = match screen {
            Screen::Tv => TV_SIZE,
            Screen::Gamepad => GAMEPAD_SIZE,
        };
        TerminalSurface {
            screen,
            grid: TextGrid::new(columns, rows),
            out,
            last_presented: None,
        }
    }

    fn write_grid(&mut self, rows: &[String]) -> Result<()> {
        writeln!(
            self.out,
            "[{screen}] {color}",
            screen = self.screen,
            color = self.grid.background()
        )?;
        for row in rows {
            writeln!(self.out, "{}", row)?;
        }
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn clear(&mut self, color: Color) -> Result<()> {
        self.grid.clear(color)
    }

    fn put_text(&mut self, column: u32, row: u32, text: &str) -> Result<()> {
        self.grid.put_text(column, row, text)
    }

    fn present(&mut self) -> Result<()> {
        let snapshot = (self.grid.background(), self.grid.text_rows());
        if self.last_presented.as_ref() == Some(&snapshot) {
            return Ok(());
        }

        self.write_grid(&snapshot.1)?;
        self.last_presented = Some(snapshot);
        Ok(())
    }
}

impl<W: Write> Drop for TerminalSurface<W> {
    fn drop(&mut self) {
        debug!("released {} screen", self.screen);
    }
}

/// Prints both screens to stdout, one after the other.
pub struct TerminalSource;

impl SurfaceSource for TerminalSource {
    fn acquire(&mut self, screen: Screen) -> Result<Box<dyn Surface>> {
        let surface: TerminalSurface<Stdout> = TerminalSurface::new(screen, stdout());
        Ok(Box::new(surface))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn printed(surface: &TerminalSurface<Vec<u8>>) -> String {
        String::from_utf8(surface.out.clone()).unwrap()
    }

    #[test]
    fn presents_heading_and_rows() {
        // given
        let mut surface = TerminalSurface::new(Screen::Tv, Vec::new());

        // when
        surface.clear(Color::RED).unwrap();
        surface.put_text(0, 1, "INCORRECT PASSWORD").unwrap();
        surface.present().unwrap();

        // then
        assert_eq!(printed(&surface), "[TV] #ff0000\n\nINCORRECT PASSWORD\n\n");
    }

    #[test]
    fn unchanged_frame_is_printed_once() {
        // given
        let mut surface = TerminalSurface::new(Screen::Gamepad, Vec::new());

        // when
        for _ in 0..3 {
            surface.clear(Color::BLACK).unwrap();
            surface.put_text(0, 0, "same").unwrap();
            surface.present().unwrap();
        }
        surface.clear(Color::BLACK).unwrap();
        surface.put_text(0, 0, "different").unwrap();
        surface.present().unwrap();

        // then
        let out = printed(&surface);
        assert_eq!(out.matches("[GAMEPAD]").count(), 2, "{}", out);
    }
}
