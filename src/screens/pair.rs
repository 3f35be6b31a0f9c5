use crate::err::compound_result;
use crate::result::Result;
use crate::screens::{Frame, Screen, Surface, SurfaceSource};

use failure::ResultExt;
use log::debug;

/// The TV and gamepad surfaces, acquired together and drawn
/// to identically.
///
/// Both surfaces are released when this is dropped.
pub struct Screens {
    tv: Box<dyn Surface>,
    gamepad: Box<dyn Surface>,
}

impl Screens {
    /// Acquires both surfaces or none.
    ///
    /// If the gamepad surface cannot be acquired, the already
    /// acquired TV surface is released before returning the error.
    pub fn acquire(source: &mut dyn SurfaceSource) -> Result<Self> {
        let tv = source
            .acquire(Screen::Tv)
            .with_context(|_| "could not acquire TV screen")?;
        let gamepad = source
            .acquire(Screen::Gamepad)
            .with_context(|_| "could not acquire gamepad screen")?;
        debug!("acquired both screens");

        Ok(Screens { tv, gamepad })
    }

    /// Clears both screens to the frame background, writes all
    /// lines of the frame and presents.
    ///
    /// Every call goes to the TV first, then to the gamepad. Drawing
    /// continues after errors, all of them are returned at the end.
    pub fn show(&mut self, frame: &Frame) -> Result<()> {
        let mut results = Vec::with_capacity(frame.lines().len() + 2);

        results.push(self.each(|s| s.clear(frame.background())));
        for line in frame.lines() {
            results.push(self.each(|s| s.put_text(line.column, line.row, &line.text)));
        }
        results.push(self.each(|s| s.present()));

        compound_result(results)
    }

    fn each<F>(&mut self, mut draw: F) -> Result<()>
    where
        F: FnMut(&mut dyn Surface) -> Result<()>,
    {
        let tv = draw(self.tv.as_mut());
        let gamepad = draw(self.gamepad.as_mut());
        compound_result(vec![tv, gamepad])
    }
}

impl Drop for Screens {
    fn drop(&mut self) {
        debug!("releasing both screens");
    }
}
