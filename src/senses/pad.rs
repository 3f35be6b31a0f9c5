use crate::senses::{Buttons, Error};

type Result<T> = std::result::Result<T, Error>;

pub trait Gamepad {
    /// Reads the buttons that transitioned to pressed since
    /// the last read.
    ///
    /// Held buttons are not reported again. An error means
    /// that nothing was read this time.
    fn read(&mut self) -> Result<Buttons>;
}
