use crate::senses::{Buttons, Error, Gamepad};
use failure::format_err;
use std::io::{self, stdin, Read, Stdin};

/// A gamepad emulated with keys read from a byte stream,
/// normally stdin. Every key is one press.
///
/// Reads block until a byte is available, so this is meant
/// to be run in the background.
pub struct Keys<R> {
    source: R,
    buf: [u8; 1],
}

impl Keys<Stdin> {
    pub fn stdin() -> Self {
        Keys::new(stdin())
    }
}

impl<R: Read> Keys<R> {
    pub fn new(source: R) -> Self {
        Keys { source, buf: [0] }
    }
}

impl<R: Read> Gamepad for Keys<R> {
    fn read(&mut self) -> Result<Buttons, Error> {
        self.buf[0] = 0;

        match self.source.read(&mut self.buf) {
            Ok(1) => parse_key(self.buf[0]).ok_or(Error::NoSamples),
            Ok(_) => Err(Error::Fatal(format_err!("Key input closed"))),
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => Err(Error::NoSamples),
            Err(e) => Err(Error::fatal(e)),
        }
    }
}

fn parse_key(byte: u8) -> Option<Buttons> {
    match byte {
        b'w' | b'k' => Some(Buttons::UP),
        b's' | b'j' => Some(Buttons::DOWN),
        b'a' | b'h' => Some(Buttons::LEFT),
        b'd' | b'l' => Some(Buttons::RIGHT),
        b'+' | b'p' => Some(Buttons::SUBMIT),
        b'r' | b'0' => Some(Buttons::RESET),
        // newlines and anything else
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn one_press_per_key() {
        // given
        let mut keys = Keys::new(Cursor::new("wd+".as_bytes()));

        // when
        let up = keys.read().unwrap();
        let right = keys.read().unwrap();
        let submit = keys.read().unwrap();

        // then
        assert_eq!(up, Buttons::UP);
        assert_eq!(right, Buttons::RIGHT);
        assert_eq!(submit, Buttons::SUBMIT);
    }

    #[test]
    fn newline_is_no_press() {
        let mut keys = Keys::new(Cursor::new("\nr".as_bytes()));

        assert!(!keys.read().unwrap_err().is_fatal());
        assert_eq!(keys.read().unwrap(), Buttons::RESET);
    }

    #[test]
    fn end_of_input_is_fatal() {
        let mut keys = Keys::new(Cursor::new(Vec::new()));

        assert!(keys.read().unwrap_err().is_fatal());
    }
}
