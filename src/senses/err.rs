use failure;

/// Why a gamepad read produced no buttons.
///
/// The gate treats both variants as "no input this
/// iteration", the distinction is only used for logging.
#[derive(Debug)]
pub enum Error {
    /// Nothing new to read right now.
    NoSamples,
    /// The device failed, reading again may or may not help.
    Fatal(failure::Error),
}

impl Error {
    pub fn fatal<E: Into<failure::Error>>(cause: E) -> Self {
        Error::Fatal(cause.into())
    }

    pub fn is_fatal(&self) -> bool {
        match self {
            Error::Fatal(_) => true,
            Error::NoSamples => false,
        }
    }
}
