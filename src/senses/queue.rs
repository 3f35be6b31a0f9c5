use crate::senses::{Buttons, Error, Gamepad};
use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};
use failure::format_err;

pub type QueueInput = Sender<Buttons>;

/// FIFO gamepad where presses can be scripted up front or
/// sent from elsewhere, one entry is emitted per read.
pub struct QueuePad {
    presses: Receiver<Buttons>,
    /// Set for scripted pads so the queue never disconnects.
    _script: Option<QueueInput>,
}

impl QueuePad {
    pub fn new() -> (Self, QueueInput) {
        let (tx, rx) = unbounded();
        let pad = QueuePad {
            presses: rx,
            _script: None,
        };
        (pad, tx)
    }

    /// A pad that emits the given presses in order, then
    /// reports nothing new forever.
    pub fn scripted<I>(presses: I) -> Self
    where
        I: IntoIterator<Item = Buttons>,
    {
        let (mut pad, input) = QueuePad::new();
        for pressed in presses {
            // receiver is alive in pad, cannot fail
            input.send(pressed).ok();
        }
        pad._script = Some(input);
        pad
    }
}

impl Gamepad for QueuePad {
    fn read(&mut self) -> Result<Buttons, Error> {
        self.presses.try_recv().map_err(|e| match e {
            TryRecvError::Empty => Error::NoSamples,
            TryRecvError::Disconnected => {
                Error::Fatal(format_err!("Remote end disconnected from queue pad"))
            }
        })
    }
}
