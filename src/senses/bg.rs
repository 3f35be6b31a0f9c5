use crate::senses::{Buttons, Error, Gamepad};
use crossbeam_channel::{bounded, Receiver, Sender, TryRecvError};
use failure::format_err;
use log::debug;
use std::thread;
use std::time::Duration;

/// Reads a blocking gamepad in a background thread, making
/// it possible to read it from the gate loop without blocking.
pub struct BackgroundPad(Receiver<Result<Buttons, Error>>);

impl Gamepad for BackgroundPad {
    fn read(&mut self) -> Result<Buttons, Error> {
        match self.0.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => Err(Error::NoSamples),
            Err(TryRecvError::Disconnected) => {
                Err(Error::Fatal(format_err!("Gamepad reader has stopped")))
            }
        }
    }
}

impl BackgroundPad {
    /// Spawns a thread that keeps reading the given pad.
    ///
    /// If `poll_interval` is set, the thread sleeps for that
    /// long after a read without samples, otherwise it yields.
    pub fn spawn<G>(pad: G, poll_interval: Option<Duration>) -> Self
    where
        G: Gamepad + Send + 'static,
    {
        // Block the reader when four presses are unconsumed
        let (tx, rx) = bounded(4);
        thread::spawn(move || {
            keep_reading(pad, poll_interval, tx);
        });
        BackgroundPad(rx)
    }
}

fn keep_reading<G: Gamepad>(
    mut pad: G,
    poll_interval: Option<Duration>,
    sender: Sender<Result<Buttons, Error>>,
) {
    loop {
        match pad.read() {
            Ok(pressed) => {
                if let Err(e) = sender.send(Ok(pressed)) {
                    debug!("Terminating gamepad thread, remote end hung up: {:?}", e);
                    break;
                }
            }
            Err(Error::NoSamples) => match poll_interval {
                Some(interval) => thread::sleep(interval),
                None => thread::yield_now(),
            },
            fatal => {
                if let Err(e) = sender.send(fatal) {
                    debug!("Terminating gamepad thread, remote end hung up: {:?}", e);
                }
                break;
            }
        }
    }
}
