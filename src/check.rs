//! Functionality to check screens and gamepad without running
//! the gate.
use crate::pace::Pace;
use crate::result::Result;
use crate::screens::{frames, Screens, SurfaceSource};
use crate::senses::{Error as ReadError, Gamepad};

use log::{error, info};

use std::time::Duration;

const PAD_CHECK_TIME: Duration = Duration::from_secs(1);
const PAD_CHECK_INTERVAL: Duration = Duration::from_millis(50);

/// Checks the screens and the gamepad.
///
/// If the screens do not stand the check, then an error with
/// more details is returned. The gamepad is only reported on,
/// as nobody may be around to press a button.
pub fn check_system(
    source: &mut dyn SurfaceSource,
    pad: &mut dyn Gamepad,
    pace: &mut dyn Pace,
) -> Result<()> {
    let check_result = check_screens(source).map(|mut screens| {
        check_pad(pad, pace);
        screens.show(&frames::handoff()).ok();
    });

    if check_result.is_ok() {
        info!("Systems check successful.");
    } else {
        error!("Systems check failure.");
    }

    check_result
}

/// Acquires both screens and shows a test pattern on them.
pub fn check_screens(source: &mut dyn SurfaceSource) -> Result<Screens> {
    info!("Testing screens...");

    let test_result = Screens::acquire(source).and_then(|mut screens| {
        screens.show(&frames::check_pattern())?;
        Ok(screens)
    });

    match test_result {
        Ok(_) => info!("Screens ok."),
        Err(ref e) => error!("Drawing to screens failed: {}.", e),
    }

    test_result
}

/// Reads the gamepad for a second and returns how many
/// reads reported pressed buttons.
pub fn check_pad(pad: &mut dyn Gamepad, pace: &mut dyn Pace) -> usize {
    info!("Testing gamepad, press any button...");

    let reads = (PAD_CHECK_TIME.as_millis() / PAD_CHECK_INTERVAL.as_millis()) as usize;
    let mut pressed_reads = 0;
    for _ in 0..reads {
        match pad.read() {
            Ok(pressed) if !pressed.is_empty() => {
                info!("Gamepad reported {:?}.", pressed);
                pressed_reads += 1;
            }
            Ok(_) | Err(ReadError::NoSamples) => (),
            Err(ReadError::Fatal(e)) => {
                error!("Reading gamepad failed: {}.", e);
                break;
            }
        }
        pace.sleep(PAD_CHECK_INTERVAL);
    }

    if pressed_reads == 0 {
        info!("No buttons pressed during gamepad check.");
    }
    pressed_reads
}
