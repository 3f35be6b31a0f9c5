mod builder;

use crate::config::GateConfig;
use crate::log::log_recovered;
use crate::pace::Pace;
use crate::screens::{frames, Frame, Screens};
use crate::senses::{Buttons, Error as ReadError, Gamepad};
use crate::states::Outcome;

use derivative::Derivative;
use log::{debug, info, trace, warn};

pub use builder::Builder;

/// How the boot got past the gate. Every variant means
/// that booting continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Passage {
    /// The gate ran until it reached a terminal state.
    Gate(Outcome),
    /// The screens were not available, so the gate was not shown.
    Skipped,
}

impl Passage {
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            Passage::Gate(outcome) => Some(outcome),
            Passage::Skipped => None,
        }
    }
}

/// Runs the gate loop: show the prompt, read the gamepad,
/// advance the state machine, wait, repeat until the
/// passcode was accepted or the gate timed out.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct App {
    config: GateConfig,
    /// `None` if acquiring the screens failed.
    #[derivative(Debug = "ignore")]
    screens: Option<Screens>,
    #[derivative(Debug = "ignore")]
    pad: Box<dyn Gamepad>,
    #[derivative(Debug = "ignore")]
    pace: Box<dyn Pace>,
}

impl App {
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Keeps the gate running until it reaches a terminal state,
    /// then shows the handoff message and releases the screens.
    ///
    /// Never fails and never blocks longer than the configured
    /// timeout after the last input, plus the time feedback
    /// screens are held.
    pub fn run(self) -> Passage {
        let App {
            config,
            screens,
            pad,
            mut pace,
        } = self;

        let screens = match screens {
            Some(screens) => screens,
            None => {
                warn!("no screens to show the gate on, skipping it");
                return Passage::Skipped;
            }
        };
        let mut display = Display::new(screens);
        let mut input = Input::new(pad);

        let gate = config.gate();
        let mut state = gate.initial();
        debug!(
            "gate running, {} symbols, giving up after {} idle iterations",
            gate.passcode_len(),
            gate.timeout_ticks()
        );

        let outcome = loop {
            display.show(&frames::prompt(
                state.attempt().len(),
                gate.passcode_len(),
                gate.remaining_secs(&state),
            ));

            let step = gate.step(state, input.read());
            state = step.state;

            if let Some(feedback) = step.feedback {
                display.show(&frames::for_feedback(feedback));
                pace.sleep(config.verdict_hold);
            }

            if let Some(outcome) = state.phase().outcome() {
                break outcome;
            }

            pace.sleep(config.poll_period);
        };

        info!("gate finished: {:?}, continuing boot", outcome);
        display.show(&frames::handoff());
        pace.sleep(config.handoff_hold);

        // releases both screens
        drop(display);

        Passage::Gate(outcome)
    }
}

/// Screens that log drawing errors instead of failing.
struct Display {
    screens: Screens,
    /// Set while drawing keeps failing, so only the first
    /// failure in a row is reported loudly.
    failing: bool,
}

impl Display {
    fn new(screens: Screens) -> Self {
        Display {
            screens,
            failing: false,
        }
    }

    fn show(&mut self, frame: &Frame) {
        match self.screens.show(frame) {
            Ok(()) => self.failing = false,
            Err(ref e) if self.failing => trace!("drawing still failing: {}", e),
            Err(ref e) => {
                log_recovered("drawing to screens failed", e);
                self.failing = true;
            }
        }
    }
}

/// A gamepad where a failed read counts as no input.
struct Input {
    pad: Box<dyn Gamepad>,
    failing: bool,
}

impl Input {
    fn new(pad: Box<dyn Gamepad>) -> Self {
        Input {
            pad,
            failing: false,
        }
    }

    fn read(&mut self) -> Buttons {
        match self.pad.read() {
            Ok(pressed) => {
                self.failing = false;
                pressed
            }
            Err(ReadError::NoSamples) => Buttons::empty(),
            Err(ReadError::Fatal(ref e)) if self.failing => {
                trace!("gamepad still failing: {}", e);
                Buttons::empty()
            }
            Err(ReadError::Fatal(ref e)) => {
                log_recovered("reading gamepad failed", e);
                self.failing = true;
                Buttons::empty()
            }
        }
    }
}
