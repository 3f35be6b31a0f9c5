use super::App;

use crate::config::{self, GateConfig};
use crate::log::log_recovered;
use crate::pace::{Pace, ThreadPace};
use crate::screens::{Screens, SurfaceSource};
use crate::senses::{Gamepad, QueuePad};

use log::{info, warn};

use std::path::Path;

pub struct Builder {
    config: GateConfig,
    /// If `None`, no screens are acquired and the gate is skipped.
    source: Option<Box<dyn SurfaceSource>>,
    pad: Option<Box<dyn Gamepad>>,
    pace: Box<dyn Pace>,
}

impl Default for Builder {
    fn default() -> Self {
        Builder {
            config: GateConfig::default(),
            source: None,
            pad: None,
            pace: Box::new(ThreadPace),
        }
    }
}

impl Builder {
    pub fn new() -> Builder {
        Default::default()
    }

    pub fn config(&mut self, config: GateConfig) -> &mut Self {
        self.config = config;
        self
    }

    /// Loads timings from the YAML file at the given path.
    ///
    /// If loading fails, the error is logged and the previous
    /// configuration stays in place.
    pub fn config_file(&mut self, path: impl AsRef<Path>) -> &mut Self {
        let path = path.as_ref();
        match config::from_path(path) {
            Ok(loaded) => {
                info!("loaded gate configuration from {}", path.display());
                // passcode is never part of the file
                self.config = GateConfig {
                    passcode: self.config.passcode.clone(),
                    priority: self.config.priority,
                    ..loaded
                };
            }
            Err(ref e) => log_recovered("ignoring gate configuration", e),
        }
        self
    }

    /// Where to get the TV and gamepad surfaces from.
    pub fn surfaces(&mut self, source: impl SurfaceSource + 'static) -> &mut Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn pad(&mut self, pad: impl Gamepad + 'static) -> &mut Self {
        self.pad = Some(Box::new(pad));
        self
    }

    /// Replaces real sleeping, e.g. for tests.
    pub fn pace(&mut self, pace: impl Pace + 'static) -> &mut Self {
        self.pace = Box::new(pace);
        self
    }

    /// Consumes the builder and acquires the screens.
    ///
    /// Never fails: without screens the app skips the gate when
    /// run, without a gamepad the gate can only time out.
    pub fn build(self) -> App {
        let Builder {
            config,
            source,
            pad,
            pace,
        } = self;

        let screens = source.and_then(|mut source| match Screens::acquire(source.as_mut()) {
            Ok(screens) => Some(screens),
            Err(ref e) => {
                log_recovered("screens unavailable", e);
                None
            }
        });

        let pad = pad.unwrap_or_else(|| {
            warn!("no gamepad configured, the gate can only time out");
            Box::new(QueuePad::scripted(vec![]))
        });

        App {
            config,
            screens,
            pad,
            pace,
        }
    }
}
