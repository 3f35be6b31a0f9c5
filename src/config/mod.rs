//! Timings of the gate, optionally loaded from YAML.
//!
//! The passcode is deliberately not part of the file format,
//! it can only be set in code with `GateConfig::with_passcode`.

pub(crate) mod spec;

use crate::senses::Direction;
use crate::states::{Gate, Passcode};
use crate::util::time::{to_duration, whole_periods};

use failure::{bail, Error, ResultExt};
use serde_yaml;

use std::fs::File;
use std::path::Path;
use std::time::Duration;

const POLL_PERIOD: Duration = Duration::from_millis(50);
const TIMEOUT: Duration = Duration::from_secs(30);
const VERDICT_HOLD: Duration = Duration::from_secs(2);
const HANDOFF_HOLD: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, PartialEq)]
pub struct GateConfig {
    pub passcode: Passcode,
    /// Which direction counts if several are pressed at once.
    pub priority: [Direction; 4],
    pub poll_period: Duration,
    pub timeout: Duration,
    pub verdict_hold: Duration,
    pub handoff_hold: Duration,
}

impl Default for GateConfig {
    fn default() -> Self {
        GateConfig {
            passcode: Passcode::default(),
            priority: Direction::PRIORITY,
            poll_period: POLL_PERIOD,
            timeout: TIMEOUT,
            verdict_hold: VERDICT_HOLD,
            handoff_hold: HANDOFF_HOLD,
        }
    }
}

impl GateConfig {
    pub fn with_passcode(mut self, passcode: Passcode) -> Self {
        self.passcode = passcode;
        self
    }

    /// Iterations without input until the gate gives up.
    pub fn timeout_ticks(&self) -> u32 {
        whole_periods(self.timeout, self.poll_period)
    }

    /// The state machine for these settings.
    pub fn gate(&self) -> Gate {
        Gate::new(
            self.passcode.clone(),
            self.priority,
            self.timeout_ticks(),
            self.poll_period,
        )
    }

    fn validate(self) -> Result<Self, Error> {
        if self.poll_period == Duration::from_secs(0) {
            bail!("poll_period must be greater than zero")
        }
        if self.timeout < self.poll_period {
            bail!(
                "timeout of {:?} is shorter than a single poll period of {:?}",
                self.timeout,
                self.poll_period
            )
        }
        Ok(self)
    }
}

pub fn from_path(source_file: impl AsRef<Path>) -> Result<GateConfig, Error> {
    let source_file = source_file.as_ref();
    let file = File::open(source_file)
        .with_context(|_| format!("could not open config {}", source_file.display()))?;
    let config: spec::Config = serde_yaml::from_reader(file)?;
    compile(config)
}

pub fn from_str(source_string: impl AsRef<str>) -> Result<GateConfig, Error> {
    let config = serde_yaml::from_str(source_string.as_ref())?;
    compile(config)
}

/// Applies the specified timings on top of the defaults.
pub fn compile(config: spec::Config) -> Result<GateConfig, Error> {
    let mut gate = GateConfig::default();

    if let Some(secs) = config.poll_period {
        gate.poll_period = to_duration(secs).context("invalid poll_period")?;
    }
    if let Some(secs) = config.timeout {
        gate.timeout = to_duration(secs).context("invalid timeout")?;
    }
    if let Some(secs) = config.verdict_hold {
        gate.verdict_hold = to_duration(secs).context("invalid verdict_hold")?;
    }
    if let Some(secs) = config.handoff_hold {
        gate.handoff_hold = to_duration(secs).context("invalid handoff_hold")?;
    }

    gate.validate()
}
