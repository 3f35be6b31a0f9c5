use serde::Deserialize;

/// Gate timings as written in a YAML file, all in seconds.
///
/// Missing fields keep their defaults.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub poll_period: Option<f64>,
    /// Seconds without input until the gate gives up.
    #[serde(default)]
    pub timeout: Option<f64>,
    /// How long accepted, rejected and timeout screens stay up.
    #[serde(default)]
    pub verdict_hold: Option<f64>,
    /// How long the handoff screen stays up before exiting.
    #[serde(default)]
    pub handoff_hold: Option<f64>,
}
