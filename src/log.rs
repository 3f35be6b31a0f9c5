use failure::Error;
use log::{debug, error, warn, LevelFilter};

#[cfg(test)]
use std::sync::Once;

#[cfg(test)]
static INIT_TEST_LOGGING: Once = Once::new();

/// Initializes logging for a gate run.
///
/// `None` silences everything, including errors. Otherwise
/// the number of `-v` occurrences raises the level, starting
/// from warnings.
///
/// If initialization fails, prints a message once and then
/// never logs anything. The gate still runs.
pub fn init_logging(verbosity_level: Option<u64>) {
    let res = cute_log::init_with_max_level(level_filter(verbosity_level));
    if let Err(err) = res {
        eprintln!(
            "Failed to initialize logging. Will stay silent for the rest of execution. Error: {}",
            err
        )
    }
}

fn level_filter(verbosity_level: Option<u64>) -> LevelFilter {
    match verbosity_level {
        None => LevelFilter::Off,
        Some(0) => LevelFilter::Warn,
        Some(1) => LevelFilter::Info,
        Some(2) => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initializes logging output for test builds.
#[cfg(test)]
pub fn init_test_logging() {
    INIT_TEST_LOGGING.call_once(|| {
        let _ = env_logger::builder()
            .filter_level(LevelFilter::Debug)
            .is_test(true)
            .try_init();
    })
}

/// Logs an error that stopped some part of the gate from
/// working, with the whole cause chain.
///
/// The gate never exits with a failure status, so nothing
/// is fatal to the process, only to the affected part.
pub fn log_fatal(topic: &str, error: &Error) {
    error!("{} failed, continuing boot anyway.", topic);
    log_backtrace(error);
    log_causes(error);
}

/// Logs the error chain at warning level for problems the
/// gate recovers from by itself.
pub fn log_recovered(topic: &str, error: &Error) {
    warn!("{}: {}", topic, error);
    for cause in error.iter_causes() {
        debug!("Cause: {}", cause);
    }
}

pub fn log_backtrace(error: &Error) {
    debug!("Backtrace: {}", error.backtrace());
}

pub fn log_causes(error: &Error) {
    for cause in error.iter_chain() {
        error!("Cause: {}", cause);
        debug!("Cause: {:?}", cause);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn quiet_is_off() {
        assert_eq!(level_filter(None), LevelFilter::Off);
    }

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(level_filter(Some(0)), LevelFilter::Warn);
        assert_eq!(level_filter(Some(1)), LevelFilter::Info);
        assert_eq!(level_filter(Some(2)), LevelFilter::Debug);
        assert_eq!(level_filter(Some(3)), LevelFilter::Trace);
        assert_eq!(level_filter(Some(42)), LevelFilter::Trace);
    }
}
