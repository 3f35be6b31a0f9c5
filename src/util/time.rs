use failure::{bail, Error};
use std::time::Duration;

/// Converts whole seconds specified as a float to a duration.
///
/// Maximum accuracy of the returned duration is microseconds,
/// sub-microseconds are truncated.
///
/// Negative, `NaN` and infinite inputs return an error, and so
/// do whole seconds that do not fit into `u64`.
pub fn to_duration(secs: f64) -> Result<Duration, Error> {
    if !secs.is_finite() {
        bail!(
            "Duration must be a finite, non-NaN number, instead got: {}",
            secs
        )
    } else if secs < 0.0 {
        bail!("Duration may not be negative: {}", secs)
    } else {
        const MAX_SECS: f64 = std::u64::MAX as f64;

        let whole_secs_floating = secs.trunc();
        if whole_secs_floating >= MAX_SECS {
            bail!("Duration is too high, numeric overflow: {}", secs)
        }

        // always less than a million and cannot overflow
        let micros = ((secs - whole_secs_floating) * 1_000_000.0) as u64;

        Ok(Duration::from_secs(whole_secs_floating as u64) + Duration::from_micros(micros))
    }
}

/// How many whole periods fit into the given total duration.
///
/// Saturates at `u32::MAX`. A zero period yields zero periods.
pub fn whole_periods(total: Duration, period: Duration) -> u32 {
    let period = period.as_micros();
    if period == 0 {
        return 0;
    }

    let count = total.as_micros() / period;
    if count > u128::from(std::u32::MAX) {
        std::u32::MAX
    } else {
        count as u32
    }
}
