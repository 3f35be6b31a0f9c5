//! Waiting between iterations and while feedback is shown.

use std::cell::RefCell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

pub trait Pace {
    /// Blocks for the given duration, or pretends to.
    fn sleep(&mut self, duration: Duration);
}

/// Really sleeps, on the current thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPace;

impl Pace for ThreadPace {
    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration)
    }
}

/// Does not sleep but remembers every requested sleep, so a
/// full gate run can be checked without waiting for it.
#[derive(Debug, Default, Clone)]
pub struct RecordingPace(Rc<RefCell<Vec<Duration>>>);

impl RecordingPace {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn sleeps(&self) -> Vec<Duration> {
        self.0.borrow().clone()
    }

    /// Sum of all requested sleeps.
    pub fn total(&self) -> Duration {
        self.0.borrow().iter().sum()
    }
}

impl Pace for RecordingPace {
    fn sleep(&mut self, duration: Duration) {
        self.0.borrow_mut().push(duration)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn clones_share_record() {
        // given
        let pace = RecordingPace::new();
        let mut handed_out = pace.clone();

        // when
        handed_out.sleep(Duration::from_millis(50));
        handed_out.sleep(Duration::from_secs(2));

        // then
        assert_eq!(
            pace.sleeps(),
            vec![Duration::from_millis(50), Duration::from_secs(2)]
        );
        assert_eq!(pace.total(), Duration::from_millis(2050));
    }
}
