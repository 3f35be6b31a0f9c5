use crate::senses::{Buttons, Direction};
use crate::states::{Attempt, Passcode};

use log::{debug, info, trace};

use std::time::Duration;

/// Where the gate currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingInput,
    Accepted,
    TimedOut,
}

/// How the gate ended. Both let the boot continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Accepted,
    TimedOut,
}

impl Phase {
    /// `None` while still awaiting input.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            Phase::AwaitingInput => None,
            Phase::Accepted => Some(Outcome::Accepted),
            Phase::TimedOut => Some(Outcome::TimedOut),
        }
    }

    pub fn is_terminal(self) -> bool {
        self.outcome().is_some()
    }
}

/// Something the user should be shown for a while after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Submitted attempt matched, the gate is done.
    Accepted,
    /// Submitted attempt did not match and has been cleared.
    Rejected,
    /// No input for too long, the gate is done.
    Expired,
}

/// Everything that changes while the gate is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateState {
    phase: Phase,
    attempt: Attempt,
    /// Steps since the last press or reset.
    idle_ticks: u32,
}

impl GateState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn attempt(&self) -> &Attempt {
        &self.attempt
    }

    pub fn idle_ticks(&self) -> u32 {
        self.idle_ticks
    }

    fn reset_input(&mut self) {
        self.attempt.clear();
        self.idle_ticks = 0;
    }
}

/// Result of feeding one iteration worth of input to the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub state: GateState,
    pub feedback: Option<Feedback>,
}

/// The rules of the gate: what to accept, in which order
/// directions count, and when to give up.
///
/// Holds no mutable state, see `GateState`.
#[derive(Debug, Clone)]
pub struct Gate {
    passcode: Passcode,
    priority: [Direction; 4],
    timeout_ticks: u32,
    tick: Duration,
}

impl Gate {
    /// Creates a gate that times out after `timeout_ticks`
    /// steps without input, where each step takes `tick`.
    ///
    /// At least one step is always granted.
    pub fn new(
        passcode: Passcode,
        priority: [Direction; 4],
        timeout_ticks: u32,
        tick: Duration,
    ) -> Self {
        Gate {
            passcode,
            priority,
            timeout_ticks: timeout_ticks.max(1),
            tick,
        }
    }

    pub fn initial(&self) -> GateState {
        GateState {
            phase: Phase::AwaitingInput,
            attempt: Attempt::new(),
            idle_ticks: 0,
        }
    }

    pub fn passcode_len(&self) -> usize {
        self.passcode.len()
    }

    pub fn timeout_ticks(&self) -> u32 {
        self.timeout_ticks
    }

    /// Whole seconds left until the gate gives up, rounded down.
    pub fn remaining_secs(&self, state: &GateState) -> u64 {
        let ticks_left = u64::from(self.timeout_ticks.saturating_sub(state.idle_ticks));
        let secs_left = u128::from(ticks_left) * self.tick.as_micros() / 1_000_000;
        if secs_left > u128::from(std::u64::MAX) {
            std::u64::MAX
        } else {
            secs_left as u64
        }
    }

    /// Advances the gate by one iteration with the buttons that
    /// were newly pressed in it.
    ///
    /// Only one direction counts per step, the first of the
    /// priority order. Submit is evaluated before reset. Terminal
    /// states are returned unchanged.
    pub fn step(&self, mut state: GateState, pressed: Buttons) -> Step {
        if state.phase.is_terminal() {
            return Step {
                state,
                feedback: None,
            };
        }

        let mut feedback = None;

        if !pressed.is_empty() {
            state.idle_ticks = 0;
        }

        if let Some(direction) = pressed.first_direction(&self.priority) {
            let limit = self.passcode.len();
            if state.attempt.push(direction, limit) {
                trace!("symbol {}/{} entered", state.attempt.len(), limit);
            } else {
                trace!("attempt is full, ignoring direction");
            }
        }

        if pressed.contains(Buttons::SUBMIT) {
            if self.passcode.matches(&state.attempt) {
                info!("passcode accepted");
                state.phase = Phase::Accepted;
                return Step {
                    state,
                    feedback: Some(Feedback::Accepted),
                };
            }

            info!(
                "passcode rejected after {} of {} symbols",
                state.attempt.len(),
                self.passcode.len()
            );
            state.reset_input();
            feedback = Some(Feedback::Rejected);
        }

        if pressed.contains(Buttons::RESET) {
            debug!("attempt reset");
            state.reset_input();
        }

        state.idle_ticks += 1;
        if state.idle_ticks >= self.timeout_ticks {
            info!("no input for {} steps, timing out", state.idle_ticks);
            state.phase = Phase::TimedOut;
            feedback = Some(Feedback::Expired);
        }

        Step { state, feedback }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::senses::Direction::{Down, Left, Right, Up};

    use rand::Rng;

    const CORRECT: [Direction; 9] = [Right, Down, Up, Up, Left, Down, Down, Up, Down];

    fn gate() -> Gate {
        Gate::new(
            Passcode::default(),
            Direction::PRIORITY,
            600,
            Duration::from_millis(50),
        )
    }

    /// Steps through all presses and returns the last step.
    fn run(gate: &Gate, presses: &[Buttons]) -> Step {
        let mut step = Step {
            state: gate.initial(),
            feedback: None,
        };
        for pressed in presses {
            step = gate.step(step.state, *pressed);
        }
        step
    }

    fn presses_of(directions: &[Direction]) -> Vec<Buttons> {
        directions.iter().map(|d| d.button()).collect()
    }

    #[test]
    fn correct_sequence_is_accepted() {
        // given
        let gate = gate();
        let mut presses = presses_of(&CORRECT);
        presses.push(Buttons::SUBMIT);

        // when
        let step = run(&gate, &presses);

        // then
        assert_eq!(step.feedback, Some(Feedback::Accepted));
        assert_eq!(step.state.phase(), Phase::Accepted);
        assert_eq!(step.state.phase().outcome(), Some(Outcome::Accepted));
    }

    #[test]
    fn nine_ups_are_rejected_and_cleared() {
        // given
        let gate = gate();
        let mut presses = vec![Buttons::UP; 9];
        presses.push(Buttons::SUBMIT);

        // when
        let step = run(&gate, &presses);

        // then
        assert_eq!(step.feedback, Some(Feedback::Rejected));
        assert_eq!(step.state.phase(), Phase::AwaitingInput);
        assert!(step.state.attempt().is_empty());
        assert_eq!(step.state.idle_ticks(), 1);
    }

    #[test]
    fn correct_after_rejection_is_accepted() {
        let gate = gate();
        let mut presses = vec![Buttons::LEFT, Buttons::SUBMIT];
        presses.extend(presses_of(&CORRECT));
        presses.push(Buttons::SUBMIT);

        let step = run(&gate, &presses);

        assert_eq!(step.state.phase(), Phase::Accepted);
    }

    #[test]
    fn every_proper_prefix_is_rejected() {
        let gate = gate();

        for len in 0..CORRECT.len() {
            let mut presses = presses_of(&CORRECT[..len]);
            presses.push(Buttons::SUBMIT);

            let step = run(&gate, &presses);

            assert_eq!(
                step.feedback,
                Some(Feedback::Rejected),
                "prefix of length {} must not be accepted",
                len
            );
        }
    }

    #[test]
    fn random_wrong_sequences_are_rejected() {
        let gate = gate();
        let mut rng = rand::thread_rng();

        for _ in 0..200 {
            let attempt: Vec<Direction> = (0..CORRECT.len())
                .map(|_| Direction::PRIORITY[rng.gen_range(0, 4)])
                .collect();
            if attempt[..] == CORRECT[..] {
                continue;
            }
            let mut presses = presses_of(&attempt);
            presses.push(Buttons::SUBMIT);

            let step = run(&gate, &presses);

            assert_eq!(step.feedback, Some(Feedback::Rejected));
            assert_eq!(step.state.attempt().len(), 0);
        }
    }

    #[test]
    fn directions_beyond_passcode_length_are_ignored() {
        // given
        let gate = gate();
        let mut presses = presses_of(&CORRECT);
        presses.extend(vec![Buttons::LEFT; 5]);

        // when
        let full = run(&gate, &presses);
        let submitted = gate.step(full.state.clone(), Buttons::SUBMIT);

        // then
        assert_eq!(full.state.attempt().len(), CORRECT.len());
        assert_eq!(
            submitted.state.phase(),
            Phase::Accepted,
            "Ignored extra directions must not spoil a full correct attempt"
        );
    }

    #[test]
    fn one_direction_per_step_in_priority_order() {
        // given
        let gate = gate();
        let all = Buttons::UP | Buttons::DOWN | Buttons::LEFT | Buttons::RIGHT;
        let left_and_right = Buttons::LEFT | Buttons::RIGHT;

        // when
        let step = run(&gate, &[all, left_and_right]);

        // then
        assert_eq!(
            step.state.attempt().symbols().collect::<Vec<_>>(),
            vec![Up, Left]
        );
    }

    #[test]
    fn direction_and_submit_in_same_step() {
        // last symbol and submit arrive together
        let gate = gate();
        let mut presses = presses_of(&CORRECT[..8]);
        presses.push(Buttons::DOWN | Buttons::SUBMIT);

        let step = run(&gate, &presses);

        assert_eq!(step.state.phase(), Phase::Accepted);
    }

    #[test]
    fn reset_clears_attempt_and_idle_ticks() {
        // given
        let gate = gate();
        let mut state = run(&gate, &presses_of(&CORRECT[..4])).state;
        for _ in 0..100 {
            state = gate.step(state, Buttons::empty()).state;
        }
        // one tick from the last press
        assert_eq!(state.idle_ticks(), 101);

        // when
        let step = gate.step(state, Buttons::RESET);

        // then
        assert!(step.state.attempt().is_empty());
        assert_eq!(step.feedback, None);
        // incremented once after the reset in the same step
        assert_eq!(step.state.idle_ticks(), 1);
    }

    #[test]
    fn reset_on_empty_attempt() {
        let gate = gate();

        let step = run(&gate, &[Buttons::RESET]);

        assert!(step.state.attempt().is_empty());
        assert_eq!(step.state.idle_ticks(), 1);
    }

    #[test]
    fn submit_then_reset_in_same_step_rejects() {
        let gate = gate();
        let mut presses = presses_of(&CORRECT[..3]);
        presses.push(Buttons::SUBMIT | Buttons::RESET);

        let step = run(&gate, &presses);

        assert_eq!(step.feedback, Some(Feedback::Rejected));
        assert!(step.state.attempt().is_empty());
    }

    #[test]
    fn times_out_after_600_idle_steps() {
        // given
        let gate = gate();
        let mut state = gate.initial();

        // when
        for _ in 0..599 {
            let step = gate.step(state, Buttons::empty());
            assert_eq!(step.feedback, None);
            state = step.state;
        }
        let last = gate.step(state, Buttons::empty());

        // then
        assert_eq!(last.feedback, Some(Feedback::Expired));
        assert_eq!(last.state.phase(), Phase::TimedOut);
        assert_eq!(last.state.phase().outcome(), Some(Outcome::TimedOut));
    }

    #[test]
    fn times_out_regardless_of_attempt() {
        let gate = gate();
        let mut state = run(&gate, &presses_of(&CORRECT)).state;

        for _ in 0..600 {
            state = gate.step(state, Buttons::empty()).state;
        }

        assert_eq!(state.phase(), Phase::TimedOut);
    }

    #[test]
    fn any_press_restarts_timeout() {
        // given
        let gate = gate();
        let mut state = gate.initial();
        for _ in 0..599 {
            state = gate.step(state, Buttons::empty()).state;
        }

        // when
        let step = gate.step(state, Buttons::UP);

        // then
        assert_eq!(step.state.phase(), Phase::AwaitingInput);
        assert_eq!(step.state.idle_ticks(), 1);
    }

    #[test]
    fn press_on_full_attempt_still_restarts_timeout() {
        let gate = gate();
        let mut state = run(&gate, &presses_of(&CORRECT)).state;
        for _ in 0..300 {
            state = gate.step(state, Buttons::empty()).state;
        }

        let step = gate.step(state, Buttons::DOWN);

        assert_eq!(step.state.idle_ticks(), 1);
        assert_eq!(step.state.attempt().len(), CORRECT.len());
    }

    #[test]
    fn terminal_state_is_not_stepped() {
        let gate = gate();
        let mut presses = presses_of(&CORRECT);
        presses.push(Buttons::SUBMIT);
        let accepted = run(&gate, &presses).state;

        let step = gate.step(accepted.clone(), Buttons::RESET);

        assert_eq!(step.state, accepted);
        assert_eq!(step.feedback, None);
    }

    #[test]
    fn countdown_in_whole_seconds() {
        // given
        let gate = gate();
        let mut state = gate.initial();

        // when
        let initially = gate.remaining_secs(&state);
        for _ in 0..21 {
            state = gate.step(state, Buttons::empty()).state;
        }
        let after_21_ticks = gate.remaining_secs(&state);

        // then
        assert_eq!(initially, 30);
        // 579 ticks of 50ms are 28.95 seconds
        assert_eq!(after_21_ticks, 28);
    }

    #[test]
    fn countdown_with_sub_millisecond_ticks() {
        // given
        let tick = Duration::from_micros(500);
        let gate = Gate::new(Passcode::default(), Direction::PRIORITY, 60_000, tick);
        let mut state = gate.initial();

        // when
        let initially = gate.remaining_secs(&state);
        for _ in 0..2_000 {
            state = gate.step(state, Buttons::empty()).state;
        }
        let after_one_second = gate.remaining_secs(&state);

        // then
        assert_eq!(initially, 30);
        assert_eq!(after_one_second, 29);
    }

    #[test]
    fn zero_timeout_grants_one_step() {
        let gate = Gate::new(
            Passcode::default(),
            Direction::PRIORITY,
            0,
            Duration::from_millis(50),
        );

        let step = gate.step(gate.initial(), Buttons::empty());

        assert_eq!(gate.timeout_ticks(), 1);
        assert_eq!(step.feedback, Some(Feedback::Expired));
    }
}
