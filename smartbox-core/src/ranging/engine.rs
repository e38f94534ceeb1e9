//! Echo ranging state machine
//!
//! One measurement cycle:
//!
//! ```text
//!          request()           rising edge           falling edge
//!   Idle ───────────► Triggered ─────────► TimingEcho ────────────► Idle
//!     ▲                   │                     │      (publish, settle)
//!     └───────────────────┴─────────────────────┘
//!              overflow count exceeds the timeout bound
//! ```
//!
//! The engine has one entry point per event. In the firmware each is called
//! from its own interrupt with the engine behind a critical-section mutex.
//! The main loop only ever sees the [`Distance`] returned by
//! [`EchoRanging::request`].

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use smartbox_hal::FreeRunningCounter;

use super::distance::Distance;
use crate::config::RangingConfig;
use crate::traits::RangeFinder;

/// Progress of the current measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RangingState {
    /// No measurement in flight
    Idle,
    /// Trigger pulse sent, waiting for the echo to start
    Triggered,
    /// Echo line high, counting its width
    TimingEcho,
}

/// Echo line transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Rising,
    Falling,
}

impl Edge {
    /// Edge implied by the level read right after a pin-change interrupt
    pub fn from_level(high: bool) -> Self {
        if high {
            Edge::Rising
        } else {
            Edge::Falling
        }
    }
}

/// Cycle outcome counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RangingStats {
    /// Cycles that produced a sample
    pub completed: u32,
    /// Cycles abandoned after the timeout bound
    pub timeouts: u32,
    /// Requests ignored because a cycle was in flight
    pub busy: u32,
}

/// HC-SR04-style ranging engine
///
/// - `P` drives the trigger line
/// - `C` times the echo pulse
/// - `D` provides the trigger pulse width and the settle delay
pub struct EchoRanging<P, C, D> {
    trigger: P,
    counter: C,
    delay: D,
    config: RangingConfig,
    ticks_per_cm: u32,
    timeout_overflows: u32,
    state: RangingState,
    overflows: u32,
    sample: Distance,
    stats: RangingStats,
}

impl<P, C, D> EchoRanging<P, C, D>
where
    P: OutputPin,
    C: FreeRunningCounter,
    D: DelayNs,
{
    /// Create an idle engine with the trigger line low
    pub fn new(mut trigger: P, counter: C, delay: D, config: RangingConfig) -> Self {
        let _ = trigger.set_low();
        Self {
            trigger,
            counter,
            delay,
            ticks_per_cm: config.ticks_per_cm(),
            timeout_overflows: config.timeout_overflows(),
            config,
            state: RangingState::Idle,
            overflows: 0,
            sample: Distance::NONE,
            stats: RangingStats::default(),
        }
    }

    /// Start a measurement if idle; return the last completed sample
    pub fn request(&mut self) -> Distance {
        if self.state != RangingState::Idle {
            self.stats.busy = self.stats.busy.wrapping_add(1);
            return self.sample;
        }

        if self.trigger.set_high().is_err() {
            let _ = self.trigger.set_low();
            return self.sample;
        }
        self.delay.delay_us(self.config.trigger_pulse_us);
        let _ = self.trigger.set_low();

        self.restart_counter();
        self.state = RangingState::Triggered;
        self.sample
    }

    /// Echo line edge handler
    pub fn on_edge(&mut self, edge: Edge) {
        match (self.state, edge) {
            (RangingState::Triggered, Edge::Rising) => {
                self.restart_counter();
                self.state = RangingState::TimingEcho;
            }
            (RangingState::TimingEcho, Edge::Falling) => {
                // Count before the wrap flag: a wrap between the two reads
                // leaves a large count and must not be added again
                let count = self.counter.count();
                let mut overflows = self.overflows;
                if self.counter.wrap_pending() && count < self.config.timer_period / 2 {
                    overflows = overflows.saturating_add(1);
                }
                let elapsed = overflows
                    .saturating_mul(self.config.timer_period)
                    .saturating_add(count);
                self.sample = Distance::from_ticks(elapsed, self.ticks_per_cm);
                self.stats.completed = self.stats.completed.wrapping_add(1);

                self.delay.delay_ms(self.config.settle_ms);
                self.overflows = 0;
                self.state = RangingState::Idle;
            }
            // Stray edge
            _ => {}
        }
    }

    /// Echo timer overflow handler
    ///
    /// A late interrupt for a wrap already acknowledged by an edge is not
    /// counted.
    pub fn on_timer_overflow(&mut self) {
        let wrapped = self.counter.wrap_pending();
        self.counter.rearm();

        if !wrapped || self.state == RangingState::Idle {
            return;
        }
        self.overflows = self.overflows.saturating_add(1);
        if self.overflows > self.timeout_overflows {
            self.overflows = 0;
            self.state = RangingState::Idle;
            self.stats.timeouts = self.stats.timeouts.wrapping_add(1);
        }
    }

    /// Zero the counter and drop any wrap that happened before it
    fn restart_counter(&mut self) {
        self.counter.reset();
        self.counter.rearm();
        self.overflows = 0;
    }

    /// Last completed sample
    pub fn last_sample(&self) -> Distance {
        self.sample
    }

    pub fn state(&self) -> RangingState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == RangingState::Idle
    }

    pub fn stats(&self) -> RangingStats {
        self.stats
    }

    pub fn config(&self) -> &RangingConfig {
        &self.config
    }

    /// Give back the peripherals
    pub fn release(self) -> (P, C, D) {
        (self.trigger, self.counter, self.delay)
    }
}

impl<P, C, D> RangeFinder for EchoRanging<P, C, D>
where
    P: OutputPin,
    C: FreeRunningCounter,
    D: DelayNs,
{
    fn request_distance(&mut self) -> Distance {
        self.request()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use embedded_hal::digital::{ErrorKind, ErrorType};
    use proptest::prelude::*;
    use smartbox_hal::OverflowTimer;
    use std::rc::Rc;

    const PERIOD: u32 = 256;
    const BOUND: u32 = 148;

    /// Trigger pin that counts pulses
    #[derive(Clone, Default)]
    struct MockTrigger {
        high: Rc<Cell<bool>>,
        pulses: Rc<Cell<u32>>,
        fail: Rc<Cell<bool>>,
    }

    impl ErrorType for MockTrigger {
        type Error = ErrorKind;
    }

    impl OutputPin for MockTrigger {
        fn set_high(&mut self) -> Result<(), ErrorKind> {
            if self.fail.get() {
                return Err(ErrorKind::Other);
            }
            if !self.high.get() {
                self.pulses.set(self.pulses.get() + 1);
            }
            self.high.set(true);
            Ok(())
        }

        fn set_low(&mut self) -> Result<(), ErrorKind> {
            self.high.set(false);
            Ok(())
        }
    }

    /// Counter whose value the test sets directly
    #[derive(Clone, Default)]
    struct MockCounter {
        value: Rc<Cell<u32>>,
        resets: Rc<Cell<u32>>,
        rearms: Rc<Cell<u32>>,
        pending: Rc<Cell<bool>>,
    }

    impl OverflowTimer for MockCounter {
        fn rearm(&mut self) {
            self.pending.set(false);
            self.rearms.set(self.rearms.get() + 1);
        }
    }

    impl FreeRunningCounter for MockCounter {
        fn reset(&mut self) {
            self.value.set(0);
            self.resets.set(self.resets.get() + 1);
        }

        fn count(&self) -> u32 {
            self.value.get()
        }

        fn wrap_pending(&self) -> bool {
            self.pending.get()
        }
    }

    /// Delay that only adds up the time asked for
    #[derive(Clone, Default)]
    struct MockDelay {
        total_ns: Rc<Cell<u64>>,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns.set(self.total_ns.get() + ns as u64);
        }
    }

    type Engine = EchoRanging<MockTrigger, MockCounter, MockDelay>;

    fn engine() -> (Engine, MockTrigger, MockCounter, MockDelay) {
        let trigger = MockTrigger::default();
        let counter = MockCounter::default();
        let delay = MockDelay::default();
        let engine = EchoRanging::new(
            trigger.clone(),
            counter.clone(),
            delay.clone(),
            RangingConfig::DEFAULT,
        );
        (engine, trigger, counter, delay)
    }

    /// Counter wraps and its interrupt is delivered right away
    fn wrap(engine: &mut Engine, counter: &MockCounter) {
        counter.pending.set(true);
        engine.on_timer_overflow();
    }

    /// Run a full cycle with an echo `width` ticks wide
    fn echo(engine: &mut Engine, counter: &MockCounter, width: u32) {
        engine.request();
        engine.on_edge(Edge::Rising);
        for _ in 0..width / PERIOD {
            wrap(engine, counter);
        }
        counter.value.set(width % PERIOD);
        engine.on_edge(Edge::Falling);
    }

    #[test]
    fn test_starts_idle_with_trigger_low() {
        let (engine, trigger, _, _) = engine();
        assert!(engine.is_idle());
        assert!(!trigger.high.get());
        assert_eq!(engine.last_sample(), Distance::NONE);
    }

    #[test]
    fn test_request_sends_one_pulse() {
        let (mut engine, trigger, counter, delay) = engine();

        assert_eq!(engine.request(), Distance::NONE);
        assert_eq!(trigger.pulses.get(), 1);
        assert!(!trigger.high.get());
        assert_eq!(counter.resets.get(), 1);
        assert_eq!(delay.total_ns.get(), 15_000);
        assert_eq!(engine.state(), RangingState::Triggered);
    }

    #[test]
    fn test_twenty_centimeters_is_proximate() {
        let (mut engine, _, counter, delay) = engine();
        echo(&mut engine, &counter, 1160);

        assert_eq!(engine.last_sample().cm(), 20);
        assert!(engine.is_idle());
        let cm = engine.request().cm();
        assert!(engine.config().is_proximate(cm));
        // Trigger pulse, settle, second trigger pulse
        assert_eq!(delay.total_ns.get(), 15_000 + 40_000_000 + 15_000);
    }

    #[test]
    fn test_twenty_one_centimeters_is_not_proximate() {
        let (mut engine, _, counter, _) = engine();
        echo(&mut engine, &counter, 1218);

        assert_eq!(engine.last_sample().cm(), 21);
        assert!(!engine.config().is_proximate(engine.last_sample().cm()));
    }

    #[test]
    fn test_timeout_then_retrigger() {
        let (mut engine, trigger, counter, _) = engine();
        echo(&mut engine, &counter, 1160);
        assert_eq!(engine.last_sample().cm(), 20);

        engine.request();
        engine.on_edge(Edge::Rising);
        for _ in 0..BOUND {
            wrap(&mut engine, &counter);
        }
        assert_eq!(engine.state(), RangingState::TimingEcho);

        wrap(&mut engine, &counter);
        assert!(engine.is_idle());
        assert_eq!(engine.last_sample().cm(), 20);
        assert_eq!(engine.stats().timeouts, 1);

        // A late falling edge is ignored
        engine.on_edge(Edge::Falling);
        assert_eq!(engine.stats().completed, 1);

        echo(&mut engine, &counter, 58 * 35);
        assert_eq!(engine.last_sample().cm(), 35);
        assert_eq!(trigger.pulses.get(), 3);
    }

    #[test]
    fn test_timeout_without_echo() {
        let (mut engine, _, counter, _) = engine();
        engine.request();
        for _ in 0..=BOUND {
            wrap(&mut engine, &counter);
        }
        assert!(engine.is_idle());
        assert_eq!(engine.last_sample(), Distance::NONE);
    }

    #[test]
    fn test_no_reentry_while_busy() {
        let (mut engine, trigger, counter, delay) = engine();
        engine.request();
        engine.on_edge(Edge::Rising);
        counter.value.set(77);
        let ns = delay.total_ns.get();

        engine.request();
        assert_eq!(trigger.pulses.get(), 1);
        assert_eq!(counter.resets.get(), 2);
        assert_eq!(counter.value.get(), 77);
        assert_eq!(delay.total_ns.get(), ns);
        assert_eq!(engine.state(), RangingState::TimingEcho);
        assert_eq!(engine.stats().busy, 1);
    }

    #[test]
    fn test_stray_edges_ignored() {
        let (mut engine, _, counter, _) = engine();

        engine.on_edge(Edge::Rising);
        engine.on_edge(Edge::Falling);
        assert!(engine.is_idle());

        engine.request();
        engine.on_edge(Edge::Falling);
        assert_eq!(engine.state(), RangingState::Triggered);

        engine.on_edge(Edge::Rising);
        counter.value.set(100);
        engine.on_edge(Edge::Rising);
        assert_eq!(counter.value.get(), 100);
        assert_eq!(engine.state(), RangingState::TimingEcho);
    }

    #[test]
    fn test_overflow_always_rearms() {
        let (mut engine, _, counter, _) = engine();
        wrap(&mut engine, &counter);
        engine.request();
        assert_eq!(counter.rearms.get(), 2);

        wrap(&mut engine, &counter);
        engine.on_timer_overflow();
        assert_eq!(counter.rearms.get(), 4);
    }

    #[test]
    fn test_wrap_before_rising_edge_not_counted() {
        let (mut engine, _, counter, _) = engine();
        engine.request();

        // Wrap latched while the rising edge is handled; its interrupt
        // arrives after the counter was restarted
        counter.pending.set(true);
        engine.on_edge(Edge::Rising);
        engine.on_timer_overflow();

        counter.value.set(100);
        engine.on_edge(Edge::Falling);
        assert_eq!(engine.last_sample().cm(), 1);
    }

    #[test]
    fn test_wrap_pending_at_falling_edge_is_counted() {
        let (mut engine, _, counter, _) = engine();
        engine.request();
        engine.on_edge(Edge::Rising);
        for _ in 0..5 {
            wrap(&mut engine, &counter);
        }

        // Sixth wrap happened but its interrupt has not run yet
        counter.pending.set(true);
        counter.value.set(28);
        engine.on_edge(Edge::Falling);
        assert_eq!(engine.last_sample().cm(), (6 * PERIOD + 28) / 58);

        // The late interrupt finds the engine idle
        engine.on_timer_overflow();
        assert!(engine.is_idle());
        assert_eq!(engine.last_sample().cm(), 26);
    }

    #[test]
    fn test_wrap_flag_with_late_count_not_added() {
        let (mut engine, _, counter, _) = engine();
        engine.request();
        engine.on_edge(Edge::Rising);
        wrap(&mut engine, &counter);

        // Counter read just before it wrapped
        counter.value.set(250);
        counter.pending.set(true);
        engine.on_edge(Edge::Falling);
        assert_eq!(engine.last_sample().cm(), (PERIOD + 250) / 58);
    }

    #[test]
    fn test_trigger_failure_stays_idle() {
        let (mut engine, trigger, counter, _) = engine();
        trigger.fail.set(true);

        engine.request();
        assert!(engine.is_idle());
        assert!(!trigger.high.get());
        assert_eq!(counter.resets.get(), 0);
    }

    #[test]
    fn test_range_finder_returns_previous_sample() {
        let (mut engine, _, counter, _) = engine();
        echo(&mut engine, &counter, 58 * 12);
        assert_eq!(engine.request_distance().cm(), 12);
    }

    proptest! {
        #[test]
        fn prop_echo_width_round_trip(width in 0u32..(BOUND * PERIOD + PERIOD)) {
            let (mut engine, _, counter, _) = engine();

            echo(&mut engine, &counter, width);
            prop_assert_eq!(engine.last_sample().cm(), width / 58);

            echo(&mut engine, &counter, width);
            prop_assert_eq!(engine.last_sample().cm(), width / 58);
            prop_assert!(engine.is_idle());
        }
    }
}
