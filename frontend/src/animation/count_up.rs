use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::config;

/// What a counter animates to, and how fast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterSpec {
    pub target: u64,
    pub suffix: &'static str,
    pub duration_ms: u32,
    pub steps: u32,
}

impl CounterSpec {
    pub fn new(target: u64, suffix: &'static str) -> Self {
        Self::with_timing(target, suffix, config::COUNT_UP_DURATION_MS, config::COUNT_UP_STEPS)
    }

    /// Zero durations and step counts are clamped to 1.
    pub fn with_timing(target: u64, suffix: &'static str, duration_ms: u32, steps: u32) -> Self {
        Self {
            target,
            suffix,
            duration_ms: duration_ms.max(1),
            steps: steps.max(1),
        }
    }

    pub fn format(&self, value: u64) -> String {
        format!("{}{}", value, self.suffix)
    }

    /// Delay between two ticks, never below 1ms.
    pub fn interval_ms(&self) -> u32 {
        (self.duration_ms / self.steps).max(1)
    }

    /// Displayed value after `step` ticks.
    pub fn value_at(&self, step: u32) -> u64 {
        if step >= self.steps {
            return self.target;
        }
        let scaled = u128::from(self.target) * u128::from(step) / u128::from(self.steps);
        // scaled < target here, so it fits.
        scaled as u64
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub step: u32,
    pub value: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Finished,
    Cancelled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Ticks must now be scheduled every `interval_ms`.
    Started { interval_ms: u32 },
    /// Nothing to animate, the counter already shows its target.
    Completed,
    /// Not idle, so activation changed nothing.
    Ignored,
}

/// Count-up from zero as an explicit state machine.
///
/// Ticks only advance a `Running` counter, so a late timer callback after
/// `cancel` or after the final frame is a no-op.
#[derive(Clone, Debug)]
pub struct CountUp {
    spec: CounterSpec,
    phase: Phase,
    frame: Frame,
}

impl CountUp {
    pub fn new(spec: CounterSpec) -> Self {
        Self {
            spec,
            phase: Phase::Idle,
            frame: Frame::default(),
        }
    }

    pub fn activate(&mut self) -> Activation {
        if self.phase != Phase::Idle {
            return Activation::Ignored;
        }
        if self.spec.target == 0 {
            self.phase = Phase::Finished;
            return Activation::Completed;
        }
        self.phase = Phase::Running;
        Activation::Started {
            interval_ms: self.spec.interval_ms(),
        }
    }

    /// Advances one step, returning the new frame while running.
    pub fn tick(&mut self) -> Option<Frame> {
        if self.phase != Phase::Running {
            return None;
        }
        let step = self.frame.step + 1;
        self.frame = Frame {
            step,
            value: self.spec.value_at(step),
        };
        if self.frame.value >= self.spec.target {
            self.frame.value = self.spec.target;
            self.phase = Phase::Finished;
        }
        Some(self.frame)
    }

    pub fn cancel(&mut self) {
        if matches!(self.phase, Phase::Idle | Phase::Running) {
            self.phase = Phase::Cancelled;
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn spec(&self) -> &CounterSpec {
        &self.spec
    }
}

/// Activates `machine` when `active` and returns the delay before its next
/// tick, or `None` when no timer should run.
///
/// Safe to call on every effect run: an already running counter just asks for
/// its next step, and an idle counter stays idle until `active` is true.
pub fn next_tick(machine: &mut CountUp, active: bool) -> Option<u32> {
    if !active {
        return None;
    }
    match machine.activate() {
        Activation::Started { interval_ms } => {
            debug!("count-up to {} started", machine.spec().target);
            Some(interval_ms)
        }
        Activation::Ignored if machine.phase() == Phase::Running => {
            Some(machine.spec().interval_ms())
        }
        Activation::Completed | Activation::Ignored => None,
    }
}

/// Drives a `CountUp` once `active` turns true and returns its latest frame.
///
/// Each step is a single `Timeout` owned by the effect for the current frame,
/// so a re-render or unmount drops (and cancels) whatever is pending.
#[hook]
pub fn use_count_up(spec: CounterSpec, active: bool) -> Frame {
    let counter: Rc<RefCell<CountUp>> = use_mut_ref(|| CountUp::new(spec));
    let frame = use_state_eq(Frame::default);
    let current = *frame;

    {
        let counter = counter.clone();
        let frame = frame.clone();
        use_effect_with_deps(
            move |(active, _)| {
                let (delay, settled) = {
                    let mut machine = counter.borrow_mut();
                    let delay = next_tick(&mut machine, *active);
                    (delay, machine.frame())
                };
                // Borrow released first, set() may re-render synchronously.
                frame.set(settled);

                let pending = delay.map(|interval_ms| {
                    Timeout::new(interval_ms, move || {
                        let next = counter.borrow_mut().tick();
                        if let Some(next) = next {
                            frame.set(next);
                        }
                    })
                });
                move || drop(pending)
            },
            (active, current),
        );
    }

    use_effect_with_deps(
        move |_| {
            move || {
                let mut machine = counter.borrow_mut();
                if machine.phase() == Phase::Running {
                    debug!("count-up to {} cancelled", machine.spec().target);
                }
                machine.cancel();
            }
        },
        (),
    );

    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn shown(counter: &CountUp) -> String {
        counter.spec().format(counter.frame().value)
    }

    fn run_to_end(counter: &mut CountUp) -> Vec<u64> {
        let mut values = vec![counter.frame().value];
        while let Some(frame) = counter.tick() {
            values.push(frame.value);
        }
        values
    }

    #[test]
    fn projects_delivered_scenario() {
        let mut counter = CountUp::new(CounterSpec::with_timing(150, "+", 2000, 60));
        assert_eq!(counter.activate(), Activation::Started { interval_ms: 33 });

        let values = run_to_end(&mut counter);
        assert_eq!(&values[..5], &[0, 2, 5, 7, 10]);
        assert_eq!(values.len(), 61);
        assert_eq!(*values.last().unwrap(), 150);
        assert_eq!(shown(&counter), "150+");
        assert_eq!(counter.phase(), Phase::Finished);
    }

    #[test]
    fn percentage_lands_exactly_on_target() {
        let mut counter = CountUp::new(CounterSpec::new(98, "%"));
        counter.activate();
        let values = run_to_end(&mut counter);
        assert_eq!(values[values.len() - 2], 96);
        assert_eq!(shown(&counter), "98%");
    }

    #[test]
    fn zero_target_completes_without_ticks() {
        let mut counter = CountUp::new(CounterSpec::new(0, ""));
        assert_eq!(counter.activate(), Activation::Completed);
        assert_eq!(counter.tick(), None);
        assert_eq!(shown(&counter), "0");
    }

    #[test]
    fn small_target_repeats_values_but_still_ends_on_target() {
        let mut counter = CountUp::new(CounterSpec::with_timing(1, "", 2000, 60));
        counter.activate();
        let values = run_to_end(&mut counter);
        assert!(values[..60].iter().all(|v| *v == 0));
        assert_eq!(values[60], 1);
    }

    #[test]
    fn idle_counter_never_moves() {
        let mut counter = CountUp::new(CounterSpec::new(45, "+"));
        for _ in 0..100 {
            assert_eq!(counter.tick(), None);
        }
        assert_eq!(shown(&counter), "0+");
        assert_eq!(counter.phase(), Phase::Idle);
    }

    #[test]
    fn second_activation_is_ignored() {
        let mut counter = CountUp::new(CounterSpec::new(12, ""));
        assert!(matches!(counter.activate(), Activation::Started { .. }));
        counter.tick();
        let before = counter.frame();
        assert_eq!(counter.activate(), Activation::Ignored);
        assert_eq!(counter.frame(), before);
        assert_eq!(counter.phase(), Phase::Running);
    }

    #[test]
    fn cancel_mid_animation_freezes_value() {
        let mut counter = CountUp::new(CounterSpec::new(150, "+"));
        counter.activate();
        for _ in 0..10 {
            counter.tick();
        }
        let frozen = counter.frame();
        counter.cancel();

        assert_eq!(counter.phase(), Phase::Cancelled);
        assert_eq!(counter.tick(), None);
        assert_eq!(counter.activate(), Activation::Ignored);
        assert_eq!(counter.frame(), frozen);
    }

    #[test]
    fn cancel_after_finish_keeps_finished() {
        let mut counter = CountUp::new(CounterSpec::new(3, ""));
        counter.activate();
        run_to_end(&mut counter);
        counter.cancel();
        assert_eq!(counter.phase(), Phase::Finished);
    }

    #[test]
    fn zero_timing_is_clamped() {
        let spec = CounterSpec::with_timing(10, "", 0, 0);
        assert_eq!(spec.steps, 1);
        assert_eq!(spec.duration_ms, 1);
        assert_eq!(spec.interval_ms(), 1);
    }

    #[test]
    fn interval_never_drops_below_one_ms() {
        let spec = CounterSpec::with_timing(1000, "", 10, 100);
        assert_eq!(spec.interval_ms(), 1);
    }

    #[test]
    fn inactive_counter_schedules_nothing() {
        let mut counter = CountUp::new(CounterSpec::new(150, "+"));
        assert_eq!(next_tick(&mut counter, false), None);
        assert_eq!(counter.phase(), Phase::Idle);
    }

    #[test]
    fn first_activation_schedules_the_interval() {
        let mut counter = CountUp::new(CounterSpec::with_timing(150, "+", 2000, 60));
        assert_eq!(next_tick(&mut counter, true), Some(33));
        assert_eq!(counter.phase(), Phase::Running);
    }

    #[test]
    fn running_counter_reschedules_after_each_frame() {
        let mut counter = CountUp::new(CounterSpec::with_timing(150, "+", 2000, 60));
        next_tick(&mut counter, true);
        counter.tick();
        assert_eq!(next_tick(&mut counter, true), Some(33));
        assert_eq!(counter.frame().step, 1);
    }

    #[test]
    fn finished_or_cancelled_counter_schedules_nothing() {
        let mut finished = CountUp::new(CounterSpec::new(3, ""));
        next_tick(&mut finished, true);
        run_to_end(&mut finished);
        assert_eq!(next_tick(&mut finished, true), None);

        let mut cancelled = CountUp::new(CounterSpec::new(3, ""));
        next_tick(&mut cancelled, true);
        cancelled.cancel();
        assert_eq!(next_tick(&mut cancelled, true), None);
        assert_eq!(cancelled.phase(), Phase::Cancelled);
    }

    #[test]
    fn zero_target_needs_no_timer() {
        let mut counter = CountUp::new(CounterSpec::new(0, "+"));
        assert_eq!(next_tick(&mut counter, true), None);
        assert_eq!(counter.phase(), Phase::Finished);
        assert_eq!(shown(&counter), "0+");
    }

    proptest! {
        #[test]
        fn sequence_is_monotonic_bounded_and_exact(
            target in 0u64..=1_000_000,
            steps in 1u32..=500,
            duration_ms in 1u32..=10_000,
        ) {
            let mut counter = CountUp::new(CounterSpec::with_timing(target, "", duration_ms, steps));
            counter.activate();
            let values = run_to_end(&mut counter);

            prop_assert!(values.windows(2).all(|w| w[0] <= w[1]));
            prop_assert!(values.iter().all(|v| *v <= target));
            prop_assert_eq!(*values.last().unwrap(), target);
            prop_assert!(values.len() <= steps as usize + 1);
            prop_assert_eq!(counter.phase(), Phase::Finished);
        }

        #[test]
        fn large_targets_do_not_overflow(target in (u64::MAX - 1000)..=u64::MAX, steps in 1u32..=120) {
            let mut counter = CountUp::new(CounterSpec::with_timing(target, "", 2000, steps));
            counter.activate();
            let values = run_to_end(&mut counter);
            prop_assert_eq!(*values.last().unwrap(), target);
        }
    }
}
