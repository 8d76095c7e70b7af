//! Repeating pulse driver for glow effects.
//!
//! Runs until stopped, re-triggering every period: the value rises from
//! 1.0 to `1.0 + amplitude` and back within each cycle. Used by alert
//! cards to pulse their glow; the card samples `value()` each frame.

use log::trace;
use std::cell::RefCell;
use std::f32::consts::PI;
use std::rc::Rc;

use crate::clock::{FrameCallbackRegistration, FrameClock};

struct PulseInner {
    period_nanos: u64,
    amplitude: f32,
    start_nanos: Option<u64>,
    value: f32,
    registration: Option<FrameCallbackRegistration>,
    running: bool,
}

/// Interval-based repeating pulse animation.
pub struct Pulse {
    inner: Rc<RefCell<PulseInner>>,
    clock: FrameClock,
}

impl Pulse {
    pub fn new(clock: FrameClock, period_millis: u64, amplitude: f32) -> Self {
        Self {
            inner: Rc::new(RefCell::new(PulseInner {
                period_nanos: period_millis.max(1) * 1_000_000,
                amplitude: amplitude.max(0.0),
                start_nanos: None,
                value: 1.0,
                registration: None,
                running: false,
            })),
            clock,
        }
    }

    /// Start pulsing. No-op if already running.
    pub fn start(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.running {
                return;
            }
            inner.running = true;
            inner.start_nanos = None;
            trace!("pulse started, period {}ns", inner.period_nanos);
        }
        schedule_pulse_frame(self.inner.clone(), self.clock.clone());
    }

    /// Stop pulsing and reset the value to rest.
    pub fn stop(&self) {
        let mut inner = self.inner.borrow_mut();
        if !inner.running {
            return;
        }
        inner.running = false;
        inner.start_nanos = None;
        inner.value = 1.0;
        inner.registration = None;
        trace!("pulse stopped");
    }

    /// Current pulse value in `[1.0, 1.0 + amplitude]`.
    pub fn value(&self) -> f32 {
        self.inner.borrow().value
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running
    }
}

impl Clone for Pulse {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            clock: self.clock.clone(),
        }
    }
}

fn schedule_pulse_frame(state: Rc<RefCell<PulseInner>>, clock: FrameClock) {
    let weak = Rc::downgrade(&state);
    let next_clock = clock.clone();
    let registration = clock.with_frame_nanos(move |frame_time_nanos| {
        let Some(state) = weak.upgrade() else {
            return;
        };
        let keep_running = {
            let mut inner = state.borrow_mut();
            inner.registration = None;
            if !inner.running {
                false
            } else {
                let start = *inner.start_nanos.get_or_insert(frame_time_nanos);
                let elapsed = frame_time_nanos.saturating_sub(start);
                let phase = (elapsed % inner.period_nanos) as f32 / inner.period_nanos as f32;
                inner.value = 1.0 + inner.amplitude * (PI * phase).sin();
                true
            }
        };
        if keep_running {
            schedule_pulse_frame(state, next_clock);
        }
    });
    state.borrow_mut().registration = Some(registration);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::Runtime;

    #[test]
    fn pulse_peaks_mid_cycle_and_returns_to_rest() {
        let runtime = Runtime::new();
        let handle = runtime.handle();
        let pulse = Pulse::new(handle.frame_clock(), 1_000, 0.2);

        pulse.start();
        handle.drain_frame_callbacks(0);
        assert!((pulse.value() - 1.0).abs() < 1e-6);

        handle.drain_frame_callbacks(500_000_000);
        assert!((pulse.value() - 1.2).abs() < 1e-3);

        handle.drain_frame_callbacks(1_000_000_000);
        assert!((pulse.value() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn stopped_pulse_rests_and_unregisters() {
        let runtime = Runtime::new();
        let handle = runtime.handle();
        let pulse = Pulse::new(handle.frame_clock(), 1_000, 0.2);

        pulse.start();
        handle.drain_frame_callbacks(0);
        handle.drain_frame_callbacks(500_000_000);
        pulse.stop();

        assert_eq!(pulse.value(), 1.0);
        assert!(!pulse.is_running());

        handle.drain_frame_callbacks(750_000_000);
        assert_eq!(pulse.value(), 1.0);
    }

    #[test]
    fn start_is_idempotent() {
        let runtime = Runtime::new();
        let handle = runtime.handle();
        let pulse = Pulse::new(handle.frame_clock(), 1_000, 0.2);

        pulse.start();
        pulse.start();
        handle.drain_frame_callbacks(0);
        handle.drain_frame_callbacks(250_000_000);

        assert!(pulse.is_running());
        assert!(pulse.value() > 1.0);
    }
}
