//! Swipe classification state machine.
//!
//! One `SwipeClassifier` serves one swipeable element. Each drag is a
//! session: `begin` opens it, `update` is fed every sample in arrival
//! order, `end` (or `cancel`) closes it. Sessions are never reused.

use log::debug;

use crate::action_set::ActionSet;
use crate::direction::{Axis, Direction, Orientation};
use crate::sample::{GestureSample, SwipeThresholds};

/// Live feedback for the current sample, consumed by the visual layer.
#[derive(Debug)]
pub struct SwipeFeedback<'a, A> {
    /// Ratio of the dominant-axis translation to the swipe threshold,
    /// clamped to `[0, 1]`. Reported even before a candidate exists.
    pub progress: f32,
    /// The currently dominant direction and its bound action, if the drag
    /// has left the dead zone and an action is registered there.
    pub candidate: Option<(Direction, &'a A)>,
    /// True on exactly the first sample whose translation exceeds the
    /// swipe threshold on either axis; used as a haptic cue. Fires at most
    /// once per session no matter how often the threshold is re-crossed.
    pub threshold_crossed: bool,
}

/// Terminal decision for one gesture session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SwipeOutcome<A> {
    /// The release committed a swipe onto a bound action.
    Triggered { direction: Direction, action: A },
    /// Released below threshold, on an unbound direction, or aborted.
    /// The caller animates back to origin if it wants auto-reset; the
    /// translation at release is the sample it just passed in.
    Cancelled,
}

impl<A> SwipeOutcome<A> {
    pub fn is_triggered(&self) -> bool {
        matches!(self, SwipeOutcome::Triggered { .. })
    }
}

struct GestureSession<A> {
    actions: ActionSet<A>,
    thresholds: SwipeThresholds,
    orientation: Orientation,
    progress: f32,
    candidate: Option<Direction>,
    cue_fired: bool,
}

impl<A> GestureSession<A> {
    /// Dominant eligible axis for a sample: the eligible axis with larger
    /// absolute translation; exact ties fall to the orientation's
    /// tie-break axis (horizontal when both axes are eligible).
    fn dominant_axis(&self, sample: &GestureSample) -> Axis {
        let horizontal = self.orientation.allows(Axis::Horizontal);
        let vertical = self.orientation.allows(Axis::Vertical);
        if horizontal && !vertical {
            return Axis::Horizontal;
        }
        if vertical && !horizontal {
            return Axis::Vertical;
        }
        let x = sample.translation_x.abs();
        let y = sample.translation_y.abs();
        if x > y {
            Axis::Horizontal
        } else if y > x {
            Axis::Vertical
        } else {
            self.orientation.tie_break_axis()
        }
    }
}

fn axis_translation(sample: &GestureSample, axis: Axis) -> f32 {
    match axis {
        Axis::Horizontal => sample.translation_x,
        Axis::Vertical => sample.translation_y,
    }
}

fn axis_velocity(sample: &GestureSample, axis: Axis) -> f32 {
    match axis {
        Axis::Horizontal => sample.velocity_x,
        Axis::Vertical => sample.velocity_y,
    }
}

/// Converts one drag's sample stream into per-sample feedback and a single
/// terminal outcome.
///
/// Calling `update` or `end` without an active session is a caller bug and
/// panics; it never silently no-ops.
pub struct SwipeClassifier<A> {
    session: Option<GestureSession<A>>,
}

impl<A> Default for SwipeClassifier<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> SwipeClassifier<A> {
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Start a session for one drag. Any prior session is discarded.
    pub fn begin(
        &mut self,
        actions: ActionSet<A>,
        thresholds: SwipeThresholds,
        orientation: Orientation,
    ) {
        debug!(
            "swipe session began: {} bound action(s), orientation {:?}",
            actions.len(),
            orientation
        );
        self.session = Some(GestureSession {
            actions,
            thresholds,
            orientation,
            progress: 0.0,
            candidate: None,
            cue_fired: false,
        });
    }

    /// Feed the current cumulative translation and velocity.
    ///
    /// O(1) per call; tolerates arbitrary call frequency. Samples must be
    /// applied in arrival order since progress and candidate derive from
    /// cumulative translation.
    pub fn update(&mut self, sample: GestureSample) -> SwipeFeedback<'_, A> {
        let sample = sanitize(sample);
        let session = self.session.as_mut().unwrap_or_else(|| {
            panic!("SwipeClassifier::update called with no active session; call begin() first")
        });

        let axis = session.dominant_axis(&sample);
        let translation = axis_translation(&sample, axis);
        let magnitude = translation.abs();

        session.progress = (magnitude / session.thresholds.swipe).min(1.0);
        session.candidate = if magnitude > session.thresholds.dead_zone {
            let direction = Direction::from_axis(axis, translation);
            session.actions.contains(direction).then_some(direction)
        } else {
            None
        };

        let crossed = !session.cue_fired
            && (sample.translation_x.abs() > session.thresholds.swipe
                || sample.translation_y.abs() > session.thresholds.swipe);
        if crossed {
            session.cue_fired = true;
        }

        let session = &*session;
        SwipeFeedback {
            progress: session.progress,
            candidate: session
                .candidate
                .and_then(|direction| session.actions.get(direction).map(|a| (direction, a))),
            threshold_crossed: crossed,
        }
    }

    /// Close the session with the release sample and decide the outcome.
    ///
    /// A swipe commits when either axis crossed the swipe threshold or
    /// either velocity component crossed the velocity threshold. The
    /// direction comes from the dominant eligible axis (exact ties go to
    /// horizontal); its sign is the translation sign, falling back to the
    /// velocity sign when the dominant translation is exactly zero. A
    /// committed swipe onto an unbound direction is a cancel, not an error.
    pub fn end(&mut self, sample: GestureSample) -> SwipeOutcome<A> {
        let sample = sanitize(sample);
        let mut session = self.session.take().unwrap_or_else(|| {
            panic!("SwipeClassifier::end called with no active session; call begin() first")
        });

        let thresholds = session.thresholds;
        let committed = sample.translation_x.abs() > thresholds.swipe
            || sample.translation_y.abs() > thresholds.swipe
            || sample.velocity_x.abs() > thresholds.velocity
            || sample.velocity_y.abs() > thresholds.velocity;
        if !committed {
            debug!("swipe session ended: below thresholds, cancelled");
            return SwipeOutcome::Cancelled;
        }

        let axis = session.dominant_axis(&sample);
        let translation = axis_translation(&sample, axis);
        let reference = if translation != 0.0 {
            translation
        } else {
            axis_velocity(&sample, axis)
        };
        let direction = Direction::from_axis(axis, reference);

        match session.actions.take(direction) {
            Some(action) => {
                debug!("swipe session ended: triggered {:?}", direction);
                SwipeOutcome::Triggered { direction, action }
            }
            None => {
                debug!(
                    "swipe session ended: {:?} crossed threshold but is unbound, cancelled",
                    direction
                );
                SwipeOutcome::Cancelled
            }
        }
    }

    /// Abort the session without a decision (pointer-cancel from the
    /// host). No-op when idle.
    pub fn cancel(&mut self) {
        if self.session.take().is_some() {
            debug!("swipe session aborted");
        }
    }

    /// Whether a gesture session is currently live.
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }
}

fn sanitize(sample: GestureSample) -> GestureSample {
    GestureSample::new(
        sample.translation_x,
        sample.translation_y,
        sample.velocity_x,
        sample.velocity_y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal_classifier() -> SwipeClassifier<&'static str> {
        let mut classifier = SwipeClassifier::new();
        classifier.begin(
            ActionSet::new()
                .bind(Direction::Right, "take")
                .bind(Direction::Left, "skip"),
            SwipeThresholds::new(100.0, 800.0, 20.0),
            Orientation::Horizontal,
        );
        classifier
    }

    #[test]
    fn progress_stays_in_unit_range() {
        let mut classifier = horizontal_classifier();
        for tx in [-5000.0, -150.0, -20.0, 0.0, 3.0, 99.0, 100.0, 101.0, 9000.0] {
            let feedback = classifier.update(GestureSample::translation(tx, 0.0));
            assert!(
                (0.0..=1.0).contains(&feedback.progress),
                "progress {} out of range for tx {}",
                feedback.progress,
                tx
            );
        }
    }

    #[test]
    fn threshold_cue_fires_at_most_once() {
        let mut classifier = horizontal_classifier();
        let mut fired = 0;
        for tx in [150.0, 10.0, 150.0, 200.0, 10.0, 300.0] {
            if classifier.update(GestureSample::translation(tx, 0.0)).threshold_crossed {
                fired += 1;
            }
        }
        assert_eq!(fired, 1);
    }

    #[test]
    fn distance_commit_picks_bound_right_action() {
        let mut classifier = horizontal_classifier();
        classifier.update(GestureSample::translation(80.0, 5.0));
        let outcome = classifier.end(GestureSample::new(150.0, 10.0, 50.0, 0.0));
        assert_eq!(
            outcome,
            SwipeOutcome::Triggered {
                direction: Direction::Right,
                action: "take",
            }
        );
    }

    #[test]
    fn distance_commit_picks_bound_left_action() {
        let mut classifier = horizontal_classifier();
        let outcome = classifier.end(GestureSample::new(-150.0, 10.0, -50.0, 0.0));
        assert_eq!(
            outcome,
            SwipeOutcome::Triggered {
                direction: Direction::Left,
                action: "skip",
            }
        );
    }

    #[test]
    fn release_below_both_thresholds_cancels() {
        let mut classifier = horizontal_classifier();
        let outcome = classifier.end(GestureSample::new(30.0, 0.0, 50.0, 0.0));
        assert_eq!(outcome, SwipeOutcome::Cancelled);
    }

    #[test]
    fn committed_swipe_without_bound_action_cancels() {
        let mut classifier: SwipeClassifier<&str> = SwipeClassifier::new();
        classifier.begin(
            ActionSet::new(),
            SwipeThresholds::new(100.0, 800.0, 20.0),
            Orientation::Horizontal,
        );
        let outcome = classifier.end(GestureSample::translation(150.0, 0.0));
        assert_eq!(outcome, SwipeOutcome::Cancelled);
    }

    #[test]
    fn velocity_alone_commits_in_velocity_direction() {
        let mut classifier = horizontal_classifier();
        let outcome = classifier.end(GestureSample::new(10.0, 0.0, 900.0, 0.0));
        assert_eq!(
            outcome,
            SwipeOutcome::Triggered {
                direction: Direction::Right,
                action: "take",
            }
        );
    }

    #[test]
    fn velocity_sign_decides_when_translation_is_zero() {
        let mut classifier = horizontal_classifier();
        let outcome = classifier.end(GestureSample::new(0.0, 0.0, -900.0, 0.0));
        assert_eq!(
            outcome,
            SwipeOutcome::Triggered {
                direction: Direction::Left,
                action: "skip",
            }
        );
    }

    #[test]
    #[should_panic(expected = "no active session")]
    fn update_without_begin_panics() {
        let mut classifier: SwipeClassifier<&str> = SwipeClassifier::new();
        classifier.update(GestureSample::translation(10.0, 0.0));
    }

    #[test]
    #[should_panic(expected = "no active session")]
    fn end_without_begin_panics() {
        let mut classifier: SwipeClassifier<&str> = SwipeClassifier::new();
        classifier.end(GestureSample::translation(10.0, 0.0));
    }

    #[test]
    fn exact_axis_tie_resolves_horizontal() {
        let mut classifier: SwipeClassifier<&str> = SwipeClassifier::new();
        classifier.begin(
            ActionSet::new()
                .bind(Direction::Right, "right")
                .bind(Direction::Down, "down"),
            SwipeThresholds::default(),
            Orientation::Both,
        );
        let outcome = classifier.end(GestureSample::translation(150.0, 150.0));
        assert_eq!(
            outcome,
            SwipeOutcome::Triggered {
                direction: Direction::Right,
                action: "right",
            }
        );
    }

    #[test]
    fn dead_zone_suppresses_candidate_but_not_progress() {
        let mut classifier = horizontal_classifier();
        let feedback = classifier.update(GestureSample::translation(15.0, 0.0));
        assert!(feedback.candidate.is_none());
        assert!((feedback.progress - 0.15).abs() < 1e-6);
    }

    #[test]
    fn candidate_requires_bound_action() {
        let mut classifier: SwipeClassifier<&str> = SwipeClassifier::new();
        classifier.begin(
            ActionSet::new().bind(Direction::Right, "right"),
            SwipeThresholds::default(),
            Orientation::Both,
        );
        // Dominant axis is vertical but no vertical action is bound.
        let feedback = classifier.update(GestureSample::translation(10.0, 60.0));
        assert!(feedback.candidate.is_none());
        assert!((feedback.progress - 0.6).abs() < 1e-6);
    }

    #[test]
    fn orientation_excludes_cross_axis_outcomes() {
        let mut classifier: SwipeClassifier<&str> = SwipeClassifier::new();
        classifier.begin(
            ActionSet::new().bind(Direction::Down, "down"),
            SwipeThresholds::default(),
            Orientation::Horizontal,
        );
        // Vertical translation dominates and Down is bound, but the session
        // is horizontal-only: progress and direction come from the x axis.
        let feedback = classifier.update(GestureSample::translation(30.0, 200.0));
        assert!(feedback.candidate.is_none());
        assert!((feedback.progress - 0.3).abs() < 1e-6);
        let outcome = classifier.end(GestureSample::translation(30.0, 200.0));
        assert_eq!(outcome, SwipeOutcome::Cancelled);
    }

    #[test]
    fn cancel_discards_session() {
        let mut classifier = horizontal_classifier();
        assert!(classifier.is_active());
        classifier.cancel();
        assert!(!classifier.is_active());
    }
}
