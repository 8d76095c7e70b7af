//! The swipeable card: pointer events in, animated transforms out.
//!
//! All decision logic lives in `caredeck-gesture`; this adapter owns the
//! presentation side: following the finger, blending the accent color
//! toward the candidate action, springing home on cancel, flying off on
//! trigger, and holding provisional triggers for confirmation.

use log::debug;
use smallvec::SmallVec;

use caredeck_gesture::{
    ActionSet, Direction, GestureSample, Orientation, SwipeClassifier, SwipeOutcome,
    SwipeThresholds, VelocityTracker1D, MAX_TRACKED_VELOCITY,
};
use caredeck_motion::{
    Animatable, AnimationSpec, AnimationType, Easing, Lerp, Pulse, RuntimeHandle, SpringSpec,
};

use crate::action::{CardEvent, SwipeAction};
use crate::confirm::{ConfirmationPolicy, PendingTrigger};
use crate::geometry::{Offset, Point};
use crate::input::{PointerEvent, PointerEventKind};
use crate::style::{Color, UrgencyPalette};

/// Scale while the card is pressed.
const PRESS_SCALE: f32 = 0.97;

/// Horizontal translation px per degree of card tilt.
const ROTATION_DIVISOR: f32 = 12.0;

/// Tilt never exceeds this many degrees either way.
const MAX_ROTATION_DEG: f32 = 15.0;

/// How much a fully built-up swipe dims the card.
const PROGRESS_OPACITY_DROP: f32 = 0.25;

/// Distance a triggered card travels off-screen.
const FLY_OFF_DISTANCE: f32 = 600.0;

/// Duration of the fly-off tween.
const FLY_OFF_MILLIS: u64 = 220;

/// Everything a host renderer needs to draw the card this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransforms {
    pub translation: Offset,
    pub scale: f32,
    pub rotation_deg: f32,
    pub opacity: f32,
    pub accent: Color,
    /// Glow intensity from the pulse effect, 1.0 when not pulsing.
    pub glow: f32,
}

/// Receiver for the one-shot threshold-crossed cue. The real vibration
/// API lives in the host shell; tests observe the cue through this trait.
pub trait HapticCue {
    fn swipe_threshold_crossed(&mut self);
}

/// Default haptics: none.
pub struct SilentHaptics;

impl HapticCue for SilentHaptics {
    fn swipe_threshold_crossed(&mut self) {}
}

struct ActiveDrag {
    origin: Point,
    grab_offset: Offset,
}

/// An animated card responding to up to four swipe directions.
///
/// Each card owns its classifier and animatables; concurrent cards never
/// share state. `P` is the screen payload the card presents.
pub struct SwipeableCard<P> {
    payload: P,
    runtime: RuntimeHandle,
    actions: SmallVec<[SwipeAction; 4]>,
    classifier: SwipeClassifier<SwipeAction>,
    tracker_x: VelocityTracker1D,
    tracker_y: VelocityTracker1D,
    offset_x: Animatable<f32>,
    offset_y: Animatable<f32>,
    scale: Animatable<f32>,
    rotation: Animatable<f32>,
    opacity: Animatable<f32>,
    accent: Color,
    palette: UrgencyPalette,
    orientation: Orientation,
    thresholds: SwipeThresholds,
    policy: ConfirmationPolicy,
    auto_reset: bool,
    haptics: Box<dyn HapticCue>,
    pulse: Option<Pulse>,
    pending: Option<PendingTrigger>,
    drag: Option<ActiveDrag>,
    dismissed: bool,
}

impl<P> SwipeableCard<P> {
    pub fn new(payload: P, runtime: RuntimeHandle) -> Self {
        Self {
            payload,
            actions: SmallVec::new(),
            classifier: SwipeClassifier::new(),
            tracker_x: VelocityTracker1D::new(),
            tracker_y: VelocityTracker1D::new(),
            offset_x: Animatable::new(0.0, runtime.clone()),
            offset_y: Animatable::new(0.0, runtime.clone()),
            scale: Animatable::new(1.0, runtime.clone()),
            rotation: Animatable::new(0.0, runtime.clone()),
            opacity: Animatable::new(1.0, runtime.clone()),
            accent: UrgencyPalette::default().idle,
            palette: UrgencyPalette::default(),
            orientation: Orientation::Both,
            thresholds: SwipeThresholds::default(),
            policy: ConfirmationPolicy::default(),
            auto_reset: true,
            haptics: Box::new(SilentHaptics),
            pulse: None,
            pending: None,
            drag: None,
            dismissed: false,
            runtime,
        }
    }

    /// Bind an action, replacing any existing one on the same direction.
    pub fn with_action(mut self, action: SwipeAction) -> Self {
        self.actions.retain(|existing| existing.direction != action.direction);
        self.actions.push(action);
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_thresholds(mut self, thresholds: SwipeThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_policy(mut self, policy: ConfirmationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_palette(mut self, palette: UrgencyPalette) -> Self {
        self.accent = palette.idle;
        self.palette = palette;
        self
    }

    pub fn with_auto_reset(mut self, auto_reset: bool) -> Self {
        self.auto_reset = auto_reset;
        self
    }

    pub fn with_haptics(mut self, haptics: impl HapticCue + 'static) -> Self {
        self.haptics = Box::new(haptics);
        self
    }

    /// Attach a glow pulse and start it immediately.
    pub fn with_glow_pulse(mut self, period_millis: u64, amplitude: f32) -> Self {
        let pulse = Pulse::new(self.runtime.frame_clock(), period_millis, amplitude);
        pulse.start();
        self.pulse = Some(pulse);
        self
    }

    /// Feed one pointer event; returns a notification when the event
    /// changed the card's fate. Events are ignored while a confirmation
    /// is pending or after the card was dismissed.
    pub fn on_pointer_event(&mut self, event: PointerEvent) -> Option<CardEvent> {
        if self.dismissed || self.pending.is_some() {
            return None;
        }
        match event.kind {
            PointerEventKind::Down => self.on_down(event),
            PointerEventKind::Move => self.on_move(event),
            PointerEventKind::Up => self.on_up(event),
            PointerEventKind::Cancel => self.on_cancel(),
        }
    }

    fn on_down(&mut self, event: PointerEvent) -> Option<CardEvent> {
        self.drag = Some(ActiveDrag {
            origin: event.position,
            grab_offset: Offset::new(self.offset_x.value(), self.offset_y.value()),
        });
        self.tracker_x.reset();
        self.tracker_y.reset();
        self.tracker_x.add_data_point(event.time_ms, event.position.x);
        self.tracker_y.add_data_point(event.time_ms, event.position.y);

        let mut set = ActionSet::new();
        for action in &self.actions {
            set = set.bind(action.direction, action.clone());
        }
        self.classifier.begin(set, self.thresholds, self.orientation);

        let frozen = Offset::new(self.offset_x.value(), self.offset_y.value());
        self.offset_x.snap_to(frozen.x);
        self.offset_y.snap_to(frozen.y);
        self.scale
            .animate_to(PRESS_SCALE, AnimationType::Spring(SpringSpec::stiff()));
        None
    }

    fn on_move(&mut self, event: PointerEvent) -> Option<CardEvent> {
        let (origin, grab_offset) = match &self.drag {
            Some(drag) => (drag.origin, drag.grab_offset),
            None => return None,
        };

        self.tracker_x.add_data_point(event.time_ms, event.position.x);
        self.tracker_y.add_data_point(event.time_ms, event.position.y);

        let sample = self.sample_at(event.position, origin);
        let (progress, crossed, accent_target) = {
            let feedback = self.classifier.update(sample);
            (
                feedback.progress,
                feedback.threshold_crossed,
                feedback.candidate.map(|(_, action)| action.accent),
            )
        };

        self.offset_x.snap_to(grab_offset.x + sample.translation_x);
        self.offset_y.snap_to(grab_offset.y + sample.translation_y);
        self.rotation.snap_to(
            (sample.translation_x / ROTATION_DIVISOR).clamp(-MAX_ROTATION_DEG, MAX_ROTATION_DEG),
        );
        self.opacity.snap_to(1.0 - PROGRESS_OPACITY_DROP * progress);
        self.accent = match accent_target {
            Some(target) => self.palette.idle.lerp(&target, progress),
            None => self.palette.idle,
        };

        if crossed {
            self.haptics.swipe_threshold_crossed();
            return Some(CardEvent::ThresholdCrossed);
        }
        None
    }

    fn on_up(&mut self, event: PointerEvent) -> Option<CardEvent> {
        let origin = match self.drag.take() {
            Some(drag) => drag.origin,
            None => return None,
        };

        self.tracker_x.add_data_point(event.time_ms, event.position.x);
        self.tracker_y.add_data_point(event.time_ms, event.position.y);
        let sample = self.sample_at(event.position, origin);

        self.scale
            .animate_to(1.0, AnimationType::Spring(SpringSpec::default_spring()));

        match self.classifier.end(sample) {
            SwipeOutcome::Triggered { direction, action } => {
                if self.policy.requires(action.urgency) {
                    debug!(
                        "swipe onto {:?} ({}) awaits confirmation",
                        direction, action.label
                    );
                    let request = CardEvent::ConfirmationRequested {
                        direction,
                        label: action.label.clone(),
                        urgency: action.urgency,
                    };
                    self.pending = Some(PendingTrigger { action });
                    Some(request)
                } else {
                    Some(self.fire_and_fly(action))
                }
            }
            SwipeOutcome::Cancelled => {
                self.settle_home();
                Some(CardEvent::Cancelled)
            }
        }
    }

    fn on_cancel(&mut self) -> Option<CardEvent> {
        if self.drag.take().is_none() {
            return None;
        }
        self.classifier.cancel();
        self.scale
            .animate_to(1.0, AnimationType::Spring(SpringSpec::default_spring()));
        self.settle_home();
        Some(CardEvent::Cancelled)
    }

    /// Run the pending action. Returns the `Triggered` event, or `None`
    /// when nothing was awaiting confirmation.
    pub fn confirm(&mut self) -> Option<CardEvent> {
        let pending = self.pending.take()?;
        Some(self.fire_and_fly(pending.action))
    }

    /// Drop the pending action and settle the card back.
    pub fn dismiss_pending(&mut self) -> Option<CardEvent> {
        self.pending.take()?;
        self.settle_home();
        Some(CardEvent::Cancelled)
    }

    fn fire_and_fly(&mut self, action: SwipeAction) -> CardEvent {
        debug!("card triggered: {:?} ({})", action.direction, action.label);
        action.fire();
        self.dismissed = true;
        self.accent = action.accent;
        if let Some(pulse) = &self.pulse {
            pulse.stop();
        }

        let (target_x, target_y) = match action.direction {
            Direction::Left => (-FLY_OFF_DISTANCE, 0.0),
            Direction::Right => (FLY_OFF_DISTANCE, 0.0),
            Direction::Up => (0.0, -FLY_OFF_DISTANCE),
            Direction::Down => (0.0, FLY_OFF_DISTANCE),
        };
        let fly = AnimationType::Tween(AnimationSpec::tween(FLY_OFF_MILLIS, Easing::FastOutLinear));
        self.offset_x.animate_to(target_x, fly);
        self.offset_y.animate_to(target_y, fly);
        self.opacity.animate_to(0.0, fly);

        CardEvent::Triggered {
            direction: action.direction,
            label: action.label,
        }
    }

    fn settle_home(&mut self) {
        self.accent = self.palette.idle;
        if !self.auto_reset {
            return;
        }
        let spring = AnimationType::Spring(SpringSpec::default_spring());
        self.offset_x.animate_to(0.0, spring);
        self.offset_y.animate_to(0.0, spring);
        self.rotation.animate_to(0.0, spring);
        self.opacity.animate_to(1.0, spring);
    }

    fn sample_at(&self, position: Point, origin: Point) -> GestureSample {
        GestureSample::new(
            position.x - origin.x,
            position.y - origin.y,
            self.tracker_x.calculate_velocity_with_max(MAX_TRACKED_VELOCITY),
            self.tracker_y.calculate_velocity_with_max(MAX_TRACKED_VELOCITY),
        )
    }

    /// Snapshot of the visual state for the host renderer.
    pub fn transforms(&self) -> CardTransforms {
        CardTransforms {
            translation: Offset::new(self.offset_x.value(), self.offset_y.value()),
            scale: self.scale.value(),
            rotation_deg: self.rotation.value(),
            opacity: self.opacity.value(),
            accent: self.accent,
            glow: self.pulse.as_ref().map_or(1.0, Pulse::value),
        }
    }

    /// True when no release/reset animation is in flight. The glow pulse
    /// runs indefinitely and is not part of settling.
    pub fn is_settled(&self) -> bool {
        !(self.offset_x.is_animating()
            || self.offset_y.is_animating()
            || self.scale.is_animating()
            || self.rotation.is_animating()
            || self.opacity.is_animating())
    }

    /// True once an action ran and the card is (or finished) flying off.
    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// True while a triggered action awaits confirmation.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// True while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn payload_mut(&mut self) -> &mut P {
        &mut self.payload
    }
}
