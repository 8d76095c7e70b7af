//! Robot-style driver for swipeable cards.
//!
//! The robot owns a card plus the frame runtime that drives its
//! animations, and exposes gesture verbs that synthesize realistic
//! pointer streams with advancing timestamps:
//!
//! ```
//! use caredeck_cards::prelude::*;
//! use caredeck_testing::CardRobot;
//!
//! let mut robot = CardRobot::new(|runtime| SwipeableCard::new((), runtime));
//! robot.swipe(Point::new(0.0, 0.0), Point::new(160.0, 0.0), 8, 80);
//! robot.wait_for_settle();
//! ```

use log::debug;

use caredeck_cards::{CardEvent, Direction, Point, PointerEvent, PointerEventKind, SwipeableCard};
use caredeck_motion::{Runtime, RuntimeHandle};

/// Time between synthetic pointer samples for single-step verbs.
const DEFAULT_STEP_MS: i64 = 16;

/// Frame pumping stops after this many frames even if animations have
/// not settled; a stuck animation should fail the assertion, not hang
/// the test.
const MAX_SETTLE_FRAMES: usize = 600;

pub struct CardRobot<P> {
    card: SwipeableCard<P>,
    #[allow(dead_code)]
    runtime: Runtime,
    handle: RuntimeHandle,
    now_ms: i64,
    events: Vec<CardEvent>,
}

impl<P> CardRobot<P> {
    /// Build the card under test against the robot's runtime.
    pub fn new(build: impl FnOnce(RuntimeHandle) -> SwipeableCard<P>) -> Self {
        let runtime = Runtime::new();
        let handle = runtime.handle();
        let card = build(handle.clone());
        Self {
            card,
            runtime,
            handle,
            now_ms: 0,
            events: Vec::new(),
        }
    }

    pub fn card(&self) -> &SwipeableCard<P> {
        &self.card
    }

    pub fn card_mut(&mut self) -> &mut SwipeableCard<P> {
        &mut self.card
    }

    /// All card events observed so far, in order.
    pub fn events(&self) -> &[CardEvent] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<CardEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn press(&mut self, x: f32, y: f32) {
        self.dispatch(PointerEventKind::Down, Point::new(x, y));
    }

    pub fn drag_to(&mut self, x: f32, y: f32) {
        self.now_ms += DEFAULT_STEP_MS;
        self.dispatch(PointerEventKind::Move, Point::new(x, y));
    }

    pub fn release(&mut self, x: f32, y: f32) {
        self.now_ms += DEFAULT_STEP_MS;
        self.dispatch(PointerEventKind::Up, Point::new(x, y));
    }

    pub fn cancel(&mut self) {
        self.dispatch(PointerEventKind::Cancel, Point::new(0.0, 0.0));
    }

    /// Full drag: down at `from`, interpolated moves, up at `to`.
    ///
    /// `duration_ms` spread over `steps` samples controls the velocity
    /// the tracker sees; a short duration makes a flick.
    pub fn swipe(&mut self, from: Point, to: Point, steps: usize, duration_ms: i64) {
        debug!(
            "robot swipe {:?} -> {:?} over {}ms in {} steps",
            from, to, duration_ms, steps
        );
        self.dispatch(PointerEventKind::Down, from);
        let steps = steps.max(1);
        let dt = (duration_ms / steps as i64).max(1);
        for i in 1..=steps {
            let fraction = i as f32 / steps as f32;
            let position = Point::new(
                from.x + (to.x - from.x) * fraction,
                from.y + (to.y - from.y) * fraction,
            );
            self.now_ms += dt;
            self.dispatch(PointerEventKind::Move, position);
        }
        self.now_ms += dt;
        self.dispatch(PointerEventKind::Up, to);
    }

    /// Quick directional swipe: covers `distance` from `from` in
    /// `duration_ms`. Short durations produce the release velocities that
    /// commit a swipe before the distance threshold is reached.
    pub fn flick(&mut self, from: Point, direction: Direction, distance: f32, duration_ms: i64) {
        let to = match direction {
            Direction::Left => Point::new(from.x - distance, from.y),
            Direction::Right => Point::new(from.x + distance, from.y),
            Direction::Up => Point::new(from.x, from.y - distance),
            Direction::Down => Point::new(from.x, from.y + distance),
        };
        self.swipe(from, to, 8, duration_ms);
    }

    /// Resolve a pending confirmation positively.
    pub fn confirm(&mut self) {
        if let Some(event) = self.card.confirm() {
            self.events.push(event);
        }
    }

    /// Resolve a pending confirmation negatively.
    pub fn dismiss_pending(&mut self) {
        if let Some(event) = self.card.dismiss_pending() {
            self.events.push(event);
        }
    }

    /// Advance the frame clock by `count` frames of `frame_ms` each,
    /// draining callbacks every frame.
    pub fn advance_frames(&mut self, count: usize, frame_ms: i64) {
        for _ in 0..count {
            self.now_ms += frame_ms;
            self.handle.drain_frame_callbacks(self.now_ms as u64 * 1_000_000);
        }
    }

    /// Pump 16ms frames until the card's animations settle.
    pub fn wait_for_settle(&mut self) {
        for _ in 0..MAX_SETTLE_FRAMES {
            if self.card.is_settled() {
                return;
            }
            self.advance_frames(1, DEFAULT_STEP_MS);
        }
    }

    fn dispatch(&mut self, kind: PointerEventKind, position: Point) {
        let event = PointerEvent::at(kind, position, self.now_ms);
        if let Some(card_event) = self.card.on_pointer_event(event) {
            self.events.push(card_event);
        }
    }
}
