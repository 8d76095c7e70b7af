//! End-to-end drag flows: synthetic pointer streams through a card,
//! frame pumping, and the resulting transforms.

use std::cell::Cell;
use std::rc::Rc;

use caredeck_cards::prelude::*;
use caredeck_testing::CardRobot;

fn counting_card(
    runtime: caredeck_motion::RuntimeHandle,
    taken: Rc<Cell<u32>>,
) -> SwipeableCard<()> {
    let palette = UrgencyPalette::default();
    SwipeableCard::new((), runtime).with_action(SwipeAction::new(
        Direction::Right,
        "Mark taken",
        Urgency::Normal,
        palette.normal,
        move || taken.set(taken.get() + 1),
    ))
}

#[test]
fn committed_swipe_fires_action_and_flies_off() {
    let taken = Rc::new(Cell::new(0));
    let taken_in = Rc::clone(&taken);
    let mut robot = CardRobot::new(|runtime| counting_card(runtime, taken_in));

    robot.swipe(Point::new(0.0, 0.0), Point::new(160.0, 0.0), 8, 80);
    robot.wait_for_settle();

    assert_eq!(taken.get(), 1);
    assert!(robot.card().is_dismissed());
    assert!(robot.events().contains(&CardEvent::ThresholdCrossed));
    assert!(robot.events().contains(&CardEvent::Triggered {
        direction: Direction::Right,
        label: "Mark taken".into(),
    }));

    let transforms = robot.card().transforms();
    assert!(transforms.translation.x > 500.0);
    assert!(transforms.opacity < 0.01);
}

#[test]
fn short_swipe_cancels_and_springs_home() {
    let taken = Rc::new(Cell::new(0));
    let taken_in = Rc::clone(&taken);
    let mut robot = CardRobot::new(|runtime| counting_card(runtime, taken_in));

    robot.swipe(Point::new(0.0, 0.0), Point::new(60.0, 0.0), 10, 200);
    robot.wait_for_settle();

    assert_eq!(taken.get(), 0);
    assert!(!robot.card().is_dismissed());
    assert_eq!(robot.events().last(), Some(&CardEvent::Cancelled));
    assert!(!robot.events().contains(&CardEvent::ThresholdCrossed));

    let transforms = robot.card().transforms();
    assert!(transforms.translation.x.abs() < 0.01);
    assert!((transforms.opacity - 1.0).abs() < 0.01);
    assert!((transforms.scale - 1.0).abs() < 0.01);
}

#[test]
fn fast_flick_triggers_below_distance_threshold() {
    let taken = Rc::new(Cell::new(0));
    let taken_in = Rc::clone(&taken);
    let mut robot = CardRobot::new(|runtime| counting_card(runtime, taken_in));

    // 80px in 40ms: well under the 100px swipe threshold but ~2000px/s.
    robot.flick(Point::new(0.0, 0.0), Direction::Right, 80.0, 40);
    robot.wait_for_settle();

    assert_eq!(taken.get(), 1);
    assert!(robot.card().is_dismissed());
}

#[test]
fn pointer_cancel_aborts_without_firing() {
    let taken = Rc::new(Cell::new(0));
    let taken_in = Rc::clone(&taken);
    let mut robot = CardRobot::new(|runtime| counting_card(runtime, taken_in));

    robot.press(0.0, 0.0);
    robot.drag_to(150.0, 0.0);
    robot.cancel();
    robot.wait_for_settle();

    assert_eq!(taken.get(), 0);
    assert!(!robot.card().is_dragging());
    assert_eq!(robot.events().last(), Some(&CardEvent::Cancelled));
    assert!(robot.card().transforms().translation.x.abs() < 0.01);
}

struct CountingHaptics(Rc<Cell<u32>>);

impl HapticCue for CountingHaptics {
    fn swipe_threshold_crossed(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn haptic_cue_fires_once_per_gesture() {
    let cues = Rc::new(Cell::new(0));
    let cues_in = Rc::clone(&cues);
    let taken = Rc::new(Cell::new(0));
    let taken_in = Rc::clone(&taken);
    let mut robot = CardRobot::new(move |runtime| {
        counting_card(runtime, taken_in).with_haptics(CountingHaptics(cues_in))
    });

    // Cross the threshold, retreat, and cross it twice more.
    robot.press(0.0, 0.0);
    robot.drag_to(150.0, 0.0);
    robot.drag_to(50.0, 0.0);
    robot.drag_to(150.0, 0.0);
    robot.drag_to(200.0, 0.0);
    robot.cancel();

    assert_eq!(cues.get(), 1);
    let crossings = robot
        .events()
        .iter()
        .filter(|event| **event == CardEvent::ThresholdCrossed)
        .count();
    assert_eq!(crossings, 1);
}

#[test]
fn candidate_progress_blends_accent_and_dims_card() {
    let taken = Rc::new(Cell::new(0));
    let taken_in = Rc::clone(&taken);
    let mut robot = CardRobot::new(|runtime| counting_card(runtime, taken_in));

    robot.press(0.0, 0.0);
    robot.drag_to(50.0, 0.0);

    let palette = UrgencyPalette::default();
    let transforms = robot.card().transforms();
    assert!(transforms.translation.x > 49.0);
    assert!(transforms.opacity < 1.0);
    assert_ne!(transforms.accent, palette.idle);
    assert!(transforms.rotation_deg > 0.0);

    robot.cancel();
}
