//! Flows on the vitals and appointment screen cards.

use std::cell::Cell;
use std::rc::Rc;

use caredeck_cards::prelude::*;
use caredeck_cards::{appointment_card, vitals_card, Appointment, VitalsReading};
use caredeck_testing::CardRobot;

fn reading() -> VitalsReading {
    VitalsReading {
        metric: "Blood pressure".into(),
        value: "128/84".into(),
        recorded_at: "07:42".into(),
    }
}

fn appointment() -> Appointment {
    Appointment {
        provider: "Dr. Lindqvist".into(),
        location: "Clinic 3B".into(),
        starts_at: "Mon 09:30".into(),
    }
}

#[test]
fn vitals_upswipe_logs_a_reading() {
    let logged = Rc::new(Cell::new(0));
    let logged_in = Rc::clone(&logged);
    let mut robot = CardRobot::new(|runtime| {
        vitals_card(reading(), runtime, || {}, move || {
            logged_in.set(logged_in.get() + 1)
        })
    });

    assert_eq!(robot.card().payload().metric, "Blood pressure");

    robot.swipe(Point::new(0.0, 200.0), Point::new(0.0, 40.0), 8, 80);
    robot.wait_for_settle();

    assert_eq!(logged.get(), 1);
    assert!(robot.card().is_dismissed());
    assert!(robot.card().transforms().translation.y < -500.0);
}

#[test]
fn vitals_acknowledge_fires_on_right_swipe() {
    let acknowledged = Rc::new(Cell::new(0));
    let acknowledged_in = Rc::clone(&acknowledged);
    let mut robot = CardRobot::new(|runtime| {
        vitals_card(
            reading(),
            runtime,
            move || acknowledged_in.set(acknowledged_in.get() + 1),
            || {},
        )
    });

    robot.swipe(Point::new(0.0, 0.0), Point::new(160.0, 0.0), 8, 80);
    robot.wait_for_settle();

    assert_eq!(acknowledged.get(), 1);
}

#[test]
fn appointment_reschedule_requires_confirmation() {
    let rescheduled = Rc::new(Cell::new(0));
    let rescheduled_in = Rc::clone(&rescheduled);
    let mut robot = CardRobot::new(|runtime| {
        appointment_card(appointment(), runtime, || {}, move || {
            rescheduled_in.set(rescheduled_in.get() + 1)
        })
    });

    robot.swipe(Point::new(200.0, 0.0), Point::new(40.0, 0.0), 8, 80);

    assert_eq!(rescheduled.get(), 0);
    assert!(robot.card().has_pending());

    robot.confirm();
    assert_eq!(rescheduled.get(), 1);
}

#[test]
fn appointment_confirm_attendance_is_immediate() {
    let confirmed = Rc::new(Cell::new(0));
    let confirmed_in = Rc::clone(&confirmed);
    let mut robot = CardRobot::new(|runtime| {
        appointment_card(
            appointment(),
            runtime,
            move || confirmed_in.set(confirmed_in.get() + 1),
            || {},
        )
    });

    robot.swipe(Point::new(0.0, 0.0), Point::new(160.0, 0.0), 8, 80);

    assert_eq!(confirmed.get(), 1);
    assert!(!robot.card().has_pending());
}
