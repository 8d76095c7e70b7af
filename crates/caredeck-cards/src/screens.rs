//! Preconfigured cards for the app's screens.
//!
//! Each constructor wires the screen's actions, urgencies, and palette
//! accents onto a `SwipeableCard`; the host supplies the effects.

use caredeck_gesture::Direction;
use caredeck_motion::RuntimeHandle;

use crate::action::SwipeAction;
use crate::card::SwipeableCard;
use crate::style::{Urgency, UrgencyPalette};

/// One scheduled medication intake shown on the reminders screen.
#[derive(Clone, Debug, PartialEq)]
pub struct MedicationDose {
    pub medication: String,
    pub dose: String,
    pub scheduled_at: String,
}

/// A measurement shown on the vitals screen.
#[derive(Clone, Debug, PartialEq)]
pub struct VitalsReading {
    pub metric: String,
    pub value: String,
    pub recorded_at: String,
}

/// An upcoming appointment.
#[derive(Clone, Debug, PartialEq)]
pub struct Appointment {
    pub provider: String,
    pub location: String,
    pub starts_at: String,
}

/// An active emergency alert.
#[derive(Clone, Debug, PartialEq)]
pub struct EmergencyAlert {
    pub message: String,
    pub contact: String,
}

/// Medication reminder: swipe right to mark the dose taken, left to skip
/// it (confirmed), down to snooze the reminder.
pub fn medication_reminder_card(
    dose: MedicationDose,
    runtime: RuntimeHandle,
    on_taken: impl FnMut() + 'static,
    on_skip: impl FnMut() + 'static,
    on_snooze: impl FnMut() + 'static,
) -> SwipeableCard<MedicationDose> {
    let palette = UrgencyPalette::default();
    SwipeableCard::new(dose, runtime)
        .with_action(SwipeAction::new(
            Direction::Right,
            "Mark taken",
            Urgency::Normal,
            palette.normal,
            on_taken,
        ))
        .with_action(SwipeAction::new(
            Direction::Left,
            "Skip dose",
            Urgency::High,
            palette.high,
            on_skip,
        ))
        .with_action(SwipeAction::new(
            Direction::Down,
            "Snooze",
            Urgency::Normal,
            palette.normal,
            on_snooze,
        ))
}

/// Vitals entry: swipe right to acknowledge, up to log a fresh reading.
pub fn vitals_card(
    reading: VitalsReading,
    runtime: RuntimeHandle,
    on_acknowledge: impl FnMut() + 'static,
    on_log_reading: impl FnMut() + 'static,
) -> SwipeableCard<VitalsReading> {
    let palette = UrgencyPalette::default();
    SwipeableCard::new(reading, runtime)
        .with_action(SwipeAction::new(
            Direction::Right,
            "Acknowledge",
            Urgency::Normal,
            palette.normal,
            on_acknowledge,
        ))
        .with_action(SwipeAction::new(
            Direction::Up,
            "Log reading",
            Urgency::Normal,
            palette.normal,
            on_log_reading,
        ))
}

/// Appointment: swipe right to confirm attendance, left to request a
/// reschedule (confirmed).
pub fn appointment_card(
    appointment: Appointment,
    runtime: RuntimeHandle,
    on_confirm: impl FnMut() + 'static,
    on_reschedule: impl FnMut() + 'static,
) -> SwipeableCard<Appointment> {
    let palette = UrgencyPalette::default();
    SwipeableCard::new(appointment, runtime)
        .with_action(SwipeAction::new(
            Direction::Right,
            "Confirm attendance",
            Urgency::Normal,
            palette.normal,
            on_confirm,
        ))
        .with_action(SwipeAction::new(
            Direction::Left,
            "Request reschedule",
            Urgency::High,
            palette.high,
            on_reschedule,
        ))
}

/// Glow pulse period for emergency cards.
const EMERGENCY_PULSE_MILLIS: u64 = 1_200;

/// Glow pulse peak amplitude for emergency cards.
const EMERGENCY_PULSE_AMPLITUDE: f32 = 0.35;

/// Emergency alert: swipe right to call for help (critical, runs
/// immediately), left to dismiss the alert (confirmed). Pulses while
/// visible.
pub fn emergency_alert_card(
    alert: EmergencyAlert,
    runtime: RuntimeHandle,
    on_call_for_help: impl FnMut() + 'static,
    on_dismiss: impl FnMut() + 'static,
) -> SwipeableCard<EmergencyAlert> {
    let palette = UrgencyPalette::default();
    SwipeableCard::new(alert, runtime)
        .with_action(SwipeAction::new(
            Direction::Right,
            "Call for help",
            Urgency::Critical,
            palette.critical,
            on_call_for_help,
        ))
        .with_action(SwipeAction::new(
            Direction::Left,
            "Dismiss",
            Urgency::High,
            palette.high,
            on_dismiss,
        ))
        .with_glow_pulse(EMERGENCY_PULSE_MILLIS, EMERGENCY_PULSE_AMPLITUDE)
}
