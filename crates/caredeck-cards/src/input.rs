//! Pointer events as delivered by the host shell.
//!
//! A card owns its gesture exclusively, so there is no consumption
//! tracking here; hit-testing and routing are the host's concern.

use std::sync::LazyLock;
use web_time::Instant;

use crate::geometry::Point;

static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Point,
    /// Milliseconds on the host's monotonic clock; only differences
    /// matter (velocity tracking).
    pub time_ms: i64,
}

impl PointerEvent {
    /// Event with an explicit timestamp, for hosts that carry their own
    /// clock and for tests.
    pub fn at(kind: PointerEventKind, position: Point, time_ms: i64) -> Self {
        Self {
            kind,
            position,
            time_ms,
        }
    }

    /// Event stamped now against the process epoch.
    pub fn now(kind: PointerEventKind, position: Point) -> Self {
        Self {
            kind,
            position,
            time_ms: EPOCH.elapsed().as_millis() as i64,
        }
    }
}
