//! Animated swipe-card widgets for the Caredeck health app.
//!
//! `SwipeableCard` is the primitive: it feeds pointer events through the
//! gesture classifier and drives translation, scale, rotation, opacity,
//! and accent-color transforms that a host renderer samples each frame.
//! The `screens` constructors preconfigure it for the app's screens.

mod action;
mod card;
mod confirm;
mod deck;
mod geometry;
mod input;
mod screens;
mod style;

pub use action::*;
pub use card::*;
pub use confirm::*;
pub use deck::*;
pub use geometry::*;
pub use input::*;
pub use screens::*;
pub use style::*;

// Gesture-core types that appear in this crate's API surface.
pub use caredeck_gesture::{Direction, GestureSample, Orientation, SwipeOutcome, SwipeThresholds};

pub mod prelude {
    pub use crate::action::{CardEvent, SwipeAction};
    pub use crate::card::{CardTransforms, HapticCue, SwipeableCard};
    pub use crate::confirm::ConfirmationPolicy;
    pub use crate::deck::{CardId, Deck};
    pub use crate::geometry::{Offset, Point};
    pub use crate::input::{PointerEvent, PointerEventKind};
    pub use crate::style::{Color, Urgency, UrgencyPalette};
    pub use caredeck_gesture::{Direction, Orientation, SwipeThresholds};
}
