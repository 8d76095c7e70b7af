//! Pure swipe-gesture classification for Caredeck cards.
//!
//! This crate contains no UI-framework types: it turns a stream of
//! cumulative drag samples into live feedback (progress, candidate action,
//! one-shot haptic cue) and a single terminal decision per gesture. The
//! rendering/animation side lives in `caredeck-cards`.

mod action_set;
mod classifier;
mod direction;
mod sample;
mod velocity_tracker;

pub use action_set::*;
pub use classifier::*;
pub use direction::*;
pub use sample::*;
pub use velocity_tracker::*;

pub mod prelude {
    pub use crate::action_set::ActionSet;
    pub use crate::classifier::{SwipeClassifier, SwipeFeedback, SwipeOutcome};
    pub use crate::direction::{Axis, Direction, Orientation};
    pub use crate::sample::{GestureSample, SwipeThresholds};
    pub use crate::velocity_tracker::VelocityTracker1D;
}
