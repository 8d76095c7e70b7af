//! Swipe actions and the notifications a card emits.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use caredeck_gesture::Direction;

use crate::style::{Color, Urgency};

/// A response bound to one swipe direction: what it is called, how
/// serious it is, the accent color the card blends toward while the swipe
/// builds, and the effect to run when it triggers.
#[derive(Clone)]
pub struct SwipeAction {
    pub direction: Direction,
    pub label: String,
    pub urgency: Urgency,
    pub accent: Color,
    on_trigger: Rc<RefCell<dyn FnMut()>>,
}

impl SwipeAction {
    pub fn new(
        direction: Direction,
        label: impl Into<String>,
        urgency: Urgency,
        accent: Color,
        on_trigger: impl FnMut() + 'static,
    ) -> Self {
        Self {
            direction,
            label: label.into(),
            urgency,
            accent,
            on_trigger: Rc::new(RefCell::new(on_trigger)),
        }
    }

    /// Run the action's effect. Called by the card once the outcome is
    /// final (directly, or after confirmation).
    pub(crate) fn fire(&self) {
        (self.on_trigger.borrow_mut())();
    }
}

impl fmt::Debug for SwipeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeAction")
            .field("direction", &self.direction)
            .field("label", &self.label)
            .field("urgency", &self.urgency)
            .field("on_trigger", &Rc::as_ptr(&self.on_trigger))
            .finish()
    }
}

/// Notifications a card hands back to the host shell.
#[derive(Clone, Debug, PartialEq)]
pub enum CardEvent {
    /// The drag crossed the swipe threshold for the first time this
    /// gesture; the host may play a haptic cue.
    ThresholdCrossed,
    /// A swipe committed onto an action whose urgency requires explicit
    /// confirmation. The card holds the trigger until `confirm` or
    /// `dismiss_pending`.
    ConfirmationRequested {
        direction: Direction,
        label: String,
        urgency: Urgency,
    },
    /// An action's effect ran; the card is animating off-screen.
    Triggered { direction: Direction, label: String },
    /// The gesture ended without a committed action.
    Cancelled,
}
