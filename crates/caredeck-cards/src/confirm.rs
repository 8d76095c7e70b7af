//! Urgency-gated confirmation of triggered actions.

use crate::action::SwipeAction;
use crate::style::Urgency;

/// Which urgency levels need explicit confirmation before a triggered
/// action's effect runs. Critical always bypasses confirmation: an
/// emergency response must not wait on a dialog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConfirmationPolicy {
    pub confirm_normal: bool,
    pub confirm_high: bool,
}

impl ConfirmationPolicy {
    /// Confirm nothing.
    pub fn none() -> Self {
        Self {
            confirm_normal: false,
            confirm_high: false,
        }
    }

    /// Confirm everything that can be confirmed (Critical still bypasses).
    pub fn all() -> Self {
        Self {
            confirm_normal: true,
            confirm_high: true,
        }
    }

    pub fn requires(&self, urgency: Urgency) -> bool {
        match urgency {
            Urgency::Normal => self.confirm_normal,
            Urgency::High => self.confirm_high,
            Urgency::Critical => false,
        }
    }
}

impl Default for ConfirmationPolicy {
    fn default() -> Self {
        Self {
            confirm_normal: false,
            confirm_high: true,
        }
    }
}

/// A committed swipe waiting on the user's confirmation.
#[derive(Debug)]
pub(crate) struct PendingTrigger {
    pub action: SwipeAction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn critical_always_bypasses() {
        assert!(!ConfirmationPolicy::all().requires(Urgency::Critical));
    }

    #[test]
    fn default_confirms_high_only() {
        let policy = ConfirmationPolicy::default();
        assert!(!policy.requires(Urgency::Normal));
        assert!(policy.requires(Urgency::High));
        assert!(!policy.requires(Urgency::Critical));
    }
}
