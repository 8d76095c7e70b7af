//! Swipe directions and axis eligibility.

/// One of the four discrete swipe directions a card can respond to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// The axis this direction moves along.
    pub fn axis(self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Horizontal,
            Direction::Up | Direction::Down => Axis::Vertical,
        }
    }

    /// Direction for a signed displacement on the given axis.
    ///
    /// Positive values map to `Right`/`Down`, matching screen coordinates
    /// where y grows downward.
    pub fn from_axis(axis: Axis, value: f32) -> Self {
        match axis {
            Axis::Horizontal => {
                if value < 0.0 {
                    Direction::Left
                } else {
                    Direction::Right
                }
            }
            Axis::Vertical => {
                if value < 0.0 {
                    Direction::Up
                } else {
                    Direction::Down
                }
            }
        }
    }

    /// Stable index used for per-direction storage.
    pub(crate) fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }
}

/// Translation axis of a drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Which axes a gesture session considers eligible.
///
/// Fixed at `begin` for the lifetime of one session. Ineligible axes never
/// produce candidates or trigger outcomes, regardless of which actions are
/// bound.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
    #[default]
    Both,
}

impl Orientation {
    /// Whether the given axis is eligible under this orientation.
    pub fn allows(self, axis: Axis) -> bool {
        match self {
            Orientation::Horizontal => axis == Axis::Horizontal,
            Orientation::Vertical => axis == Axis::Vertical,
            Orientation::Both => true,
        }
    }

    /// The axis favored when both axes report the same magnitude.
    ///
    /// Single-axis orientations favor their own axis; `Both` resolves the
    /// tie to horizontal, the same deterministic rule `end` applies.
    pub(crate) fn tie_break_axis(self) -> Axis {
        match self {
            Orientation::Vertical => Axis::Vertical,
            Orientation::Horizontal | Orientation::Both => Axis::Horizontal,
        }
    }
}
