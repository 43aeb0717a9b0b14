use std::fmt::Display;

use crate::util::Points;
use crate::{BUST_SENTINEL, SUCCESS_SENTINEL};

/// Result of a single throw from a given number of points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Continue(Points),
    Success,
    Bust,
}

impl Outcome {
    /// Decodes a numeric table cell.
    #[must_use]
    pub fn from_cell(value: Points) -> Self {
        match value {
            SUCCESS_SENTINEL => Outcome::Success,
            BUST_SENTINEL => Outcome::Bust,
            x => Outcome::Continue(x),
        }
    }

    #[must_use]
    pub fn to_cell(self) -> Points {
        match self {
            Outcome::Continue(x) => x,
            Outcome::Success => SUCCESS_SENTINEL,
            Outcome::Bust => BUST_SENTINEL,
        }
    }

    #[must_use]
    pub fn remaining(self) -> Option<Points> {
        match self {
            Outcome::Continue(x) => Some(x),
            Outcome::Success => Some(0),
            Outcome::Bust => None,
        }
    }
}

impl From<Points> for Outcome {
    fn from(value: Points) -> Self {
        Outcome::from_cell(value)
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_cell())
    }
}
