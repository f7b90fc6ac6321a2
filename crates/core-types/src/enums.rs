use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// The settlement state of a wager.
///
/// Any outcome may be replaced by any other at any time; there is no terminal
/// state at the data-model level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    #[default]
    Pending,
    Win,
    Loss,
    Push,
    Void,
}

impl Outcome {
    pub const ALL: [Outcome; 5] = [
        Outcome::Pending,
        Outcome::Win,
        Outcome::Loss,
        Outcome::Push,
        Outcome::Void,
    ];

    /// A wager is graded once it has been settled, i.e. it is no longer pending.
    pub fn is_graded(&self) -> bool {
        !matches!(self, Outcome::Pending)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Pending => "PENDING",
            Outcome::Win => "WIN",
            Outcome::Loss => "LOSS",
            Outcome::Push => "PUSH",
            Outcome::Void => "VOID",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Outcome {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Outcome::ALL
            .into_iter()
            .find(|o| o.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownOutcome(s.to_string()))
    }
}
