use core_types::{CoreError, Outcome, Wager};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selects which wagers to display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ResultFilter {
    #[default]
    All,
    /// Every settled wager, i.e. anything but `PENDING`.
    Graded,
    Only(Outcome),
}

impl ResultFilter {
    pub fn matches(&self, wager: &Wager) -> bool {
        match self {
            ResultFilter::All => true,
            ResultFilter::Graded => wager.is_graded(),
            ResultFilter::Only(outcome) => wager.outcome() == *outcome,
        }
    }

    /// Returns the matching wagers in their original order.
    pub fn apply<'a>(&self, wagers: &'a [Wager]) -> Vec<&'a Wager> {
        wagers.iter().filter(|w| self.matches(w)).collect()
    }
}

impl fmt::Display for ResultFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultFilter::All => f.write_str("ALL"),
            ResultFilter::Graded => f.write_str("GRADED"),
            ResultFilter::Only(outcome) => write!(f, "{}", outcome),
        }
    }
}

impl FromStr for ResultFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("ALL") {
            return Ok(ResultFilter::All);
        }
        if trimmed.eq_ignore_ascii_case("GRADED") {
            return Ok(ResultFilter::Graded);
        }
        trimmed
            .parse::<Outcome>()
            .map(ResultFilter::Only)
            .map_err(|_| CoreError::UnknownFilter(s.to_string()))
    }
}

impl TryFrom<String> for ResultFilter {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ResultFilter> for String {
    fn from(filter: ResultFilter) -> Self {
        filter.to_string()
    }
}
