use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A letter rating derived from ROI. `NotApplicable` is reserved for
/// portfolios with no graded wagers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl Grade {
    /// Maps an ROI percentage onto a letter. Each threshold is an inclusive lower bound.
    pub fn from_roi(roi: Decimal) -> Self {
        if roi >= dec!(10) {
            Grade::A
        } else if roi >= dec!(5) {
            Grade::B
        } else if roi >= Decimal::ZERO {
            Grade::C
        } else if roi >= dec!(-5) {
            Grade::D
        } else {
            Grade::F
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
            Grade::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary statistics for one bettor's wagers.
///
/// Every figure except `pending` is computed over graded wagers only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    // I. Profitability
    pub units_won: Decimal,
    pub total_stake: Decimal,
    pub roi: Decimal,

    // II. Record
    pub wins: usize,
    pub losses: usize,
    pub pushes: usize,
    pub voids: usize,
    pub graded: usize,
    pub pending: usize,
    pub win_rate: Decimal,

    // III. Rating
    pub grade: Grade,
}

impl PortfolioSummary {
    /// Creates the summary of an empty portfolio: zeroed out and ungraded.
    pub fn new() -> Self {
        Self {
            units_won: Decimal::ZERO,
            total_stake: Decimal::ZERO,
            roi: Decimal::ZERO,
            wins: 0,
            losses: 0,
            pushes: 0,
            voids: 0,
            graded: 0,
            pending: 0,
            win_rate: Decimal::ZERO,
            grade: Grade::NotApplicable,
        }
    }

    /// The win-loss record, e.g. `2-1`, with pushes appended when there are any (`2-1-1`).
    pub fn record(&self) -> String {
        if self.pushes > 0 {
            format!("{}-{}-{}", self.wins, self.losses, self.pushes)
        } else {
            format!("{}-{}", self.wins, self.losses)
        }
    }
}

impl Default for PortfolioSummary {
    fn default() -> Self {
        Self::new()
    }
}
