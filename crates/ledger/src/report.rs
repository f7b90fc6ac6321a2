use analytics::{CumulativePoint, PortfolioSummary, ResultFilter};
use core_types::{Bettor, Wager};
use serde::Serialize;

/// Everything a dashboard needs to render one bettor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BettorReport {
    pub bettor: Bettor,
    /// Computed over every wager, regardless of `filter`.
    pub summary: PortfolioSummary,
    /// Computed over every wager, regardless of `filter`.
    pub series: Vec<CumulativePoint>,
    pub filter: ResultFilter,
    /// The wagers selected by `filter`, in insertion order.
    pub bets: Vec<Wager>,
}
