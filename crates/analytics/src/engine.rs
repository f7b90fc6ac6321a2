use crate::report::{Grade, PortfolioSummary};
use core_types::{Outcome, Wager};
use rust_decimal::Decimal;

/// A stateless calculator for deriving performance metrics from a bettor's wagers.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// The main entry point for summarizing a portfolio.
    ///
    /// # Arguments
    ///
    /// * `wagers` - Every wager of one bettor, each carrying an up-to-date profit.
    ///
    /// # Returns
    ///
    /// The `PortfolioSummary`. Empty and fully pending portfolios produce the
    /// neutral summary (zero ROI, zero win rate, grade `N/A`) rather than an error.
    pub fn summarize(&self, wagers: &[Wager]) -> PortfolioSummary {
        let mut summary = PortfolioSummary::new();

        self.tally(wagers, &mut summary);
        self.calculate_ratios(&mut summary);

        tracing::debug!(
            wagers = wagers.len(),
            graded = summary.graded,
            units_won = %summary.units_won,
            roi = %summary.roi,
            grade = %summary.grade,
            "Portfolio summarized."
        );

        summary
    }

    /// Accumulates profit, stake and outcome counts in a single pass.
    fn tally(&self, wagers: &[Wager], summary: &mut PortfolioSummary) {
        for wager in wagers {
            match wager.outcome() {
                Outcome::Pending => {
                    summary.pending += 1;
                    continue;
                }
                Outcome::Win => summary.wins += 1,
                Outcome::Loss => summary.losses += 1,
                Outcome::Push => summary.pushes += 1,
                Outcome::Void => summary.voids += 1,
            }

            summary.graded += 1;
            summary.units_won += wager.profit();
            summary.total_stake += wager.stake().units();
        }
    }

    /// Derives ROI, win rate and grade from the tallied totals.
    fn calculate_ratios(&self, summary: &mut PortfolioSummary) {
        if summary.total_stake > Decimal::ZERO {
            summary.roi = (summary.units_won / summary.total_stake) * Decimal::ONE_HUNDRED;
        }

        let decided = summary.wins + summary.losses;
        if decided > 0 {
            summary.win_rate =
                (Decimal::from(summary.wins) / Decimal::from(decided)) * Decimal::ONE_HUNDRED;
        }

        if summary.graded > 0 {
            summary.grade = Grade::from_roi(summary.roi);
        }
    }
}
