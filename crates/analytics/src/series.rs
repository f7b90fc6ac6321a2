use chrono::{DateTime, Utc};
use core_types::Wager;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The default label format, matching a US locale short date (`1/15/2024`).
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// One point on a bettor's cumulative profit curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CumulativePoint {
    /// The placement date, rendered for display.
    pub label: String,
    /// Settled profit accumulated up to and including this wager.
    pub cumulative: Decimal,
    /// The wager's placement timestamp.
    pub timestamp: DateTime<Utc>,
}

/// Builds the running cumulative-profit series used for trend charts.
#[derive(Debug, Clone)]
pub struct TimeSeriesBuilder {
    date_format: String,
}

impl TimeSeriesBuilder {
    pub fn new(date_format: impl Into<String>) -> Self {
        Self {
            date_format: date_format.into(),
        }
    }

    /// Emits one point per wager in placement order.
    ///
    /// Wagers placed at the same instant keep their input order. Pending
    /// wagers produce a flat point; every other outcome moves the curve by
    /// its profit before the point is emitted, so the final value always
    /// equals the portfolio's units won.
    pub fn build(&self, wagers: &[Wager]) -> Vec<CumulativePoint> {
        let mut ordered: Vec<&Wager> = wagers.iter().collect();
        // `sort_by_key` is stable, which is what keeps ties in input order.
        ordered.sort_by_key(|w| w.placed_at());

        let mut cumulative = Decimal::ZERO;
        let points: Vec<CumulativePoint> = ordered
            .into_iter()
            .map(|wager| {
                if wager.is_graded() {
                    cumulative += wager.profit();
                }
                CumulativePoint {
                    label: wager.placed_at().format(&self.date_format).to_string(),
                    cumulative,
                    timestamp: wager.placed_at(),
                }
            })
            .collect();

        tracing::debug!(points = points.len(), last = %cumulative, "Cumulative series built.");
        points
    }
}

impl Default for TimeSeriesBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{wager, wager_at};
    use crate::AnalyticsEngine;
    use core_types::Outcome;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_input_yields_no_points() {
        assert!(TimeSeriesBuilder::default().build(&[]).is_empty());
    }

    #[test]
    fn sorts_by_placement_and_accumulates_settled_profit() {
        let wagers = vec![
            wager(17, 150, dec!(1), Outcome::Win),
            wager(15, -200, dec!(2), Outcome::Win),
            wager(16, -120, dec!(1.5), Outcome::Loss),
        ];
        let points = TimeSeriesBuilder::default().build(&wagers);

        let labels: Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["1/15/2024", "1/16/2024", "1/17/2024"]);

        let values: Vec<Decimal> = points.iter().map(|p| p.cumulative).collect();
        assert_eq!(values, vec![dec!(1), dec!(-0.5), dec!(1)]);
    }

    #[test]
    fn pending_wagers_are_flat_points() {
        let wagers = vec![
            wager(15, 100, dec!(1), Outcome::Win),
            wager(16, 300, dec!(5), Outcome::Pending),
            wager(17, 100, dec!(1), Outcome::Loss),
        ];
        let points = TimeSeriesBuilder::default().build(&wagers);
        assert_eq!(points.len(), 3);
        assert_eq!(points[1].cumulative, dec!(1));
        assert_eq!(points[2].cumulative, dec!(0));
    }

    #[test]
    fn equal_timestamps_keep_input_order() {
        let first = wager_at("2024-01-15T12:00:00Z", 100, dec!(1), Outcome::Win);
        let second = wager_at("2024-01-15T12:00:00Z", 100, dec!(3), Outcome::Loss);
        let earlier = wager_at("2024-01-14T08:00:00Z", 100, dec!(2), Outcome::Push);

        let points = TimeSeriesBuilder::default().build(&[first, second, earlier]);
        let values: Vec<Decimal> = points.iter().map(|p| p.cumulative).collect();
        assert_eq!(values, vec![dec!(0), dec!(1), dec!(-2)]);
    }

    #[test]
    fn final_point_matches_units_won() {
        let wagers = vec![
            wager(20, -110, dec!(1), Outcome::Win),
            wager(18, -120, dec!(1.5), Outcome::Loss),
            wager(19, 150, dec!(1), Outcome::Win),
            wager(21, -130, dec!(2), Outcome::Pending),
            wager(16, 200, dec!(1), Outcome::Void),
        ];
        let points = TimeSeriesBuilder::default().build(&wagers);
        let summary = AnalyticsEngine::new().summarize(&wagers);
        let last = points.last().map(|p| p.cumulative).unwrap_or_default();
        assert_eq!(last.round_dp(12), summary.units_won.round_dp(12));
    }

    #[test]
    fn honours_a_custom_date_format() {
        let points = TimeSeriesBuilder::new("%Y-%m-%d").build(&[wager(
            15,
            100,
            dec!(1),
            Outcome::Win,
        )]);
        assert_eq!(points[0].label, "2024-01-15");
    }
}
