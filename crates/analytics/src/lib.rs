//! # Basic Bettor Analytics
//!
//! This crate turns a bettor's wagers into display-ready performance figures.
//!
//! ## Architectural Principles
//!
//! - **Pure Logic:** No knowledge of storage or presentation. It depends only
//!   on `core-types`.
//! - **Stateless Calculation:** Every component recomputes from the full wager
//!   slice it is given. Nothing is cached, so a result is always consistent with
//!   the wager set it was computed from.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: Reduces wagers into a `PortfolioSummary` (units won, ROI,
//!   record, win rate, grade).
//! - `TimeSeriesBuilder`: Produces the cumulative profit curve as `CumulativePoint`s.
//! - `ResultFilter`: Selects wagers by outcome for display.

pub mod engine;
pub mod filter;
pub mod report;
pub mod series;

pub use engine::AnalyticsEngine;
pub use filter::ResultFilter;
pub use report::{Grade, PortfolioSummary};
pub use series::{CumulativePoint, TimeSeriesBuilder, DEFAULT_DATE_FORMAT};
