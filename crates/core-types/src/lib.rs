//! # Basic Bettor Core Types
//!
//! The shared vocabulary of the workspace: bettors, wagers, outcomes, and the
//! validated value types (`AmericanOdds`, `Stake`) they are built from.
//!
//! Valuation lives here rather than in `analytics` because a `Wager` owns its
//! cached profit and must recompute it on every change.

pub mod enums;
pub mod error;
pub mod input;
pub mod structs;
pub mod valuation;

// Re-export the core types to provide a clean public API.
pub use enums::Outcome;
pub use error::CoreError;
pub use input::{BettorDraft, BettorInput, WagerInput, WagerPatchInput};
pub use structs::{AmericanOdds, Bettor, BettorWithWagers, Stake, Wager, WagerDraft, WagerPatch};
pub use valuation::{format_odds, profit};
