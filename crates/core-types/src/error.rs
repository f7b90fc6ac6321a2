use thiserror::Error;

/// Rejections raised at the validation boundary, before any value reaches
/// the valuation or analytics code.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("American odds must be a non-zero integer, got {0}")]
    InvalidOdds(i32),

    #[error("Stake must be a positive number of units no greater than 1e15, got {0}")]
    InvalidStake(String),

    #[error("Invalid ISO-8601 timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("Field '{0}' is required")]
    MissingField(&'static str),

    #[error("Profile reference must be a valid http(s) URL: {0}")]
    InvalidProfileUrl(String),

    #[error("Unrecognized outcome '{0}'")]
    UnknownOutcome(String),

    #[error("Unrecognized result filter '{0}'")]
    UnknownFilter(String),
}
