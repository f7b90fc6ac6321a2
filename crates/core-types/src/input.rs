//! Raw, untrusted request shapes and their validation into domain values.
//!
//! Field names follow the JSON bodies accepted by the bettor/bet endpoints
//! (`profileUrl`, `oddsAmerican`, `stakeUnits`, ...).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use url::Url;

use crate::enums::Outcome;
use crate::error::CoreError;
use crate::structs::{AmericanOdds, Stake, WagerDraft, WagerPatch};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BettorInput {
    pub name: String,
    pub profile_url: String,
}

/// A validated bettor, ready to be persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct BettorDraft {
    pub name: String,
    pub profile_url: String,
}

impl BettorInput {
    pub fn validate(self) -> Result<BettorDraft, CoreError> {
        let name = required_text(self.name, "name")?;
        let profile_url = self.profile_url.trim().to_string();
        match Url::parse(&profile_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => return Err(CoreError::InvalidProfileUrl(profile_url)),
        }
        Ok(BettorDraft { name, profile_url })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WagerInput {
    pub placed_at: String,
    pub description: String,
    #[serde(default)]
    pub sport: Option<String>,
    pub odds_american: i32,
    pub stake_units: f64,
    #[serde(default, rename = "result")]
    pub outcome: Option<Outcome>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl WagerInput {
    pub fn validate(self) -> Result<WagerDraft, CoreError> {
        Ok(WagerDraft {
            placed_at: parse_timestamp(&self.placed_at)?,
            description: required_text(self.description, "description")?,
            sport: optional_text(self.sport),
            odds: AmericanOdds::new(self.odds_american)?,
            stake: Stake::from_f64(self.stake_units)?,
            outcome: self.outcome.unwrap_or_default(),
            notes: optional_text(self.notes),
        })
    }
}

/// Every field is optional. `sport` and `notes` distinguish an absent key
/// (leave as is) from an explicit `null` (clear).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WagerPatchInput {
    #[serde(default)]
    pub placed_at: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub sport: Option<Option<String>>,
    #[serde(default)]
    pub odds_american: Option<i32>,
    #[serde(default)]
    pub stake_units: Option<f64>,
    #[serde(default, rename = "result")]
    pub outcome: Option<Outcome>,
    #[serde(default, deserialize_with = "present")]
    pub notes: Option<Option<String>>,
}

impl WagerPatchInput {
    pub fn validate(self) -> Result<WagerPatch, CoreError> {
        Ok(WagerPatch {
            placed_at: self.placed_at.as_deref().map(parse_timestamp).transpose()?,
            description: self
                .description
                .map(|d| required_text(d, "description"))
                .transpose()?,
            sport: self.sport.map(optional_text),
            odds: self.odds_american.map(AmericanOdds::new).transpose()?,
            stake: self.stake_units.map(Stake::from_f64).transpose()?,
            outcome: self.outcome,
            notes: self.notes.map(optional_text),
        })
    }
}

/// Parses an RFC 3339 / ISO-8601 timestamp with offset into UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, CoreError> {
    DateTime::parse_from_rfc3339(value.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| CoreError::InvalidTimestamp {
            value: value.to_string(),
            reason: e.to_string(),
        })
}

fn required_text(value: String, field: &'static str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
