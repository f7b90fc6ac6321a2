use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::Outcome;
use crate::error::CoreError;
use crate::valuation;

/// A betting line in American format. Zero is not a valid line and cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct AmericanOdds(i32);

impl AmericanOdds {
    pub fn new(value: i32) -> Result<Self, CoreError> {
        if value == 0 {
            return Err(CoreError::InvalidOdds(value));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for AmericanOdds {
    type Error = CoreError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AmericanOdds> for i32 {
    fn from(odds: AmericanOdds) -> Self {
        odds.0
    }
}

/// A strictly positive amount risked on a wager, measured in units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Stake(Decimal);

impl Stake {
    /// The largest accepted stake, 10^15 units. A win at the longest
    /// representable line still fits in a `Decimal`, as does the sum of
    /// three million such wins.
    pub const MAX_UNITS: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

    pub fn new(units: Decimal) -> Result<Self, CoreError> {
        if units <= Decimal::ZERO || units > Self::MAX_UNITS {
            return Err(CoreError::InvalidStake(units.to_string()));
        }
        Ok(Self(units))
    }

    /// Converts a raw floating point stake, rejecting NaN, infinities and values
    /// outside `(0, MAX_UNITS]`. Errors report the value as given, before rounding.
    pub fn from_f64(units: f64) -> Result<Self, CoreError> {
        use rust_decimal::prelude::FromPrimitive;

        let invalid = || CoreError::InvalidStake(units.to_string());
        if !units.is_finite() || units <= 0.0 {
            return Err(invalid());
        }
        let decimal = Decimal::from_f64(units).ok_or_else(invalid)?;
        Self::new(decimal).map_err(|_| invalid())
    }

    pub fn units(&self) -> Decimal {
        self.0
    }
}

/// A person whose wagers are tracked.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bettor {
    pub id: Uuid,
    pub name: String,
    pub profile_url: String,
    pub created_at: DateTime<Utc>,
}

impl Bettor {
    pub fn new(name: String, profile_url: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            profile_url,
            created_at: Utc::now(),
        }
    }
}

/// A bettor together with their wagers, in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BettorWithWagers {
    #[serde(flatten)]
    pub bettor: Bettor,
    #[serde(rename = "bets")]
    pub wagers: Vec<Wager>,
}

/// The validated fields needed to open a new wager.
#[derive(Debug, Clone, PartialEq)]
pub struct WagerDraft {
    pub placed_at: DateTime<Utc>,
    pub description: String,
    pub sport: Option<String>,
    pub odds: AmericanOdds,
    pub stake: Stake,
    pub outcome: Outcome,
    pub notes: Option<String>,
}

/// A partial update to a wager. `None` leaves a field untouched; for the
/// optional text fields, `Some(None)` clears the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WagerPatch {
    pub placed_at: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub sport: Option<Option<String>>,
    pub odds: Option<AmericanOdds>,
    pub stake: Option<Stake>,
    pub outcome: Option<Outcome>,
    pub notes: Option<Option<String>>,
}

impl WagerPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// A single recorded bet.
///
/// `profit` is a cached value derived from `odds`, `stake` and `outcome`. The
/// fields are private so the only ways to change them, `Wager::open` and
/// `Wager::apply`, recompute it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Wager {
    id: Uuid,
    bettor_id: Uuid,
    placed_at: DateTime<Utc>,
    description: String,
    sport: Option<String>,
    #[serde(rename = "oddsAmerican")]
    odds: AmericanOdds,
    #[serde(rename = "stakeUnits")]
    stake: Stake,
    #[serde(rename = "result")]
    outcome: Outcome,
    #[serde(rename = "profitUnits")]
    profit: Decimal,
    notes: Option<String>,
}

impl Wager {
    /// Opens a new wager for a bettor, valuating it immediately.
    pub fn open(bettor_id: Uuid, draft: WagerDraft) -> Self {
        let profit = valuation::profit(draft.odds, draft.stake, draft.outcome);
        Self {
            id: Uuid::new_v4(),
            bettor_id,
            placed_at: draft.placed_at,
            description: draft.description,
            sport: draft.sport,
            odds: draft.odds,
            stake: draft.stake,
            outcome: draft.outcome,
            profit,
            notes: draft.notes,
        }
    }

    /// Merges a patch into this wager and recomputes profit from the merged values.
    pub fn apply(&mut self, patch: WagerPatch) {
        if let Some(placed_at) = patch.placed_at {
            self.placed_at = placed_at;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(sport) = patch.sport {
            self.sport = sport;
        }
        if let Some(odds) = patch.odds {
            self.odds = odds;
        }
        if let Some(stake) = patch.stake {
            self.stake = stake;
        }
        if let Some(outcome) = patch.outcome {
            self.outcome = outcome;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
        self.profit = valuation::profit(self.odds, self.stake, self.outcome);
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn bettor_id(&self) -> Uuid {
        self.bettor_id
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn sport(&self) -> Option<&str> {
        self.sport.as_deref()
    }

    pub fn odds(&self) -> AmericanOdds {
        self.odds
    }

    pub fn stake(&self) -> Stake {
        self.stake
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn profit(&self) -> Decimal {
        self.profit
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn is_graded(&self) -> bool {
        self.outcome.is_graded()
    }
}
