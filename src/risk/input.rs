//! Scoring inputs and the volatility-reaction vocabulary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The six inputs to the risk scorer. All fields are required; there are
/// no defaults.
///
/// The integer fields are signed on purpose: the scorer is total over the
/// declared types and computes out-of-range values (a negative horizon, a
/// rating of 0 or 7) through the same arithmetic without clamping. Use
/// [`RiskInput::validate`] at the boundary if the caller wants the advisory
/// ranges enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskInput {
    /// Investment time horizon in years.
    pub time_horizon_years: i64,
    /// Months of expenses covered by emergency funds.
    pub emergency_fund_months: i64,
    /// Subjective income stability, 1 (unstable) to 5 (highly stable).
    pub income_stability_rating: i64,
    /// Free-form answer to the 20% market-drop question.
    pub volatility_choice: String,
    /// Whether the user has financial dependents.
    pub has_dependents: bool,
    /// Whether the user is in a net-liability position.
    pub debt_exceeds_assets: bool,
}

impl RiskInput {
    /// Check the advisory input ranges, returning the first violation.
    ///
    /// This is an optional boundary step: the scorer itself accepts any
    /// well-typed input and never fails, and calling `validate` does not
    /// change the arithmetic for inputs that pass.
    pub fn validate(&self) -> Result<(), InvalidInput> {
        if self.time_horizon_years < 0 {
            return Err(InvalidInput::NegativeTimeHorizon(self.time_horizon_years));
        }
        if self.emergency_fund_months < 0 {
            return Err(InvalidInput::NegativeEmergencyFund(self.emergency_fund_months));
        }
        if !(1..=5).contains(&self.income_stability_rating) {
            return Err(InvalidInput::RatingOutOfRange(self.income_stability_rating));
        }
        Ok(())
    }

    /// Parse the volatility answer into its tolerance bucket.
    pub fn volatility_reaction(&self) -> VolatilityReaction {
        VolatilityReaction::parse(&self.volatility_choice)
    }
}

/// Validation failure for a [`RiskInput`] field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidInput {
    /// Time horizon below zero.
    #[error("invalid input: time_horizon_years must be >= 0, got {0}")]
    NegativeTimeHorizon(i64),
    /// Emergency fund months below zero.
    #[error("invalid input: emergency_fund_months must be >= 0, got {0}")]
    NegativeEmergencyFund(i64),
    /// Rating outside the 1-5 scale.
    #[error("invalid input: income_stability_rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(i64),
}

/// Behavioral reaction to a hypothetical 20% market drop.
///
/// Only two exact token sets add points; everything else, including
/// plausible synonyms like "hold" on its own, maps to [`Sell`] and scores
/// zero. The fallback is deliberate: unrecognized phrasing is treated as
/// conservative, never as a parse error.
///
/// [`Sell`]: VolatilityReaction::Sell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolatilityReaction {
    /// "c" or "invest more": aggressive tolerance.
    InvestMore,
    /// "b" or "hold steady": moderate tolerance.
    HoldSteady,
    /// "a", "sell", or any unrecognized answer: conservative tolerance.
    Sell,
}

impl VolatilityReaction {
    /// Case-insensitive match against the accepted tokens.
    pub fn parse(choice: &str) -> Self {
        match choice.to_lowercase().as_str() {
            "c" | "invest more" => VolatilityReaction::InvestMore,
            "b" | "hold steady" => VolatilityReaction::HoldSteady,
            _ => VolatilityReaction::Sell,
        }
    }

    /// Tolerance points contributed to the raw score.
    pub fn points(&self) -> f64 {
        match self {
            VolatilityReaction::InvestMore => 30.0,
            VolatilityReaction::HoldSteady => 15.0,
            VolatilityReaction::Sell => 0.0,
        }
    }
}
