//! Risk assessment result structures.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Final risk-profile classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskProfile {
    /// Raw score below 35.
    Conservative,
    /// Raw score in [35, 60).
    Moderate,
    /// Raw score of 60 or above.
    Aggressive,
}

impl RiskProfile {
    /// Classify an accumulated raw score.
    ///
    /// The thresholds are part of the output contract: 60 and above is
    /// Aggressive, 35 and above is Moderate, everything below is
    /// Conservative. The reachable maximum for in-range inputs is 70, and
    /// the thresholds apply to that raw total, not to a percentage.
    pub fn from_raw_score(score: f64) -> Self {
        if score >= 60.0 {
            RiskProfile::Aggressive
        } else if score >= 35.0 {
            RiskProfile::Moderate
        } else {
            RiskProfile::Conservative
        }
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskProfile::Conservative => write!(f, "Conservative"),
            RiskProfile::Moderate => write!(f, "Moderate"),
            RiskProfile::Aggressive => write!(f, "Aggressive"),
        }
    }
}

/// Investment time-horizon category, tagged with its capacity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HorizonCategory {
    /// Under 5 years.
    #[serde(rename = "Short-term (Conservative Capacity)")]
    ShortTerm,
    /// 5 to 14 years.
    #[serde(rename = "Medium-term (Moderate Capacity)")]
    MediumTerm,
    /// 15 years or more.
    #[serde(rename = "Long-term (Aggressive Capacity)")]
    LongTerm,
}

impl HorizonCategory {
    /// Categorize a time horizon in years.
    pub fn from_years(years: i64) -> Self {
        if years >= 15 {
            HorizonCategory::LongTerm
        } else if years >= 5 {
            HorizonCategory::MediumTerm
        } else {
            HorizonCategory::ShortTerm
        }
    }

    /// Capacity points contributed to the raw score.
    pub fn points(&self) -> f64 {
        match self {
            HorizonCategory::LongTerm => 20.0,
            HorizonCategory::MediumTerm => 10.0,
            HorizonCategory::ShortTerm => 0.0,
        }
    }
}

impl fmt::Display for HorizonCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HorizonCategory::ShortTerm => write!(f, "Short-term (Conservative Capacity)"),
            HorizonCategory::MediumTerm => write!(f, "Medium-term (Moderate Capacity)"),
            HorizonCategory::LongTerm => write!(f, "Long-term (Aggressive Capacity)"),
        }
    }
}

/// Insurance-gap advisory, selected by the dependents flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsuranceGapNote {
    /// User has financial dependents.
    #[serde(rename = "Potential need for life and disability insurance.")]
    LifeAndDisability,
    /// No dependents.
    #[serde(rename = "Basic coverage only.")]
    BasicCoverage,
}

impl InsuranceGapNote {
    pub fn from_dependents(has_dependents: bool) -> Self {
        if has_dependents {
            InsuranceGapNote::LifeAndDisability
        } else {
            InsuranceGapNote::BasicCoverage
        }
    }
}

impl fmt::Display for InsuranceGapNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsuranceGapNote::LifeAndDisability => {
                write!(f, "Potential need for life and disability insurance.")
            }
            InsuranceGapNote::BasicCoverage => write!(f, "Basic coverage only."),
        }
    }
}

/// Liquidity-risk advisory, selected by the debt-vs-assets flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiquidityRiskNote {
    /// Debt exceeds assets.
    #[serde(rename = "High liquidity risk and financial stress.")]
    Stressed,
    /// Net assets positive.
    #[serde(rename = "Balanced.")]
    Balanced,
}

impl LiquidityRiskNote {
    pub fn from_debt_position(debt_exceeds_assets: bool) -> Self {
        if debt_exceeds_assets {
            LiquidityRiskNote::Stressed
        } else {
            LiquidityRiskNote::Balanced
        }
    }
}

impl fmt::Display for LiquidityRiskNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiquidityRiskNote::Stressed => {
                write!(f, "High liquidity risk and financial stress.")
            }
            LiquidityRiskNote::Balanced => write!(f, "Balanced."),
        }
    }
}

/// Complete risk assessment for one individual.
///
/// The serialized field names and enum strings are the wire contract that
/// downstream consumers (the orchestration agent merging this into its
/// shared state object) depend on; treat them as stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Additive point total. Fractional values from the income-stability
    /// component are retained unrounded.
    pub raw_score: f64,
    /// Classification of the raw score.
    pub risk_profile: RiskProfile,
    /// Horizon category with capacity label.
    pub time_horizon_category: HorizonCategory,
    /// Insurance advisory.
    pub insurance_gap_note: InsuranceGapNote,
    /// Liquidity advisory.
    pub liquidity_risk_note: LiquidityRiskNote,
}

impl RiskAssessment {
    /// Nest the assessment under a state-object key for the orchestration
    /// layer to merge, e.g. `{"risk_assessment_data": {...}}`.
    pub fn nested_under(&self, key: &str) -> serde_json::Value {
        serde_json::json!({ key: self })
    }
}

impl fmt::Display for RiskAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Risk Assessment")?;
        writeln!(f, "===============")?;
        writeln!(f, "Raw Score:    {}", self.raw_score)?;
        writeln!(f, "Risk Profile: {}", self.risk_profile)?;
        writeln!(f, "Time Horizon: {}", self.time_horizon_category)?;
        writeln!(f)?;
        writeln!(f, "Advisories:")?;
        writeln!(f, "  Insurance: {}", self.insurance_gap_note)?;
        writeln!(f, "  Liquidity: {}", self.liquidity_risk_note)?;
        Ok(())
    }
}
