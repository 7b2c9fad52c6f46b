//! The scoring function.

use tracing::debug;

use super::input::RiskInput;
use super::score::{
    HorizonCategory, InsuranceGapNote, LiquidityRiskNote, RiskAssessment, RiskProfile,
};

/// Capacity points for the emergency-fund buffer.
fn emergency_fund_points(months: i64) -> f64 {
    if months >= 6 {
        10.0
    } else if months >= 3 {
        5.0
    } else {
        0.0
    }
}

/// Capacity points for income stability, 2.5 per step above 1.
///
/// Not clamped: a rating outside 1-5 flows through the same formula.
fn income_stability_points(rating: i64) -> f64 {
    (rating - 1) as f64 * 2.5
}

/// Compute a risk assessment from the six profiling inputs.
///
/// Pure and deterministic: no I/O, no shared state, and never fails. Any
/// number of concurrent calls may run in parallel. The score accumulates
/// three weighted components (time horizon up to 20, emergency fund up to
/// 10, income stability up to 10, volatility tolerance up to 30); the two
/// boolean flags select the advisory notes and never touch the score.
pub fn score(input: &RiskInput) -> RiskAssessment {
    let horizon = HorizonCategory::from_years(input.time_horizon_years);
    let reaction = input.volatility_reaction();

    let raw_score = horizon.points()
        + emergency_fund_points(input.emergency_fund_months)
        + income_stability_points(input.income_stability_rating)
        + reaction.points();

    debug!(raw_score, ?horizon, ?reaction, "risk score accumulated");

    RiskAssessment {
        raw_score,
        risk_profile: RiskProfile::from_raw_score(raw_score),
        time_horizon_category: horizon,
        insurance_gap_note: InsuranceGapNote::from_dependents(input.has_dependents),
        liquidity_risk_note: LiquidityRiskNote::from_debt_position(input.debt_exceeds_assets),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(
        horizon: i64,
        fund: i64,
        rating: i64,
        choice: &str,
        dependents: bool,
        debt: bool,
    ) -> RiskInput {
        RiskInput {
            time_horizon_years: horizon,
            emergency_fund_months: fund,
            income_stability_rating: rating,
            volatility_choice: choice.to_string(),
            has_dependents: dependents,
            debt_exceeds_assets: debt,
        }
    }

    #[test]
    fn test_maximum_profile() {
        let assessment = score(&input(15, 6, 5, "C", true, false));

        assert_eq!(assessment.raw_score, 70.0);
        assert_eq!(assessment.risk_profile, RiskProfile::Aggressive);
        assert_eq!(assessment.time_horizon_category, HorizonCategory::LongTerm);
        assert_eq!(
            assessment.insurance_gap_note,
            InsuranceGapNote::LifeAndDisability
        );
        assert_eq!(assessment.liquidity_risk_note, LiquidityRiskNote::Balanced);
    }

    #[test]
    fn test_minimum_profile() {
        let assessment = score(&input(2, 1, 1, "A", false, true));

        assert_eq!(assessment.raw_score, 0.0);
        assert_eq!(assessment.risk_profile, RiskProfile::Conservative);
        assert_eq!(assessment.time_horizon_category, HorizonCategory::ShortTerm);
        assert_eq!(
            assessment.insurance_gap_note,
            InsuranceGapNote::BasicCoverage
        );
        assert_eq!(assessment.liquidity_risk_note, LiquidityRiskNote::Stressed);
    }

    #[test]
    fn test_moderate_boundary_profile() {
        // 10 + 5 + 5 + 15 lands exactly on the Moderate threshold
        let assessment = score(&input(5, 3, 3, "B", false, false));

        assert_eq!(assessment.raw_score, 35.0);
        assert_eq!(assessment.risk_profile, RiskProfile::Moderate);
    }

    #[test]
    fn test_aggressive_boundary_profile() {
        // 20 + 10 + 0 + 30 = 60, the closed Aggressive boundary
        let assessment = score(&input(20, 8, 1, "invest more", false, false));

        assert_eq!(assessment.raw_score, 60.0);
        assert_eq!(assessment.risk_profile, RiskProfile::Aggressive);
    }

    #[test]
    fn test_income_stability_contribution() {
        let base = score(&input(0, 0, 1, "sell", false, false)).raw_score;
        assert_eq!(base, 0.0);

        assert_eq!(score(&input(0, 0, 3, "sell", false, false)).raw_score, 5.0);
        assert_eq!(score(&input(0, 0, 5, "sell", false, false)).raw_score, 10.0);

        // fractional steps are retained unrounded
        assert_eq!(score(&input(0, 0, 2, "sell", false, false)).raw_score, 2.5);
    }

    #[test]
    fn test_volatility_case_insensitive() {
        for choice in ["C", "c", "INVEST MORE", "invest more"] {
            assert_eq!(score(&input(0, 0, 1, choice, false, false)).raw_score, 30.0);
        }
        for choice in ["A", "sell", "hold", "no idea"] {
            assert_eq!(score(&input(0, 0, 1, choice, false, false)).raw_score, 0.0);
        }
    }

    #[test]
    fn test_flags_never_touch_the_score() {
        for dependents in [false, true] {
            for debt in [false, true] {
                let assessment = score(&input(10, 4, 4, "b", dependents, debt));
                assert_eq!(assessment.raw_score, 37.5);
                assert_eq!(assessment.risk_profile, RiskProfile::Moderate);
            }
        }
    }

    #[test]
    fn test_score_range_over_valid_inputs() {
        for horizon in [0, 4, 5, 14, 15, 50] {
            for fund in [0, 2, 3, 5, 6, 24] {
                for rating in 1..=5 {
                    for choice in ["a", "b", "c", "hold steady", "invest more", "?"] {
                        let s = score(&input(horizon, fund, rating, choice, true, true)).raw_score;
                        assert!((0.0..=70.0).contains(&s), "score {} out of range", s);
                    }
                }
            }
        }
    }

    #[test]
    fn test_component_monotonicity() {
        let horizon_pts =
            |y| score(&input(y, 0, 1, "a", false, false)).raw_score;
        assert!(horizon_pts(4) <= horizon_pts(5));
        assert!(horizon_pts(14) <= horizon_pts(15));

        let fund_pts = |m| score(&input(0, m, 1, "a", false, false)).raw_score;
        assert!(fund_pts(2) <= fund_pts(3));
        assert!(fund_pts(5) <= fund_pts(6));

        let rating_pts = |r| score(&input(0, 0, r, "a", false, false)).raw_score;
        for r in 1..5 {
            assert!(rating_pts(r) < rating_pts(r + 1));
        }
    }

    #[test]
    fn test_out_of_range_inputs_flow_through() {
        // no clamping: rating 0 contributes -2.5, rating 7 contributes 15
        assert_eq!(score(&input(0, 0, 0, "a", false, false)).raw_score, -2.5);
        assert_eq!(score(&input(0, 0, 7, "a", false, false)).raw_score, 15.0);

        // negative horizon is short-term, zero points
        let assessment = score(&input(-10, 0, 1, "a", false, false));
        assert_eq!(assessment.time_horizon_category, HorizonCategory::ShortTerm);
        assert_eq!(assessment.raw_score, 0.0);
    }
}
