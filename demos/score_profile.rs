//! Example: Score an investor risk profile.
//!
//! This example demonstrates how to:
//! 1. Build an input record from the six profiling answers
//! 2. Compute the risk assessment
//! 3. Emit JSON for an orchestration layer to merge into shared state
//!
//! Run with: cargo run --example score_profile

use anyhow::Result;
use risk_profiler::risk::{score, RiskInput};
use tracing::info;
use tracing_subscriber;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    info!("Scoring two sample profiles");

    // A long-horizon investor with a full emergency buffer who would buy
    // the dip.
    let growth_seeker = RiskInput {
        time_horizon_years: 20,
        emergency_fund_months: 8,
        income_stability_rating: 4,
        volatility_choice: "invest more".to_string(),
        has_dependents: true,
        debt_exceeds_assets: false,
    };

    let assessment = score(&growth_seeker);
    println!("{}", assessment);
    println!(
        "State-object payload:\n{}\n",
        serde_json::to_string_pretty(&assessment.nested_under("risk_assessment_data"))?
    );

    // A near-retiree with thin reserves who would sell into a drop.
    let capital_preserver = RiskInput {
        time_horizon_years: 3,
        emergency_fund_months: 2,
        income_stability_rating: 2,
        volatility_choice: "A".to_string(),
        has_dependents: false,
        debt_exceeds_assets: true,
    };

    let assessment = score(&capital_preserver);
    println!("{}", assessment);

    Ok(())
}
