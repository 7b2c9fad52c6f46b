//! Investor Risk Profiling
//!
//! This crate computes an investment-risk profile for an individual from
//! six inputs spanning financial capacity, behavioral tolerance, and
//! protection exposure.
//!
//! # Features
//!
//! - Pure, deterministic risk scoring across three weighted components
//! - Classification into Conservative / Moderate / Aggressive profiles
//! - Insurance-gap and liquidity advisories from the exposure flags
//! - A stable JSON contract for LLM-orchestrated financial agents
//! - Optional boundary validation of the advisory input ranges

pub mod risk;
pub mod utils;

pub use risk::{
    score, HorizonCategory, InsuranceGapNote, InvalidInput, LiquidityRiskNote, RiskAssessment,
    RiskInput, RiskProfile, VolatilityReaction,
};
