//! Risk profiling module.

mod input;
mod score;
mod scorer;

pub use input::{InvalidInput, RiskInput, VolatilityReaction};
pub use score::{
    HorizonCategory, InsuranceGapNote, LiquidityRiskNote, RiskAssessment, RiskProfile,
};
pub use scorer::score;
