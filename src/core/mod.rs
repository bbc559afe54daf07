mod analysis;
mod currency;
mod engine;
mod error;
mod types;
mod validate;

pub use analysis::{adjusted_purchasing_power, goal_gap, potential_variation, retirement_income};
pub use currency::CurrencyTable;
pub use engine::{future_value, project};
pub use error::ValidationError;
pub use types::{
    CompoundingFrequency, GoalGap, INFLATION_HEURISTIC, LIFE_EXPECTANCY, MAX_ANNUAL_RATE,
    MAX_RETIREMENT_AGE, MIN_CURRENT_AGE, ProjectionReport, ProjectionRequest, ProjectionResult,
    RawParams, RetirementIncome, ScenarioAnalysis, ScenarioKind, ScenarioResult,
};
pub use validate::validate;
