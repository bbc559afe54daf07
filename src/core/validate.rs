use super::error::ValidationError;
use super::types::{
    CompoundingFrequency, MAX_ANNUAL_RATE, MAX_RETIREMENT_AGE, MIN_CURRENT_AGE, ProjectionRequest,
    RawParams,
};

pub fn validate(raw: RawParams) -> Result<ProjectionRequest, ValidationError> {
    let core_values = [
        raw.current_age,
        raw.retirement_age,
        raw.monthly_contribution,
        raw.initial_balance,
        raw.goal_amount,
        raw.annual_rate,
    ];
    if core_values.iter().any(|v| !v.is_finite() || *v < 0.0) {
        return Err(ValidationError::NotNonNegative);
    }
    if raw.current_age.fract() != 0.0 || raw.retirement_age.fract() != 0.0 {
        return Err(ValidationError::NotNonNegative);
    }

    if raw.current_age >= raw.retirement_age {
        return Err(ValidationError::AgeOrder);
    }

    if raw.current_age < f64::from(MIN_CURRENT_AGE)
        || raw.retirement_age > f64::from(MAX_RETIREMENT_AGE)
    {
        return Err(ValidationError::AgeOutOfRange);
    }

    if raw.annual_rate > MAX_ANNUAL_RATE {
        return Err(ValidationError::RateTooHigh);
    }

    // Written positively so NaN fails too.
    if !(raw.rate_variation_band >= 0.0 && raw.rate_variation_band <= raw.annual_rate) {
        return Err(ValidationError::InvalidVariationBand);
    }

    let Some(compounding_frequency) = CompoundingFrequency::parse(&raw.compounding) else {
        return Err(ValidationError::UnsupportedFrequency);
    };

    Ok(ProjectionRequest {
        // Whole numbers within 12..=116 at this point.
        current_age: raw.current_age as u32,
        retirement_age: raw.retirement_age as u32,
        monthly_contribution: raw.monthly_contribution,
        initial_balance: raw.initial_balance,
        goal_amount: raw.goal_amount,
        annual_rate: raw.annual_rate,
        rate_variation_band: raw.rate_variation_band,
        compounding_frequency,
        currency_label: raw.currency,
    })
}
