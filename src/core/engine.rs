use super::types::{ProjectionRequest, ProjectionResult, ScenarioResult};

/// Evaluates the request at its base rate and, when a band is set, at
/// `rate - band` and `rate + band`.
pub fn project(request: &ProjectionRequest) -> ProjectionResult {
    let base_scenario = evaluate_scenario(request, request.annual_rate);
    let (low_scenario, high_scenario) = if request.rate_variation_band > 0.0 {
        (
            Some(evaluate_scenario(
                request,
                request.annual_rate - request.rate_variation_band,
            )),
            Some(evaluate_scenario(
                request,
                request.annual_rate + request.rate_variation_band,
            )),
        )
    } else {
        (None, None)
    };

    ProjectionResult {
        base_scenario,
        low_scenario,
        high_scenario,
        annual_rate: request.annual_rate,
        rate_variation_band: request.rate_variation_band,
        goal_amount: request.goal_amount,
        current_age: request.current_age,
        retirement_age: request.retirement_age,
        compounding_frequency: request.compounding_frequency,
        currency_label: request.currency_label.clone(),
    }
}

fn evaluate_scenario(request: &ProjectionRequest, rate: f64) -> ScenarioResult {
    ScenarioResult {
        rate,
        future_value: future_value(request, rate),
    }
}

/// Projected balance at retirement for `annual_rate`: the initial balance
/// compounded over the horizon plus one contribution per month.
///
/// Monthly compounding uses the closed-form annuity. Other frequencies
/// compound each monthly contribution for its own remaining exposure,
/// `n * (months - m) / 12` periods, which may be fractional. That loop is an
/// approximation and is kept as is.
pub fn future_value(request: &ProjectionRequest, annual_rate: f64) -> f64 {
    let years = request.years();
    let months = years * 12;
    let periods_per_year = request.compounding_frequency.periods_per_year();
    let total_periods = f64::from(periods_per_year * years);
    let periodic_rate = annual_rate / f64::from(periods_per_year);

    let future_initial = request.initial_balance * growth_factor(periodic_rate, total_periods);

    let future_contributions = if periodic_rate == 0.0 {
        request.monthly_contribution * f64::from(months)
    } else if periods_per_year == 12 {
        request.monthly_contribution * annuity_factor(periodic_rate, total_periods)
    } else {
        (0..months)
            .map(|month| {
                let remaining_periods = f64::from(periods_per_year * (months - month)) / 12.0;
                request.monthly_contribution * growth_factor(periodic_rate, remaining_periods)
            })
            .sum()
    };

    future_initial + future_contributions
}

/// `(1 + r)^periods`
fn growth_factor(periodic_rate: f64, periods: f64) -> f64 {
    (periods * periodic_rate.ln_1p()).exp()
}

/// `((1 + r)^periods - 1) / r`, for `r > 0`.
fn annuity_factor(periodic_rate: f64, periods: f64) -> f64 {
    (periods * periodic_rate.ln_1p()).exp_m1() / periodic_rate
}
