use super::types::{
    GoalGap, INFLATION_HEURISTIC, LIFE_EXPECTANCY, ProjectionReport, ProjectionResult,
    RetirementIncome, ScenarioAnalysis, ScenarioKind, ScenarioResult,
};

/// `goal - future_value`; a positive gap is a shortfall, anything else a
/// surplus of its magnitude.
pub fn goal_gap(goal_amount: f64, scenario: &ScenarioResult) -> GoalGap {
    let gap = goal_amount - scenario.future_value;
    if gap > 0.0 {
        GoalGap::Shortfall { amount: gap }
    } else {
        GoalGap::Met { surplus: -gap }
    }
}

/// Spreads `future_value` evenly over the years between retirement and
/// [`LIFE_EXPECTANCY`]. Returns `None` when there are no such years.
pub fn retirement_income(future_value: f64, retirement_age: u32) -> Option<RetirementIncome> {
    let retirement_years = LIFE_EXPECTANCY.checked_sub(retirement_age)?;
    if retirement_years == 0 {
        return None;
    }
    let annual = future_value / f64::from(retirement_years);
    Some(RetirementIncome {
        retirement_years,
        annual,
        monthly: annual / 12.0,
    })
}

pub fn adjusted_purchasing_power(result: &ProjectionResult) -> f64 {
    result.base_scenario.future_value * INFLATION_HEURISTIC
}

/// Spread between the optimistic and conservative scenarios.
pub fn potential_variation(result: &ProjectionResult) -> Option<f64> {
    match (result.low_scenario, result.high_scenario) {
        (Some(low), Some(high)) => Some(high.future_value - low.future_value),
        _ => None,
    }
}

impl ProjectionReport {
    pub fn build(result: &ProjectionResult) -> Self {
        let mut ordered = Vec::with_capacity(3);
        if let Some(low) = result.low_scenario {
            ordered.push((ScenarioKind::Conservative, low));
        }
        ordered.push((ScenarioKind::Base, result.base_scenario));
        if let Some(high) = result.high_scenario {
            ordered.push((ScenarioKind::Optimistic, high));
        }

        let scenarios = ordered
            .into_iter()
            .map(|(kind, scenario)| ScenarioAnalysis {
                kind,
                rate: scenario.rate,
                future_value: scenario.future_value,
                goal_gap: goal_gap(result.goal_amount, &scenario),
                income: retirement_income(scenario.future_value, result.retirement_age),
            })
            .collect();

        Self {
            result: result.clone(),
            scenarios,
            life_expectancy: LIFE_EXPECTANCY,
            adjusted_purchasing_power: adjusted_purchasing_power(result),
            potential_variation: potential_variation(result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CompoundingFrequency, RawParams, project, validate};

    const EPS: f64 = 1e-9;

    fn assert_approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn scenario(future_value: f64) -> ScenarioResult {
        ScenarioResult {
            rate: 0.05,
            future_value,
        }
    }

    fn result_with(band: f64, retirement_age: f64) -> ProjectionResult {
        let raw = RawParams {
            current_age: 30.0,
            retirement_age,
            monthly_contribution: 300.0,
            initial_balance: 5_000.0,
            goal_amount: 200_000.0,
            annual_rate: 0.05,
            rate_variation_band: band,
            compounding: "monthly".to_string(),
            currency: "EUR".to_string(),
        };
        project(&validate(raw).expect("valid params"))
    }

    #[test]
    fn goal_gap_reports_shortfall_and_surplus() {
        assert_eq!(
            goal_gap(1_000.0, &scenario(400.0)),
            GoalGap::Shortfall { amount: 600.0 }
        );
        assert_eq!(
            goal_gap(1_000.0, &scenario(1_250.0)),
            GoalGap::Met { surplus: 250.0 }
        );
    }

    #[test]
    fn goal_gap_of_zero_counts_as_met() {
        assert_eq!(
            goal_gap(1_000.0, &scenario(1_000.0)),
            GoalGap::Met { surplus: 0.0 }
        );
    }

    #[test]
    fn income_spreads_pot_until_life_expectancy() {
        let income = retirement_income(240_000.0, 65).expect("income defined before 85");
        assert_eq!(income.retirement_years, 20);
        assert_approx(income.annual, 12_000.0);
        assert_approx(income.monthly, 1_000.0);
    }

    #[test]
    fn income_undefined_at_or_after_life_expectancy() {
        assert!(retirement_income(1_000_000.0, 85).is_none());
        assert!(retirement_income(1_000_000.0, 90).is_none());
        assert!(retirement_income(1_000_000.0, 84).is_some());
    }

    #[test]
    fn purchasing_power_is_half_of_base() {
        let result = result_with(0.01, 60.0);
        assert_eq!(
            adjusted_purchasing_power(&result),
            result.base_scenario.future_value * 0.5
        );
    }

    #[test]
    fn report_orders_scenarios_conservative_to_optimistic() {
        let result = result_with(0.02, 60.0);
        let report = ProjectionReport::build(&result);

        let kinds: Vec<ScenarioKind> = report.scenarios.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ScenarioKind::Conservative,
                ScenarioKind::Base,
                ScenarioKind::Optimistic
            ]
        );
        let low = result.low_scenario.expect("low");
        let high = result.high_scenario.expect("high");
        assert_approx(
            report.potential_variation.expect("variation with band"),
            high.future_value - low.future_value,
        );
        assert!(report.income_defined());
        assert_eq!(report.life_expectancy, 85);
        assert_eq!(report.result.compounding_frequency, CompoundingFrequency::Monthly);
    }

    #[test]
    fn report_without_band_has_only_base() {
        let report = ProjectionReport::build(&result_with(0.0, 60.0));
        assert_eq!(report.scenarios.len(), 1);
        assert!(report.scenario(ScenarioKind::Base).is_some());
        assert!(report.scenario(ScenarioKind::Optimistic).is_none());
        assert!(report.potential_variation.is_none());
    }

    #[test]
    fn report_marks_income_undefined_for_late_retirement() {
        let report = ProjectionReport::build(&result_with(0.01, 90.0));
        assert!(!report.income_defined());
        assert!(report.scenarios.iter().all(|s| s.income.is_none()));
    }

    #[test]
    fn report_serializes_camel_case() {
        let report = ProjectionReport::build(&result_with(0.01, 60.0));
        let json = serde_json::to_string(&report).expect("report should serialize");
        assert!(json.contains("\"baseScenario\""));
        assert!(json.contains("\"lowScenario\""));
        assert!(json.contains("\"futureValue\""));
        assert!(json.contains("\"goalGap\""));
        assert!(json.contains("\"adjustedPurchasingPower\""));
        assert!(json.contains("\"compoundingFrequency\":\"monthly\""));
    }

    #[test]
    fn hand_built_result_with_inverted_ages_has_zero_years() {
        let mut result = result_with(0.0, 60.0);
        assert_eq!(result.years(), 30);
        result.current_age = 70;
        assert_eq!(result.years(), 0);
    }
}
