use super::{Renderer, format_amount, format_percent};
use crate::core::{GoalGap, ProjectionReport, ScenarioKind};

/// Console report with plain two-decimal amounts.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, report: &ProjectionReport, symbol: &str) -> String {
        let money = |value: f64| format!("{symbol}{}", format_amount(value));
        let result = &report.result;
        let mut lines = Vec::new();

        lines.push("=== RETIREMENT CALCULATOR RESULTS ===".to_string());
        lines.push(format!(
            "Compounding: {}",
            result.compounding_frequency.label()
        ));
        match (result.low_scenario, result.high_scenario) {
            (Some(low), Some(high)) => {
                lines.push(format!(
                    "Interest Rate Range: {} - {}",
                    format_percent(low.rate),
                    format_percent(high.rate)
                ));
                lines.push(format!(
                    "Base Rate ({}): {}",
                    format_percent(result.base_scenario.rate),
                    money(result.base_scenario.future_value)
                ));
                lines.push(format!(
                    "Conservative ({}): {}",
                    format_percent(low.rate),
                    money(low.future_value)
                ));
                lines.push(format!(
                    "Optimistic ({}): {}",
                    format_percent(high.rate),
                    money(high.future_value)
                ));
                if let Some(variation) = report.potential_variation {
                    lines.push(format!("Potential Variation: {}", money(variation)));
                }
            }
            _ => lines.push(format!(
                "Total saved at {}: {}",
                format_percent(result.base_scenario.rate),
                money(result.base_scenario.future_value)
            )),
        }

        lines.push(String::new());
        lines.push("=== GOAL ANALYSIS ===".to_string());
        lines.push(format!("Retirement Goal: {}", money(result.goal_amount)));
        if result.has_band() {
            for scenario in &report.scenarios {
                let status = match scenario.goal_gap {
                    GoalGap::Shortfall { amount } => format!("Short by {}", money(amount)),
                    GoalGap::Met { surplus } => format!("Exceeds goal by {}", money(surplus)),
                };
                lines.push(format!(
                    "{} ({}): {status}",
                    scenario.kind.title(),
                    format_percent(scenario.rate)
                ));
            }
        } else if let Some(base) = report.scenario(ScenarioKind::Base) {
            lines.push(match base.goal_gap {
                GoalGap::Shortfall { amount } => {
                    format!("You still need {} to reach your goal", money(amount))
                }
                GoalGap::Met { surplus } => {
                    format!("You've met your goal! Surplus: {}", money(surplus))
                }
            });
        }

        lines.push(String::new());
        lines.push("=== RETIREMENT INCOME ANALYSIS ===".to_string());
        let low = report.scenario(ScenarioKind::Conservative).and_then(|s| s.income);
        let high = report.scenario(ScenarioKind::Optimistic).and_then(|s| s.income);
        let base = report.scenario(ScenarioKind::Base).and_then(|s| s.income);
        match (low, base, high) {
            (Some(low), _, Some(high)) => {
                lines.push(format!(
                    "Annual Income Range: {} - {}",
                    money(low.annual),
                    money(high.annual)
                ));
                lines.push(format!(
                    "Monthly Income Range: {} - {}",
                    money(low.monthly),
                    money(high.monthly)
                ));
            }
            (_, Some(base), _) => {
                lines.push(format!("Annual Income: {}", money(base.annual)));
                lines.push(format!("Monthly Income: {}", money(base.monthly)));
            }
            _ => lines.push("Life expectancy is not greater than retirement age.".to_string()),
        }

        lines.push(String::new());
        lines.push(format!(
            "Your {} in {} years might have the purchasing power of roughly {} in today's money (assuming 2-3% annual inflation).",
            money(result.base_scenario.future_value),
            result.years(),
            money(report.adjusted_purchasing_power)
        ));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RawParams, project, validate};

    fn report_for(band: f64, retirement_age: f64, goal: f64) -> ProjectionReport {
        let raw = RawParams {
            current_age: 20.0,
            retirement_age,
            monthly_contribution: 50.0,
            initial_balance: 100.0,
            goal_amount: goal,
            annual_rate: 0.03,
            rate_variation_band: band,
            compounding: "monthly".to_string(),
            currency: "GBP".to_string(),
        };
        ProjectionReport::build(&project(&validate(raw).expect("valid params")))
    }

    #[test]
    fn single_scenario_report_sections() {
        let report = report_for(0.0, 60.0, 40_000.0);
        let text = TextRenderer.render(&report, "£");

        assert!(text.starts_with("=== RETIREMENT CALCULATOR RESULTS ===\n"));
        assert!(text.contains("Compounding: Monthly (12x/year)"));
        assert!(text.contains(&format!(
            "Total saved at 3.0%: £{:.2}",
            report.result.base_scenario.future_value
        )));
        assert!(text.contains("Retirement Goal: £40000.00"));
        assert!(text.contains("You've met your goal! Surplus: £"));
        assert!(text.contains("Annual Income: £"));
        assert!(text.contains("Monthly Income: £"));
        assert!(!text.contains("Conservative"));
        assert!(text.contains("in 40 years might have the purchasing power of roughly"));
    }

    #[test]
    fn banded_report_lists_three_scenarios_and_ranges() {
        let report = report_for(0.005, 60.0, 1_000_000.0);
        let text = TextRenderer.render(&report, "$");

        assert!(text.contains("Interest Rate Range: 2.5% - 3.5%"));
        assert!(text.contains("Base Rate (3.0%): $"));
        assert!(text.contains("Conservative (2.5%): $"));
        assert!(text.contains("Optimistic (3.5%): $"));
        assert!(text.contains("Potential Variation: $"));
        assert!(text.contains("Conservative (2.5%): Short by $"));
        assert!(text.contains("Optimistic (3.5%): Short by $"));
        assert!(text.contains("Annual Income Range: $"));
        assert!(text.contains("Monthly Income Range: $"));
    }

    #[test]
    fn late_retirement_reports_undefined_income() {
        let report = report_for(0.0, 90.0, 50_000.0);
        let text = TextRenderer.render(&report, "$");
        assert!(text.contains("Life expectancy is not greater than retirement age."));
        assert!(!text.contains("Annual Income"));
    }
}
