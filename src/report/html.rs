use super::{Renderer, format_grouped, format_percent};
use crate::core::{GoalGap, ProjectionReport, ScenarioKind};

/// Markup fragment for the embedded web UI. Amounts use thousands separators.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn render(&self, report: &ProjectionReport, symbol: &str) -> String {
        let symbol = escape(symbol);
        let money = |value: f64| format!("{symbol}{}", format_grouped(value));
        let result = &report.result;
        let mut out = String::new();

        out.push_str("<section id=\"projectionResults\">\n<h2>Projection</h2>\n");
        out.push_str(&result_item(
            "Compounding Frequency",
            "neutral",
            &escape(&result.compounding_frequency.label()),
        ));
        if result.has_band() {
            out.push_str("<div class=\"scenario-grid\">\n");
            for scenario in &report.scenarios {
                out.push_str(&format!(
                    "<div class=\"scenario-card\"><div class=\"scenario-title\">{} ({})</div><div class=\"scenario-amount\">{}</div></div>\n",
                    scenario.kind.title(),
                    format_percent(scenario.rate),
                    money(scenario.future_value)
                ));
            }
            out.push_str("</div>\n");
            if let Some(variation) = report.potential_variation {
                out.push_str(&result_item("Potential Variation", "neutral", &money(variation)));
            }
        } else {
            out.push_str(&result_item(
                &format!("Total at {}", format_percent(result.base_scenario.rate)),
                "positive",
                &money(result.base_scenario.future_value),
            ));
        }
        out.push_str("</section>\n");

        out.push_str("<section id=\"goalResults\">\n<h2>Goal Analysis</h2>\n");
        out.push_str(&result_item(
            "Retirement Goal",
            "neutral",
            &money(result.goal_amount),
        ));
        for scenario in &report.scenarios {
            let label = if result.has_band() {
                format!("{} Scenario", scenario.kind.title())
            } else {
                "Goal Status".to_string()
            };
            let (class, value) = match scenario.goal_gap {
                GoalGap::Shortfall { amount } => ("negative", format!("Needed: {}", money(amount))),
                GoalGap::Met { surplus } => ("positive", format!("Surplus: {}", money(surplus))),
            };
            out.push_str(&result_item(&label, class, &value));
        }
        out.push_str("</section>\n");

        out.push_str("<section id=\"incomeResults\">\n<h2>Retirement Income</h2>\n");
        let low = report.scenario(ScenarioKind::Conservative).and_then(|s| s.income);
        let high = report.scenario(ScenarioKind::Optimistic).and_then(|s| s.income);
        let base = report.scenario(ScenarioKind::Base).and_then(|s| s.income);
        match (low, base, high) {
            (Some(low), _, Some(high)) => {
                out.push_str(&result_item(
                    "Annual Income Range",
                    "neutral",
                    &format!("{} - {}", money(low.annual), money(high.annual)),
                ));
                out.push_str(&result_item(
                    "Monthly Income Range",
                    "neutral",
                    &format!("{} - {}", money(low.monthly), money(high.monthly)),
                ));
            }
            (_, Some(base), _) => {
                out.push_str(&result_item("Annual Income", "positive", &money(base.annual)));
                out.push_str(&result_item("Monthly Income", "positive", &money(base.monthly)));
            }
            _ => out.push_str("<p>Life expectancy is not greater than retirement age.</p>\n"),
        }
        out.push_str("</section>\n");

        out.push_str(&format!(
            "<p id=\"inflationInfo\">Your {} in {} years might have the purchasing power of roughly {} in today's money (assuming 2-3% annual inflation).</p>\n",
            money(result.base_scenario.future_value),
            result.years(),
            money(report.adjusted_purchasing_power)
        ));
        out
    }
}

fn result_item(label: &str, class: &str, value: &str) -> String {
    format!(
        "<div class=\"result-item\"><span class=\"result-label\">{}</span><span class=\"result-value {class}\">{value}</span></div>\n",
        escape(label)
    )
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RawParams, project, validate};

    fn report_for(band: f64, retirement_age: f64) -> ProjectionReport {
        let raw = RawParams {
            current_age: 30.0,
            retirement_age,
            monthly_contribution: 300.0,
            initial_balance: 5_000.0,
            goal_amount: 200_000.0,
            annual_rate: 0.05,
            rate_variation_band: band,
            compounding: "quarterly".to_string(),
            currency: "EUR".to_string(),
        };
        ProjectionReport::build(&project(&validate(raw).expect("valid params")))
    }

    #[test]
    fn banded_markup_has_scenario_cards() {
        let html = HtmlRenderer.render(&report_for(0.02, 60.0), "€");

        assert_eq!(html.matches("class=\"scenario-card\"").count(), 3);
        assert!(html.contains("Conservative (3.0%)"));
        assert!(html.contains("Optimistic (7.0%)"));
        assert!(html.contains("Quarterly (4x/year)"));
        assert!(html.contains("Retirement Goal</span><span class=\"result-value neutral\">€200,000.00"));
        assert!(html.contains("Base Scenario"));
        assert!(html.contains("Annual Income Range"));
        assert!(html.contains("id=\"inflationInfo\""));
    }

    #[test]
    fn single_scenario_markup_uses_goal_status() {
        let html = HtmlRenderer.render(&report_for(0.0, 60.0), "€");
        assert!(!html.contains("scenario-card"));
        assert!(html.contains("Total at 5.0%"));
        assert_eq!(html.matches("Goal Status").count(), 1);
        assert!(html.contains("Monthly Income</span>"));
    }

    #[test]
    fn undefined_income_is_reported() {
        let html = HtmlRenderer.render(&report_for(0.0, 85.0), "€");
        assert!(html.contains("<p>Life expectancy is not greater than retirement age.</p>"));
    }

    #[test]
    fn symbol_is_escaped() {
        let html = HtmlRenderer.render(&report_for(0.0, 60.0), "<b>X</b> ");
        assert!(html.contains("&lt;b&gt;X&lt;/b&gt; "));
        assert!(!html.contains("<b>X</b>"));
    }
}
