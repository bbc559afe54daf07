//! Presentation of a [`ProjectionReport`] as plain text or HTML markup.
//!
//! Renderers take the currency symbol separately; the engine never sees it.

mod html;
mod text;

pub use html::HtmlRenderer;
pub use text::TextRenderer;

use crate::core::ProjectionReport;

pub trait Renderer {
    fn render(&self, report: &ProjectionReport, symbol: &str) -> String;
}

/// Two fixed decimals, no grouping: `1234.5` -> `1234.50`.
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

/// Two fixed decimals with comma thousands separators: `1234.5` -> `1,234.50`.
pub fn format_grouped(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac}")
}

/// Decimal fraction as a percentage with one decimal: `0.065` -> `6.5%`.
pub fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}
