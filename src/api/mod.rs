use std::net::IpAddr;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{
    CurrencyTable, ProjectionReport, RawParams, ValidationError, project, validate,
};
use crate::report::{HtmlRenderer, Renderer, TextRenderer};

mod server;

pub use server::{AppState, router, run_http_server};

#[derive(Parser, Debug)]
#[command(
    name = "nestegg",
    about = "Retirement savings projection with compounding and rate sensitivity"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    #[arg(
        long,
        global = true,
        env = "NESTEGG_LOG",
        default_value = "info",
        help = "Log filter used when RUST_LOG is unset"
    )]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Project savings at retirement and print a report
    Project(ProjectArgs),
    /// Serve the web UI and JSON API
    Serve(ServeArgs),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Html,
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub current_age: f64,
    #[arg(long, allow_negative_numbers = true)]
    pub retirement_age: f64,
    #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
    pub monthly_contribution: f64,
    #[arg(long, allow_negative_numbers = true, default_value_t = 0.0)]
    pub initial_balance: f64,
    #[arg(long, allow_negative_numbers = true, help = "Savings goal at retirement")]
    pub goal: f64,
    #[arg(
        long,
        allow_negative_numbers = true,
        help = "Expected annual return in percent, e.g. 7"
    )]
    pub rate: f64,
    #[arg(
        long,
        allow_negative_numbers = true,
        default_value_t = 0.0,
        help = "Rate sensitivity band in percent; 0 disables the low/high scenarios"
    )]
    pub variation: f64,
    #[arg(
        long,
        default_value = "monthly",
        help = "Compounding frequency: daily, monthly, quarterly or yearly"
    )]
    pub compounding: String,
    #[arg(long, default_value = "USD")]
    pub currency: String,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, env = "NESTEGG_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,
    #[arg(long, short, env = "NESTEGG_PORT", default_value_t = 8080)]
    pub port: u16,
}

/// Anything that can hand the engine a raw parameter set.
pub trait ParamSource {
    fn raw_params(self) -> RawParams;
}

impl ParamSource for RawParams {
    fn raw_params(self) -> RawParams {
        self
    }
}

impl ParamSource for ProjectArgs {
    fn raw_params(self) -> RawParams {
        RawParams {
            current_age: self.current_age,
            retirement_age: self.retirement_age,
            monthly_contribution: self.monthly_contribution,
            initial_balance: self.initial_balance,
            goal_amount: self.goal,
            annual_rate: self.rate / 100.0,
            rate_variation_band: self.variation / 100.0,
            compounding: self.compounding,
            currency: self.currency,
        }
    }
}

/// JSON body or query string of `/api/project`; rates are percentages.
/// A request without any field answers with the built-in example. Otherwise a
/// missing number fails validation, except the variation band, which means no
/// band.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectPayload {
    #[serde(alias = "currAge", alias = "current_age")]
    pub current_age: Option<f64>,
    #[serde(alias = "retireAge", alias = "retirement_age")]
    pub retirement_age: Option<f64>,
    #[serde(alias = "investPM", alias = "monthly_contribution")]
    pub monthly_contribution: Option<f64>,
    #[serde(alias = "initialInvestment", alias = "initial_balance")]
    pub initial_balance: Option<f64>,
    #[serde(alias = "retireGoal", alias = "goal_amount")]
    pub goal_amount: Option<f64>,
    #[serde(alias = "interestRate", alias = "annual_rate")]
    pub annual_rate: Option<f64>,
    #[serde(alias = "rate_variation")]
    pub rate_variation: Option<f64>,
    #[serde(alias = "compoundFrequency", alias = "compounding_frequency")]
    pub compounding_frequency: Option<String>,
    pub currency: Option<String>,
}

impl ProjectPayload {
    fn is_empty(&self) -> bool {
        [
            self.current_age,
            self.retirement_age,
            self.monthly_contribution,
            self.initial_balance,
            self.goal_amount,
            self.annual_rate,
            self.rate_variation,
        ]
        .iter()
        .all(Option::is_none)
            && self.compounding_frequency.is_none()
            && self.currency.is_none()
    }
}

impl ParamSource for ProjectPayload {
    fn raw_params(self) -> RawParams {
        if self.is_empty() {
            return default_params();
        }
        let required = |value: Option<f64>| value.unwrap_or(f64::NAN);
        RawParams {
            current_age: required(self.current_age),
            retirement_age: required(self.retirement_age),
            monthly_contribution: required(self.monthly_contribution),
            initial_balance: required(self.initial_balance),
            goal_amount: required(self.goal_amount),
            annual_rate: required(self.annual_rate) / 100.0,
            rate_variation_band: self.rate_variation.map_or(0.0, |pct| pct / 100.0),
            compounding: self
                .compounding_frequency
                .unwrap_or_else(|| "monthly".to_string()),
            currency: self.currency.unwrap_or_else(|| "USD".to_string()),
        }
    }
}

/// Built-in example: age 25 to 65, 500 a month on top of 1000, 7% +/- 1%.
pub fn default_params() -> RawParams {
    RawParams {
        current_age: 25.0,
        retirement_age: 65.0,
        monthly_contribution: 500.0,
        initial_balance: 1_000.0,
        goal_amount: 500_000.0,
        annual_rate: 0.07,
        rate_variation_band: 0.01,
        compounding: "monthly".to_string(),
        currency: "USD".to_string(),
    }
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    pub symbol: String,
    pub report: ProjectionReport,
    pub html: String,
}

/// Validates, projects and analyzes. Shared by the CLI and the HTTP API.
pub fn run_projection(source: impl ParamSource) -> Result<ProjectionReport, ValidationError> {
    let request = validate(source.raw_params())?;
    let result = project(&request);
    tracing::debug!(
        current_age = request.current_age(),
        retirement_age = request.retirement_age(),
        compounding = request.compounding_frequency().name(),
        base = result.base_scenario.future_value,
        "projection computed"
    );
    Ok(ProjectionReport::build(&result))
}

pub fn run_project_command(
    args: ProjectArgs,
    currencies: &CurrencyTable,
) -> Result<String, CommandError> {
    let format = args.format;
    let report = run_projection(args)?;
    let symbol = currencies.symbol(&report.result.currency_label);

    let renderer: &dyn Renderer = match format {
        OutputFormat::Text => &TextRenderer,
        OutputFormat::Html => &HtmlRenderer,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            return Ok(json);
        }
    };
    Ok(renderer.render(&report, &symbol))
}
