use serde::Serialize;

/// Age used to spread the retirement pot into an income.
pub const LIFE_EXPECTANCY: u32 = 85;

/// Illustrative purchasing-power multiplier. Not an inflation model.
pub const INFLATION_HEURISTIC: f64 = 0.5;

pub const MIN_CURRENT_AGE: u32 = 12;
pub const MAX_RETIREMENT_AGE: u32 = 116;
pub const MAX_ANNUAL_RATE: f64 = 0.20;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompoundingFrequency {
    Daily,
    Monthly,
    Quarterly,
    Yearly,
}

impl CompoundingFrequency {
    pub const ALL: [CompoundingFrequency; 4] = [
        CompoundingFrequency::Daily,
        CompoundingFrequency::Monthly,
        CompoundingFrequency::Quarterly,
        CompoundingFrequency::Yearly,
    ];

    pub fn periods_per_year(self) -> u32 {
        match self {
            CompoundingFrequency::Daily => 365,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Yearly => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CompoundingFrequency::Daily => "daily",
            CompoundingFrequency::Monthly => "monthly",
            CompoundingFrequency::Quarterly => "quarterly",
            CompoundingFrequency::Yearly => "yearly",
        }
    }

    /// Display label such as `Quarterly (4x/year)`.
    pub fn label(self) -> String {
        let title = match self {
            CompoundingFrequency::Daily => "Daily",
            CompoundingFrequency::Monthly => "Monthly",
            CompoundingFrequency::Quarterly => "Quarterly",
            CompoundingFrequency::Yearly => "Yearly",
        };
        format!("{title} ({}x/year)", self.periods_per_year())
    }

    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|freq| freq.name().eq_ignore_ascii_case(value))
    }
}

/// Unvalidated parameters as collected from a form, the CLI or a JSON body.
///
/// Rates are decimal fractions here; adapters that accept percentages convert
/// before building this.
#[derive(Debug, Clone, PartialEq)]
pub struct RawParams {
    pub current_age: f64,
    pub retirement_age: f64,
    pub monthly_contribution: f64,
    pub initial_balance: f64,
    pub goal_amount: f64,
    pub annual_rate: f64,
    pub rate_variation_band: f64,
    pub compounding: String,
    pub currency: String,
}

/// A parameter set that passed validation. Only `validate` builds one.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionRequest {
    pub(crate) current_age: u32,
    pub(crate) retirement_age: u32,
    pub(crate) monthly_contribution: f64,
    pub(crate) initial_balance: f64,
    pub(crate) goal_amount: f64,
    pub(crate) annual_rate: f64,
    pub(crate) rate_variation_band: f64,
    pub(crate) compounding_frequency: CompoundingFrequency,
    pub(crate) currency_label: String,
}

impl ProjectionRequest {
    pub fn current_age(&self) -> u32 {
        self.current_age
    }

    pub fn retirement_age(&self) -> u32 {
        self.retirement_age
    }

    pub fn monthly_contribution(&self) -> f64 {
        self.monthly_contribution
    }

    pub fn initial_balance(&self) -> f64 {
        self.initial_balance
    }

    pub fn goal_amount(&self) -> f64 {
        self.goal_amount
    }

    pub fn annual_rate(&self) -> f64 {
        self.annual_rate
    }

    pub fn rate_variation_band(&self) -> f64 {
        self.rate_variation_band
    }

    pub fn compounding_frequency(&self) -> CompoundingFrequency {
        self.compounding_frequency
    }

    pub fn currency_label(&self) -> &str {
        &self.currency_label
    }

    pub fn years(&self) -> u32 {
        self.retirement_age.saturating_sub(self.current_age)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub rate: f64,
    pub future_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionResult {
    pub base_scenario: ScenarioResult,
    pub low_scenario: Option<ScenarioResult>,
    pub high_scenario: Option<ScenarioResult>,
    pub annual_rate: f64,
    pub rate_variation_band: f64,
    pub goal_amount: f64,
    pub current_age: u32,
    pub retirement_age: u32,
    pub compounding_frequency: CompoundingFrequency,
    pub currency_label: String,
}

impl ProjectionResult {
    pub fn years(&self) -> u32 {
        self.retirement_age.saturating_sub(self.current_age)
    }

    pub fn has_band(&self) -> bool {
        self.low_scenario.is_some() && self.high_scenario.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum GoalGap {
    Shortfall { amount: f64 },
    Met { surplus: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetirementIncome {
    pub retirement_years: u32,
    pub annual: f64,
    pub monthly: f64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioKind {
    Conservative,
    Base,
    Optimistic,
}

impl ScenarioKind {
    pub fn title(self) -> &'static str {
        match self {
            ScenarioKind::Conservative => "Conservative",
            ScenarioKind::Base => "Base",
            ScenarioKind::Optimistic => "Optimistic",
        }
    }
}

/// One scenario with its derived goal and income views.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioAnalysis {
    pub kind: ScenarioKind,
    pub rate: f64,
    pub future_value: f64,
    pub goal_gap: GoalGap,
    /// `None` when retirement starts at or after life expectancy.
    pub income: Option<RetirementIncome>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionReport {
    pub result: ProjectionResult,
    /// Conservative, base, optimistic when a band is set; base only otherwise.
    pub scenarios: Vec<ScenarioAnalysis>,
    pub life_expectancy: u32,
    pub adjusted_purchasing_power: f64,
    pub potential_variation: Option<f64>,
}

impl ProjectionReport {
    pub fn scenario(&self, kind: ScenarioKind) -> Option<&ScenarioAnalysis> {
        self.scenarios.iter().find(|s| s.kind == kind)
    }

    pub fn income_defined(&self) -> bool {
        self.scenarios.iter().all(|s| s.income.is_some())
    }
}
