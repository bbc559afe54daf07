use thiserror::Error;

/// Reason a parameter set was rejected. The first failing check wins.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("inputs must be non-negative numbers")]
    NotNonNegative,
    #[error("retirement age must exceed current age")]
    AgeOrder,
    #[error("age out of supported range")]
    AgeOutOfRange,
    #[error("interest rate too high")]
    RateTooHigh,
    #[error("rate variation band invalid")]
    InvalidVariationBand,
    #[error("unsupported compounding frequency")]
    UnsupportedFrequency,
}
