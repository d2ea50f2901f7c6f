use std::num::ParseFloatError;

use thiserror::Error;

/// Failures of the distance engine. Anything that would otherwise leak a NaN or an
/// infinity into a [`DistanceResult`](crate::distances::DistanceResult) ends up here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CosmoError {
    #[error("Invalid cosmological parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Redshift must be finite and greater than -1, got {0}")]
    InvalidRedshift(f64),

    #[error("Non-physical expansion at scale factor a = {scale_factor}: adot^2 = {adot_squared}")]
    NonPhysicalExpansion { scale_factor: f64, adot_squared: f64 },

    #[error("Non-finite value for {quantity}: {value}")]
    NonFinite { quantity: &'static str, value: f64 },
}

pub type CosmoResult<T> = Result<T, CosmoError>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Line {line}: expected `key = value`, got {content:?}")]
    MissingSeparator { line: usize, content: String },

    #[error("Line {line}: could not parse value for {key}: {source}")]
    InvalidValue {
        line: usize,
        key: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("Unable to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parameter(#[from] CosmoError),
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Unable to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unable to write table row: {0}")]
    Csv(#[from] csv::Error),
}
