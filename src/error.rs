//! Error types shared by the loader and the aggregators.

use thiserror::Error;

/// Failures that abort an analysis run.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("no trip data found for city '{city}'")]
    NotFound { city: String },

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: invalid '{column}' value '{value}'")]
    Malformed {
        row: usize,
        column: &'static str,
        value: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid source URL '{0}'")]
    InvalidUrl(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl LoadError {
    pub fn not_found(city: &str) -> Self {
        LoadError::NotFound {
            city: city.to_string(),
        }
    }

    /// `true` for the parse family: missing or malformed required data.
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            LoadError::MissingColumn(_) | LoadError::Malformed { .. } | LoadError::Csv(_)
        )
    }
}

/// Non-fatal conditions reported per statistics section.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    #[error("the selection is empty")]
    EmptySelection,

    #[error("no {column} data available for the selection")]
    NoDataAvailable { column: &'static str },
}

/// A month or weekday argument that is not part of the fixed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct SelectorError {
    kind: &'static str,
    value: String,
}

impl SelectorError {
    pub(crate) fn month(value: &str) -> Self {
        Self {
            kind: "month",
            value: value.to_string(),
        }
    }

    pub(crate) fn weekday(value: &str) -> Self {
        Self {
            kind: "weekday",
            value: value.to_string(),
        }
    }
}
