use thiserror::Error;

/// Malformed period or anchor (quarter 5, month 13, year 0 ...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid period: {field}={value} ({reason})")]
pub struct InvalidPeriodError {
    pub field: &'static str,
    pub value: i64,
    pub reason: &'static str,
}

impl InvalidPeriodError {
    pub(crate) fn out_of_range(field: &'static str, value: i64, reason: &'static str) -> Self {
        Self { field, value, reason }
    }
}

/// A month key that is not a zero-padded `"YYYY-MM"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid month key '{0}', expected YYYY-MM")]
pub struct InvalidMonthKey(pub String);

#[derive(Debug, Error)]
pub enum ProgressError {
    #[error(transparent)]
    InvalidPeriod(#[from] InvalidPeriodError),

    #[error(transparent)]
    InvalidMonthKey(#[from] InvalidMonthKey),

    #[error("unrecognised period selector '{0}'")]
    UnknownPeriodSelector(String),

    /// JSON input that did not match the expected shape; `path` points at the offending field.
    #[error("could not parse {what} at '{path}': {message}")]
    Json {
        what: &'static str,
        path: String,
        message: String,
    },

    #[error("could not serialise report: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ProgressError {
    pub(crate) fn json(what: &'static str, err: serde_path_to_error::Error<serde_json::Error>) -> Self {
        ProgressError::Json {
            what,
            path: err.path().to_string(),
            message: err.inner().to_string(),
        }
    }
}
