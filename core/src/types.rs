use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::period::MonthKey;

/// Sparse per-month values keyed by `"YYYY-MM"`.
///
/// Absent keys, JSON `null` and non-finite numbers all read back as `None`
/// ("not measured"); a stored `0` stays `Some(0.0)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthlySeries(BTreeMap<String, Option<f64>>);

impl MonthlySeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &MonthKey) -> Option<f64> {
        self.0
            .get(&key.to_string())
            .copied()
            .flatten()
            .filter(|v| v.is_finite())
    }

    /// Builder-style insert, mostly for tests and fixtures.
    pub fn with(mut self, key: &str, value: Option<f64>) -> Self {
        self.0.insert(key.to_string(), value);
        self
    }
}

impl FromIterator<(MonthKey, Option<f64>)> for MonthlySeries {
    fn from_iter<I: IntoIterator<Item = (MonthKey, Option<f64>)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetDirection {
    /// Higher is better (revenue, NPS).
    #[default]
    Maximize,
    /// Lower is better (cost, defects).
    Minimize,
}

/// How several months fold into one (target, actual) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationType {
    #[default]
    Sum,
    Average,
    Max,
    Min,
}

/// Reporting cadence of a key result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    #[default]
    Monthly,
    Bimonthly,
    Quarterly,
    Semesterly,
    Yearly,
}

/// Key result as stored by the application. Read-only here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyResult {
    pub id: Option<String>,
    pub title: String,
    pub monthly_targets: MonthlySeries,
    pub monthly_actual: MonthlySeries,
    pub target_direction: TargetDirection,
    pub aggregation_type: AggregationType,
    pub frequency: Frequency,
    /// Relative importance; `None` counts as 1.
    pub weight: Option<f64>,
    pub start_month: Option<String>,
    pub end_month: Option<String>,
}

impl KeyResult {
    pub fn effective_weight(&self) -> f64 {
        self.weight.unwrap_or(1.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Objective {
    pub id: Option<String>,
    pub title: String,
    pub key_results: Vec<KeyResult>,
}
