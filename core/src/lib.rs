//! Key-result progress for OKR views: period resolution, per-KR achievement
//! percentages, weighted objective roll-ups and validity-window filtering.
//!
//! Everything here is a pure function of its inputs. The "current month" is
//! always passed in as an [`Anchor`].

pub mod cli;
pub mod config;
pub mod error;
pub mod metrics;
pub mod nullness;
pub mod percentage;
pub mod period;
pub mod report;
pub mod status;
pub mod storage;
pub mod types;
pub mod validity;
pub mod weighted;

use serde::de::DeserializeOwned;

pub use config::ProgressConfig;
pub use error::{InvalidMonthKey, InvalidPeriodError, ProgressError};
pub use nullness::is_null_for_period;
pub use percentage::{achievement, percentage_for_period, percentage_for_period_with};
pub use period::{resolve_month_keys, Anchor, MonthKey, Period};
pub use report::{build_objective_report, KeyResultReport, ObjectiveReport};
pub use status::{classify, ProgressStatus, StatusThresholds};
pub use storage::{load_config, save_config};
pub use types::{AggregationType, Frequency, KeyResult, MonthlySeries, Objective, TargetDirection};
pub use validity::{filter_valid, is_valid_for_period};
pub use weighted::{weighted_progress, weighted_progress_with};

/// JSON in, JSON out: objective report for one period.
///
/// `period_json` is either a tagged object (`{"type":"quarterly","quarter":2,"year":2026}`)
/// or a selector string (`"2026-Q2"`). `anchor` is `"YYYY-MM"`; `None` uses
/// the current month. `config_json` falls back to the shared default.
pub fn objective_report_json(
    objective_json: &str,
    period_json: &str,
    anchor: Option<&str>,
    config_json: Option<&str>,
) -> Result<String, ProgressError> {
    let objective: Objective = parse_json("objective", objective_json)?;
    let period = parse_period(period_json)?;
    let anchor = parse_anchor(anchor)?;
    let config: ProgressConfig = match config_json {
        Some(raw) => parse_json("config", raw)?,
        None => ProgressConfig::shared().clone(),
    };

    let report = build_objective_report(&objective, &period, &anchor, &config, None)?;
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Percentage of a single KR record; `Ok(None)` means no data for the period.
pub fn key_result_percentage_json(
    key_result_json: &str,
    period_json: &str,
    anchor: Option<&str>,
) -> Result<Option<f64>, ProgressError> {
    let kr: KeyResult = parse_json("key result", key_result_json)?;
    let period = parse_period(period_json)?;
    let anchor = parse_anchor(anchor)?;
    Ok(percentage_for_period(&kr, &period, &anchor)?)
}

fn parse_json<T: DeserializeOwned>(what: &'static str, raw: &str) -> Result<T, ProgressError> {
    let de = &mut serde_json::Deserializer::from_str(raw);
    serde_path_to_error::deserialize(de).map_err(|e| ProgressError::json(what, e))
}

fn parse_period(raw: &str) -> Result<Period, ProgressError> {
    let trimmed = raw.trim();
    let period = if trimmed.starts_with('{') {
        parse_json::<Period>("period", trimmed)?
    } else if trimmed.starts_with('"') {
        parse_json::<String>("period", trimmed)?.parse::<Period>()?
    } else {
        trimmed.parse::<Period>()?
    };
    period.validate()?;
    Ok(period)
}

fn parse_anchor(raw: Option<&str>) -> Result<Anchor, ProgressError> {
    match raw {
        Some(s) => Ok(s.parse::<Anchor>()?),
        None => Ok(Anchor::now()),
    }
}
