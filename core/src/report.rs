use serde::{Deserialize, Serialize};

use crate::config::ProgressConfig;
use crate::error::InvalidPeriodError;
use crate::metrics::Metrics;
use crate::percentage::percentage_for_period_with;
use crate::period::{resolve_month_keys, Anchor, Period};
use crate::status::{classify, ProgressStatus};
use crate::types::Objective;
use crate::validity::is_valid_for_period;
use crate::weighted::{combine_weighted, usable_weight};

/// One KR row of an objective card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyResultReport {
    pub id: Option<String>,
    pub title: String,
    /// `None` when the KR has no actuals in the period.
    pub percentage: Option<f64>,
    pub status: ProgressStatus,
    pub no_data: bool,
    pub weight: f64,
    /// False when the row is left out of `progress`: no data, or a weight
    /// that is zero, negative or non-finite.
    pub counted: bool,
}

/// Objective roll-up for one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveReport {
    pub objective_id: Option<String>,
    pub title: String,
    pub period: Period,
    pub period_label: String,
    /// Months covered, as `"YYYY-MM"`.
    pub months: Vec<String>,
    /// Weighted progress of the included KRs; `None` if none has data.
    pub progress: Option<f64>,
    pub status: ProgressStatus,
    pub key_results: Vec<KeyResultReport>,
    /// KRs whose validity window does not reach the period.
    pub excluded_count: usize,
}

pub fn build_objective_report(
    objective: &Objective,
    period: &Period,
    anchor: &Anchor,
    config: &ProgressConfig,
    metrics: Option<&Metrics>,
) -> Result<ObjectiveReport, InvalidPeriodError> {
    let months = resolve_month_keys(period, anchor)?;

    let mut scored = Vec::with_capacity(objective.key_results.len());
    let mut excluded_count = 0usize;

    for kr in &objective.key_results {
        if !is_valid_for_period(kr, period, anchor)? {
            excluded_count += 1;
            if let Some(m) = metrics {
                m.kr_out_of_window.inc();
            }
            continue;
        }

        let pct = percentage_for_period_with(kr, period, anchor, config)?;
        if let Some(m) = metrics {
            m.kr_evaluated.inc();
            if pct.is_none() {
                m.kr_no_data.inc();
            }
        }
        scored.push((kr, pct));
    }

    let progress = combine_weighted(scored.iter().copied());

    let key_results = scored
        .iter()
        .map(|(kr, pct)| {
            let weight = kr.effective_weight();
            KeyResultReport {
                id: kr.id.clone(),
                title: kr.title.clone(),
                percentage: *pct,
                status: classify(*pct, &config.status),
                no_data: pct.is_none(),
                weight,
                counted: pct.is_some() && usable_weight(weight),
            }
        })
        .collect();

    if let Some(m) = metrics {
        m.objective_reports.inc();
    }
    log::debug!(
        "objective '{}' {period}: progress={progress:?}, {} kr(s), {excluded_count} outside window",
        objective.title,
        scored.len()
    );

    Ok(ObjectiveReport {
        objective_id: objective.id.clone(),
        title: objective.title.clone(),
        period: *period,
        period_label: period.to_string(),
        months: months.iter().map(|k| k.to_string()).collect(),
        progress,
        status: classify(progress, &config.status),
        key_results,
        excluded_count,
    })
}
