use ordered_float::OrderedFloat;

use crate::config::ProgressConfig;
use crate::error::InvalidPeriodError;
use crate::nullness::has_no_actuals;
use crate::period::{resolve_month_keys, Anchor, MonthKey, Period};
use crate::types::{AggregationType, KeyResult, TargetDirection};

/// Achievement in percent for one (target, actual) pair.
///
/// maximize: actual / target × 100, minimize: target / actual × 100.
/// A missing operand or a zero denominator gives 0, except minimize with
/// both values at 0, which is a met target (100).
pub fn achievement(target: Option<f64>, actual: Option<f64>, direction: TargetDirection) -> f64 {
    let (Some(t), Some(a)) = (target, actual) else {
        return 0.0;
    };

    let pct = match direction {
        TargetDirection::Maximize if t == 0.0 => 0.0,
        TargetDirection::Maximize => a / t * 100.0,
        TargetDirection::Minimize if a == 0.0 => {
            if t == 0.0 {
                100.0
            } else {
                0.0
            }
        }
        TargetDirection::Minimize => t / a * 100.0,
    };

    if pct.is_finite() {
        pct
    } else {
        0.0
    }
}

/// Achievement of `kr` over `period`, or `None` when nothing was measured.
pub fn percentage_for_period(kr: &KeyResult, period: &Period, anchor: &Anchor) -> Result<Option<f64>, InvalidPeriodError> {
    percentage_for_period_with(kr, period, anchor, ProgressConfig::shared())
}

pub fn percentage_for_period_with(
    kr: &KeyResult,
    period: &Period,
    anchor: &Anchor,
    config: &ProgressConfig,
) -> Result<Option<f64>, InvalidPeriodError> {
    let keys = resolve_month_keys(period, anchor)?;
    if has_no_actuals(kr, &keys) {
        return Ok(None);
    }

    // Single month: straight pair, aggregation type does not apply.
    if let (Period::Monthly { .. }, [key]) = (period, keys.as_slice()) {
        let target = kr.monthly_targets.get(key);
        let actual = kr.monthly_actual.get(key);
        return Ok(Some(achievement(target, actual, kr.target_direction)));
    }

    let (target, actual) = aggregate(kr, &keys, config);
    log::debug!(
        "kr '{}' {:?} over {period}: target={target:?} actual={actual:?}",
        kr.title,
        kr.aggregation_type
    );
    Ok(Some(achievement(target, actual, kr.target_direction)))
}

/// Folds the months into one (target, actual) pair. `None` means no month
/// contributed to that side.
fn aggregate(kr: &KeyResult, keys: &[MonthKey], config: &ProgressConfig) -> (Option<f64>, Option<f64>) {
    let targets = &kr.monthly_targets;
    let data_months: Vec<(MonthKey, f64)> = keys
        .iter()
        .filter_map(|k| kr.monthly_actual.get(k).map(|a| (*k, a)))
        .collect();

    let all_targets = || keys.iter().filter_map(|k| targets.get(k));
    let data_actuals = || data_months.iter().map(|(_, a)| *a);

    match kr.aggregation_type {
        AggregationType::Sum => (sum(all_targets()), sum(data_actuals())),
        AggregationType::Average => {
            // TODO(product): confirm whether a recorded 0 belongs in the average; flip
            // `average_includes_zero_actuals` once decided.
            let months: Vec<&(MonthKey, f64)> = data_months
                .iter()
                .filter(|(_, a)| config.average_includes_zero_actuals || *a != 0.0)
                .collect();
            let dropped = data_months.len() - months.len();
            if dropped > 0 {
                log::debug!("kr '{}': average ignores {dropped} month(s) with a recorded 0", kr.title);
            }
            (
                mean(months.iter().filter_map(|(k, _)| targets.get(k))),
                mean(months.iter().map(|(_, a)| *a)),
            )
        }
        AggregationType::Max => (max(all_targets()), max(data_actuals())),
        AggregationType::Min => (
            min(all_targets().filter(|v| *v > 0.0)),
            min(data_actuals().filter(|v| *v > 0.0)),
        ),
    }
}

fn sum(values: impl Iterator<Item = f64>) -> Option<f64> {
    values.fold(None, |acc, v| Some(acc.unwrap_or(0.0) + v))
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (total, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 {
        None
    } else {
        Some(total / n as f64)
    }
}

fn max(values: impl Iterator<Item = f64>) -> Option<f64> {
    values.map(OrderedFloat).max().map(|v| v.into_inner())
}

fn min(values: impl Iterator<Item = f64>) -> Option<f64> {
    values.map(OrderedFloat).min().map(|v| v.into_inner())
}
