use crate::config::ProgressConfig;
use crate::error::InvalidPeriodError;
use crate::percentage::percentage_for_period_with;
use crate::period::{Anchor, Period};
use crate::types::KeyResult;

/// Weighted objective progress over `krs`.
///
/// KRs without data for the period are left out of both the weighted sum and
/// the weight total; when none is left the result is `None`, not 0.
pub fn weighted_progress(krs: &[KeyResult], period: &Period, anchor: &Anchor) -> Result<Option<f64>, InvalidPeriodError> {
    weighted_progress_with(krs, period, anchor, ProgressConfig::shared())
}

pub fn weighted_progress_with(
    krs: &[KeyResult],
    period: &Period,
    anchor: &Anchor,
    config: &ProgressConfig,
) -> Result<Option<f64>, InvalidPeriodError> {
    period.validate()?;
    if krs.is_empty() {
        return Ok(None);
    }

    let mut scored = Vec::with_capacity(krs.len());
    for kr in krs {
        let pct = percentage_for_period_with(kr, period, anchor, config)?;
        scored.push((kr, pct));
    }
    Ok(combine_weighted(scored))
}

/// Σ(pct·w) / Σw over the pairs that have a percentage and a usable weight.
///
/// Weights default to 1. A weight that is zero, negative or non-finite
/// drops the KR.
pub fn combine_weighted<'a>(scored: impl IntoIterator<Item = (&'a KeyResult, Option<f64>)>) -> Option<f64> {
    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;

    for (kr, pct) in scored {
        let Some(pct) = pct else { continue };
        let w = kr.effective_weight();
        if !usable_weight(w) {
            log::warn!("kr '{}' has unusable weight {w}, left out of objective progress", kr.title);
            continue;
        }
        weighted_sum += pct * w;
        weight_total += w;
    }

    if weight_total > 0.0 {
        Some(weighted_sum / weight_total)
    } else {
        None
    }
}

pub(crate) fn usable_weight(w: f64) -> bool {
    w.is_finite() && w > 0.0
}
