use crate::error::InvalidPeriodError;
use crate::period::{resolve_month_keys, Anchor, MonthKey, Period};
use crate::types::KeyResult;

/// Whether `kr` belongs in a view of `period`.
///
/// With a validity window, the window is widened to whole periods of the
/// KR's own frequency (a quarterly KR starting in February counts from
/// January) and tested for a closed-interval overlap; a missing side is
/// open. Without a window the KR qualifies when it has any target or actual
/// in the period.
pub fn is_valid_for_period(kr: &KeyResult, period: &Period, anchor: &Anchor) -> Result<bool, InvalidPeriodError> {
    let (period_start, period_end) = period.bounds(anchor)?;
    let start = parse_bound(kr, "start_month", kr.start_month.as_deref());
    let end = parse_bound(kr, "end_month", kr.end_month.as_deref());

    if start.is_none() && end.is_none() {
        let keys = resolve_month_keys(period, anchor)?;
        return Ok(keys
            .iter()
            .any(|k| kr.monthly_targets.get(k).is_some() || kr.monthly_actual.get(k).is_some()));
    }

    let window_start = match start {
        Some(key) => Some(kr.frequency.period_containing(key).bounds(anchor)?.0),
        None => None,
    };
    let window_end = match end {
        Some(key) => Some(kr.frequency.period_containing(key).bounds(anchor)?.1),
        None => None,
    };

    let starts_in_time = window_start.map_or(true, |s| s <= period_end);
    let ends_in_time = window_end.map_or(true, |e| e >= period_start);
    Ok(starts_in_time && ends_in_time)
}

/// The KRs of `krs` that pass [`is_valid_for_period`], in input order.
pub fn filter_valid<'a>(
    krs: &'a [KeyResult],
    period: &Period,
    anchor: &Anchor,
) -> Result<Vec<&'a KeyResult>, InvalidPeriodError> {
    let mut kept = Vec::with_capacity(krs.len());
    for kr in krs {
        if is_valid_for_period(kr, period, anchor)? {
            kept.push(kr);
        }
    }
    Ok(kept)
}

fn parse_bound(kr: &KeyResult, field: &str, raw: Option<&str>) -> Option<MonthKey> {
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    match raw.parse::<MonthKey>() {
        Ok(key) => Some(key),
        Err(err) => {
            log::warn!("kr '{}': ignoring {field}: {err}", kr.title);
            None
        }
    }
}
