use crate::error::InvalidPeriodError;
use crate::period::{resolve_month_keys, Anchor, MonthKey, Period};
use crate::types::KeyResult;

/// True when no month of `period` has a recorded actual.
///
/// A stored `0` is a measurement and keeps the KR non-null. Only the raw
/// per-month actuals are read; targets and cached percentages are not.
pub fn is_null_for_period(kr: &KeyResult, period: &Period, anchor: &Anchor) -> Result<bool, InvalidPeriodError> {
    let keys = resolve_month_keys(period, anchor)?;
    Ok(has_no_actuals(kr, &keys))
}

pub(crate) fn has_no_actuals(kr: &KeyResult, keys: &[MonthKey]) -> bool {
    keys.iter().all(|k| kr.monthly_actual.get(k).is_none())
}
