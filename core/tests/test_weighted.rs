// core/tests/test_weighted.rs
use okr_progress_core::{weighted_progress, Anchor, KeyResult, MonthlySeries, Period};

const JAN: Period = Period::Monthly { month: 1, year: 2026 };

fn anchor() -> Anchor {
    Anchor::new(2026, 3).unwrap()
}

// KR hitting `pct` % of a 100 target in January; `None` = nothing measured.
fn kr_at(title: &str, pct: Option<f64>, weight: Option<f64>) -> KeyResult {
    KeyResult {
        title: title.to_string(),
        monthly_targets: MonthlySeries::new().with("2026-01", Some(100.0)),
        monthly_actual: MonthlySeries::new().with("2026-01", pct),
        weight,
        ..KeyResult::default()
    }
}

fn progress(krs: &[KeyResult]) -> Option<f64> {
    weighted_progress(krs, &JAN, &anchor()).expect("valid period")
}

#[test]
fn null_krs_are_left_out_not_counted_as_zero() {
    let krs = [
        kr_at("no data", None, None),
        kr_at("half", Some(50.0), None),
        kr_at("full", Some(100.0), None),
    ];
    let p = progress(&krs).unwrap();
    assert!((p - 75.0).abs() < 1e-9, "got {p}");
}

#[test]
fn all_null_is_none() {
    let krs = [kr_at("a", None, Some(2.0)), kr_at("b", None, None)];
    assert_eq!(progress(&krs), None);
}

#[test]
fn empty_is_none() {
    assert_eq!(progress(&[]), None);
}

#[test]
fn weights_scale_contributions() {
    let krs = [kr_at("light", Some(50.0), Some(1.0)), kr_at("heavy", Some(100.0), Some(3.0))];
    // (50 + 300) / 4
    let p = progress(&krs).unwrap();
    assert!((p - 87.5).abs() < 1e-9, "got {p}");
}

#[test]
fn non_positive_weights_are_excluded() {
    let krs = [
        kr_at("zero", Some(10.0), Some(0.0)),
        kr_at("negative", Some(10.0), Some(-2.0)),
        kr_at("nan", Some(10.0), Some(f64::NAN)),
        kr_at("ok", Some(90.0), Some(1.0)),
    ];
    let p = progress(&krs).unwrap();
    assert!((p - 90.0).abs() < 1e-9, "got {p}");

    let only_zero = [kr_at("zero", Some(10.0), Some(0.0))];
    assert_eq!(progress(&only_zero), None);
}

#[test]
fn recorded_zero_pulls_the_average_down() {
    let krs = [kr_at("zero", Some(0.0), None), kr_at("full", Some(100.0), None)];
    let p = progress(&krs).unwrap();
    assert!((p - 50.0).abs() < 1e-9, "got {p}");
}

#[test]
fn invalid_period_fails_even_for_empty_input() {
    let bad = Period::Quarterly { quarter: 7, year: 2026 };
    assert!(weighted_progress(&[], &bad, &anchor()).is_err());
}
