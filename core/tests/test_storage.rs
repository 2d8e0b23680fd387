use okr_progress_core::{load_config, save_config, ProgressConfig, StatusThresholds};
use std::fs;

#[test]
fn test_roundtrip_config_save_and_load() {
    let tmpfile = "tests/tmp_config.json";

    let config = ProgressConfig {
        average_includes_zero_actuals: true,
        status: StatusThresholds {
            critical_below: 60.0,
            on_track_from: 95.0,
        },
    };

    save_config(&config, tmpfile).expect("save_config failed");
    let loaded = load_config(tmpfile).expect("load_config failed");
    assert_eq!(loaded, config);

    fs::remove_file(tmpfile).ok();
}

#[test]
fn test_missing_file_gives_default() {
    let loaded = load_config("tests/does_not_exist_config.json").expect("load_config failed");
    assert_eq!(loaded, ProgressConfig::default());
    assert!(!loaded.average_includes_zero_actuals);
    assert_eq!(loaded.status.critical_below, 70.0);
}

#[test]
fn test_partial_file_fills_defaults() {
    let tmpfile = "tests/tmp_partial_config.json";
    fs::write(tmpfile, r#"{"status": {"on_track_from": 90}}"#).unwrap();

    let loaded = load_config(tmpfile).expect("load_config failed");
    assert!(!loaded.average_includes_zero_actuals);
    assert_eq!(loaded.status.critical_below, 70.0);
    assert_eq!(loaded.status.on_track_from, 90.0);

    fs::remove_file(tmpfile).ok();
}

#[test]
fn test_broken_file_reports_path() {
    let tmpfile = "tests/tmp_broken_config.json";
    fs::write(tmpfile, "{ not json").unwrap();

    let err = load_config(tmpfile).unwrap_err();
    assert!(format!("{err:#}").contains(tmpfile));

    fs::remove_file(tmpfile).ok();
}
