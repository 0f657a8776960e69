use std::fs;
use std::time::Duration;

use ocean_engine::{ConfigError, SimConfig};
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let temp = TempDir::new().unwrap();
    let config = SimConfig::load(&temp.path().join("absent.ron")).unwrap();
    assert_eq!(config, SimConfig::default());
}

#[test]
fn partial_file_overrides_named_fields() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("oceandash.ron");
    fs::write(&path, "(reply_delay_ms: 250, max_step: 5, seed_samples: false)").unwrap();

    let config = SimConfig::load(&path).unwrap();
    assert_eq!(config.reply_delay_ms, 250);
    assert_eq!(config.max_step, 5);
    assert!(!config.seed_samples);
    assert_eq!(config.tick_period_ms, 500);

    let settings = config.settings();
    assert_eq!(settings.reply_delay, Duration::from_millis(250));
    assert_eq!(settings.citations.len(), 3);
}

#[test]
fn written_example_loads_back() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("oceandash.ron");
    fs::write(&path, SimConfig::default().to_ron().unwrap()).unwrap();

    assert_eq!(SimConfig::load(&path).unwrap(), SimConfig::default());
}

#[test]
fn malformed_file_is_an_error() {
    let err = SimConfig::from_ron("(reply_delay_ms: \"soon\")").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    let err = SimConfig::from_ron("(unknown_knob: 1)").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn zero_tick_period_is_invalid() {
    let err = SimConfig::from_ron("(tick_period_ms: 0)").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("tick_period_ms"));

    let err = SimConfig::from_ron("(max_step: 0)").unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn unreadable_path_reports_location() {
    let temp = TempDir::new().unwrap();
    // A directory cannot be read as a file.
    let err = SimConfig::load(temp.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains(&temp.path().display().to_string()));
}
