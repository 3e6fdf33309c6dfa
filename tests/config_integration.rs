//! Integration tests for environment-driven engine configuration.
//!
//! These tests mutate process environment variables and run serially.

use serial_test::serial;
use tourney_engine::config::{ConfigError, EngineConfig, PERCENTAGE_TOLERANCE_VAR};
use tourney_engine::structure::{PrizeItem, PrizeLevel, PrizeStructure, PrizeStructureValidator};

fn set_tolerance(value: Option<&str>) {
    // SAFETY: tests touching the environment are marked #[serial]
    unsafe {
        match value {
            Some(value) => std::env::set_var(PERCENTAGE_TOLERANCE_VAR, value),
            None => std::env::remove_var(PERCENTAGE_TOLERANCE_VAR),
        }
    }
}

#[test]
#[serial]
fn test_from_env_defaults() {
    set_tolerance(None);
    let config = EngineConfig::from_env().unwrap();
    assert_eq!(config, EngineConfig::development());
}

#[test]
#[serial]
fn test_from_env_tolerance_reaches_validator() {
    set_tolerance(Some("0.5"));
    let config = EngineConfig::from_env().unwrap();
    set_tolerance(None);

    let validator = PrizeStructureValidator::from_config(&config);
    assert_eq!(validator.tolerance(), 0.5);

    let table = vec![PrizeStructure::new(
        1,
        None,
        vec![PrizeLevel::new(
            1,
            1,
            vec![PrizeItem::percentage(59.8), PrizeItem::percentage(40.0)],
        )],
    )];
    assert!(validator.validate(&table).is_ok());
    assert!(PrizeStructureValidator::new().validate(&table).is_err());
}

#[test]
#[serial]
fn test_from_env_rejects_garbage() {
    set_tolerance(Some("lots"));
    let result = EngineConfig::from_env();
    set_tolerance(None);

    assert_eq!(
        result,
        Err(ConfigError::Invalid {
            key: PERCENTAGE_TOLERANCE_VAR,
            value: "lots".to_string(),
        })
    );
}

#[cfg(unix)]
#[test]
#[serial]
fn test_from_env_rejects_non_utf8() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    // SAFETY: tests touching the environment are marked #[serial]
    unsafe { std::env::set_var(PERCENTAGE_TOLERANCE_VAR, OsStr::from_bytes(b"0.\xff5")) };
    let result = EngineConfig::from_env();
    set_tolerance(None);

    assert_eq!(
        result,
        Err(ConfigError::Invalid {
            key: PERCENTAGE_TOLERANCE_VAR,
            value: "0.\u{FFFD}5".to_string(),
        })
    );
}
