use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_defaults_validate() {
    let config = Config::default().validate().expect("defaults are valid");
    assert_eq!(config.starting_bankroll, 1000.0);
    assert_eq!(config.bet_amount, 25.0);
    assert_eq!(config.house_edge_percent, 2.7);
    assert_eq!(config.rounds, 200);
    assert_eq!(config.slot_spins, 1000);
    assert_eq!(config.slot_bet, 1.0);
    assert_eq!(config.blackjack_hands, 100);
    assert_eq!(config.blackjack_bet, 25.0);
    assert_eq!(config.roulette_bet, 10.0);
    assert_eq!(config.roulette_variant, RouletteVariant::European);
    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.seed, None);
}

#[test]
fn test_partial_yaml_keeps_defaults() {
    let config = Config::from_yaml(
        "starting_bankroll: 5000\nroulette_variant: american\nslot_type: airport\nseed: 9\n",
    )
    .unwrap();
    assert_eq!(config.starting_bankroll, 5000.0);
    assert_eq!(config.roulette_variant, RouletteVariant::American);
    assert_eq!(config.slot_type, SlotType::Airport);
    assert_eq!(config.seed, Some(9));
    assert_eq!(config.bet_amount, 25.0);
    assert_eq!(config.log_level, "info");
}

#[test]
fn test_empty_yaml_is_default() {
    assert_eq!(Config::from_yaml("").unwrap(), Config::default());
    assert_eq!(Config::from_yaml("  \n").unwrap(), Config::default());
}

#[test]
fn test_rejects_unknown_fields() {
    let err = Config::from_yaml("bankroll: 1000\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_rejects_unknown_strategy() {
    let err = Config::from_yaml("blackjack_strategy: martingale\n").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "bet_amount: 50").unwrap();
    writeln!(file, "house_edge_percent: 5.26").unwrap();
    writeln!(file, "log_level: debug").unwrap();

    let config = Config::load(file.path()).unwrap().validate().unwrap();
    assert_eq!(config.bet_amount, 50.0);
    assert_eq!(config.house_edge_percent, 5.26);
    assert_eq!(config.log_level, Level::DEBUG);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.yaml");
    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("missing.yaml"));
}

#[test]
fn test_rejects_out_of_range() {
    let config = Config {
        house_edge_percent: 25.0,
        ..Config::default()
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(
        err,
        ConfigError::OutOfRange {
            field: "house_edge_percent",
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "house_edge_percent must be within [0.5, 20] (got 25)"
    );

    let config = Config {
        rounds: 5,
        ..Config::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::OutOfRange { field: "rounds", .. })
    ));

    let config = Config {
        slot_bet: f64::NAN,
        ..Config::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::OutOfRange { field: "slot_bet", .. })
    ));
}

#[test]
fn test_rejects_invalid_log_level() {
    let config = Config {
        log_level: "loud".to_string(),
        ..Config::default()
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigError::InvalidLogLevel { .. }));
}

#[test]
fn test_example_config_matches_defaults() {
    let config = Config::from_yaml(include_str!("../houseedge.example.yaml")).unwrap();
    assert_eq!(config, Config::default());
}
