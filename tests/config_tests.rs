use std::collections::HashMap;
use std::path::PathBuf;

use blockfall::config::{
    ConfigError, GameConfig, ENV_DROP_INTERVAL_MS, ENV_HEIGHT, ENV_LOG_PATH, ENV_SOLID_FLOOR,
    ENV_WIDTH, MAX_ARENA_SIDE,
};
use blockfall::core::DropOutcome;

fn config_from(pairs: &[(&str, &str)]) -> Result<GameConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    GameConfig::from_lookup(|var| vars.get(var).cloned())
}

#[test]
fn defaults_match_classic_arena() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config, GameConfig::default());
    assert_eq!((config.width, config.height), (12, 20));
    assert_eq!(config.drop_interval_ms, 1000);
    assert_eq!(config.frame_ms, 16);
    assert!(!config.solid_floor);
    assert_eq!(config.log_path, None);
}

#[test]
fn overrides_are_applied() {
    let config = config_from(&[
        (ENV_WIDTH, "10"),
        (ENV_HEIGHT, "24"),
        (ENV_DROP_INTERVAL_MS, "500"),
        (ENV_SOLID_FLOOR, "true"),
        (ENV_LOG_PATH, "/tmp/blockfall.log"),
    ])
    .unwrap();

    assert_eq!((config.width, config.height), (10, 24));
    assert_eq!(config.drop_interval_ms, 500);
    assert!(config.solid_floor);
    assert_eq!(config.log_path, Some(PathBuf::from("/tmp/blockfall.log")));
}

#[test]
fn blank_log_path_disables_logging() {
    let config = config_from(&[(ENV_LOG_PATH, "   ")]).unwrap();
    assert_eq!(config.log_path, None);
}

#[test]
fn invalid_values_are_rejected() {
    assert_eq!(
        config_from(&[(ENV_WIDTH, "wide")]),
        Err(ConfigError::Invalid {
            var: ENV_WIDTH,
            value: "wide".to_string()
        })
    );
    assert_eq!(
        config_from(&[(ENV_HEIGHT, "0")]),
        Err(ConfigError::Zero { var: ENV_HEIGHT })
    );
    assert!(matches!(
        config_from(&[(ENV_SOLID_FLOOR, "maybe")]),
        Err(ConfigError::Invalid { .. })
    ));
}

#[test]
fn oversized_arena_is_rejected() {
    assert_eq!(
        config_from(&[(ENV_WIDTH, "4611686018427387904")]),
        Err(ConfigError::TooLarge {
            var: ENV_WIDTH,
            max: MAX_ARENA_SIDE
        })
    );
    assert_eq!(
        config_from(&[(ENV_HEIGHT, "1025")]),
        Err(ConfigError::TooLarge {
            var: ENV_HEIGHT,
            max: MAX_ARENA_SIDE
        })
    );
    let config = config_from(&[(ENV_WIDTH, "1024"), (ENV_HEIGHT, "1024")]).unwrap();
    assert_eq!(config.build_state().arena().cells().len(), 1024 * 1024);
}

#[test]
fn error_messages_name_the_variable() {
    let err = config_from(&[(ENV_DROP_INTERVAL_MS, "-5")]).unwrap_err();
    assert!(err.to_string().contains(ENV_DROP_INTERVAL_MS));
}

#[test]
fn build_state_uses_configured_arena() {
    let config = config_from(&[(ENV_WIDTH, "8"), (ENV_HEIGHT, "4"), (ENV_SOLID_FLOOR, "1")]).unwrap();
    let mut state = config.build_state();

    assert_eq!(state.arena().width(), 8);
    assert_eq!(state.arena().height(), 4);
    assert_eq!(state.player().x, 3);

    // Shape rows 1..=2 reach the floor at y = 1.
    assert_eq!(state.drop(), DropOutcome::Fell);
    assert_eq!(state.drop(), DropOutcome::Landed);
}
