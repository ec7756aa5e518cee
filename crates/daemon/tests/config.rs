//! Loading and writing config.toml in a config directory

use epochlock_daemon::{AppConfig, AppState, StateError};

#[test]
fn test_missing_dir_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let state = AppState::load(Some(dir.path().join("absent"))).unwrap();
    assert_eq!(state.config, AppConfig::default());
    assert_eq!(state.config.api_port, 5000);
    assert_eq!(state.config.epoch_duration, 10);
    assert_eq!(state.config.log_level, "info");
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "epoch_duration = 3600\n").unwrap();

    let state = AppState::load(Some(dir.path().to_path_buf())).unwrap();
    assert_eq!(state.config.epoch_duration, 3600);
    assert_eq!(state.config.api_port, 5000);
}

#[test]
fn test_init_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        api_port: 6000,
        log_dir: Some(dir.path().join("logs")),
        ..AppConfig::default()
    };
    let state = AppState::init(Some(dir.path().join("epochlock")), config).unwrap();
    assert!(state.config_path.exists());

    let loaded = AppState::load(Some(dir.path().join("epochlock"))).unwrap();
    assert_eq!(loaded.config, state.config);
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "api_port = 7000\n").unwrap();

    assert!(matches!(
        AppState::init(Some(dir.path().to_path_buf()), AppConfig::default()),
        Err(StateError::AlreadyInitialized(_))
    ));
    let loaded = AppState::load(Some(dir.path().to_path_buf())).unwrap();
    assert_eq!(loaded.config.api_port, 7000);
}

#[test]
fn test_zero_epoch_duration_rejected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "epoch_duration = 0\n").unwrap();

    assert!(matches!(
        AppState::load(Some(dir.path().to_path_buf())),
        Err(StateError::InvalidConfig(_))
    ));
}

#[test]
fn test_malformed_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "api_port = \"high\"\n").unwrap();

    assert!(matches!(
        AppState::load(Some(dir.path().to_path_buf())),
        Err(StateError::ParseConfig(_))
    ));
}
