use super::*;

#[test]
fn test_empty_file_gives_defaults() {
    assert_eq!(GameConfig::from_toml_str("").unwrap(), GameConfig::default());
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let config = GameConfig::from_toml_str("show_board = false\n").unwrap();
    assert!(!config.show_board);
    assert!(config.announce_turn);
    assert_eq!(config.log_filter, "warn");
}

#[test]
fn test_wrong_type_is_an_error() {
    assert!(GameConfig::from_toml_str("show_board = \"yes\"").is_err());
}

#[test]
fn test_serialized_defaults_read_back() {
    let config = GameConfig {
        log_filter: "chess_rules=debug".to_string(),
        show_board: false,
        announce_turn: true,
    };
    let text = config.to_toml_string().unwrap();
    assert_eq!(GameConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn test_missing_file_is_an_error() {
    let err = GameConfig::load(Path::new("/nonexistent/text_game.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config"));
}
