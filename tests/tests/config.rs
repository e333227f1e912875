use seno_core::config::ValidationConfig;
use seno_core::validation::verdict::MatchMode;

#[test]
fn test_config_defaults() {
    let config: ValidationConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, ValidationConfig::default());
    assert_eq!(config.max_message_length, 1024);
    assert_eq!(config.match_mode, MatchMode::Exhaustive);
    assert!(!config.strict_arguments);
    assert_eq!(config, ValidationConfig::block());
}

#[test]
fn test_config_overrides() {
    let config: ValidationConfig = serde_json::from_str(
        r#"{"max_message_length": 64, "match_mode": "fail_fast", "strict_arguments": true}"#,
    )
    .unwrap();
    assert_eq!(config.max_message_length, 64);
    assert_eq!(config.match_mode, MatchMode::FailFast);
    assert!(config.strict_arguments);
    assert_eq!(config.parallel_threshold, ValidationConfig::default().parallel_threshold);
}

#[test]
fn test_mempool_config() {
    let config = ValidationConfig::mempool();
    assert_eq!(config.match_mode, MatchMode::FailFast);
    assert!(config.strict_arguments);
}
