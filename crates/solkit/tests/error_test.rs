/// Tests for error type conversions and error handling
use solkit::error::SolkitError;
use std::io;

#[test]
fn test_error_from_io_error() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: SolkitError = io_err.into();

    assert!(matches!(err, SolkitError::IoError(_)));
}

#[test]
fn test_error_from_toml_parse_error() {
    let parse_result: Result<toml::Value, toml::de::Error> = toml::from_str("invalid toml {{{");
    let err: SolkitError = parse_result.unwrap_err().into();

    assert!(matches!(err, SolkitError::TomlParseError(_)));
}

#[test]
fn test_validation_messages_are_passed_through() {
    let err = SolkitError::validation("Amount must be greater than 0");
    assert_eq!(err.to_string(), "Amount must be greater than 0");
    assert!(err.is_validation());
}

#[test]
fn test_timeout_is_not_validation() {
    let err = SolkitError::Timeout("Airdrop confirmation timeout".to_string());
    assert!(!err.is_validation());
    assert_eq!(err.to_string(), "Airdrop confirmation timeout");
}

#[test]
fn test_config_path_doesnt_exist_is_error() {
    let err = SolkitError::ConfigPathDoesntExists;
    assert!(
        std::error::Error::source(&err).is_none(),
        "ConfigPathDoesntExists should have no source"
    );
    assert!(err.to_string().contains("config"));
}
