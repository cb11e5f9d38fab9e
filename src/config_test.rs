use super::*;

#[test]
fn from_values_defaults_when_unset() {
    let cfg = ServerConfig::from_values(None, None).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.addr.port(), DEFAULT_PORT);
    assert_eq!(cfg.addr.ip(), DEFAULT_HOST);
}

#[test]
fn from_values_blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_values(Some("  "), Some("")).unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

#[test]
fn from_values_parses_overrides() {
    let cfg = ServerConfig::from_values(Some("127.0.0.1"), Some(" 8080 ")).unwrap();
    assert_eq!(cfg.addr.to_string(), "127.0.0.1:8080");
}

#[test]
fn from_values_accepts_ipv6_host() {
    let cfg = ServerConfig::from_values(Some("::1"), Some("3000")).unwrap();
    assert!(cfg.addr.is_ipv6());
}

#[test]
fn from_values_rejects_invalid_port() {
    let err = ServerConfig::from_values(None, Some("http")).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".to_owned()));
}

#[test]
fn from_values_rejects_out_of_range_port() {
    let err = ServerConfig::from_values(None, Some("70000")).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("70000".to_owned()));
}

#[test]
fn from_values_rejects_hostname() {
    let err = ServerConfig::from_values(Some("localhost"), None).unwrap_err();
    assert_eq!(err, ConfigError::InvalidHost("localhost".to_owned()));
    assert_eq!(err.to_string(), "invalid HOST: localhost");
}
