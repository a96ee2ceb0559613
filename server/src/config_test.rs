use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    AppConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn from_lookup_defaults() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.identity_url, None);
    assert_eq!(cfg.backend_url, None);
    assert_eq!(cfg.provider_timeout_secs, DEFAULT_PROVIDER_TIMEOUT_SECS);
    assert!(!cfg.invite_members);
    assert!(cfg.public_dir.ends_with("public"));
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = config_from(&[
        ("PORT", "8080"),
        ("IDENTITY_PROVIDER_URL", "https://id.example.test/"),
        ("DATA_BACKEND_URL", "http://localhost:3210"),
        ("PROVIDER_TIMEOUT_SECS", "3"),
        ("FEATURE_INVITE_MEMBERS", "yes"),
        ("PUBLIC_DIR", "/srv/thinkspace/public"),
    ])
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.identity_url.as_deref(), Some("https://id.example.test"));
    assert_eq!(cfg.backend_url.as_deref(), Some("http://localhost:3210"));
    assert_eq!(cfg.provider_timeout_secs, 3);
    assert!(cfg.invite_members);
    assert_eq!(cfg.public_dir, PathBuf::from("/srv/thinkspace/public"));
}

#[test]
fn from_lookup_invalid_port_errors() {
    let err = config_from(&[("PORT", "eighty")]).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
    assert!(err.to_string().contains("not a valid port number"));
}

#[test]
fn from_lookup_blank_port_uses_default() {
    let cfg = config_from(&[("PORT", "  ")]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn from_lookup_zero_timeout_errors() {
    let err = config_from(&[("PROVIDER_TIMEOUT_SECS", "0")]).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PROVIDER_TIMEOUT_SECS", .. }));
}

#[test]
fn from_lookup_rejects_url_without_scheme() {
    let err = config_from(&[("DATA_BACKEND_URL", "backend.example.test")]).unwrap_err();
    assert_eq!(err, ConfigError::UrlScheme { var: "DATA_BACKEND_URL", value: "backend.example.test".into() });
}

#[test]
fn from_lookup_blank_url_is_disabled() {
    let cfg = config_from(&[("IDENTITY_PROVIDER_URL", "   ")]).unwrap();
    assert_eq!(cfg.identity_url, None);
}

#[test]
fn from_lookup_unparseable_flag_errors() {
    let err = config_from(&[("FEATURE_INVITE_MEMBERS", "maybe")]).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "FEATURE_INVITE_MEMBERS", .. }));
}

#[test]
fn from_lookup_blank_flag_is_off() {
    let cfg = config_from(&[("FEATURE_INVITE_MEMBERS", "  ")]).unwrap();
    assert!(!cfg.invite_members);
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", " TRUE ", "On"] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "NO"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_invalid_returns_none() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}
