use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
        pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_match_backend() {
    let cfg = ApiConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.timeout, Duration::from_millis(1000));
    assert_eq!(cfg.timeout_ms(), 1000);
    assert_eq!(cfg, ApiConfig::default());
}

#[test]
fn overrides_are_applied_and_trimmed() {
    let cfg = ApiConfig::from_lookup(lookup(&[
        (BASE_URL_VAR, " https://agenda.example/api/ "),
        (TIMEOUT_VAR, "2500"),
    ]))
    .unwrap();
    assert_eq!(cfg.base_url, "https://agenda.example/api");
    assert_eq!(cfg.timeout_ms(), 2500);
}

#[test]
fn blank_base_url_keeps_default() {
    let cfg = ApiConfig::from_lookup(lookup(&[(BASE_URL_VAR, "   ")])).unwrap();
    assert_eq!(cfg.base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn invalid_timeout_errors() {
    let err = ApiConfig::from_lookup(lookup(&[(TIMEOUT_VAR, "soon")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidValue { var: TIMEOUT_VAR, value: "soon".to_owned() });
    assert!(err.to_string().contains("AGENDA_API_TIMEOUT_MS"));
}

#[test]
fn zero_timeout_errors() {
    assert!(ApiConfig::from_lookup(lookup(&[(TIMEOUT_VAR, "0")])).is_err());
}
