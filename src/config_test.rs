use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_nothing_is_set() {
    let config = PanelConfig::from_lookup(|_| None);
    assert_eq!(config, PanelConfig::default());
    assert_eq!(config.api_base, "/api");
    assert_eq!(config.toast_duration_ms, 3500);
}

#[test]
fn api_base_trailing_slash_is_trimmed() {
    let config = PanelConfig::from_lookup(lookup_from(&[(API_BASE_KEY, " /admin/api/ ")]));
    assert_eq!(config.api_base, "/admin/api");
}

#[test]
fn blank_api_base_falls_back_to_default() {
    let config = PanelConfig::from_lookup(lookup_from(&[(API_BASE_KEY, "   ")]));
    assert_eq!(config.api_base, DEFAULT_API_BASE);
}

#[test]
fn root_api_base_maps_endpoints_onto_the_origin_root() {
    let config = PanelConfig::from_lookup(lookup_from(&[(API_BASE_KEY, "/")]));
    assert_eq!(config.api_base, "");
    assert_eq!(crate::net::api::HttpContractApi::from_config(&config), crate::net::api::HttpContractApi::new(""));
}

#[test]
fn toast_duration_parses_and_rejects_garbage() {
    assert_eq!(parse_duration_ms(Some("5000"), 3500), 5000);
    assert_eq!(parse_duration_ms(Some("soon"), 3500), 3500);
    assert_eq!(parse_duration_ms(Some("0"), 3500), 3500);
    assert_eq!(parse_duration_ms(None, 3500), 3500);
}
