use super::*;

#[test]
fn endpoints_format_expected_paths() {
    assert_eq!(contracts_endpoint("/api"), "/api/contracts");
    assert_eq!(contract_endpoint("/api", 12), "/api/contracts/12");
}

#[test]
fn http_api_takes_base_from_config() {
    let config = PanelConfig { api_base: "/admin/api".to_owned(), ..PanelConfig::default() };
    assert_eq!(HttpContractApi::from_config(&config).base, "/admin/api");
}

#[test]
fn decode_contract_list_parses_array() {
    let body = r#"[{"id": 1, "name": "A", "contacts_limit": 10, "contacts_amount": 3}]"#;
    let items = decode_contract_list(200, body).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "A");
    assert_eq!(items[0].amount(), 3);
}

#[test]
fn decode_contract_list_surfaces_error_object() {
    let err = decode_contract_list(401, r#"{"error": "Unauthorized"}"#).unwrap_err();
    assert_eq!(err, ApiError::Rejected("Unauthorized".to_owned()));
}

#[test]
fn decode_contract_list_reports_status_for_unparseable_error_page() {
    let err = decode_contract_list(502, "<html>Bad Gateway</html>").unwrap_err();
    assert_eq!(err, ApiError::Status(502));
}

#[test]
fn decode_contract_list_reports_decode_error_for_garbage_on_ok_status() {
    let err = decode_contract_list(200, "not json").unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn decode_ack_reads_backend_message_from_404() {
    let err = decode_ack(404, r#"{"error": "Contract not found"}"#).unwrap_err();
    assert_eq!(err, ApiError::Rejected("Contract not found".to_owned()));
}

#[test]
fn decode_ack_returns_created_id() {
    assert_eq!(decode_ack(201, r#"{"success": true, "id": 9}"#), Ok(Some(9)));
}

#[test]
fn decode_ack_falls_back_to_status_for_non_json_failure() {
    assert_eq!(decode_ack(500, "Internal Server Error"), Err(ApiError::Status(500)));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn stub_api_is_unavailable_outside_browser() {
    let api = HttpContractApi::new("/api");
    let result = futures::executor::block_on(api.list_contracts());
    assert_eq!(result, Err(ApiError::Unavailable));
}
