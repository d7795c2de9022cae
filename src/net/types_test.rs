use super::*;

// =============================================================
// Contract
// =============================================================

#[test]
fn contract_deserializes_backend_listing_row() {
    let raw = serde_json::json!({
        "id": 7,
        "name": "Acme",
        "sfmc_subdomain": "mc-acme",
        "client_id": "cid",
        "client_secret": "secret",
        "de_key": "DE_COUNT",
        "contacts_limit": 1000,
        "contacts_amount": 250,
        "last_checked": "03/02/2025 10:15",
        "slack_users_ids": ["U1", "U2"]
    });
    let contract: Contract = serde_json::from_value(raw).unwrap();
    assert_eq!(contract.id, 7);
    assert_eq!(contract.name, "Acme");
    assert_eq!(contract.sfmc_subdomain.as_deref(), Some("mc-acme"));
    assert_eq!(contract.limit(), 1000);
    assert_eq!(contract.amount(), 250);
    assert_eq!(contract.last_checked.as_deref(), Some("03/02/2025 10:15"));
    assert_eq!(contract.slack_users_ids, vec!["U1", "U2"]);
}

#[test]
fn contract_tolerates_nulls_and_missing_fields() {
    let raw = serde_json::json!({
        "id": 1,
        "name": "Bare",
        "sfmc_subdomain": null,
        "contacts_limit": null,
        "last_checked": null
    });
    let contract: Contract = serde_json::from_value(raw).unwrap();
    assert_eq!(contract.sfmc_subdomain, None);
    assert_eq!(contract.limit(), 0);
    assert_eq!(contract.amount(), 0);
    assert!(contract.slack_users_ids.is_empty());
}

// =============================================================
// ContractPayload
// =============================================================

#[test]
fn payload_json_never_carries_usage_fields() {
    let payload = ContractPayload { name: "Acme".to_owned(), contacts_limit: 10, ..ContractPayload::default() };
    let value = serde_json::to_value(&payload).unwrap();
    let obj = value.as_object().unwrap();
    assert!(!obj.contains_key("contacts_amount"));
    assert!(!obj.contains_key("last_checked"));
    assert!(!obj.contains_key("id"));
    assert_eq!(obj["contacts_limit"], 10);
}

#[test]
fn payload_form_fields_join_slack_ids_with_commas() {
    let payload = ContractPayload {
        name: "Acme".to_owned(),
        contacts_limit: 500,
        slack_users_ids: vec!["U1".to_owned(), "U2".to_owned()],
        ..ContractPayload::default()
    };
    let fields = payload.form_fields();
    assert!(fields.contains(&("slack_users_ids", "U1,U2".to_owned())));
    assert!(fields.contains(&("contacts_limit", "500".to_owned())));
    assert!(fields.contains(&("name", "Acme".to_owned())));
    assert_eq!(fields.len(), 7);
}

// =============================================================
// ApiAck
// =============================================================

#[test]
fn ack_success_carries_created_id() {
    let ack: ApiAck = serde_json::from_str(r#"{"success": true, "id": 42}"#).unwrap();
    assert_eq!(ack.into_result(), Ok(Some(42)));
}

#[test]
fn ack_without_success_flag_is_rejected_with_backend_message() {
    let ack: ApiAck = serde_json::from_str(r#"{"error": "Contract not found"}"#).unwrap();
    assert_eq!(ack.into_result(), Err(ApiError::Rejected("Contract not found".to_owned())));
}

#[test]
fn ack_failure_without_message_reports_unknown_error() {
    let ack: ApiAck = serde_json::from_str(r#"{"success": false}"#).unwrap();
    assert_eq!(ack.into_result(), Err(ApiError::Rejected("unknown error".to_owned())));
}

#[test]
fn rejected_error_displays_message_verbatim() {
    assert_eq!(ApiError::Rejected("No data provided".to_owned()).to_string(), "No data provided");
    assert_eq!(ApiError::Status(502).to_string(), "server responded with status 502");
}
