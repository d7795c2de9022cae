use super::*;

fn contract(id: i64, name: &str, amount: Option<u64>, limit: Option<u64>) -> Contract {
    Contract {
        id,
        name: name.to_owned(),
        contacts_amount: amount,
        contacts_limit: limit,
        ..Contract::default()
    }
}

#[test]
fn contracts_state_defaults() {
    let s = ContractsState::default();
    assert!(s.items.is_empty());
    assert!(!s.loading);
    assert!(!s.loaded);
    assert!(s.error.is_none());
    assert_eq!(s.generation, 0);
    assert_eq!(s.list_view(), ListView::Loading);
}

#[test]
fn begin_fetch_bumps_generation_and_sets_loading() {
    let mut s = ContractsState::default();
    assert_eq!(s.begin_fetch(), 1);
    assert_eq!(s.begin_fetch(), 2);
    assert!(s.loading);
}

#[test]
fn empty_collection_renders_placeholder_without_rows() {
    let mut s = ContractsState::default();
    let generation = s.begin_fetch();
    assert_eq!(s.apply_fetch(generation, Ok(Vec::new())), FetchApplied::Loaded { count: 0 });
    assert_eq!(s.list_view(), ListView::Empty);
    assert_eq!(EMPTY_LIST_MESSAGE, "No contracts found");
}

#[test]
fn stale_generation_is_dropped() {
    let mut s = ContractsState::default();
    let older = s.begin_fetch();
    let newer = s.begin_fetch();
    assert_eq!(s.apply_fetch(newer, Ok(vec![contract(2, "new", None, None)])), FetchApplied::Loaded { count: 1 });
    assert_eq!(s.apply_fetch(older, Ok(vec![contract(1, "old", None, None)])), FetchApplied::Stale);
    assert_eq!(s.items[0].name, "new");
    assert!(!s.loading);
}

#[test]
fn failed_fetch_keeps_items_and_records_error() {
    let mut s = ContractsState::default();
    let first = s.begin_fetch();
    s.apply_fetch(first, Ok(vec![contract(1, "A", None, None)]));

    let second = s.begin_fetch();
    let applied = s.apply_fetch(second, Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(applied, FetchApplied::Failed { message: "request failed: offline".to_owned() });
    assert_eq!(s.items.len(), 1);
    assert_eq!(s.error.as_deref(), Some("request failed: offline"));
    assert!(!s.loading);

    let third = s.begin_fetch();
    s.apply_fetch(third, Ok(vec![contract(1, "A", None, None)]));
    assert!(s.error.is_none());
}

#[test]
fn only_refreshes_over_a_settled_list_count_as_refreshing() {
    let mut s = ContractsState::default();
    let first = s.begin_fetch();
    assert!(!s.is_refreshing());
    s.apply_fetch(first, Ok(vec![contract(1, "A", None, None)]));
    assert!(!s.is_refreshing());

    let second = s.begin_fetch();
    assert!(s.is_refreshing());
    s.apply_fetch(second, Ok(Vec::new()));
    assert!(!s.is_refreshing());
}

#[test]
fn failed_first_fetch_shows_empty_not_loading() {
    let mut s = ContractsState::default();
    let generation = s.begin_fetch();
    s.apply_fetch(generation, Err(ApiError::Rejected("Unauthorized".to_owned())));
    assert_eq!(s.list_view(), ListView::Empty);
    assert_eq!(s.error.as_deref(), Some("Unauthorized"));
}

#[test]
fn fresh_record_with_limit_renders_green_zero_usage() {
    let row = ContractRow::from_contract(&contract(1, "A", None, Some(100)));
    assert_eq!(row.percent, 0.0);
    assert_eq!(row.color, UsageColor::Green);
    assert!(!row.limit_reached);
    assert_eq!(row.used, 0);
    assert_eq!(row.limit, 100);
}

#[test]
fn nearly_exhausted_record_renders_red() {
    let row = ContractRow::from_contract(&contract(1, "A", Some(95), Some(100)));
    assert!((row.percent - 95.0).abs() < 1e-9);
    assert_eq!(row.color, UsageColor::Red);
    assert!(!row.limit_reached);
}

#[test]
fn exhausted_record_is_flagged() {
    let row = ContractRow::from_contract(&contract(1, "A", Some(100), Some(100)));
    assert_eq!(row.percent, 100.0);
    assert!(row.limit_reached);
    assert_eq!(row.bar_style(), "width:100.0%; background-color:#e74c3c;");
}

#[test]
fn unlimited_record_is_never_flagged() {
    let row = ContractRow::from_contract(&contract(1, "A", Some(5_000), Some(0)));
    assert_eq!(row.percent, 0.0);
    assert_eq!(row.color, UsageColor::Green);
    assert!(!row.limit_reached);
}

#[test]
fn missing_last_checked_uses_placeholder() {
    let mut c = contract(1, "A", None, None);
    assert_eq!(ContractRow::from_contract(&c).last_checked, "—");
    c.last_checked = Some("01/02/2025 09:30".to_owned());
    assert_eq!(ContractRow::from_contract(&c).last_checked, "01/02/2025 09:30");
}

#[test]
fn list_view_preserves_backend_order() {
    let mut s = ContractsState::default();
    let generation = s.begin_fetch();
    s.apply_fetch(generation, Ok(vec![contract(3, "Alpha", None, None), contract(1, "Beta", None, None)]));
    let ListView::Items(rows) = s.list_view() else {
        panic!("expected rows");
    };
    let names: Vec<_> = rows.iter().map(|r| r.contract.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "Beta"]);
}

#[test]
fn usage_label_reports_rounded_percent_or_no_limit() {
    let row = ContractRow::from_contract(&contract(1, "A", Some(95), Some(100)));
    assert_eq!(row.usage_label(), "95% used");
    let row = ContractRow::from_contract(&contract(1, "A", Some(95), None));
    assert_eq!(row.usage_label(), "No limit");
}
