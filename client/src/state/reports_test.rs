use super::*;

fn row(device: &str) -> ReportRow {
    ReportRow { device: device.to_owned(), report_id: format!("r-{device}"), value: serde_json::json!(60) }
}

#[test]
fn reports_state_defaults() {
    let s = ReportsState::default();
    assert!(!s.loading);
    assert!(s.error.is_none());
    assert!(s.rows.is_none());
}

#[test]
fn started_sets_loading_and_clears_error() {
    let mut s = ReportsState { error: Some("old".to_owned()), ..ReportsState::default() };
    s.apply(ReportsEvent::Started);
    assert!(s.loading);
    assert!(s.error.is_none());
}

#[test]
fn succeeded_replaces_rows_and_stops_loading() {
    let mut s = ReportsState { rows: Some(vec![row("a"), row("b")]), ..ReportsState::default() };
    s.apply(ReportsEvent::Started);
    s.apply(ReportsEvent::Succeeded(vec![row("c")]));
    assert!(!s.loading);
    assert_eq!(s.rows, Some(vec![row("c")]));
}

#[test]
fn succeeded_with_no_rows_keeps_an_empty_table() {
    let mut s = ReportsState::default();
    s.apply(ReportsEvent::Started);
    s.apply(ReportsEvent::Succeeded(Vec::new()));
    assert_eq!(s.rows, Some(Vec::new()));
}

#[test]
fn failed_keeps_previous_rows() {
    let mut s = ReportsState { rows: Some(vec![row("a")]), ..ReportsState::default() };
    s.apply(ReportsEvent::Started);
    s.apply(ReportsEvent::Failed("Error 500: boom".to_owned()));
    assert!(!s.loading);
    assert_eq!(s.error.as_deref(), Some("Error 500: boom"));
    assert_eq!(s.rows, Some(vec![row("a")]));
}

#[test]
fn rejected_sets_error_without_touching_loading() {
    let mut s = ReportsState::default();
    s.apply(ReportsEvent::Rejected("Not authorized".to_owned()));
    assert!(!s.loading);
    assert_eq!(s.error.as_deref(), Some("Not authorized"));
    assert!(s.rows.is_none());
}
