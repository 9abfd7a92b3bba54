use super::*;

#[test]
fn http_api_targets_reports_endpoint() {
    assert_eq!(HttpReportsApi::new("http://localhost:8000").url(), "http://localhost:8000/reports");
    assert_eq!(HttpReportsApi::new("http://localhost:8000/").url(), "http://localhost:8000/reports");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_api_is_unavailable_off_browser() {
    let api = HttpReportsApi::new("http://localhost:8000");
    let result = futures::executor::block_on(api.fetch_reports("token"));
    assert!(matches!(result, Err(FetchError::Network(_))));
}
