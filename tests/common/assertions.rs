//! Assertion helpers for tests.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert response is an HTML page and return its body
pub fn assert_html(response: &TestResponse) -> String {
    assert_ok(response);
    let content_type = response.content_type().unwrap_or_default();
    assert!(
        content_type.starts_with("text/html"),
        "Expected HTML, got Content-Type {content_type:?}"
    );
    response.text()
}

/// Assert a colour page shows the given colour (uppercase hex, no `#`)
/// with the given text colour (`#RRGGBB`)
pub fn assert_colour_page(response: &TestResponse, hex: &str, foreground: &str) {
    let html = assert_html(response);
    assert!(
        html.contains(&format!("<title>#{hex} - Pinea Colours</title>")),
        "Expected title for #{hex}. Body: {html}"
    );
    assert!(
        html.contains(&format!(r##"<meta name="theme-color" content="#{hex}">"##)),
        "Expected theme-color #{hex}"
    );
    assert!(
        html.contains(&format!("background-color: #{hex}; color: {foreground}")),
        "Expected #{hex} background with {foreground} text"
    );
}

/// Assert JSON response has expected status field
pub fn assert_json_status(response: &TestResponse, expected_status: u16) {
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected_status as u64),
        "Expected JSON status {}, got {:?}. Full response: {}",
        expected_status,
        json["status"],
        serde_json::to_string_pretty(&json).unwrap()
    );
}

/// Assert a colour API response resolved to the given `#RRGGBB` colour
pub fn assert_resolved(response: &TestResponse, hex: &str, source: &str) {
    assert_ok(response);
    let json: serde_json::Value = response.json();
    assert_eq!(json["formats"]["hex"], hex, "Full response: {json}");
    assert_eq!(json["source"], source, "Full response: {json}");
}
