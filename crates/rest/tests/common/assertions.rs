//! HAL response assertions.

use axum_test::TestResponse;
use serde_json::Value;

/// Asserts that a HAL document has exactly the given link relations.
pub fn assert_link_rels(body: &Value, expected: &[&str]) {
    let links = body["_links"]
        .as_object()
        .unwrap_or_else(|| panic!("Expected _links object in {}", body));
    let mut actual: Vec<&str> = links.keys().map(String::as_str).collect();
    let mut expected = expected.to_vec();
    actual.sort_unstable();
    expected.sort_unstable();
    assert_eq!(actual, expected, "Unexpected link relations in {}", body);
}

/// Returns the href of a link relation.
pub fn link_href<'a>(body: &'a Value, rel: &str) -> &'a str {
    body["_links"][rel]["href"]
        .as_str()
        .unwrap_or_else(|| panic!("Expected {} link in {}", rel, body))
}

/// Asserts that the response is served as HAL.
pub fn assert_hal_content_type(response: &TestResponse) {
    let content_type = response.header("content-type");
    assert_eq!(
        content_type.to_str().unwrap_or_default(),
        "application/hal+json"
    );
}

/// Returns the field names reported in a validation error body.
pub fn error_fields(body: &Value) -> Vec<String> {
    body["fieldErrors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["field"].as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}
