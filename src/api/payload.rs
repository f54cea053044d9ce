//! API error payload normalization
//!
//! The API reports failures with several body shapes: a top-level
//! `message`, a nested `error.message`, or a `details` list of field-level
//! validation problems. None of these can be relied on to be present, so
//! the body is inspected as loose JSON and flattened into a single
//! human-readable message.

use serde_json::Value;

/// Flatten an arbitrary error body into one display message
///
/// Priority order:
/// 1. the first `details` element with a non-empty `issue`, formatted as
///    `"Field Name: issue"` when it names a field,
/// 2. the top-level `message`,
/// 3. the nested `error.message`,
/// 4. the supplied fallback.
pub fn normalize_error(payload: &Value, fallback: &str) -> String {
    let Some(object) = payload.as_object() else {
        return fallback.to_string();
    };

    if let Some(details) = object.get("details").and_then(Value::as_array) {
        let first = details.iter().find_map(|detail| {
            let issue = detail.get("issue")?.as_str()?;
            if issue.is_empty() {
                None
            } else {
                Some((detail, issue))
            }
        });

        if let Some((detail, issue)) = first {
            let field = detail.get("field").and_then(Value::as_str);
            match field {
                Some(field) if !field.is_empty() => {
                    return format!("{}: {}", format_field_name(field), issue);
                }
                _ => return issue.to_string(),
            }
        }
    }

    if let Some(message) = non_empty_str(object.get("message")) {
        return message.to_string();
    }

    if let Some(message) = non_empty_str(object.get("error").and_then(|e| e.get("message"))) {
        return message.to_string();
    }

    fallback.to_string()
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

/// Title-case a dotted field path for display
///
/// Segments are split on `.`, underscores become spaces, and each word's
/// first letter is uppercased: `"shipping.zip_code"` -> `"Shipping Zip Code"`.
pub fn format_field_name(field: &str) -> String {
    field
        .split('.')
        .map(|segment| {
            segment
                .replace('_', " ")
                .trim()
                .split_whitespace()
                .map(capitalize_first)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const FALLBACK: &str = "Request failed";

    #[test]
    fn test_non_object_payloads_fall_back() {
        assert_eq!(normalize_error(&Value::Null, FALLBACK), FALLBACK);
        assert_eq!(normalize_error(&json!("oops"), FALLBACK), FALLBACK);
        assert_eq!(normalize_error(&json!(42), FALLBACK), FALLBACK);
        assert_eq!(normalize_error(&json!(["a", "b"]), FALLBACK), FALLBACK);
    }

    #[test]
    fn test_empty_object_falls_back() {
        assert_eq!(normalize_error(&json!({}), FALLBACK), FALLBACK);
    }

    #[test]
    fn test_detail_with_field() {
        let payload = json!({
            "details": [{ "field": "full_name", "issue": "is required" }]
        });
        assert_eq!(
            normalize_error(&payload, FALLBACK),
            "Full Name: is required"
        );
    }

    #[test]
    fn test_detail_without_field() {
        let payload = json!({
            "details": [{ "issue": "something went wrong" }]
        });
        assert_eq!(normalize_error(&payload, FALLBACK), "something went wrong");
    }

    #[test]
    fn test_first_detail_with_issue_wins() {
        let payload = json!({
            "details": [
                { "field": "email" },
                { "field": "password", "issue": "too short" },
                { "field": "full_name", "issue": "is required" }
            ]
        });
        assert_eq!(normalize_error(&payload, FALLBACK), "Password: too short");
    }

    #[test]
    fn test_details_take_priority_over_message() {
        let payload = json!({
            "message": "top-level",
            "details": [{ "field": "email", "issue": "is invalid" }]
        });
        assert_eq!(normalize_error(&payload, FALLBACK), "Email: is invalid");
    }

    #[test]
    fn test_empty_details_fall_through_to_message() {
        let payload = json!({ "message": "X", "details": [] });
        assert_eq!(normalize_error(&payload, FALLBACK), "X");
    }

    #[test]
    fn test_null_field_uses_issue_alone() {
        let payload = json!({
            "details": [{ "field": null, "issue": "is required" }]
        });
        assert_eq!(normalize_error(&payload, FALLBACK), "is required");
    }

    #[test]
    fn test_top_level_message() {
        assert_eq!(normalize_error(&json!({ "message": "X" }), FALLBACK), "X");
    }

    #[test]
    fn test_nested_error_message() {
        let payload = json!({ "error": { "message": "bad creds" } });
        assert_eq!(normalize_error(&payload, FALLBACK), "bad creds");
    }

    #[test]
    fn test_message_beats_nested_error() {
        let payload = json!({
            "message": "outer",
            "error": { "message": "inner" }
        });
        assert_eq!(normalize_error(&payload, FALLBACK), "outer");
    }

    #[test]
    fn test_empty_message_is_skipped() {
        let payload = json!({ "message": "", "error": { "message": "inner" } });
        assert_eq!(normalize_error(&payload, FALLBACK), "inner");
    }

    #[test]
    fn test_non_string_message_is_skipped() {
        let payload = json!({ "message": { "code": 1 } });
        assert_eq!(normalize_error(&payload, FALLBACK), FALLBACK);
    }

    #[test]
    fn test_format_field_name() {
        assert_eq!(format_field_name("full_name"), "Full Name");
        assert_eq!(format_field_name("shipping.zip_code"), "Shipping Zip Code");
        assert_eq!(format_field_name("email"), "Email");
        assert_eq!(format_field_name("a.b.c"), "A B C");
    }
}
