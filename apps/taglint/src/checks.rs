//! Structural and field checks over a decoded tag document.
//!
//! Order of findings is fixed: all structural findings first, then field
//! findings and tag-rule warnings item by item.

use crate::line_index::LineIndex;
use crate::models::Report;
use crate::rules::Registry;
use serde_json::{Map, Value as Json};

pub const TAG_KEY: &str = "tagKey";
pub const VALUE: &str = "value";

/// Run every check against `doc`, appending to `report`.
pub fn run_checks(doc: &Json, lines: &LineIndex, registry: &Registry, report: &mut Report) {
    check_structure(doc, lines, report);
    check_fields(doc, lines, registry, report);
}

/// The document must be an array of objects. An empty array only warns.
pub fn check_structure(doc: &Json, lines: &LineIndex, report: &mut Report) {
    let items = match doc {
        Json::Array(items) => items,
        _ => {
            report.error("JSON should be an array");
            return;
        }
    };
    if items.is_empty() {
        report.warn("Array is empty");
    }
    for (i, item) in items.iter().enumerate() {
        if !item.is_object() {
            report.error(format!("Item {} should be an object{}", i, lines.suffix(i)));
        }
    }
}

/// Presence, type and emptiness of `tagKey`/`value` on each object, followed
/// by the tag rule for the item's key. Non-objects were reported by
/// `check_structure` and are skipped.
pub fn check_fields(doc: &Json, lines: &LineIndex, registry: &Registry, report: &mut Report) {
    let Json::Array(items) = doc else {
        return;
    };
    for (i, item) in items.iter().enumerate() {
        if let Json::Object(obj) = item {
            check_item(i, obj, &lines.suffix(i), registry, report);
        }
    }
}

fn check_item(
    i: usize,
    obj: &Map<String, Json>,
    line_info: &str,
    registry: &Registry,
    report: &mut Report,
) {
    let tag_key = obj.get(TAG_KEY);
    let value = obj.get(VALUE);
    let label = match tag_key {
        Some(Json::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => format!("Item {}", i),
    };

    if tag_key.is_none() {
        report.error(format!("Missing '{}' at position {}{}", TAG_KEY, i, line_info));
    }
    if value.is_none() {
        report.error(format!("Missing '{}' for '{}'{}", VALUE, label, line_info));
    }

    match tag_key {
        Some(Json::String(s)) if s.trim().is_empty() => {
            report.warn(format!("Empty '{}' at position {}{}", TAG_KEY, i, line_info));
        }
        Some(Json::String(_)) | None => {}
        Some(_) => {
            report.warn(format!(
                "'{}' at position {} should be a string{}",
                TAG_KEY, i, line_info
            ));
        }
    }
    match value {
        Some(Json::String(s)) if s.trim().is_empty() => {
            report.warn(format!("Empty '{}' for '{}'{}", VALUE, label, line_info));
        }
        Some(Json::String(_)) | None => {}
        Some(_) => {
            report.warn(format!(
                "'{}' for '{}' should be a string{}",
                VALUE, label, line_info
            ));
        }
    }

    registry.validate(as_str(tag_key), as_str(value), line_info, report);
}

/// Strings pass through; absent or non-string fields read as empty.
fn as_str(v: Option<&Json>) -> &str {
    v.and_then(Json::as_str).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn check(doc: Json) -> Report {
        let mut r = Report::new();
        run_checks(&doc, &LineIndex::default(), &Registry::builtin(), &mut r);
        r
    }

    #[test]
    fn test_non_array_stops_after_one_error() {
        let r = check(json!({"a": 1}));
        assert_eq!(r.errors, vec!["JSON should be an array"]);
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn test_empty_array_warns() {
        let r = check(json!([]));
        assert!(r.errors.is_empty());
        assert_eq!(r.warnings, vec!["Array is empty"]);
    }

    #[test]
    fn test_non_object_items_are_errors_and_skipped() {
        let r = check(json!([1, {"tagKey": "Owner", "value": "x"}, "s"]));
        assert_eq!(
            r.errors,
            vec!["Item 0 should be an object", "Item 2 should be an object"]
        );
        assert!(r.warnings.is_empty());
    }

    #[test]
    fn test_missing_fields() {
        let r = check(json!([{"value": "x"}, {"tagKey": "Owner"}, {}]));
        assert_eq!(
            r.errors,
            vec![
                "Missing 'tagKey' at position 0",
                "Missing 'value' for 'Owner'",
                "Missing 'tagKey' at position 2",
                "Missing 'value' for 'Item 2'",
            ]
        );
    }

    #[test]
    fn test_empty_fields_warn() {
        let r = check(json!([{"tagKey": "  ", "value": "\t"}]));
        assert!(r.errors.is_empty());
        assert_eq!(
            r.warnings,
            vec!["Empty 'tagKey' at position 0", "Empty 'value' for '  '"]
        );
    }

    #[test]
    fn test_non_string_fields_warn_without_panicking() {
        let r = check(json!([
            {"tagKey": 7, "value": null},
            {"tagKey": "Environment", "value": 3}
        ]));
        assert!(r.errors.is_empty());
        assert_eq!(
            r.warnings,
            vec![
                "'tagKey' at position 0 should be a string",
                "'value' for '7' should be a string",
                "'value' for 'Environment' should be a string",
            ]
        );
    }

    #[test]
    fn test_non_string_tag_key_is_used_as_label() {
        let r = check(json!([{"tagKey": 7}, {"tagKey": {"k": "v"}}]));
        assert_eq!(
            r.errors,
            vec![
                "Missing 'value' for '7'",
                "Missing 'value' for '{\"k\":\"v\"}'",
            ]
        );
    }

    #[test]
    fn test_tag_rule_runs_after_field_checks() {
        let r = check(json!([
            {"tagKey": "Environment", "value": "qa"},
            {"tagKey": "Data Classification", "value": "   "}
        ]));
        assert_eq!(r.warnings.len(), 3);
        assert!(r.warnings[0].starts_with("Invalid Environment 'qa'"));
        assert_eq!(r.warnings[1], "Empty 'value' for 'Data Classification'");
        // whitespace is not empty for the tag rule
        assert!(r.warnings[2].starts_with("Invalid Data Classification '   '"));
    }

    #[test]
    fn test_line_suffix_is_attached() {
        let src = "[\n  {\"value\": \"x\"}\n]";
        let doc: Json = serde_json::from_str(src).unwrap();
        let mut r = Report::new();
        run_checks(&doc, &LineIndex::build(src), &Registry::builtin(), &mut r);
        assert_eq!(r.errors, vec!["Missing 'tagKey' at position 0 (line 2)"]);
    }
}
