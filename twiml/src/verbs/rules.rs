//! Attribute checks shared by several verbs

use crate::types::MarkupError;

pub(crate) const HTTP_METHODS: &str = "GET or POST";

pub(crate) const DTMF_KEYS: &str = "0123456789#*";

pub(crate) const TRIM_VALUES: &[&str] = &["trim-silence", "do-not-trim"];

pub(crate) const CALL_PROGRESS_EVENTS: &[&str] = &["initiated", "ringing", "answered", "completed"];

/// Check a `method`-style attribute
pub(crate) fn check_method(
    element: &'static str,
    attribute: &'static str,
    value: &Option<String>,
    errors: &mut Vec<MarkupError>,
) {
    if let Some(method) = value {
        if !method.eq_ignore_ascii_case("GET") && !method.eq_ignore_ascii_case("POST") {
            errors.push(MarkupError::invalid(element, attribute, method, HTTP_METHODS));
        }
    }
}

/// Check that an attribute is one of a fixed set of values
pub(crate) fn check_one_of(
    element: &'static str,
    attribute: &'static str,
    value: &Option<String>,
    allowed: &[&str],
    expected: &'static str,
    errors: &mut Vec<MarkupError>,
) {
    if let Some(v) = value {
        if !allowed.contains(&v.as_str()) {
            errors.push(MarkupError::invalid(element, attribute, v, expected));
        }
    }
}

/// Check a space-separated list of event names
pub(crate) fn check_events(
    element: &'static str,
    attribute: &'static str,
    value: &Option<String>,
    allowed: &[&str],
    expected: &'static str,
    errors: &mut Vec<MarkupError>,
) {
    if let Some(events) = value {
        if let Some(bad) = events.split_whitespace().find(|e| !allowed.contains(e)) {
            errors.push(MarkupError::invalid(element, attribute, bad, expected));
        }
    }
}

/// Check that every character of an attribute comes from `keys`
pub(crate) fn check_keys(
    element: &'static str,
    attribute: &'static str,
    value: &Option<String>,
    keys: &str,
    expected: &'static str,
    errors: &mut Vec<MarkupError>,
) {
    if let Some(v) = value {
        if !v.chars().all(|c| keys.contains(c)) {
            errors.push(MarkupError::invalid(element, attribute, v, expected));
        }
    }
}

/// Check required character content
pub(crate) fn require_text(
    element: &'static str,
    field: &'static str,
    value: &str,
    errors: &mut Vec<MarkupError>,
) {
    if value.trim().is_empty() {
        errors.push(MarkupError::missing(element, field));
    }
}
