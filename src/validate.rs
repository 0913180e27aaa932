//! Structural validators for untrusted tour documents.
//!
//! Each check looks only at the fields needed to read a value safely and
//! accepts everything else unchecked. Fields not named here (`id`, `body`,
//! `childStops`, `description`, `protocolVersion`, `generator`) may be
//! missing or of any type. Stop repositories are not cross-checked against
//! the file's `repositories` list.
//!
//! All three are total: any input shape, including `null`, yields a bool.

use serde_json::Value;

/// True if `obj.repository` and `obj.commit` are strings.
#[must_use]
pub fn valid_repo_state(obj: &Value) -> bool {
    is_string(obj, "repository") && is_string(obj, "commit")
}

/// True if `title`, `relPath` and `repository` are strings and `line` is a number.
#[must_use]
pub fn valid_tour_stop(obj: &Value) -> bool {
    is_string(obj, "title")
        && is_number(obj, "line")
        && is_string(obj, "relPath")
        && is_string(obj, "repository")
}

/// True if `title` and `version` are strings and every entry of `stops`
/// and `repositories` passes its own check.
///
/// `stops` and `repositories` must be arrays; anything else fails.
#[must_use]
pub fn valid_tour_file(obj: &Value) -> bool {
    is_string(obj, "title")
        && is_string(obj, "version")
        && every(obj, "stops", valid_tour_stop)
        && every(obj, "repositories", valid_repo_state)
}

fn is_string(obj: &Value, field: &str) -> bool {
    obj.get(field).is_some_and(Value::is_string)
}

fn is_number(obj: &Value, field: &str) -> bool {
    obj.get(field).is_some_and(Value::is_number)
}

fn every(obj: &Value, field: &str, check: fn(&Value) -> bool) -> bool {
    obj.get(field)
        .and_then(Value::as_array)
        .is_some_and(|items| items.iter().all(check))
}
