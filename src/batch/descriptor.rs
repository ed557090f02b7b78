//! Parsing of the serialized `Lines` position descriptor.
//!
//! Smell datasets store positions as Python dict literals such as
//! `{'startLine': 10, 'endLine': 14}` or `{'line': 7}`. Single quotes are
//! normalised to double quotes and the result is decoded as JSON. A bare
//! integer is accepted as well.

use crate::core::{LocateError, Result};
use serde_json::Value;

/// Extract the target line from a `Lines` descriptor.
///
/// `startLine` is preferred when it is present and truthy; otherwise `line`
/// is used. The chosen value must be a positive integer.
pub fn parse_target_line(raw: &str) -> Result<usize> {
    let normalised = raw.trim().replace('\'', "\"");
    if normalised.is_empty() {
        return Err(LocateError::malformed("missing \"Lines\" field"));
    }

    let value: Value = serde_json::from_str(&normalised).map_err(|e| {
        LocateError::malformed(format!("invalid \"Lines\" descriptor {raw:?}: {e}"))
    })?;

    let candidate = match &value {
        Value::Object(fields) => fields
            .get("startLine")
            .filter(|v| is_truthy(v))
            .or_else(|| fields.get("line")),
        Value::Number(_) => Some(&value),
        _ => None,
    };

    candidate
        .and_then(Value::as_u64)
        .filter(|line| *line > 0)
        .and_then(|line| usize::try_from(line).ok())
        .ok_or_else(|| LocateError::malformed("invalid \"Lines\" field format"))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
