//! Segment application over decoded JSON.

use serde_json::{Map, Value};

use crate::error::PathError;

enum Selection<'a> {
    /// A single-index segment addressed exactly one element.
    Single(&'a Value),
    /// A union or slice segment; may be empty.
    Many(Vec<&'a Value>),
}

pub(crate) fn recursive_get(data: &Value, path: &[String]) -> Result<Value, PathError> {
    let Some((segment, rest)) = path.split_first() else {
        return Ok(data.clone());
    };
    match data {
        Value::Null => Err(PathError::NotFound),
        Value::Array(values) => match filter_elements(values, segment)? {
            Selection::Single(value) => {
                if rest.is_empty() {
                    Ok(value.clone())
                } else {
                    recursive_get(value, rest)
                }
            }
            Selection::Many(selected) => {
                if rest.is_empty() {
                    return Ok(Value::Array(selected.into_iter().cloned().collect()));
                }
                let mut combined = Vec::new();
                for element in selected {
                    let result = recursive_get(element, rest)?;
                    append_result(&mut combined, result);
                }
                Ok(Value::Array(combined))
            }
        },
        Value::Object(map) => match map.get(segment.as_str()) {
            Some(value) => recursive_get(value, rest),
            None => Err(PathError::NotFound),
        },
        Value::String(text) => {
            // A string holding serialized JSON is transparently decoded,
            // but only an object can be addressed further.
            let decoded: Value =
                serde_json::from_str(text).map_err(|_| PathError::NotFound)?;
            let Value::Object(map) = decoded else {
                return Err(PathError::NotFound);
            };
            match map.get(segment.as_str()) {
                Some(value) => recursive_get(value, rest),
                None => Err(PathError::NotFound),
            }
        }
        _ => Err(PathError::NotFound),
    }
}

fn filter_elements<'a>(source: &'a [Value], filter: &str) -> Result<Selection<'a>, PathError> {
    let trimmed = filter.trim_matches(|c| c == '[' || c == ']');
    let parts: Vec<&str> = trimmed.split(',').collect();
    if parts.len() == 1 {
        let part = parts[0];
        if !part.contains(':') {
            let index = parse_index(part)?;
            return match value_by_index(source, index) {
                Some(value) => Ok(Selection::Single(value)),
                None => Err(PathError::BadIndex),
            };
        }
        let (from, to) = extract_slice_indices(part, source.len())?;
        let mut selected = Vec::new();
        for index in from..to {
            if let Some(value) = value_by_index(source, index) {
                selected.push(value);
            }
        }
        return Ok(Selection::Many(selected));
    }
    let mut selected = Vec::new();
    for part in parts {
        let index = parse_index(part)?;
        if let Some(value) = value_by_index(source, index) {
            selected.push(value);
        }
    }
    Ok(Selection::Many(selected))
}

/// Closed-form slice bounds: defaults depend on the sign of the present
/// side, both sides clamp into `[-n, n]`, and iteration resolves each
/// index by the negative-offset convention — which makes a negative-to-
/// positive range wrap around the array.
fn extract_slice_indices(source: &str, len: usize) -> Result<(i64, i64), PathError> {
    let parts: Vec<&str> = source.split(':').collect();
    let [from_text, to_text] = parts.as_slice() else {
        return Err(PathError::BadSliceDefinition);
    };
    let from_text = from_text.trim_matches(' ');
    let to_text = to_text.trim_matches(' ');
    let size = len as i64;
    if from_text.is_empty() && to_text.is_empty() {
        return Ok((0, size));
    }
    let mut from = 0i64;
    let mut to = 0i64;
    if !from_text.is_empty() {
        from = parse_index(from_text)?;
    }
    if !to_text.is_empty() {
        to = parse_index(to_text)?;
    }
    if from_text.is_empty() {
        from = if to >= 0 { 0 } else { -size };
    }
    if to_text.is_empty() {
        to = if from >= 0 { size } else { 0 };
    }
    from = if from > 0 { from.min(size) } else { from.max(-size) };
    to = if to > 0 { to.min(size) } else { to.max(-size) };
    Ok((from, to))
}

fn value_by_index(source: &[Value], index: i64) -> Option<&Value> {
    let size = source.len() as i64;
    if index >= size || index < -size {
        return None;
    }
    let actual = if index < 0 { size + index } else { index };
    source.get(actual as usize)
}

fn parse_index(token: &str) -> Result<i64, PathError> {
    let trimmed = token.trim_matches(' ');
    trimmed
        .parse::<i64>()
        .map_err(|_| PathError::BadIndexToken(trimmed.to_owned()))
}

fn append_result(dest: &mut Vec<Value>, result: Value) {
    match result {
        Value::Array(values) => dest.extend(values),
        other => dest.push(other),
    }
}

/// Upsert over maps. Any non-map node on the way — including missing ones —
/// is overwritten with a fresh map.
pub(crate) fn recursive_set(data: Value, value: Value, path: &[String]) -> Map<String, Value> {
    let mut map = match data {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    match path {
        [] => map,
        [segment] => {
            map.insert(segment.clone(), value);
            map
        }
        [segment, rest @ ..] => {
            let child = map.remove(segment.as_str()).unwrap_or(Value::Null);
            let nested = recursive_set(child, value, rest);
            map.insert(segment.clone(), Value::Object(nested));
            map
        }
    }
}
