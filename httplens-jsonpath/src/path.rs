//! The public path handle and its typed accessors.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::PathError;
use crate::eval::{recursive_get, recursive_set};
use crate::parser::parse_path_string;

/// A parsed JSON path.
///
/// The data it navigates must come from a JSON decode, i.e. plain
/// `serde_json::Value` trees; this is what guarantees the type universe
/// the getters dispatch over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    segments: Vec<String>,
}

impl Path {
    /// Parses path text. A bare `$` yields the empty path.
    pub fn new(source: &str) -> Result<Self, PathError> {
        Ok(Self {
            segments: parse_path_string(source)?,
        })
    }

    /// The parsed segment list; bracket segments keep their brackets.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Resolves the path. The empty path returns the input verbatim.
    pub fn get(&self, input: &Value) -> Result<Value, PathError> {
        recursive_get(input, &self.segments)
    }

    /// Resolves to an object.
    pub fn get_map(&self, input: &Value) -> Result<Map<String, Value>, PathError> {
        match self.get(input)? {
            Value::Object(map) => Ok(map),
            _ => Err(PathError::NotAMap),
        }
    }

    /// Resolves to a boolean.
    pub fn get_bool(&self, input: &Value) -> Result<bool, PathError> {
        match self.get(input)? {
            Value::Bool(flag) => Ok(flag),
            _ => Err(PathError::NotABool),
        }
    }

    /// Resolves to a number.
    pub fn get_number(&self, input: &Value) -> Result<f64, PathError> {
        match self.get(input)? {
            Value::Number(number) => number.as_f64().ok_or(PathError::NotANumber),
            // Longstanding surface behavior: an array whose head is a
            // number resolves to zero, anything else is a type error.
            Value::Array(values) => match values.first() {
                Some(Value::Number(_)) => Ok(0.0),
                _ => Err(PathError::WrongNumberType),
            },
            _ => Err(PathError::NotANumber),
        }
    }

    /// Resolves to a string.
    pub fn get_string(&self, input: &Value) -> Result<String, PathError> {
        match self.get(input)? {
            Value::String(text) => Ok(text),
            _ => Err(PathError::NotAString),
        }
    }

    /// Resolves to an array.
    pub fn get_slice(&self, input: &Value) -> Result<Vec<Value>, PathError> {
        match self.get(input)? {
            Value::Array(values) => Ok(values),
            _ => Err(PathError::NotAnArray),
        }
    }

    /// Resolves to an RFC 3339 timestamp.
    pub fn get_time(&self, input: &Value) -> Result<DateTime<FixedOffset>, PathError> {
        match self.get(input)? {
            Value::String(text) => {
                DateTime::parse_from_rfc3339(&text).map_err(PathError::BadTimeFormat)
            }
            _ => Err(PathError::TimeNotAString),
        }
    }

    /// Writes `value` at the path and returns the updated tree.
    ///
    /// The empty path returns `value` itself, provided it is a
    /// representable JSON value (`null` is not accepted there). Otherwise
    /// this is a recursive upsert over objects: intermediate maps are
    /// created as needed and any non-map node on the way is overwritten.
    pub fn set(&self, input: Value, value: Value) -> Result<Value, PathError> {
        if self.segments.is_empty() {
            return match value {
                Value::Object(_)
                | Value::Array(_)
                | Value::Number(_)
                | Value::String(_)
                | Value::Bool(_) => Ok(value),
                Value::Null => Err(PathError::BadRootValue),
            };
        }
        Ok(Value::Object(recursive_set(input, value, &self.segments)))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$.{}", self.segments.join("."))
    }
}

impl Serialize for Path {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.segments.is_empty() {
            serializer.serialize_str("$")
        } else {
            serializer.serialize_str(&self.to_string())
        }
    }
}

impl<'de> Deserialize<'de> for Path {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Path::new(&text).map_err(D::Error::custom)
    }
}
