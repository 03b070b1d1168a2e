use thiserror::Error;

/// Errors from path parsing, navigation, and the typed getters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PathError {
    /// The path text does not follow the grammar.
    #[error("bad JSON path")]
    BadPath,
    /// Navigation reached a value the next segment cannot address.
    #[error("not found")]
    NotFound,
    /// A single index pointing outside the array.
    #[error("bad index")]
    BadIndex,
    /// A bracket token that should be an integer but is not.
    #[error("bad index token: {0}")]
    BadIndexToken(String),
    /// A slice with more or fewer than two sides.
    #[error("bad slice definition")]
    BadSliceDefinition,
    /// `get_number` resolved an array whose head is not a number.
    #[error("get number: wrong type")]
    WrongNumberType,
    /// `get_bool` resolved a non-boolean.
    #[error("must return bool")]
    NotABool,
    /// `get_number` resolved a non-number.
    #[error("must return number")]
    NotANumber,
    /// `get_string` resolved a non-string.
    #[error("must return string")]
    NotAString,
    /// `get_map` resolved a non-object.
    #[error("must return map")]
    NotAMap,
    /// `get_slice` resolved a non-array.
    #[error("must be an array")]
    NotAnArray,
    /// `get_time` resolved a non-string.
    #[error("time must be a string")]
    TimeNotAString,
    /// `get_time` resolved a string that is not RFC 3339.
    #[error("bad time format: {0}")]
    BadTimeFormat(chrono::ParseError),
    /// `set` at the root path only accepts representable JSON values.
    #[error("cannot set a value of this type at the root path")]
    BadRootValue,
}
