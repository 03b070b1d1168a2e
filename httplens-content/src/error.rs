use thiserror::Error;

/// Errors raised while parsing one content layer.
///
/// These never escape [`parse_content`](crate::parse_content): the
/// orchestrator absorbs them and keeps the failing layer as raw text. They
/// are visible on the crate-internal parser entry points, which is where
/// the unit tests pin the taxonomy down.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContentError {
    /// A depth counter (local or global) ran out of budget.
    #[error("max level exceeded")]
    MaxLevelExceeded,
    /// Input ended in the middle of a construct.
    #[error("unexpected EOF")]
    UnexpectedEof,
    /// A token that no rule of the current construct accepts.
    #[error("unexpected value")]
    UnexpectedValue,
    /// A JSON document with trailing content after the first value.
    #[error("bad json structure")]
    BadJsonStructure,
    /// A JSON object or array with more entries than allowed.
    #[error("max field count exceeded")]
    MaxFieldCountExceeded,
    /// A JSON object field name that is not a string.
    #[error("bad field name")]
    BadFieldName,
    /// A JSON array closed by the wrong delimiter.
    #[error("unexpected end of array")]
    UnexpectedEndOfArray,
    /// A JSON object closed by the wrong delimiter.
    #[error("unexpected end of object")]
    UnexpectedEndOfObject,
    /// Malformed XML outside of element matching: stray top-level text,
    /// a second root, broken markup.
    #[error("bad xml structure")]
    BadXmlStructure,
    /// A closing tag that does not match the element being parsed.
    #[error("unexpected end element")]
    UnexpectedEndElement,
}
