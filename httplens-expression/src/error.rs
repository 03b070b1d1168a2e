use thiserror::Error;

/// Compile-time failures of the expression language. These are fatal: a
/// source that trips any of them yields no predicate.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionError {
    /// Broken surface syntax: unterminated parentheses, stray content,
    /// tokens that are not non-negative integers.
    #[error("parse error")]
    Parse,
    /// An argument list of the wrong arity, or an index outside the
    /// supplied tables.
    #[error("bad args")]
    BadArgs,
    /// An expression head other than AND/OR/NOT/CHECK/EXISTS/MATCH.
    #[error("unknown expression")]
    UnknownExpression,
    /// An operation code outside the supported comparison set.
    #[error("unsupported operation")]
    UnsupportedOperation,
    /// A top-level key the requested form cannot dispatch on.
    #[error("unknown main path")]
    UnknownMainPath,
    /// A content path whose shape the top-level key does not allow.
    #[error("bad content path")]
    BadContentPath,
    /// A `RequestPaths` tail whose first part is not an integer index.
    #[error("bad request path index")]
    BadRequestPathIndex,
}

/// Runtime failure reported by a backend operation. Propagates to the
/// caller of `evaluate` under the short-circuit rules of AND and OR.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// Failure message raised directly by a backend implementation.
    #[error("{0}")]
    Message(String),
    /// A wrapped lower-level error.
    #[error(transparent)]
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

impl ExecutionError {
    /// Failure with a plain message.
    pub fn message(text: impl Into<String>) -> Self {
        ExecutionError::Message(text.into())
    }

    /// Failure wrapping a source error.
    pub fn internal(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        ExecutionError::Internal(Box::new(error))
    }
}
