//! Compiled predicates and the thin evaluation entry.

use std::sync::Arc;

use serde_json::Value;

use crate::data::HttpData;
use crate::error::{ExecutionError, ExpressionError};
use crate::manager::ExecutionManager;

/// Opaque pattern handle; the backend owns pattern storage.
pub type PatternId = u32;

/// What every backend operation returns.
pub type ExecutionResult = Result<bool, ExecutionError>;

/// Leaf-value comparison handed to the backend by `CHECK` forms. Opaque to
/// the backend: it applies the closure to candidate values and never looks
/// inside.
pub type ValuePredicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// A compiled expression. Immutable after construction and shareable
/// across threads; evaluation needs only the data context and a backend.
pub type Predicate = Box<dyn Fn(&HttpData, &dyn ExecutionManager) -> ExecutionResult + Send + Sync>;

/// Comparison operator of a `CHECK` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Deep value equality against the indexed argument.
    Equal,
    /// Negation of [`Operation::Equal`].
    NotEqual,
}

impl Operation {
    /// Decodes the numeric operation code of the surface syntax.
    pub fn from_code(code: usize) -> Result<Self, ExpressionError> {
        match code {
            0 => Ok(Operation::Equal),
            1 => Ok(Operation::NotEqual),
            _ => Err(ExpressionError::UnsupportedOperation),
        }
    }

    /// Builds the value predicate comparing candidates against `argument`.
    /// The comparison is the raw deep equality of decoded JSON values; no
    /// type coercion happens on either side.
    pub fn into_predicate(self, argument: Value) -> ValuePredicate {
        match self {
            Operation::Equal => Arc::new(move |value| *value == argument),
            Operation::NotEqual => Arc::new(move |value| *value != argument),
        }
    }
}

/// Runs a compiled predicate. All per-operation semantics live in the
/// backend; this forwards and nothing more.
pub fn evaluate(
    predicate: &Predicate,
    data: &HttpData,
    manager: &dyn ExecutionManager,
) -> ExecutionResult {
    predicate(data, manager)
}
