//! The backend facade compiled predicates dispatch to.

use crate::checker::ExecutionChecker;
use crate::matcher::ExecutionMatcher;

/// Capability bundle combining the matcher and checker surfaces.
///
/// The expression layer never interprets the data model itself: every leaf
/// decision a compiled predicate makes goes through one of these
/// operations. Implementations typically decode bodies with the content
/// parser and address into decoded JSON with the path evaluator; none of
/// that is visible here.
pub trait ExecutionManager: ExecutionMatcher + ExecutionChecker {}

impl<T> ExecutionManager for T where T: ExecutionMatcher + ExecutionChecker {}
