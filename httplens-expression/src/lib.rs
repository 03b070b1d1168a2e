//! # httplens-expression
//!
//! A compact predicate language over an HTTP inspection data model.
//!
//! A textual expression such as `AND(EXISTS(1),MATCH(1,666))` compiles —
//! against lookup tables of data paths and comparison arguments — into a
//! [`Predicate`]: an immutable closure evaluating one [`HttpData`] record
//! through an abstract [`ExecutionManager`] backend.
//!
//! The split of responsibilities is strict:
//!
//! - the **compiler** resolves indexes and binds each `CHECK` / `EXISTS`
//!   / `MATCH` leaf to the backend operation selected by its top-level
//!   key and content-path shape — all structural errors are compile-time;
//! - the **evaluator** forwards; `AND`/`OR` short-circuit left to right,
//!   and an error after an `OR` branch already returned `true` is never
//!   observed;
//! - the **backend** owns every leaf decision: pattern storage, value
//!   extraction, recursive decoding of bodies.

pub mod checker;
mod data;
mod data_path;
mod error;
pub mod manager;
pub mod matcher;
mod parser;
mod predicate;

pub use checker::ExecutionChecker;
pub use data::{
    BasicAuthData, BrowserData, ClientData, GeoIpData, HttpData, OsData, RequestData,
    ResponseData, ValueBag,
};
pub use data_path::{ContentPath, DataKey, DataPath};
pub use error::{ExecutionError, ExpressionError};
pub use manager::ExecutionManager;
pub use matcher::ExecutionMatcher;
pub use parser::{parse_expression_tree, ParseStorage};
pub use predicate::{evaluate, ExecutionResult, Operation, PatternId, Predicate, ValuePredicate};
