#![warn(missing_docs)]
//! # httplens
//!
//! Content-introspection and predicate-evaluation toolkit for HTTP
//! traffic inspection.
//!
//! Three cooperating subsystems, re-exported here under one roof:
//!
//! - [`content`] — recursive content classification: an opaque string
//!   becomes a typed tree of XML / JSON / Base64 layers, nested formats
//!   and all, bounded by local and global depth budgets and never failing
//!   (unparseable layers stay as text);
//! - [`jsonpath`] — index, slice, union and nested-name navigation over
//!   decoded JSON, with typed getters and a recursive upsert;
//! - [`expression`] — a compact `AND`/`OR`/`NOT`/`CHECK`/`EXISTS`/`MATCH`
//!   predicate language compiled into closures that dispatch to an
//!   abstract execution backend over an HTTP data context.
//!
//! A typical backend implementation answers body-related operations by
//! feeding the body through [`content::parse_content`] and addressing
//! decoded JSON with [`jsonpath::Path`]; the expression layer sees none
//! of that, only booleans and errors.

pub use httplens_content as content;
pub use httplens_expression as expression;
pub use httplens_jsonpath as jsonpath;

pub use httplens_content::{parse_content, Content, ParseParams};
pub use httplens_expression::{evaluate, parse_expression_tree, ExecutionManager, HttpData};
pub use httplens_jsonpath::Path;
