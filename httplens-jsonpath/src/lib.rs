//! # httplens-jsonpath
//!
//! A small JSON-path dialect over decoded JSON (`serde_json::Value`):
//! dotted names, quoted names, `[i]` indexing with negative offsets,
//! `[i,j,k]` unions and `[from:to]` slices — including the wrap-around
//! range where a negative `from` meets a positive `to`.
//!
//! ```
//! use httplens_jsonpath::Path;
//! use serde_json::json;
//!
//! let path = Path::new("$.data.[-1].id").unwrap();
//! let data = json!({"data": [{"id": 666}, {"id": 667}]});
//! assert_eq!(path.get(&data).unwrap(), json!(667));
//! ```

mod error;
mod eval;
mod parser;
mod path;

pub use error::PathError;
pub use path::Path;
