//! # httplens-content
//!
//! Recursive content classification for HTTP traffic inspection.
//!
//! An HTTP body (or header value, or cookie) is often not what it claims to
//! be: a JSON string field may carry an XML document, an XML text node may
//! carry a Base64-encoded JSON payload, and so on. This crate takes an
//! opaque string and produces a typed [`Content`] tree that captures the
//! outermost recognizable structure and recursively classifies every inner
//! string leaf.
//!
//! ## Entry point
//!
//! [`parse_content`] never fails. Whenever a layer does not parse — bad
//! syntax, depth budget exhausted, too many fields — that layer degrades to
//! a [`Content::Text`] leaf holding the original string, and the rest of
//! the tree is kept intact.
//!
//! ## Resource limits
//!
//! Work is bounded by [`ParseParams`]:
//!
//! - `max_local_level` bounds nesting inside a single parser pass (XML
//!   element depth within one document, JSON container depth within one
//!   document);
//! - `max_global_level` bounds total structural nesting across alternating
//!   formats (a JSON object inside an XML element inside a JSON array all
//!   draw from the same budget);
//! - `max_field_count` caps entries of a single JSON object or array.

pub mod content;
pub mod detector;
mod error;
pub mod json;
pub mod parser;
pub mod printer;
mod state;
pub mod xml;

pub use content::Content;
pub use detector::{detect_probable_content_type, ContentType};
pub use error::ContentError;
pub use json::{JsonData, JsonValue};
pub use parser::{parse_content, ParseParams};
pub use printer::pretty;
pub use xml::{XmlAttribute, XmlData, XmlElement, XmlName};
