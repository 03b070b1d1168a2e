//! The tagged-sum output of recursive classification.

use crate::json::JsonData;
use crate::xml::XmlData;

/// Result of classifying one string.
///
/// Consumers pattern-match on this; there is deliberately no untyped
/// accessor. A leaf stays [`Content::Text`] when no structure was
/// recognized, or when the recognized structure failed to parse within the
/// configured limits.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// Unrecognized or decoded-as-plain text.
    Text(String),
    /// A parsed XML document.
    Xml(XmlData),
    /// A parsed JSON document.
    Json(JsonData),
    /// A Base64 layer wrapping whatever its decoded bytes classified as.
    Base64(Box<Content>),
}

impl Content {
    /// Plain text leaf.
    pub fn text(value: impl Into<String>) -> Self {
        Content::Text(value.into())
    }

    /// Base64 layer around already-classified inner content.
    pub fn base64(inner: Content) -> Self {
        Content::Base64(Box::new(inner))
    }
}
