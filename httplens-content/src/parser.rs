//! Recursive orchestrator tying classification and the format parsers
//! together under shared resource limits.

use tracing::debug;

use crate::content::Content;
use crate::detector::{detect_probable_content_type, ContentType};
use crate::json::JsonDataParser;
use crate::state::ParseState;
use crate::xml::XmlDataParser;

/// Limits applied to one recursive classification.
///
/// `max_global_level` bounds structural nesting across the whole tree,
/// `max_local_level` bounds nesting within a single XML or JSON pass, and
/// `max_field_count` caps the entries of one JSON object or array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseParams {
    /// Total structural nesting budget, shared across alternating formats.
    pub max_global_level: usize,
    /// Nesting budget of a single parser pass.
    pub max_local_level: usize,
    /// Maximum entries per JSON object or array.
    pub max_field_count: usize,
}

/// Classifies `source` recursively. Never fails: any layer that does not
/// parse under the given limits is kept verbatim as [`Content::Text`],
/// and the surrounding tree stays intact.
pub fn parse_content(source: &str, params: &ParseParams) -> Content {
    let mut state = ParseState::new(params);
    parse_with_state(source, &mut state)
}

pub(crate) fn parse_with_state(source: &str, state: &mut ParseState) -> Content {
    let prepared = source.trim();
    let (data, content_type) = detect_probable_content_type(prepared);
    match content_type {
        ContentType::Unspecified => Content::Text(source.to_owned()),
        ContentType::Xml => match XmlDataParser::new(state).parse(&data) {
            Ok(xml) => Content::Xml(xml),
            Err(error) => {
                debug!(%error, "xml layer did not parse, keeping raw text");
                Content::Text(source.to_owned())
            }
        },
        ContentType::Json => match JsonDataParser::new(state).parse(&data) {
            Ok(json) => Content::Json(json),
            Err(error) => {
                debug!(%error, "json layer did not parse, keeping raw text");
                Content::Text(source.to_owned())
            }
        },
        ContentType::Base64 => {
            let inner = parse_with_state(&data, state);
            Content::Base64(Box::new(inner))
        }
    }
}
