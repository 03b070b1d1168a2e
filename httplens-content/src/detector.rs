//! One-shot classification of a prepared string.

use std::borrow::Cow;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Probable format of a string, decided by cheap shape checks and a decode
/// probe, in that priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// Nothing recognized; the string stays as-is.
    Unspecified,
    /// Angle-bracket shape.
    Xml,
    /// Curly- or square-bracket shape.
    Json,
    /// Strict standard Base64 with padding.
    Base64,
}

/// Classifies `source` and returns the string the matching parser should
/// consume. The input is expected to be already trimmed of leading and
/// trailing whitespace.
///
/// For [`ContentType::Base64`] the returned string is the decoded payload
/// (bytes viewed as text, lossily for non-UTF-8). Short tokens that happen
/// to be valid Base64 — `true`, `null` — classify as Base64; that is
/// accepted behavior, not a defect to heuristically suppress.
pub fn detect_probable_content_type(source: &str) -> (Cow<'_, str>, ContentType) {
    if source.starts_with('<') && source.ends_with('>') {
        return (Cow::Borrowed(source), ContentType::Xml);
    }
    if source.starts_with('{') && source.ends_with('}') {
        return (Cow::Borrowed(source), ContentType::Json);
    }
    if source.starts_with('[') && source.ends_with(']') {
        return (Cow::Borrowed(source), ContentType::Json);
    }
    if let Some(decoded) = try_parse_base64(source) {
        return (Cow::Owned(decoded), ContentType::Base64);
    }
    (Cow::Borrowed(source), ContentType::Unspecified)
}

fn try_parse_base64(source: &str) -> Option<String> {
    // "" decodes to "" and classification would never converge on it.
    if source.is_empty() {
        return None;
    }
    // Line breaks are transparent to the decode, as in MIME-wrapped bodies.
    let cleaned: Cow<'_, str> = if source.contains(['\r', '\n']) {
        Cow::Owned(
            source
                .chars()
                .filter(|ch| *ch != '\r' && *ch != '\n')
                .collect(),
        )
    } else {
        Cow::Borrowed(source)
    };
    let decoded = STANDARD.decode(cleaned.as_bytes()).ok()?;
    Some(String::from_utf8_lossy(&decoded).into_owned())
}
