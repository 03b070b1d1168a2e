//! Pull lexer for XML-shaped input.
//!
//! Produces the token stream the tree builder consumes: start/end
//! elements, character data (entities resolved, CDATA included), comments,
//! processing instructions, and `<!...>` directives kept as raw text.
//! Non-validating beyond what the tokens themselves require.

use crate::error::ContentError;
use crate::xml::{XmlAttribute, XmlName};

#[derive(Debug, PartialEq)]
pub(crate) enum XmlToken {
    StartElement {
        name: XmlName,
        attributes: Vec<XmlAttribute>,
        self_closing: bool,
    },
    EndElement {
        name: XmlName,
    },
    CharData(String),
    Comment,
    ProcessingInstruction,
    Directive(String),
}

pub(crate) struct XmlLexer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> XmlLexer<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    pub(crate) fn next_token(&mut self) -> Result<Option<XmlToken>, ContentError> {
        if self.pos >= self.source.len() {
            return Ok(None);
        }
        if self.peek() == Some(b'<') {
            self.read_markup().map(Some)
        } else {
            self.read_char_data().map(Some)
        }
    }

    fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\r' | b'\n')) {
            self.pos += 1;
        }
    }

    fn read_char_data(&mut self) -> Result<XmlToken, ContentError> {
        let rest = self.rest();
        let end = rest.find('<').unwrap_or(rest.len());
        let raw = &rest[..end];
        self.pos += end;
        Ok(XmlToken::CharData(unescape(raw)?))
    }

    fn read_markup(&mut self) -> Result<XmlToken, ContentError> {
        let rest = self.rest();
        if rest.starts_with("</") {
            self.pos += 2;
            let name = self.read_name()?;
            self.skip_whitespace();
            match self.bump() {
                Some(b'>') => Ok(XmlToken::EndElement { name }),
                Some(_) => Err(ContentError::BadXmlStructure),
                None => Err(ContentError::UnexpectedEof),
            }
        } else if rest.starts_with("<?") {
            self.skip_past("?>", 2)?;
            Ok(XmlToken::ProcessingInstruction)
        } else if rest.starts_with("<!--") {
            self.skip_past("-->", 4)?;
            Ok(XmlToken::Comment)
        } else if rest.starts_with("<![CDATA[") {
            let body_start = self.pos + "<![CDATA[".len();
            let body = &self.source[body_start..];
            let end = body.find("]]>").ok_or(ContentError::UnexpectedEof)?;
            self.pos = body_start + end + "]]>".len();
            // CDATA content arrives verbatim, no entity resolution.
            Ok(XmlToken::CharData(body[..end].to_owned()))
        } else if rest.starts_with("<!") {
            self.read_directive()
        } else {
            self.read_start_element()
        }
    }

    fn skip_past(&mut self, close: &str, open_len: usize) -> Result<(), ContentError> {
        let body = &self.source[self.pos + open_len..];
        let end = body.find(close).ok_or(ContentError::UnexpectedEof)?;
        self.pos += open_len + end + close.len();
        Ok(())
    }

    /// Raw text between `<!` and the matching `>`, quote-aware and tolerant
    /// of nested `<...>` groups (internal DTD subsets).
    fn read_directive(&mut self) -> Result<XmlToken, ContentError> {
        self.pos += 2;
        let start = self.pos;
        let mut depth = 0usize;
        let mut quote: Option<u8> = None;
        loop {
            let Some(byte) = self.bump() else {
                return Err(ContentError::UnexpectedEof);
            };
            match quote {
                Some(open) => {
                    if byte == open {
                        quote = None;
                    }
                }
                None => match byte {
                    b'\'' | b'"' => quote = Some(byte),
                    b'<' => depth += 1,
                    b'>' if depth == 0 => {
                        let text = self.source[start..self.pos - 1].to_owned();
                        return Ok(XmlToken::Directive(text));
                    }
                    b'>' => depth -= 1,
                    _ => {}
                },
            }
        }
    }

    fn read_start_element(&mut self) -> Result<XmlToken, ContentError> {
        self.pos += 1;
        let name = self.read_name()?;
        let mut attributes = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(ContentError::UnexpectedEof),
                Some(b'>') => {
                    self.pos += 1;
                    return Ok(XmlToken::StartElement {
                        name,
                        attributes,
                        self_closing: false,
                    });
                }
                Some(b'/') => {
                    self.pos += 1;
                    match self.bump() {
                        Some(b'>') => {
                            return Ok(XmlToken::StartElement {
                                name,
                                attributes,
                                self_closing: true,
                            })
                        }
                        Some(_) => return Err(ContentError::BadXmlStructure),
                        None => return Err(ContentError::UnexpectedEof),
                    }
                }
                Some(_) => attributes.push(self.read_attribute()?),
            }
        }
    }

    fn read_attribute(&mut self) -> Result<XmlAttribute, ContentError> {
        let name = self.read_name()?;
        self.skip_whitespace();
        match self.bump() {
            Some(b'=') => {}
            Some(_) => return Err(ContentError::BadXmlStructure),
            None => return Err(ContentError::UnexpectedEof),
        }
        self.skip_whitespace();
        let open = match self.bump() {
            Some(byte @ (b'"' | b'\'')) => byte,
            Some(_) => return Err(ContentError::BadXmlStructure),
            None => return Err(ContentError::UnexpectedEof),
        };
        let rest = self.rest();
        let end = rest
            .find(open as char)
            .ok_or(ContentError::UnexpectedEof)?;
        let raw = &rest[..end];
        self.pos += end + 1;
        Ok(XmlAttribute {
            name,
            value: unescape(raw)?,
        })
    }

    fn read_name(&mut self) -> Result<XmlName, ContentError> {
        let rest = self.rest();
        let end = rest
            .find(|ch: char| {
                ch.is_whitespace() || matches!(ch, '>' | '/' | '=' | '<' | '\'' | '"')
            })
            .unwrap_or(rest.len());
        if end == 0 {
            return Err(ContentError::BadXmlStructure);
        }
        let raw = &rest[..end];
        self.pos += end;
        match raw.split_once(':') {
            Some((space, local)) => {
                if space.is_empty() || local.is_empty() {
                    return Err(ContentError::BadXmlStructure);
                }
                Ok(XmlName::new(space, local))
            }
            None => Ok(XmlName::local(raw)),
        }
    }
}

/// Resolves the predefined entities and numeric character references.
/// Anything else fails the layer, matching a strict decoder.
fn unescape(raw: &str) -> Result<String, ContentError> {
    if !raw.contains('&') {
        return Ok(raw.to_owned());
    }
    let mut output = String::with_capacity(raw.len());
    let mut remaining = raw;
    while let Some(amp) = remaining.find('&') {
        output.push_str(&remaining[..amp]);
        let entity_rest = &remaining[amp + 1..];
        let semicolon = entity_rest
            .find(';')
            .ok_or(ContentError::BadXmlStructure)?;
        let entity = &entity_rest[..semicolon];
        output.push(resolve_entity(entity)?);
        remaining = &entity_rest[semicolon + 1..];
    }
    output.push_str(remaining);
    Ok(output)
}

fn resolve_entity(entity: &str) -> Result<char, ContentError> {
    let resolved = match entity {
        "lt" => '<',
        "gt" => '>',
        "amp" => '&',
        "apos" => '\'',
        "quot" => '"',
        _ => {
            let code = if let Some(hex) = entity.strip_prefix("#x") {
                u32::from_str_radix(hex, 16).map_err(|_| ContentError::BadXmlStructure)?
            } else if let Some(dec) = entity.strip_prefix('#') {
                dec.parse::<u32>().map_err(|_| ContentError::BadXmlStructure)?
            } else {
                return Err(ContentError::BadXmlStructure);
            };
            char::from_u32(code).ok_or(ContentError::BadXmlStructure)?
        }
    };
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(source: &str) -> Result<Vec<XmlToken>, ContentError> {
        let mut lexer = XmlLexer::new(source);
        let mut collected = Vec::new();
        while let Some(token) = lexer.next_token()? {
            collected.push(token);
        }
        Ok(collected)
    }

    #[test]
    fn element_with_text() {
        let collected = tokens("<a>hello</a>").unwrap();
        assert_eq!(collected.len(), 3);
        assert!(
            matches!(&collected[0], XmlToken::StartElement { name, attributes, self_closing: false }
                if name.local == "a" && attributes.is_empty())
        );
        assert!(matches!(&collected[1], XmlToken::CharData(text) if text == "hello"));
        assert!(matches!(&collected[2], XmlToken::EndElement { name } if name.local == "a"));
    }

    #[test]
    fn self_closing_and_attributes() {
        let collected = tokens(r#"<a x="1" y='2'/>"#).unwrap();
        let XmlToken::StartElement {
            attributes,
            self_closing,
            ..
        } = &collected[0]
        else {
            panic!("expected start element");
        };
        assert!(*self_closing);
        assert_eq!(attributes.len(), 2);
        assert_eq!(attributes[0].name.local, "x");
        assert_eq!(attributes[0].value, "1");
        assert_eq!(attributes[1].value, "2");
    }

    #[test]
    fn entities_resolve_in_text_and_attributes() {
        let collected = tokens(r#"<a b="&quot;q&quot;">&lt;root1&gt;&#65;</a>"#).unwrap();
        let XmlToken::StartElement { attributes, .. } = &collected[0] else {
            panic!("expected start element");
        };
        assert_eq!(attributes[0].value, "\"q\"");
        assert!(matches!(&collected[1], XmlToken::CharData(text) if text == "<root1>A"));
    }

    #[test]
    fn unknown_entity_fails() {
        assert_eq!(tokens("<a>&nope;</a>"), Err(ContentError::BadXmlStructure));
        assert_eq!(tokens("<a>a&b</a>"), Err(ContentError::BadXmlStructure));
    }

    #[test]
    fn prolog_comment_cdata_directive() {
        let collected =
            tokens(r#"<?xml version="1.0"?><!--c--><!DOCTYPE root SYSTEM "root.dtd"><a><![CDATA[<raw>]]></a>"#)
                .unwrap();
        assert!(matches!(collected[0], XmlToken::ProcessingInstruction));
        assert!(matches!(collected[1], XmlToken::Comment));
        assert!(
            matches!(&collected[2], XmlToken::Directive(text) if text == r#"DOCTYPE root SYSTEM "root.dtd""#)
        );
        assert!(matches!(&collected[4], XmlToken::CharData(text) if text == "<raw>"));
    }

    #[test]
    fn directive_with_internal_subset() {
        let collected = tokens(r#"<!DOCTYPE root [ <!ENTITY x "y"> ]><root></root>"#).unwrap();
        assert!(
            matches!(&collected[0], XmlToken::Directive(text) if text == r#"DOCTYPE root [ <!ENTITY x "y"> ]"#)
        );
    }

    #[test]
    fn qualified_names_split_on_colon() {
        let collected = tokens("<ns:a></ns:a>").unwrap();
        assert!(matches!(&collected[0], XmlToken::StartElement { name, .. }
            if name.space == "ns" && name.local == "a"));
    }

    #[test]
    fn truncated_markup_is_eof() {
        assert_eq!(tokens("<a"), Err(ContentError::UnexpectedEof));
        assert_eq!(tokens("<a b="), Err(ContentError::UnexpectedEof));
        assert_eq!(tokens("<!--never closed"), Err(ContentError::UnexpectedEof));
        assert_eq!(tokens("<!DOCTYPE root"), Err(ContentError::UnexpectedEof));
    }
}
