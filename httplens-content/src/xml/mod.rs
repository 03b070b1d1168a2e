//! XML layer: typed tree and the token-driven parser that builds it.

mod lexer;

use smol_str::SmolStr;

use crate::content::Content;
use crate::error::ContentError;
use crate::parser::parse_with_state;
use crate::state::{LevelChecker, ParseState};
use self::lexer::{XmlLexer, XmlToken};

/// Qualified element or attribute name. `space` holds the namespace prefix
/// verbatim; no URI resolution happens at this layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlName {
    /// Namespace prefix, empty for unprefixed names.
    pub space: SmolStr,
    /// Local part.
    pub local: SmolStr,
}

impl XmlName {
    /// Name with an explicit namespace prefix.
    pub fn new(space: impl Into<SmolStr>, local: impl Into<SmolStr>) -> Self {
        Self {
            space: space.into(),
            local: local.into(),
        }
    }

    /// Unprefixed name.
    pub fn local(local: impl Into<SmolStr>) -> Self {
        Self {
            space: SmolStr::default(),
            local: local.into(),
        }
    }

    /// `space:local`, or just `local` for unprefixed names.
    pub fn full_name(&self) -> String {
        if self.space.is_empty() {
            self.local.to_string()
        } else {
            format!("{}:{}", self.space, self.local)
        }
    }
}

/// One attribute as written in the source, order and duplicates preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlAttribute {
    /// Attribute name.
    pub name: XmlName,
    /// Attribute value with entities resolved.
    pub value: String,
}

/// One element of the tree.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElement {
    /// Element name.
    pub name: XmlName,
    /// Attributes in source order, duplicates kept.
    pub attributes: Vec<XmlAttribute>,
    /// Child elements in source order.
    pub children: Vec<XmlElement>,
    /// Classified content of the element's character data, if any was
    /// observed. When an element carries several text runs, the last one
    /// wins; that simplification is load-bearing for existing consumers.
    pub value: Option<Box<Content>>,
}

/// A parsed XML document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlData {
    /// `<!ENTITY ...>` directives, raw text without the delimiters.
    pub entity_directives: Vec<String>,
    /// `<!DOCTYPE ...>` directives.
    pub doctype_directives: Vec<String>,
    /// Any other `<!...>` directives.
    pub other_directives: Vec<String>,
    /// The single root element. `None` when the document held only
    /// prolog material (instructions, comments, directives).
    pub root: Option<XmlElement>,
}

pub(crate) struct XmlDataParser<'s> {
    state: &'s mut ParseState,
    data: XmlData,
}

impl<'s> XmlDataParser<'s> {
    pub(crate) fn new(state: &'s mut ParseState) -> Self {
        Self {
            state,
            data: XmlData::default(),
        }
    }

    pub(crate) fn parse(mut self, source: &str) -> Result<XmlData, ContentError> {
        let mut lexer = XmlLexer::new(source);
        let mut local = LevelChecker::new(self.state.max_local_level);
        loop {
            let Some(token) = lexer.next_token()? else {
                return Ok(self.data);
            };
            match token {
                XmlToken::CharData(_) => return Err(ContentError::BadXmlStructure),
                XmlToken::Comment | XmlToken::ProcessingInstruction => {}
                XmlToken::Directive(directive) => self.store_directive(directive),
                XmlToken::EndElement { .. } => return Err(ContentError::BadXmlStructure),
                XmlToken::StartElement {
                    name,
                    attributes,
                    self_closing,
                } => {
                    if self.data.root.is_some() {
                        return Err(ContentError::BadXmlStructure);
                    }
                    let root =
                        self.parse_element(&mut lexer, &mut local, name, attributes, self_closing)?;
                    self.data.root = Some(root);
                }
            }
        }
    }

    fn store_directive(&mut self, directive: String) {
        if directive.starts_with("ENTITY") {
            self.data.entity_directives.push(directive);
        } else if directive.starts_with("DOCTYPE") {
            self.data.doctype_directives.push(directive);
        } else {
            self.data.other_directives.push(directive);
        }
    }

    fn parse_element(
        &mut self,
        lexer: &mut XmlLexer<'_>,
        local: &mut LevelChecker,
        name: XmlName,
        attributes: Vec<XmlAttribute>,
        self_closing: bool,
    ) -> Result<XmlElement, ContentError> {
        if !local.try_enter() {
            return Err(ContentError::MaxLevelExceeded);
        }
        if !self.state.global.try_enter() {
            local.exit();
            return Err(ContentError::MaxLevelExceeded);
        }
        let result = self.element_body(lexer, local, name, attributes, self_closing);
        self.state.global.exit();
        local.exit();
        result
    }

    fn element_body(
        &mut self,
        lexer: &mut XmlLexer<'_>,
        local: &mut LevelChecker,
        name: XmlName,
        attributes: Vec<XmlAttribute>,
        self_closing: bool,
    ) -> Result<XmlElement, ContentError> {
        let mut element = XmlElement {
            name,
            attributes,
            children: Vec::new(),
            value: None,
        };
        if self_closing {
            return Ok(element);
        }
        loop {
            let Some(token) = lexer.next_token()? else {
                return Err(ContentError::UnexpectedEof);
            };
            match token {
                XmlToken::CharData(text) => {
                    element.value = Some(Box::new(parse_with_state(&text, self.state)));
                }
                XmlToken::Comment | XmlToken::ProcessingInstruction => {}
                XmlToken::Directive(directive) => self.store_directive(directive),
                XmlToken::EndElement { name: end_name } => {
                    if end_name != element.name {
                        return Err(ContentError::UnexpectedEndElement);
                    }
                    return Ok(element);
                }
                XmlToken::StartElement {
                    name,
                    attributes,
                    self_closing,
                } => {
                    let child =
                        self.parse_element(lexer, local, name, attributes, self_closing)?;
                    element.children.push(child);
                }
            }
        }
    }
}
