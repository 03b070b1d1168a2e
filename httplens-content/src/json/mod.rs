//! JSON layer: typed tree and the streaming parser that builds it.

mod scanner;

use std::collections::HashMap;

use crate::content::Content;
use crate::error::ContentError;
use crate::parser::parse_with_state;
use crate::state::{LevelChecker, ParseState};
use self::scanner::Scanner;

/// A parsed JSON document.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonData {
    /// The single top-level value.
    pub value: JsonValue,
}

/// One JSON value.
///
/// String leaves do not survive as strings: every string value is routed
/// through recursive classification and stored as [`JsonValue::Content`]
/// (a [`Content::Text`] when nothing was recognized). Object field names
/// are plain strings and are never classified.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    /// `null`.
    Null,
    /// `true` / `false`.
    Bool(bool),
    /// Any JSON number, kept as a double.
    Number(f64),
    /// A classified string leaf.
    Content(Box<Content>),
    /// An array, order preserved.
    Array(Vec<JsonValue>),
    /// An object. Insertion order is not retained; duplicate names keep
    /// the last value.
    Object(HashMap<String, JsonValue>),
}

impl JsonValue {
    /// String leaf that classified as plain text.
    pub fn text(value: impl Into<String>) -> Self {
        JsonValue::Content(Box::new(Content::Text(value.into())))
    }

    /// String leaf that classified as structured content.
    pub fn content(inner: Content) -> Self {
        JsonValue::Content(Box::new(inner))
    }
}

pub(crate) struct JsonDataParser<'s> {
    state: &'s mut ParseState,
}

impl<'s> JsonDataParser<'s> {
    pub(crate) fn new(state: &'s mut ParseState) -> Self {
        Self { state }
    }

    pub(crate) fn parse(mut self, source: &str) -> Result<JsonData, ContentError> {
        let mut scanner = Scanner::new(source);
        let mut local = LevelChecker::new(self.state.max_local_level);
        let value = self.parse_value(&mut scanner, &mut local)?;
        scanner.skip_whitespace();
        if !scanner.at_end() {
            return Err(ContentError::BadJsonStructure);
        }
        Ok(JsonData { value })
    }

    fn parse_value(
        &mut self,
        scanner: &mut Scanner<'_>,
        local: &mut LevelChecker,
    ) -> Result<JsonValue, ContentError> {
        scanner.skip_whitespace();
        match scanner.peek() {
            None => Err(ContentError::UnexpectedEof),
            Some(b'{') => self.parse_object(scanner, local),
            Some(b'[') => self.parse_array(scanner, local),
            Some(b'"') => {
                let text = scanner.parse_string()?;
                Ok(JsonValue::Content(Box::new(parse_with_state(
                    &text, self.state,
                ))))
            }
            Some(b't') => {
                scanner.expect_literal("true")?;
                Ok(JsonValue::Bool(true))
            }
            Some(b'f') => {
                scanner.expect_literal("false")?;
                Ok(JsonValue::Bool(false))
            }
            Some(b'n') => {
                scanner.expect_literal("null")?;
                Ok(JsonValue::Null)
            }
            Some(b'-' | b'0'..=b'9') => Ok(JsonValue::Number(scanner.parse_number()?)),
            Some(_) => Err(ContentError::UnexpectedValue),
        }
    }

    fn parse_object(
        &mut self,
        scanner: &mut Scanner<'_>,
        local: &mut LevelChecker,
    ) -> Result<JsonValue, ContentError> {
        if !local.try_enter() {
            return Err(ContentError::MaxLevelExceeded);
        }
        if !self.state.global.try_enter() {
            local.exit();
            return Err(ContentError::MaxLevelExceeded);
        }
        let result = self.object_body(scanner, local);
        self.state.global.exit();
        local.exit();
        result
    }

    fn object_body(
        &mut self,
        scanner: &mut Scanner<'_>,
        local: &mut LevelChecker,
    ) -> Result<JsonValue, ContentError> {
        scanner.bump();
        let mut fields = HashMap::new();
        scanner.skip_whitespace();
        if scanner.peek() == Some(b'}') {
            scanner.bump();
            return Ok(JsonValue::Object(fields));
        }
        loop {
            if fields.len() == self.state.max_field_count {
                return Err(ContentError::MaxFieldCountExceeded);
            }
            let name = self.parse_field_name(scanner)?;
            scanner.skip_whitespace();
            match scanner.bump() {
                Some(b':') => {}
                Some(_) => return Err(ContentError::UnexpectedValue),
                None => return Err(ContentError::UnexpectedEof),
            }
            let value = self.parse_value(scanner, local)?;
            fields.insert(name, value);
            scanner.skip_whitespace();
            match scanner.bump() {
                Some(b',') => {}
                Some(b'}') => return Ok(JsonValue::Object(fields)),
                Some(b']') => return Err(ContentError::UnexpectedEndOfObject),
                Some(_) => return Err(ContentError::UnexpectedValue),
                None => return Err(ContentError::UnexpectedEof),
            }
        }
    }

    fn parse_field_name(&mut self, scanner: &mut Scanner<'_>) -> Result<String, ContentError> {
        scanner.skip_whitespace();
        match scanner.peek() {
            Some(b'"') => scanner.parse_string(),
            Some(_) => Err(ContentError::BadFieldName),
            None => Err(ContentError::UnexpectedEof),
        }
    }

    fn parse_array(
        &mut self,
        scanner: &mut Scanner<'_>,
        local: &mut LevelChecker,
    ) -> Result<JsonValue, ContentError> {
        if !local.try_enter() {
            return Err(ContentError::MaxLevelExceeded);
        }
        if !self.state.global.try_enter() {
            local.exit();
            return Err(ContentError::MaxLevelExceeded);
        }
        let result = self.array_body(scanner, local);
        self.state.global.exit();
        local.exit();
        result
    }

    fn array_body(
        &mut self,
        scanner: &mut Scanner<'_>,
        local: &mut LevelChecker,
    ) -> Result<JsonValue, ContentError> {
        scanner.bump();
        let mut elements = Vec::new();
        scanner.skip_whitespace();
        if scanner.peek() == Some(b']') {
            scanner.bump();
            return Ok(JsonValue::Array(elements));
        }
        loop {
            if elements.len() == self.state.max_field_count {
                return Err(ContentError::MaxFieldCountExceeded);
            }
            let value = self.parse_value(scanner, local)?;
            elements.push(value);
            scanner.skip_whitespace();
            match scanner.bump() {
                Some(b',') => {}
                Some(b']') => return Ok(JsonValue::Array(elements)),
                Some(b'}') => return Err(ContentError::UnexpectedEndOfArray),
                Some(_) => return Err(ContentError::UnexpectedValue),
                None => return Err(ContentError::UnexpectedEof),
            }
        }
    }
}
