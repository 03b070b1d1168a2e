//! Expression parser/compiler.
//!
//! Surface syntax:
//!
//! ```text
//! AND(COND1,COND2,...)                  two or more arguments
//! OR(COND1,COND2,...)                   two or more arguments
//! NOT(COND)                             exactly one argument
//! COND: CHECK(PATH,OP,ARG) | EXISTS(PATH) | MATCH(PATH,PATTERN)
//! ```
//!
//! Every argument is a non-negative decimal index: `PATH` into
//! [`ParseStorage::known_path`], `ARG` into
//! [`ParseStorage::check_arguments`], `OP` an operation code, `PATTERN`
//! an opaque backend pattern id. Compilation resolves the indexes and
//! binds every leaf to the backend operation selected by its top-level
//! key and content-path shape; evaluation does no lookups.

use serde_json::Value;
use tracing::trace;

use crate::data_path::{DataKey, DataPath};
use crate::error::ExpressionError;
use crate::predicate::{Operation, PatternId, Predicate, ValuePredicate};

/// Lookup tables the indices of an expression resolve against.
#[derive(Debug, Clone, Default)]
pub struct ParseStorage {
    /// Addressable data paths.
    pub known_path: Vec<DataPath>,
    /// Right-hand sides for `CHECK` comparisons.
    pub check_arguments: Vec<Value>,
}

/// Compiles expression text into a callable predicate.
pub fn parse_expression_tree(
    source: &str,
    storage: &ParseStorage,
) -> Result<Predicate, ExpressionError> {
    let mut reader = SourceReader::new(source);
    let expression = parse_expression(&mut reader, storage)?;
    if !reader.is_empty() {
        return Err(ExpressionError::Parse);
    }
    trace!(source, "compiled expression");
    Ok(expression)
}

struct SourceReader<'a> {
    source: &'a str,
}

impl<'a> SourceReader<'a> {
    fn new(source: &'a str) -> Self {
        Self { source }
    }

    /// Consumes up to and including `delimiter`, returning what came
    /// before it.
    fn read_to(&mut self, delimiter: char) -> Result<&'a str, ExpressionError> {
        let index = self.source.find(delimiter).ok_or(ExpressionError::Parse)?;
        let result = &self.source[..index];
        self.source = &self.source[index + delimiter.len_utf8()..];
        Ok(result)
    }

    fn read_current(&mut self) -> Result<char, ExpressionError> {
        let mut chars = self.source.chars();
        let current = chars.next().ok_or(ExpressionError::Parse)?;
        self.source = chars.as_str();
        Ok(current)
    }

    fn is_empty(&self) -> bool {
        self.source.is_empty()
    }
}

fn parse_expression(
    reader: &mut SourceReader<'_>,
    storage: &ParseStorage,
) -> Result<Predicate, ExpressionError> {
    match reader.read_to('(')? {
        "AND" => Ok(logical_and(parse_logical_arguments(reader, storage)?)),
        "OR" => Ok(logical_or(parse_logical_arguments(reader, storage)?)),
        "NOT" => Ok(logical_not(parse_not_argument(reader, storage)?)),
        "CHECK" => parse_check(reader, storage),
        "EXISTS" => parse_exists(reader, storage),
        "MATCH" => parse_match(reader, storage),
        _ => Err(ExpressionError::UnknownExpression),
    }
}

fn parse_logical_arguments(
    reader: &mut SourceReader<'_>,
    storage: &ParseStorage,
) -> Result<Vec<Predicate>, ExpressionError> {
    let mut arguments = Vec::new();
    loop {
        arguments.push(parse_expression(reader, storage)?);
        match reader.read_current()? {
            ',' => {}
            ')' => {
                if arguments.len() <= 1 {
                    return Err(ExpressionError::BadArgs);
                }
                return Ok(arguments);
            }
            _ => return Err(ExpressionError::Parse),
        }
    }
}

fn parse_not_argument(
    reader: &mut SourceReader<'_>,
    storage: &ParseStorage,
) -> Result<Predicate, ExpressionError> {
    let inner = parse_expression(reader, storage)?;
    if reader.read_current()? != ')' {
        return Err(ExpressionError::Parse);
    }
    Ok(inner)
}

fn parse_exists(
    reader: &mut SourceReader<'_>,
    storage: &ParseStorage,
) -> Result<Predicate, ExpressionError> {
    let arguments = parse_arguments(reader.read_to(')')?, 1)?;
    let path = resolve_path(storage, arguments[0])?;
    create_exists(path)
}

fn parse_match(
    reader: &mut SourceReader<'_>,
    storage: &ParseStorage,
) -> Result<Predicate, ExpressionError> {
    let arguments = parse_arguments(reader.read_to(')')?, 2)?;
    let path = resolve_path(storage, arguments[0])?;
    let pattern_id = arguments[1] as PatternId;
    create_match(path, pattern_id)
}

fn parse_check(
    reader: &mut SourceReader<'_>,
    storage: &ParseStorage,
) -> Result<Predicate, ExpressionError> {
    let arguments = parse_arguments(reader.read_to(')')?, 3)?;
    let path = resolve_path(storage, arguments[0])?;
    let operation = Operation::from_code(arguments[1])?;
    let argument = storage
        .check_arguments
        .get(arguments[2])
        .cloned()
        .ok_or(ExpressionError::BadArgs)?;
    create_check(path, operation.into_predicate(argument))
}

fn parse_arguments(source: &str, expected: usize) -> Result<Vec<usize>, ExpressionError> {
    let tokens: Vec<&str> = source.split(',').collect();
    if tokens.len() != expected {
        return Err(ExpressionError::BadArgs);
    }
    tokens
        .into_iter()
        .map(|token| token.parse::<usize>().map_err(|_| ExpressionError::Parse))
        .collect()
}

fn resolve_path(storage: &ParseStorage, index: usize) -> Result<&DataPath, ExpressionError> {
    storage.known_path.get(index).ok_or(ExpressionError::BadArgs)
}

fn logical_and(arguments: Vec<Predicate>) -> Predicate {
    Box::new(move |data, manager| {
        for argument in &arguments {
            if !argument(data, manager)? {
                return Ok(false);
            }
        }
        Ok(true)
    })
}

fn logical_or(arguments: Vec<Predicate>) -> Predicate {
    Box::new(move |data, manager| {
        for argument in &arguments {
            if argument(data, manager)? {
                return Ok(true);
            }
        }
        Ok(false)
    })
}

fn logical_not(inner: Predicate) -> Predicate {
    Box::new(move |data, manager| Ok(!inner(data, manager)?))
}

fn create_match(path: &DataPath, pattern_id: PatternId) -> Result<Predicate, ExpressionError> {
    let predicate: Predicate = match path.main_key {
        DataKey::HttpData => {
            Box::new(move |data, manager| manager.recursive_match_http_data(pattern_id, data))
        }
        DataKey::HttpDataHost => {
            Box::new(move |data, manager| manager.match_host(pattern_id, data))
        }
        DataKey::HttpDataProtocol => {
            Box::new(move |data, manager| manager.match_protocol(pattern_id, data))
        }
        DataKey::HttpDataPort => {
            Box::new(move |data, manager| manager.match_port(pattern_id, data))
        }
        DataKey::HttpDataHttpVersion => {
            Box::new(move |data, manager| manager.match_http_version(pattern_id, data))
        }
        DataKey::HttpDataTimestamp => {
            Box::new(move |data, manager| manager.match_timestamp(pattern_id, data))
        }
        DataKey::Options => return create_match_option(path, pattern_id),
        DataKey::Client => {
            Box::new(move |data, manager| manager.recursive_match_client(pattern_id, data))
        }
        DataKey::ClientId => {
            Box::new(move |data, manager| manager.match_client_id(pattern_id, data))
        }
        DataKey::ClientIp => {
            Box::new(move |data, manager| manager.match_client_ip(pattern_id, data))
        }
        DataKey::GeoIp => {
            Box::new(move |data, manager| manager.recursive_match_geo_ip(pattern_id, data))
        }
        DataKey::GeoIpCountry => {
            Box::new(move |data, manager| manager.match_geo_ip_country(pattern_id, data))
        }
        DataKey::GeoIpCountryCode => {
            Box::new(move |data, manager| manager.match_geo_ip_country_code(pattern_id, data))
        }
        DataKey::GeoIpCity => {
            Box::new(move |data, manager| manager.match_geo_ip_city(pattern_id, data))
        }
        DataKey::GeoIpLat => {
            Box::new(move |data, manager| manager.match_geo_ip_lat(pattern_id, data))
        }
        DataKey::GeoIpLon => {
            Box::new(move |data, manager| manager.match_geo_ip_lon(pattern_id, data))
        }
        DataKey::GeoIpAccuracyRadius => {
            Box::new(move |data, manager| manager.match_geo_ip_accuracy_radius(pattern_id, data))
        }
        DataKey::Os => Box::new(move |data, manager| manager.recursive_match_os(pattern_id, data)),
        DataKey::OsName => Box::new(move |data, manager| manager.match_os_name(pattern_id, data)),
        DataKey::OsVersion => {
            Box::new(move |data, manager| manager.match_os_version(pattern_id, data))
        }
        DataKey::Browser => {
            Box::new(move |data, manager| manager.recursive_match_browser(pattern_id, data))
        }
        DataKey::BrowserName => {
            Box::new(move |data, manager| manager.match_browser_name(pattern_id, data))
        }
        DataKey::BrowserVersion => {
            Box::new(move |data, manager| manager.match_browser_version(pattern_id, data))
        }
        DataKey::BasicAuth => {
            Box::new(move |data, manager| manager.recursive_match_basic_auth(pattern_id, data))
        }
        DataKey::BasicAuthUsername => {
            Box::new(move |data, manager| manager.match_basic_auth_username(pattern_id, data))
        }
        DataKey::BasicAuthPassword => {
            Box::new(move |data, manager| manager.match_basic_auth_password(pattern_id, data))
        }
        DataKey::Request => {
            Box::new(move |data, manager| manager.recursive_match_request(pattern_id, data))
        }
        DataKey::RequestId => {
            Box::new(move |data, manager| manager.match_request_id(pattern_id, data))
        }
        DataKey::RequestPath => {
            Box::new(move |data, manager| manager.match_request_path(pattern_id, data))
        }
        DataKey::RequestPaths => return create_match_request_paths(path, pattern_id),
        DataKey::RequestQuery => {
            Box::new(move |data, manager| manager.match_request_query(pattern_id, data))
        }
        DataKey::RequestMethod => {
            Box::new(move |data, manager| manager.match_request_method(pattern_id, data))
        }
        DataKey::RequestBody => {
            let content_path = path.content_path.clone();
            Box::new(move |data, manager| {
                manager.recursive_match_request_body(pattern_id, &content_path, data)
            })
        }
        DataKey::RequestGet => {
            return create_match_bag(
                path,
                pattern_id,
                |manager, pattern_id, data| manager.recursive_match_request_get(pattern_id, data),
                |manager, pattern_id, content_path, data| {
                    manager.recursive_match_request_get_value(pattern_id, content_path, data)
                },
            )
        }
        DataKey::RequestPost => {
            return create_match_bag(
                path,
                pattern_id,
                |manager, pattern_id, data| manager.recursive_match_request_post(pattern_id, data),
                |manager, pattern_id, content_path, data| {
                    manager.recursive_match_request_post_value(pattern_id, content_path, data)
                },
            )
        }
        DataKey::RequestHeaders => {
            return create_match_bag(
                path,
                pattern_id,
                |manager, pattern_id, data| {
                    manager.recursive_match_request_headers(pattern_id, data)
                },
                |manager, pattern_id, content_path, data| {
                    manager.recursive_match_request_header_value(pattern_id, content_path, data)
                },
            )
        }
        DataKey::RequestTime => {
            Box::new(move |data, manager| manager.match_request_time(pattern_id, data))
        }
        DataKey::RequestCookies => {
            return create_match_bag(
                path,
                pattern_id,
                |manager, pattern_id, data| {
                    manager.recursive_match_request_cookies(pattern_id, data)
                },
                |manager, pattern_id, content_path, data| {
                    manager.recursive_match_request_cookie_value(pattern_id, content_path, data)
                },
            )
        }
        DataKey::RequestLength => {
            Box::new(move |data, manager| manager.match_request_length(pattern_id, data))
        }
        DataKey::Response => {
            Box::new(move |data, manager| manager.recursive_match_response(pattern_id, data))
        }
        DataKey::ResponseBody => {
            let content_path = path.content_path.clone();
            Box::new(move |data, manager| {
                manager.recursive_match_response_body(pattern_id, &content_path, data)
            })
        }
        DataKey::ResponseCode => {
            Box::new(move |data, manager| manager.match_response_code(pattern_id, data))
        }
        DataKey::ResponseSource => {
            Box::new(move |data, manager| manager.match_response_source(pattern_id, data))
        }
        DataKey::ResponseHeaders => {
            return create_match_bag(
                path,
                pattern_id,
                |manager, pattern_id, data| {
                    manager.recursive_match_response_headers(pattern_id, data)
                },
                |manager, pattern_id, content_path, data| {
                    manager.recursive_match_response_header_value(pattern_id, content_path, data)
                },
            )
        }
        DataKey::ResponseLength => {
            Box::new(move |data, manager| manager.match_response_length(pattern_id, data))
        }
    };
    Ok(predicate)
}

type BagMatch = fn(
    &dyn crate::manager::ExecutionManager,
    PatternId,
    &crate::data::HttpData,
) -> crate::predicate::ExecutionResult;

type BagMatchValue = fn(
    &dyn crate::manager::ExecutionManager,
    PatternId,
    &crate::data_path::ContentPath,
    &crate::data::HttpData,
) -> crate::predicate::ExecutionResult;

/// Keyed bags dispatch on the tail shape: no tail sweeps the whole bag,
/// any tail addresses into it.
fn create_match_bag(
    path: &DataPath,
    pattern_id: PatternId,
    whole: BagMatch,
    value: BagMatchValue,
) -> Result<Predicate, ExpressionError> {
    if path.content_path.is_empty() {
        Ok(Box::new(move |data, manager| {
            whole(manager, pattern_id, data)
        }))
    } else {
        let content_path = path.content_path.clone();
        Ok(Box::new(move |data, manager| {
            value(manager, pattern_id, &content_path, data)
        }))
    }
}

/// Options allow only the empty or simple tail.
fn create_match_option(
    path: &DataPath,
    pattern_id: PatternId,
) -> Result<Predicate, ExpressionError> {
    if path.content_path.is_empty() {
        Ok(Box::new(move |data, manager| {
            manager.recursive_match_options(pattern_id, data)
        }))
    } else if path.content_path.is_simple() {
        let name = path.content_path.raw.clone();
        Ok(Box::new(move |data, manager| {
            manager.match_option(pattern_id, &name, data)
        }))
    } else {
        Err(ExpressionError::BadContentPath)
    }
}

/// A `RequestPaths` tail must start with a positional index.
fn create_match_request_paths(
    path: &DataPath,
    pattern_id: PatternId,
) -> Result<Predicate, ExpressionError> {
    match path.content_path.parts.first() {
        None => Ok(Box::new(move |data, manager| {
            manager.match_request_paths(pattern_id, data)
        })),
        Some(first) => {
            let index: i64 = first
                .parse()
                .map_err(|_| ExpressionError::BadRequestPathIndex)?;
            let content_path = path.content_path.clone();
            Ok(Box::new(move |data, manager| {
                manager.match_request_paths_element(pattern_id, index, &content_path, data)
            }))
        }
    }
}

/// `EXISTS` only makes sense for keys with bag-like children: the options
/// bag (simple tail) and the keyed request/response bags (non-empty tail).
fn create_exists(path: &DataPath) -> Result<Predicate, ExpressionError> {
    match path.main_key {
        DataKey::Options => {
            if !path.content_path.is_simple() {
                return Err(ExpressionError::BadContentPath);
            }
            let name = path.content_path.raw.clone();
            Ok(Box::new(move |data, manager| {
                manager.check_option_existence(&name, data)
            }))
        }
        DataKey::RequestGet => {
            if path.content_path.is_empty() {
                return Err(ExpressionError::BadContentPath);
            }
            let content_path = path.content_path.clone();
            Ok(Box::new(move |data, manager| {
                manager.check_request_get_value_existence(&content_path, data)
            }))
        }
        DataKey::RequestPost => {
            if path.content_path.is_empty() {
                return Err(ExpressionError::BadContentPath);
            }
            let content_path = path.content_path.clone();
            Ok(Box::new(move |data, manager| {
                manager.check_request_post_value_existence(&content_path, data)
            }))
        }
        DataKey::RequestHeaders => {
            if path.content_path.is_empty() {
                return Err(ExpressionError::BadContentPath);
            }
            let content_path = path.content_path.clone();
            Ok(Box::new(move |data, manager| {
                manager.check_request_header_value_existence(&content_path, data)
            }))
        }
        DataKey::RequestCookies => {
            if path.content_path.is_empty() {
                return Err(ExpressionError::BadContentPath);
            }
            let content_path = path.content_path.clone();
            Ok(Box::new(move |data, manager| {
                manager.check_request_cookie_value_existence(&content_path, data)
            }))
        }
        DataKey::ResponseHeaders => {
            if path.content_path.is_empty() {
                return Err(ExpressionError::BadContentPath);
            }
            let content_path = path.content_path.clone();
            Ok(Box::new(move |data, manager| {
                manager.check_response_header_value_existence(&content_path, data)
            }))
        }
        _ => Err(ExpressionError::UnknownMainPath),
    }
}

fn create_check(path: &DataPath, predicate: ValuePredicate) -> Result<Predicate, ExpressionError> {
    let compiled: Predicate = match path.main_key {
        DataKey::HttpData => Box::new(move |data, manager| {
            manager.recursive_check_http_data(&predicate, data)
        }),
        DataKey::HttpDataHost => {
            Box::new(move |data, manager| manager.check_host(&predicate, data))
        }
        DataKey::HttpDataProtocol => {
            Box::new(move |data, manager| manager.check_protocol(&predicate, data))
        }
        DataKey::HttpDataPort => {
            Box::new(move |data, manager| manager.check_port(&predicate, data))
        }
        DataKey::HttpDataHttpVersion => {
            Box::new(move |data, manager| manager.check_http_version(&predicate, data))
        }
        DataKey::HttpDataTimestamp => {
            Box::new(move |data, manager| manager.check_timestamp(&predicate, data))
        }
        DataKey::Options => return create_check_option(path, predicate),
        DataKey::Client => {
            Box::new(move |data, manager| manager.recursive_check_client(&predicate, data))
        }
        DataKey::ClientId => {
            Box::new(move |data, manager| manager.check_client_id(&predicate, data))
        }
        DataKey::ClientIp => {
            Box::new(move |data, manager| manager.check_client_ip(&predicate, data))
        }
        DataKey::GeoIp => {
            Box::new(move |data, manager| manager.recursive_check_geo_ip(&predicate, data))
        }
        DataKey::GeoIpCountry => {
            Box::new(move |data, manager| manager.check_geo_ip_country(&predicate, data))
        }
        DataKey::GeoIpCountryCode => {
            Box::new(move |data, manager| manager.check_geo_ip_country_code(&predicate, data))
        }
        DataKey::GeoIpCity => {
            Box::new(move |data, manager| manager.check_geo_ip_city(&predicate, data))
        }
        DataKey::GeoIpLat => {
            Box::new(move |data, manager| manager.check_geo_ip_lat(&predicate, data))
        }
        DataKey::GeoIpLon => {
            Box::new(move |data, manager| manager.check_geo_ip_lon(&predicate, data))
        }
        DataKey::GeoIpAccuracyRadius => {
            Box::new(move |data, manager| manager.check_geo_ip_accuracy_radius(&predicate, data))
        }
        DataKey::Os => Box::new(move |data, manager| manager.recursive_check_os(&predicate, data)),
        DataKey::OsName => Box::new(move |data, manager| manager.check_os_name(&predicate, data)),
        DataKey::OsVersion => {
            Box::new(move |data, manager| manager.check_os_version(&predicate, data))
        }
        DataKey::Browser => {
            Box::new(move |data, manager| manager.recursive_check_browser(&predicate, data))
        }
        DataKey::BrowserName => {
            Box::new(move |data, manager| manager.check_browser_name(&predicate, data))
        }
        DataKey::BrowserVersion => {
            Box::new(move |data, manager| manager.check_browser_version(&predicate, data))
        }
        DataKey::BasicAuth => {
            Box::new(move |data, manager| manager.recursive_check_basic_auth(&predicate, data))
        }
        DataKey::BasicAuthUsername => {
            Box::new(move |data, manager| manager.check_basic_auth_username(&predicate, data))
        }
        DataKey::BasicAuthPassword => {
            Box::new(move |data, manager| manager.check_basic_auth_password(&predicate, data))
        }
        DataKey::Request => {
            Box::new(move |data, manager| manager.recursive_check_request(&predicate, data))
        }
        DataKey::RequestId => {
            Box::new(move |data, manager| manager.check_request_id(&predicate, data))
        }
        DataKey::RequestPath => {
            Box::new(move |data, manager| manager.check_request_path(&predicate, data))
        }
        DataKey::RequestPaths => return create_check_request_paths(path, predicate),
        DataKey::RequestQuery => {
            Box::new(move |data, manager| manager.check_request_query(&predicate, data))
        }
        DataKey::RequestMethod => {
            Box::new(move |data, manager| manager.check_request_method(&predicate, data))
        }
        DataKey::RequestBody => {
            let content_path = path.content_path.clone();
            Box::new(move |data, manager| {
                manager.recursive_check_request_body(&predicate, &content_path, data)
            })
        }
        DataKey::RequestGet => {
            return create_check_bag(
                path,
                predicate,
                |manager, predicate, data| manager.recursive_check_request_get(predicate, data),
                |manager, predicate, content_path, data| {
                    manager.recursive_check_request_get_value(predicate, content_path, data)
                },
            )
        }
        DataKey::RequestPost => {
            return create_check_bag(
                path,
                predicate,
                |manager, predicate, data| manager.recursive_check_request_post(predicate, data),
                |manager, predicate, content_path, data| {
                    manager.recursive_check_request_post_value(predicate, content_path, data)
                },
            )
        }
        DataKey::RequestHeaders => {
            return create_check_bag(
                path,
                predicate,
                |manager, predicate, data| {
                    manager.recursive_check_request_headers(predicate, data)
                },
                |manager, predicate, content_path, data| {
                    manager.recursive_check_request_header_value(predicate, content_path, data)
                },
            )
        }
        DataKey::RequestTime => {
            Box::new(move |data, manager| manager.check_request_time(&predicate, data))
        }
        DataKey::RequestCookies => {
            return create_check_bag(
                path,
                predicate,
                |manager, predicate, data| {
                    manager.recursive_check_request_cookies(predicate, data)
                },
                |manager, predicate, content_path, data| {
                    manager.recursive_check_request_cookie_value(predicate, content_path, data)
                },
            )
        }
        DataKey::RequestLength => {
            Box::new(move |data, manager| manager.check_request_length(&predicate, data))
        }
        DataKey::Response => {
            Box::new(move |data, manager| manager.recursive_check_response(&predicate, data))
        }
        DataKey::ResponseBody => {
            let content_path = path.content_path.clone();
            Box::new(move |data, manager| {
                manager.recursive_check_response_body(&predicate, &content_path, data)
            })
        }
        DataKey::ResponseCode => {
            Box::new(move |data, manager| manager.check_response_code(&predicate, data))
        }
        DataKey::ResponseSource => {
            Box::new(move |data, manager| manager.check_response_source(&predicate, data))
        }
        DataKey::ResponseHeaders => {
            return create_check_bag(
                path,
                predicate,
                |manager, predicate, data| {
                    manager.recursive_check_response_headers(predicate, data)
                },
                |manager, predicate, content_path, data| {
                    manager.recursive_check_response_header_value(predicate, content_path, data)
                },
            )
        }
        DataKey::ResponseLength => {
            Box::new(move |data, manager| manager.check_response_length(&predicate, data))
        }
    };
    Ok(compiled)
}

type BagCheck = fn(
    &dyn crate::manager::ExecutionManager,
    &ValuePredicate,
    &crate::data::HttpData,
) -> crate::predicate::ExecutionResult;

type BagCheckValue = fn(
    &dyn crate::manager::ExecutionManager,
    &ValuePredicate,
    &crate::data_path::ContentPath,
    &crate::data::HttpData,
) -> crate::predicate::ExecutionResult;

fn create_check_bag(
    path: &DataPath,
    predicate: ValuePredicate,
    whole: BagCheck,
    value: BagCheckValue,
) -> Result<Predicate, ExpressionError> {
    if path.content_path.is_empty() {
        Ok(Box::new(move |data, manager| {
            whole(manager, &predicate, data)
        }))
    } else {
        let content_path = path.content_path.clone();
        Ok(Box::new(move |data, manager| {
            value(manager, &predicate, &content_path, data)
        }))
    }
}

fn create_check_option(
    path: &DataPath,
    predicate: ValuePredicate,
) -> Result<Predicate, ExpressionError> {
    if path.content_path.is_empty() {
        Ok(Box::new(move |data, manager| {
            manager.recursive_check_options(&predicate, data)
        }))
    } else if path.content_path.is_simple() {
        let name = path.content_path.raw.clone();
        Ok(Box::new(move |data, manager| {
            manager.check_option(&predicate, &name, data)
        }))
    } else {
        Err(ExpressionError::BadContentPath)
    }
}

fn create_check_request_paths(
    path: &DataPath,
    predicate: ValuePredicate,
) -> Result<Predicate, ExpressionError> {
    match path.content_path.parts.first() {
        None => Ok(Box::new(move |data, manager| {
            manager.check_request_paths(&predicate, data)
        })),
        Some(first) => {
            let index: i64 = first
                .parse()
                .map_err(|_| ExpressionError::BadRequestPathIndex)?;
            let content_path = path.content_path.clone();
            Ok(Box::new(move |data, manager| {
                manager.check_request_paths_element(&predicate, index, &content_path, data)
            }))
        }
    }
}
