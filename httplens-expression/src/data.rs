//! The HTTP data context predicates evaluate against.
//!
//! The expression layer treats this record as opaque: it is handed to the
//! backend unchanged, and only backend implementations introspect fields.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// String-keyed multi-valued bag, the shape of query parameters, form
/// fields, headers, and cookies.
pub type ValueBag = HashMap<String, Vec<String>>;

/// One observed HTTP exchange plus client metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpData {
    /// Target host.
    pub host: String,
    /// Scheme, e.g. `http` or `https`.
    pub protocol: String,
    /// Target port.
    pub port: u16,
    /// Protocol version, e.g. `HTTP/1.1`.
    pub http_version: String,
    /// When the exchange was observed.
    pub timestamp: DateTime<Utc>,
    /// Deployment-specific scalar options.
    pub options: HashMap<String, String>,
    /// Client metadata.
    pub client: ClientData,
    /// The request half.
    pub request: RequestData,
    /// The response half.
    pub response: ResponseData,
}

impl Default for HttpData {
    fn default() -> Self {
        Self {
            host: String::new(),
            protocol: String::new(),
            port: 0,
            http_version: String::new(),
            timestamp: DateTime::UNIX_EPOCH,
            options: HashMap::new(),
            client: ClientData::default(),
            request: RequestData::default(),
            response: ResponseData::default(),
        }
    }
}

/// Who sent the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientData {
    /// Stable client identifier.
    pub id: String,
    /// Source address.
    pub ip: String,
    /// Geo lookup of the source address.
    pub geo_ip: GeoIpData,
    /// Operating system fingerprint.
    pub os: OsData,
    /// Browser fingerprint.
    pub browser: BrowserData,
    /// Credentials from the `Authorization: Basic` header, if present.
    pub basic_auth: BasicAuthData,
}

/// Geo lookup result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoIpData {
    /// Country name.
    pub country: String,
    /// ISO country code.
    pub country_code: String,
    /// City name.
    pub city: String,
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lon: f64,
    /// Accuracy radius in kilometers.
    pub accuracy_radius: u32,
}

/// Operating system fingerprint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OsData {
    /// OS family name.
    pub name: String,
    /// OS version.
    pub version: String,
}

/// Browser fingerprint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrowserData {
    /// Browser family name.
    pub name: String,
    /// Browser version.
    pub version: String,
}

/// Decoded basic-auth credentials.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BasicAuthData {
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
}

/// The request half of the exchange.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestData {
    /// Request identifier.
    pub id: String,
    /// Raw path.
    pub path: String,
    /// Path split into segments.
    pub paths: Vec<String>,
    /// Raw query string.
    pub query: String,
    /// Method verb.
    pub method: String,
    /// Body as text; backends typically feed this to the content parser.
    pub body: String,
    /// Decoded query parameters.
    pub get_params: ValueBag,
    /// Decoded form fields.
    pub post_params: ValueBag,
    /// Request headers.
    pub headers: ValueBag,
    /// When the request was received.
    pub time: DateTime<Utc>,
    /// Request cookies.
    pub cookies: ValueBag,
    /// Body length in bytes.
    pub length: u64,
}

impl Default for RequestData {
    fn default() -> Self {
        Self {
            id: String::new(),
            path: String::new(),
            paths: Vec::new(),
            query: String::new(),
            method: String::new(),
            body: String::new(),
            get_params: ValueBag::new(),
            post_params: ValueBag::new(),
            headers: ValueBag::new(),
            time: DateTime::UNIX_EPOCH,
            cookies: ValueBag::new(),
            length: 0,
        }
    }
}

/// The response half of the exchange.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseData {
    /// Status code.
    pub code: u16,
    /// Which subsystem produced the response.
    pub source: String,
    /// Response headers.
    pub headers: ValueBag,
    /// Body as text.
    pub body: String,
    /// Body length in bytes.
    pub length: u64,
}
