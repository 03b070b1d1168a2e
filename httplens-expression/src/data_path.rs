//! Addressing into the data model: a top-level key plus an optional
//! dotted tail into bag-like fields.

/// Every addressable top-level field of [`HttpData`](crate::HttpData),
/// including the aggregate keys that dispatch to recursive backend
/// operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataKey {
    /// The whole record.
    HttpData,
    /// `host`.
    HttpDataHost,
    /// `protocol`.
    HttpDataProtocol,
    /// `port`.
    HttpDataPort,
    /// `http_version`.
    HttpDataHttpVersion,
    /// `timestamp`.
    HttpDataTimestamp,
    /// The options bag.
    Options,
    /// The whole client record.
    Client,
    /// `client.id`.
    ClientId,
    /// `client.ip`.
    ClientIp,
    /// The whole geo lookup.
    GeoIp,
    /// `client.geo_ip.country`.
    GeoIpCountry,
    /// `client.geo_ip.country_code`.
    GeoIpCountryCode,
    /// `client.geo_ip.city`.
    GeoIpCity,
    /// `client.geo_ip.lat`.
    GeoIpLat,
    /// `client.geo_ip.lon`.
    GeoIpLon,
    /// `client.geo_ip.accuracy_radius`.
    GeoIpAccuracyRadius,
    /// The whole OS fingerprint.
    Os,
    /// `client.os.name`.
    OsName,
    /// `client.os.version`.
    OsVersion,
    /// The whole browser fingerprint.
    Browser,
    /// `client.browser.name`.
    BrowserName,
    /// `client.browser.version`.
    BrowserVersion,
    /// The whole credential pair.
    BasicAuth,
    /// `client.basic_auth.username`.
    BasicAuthUsername,
    /// `client.basic_auth.password`.
    BasicAuthPassword,
    /// The whole request record.
    Request,
    /// `request.id`.
    RequestId,
    /// `request.path`.
    RequestPath,
    /// `request.paths`.
    RequestPaths,
    /// `request.query`.
    RequestQuery,
    /// `request.method`.
    RequestMethod,
    /// `request.body`.
    RequestBody,
    /// The query-parameter bag.
    RequestGet,
    /// The form-field bag.
    RequestPost,
    /// The request-header bag.
    RequestHeaders,
    /// `request.time`.
    RequestTime,
    /// The cookie bag.
    RequestCookies,
    /// `request.length`.
    RequestLength,
    /// The whole response record.
    Response,
    /// `response.body`.
    ResponseBody,
    /// `response.code`.
    ResponseCode,
    /// `response.source`.
    ResponseSource,
    /// The response-header bag.
    ResponseHeaders,
    /// `response.length`.
    ResponseLength,
}

/// Dotted tail inside a bag-like field. `raw` keeps the tail as written;
/// `parts` is the dot-split form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentPath {
    /// The tail as written, e.g. `headers.X-Request-Id`.
    pub raw: String,
    /// Dot-split parts.
    pub parts: Vec<String>,
}

impl ContentPath {
    /// No tail at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A tail of exactly one part.
    pub fn simple(part: impl Into<String>) -> Self {
        let part = part.into();
        Self {
            raw: part.clone(),
            parts: vec![part],
        }
    }

    /// A tail from an already-split form.
    pub fn new(raw: impl Into<String>, parts: Vec<String>) -> Self {
        Self {
            raw: raw.into(),
            parts,
        }
    }

    /// A tail split on dots; an empty string yields the empty tail.
    pub fn dotted(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parts = if raw.is_empty() {
            Vec::new()
        } else {
            raw.split('.').map(str::to_owned).collect()
        };
        Self { raw, parts }
    }

    /// No parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Exactly one part.
    pub fn is_simple(&self) -> bool {
        self.parts.len() == 1
    }
}

/// A fully-resolved address: top-level key plus content-path tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPath {
    /// Top-level key.
    pub main_key: DataKey,
    /// Tail into the keyed field, possibly empty.
    pub content_path: ContentPath,
}

impl DataPath {
    /// Address with no tail.
    pub fn main_only(main_key: DataKey) -> Self {
        Self {
            main_key,
            content_path: ContentPath::empty(),
        }
    }

    /// Address with a single-part tail.
    pub fn with_simple(main_key: DataKey, part: impl Into<String>) -> Self {
        Self {
            main_key,
            content_path: ContentPath::simple(part),
        }
    }

    /// Address with an arbitrary tail.
    pub fn new(main_key: DataKey, content_path: ContentPath) -> Self {
        Self {
            main_key,
            content_path,
        }
    }
}
