//! Pattern-matching half of the backend surface.
//!
//! `match_*` operations test one concrete field against a stored pattern;
//! `recursive_match_*` operations sweep an aggregate (a record or a bag),
//! typically decoding nested content on the way — which is where backends
//! reach for the content parser. `pattern_id` is an opaque handle; pattern
//! storage and matching semantics are entirely the backend's.

use crate::data::HttpData;
use crate::data_path::ContentPath;
use crate::predicate::{ExecutionResult, PatternId};

/// Matchers over top-level HTTP metadata.
pub trait HttpDataMatcher {
    /// Sweeps the whole record.
    fn recursive_match_http_data(&self, pattern_id: PatternId, data: &HttpData)
        -> ExecutionResult;
    /// Tests `host`.
    fn match_host(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
    /// Tests `protocol`.
    fn match_protocol(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
    /// Tests `port`.
    fn match_port(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
    /// Tests `http_version`.
    fn match_http_version(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
    /// Tests `timestamp`.
    fn match_timestamp(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
}

/// Matchers over the options bag.
pub trait OptionsMatcher {
    /// Sweeps every option.
    fn recursive_match_options(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
    /// Tests one option by name.
    fn match_option(&self, pattern_id: PatternId, name: &str, data: &HttpData)
        -> ExecutionResult;
}

/// Matchers over the geo lookup.
pub trait GeoIpMatcher {
    /// Sweeps the whole lookup.
    fn recursive_match_geo_ip(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
    /// Tests `country`.
    fn match_geo_ip_country(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
    /// Tests `country_code`.
    fn match_geo_ip_country_code(
        &self,
        pattern_id: PatternId,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Tests `city`.
    fn match_geo_ip_city(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
    /// Tests `lat`.
    fn match_geo_ip_lat(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
    /// Tests `lon`.
    fn match_geo_ip_lon(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
    /// Tests `accuracy_radius`.
    fn match_geo_ip_accuracy_radius(
        &self,
        pattern_id: PatternId,
        data: &HttpData,
    ) -> ExecutionResult;
}

/// Matchers over the OS fingerprint.
pub trait OsMatcher {
    /// Sweeps the whole fingerprint.
    fn recursive_match_os(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
    /// Tests `name`.
    fn match_os_name(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
    /// Tests `version`.
    fn match_os_version(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
}

/// Matchers over the browser fingerprint.
pub trait BrowserMatcher {
    /// Sweeps the whole fingerprint.
    fn recursive_match_browser(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
    /// Tests `name`.
    fn match_browser_name(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
    /// Tests `version`.
    fn match_browser_version(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
}

/// Matchers over the basic-auth credentials.
pub trait BasicAuthMatcher {
    /// Sweeps both credentials.
    fn recursive_match_basic_auth(
        &self,
        pattern_id: PatternId,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Tests `username`.
    fn match_basic_auth_username(
        &self,
        pattern_id: PatternId,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Tests `password`.
    fn match_basic_auth_password(
        &self,
        pattern_id: PatternId,
        data: &HttpData,
    ) -> ExecutionResult;
}

/// Matchers over the client record.
pub trait ClientMatcher: GeoIpMatcher + OsMatcher + BrowserMatcher + BasicAuthMatcher {
    /// Sweeps the whole client record.
    fn recursive_match_client(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
    /// Tests `id`.
    fn match_client_id(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
    /// Tests `ip`.
    fn match_client_ip(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
}

/// Matchers over the query-parameter bag.
pub trait RequestGetMatcher {
    /// Sweeps every parameter.
    fn recursive_match_request_get(
        &self,
        pattern_id: PatternId,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Sweeps the value(s) addressed by `path`.
    fn recursive_match_request_get_value(
        &self,
        pattern_id: PatternId,
        path: &ContentPath,
        data: &HttpData,
    ) -> ExecutionResult;
}

/// Matchers over the form-field bag.
pub trait RequestPostMatcher {
    /// Sweeps every field.
    fn recursive_match_request_post(
        &self,
        pattern_id: PatternId,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Sweeps the value(s) addressed by `path`.
    fn recursive_match_request_post_value(
        &self,
        pattern_id: PatternId,
        path: &ContentPath,
        data: &HttpData,
    ) -> ExecutionResult;
}

/// Matchers over the request-header bag.
pub trait RequestHeadersMatcher {
    /// Sweeps every header.
    fn recursive_match_request_headers(
        &self,
        pattern_id: PatternId,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Sweeps the value(s) addressed by `path`.
    fn recursive_match_request_header_value(
        &self,
        pattern_id: PatternId,
        path: &ContentPath,
        data: &HttpData,
    ) -> ExecutionResult;
}

/// Matchers over the cookie bag.
pub trait RequestCookiesMatcher {
    /// Sweeps every cookie.
    fn recursive_match_request_cookies(
        &self,
        pattern_id: PatternId,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Sweeps the value(s) addressed by `path`.
    fn recursive_match_request_cookie_value(
        &self,
        pattern_id: PatternId,
        path: &ContentPath,
        data: &HttpData,
    ) -> ExecutionResult;
}

/// Matchers over the request record.
pub trait RequestMatcher:
    RequestGetMatcher + RequestPostMatcher + RequestHeadersMatcher + RequestCookiesMatcher
{
    /// Sweeps the whole request.
    fn recursive_match_request(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
    /// Tests `id`.
    fn match_request_id(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
    /// Tests the raw path.
    fn match_request_path(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
    /// Tests the segment list as a whole.
    fn match_request_paths(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
    /// Tests one positional segment, descending by `path` below it.
    fn match_request_paths_element(
        &self,
        pattern_id: PatternId,
        index: i64,
        path: &ContentPath,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Tests the raw query string.
    fn match_request_query(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
    /// Tests the method verb.
    fn match_request_method(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
    /// Sweeps the decoded body, descending by `path` when it is non-empty.
    fn recursive_match_request_body(
        &self,
        pattern_id: PatternId,
        path: &ContentPath,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Tests the request time.
    fn match_request_time(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
    /// Tests the body length.
    fn match_request_length(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
}

/// Matchers over the response-header bag.
pub trait ResponseHeadersMatcher {
    /// Sweeps every header.
    fn recursive_match_response_headers(
        &self,
        pattern_id: PatternId,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Sweeps the value(s) addressed by `path`.
    fn recursive_match_response_header_value(
        &self,
        pattern_id: PatternId,
        path: &ContentPath,
        data: &HttpData,
    ) -> ExecutionResult;
}

/// Matchers over the response record.
pub trait ResponseMatcher: ResponseHeadersMatcher {
    /// Sweeps the whole response.
    fn recursive_match_response(&self, pattern_id: PatternId, data: &HttpData)
        -> ExecutionResult;
    /// Sweeps the decoded body, descending by `path` when it is non-empty.
    fn recursive_match_response_body(
        &self,
        pattern_id: PatternId,
        path: &ContentPath,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Tests the status code.
    fn match_response_code(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
    /// Tests the response source.
    fn match_response_source(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
    /// Tests the body length.
    fn match_response_length(&self, pattern_id: PatternId, data: &HttpData) -> ExecutionResult;
}

/// The full matching surface.
pub trait ExecutionMatcher:
    HttpDataMatcher + OptionsMatcher + ClientMatcher + RequestMatcher + ResponseMatcher
{
}

impl<T> ExecutionMatcher for T where
    T: HttpDataMatcher + OptionsMatcher + ClientMatcher + RequestMatcher + ResponseMatcher
{
}
