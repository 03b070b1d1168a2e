//! Value-checking half of the backend surface.
//!
//! `check_*` operations apply a [`ValuePredicate`] to one concrete field;
//! `recursive_check_*` operations sweep an aggregate; `*_existence`
//! operations only probe for presence. The predicate is opaque to the
//! backend.

use crate::data::HttpData;
use crate::data_path::ContentPath;
use crate::predicate::{ExecutionResult, ValuePredicate};

/// Checkers over top-level HTTP metadata.
pub trait HttpDataChecker {
    /// Sweeps the whole record.
    fn recursive_check_http_data(
        &self,
        predicate: &ValuePredicate,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Checks `host`.
    fn check_host(&self, predicate: &ValuePredicate, data: &HttpData) -> ExecutionResult;
    /// Checks `protocol`.
    fn check_protocol(&self, predicate: &ValuePredicate, data: &HttpData) -> ExecutionResult;
    /// Checks `port`.
    fn check_port(&self, predicate: &ValuePredicate, data: &HttpData) -> ExecutionResult;
    /// Checks `http_version`.
    fn check_http_version(&self, predicate: &ValuePredicate, data: &HttpData) -> ExecutionResult;
    /// Checks `timestamp`.
    fn check_timestamp(&self, predicate: &ValuePredicate, data: &HttpData) -> ExecutionResult;
}

/// Checkers over the options bag.
pub trait OptionsChecker {
    /// Sweeps every option.
    fn recursive_check_options(
        &self,
        predicate: &ValuePredicate,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Probes one option for presence.
    fn check_option_existence(&self, name: &str, data: &HttpData) -> ExecutionResult;
    /// Checks one option by name.
    fn check_option(
        &self,
        predicate: &ValuePredicate,
        name: &str,
        data: &HttpData,
    ) -> ExecutionResult;
}

/// Checkers over the geo lookup.
pub trait GeoIpChecker {
    /// Sweeps the whole lookup.
    fn recursive_check_geo_ip(
        &self,
        predicate: &ValuePredicate,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Checks `country`.
    fn check_geo_ip_country(&self, predicate: &ValuePredicate, data: &HttpData)
        -> ExecutionResult;
    /// Checks `country_code`.
    fn check_geo_ip_country_code(
        &self,
        predicate: &ValuePredicate,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Checks `city`.
    fn check_geo_ip_city(&self, predicate: &ValuePredicate, data: &HttpData) -> ExecutionResult;
    /// Checks `lat`.
    fn check_geo_ip_lat(&self, predicate: &ValuePredicate, data: &HttpData) -> ExecutionResult;
    /// Checks `lon`.
    fn check_geo_ip_lon(&self, predicate: &ValuePredicate, data: &HttpData) -> ExecutionResult;
    /// Checks `accuracy_radius`.
    fn check_geo_ip_accuracy_radius(
        &self,
        predicate: &ValuePredicate,
        data: &HttpData,
    ) -> ExecutionResult;
}

/// Checkers over the OS fingerprint.
pub trait OsChecker {
    /// Sweeps the whole fingerprint.
    fn recursive_check_os(&self, predicate: &ValuePredicate, data: &HttpData) -> ExecutionResult;
    /// Checks `name`.
    fn check_os_name(&self, predicate: &ValuePredicate, data: &HttpData) -> ExecutionResult;
    /// Checks `version`.
    fn check_os_version(&self, predicate: &ValuePredicate, data: &HttpData) -> ExecutionResult;
}

/// Checkers over the browser fingerprint.
pub trait BrowserChecker {
    /// Sweeps the whole fingerprint.
    fn recursive_check_browser(
        &self,
        predicate: &ValuePredicate,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Checks `name`.
    fn check_browser_name(&self, predicate: &ValuePredicate, data: &HttpData) -> ExecutionResult;
    /// Checks `version`.
    fn check_browser_version(
        &self,
        predicate: &ValuePredicate,
        data: &HttpData,
    ) -> ExecutionResult;
}

/// Checkers over the basic-auth credentials.
pub trait BasicAuthChecker {
    /// Sweeps both credentials.
    fn recursive_check_basic_auth(
        &self,
        predicate: &ValuePredicate,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Checks `username`.
    fn check_basic_auth_username(
        &self,
        predicate: &ValuePredicate,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Checks `password`.
    fn check_basic_auth_password(
        &self,
        predicate: &ValuePredicate,
        data: &HttpData,
    ) -> ExecutionResult;
}

/// Checkers over the client record.
pub trait ClientChecker: GeoIpChecker + OsChecker + BrowserChecker + BasicAuthChecker {
    /// Sweeps the whole client record.
    fn recursive_check_client(
        &self,
        predicate: &ValuePredicate,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Checks `id`.
    fn check_client_id(&self, predicate: &ValuePredicate, data: &HttpData) -> ExecutionResult;
    /// Checks `ip`.
    fn check_client_ip(&self, predicate: &ValuePredicate, data: &HttpData) -> ExecutionResult;
}

/// Checkers over the query-parameter bag.
pub trait RequestGetChecker {
    /// Sweeps every parameter.
    fn recursive_check_request_get(
        &self,
        predicate: &ValuePredicate,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Probes the value addressed by `path` for presence.
    fn check_request_get_value_existence(
        &self,
        path: &ContentPath,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Checks the value(s) addressed by `path`.
    fn recursive_check_request_get_value(
        &self,
        predicate: &ValuePredicate,
        path: &ContentPath,
        data: &HttpData,
    ) -> ExecutionResult;
}

/// Checkers over the form-field bag.
pub trait RequestPostChecker {
    /// Sweeps every field.
    fn recursive_check_request_post(
        &self,
        predicate: &ValuePredicate,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Probes the value addressed by `path` for presence.
    fn check_request_post_value_existence(
        &self,
        path: &ContentPath,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Checks the value(s) addressed by `path`.
    fn recursive_check_request_post_value(
        &self,
        predicate: &ValuePredicate,
        path: &ContentPath,
        data: &HttpData,
    ) -> ExecutionResult;
}

/// Checkers over the request-header bag.
pub trait RequestHeadersChecker {
    /// Sweeps every header.
    fn recursive_check_request_headers(
        &self,
        predicate: &ValuePredicate,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Probes the value addressed by `path` for presence.
    fn check_request_header_value_existence(
        &self,
        path: &ContentPath,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Checks the value(s) addressed by `path`.
    fn recursive_check_request_header_value(
        &self,
        predicate: &ValuePredicate,
        path: &ContentPath,
        data: &HttpData,
    ) -> ExecutionResult;
}

/// Checkers over the cookie bag.
pub trait RequestCookiesChecker {
    /// Sweeps every cookie.
    fn recursive_check_request_cookies(
        &self,
        predicate: &ValuePredicate,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Probes the value addressed by `path` for presence.
    fn check_request_cookie_value_existence(
        &self,
        path: &ContentPath,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Checks the value(s) addressed by `path`.
    fn recursive_check_request_cookie_value(
        &self,
        predicate: &ValuePredicate,
        path: &ContentPath,
        data: &HttpData,
    ) -> ExecutionResult;
}

/// Checkers over the request record.
pub trait RequestChecker:
    RequestGetChecker + RequestPostChecker + RequestHeadersChecker + RequestCookiesChecker
{
    /// Sweeps the whole request.
    fn recursive_check_request(
        &self,
        predicate: &ValuePredicate,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Checks `id`.
    fn check_request_id(&self, predicate: &ValuePredicate, data: &HttpData) -> ExecutionResult;
    /// Checks the raw path.
    fn check_request_path(&self, predicate: &ValuePredicate, data: &HttpData) -> ExecutionResult;
    /// Checks the segment list as a whole.
    fn check_request_paths(&self, predicate: &ValuePredicate, data: &HttpData)
        -> ExecutionResult;
    /// Checks one positional segment, descending by `path` below it.
    fn check_request_paths_element(
        &self,
        predicate: &ValuePredicate,
        index: i64,
        path: &ContentPath,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Checks the raw query string.
    fn check_request_query(&self, predicate: &ValuePredicate, data: &HttpData)
        -> ExecutionResult;
    /// Checks the method verb.
    fn check_request_method(
        &self,
        predicate: &ValuePredicate,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Sweeps the decoded body, descending by `path` when it is non-empty.
    fn recursive_check_request_body(
        &self,
        predicate: &ValuePredicate,
        path: &ContentPath,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Checks the request time.
    fn check_request_time(&self, predicate: &ValuePredicate, data: &HttpData) -> ExecutionResult;
    /// Checks the body length.
    fn check_request_length(
        &self,
        predicate: &ValuePredicate,
        data: &HttpData,
    ) -> ExecutionResult;
}

/// Checkers over the response-header bag.
pub trait ResponseHeadersChecker {
    /// Sweeps every header.
    fn recursive_check_response_headers(
        &self,
        predicate: &ValuePredicate,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Probes the value addressed by `path` for presence.
    fn check_response_header_value_existence(
        &self,
        path: &ContentPath,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Checks the value(s) addressed by `path`.
    fn recursive_check_response_header_value(
        &self,
        predicate: &ValuePredicate,
        path: &ContentPath,
        data: &HttpData,
    ) -> ExecutionResult;
}

/// Checkers over the response record.
pub trait ResponseChecker: ResponseHeadersChecker {
    /// Sweeps the whole response.
    fn recursive_check_response(
        &self,
        predicate: &ValuePredicate,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Sweeps the decoded body, descending by `path` when it is non-empty.
    fn recursive_check_response_body(
        &self,
        predicate: &ValuePredicate,
        path: &ContentPath,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Checks the status code.
    fn check_response_code(&self, predicate: &ValuePredicate, data: &HttpData)
        -> ExecutionResult;
    /// Checks the response source.
    fn check_response_source(
        &self,
        predicate: &ValuePredicate,
        data: &HttpData,
    ) -> ExecutionResult;
    /// Checks the body length.
    fn check_response_length(
        &self,
        predicate: &ValuePredicate,
        data: &HttpData,
    ) -> ExecutionResult;
}

/// The full checking surface.
pub trait ExecutionChecker:
    HttpDataChecker + OptionsChecker + ClientChecker + RequestChecker + ResponseChecker
{
}

impl<T> ExecutionChecker for T where
    T: HttpDataChecker + OptionsChecker + ClientChecker + RequestChecker + ResponseChecker
{
}
