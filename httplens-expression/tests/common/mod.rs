//! Scripted backend for execution tests: every expected call is declared
//! up front with its result, order and arguments are asserted, and any
//! call outside the script panics the test.

use std::cell::RefCell;
use std::collections::VecDeque;

use httplens_expression::checker::{
    BasicAuthChecker, BrowserChecker, ClientChecker, GeoIpChecker, HttpDataChecker,
    OptionsChecker, OsChecker, RequestChecker, RequestCookiesChecker, RequestGetChecker,
    RequestHeadersChecker, RequestPostChecker, ResponseChecker, ResponseHeadersChecker,
};
use httplens_expression::matcher::{
    BasicAuthMatcher, BrowserMatcher, ClientMatcher, GeoIpMatcher, HttpDataMatcher,
    OptionsMatcher, OsMatcher, RequestCookiesMatcher, RequestGetMatcher, RequestHeadersMatcher,
    RequestMatcher, RequestPostMatcher, ResponseHeadersMatcher, ResponseMatcher,
};
use httplens_expression::{
    ContentPath, ExecutionError, ExecutionResult, HttpData, PatternId, ValuePredicate,
};

#[derive(Debug)]
struct ScriptedCall {
    call: String,
    result: Result<bool, String>,
}

#[derive(Debug, Default)]
pub struct ScriptedManager {
    expected: RefCell<VecDeque<ScriptedCall>>,
}

impl ScriptedManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares the next expected call and its scripted result.
    pub fn expect(self, call: &str, result: Result<bool, &str>) -> Self {
        self.expected.borrow_mut().push_back(ScriptedCall {
            call: call.to_owned(),
            result: result.map_err(str::to_owned),
        });
        self
    }

    /// Asserts the whole script was consumed.
    pub fn verify(&self) {
        let expected = self.expected.borrow();
        assert!(
            expected.is_empty(),
            "expected backend calls never happened: {expected:?}"
        );
    }

    fn invoke(&self, call: String) -> ExecutionResult {
        let Some(next) = self.expected.borrow_mut().pop_front() else {
            panic!("unexpected backend call: {call}");
        };
        assert_eq!(next.call, call, "backend called out of order");
        next.result.map_err(ExecutionError::Message)
    }
}

macro_rules! pattern_calls {
    ($($method:ident),* $(,)?) => {$(
        fn $method(&self, pattern_id: PatternId, _data: &HttpData) -> ExecutionResult {
            self.invoke(format!("{}({})", stringify!($method), pattern_id))
        }
    )*};
}

macro_rules! pattern_path_calls {
    ($($method:ident),* $(,)?) => {$(
        fn $method(
            &self,
            pattern_id: PatternId,
            path: &ContentPath,
            _data: &HttpData,
        ) -> ExecutionResult {
            self.invoke(format!("{}({}, {})", stringify!($method), pattern_id, path.raw))
        }
    )*};
}

macro_rules! predicate_calls {
    ($($method:ident),* $(,)?) => {$(
        fn $method(&self, _predicate: &ValuePredicate, _data: &HttpData) -> ExecutionResult {
            self.invoke(format!("{}()", stringify!($method)))
        }
    )*};
}

macro_rules! predicate_path_calls {
    ($($method:ident),* $(,)?) => {$(
        fn $method(
            &self,
            _predicate: &ValuePredicate,
            path: &ContentPath,
            _data: &HttpData,
        ) -> ExecutionResult {
            self.invoke(format!("{}({})", stringify!($method), path.raw))
        }
    )*};
}

macro_rules! existence_path_calls {
    ($($method:ident),* $(,)?) => {$(
        fn $method(&self, path: &ContentPath, _data: &HttpData) -> ExecutionResult {
            self.invoke(format!("{}({})", stringify!($method), path.raw))
        }
    )*};
}

impl HttpDataMatcher for ScriptedManager {
    pattern_calls!(
        recursive_match_http_data,
        match_host,
        match_protocol,
        match_port,
        match_http_version,
        match_timestamp,
    );
}

impl OptionsMatcher for ScriptedManager {
    pattern_calls!(recursive_match_options);

    fn match_option(&self, pattern_id: PatternId, name: &str, _data: &HttpData) -> ExecutionResult {
        self.invoke(format!("match_option({pattern_id}, {name})"))
    }
}

impl GeoIpMatcher for ScriptedManager {
    pattern_calls!(
        recursive_match_geo_ip,
        match_geo_ip_country,
        match_geo_ip_country_code,
        match_geo_ip_city,
        match_geo_ip_lat,
        match_geo_ip_lon,
        match_geo_ip_accuracy_radius,
    );
}

impl OsMatcher for ScriptedManager {
    pattern_calls!(recursive_match_os, match_os_name, match_os_version);
}

impl BrowserMatcher for ScriptedManager {
    pattern_calls!(
        recursive_match_browser,
        match_browser_name,
        match_browser_version,
    );
}

impl BasicAuthMatcher for ScriptedManager {
    pattern_calls!(
        recursive_match_basic_auth,
        match_basic_auth_username,
        match_basic_auth_password,
    );
}

impl ClientMatcher for ScriptedManager {
    pattern_calls!(recursive_match_client, match_client_id, match_client_ip);
}

impl RequestGetMatcher for ScriptedManager {
    pattern_calls!(recursive_match_request_get);
    pattern_path_calls!(recursive_match_request_get_value);
}

impl RequestPostMatcher for ScriptedManager {
    pattern_calls!(recursive_match_request_post);
    pattern_path_calls!(recursive_match_request_post_value);
}

impl RequestHeadersMatcher for ScriptedManager {
    pattern_calls!(recursive_match_request_headers);
    pattern_path_calls!(recursive_match_request_header_value);
}

impl RequestCookiesMatcher for ScriptedManager {
    pattern_calls!(recursive_match_request_cookies);
    pattern_path_calls!(recursive_match_request_cookie_value);
}

impl RequestMatcher for ScriptedManager {
    pattern_calls!(
        recursive_match_request,
        match_request_id,
        match_request_path,
        match_request_paths,
        match_request_query,
        match_request_method,
        match_request_time,
        match_request_length,
    );
    pattern_path_calls!(recursive_match_request_body);

    fn match_request_paths_element(
        &self,
        pattern_id: PatternId,
        index: i64,
        path: &ContentPath,
        _data: &HttpData,
    ) -> ExecutionResult {
        self.invoke(format!(
            "match_request_paths_element({pattern_id}, {index}, {})",
            path.raw
        ))
    }
}

impl ResponseHeadersMatcher for ScriptedManager {
    pattern_calls!(recursive_match_response_headers);
    pattern_path_calls!(recursive_match_response_header_value);
}

impl ResponseMatcher for ScriptedManager {
    pattern_calls!(
        recursive_match_response,
        match_response_code,
        match_response_source,
        match_response_length,
    );
    pattern_path_calls!(recursive_match_response_body);
}

impl HttpDataChecker for ScriptedManager {
    predicate_calls!(
        recursive_check_http_data,
        check_host,
        check_protocol,
        check_port,
        check_http_version,
        check_timestamp,
    );
}

impl OptionsChecker for ScriptedManager {
    predicate_calls!(recursive_check_options);

    fn check_option_existence(&self, name: &str, _data: &HttpData) -> ExecutionResult {
        self.invoke(format!("check_option_existence({name})"))
    }

    fn check_option(
        &self,
        _predicate: &ValuePredicate,
        name: &str,
        _data: &HttpData,
    ) -> ExecutionResult {
        self.invoke(format!("check_option({name})"))
    }
}

impl GeoIpChecker for ScriptedManager {
    predicate_calls!(
        recursive_check_geo_ip,
        check_geo_ip_country,
        check_geo_ip_country_code,
        check_geo_ip_city,
        check_geo_ip_lat,
        check_geo_ip_lon,
        check_geo_ip_accuracy_radius,
    );
}

impl OsChecker for ScriptedManager {
    predicate_calls!(recursive_check_os, check_os_name, check_os_version);
}

impl BrowserChecker for ScriptedManager {
    predicate_calls!(
        recursive_check_browser,
        check_browser_name,
        check_browser_version,
    );
}

impl BasicAuthChecker for ScriptedManager {
    predicate_calls!(
        recursive_check_basic_auth,
        check_basic_auth_username,
        check_basic_auth_password,
    );
}

impl ClientChecker for ScriptedManager {
    predicate_calls!(recursive_check_client, check_client_id, check_client_ip);
}

impl RequestGetChecker for ScriptedManager {
    predicate_calls!(recursive_check_request_get);
    predicate_path_calls!(recursive_check_request_get_value);
    existence_path_calls!(check_request_get_value_existence);
}

impl RequestPostChecker for ScriptedManager {
    predicate_calls!(recursive_check_request_post);
    predicate_path_calls!(recursive_check_request_post_value);
    existence_path_calls!(check_request_post_value_existence);
}

impl RequestHeadersChecker for ScriptedManager {
    predicate_calls!(recursive_check_request_headers);
    predicate_path_calls!(recursive_check_request_header_value);
    existence_path_calls!(check_request_header_value_existence);
}

impl RequestCookiesChecker for ScriptedManager {
    predicate_calls!(recursive_check_request_cookies);
    predicate_path_calls!(recursive_check_request_cookie_value);
    existence_path_calls!(check_request_cookie_value_existence);
}

impl RequestChecker for ScriptedManager {
    predicate_calls!(
        recursive_check_request,
        check_request_id,
        check_request_path,
        check_request_paths,
        check_request_query,
        check_request_method,
        check_request_time,
        check_request_length,
    );
    predicate_path_calls!(recursive_check_request_body);

    fn check_request_paths_element(
        &self,
        _predicate: &ValuePredicate,
        index: i64,
        path: &ContentPath,
        _data: &HttpData,
    ) -> ExecutionResult {
        self.invoke(format!(
            "check_request_paths_element({index}, {})",
            path.raw
        ))
    }
}

impl ResponseHeadersChecker for ScriptedManager {
    predicate_calls!(recursive_check_response_headers);
    predicate_path_calls!(recursive_check_response_header_value);
    existence_path_calls!(check_response_header_value_existence);
}

impl ResponseChecker for ScriptedManager {
    predicate_calls!(
        recursive_check_response,
        check_response_code,
        check_response_source,
        check_response_length,
    );
    predicate_path_calls!(recursive_check_response_body);
}
