//! CORS headers echoed back to the RSVP form.

use lambda_http::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    ACCESS_CONTROL_MAX_AGE, ACCESS_CONTROL_REQUEST_HEADERS, ORIGIN, VARY,
};
use lambda_http::http::{HeaderMap, HeaderValue};

/// Methods the handler answers; also the `Allow` header on 405.
pub const ALLOWED_METHODS: &str = "POST, OPTIONS, HEAD";

const DEFAULT_ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";
const VARY_HEADERS: &str = "Origin, Access-Control-Request-Method, Access-Control-Request-Headers";
const PREFLIGHT_MAX_AGE: &str = "86400";

/// CORS policy derived from a single request.
///
/// The caller's `Origin` and requested headers are reflected verbatim, falling back to
/// `*` and the default header list when the browser did not send them.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    origin: HeaderValue,
    request_headers: HeaderValue,
}

impl CorsPolicy {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            origin: headers
                .get(ORIGIN)
                .cloned()
                .unwrap_or_else(|| HeaderValue::from_static("*")),
            request_headers: headers
                .get(ACCESS_CONTROL_REQUEST_HEADERS)
                .cloned()
                .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_ALLOW_HEADERS)),
        }
    }

    /// Headers attached to every response.
    pub fn base_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, self.origin.clone());
        headers.insert(VARY, HeaderValue::from_static(VARY_HEADERS));
        headers
    }

    /// Headers for an `OPTIONS` preflight answer.
    pub fn preflight_headers(&self) -> HeaderMap {
        let mut headers = self.base_headers();
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOWED_METHODS),
        );
        headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, self.request_headers.clone());
        headers.insert(ACCESS_CONTROL_MAX_AGE, HeaderValue::from_static(PREFLIGHT_MAX_AGE));
        headers
    }
}
