//! HTTP helpers for the Lambda function.

use lambda_http::http::header::{ALLOW, CONTENT_TYPE};
use lambda_http::http::{HeaderMap, HeaderValue, StatusCode};
use lambda_http::{Body, Response};
use serde::Serialize;

use crate::cors::ALLOWED_METHODS;
use crate::{Error, Result};

/// Success body returned once the provider accepted the email.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// Error body; `detail` carries provider diagnostics on 502.
#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<&'a str>,
}

/// Create a bodiless response carrying the given headers.
pub fn empty_response(status: StatusCode, headers: HeaderMap) -> Response<Body> {
    let mut response = Response::new(Body::Empty);
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}

/// Create a JSON response with the given status code and data.
pub fn json_response<T: Serialize>(
    status: StatusCode,
    data: &T,
    mut headers: HeaderMap,
) -> Result<Response<Body>> {
    let body = serde_json::to_string(data)?;
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}

/// Create an error response for the given error.
///
/// Infallible so the top-level handler can always answer.
pub fn error_response(error: &Error, mut headers: HeaderMap) -> Response<Body> {
    if matches!(error, Error::MethodNotAllowed) {
        headers.insert(ALLOW, HeaderValue::from_static(ALLOWED_METHODS));
    }

    let body = ErrorBody {
        error: error.to_string(),
        detail: error.detail(),
    };

    json_response(error.status_code(), &body, headers.clone()).unwrap_or_else(|_| {
        let mut response = empty_response(error.status_code(), headers);
        *response.body_mut() = Body::from(r#"{"error":"Internal error"}"#);
        response
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body_json(response: &Response<Body>) -> serde_json::Value {
        serde_json::from_slice(response.body().as_ref()).unwrap()
    }

    #[test]
    fn test_method_not_allowed_sets_allow_header() {
        let response = error_response(&Error::MethodNotAllowed, HeaderMap::new());
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[ALLOW], "POST, OPTIONS, HEAD");
        assert_eq!(body_json(&response)["error"], "Method not allowed. Use POST.");
    }

    #[test]
    fn test_upstream_error_includes_detail() {
        let err = Error::Upstream {
            status: 403,
            detail: "domain not verified".to_string(),
        };
        let response = error_response(&err, HeaderMap::new());
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");

        let body = body_json(&response);
        assert_eq!(body["error"], "Resend failed");
        assert_eq!(body["detail"], "domain not verified");
    }

    #[test]
    fn test_error_without_detail_omits_field() {
        let response = error_response(&Error::MissingField("email"), HeaderMap::new());
        let body = body_json(&response);
        assert_eq!(body["error"], "Missing field: email");
        assert!(body.get("detail").is_none());
    }
}
