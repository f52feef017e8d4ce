//! JSON codec for awsmarshal.
//!
//! Models go through `serde_json` directly: unset fields are skipped on the
//! way out, unknown keys are ignored and `null` decodes to `None` on the way
//! in. Timestamps are epoch seconds, blobs base64.
//!
//! ```
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
//! #[serde(rename_all = "PascalCase")]
//! struct RetainRule {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     count: Option<i32>,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     interval: Option<i32>,
//! }
//!
//! let body = awsmarshal_json::to_body(&RetainRule { count: Some(5), interval: None })?;
//! assert_eq!(body.as_ref(), br#"{"Count":5}"#);
//!
//! let back: RetainRule = awsmarshal_json::from_body(br#"{"Count":5,"Interval":null}"#)?;
//! assert_eq!(back, RetainRule { count: Some(5), interval: None });
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Error bodies follow the AWS JSON conventions:
//!
//! ```json
//! {
//!   "__type": "com.amazonaws.ram#UnknownResourceException",
//!   "message": "The specified resource was not found"
//! }
//! ```

use awsmarshal_core::{
    ErrorResponse, MarshalError, RawResponse, UnmarshalError, WireFormat,
};
use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Content type of AWS JSON 1.1 requests.
pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

/// Header some services use to carry the error code.
pub const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";

/// Writes `model` as a JSON object. A model with no set fields becomes `{}`.
pub fn to_body<T: Serialize + ?Sized>(model: &T) -> Result<Bytes, MarshalError> {
    serde_json::to_vec(model)
        .map(Bytes::from)
        .map_err(|e| MarshalError::serialize(WireFormat::Json, e))
}

/// Decodes a JSON body. An empty body yields the model's default (all unset).
pub fn from_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, UnmarshalError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| UnmarshalError::malformed(WireFormat::Json, e))
}

/// Strips the namespace (`aws.protocoltests#`) and any `:`-suffix from an
/// error code.
#[must_use]
pub fn sanitize_error_code(raw: &str) -> &str {
    let code = raw.split(':').next().unwrap_or(raw);
    let code = code.rsplit('#').next().unwrap_or(code);
    code.trim()
}

/// Reduces a JSON error response to its code, message and request id.
///
/// The code comes from the `x-amzn-ErrorType` header, else `__type`, else
/// `code`; a body naming none gets the HTTP status name.
#[must_use]
pub fn error_response(raw: &RawResponse) -> ErrorResponse {
    let body = if raw.body.iter().all(u8::is_ascii_whitespace) {
        Value::Null
    } else {
        match serde_json::from_slice::<Value>(&raw.body) {
            Ok(body) => body,
            Err(e) => {
                debug!(status = %raw.status, error = %e, "error response body is not JSON");
                Value::Null
            }
        }
    };
    let field = |name: &str| body.get(name).and_then(Value::as_str);

    let code = raw
        .header_str(ERROR_TYPE_HEADER)
        .or_else(|| field("__type"))
        .or_else(|| field("code"))
        .or_else(|| field("Code"))
        .map(sanitize_error_code)
        .filter(|c| !c.is_empty())
        .map_or_else(|| ErrorResponse::status_code_name(raw.status), str::to_owned);

    let message = field("message")
        .or_else(|| field("Message"))
        .or_else(|| field("errorMessage"))
        .map(str::to_owned);

    ErrorResponse {
        status: raw.status,
        code,
        message,
        request_id: raw.request_id().map(str::to_owned),
        body: raw.body.clone(),
    }
}

/// Decodes the body of an error response into a typed payload.
pub fn error_payload<T: DeserializeOwned + Default>(
    resp: &ErrorResponse,
) -> Result<T, UnmarshalError> {
    from_body(&resp.body)
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    struct RetainRule {
        #[serde(skip_serializing_if = "Option::is_none")]
        count: Option<i32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        interval: Option<i32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        interval_unit: Option<String>,
    }

    #[test]
    fn test_should_write_only_set_fields() {
        let rule = RetainRule {
            count: Some(5),
            ..RetainRule::default()
        };
        assert_eq!(to_body(&rule).unwrap(), Bytes::from_static(br#"{"Count":5}"#));
        assert_eq!(to_body(&RetainRule::default()).unwrap(), Bytes::from_static(b"{}"));
    }

    #[test]
    fn test_should_decode_empty_body_as_default() {
        assert_eq!(from_body::<RetainRule>(b"").unwrap(), RetainRule::default());
        assert_eq!(from_body::<RetainRule>(b"  \n").unwrap(), RetainRule::default());
    }

    #[test]
    fn test_should_ignore_unknown_keys_and_nulls() {
        let rule: RetainRule =
            from_body(br#"{"Count":5,"Interval":null,"Brand":"new"}"#).unwrap();
        assert_eq!(rule.count, Some(5));
        assert!(rule.interval.is_none());
    }

    #[test]
    fn test_should_fail_on_malformed_body() {
        assert!(matches!(
            from_body::<RetainRule>(br#"{"Count":"five"}"#),
            Err(UnmarshalError::Malformed {
                format: WireFormat::Json,
                ..
            })
        ));
    }

    #[test]
    fn test_should_sanitize_error_codes() {
        assert_eq!(
            sanitize_error_code("com.amazonaws.ram#MalformedArnException"),
            "MalformedArnException"
        );
        assert_eq!(
            sanitize_error_code("ValidationException:http://internal.amazon.com/"),
            "ValidationException"
        );
        assert_eq!(sanitize_error_code("ConflictException"), "ConflictException");
    }

    #[test]
    fn test_should_prefer_error_type_header() {
        let raw = RawResponse::new(
            StatusCode::NOT_FOUND,
            r#"{"__type":"Other","message":"gone"}"#,
        )
        .with_header("x-amzn-errortype", "ResourceNotFoundException:http://x/")
        .with_header("x-amzn-requestid", "req-7");
        let resp = error_response(&raw);
        assert_eq!(resp.code, "ResourceNotFoundException");
        assert_eq!(resp.message.as_deref(), Some("gone"));
        assert_eq!(resp.request_id.as_deref(), Some("req-7"));
    }

    #[test]
    fn test_should_read_type_then_code_fields() {
        let raw = RawResponse::new(
            StatusCode::BAD_REQUEST,
            r#"{"__type":"aws#InvalidParameterException","Message":"bad"}"#,
        );
        let resp = error_response(&raw);
        assert_eq!(resp.code, "InvalidParameterException");
        assert_eq!(resp.message.as_deref(), Some("bad"));

        let raw = RawResponse::new(StatusCode::CONFLICT, r#"{"code":"ConflictException"}"#);
        assert_eq!(error_response(&raw).code, "ConflictException");
    }

    #[test]
    fn test_should_fall_back_to_status_name() {
        let raw = RawResponse::new(StatusCode::INTERNAL_SERVER_ERROR, "not json");
        let resp = error_response(&raw);
        assert_eq!(resp.code, "InternalServerError");
        assert!(resp.message.is_none());
    }

    #[derive(Clone, Default)]
    struct Messages(std::sync::Arc<std::sync::Mutex<Vec<String>>>);

    impl tracing::field::Visit for Messages {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            if let Ok(mut seen) = self.0.lock() {
                seen.push(format!("{}={value:?}", field.name()));
            }
        }
    }

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for Messages {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            event.record(&mut self.clone());
        }
    }

    #[test]
    fn test_should_log_unparseable_error_body() {
        use tracing_subscriber::layer::SubscriberExt;

        let messages = Messages::default();
        let subscriber = tracing_subscriber::registry().with(messages.clone());
        let resp = tracing::subscriber::with_default(subscriber, || {
            error_response(&RawResponse::new(StatusCode::BAD_GATEWAY, "<html>proxy</html>"))
        });
        assert_eq!(resp.code, "BadGateway");

        let seen = messages.0.lock().unwrap();
        assert!(seen.iter().any(|m| m.starts_with("error=")));
        assert!(seen.iter().any(|m| m.contains("error response body is not JSON")));
    }

    #[test]
    fn test_should_treat_empty_error_body_as_absent() {
        let resp = error_response(
            &RawResponse::new(StatusCode::NOT_FOUND, "").with_header("x-amzn-errortype", "NotFoundException"),
        );
        assert_eq!(resp.code, "NotFoundException");
        assert!(resp.message.is_none());
    }
}
