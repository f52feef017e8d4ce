//! Envelope builders and error readers for the supported wire protocols.

use awsmarshal_core::canonical::URI_ENCODE_SET;
use awsmarshal_core::{ErrorResponse, RawResponse};
use percent_encoding::utf8_percent_encode;

/// Reads the error document of a non-2xx response.
pub trait Protocol {
    /// Extracts code, message and request id from `raw`.
    fn error_response(raw: &RawResponse) -> ErrorResponse;
}

/// AWS query protocol: form-encoded request, XML response.
#[derive(Debug, Clone, Copy)]
pub struct AwsQuery;

impl Protocol for AwsQuery {
    fn error_response(raw: &RawResponse) -> ErrorResponse {
        awsmarshal_xml::error_response(raw)
    }
}

/// AWS JSON 1.1, dispatched by `X-Amz-Target` or by URI path.
#[derive(Debug, Clone, Copy)]
pub struct AwsJson;

impl Protocol for AwsJson {
    fn error_response(raw: &RawResponse) -> ErrorResponse {
        awsmarshal_json::error_response(raw)
    }
}

/// Percent-encodes a URI label. Required labels must be set and non-empty.
pub fn label(
    shape: &'static str,
    field: &'static str,
    value: Option<&str>,
) -> Result<String, awsmarshal_core::MarshalError> {
    match value {
        Some(v) if !v.is_empty() => Ok(utf8_percent_encode(v, URI_ENCODE_SET).to_string()),
        _ => Err(awsmarshal_core::MarshalError::MissingField { shape, field }),
    }
}

/// Fails with [`MissingField`](awsmarshal_core::MarshalError::MissingField)
/// when a required member is unset.
pub fn require<T: ?Sized>(
    shape: &'static str,
    field: &'static str,
    value: Option<&T>,
) -> Result<(), awsmarshal_core::MarshalError> {
    match value {
        Some(_) => Ok(()),
        None => Err(awsmarshal_core::MarshalError::MissingField { shape, field }),
    }
}

/// Query protocol helpers.
pub mod query {
    use awsmarshal_core::{Envelope, MarshalError, RawResponse, UnmarshalError};
    use awsmarshal_query::{ListStyle, QueryWriter};
    use http::header::CONTENT_TYPE as CONTENT_TYPE_HEADER;
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    /// Content type of query-protocol requests.
    pub const CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

    /// Builds a `POST /` envelope whose form body carries `Action`,
    /// `Version` and every set field of `input`.
    pub fn envelope<T: Serialize + ?Sized>(
        operation: &'static str,
        version: &str,
        list_style: ListStyle,
        input: &T,
    ) -> Result<Envelope, MarshalError> {
        let mut writer = QueryWriter::new(operation, version).with_list_style(list_style);
        writer.write(input, "")?;
        Envelope::builder(operation)
            .header(CONTENT_TYPE_HEADER, CONTENT_TYPE)
            .body(writer.finish())
            .build()
    }

    /// Decodes the `<{operation}Result>` element of a success response.
    /// An empty body yields the default output.
    pub fn result<T: DeserializeOwned + Default>(
        operation: &str,
        raw: &RawResponse,
    ) -> Result<T, UnmarshalError> {
        if raw.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(T::default());
        }
        Ok(awsmarshal_xml::from_xml_result(
            &raw.body,
            &format!("{operation}Result"),
        )?)
    }
}

/// JSON protocol helpers.
pub mod json {
    use awsmarshal_core::{Envelope, EnvelopeBuilder, MarshalError, RawResponse, UnmarshalError};
    use http::Method;
    use http::header::{CONTENT_TYPE, HeaderName};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    /// Header naming the target operation of a JSON RPC call.
    pub const TARGET_HEADER: HeaderName = HeaderName::from_static("x-amz-target");

    /// Builds a `POST /` envelope targeted with `X-Amz-Target: {prefix}.{operation}`.
    pub fn rpc_envelope<T: Serialize + ?Sized>(
        operation: &'static str,
        target_prefix: &str,
        input: &T,
    ) -> Result<Envelope, MarshalError> {
        Envelope::builder(operation)
            .header(CONTENT_TYPE, awsmarshal_json::CONTENT_TYPE)
            .header(TARGET_HEADER, &format!("{target_prefix}.{operation}"))
            .body(awsmarshal_json::to_body(input)?)
            .build()
    }

    /// Starts an envelope addressed by method and (already encoded) path.
    #[must_use]
    pub fn rest_envelope(
        operation: &'static str,
        method: Method,
        path: impl Into<String>,
    ) -> EnvelopeBuilder {
        Envelope::builder(operation)
            .method(method)
            .path(path)
            .header(CONTENT_TYPE, awsmarshal_json::CONTENT_TYPE)
    }

    /// Decodes a success body; an empty body yields the default output.
    pub fn output<T: DeserializeOwned + Default>(raw: &RawResponse) -> Result<T, UnmarshalError> {
        awsmarshal_json::from_body(&raw.body)
    }
}
