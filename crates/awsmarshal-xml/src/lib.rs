//! XML codec for awsmarshal.
//!
//! - [`from_xml`], [`from_xml_result`] and [`from_xml_element`] decode models
//!   by walking quick-xml pull events; unknown elements are skipped.
//! - [`to_xml`] writes a model as an element tree.
//! - [`error_response`] and [`error_payload`] decode query-protocol error
//!   documents (`<ErrorResponse><Error>…</Error><RequestId/></ErrorResponse>`
//!   or a bare `<Error>`).
//!
//! Conventions: booleans are `true`/`false`, timestamps ISO 8601
//! (`2006-02-03T16:45:09.000Z`), blobs base64.
//!
//! The reader never builds a DOM. A struct is decoded by remembering the
//! depth it started at and consuming events until the matching end tag:
//! start tags naming a declared field are handed to that field, anything
//! else is skipped with its whole subtree. Elements that are present but
//! empty decode as empty strings, lists or structs, so they stay distinct
//! from absent ones.
//!
//! ```
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! #[serde(rename_all = "PascalCase")]
//! struct GetHealthCheckCountResult {
//!     health_check_count: Option<i64>,
//! }
//!
//! let body = b"<GetHealthCheckCountResponse>\
//!     <GetHealthCheckCountResult><HealthCheckCount>3</HealthCheckCount></GetHealthCheckCountResult>\
//!     <ResponseMetadata><RequestId>req-1</RequestId></ResponseMetadata>\
//!     </GetHealthCheckCountResponse>";
//! let out: GetHealthCheckCountResult =
//!     awsmarshal_xml::from_xml_result(body, "GetHealthCheckCountResult")?;
//! assert_eq!(out.health_check_count, Some(3));
//! # Ok::<(), awsmarshal_xml::XmlError>(())
//! ```

mod de;
pub mod error;
mod ser;

use awsmarshal_core::{ErrorResponse, RawResponse, UnmarshalError};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

pub use de::{from_xml, from_xml_element, from_xml_result};
pub use error::XmlError;
pub use ser::to_xml;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ErrorDetail {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ErrorDocument {
    request_id: Option<String>,
}

/// Reduces an XML error response to its code, message and request id.
///
/// A body without a `<Code>` gets the HTTP status name as its code.
#[must_use]
pub fn error_response(raw: &RawResponse) -> ErrorResponse {
    let detail = match from_xml_element::<ErrorDetail>(&raw.body, "Error") {
        Ok(detail) => detail,
        Err(e) => {
            debug!(status = %raw.status, error = %e, "error response has no readable <Error> element");
            ErrorDetail::default()
        }
    };
    let document_request_id = from_xml::<ErrorDocument>(&raw.body)
        .ok()
        .and_then(|doc| doc.request_id);

    ErrorResponse {
        status: raw.status,
        code: detail
            .code
            .map(|c| c.trim().to_owned())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| ErrorResponse::status_code_name(raw.status)),
        message: detail.message,
        request_id: detail
            .request_id
            .or(document_request_id)
            .or_else(|| raw.request_id().map(str::to_owned)),
        body: raw.body.clone(),
    }
}

/// Decodes the `<Error>` element of an error response into a typed payload.
pub fn error_payload<T: DeserializeOwned>(resp: &ErrorResponse) -> Result<T, UnmarshalError> {
    Ok(from_xml_element(&resp.body, "Error")?)
}
