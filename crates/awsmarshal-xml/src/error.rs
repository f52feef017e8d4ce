//! XML codec errors.

use std::fmt;

use awsmarshal_core::{UnmarshalError, WireFormat};

/// Errors raised while reading an XML document.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// An error from the underlying quick-xml reader.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// The document ended inside an element.
    #[error("unexpected end of document inside <{0}>")]
    UnexpectedEof(String),

    /// A required XML element was missing.
    #[error("missing required XML element: {0}")]
    MissingElement(String),

    /// Text content could not be decoded or parsed.
    #[error("failed to parse value: {0}")]
    ParseError(String),

    /// Raised by serde while building a model.
    #[error("{0}")]
    Custom(String),
}

impl serde::de::Error for XmlError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Self::Custom(msg.to_string())
    }
}

impl From<XmlError> for UnmarshalError {
    fn from(err: XmlError) -> Self {
        match err {
            XmlError::MissingElement(element) => UnmarshalError::MissingElement {
                format: WireFormat::Xml,
                element,
            },
            other => UnmarshalError::malformed(WireFormat::Xml, other),
        }
    }
}
