//! AWS query protocol marshaller.
//!
//! A model is flattened into ordered `name=value` pairs by walking its serde
//! field list. Unset (`None`) fields produce nothing.
//!
//! | value | parameters |
//! |-------|------------|
//! | scalar | `Prefix.Field=value` |
//! | list | `Field.1`, `Field.2`, ... (or `Field.member.N`) |
//! | empty list or map | `Field=` |
//! | map | `Field.entry.N.key`, `Field.entry.N.value` |
//! | nested model | `Field.Inner=value` |
//!
//! Timestamps are written as ISO 8601, booleans as `true`/`false`.
//!
//! Parameters keep the order of the model's fields, so the same model always
//! yields the same body. [`QueryWriter`] leads every body with `Action` and
//! `Version` and form-encodes it on [`finish`](QueryWriter::finish):
//!
//! ```
//! use awsmarshal_query::QueryWriter;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! #[serde(rename_all = "PascalCase")]
//! struct ListHealthChecks {
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     marker: Option<String>,
//!     #[serde(skip_serializing_if = "Option::is_none")]
//!     max_items: Option<String>,
//! }
//!
//! let mut writer = QueryWriter::new("ListHealthChecks", "2013-04-01");
//! writer.write(&ListHealthChecks { marker: None, max_items: Some("10".to_owned()) }, "")?;
//! assert_eq!(writer.finish(), "Action=ListHealthChecks&Version=2013-04-01&MaxItems=10");
//! # Ok::<(), awsmarshal_core::MarshalError>(())
//! ```
//!
//! There is no query decoder: query-protocol services answer in XML, which
//! `awsmarshal-xml` reads.

mod ser;

pub use ser::to_params;

use awsmarshal_core::MarshalError;
use serde::Serialize;
use tracing::{debug, trace};

/// How list members are numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListStyle {
    /// `Field.1`, `Field.2`, ...
    #[default]
    Flat,
    /// `Field.member.1`, `Field.member.2`, ...
    Member,
}

/// Accumulates the parameters of one query-protocol request.
#[derive(Debug, Clone)]
pub struct QueryWriter {
    params: Vec<(String, String)>,
    list_style: ListStyle,
}

impl QueryWriter {
    /// Starts a request body with the `Action` and `Version` parameters.
    #[must_use]
    pub fn new(action: &str, version: &str) -> Self {
        Self {
            params: vec![
                ("Action".to_owned(), action.to_owned()),
                ("Version".to_owned(), version.to_owned()),
            ],
            list_style: ListStyle::default(),
        }
    }

    /// Changes the list numbering used by [`write`](Self::write).
    #[must_use]
    pub fn with_list_style(mut self, list_style: ListStyle) -> Self {
        self.list_style = list_style;
        self
    }

    /// Adds a single parameter.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.params.push((name.into(), value.into()));
    }

    /// Writes every set field of `model` under `prefix`.
    ///
    /// On error nothing is added to the writer.
    pub fn write<T: Serialize + ?Sized>(
        &mut self,
        model: &T,
        prefix: &str,
    ) -> Result<(), MarshalError> {
        let params = to_params(model, prefix, self.list_style).inspect_err(|e| {
            debug!(action = self.action(), prefix, error = %e, "query marshalling failed");
        })?;
        trace!(action = self.action(), prefix, added = params.len(), "wrote query parameters");
        self.params.extend(params);
        Ok(())
    }

    /// Value of the leading `Action` parameter.
    #[must_use]
    pub fn action(&self) -> &str {
        self.params.first().map_or("", |(_, action)| action.as_str())
    }

    /// Parameters written so far, in order.
    #[must_use]
    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Renders the `application/x-www-form-urlencoded` body.
    #[must_use]
    pub fn finish(self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.params)
            .finish()
    }
}
