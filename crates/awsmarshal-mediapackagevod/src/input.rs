//! MediaPackage VOD operation inputs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{Authorization, EgressAccessLogs};

/// Input of `CreatePackagingGroup`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePackagingGroupInput {
    /// Group id. Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// CDN authorization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<Authorization>,
    /// Egress access logging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub egress_access_logs: Option<EgressAccessLogs>,
    /// Tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

impl CreatePackagingGroupInput {
    /// Sets `id`.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets `authorization`.
    #[must_use]
    pub fn with_authorization(mut self, authorization: Authorization) -> Self {
        self.authorization = Some(authorization);
        self
    }

    /// Sets `egressAccessLogs`.
    #[must_use]
    pub fn with_egress_access_logs(mut self, logs: EgressAccessLogs) -> Self {
        self.egress_access_logs = Some(logs);
        self
    }

    /// Replaces `tags`.
    #[must_use]
    pub fn with_tags(mut self, tags: HashMap<String, String>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Adds one tag.
    #[must_use]
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }
}

/// Input of `DescribePackagingGroup`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DescribePackagingGroupInput {
    /// Group id, bound to the URI path. Required.
    #[serde(skip)]
    pub id: Option<String>,
}

impl DescribePackagingGroupInput {
    /// Sets `id`.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Input of `ListPackagingGroups`. Both members travel in the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListPackagingGroupsInput {
    /// Page size, sent as `maxResults`.
    #[serde(skip)]
    pub max_results: Option<i32>,
    /// Token of the next page, sent as `nextToken`.
    #[serde(skip)]
    pub next_token: Option<String>,
}

impl ListPackagingGroupsInput {
    /// Sets `maxResults`.
    #[must_use]
    pub fn with_max_results(mut self, max: i32) -> Self {
        self.max_results = Some(max);
        self
    }

    /// Sets `nextToken`.
    #[must_use]
    pub fn with_next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }
}

/// Input of `DeletePackagingGroup`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeletePackagingGroupInput {
    /// Group id, bound to the URI path. Required.
    #[serde(skip)]
    pub id: Option<String>,
}

impl DeletePackagingGroupInput {
    /// Sets `id`.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}
