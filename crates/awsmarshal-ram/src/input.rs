//! RAM operation inputs.

use serde::{Deserialize, Serialize};

use crate::types::{ResourceOwner, ResourceShareStatus, Tag, TagFilter};

/// Input of `CreateResourceShare`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResourceShareInput {
    /// Share name. Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Resources to share.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arns: Option<Vec<String>>,
    /// Principals to share with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principals: Option<Vec<String>>,
    /// Tags on the share.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// Whether principals outside the organization may be added.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_external_principals: Option<bool>,
    /// Idempotency token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
    /// Permissions to attach.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permission_arns: Option<Vec<String>>,
}

impl CreateResourceShareInput {
    /// Sets `name`.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets `resourceArns`.
    #[must_use]
    pub fn with_resource_arns(mut self, arns: Vec<String>) -> Self {
        self.resource_arns = Some(arns);
        self
    }

    /// Sets `principals`.
    #[must_use]
    pub fn with_principals(mut self, principals: Vec<String>) -> Self {
        self.principals = Some(principals);
        self
    }

    /// Sets `tags`.
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Sets `allowExternalPrincipals`.
    #[must_use]
    pub fn with_allow_external_principals(mut self, allow: bool) -> Self {
        self.allow_external_principals = Some(allow);
        self
    }

    /// Sets `clientToken`.
    #[must_use]
    pub fn with_client_token(mut self, token: impl Into<String>) -> Self {
        self.client_token = Some(token.into());
        self
    }
}

/// Input of `GetResourceShares`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetResourceSharesInput {
    /// Restrict to these shares.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_share_arns: Option<Vec<String>>,
    /// Restrict to this state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_share_status: Option<ResourceShareStatus>,
    /// Whose shares to list. Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_owner: Option<ResourceOwner>,
    /// Restrict to this name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Restrict by tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_filters: Option<Vec<TagFilter>>,
    /// Token of the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl GetResourceSharesInput {
    /// Sets `resourceOwner`.
    #[must_use]
    pub fn with_resource_owner(mut self, owner: ResourceOwner) -> Self {
        self.resource_owner = Some(owner);
        self
    }

    /// Sets `resourceShareArns`.
    #[must_use]
    pub fn with_resource_share_arns(mut self, arns: Vec<String>) -> Self {
        self.resource_share_arns = Some(arns);
        self
    }

    /// Sets `resourceShareStatus`.
    #[must_use]
    pub fn with_resource_share_status(mut self, status: ResourceShareStatus) -> Self {
        self.resource_share_status = Some(status);
        self
    }

    /// Sets `tagFilters`.
    #[must_use]
    pub fn with_tag_filters(mut self, filters: Vec<TagFilter>) -> Self {
        self.tag_filters = Some(filters);
        self
    }

    /// Sets `nextToken`.
    #[must_use]
    pub fn with_next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }

    /// Sets `maxResults`.
    #[must_use]
    pub fn with_max_results(mut self, max: i32) -> Self {
        self.max_results = Some(max);
        self
    }
}

/// Input of `AssociateResourceShare`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociateResourceShareInput {
    /// Share to extend. Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_share_arn: Option<String>,
    /// Resources to add.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arns: Option<Vec<String>>,
    /// Principals to add.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principals: Option<Vec<String>>,
    /// Idempotency token.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
}

impl AssociateResourceShareInput {
    /// Sets `resourceShareArn`.
    #[must_use]
    pub fn with_resource_share_arn(mut self, arn: impl Into<String>) -> Self {
        self.resource_share_arn = Some(arn.into());
        self
    }

    /// Sets `resourceArns`.
    #[must_use]
    pub fn with_resource_arns(mut self, arns: Vec<String>) -> Self {
        self.resource_arns = Some(arns);
        self
    }

    /// Sets `principals`.
    #[must_use]
    pub fn with_principals(mut self, principals: Vec<String>) -> Self {
        self.principals = Some(principals);
        self
    }

    /// Sets `clientToken`.
    #[must_use]
    pub fn with_client_token(mut self, token: impl Into<String>) -> Self {
        self.client_token = Some(token.into());
        self
    }
}

/// Input of `DeleteResourceShare`. Both members travel in the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResourceShareInput {
    /// Share to delete. Required.
    #[serde(skip)]
    pub resource_share_arn: Option<String>,
    /// Idempotency token.
    #[serde(skip)]
    pub client_token: Option<String>,
}

impl DeleteResourceShareInput {
    /// Sets `resourceShareArn`.
    #[must_use]
    pub fn with_resource_share_arn(mut self, arn: impl Into<String>) -> Self {
        self.resource_share_arn = Some(arn.into());
        self
    }

    /// Sets `clientToken`.
    #[must_use]
    pub fn with_client_token(mut self, token: impl Into<String>) -> Self {
        self.client_token = Some(token.into());
        self
    }
}

/// Input of `ListResources`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResourcesInput {
    /// Whose resources to list. Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_owner: Option<ResourceOwner>,
    /// Restrict to one principal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<String>,
    /// Restrict to one resource type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    /// Restrict to these resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_arns: Option<Vec<String>>,
    /// Restrict to these shares.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_share_arns: Option<Vec<String>>,
    /// Token of the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
}

impl ListResourcesInput {
    /// Sets `resourceOwner`.
    #[must_use]
    pub fn with_resource_owner(mut self, owner: ResourceOwner) -> Self {
        self.resource_owner = Some(owner);
        self
    }

    /// Sets `principal`.
    #[must_use]
    pub fn with_principal(mut self, principal: impl Into<String>) -> Self {
        self.principal = Some(principal.into());
        self
    }

    /// Sets `resourceType`.
    #[must_use]
    pub fn with_resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = Some(resource_type.into());
        self
    }

    /// Sets `resourceShareArns`.
    #[must_use]
    pub fn with_resource_share_arns(mut self, arns: Vec<String>) -> Self {
        self.resource_share_arns = Some(arns);
        self
    }

    /// Sets `nextToken`.
    #[must_use]
    pub fn with_next_token(mut self, token: impl Into<String>) -> Self {
        self.next_token = Some(token.into());
        self
    }
}

/// Input of `TagResource`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagResourceInput {
    /// Share to tag. Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_share_arn: Option<String>,
    /// Tags to add. Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
}

impl TagResourceInput {
    /// Sets `resourceShareArn`.
    #[must_use]
    pub fn with_resource_share_arn(mut self, arn: impl Into<String>) -> Self {
        self.resource_share_arn = Some(arn.into());
        self
    }

    /// Sets `tags`.
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<Tag>) -> Self {
        self.tags = Some(tags);
        self
    }
}
