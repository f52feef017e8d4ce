//! DLM operation inputs.
//!
//! Members bound to the URI (path labels and query strings) are skipped by
//! serde and placed by the operation's marshaller instead.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{
    GettablePolicyStateValues, PolicyDetails, ResourceTypeValues, SettablePolicyStateValues,
};

/// Input of `CreateLifecyclePolicy`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateLifecyclePolicyInput {
    /// IAM role the policy runs as. Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_role_arn: Option<String>,
    /// Description. Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Initial state. Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<SettablePolicyStateValues>,
    /// Targets and schedules. Required.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_details: Option<PolicyDetails>,
    /// Tags on the policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

impl CreateLifecyclePolicyInput {
    /// Sets `ExecutionRoleArn`.
    #[must_use]
    pub fn with_execution_role_arn(mut self, arn: impl Into<String>) -> Self {
        self.execution_role_arn = Some(arn.into());
        self
    }

    /// Sets `Description`.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets `State`.
    #[must_use]
    pub fn with_state(mut self, state: SettablePolicyStateValues) -> Self {
        self.state = Some(state);
        self
    }

    /// Sets `PolicyDetails`.
    #[must_use]
    pub fn with_policy_details(mut self, details: PolicyDetails) -> Self {
        self.policy_details = Some(details);
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

/// Input of `GetLifecyclePolicy`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetLifecyclePolicyInput {
    /// Policy id, bound to the URI path. Required.
    #[serde(skip)]
    pub policy_id: Option<String>,
}

impl GetLifecyclePolicyInput {
    /// Sets `PolicyId`.
    #[must_use]
    pub fn with_policy_id(mut self, id: impl Into<String>) -> Self {
        self.policy_id = Some(id.into());
        self
    }
}

/// Input of `GetLifecyclePolicies`. Every member is a query-string filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetLifecyclePoliciesInput {
    /// `policyIds`.
    #[serde(skip)]
    pub policy_ids: Option<Vec<String>>,
    /// `state`.
    #[serde(skip)]
    pub state: Option<GettablePolicyStateValues>,
    /// `resourceTypes`.
    #[serde(skip)]
    pub resource_types: Option<Vec<ResourceTypeValues>>,
    /// `targetTags`, as `key=value`.
    #[serde(skip)]
    pub target_tags: Option<Vec<String>>,
    /// `tagsToAdd`, as `key=value`.
    #[serde(skip)]
    pub tags_to_add: Option<Vec<String>>,
}

impl GetLifecyclePoliciesInput {
    /// Sets `PolicyIds`.
    #[must_use]
    pub fn with_policy_ids(mut self, ids: Vec<String>) -> Self {
        self.policy_ids = Some(ids);
        self
    }

    /// Sets `State`.
    #[must_use]
    pub fn with_state(mut self, state: GettablePolicyStateValues) -> Self {
        self.state = Some(state);
        self
    }

    /// Sets `ResourceTypes`.
    #[must_use]
    pub fn with_resource_types(mut self, types: Vec<ResourceTypeValues>) -> Self {
        self.resource_types = Some(types);
        self
    }

    /// Sets `TargetTags`.
    #[must_use]
    pub fn with_target_tags(mut self, tags: Vec<String>) -> Self {
        self.target_tags = Some(tags);
        self
    }

    /// Sets `TagsToAdd`.
    #[must_use]
    pub fn with_tags_to_add(mut self, tags: Vec<String>) -> Self {
        self.tags_to_add = Some(tags);
        self
    }
}

/// Input of `UpdateLifecyclePolicy`. Unset members are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateLifecyclePolicyInput {
    /// Policy id, bound to the URI path. Required.
    #[serde(skip)]
    pub policy_id: Option<String>,
    /// New execution role.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_role_arn: Option<String>,
    /// New state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<SettablePolicyStateValues>,
    /// New description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Replacement targets and schedules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_details: Option<PolicyDetails>,
}

impl UpdateLifecyclePolicyInput {
    /// Sets `PolicyId`.
    #[must_use]
    pub fn with_policy_id(mut self, id: impl Into<String>) -> Self {
        self.policy_id = Some(id.into());
        self
    }

    /// Sets `ExecutionRoleArn`.
    #[must_use]
    pub fn with_execution_role_arn(mut self, arn: impl Into<String>) -> Self {
        self.execution_role_arn = Some(arn.into());
        self
    }

    /// Sets `State`.
    #[must_use]
    pub fn with_state(mut self, state: SettablePolicyStateValues) -> Self {
        self.state = Some(state);
        self
    }

    /// Sets `Description`.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets `PolicyDetails`.
    #[must_use]
    pub fn with_policy_details(mut self, details: PolicyDetails) -> Self {
        self.policy_details = Some(details);
        self
    }
}

/// Input of `DeleteLifecyclePolicy`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteLifecyclePolicyInput {
    /// Policy id, bound to the URI path. Required.
    #[serde(skip)]
    pub policy_id: Option<String>,
}

impl DeleteLifecyclePolicyInput {
    /// Sets `PolicyId`.
    #[must_use]
    pub fn with_policy_id(mut self, id: impl Into<String>) -> Self {
        self.policy_id = Some(id.into());
        self
    }
}
