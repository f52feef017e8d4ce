//! DLM operation outputs.

use serde::{Deserialize, Serialize};

use crate::types::{LifecyclePolicy, LifecyclePolicySummary};

/// Output of `CreateLifecyclePolicy`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateLifecyclePolicyOutput {
    /// Id of the new policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<String>,
}

/// Output of `GetLifecyclePolicy`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetLifecyclePolicyOutput {
    /// The policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<LifecyclePolicy>,
}

/// Output of `GetLifecyclePolicies`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetLifecyclePoliciesOutput {
    /// Matching policies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policies: Option<Vec<LifecyclePolicySummary>>,
}

/// Output of `UpdateLifecyclePolicy`. Has no members.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateLifecyclePolicyOutput {}

/// Output of `DeleteLifecyclePolicy`. Has no members.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeleteLifecyclePolicyOutput {}
