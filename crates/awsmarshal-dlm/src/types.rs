//! Shared Data Lifecycle Manager shapes.
//!
//! DLM uses `PascalCase` JSON keys and epoch-second timestamps.

use std::collections::HashMap;

use awsmarshal_core::{Timestamp, wire_enum};
use serde::{Deserialize, Serialize};

wire_enum! {
    /// State a policy can be set to.
    pub enum SettablePolicyStateValues {
        /// Policy runs.
        Enabled => "ENABLED",
        /// Policy is paused.
        Disabled => "DISABLED",
    }
}

wire_enum! {
    /// State a policy can be reported in.
    pub enum GettablePolicyStateValues {
        /// Policy runs.
        Enabled => "ENABLED",
        /// Policy is paused.
        Disabled => "DISABLED",
        /// Policy failed; see `StatusMessage`.
        Error => "ERROR",
    }
}

wire_enum! {
    /// What a policy manages.
    pub enum PolicyTypeValues {
        /// EBS snapshots.
        EbsSnapshotManagement => "EBS_SNAPSHOT_MANAGEMENT",
        /// EBS-backed AMIs.
        ImageManagement => "IMAGE_MANAGEMENT",
        /// Cross-account snapshot copy events.
        EventBasedPolicy => "EVENT_BASED_POLICY",
    }
}

wire_enum! {
    /// Resource kind a policy targets.
    pub enum ResourceTypeValues {
        /// EBS volumes.
        Volume => "VOLUME",
        /// EC2 instances.
        Instance => "INSTANCE",
    }
}

wire_enum! {
    /// Unit of a creation interval.
    pub enum IntervalUnitValues {
        /// Hours.
        Hours => "HOURS",
    }
}

wire_enum! {
    /// Unit of a retention interval.
    pub enum RetentionIntervalUnitValues {
        /// Days.
        Days => "DAYS",
        /// Weeks.
        Weeks => "WEEKS",
        /// Months.
        Months => "MONTHS",
        /// Years.
        Years => "YEARS",
    }
}

/// A key/value tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    /// Tag key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Tag value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl Tag {
    /// Creates a tag with both members set.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

/// How many snapshots to keep, by count or by age.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RetainRule {
    /// Number of snapshots to keep.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i32>,
    /// Age limit, in `IntervalUnit`s.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i32>,
    /// Unit of `Interval`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_unit: Option<RetentionIntervalUnitValues>,
}

impl RetainRule {
    /// Sets `Count`.
    #[must_use]
    pub fn with_count(mut self, count: i32) -> Self {
        self.count = Some(count);
        self
    }

    /// Sets `Interval`.
    #[must_use]
    pub fn with_interval(mut self, interval: i32) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Sets `IntervalUnit`.
    #[must_use]
    pub fn with_interval_unit(mut self, unit: RetentionIntervalUnitValues) -> Self {
        self.interval_unit = Some(unit);
        self
    }
}

/// When snapshots are taken.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateRule {
    /// Hours between snapshots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i32>,
    /// Unit of `Interval`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_unit: Option<IntervalUnitValues>,
    /// Start times, `hh:mm` UTC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub times: Option<Vec<String>>,
    /// Cron schedule, instead of `Interval`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cron_expression: Option<String>,
}

impl CreateRule {
    /// Sets `Interval` and `IntervalUnit`.
    #[must_use]
    pub fn every(mut self, interval: i32, unit: IntervalUnitValues) -> Self {
        self.interval = Some(interval);
        self.interval_unit = Some(unit);
        self
    }

    /// Sets `Times`.
    #[must_use]
    pub fn with_times(mut self, times: Vec<String>) -> Self {
        self.times = Some(times);
        self
    }

    /// Sets `CronExpression`.
    #[must_use]
    pub fn with_cron_expression(mut self, cron: impl Into<String>) -> Self {
        self.cron_expression = Some(cron.into());
        self
    }
}

/// One creation/retention schedule of a policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Schedule {
    /// Schedule name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Whether to copy source tags to snapshots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_tags: Option<bool>,
    /// Tags added to every snapshot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags_to_add: Option<Vec<Tag>>,
    /// Creation rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_rule: Option<CreateRule>,
    /// Retention rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retain_rule: Option<RetainRule>,
}

impl Schedule {
    /// Sets `Name`.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets `CopyTags`.
    #[must_use]
    pub fn with_copy_tags(mut self, copy: bool) -> Self {
        self.copy_tags = Some(copy);
        self
    }

    /// Sets `TagsToAdd`.
    #[must_use]
    pub fn with_tags_to_add(mut self, tags: Vec<Tag>) -> Self {
        self.tags_to_add = Some(tags);
        self
    }

    /// Sets `CreateRule`.
    #[must_use]
    pub fn with_create_rule(mut self, rule: CreateRule) -> Self {
        self.create_rule = Some(rule);
        self
    }

    /// Sets `RetainRule`.
    #[must_use]
    pub fn with_retain_rule(mut self, rule: RetainRule) -> Self {
        self.retain_rule = Some(rule);
        self
    }
}

/// Targets and schedules of a policy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDetails {
    /// Policy kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<PolicyTypeValues>,
    /// Targeted resource kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_types: Option<Vec<ResourceTypeValues>>,
    /// Resources carrying any of these tags are targeted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_tags: Option<Vec<Tag>>,
    /// Schedules, at most four.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedules: Option<Vec<Schedule>>,
}

impl PolicyDetails {
    /// Sets `PolicyType`.
    #[must_use]
    pub fn with_policy_type(mut self, policy_type: PolicyTypeValues) -> Self {
        self.policy_type = Some(policy_type);
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
    pub fn with_target_tags(mut self, tags: Vec<Tag>) -> Self {
        self.target_tags = Some(tags);
        self
    }

    /// Sets `Schedules`.
    #[must_use]
    pub fn with_schedules(mut self, schedules: Vec<Schedule>) -> Self {
        self.schedules = Some(schedules);
        self
    }
}

/// A lifecycle policy in full.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LifecyclePolicy {
    /// Policy id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Activation state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<GettablePolicyStateValues>,
    /// Detail of an `ERROR` state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    /// IAM role the policy runs as.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_role_arn: Option<String>,
    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_created: Option<Timestamp>,
    /// Last modification time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<Timestamp>,
    /// Targets and schedules.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_details: Option<PolicyDetails>,
    /// Tags on the policy itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
    /// Policy ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_arn: Option<String>,
}

/// A lifecycle policy as listed by `GetLifecyclePolicies`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LifecyclePolicySummary {
    /// Policy id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Activation state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<GettablePolicyStateValues>,
    /// Tags on the policy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
    /// Policy kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_type: Option<PolicyTypeValues>,
}
