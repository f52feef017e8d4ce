//! Shared Resource Access Manager shapes. Keys are `camelCase`.

use awsmarshal_core::{Timestamp, wire_enum};
use serde::{Deserialize, Serialize};

wire_enum! {
    /// Lifecycle state of a resource share.
    pub enum ResourceShareStatus {
        /// Being created.
        Pending => "PENDING",
        /// Usable.
        Active => "ACTIVE",
        /// Creation failed.
        Failed => "FAILED",
        /// Being deleted.
        Deleting => "DELETING",
        /// Deleted.
        Deleted => "DELETED",
    }
}

wire_enum! {
    /// Whose shares or resources to list.
    pub enum ResourceOwner {
        /// Shared by the caller.
        SelfOwned => "SELF",
        /// Shared with the caller.
        OtherAccounts => "OTHER-ACCOUNTS",
    }
}

wire_enum! {
    /// What an association links to a share.
    pub enum ResourceShareAssociationType {
        /// A principal (account, OU, organization).
        Principal => "PRINCIPAL",
        /// A resource.
        Resource => "RESOURCE",
    }
}

wire_enum! {
    /// State of a share association.
    pub enum ResourceShareAssociationStatus {
        /// Being associated.
        Associating => "ASSOCIATING",
        /// Associated.
        Associated => "ASSOCIATED",
        /// Association failed.
        Failed => "FAILED",
        /// Being disassociated.
        Disassociating => "DISASSOCIATING",
        /// Disassociated.
        Disassociated => "DISASSOCIATED",
    }
}

wire_enum! {
    /// Availability of a shared resource.
    pub enum ResourceStatus {
        /// Available to principals.
        Available => "AVAILABLE",
        /// Not reachable in the principal's zone.
        ZonalResourceInaccessible => "ZONAL_RESOURCE_INACCESSIBLE",
        /// The principal's quota was exceeded.
        LimitExceeded => "LIMIT_EXCEEDED",
        /// Unavailable.
        Unavailable => "UNAVAILABLE",
        /// Being shared.
        Pending => "PENDING",
    }
}

wire_enum! {
    /// How a share was created.
    pub enum ResourceShareFeatureSet {
        /// From a resource-based policy.
        CreatedFromPolicy => "CREATED_FROM_POLICY",
        /// Being promoted to standard.
        PromotingToStandard => "PROMOTING_TO_STANDARD",
        /// Standard share.
        Standard => "STANDARD",
    }
}

/// A key/value tag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
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

/// Matches shares carrying `tagKey` with any of `tagValues`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagFilter {
    /// Tag key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_key: Option<String>,
    /// Accepted values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_values: Option<Vec<String>>,
}

impl TagFilter {
    /// Sets `tagKey`.
    #[must_use]
    pub fn with_tag_key(mut self, key: impl Into<String>) -> Self {
        self.tag_key = Some(key.into());
        self
    }

    /// Sets `tagValues`.
    #[must_use]
    pub fn with_tag_values(mut self, values: Vec<String>) -> Self {
        self.tag_values = Some(values);
        self
    }
}

/// A resource share.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceShare {
    /// Share ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_share_arn: Option<String>,
    /// Share name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Owner account.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owning_account_id: Option<String>,
    /// Whether principals outside the organization may be added.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_external_principals: Option<bool>,
    /// Current state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceShareStatus>,
    /// Detail of the state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    /// Tags on the share.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,
    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<Timestamp>,
    /// Last update time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_time: Option<Timestamp>,
    /// How the share was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature_set: Option<ResourceShareFeatureSet>,
}

/// A link between a share and a principal or resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceShareAssociation {
    /// Share ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_share_arn: Option<String>,
    /// Share name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_share_name: Option<String>,
    /// Associated principal or resource ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub associated_entity: Option<String>,
    /// Kind of association.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub association_type: Option<ResourceShareAssociationType>,
    /// Current state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceShareAssociationStatus>,
    /// Detail of the state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<Timestamp>,
    /// Last update time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_time: Option<Timestamp>,
    /// Whether the principal is outside the organization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external: Option<bool>,
}

/// A shared resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Resource ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,
    /// Resource type, such as `ec2:Subnet`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// Share the resource belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_share_arn: Option<String>,
    /// Resource group, when shared through one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_group_arn: Option<String>,
    /// Availability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ResourceStatus>,
    /// Detail of the availability.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_message: Option<String>,
    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<Timestamp>,
    /// Last update time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_time: Option<Timestamp>,
}
