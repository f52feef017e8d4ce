//! MediaPackage VOD operation outputs.
//!
//! `CreatePackagingGroup` and `DescribePackagingGroup` return the group's
//! members at the top level rather than wrapped in a `packagingGroup` key.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{Authorization, EgressAccessLogs, PackagingGroup};

macro_rules! group_output {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            /// Group ARN.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub arn: Option<String>,
            /// Group id.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub id: Option<String>,
            /// Domain assets in this group are served from.
            #[serde(skip_serializing_if = "Option::is_none")]
            pub domain_name: Option<String>,
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

        impl From<$name> for PackagingGroup {
            fn from(out: $name) -> Self {
                Self {
                    arn: out.arn,
                    id: out.id,
                    domain_name: out.domain_name,
                    authorization: out.authorization,
                    egress_access_logs: out.egress_access_logs,
                    tags: out.tags,
                }
            }
        }
    };
}

group_output!(
    /// Output of `CreatePackagingGroup`.
    CreatePackagingGroupOutput
);

group_output!(
    /// Output of `DescribePackagingGroup`.
    DescribePackagingGroupOutput
);

/// Output of `ListPackagingGroups`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPackagingGroupsOutput {
    /// One page of groups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging_groups: Option<Vec<PackagingGroup>>,
    /// Token of the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output of `DeletePackagingGroup`. Has no members.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeletePackagingGroupOutput {}
