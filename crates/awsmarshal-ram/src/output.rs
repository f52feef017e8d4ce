//! RAM operation outputs.

use serde::{Deserialize, Serialize};

use crate::types::{Resource, ResourceShare, ResourceShareAssociation};

/// Output of `CreateResourceShare`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResourceShareOutput {
    /// The new share.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_share: Option<ResourceShare>,
    /// Idempotency token echoed back.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
}

/// Output of `GetResourceShares`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetResourceSharesOutput {
    /// One page of shares.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_shares: Option<Vec<ResourceShare>>,
    /// Token of the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output of `AssociateResourceShare`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociateResourceShareOutput {
    /// Associations created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_share_associations: Option<Vec<ResourceShareAssociation>>,
    /// Idempotency token echoed back.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
}

/// Output of `DeleteResourceShare`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResourceShareOutput {
    /// Whether the share was deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_value: Option<bool>,
    /// Idempotency token echoed back.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_token: Option<String>,
}

/// Output of `ListResources`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResourcesOutput {
    /// One page of resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<Resource>>,
    /// Token of the next page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
}

/// Output of `TagResource`. Has no members.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TagResourceOutput {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{
        AssociateResourceShareInput, CreateResourceShareInput, GetResourceSharesInput,
        ListResourcesInput, TagResourceInput,
    };
    use crate::types::tests::{
        json_round_trip, populated_association, populated_resource, populated_share,
    };
    use crate::types::{ResourceOwner, ResourceShareStatus, Tag, TagFilter};

    #[test]
    fn test_should_round_trip_unset_outputs() {
        assert_eq!(
            json_round_trip(&CreateResourceShareOutput::default()),
            CreateResourceShareOutput::default()
        );
        assert_eq!(
            json_round_trip(&GetResourceSharesOutput::default()),
            GetResourceSharesOutput::default()
        );
        assert_eq!(
            json_round_trip(&AssociateResourceShareOutput::default()),
            AssociateResourceShareOutput::default()
        );
        assert_eq!(
            json_round_trip(&DeleteResourceShareOutput::default()),
            DeleteResourceShareOutput::default()
        );
        assert_eq!(json_round_trip(&ListResourcesOutput::default()), ListResourcesOutput::default());
        assert_eq!(json_round_trip(&TagResourceOutput {}), TagResourceOutput {});
    }

    #[test]
    fn test_should_round_trip_populated_outputs() {
        let created = CreateResourceShareOutput {
            resource_share: Some(populated_share()),
            client_token: Some("c-1".to_owned()),
        };
        assert_eq!(json_round_trip(&created), created);

        let shares = GetResourceSharesOutput {
            resource_shares: Some(vec![populated_share(), ResourceShare::default(), populated_share()]),
            next_token: Some("page-2".to_owned()),
        };
        assert_eq!(json_round_trip(&shares), shares);

        let associated = AssociateResourceShareOutput {
            resource_share_associations: Some(vec![populated_association()]),
            client_token: Some("c-2".to_owned()),
        };
        assert_eq!(json_round_trip(&associated), associated);

        let deleted = DeleteResourceShareOutput {
            return_value: Some(true),
            client_token: Some("c-3".to_owned()),
        };
        assert_eq!(json_round_trip(&deleted), deleted);

        let resources = ListResourcesOutput {
            resources: Some(vec![]),
            next_token: None,
        };
        assert_eq!(json_round_trip(&resources), resources);
        let resources = ListResourcesOutput {
            resources: Some(vec![populated_resource(), populated_resource()]),
            next_token: Some("page-3".to_owned()),
        };
        assert_eq!(json_round_trip(&resources), resources);
    }

    #[test]
    fn test_should_round_trip_body_inputs() {
        let create = CreateResourceShareInput {
            permission_arns: Some(vec!["arn:aws:ram::aws:permission/AWSRAMDefaultPermissionSubnet".to_owned()]),
            ..CreateResourceShareInput::default()
        }
        .with_name("subnets")
        .with_resource_arns(vec!["arn:aws:ec2:us-east-1:123456789012:subnet/subnet-1".to_owned()])
        .with_principals(vec!["111122223333".to_owned()])
        .with_tags(vec![Tag::new("env", "prod")])
        .with_allow_external_principals(true)
        .with_client_token("c-1");
        assert_eq!(json_round_trip(&create), create);

        let get = GetResourceSharesInput {
            name: Some("subnets".to_owned()),
            ..GetResourceSharesInput::default()
        }
        .with_resource_owner(ResourceOwner::OtherAccounts)
        .with_resource_share_arns(vec![])
        .with_resource_share_status(ResourceShareStatus::Active)
        .with_tag_filters(vec![TagFilter::default().with_tag_key("env")])
        .with_next_token("page-2")
        .with_max_results(50);
        assert_eq!(json_round_trip(&get), get);

        let associate = AssociateResourceShareInput::default()
            .with_resource_share_arn("arn:aws:ram:us-east-1:123456789012:resource-share/s-1")
            .with_resource_arns(vec!["arn:1".to_owned(), "arn:2".to_owned(), "arn:3".to_owned()])
            .with_principals(vec!["o-abc".to_owned()])
            .with_client_token("c-2");
        assert_eq!(json_round_trip(&associate), associate);

        let list = ListResourcesInput {
            resource_arns: Some(vec!["arn:1".to_owned()]),
            max_results: Some(10),
            ..ListResourcesInput::default()
        }
        .with_resource_owner(ResourceOwner::SelfOwned)
        .with_principal("111122223333")
        .with_resource_type("ec2:Subnet")
        .with_resource_share_arns(vec!["arn:s".to_owned()])
        .with_next_token("t");
        assert_eq!(json_round_trip(&list), list);

        let tag = TagResourceInput::default()
            .with_resource_share_arn("arn:s")
            .with_tags(vec![Tag::new("k", "v")]);
        assert_eq!(json_round_trip(&tag), tag);

        assert_eq!(
            json_round_trip(&CreateResourceShareInput::default()),
            CreateResourceShareInput::default()
        );
        assert_eq!(
            json_round_trip(&GetResourceSharesInput::default()),
            GetResourceSharesInput::default()
        );
        assert_eq!(
            json_round_trip(&AssociateResourceShareInput::default()),
            AssociateResourceShareInput::default()
        );
        assert_eq!(json_round_trip(&ListResourcesInput::default()), ListResourcesInput::default());
        assert_eq!(json_round_trip(&TagResourceInput::default()), TagResourceInput::default());
    }
}
