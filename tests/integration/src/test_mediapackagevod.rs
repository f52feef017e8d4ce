//! MediaPackage VOD packaging groups over REST-JSON.

#[cfg(test)]
mod tests {
    use awsmarshal_core::SdkError;
    use awsmarshal_mediapackagevod::{
        Authorization, CreatePackagingGroupInput, DeletePackagingGroupInput,
        DescribePackagingGroupInput, EgressAccessLogs, ListPackagingGroupsInput,
        MediaPackageVodClient, MediaPackageVodError, PackagingGroup,
    };
    use http::{Method, StatusCode};
    use serde_json::json;

    use crate::{json_response, replay_client};

    fn client() -> anyhow::Result<(MediaPackageVodClient, awsmarshal_client::test_util::StaticReplayTransport)> {
        replay_client("eu-west-1", MediaPackageVodClient::builder, MediaPackageVodClient::from_client)
    }

    #[test]
    fn test_should_create_and_describe_group() -> anyhow::Result<()> {
        let (client, transport) = client()?;
        let group = r#"{
            "arn":"arn:aws:mediapackage-vod:eu-west-1:123456789012:packaging-groups/movies",
            "id":"movies",
            "domainName":"https://abc.egress.mediapackage-vod.eu-west-1.amazonaws.com",
            "authorization":{"cdnIdentifierSecret":"arn:secret","secretsRoleArn":"arn:role"},
            "egressAccessLogs":{"logGroupName":"/aws/MediaPackage/VodEgressAccessLogs"},
            "tags":{"team":"media"}
        }"#;
        transport.push_response(json_response(StatusCode::OK, group));
        transport.push_response(json_response(StatusCode::OK, group));

        let created = client.create_packaging_group(
            &CreatePackagingGroupInput::default()
                .with_id("movies")
                .with_authorization(Authorization::new("arn:secret", "arn:role"))
                .with_egress_access_logs(EgressAccessLogs::default())
                .with_tag("team", "media"),
        )?;
        let described = client
            .describe_packaging_group(&DescribePackagingGroupInput::default().with_id("movies"))?;
        assert_eq!(PackagingGroup::from(created), PackagingGroup::from(described.clone()));
        assert_eq!(described.authorization, Some(Authorization::new("arn:secret", "arn:role")));

        let requests = transport.requests();
        assert_eq!(requests[0].uri, "https://mediapackage-vod.eu-west-1.amazonaws.com/packaging_groups");
        let body: serde_json::Value = serde_json::from_slice(&requests[0].body)?;
        assert_eq!(
            body,
            json!({
                "id": "movies",
                "authorization": {"cdnIdentifierSecret": "arn:secret", "secretsRoleArn": "arn:role"},
                "egressAccessLogs": {},
                "tags": {"team": "media"}
            })
        );
        assert_eq!(requests[1].method, Method::GET);
        assert_eq!(
            requests[1].uri,
            "https://mediapackage-vod.eu-west-1.amazonaws.com/packaging_groups/movies"
        );
        assert!(
            requests[1]
                .header("authorization")
                .unwrap()
                .contains("/eu-west-1/mediapackage-vod/aws4_request")
        );
        Ok(())
    }

    #[test]
    fn test_should_list_with_paging_params() -> anyhow::Result<()> {
        let (client, transport) = client()?;
        transport.push_response(json_response(
            StatusCode::OK,
            r#"{"packagingGroups":[{"id":"a","tags":{}},{"id":"b"}],"nextToken":"n-2"}"#,
        ));

        let out = client.list_packaging_groups(&ListPackagingGroupsInput::default().with_max_results(2))?;
        let groups = out.packaging_groups.unwrap();
        assert_eq!(groups.len(), 2);
        assert!(groups[0].tags.as_ref().is_some_and(std::collections::HashMap::is_empty));
        assert!(groups[1].tags.is_none());
        assert_eq!(out.next_token.as_deref(), Some("n-2"));
        assert_eq!(
            transport.requests()[0].uri,
            "https://mediapackage-vod.eu-west-1.amazonaws.com/packaging_groups?maxResults=2"
        );
        Ok(())
    }

    #[test]
    fn test_should_decode_unprocessable_entity() -> anyhow::Result<()> {
        let (client, transport) = client()?;
        transport.push_response(
            json_response(StatusCode::UNPROCESSABLE_ENTITY, r#"{"message":"group has assets"}"#)
                .with_header("x-amzn-errortype", "UnprocessableEntityException"),
        );

        match client.delete_packaging_group(&DeletePackagingGroupInput::default().with_id("movies")) {
            Err(SdkError::Service(MediaPackageVodError::UnprocessableEntity(d))) => {
                assert_eq!(d.message.as_deref(), Some("group has assets"));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(transport.requests()[0].method, Method::DELETE);
        Ok(())
    }
}
