//! Resource Access Manager over REST-JSON.

#[cfg(test)]
mod tests {
    use awsmarshal_core::SdkError;
    use awsmarshal_ram::{
        CreateResourceShareInput, DeleteResourceShareInput, GetResourceSharesInput, RamClient,
        RamError, ResourceOwner, ResourceShareStatus, Tag, TagResourceInput,
    };
    use http::{Method, StatusCode};

    use crate::{json_response, replay_client};

    fn client() -> anyhow::Result<(RamClient, awsmarshal_client::test_util::StaticReplayTransport)> {
        replay_client("ap-northeast-1", RamClient::builder, RamClient::from_client)
    }

    #[test]
    fn test_should_create_share_and_read_back_nested_tags() -> anyhow::Result<()> {
        let (client, transport) = client()?;
        transport.push_response(json_response(
            StatusCode::OK,
            r#"{"resourceShare":{
                "resourceShareArn":"arn:aws:ram:ap-northeast-1:123456789012:resource-share/s-1",
                "name":"subnets",
                "status":"ACTIVE",
                "allowExternalPrincipals":false,
                "tags":[{"key":"env","value":"prod"}],
                "creationTime":1600000000.5
            },"clientToken":"c-1"}"#,
        ));

        let out = client.create_resource_share(
            &CreateResourceShareInput::default()
                .with_name("subnets")
                .with_allow_external_principals(false)
                .with_tags(vec![Tag::new("env", "prod")])
                .with_client_token("c-1"),
        )?;

        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.uri, "https://ram.ap-northeast-1.amazonaws.com/createresourceshare");
        assert_eq!(
            request.body_str(),
            r#"{"name":"subnets","tags":[{"key":"env","value":"prod"}],"allowExternalPrincipals":false,"clientToken":"c-1"}"#
        );

        let share = out.resource_share.unwrap();
        assert_eq!(share.status, Some(ResourceShareStatus::Active));
        assert_eq!(share.tags, Some(vec![Tag::new("env", "prod")]));
        assert_eq!(share.creation_time.unwrap().to_string(), "2020-09-13T12:26:40.500Z");
        assert_eq!(out.client_token.as_deref(), Some("c-1"));
        Ok(())
    }

    #[test]
    fn test_should_read_unknown_enum_values_without_failing() -> anyhow::Result<()> {
        let (client, transport) = client()?;
        transport.push_response(json_response(
            StatusCode::OK,
            r#"{"resourceShares":[{"name":"a","status":"ARCHIVED"},{"name":"b"}],"nextToken":null}"#,
        ));

        let out = client.get_resource_shares(
            &GetResourceSharesInput::default().with_resource_owner(ResourceOwner::OtherAccounts),
        )?;
        let shares = out.resource_shares.unwrap();
        assert_eq!(
            shares[0].status,
            Some(ResourceShareStatus::Unknown("ARCHIVED".to_owned()))
        );
        assert!(shares[1].status.is_none());
        assert!(out.next_token.is_none());
        assert_eq!(
            transport.requests()[0].body_str(),
            r#"{"resourceOwner":"OTHER-ACCOUNTS"}"#
        );
        Ok(())
    }

    #[test]
    fn test_should_delete_with_query_members() -> anyhow::Result<()> {
        let (client, transport) = client()?;
        transport.push_response(json_response(StatusCode::OK, r#"{"returnValue":true}"#));

        let out = client.delete_resource_share(
            &DeleteResourceShareInput::default().with_resource_share_arn("arn:share/1"),
        )?;
        assert_eq!(out.return_value, Some(true));

        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(
            request.uri,
            "https://ram.ap-northeast-1.amazonaws.com/deleteresourceshare?resourceShareArn=arn%3Ashare%2F1"
        );
        Ok(())
    }

    #[test]
    fn test_should_map_error_codes() -> anyhow::Result<()> {
        let (client, transport) = client()?;
        transport.push_response(json_response(
            StatusCode::BAD_REQUEST,
            r#"{"__type":"com.amazonaws.ram#TagPolicyViolationException","message":"tag key not allowed"}"#,
        ));
        transport.push_response(json_response(StatusCode::INTERNAL_SERVER_ERROR, "not json"));

        let tag = TagResourceInput::default()
            .with_resource_share_arn("arn:share/1")
            .with_tags(vec![Tag::new("Owner", "x")]);
        match client.tag_resource(&tag) {
            Err(SdkError::Service(RamError::TagPolicyViolation(d))) => {
                assert_eq!(d.message.as_deref(), Some("tag key not allowed"));
            }
            other => panic!("unexpected {other:?}"),
        }

        match client.tag_resource(&tag) {
            Err(SdkError::Service(RamError::Unhandled(e))) => {
                assert_eq!(e.code, "InternalServerError");
                assert_eq!(e.status, 500);
            }
            other => panic!("unexpected {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_should_sign_one_call_with_request_credentials() -> anyhow::Result<()> {
        use awsmarshal_client::RequestOptions;
        use awsmarshal_core::Credentials;
        use awsmarshal_ram::operation::GetResourceShares;

        let (client, transport) = client()?;
        transport.push_response(json_response(StatusCode::OK, r#"{"resourceShares":[]}"#));
        transport.push_response(json_response(StatusCode::OK, r#"{"resourceShares":[]}"#));

        let input = GetResourceSharesInput::default().with_resource_owner(ResourceOwner::SelfOwned);
        let options = RequestOptions::new().with_credentials(Credentials::new("AKIDCROSS", "other"));
        let out = client.client().invoke_with::<GetResourceShares>(&input, &options)?;
        assert_eq!(out.resource_shares, Some(vec![]));
        client.get_resource_shares(&input)?;

        let requests = transport.requests();
        let auth = |i: usize| requests[i].header("authorization").unwrap_or_default().to_owned();
        assert!(auth(0).contains("Credential=AKIDCROSS/"));
        assert!(auth(1).contains("Credential=AKIDEXAMPLE/"));
        assert!(requests.iter().all(|r| r.header("user-agent").is_some()));
        Ok(())
    }
}
