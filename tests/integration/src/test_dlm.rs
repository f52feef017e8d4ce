//! DLM lifecycle policies over REST-JSON.

#[cfg(test)]
mod tests {
    use awsmarshal_core::SdkError;
    use awsmarshal_dlm::{
        CreateLifecyclePolicyInput, CreateRule, DeleteLifecyclePolicyInput, DlmClient, DlmError,
        GetLifecyclePoliciesInput, GetLifecyclePolicyInput, GettablePolicyStateValues,
        IntervalUnitValues, PolicyDetails, PolicyTypeValues, ResourceTypeValues, RetainRule,
        Schedule, SettablePolicyStateValues, Tag,
    };
    use http::{Method, StatusCode};
    use serde_json::json;

    use crate::{json_response, replay_client};

    fn client() -> anyhow::Result<(DlmClient, awsmarshal_client::test_util::StaticReplayTransport)> {
        replay_client("us-west-2", DlmClient::builder, DlmClient::from_client)
    }

    #[test]
    fn test_should_send_retain_rule_with_count_only() -> anyhow::Result<()> {
        let (client, transport) = client()?;
        transport.push_response(json_response(StatusCode::OK, r#"{"PolicyId":"policy-0123456789abcdef0"}"#));

        let input = CreateLifecyclePolicyInput::default()
            .with_execution_role_arn("arn:aws:iam::123456789012:role/AWSDataLifecycleManagerDefaultRole")
            .with_description("nightly")
            .with_state(SettablePolicyStateValues::Enabled)
            .with_policy_details(
                PolicyDetails::default()
                    .with_policy_type(PolicyTypeValues::EbsSnapshotManagement)
                    .with_resource_types(vec![ResourceTypeValues::Volume])
                    .with_target_tags(vec![Tag::new("backup", "nightly")])
                    .with_schedules(vec![
                        Schedule::default()
                            .with_name("nightly")
                            .with_create_rule(CreateRule::default().every(24, IntervalUnitValues::Hours))
                            .with_retain_rule(RetainRule::default().with_count(5)),
                    ]),
            );
        let out = client.create_lifecycle_policy(&input)?;
        assert_eq!(out.policy_id.as_deref(), Some("policy-0123456789abcdef0"));

        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.uri, "https://dlm.us-west-2.amazonaws.com/policies");
        assert_eq!(request.header("content-type"), Some("application/x-amz-json-1.1"));
        let body: serde_json::Value = serde_json::from_slice(&request.body)?;
        assert_eq!(body["PolicyDetails"]["Schedules"][0]["RetainRule"], json!({"Count": 5}));
        assert_eq!(body["State"], json!("ENABLED"));
        Ok(())
    }

    #[test]
    fn test_should_get_policy_tolerating_unknown_fields() -> anyhow::Result<()> {
        let (client, transport) = client()?;
        transport.push_response(json_response(
            StatusCode::OK,
            r#"{"Policy":{
                "PolicyId":"policy-1",
                "State":"ERROR",
                "StatusMessage":"role missing",
                "DateCreated":1577836800,
                "DateModified":1577836800.25,
                "PolicyDetails":{"Schedules":[{"Name":"s","RetainRule":{"Count":5}}],"Actions":[]},
                "Tags":{"team":"storage"},
                "FutureField":{"nested":true}
            }}"#,
        ));

        let out = client.get_lifecycle_policy(&GetLifecyclePolicyInput::default().with_policy_id("policy-1"))?;
        assert_eq!(
            transport.requests()[0].uri,
            "https://dlm.us-west-2.amazonaws.com/policies/policy-1/"
        );

        let policy = out.policy.unwrap();
        assert_eq!(policy.state, Some(GettablePolicyStateValues::Error));
        assert_eq!(policy.date_created.unwrap().to_string(), "2020-01-01T00:00:00.000Z");
        assert!(policy.date_modified.is_some());
        let schedules = policy.policy_details.unwrap().schedules.unwrap();
        let retain = schedules[0].retain_rule.as_ref().unwrap();
        assert_eq!(retain.count, Some(5));
        assert!(retain.interval.is_none());
        assert!(retain.interval_unit.is_none());
        assert_eq!(policy.tags.unwrap()["team"], "storage");
        Ok(())
    }

    #[test]
    fn test_should_send_list_filters_as_repeated_query_params() -> anyhow::Result<()> {
        let (client, transport) = client()?;
        transport.push_response(json_response(StatusCode::OK, r#"{"Policies":[]}"#));

        let out = client.get_lifecycle_policies(
            &GetLifecyclePoliciesInput::default()
                .with_state(GettablePolicyStateValues::Enabled)
                .with_resource_types(vec![ResourceTypeValues::Volume, ResourceTypeValues::Instance])
                .with_target_tags(vec!["backup=nightly".to_owned()]),
        )?;
        assert_eq!(out.policies, Some(Vec::new()));

        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::GET);
        assert_eq!(
            request.uri,
            "https://dlm.us-west-2.amazonaws.com/policies?state=ENABLED&resourceTypes=VOLUME\
             &resourceTypes=INSTANCE&targetTags=backup%3Dnightly"
        );
        assert!(request.body.is_empty());
        Ok(())
    }

    #[test]
    fn test_should_decode_structured_error() -> anyhow::Result<()> {
        let (client, transport) = client()?;
        transport.push_response(
            json_response(
                StatusCode::NOT_FOUND,
                r#"{"Message":"policy not found","Code":"ResourceNotFoundException","ResourceType":"policy","ResourceIds":["policy-9"]}"#,
            )
            .with_header("x-amzn-errortype", "ResourceNotFoundException"),
        );

        match client.delete_lifecycle_policy(&DeleteLifecyclePolicyInput::default().with_policy_id("policy-9")) {
            Err(SdkError::Service(DlmError::ResourceNotFound(e))) => {
                assert_eq!(e.message.as_deref(), Some("policy not found"));
                assert_eq!(e.resource_ids, Some(vec!["policy-9".to_owned()]));
            }
            other => panic!("unexpected {other:?}"),
        }
        Ok(())
    }
}
