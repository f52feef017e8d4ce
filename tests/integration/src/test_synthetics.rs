//! CloudWatch Synthetics canaries over REST-JSON.

#[cfg(test)]
mod tests {
    use awsmarshal_core::SdkError;
    use awsmarshal_synthetics::{
        CanaryCodeInput, CanarySchedule, CanaryState, CreateCanaryInput, DeleteCanaryInput,
        DescribeCanariesInput, GetCanaryInput, StopCanaryInput, SyntheticsClient, SyntheticsError,
    };
    use http::{Method, StatusCode};
    use serde_json::json;

    use crate::{json_response, replay_client};

    fn client() -> anyhow::Result<(SyntheticsClient, awsmarshal_client::test_util::StaticReplayTransport)> {
        replay_client("us-east-2", SyntheticsClient::builder, SyntheticsClient::from_client)
    }

    #[test]
    fn test_should_create_canary_with_inline_zip_and_tags() -> anyhow::Result<()> {
        let (client, transport) = client()?;
        transport.push_response(json_response(
            StatusCode::OK,
            r#"{"Canary":{"Id":"c-1","Name":"checkout","Status":{"State":"CREATING"},
                "Timeline":{"Created":1700000000},"Tags":{"team":"web"}}}"#,
        ));

        let out = client.create_canary(
            &CreateCanaryInput::default()
                .with_name("checkout")
                .with_code(
                    CanaryCodeInput::default()
                        .with_zip_file(b"hello".to_vec())
                        .with_handler("index.handler"),
                )
                .with_artifact_s3_location("s3://artifacts/checkout")
                .with_execution_role_arn("arn:aws:iam::123456789012:role/canary")
                .with_schedule(CanarySchedule::expression("rate(1 hour)").with_duration_in_seconds(0))
                .with_runtime_version("syn-python-selenium-3.0")
                .with_tag("team", "web"),
        )?;

        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.uri, "https://synthetics.us-east-2.amazonaws.com/canary");
        let body: serde_json::Value = serde_json::from_slice(&request.body)?;
        assert_eq!(body["Code"], json!({"ZipFile": "aGVsbG8=", "Handler": "index.handler"}));
        assert_eq!(body["Schedule"], json!({"Expression": "rate(1 hour)", "DurationInSeconds": 0}));
        assert_eq!(body["Tags"], json!({"team": "web"}));
        assert!(body.get("RunConfig").is_none());

        let canary = out.canary.unwrap();
        assert_eq!(canary.status.unwrap().state, Some(CanaryState::Creating));
        assert_eq!(
            canary.timeline.unwrap().created.unwrap().to_string(),
            "2023-11-14T22:13:20.000Z"
        );
        Ok(())
    }

    #[test]
    fn test_should_describe_then_get_by_name() -> anyhow::Result<()> {
        let (client, transport) = client()?;
        transport.push_response(json_response(
            StatusCode::OK,
            r#"{"Canaries":[{"Name":"checkout"},{"Name":"login"}],"NextToken":"t-2"}"#,
        ));
        transport.push_response(json_response(StatusCode::OK, r#"{"Canary":{"Name":"login"}}"#));

        let page = client.describe_canaries(
            &DescribeCanariesInput::default()
                .with_max_results(2)
                .with_names(vec!["checkout".to_owned(), "login".to_owned()]),
        )?;
        assert_eq!(page.next_token.as_deref(), Some("t-2"));
        let name = page.canaries.unwrap()[1].name.clone().unwrap();

        let out = client.get_canary(&GetCanaryInput::default().with_name(name))?;
        assert_eq!(out.canary.unwrap().name.as_deref(), Some("login"));

        let requests = transport.requests();
        assert_eq!(
            requests[0].body_str(),
            r#"{"MaxResults":2,"Names":["checkout","login"]}"#
        );
        assert_eq!(requests[1].method, Method::GET);
        assert_eq!(requests[1].uri, "https://synthetics.us-east-2.amazonaws.com/canary/login");
        Ok(())
    }

    #[test]
    fn test_should_stop_and_delete_with_flag() -> anyhow::Result<()> {
        let (client, transport) = client()?;
        transport.push_response(json_response(StatusCode::OK, "{}"));
        transport.push_response(json_response(StatusCode::OK, ""));

        client.stop_canary(&StopCanaryInput::default().with_name("checkout"))?;
        client.delete_canary(
            &DeleteCanaryInput::default()
                .with_name("checkout")
                .with_delete_lambda(false),
        )?;

        let requests = transport.requests();
        assert_eq!(requests[0].uri, "https://synthetics.us-east-2.amazonaws.com/canary/checkout/stop");
        assert_eq!(requests[1].method, Method::DELETE);
        assert_eq!(
            requests[1].uri,
            "https://synthetics.us-east-2.amazonaws.com/canary/checkout?deleteLambda=false"
        );
        assert_eq!(transport.remaining(), 0);
        Ok(())
    }

    #[test]
    fn test_should_decode_conflict_error() -> anyhow::Result<()> {
        let (client, transport) = client()?;
        transport.push_response(
            json_response(StatusCode::CONFLICT, r#"{"Message":"canary is stopping"}"#)
                .with_header("x-amzn-errortype", "ConflictException:http://internal.amazon.com/coral/")
                .with_header("x-amzn-requestid", "req-1"),
        );

        let err = client
            .stop_canary(&StopCanaryInput::default().with_name("checkout"))
            .unwrap_err();
        assert!(matches!(
            err.as_service_error(),
            Some(SyntheticsError::Conflict(d)) if d.message.as_deref() == Some("canary is stopping")
        ));
        assert!(matches!(err, SdkError::Service(_)));
        Ok(())
    }
}
