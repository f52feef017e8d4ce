//! Route 53 health checks over the query protocol.

#[cfg(test)]
mod tests {
    use awsmarshal_core::{MarshalError, SdkError};
    use awsmarshal_route53::{
        CreateHealthCheckInput, GetHealthCheckCountInput, HealthCheckConfig, HealthCheckType,
        ListHealthChecksInput, Route53Client, Route53Error, UpdateHealthCheckInput,
    };
    use http::StatusCode;

    use crate::{replay_client, xml_response};

    fn client() -> anyhow::Result<(Route53Client, awsmarshal_client::test_util::StaticReplayTransport)> {
        replay_client("eu-central-1", Route53Client::builder, Route53Client::from_client)
    }

    #[test]
    fn test_should_create_health_check_round_trip() -> anyhow::Result<()> {
        let (client, transport) = client()?;
        transport.push_response(xml_response(
            StatusCode::CREATED,
            r#"<CreateHealthCheckResponse xmlns="https://route53.amazonaws.com/doc/2013-04-01/">
                 <CreateHealthCheckResult>
                   <HealthCheck>
                     <Id>abcdef11-2222-3333-4444-555555fedcba</Id>
                     <CallerReference>web-1</CallerReference>
                     <HealthCheckConfig>
                       <IPAddress>192.0.2.44</IPAddress>
                       <Port>443</Port>
                       <Type>HTTPS</Type>
                       <ResourcePath>/health?x=1&amp;y=2</ResourcePath>
                       <EnableSNI>true</EnableSNI>
                     </HealthCheckConfig>
                     <HealthCheckVersion>1</HealthCheckVersion>
                     <LinkedService><ServicePrincipal>x</ServicePrincipal></LinkedService>
                   </HealthCheck>
                   <Location>https://route53.amazonaws.com/2013-04-01/healthcheck/abcdef11</Location>
                 </CreateHealthCheckResult>
               </CreateHealthCheckResponse>"#,
        ));

        let out = client.create_health_check(
            &CreateHealthCheckInput::default()
                .with_caller_reference("web-1")
                .with_health_check_config(
                    HealthCheckConfig::default()
                        .with_ip_address("192.0.2.44")
                        .with_port(443)
                        .with_type(HealthCheckType::Https)
                        .with_resource_path("/health?x=1&y=2")
                        .with_enable_sni(true),
                ),
        )?;

        let request = &transport.requests()[0];
        assert_eq!(request.method, http::Method::POST);
        assert_eq!(request.uri, "https://route53.amazonaws.com/");
        assert_eq!(
            request.body_str(),
            "Action=CreateHealthCheck&Version=2013-04-01&CallerReference=web-1\
             &HealthCheckConfig.IPAddress=192.0.2.44&HealthCheckConfig.Port=443\
             &HealthCheckConfig.Type=HTTPS&HealthCheckConfig.ResourcePath=%2Fhealth%3Fx%3D1%26y%3D2\
             &HealthCheckConfig.EnableSNI=true"
        );

        let check = out.health_check.unwrap();
        assert_eq!(check.caller_reference.as_deref(), Some("web-1"));
        assert_eq!(check.health_check_version, Some(1));
        let config = check.health_check_config.unwrap();
        assert_eq!(config.ip_address.as_deref(), Some("192.0.2.44"));
        assert_eq!(config.r#type, Some(HealthCheckType::Https));
        assert_eq!(config.resource_path.as_deref(), Some("/health?x=1&y=2"));
        assert_eq!(config.enable_sni, Some(true));
        assert!(config.regions.is_none());
        assert!(out.location.is_some());
        Ok(())
    }

    #[test]
    fn test_should_list_pages_and_empty_lists() -> anyhow::Result<()> {
        let (client, transport) = client()?;
        transport.push_response(xml_response(
            StatusCode::OK,
            "<ListHealthChecksResponse><ListHealthChecksResult>\
             <HealthChecks><HealthCheck><Id>a</Id></HealthCheck><HealthCheck><Id>b</Id></HealthCheck></HealthChecks>\
             <IsTruncated>false</IsTruncated><MaxItems>100</MaxItems>\
             </ListHealthChecksResult></ListHealthChecksResponse>",
        ));
        transport.push_response(xml_response(
            StatusCode::OK,
            "<ListHealthChecksResponse><ListHealthChecksResult>\
             <HealthChecks/><IsTruncated>false</IsTruncated>\
             </ListHealthChecksResult></ListHealthChecksResponse>",
        ));

        let first = client.list_health_checks(&ListHealthChecksInput::default().with_max_items(100))?;
        let ids: Vec<_> = first
            .health_checks
            .unwrap()
            .into_iter()
            .filter_map(|c| c.id)
            .collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(first.max_items.as_deref(), Some("100"));

        let second = client.list_health_checks(&ListHealthChecksInput::default())?;
        assert_eq!(second.health_checks, Some(Vec::new()));
        assert!(second.next_marker.is_none());

        assert!(transport.requests()[0].body_str().ends_with("&MaxItems=100"));
        Ok(())
    }

    #[test]
    fn test_should_decode_typed_and_unknown_errors() -> anyhow::Result<()> {
        let (client, transport) = client()?;
        transport.push_response(xml_response(
            StatusCode::CONFLICT,
            "<ErrorResponse><Error><Type>Sender</Type><Code>HealthCheckVersionMismatch</Code>\
             <Message>version 3 is stale</Message></Error><RequestId>r-9</RequestId></ErrorResponse>",
        ));
        transport.push_response(xml_response(
            StatusCode::BAD_REQUEST,
            "<ErrorResponse><Error><Code>SomethingNew</Code><Message>hm</Message></Error>\
             <RequestId>r-10</RequestId></ErrorResponse>",
        ));

        let update = UpdateHealthCheckInput::default()
            .with_health_check_id("hc-1")
            .with_health_check_version(3);
        match client.update_health_check(&update) {
            Err(SdkError::Service(Route53Error::HealthCheckVersionMismatch(p))) => {
                assert_eq!(p.message.as_deref(), Some("version 3 is stale"));
            }
            other => panic!("unexpected {other:?}"),
        }

        match client.get_health_check_count(&GetHealthCheckCountInput::default()) {
            Err(SdkError::Service(Route53Error::Unhandled(e))) => {
                assert_eq!(e.code, "SomethingNew");
                assert_eq!(e.request_id.as_deref(), Some("r-10"));
                assert_eq!(e.status, 400);
            }
            other => panic!("unexpected {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn test_should_not_send_invalid_input() -> anyhow::Result<()> {
        let (client, transport) = client()?;
        let result = client.create_health_check(&CreateHealthCheckInput::default());
        assert!(matches!(
            result,
            Err(SdkError::Construction(MarshalError::MissingField { .. }))
        ));
        assert!(transport.requests().is_empty());
        Ok(())
    }
}
