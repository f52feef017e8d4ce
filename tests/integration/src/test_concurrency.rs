//! Sharing one client across threads.

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use awsmarshal_dlm::{DlmClient, GetLifecyclePolicyInput};
    use awsmarshal_route53::{GetHealthCheckCountInput, Route53Client};
    use http::StatusCode;

    use crate::{json_response, replay_client, xml_response};

    const THREADS: usize = 8;

    #[test]
    fn test_should_share_client_through_arc() -> anyhow::Result<()> {
        let (client, transport) = replay_client("us-east-1", DlmClient::builder, DlmClient::from_client)?;
        for _ in 0..THREADS {
            transport.push_response(json_response(
                StatusCode::OK,
                r#"{"Policy":{"PolicyId":"policy-1","State":"ENABLED"}}"#,
            ));
        }

        let client = Arc::new(client);
        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                let client = Arc::clone(&client);
                thread::spawn(move || {
                    client.get_lifecycle_policy(
                        &GetLifecyclePolicyInput::default().with_policy_id(format!("policy-{i}")),
                    )
                })
            })
            .collect();

        for handle in handles {
            let out = handle.join().expect("thread panicked")?;
            assert_eq!(out.policy.unwrap().policy_id.as_deref(), Some("policy-1"));
        }

        let mut uris: Vec<_> = transport.requests().into_iter().map(|r| r.uri).collect();
        uris.sort();
        uris.dedup();
        assert_eq!(uris.len(), THREADS);
        assert_eq!(transport.remaining(), 0);
        Ok(())
    }

    #[test]
    fn test_should_share_cloned_clients() -> anyhow::Result<()> {
        let (client, transport) =
            replay_client("us-east-1", Route53Client::builder, Route53Client::from_client)?;
        for _ in 0..THREADS {
            transport.push_response(xml_response(
                StatusCode::OK,
                "<GetHealthCheckCountResponse><GetHealthCheckCountResult>\
                 <HealthCheckCount>3</HealthCheckCount>\
                 </GetHealthCheckCountResult></GetHealthCheckCountResponse>",
            ));
        }

        let counts = thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    let client = client.clone();
                    scope.spawn(move || client.get_health_check_count(&GetHealthCheckCountInput::default()))
                })
                .collect();
            handles
                .into_iter()
                .map(|h| h.join().expect("thread panicked"))
                .collect::<Result<Vec<_>, _>>()
        })?;

        assert!(counts.iter().all(|c| c.health_check_count == Some(3)));
        assert_eq!(transport.requests().len(), THREADS);
        Ok(())
    }
}
