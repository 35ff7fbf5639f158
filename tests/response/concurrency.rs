//! Concurrent filtering over shared schemas.
//!
//! Schemas and configuration are immutable once built, so one copy can serve any
//! number of concurrent responses.

use crate::common::{api_resolver, init_logging, set, user_schema};
use scim_response_filter::{ResourceSchema, ResponseFilter, ServiceProviderConfig};
use serde_json::{Value, json};
use std::sync::Arc;

fn render(schema: &ResourceSchema, config: &ServiceProviderConfig, index: usize) -> Value {
    let names: &[&str] = if index % 2 == 0 { &["emails"] } else { &[] };
    let filter = ResponseFilter::new(config, &api_resolver).with_attributes(set(schema, names));

    filter
        .filter_resource(
            schema,
            json!({
                "id": format!("user-{}", index),
                "userName": format!("user{}", index),
                "displayName": "Shared",
                "emails": [{ "value": format!("user{}@example.com", index) }]
            }),
        )
        .expect("resource has every required attribute")
}

#[tokio::test]
async fn test_concurrent_filtering_shares_schema() {
    init_logging();
    let schema = Arc::new(user_schema());
    let config = Arc::new(ServiceProviderConfig::default());

    let mut handles = Vec::new();
    for index in 0..32 {
        let schema = Arc::clone(&schema);
        let config = Arc::clone(&config);
        handles.push(tokio::spawn(async move {
            (index, render(&schema, &config, index))
        }));
    }

    for handle in handles {
        let (index, response) = handle.await.unwrap();
        assert_eq!(response["id"], format!("user-{}", index));
        assert_eq!(response["userName"], format!("user{}", index));
        assert_eq!(
            response["emails"][0]["value"],
            format!("user{}@example.com", index)
        );
        if index % 2 == 0 {
            assert!(response.get("displayName").is_none());
        } else {
            assert_eq!(response["displayName"], "Shared");
        }
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_blocking_pool_filtering() {
    let schema = Arc::new(user_schema());
    let config = Arc::new(ServiceProviderConfig::default());

    let handles: Vec<_> = (0..8)
        .map(|index| {
            let schema = Arc::clone(&schema);
            let config = Arc::clone(&config);
            tokio::task::spawn_blocking(move || render(&schema, &config, index))
        })
        .collect();

    for handle in handles {
        let response = handle.await.unwrap();
        assert!(response.get("password").is_none());
    }
}
