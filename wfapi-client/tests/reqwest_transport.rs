use std::time::Duration;

use httpmock::Method::{DELETE, GET, POST, PUT};
use httpmock::MockServer;
use serde_json::json;
use wfapi_client::{
    BackendUrl, Client, ClientConfig, RequestContext, TransportError, WorkflowCreateRequest,
    WorkflowService,
};

fn service_for(
    server: &MockServer,
    configure: impl FnOnce(ClientConfig) -> ClientConfig,
) -> WorkflowService {
    let config = configure(ClientConfig::new(BackendUrl::parse(&server.base_url()).unwrap()));
    Client::new(config).unwrap().workflows()
}

#[tokio::test]
async fn create_sends_json_envelope_and_decodes_response() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/workflows")
                .header("content-type", "application/json")
                .json_body(json!({"data": {"name": "invoice-flow"}}));
            then.status(201)
                .header("content-type", "application/json")
                .json_body(json!({"data": {"_id": "wf_1", "name": "invoice-flow"}}));
        })
        .await;

    let svc = service_for(&server, |c| c);
    let resp = svc
        .create(&RequestContext::new(), &WorkflowCreateRequest::new("invoice-flow"))
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(resp.status, 201);
    assert_eq!(resp.data().unwrap()["_id"], "wf_1");
    assert_eq!(resp.header("content-type"), Some("application/json"));
}

#[tokio::test]
async fn list_sends_pagination_query() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/workflows")
                .query_param("page", "2")
                .query_param("limit", "25");
            then.status(200)
                .json_body(json!({"page": 2, "pageSize": 25, "totalCount": 0, "data": []}));
        })
        .await;

    let svc = service_for(&server, |c| c);
    let resp = svc.list(&RequestContext::new(), 2, 25).await.unwrap();

    mock.assert_async().await;
    assert_eq!(resp.data(), Some(&json!([])));
    assert_eq!(resp.body["pageSize"], 25);
}

#[tokio::test]
async fn status_toggle_and_delete_hit_item_path() {
    let server = MockServer::start_async().await;
    let status = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/workflows/wf_123")
                .json_body(json!({"data": {"active": false}}));
            then.status(200).json_body(json!({"data": {"active": false}}));
        })
        .await;
    let delete = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/workflows/wf_123");
            then.status(200).json_body(json!({"data": true}));
        })
        .await;

    let svc = service_for(&server, |c| c);
    let ctx = RequestContext::new();
    svc.update_status(&ctx, "wf_123", false).await.unwrap();
    let resp = svc.delete(&ctx, "wf_123").await.unwrap();

    status.assert_async().await;
    delete.assert_async().await;
    assert_eq!(resp.data(), Some(&json!(true)));
}

#[tokio::test]
async fn api_key_and_default_headers_are_sent() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/workflows/wf_1")
                .header("authorization", "ApiKey sk_test")
                .header("x-tenant", "acme")
                .header("accept", "application/json");
            then.status(200).json_body(json!({"data": {"_id": "wf_1"}}));
        })
        .await;

    let svc = service_for(&server, |c| c.with_api_key("sk_test").with_header("x-tenant", "acme"));
    svc.get(&RequestContext::new(), "wf_1").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn non_success_status_carries_decoded_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/workflows/missing");
            then.status(404)
                .json_body(json!({"statusCode": 404, "message": "Workflow not found"}));
        })
        .await;

    let svc = service_for(&server, |c| c);
    let err = svc.get(&RequestContext::new(), "missing").await.unwrap_err();

    let resp = err.response().expect("status error carries the response");
    assert_eq!(resp.status, 404);
    assert_eq!(resp.body["message"], "Workflow not found");
    assert_eq!(err.to_string(), "remote returned status 404");
}

#[tokio::test]
async fn non_json_error_body_is_kept_as_text() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/workflows/wf");
            then.status(502).body("bad gateway");
        })
        .await;

    let svc = service_for(&server, |c| c);
    let err = svc.get(&RequestContext::new(), "wf").await.unwrap_err();
    assert_eq!(err.response().unwrap().body, json!("bad gateway"));
}

#[tokio::test]
async fn invalid_json_on_success_is_a_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/workflows/wf");
            then.status(200).body("{not json");
        })
        .await;

    let svc = service_for(&server, |c| c);
    let err = svc.get(&RequestContext::new(), "wf").await.unwrap_err();
    assert!(matches!(err, TransportError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn empty_success_body_decodes_to_null() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/workflows/wf");
            then.status(204);
        })
        .await;

    let svc = service_for(&server, |c| c);
    let resp = svc.delete(&RequestContext::new(), "wf").await.unwrap();
    assert_eq!(resp.status, 204);
    assert!(resp.body.is_null());
}

#[tokio::test]
async fn oversized_response_is_rejected() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/workflows");
            then.status(200).body(format!("\"{}\"", "x".repeat(1000)));
        })
        .await;

    let svc = service_for(&server, |c| c.with_max_response_bytes(100));
    let err = svc.list(&RequestContext::new(), 1, 10).await.unwrap_err();
    assert_eq!(err, TransportError::ResponseTooLarge { max_bytes: 100 });
}

#[tokio::test]
async fn context_deadline_aborts_slow_response() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/workflows/slow");
            then.status(200)
                .delay(Duration::from_secs(5))
                .json_body(json!({"data": {}}));
        })
        .await;

    let svc = service_for(&server, |c| c);
    let ctx = RequestContext::new().with_timeout(Duration::from_millis(100));
    let started = std::time::Instant::now();
    let err = svc.get(&ctx, "slow").await.unwrap_err();

    assert_eq!(err, TransportError::DeadlineExceeded);
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn client_timeout_maps_to_timeout() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/workflows/slow");
            then.status(200)
                .delay(Duration::from_secs(5))
                .json_body(json!({"data": {}}));
        })
        .await;

    let svc = service_for(&server, |c| c.with_timeout(Duration::from_millis(100)));
    let err = svc.get(&RequestContext::new(), "slow").await.unwrap_err();
    assert_eq!(err, TransportError::Timeout);
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    // Port 9 (discard) on localhost is closed on test machines.
    let config = ClientConfig::new(BackendUrl::parse("http://127.0.0.1:9").unwrap());
    let svc = Client::new(config).unwrap().workflows();
    let err = svc.get(&RequestContext::new(), "wf").await.unwrap_err();
    assert!(matches!(err, TransportError::Network(_)), "{err:?}");
}
