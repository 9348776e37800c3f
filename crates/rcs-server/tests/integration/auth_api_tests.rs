//! Content API with identity-header authentication enabled

use rocket::http::{Header, Status};
use serde_json::{Value, json};

use crate::test_utils::{TestServer, api, identity_header, valid_identity};

const PROTECTED_ROUTES: [&str; 6] = ["", "/groups", "/content", "/status", "/info", "/metrics"];

#[rocket::async_test]
async fn protected_routes_without_identity_return_401() {
    let server = TestServer::with_auth();
    let client = server.client().await;

    for route in PROTECTED_ROUTES {
        let response = client.get(api(route)).dispatch().await;
        assert_eq!(
            response.status(),
            Status::Unauthorized,
            "GET {route} without identity should be rejected"
        );
    }
}

#[rocket::async_test]
async fn missing_identity_reports_reason() {
    let server = TestServer::with_auth();
    let client = server.client().await;

    let response = client.get(api("/groups")).dispatch().await;
    assert_eq!(response.status(), Status::Unauthorized);
    let body: Value = response.into_json().await.expect("JSON body");
    assert_eq!(body, json!({"status": "Missing auth token"}));
}

#[rocket::async_test]
async fn protected_routes_with_identity_succeed() {
    let server = TestServer::with_auth();
    let client = server.client().await;

    for route in PROTECTED_ROUTES {
        let response = client.get(api(route)).header(valid_identity()).dispatch().await;
        assert_eq!(response.status(), Status::Ok, "GET {route} with identity");
    }
}

#[rocket::async_test]
async fn token_that_is_not_base64_returns_403() {
    let server = TestServer::with_auth();
    let client = server.client().await;

    let response = client
        .get(api("/status"))
        .header(Header::new("x-rh-identity", "not base64 !!"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Forbidden);
    let body: Value = response.into_json().await.expect("JSON body");
    let message = body["status"].as_str().expect("status message");
    assert!(message.starts_with("Malformed authentication token"), "{message}");
}

#[rocket::async_test]
async fn token_that_is_not_json_returns_403() {
    let server = TestServer::with_auth();
    let client = server.client().await;

    let response = client
        .get(api("/status"))
        .header(identity_header("identity: yaml"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Forbidden);
}

#[rocket::async_test]
async fn identity_without_account_or_org_returns_403() {
    let server = TestServer::with_auth();
    let client = server.client().await;

    let response = client
        .get(api("/status"))
        .header(identity_header(r#"{"identity": {}}"#))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Forbidden);
}

#[rocket::async_test]
async fn internal_org_id_is_accepted() {
    let server = TestServer::with_auth();
    let client = server.client().await;

    let response = client
        .get(api("/info"))
        .header(identity_header(r#"{"identity": {"internal": {"org_id": "1"}}}"#))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
}

#[rocket::async_test]
async fn openapi_document_is_served_without_identity() {
    let server = TestServer::with_auth();
    let client = server.client().await;

    let response = client.get(api("/openapi.json")).dispatch().await;
    assert_eq!(response.status(), Status::Ok);
}

#[rocket::async_test]
async fn identity_is_ignored_when_auth_is_disabled() {
    let server = TestServer::new();
    let client = server.client().await;

    let response = client
        .get(api("/groups"))
        .header(Header::new("x-rh-identity", "garbage"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
}
