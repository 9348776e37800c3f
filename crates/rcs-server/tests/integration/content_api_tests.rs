//! Content API routes without authentication

use rcs_domain::RuleContentDirectory;
use rocket::http::{ContentType, Method, Status};
use serde_json::{Value, json};

use crate::test_utils::{API_PREFIX, OPENAPI_DOCUMENT, TestServer, api};

async fn get_json(server: &TestServer, uri: &str) -> (Status, Value) {
    let client = server.client().await;
    let response = client.get(uri).dispatch().await;
    let status = response.status();
    let body = response.into_json::<Value>().await.expect("JSON body");
    (status, body)
}

fn rule_names(body: &Value) -> Vec<String> {
    body["rules"]
        .as_object()
        .expect("rules object")
        .keys()
        .cloned()
        .collect()
}

#[rocket::async_test]
async fn main_endpoint_returns_ok_status() {
    let server = TestServer::new();
    let (status, body) = get_json(&server, API_PREFIX).await;

    assert_eq!(status, Status::Ok);
    assert_eq!(body, json!({"status": "ok"}));
}

#[rocket::async_test]
async fn groups_are_listed_in_catalog_key_order() {
    let server = TestServer::new();
    let (status, body) = get_json(&server, &api("/groups")).await;

    assert_eq!(status, Status::Ok);
    assert_eq!(body["status"], "ok");
    let groups = body["groups"].as_array().expect("groups array");
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0]["name"], "Performance");
    assert_eq!(groups[1]["name"], "Security");
    assert_eq!(groups[1]["tags"], json!(["security", "cve"]));
    assert_eq!(groups[1]["description"], "Security related rules");
}

#[rocket::async_test]
async fn status_without_filter_returns_every_rule() {
    let server = TestServer::new();
    let (status, body) = get_json(&server, &api("/status")).await;

    assert_eq!(status, Status::Ok);
    assert_eq!(body["status"], "ok");
    assert_eq!(rule_names(&body), ["broken_rule", "ext_rule", "int_rule"]);
    assert_eq!(
        body["rules"]["ext_rule"],
        json!({"type": "external", "loaded": true, "parsing_error": ""})
    );
    assert_eq!(body["rules"]["broken_rule"]["loaded"], false);
    assert_eq!(
        body["rules"]["broken_rule"]["parsing_error"],
        "missing mandatory file: plugin.yaml"
    );
}

#[rocket::async_test]
async fn status_filter_by_category_uses_parameter_presence() {
    let server = TestServer::new();

    let (_, internal) = get_json(&server, &api("/status?internal")).await;
    assert_eq!(rule_names(&internal), ["int_rule"]);

    let (_, external) = get_json(&server, &api("/status?external=false")).await;
    assert_eq!(rule_names(&external), ["broken_rule", "ext_rule"]);
}

#[rocket::async_test]
async fn status_filters_are_combined_as_union() {
    let server = TestServer::new();

    let (_, body) = get_json(&server, &api("/status?internal&rule=broken_rule")).await;
    assert_eq!(rule_names(&body), ["broken_rule", "int_rule"]);

    let (_, body) = get_json(&server, &api("/status?rule=ext_rule&rule=int_rule")).await;
    assert_eq!(rule_names(&body), ["ext_rule", "int_rule"]);
}

#[rocket::async_test]
async fn status_filter_matching_nothing_returns_empty_map() {
    let server = TestServer::new();
    let (status, body) = get_json(&server, &api("/status?rule=unknown")).await;

    assert_eq!(status, Status::Ok);
    assert_eq!(body, json!({"status": "ok", "rules": {}}));
}

#[rocket::async_test]
async fn info_reports_build_facts() {
    let server = TestServer::new();
    let (status, body) = get_json(&server, &api("/info")).await;

    assert_eq!(status, Status::Ok);
    let info = body["info"].as_object().expect("info object");
    assert_eq!(info.len(), 4);
    assert_eq!(info["BuildVersion"], env!("CARGO_PKG_VERSION"));
    for key in ["BuildTime", "BuildBranch", "BuildCommit"] {
        assert!(info.contains_key(key), "missing {key}");
    }
}

#[rocket::async_test]
async fn content_is_messagepack_of_the_directory() {
    let server = TestServer::new();
    let client = server.client().await;

    let response = client.get(api("/content")).dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.content_type(), Some(ContentType::Binary));
    let first = response.into_bytes().await.expect("body");

    let decoded: RuleContentDirectory = rmp_serde::from_slice(&first).expect("decode content");
    assert_eq!(&decoded, server.state.directory());
    assert!(!decoded.rules.contains_key("broken_rule"));

    let second = client
        .get(api("/content"))
        .dispatch()
        .await
        .into_bytes()
        .await
        .expect("body");
    assert_eq!(first, second);
}

#[rocket::async_test]
async fn openapi_document_is_served_by_file_name() {
    let server = TestServer::new();
    let client = server.client().await;

    let response = client.get(api("/openapi.json")).dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.content_type(), Some(ContentType::JSON));
    assert_eq!(response.into_string().await.as_deref(), Some(OPENAPI_DOCUMENT));
}

#[rocket::async_test]
async fn other_file_names_are_not_found() {
    let server = TestServer::new();
    let (status, body) = get_json(&server, &api("/swagger.json")).await;

    assert_eq!(status, Status::NotFound);
    assert_eq!(body, json!({"status": "Not found"}));
}

#[rocket::async_test]
async fn unknown_route_returns_status_envelope() {
    let server = TestServer::new();

    let (status, body) = get_json(&server, &api("/rules/ext_rule")).await;
    assert_eq!(status, Status::NotFound);
    assert_eq!(body, json!({"status": "Not found"}));

    let (status, _) = get_json(&server, "/outside/prefix").await;
    assert_eq!(status, Status::NotFound);
}

#[rocket::async_test]
async fn api_prefix_is_configurable() {
    let server = TestServer::with_config(|config| config.server.api_prefix = "/content/v2/".into());
    let (status, body) = get_json(&server, "/content/v2/groups").await;

    assert_eq!(status, Status::Ok);
    assert_eq!(body["groups"].as_array().map(Vec::len), Some(2));

    let (status, _) = get_json(&server, &api("/groups")).await;
    assert_eq!(status, Status::NotFound);
}

#[rocket::async_test]
async fn cors_headers_are_added_when_enabled() {
    let server = TestServer::with_config(|config| config.server.enable_cors = true);
    let client = server.client().await;

    let response = client.get(api("/groups")).dispatch().await;
    assert_eq!(
        response.headers().get_one("Access-Control-Allow-Origin"),
        Some("*")
    );

    let preflight = client.req(Method::Options, api("/groups")).dispatch().await;
    assert_eq!(preflight.status(), Status::NoContent);
    assert_eq!(
        preflight.headers().get_one("Access-Control-Allow-Methods"),
        Some("GET, OPTIONS")
    );
}

#[rocket::async_test]
async fn cors_headers_are_absent_by_default() {
    let server = TestServer::new();
    let client = server.client().await;

    let response = client.get(api("/groups")).dispatch().await;
    assert!(response.headers().get_one("Access-Control-Allow-Origin").is_none());
}
