//! Integration tests for the HTTP client functionality.
//!
//! These tests verify URL construction, header merging, response parsing,
//! and error mapping against a mock Strapi server.

use serde_json::json;
use std::collections::HashMap;
use strapi_api::clients::{DataType, HttpClient, HttpError, HttpMethod, HttpRequest};
use strapi_api::{BaseUrl, StrapiConfig};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a client pointed at the given base URL.
fn create_client(base_url: &str) -> HttpClient {
    let config = StrapiConfig::builder()
        .base_url(BaseUrl::new(base_url).unwrap())
        .user_agent_prefix("TestSuite/1.0")
        .build()
        .unwrap();
    HttpClient::new(&config)
}

fn bearer(token: &str) -> HashMap<String, String> {
    HashMap::from([("Authorization".to_string(), format!("Bearer {token}"))])
}

// ============================================================================
// Request Construction
// ============================================================================

#[tokio::test]
async fn test_get_sends_decoded_deep_object_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .and(query_param("filters[title][$eq]", "Hello World"))
        .and(query_param("sort[0]", "id:desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [], "meta": {}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Get, "api/articles")
        .query_param("filters[title][$eq]", "Hello World")
        .query_param("sort[0]", "id:desc")
        .build()
        .unwrap();

    let response = client.request(request, &HashMap::new()).await.unwrap();
    assert!(response.is_ok());
    assert_eq!(response.body["data"], json!([]));
}

#[tokio::test]
async fn test_auth_and_default_headers_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .and(header("Authorization", "Bearer secret"))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Get, "api/articles")
        .build()
        .unwrap();

    client.request(request, &bearer("secret")).await.unwrap();
}

#[tokio::test]
async fn test_post_sends_json_body_with_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/articles"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"data": {"title": "Hello"}})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"data": {"id": 1}})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Post, "api/articles")
        .body(json!({"data": {"title": "Hello"}}))
        .body_type(DataType::Json)
        .build()
        .unwrap();

    let response = client.request(request, &HashMap::new()).await.unwrap();
    assert_eq!(response.code, 201);
    assert_eq!(response.reason, "Created");
}

#[tokio::test]
async fn test_leading_slash_in_path_is_tolerated() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/articles/abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Delete, "/api/articles/abc")
        .build()
        .unwrap();

    client.request(request, &HashMap::new()).await.unwrap();
}

// ============================================================================
// Response Parsing
// ============================================================================

#[tokio::test]
async fn test_empty_body_parses_as_empty_object() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/articles/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Delete, "api/articles/1")
        .build()
        .unwrap();

    let response = client.request(request, &HashMap::new()).await.unwrap();
    assert_eq!(response.body, json!({}));
}

#[tokio::test]
async fn test_response_headers_are_lowercased() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("X-Request-Id", "req-1")
                .set_body_json(json!({})),
        )
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Get, "api/articles")
        .build()
        .unwrap();

    let response = client.request(request, &HashMap::new()).await.unwrap();
    assert!(response.headers.contains_key("x-request-id"));
    assert_eq!(response.request_id(), Some("req-1"));
}

// ============================================================================
// Error Mapping
// ============================================================================

#[tokio::test]
async fn test_non_2xx_maps_to_response_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "data": null,
            "error": {"status": 404, "name": "NotFoundError", "message": "Not Found"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Get, "api/articles/missing")
        .build()
        .unwrap();

    let result = client.request(request, &HashMap::new()).await;

    match result {
        Err(HttpError::Response(e)) => {
            assert_eq!(e.code, 404);
            assert_eq!(e.reason, "Not Found");
            assert_eq!(e.message, "Not Found");
            assert_eq!(e.to_string(), "ERROR: 404: Not Found");
        }
        other => panic!("expected response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/articles"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    let request = HttpRequest::builder(HttpMethod::Get, "api/articles")
        .build()
        .unwrap();

    let result = client.request(request, &HashMap::new()).await;

    match result {
        Err(HttpError::Response(e)) => {
            assert_eq!(e.code, 500);
            assert_eq!(e.reason, "Internal Server Error");
            assert!(e.message.contains("upstream exploded"));
        }
        other => panic!("expected response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_request_fails_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_client(&server.uri());
    let request = HttpRequest {
        http_method: HttpMethod::Put,
        path: "api/articles/1".to_string(),
        body: None,
        body_type: None,
        query: Vec::new(),
        extra_headers: None,
    };

    let result = client.request(request, &HashMap::new()).await;
    assert!(matches!(result, Err(HttpError::InvalidRequest(_))));
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let client = create_client("http://127.0.0.1:9");
    let request = HttpRequest::builder(HttpMethod::Get, "api/articles")
        .build()
        .unwrap();

    let result = client.request(request, &HashMap::new()).await;
    assert!(matches!(result, Err(HttpError::Network(_))));
}
