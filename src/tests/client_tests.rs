//! Client tests against a mock HTTP server.

use crate::client::{PinterestClient, PinterestClientImpl};
use crate::config::PinterestConfigBuilder;
use crate::errors::PinterestError;
use crate::fixtures;
use crate::services::pins::{GetPinRequest, PinsServiceTrait};
use http::Method;
use pretty_assertions::assert_eq;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> PinterestClientImpl {
    let config = PinterestConfigBuilder::new()
        .access_token("pina_test_token")
        .base_url(&server.uri())
        .unwrap()
        .build()
        .unwrap();
    PinterestClientImpl::new(config).unwrap()
}

#[tokio::test]
async fn test_get_pin_sends_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pins/813744226420795884"))
        .and(header("authorization", "Bearer pina_test_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::responses::pin()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let pin = client
        .pins()
        .get(GetPinRequest::new("813744226420795884"))
        .await
        .unwrap();

    assert_eq!(pin.id.as_deref(), Some("813744226420795884"));
    assert_eq!(pin.title.as_deref(), Some("Fall recipes"));
}

#[tokio::test]
async fn test_get_pin_with_ad_account_context() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pins/813744226420795884"))
        .and(query_param("ad_account_id", "549755885175"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::responses::pin()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let pin = client
        .pins()
        .get(GetPinRequest::new("813744226420795884").ad_account_id("549755885175"))
        .await
        .unwrap();

    assert!(pin.id.is_some());
}

#[tokio::test]
async fn test_delete_pin_returns_true_on_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/pins/813744226420795884"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let deleted = client.pins().delete("813744226420795884").await.unwrap();
    assert!(deleted);
}

#[tokio::test]
async fn test_api_error_preserves_code_and_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pins/0"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(fixtures::responses::error(4, "Pin not found.")),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.pins().get(GetPinRequest::new("0")).await.unwrap_err();

    match err {
        PinterestError::Api(api) => {
            assert_eq!(api.code, 4);
            assert_eq!(api.message, "Pin not found.");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_api_error_extra_fields_pass_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pins/0"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "code": 3,
            "message": "Authorization failed.",
            "request_id": "abc123"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.pins().get(GetPinRequest::new("0")).await.unwrap_err();

    match err {
        PinterestError::Api(api) => {
            assert_eq!(api.extra["request_id"], "abc123");
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_undecodable_failure_surfaces_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pins/0"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.pins().get(GetPinRequest::new("0")).await.unwrap_err();

    match err {
        PinterestError::Response(crate::errors::ResponseError::UnexpectedStatus {
            status,
            body,
        }) => {
            assert_eq!(status, 502);
            assert_eq!(body, "Bad Gateway");
        }
        other => panic!("expected unexpected-status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_raw_request_escape_hatch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user_account"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(fixtures::responses::user_account()),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let value: serde_json::Value = client
        .request(Method::GET, "user_account", Vec::new(), None)
        .await
        .unwrap();

    assert_eq!(value["username"], "operating_user");
}

#[tokio::test]
async fn test_with_access_token_sends_rotated_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pins/1"))
        .and(header("authorization", "Bearer pina_rotated_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::responses::pin()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let rotated = client.with_access_token("pina_rotated_token");

    rotated.pins().get(GetPinRequest::new("1")).await.unwrap();
}

#[tokio::test]
async fn test_missing_access_token_fails_before_network() {
    // No server at all; the call must fail synchronously.
    let config = PinterestConfigBuilder::new().build().unwrap();
    let client = PinterestClientImpl::new(config).unwrap();

    let err = client.pins().get(GetPinRequest::new("1")).await.unwrap_err();
    assert!(err.is_configuration());
}
