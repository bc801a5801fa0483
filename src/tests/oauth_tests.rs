//! OAuth2 flow tests.

use crate::client::{PinterestClient, PinterestClientImpl};
use crate::config::PinterestConfigBuilder;
use crate::errors::{ConfigurationError, PinterestError};
use crate::fixtures;
use crate::services::oauth::{
    AuthorizeRequest, ExchangeCodeRequest, OAuthServiceTrait, RefreshTokenRequest,
};
use base64::Engine;
use pretty_assertions::assert_eq;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn oauth_client(token_url: Option<&str>) -> PinterestClientImpl {
    let mut builder = PinterestConfigBuilder::new()
        .app_id("1484362")
        .app_secret("app-secret");
    if let Some(url) = token_url {
        builder = builder.token_url(url).unwrap();
    }
    PinterestClientImpl::new(builder.build().unwrap()).unwrap()
}

fn expected_basic_auth() -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode("1484362:app-secret");
    format!("Basic {}", encoded)
}

#[test]
fn test_authorize_builds_pinterest_url_with_state() {
    let client = oauth_client(None);
    let authorization = client.oauth().authorize(AuthorizeRequest::new()).unwrap();

    assert!(authorization
        .url
        .starts_with("https://www.pinterest.com/oauth"));
    assert!(authorization.url.contains("response_type=code"));
    assert!(authorization.url.contains("client_id=1484362"));
    assert!(!authorization.state.is_empty());
    assert!(authorization.url.contains(&authorization.state));
}

#[test]
fn test_authorize_honors_explicit_state_and_scopes() {
    let client = oauth_client(None);
    let authorization = client
        .oauth()
        .authorize(
            AuthorizeRequest::new()
                .scopes(vec!["boards:read", "pins:write"])
                .state("csrf-state-123"),
        )
        .unwrap();

    assert_eq!(authorization.state, "csrf-state-123");
    // Comma becomes %2C and colon %3A under form encoding.
    assert!(authorization
        .url
        .contains("scope=boards%3Aread%2Cpins%3Awrite"));
}

#[test]
fn test_authorize_without_app_credentials_fails() {
    let config = PinterestConfigBuilder::new()
        .access_token("pina_token")
        .build()
        .unwrap();
    let client = PinterestClientImpl::new(config).unwrap();

    let err = client.oauth().authorize(AuthorizeRequest::new()).unwrap_err();
    assert!(matches!(
        err,
        PinterestError::Configuration(ConfigurationError::MissingAppCredentials)
    ));
}

#[tokio::test]
async fn test_exchange_code_posts_form_with_basic_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(header("authorization", expected_basic_auth().as_str()))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("code=authcode123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::responses::token()))
        .expect(1)
        .mount(&server)
        .await;

    let client = oauth_client(Some(&format!("{}/oauth/token", server.uri())));
    let token = client
        .oauth()
        .exchange_code(ExchangeCodeRequest::new(
            "https://localhost/?code=authcode123&state=csrf-state-123",
        ))
        .await
        .unwrap();

    assert_eq!(token.access_token.as_deref(), Some("pina_exchanged_token"));
    assert_eq!(token.refresh_token.as_deref(), Some("pinr_refresh_token"));
    assert_eq!(token.expires_in, Some(2_592_000));
}

#[tokio::test]
async fn test_exchange_code_surfaces_provider_denial() {
    // Denial is carried in the callback; no token request happens.
    let client = oauth_client(None);
    let err = client
        .oauth()
        .exchange_code(ExchangeCodeRequest::new(
            "https://localhost/?error=access_denied",
        ))
        .await
        .unwrap_err();

    match err {
        PinterestError::Api(api) => {
            assert!(api.message.contains("access_denied"));
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_exchange_code_without_code_fails() {
    let client = oauth_client(None);
    let err = client
        .oauth()
        .exchange_code(ExchangeCodeRequest::new("https://localhost/?state=abc"))
        .await
        .unwrap_err();

    assert!(err.is_configuration());
}

#[tokio::test]
async fn test_refresh_token_posts_grant() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(header("authorization", expected_basic_auth().as_str()))
        .and(body_string_contains("grant_type=refresh_token"))
        .and(body_string_contains("refresh_token=pinr_refresh_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::responses::token()))
        .expect(1)
        .mount(&server)
        .await;

    let client = oauth_client(Some(&format!("{}/oauth/token", server.uri())));
    let token = client
        .oauth()
        .refresh_token(RefreshTokenRequest::new("pinr_refresh_token"))
        .await
        .unwrap();

    assert!(token.access_token.is_some());
}

#[tokio::test]
async fn test_token_endpoint_error_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(fixtures::responses::error(283, "Invalid refresh token.")),
        )
        .mount(&server)
        .await;

    let client = oauth_client(Some(&format!("{}/oauth/token", server.uri())));
    let err = client
        .oauth()
        .refresh_token(RefreshTokenRequest::new("stale"))
        .await
        .unwrap_err();

    assert_eq!(err.api_code(), Some(283));
}
