//! HTTP transport layer for the Pinterest client.
//!
//! Provides low-level HTTP communication with the Pinterest API: request
//! building, response parsing, and error mapping. Each invocation issues
//! exactly one network call; transport faults are wrapped and surfaced
//! immediately, never retried.

use crate::config::PinterestConfig;
use crate::errors::{ApiError, NetworkError, PinterestError, PinterestResult, ResponseError};
use async_trait::async_trait;
use http::{HeaderMap, Method};
use reqwest::{Client, ClientBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// HTTP transport trait for making API requests
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a request with an optional JSON body and decode a JSON response.
    ///
    /// Callers that want the raw mapping instead of a typed record pick
    /// `Res = serde_json::Value`.
    async fn send_json(
        &self,
        request: TransportRequest<serde_json::Value>,
    ) -> PinterestResult<serde_json::Value>;

    /// Send a form-encoded request (OAuth token endpoint)
    async fn send_form(&self, request: FormRequest) -> PinterestResult<serde_json::Value>;

    /// Send a request where only the status class matters; the body is
    /// suppressed on success (delete-style operations)
    async fn send_empty(&self, request: TransportRequest<serde_json::Value>)
        -> PinterestResult<()>;
}

/// Decode a raw JSON mapping into a typed record.
///
/// Unknown keys are ignored and absent keys take their defaults; only a
/// structurally incompatible payload fails.
pub fn decode<Res: DeserializeOwned>(value: serde_json::Value) -> PinterestResult<Res> {
    serde_json::from_value(value)
        .map_err(|e| PinterestError::Response(ResponseError::from(e)))
}

/// Transport request carrying method, URL, query pairs and optional body
#[derive(Debug)]
pub struct TransportRequest<T> {
    /// HTTP method
    pub method: Method,
    /// Absolute URL
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// Query parameters
    pub query: Vec<(String, String)>,
    /// JSON request body
    pub body: Option<T>,
    /// Per-call timeout override
    pub timeout: Option<Duration>,
}

impl<T> TransportRequest<T> {
    /// Create a new GET request
    pub fn get(url: impl Into<String>, headers: HeaderMap) -> Self {
        Self::new(Method::GET, url, headers)
    }

    /// Create a new POST request with a JSON body
    pub fn post(url: impl Into<String>, headers: HeaderMap, body: T) -> Self {
        let mut request = Self::new(Method::POST, url, headers);
        request.body = Some(body);
        request
    }

    /// Create a new PATCH request with a JSON body
    pub fn patch(url: impl Into<String>, headers: HeaderMap, body: T) -> Self {
        let mut request = Self::new(Method::PATCH, url, headers);
        request.body = Some(body);
        request
    }

    /// Create a new DELETE request
    pub fn delete(url: impl Into<String>, headers: HeaderMap) -> Self {
        Self::new(Method::DELETE, url, headers)
    }

    fn new(method: Method, url: impl Into<String>, headers: HeaderMap) -> Self {
        Self {
            method,
            url: url.into(),
            headers,
            query: Vec::new(),
            body: None,
            timeout: None,
        }
    }

    /// Set the query parameters
    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl<T: Serialize> TransportRequest<T> {
    /// Erase the body type, serializing it to a JSON value
    pub fn into_value(self) -> PinterestResult<TransportRequest<serde_json::Value>> {
        let body = match self.body {
            Some(body) => Some(
                serde_json::to_value(body)
                    .map_err(|e| PinterestError::Response(ResponseError::from(e)))?,
            ),
            None => None,
        };
        Ok(TransportRequest {
            method: self.method,
            url: self.url,
            headers: self.headers,
            query: self.query,
            body,
            timeout: self.timeout,
        })
    }
}

/// Form-encoded request
#[derive(Debug)]
pub struct FormRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// Form fields
    pub fields: Vec<(String, String)>,
    /// Per-call timeout override
    pub timeout: Option<Duration>,
}

impl FormRequest {
    /// Create a new form POST request
    pub fn post(url: impl Into<String>, headers: HeaderMap) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            headers,
            fields: Vec::new(),
            timeout: None,
        }
    }

    /// Add a form field
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }
}

/// Default HTTP transport implementation using reqwest.
///
/// Holds the single underlying connection object for the session. Built once
/// from the configuration; timeout, proxy and default headers are applied at
/// construction.
pub struct ReqwestTransport {
    client: Client,
    default_timeout: Duration,
}

impl ReqwestTransport {
    /// Create a new transport from the client configuration
    pub fn new(config: &PinterestConfig) -> PinterestResult<Self> {
        let mut builder = ClientBuilder::new().timeout(config.timeout);

        if let Some(proxy) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|e| PinterestError::Network(NetworkError::Http(e.to_string())))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| PinterestError::Network(NetworkError::Http(e.to_string())))?;

        Ok(Self {
            client,
            default_timeout: config.timeout,
        })
    }

    /// Create a new transport with a pre-built client
    pub fn with_client(client: Client, default_timeout: Duration) -> Self {
        Self {
            client,
            default_timeout,
        }
    }

    async fn dispatch(
        &self,
        request: TransportRequest<serde_json::Value>,
    ) -> PinterestResult<Response> {
        let timeout = request.timeout.unwrap_or(self.default_timeout);

        let mut req_builder = self
            .client
            .request(request.method.clone(), &request.url)
            .headers(request.headers)
            .timeout(timeout);

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.json(body);
        }

        req_builder
            .send()
            .await
            .map_err(|e| PinterestError::Network(NetworkError::from(e)))
    }

    /// Map a non-2xx response to the remote API error carried in its body
    async fn fail(response: Response) -> PinterestError {
        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return PinterestError::Network(NetworkError::from(e)),
        };

        match serde_json::from_str::<ApiError>(&body) {
            Ok(err) => PinterestError::Api(err),
            Err(_) => PinterestError::Response(ResponseError::UnexpectedStatus { status, body }),
        }
    }

    async fn parse_json(response: Response) -> PinterestResult<serde_json::Value> {
        let body = response
            .text()
            .await
            .map_err(|e| PinterestError::Network(NetworkError::from(e)))?;

        debug!(response_body = %body, "Received response");

        serde_json::from_str(&body)
            .map_err(|e| PinterestError::Response(ResponseError::from(e)))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn send_json(
        &self,
        request: TransportRequest<serde_json::Value>,
    ) -> PinterestResult<serde_json::Value> {
        let response = self.dispatch(request).await?;
        if !response.status().is_success() {
            return Err(Self::fail(response).await);
        }
        Self::parse_json(response).await
    }

    #[instrument(skip(self, request), fields(url = %request.url))]
    async fn send_form(&self, request: FormRequest) -> PinterestResult<serde_json::Value> {
        let timeout = request.timeout.unwrap_or(self.default_timeout);

        let response = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers)
            .form(&request.fields)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| PinterestError::Network(NetworkError::from(e)))?;

        if !response.status().is_success() {
            return Err(Self::fail(response).await);
        }
        Self::parse_json(response).await
    }

    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn send_empty(
        &self,
        request: TransportRequest<serde_json::Value>,
    ) -> PinterestResult<()> {
        let response = self.dispatch(request).await?;
        if !response.status().is_success() {
            return Err(Self::fail(response).await);
        }
        Ok(())
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("default_timeout", &self.default_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_request_builder() {
        let request: TransportRequest<serde_json::Value> =
            TransportRequest::get("https://api.pinterest.com/v5/boards", HeaderMap::new())
                .with_query(vec![("page_size".to_string(), "25".to_string())]);

        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url, "https://api.pinterest.com/v5/boards");
        assert!(request.body.is_none());
        assert_eq!(request.query.len(), 1);
    }

    #[test]
    fn test_post_request_carries_body() {
        let request = TransportRequest::post(
            "https://api.pinterest.com/v5/boards",
            HeaderMap::new(),
            json!({"name": "recipes"}),
        );

        assert_eq!(request.method, Method::POST);
        assert_eq!(request.body.unwrap()["name"], "recipes");
    }

    #[test]
    fn test_into_value_serializes_typed_body() {
        #[derive(Serialize)]
        struct Body {
            name: String,
            #[serde(skip_serializing_if = "Option::is_none")]
            privacy: Option<String>,
        }

        let request = TransportRequest::post(
            "https://api.pinterest.com/v5/boards",
            HeaderMap::new(),
            Body {
                name: "recipes".to_string(),
                privacy: None,
            },
        );
        let erased = request.into_value().unwrap();
        let body = erased.body.unwrap();
        assert_eq!(body, json!({"name": "recipes"}));
    }

    #[test]
    fn test_form_request_builder() {
        let request = FormRequest::post("https://api.pinterest.com/v5/oauth/token", HeaderMap::new())
            .field("grant_type", "authorization_code")
            .field("code", "abc");

        assert_eq!(request.fields.len(), 2);
        assert_eq!(
            request.fields[0],
            ("grant_type".to_string(), "authorization_code".to_string())
        );
    }

    #[test]
    fn test_decode_tolerates_unknown_and_absent_keys() {
        #[derive(serde::Deserialize)]
        struct Record {
            id: Option<String>,
            #[serde(default)]
            name: Option<String>,
        }

        let record: Record = decode(json!({"id": "1", "unknown_key": true})).unwrap();
        assert_eq!(record.id.as_deref(), Some("1"));
        assert!(record.name.is_none());
    }
}
