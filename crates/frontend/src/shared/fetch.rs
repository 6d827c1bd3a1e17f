use async_trait::async_trait;
use gloo_net::http::Request;
use serde_json::Value;

use super::http::{ApiRequest, HttpClient, Method, TransportError};

/// `HttpClient` over the browser fetch API, with the console's bearer token
/// attached when present.
#[derive(Debug, Clone, Default)]
pub struct FetchClient {
    base: String,
    bearer_token: Option<String>,
}

impl FetchClient {
    /// `base` is prepended to every request path; pass an empty string to
    /// stay same-origin.
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            bearer_token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }
}

#[async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError> {
        let url = format!("{}{}", self.base, request.url());

        let mut builder = match request.method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        }
        .header("Accept", "application/json");

        if let Some(token) = &self.bearer_token {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }

        let response = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| TransportError::Network(e.to_string()))?
                .send()
                .await,
            None => builder.send().await,
        }
        .map_err(|e| TransportError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(TransportError::Status(response.status()));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}
