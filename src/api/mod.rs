//! REST API Client
//!
//! Frontend bindings to the questions backend, organized by domain.

mod category;
mod question;
mod tag;

use leptos::prelude::*;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::AppConfig;

pub use question::QuestionQuery;

/// Failure of a backend call
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{method} {url} failed: {source}")]
    Transport {
        method: Method,
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{method} {url} returned HTTP {status}: {body}")]
    Status {
        method: Method,
        url: String,
        status: u16,
        body: String,
    },
    #[error("could not decode response of {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// HTTP status of the failed call, if the backend answered
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Thin JSON client over `reqwest` (the Fetch API on wasm32)
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_string() }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        reqwest::Client::new().request(method, url)
    }

    /// Send a request and return the body of a successful response
    async fn send(&self, method: Method, url: String, request: RequestBuilder) -> Result<String, ApiError> {
        let response = match request.send().await {
            Ok(response) => response,
            Err(source) => return Err(ApiError::Transport { method, url, source }),
        };
        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(source) => return Err(ApiError::Transport { method, url, source }),
        };
        if !status.is_success() {
            return Err(ApiError::Status { method, url, status: status.as_u16(), body });
        }
        Ok(body)
    }

    async fn get_json<T: DeserializeOwned, Q: Serialize + ?Sized>(&self, path: &str, query: &Q) -> Result<T, ApiError> {
        let url = self.url(path);
        let request = self.request(Method::GET, &url).query(query);
        let body = self.send(Method::GET, url.clone(), request).await?;
        decode(&url, &body)
    }

    async fn send_json<B: Serialize + ?Sized>(&self, method: Method, path: &str, body: &B) -> Result<(), ApiError> {
        let url = self.url(path);
        let request = self.request(method.clone(), &url).json(body);
        self.send(method, url, request).await.map(|_| ())
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path);
        let request = self.request(Method::DELETE, &url);
        self.send(Method::DELETE, url, request).await.map(|_| ())
    }
}

fn decode<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|source| ApiError::Decode { url: url.to_string(), source })
}

/// Get an API client for the configured backend
pub fn use_api() -> ApiClient {
    let config = expect_context::<AppConfig>();
    ApiClient::new(config.api_base_url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Paged, Tag};

    #[test]
    fn test_url_joins_without_double_slash() {
        let api = ApiClient::new("http://localhost:3001/");
        assert_eq!(api.url("/questions/4"), "http://localhost:3001/questions/4");
    }

    #[test]
    fn test_decode_error_names_url() {
        let err = decode::<Paged<Tag>>("http://x/tags", "<html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }));
        assert!(err.to_string().contains("http://x/tags"));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_status_error_message() {
        let err = ApiError::Status {
            method: Method::DELETE,
            url: "http://x/categories/3".into(),
            status: 409,
            body: "has children".into(),
        };
        assert_eq!(err.status(), Some(409));
        assert_eq!(err.to_string(), "DELETE http://x/categories/3 returned HTTP 409: has children");
    }
}
