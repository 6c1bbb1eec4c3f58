//! HTTP Adapter
//!
//! Thin wrapper around `reqwest` owning the single mutable credential
//! slot. Once a credential is installed, every request issued through
//! the adapter carries `Authorization: Bearer <credential>` without
//! per-call opt-in. Only the session store writes to the slot.

use std::sync::RwLock;

use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

/// HTTP adapter error
#[derive(Debug, Error)]
pub enum HttpError {
    /// Transport-level failure (DNS, connect, TLS, interrupted body)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("backend returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// Client for the backend REST API with a single credential slot
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    credential: RwLock<Option<String>>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            credential: RwLock::new(None),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Install or remove the bearer credential attached to every
    /// outgoing request.
    pub fn set_credential(&self, credential: Option<String>) {
        *self
            .credential
            .write()
            .expect("credential slot lock poisoned") = credential;
    }

    /// Currently installed credential, if any.
    pub fn credential(&self) -> Option<String> {
        self.credential
            .read()
            .expect("credential slot lock poisoned")
            .clone()
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, HttpError> {
        let request = self.authorized(self.http.get(self.url(path)));
        let response = request.send().await?;
        Self::decode(response).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        let request = self.authorized(self.http.post(self.url(path)).json(body));
        let response = request.send().await?;
        Self::decode(response).await
    }

    /// POST where the response body is not consumed.
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<(), HttpError> {
        let request = self.authorized(self.http.post(self.url(path)).json(body));
        let response = request.send().await?;
        Self::check(response).await?;
        Ok(())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self
            .credential
            .read()
            .expect("credential slot lock poisoned")
            .as_deref()
        {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, HttpError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), "Backend returned non-success status");
        Err(HttpError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, HttpError> {
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/api/v1/auth/me"), "http://localhost:8000/api/v1/auth/me");
    }

    #[test]
    fn test_credential_slot() {
        let client = ApiClient::new("http://localhost:8000");
        assert_eq!(client.credential(), None);

        client.set_credential(Some("abc123".to_string()));
        assert_eq!(client.credential(), Some("abc123".to_string()));

        client.set_credential(None);
        assert_eq!(client.credential(), None);
    }

    #[test]
    fn test_status_error_display() {
        let err = HttpError::Status {
            status: 401,
            body: "Invalid credentials".to_string(),
        };
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("Invalid credentials"));
    }
}
