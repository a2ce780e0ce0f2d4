//! HTTP client for remote task API requests.
//!
//! This module provides a low-level HTTP client wrapper for making requests
//! to the dashboard's REST API, handling authentication and response
//! checking.

use super::error::ApiError;
use log::error;
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;

/// Makes requests to the remote task API and checks responses.
///
pub(crate) struct Client {
    access_token: Option<String>,
    base_url: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL and optional bearer
    /// token.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created. This should never happen
    /// in practice as reqwest::Client::builder().build() only fails on
    /// invalid configuration, which we don't use.
    pub(crate) fn new(base_url: &str, access_token: Option<&str>) -> Self {
        Client {
            access_token: access_token.map(str::to_owned),
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::builder()
                .build()
                .expect("Failed to create HTTP client - this should never happen"),
        }
    }

    /// Make a request and return the checked response, or an error for a
    /// non-success status.
    ///
    pub(crate) async fn call(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<serde_json::Value>,
    ) -> Result<Response, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http_client.request(method, &url);

        if let Some(token) = &self.access_token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Unable to read response"));
            error!("Request to {} failed with status {}: {}", url, status, message);
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }

    /// Make a request and deserialize the JSON response body.
    ///
    pub(crate) async fn call_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        let response = self.call(method, path, query, body).await?;
        let bytes = response.bytes().await?;
        match serde_json::from_slice(&bytes) {
            Ok(data) => Ok(data),
            Err(e) => {
                error!(
                    "Failed to deserialize API response: {}. Response body: {}",
                    e,
                    String::from_utf8_lossy(&bytes)
                );
                Err(ApiError::Deserialization(e))
            }
        }
    }
}
