//! Request execution
//!
//! `Transport` is the seam between the gateway and the network. The real
//! implementation is a blocking reqwest client that runs on the gateway's
//! worker thread.

use super::{ApiRequest, ApiResponse, GatewayError, HttpMethod};
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use std::time::Duration;
use url::Url;

/// Executes one request to completion
pub trait Transport: Send + 'static {
    /// # Errors
    /// Returns `GatewayError` for network failures, non-2xx statuses and
    /// undecodable bodies.
    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, GatewayError>;
}

/// JSON over HTTP with reqwest
pub struct HttpTransport {
    client: reqwest::blocking::Client,
    base: String,
}

impl HttpTransport {
    /// Build a transport for the server at `server_url`
    ///
    /// Endpoints are resolved against the URL's origin and path, with any
    /// trailing slash removed, so both `http://host` and
    /// `http://host/wordle/` work.
    ///
    /// # Errors
    /// Returns `GatewayError::InvalidUrl` if `server_url` does not parse.
    pub fn new(server_url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        let base = base_url(server_url)?;
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| GatewayError::Transport {
                path: "client setup",
                source,
            })?;
        Ok(Self { client, base })
    }

    /// Absolute URL of an endpoint
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, GatewayError> {
        let path = request.path();
        let url = self.endpoint(path);

        let builder = match request.method() {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };
        let builder = builder.header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let builder = match request.body() {
            Some(body) => builder.json(&body),
            None => builder,
        };

        let response = builder
            .send()
            .map_err(|source| GatewayError::Transport { path, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status {
                path,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .map_err(|source| GatewayError::Transport { path, source })?;
        request.decode(&body)
    }
}

fn base_url(server_url: &str) -> Result<String, GatewayError> {
    let url = Url::parse(server_url).map_err(|source| GatewayError::InvalidUrl {
        url: server_url.to_string(),
        source,
    })?;
    Ok(format!(
        "{}{}",
        url.origin().ascii_serialization(),
        url.path().trim_end_matches('/')
    ))
}
