//! HTTP implementation of [`EmailApi`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use super::EmailApi;
use crate::config::ClientConfig;
use crate::model::{Email, EmailId, EmailRequest};
use crate::{Error, Result};

/// Client for the mail API rooted at a fixed base endpoint.
#[derive(Debug, Clone)]
pub struct EmailClient {
    http: Client,
    base_url: String,
}

/// Builder for [`EmailClient`].
#[derive(Debug, Clone)]
pub struct EmailClientBuilder {
    base_url: String,
    timeout: Duration,
    http: Option<Client>,
}

impl Default for EmailClientBuilder {
    fn default() -> Self {
        let config = ClientConfig::default();
        let timeout = config.timeout();
        Self {
            base_url: config.base_url,
            timeout,
            http: None,
        }
    }
}

impl EmailClientBuilder {
    /// Sets the base endpoint.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Uses a preconfigured `reqwest` client; the timeout setting is ignored.
    #[must_use]
    pub fn http_client(mut self, http: Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is not an absolute http(s) URL or the
    /// HTTP client cannot be constructed.
    pub fn build(self) -> Result<EmailClient> {
        let parsed = Url::parse(self.base_url.trim())?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "unsupported URL scheme: {}",
                parsed.scheme()
            )));
        }

        let http = match self.http {
            Some(http) => http,
            None => Client::builder().timeout(self.timeout).build()?,
        };

        let base_url = parsed.as_str().trim_end_matches('/').to_string();
        debug!(%base_url, "Mail API client ready");

        Ok(EmailClient { http, base_url })
    }
}

impl EmailClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL is invalid.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Self::builder()
            .base_url(config.base_url.clone())
            .timeout(config.timeout())
            .build()
    }

    /// Starts a builder with default settings.
    #[must_use]
    pub fn builder() -> EmailClientBuilder {
        EmailClientBuilder::default()
    }

    /// The normalised base endpoint (no trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&EmailRequest>,
    ) -> Result<Response> {
        let url = self.endpoint(path);
        debug!(%method, %url, "Sending request");

        let mut request = self.http.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .inspect_err(|e| warn!(%method, %url, "Request failed: {}", e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(%method, %url, %status, "Request rejected");
        Err(Error::Status { status, body })
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&EmailRequest>,
    ) -> Result<T> {
        let response = self.execute(method, path, body).await?;
        response.json().await.map_err(Into::into)
    }
}

/// Maps a 404 on a single-email path to `NotFound`.
fn not_found_as(id: EmailId, error: Error) -> Error {
    match error {
        Error::Status { status, .. } if status == StatusCode::NOT_FOUND => Error::NotFound(id),
        other => other,
    }
}

#[async_trait]
impl EmailApi for EmailClient {
    async fn send(&self, request: &EmailRequest) -> Result<Email> {
        self.fetch(Method::POST, "/send", Some(request)).await
    }

    async fn save_as_draft(&self, request: &EmailRequest) -> Result<Email> {
        self.fetch(Method::POST, "/draft", Some(request)).await
    }

    async fn list_all(&self) -> Result<Vec<Email>> {
        self.fetch(Method::GET, "", None).await
    }

    async fn list_sent(&self) -> Result<Vec<Email>> {
        self.fetch(Method::GET, "/sent", None).await
    }

    async fn list_received(&self) -> Result<Vec<Email>> {
        self.fetch(Method::GET, "/received", None).await
    }

    async fn list_drafts(&self) -> Result<Vec<Email>> {
        self.fetch(Method::GET, "/drafts", None).await
    }

    async fn get_by_id(&self, id: EmailId) -> Result<Email> {
        self.fetch(Method::GET, &format!("/{id}"), None)
            .await
            .map_err(|e| not_found_as(id, e))
    }

    async fn delete(&self, id: EmailId) -> Result<()> {
        self.execute(Method::DELETE, &format!("/{id}"), None)
            .await
            .map(drop)
            .map_err(|e| not_found_as(id, e))
    }
}
