use std::time::Duration;

use log::{debug, info, warn};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use storefront_model::{ApiEnvelope, ErrorBody};
use url::Url;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failures talking to the storefront backend.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid base URL '{0}'")]
    InvalidUrl(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request failed with status {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("Empty response from server")]
    EmptyPayload,

    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Message fit for showing to a shopper, when the server supplied one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } if !message.is_empty() => {
                Some(message)
            }
            _ => None,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(err) => err.status(),
            _ => None,
        }
    }
}

/// Thin JSON client for the storefront backend
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

/// Add `http://` when the scheme is missing and drop trailing slashes.
/// Many configs carry "localhost:3000", which reqwest rejects.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    let with_scheme =
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            trimmed.to_string()
        } else {
            format!("http://{}", trimmed)
        };
    if with_scheme != raw {
        debug!(
            "[ApiClient] Normalized base URL from '{}' to '{}'",
            raw, with_scheme
        );
    }
    with_scheme
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let normalized = normalize_base_url(base_url);
        let base_url = Url::parse(&normalized)
            .map_err(|_| ApiError::InvalidUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(base_url.to_string()));
        }

        let client = Client::builder().timeout(timeout).build()?;

        info!(
            "[ApiClient] Creating new API client with base URL: {}",
            base_url
        );

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    /// Join an absolute route such as `/api/v1/subscribe` onto the base URL,
    /// keeping any path prefix the base carries.
    pub fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url(), path.trim_start_matches('/'))
    }

    /// Build a URL from raw path segments; each segment is percent-encoded.
    pub fn build_url_from_segments<'a>(
        &self,
        segments: impl IntoIterator<Item = &'a str>,
    ) -> ApiResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.build_url(path);
        self.get_url(&url).await
    }

    /// GET an already-built URL
    pub async fn get_url<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        debug!("[ApiClient] GET request to: {}", url);
        self.execute_request(self.client.get(url)).await
    }

    /// POST request with a JSON body
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let url = self.build_url(path);
        debug!("[ApiClient] POST request to: {}", url);
        self.execute_request(self.client.post(&url).json(body)).await
    }

    /// Execute a request and decode either a bare or `{data}`-wrapped body
    async fn execute_request<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> ApiResult<T> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(ErrorBody::into_message)
                .unwrap_or_else(|| {
                    String::from_utf8_lossy(&body).trim().to_string()
                });
            warn!(
                "[ApiClient] Request failed with status {}: {}",
                status, message
            );
            return Err(ApiError::Status { status, message });
        }

        let body = response.bytes().await?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(ApiError::EmptyPayload);
        }

        let envelope: ApiEnvelope<T> = serde_json::from_slice(&body)?;
        envelope.into_inner().ok_or(ApiError::EmptyPayload)
    }
}
