use crate::clients::ApiError;
use crate::config::ClientConfig;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Operations offered by the remote ordering system.
///
/// Bodies come back as raw JSON; turning them into typed values is the job of
/// [`OrderService`](crate::order_service::OrderService).
///
/// # Provided Methods
/// - [`OrderApi::test_connection`] is built on `health_check` and never fails.
#[async_trait]
pub trait OrderApi: Send + Sync {
    /// Send a free-text order message. `POST /api/v1/process`
    async fn process_message(&self, message: &str) -> Result<Value, ApiError>;

    /// Fetch all active orders and the totals. `GET /api/v1/orders`
    async fn get_orders(&self) -> Result<Value, ApiError>;

    /// Cancel one order by id. `DELETE /api/v1/orders/{id}`
    async fn cancel_order(&self, order_id: &str) -> Result<Value, ApiError>;

    /// Liveness probe. `GET /health`
    async fn health_check(&self) -> Result<Value, ApiError>;

    /// `true` when the health check succeeds; every error is swallowed.
    async fn test_connection(&self) -> bool {
        match self.health_check().await {
            Ok(_) => true,
            Err(e) => {
                debug!(error = %e, "Connection test failed");
                false
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct ProcessRequest<'a> {
    message: &'a str,
}

/// [`OrderApi`] over HTTP.
///
/// Every call is bounded by `timeout`. When it elapses the in-flight request future
/// is dropped, which aborts the transport call, and the call fails with
/// [`ApiError::Timeout`]. There are no retries.
#[derive(Clone)]
pub struct HttpApiClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl HttpApiClient {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(30_000);

    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, Self::DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::with_timeout(&config.api_base_url, config.timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `base_url` with `segments` appended. Each segment is percent-encoded, so
    /// an id can never add path levels.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ApiError::Transport(format!("Invalid base URL {}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Transport(format!("Invalid base URL {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint(segments)?;
        Ok(self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, "application/json"))
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Value, ApiError> {
        let exchange = async {
            let response = request.send().await?;
            handle_response(response).await
        };

        match tokio::time::timeout(self.timeout, exchange).await {
            Ok(result) => result,
            Err(_) => {
                warn!(timeout_ms = self.timeout.as_millis() as u64, "Request timed out");
                Err(ApiError::Timeout)
            }
        }
    }
}

#[async_trait]
impl OrderApi for HttpApiClient {
    #[instrument(skip(self))]
    async fn process_message(&self, message: &str) -> Result<Value, ApiError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ApiError::EmptyMessage);
        }
        debug!("Sending request");
        let request = self
            .request(Method::POST, &["api", "v1", "process"])?
            .json(&ProcessRequest { message });
        self.execute(request).await
    }

    #[instrument(skip(self))]
    async fn get_orders(&self) -> Result<Value, ApiError> {
        debug!("Sending request");
        let request = self.request(Method::GET, &["api", "v1", "orders"])?;
        self.execute(request).await
    }

    #[instrument(skip(self))]
    async fn cancel_order(&self, order_id: &str) -> Result<Value, ApiError> {
        debug!("Sending request");
        let request = self.request(Method::DELETE, &["api", "v1", "orders", order_id])?;
        self.execute(request).await
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<Value, ApiError> {
        debug!("Sending request");
        let request = self.request(Method::GET, &["health"])?;
        self.execute(request).await
    }
}

/// Maps a response onto a JSON body or an [`ApiError`].
///
/// Non-2xx statuses take their message from the body's `detail` or `message`
/// string, falling back to `HTTP {status}: {reason}` when the body is missing,
/// unreadable or carries neither.
async fn handle_response(response: Response) -> Result<Value, ApiError> {
    let status = response.status();

    if !status.is_success() {
        let fallback = format!(
            "HTTP {}: {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown Status")
        );
        let message = match response.bytes().await {
            Ok(bytes) => serde_json::from_slice::<Value>(&bytes)
                .ok()
                .and_then(|body| error_detail(&body)),
            Err(e) => {
                debug!(error = %e, "Failed to read error body");
                None
            }
        }
        .unwrap_or(fallback);
        warn!(status = status.as_u16(), %message, "Request failed");
        return Err(ApiError::Http {
            status: status.as_u16(),
            message,
        });
    }

    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|_| ApiError::InvalidResponseFormat)
}

fn error_detail(body: &Value) -> Option<String> {
    ["detail", "message"]
        .iter()
        .filter_map(|key| body.get(*key).and_then(Value::as_str))
        .find(|text| !text.is_empty())
        .map(str::to_string)
}
