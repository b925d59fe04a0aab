use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use url::Url;

use super::error::{ApiError, SummarizerError};
use super::request::SummarizeRequest;
use super::transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
use super::types::SummarizeResult;

pub const DEFAULT_BASE_URL: &str = "https://api.agolo.com";
pub const SUMMARIZE_PATH: &str = "/nlp/v0.2/summarize";
pub const API_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Longest raw error body kept as an `ApiError` message, in bytes
pub const MAX_ERROR_MESSAGE_BYTES: usize = 1024;

/// Client for the Agolo summarization API.
///
/// Holds only the base URL, the subscription key and the transport, so one
/// instance can be shared across threads.
pub struct AgoloClient<T = ReqwestTransport> {
    transport: T,
    base_url: Url,
    token: String,
}

/// Configuration for an [`AgoloClient`] backed by reqwest
pub struct AgoloClientBuilder {
    token: String,
    base_url: String,
    timeout: Option<Duration>,
}

impl AgoloClientBuilder {
    /// Point the client at a different origin (staging, mock server)
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Give up on requests after `timeout`. No timeout by default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<AgoloClient, SummarizerError> {
        let transport =
            ReqwestTransport::with_timeout(self.timeout).map_err(SummarizerError::ClientBuild)?;
        AgoloClient::with_transport(self.token, &self.base_url, transport)
    }
}

impl AgoloClient {
    /// Client bound to the public API origin
    pub fn new(token: impl Into<String>) -> Result<Self, SummarizerError> {
        Self::builder(token).build()
    }

    pub fn builder(token: impl Into<String>) -> AgoloClientBuilder {
        AgoloClientBuilder {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl<T: HttpTransport> AgoloClient<T> {
    pub fn with_transport(
        token: impl Into<String>,
        base_url: &str,
        transport: T,
    ) -> Result<Self, SummarizerError> {
        Ok(Self {
            transport,
            base_url: Url::parse(base_url)?,
            token: token.into(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Summarize the articles in `request`
    pub fn summarize(&self, request: &SummarizeRequest) -> Result<SummarizeResult, SummarizerError> {
        if request.summary_length < 1 {
            warn!(
                summary_length = request.summary_length,
                "Forwarding non-positive summary length"
            );
        }

        let http_request = self.new_request(SUMMARIZE_PATH, request)?;
        self.send(http_request)
    }

    /// Resolve `path` against the base URL and encode `body` as JSON
    pub fn new_request<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<HttpRequest, SummarizerError> {
        let url = self.base_url.join(path)?;
        let body = serde_json::to_vec(body).map_err(SummarizerError::Encode)?;

        Ok(HttpRequest {
            url,
            headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                (API_KEY_HEADER.to_string(), self.token.clone()),
            ],
            body,
        })
    }

    /// Perform the round trip and decode the body by status code
    pub fn send<R>(&self, request: HttpRequest) -> Result<R, SummarizerError>
    where
        R: serde::de::DeserializeOwned,
    {
        dump_request(&request);

        let start = Instant::now();
        let response = self
            .transport
            .post(request)
            .map_err(SummarizerError::RequestFailed)?;

        debug!(
            status = response.status,
            bytes = response.body.len(),
            elapsed = ?start.elapsed(),
            "Summarize response received"
        );

        if response.status != 200 {
            return Err(SummarizerError::Api(decode_api_error(&response)));
        }

        serde_json::from_slice(&response.body).map_err(SummarizerError::Decode)
    }
}

/// Decode an error body. A body that is not the documented shape still
/// yields an error carrying the HTTP status and the start of the raw text.
fn decode_api_error(response: &HttpResponse) -> ApiError {
    match serde_json::from_slice::<ApiError>(&response.body) {
        Ok(mut err) => {
            if err.status_code == 0 {
                err.status_code = i64::from(response.status);
            }
            err
        }
        Err(_) => ApiError {
            status_code: i64::from(response.status),
            message: truncate_message(String::from_utf8_lossy(&response.body).trim()),
        },
    }
}

fn truncate_message(text: &str) -> String {
    if text.len() <= MAX_ERROR_MESSAGE_BYTES {
        return text.to_string();
    }

    let mut end = MAX_ERROR_MESSAGE_BYTES;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

fn dump_request(request: &HttpRequest) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }

    let headers: Vec<String> = request
        .headers
        .iter()
        .map(|(name, value)| {
            if name.eq_ignore_ascii_case(API_KEY_HEADER) {
                format!("{}: <redacted>", name)
            } else {
                format!("{}: {}", name, value)
            }
        })
        .collect();

    // Best effort only
    let body = serde_json::from_slice::<serde_json::Value>(&request.body)
        .and_then(|v| serde_json::to_string_pretty(&v))
        .unwrap_or_else(|_| String::from_utf8_lossy(&request.body).into_owned());

    debug!(
        "POST {}\n{}\n\n{}",
        request.url,
        headers.join("\n"),
        body
    );
}
