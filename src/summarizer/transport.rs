use reqwest::blocking::Client;
use std::time::Duration;

/// Error produced by an [`HttpTransport`], handed back to callers untouched
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A fully resolved outgoing POST
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub url: url::Url,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// The one HTTP operation the client needs. Implement this to swap the
/// network stack, e.g. for tests.
pub trait HttpTransport: Send + Sync {
    fn post(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Blocking reqwest transport.
///
/// Built without compression support so no `Accept-Encoding` header goes out
/// and bodies arrive as plain bytes.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    pub fn with_timeout(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .no_gzip()
            .no_brotli()
            .no_deflate()
            .timeout(timeout)
            .build()?;

        Ok(Self { http })
    }

    /// Wrap a preconfigured client (proxies, extra headers, TLS roots)
    pub fn from_client(http: Client) -> Self {
        Self { http }
    }
}

impl HttpTransport for ReqwestTransport {
    fn post(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.http.post(request.url).body(request.body);
        for (name, value) in request.headers {
            builder = builder.header(name, value);
        }

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.bytes()?.to_vec();

        Ok(HttpResponse { status, body })
    }
}
