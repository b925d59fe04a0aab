pub mod client;
pub mod error;
pub mod request;
pub mod transport;
pub mod types;


pub use client::{
    AgoloClient, AgoloClientBuilder, DEFAULT_BASE_URL, MAX_ERROR_MESSAGE_BYTES, SUMMARIZE_PATH,
};
pub use error::{ApiError, SummarizerError};
pub use request::{Article, SummarizeRequest};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport, TransportError};
pub use types::{ArticleSummary, SummarizeResult, SummaryMetadata};
