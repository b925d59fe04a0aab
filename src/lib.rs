// Public API exports
pub mod summarizer;

// Re-export main types for convenience
pub use summarizer::{
    AgoloClient, AgoloClientBuilder, ApiError, Article, ArticleSummary, HttpRequest,
    HttpResponse, HttpTransport, ReqwestTransport, SummarizeRequest, SummarizeResult,
    SummarizerError, SummaryMetadata, TransportError,
};
