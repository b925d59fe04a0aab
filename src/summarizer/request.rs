use serde::Serialize;
use std::collections::BTreeMap;

/// One unit of input submitted for summarization.
///
/// The vendor accepts free-form string keys per article; `title`, `text` and
/// `url` are the documented ones. Setting the same key twice keeps the last
/// value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Article {
    fields: BTreeMap<String, String>,
}

impl Article {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the article title
    pub fn title(self, title: impl Into<String>) -> Self {
        self.field("title", title)
    }

    /// Set the article body text
    pub fn text(self, text: impl Into<String>) -> Self {
        self.field("text", text)
    }

    /// Set the source URL the service should fetch the article from
    pub fn url(self, url: impl Into<String>) -> Self {
        self.field("url", url)
    }

    /// Set an arbitrary article key
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Outbound payload for `POST /nlp/v0.2/summarize`.
///
/// Field order matches the wire format. Defaults mirror the vendor's own
/// defaults so an untouched request behaves like an omitted option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummarizeRequest {
    pub articles: Vec<Article>,
    pub coref: bool,
    pub include_all_sentences: bool,
    pub sort_by_salience: bool,
    pub summary_length: i64,
}

impl Default for SummarizeRequest {
    fn default() -> Self {
        Self {
            articles: Vec::new(),
            coref: false,
            include_all_sentences: false,
            sort_by_salience: false,
            summary_length: 1,
        }
    }
}

impl SummarizeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an article to the request
    pub fn article(mut self, article: Article) -> Self {
        self.articles.push(article);
        self
    }

    /// Ask the service to resolve coreference chains
    pub fn coref(mut self) -> Self {
        self.coref = true;
        self
    }

    /// Order summary sentences by salience instead of document order
    pub fn sort_by_salience(mut self) -> Self {
        self.sort_by_salience = true;
        self
    }

    /// Return every sentence rather than a trimmed subset
    pub fn include_all_sentences(mut self) -> Self {
        self.include_all_sentences = true;
        self
    }

    /// Number of sentences per summary. Not validated here.
    pub fn summary_length(mut self, length: i64) -> Self {
        self.summary_length = length;
        self
    }
}
