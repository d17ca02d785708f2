use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    /// Network-level failure (connection reset, timeout). Transient: the
    /// affected page is logged and skipped, the run continues.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status from a URL. Fatal for that URL.
    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The page shape violated an assumption the extractor relies on.
    /// Treated as a program defect: aborts the whole run with full context.
    #[error("structural page error at {url}: {reason}")]
    Structural { url: String, reason: String },
}
