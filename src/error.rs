use thiserror::Error;

/// Token issuance failed: bad credentials, a portal outage, or an upstream
/// response without a `token` field. Not retried by this crate; the caller
/// may retry the whole aggregation later.
#[derive(Debug, Clone, Error)]
#[error("authentication failed: {message}")]
pub struct AuthenticationError {
    pub message: String,
}

impl AuthenticationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failure modes of the aggregation and listing entry points.
///
/// Upstream errors inside a related-data branch never surface here; they
/// degrade that one section to empty. This enum covers only call-fatal
/// outcomes.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The requested id matches no main-layer record.
    #[error("record not found")]
    NotFound,
    #[error(transparent)]
    Authentication(#[from] AuthenticationError),
    /// The upstream service reported an error on a stage that cannot degrade
    /// (the main fetch, or the listing's full layer fetch).
    #[error("upstream service error: {0}")]
    Upstream(String),
}
