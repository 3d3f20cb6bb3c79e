//! Error types for hierarchy fetching and graph building.
//!
//! Policy: a provider failure (network or unparseable payload) is
//! fatal to the build that issued it — no partial graph is ever
//! returned. Everything below that level (blank names, bogus hours,
//! unknown difficulty tiers) is absorbed at sanitize time and never
//! surfaces as an error.

use thiserror::Error;

/// Failure talking to or decoding the hierarchy provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The HTTP request itself failed (connect, timeout, non-2xx).
    #[error("hierarchy provider request failed: {0}")]
    Request(String),

    /// The provider responded, but the payload was not the JSON shape
    /// we asked for.
    #[error("hierarchy provider returned unparseable payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Failure building a concept graph.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The external hierarchy call failed; the build was aborted with
    /// no partial graph.
    #[error("hierarchy fetch failed")]
    Provider(#[from] ProviderError),

    /// The caller supplied an empty title, so no target node can be
    /// labeled.
    #[error("title must not be empty")]
    EmptyTitle,
}
