use thiserror::Error;

use greenline_core::DomainError;

/// Errors raised while accepting catalog data at the API boundary.
///
/// Grouping, ranking and field derivation never fail; only parsing and
/// configuration validation do.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed {what} payload: {source}")]
    Payload {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl CatalogError {
    pub(crate) fn payload(what: &'static str, source: serde_json::Error) -> Self {
        Self::Payload { what, source }
    }
}
