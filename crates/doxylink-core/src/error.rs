//! Error types for indexing and linking

use std::fmt;

use thiserror::Error;

use crate::entity::EntityKind;

/// Errors raised while indexing or linking documents
///
/// Only [`LinkError::IndexUnavailable`] stops a run; every other kind is
/// reported against a single document and the batch carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    #[error("index unavailable: {0}")]
    IndexUnavailable(String),

    #[error("symbol '{name}' registered as {kept}, ignoring later {ignored} registration")]
    AmbiguousSymbol {
        name: String,
        kept: EntityKind,
        ignored: EntityKind,
    },

    #[error("no locator for reference '{0}'")]
    UnresolvableMatch(String),
}

impl LinkError {
    /// Short name of the error kind, as shown in failure reports
    pub fn kind_name(&self) -> &'static str {
        match self {
            LinkError::MalformedDocument(_) => "MalformedDocument",
            LinkError::IndexUnavailable(_) => "IndexUnavailable",
            LinkError::AmbiguousSymbol { .. } => "AmbiguousSymbol",
            LinkError::UnresolvableMatch(_) => "UnresolvableMatch",
        }
    }
}

/// A failure attributed to one document of a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFailure {
    /// Identifier of the failing document (its path in a pipeline run)
    pub document: String,
    /// What went wrong
    pub error: LinkError,
}

impl DocumentFailure {
    pub fn new(document: impl Into<String>, error: LinkError) -> Self {
        Self {
            document: document.into(),
            error,
        }
    }
}

impl fmt::Display for DocumentFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.document, self.error.kind_name(), self.error)
    }
}
