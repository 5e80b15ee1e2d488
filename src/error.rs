//! Store error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the post store
#[derive(Error, Debug)]
pub enum StoreError {
    /// A document failed metadata validation. The load is abandoned as a
    /// whole: a store with one broken entry is never published in part.
    #[error("invalid document {}: {reason}", .path.display())]
    Validation { path: PathBuf, reason: String },

    /// A lookup by slug had no match.
    #[error("no post with slug `{slug}`")]
    NotFound { slug: String },
}

impl StoreError {
    pub fn validation(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Validation {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub fn not_found(slug: impl Into<String>) -> Self {
        Self::NotFound { slug: slug.into() }
    }
}
