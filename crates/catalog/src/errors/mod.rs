//! Error types and failure classification for the catalog crate.
//!
//! This module provides:
//! - [`CatalogError`]: The main error enum for all catalog operations
//! - [`FailureScope`]: Classification for how a failure should surface

mod scope;

pub use scope::FailureScope;

use thiserror::Error;

/// Errors that can occur during catalog operations.
///
/// Each variant is classified into a [`FailureScope`] via the
/// [`failure_scope`](Self::failure_scope) method, which records the default
/// user-facing surface for the error.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The backing store has no resource at the requested id or URL.
    #[error("Resource not found: {url}")]
    NotFound {
        /// The URL that returned nothing
        url: String,
    },

    /// Network failure or non-success HTTP status.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream returned a status the client treats as failed.
    /// Kept separate from `Transport` so tests can construct it without a
    /// live `reqwest::Error`.
    #[error("Upstream returned HTTP {status} for {url}")]
    UpstreamStatus {
        /// HTTP status code
        status: u16,
        /// The requested URL
        url: String,
    },

    /// The body was not parseable as the expected JSON shape.
    #[error("Invalid response: {message}")]
    InvalidResponse {
        /// Description of the parse or shape failure
        message: String,
    },

    /// A locally rejected page number (zero, or beyond the known range).
    /// The pagination UI clamps before requesting, so reaching upstream
    /// with an out-of-range page is a caller bug.
    #[error("Invalid page number: {page}")]
    InvalidPage {
        /// The rejected page number
        page: u64,
    },

    /// A category string outside the closed six-category set.
    #[error("Unknown category: {name}")]
    UnknownCategory {
        /// The unrecognized category name
        name: String,
    },
}

impl CatalogError {
    /// Returns the failure classification for this error.
    ///
    /// - [`FailureScope::PageLevel`]: surface as a page error with a manual
    ///   retry affordance
    /// - [`FailureScope::Degrade`]: log, omit the affected piece, keep the
    ///   rest of the page
    ///
    /// Relation resolution and per-category search always degrade regardless
    /// of the underlying kind; this classification is the default for callers
    /// with no more specific policy.
    pub fn failure_scope(&self) -> FailureScope {
        match self {
            Self::NotFound { .. } | Self::InvalidResponse { .. } => FailureScope::Degrade,

            Self::Transport(_)
            | Self::UpstreamStatus { .. }
            | Self::InvalidPage { .. }
            | Self::UnknownCategory { .. } => FailureScope::PageLevel,
        }
    }

    /// The human-readable message shown alongside the retry affordance.
    pub fn user_message(&self) -> String {
        match self {
            Self::NotFound { .. } => "Nothing lives at that address.".to_string(),
            Self::Transport(_) | Self::UpstreamStatus { .. } => {
                "Failed to fetch data. Please try again.".to_string()
            }
            Self::InvalidResponse { .. } => {
                "The catalog returned something unreadable. Please try again.".to_string()
            }
            Self::InvalidPage { page } => format!("Page {} does not exist.", page),
            Self::UnknownCategory { name } => format!("\"{}\" is not a known category.", name),
        }
    }
}
