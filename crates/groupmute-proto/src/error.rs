//! Error types for identifier parsing.

use thiserror::Error;

/// Errors produced when building identifiers from raw transport strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IdError {
    /// The raw identifier was empty (or had an empty user part).
    #[error("identifier is empty")]
    Empty,

    /// The identifier does not name a group chat.
    #[error("not a group identifier: {0}")]
    NotAGroup(String),
}
