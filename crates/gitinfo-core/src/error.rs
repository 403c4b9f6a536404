//! Error types for reference and URL handling.
//!
//! The normalization entry points never return these: they map every failure
//! to an absent or unchanged result. The errors surface only through the
//! lower-level APIs ([`raw_user_info`](crate::sanitize::raw_user_info),
//! `GitRef::from_str`) for callers that want to tell the cases apart.

use thiserror::Error;

/// Errors that can occur while interpreting a git reference.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RefError {
    /// The reference was empty.
    #[error("git reference must not be empty")]
    EmptyReference,
}

/// Errors that can occur while inspecting a URL for credentials.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SanitizeError {
    /// The input is not a URL the parser accepts.
    #[error("malformed url: {0}")]
    Parse(#[from] url::ParseError),

    /// The parser reports user-info that the raw text scan cannot find.
    #[error("user info present but not located in url text")]
    UserInfoNotLocated,
}

/// Convenience type alias for reference operations.
pub type Result<T> = std::result::Result<T, RefError>;

/// Convenience type alias for URL inspection.
pub type SanitizeResult<T> = std::result::Result<T, SanitizeError>;
