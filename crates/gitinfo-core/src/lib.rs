//! Git reference normalization for CI reporting.
//!
//! CI systems hand out git references in several shapes depending on how a
//! job was triggered: `refs/heads/main`, `origin/main`, `/main`, or a bare
//! `main`. Tags arrive through the same channel with a `tags/` segment
//! somewhere in the path. This crate turns those raw strings into the bare
//! branch or tag names a monitoring backend expects, and strips credentials
//! from repository URLs before they are reported.
//!
//! Every function here is pure and allocation-light, so it can be called from
//! any thread without coordination.
//!
//! # Modules
//!
//! - [`error`] — Error types for parsing references and URLs
//! - [`names`] — Branch and tag normalization: [`normalize_branch`], [`normalize_tag`]
//! - [`sanitize`] — Credential scrubbing: [`filter_sensitive_info`]
//! - [`types`] — Typed results: [`GitRef`], [`GitInfo`]

pub mod error;
pub mod names;
pub mod sanitize;
pub mod types;

pub use error::{RefError, Result, SanitizeError, SanitizeResult};
pub use names::{is_tag_reference, normalize_branch, normalize_tag};
pub use sanitize::{filter_sensitive_info, raw_user_info};
pub use types::{GitInfo, GitRef};
