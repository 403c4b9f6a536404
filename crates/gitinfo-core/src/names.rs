//! Branch and tag name normalization.
//!
//! Accepted reference shapes:
//! - `refs/heads/<name>`
//! - `origin/<name>`
//! - `<name>`
//! - any of the above with a single leading `/`
//!
//! A reference is a tag reference when it contains `tags` anywhere. The test
//! is a plain substring match, so `mytagsbranch` routes to the tag path too.
//! Callers rely on this routing, so it must stay unanchored.

use tracing::trace;

/// Remote prefix stripped ahead of [`HEADS_PREFIX`].
const REMOTE_PREFIX: &str = "origin/";

/// Local branch namespace prefix.
const HEADS_PREFIX: &str = "refs/heads/";

/// Marker that routes a reference to the tag path.
const TAG_MARKER: &str = "tags";

/// Segment removed from tag references after prefix stripping.
const TAG_SEGMENT: &str = "tags/";

/// Returns `true` if `reference` should be treated as a tag.
///
/// # Examples
///
/// ```
/// use gitinfo_core::names::is_tag_reference;
///
/// assert!(is_tag_reference("origin/tags/0.1.0"));
/// assert!(is_tag_reference("mytagsbranch"));
/// assert!(!is_tag_reference("refs/heads/main"));
/// ```
pub fn is_tag_reference(reference: &str) -> bool {
    reference.contains(TAG_MARKER)
}

/// Normalize a tag reference to its bare tag name.
///
/// Returns `None` for absent or empty input and for references that are not
/// tag references.
///
/// # Examples
///
/// ```
/// use gitinfo_core::names::normalize_tag;
///
/// assert_eq!(normalize_tag("refs/heads/tags/0.1.0").as_deref(), Some("0.1.0"));
/// assert_eq!(normalize_tag("origin/tags/0.1.0").as_deref(), Some("0.1.0"));
/// assert_eq!(normalize_tag("refs/heads/main"), None);
/// assert_eq!(normalize_tag(None), None);
/// ```
pub fn normalize_tag<'a>(reference: impl Into<Option<&'a str>>) -> Option<String> {
    let reference = reference.into().filter(|r| !r.is_empty())?;
    if !is_tag_reference(reference) {
        trace!(reference, "not a tag reference");
        return None;
    }

    let name = strip_prefixes(reference).replace(TAG_SEGMENT, "");
    trace!(reference, tag = %name, "normalized tag");
    Some(name)
}

/// Normalize a branch reference to its bare branch name.
///
/// Returns `None` for absent or empty input and for tag references. Unlike
/// [`normalize_tag`], the result is a slice of the input.
///
/// # Examples
///
/// ```
/// use gitinfo_core::names::normalize_branch;
///
/// assert_eq!(normalize_branch("refs/heads/master"), Some("master"));
/// assert_eq!(normalize_branch("origin/master"), Some("master"));
/// assert_eq!(normalize_branch("/master"), Some("master"));
/// assert_eq!(normalize_branch("origin/tags/0.1.0"), None);
/// ```
pub fn normalize_branch<'a>(reference: impl Into<Option<&'a str>>) -> Option<&'a str> {
    let reference = reference.into().filter(|r| !r.is_empty())?;
    if is_tag_reference(reference) {
        trace!(reference, "not a branch reference");
        return None;
    }

    let name = strip_prefixes(reference);
    trace!(reference, branch = name, "normalized branch");
    Some(name)
}

/// Drop one leading `/`, then at most one of `origin/` or `refs/heads/`.
fn strip_prefixes(reference: &str) -> &str {
    let reference = reference.strip_prefix('/').unwrap_or(reference);
    reference
        .strip_prefix(REMOTE_PREFIX)
        .or_else(|| reference.strip_prefix(HEADS_PREFIX))
        .unwrap_or(reference)
}
