//! Subject-tag parsing and merging
//!
//! The subjects field is a comma-delimited free-text list carried over
//! from the original dataset. The parsing rules (comma split, trim,
//! period strip) are preserved for compatibility with legacy rows.
//! Normalization is a view for comparison and graph-building; it never
//! rewrites the stored raw string.

use std::collections::BTreeSet;
use thiserror::Error;

/// Errors from tag-merge validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TagError {
    #[error("subject '{0}' is already present")]
    AlreadyExists(String),

    #[error("subject tag is empty")]
    Empty,
}

/// Normalize one raw segment: trim, strip periods, trim again.
///
/// Legacy rows contain segments like `"Ekonomi., "`; both the stray
/// whitespace and the periods disappear in the normalized view.
pub fn normalize(raw: &str) -> String {
    raw.trim().replace('.', "").trim().to_string()
}

/// Parse the delimited subjects field into the set of normalized tags.
///
/// Empty segments are discarded; duplicates after normalization collapse.
/// Order is not significant; the set iterates in lexicographic order.
pub fn parse_tags(subjects: &str) -> BTreeSet<String> {
    subjects
        .split(',')
        .map(normalize)
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Merge a new tag into the subjects field without duplication.
///
/// The existing string is preserved verbatim; on success the trimmed tag
/// is appended trailing (`", " + tag`). Duplicate detection compares
/// normalized forms case-insensitively, tolerating case differences and
/// stray whitespace or periods in legacy segments. An empty subjects
/// field merges to just the new tag, with no leading delimiter.
pub fn merge_tag(subjects: &str, new_tag: &str) -> Result<String, TagError> {
    let trimmed = new_tag.trim();
    if trimmed.is_empty() {
        return Err(TagError::Empty);
    }

    let candidate = normalize(trimmed).to_lowercase();
    if parse_tags(subjects)
        .iter()
        .any(|tag| tag.to_lowercase() == candidate)
    {
        return Err(TagError::AlreadyExists(trimmed.to_string()));
    }

    if subjects.trim().is_empty() {
        Ok(trimmed.to_string())
    } else {
        Ok(format!("{subjects}, {trimmed}"))
    }
}
