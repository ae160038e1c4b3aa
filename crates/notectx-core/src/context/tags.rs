//! Tag index scanning
//!
//! Tags come from two places: the `tag`/`tags` frontmatter keys (matched
//! case-insensitively, since hosts treat them as synonyms) and inline `#tag`
//! annotations. Matching is exact; `project` does not match `project/alpha`.

use serde_yaml::{Mapping, Value};

use crate::vault::{FileRef, Vault};

/// Marker that introduces a tag in note text and queries
pub const TAG_MARKER: char = '#';

/// Drop a single leading `#`
pub fn strip_tag_marker(tag: &str) -> &str {
    tag.strip_prefix(TAG_MARKER).unwrap_or(tag)
}

/// Tags declared in frontmatter.
///
/// A string value is split on commas and whitespace; a list contributes
/// each entry. Entries are trimmed and empty entries dropped.
pub fn frontmatter_tags(frontmatter: &Mapping) -> Vec<String> {
    let mut tags = Vec::new();

    for (key, value) in frontmatter.iter() {
        let Some(key) = key.as_str() else {
            continue;
        };
        let key = key.to_lowercase();
        if key != "tags" && key != "tag" {
            continue;
        }

        match value {
            Value::String(s) => tags.extend(
                s.split(|c: char| c == ',' || c.is_whitespace())
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(String::from),
            ),
            Value::Sequence(items) => tags.extend(
                items
                    .iter()
                    .filter_map(scalar_to_string)
                    .map(|t| t.trim().to_string())
                    .filter(|t| !t.is_empty()),
            ),
            _ => {}
        }
    }

    tags
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Every tag on a file: frontmatter tags as written, then inline tags with
/// their marker removed.
pub fn file_tags<V: Vault + ?Sized>(vault: &V, file: &FileRef) -> Vec<String> {
    let Some(meta) = vault.metadata(file) else {
        return Vec::new();
    };

    let mut tags = meta
        .frontmatter
        .as_ref()
        .map(frontmatter_tags)
        .unwrap_or_default();
    tags.extend(meta.tags.iter().map(|t| strip_tag_marker(t).to_string()));
    tags
}

/// All markdown files carrying `tag`, in the host's file listing order.
///
/// A leading `#` on the query is ignored. No match is an empty list, not
/// an error.
#[tracing::instrument(skip(vault))]
pub fn find_by_tag<V: Vault + ?Sized>(vault: &V, tag: &str) -> Vec<FileRef> {
    let target = strip_tag_marker(tag);

    let matches: Vec<FileRef> = vault
        .markdown_files()
        .into_iter()
        .filter(|file| file_tags(vault, file).iter().any(|t| t == target))
        .collect();

    tracing::debug!(tag = target, matches = matches.len(), "tag scan complete");
    matches
}
