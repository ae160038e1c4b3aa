//! Frontmatter and inline tag extraction from raw note text

use std::sync::OnceLock;

use regex::Regex;

static INLINE_TAG: OnceLock<Option<Regex>> = OnceLock::new();

fn inline_tag_regex() -> Option<&'static Regex> {
    INLINE_TAG
        .get_or_init(|| match Regex::new(r"(?:^|\s)#([\p{L}\p{N}_/\-]+)") {
            Ok(re) => Some(re),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to compile inline tag regex");
                None
            }
        })
        .as_ref()
}

/// Split a note into its YAML frontmatter block and body.
///
/// Frontmatter must open on the very first line with `---` and close with a
/// line containing only `---`. Anything else is treated as body text.
pub fn split_frontmatter(content: &str) -> (Option<&str>, &str) {
    let Some(rest) = content.strip_prefix("---") else {
        return (None, content);
    };
    let Some(rest) = rest.strip_prefix("\r\n").or_else(|| rest.strip_prefix('\n')) else {
        return (None, content);
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }

    (None, content)
}

/// Parse a frontmatter block into a YAML mapping.
///
/// Invalid YAML and non-mapping documents yield `None`; the host simply has
/// no frontmatter for such notes.
pub fn parse_frontmatter(yaml: &str) -> Option<serde_yaml::Mapping> {
    match serde_yaml::from_str::<serde_yaml::Value>(yaml) {
        Ok(serde_yaml::Value::Mapping(mapping)) => Some(mapping),
        Ok(_) => None,
        Err(e) => {
            tracing::debug!(error = %e, "ignoring invalid frontmatter");
            None
        }
    }
}

/// Collect inline `#tag` annotations from a note body, in order of
/// appearance. Fenced code blocks are skipped and purely numeric tags are
/// not tags.
pub fn inline_tags(body: &str) -> Vec<String> {
    let Some(re) = inline_tag_regex() else {
        return Vec::new();
    };

    let mut tags = Vec::new();
    let mut in_fence = false;
    for line in body.lines() {
        if line.trim_start().starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        for cap in re.captures_iter(line) {
            let tag = &cap[1];
            if tag.chars().all(|c| c.is_ascii_digit()) {
                continue;
            }
            tags.push(format!("#{tag}"));
        }
    }
    tags
}
