//! Header grammar for conditional requests.

use crate::core::error::{Result, RevalidError};

/// Parse an `If-None-Match` value into its entity-tag list.
///
/// Accepts quoted tags (`"777"`), bare tokens (`777`), and weak tags
/// (`W/"777"`), comma-separated. Empty list members are skipped.
///
/// # Errors
///
/// Returns `HeaderParse` when a tag opens a quote without closing it.
pub fn parse_entity_tags(value: &str) -> Result<Vec<String>> {
    let mut tags = Vec::new();
    for raw in value.split(',') {
        let tag = raw.trim();
        if tag.is_empty() {
            continue;
        }
        let opaque = tag.strip_prefix("W/").unwrap_or(tag);
        let quoted_open = opaque.starts_with('"');
        let quoted_close = opaque.len() >= 2 && opaque.ends_with('"');
        if quoted_open != quoted_close {
            return Err(RevalidError::HeaderParse(format!(
                "Unbalanced quote in entity-tag: {}",
                tag
            )));
        }
        tags.push(tag.to_string());
    }
    Ok(tags)
}

/// Strip the weak prefix and surrounding quotes from an entity-tag.
///
/// `777`, `"777"`, and `W/"777"` all normalize to `777`, so a client
/// cache revalidates no matter which spelling it echoes back.
#[must_use]
pub fn normalize_entity_tag(tag: &str) -> &str {
    let opaque = tag.strip_prefix("W/").unwrap_or(tag);
    if opaque.len() >= 2 && opaque.starts_with('"') && opaque.ends_with('"') {
        &opaque[1..opaque.len() - 1]
    } else {
        opaque
    }
}

/// Compare two entity-tags, ignoring quoting and the weak prefix.
#[inline]
#[must_use]
pub fn tags_match(a: &str, b: &str) -> bool {
    normalize_entity_tag(a) == normalize_entity_tag(b)
}

/// Format the `Cache-Control` value: a max-age hint combined with the
/// mandatory-revalidation flag.
#[inline]
#[must_use]
pub fn format_cache_control(max_age: u64) -> String {
    format!("max-age={},no-cache", max_age)
}
