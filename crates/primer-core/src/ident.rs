//! Key derivation for node dedup and id minting.
//!
//! Two distinct keys exist on purpose:
//!
//! - the **lookup key** (lowercased trimmed name) decides whether a
//!   concept already exists anywhere in the graph, regardless of depth;
//! - the **node id** (slug + depth) is what the rest of the system
//!   references, unique across depths for distinct names.
//!
//! Name-based dedup takes priority: a name first seen at depth *d* and
//! referenced again at another depth resolves to the original node.

/// Lookup key for name-based dedup: lowercased, trimmed.
#[must_use]
pub fn lookup_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Mint a node id from a concept name and the depth at which it was
/// first introduced: lowercase slug with non-alphanumeric runs
/// collapsed to a single `-`, then `-{depth}`.
#[must_use]
pub fn concept_id(name: &str, depth: u32) -> String {
    format!("{}-{depth}", slugify(name))
}

/// Lowercase `name` and collapse every run of non-alphanumeric
/// characters into a single `-`.
fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for ch in name.trim().to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else {
            pending_separator = true;
        }
    }

    slug
}
