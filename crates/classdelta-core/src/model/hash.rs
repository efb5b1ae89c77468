//! Content hashing.
//!
//! Every entity's canonical content string is digested with SHA-256 and
//! hex-encoded. The digest is computed at most once per entity.

use sha2::{Digest, Sha256};
use std::sync::OnceLock;

/// Hex-encoded SHA-256 of a string (64 lowercase characters).
pub fn hash_string(s: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(s.as_bytes());
    hex::encode(hasher.finalize())
}

/// Lazily computed content hash slot.
///
/// Cloning an entity clones the memoized value, which stays valid because
/// entities are immutable once built.
#[derive(Debug, Clone, Default)]
pub(crate) struct HashCell(OnceLock<String>);

impl HashCell {
    pub(crate) fn get_or_compute(&self, content: impl FnOnce() -> String) -> &str {
        self.0.get_or_init(|| hash_string(&content()))
    }
}

/// Entities that have a canonical content string and a content hash.
pub trait Content {
    /// Natural key used for display and name-based fallback matching.
    fn name(&self) -> &str;

    /// Canonical, deterministic serialization of the semantic state.
    fn content(&self) -> String;

    /// SHA-256 of [`Content::content`], memoized.
    fn content_hash(&self) -> &str;
}

/// Render a list of child contents as `[a,b,c]`.
pub(crate) fn content_list<T: Content>(items: &[T]) -> String {
    let parts: Vec<String> = items.iter().map(Content::content).collect();
    format!("[{}]", parts.join(","))
}

/// Sort children by name, breaking ties on content so that members sharing
/// a name (bridge overloads, repeated annotations) order the same way
/// regardless of declaration order.
pub(crate) fn sort_children<T: Content>(items: &mut [T]) {
    items.sort_by_cached_key(|item| (item.name().to_string(), item.content()));
}

/// Render a list of plain strings as `[a,b,c]`.
pub(crate) fn string_list(items: &[String]) -> String {
    format!("[{}]", items.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_string_is_sha256_hex() {
        assert_eq!(
            hash_string(""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(hash_string("C{N=a}").len(), 64);
    }

    #[test]
    fn test_hash_cell_computes_once() {
        let cell = HashCell::default();
        let mut calls = 0;
        let first = cell
            .get_or_compute(|| {
                calls += 1;
                "x".to_string()
            })
            .to_string();
        let second = cell.get_or_compute(|| unreachable!()).to_string();
        assert_eq!(first, second);
        assert_eq!(calls, 1);
    }
}
