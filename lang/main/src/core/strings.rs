//! String interner backing the vocabulary.
//!
//! Symbols are content-addressed: the id of a string is its FxHash value, so
//! any caller can compute the symbol for a string without holding the store.
//! The store only exists to resolve symbols back to text.

use std::hash::{Hash, Hasher};

use rustc_hash::{FxHashMap, FxHasher};

/// Compute the symbol for a string.
pub fn hash_string(s: &str) -> u64 {
    let mut hasher = FxHasher::default();
    s.hash(&mut hasher);
    hasher.finish()
}

/// Symbol-to-string table.
#[derive(Debug, Clone, Default)]
pub struct StringStore {
    symbols: FxHashMap<u64, String>,
}

impl StringStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a string and return its symbol.
    pub fn intern(&mut self, s: &str) -> u64 {
        let sym = hash_string(s);
        self.symbols
            .entry(sym)
            .or_insert_with(|| s.to_string());
        sym
    }

    /// Resolve a symbol back to its string, if registered.
    pub fn resolve(&self, sym: u64) -> Option<&str> {
        self.symbols.get(&sym).map(String::as_str)
    }

    pub fn contains(&self, s: &str) -> bool {
        self.symbols.contains_key(&hash_string(s))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_is_stable() {
        let mut store = StringStore::new();
        let a = store.intern("hello");
        let b = store.intern("hello");
        assert_eq!(a, b);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn symbol_matches_free_hash() {
        let mut store = StringStore::new();
        let sym = store.intern("world");
        assert_eq!(sym, hash_string("world"));
        assert_eq!(store.resolve(sym), Some("world"));
    }

    #[test]
    fn unknown_symbol_resolves_to_none() {
        let store = StringStore::new();
        assert_eq!(store.resolve(hash_string("missing")), None);
    }
}
