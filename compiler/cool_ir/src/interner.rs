//! Sharded string interner for identifiers, string constants, and
//! diagnostic messages.
//!
//! Provides O(1) interning and lookup with thread-safe concurrent access
//! via per-shard locking, so several lexers can share one interner.

use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::Name;

/// Per-shard storage for interned strings.
struct InternShard {
    /// Map from string content to local index.
    map: FxHashMap<&'static str, u32>,
    /// Storage for string contents.
    strings: Vec<&'static str>,
}

impl InternShard {
    fn new() -> Self {
        Self {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        }
    }
}

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// Shard exceeded capacity.
    ShardOverflow { shard_idx: usize, count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::ShardOverflow { shard_idx, count } => write!(
                f,
                "interner shard {} exceeded capacity: {} strings, max is {}",
                shard_idx,
                count,
                Name::MAX_LOCAL
            ),
        }
    }
}

impl std::error::Error for InternError {}

/// Sharded string interner.
///
/// Interned strings live for the lifetime of the process (they are leaked
/// into `'static` storage), which makes `Name` a plain `Copy` handle with
/// no lifetime attached.
///
/// # Thread Safety
/// Uses an `RwLock` per shard for concurrent read/write access.
pub struct StringInterner {
    shards: [RwLock<InternShard>; Name::NUM_SHARDS],
    /// Total count of interned strings across all shards (O(1) `len()`).
    total_count: AtomicUsize,
}

impl StringInterner {
    /// Create a new interner with the empty string and all Cool keywords
    /// pre-interned.
    pub fn new() -> Self {
        let shards = std::array::from_fn(|_| RwLock::new(InternShard::new()));
        let interner = Self {
            shards,
            total_count: AtomicUsize::new(0),
        };
        // The empty string must land at Name::EMPTY: it hashes to shard 0
        // and is the first insertion there.
        let empty = interner.intern("");
        debug_assert!(empty == Name::EMPTY);
        interner.pre_intern_common();
        interner
    }

    /// Compute the shard for a string based on its first bytes.
    #[inline]
    fn shard_for(s: &str) -> usize {
        let mut hash = 0u32;
        for byte in s.bytes().take(8) {
            hash = hash.wrapping_mul(31).wrapping_add(u32::from(byte));
        }
        (hash as usize) % Name::NUM_SHARDS
    }

    /// Try to intern a string, returning its `Name` or an error on overflow.
    #[inline]
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        let shard_idx = Self::shard_for(s);
        let shard = &self.shards[shard_idx];

        // Fast path: already interned.
        {
            let guard = shard.read();
            if let Some(&local) = guard.map.get(s) {
                return Ok(Name::new(shard_idx as u32, local));
            }
        }

        let mut guard = shard.write();

        // Double-check after acquiring the write lock.
        if let Some(&local) = guard.map.get(s) {
            return Ok(Name::new(shard_idx as u32, local));
        }

        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        Self::insert(&mut guard, shard_idx, leaked).inspect(|_| {
            self.total_count.fetch_add(1, Ordering::Relaxed);
        })
    }

    /// Intern a string, returning its `Name`.
    ///
    /// # Panics
    /// Panics if a shard exceeds capacity. Use [`try_intern`](Self::try_intern)
    /// for fallible interning.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Try to intern an owned `String`, avoiding the extra allocation that
    /// `try_intern(&s)` would perform when the string is new.
    pub fn try_intern_owned(&self, s: String) -> Result<Name, InternError> {
        let shard_idx = Self::shard_for(&s);
        let shard = &self.shards[shard_idx];

        {
            let guard = shard.read();
            if let Some(&local) = guard.map.get(s.as_str()) {
                return Ok(Name::new(shard_idx as u32, local));
            }
        }

        let mut guard = shard.write();

        if let Some(&local) = guard.map.get(s.as_str()) {
            return Ok(Name::new(shard_idx as u32, local));
        }

        let leaked: &'static str = Box::leak(s.into_boxed_str());
        Self::insert(&mut guard, shard_idx, leaked).inspect(|_| {
            self.total_count.fetch_add(1, Ordering::Relaxed);
        })
    }

    /// Intern an owned `String`.
    ///
    /// # Panics
    /// Panics if a shard exceeds capacity.
    pub fn intern_owned(&self, s: String) -> Name {
        self.try_intern_owned(s).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Insert a leaked string into a locked shard.
    fn insert(
        shard: &mut InternShard,
        shard_idx: usize,
        leaked: &'static str,
    ) -> Result<Name, InternError> {
        let count = shard.strings.len();
        let local = u32::try_from(count)
            .ok()
            .filter(|&l| l <= Name::MAX_LOCAL)
            .ok_or(InternError::ShardOverflow { shard_idx, count })?;
        shard.strings.push(leaked);
        shard.map.insert(leaked, local);
        Ok(Name::new(shard_idx as u32, local))
    }

    /// Look up the string for a `Name`.
    pub fn lookup(&self, name: Name) -> &str {
        let guard = self.shards[name.shard()].read();
        guard.strings[name.local()]
    }

    /// Look up the string for a `Name`, returning a `'static` reference.
    ///
    /// Safe because interned strings are leaked and never deallocated.
    pub fn lookup_static(&self, name: Name) -> &'static str {
        let guard = self.shards[name.shard()].read();
        guard.strings[name.local()]
    }

    /// Number of distinct strings interned so far.
    pub fn len(&self) -> usize {
        self.total_count.load(Ordering::Relaxed)
    }

    /// Returns `true` if nothing has been interned (never the case after
    /// construction, which pre-interns keywords).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pre-intern the Cool keywords and the identifiers every program
    /// touches, so the lexer's hot path hits the read-only fast path.
    fn pre_intern_common(&self) {
        const COMMON: &[&str] = &[
            // Reserved keywords
            "class", "else", "fi", "if", "in", "inherits", "let", "loop", "pool", "then", "while",
            "case", "esac", "new", "of", "not", "isvoid",
            // Boolean literals
            "true", "false",
            // Basic classes and well-known identifiers
            "Object", "IO", "Int", "String", "Bool", "Main", "SELF_TYPE", "self", "main",
        ];
        for s in COMMON {
            self.intern(s);
        }
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn intern_then_lookup_roundtrips() {
        let interner = StringInterner::new();
        let name = interner.intern("fibonacci");
        assert_eq!(interner.lookup(name), "fibonacci");
    }

    #[test]
    fn intern_is_idempotent() {
        let interner = StringInterner::new();
        let a = interner.intern("x");
        let b = interner.intern("x");
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_strings_get_distinct_names() {
        let interner = StringInterner::new();
        let a = interner.intern("alpha");
        let b = interner.intern("beta");
        assert_ne!(a, b);
    }

    #[test]
    fn empty_string_is_name_empty() {
        let interner = StringInterner::new();
        assert_eq!(interner.intern(""), Name::EMPTY);
        assert_eq!(interner.lookup(Name::EMPTY), "");
    }

    #[test]
    fn intern_owned_matches_intern() {
        let interner = StringInterner::new();
        let a = interner.intern("hello world");
        let b = interner.intern_owned(String::from("hello world"));
        assert_eq!(a, b);
    }

    #[test]
    fn keywords_are_pre_interned() {
        let interner = StringInterner::new();
        let before = interner.len();
        interner.intern("class");
        interner.intern("inherits");
        interner.intern("SELF_TYPE");
        // No new entries: all were already present.
        assert_eq!(interner.len(), before);
    }

    #[test]
    fn lookup_static_outlives_guard() {
        let interner = StringInterner::new();
        let name = interner.intern("persistent");
        let s: &'static str = interner.lookup_static(name);
        assert_eq!(s, "persistent");
    }

    #[test]
    fn len_counts_distinct_strings() {
        let interner = StringInterner::new();
        let before = interner.len();
        interner.intern("one-off");
        interner.intern("one-off");
        assert_eq!(interner.len(), before + 1);
    }
}
