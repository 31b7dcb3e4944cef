//! Stable identifiers for menu nodes.
//!
//! Every section and item in a [`MenuTree`](crate::tree::MenuTree) carries a
//! [`MenuId`]. Selection, traversal, and "named shortcut" lookups (e.g. the
//! color swatch item) address nodes by id, so no part of the system ever
//! holds a second owned copy of a node.
//!
//! Ids are 64-bit FNV-1a hashes computed from string keys. Static menu
//! entries hash a fixed key (`MenuId::from_str("app.trash")`); dynamic
//! entries (tags, open files) derive children ids from their section id:
//!
//! ```
//! use sidebar_core::id::MenuId;
//!
//! let tags = MenuId::from_str("app.tags");
//! let work = tags.child_str("work");
//! let home = tags.child_str("home");
//! assert_ne!(work, home);
//! ```

/// Stable identifier for a menu section or item.
///
/// This is a 64-bit hash computed from a string key. Hosts are responsible
/// for keeping keys stable across updates so selection state survives menu
/// rebuilds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MenuId(pub u64);

impl MenuId {
    /// Creates a new [`MenuId`] from a raw u64 value.
    #[must_use]
    pub const fn from_u64(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw u64 value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Creates a [`MenuId`] by hashing a string key.
    #[must_use]
    pub const fn from_str(key: &str) -> Self {
        Self(fnv1a_hash_str(key))
    }

    /// Derives a deterministic child [`MenuId`] from this id and a numeric
    /// value.
    ///
    /// Useful for dynamic sections (e.g. open file lists) where stable ids
    /// are wanted without a string key per entry.
    #[must_use]
    pub const fn child(self, value: u64) -> Self {
        Self(fnv1a_hash_u64_pair(self.0, value))
    }

    /// Derives a deterministic child [`MenuId`] from this id and a string.
    ///
    /// This is the usual way to mint ids for dynamic items such as tags.
    #[must_use]
    pub const fn child_str(self, value: &str) -> Self {
        Self(fnv1a_hash_u64_pair(self.0, fnv1a_hash_str(value)))
    }
}

// ============================================================================
// FNV-1a Hash (compile-time capable)
// ============================================================================

/// FNV-1a 64-bit offset basis.
const FNV1A_OFFSET: u64 = 0xcbf29ce484222325;

/// FNV-1a 64-bit prime.
const FNV1A_PRIME: u64 = 0x00000100000001B3;

/// Computes the FNV-1a hash of a string at compile time.
#[must_use]
pub const fn fnv1a_hash_str(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let mut hash = FNV1A_OFFSET;
    let mut i = 0;
    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(FNV1A_PRIME);
        i += 1;
    }
    hash
}

/// Computes the FNV-1a hash of two u64 values (big-endian byte order) at
/// compile time.
const fn fnv1a_hash_u64_pair(a: u64, b: u64) -> u64 {
    let mut hash = FNV1A_OFFSET;

    let a_bytes = a.to_be_bytes();
    let mut i = 0;
    while i < 8 {
        hash ^= a_bytes[i] as u64;
        hash = hash.wrapping_mul(FNV1A_PRIME);
        i += 1;
    }

    let b_bytes = b.to_be_bytes();
    let mut j = 0;
    while j < 8 {
        hash ^= b_bytes[j] as u64;
        hash = hash.wrapping_mul(FNV1A_PRIME);
        j += 1;
    }

    hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_is_stable() {
        assert_eq!(MenuId::from_str("app.trash"), MenuId::from_str("app.trash"));
        assert_ne!(MenuId::from_str("app.trash"), MenuId::from_str("app.tags"));
    }

    #[test]
    fn test_child_ids_differ() {
        let base = MenuId::from_str("app.tags");
        assert_ne!(base.child(0), base.child(1));
        assert_ne!(base.child_str("work"), base.child_str("home"));
        assert_ne!(base, base.child_str("work"));
    }

    #[test]
    fn test_child_str_matches_across_parents() {
        // Same value under different parents must not collide.
        let tags = MenuId::from_str("app.tags");
        let files = MenuId::from_str("settings.files");
        assert_ne!(tags.child_str("a"), files.child_str("a"));
    }
}
