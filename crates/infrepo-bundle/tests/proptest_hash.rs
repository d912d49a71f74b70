//! Property-based tests for package hashing
//!
//! Streaming a file through the hasher must agree with hashing the same bytes
//! in memory, and any single-byte change must change the digest.

use infrepo_bundle::{compute_sha256, sha256_file};
use proptest::prelude::*;
use std::fs;
use tempfile::TempDir;

// Strategy: contents around and across the 8 KiB read size
fn arb_contents() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        prop::collection::vec(any::<u8>(), 0..64),
        prop::collection::vec(any::<u8>(), 8180..8200),
        prop::collection::vec(any::<u8>(), 16_000..40_000),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Property: streamed file digest equals in-memory digest
    #[test]
    fn proptest_streamed_hash_matches_memory_hash(contents in arb_contents()) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("package.apk");
        fs::write(&path, &contents).unwrap();

        prop_assert_eq!(sha256_file(&path).unwrap(), compute_sha256(&contents));
    }

    /// Property: identical contents under different names hash identically
    #[test]
    fn proptest_identical_contents_hash_identically(contents in arb_contents()) {
        let temp_dir = TempDir::new().unwrap();
        let first = temp_dir.path().join("first.apk");
        let second = temp_dir.path().join("second-name.apk");
        fs::write(&first, &contents).unwrap();
        fs::write(&second, &contents).unwrap();

        prop_assert_eq!(sha256_file(&first).unwrap(), sha256_file(&second).unwrap());
    }

    /// Property: flipping any byte changes the digest
    #[test]
    fn proptest_single_byte_change_changes_hash(
        contents in arb_contents().prop_filter("non-empty", |c| !c.is_empty()),
        index in any::<prop::sample::Index>(),
        flip in 1u8..=255,
    ) {
        let temp_dir = TempDir::new().unwrap();
        let original = temp_dir.path().join("original.apk");
        let modified = temp_dir.path().join("modified.apk");

        let mut changed = contents.clone();
        let position = index.index(changed.len());
        changed[position] ^= flip;

        fs::write(&original, &contents).unwrap();
        fs::write(&modified, &changed).unwrap();

        prop_assert_ne!(sha256_file(&original).unwrap(), sha256_file(&modified).unwrap());
    }
}
