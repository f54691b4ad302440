//! Process-wide registry.
//!
//! The table is held as an immutable snapshot behind an atomically swapped
//! pointer. Lookups load the current snapshot without locking; registration
//! clones the snapshot, inserts into the copy and swaps it in, retrying if
//! another registration won the race. Readers therefore see either the old
//! or the new table, never a partially inserted entry.

use crate::{Constructor, KeyType, Registry, Result};
use alloc::sync::Arc;
use arc_swap::ArcSwap;
use std::sync::LazyLock;

/// Process-wide registry, seeded with the builtin key types.
static REGISTRY: LazyLock<ArcSwap<Registry>> =
    LazyLock::new(|| ArcSwap::from_pointee(Registry::with_builtins()));

/// Get a snapshot of the process-wide registry.
///
/// The snapshot is immutable: key types registered after it was taken are
/// not visible through it.
pub fn registry() -> Arc<Registry> {
    REGISTRY.load_full()
}

/// Register a constructor in the process-wide registry.
///
/// Intended to be called by each key representation during program
/// initialization. Fails with [`Error::DuplicateType`][`crate::Error::DuplicateType`]
/// if the name or tag is already registered.
pub fn register(name: &str, tag: u64, constructor: Constructor) -> Result<()> {
    let key_type = KeyType::new(name, tag)?;

    loop {
        let current = REGISTRY.load_full();
        let mut next = Registry::clone(&current);
        next.register_key_type(key_type.clone(), constructor)?;

        let prev = REGISTRY.compare_and_swap(&current, Arc::new(next));
        if Arc::ptr_eq(&prev, &current) {
            return Ok(());
        }
    }
}
