//! chained-hashtable: a fixed-bucket hashtable with separate chaining,
//! built on an arena-backed singly-linked list.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: a small associative container whose collision handling is an
//!   ordinary linked list, so each layer can be reasoned about alone.
//! - Layers:
//!   - LinkedList<T>: singly-linked chain whose nodes live in a `SlotMap`
//!     arena and link to their successor by key. Head insert is O(1);
//!     append, find and delete walk from the head.
//!   - HashTable<V, H>: a boxed slice of `LinkedList`s ("buckets"). Each
//!     key goes through a `BucketHasher` to a bucket index; the bucket's
//!     list does the rest.
//!   - SharedHashTable<V, H> (feature `shared`): one `RwLock` around a
//!     table for callers that need cross-thread access.
//!
//! Constraints
//! - Fixed bucket count: there is no resize or rehash, so an entry stays
//!   in the bucket it hashed to at insertion for its whole life. `load`
//!   reports `len / bucket_count` and is never acted on.
//! - Keys are byte strings; the table stores its own copy of each.
//! - Values are `Copy` (references, indices, handles). The table never
//!   allocates, clones or drops what they refer to; caller owns lifetime.
//! - Single-threaded core: no locks or atomics in `HashTable` itself.
//!
//! Duplicate keys
//! - `put` always appends at the bucket tail and never looks for an
//!   existing entry. Lookups scan from the head, so `get` and `delete` see
//!   the oldest surviving entry for a key. `len` counts every entry.
//!
//! Key equality
//! - Lengths are compared first; bytes only when lengths match. Keys of
//!   different lengths are never equal.
//!
//! Hashing
//! - `PolynomialHash` (default): Horner's rule with multiplier 31, reduced
//!   modulo the bucket count after every byte.
//! - `HashFn` wraps any `Fn(&[u8], usize) -> usize`; `BuildHasherIndex`
//!   wraps a `BuildHasher` (hashbrown's `DefaultHashBuilder` by default).
//!
//! Failure semantics
//! - Allocation of the bucket array and chain capacity limits surface as
//!   `AllocError`. A failed operation leaves the structure unchanged.
//! - Not-found is `None`, never an error.
//! - A bucket count of zero is replaced by `DEFAULT_BUCKET_COUNT`.

mod error;
pub mod hash_fn;
pub mod hash_table;
#[cfg(test)]
mod hash_table_proptest;
pub mod linked_list;
#[cfg(feature = "shared")]
pub mod shared;

// Public surface
pub use error::AllocError;
pub use hash_fn::{BucketHasher, BuildHasherIndex, HashFn, PolynomialHash};
pub use hash_table::{HashTable, HashTableConfig, DEFAULT_BUCKET_COUNT};
pub use linked_list::LinkedList;
#[cfg(feature = "shared")]
pub use shared::SharedHashTable;
