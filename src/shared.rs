//! Lock-wrapped `HashTable` that can be cloned across threads.

use crate::error::AllocError;
use crate::hash_fn::{BucketHasher, PolynomialHash};
use crate::hash_table::HashTable;
use parking_lot::RwLock;
use std::sync::Arc;

/// One table-wide `RwLock` around a `HashTable`. Reads share the lock;
/// `put`, `delete` and `clear` take it exclusively.
pub struct SharedHashTable<V, H = PolynomialHash>(Arc<RwLock<HashTable<V, H>>>);

impl<V, H> SharedHashTable<V, H>
where
    V: Copy,
    H: BucketHasher,
{
    pub fn with_table(table: HashTable<V, H>) -> Self {
        Self(Arc::new(RwLock::new(table)))
    }

    pub fn put(&self, key: &[u8], value: V) -> Result<V, AllocError> {
        self.0.write().put(key, value)
    }

    pub fn put_str(&self, key: &str, value: V) -> Result<V, AllocError> {
        self.put(key.as_bytes(), value)
    }

    pub fn get(&self, key: &[u8]) -> Option<V> {
        self.0.read().get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<V> {
        self.get(key.as_bytes())
    }

    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.0.read().contains_key(key)
    }

    pub fn delete(&self, key: &[u8]) -> Option<V> {
        self.0.write().delete(key)
    }

    pub fn delete_str(&self, key: &str) -> Option<V> {
        self.delete(key.as_bytes())
    }

    /// Runs `f` over every value while holding the read lock. `f` must not
    /// call a writing method on the same table.
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(V),
    {
        self.0.read().for_each(f)
    }

    pub fn clear(&self) {
        self.0.write().clear()
    }

    pub fn len(&self) -> usize {
        self.0.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.read().is_empty()
    }

    pub fn load(&self) -> f32 {
        self.0.read().load()
    }
}

impl<V, H> Clone for SharedHashTable<V, H> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}
