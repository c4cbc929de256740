//! HashTable: fixed bucket array with separate chaining.
//!
//! Every operation hashes the key to a bucket and then delegates to that
//! bucket's `LinkedList`: `put` appends, `get`/`delete` scan from the head.
//! The table owns a copy of every key; values are `Copy` handles that it
//! never allocates or frees.

use crate::error::AllocError;
use crate::hash_fn::{BucketHasher, PolynomialHash};
use crate::linked_list::{self, LinkedList};
use core::cmp::Ordering;
use log::{debug, trace, warn};

/// Bucket count substituted for a requested count of zero.
pub const DEFAULT_BUCKET_COUNT: usize = 128;

/// Construction parameters for a `HashTable`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HashTableConfig {
    /// Number of buckets, fixed for the table's lifetime. Zero selects
    /// `DEFAULT_BUCKET_COUNT`.
    pub bucket_count: usize,
    /// Maximum entries per bucket; `None` leaves chains unbounded.
    pub max_chain_len: Option<usize>,
}

impl Default for HashTableConfig {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
            max_chain_len: None,
        }
    }
}

#[derive(Debug)]
struct Entry<V> {
    key: Box<[u8]>,
    // Index computed at insertion; diagnostic only.
    bucket: usize,
    value: V,
}

/// Length first, then bytes. Keys of different lengths never compare equal.
fn compare_keys<V>(target: &[u8], entry: &Entry<V>) -> Ordering {
    target
        .len()
        .cmp(&entry.key.len())
        .then_with(|| target.cmp(&entry.key[..]))
}

/// Maps byte-string keys to `Copy` values.
///
/// Duplicate keys are not merged: each `put` appends a new entry, and
/// `get`/`delete` act on the oldest surviving entry for a key. The bucket
/// count never changes, so `load` grows without bound as entries are added.
///
/// ```
/// use chained_hashtable::HashTable;
///
/// let mut t = HashTable::new(4).unwrap();
/// t.put_str("a", 1).unwrap();
/// t.put_str("b", 2).unwrap();
/// assert_eq!(t.get_str("b"), Some(2));
/// assert_eq!(t.delete_str("b"), Some(2));
/// assert_eq!(t.get_str("b"), None);
/// assert_eq!(t.len(), 1);
/// ```
#[derive(Debug)]
pub struct HashTable<V, H = PolynomialHash> {
    hasher: H,
    buckets: Box<[LinkedList<Entry<V>>]>,
    len: usize,
    load: f32,
}

impl<V> HashTable<V>
where
    V: Copy,
{
    /// Creates a table using `PolynomialHash`.
    pub fn new(bucket_count: usize) -> Result<Self, AllocError> {
        Self::with_hasher(bucket_count, PolynomialHash)
    }
}

impl<V, H> HashTable<V, H>
where
    V: Copy,
    H: BucketHasher,
{
    pub fn with_hasher(bucket_count: usize, hasher: H) -> Result<Self, AllocError> {
        Self::with_config(
            HashTableConfig {
                bucket_count,
                ..HashTableConfig::default()
            },
            hasher,
        )
    }

    pub fn with_config(config: HashTableConfig, hasher: H) -> Result<Self, AllocError> {
        let bucket_count = if config.bucket_count == 0 {
            debug!(
                "bucket count 0 requested, using default of {}",
                DEFAULT_BUCKET_COUNT
            );
            DEFAULT_BUCKET_COUNT
        } else {
            config.bucket_count
        };

        let mut buckets = Vec::new();
        buckets.try_reserve_exact(bucket_count)?;
        buckets.extend((0..bucket_count).map(|_| match config.max_chain_len {
            Some(limit) => LinkedList::with_node_limit(limit),
            None => LinkedList::new(),
        }));
        debug!(
            "created hashtable: buckets={} max_chain_len={:?}",
            bucket_count, config.max_chain_len
        );

        Ok(Self {
            hasher,
            buckets: buckets.into_boxed_slice(),
            len: 0,
            load: 0.0,
        })
    }

    /// Number of stored entries, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Entries per bucket, `len / bucket_count`.
    pub fn load(&self) -> f32 {
        self.load
    }

    /// Number of entries chained in bucket `index`.
    pub fn bucket_len(&self, index: usize) -> Option<usize> {
        self.buckets.get(index).map(LinkedList::len)
    }

    /// Bucket that `key` hashes to.
    pub fn bucket_index(&self, key: &[u8]) -> usize {
        let n = self.buckets.len();
        // Identity for a conforming hasher; keeps a faulty one in bounds.
        self.hasher.bucket(key, n) % n
    }

    fn set_len(&mut self, len: usize) {
        self.len = len;
        self.load = len as f32 / self.buckets.len() as f32;
    }

    /// Stores a copy of `key` with `value` at the tail of its bucket and
    /// returns `value`. An existing entry with the same key is left in place.
    ///
    /// On error the table is unchanged.
    pub fn put(&mut self, key: &[u8], value: V) -> Result<V, AllocError> {
        let index = self.bucket_index(key);
        let entry = Entry {
            key: key.into(),
            bucket: index,
            value,
        };
        self.buckets[index].append(entry).map_err(|e| {
            warn!("put rejected for bucket {}: {}", index, e);
            e
        })?;
        self.set_len(self.len + 1);
        trace!("put: bucket={} len={}", index, self.len);
        Ok(value)
    }

    pub fn put_str(&mut self, key: &str, value: V) -> Result<V, AllocError> {
        self.put(key.as_bytes(), value)
    }

    /// Value of the oldest entry whose key equals `key`.
    pub fn get(&self, key: &[u8]) -> Option<V> {
        let index = self.bucket_index(key);
        let entry = self.buckets[index].find(key, compare_keys)?;
        debug_assert_eq!(entry.bucket, index);
        Some(entry.value)
    }

    pub fn get_str(&self, key: &str) -> Option<V> {
        self.get(key.as_bytes())
    }

    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }

    pub fn contains_key_str(&self, key: &str) -> bool {
        self.contains_key(key.as_bytes())
    }

    /// Removes the oldest entry whose key equals `key`, freeing its key copy,
    /// and returns its value. Newer entries with the same key remain.
    pub fn delete(&mut self, key: &[u8]) -> Option<V> {
        let index = self.bucket_index(key);
        let entry = self.buckets[index].delete(key, compare_keys)?;
        self.set_len(self.len - 1);
        trace!("delete: bucket={} len={}", index, self.len);
        Some(entry.value)
    }

    pub fn delete_str(&mut self, key: &str) -> Option<V> {
        self.delete(key.as_bytes())
    }

    /// Calls `f` with every stored value, bucket by bucket in index order and
    /// head to tail within a bucket.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(V),
    {
        for bucket in self.buckets.iter() {
            bucket.for_each(|e| f(e.value));
        }
    }

    /// Iterates `(key, value)` pairs in the same order as `for_each`.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
            remaining: self.len,
        }
    }

    /// Removes every entry. The bucket count is kept.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.set_len(0);
        debug!("cleared hashtable with {} buckets", self.buckets.len());
    }
}

/// Iterator over `(key, value)` pairs in traversal order.
pub struct Iter<'a, V> {
    buckets: core::slice::Iter<'a, LinkedList<Entry<V>>>,
    chain: Option<linked_list::Iter<'a, Entry<V>>>,
    remaining: usize,
}

impl<'a, V> Iterator for Iter<'a, V>
where
    V: Copy,
{
    type Item = (&'a [u8], V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.chain.as_mut().and_then(Iterator::next) {
                self.remaining -= 1;
                return Some((&e.key[..], e.value));
            }
            self.chain = Some(self.buckets.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, V> ExactSizeIterator for Iter<'a, V> where V: Copy {}

impl<'a, V, H> IntoIterator for &'a HashTable<V, H>
where
    V: Copy,
    H: BucketHasher,
{
    type Item = (&'a [u8], V);
    type IntoIter = Iter<'a, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
