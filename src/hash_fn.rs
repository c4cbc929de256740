//! Bucket hash functions: map key bytes to an index in `[0, bucket_count)`.

use core::hash::BuildHasher;
use hashbrown::hash_map::DefaultHashBuilder;

/// Strategy that places a key in one of `bucket_count` buckets.
///
/// Implementations must be pure: the same key and bucket count always give
/// the same index, and the index is below `bucket_count` (which is never 0).
pub trait BucketHasher {
    fn bucket(&self, key: &[u8], bucket_count: usize) -> usize;
}

/// Horner's-rule polynomial hash with multiplier 31, reduced modulo the
/// bucket count after every byte.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PolynomialHash;

impl PolynomialHash {
    pub const MULTIPLIER: u128 = 31;
}

impl BucketHasher for PolynomialHash {
    #[inline]
    fn bucket(&self, key: &[u8], bucket_count: usize) -> usize {
        let n = bucket_count as u128;
        let mut h: u128 = 0;
        for &b in key {
            // h < n, so 31 * h + 255 fits in u128 for any usize n.
            h = (Self::MULTIPLIER * h + b as u128) % n;
        }
        h as usize
    }
}

/// Adapts a plain function or closure.
///
/// ```
/// use chained_hashtable::{HashFn, HashTable};
///
/// let first_byte = HashFn(|k: &[u8], n: usize| k.first().map_or(0, |&b| b as usize % n));
/// let mut t = HashTable::with_hasher(8, first_byte).unwrap();
/// t.put_str("apple", 1).unwrap();
/// assert_eq!(t.bucket_index(b"avocado"), t.bucket_index(b"apple"));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct HashFn<F>(pub F);

impl<F> BucketHasher for HashFn<F>
where
    F: Fn(&[u8], usize) -> usize,
{
    #[inline]
    fn bucket(&self, key: &[u8], bucket_count: usize) -> usize {
        (self.0)(key, bucket_count)
    }
}

/// Reduces a `BuildHasher`'s 64-bit output modulo the bucket count.
///
/// Defaults to hashbrown's `DefaultHashBuilder`, which is randomly seeded per
/// instance; placement is stable for the table that owns the instance.
#[derive(Clone, Debug, Default)]
pub struct BuildHasherIndex<S = DefaultHashBuilder>(pub S);

impl BuildHasherIndex {
    pub fn new() -> Self {
        Self(DefaultHashBuilder::default())
    }
}

impl<S> BucketHasher for BuildHasherIndex<S>
where
    S: BuildHasher,
{
    #[inline]
    fn bucket(&self, key: &[u8], bucket_count: usize) -> usize {
        (self.0.hash_one(key) % bucket_count as u64) as usize
    }
}
