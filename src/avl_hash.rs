//! Resizable hash table with an AVL tree per bucket
//!
//! Chains are replaced by balanced trees, so a bucket lookup is logarithmic
//! in the bucket's population even when many keys collide. The table is the
//! only resizable strategy: crossing the load-factor band triggers a
//! stop-the-world rehash into a fresh bucket array.

use crate::avl::AvlTree;
use crate::dictionary::{Dictionary, TableFull, slot_index};

/// Capacity never shrinks below this floor.
const MIN_CAPACITY: usize = 16;

/// Default upper bound on `len / capacity` before the table doubles.
const DEFAULT_MAX_LOAD_FACTOR: f64 = 2.0;

/// A hash table whose buckets are independent AVL trees.
///
/// Every key lives in bucket `key.rem_euclid(capacity)`. After each insert or
/// remove that changes the entry count, the load factor is checked: at or
/// above `max_load_factor` the capacity doubles, at or below a quarter of it
/// (and above the floor of 16) the capacity halves. Either way every stored
/// pair is rehashed into a fresh bucket array.
#[derive(Debug, Clone)]
pub struct AvlHashMap {
    /// One AVL tree per bucket.
    buckets: Vec<AvlTree>,
    /// Number of stored entries across all buckets.
    len: usize,
    /// Load factor at which the table grows.
    max_load_factor: f64,
}

impl Default for AvlHashMap {
    fn default() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }
}

impl AvlHashMap {
    /// Creates an empty table with the default initial capacity of 16.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table with the given initial capacity (at least 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: vec![AvlTree::new(); capacity.max(1)],
            len: 0,
            max_load_factor: DEFAULT_MAX_LOAD_FACTOR,
        }
    }

    /// Returns the current number of buckets.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the current ratio of entries to buckets.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Returns the value stored for the key, if any.
    #[must_use]
    pub fn get(&self, key: i64) -> Option<i64> {
        let index = slot_index(key, self.buckets.len());
        self.buckets.get(index)?.get(key)
    }

    /// Doubles or halves the capacity when the load factor leaves the band.
    fn check_resize(&mut self) {
        let capacity = self.buckets.len();
        let load = self.load_factor();

        if load >= self.max_load_factor {
            self.resize(capacity.saturating_mul(2));
        } else if load <= self.max_load_factor / 4.0 && capacity > MIN_CAPACITY {
            self.resize(capacity / 2);
        }
    }

    /// Rehashes every stored pair into a fresh bucket array.
    ///
    /// A capacity change invalidates the bucket mapping of every key, so each
    /// old tree is walked in order and its pairs reinserted. The old buckets
    /// are dropped only after the new array holds everything; `len` is
    /// unchanged.
    fn resize(&mut self, target_capacity: usize) {
        let new_capacity = target_capacity.max(MIN_CAPACITY);
        if new_capacity == self.buckets.len() {
            return;
        }

        let mut new_buckets = vec![AvlTree::new(); new_capacity];
        for bucket in &self.buckets {
            bucket.for_each(&mut |key, value| {
                let index = slot_index(key, new_capacity);
                if let Some(tree) = new_buckets.get_mut(index) {
                    tree.insert(key, value);
                }
            });
        }
        self.buckets = new_buckets;
    }
}

impl Dictionary for AvlHashMap {
    fn insert(&mut self, key: i64, value: i64) -> Result<Option<i64>, TableFull> {
        let index = slot_index(key, self.buckets.len());
        let Some(bucket) = self.buckets.get_mut(index) else {
            return Err(TableFull);
        };

        let replaced = bucket.insert(key, value);
        if replaced.is_none() {
            // New key: the count changed, so the load band may have been
            // crossed. A value overwrite cannot trigger a resize.
            self.len = self.len.saturating_add(1);
            self.check_resize();
        }
        Ok(replaced)
    }

    fn remove(&mut self, key: i64) -> Option<i64> {
        let index = slot_index(key, self.buckets.len());
        let removed = self.buckets.get_mut(index)?.remove(key);
        if removed.is_some() {
            // Only an actual removal moves the count; an absent key must not
            // disturb it or the load factor.
            self.len = self.len.saturating_sub(1);
            self.check_resize();
        }
        removed
    }

    fn contains(&self, key: i64) -> bool {
        self.get(key).is_some()
    }

    fn len(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut map = AvlHashMap::new();
        assert!(map.is_empty());
        assert_eq!(map.insert(1, 10), Ok(None));
        assert_eq!(map.insert(2, 20), Ok(None));
        assert_eq!(map.get(1), Some(10));
        assert_eq!(map.get(2), Some(20));
        assert_eq!(map.get(3), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_overwrite_keeps_len() {
        let mut map = AvlHashMap::new();
        assert_eq!(map.insert(7, 1), Ok(None));
        assert_eq!(map.insert(7, 2), Ok(Some(1)));
        assert_eq!(map.get(7), Some(2));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_remove_absent_key_keeps_len() {
        let mut map = AvlHashMap::new();
        assert_eq!(map.insert(1, 10), Ok(None));
        assert_eq!(map.remove(2), None);
        assert_eq!(map.len(), 1);
        assert_eq!(map.remove(1), Some(10));
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn test_grow_scenario() {
        // capacity 16, max load 2.0: inserting 1..=33 must double to 32 by
        // the time 32 keys are stored, with every key still retrievable.
        let mut map = AvlHashMap::with_capacity(16);
        for key in 1..=33 {
            assert_eq!(map.insert(key, key * 100), Ok(None));
        }
        assert_eq!(map.capacity(), 32);
        assert_eq!(map.len(), 33);
        for key in 1..=33 {
            assert_eq!(map.get(key), Some(key * 100));
        }
    }

    #[test]
    fn test_resize_preserves_all_entries() {
        let mut map = AvlHashMap::with_capacity(16);
        for key in 0..1000 {
            assert_eq!(map.insert(key, key ^ 0x5a5a), Ok(None));
        }
        assert_eq!(map.len(), 1000);
        assert!(map.capacity() >= 512);
        for key in 0..1000 {
            assert_eq!(map.get(key), Some(key ^ 0x5a5a));
        }
    }

    #[test]
    fn test_shrink_on_removal() {
        let mut map = AvlHashMap::with_capacity(16);
        for key in 0..256 {
            assert_eq!(map.insert(key, key), Ok(None));
        }
        let grown = map.capacity();
        assert!(grown >= 128);

        for key in 0..250 {
            assert_eq!(map.remove(key), Some(key));
        }
        assert!(map.capacity() < grown);
        for key in 250..256 {
            assert_eq!(map.get(key), Some(key));
        }
    }

    #[test]
    fn test_capacity_floor() {
        let mut map = AvlHashMap::with_capacity(16);
        for key in 0..64 {
            assert_eq!(map.insert(key, key), Ok(None));
        }
        for key in 0..64 {
            assert_eq!(map.remove(key), Some(key));
        }
        assert!(map.is_empty());
        assert!(map.capacity() >= MIN_CAPACITY);
    }

    #[test]
    fn test_negative_and_extreme_keys() {
        let mut map = AvlHashMap::new();
        for key in [i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX] {
            assert_eq!(map.insert(key, 1), Ok(None));
        }
        for key in [i64::MIN, i64::MIN + 1, -1, 0, 1, i64::MAX] {
            assert!(map.contains(key));
        }
        assert_eq!(map.remove(i64::MIN), Some(1));
        assert!(!map.contains(i64::MIN));
    }

    #[test]
    fn test_colliding_keys_share_a_bucket_tree() {
        // Stride by the capacity so every key hashes to bucket 0 until a
        // resize spreads them out.
        let mut map = AvlHashMap::with_capacity(16);
        for i in 0..20 {
            assert_eq!(map.insert(i * 16, i), Ok(None));
        }
        for i in 0..20 {
            assert_eq!(map.get(i * 16), Some(i));
        }
    }
}
