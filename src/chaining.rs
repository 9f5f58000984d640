//! Fixed-capacity separate-chaining table
//!
//! Each bucket owns a singly linked list head-to-tail; new keys are prepended
//! at the head, so the most recently inserted entry of a bucket is found
//! first. Buckets drop their chains iteratively so a long chain cannot
//! overflow the stack on destruction.

use crate::dictionary::{Dictionary, TableFull, slot_index};

/// One link of a bucket's chain.
#[derive(Debug)]
struct ChainNode {
    /// Stored key.
    key: i64,
    /// Stored value.
    value: i64,
    /// Next link toward the tail.
    next: Option<Box<ChainNode>>,
}

/// A bucket owning the head of its chain.
#[derive(Debug, Default)]
struct Bucket {
    /// First link of the chain; `None` for an empty bucket.
    head: Option<Box<ChainNode>>,
}

impl Drop for Bucket {
    fn drop(&mut self) {
        // Unlink one node at a time instead of recursing down the chain.
        let mut next = self.head.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

/// A fixed-capacity hash table resolving collisions with per-bucket chains.
///
/// Inserting an existing key overwrites its value in place; new keys are
/// prepended to the target bucket. Lookups and removals scan the chain
/// linearly.
#[derive(Debug)]
pub struct ChainingTable {
    /// One chain per bucket.
    buckets: Vec<Bucket>,
    /// Number of stored entries.
    len: usize,
}

impl ChainingTable {
    /// Creates a table with the given fixed bucket count (at least 1).
    #[must_use]
    pub fn with_capacity(bucket_count: usize) -> Self {
        let mut buckets = Vec::new();
        buckets.resize_with(bucket_count.max(1), Bucket::default);
        Self { buckets, len: 0 }
    }

    /// Returns the fixed number of buckets.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the value stored for the key, if any.
    #[must_use]
    pub fn get(&self, key: i64) -> Option<i64> {
        let index = slot_index(key, self.buckets.len());
        let mut current = self.buckets.get(index)?.head.as_deref();
        while let Some(node) = current {
            if node.key == key {
                return Some(node.value);
            }
            current = node.next.as_deref();
        }
        None
    }
}

impl Dictionary for ChainingTable {
    fn insert(&mut self, key: i64, value: i64) -> Result<Option<i64>, TableFull> {
        let index = slot_index(key, self.buckets.len());
        let Some(bucket) = self.buckets.get_mut(index) else {
            return Err(TableFull);
        };

        // Overwrite in place if the key already lives in this chain.
        let mut current = bucket.head.as_deref_mut();
        while let Some(node) = current {
            if node.key == key {
                let previous = node.value;
                node.value = value;
                return Ok(Some(previous));
            }
            current = node.next.as_deref_mut();
        }

        bucket.head = Some(Box::new(ChainNode { key, value, next: bucket.head.take() }));
        self.len = self.len.saturating_add(1);
        Ok(None)
    }

    fn remove(&mut self, key: i64) -> Option<i64> {
        let index = slot_index(key, self.buckets.len());
        let bucket = self.buckets.get_mut(index)?;

        let mut cursor = &mut bucket.head;
        loop {
            match cursor {
                None => return None,
                Some(node) if node.key == key => {
                    let value = node.value;
                    *cursor = node.next.take();
                    self.len = self.len.saturating_sub(1);
                    return Some(value);
                }
                Some(node) => cursor = &mut node.next,
            }
        }
    }

    fn contains(&self, key: i64) -> bool {
        self.get(key).is_some()
    }

    fn len(&self) -> usize {
        self.len
    }
}
