//! Fixed-capacity open-addressing table with linear probing
//!
//! Deletion leaves a tombstone so later probes keep walking past the slot; a
//! probe only stops early at a never-occupied slot. Slots cycle from empty to
//! occupied to tombstoned and back to occupied, never back to truly empty.

use crate::dictionary::{Dictionary, TableFull, slot_index};

/// A slot that has held data at some point.
#[derive(Debug, Clone)]
struct Slot {
    /// Stored key.
    key: i64,
    /// Stored value.
    value: i64,
    /// Tombstone flag: the entry was removed but the slot stays non-empty
    /// so probe sequences crossing it are not cut short.
    deleted: bool,
}

/// A fixed-capacity hash table using linear probing.
///
/// The probe sequence for a key is `(home + i) % capacity` for
/// `i in 0..capacity`, where `home` is the key reduced modulo capacity.
/// Inserting a new key into a table whose every slot is occupied or
/// tombstoned fails with [`TableFull`]; nothing is overwritten.
#[derive(Debug, Clone)]
pub struct OpenAddressingTable {
    /// Flat slot array; `None` slots have never been occupied.
    slots: Vec<Option<Slot>>,
    /// Number of live (non-tombstoned) entries.
    len: usize,
}

impl OpenAddressingTable {
    /// Creates a table with the given fixed capacity (at least 1).
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { slots: vec![None; capacity.max(1)], len: 0 }
    }

    /// Returns the fixed number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Probes for a live entry with the key, returning its slot index.
    fn find(&self, key: i64) -> Option<usize> {
        let capacity = self.slots.len();
        let home = slot_index(key, capacity);

        for step in 0..capacity {
            let index = home.wrapping_add(step) % capacity;
            match self.slots.get(index)? {
                // Never-occupied slot: the key cannot be further along.
                None => return None,
                Some(slot) if !slot.deleted && slot.key == key => return Some(index),
                Some(_) => {}
            }
        }
        None
    }

    /// Returns the value stored for the key, if any.
    #[must_use]
    pub fn get(&self, key: i64) -> Option<i64> {
        let index = self.find(key)?;
        self.slots.get(index)?.as_ref().map(|slot| slot.value)
    }
}

impl Dictionary for OpenAddressingTable {
    fn insert(&mut self, key: i64, value: i64) -> Result<Option<i64>, TableFull> {
        let capacity = self.slots.len();
        let home = slot_index(key, capacity);

        // Probe until a never-occupied slot proves the key absent. A matching
        // live slot is overwritten; otherwise the new entry lands in the
        // first tombstone seen, or in the empty slot that ended the probe.
        let mut existing = None;
        let mut target = None;
        for step in 0..capacity {
            let index = home.wrapping_add(step) % capacity;
            match self.slots.get(index) {
                None => break,
                Some(None) => {
                    if target.is_none() {
                        target = Some(index);
                    }
                    break;
                }
                Some(Some(slot)) if !slot.deleted && slot.key == key => {
                    existing = Some(index);
                    break;
                }
                Some(Some(slot)) => {
                    if slot.deleted && target.is_none() {
                        target = Some(index);
                    }
                }
            }
        }

        if let Some(index) = existing {
            if let Some(Some(slot)) = self.slots.get_mut(index) {
                let previous = slot.value;
                slot.value = value;
                return Ok(Some(previous));
            }
        }
        if let Some(index) = target {
            if let Some(slot_ref) = self.slots.get_mut(index) {
                *slot_ref = Some(Slot { key, value, deleted: false });
                self.len = self.len.saturating_add(1);
                return Ok(None);
            }
        }
        // Full probe cycle with no tombstone to reclaim: the table is
        // saturated and the caller must be told.
        Err(TableFull)
    }

    fn remove(&mut self, key: i64) -> Option<i64> {
        let index = self.find(key)?;
        let slot = self.slots.get_mut(index)?.as_mut()?;
        let value = slot.value;
        slot.deleted = true;
        self.len = self.len.saturating_sub(1);
        Some(value)
    }

    fn contains(&self, key: i64) -> bool {
        self.find(key).is_some()
    }

    fn len(&self) -> usize {
        self.len
    }
}
