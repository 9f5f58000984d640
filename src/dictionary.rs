//! Shared dictionary contract implemented by all three storage strategies

use std::error::Error;
use std::fmt;

/// Error returned when a fixed-capacity table has no slot left for a new key.
///
/// Only the fixed-capacity open-addressing strategy can produce this; the
/// resizable strategies grow instead and never return it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableFull;

impl fmt::Display for TableFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("table is full: every slot is occupied or tombstoned")
    }
}

impl Error for TableFull {}

/// Common contract shared by the three storage strategies.
///
/// Keys and values are fixed-width `i64`. Absent keys are ordinary results
/// (`None` / `false`), never errors; the only error condition is a saturated
/// fixed-capacity table rejecting a new key.
pub trait Dictionary {
    /// Inserts a key-value pair, overwriting the value of an existing key.
    ///
    /// Returns the previous value when the key was already present.
    ///
    /// # Errors
    ///
    /// Returns [`TableFull`] when the strategy has fixed capacity and no slot
    /// is left for a new key. Existing entries are untouched in that case.
    fn insert(&mut self, key: i64, value: i64) -> Result<Option<i64>, TableFull>;

    /// Removes a key, returning its value if it was present.
    fn remove(&mut self, key: i64) -> Option<i64>;

    /// Returns true if the key is present.
    fn contains(&self, key: i64) -> bool;

    /// Returns the number of live entries.
    fn len(&self) -> usize;

    /// Returns true if no entries are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Maps a key to a bucket index in `0..capacity`.
///
/// `rem_euclid` keeps the result non-negative for negative keys, including
/// `i64::MIN`, unlike the plain `%` remainder.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub(crate) fn slot_index(key: i64, capacity: usize) -> usize {
    debug_assert!(capacity > 0, "bucket count must be non-zero");
    key.rem_euclid(capacity.max(1) as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_index_negative_keys() {
        assert_eq!(slot_index(-1, 16), 15);
        assert_eq!(slot_index(-16, 16), 0);
        assert_eq!(slot_index(-17, 16), 15);
    }

    #[test]
    fn test_slot_index_most_negative_key() {
        // i64::MIN has no positive absolute value; rem_euclid still maps it
        // into range.
        let index = slot_index(i64::MIN, 16);
        assert!(index < 16);
        assert_eq!(index, 0); // i64::MIN is a multiple of 16
    }

    #[test]
    fn test_table_full_display() {
        let message = TableFull.to_string();
        assert!(message.contains("full"));
    }
}
