//! # Tridict
//!
//! Three interchangeable dictionary strategies over `i64` keys and values,
//! sharing one [`Dictionary`] contract:
//!
//! - [`OpenAddressingTable`]: a fixed-capacity flat table with linear probing
//!   and tombstone deletion
//! - [`ChainingTable`]: a fixed-capacity array of singly linked chains
//! - [`AvlHashMap`]: a resizable table hashing into per-bucket AVL trees,
//!   which bounds worst-case bucket lookup to the logarithm of the bucket's
//!   population
//!
//! The AVL engine behind the bucketed table is exported as [`AvlTree`].
//!
//! ## Basic Usage
//!
//! ```rust
//! use tridict::{AvlHashMap, Dictionary};
//!
//! let mut map = AvlHashMap::new();
//!
//! // Insert values
//! assert_eq!(map.insert(17, 1), Ok(None));
//! assert_eq!(map.insert(42, 2), Ok(None));
//!
//! // Update values; the previous value comes back
//! assert_eq!(map.insert(17, 10), Ok(Some(1)));
//!
//! // Query and remove
//! assert!(map.contains(17));
//! assert_eq!(map.remove(17), Some(10));
//! assert!(!map.contains(17));
//! ```
//!
//! ## Picking a strategy at construction time
//!
//! ```rust
//! use tridict::{AvlHashMap, ChainingTable, Dictionary, OpenAddressingTable};
//!
//! let mut tables: Vec<Box<dyn Dictionary>> = vec![
//!     Box::new(OpenAddressingTable::with_capacity(64)),
//!     Box::new(ChainingTable::with_capacity(64)),
//!     Box::new(AvlHashMap::with_capacity(16)),
//! ];
//!
//! for table in &mut tables {
//!     assert_eq!(table.insert(-5, 500), Ok(None));
//!     assert!(table.contains(-5));
//!     assert_eq!(table.remove(-5), Some(500));
//! }
//! ```
//!
//! ## Saturation
//!
//! The fixed-capacity open-addressing table refuses new keys once every slot
//! is occupied or tombstoned instead of dropping them silently:
//!
//! ```rust
//! use tridict::{Dictionary, OpenAddressingTable, TableFull};
//!
//! let mut table = OpenAddressingTable::with_capacity(2);
//! assert_eq!(table.insert(0, 0), Ok(None));
//! assert_eq!(table.insert(1, 1), Ok(None));
//! assert_eq!(table.insert(2, 2), Err(TableFull));
//! ```

/// Module implementing the self-balancing AVL tree engine
mod avl;
/// Module implementing the resizable AVL-bucketed hash table
mod avl_hash;
/// Module implementing the separate-chaining hash table
mod chaining;
/// Module defining the shared dictionary contract and error type
mod dictionary;
/// Module implementing the open-addressing hash table
mod open_addressing;

pub use avl::AvlTree;
pub use avl_hash::AvlHashMap;
pub use chaining::ChainingTable;
pub use dictionary::{Dictionary, TableFull};
pub use open_addressing::OpenAddressingTable;
