//! In-memory associative sets: collections of unique elements optionally paired
//! with an associated value.
//!
//! The central type is [`Set<T, V>`]: a set of elements of type `T`, each
//! carrying a value of type `V`. When only membership matters, [`LabelSet<T>`]
//! stores elements with no payload.
//!
//! ```
//! use valset::Set;
//!
//! let mut fruits = Set::new();
//! fruits.insert("apple", "red");
//! fruits.insert("banana", "yellow");
//!
//! assert_eq!(fruits.len(), 2);
//! assert!(fruits.contains(&"apple"));
//! ```
//!
//! Set-algebra and functional operations never mutate their operands and
//! return a new set:
//!
//! ```
//! use valset::Set;
//!
//! let summer = Set::from([("cherry", 4), ("melon", 9)]);
//! let winter = Set::from([("orange", 3), ("cherry", 5)]);
//!
//! let both = summer.intersection(&winter);
//! assert_eq!(both.elements(), vec!["cherry"]);
//! assert_eq!(summer.get(&"cherry"), Some(&4));
//! ```
//!
//! No operation blocks, suspends or performs I/O; everything completes in time
//! bounded by the size of the involved sets. A `Set` can be sent and shared
//! across threads when its element and value types allow it, but concurrent
//! mutation is not synchronized by this crate: wrap the set in a lock if it
//! must be mutated from several threads.

pub mod set;

pub use set::{LabelSet, Set, SetEmpty};
