//! linked-hash-set: a single-threaded hash set that remembers insertion
//! order. Membership, insertion, and removal are average O(1); iteration
//! visits keys in exactly the order they were added.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: keep three structures mutually consistent through every insert,
//!   remove, grow, and shrink:
//!   - a bucket array of collision-chain heads, indexed by `hash(key) mod
//!     capacity`;
//!   - per-bucket singly linked collision chains;
//!   - one doubly linked order list threading all live entries front to
//!     back in insertion order, independent of bucket placement.
//! - Storage: entries live in a `slotmap::SlotMap` arena and all three
//!   linkage roles are stored as `Option<DefaultKey>` links. Index-based
//!   links sidestep ownership cycles while keeping every splice O(1).
//!
//! Hashing
//! - `hash(key)` is the distance of the key's first byte from `b'a'`, and
//!   the bucket index is taken with a Euclidean remainder so the result
//!   stays in `[0, capacity)` even for a negative hash. All keys sharing a
//!   first letter collide by design; the collision chain's equality scan
//!   does the real work.
//!
//! Resizing
//! - Growth doubles the bucket array when `(size + 1) >= capacity *
//!   load_factor`, checked before the new entry is linked. Shrinking halves
//!   it when a removal would leave `size < capacity * (1 - load_factor)`
//!   with at least one entry remaining, checked before the target is
//!   unlinked. Both are a single pass down the order list that rewrites
//!   only bucket-chain links; size, membership, and order never change.
//!
//! Constraints
//! - Single-threaded: a set is one mutable resource with no internal
//!   locking; callers needing shared access serialize externally.
//! - Keys are validated at insertion: non-empty, first character in
//!   `'a'..='z'`. Lookups are total and never validate; a malformed query
//!   is simply not found.
//! - `remove` of an absent key is a silent no-op, not an error.
//! - Internal invariants (order-walk length equals size, every live entry
//!   on exactly one chain in its correct bucket) are rechecked after each
//!   mutation in debug builds and treated as fatal when broken.

mod entry;
mod error;
mod linked_hash_set;
mod linked_hash_set_proptest;

// Public surface
pub use error::Error;
pub use linked_hash_set::{Iter, LinkedHashSet};
