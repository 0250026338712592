//! LinkedHashSet: chained hash table threaded by an insertion-order list.

use core::fmt;

use slotmap::{DefaultKey, SlotMap};

use crate::entry::{bucket_index, validate_key, Entry};
use crate::error::Error;

const DEFAULT_CAPACITY: usize = 100;
const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// A hash set over short lowercase-leading string keys that iterates in
/// insertion order.
///
/// Entries are stored in a slotmap arena; `buckets` holds the head of each
/// collision chain and `front`/`back` delimit the doubly linked order list.
/// The bucket array's length is the table's capacity.
pub struct LinkedHashSet {
    slots: SlotMap<DefaultKey, Entry>,
    buckets: Vec<Option<DefaultKey>>,
    load_factor: f64,
    front: Option<DefaultKey>,
    back: Option<DefaultKey>,
}

impl LinkedHashSet {
    /// An empty set with capacity 100 and load factor 0.75.
    pub fn new() -> Self {
        Self {
            slots: SlotMap::with_key(),
            buckets: vec![None; DEFAULT_CAPACITY],
            load_factor: DEFAULT_LOAD_FACTOR,
            front: None,
            back: None,
        }
    }

    /// An empty set with explicit bucket count and growth threshold.
    ///
    /// Capacity must be positive (the table never degenerates to zero
    /// buckets) and the load factor must lie strictly between 0 and 1.
    pub fn with_config(capacity: usize, load_factor: f64) -> Result<Self, Error> {
        if capacity == 0 || !(load_factor > 0.0 && load_factor < 1.0) {
            return Err(Error::InvalidConfig {
                capacity,
                load_factor,
            });
        }
        Ok(Self {
            slots: SlotMap::with_key(),
            buckets: vec![None; capacity],
            load_factor,
            front: None,
            back: None,
        })
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Current bucket count.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Append `key` to the set: tail of its collision chain, back of the
    /// order list. If the table is non-empty and one more entry would cross
    /// the growth threshold, the table grows before the entry is linked.
    ///
    /// No duplicate check is performed; a key added twice occupies two
    /// entries. Callers wanting strict set semantics check `contains`
    /// first.
    pub fn add(&mut self, key: impl Into<String>) -> Result<(), Error> {
        let key = key.into();
        validate_key(&key)?;

        if !self.is_empty() && self.grow_due() {
            self.resize(self.capacity() * 2);
        }

        let idx = bucket_index(&key, self.capacity());
        let entry = self.slots.insert(Entry::new(key));
        self.chain_append(idx, entry);

        match self.back {
            Some(back) => {
                self.slots[back].order_next = Some(entry);
                self.slots[entry].order_prev = Some(back);
            }
            // First insertion: the entry is both ends of the order list.
            None => self.front = Some(entry),
        }
        self.back = Some(entry);

        self.debug_check();
        Ok(())
    }

    /// Whether `key` is present. Scans the key's collision chain by string
    /// equality; a malformed key is simply not found.
    pub fn contains(&self, key: &str) -> bool {
        if key.is_empty() {
            return false;
        }
        let mut cur = self.buckets[bucket_index(key, self.capacity())];
        while let Some(e) = cur {
            if self.slots[e].key == key {
                return true;
            }
            cur = self.slots[e].bucket_next;
        }
        false
    }

    /// Detach `key` from the set and return its payload, or `None` if it is
    /// absent (a no-op, not an error).
    ///
    /// When the removal would leave the table under its low-water mark with
    /// entries still remaining, the table shrinks first, while the target
    /// is still linked; the unlink then runs against the new capacity.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        if !self.contains(key) {
            return None;
        }

        if self.shrink_due() {
            self.resize((self.capacity() / 2).max(1));
        }

        let idx = bucket_index(key, self.capacity());
        let mut chain_prev: Option<DefaultKey> = None;
        let mut cur = self.buckets[idx];
        let mut found = None;
        while let Some(e) = cur {
            if self.slots[e].key == key {
                found = Some((chain_prev, e));
                break;
            }
            chain_prev = Some(e);
            cur = self.slots[e].bucket_next;
        }
        // `contains` held above, so the chain walk must have hit the key.
        debug_assert!(found.is_some(), "present key missing from its chain");
        let (chain_prev, target) = found?;

        // Splice the collision chain around the target.
        let chain_next = self.slots[target].bucket_next.take();
        match chain_prev {
            None => self.buckets[idx] = chain_next,
            Some(p) => self.slots[p].bucket_next = chain_next,
        }

        // Detach from the order list: sole entry, front, back, or interior.
        let prev = self.slots[target].order_prev.take();
        let next = self.slots[target].order_next.take();
        match (prev, next) {
            (None, None) => {
                self.front = None;
                self.back = None;
            }
            (None, Some(n)) => {
                self.slots[n].order_prev = None;
                self.front = Some(n);
            }
            (Some(p), None) => {
                self.slots[p].order_next = None;
                self.back = Some(p);
            }
            (Some(p), Some(n)) => {
                self.slots[p].order_next = Some(n);
                self.slots[n].order_prev = Some(p);
            }
        }

        let entry = self.slots.remove(target)?;
        self.debug_check();
        Some(entry.key)
    }

    /// A fresh front-to-back walk of the order list. Each call restarts at
    /// the front.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            slots: &self.slots,
            cur: self.front,
        }
    }

    fn grow_due(&self) -> bool {
        (self.len() + 1) as f64 >= self.capacity() as f64 * self.load_factor
    }

    /// Low-water check for the removal about to happen, evaluated against
    /// the pre-removal table. An already-empty result never shrinks.
    fn shrink_due(&self) -> bool {
        match self.len().checked_sub(1) {
            Some(remaining) if remaining > 0 => {
                (remaining as f64) < self.capacity() as f64 * (1.0 - self.load_factor)
            }
            _ => false,
        }
    }

    /// Rebucket every live entry against `new_capacity` in one pass down
    /// the order list. Only bucket-chain links are rewritten; the order
    /// links are reused untouched, so size, membership, and order are
    /// unchanged by construction. Chain order within a bucket ends up in
    /// insertion order, same as repeated tail appends would produce.
    fn resize(&mut self, new_capacity: usize) {
        let old_capacity = self.capacity();
        let mut buckets: Vec<Option<DefaultKey>> = vec![None; new_capacity];
        let mut tails: Vec<Option<DefaultKey>> = vec![None; new_capacity];

        let mut cur = self.front;
        while let Some(e) = cur {
            let idx = bucket_index(&self.slots[e].key, new_capacity);
            self.slots[e].bucket_next = None;
            match tails[idx] {
                None => buckets[idx] = Some(e),
                Some(t) => self.slots[t].bucket_next = Some(e),
            }
            tails[idx] = Some(e);
            cur = self.slots[e].order_next;
        }

        self.buckets = buckets;
        log::trace!(
            "rehash: capacity {} -> {} at size {}",
            old_capacity,
            new_capacity,
            self.len()
        );
        self.debug_check();
    }

    /// Debug-only structural audit, fatal on breach: the order walk visits
    /// exactly `len` entries with consistent back-links, and every live
    /// entry sits on exactly one chain, in the bucket its key hashes to.
    fn debug_check(&self) {
        if !cfg!(debug_assertions) {
            return;
        }

        let mut walked = 0usize;
        let mut prev = None;
        let mut cur = self.front;
        while let Some(e) = cur {
            assert_eq!(self.slots[e].order_prev, prev, "order back-link mismatch");
            walked += 1;
            prev = cur;
            cur = self.slots[e].order_next;
        }
        assert_eq!(prev, self.back, "back does not terminate the order list");
        assert_eq!(walked, self.len(), "order list length diverged from size");

        let mut chained = 0usize;
        for (idx, head) in self.buckets.iter().enumerate() {
            let mut cur = *head;
            while let Some(e) = cur {
                assert_eq!(
                    bucket_index(&self.slots[e].key, self.capacity()),
                    idx,
                    "entry chained in the wrong bucket"
                );
                chained += 1;
                cur = self.slots[e].bucket_next;
            }
        }
        assert_eq!(chained, self.len(), "chain membership diverged from size");
    }

    fn chain_append(&mut self, idx: usize, entry: DefaultKey) {
        match self.buckets[idx] {
            None => self.buckets[idx] = Some(entry),
            Some(head) => {
                let mut cur = head;
                while let Some(next) = self.slots[cur].bucket_next {
                    cur = next;
                }
                self.slots[cur].bucket_next = Some(entry);
            }
        }
    }
}

impl Default for LinkedHashSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders `"front -> <k1> <k2> ... <kn> <- back"`, each key followed by a
/// single space; an empty set renders `"front -> <- back"`.
impl fmt::Display for LinkedHashSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("front -> ")?;
        for key in self {
            write!(f, "{key} ")?;
        }
        f.write_str("<- back")
    }
}

impl fmt::Debug for LinkedHashSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedHashSet")
            .field("size", &self.len())
            .field("capacity", &self.capacity())
            .field("load_factor", &self.load_factor)
            .field("order", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}

/// Forward-only walk of the insertion-order list. Holds a shared borrow of
/// the set, so the table cannot be mutated while the iterator is live.
pub struct Iter<'a> {
    slots: &'a SlotMap<DefaultKey, Entry>,
    cur: Option<DefaultKey>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let e = self.cur?;
        let entry = &self.slots[e];
        self.cur = entry.order_next;
        Some(&entry.key)
    }
}

impl<'a> IntoIterator for &'a LinkedHashSet {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
