//! Arena entry: the key payload plus its three linkage roles.

use slotmap::DefaultKey;

use crate::error::Error;

/// One live element of the set. The entry itself owns only its key; all
/// linkage is expressed as arena keys so a single entry can sit on its
/// bucket's collision chain and in the global order list at the same time
/// without ownership cycles.
#[derive(Debug)]
pub(crate) struct Entry {
    pub(crate) key: String,
    /// Next entry in the same bucket's collision chain.
    pub(crate) bucket_next: Option<DefaultKey>,
    /// Neighbors in the insertion-order list.
    pub(crate) order_prev: Option<DefaultKey>,
    pub(crate) order_next: Option<DefaultKey>,
}

impl Entry {
    /// A detached entry: not yet on any chain or in the order list.
    pub(crate) fn new(key: String) -> Self {
        Entry {
            key,
            bucket_next: None,
            order_prev: None,
            order_next: None,
        }
    }
}

/// Accept only keys a bucket index can be derived from: non-empty, first
/// character in `'a'..='z'`.
pub(crate) fn validate_key(key: &str) -> Result<(), Error> {
    match key.as_bytes().first() {
        Some(b) if b.is_ascii_lowercase() => Ok(()),
        _ => Err(Error::InvalidKey(key.to_string())),
    }
}

/// Bucket index of `key` under the given capacity: the first byte's distance
/// from `b'a'`, reduced with a Euclidean remainder. The distance is negative
/// for any first character sorting before `'a'`, and `%` on a negative
/// dividend would escape `[0, capacity)`; `rem_euclid` does not.
///
/// `key` must be non-empty (validated at insertion; lookup paths guard the
/// empty string before calling).
pub(crate) fn bucket_index(key: &str, capacity: usize) -> usize {
    let hash = key.as_bytes()[0] as i64 - b'a' as i64;
    hash.rem_euclid(capacity as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_keys_accepted() {
        for key in ["a", "miwa", "zz", "light"] {
            assert_eq!(validate_key(key), Ok(()));
        }
    }

    #[test]
    fn malformed_keys_rejected() {
        for key in ["", "Zebra", "1abc", " space", "{brace"] {
            assert_eq!(validate_key(key), Err(Error::InvalidKey(key.to_string())));
        }
    }

    #[test]
    fn index_spreads_by_first_letter() {
        assert_eq!(bucket_index("apple", 26), 0);
        assert_eq!(bucket_index("miwa", 26), 12);
        assert_eq!(bucket_index("zz", 26), 25);
        // Same first letter collides regardless of the rest of the key.
        assert_eq!(bucket_index("we", 26), bucket_index("wee", 26));
    }

    #[test]
    fn index_wraps_modulo_capacity() {
        assert_eq!(bucket_index("miwa", 5), 2); // 12 mod 5
        assert_eq!(bucket_index("zz", 1), 0);
    }

    /// A first character below `'a'` yields a negative hash; the index must
    /// still land in `[0, capacity)`.
    #[test]
    fn negative_hash_stays_in_range() {
        // 'Z' is 7 below 'a'.
        for capacity in [1usize, 3, 6, 24, 100] {
            let idx = bucket_index("Zebra", capacity);
            assert!(idx < capacity);
        }
        assert_eq!(bucket_index("Zebra", 24), 17); // -7 rem_euclid 24
        assert_eq!(bucket_index("Zebra", 5), 3); // -7 rem_euclid 5
    }
}
