use thiserror::Error;

/// Errors surfaced at the set's boundary. Everything past the boundary is a
/// structural invariant and is checked fatally in debug builds instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The key is empty or its first character falls outside `'a'..='z'`,
    /// so no bucket index can be derived for it.
    #[error("invalid key {0:?}: keys must be non-empty and start with a lowercase ascii letter")]
    InvalidKey(String),

    /// Rejected construction parameters. Capacity must be positive and the
    /// load factor must lie strictly between 0 and 1.
    #[error("invalid configuration: capacity {capacity}, load factor {load_factor}")]
    InvalidConfig { capacity: usize, load_factor: f64 },
}
