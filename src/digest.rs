use std::fmt;

use crate::error::Result;
use crate::value::{Value, canonical_bytes};

/// A 32-byte Blake3 digest of a value's canonical encoding, used as the
/// value's identity in the unordered containers.
///
/// Derivation is deterministic: the same value always yields the same hash.
/// Because the canonical encoding tags each value with its variant,
/// identity is type-sensitive — `Int(1)`, `Float(1.0)` and `Text("1")`
/// derive three different hashes. Distinct values are assumed, not proven,
/// to derive distinct hashes; at 256 bits a collision is astronomically
/// unlikely, but callers must not lean on collision freedom for
/// correctness-critical decisions.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentHash([u8; 32]);

impl ContentHash {
    /// Derives the content hash of a value.
    ///
    /// Fails when the value has no canonical encoding (it is, or contains,
    /// the absent sentinel).
    pub fn derive(value: &Value) -> Result<Self> {
        let bytes = canonical_bytes(value)?;
        Ok(ContentHash(*blake3::hash(&bytes).as_bytes()))
    }

    /// Returns the hash as a byte slice.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the printable hex form of the hash.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Debug for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentHash({})", self)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
