//! Colloid is a dynamically typed collections library with content-hash
//! identity.
//!
//! Core concepts:
//! - **Value**: A runtime-typed value (integers, floats, text, bytes,
//!   nested lists) — the element type of every container
//! - **ContentHash**: A Blake3 digest of a value's canonical CBOR encoding,
//!   standing in for the value's identity
//! - **Set** / **Dict**: Unordered containers keyed by content hash, so
//!   membership and deduplication work across mixed element types
//! - **List** / **Tuple**: Ordered mutable/immutable sequences with
//!   structural equality
//! - **Iterable**: The uniform lazy-sequence surface; `iterate()` returns a
//!   pull-style [`Drain`] that does no work until polled and spawns nothing
//!   in the background
//!
//! # Example
//!
//! ```
//! use colloid::{Dict, Iterable, Set};
//!
//! let mut set = Set::new();
//! set.add(1).unwrap();
//! set.add(2.2).unwrap();
//! set.add("hello").unwrap();
//! set.add(1).unwrap(); // already present, no-op
//! assert_eq!(set.length(), 3);
//!
//! let mut dict = Dict::new();
//! dict.set("answer", 42).unwrap();
//! assert!(dict.contains("answer").unwrap());
//! assert_eq!(dict.get("missing").unwrap(), None);
//! ```
//!
//! # Identity note
//!
//! Two values are the same element exactly when their canonical encodings
//! are byte-identical. The encoding tags every value with its type, so
//! `1`, `1.0` and `"1"` are three distinct elements. Distinct encodings
//! are assumed to yield distinct 256-bit digests; a collision is
//! astronomically unlikely but not impossible, and nothing here proves
//! its absence.
//!
//! Containers are single-owner and not synchronized: share one across
//! threads only behind external mutual exclusion.

mod dict;
mod digest;
mod error;
mod iter;
mod list;
mod set;
mod tuple;
mod value;

pub use dict::Dict;
pub use digest::ContentHash;
pub use error::{Error, Result};
pub use iter::{Drain, Iterable};
pub use list::List;
pub use set::Set;
pub use tuple::Tuple;
pub use value::{Value, canonical_bytes};
