//! # Sorted Stream Merging
//!
//! Lazy, pull-based iteration and two-way merging for a key-value storage
//! engine that keeps a mutable live layer next to immutable versioned layers.
//!
//! ## Core idea
//! Every source (cursor, range scan, paged remote fetch, in-memory batch)
//! is adapted into a [`Stream`]: `has_next()` / `next()` / `close()`.
//! Combinators wrap streams without materializing them:
//!
//! ```text
//!   live layer ──► filter ──┐
//!                           ├──► union  ──► latest visible value per key
//!   versioned ──► project ──┘
//!
//!   versioned ──────────────┐
//!                           ├──► merge  ──► every value, with its step
//!   live layer ─────────────┘
//! ```
//!
//! Nothing is read until the consumer pulls. Errors latch: once a stream
//! fails it returns the same error forever and stops reading its source.
//!
//! ## Example
//! ```
//! use kv_iter::iterator::{self, Limit};
//!
//! let x = iterator::pairs(vec![b"a".to_vec(), b"b".to_vec()], vec![b"1".to_vec(), b"2".to_vec()]);
//! let y = iterator::pairs(vec![b"b".to_vec(), b"c".to_vec()], vec![b"20".to_vec(), b"30".to_vec()]);
//!
//! let (keys, values) = iterator::drain_pairs_must(iterator::union(Some(x), Some(y), Limit::Unbounded));
//! assert_eq!(keys, vec![b"a".to_vec(), b"b".to_vec(), b"c".to_vec()]);
//! assert_eq!(values, vec![b"1".to_vec(), b"2".to_vec(), b"30".to_vec()]);
//! ```

pub mod error;
pub mod iterator;
pub mod types;

// Public re-exports for the top-level API
pub use error::{Error, Result};
pub use iterator::{Limit, State, Stream};
pub use types::{BoxStream, KV, KVS, Key, KvStream, KvsStream, Step, U64Stream, Value};
