use std::vec;

use crate::error::{Error, Result};
use crate::iterator::Stream;

/// Stream over an in-memory vector.
///
/// Owns no external resource, so `close()` is the default no-op. Used for
/// literal inputs and for sources that already materialized their rows.
pub struct Array<T> {
    items: vec::IntoIter<T>,
}

impl<T> Array<T> {
    pub fn new(items: Vec<T>) -> Self {
        Array {
            items: items.into_iter(),
        }
    }

    /// Number of elements not yet pulled.
    pub fn remaining(&self) -> usize {
        self.items.len()
    }
}

/// Stream the elements of `items` in order.
pub fn array<T>(items: Vec<T>) -> Array<T> {
    Array::new(items)
}

/// Pair stream built from two parallel columns.
///
/// Extra entries in the longer column are ignored.
pub fn pairs<K, V>(keys: Vec<K>, values: Vec<V>) -> Array<(K, V)> {
    Array::new(keys.into_iter().zip(values).collect())
}

impl<T> Stream for Array<T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        !self.items.as_slice().is_empty()
    }

    fn next(&mut self) -> Result<T> {
        self.items.next().ok_or(Error::Exhausted)
    }
}

/// Ascending `u64` stream over `[from, to)`.
pub struct Range {
    next: u64,
    end: u64,
}

/// Stream `from, from + 1, ..., to - 1`. Empty when `from >= to`.
pub fn range(from: u64, to: u64) -> Range {
    Range {
        next: from,
        end: to,
    }
}

impl Stream for Range {
    type Item = u64;

    fn has_next(&mut self) -> bool {
        self.next < self.end
    }

    fn next(&mut self) -> Result<u64> {
        if self.next >= self.end {
            return Err(Error::Exhausted);
        }
        let v = self.next;
        self.next += 1;
        Ok(v)
    }
}
