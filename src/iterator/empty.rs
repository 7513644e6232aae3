use std::marker::PhantomData;

use crate::error::{Error, Result};
use crate::iterator::Stream;

/// A stream with no elements, of any shape.
///
/// Stands in for a missing side of a merge or union.
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Empty<T> {
    pub fn new() -> Self {
        Empty {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Create an empty stream.
pub fn empty<T>() -> Empty<T> {
    Empty::new()
}

impl<T> Stream for Empty<T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        false
    }

    fn next(&mut self) -> Result<T> {
        Err(Error::Exhausted)
    }
}
