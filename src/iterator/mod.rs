pub mod adapter;
pub mod array;
pub mod collect;
pub mod empty;
pub mod filter;
pub mod limit;
pub mod merge;
pub mod paginate;
pub mod state;
pub mod transform;

pub use adapter::{Lift, Project, lift, project};
pub use array::{Array, Range, array, pairs, range};
pub use collect::{
    DrainError, DrainResult, Pairs, Triples, count, drain, drain_must, drain_pairs,
    drain_pairs_must, drain_triples, drain_triples_must,
};
pub use empty::{Empty, empty};
pub use filter::{Filtered, filter};
pub use limit::Limit;
pub use merge::{Merge, Union, merge, union};
pub use paginate::{Page, Paginated, paginate};
pub use state::State;
pub use transform::{Transformed, transform};

use crate::error::Result;

/// The central iteration abstraction.
///
/// A lazy, pull-based, error-fallible sequence that is consumed once. The
/// element shape is the `Item` type: a scalar, a `(key, value)` pair, or a
/// `(key, value, step)` triple. Pair and triple streams handed to the merge
/// algorithms must already be sorted ascending by key bytes.
///
/// Contract:
/// - `has_next()` reports whether an element OR a latched error is waiting.
///   Calling it again without an intervening `next()` gives the same answer.
/// - `next()` consumes one element. Once it returns an error, every later
///   call returns that same error and the underlying source is never read
///   again.
/// - Calling `next()` when `has_next()` is false returns [`Error::Exhausted`].
/// - `close()` releases resources. Composites forward it to every child.
///   Call it at most once.
///
/// [`Error::Exhausted`]: crate::Error::Exhausted
pub trait Stream {
    type Item;

    /// Non-consuming lookahead.
    fn has_next(&mut self) -> bool;

    /// Consumes and returns the next element, or the latched error.
    fn next(&mut self) -> Result<Self::Item>;

    /// Releases resources held by this stream and its children.
    fn close(&mut self) {}

    /// Keep only the elements matching `predicate`.
    fn filter<P>(self, predicate: P) -> Filtered<Self, P>
    where
        Self: Sized,
        P: FnMut(&Self::Item) -> bool,
    {
        Filtered::new(self, predicate)
    }

    /// Map every element through a fallible function.
    fn transform<F, U>(self, mapping: F) -> Transformed<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> Result<U>,
    {
        Transformed::new(self, mapping)
    }

    /// Erase the concrete type.
    fn boxed<'a>(self) -> Box<dyn Stream<Item = Self::Item> + 'a>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// View this stream as a std iterator of `Result`s.
    fn results(self) -> Results<Self>
    where
        Self: Sized,
    {
        Results {
            inner: self,
            done: false,
        }
    }
}

impl<S: Stream + ?Sized> Stream for Box<S> {
    type Item = S::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Result<Self::Item> {
        (**self).next()
    }

    fn close(&mut self) {
        (**self).close()
    }
}

impl<S: Stream + ?Sized> Stream for &mut S {
    type Item = S::Item;

    fn has_next(&mut self) -> bool {
        (**self).has_next()
    }

    fn next(&mut self) -> Result<Self::Item> {
        (**self).next()
    }

    fn close(&mut self) {
        (**self).close()
    }
}

/// Std iterator over a [`Stream`]. Yields `Ok` items, then at most one `Err`,
/// then `None`.
pub struct Results<S> {
    inner: S,
    done: bool,
}

impl<S> Results<S> {
    /// Give back the wrapped stream, e.g. to close it.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Stream> Iterator for Results<S> {
    type Item = Result<S::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || !self.inner.has_next() {
            self.done = true;
            return None;
        }

        match self.inner.next() {
            Ok(item) => Some(Ok(item)),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
