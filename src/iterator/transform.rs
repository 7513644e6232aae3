use crate::error::{Error, Result};
use crate::iterator::{State, Stream};

/// Maps every element of the child stream through a fallible function.
///
/// The output shape is free: a pair stream can be mapped to a `u64` stream,
/// a triple stream to pairs, and so on. No lookahead is buffered; each
/// `next()` pulls exactly one child element.
///
/// A mapping failure is latched exactly like a child error: from then on
/// every pull returns it and the child is not read again.
pub struct Transformed<S, F> {
    inner: S,
    mapping: F,
    state: State,
}

impl<S, F> Transformed<S, F> {
    pub fn new(inner: S, mapping: F) -> Self {
        Transformed {
            inner,
            mapping,
            state: State::Active,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }
}

/// Map every element of `inner` with `mapping`.
pub fn transform<S, F, U>(inner: S, mapping: F) -> Transformed<S, F>
where
    S: Stream,
    F: FnMut(S::Item) -> Result<U>,
{
    Transformed::new(inner, mapping)
}

impl<S, F, U> Stream for Transformed<S, F>
where
    S: Stream,
    F: FnMut(S::Item) -> Result<U>,
{
    type Item = U;

    fn has_next(&mut self) -> bool {
        match self.state {
            State::Failed(_) => true,
            State::Exhausted => false,
            State::Active => {
                if self.inner.has_next() {
                    return true;
                }
                self.state.finish();
                false
            }
        }
    }

    fn next(&mut self) -> Result<U> {
        if !self.has_next() {
            return Err(Error::Exhausted);
        }
        self.state.check()?;

        let mapped = self.inner.next().and_then(|item| (self.mapping)(item));
        if let Err(e) = &mapped {
            self.state.fail(e.clone());
        }
        mapped
    }

    fn close(&mut self) {
        self.inner.close();
    }
}
