use crate::error::{Error, Result};
use crate::iterator::{State, Stream};

/// Keeps only the elements of the child stream that satisfy a predicate.
///
/// Lookahead is lazy: the child is not touched until the first `has_next()`
/// or `next()`. Rejected elements are skipped inside that call, so a single
/// pull may read many child elements.
///
/// A child error is latched as-is; the predicate never sees it.
pub struct Filtered<S: Stream, P> {
    inner: S,
    predicate: P,
    head: Option<S::Item>,
    state: State,
}

impl<S, P> Filtered<S, P>
where
    S: Stream,
    P: FnMut(&S::Item) -> bool,
{
    pub fn new(inner: S, predicate: P) -> Self {
        Filtered {
            inner,
            predicate,
            head: None,
            state: State::Active,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Pull from the child until a match, end of stream, or an error.
    fn fill(&mut self) {
        while self.inner.has_next() {
            match self.inner.next() {
                Ok(item) => {
                    if (self.predicate)(&item) {
                        self.head = Some(item);
                        return;
                    }
                }
                Err(e) => {
                    self.state.fail(e);
                    return;
                }
            }
        }
        self.state.finish();
    }
}

/// Keep only the elements of `inner` that satisfy `predicate`.
pub fn filter<S, P>(inner: S, predicate: P) -> Filtered<S, P>
where
    S: Stream,
    P: FnMut(&S::Item) -> bool,
{
    Filtered::new(inner, predicate)
}

impl<S, P> Stream for Filtered<S, P>
where
    S: Stream,
    P: FnMut(&S::Item) -> bool,
{
    type Item = S::Item;

    fn has_next(&mut self) -> bool {
        match self.state {
            State::Failed(_) => true,
            State::Exhausted => false,
            State::Active => {
                if self.head.is_none() {
                    self.fill();
                }
                self.head.is_some() || self.state.is_failed()
            }
        }
    }

    fn next(&mut self) -> Result<S::Item> {
        if !self.has_next() {
            return Err(Error::Exhausted);
        }
        self.state.check()?;
        self.head.take().ok_or(Error::Exhausted)
    }

    fn close(&mut self) {
        self.inner.close();
    }
}
