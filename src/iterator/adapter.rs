use std::marker::PhantomData;

use crate::error::{Error, Result};
use crate::iterator::merge::Side;
use crate::iterator::{State, Stream};
use crate::types::Step;

/// Lifts a pair stream into a triple stream with a zero step.
///
/// The first pair is buffered at construction; each `next()` hands out the
/// buffered pair and buffers the following one.
pub struct Lift<Y: Stream, S = Step> {
    inner: Side<Y>,
    state: State,
    _step: PhantomData<fn() -> S>,
}

impl<K, V, S, Y> Lift<Y, S>
where
    S: Default,
    Y: Stream<Item = (K, V)>,
{
    pub fn new(inner: Y) -> Self {
        let mut lift = Lift {
            inner: Side::new(inner),
            state: State::Active,
            _step: PhantomData,
        };
        lift.advance();
        lift
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    fn advance(&mut self) {
        if self.state.is_failed() {
            return;
        }
        if let Err(e) = self.inner.advance() {
            self.state.fail(e);
        }
    }
}

/// Turn `(key, value)` into `(key, value, 0)`.
pub fn lift<K, V, Y>(inner: Y) -> Lift<Y, Step>
where
    Y: Stream<Item = (K, V)>,
{
    Lift::new(inner)
}

impl<K, V, S, Y> Stream for Lift<Y, S>
where
    S: Default,
    Y: Stream<Item = (K, V)>,
{
    type Item = (K, V, S);

    fn has_next(&mut self) -> bool {
        match self.state {
            State::Failed(_) => true,
            State::Exhausted => false,
            State::Active => {
                if self.inner.head().is_some() {
                    return true;
                }
                self.state.finish();
                false
            }
        }
    }

    fn next(&mut self) -> Result<(K, V, S)> {
        if !self.has_next() {
            return Err(Error::Exhausted);
        }
        self.state.check()?;

        let (k, v) = self.inner.take().ok_or(Error::Exhausted)?;
        self.advance();
        Ok((k, v, S::default()))
    }

    fn close(&mut self) {
        self.inner.close();
    }
}

/// Projects a triple stream down to a pair stream, discarding the step.
pub struct Project<X: Stream> {
    inner: Side<X>,
    state: State,
}

impl<K, V, S, X> Project<X>
where
    X: Stream<Item = (K, V, S)>,
{
    pub fn new(inner: X) -> Self {
        let mut project = Project {
            inner: Side::new(inner),
            state: State::Active,
        };
        project.advance();
        project
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    fn advance(&mut self) {
        if self.state.is_failed() {
            return;
        }
        if let Err(e) = self.inner.advance() {
            self.state.fail(e);
        }
    }
}

/// Turn `(key, value, step)` into `(key, value)`.
pub fn project<K, V, S, X>(inner: X) -> Project<X>
where
    X: Stream<Item = (K, V, S)>,
{
    Project::new(inner)
}

impl<K, V, S, X> Stream for Project<X>
where
    X: Stream<Item = (K, V, S)>,
{
    type Item = (K, V);

    fn has_next(&mut self) -> bool {
        match self.state {
            State::Failed(_) => true,
            State::Exhausted => false,
            State::Active => {
                if self.inner.head().is_some() {
                    return true;
                }
                self.state.finish();
                false
            }
        }
    }

    fn next(&mut self) -> Result<(K, V)> {
        if !self.has_next() {
            return Err(Error::Exhausted);
        }
        self.state.check()?;

        let (k, v, _) = self.inner.take().ok_or(Error::Exhausted)?;
        self.advance();
        Ok((k, v))
    }

    fn close(&mut self) {
        self.inner.close();
    }
}
