use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::iterator::{Limit, State, Stream};

/// One input of a two-way merge: the child stream plus one buffered element.
///
/// The head is refilled right after it is consumed, so comparing the two
/// sides never has to pull.
pub(crate) struct Side<S: Stream> {
    stream: S,
    head: Option<S::Item>,
}

impl<S: Stream> Side<S> {
    pub(crate) fn new(stream: S) -> Self {
        Side { stream, head: None }
    }

    /// Drop the current head and buffer the next element, if any.
    pub(crate) fn advance(&mut self) -> Result<()> {
        self.head = None;
        if self.stream.has_next() {
            self.head = Some(self.stream.next()?);
        }
        Ok(())
    }

    pub(crate) fn head(&self) -> Option<&S::Item> {
        self.head.as_ref()
    }

    pub(crate) fn take(&mut self) -> Option<S::Item> {
        self.head.take()
    }

    pub(crate) fn close(&mut self) {
        self.stream.close();
    }
}

/// Advance `side` unless `state` already failed; latch any error.
fn advance_side<S: Stream>(side: &mut Option<Side<S>>, state: &mut State) {
    if state.is_failed() {
        return;
    }
    if let Some(side) = side
        && let Err(e) = side.advance()
    {
        state.fail(e);
    }
}

fn pair_key<K: AsRef<[u8]>, V>(item: &(K, V)) -> &[u8] {
    item.0.as_ref()
}

fn triple_key<K: AsRef<[u8]>, V, S>(item: &(K, V, S)) -> &[u8] {
    item.0.as_ref()
}

/// Which side to emit from, given the two buffered keys. `None` when both
/// sides are drained.
fn compare_heads(x: Option<&[u8]>, y: Option<&[u8]>) -> Option<Ordering> {
    match (x, y) {
        (Some(xk), Some(yk)) => Some(xk.cmp(yk)),
        (Some(_), None) => Some(Ordering::Less),
        (None, Some(_)) => Some(Ordering::Greater),
        (None, None) => None,
    }
}

// =============================================================================
// Union: deduplicating merge with shadowing
// =============================================================================

/// Merges two key-sorted pair streams into one, deduplicating by key.
///
/// `x` is the overlay: when both sides hold the same key, `x`'s pair is
/// emitted and `y`'s pair for that key is dropped (shadowed).
///
/// Algorithm, one buffered pair per side:
///   - `x.key < y.key`  → emit x, advance x
///   - `x.key == y.key` → emit x, advance x and y
///   - `x.key > y.key`  → emit y, advance y
///   - one side drained → emit from the other
///
/// Keys compare as raw bytes. Both inputs must already be sorted ascending;
/// this is not checked. An absent side behaves as an empty stream.
///
/// An error pulled while refilling a head is delivered on the pull AFTER the
/// element that was already buffered.
pub struct Union<X: Stream, Y: Stream> {
    x: Option<Side<X>>,
    y: Option<Side<Y>>,
    limit: Limit,
    state: State,
}

impl<K, V, X, Y> Union<X, Y>
where
    K: AsRef<[u8]>,
    X: Stream<Item = (K, V)>,
    Y: Stream<Item = (K, V)>,
{
    /// Build the union and buffer the first pair of each side.
    ///
    /// `limit` caps the number of emitted pairs. `Limit::Max(0)` (also what
    /// `Limit::from(0)` gives) emits nothing; pass `Limit::Unbounded` for
    /// no cap.
    pub fn new(x: Option<X>, y: Option<Y>, limit: Limit) -> Self {
        tracing::trace!(x = x.is_some(), y = y.is_some(), ?limit, "building union");

        let mut union = Union {
            x: x.map(Side::new),
            y: y.map(Side::new),
            limit,
            state: State::Active,
        };
        advance_side(&mut union.x, &mut union.state);
        advance_side(&mut union.y, &mut union.state);
        union
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    fn head_order(&self) -> Option<Ordering> {
        compare_heads(
            self.x.as_ref().and_then(Side::head).map(pair_key),
            self.y.as_ref().and_then(Side::head).map(pair_key),
        )
    }
}

/// Union of two sorted pair streams; see [`Union`].
pub fn union<K, V, X, Y>(x: Option<X>, y: Option<Y>, limit: Limit) -> Union<X, Y>
where
    K: AsRef<[u8]>,
    X: Stream<Item = (K, V)>,
    Y: Stream<Item = (K, V)>,
{
    Union::new(x, y, limit)
}

impl<K, V, X, Y> Stream for Union<X, Y>
where
    K: AsRef<[u8]>,
    X: Stream<Item = (K, V)>,
    Y: Stream<Item = (K, V)>,
{
    type Item = (K, V);

    fn has_next(&mut self) -> bool {
        match self.state {
            State::Failed(_) => true,
            State::Exhausted => false,
            State::Active => {
                if self.limit.is_reached() || self.head_order().is_none() {
                    self.state.finish();
                    return false;
                }
                true
            }
        }
    }

    fn next(&mut self) -> Result<(K, V)> {
        if !self.has_next() {
            return Err(Error::Exhausted);
        }
        self.state.check()?;

        let order = self.head_order().ok_or(Error::Exhausted)?;
        self.limit.consume();

        let item = match order {
            Ordering::Less => {
                let item = self.x.as_mut().and_then(Side::take);
                advance_side(&mut self.x, &mut self.state);
                item
            }
            Ordering::Equal => {
                let item = self.x.as_mut().and_then(Side::take);
                advance_side(&mut self.x, &mut self.state);
                advance_side(&mut self.y, &mut self.state);
                item
            }
            Ordering::Greater => {
                let item = self.y.as_mut().and_then(Side::take);
                advance_side(&mut self.y, &mut self.state);
                item
            }
        };
        item.ok_or(Error::Exhausted)
    }

    fn close(&mut self) {
        tracing::trace!("closing union inputs");
        if let Some(x) = &mut self.x {
            x.close();
        }
        if let Some(y) = &mut self.y {
            y.close();
        }
    }
}

// =============================================================================
// Merge: non-deduplicating merge of a versioned and a live stream
// =============================================================================

/// Merges a key-sorted triple stream `x` with a key-sorted pair stream `y`
/// into one triple stream, keeping every input entry.
///
/// Unlike [`Union`], nothing is shadowed. On `x.key <= y.key` x's triple is
/// emitted with its own step; otherwise y's pair is emitted with the step
/// set to `S::default()` (zero). For equal keys x therefore comes first and
/// y's entry follows on the next pull:
///
/// ```text
/// x: (a,1,10) (b,2,20) (d,4,40)
/// y: (b,20)   (c,30)
/// => (a,1,10) (b,2,20) (b,20,0) (c,30,0) (d,4,40)
/// ```
///
/// Limits, absent sides and error delivery work as in [`Union`].
pub struct Merge<X: Stream, Y: Stream> {
    x: Option<Side<X>>,
    y: Option<Side<Y>>,
    limit: Limit,
    state: State,
}

impl<K, V, S, X, Y> Merge<X, Y>
where
    K: AsRef<[u8]>,
    S: Default,
    X: Stream<Item = (K, V, S)>,
    Y: Stream<Item = (K, V)>,
{
    /// Build the merge and buffer the first element of each side.
    ///
    /// Same `limit` rules as [`Union::new`].
    pub fn new(x: Option<X>, y: Option<Y>, limit: Limit) -> Self {
        tracing::trace!(x = x.is_some(), y = y.is_some(), ?limit, "building merge");

        let mut merge = Merge {
            x: x.map(Side::new),
            y: y.map(Side::new),
            limit,
            state: State::Active,
        };
        advance_side(&mut merge.x, &mut merge.state);
        advance_side(&mut merge.y, &mut merge.state);
        merge
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    fn head_order(&self) -> Option<Ordering> {
        compare_heads(
            self.x.as_ref().and_then(Side::head).map(triple_key),
            self.y.as_ref().and_then(Side::head).map(pair_key),
        )
    }
}

/// Merge of a sorted triple stream and a sorted pair stream; see [`Merge`].
pub fn merge<K, V, S, X, Y>(x: Option<X>, y: Option<Y>, limit: Limit) -> Merge<X, Y>
where
    K: AsRef<[u8]>,
    S: Default,
    X: Stream<Item = (K, V, S)>,
    Y: Stream<Item = (K, V)>,
{
    Merge::new(x, y, limit)
}

impl<K, V, S, X, Y> Stream for Merge<X, Y>
where
    K: AsRef<[u8]>,
    S: Default,
    X: Stream<Item = (K, V, S)>,
    Y: Stream<Item = (K, V)>,
{
    type Item = (K, V, S);

    fn has_next(&mut self) -> bool {
        match self.state {
            State::Failed(_) => true,
            State::Exhausted => false,
            State::Active => {
                if self.limit.is_reached() || self.head_order().is_none() {
                    self.state.finish();
                    return false;
                }
                true
            }
        }
    }

    fn next(&mut self) -> Result<(K, V, S)> {
        if !self.has_next() {
            return Err(Error::Exhausted);
        }
        self.state.check()?;

        let order = self.head_order().ok_or(Error::Exhausted)?;
        self.limit.consume();

        if order == Ordering::Greater {
            let item = self.y.as_mut().and_then(Side::take);
            advance_side(&mut self.y, &mut self.state);
            return item
                .map(|(k, v)| (k, v, S::default()))
                .ok_or(Error::Exhausted);
        }

        let item = self.x.as_mut().and_then(Side::take);
        advance_side(&mut self.x, &mut self.state);
        item.ok_or(Error::Exhausted)
    }

    fn close(&mut self) {
        tracing::trace!("closing merge inputs");
        if let Some(x) = &mut self.x {
            x.close();
        }
        if let Some(y) = &mut self.y {
            y.close();
        }
    }
}
