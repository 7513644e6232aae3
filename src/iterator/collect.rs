//! Terminal consumers: pull a stream to the end and keep (or count) what
//! comes out. All of them stop at the first error. None of them close the
//! stream; that stays with whoever owns it.

use crate::error::{Error, Result};
use crate::iterator::Stream;

/// A drain that hit an error part way through.
///
/// `partial` holds everything pulled before the failing element.
#[derive(Debug, thiserror::Error)]
#[error("drain stopped after a partial read: {source}")]
pub struct DrainError<C> {
    pub partial: C,
    pub source: Error,
}

/// Outcome of a drain: the full collection, or what was read before the error.
pub type DrainResult<C> = std::result::Result<C, DrainError<C>>;

/// Columns produced by [`drain_pairs`].
pub type Pairs<K, V> = (Vec<K>, Vec<V>);

/// Columns produced by [`drain_triples`].
pub type Triples<K, V, T> = (Vec<K>, Vec<V>, Vec<T>);

impl<C> DrainError<C> {
    pub fn into_parts(self) -> (C, Error) {
        (self.partial, self.source)
    }
}

/// Pull every element into a `Vec`.
pub fn drain<S: Stream>(mut s: S) -> DrainResult<Vec<S::Item>> {
    let mut items = Vec::new();
    while s.has_next() {
        match s.next() {
            Ok(item) => items.push(item),
            Err(source) => {
                return Err(DrainError {
                    partial: items,
                    source,
                });
            }
        }
    }
    Ok(items)
}

/// Pull a pair stream into parallel key and value columns.
pub fn drain_pairs<K, V, S>(mut s: S) -> DrainResult<Pairs<K, V>>
where
    S: Stream<Item = (K, V)>,
{
    let mut keys = Vec::new();
    let mut values = Vec::new();
    while s.has_next() {
        match s.next() {
            Ok((k, v)) => {
                keys.push(k);
                values.push(v);
            }
            Err(source) => {
                return Err(DrainError {
                    partial: (keys, values),
                    source,
                });
            }
        }
    }
    Ok((keys, values))
}

/// Pull a triple stream into parallel key, value and step columns.
pub fn drain_triples<K, V, T, S>(mut s: S) -> DrainResult<Triples<K, V, T>>
where
    S: Stream<Item = (K, V, T)>,
{
    let mut keys = Vec::new();
    let mut values = Vec::new();
    let mut steps = Vec::new();
    while s.has_next() {
        match s.next() {
            Ok((k, v, step)) => {
                keys.push(k);
                values.push(v);
                steps.push(step);
            }
            Err(source) => {
                return Err(DrainError {
                    partial: (keys, values, steps),
                    source,
                });
            }
        }
    }
    Ok((keys, values, steps))
}

/// Like [`drain`], but any error is fatal.
///
/// # Panics
/// Panics with the stream's error if a pull fails.
pub fn drain_must<S: Stream>(s: S) -> Vec<S::Item> {
    match drain(s) {
        Ok(items) => items,
        Err(e) => panic!("drain_must: {}", e.source),
    }
}

/// Like [`drain_pairs`], but any error is fatal.
///
/// # Panics
/// Panics with the stream's error if a pull fails.
pub fn drain_pairs_must<K, V, S>(s: S) -> Pairs<K, V>
where
    S: Stream<Item = (K, V)>,
{
    match drain_pairs(s) {
        Ok(columns) => columns,
        Err(e) => panic!("drain_pairs_must: {}", e.source),
    }
}

/// Like [`drain_triples`], but any error is fatal.
///
/// # Panics
/// Panics with the stream's error if a pull fails.
pub fn drain_triples_must<K, V, T, S>(s: S) -> Triples<K, V, T>
where
    S: Stream<Item = (K, V, T)>,
{
    match drain_triples(s) {
        Ok(columns) => columns,
        Err(e) => panic!("drain_triples_must: {}", e.source),
    }
}

/// Count the elements without keeping them.
pub fn count<S: Stream>(mut s: S) -> Result<usize> {
    let mut n = 0;
    while s.has_next() {
        s.next()?;
        n += 1;
    }
    Ok(n)
}
