#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use kv_iter::iterator::{Array, Stream, array};
use kv_iter::{Error, KV, KVS, Result};

/// Route crate logs to the test writer. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

pub fn kv(k: &str, v: &str) -> KV {
    (k.as_bytes().to_vec(), v.as_bytes().to_vec())
}

pub fn kvs(k: &str, v: &str, step: u64) -> KVS {
    (k.as_bytes().to_vec(), v.as_bytes().to_vec(), step)
}

/// Pair stream from string literals.
pub fn kv_stream(entries: &[(&str, &str)]) -> Array<KV> {
    array(entries.iter().map(|(k, v)| kv(k, v)).collect())
}

/// Triple stream from string literals.
pub fn kvs_stream(entries: &[(&str, &str, u64)]) -> Array<KVS> {
    array(entries.iter().map(|(k, v, s)| kvs(k, v, *s)).collect())
}

pub fn boom() -> Error {
    Error::Corruption("boom".into())
}

/// Shared counters observed from outside a [`Probe`] or [`Faulty`] stream.
#[derive(Clone, Default)]
pub struct Counters {
    reads: Rc<Cell<usize>>,
    closes: Rc<Cell<usize>>,
}

impl Counters {
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    pub fn closes(&self) -> usize {
        self.closes.get()
    }

    fn bump_reads(&self) {
        self.reads.set(self.reads.get() + 1);
    }

    fn bump_closes(&self) {
        self.closes.set(self.closes.get() + 1);
    }
}

/// Wraps a stream and counts `next()` and `close()` calls.
pub struct Probe<S> {
    inner: S,
    counters: Counters,
}

impl<S: Stream> Probe<S> {
    pub fn new(inner: S) -> (Self, Counters) {
        let counters = Counters::default();
        let probe = Probe {
            inner,
            counters: counters.clone(),
        };
        (probe, counters)
    }
}

impl<S: Stream> Stream for Probe<S> {
    type Item = S::Item;

    fn has_next(&mut self) -> bool {
        self.inner.has_next()
    }

    fn next(&mut self) -> Result<S::Item> {
        self.counters.bump_reads();
        self.inner.next()
    }

    fn close(&mut self) {
        self.counters.bump_closes();
        self.inner.close();
    }
}

/// Base source that yields `items` in order but fails on pull number
/// `fail_at` (0-based). After failing it keeps returning the same error, as a
/// well-behaved source must. Every `next()` call is counted.
pub struct Faulty<T> {
    items: Vec<T>,
    pos: usize,
    fail_at: usize,
    failed: bool,
    counters: Counters,
}

impl<T: Clone> Faulty<T> {
    pub fn new(items: Vec<T>, fail_at: usize) -> (Self, Counters) {
        let counters = Counters::default();
        let faulty = Faulty {
            items,
            pos: 0,
            fail_at,
            failed: false,
            counters: counters.clone(),
        };
        (faulty, counters)
    }
}

impl<T: Clone> Stream for Faulty<T> {
    type Item = T;

    fn has_next(&mut self) -> bool {
        self.failed || self.pos == self.fail_at || self.pos < self.items.len()
    }

    fn next(&mut self) -> Result<T> {
        self.counters.bump_reads();
        if self.failed || self.pos == self.fail_at {
            self.failed = true;
            return Err(boom());
        }
        let item = self.items[self.pos].clone();
        self.pos += 1;
        Ok(item)
    }

    fn close(&mut self) {
        self.counters.bump_closes();
    }
}

/// Assert that `res` is the `boom()` error.
pub fn assert_boom<T: std::fmt::Debug>(res: Result<T>) {
    match res {
        Err(Error::Corruption(msg)) => assert_eq!(msg, "boom"),
        other => panic!("expected latched corruption error, got {other:?}"),
    }
}
