// Merge: non-deduplicating merge of a versioned triple stream with a live
// pair stream.

mod common;

use common::{init_tracing, kv_stream, kvs, kvs_stream};
use kv_iter::iterator::{Array, Limit, Stream, drain_must, drain_triples_must, merge};
use kv_iter::{Error, KV, KVS, KvStream, KvsStream};

// =============================================================================
// Test 1: Equal keys keep both entries, x first
// =============================================================================
// x = [(a,1,10),(b,2,20),(d,4,40)], y = [(b,20),(c,30)]
// → [(a,1,10),(b,2,20),(b,20,0),(c,30,0),(d,4,40)]
#[test]
fn merge_keeps_both_entries_for_equal_keys() {
    init_tracing();
    let x = kvs_stream(&[("a", "1", 10), ("b", "2", 20), ("d", "4", 40)]);
    let y = kv_stream(&[("b", "20"), ("c", "30")]);

    let out = drain_must(merge(Some(x), Some(y), Limit::Unbounded));

    assert_eq!(
        out,
        vec![
            kvs("a", "1", 10),
            kvs("b", "2", 20),
            kvs("b", "20", 0),
            kvs("c", "30", 0),
            kvs("d", "4", 40),
        ]
    );
}

// =============================================================================
// Test 2: Several versions of one key in x all precede y's entry
// =============================================================================
#[test]
fn merge_emits_every_x_version_before_live_value() {
    let x = kvs_stream(&[("k", "v3", 3), ("k", "v7", 7)]);
    let y = kv_stream(&[("k", "live")]);

    let (keys, values, steps) = drain_triples_must(merge(Some(x), Some(y), Limit::Unbounded));

    assert_eq!(keys, vec![b"k".to_vec(); 3]);
    assert_eq!(
        values,
        vec![b"v3".to_vec(), b"v7".to_vec(), b"live".to_vec()]
    );
    assert_eq!(steps, vec![3, 7, 0]);
}

// =============================================================================
// Test 3: Missing sides
// =============================================================================
#[test]
fn merge_with_absent_x_lifts_y() {
    let y = kv_stream(&[("a", "1"), ("b", "2")]);

    let out = drain_must(merge(None::<Array<KVS>>, Some(y), Limit::Unbounded));

    assert_eq!(out, vec![kvs("a", "1", 0), kvs("b", "2", 0)]);
}

#[test]
fn merge_with_absent_y_yields_x() {
    let x = kvs_stream(&[("a", "1", 5), ("b", "2", 6)]);

    let out = drain_must(merge(Some(x), None::<Array<KV>>, Limit::Unbounded));

    assert_eq!(out, vec![kvs("a", "1", 5), kvs("b", "2", 6)]);
}

#[test]
fn merge_of_nothing_is_empty() {
    let mut it = merge(None::<Array<KVS>>, None::<Array<KV>>, Limit::Unbounded);

    assert!(!it.has_next());
    assert!(matches!(it.next(), Err(Error::Exhausted)));
}

// =============================================================================
// Test 4: Limit
// =============================================================================
#[test]
fn merge_limit_counts_duplicates() {
    let x = kvs_stream(&[("a", "1", 10), ("b", "2", 20), ("d", "4", 40)]);
    let y = kv_stream(&[("b", "20"), ("c", "30")]);

    let out = drain_must(merge(Some(x), Some(y), Limit::Max(3)));

    assert_eq!(
        out,
        vec![kvs("a", "1", 10), kvs("b", "2", 20), kvs("b", "20", 0)]
    );
}

#[test]
fn merge_zero_limit_is_empty() {
    let x = kvs_stream(&[("a", "1", 1)]);
    let y = kv_stream(&[("a", "2")]);

    let mut it = merge(Some(x), Some(y), Limit::Max(0));

    assert!(!it.has_next());
}

#[test]
fn merge_absent_x_still_respects_limit() {
    let y = kv_stream(&[("a", "1"), ("b", "2"), ("c", "3")]);

    let out = drain_must(merge(None::<Array<KVS>>, Some(y), Limit::Max(1)));

    assert_eq!(out, vec![kvs("a", "1", 0)]);
}

// =============================================================================
// Test 5: y before x when y's key is smaller
// =============================================================================
#[test]
fn merge_emits_smaller_live_key_first() {
    let x = kvs_stream(&[("m", "hist", 9)]);
    let y = kv_stream(&[("a", "live"), ("z", "live")]);

    let out = drain_must(merge(Some(x), Some(y), Limit::Unbounded));

    assert_eq!(
        out,
        vec![
            kvs("a", "live", 0),
            kvs("m", "hist", 9),
            kvs("z", "live", 0),
        ]
    );
}

// =============================================================================
// Test 6: Boxed inputs
// =============================================================================
#[test]
fn merge_accepts_boxed_handles() {
    let x: KvsStream = kvs_stream(&[("a", "1", 1)]).boxed();
    let y: KvStream = kv_stream(&[("b", "2")]).boxed();

    let out = drain_must(merge(Some(x), Some(y), Limit::Unbounded));

    assert_eq!(out, vec![kvs("a", "1", 1), kvs("b", "2", 0)]);
}
