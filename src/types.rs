use crate::iterator::Stream;

/// Raw key bytes.
pub type Key = Vec<u8>;

/// Raw value bytes.
pub type Value = Vec<u8>;

/// Version identifier carried next to a value.
///
/// Versioned layers assign steps monotonically, so several historical
/// values of one key are told apart by their step. Values coming from the
/// live layer carry step 0.
pub type Step = u64;

/// Key + value pair.
pub type KV = (Key, Value);

/// Key + value + step triple.
pub type KVS = (Key, Value, Step);

/// Type-erased stream handle.
///
/// Every stream carries `close()` (a no-op when it owns nothing), so a boxed
/// handle can always be released uniformly.
pub type BoxStream<'a, T> = Box<dyn Stream<Item = T> + 'a>;

/// Boxed single-value stream of `u64`.
pub type U64Stream<'a> = BoxStream<'a, u64>;

/// Boxed pair stream.
pub type KvStream<'a> = BoxStream<'a, KV>;

/// Boxed triple stream.
pub type KvsStream<'a> = BoxStream<'a, KVS>;
