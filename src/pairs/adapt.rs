//! Lift single-argument callbacks into the two-argument pair shape.
//!
//! Keys and values take part in filtering and conversion independently:
//! `by_key` never looks at the value, `convert_value` never touches the key.

use crate::flow::Flow;

/// Predicate on the key alone
pub fn by_key<K, V, R, E, F>(mut predicate: F) -> impl FnMut(&K, &V) -> Flow<R, E>
where
    F: FnMut(&K) -> Flow<R, E>,
{
    move |key, _| predicate(key)
}

/// Predicate on the value alone
pub fn by_value<K, V, R, E, F>(mut predicate: F) -> impl FnMut(&K, &V) -> Flow<R, E>
where
    F: FnMut(&V) -> Flow<R, E>,
{
    move |_, value| predicate(value)
}

/// Converter that rewrites the key and passes the value through
pub fn convert_key<K, V, K2, E, F>(mut converter: F) -> impl FnMut(K, V) -> Flow<(K2, V), E>
where
    F: FnMut(K) -> Flow<K2, E>,
{
    move |key, value| converter(key).map(|key| (key, value))
}

/// Converter that rewrites the value and passes the key through
pub fn convert_value<K, V, V2, E, F>(mut converter: F) -> impl FnMut(K, V) -> Flow<(K, V2), E>
where
    F: FnMut(V) -> Flow<V2, E>,
{
    move |key, value| converter(value).map(|value| (key, value))
}
