//! Combinators over materialized collections of pairs.
//!
//! Inputs are anything iterable over `(K, V)`: a `Vec` of pairs, a `HashMap`,
//! a `BTreeMap`. `filter`, `convert` and `flat_map` build whichever
//! `Default + Extend` collection the caller asks for, so a map can be filtered
//! straight into another map.

use crate::error::Partial;
use crate::flow::{Flow, Verdict};
use crate::group_by::Groups;
use std::collections::HashMap;
use std::hash::Hash;

/// Keep the pairs the predicate accepts.
///
/// ```
/// use seqflow::{Flow, SeqError, pairs};
/// use std::collections::HashMap;
///
/// let ages = HashMap::from([("ann", 31), ("bob", 17), ("cat", 45)]);
/// let adults: HashMap<_, _> =
///     pairs::eager::filter(ages, |_, age| -> Flow<(), SeqError> { Flow::keep_if(*age >= 18) })
///         .unwrap();
/// assert_eq!(adults.len(), 2);
/// assert!(!adults.contains_key("bob"));
/// ```
pub fn filter<I, K, V, C, F, E>(pairs: I, mut predicate: F) -> Result<C, Partial<C, E>>
where
    I: IntoIterator<Item = (K, V)>,
    C: Default + Extend<(K, V)>,
    F: FnMut(&K, &V) -> Flow<(), E>,
{
    let mut kept = C::default();
    for (processed, (key, value)) in pairs.into_iter().enumerate() {
        match predicate(&key, &value).resolve() {
            Ok(Verdict { value: keep, stop }) => {
                if keep.is_some() {
                    kept.extend([(key, value)]);
                }
                if stop {
                    break;
                }
            }
            Err(error) => {
                tracing::debug!(combinator = "pairs::filter", processed, "traversal failed");
                return Err(Partial::new(kept, error));
            }
        }
    }
    Ok(kept)
}

/// Convert every pair into a new pair.
pub fn convert<I, K, V, K2, V2, C, F, E>(pairs: I, mut converter: F) -> Result<C, Partial<C, E>>
where
    I: IntoIterator<Item = (K, V)>,
    C: Default + Extend<(K2, V2)>,
    F: FnMut(K, V) -> Flow<(K2, V2), E>,
{
    let mut converted = C::default();
    for (processed, (key, value)) in pairs.into_iter().enumerate() {
        match converter(key, value).resolve() {
            Ok(Verdict { value: pair, stop }) => {
                converted.extend(pair);
                if stop {
                    break;
                }
            }
            Err(error) => {
                tracing::debug!(combinator = "pairs::convert", processed, "traversal failed");
                return Err(Partial::new(converted, error));
            }
        }
    }
    Ok(converted)
}

/// Expand every pair into a sub-sequence of pairs and collect them all.
pub fn flat_map<I, K, V, S, C, F, E>(pairs: I, mut expander: F) -> Result<C, Partial<C, E>>
where
    I: IntoIterator<Item = (K, V)>,
    S: IntoIterator,
    C: Default + Extend<S::Item>,
    F: FnMut(K, V) -> Flow<S, E>,
{
    let mut flattened = C::default();
    for (processed, (key, value)) in pairs.into_iter().enumerate() {
        match expander(key, value).resolve() {
            Ok(Verdict { value: inner, stop }) => {
                if let Some(inner) = inner {
                    flattened.extend(inner);
                }
                if stop {
                    break;
                }
            }
            Err(error) => {
                tracing::debug!(combinator = "pairs::flat_map", processed, "traversal failed");
                return Err(Partial::new(flattened, error));
            }
        }
    }
    Ok(flattened)
}

/// Fold every pair into an accumulator.
pub fn reduce<I, K, V, A, F, E>(pairs: I, init: A, mut step: F) -> Result<A, Partial<A, E>>
where
    I: IntoIterator<Item = (K, V)>,
    F: FnMut(&A, K, V) -> Flow<A, E>,
{
    let mut acc = init;
    for (processed, (key, value)) in pairs.into_iter().enumerate() {
        match step(&acc, key, value).resolve() {
            Ok(Verdict { value: next, stop }) => {
                if let Some(next) = next {
                    acc = next;
                }
                if stop {
                    break;
                }
            }
            Err(error) => {
                tracing::debug!(combinator = "pairs::reduce", processed, "traversal failed");
                return Err(Partial::new(acc, error));
            }
        }
    }
    Ok(acc)
}

/// Group pairs: the step function names the group and the value filed in it.
pub fn group_by<I, K, V, G, W, F, E>(
    pairs: I,
    mut step: F,
) -> Result<Groups<G, W>, Partial<Groups<G, W>, E>>
where
    I: IntoIterator<Item = (K, V)>,
    G: Eq + Hash,
    F: FnMut(K, V) -> Flow<(G, W), E>,
{
    let mut groups: Groups<G, W> = HashMap::new();
    for (key, value) in pairs {
        match step(key, value).resolve() {
            Ok(Verdict { value: entry, stop }) => {
                if let Some((group, value)) = entry {
                    groups.entry(group).or_default().push(value);
                }
                if stop {
                    break;
                }
            }
            Err(error) => {
                tracing::debug!(combinator = "pairs::group_by", groups = groups.len(), "traversal failed");
                return Err(Partial::new(groups, error));
            }
        }
    }
    Ok(groups)
}

/// Return the first pair the predicate matches.
pub fn first<I, K, V, F, E>(pairs: I, mut predicate: F) -> Result<Option<(K, V)>, E>
where
    I: IntoIterator<Item = (K, V)>,
    F: FnMut(&K, &V) -> Flow<bool, E>,
{
    for (key, value) in pairs {
        let Verdict { value: hit, stop } = predicate(&key, &value).resolve()?;
        if stop {
            return Ok(None);
        }
        if hit == Some(true) {
            return Ok(Some((key, value)));
        }
    }
    Ok(None)
}

/// Return the last pair the predicate matches, scanning from the back.
pub fn last<I, K, V, F, E>(pairs: I, predicate: F) -> Result<Option<(K, V)>, E>
where
    I: IntoIterator<Item = (K, V)>,
    I::IntoIter: DoubleEndedIterator,
    F: FnMut(&K, &V) -> Flow<bool, E>,
{
    first(pairs.into_iter().rev(), predicate)
}

/// Hand every pair to `consumer` until it asks to stop, returning how many
/// pairs it was given.
pub fn visit<I, K, V, F, E>(pairs: I, mut consumer: F) -> Result<usize, E>
where
    I: IntoIterator<Item = (K, V)>,
    F: FnMut(K, V) -> Flow<(), E>,
{
    let mut visited = 0;
    for (key, value) in pairs {
        visited += 1;
        if consumer(key, value).resolve()?.stop {
            break;
        }
    }
    Ok(visited)
}

/// Hand every pair to `consumer` until it asks to stop.
pub fn for_each_until<I, K, V, F, E>(pairs: I, consumer: F) -> Result<(), E>
where
    I: IntoIterator<Item = (K, V)>,
    F: FnMut(K, V) -> Flow<(), E>,
{
    visit(pairs, consumer).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SeqError;
    use crate::pairs::{by_key, by_value, convert_key, convert_value};
    use std::collections::BTreeMap;

    type Step<T> = Flow<T, SeqError>;

    fn fixture() -> Vec<(i32, &'static str)> {
        vec![(1, "a"), (2, "b"), (3, "c"), (4, "d")]
    }

    #[test]
    fn test_filter_key_only() {
        let kept: Vec<_> = filter(vec![(1, "a"), (2, "b")], by_key(|k: &i32| -> Step<()> {
            Flow::keep_if(*k == 1)
        }))
        .unwrap();
        assert_eq!(kept, vec![(1, "a")]);
    }

    #[test]
    fn test_filter_value_only_into_map() {
        let kept: BTreeMap<_, _> = filter(fixture(), by_value(|v: &&str| -> Step<()> {
            Flow::keep_if(*v != "c")
        }))
        .unwrap();
        assert_eq!(kept.keys().copied().collect::<Vec<_>>(), vec![1, 2, 4]);
    }

    #[test]
    fn test_filter_sentinels() {
        let run = |sentinel: fn() -> Step<()>| -> Vec<(i32, &'static str)> {
            filter(fixture(), |k, _| if *k == 2 { sentinel() } else { Flow::Continue(()) }).unwrap()
        };
        assert_eq!(run(|| Flow::Break(())), vec![(1, "a"), (2, "b")]);
        assert_eq!(run(|| Flow::IgnoreAndBreak), vec![(1, "a")]);
        assert_eq!(run(|| Flow::Ignore), vec![(1, "a"), (3, "c"), (4, "d")]);
    }

    #[test]
    fn test_filter_failure_partial() {
        let partial = filter::<_, _, _, Vec<_>, _, _>(fixture(), |k, _| -> Step<()> {
            if *k == 3 { Flow::Fail(SeqError::msg("boom")) } else { Flow::Continue(()) }
        })
        .unwrap_err();
        assert_eq!(partial.partial, vec![(1, "a"), (2, "b")]);
        assert_eq!(partial.error, "boom");
    }

    #[test]
    fn test_convert_key_and_value() {
        let upper: Vec<_> = convert(fixture(), convert_value(|v: &str| -> Step<String> {
            Flow::Continue(v.to_uppercase())
        }))
        .unwrap();
        assert_eq!(upper[0], (1, "A".to_string()));

        let negated: BTreeMap<_, _> = convert(fixture(), convert_key(|k: i32| -> Step<i32> {
            if k == 3 { Flow::IgnoreAndBreak } else { Flow::Continue(-k) }
        }))
        .unwrap();
        assert_eq!(negated, BTreeMap::from([(-2, "b"), (-1, "a")]));
    }

    #[test]
    fn test_convert_failure_excludes_failing_pair() {
        let partial = convert::<_, _, _, _, _, Vec<_>, _, _>(fixture(), |k, v| -> Step<(&str, i32)> {
            if k == 2 { Flow::Fail(SeqError::msg("boom")) } else { Flow::Continue((v, k)) }
        })
        .unwrap_err();
        assert_eq!(partial.partial, vec![("a", 1)]);
    }

    #[test]
    fn test_flat_map_pairs() {
        let expanded: Vec<(i32, char)> = flat_map(fixture(), |k, v| -> Step<Vec<(i32, char)>> {
            match k {
                2 => Flow::Ignore,
                3 => Flow::Break(v.chars().map(|c| (k, c)).collect()),
                _ => Flow::Continue(vec![(k, '*'), (k, v.chars().next().unwrap_or('?'))]),
            }
        })
        .unwrap();
        assert_eq!(expanded, vec![(1, '*'), (1, 'a'), (3, 'c')]);
    }

    #[test]
    fn test_reduce_pairs() {
        let total = reduce(fixture(), 0, |acc, k, _| -> Step<i32> {
            if k == 4 { Flow::Ignore } else { Flow::Continue(acc + k) }
        });
        assert_eq!(total.unwrap(), 6);

        let partial = reduce(fixture(), 0, |acc, k, _| -> Step<i32> {
            if k == 3 { Flow::Fail(SeqError::msg("boom")) } else { Flow::Continue(acc + k) }
        })
        .unwrap_err();
        assert_eq!(partial.partial, 3);
    }

    #[test]
    fn test_group_by_value_per_key() {
        let edges = vec![("a", 'x'), ("b", 'y'), ("a", 'z'), ("c", 'w')];
        let groups = group_by(edges, |k, v| -> Step<(&str, char)> {
            if k == "c" { Flow::IgnoreAndBreak } else { Flow::Continue((k, v)) }
        })
        .unwrap();
        assert_eq!(groups["a"], vec!['x', 'z']);
        assert_eq!(groups["b"], vec!['y']);
        assert!(!groups.contains_key("c"));
    }

    #[test]
    fn test_first_last_pairs() {
        let is_even = |k: &i32, _: &&str| -> Step<bool> { Flow::Continue(k % 2 == 0) };
        assert_eq!(first(fixture(), is_even).unwrap(), Some((2, "b")));
        assert_eq!(last(fixture(), is_even).unwrap(), Some((4, "d")));
        assert_eq!(first(fixture(), |_, _| -> Step<bool> { Flow::Break(true) }).unwrap(), None);
    }

    #[test]
    fn test_for_each_until_pairs() {
        let mut keys = Vec::new();
        for_each_until(fixture(), |k, _| -> Step<()> {
            keys.push(k);
            if k == 2 { Flow::Break(()) } else { Flow::Continue(()) }
        })
        .unwrap();
        assert_eq!(keys, vec![1, 2]);

        let visited = visit(fixture(), |k, _| -> Step<()> {
            if k == 3 { Flow::Fail(SeqError::msg("boom")) } else { Flow::Continue(()) }
        });
        assert_eq!(visited.unwrap_err(), "boom");
    }
}
