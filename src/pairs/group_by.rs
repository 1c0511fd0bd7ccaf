use crate::cursor::Cursor;
use crate::error::Partial;
use crate::flow::{Flow, Verdict};
use crate::group_by::Groups;
use std::collections::HashMap;
use std::hash::Hash;

/// Group pairs by a key derived from each pair.
///
/// The step function returns the group key and the value to file under it,
/// so keys can be regrouped and values reshaped in one pass. Returning the
/// pair unchanged groups the values of each key.
pub fn group_pairs<C, K, V, G, W, F>(
    mut cursor: C,
    mut step: F,
) -> Result<Groups<G, W>, Partial<Groups<G, W>, C::Error>>
where
    C: Cursor<Item = (K, V)>,
    G: Eq + Hash,
    F: FnMut(K, V) -> Flow<(G, W), C::Error>,
{
    let mut groups: Groups<G, W> = HashMap::new();
    loop {
        let (key, value) = match cursor.pull() {
            Ok(Some(pair)) => pair,
            Ok(None) => return Ok(groups),
            Err(error) => {
                tracing::debug!(combinator = "group_pairs", groups = groups.len(), "source failed");
                return Err(Partial::new(groups, error));
            }
        };

        match step(key, value).resolve() {
            Ok(Verdict { value: entry, stop }) => {
                if let Some((group, value)) = entry {
                    groups.entry(group).or_default().push(value);
                }
                if stop {
                    return Ok(groups);
                }
            }
            Err(error) => {
                tracing::debug!(combinator = "group_pairs", groups = groups.len(), "traversal failed");
                return Err(Partial::new(groups, error));
            }
        }
    }
}

/// Extension trait to add .group_pairs() to cursors of pairs
pub trait GroupPairsExt<K, V>: Cursor<Item = (K, V)> + Sized {
    fn group_pairs<G, W, F>(self, step: F) -> Result<Groups<G, W>, Partial<Groups<G, W>, Self::Error>>
    where
        G: Eq + Hash,
        F: FnMut(K, V) -> Flow<(G, W), Self::Error>,
    {
        group_pairs(self, step)
    }
}

impl<C, K, V> GroupPairsExt<K, V> for C where C: Cursor<Item = (K, V)> {}
