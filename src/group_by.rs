use crate::cursor::{Cursor, pull_step};
use crate::error::Partial;
use crate::flow::{Flow, Verdict};
use std::collections::HashMap;
use std::hash::Hash;

/// Elements filed under their group key, in encounter order
pub type Groups<K, T> = HashMap<K, Vec<T>>;

/// Group the elements of `cursor` under the key the classifier returns.
///
/// Within a group, elements keep their cursor order. `Ignore` leaves the
/// element out of every group; `IgnoreAndBreak` ends grouping without it;
/// `Break(key)` files the element and ends grouping.
pub fn group_by<C, K, F>(
    mut cursor: C,
    mut key_of: F,
) -> Result<Groups<K, C::Item>, Partial<Groups<K, C::Item>, C::Error>>
where
    C: Cursor,
    K: Eq + Hash,
    F: FnMut(&C::Item) -> Flow<K, C::Error>,
{
    let mut groups: Groups<K, C::Item> = HashMap::new();
    while let Some(flow) = pull_step(&mut cursor, |item| key_of(&item).map(|key| (key, item))) {
        match flow.resolve() {
            Ok(Verdict { value, stop }) => {
                if let Some((key, item)) = value {
                    groups.entry(key).or_default().push(item);
                }
                if stop {
                    break;
                }
            }
            Err(error) => {
                tracing::debug!(combinator = "group_by", groups = groups.len(), "traversal failed");
                return Err(Partial::new(groups, error));
            }
        }
    }
    Ok(groups)
}

/// Extension trait to add .group_by() to all cursors
pub trait GroupByExt: Cursor + Sized {
    fn group_by<K, F>(
        self,
        key_of: F,
    ) -> Result<Groups<K, Self::Item>, Partial<Groups<K, Self::Item>, Self::Error>>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> Flow<K, Self::Error>,
    {
        group_by(self, key_of)
    }
}

impl<C: Cursor> GroupByExt for C {}
