use crate::error::Partial;
use crate::flow::{Flow, Verdict};
use crate::group_by::Groups;
use std::collections::HashMap;
use std::hash::Hash;

/// Group `items` under the key the classifier returns.
pub fn group_by<I, K, F, E>(
    items: I,
    mut key_of: F,
) -> Result<Groups<K, I::Item>, Partial<Groups<K, I::Item>, E>>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> Flow<K, E>,
{
    let mut groups: Groups<K, I::Item> = HashMap::new();
    for item in items {
        match key_of(&item).resolve() {
            Ok(Verdict { value, stop }) => {
                if let Some(key) = value {
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
