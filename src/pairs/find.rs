use crate::cursor::Cursor;
use crate::flow::{Flow, Verdict};

/// Return the first pair the predicate matches.
///
/// Stop sentinels end the search with no match, as in
/// [`first`](crate::find::first).
pub fn first_pair<C, K, V, F>(mut cursor: C, mut predicate: F) -> Result<Option<(K, V)>, C::Error>
where
    C: Cursor<Item = (K, V)>,
    F: FnMut(&K, &V) -> Flow<bool, C::Error>,
{
    while let Some((key, value)) = cursor.pull()? {
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

/// Return the last pair the predicate matches, scanning the whole cursor.
pub fn last_pair<C, K, V, F>(mut cursor: C, mut predicate: F) -> Result<Option<(K, V)>, C::Error>
where
    C: Cursor<Item = (K, V)>,
    F: FnMut(&K, &V) -> Flow<bool, C::Error>,
{
    let mut found = None;
    while let Some((key, value)) = cursor.pull()? {
        let Verdict { value: hit, stop } = predicate(&key, &value).resolve()?;
        if stop {
            return Ok(None);
        }
        if hit == Some(true) {
            found = Some((key, value));
        }
    }
    Ok(found)
}

/// Extension trait to add .first_pair() and .last_pair() to cursors of pairs
pub trait FindPairExt<K, V>: Cursor<Item = (K, V)> + Sized {
    fn first_pair<F>(self, predicate: F) -> Result<Option<(K, V)>, Self::Error>
    where
        F: FnMut(&K, &V) -> Flow<bool, Self::Error>,
    {
        first_pair(self, predicate)
    }

    fn last_pair<F>(self, predicate: F) -> Result<Option<(K, V)>, Self::Error>
    where
        F: FnMut(&K, &V) -> Flow<bool, Self::Error>,
    {
        last_pair(self, predicate)
    }
}

impl<C, K, V> FindPairExt<K, V> for C where C: Cursor<Item = (K, V)> {}
