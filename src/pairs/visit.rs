use crate::cursor::Cursor;
use crate::flow::Flow;

/// Hand every pair to `consumer` until it asks to stop, returning how many
/// pairs it was given.
pub fn visit_pairs<C, K, V, F>(mut cursor: C, mut consumer: F) -> Result<usize, C::Error>
where
    C: Cursor<Item = (K, V)>,
    F: FnMut(K, V) -> Flow<(), C::Error>,
{
    let mut visited = 0;
    while let Some((key, value)) = cursor.pull()? {
        visited += 1;
        if consumer(key, value).resolve()?.stop {
            tracing::trace!(combinator = "visit_pairs", visited, "stopped by sentinel");
            break;
        }
    }
    Ok(visited)
}

/// [`visit_pairs`] without the count
pub fn for_each_pair_until<C, K, V, F>(cursor: C, consumer: F) -> Result<(), C::Error>
where
    C: Cursor<Item = (K, V)>,
    F: FnMut(K, V) -> Flow<(), C::Error>,
{
    visit_pairs(cursor, consumer).map(|_| ())
}

/// Extension trait to add early-exit traversal to cursors of pairs
pub trait VisitPairsExt<K, V>: Cursor<Item = (K, V)> + Sized {
    fn for_each_pair_until<F>(self, consumer: F) -> Result<(), Self::Error>
    where
        F: FnMut(K, V) -> Flow<(), Self::Error>,
    {
        for_each_pair_until(self, consumer)
    }

    fn visit_pairs<F>(self, consumer: F) -> Result<usize, Self::Error>
    where
        F: FnMut(K, V) -> Flow<(), Self::Error>,
    {
        visit_pairs(self, consumer)
    }
}

impl<C, K, V> VisitPairsExt<K, V> for C where C: Cursor<Item = (K, V)> {}
