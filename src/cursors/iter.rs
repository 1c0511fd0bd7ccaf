use crate::cursor::Cursor;
use std::convert::Infallible;
use std::iter::Fuse;

/// Cursor over any iterator; never fails
///
/// This is also how maps are traversed: `HashMap` and `BTreeMap` hand their
/// native iterators to this cursor and come out as cursors of pairs.
///
/// The iterator is fused, so once it has returned `None` it is never polled
/// again.
#[derive(Debug, Clone)]
pub struct IterCursor<I> {
    iter: Fuse<I>,
}

impl<I: Iterator> IterCursor<I> {
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        IterCursor {
            iter: iter.into_iter().fuse(),
        }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;
    type Error = Infallible;

    fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        Ok(self.iter.next())
    }
}

/// Cursor over an iterator of `Result`s
///
/// The first `Err` is reported once; the cursor is exhausted from then on
/// even if the iterator has more to give.
#[derive(Debug, Clone)]
pub struct TryIterCursor<I> {
    iter: I,
    done: bool,
}

impl<I, T, E> TryIterCursor<I>
where
    I: Iterator<Item = Result<T, E>>,
{
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        TryIterCursor {
            iter: iter.into_iter(),
            done: false,
        }
    }
}

impl<I, T, E> Cursor for TryIterCursor<I>
where
    I: Iterator<Item = Result<T, E>>,
{
    type Item = T;
    type Error = E;

    fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        if self.done {
            return Ok(None);
        }
        match self.iter.next() {
            Some(Ok(item)) => Ok(Some(item)),
            Some(Err(error)) => {
                self.done = true;
                Err(error)
            }
            None => {
                self.done = true;
                Ok(None)
            }
        }
    }
}

/// Extension trait to turn anything iterable into a cursor
pub trait IntoCursor: IntoIterator + Sized {
    fn into_cursor(self) -> IterCursor<Self::IntoIter> {
        IterCursor::new(self)
    }
}

/// Implement IntoCursor for all iterables
impl<I: IntoIterator> IntoCursor for I {}

/// Iterator view of a cursor, yielding `Result`s
///
/// Ends after the first `Err`.
#[derive(Debug)]
pub struct CursorIter<C> {
    cursor: C,
    done: bool,
}

impl<C: Cursor> Iterator for CursorIter<C> {
    type Item = Result<C::Item, C::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.cursor.pull() {
            Ok(Some(item)) => Some(Ok(item)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(error) => {
                self.done = true;
                Some(Err(error))
            }
        }
    }
}

/// Extension trait to iterate a cursor with `for` loops and std adapters
pub trait IterExt: Cursor + Sized {
    fn iter(self) -> CursorIter<Self> {
        CursorIter {
            cursor: self,
            done: false,
        }
    }
}

/// Implement IterExt for all cursors
impl<C: Cursor> IterExt for C {}

/// Convenience function to create a cursor from an iterable
pub fn from_iter<I: IntoIterator>(iter: I) -> IterCursor<I::IntoIter> {
    IterCursor::new(iter)
}

/// Convenience function to create a cursor from an iterable of `Result`s
pub fn try_from_iter<I, T, E>(iter: I) -> TryIterCursor<I::IntoIter>
where
    I: IntoIterator<Item = Result<T, E>>,
{
    TryIterCursor::new(iter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_iter_cursor_exhausts_idempotently() {
        let mut cursor = from_iter([1, 2]);
        assert_eq!(cursor.pull().unwrap(), Some(1));
        assert_eq!(cursor.pull().unwrap(), Some(2));
        assert_eq!(cursor.pull().unwrap(), None);
        assert_eq!(cursor.pull().unwrap(), None);
    }

    /// Iterator that answers `None` on every other call and resumes after it
    struct Blinking {
        calls: u32,
    }

    impl Iterator for Blinking {
        type Item = u32;

        fn next(&mut self) -> Option<u32> {
            self.calls += 1;
            if self.calls % 2 == 0 { None } else { Some(self.calls) }
        }
    }

    #[test]
    fn test_iter_cursor_stays_exhausted_over_unfused_iterator() {
        let mut cursor = Blinking { calls: 0 }.into_cursor();
        assert_eq!(cursor.pull().unwrap(), Some(1));
        assert_eq!(cursor.pull().unwrap(), None);
        assert_eq!(cursor.pull().unwrap(), None);
        assert_eq!(cursor.pull().unwrap(), None);
    }

    #[test]
    fn test_map_into_pairs() {
        let map: BTreeMap<_, _> = [(2, "b"), (1, "a")].into_iter().collect();
        let pairs = map.into_cursor().collect_vec().unwrap();
        assert_eq!(pairs, vec![(1, "a"), (2, "b")]);
    }

    #[test]
    fn test_try_iter_latches_after_error() {
        let mut cursor = try_from_iter(vec![Ok(1), Err("boom"), Ok(3)]);
        assert_eq!(cursor.pull(), Ok(Some(1)));
        assert_eq!(cursor.pull(), Err("boom"));
        assert_eq!(cursor.pull(), Ok(None));
        assert_eq!(cursor.pull(), Ok(None));
    }

    #[test]
    fn test_cursor_iter_bridge() {
        let items: Vec<_> = from_iter(1..=3).iter().map(Result::unwrap).collect();
        assert_eq!(items, vec![1, 2, 3]);

        let results: Vec<_> = try_from_iter(vec![Ok(1), Err("x"), Ok(2)]).iter().collect();
        assert_eq!(results, vec![Ok(1), Err("x")]);
    }
}
