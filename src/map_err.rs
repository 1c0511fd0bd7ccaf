use crate::cursor::Cursor;
use std::convert::Infallible;
use std::fmt;
use std::marker::PhantomData;

/// Cursor adapter that transforms the error of a cursor using a mapping function
pub struct MapErr<C, F> {
    cursor: C,
    mapper: F,
}

impl<C, F> MapErr<C, F> {
    pub fn new(cursor: C, mapper: F) -> Self {
        MapErr { cursor, mapper }
    }
}

impl<C, F> fmt::Debug for MapErr<C, F>
where
    C: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapErr")
            .field("cursor", &self.cursor)
            .field("mapper", &"<function>")
            .finish()
    }
}

impl<C, F, E2> Cursor for MapErr<C, F>
where
    C: Cursor,
    F: FnMut(C::Error) -> E2,
{
    type Item = C::Item;
    type Error = E2;

    fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        self.cursor.pull().map_err(&mut self.mapper)
    }
}

/// Gives an infallible cursor an error type, so that fallible step callbacks
/// can be chained on it
pub struct Fallible<C, E> {
    cursor: C,
    _error: PhantomData<fn() -> E>,
}

impl<C: fmt::Debug, E> fmt::Debug for Fallible<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fallible")
            .field("cursor", &self.cursor)
            .finish()
    }
}

impl<C, E> Cursor for Fallible<C, E>
where
    C: Cursor<Error = Infallible>,
{
    type Item = C::Item;
    type Error = E;

    fn pull(&mut self) -> Result<Option<Self::Item>, Self::Error> {
        match self.cursor.pull() {
            Ok(item) => Ok(item),
            Err(never) => match never {},
        }
    }
}

/// Extension trait to add .map_err() support for cursors
pub trait MapErrExt: Cursor + Sized {
    fn map_err<F, E2>(self, mapper: F) -> MapErr<Self, F>
    where
        F: FnMut(Self::Error) -> E2,
    {
        MapErr::new(self, mapper)
    }
}

/// Implement MapErrExt for all cursors
impl<C> MapErrExt for C where C: Cursor {}

/// Extension trait to add .fallible() to cursors that cannot fail
pub trait FallibleExt: Cursor<Error = Infallible> + Sized {
    fn fallible<E>(self) -> Fallible<Self, E> {
        Fallible {
            cursor: self,
            _error: PhantomData,
        }
    }
}

/// Implement FallibleExt for all infallible cursors
impl<C> FallibleExt for C where C: Cursor<Error = Infallible> {}

/// Convenience function to create a MapErr cursor
pub fn map_err<C, F, E2>(cursor: C, mapper: F) -> MapErr<C, F>
where
    C: Cursor,
    F: FnMut(C::Error) -> E2,
{
    MapErr::new(cursor, mapper)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursors::{try_from_iter, IntoCursor};

    #[derive(Debug, PartialEq)]
    enum CustomError {
        Simple(String),
        WithCode(u32),
    }

    #[test]
    fn test_map_err_transforms_error() {
        let mut cursor = try_from_iter(vec![Ok(1), Err("disk")])
            .map_err(|e: &str| CustomError::Simple(e.to_string()));

        assert_eq!(cursor.pull(), Ok(Some(1)));
        assert_eq!(cursor.pull(), Err(CustomError::Simple("disk".into())));
    }

    #[test]
    fn test_map_err_preserves_success() {
        let cursor = map_err(try_from_iter(vec![Ok::<_, u32>(1), Ok(2)]), CustomError::WithCode);
        assert_eq!(cursor.collect_vec().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_map_err_with_code() {
        let mut cursor = try_from_iter(vec![Err::<i32, _>(404)]).map_err(CustomError::WithCode);
        assert_eq!(cursor.pull(), Err(CustomError::WithCode(404)));
        assert_eq!(cursor.pull(), Ok(None));
    }

    #[test]
    fn test_fallible_changes_only_the_type() {
        let mut cursor = vec!['a', 'b'].into_cursor().fallible::<CustomError>();
        assert_eq!(cursor.pull(), Ok(Some('a')));
        assert_eq!(cursor.pull(), Ok(Some('b')));
        assert_eq!(cursor.pull(), Ok(None));
    }
}
