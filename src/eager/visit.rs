use crate::flow::Flow;

/// Hand every element of `items` to `consumer` until it asks to stop,
/// returning how many elements it was given.
pub fn visit<I, F, E>(items: I, mut consumer: F) -> Result<usize, E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Flow<(), E>,
{
    let mut visited = 0;
    for item in items {
        visited += 1;
        if consumer(item).resolve()?.stop {
            break;
        }
    }
    Ok(visited)
}

/// Hand every element of `items` to `consumer` until it asks to stop.
///
/// Stopping through `Break` or `IgnoreAndBreak` is a success.
pub fn for_each_until<I, F, E>(items: I, consumer: F) -> Result<(), E>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> Flow<(), E>,
{
    visit(items, consumer).map(|_| ())
}
