//! Cross-cutting behavior every combinator chain must honor.

use seqflow::prelude::*;
use seqflow::{Outcome, eager, pairs};
use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;

/// Source cursor that records how many elements were pulled from it
struct Counting {
    next: i32,
    end: i32,
    pulls: Rc<Cell<usize>>,
}

impl Counting {
    fn new(end: i32) -> (Self, Rc<Cell<usize>>) {
        let pulls = Rc::new(Cell::new(0));
        let cursor = Counting {
            next: 1,
            end,
            pulls: Rc::clone(&pulls),
        };
        (cursor, pulls)
    }
}

impl Cursor for Counting {
    type Item = i32;
    type Error = SeqError;

    fn pull(&mut self) -> Result<Option<i32>, SeqError> {
        self.pulls.set(self.pulls.get() + 1);
        if self.next > self.end {
            return Ok(None);
        }
        self.next += 1;
        Ok(Some(self.next - 1))
    }
}

#[test]
fn test_lazy_chain_pulls_on_demand() {
    let (source, pulls) = Counting::new(1_000);
    let mut chain = source
        .convert(|x| Flow::Continue(x * 10))
        .filter(|x| Flow::keep_if(x % 20 == 0));

    assert_eq!(pulls.get(), 0);
    assert_eq!(chain.pull().unwrap(), Some(20));
    assert_eq!(pulls.get(), 2);
    assert_eq!(chain.pull().unwrap(), Some(40));
    assert_eq!(pulls.get(), 4);
}

#[test]
fn test_lazy_chain_stops_pulling_after_stop() {
    let (source, pulls) = Counting::new(1_000);
    let mut chain = source.filter(|x| if *x == 3 { Flow::IgnoreAndBreak } else { Flow::Continue(()) });

    assert_eq!(chain.by_ref().collect_vec().unwrap(), vec![1, 2]);
    assert_eq!(pulls.get(), 3);
    assert_eq!(chain.pull().unwrap(), None);
    assert_eq!(chain.pull().unwrap(), None);
    assert_eq!(pulls.get(), 3);
}

#[test]
fn test_failure_latches_every_adapter() {
    let (source, pulls) = Counting::new(10);
    let mut chain = source
        .flat_map(|x| Flow::Continue([x, x]))
        .convert(|x| {
            if x == 2 {
                Flow::Fail(SeqError::msg("boom"))
            } else {
                Flow::Continue(x)
            }
        });

    assert_eq!(chain.pull().unwrap(), Some(1));
    assert_eq!(chain.pull().unwrap(), Some(1));
    assert_eq!(chain.pull().unwrap_err(), "boom");
    for _ in 0..3 {
        assert_eq!(chain.pull().unwrap(), None);
    }
    assert_eq!(pulls.get(), 2);
}

#[test]
fn test_exhaustion_is_idempotent() {
    let (source, pulls) = Counting::new(2);
    let mut chain = source.convert(|x| Flow::Continue(x + 1));
    assert_eq!(chain.by_ref().collect_vec().unwrap(), vec![2, 3]);
    assert_eq!(chain.pull().unwrap(), None);
    assert_eq!(chain.pull().unwrap(), None);
    assert_eq!(pulls.get(), 3);
}

#[test]
fn test_eager_and_lazy_agree_on_every_outcome() {
    let sentinels: [fn() -> Flow<(), SeqError>; 4] = [
        || Flow::Continue(()),
        || Flow::Break(()),
        || Flow::Ignore,
        || Flow::IgnoreAndBreak,
    ];

    for sentinel in sentinels {
        let step = |e: &i32| if *e == 2 { sentinel() } else { Flow::Continue(()) };
        let eager = eager::filter(vec![1, 2, 3, 4], step).unwrap();
        let lazy = vec![1, 2, 3, 4]
            .into_cursor()
            .fallible::<SeqError>()
            .filter(step)
            .collect_vec()
            .unwrap();
        assert_eq!(eager, lazy, "disagreement on {:?}", sentinel().outcome());
    }
}

#[test]
fn test_classifier_table_for_filter() {
    let expected = [
        (Outcome::Success, vec![1, 2, 3, 4]),
        (Outcome::StopInclusive, vec![1, 2]),
        (Outcome::Skip, vec![1, 3, 4]),
        (Outcome::StopExclusive, vec![1]),
    ];
    let flows = [
        Flow::<(), SeqError>::Continue(()),
        Flow::Break(()),
        Flow::Ignore,
        Flow::IgnoreAndBreak,
    ];

    for (flow, (outcome, kept)) in flows.into_iter().zip(expected) {
        assert_eq!(flow.outcome(), outcome);
        let mut once = Some(flow);
        let result = eager::filter(vec![1, 2, 3, 4], |e| {
            if *e == 2 {
                once.take().unwrap_or(Flow::Continue(()))
            } else {
                Flow::Continue(())
            }
        });
        assert_eq!(result.unwrap(), kept);
    }
}

#[test]
fn test_failure_partiality() {
    let partial = eager::convert(vec![1, 2, 3], |e| {
        if e == 2 {
            Flow::Fail(SeqError::msg("boom"))
        } else {
            Flow::Continue(e * 7)
        }
    })
    .unwrap_err();

    assert_eq!(partial.partial, vec![7]);
    assert_eq!(partial.error, "boom");
    assert_eq!(partial.to_string(), "boom");
}

#[test]
fn test_order_preservation() {
    let result = vec![1, 2, 3, 4, 5]
        .into_cursor()
        .convert(|x| Flow::Continue(x * x))
        .filter(|x| Flow::keep_if(x % 2 == 0))
        .collect_vec()
        .unwrap();
    assert_eq!(result, vec![4, 16]);
}

#[test]
fn test_key_value_independence() {
    let lazy = vec![(1, "a"), (2, "b")]
        .into_cursor()
        .filter_pairs(pairs::by_key(|k: &i32| -> Flow<(), Infallible> { Flow::keep_if(*k == 1) }))
        .collect_vec()
        .unwrap();
    assert_eq!(lazy, vec![(1, "a")]);

    let eager: Vec<_> = pairs::eager::filter(
        vec![(1, "zzz"), (2, "a")],
        pairs::by_key(|k: &i32| -> Flow<(), SeqError> { Flow::keep_if(*k == 1) }),
    )
    .unwrap();
    assert_eq!(eager, vec![(1, "zzz")]);
}

#[test]
fn test_sentinels_never_surface_as_errors() {
    let stopped = (1..=5)
        .into_cursor()
        .fallible::<SeqError>()
        .reduce(0, |acc, e| if e == 3 { Flow::IgnoreAndBreak } else { Flow::Continue(acc + e) });
    assert_eq!(stopped.unwrap(), 3);

    let found = (1..=5)
        .into_cursor()
        .fallible::<SeqError>()
        .first(|_| Flow::Break(true));
    assert_eq!(found.unwrap(), None);

    let visited = (1..=5)
        .into_cursor()
        .fallible::<SeqError>()
        .for_each_until(|_| Flow::IgnoreAndBreak);
    assert!(visited.is_ok());
}

#[test]
fn test_map_cursor_group_values_per_key() {
    let mut inventory = std::collections::HashMap::new();
    inventory.insert("apples", 3);
    inventory.insert("pears", 0);
    inventory.insert("plums", 7);

    let groups = inventory
        .into_cursor()
        .group_pairs(|name, count| {
            if count == 0 {
                Flow::Ignore
            } else {
                Flow::Continue((name.starts_with('p'), count))
            }
        })
        .unwrap();
    assert_eq!(groups[&true], vec![7]);
    assert_eq!(groups[&false], vec![3]);
}
