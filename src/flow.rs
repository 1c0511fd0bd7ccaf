//! Control-flow protocol shared by every combinator.
//!
//! A step callback decides two things about the element it was handed: whether
//! its result is kept, and whether the traversal goes on. It answers with a
//! [`Flow`], and combinators turn that answer into a [`Verdict`] through
//! [`Flow::resolve`]. Genuine failures travel in [`Flow::Fail`] and are the
//! only answers that ever reach the combinator's caller as an error.

/// What a step callback wants done with the current element.
///
/// | Variant          | Keep result | Keep going |
/// |------------------|-------------|------------|
/// | `Continue(v)`    | yes         | yes        |
/// | `Break(v)`       | yes         | no         |
/// | `Ignore`         | no          | yes        |
/// | `IgnoreAndBreak` | no          | no         |
/// | `Fail(e)`        | no          | no, `e` is reported |
///
/// Predicates use `Flow<(), E>`, the same way `std::ops::ControlFlow` is used
/// with a unit payload.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow<T, E> {
    /// Keep the result and continue
    Continue(T),
    /// Keep the result, then stop successfully
    Break(T),
    /// Drop the result and continue
    Ignore,
    /// Drop the result and stop successfully
    IgnoreAndBreak,
    /// Stop and report the failure
    Fail(E),
}

/// Classification of a [`Flow`], independent of its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// `Continue`: result kept, traversal goes on
    Success,
    /// `Break`: result kept, traversal ends
    StopInclusive,
    /// `IgnoreAndBreak`: result dropped, traversal ends
    StopExclusive,
    /// `Ignore`: result dropped, traversal goes on
    Skip,
    /// `Fail`: traversal ends with an error
    Failure,
}

impl Outcome {
    /// Whether the element that produced this outcome contributes a result
    pub const fn includes(self) -> bool {
        matches!(self, Outcome::Success | Outcome::StopInclusive)
    }

    /// Whether the traversal ends after this outcome
    pub const fn stops(self) -> bool {
        matches!(
            self,
            Outcome::StopInclusive | Outcome::StopExclusive | Outcome::Failure
        )
    }
}

/// A resolved, non-failing answer: the result to keep (if any) and whether
/// to stop afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict<T> {
    pub value: Option<T>,
    pub stop: bool,
}

impl<T, E> Flow<T, E> {
    /// Classify this answer.
    pub fn outcome(&self) -> Outcome {
        match self {
            Flow::Continue(_) => Outcome::Success,
            Flow::Break(_) => Outcome::StopInclusive,
            Flow::Ignore => Outcome::Skip,
            Flow::IgnoreAndBreak => Outcome::StopExclusive,
            Flow::Fail(_) => Outcome::Failure,
        }
    }

    /// Split this answer into the part a combinator acts on.
    ///
    /// Sentinels are consumed here: they only ever produce an `Ok` verdict.
    /// `Fail` is the single path to `Err`.
    pub fn resolve(self) -> Result<Verdict<T>, E> {
        match self {
            Flow::Continue(value) => Ok(Verdict {
                value: Some(value),
                stop: false,
            }),
            Flow::Break(value) => Ok(Verdict {
                value: Some(value),
                stop: true,
            }),
            Flow::Ignore => Ok(Verdict {
                value: None,
                stop: false,
            }),
            Flow::IgnoreAndBreak => Ok(Verdict {
                value: None,
                stop: true,
            }),
            Flow::Fail(error) => Err(error),
        }
    }

    /// `true` for `Break`, `Ignore` and `IgnoreAndBreak`
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Flow::Break(_) | Flow::Ignore | Flow::IgnoreAndBreak)
    }

    pub fn is_stop(&self) -> bool {
        self.outcome().stops()
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, Flow::Fail(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Flow<U, E> {
        match self {
            Flow::Continue(value) => Flow::Continue(f(value)),
            Flow::Break(value) => Flow::Break(f(value)),
            Flow::Ignore => Flow::Ignore,
            Flow::IgnoreAndBreak => Flow::IgnoreAndBreak,
            Flow::Fail(error) => Flow::Fail(error),
        }
    }

    pub fn map_err<E2>(self, f: impl FnOnce(E) -> E2) -> Flow<T, E2> {
        match self {
            Flow::Continue(value) => Flow::Continue(value),
            Flow::Break(value) => Flow::Break(value),
            Flow::Ignore => Flow::Ignore,
            Flow::IgnoreAndBreak => Flow::IgnoreAndBreak,
            Flow::Fail(error) => Flow::Fail(f(error)),
        }
    }
}

impl<E> Flow<(), E> {
    /// `Continue(())` when `keep` holds, `Ignore` otherwise.
    pub fn keep_if(keep: bool) -> Self {
        if keep { Flow::Continue(()) } else { Flow::Ignore }
    }
}

impl<T, E> From<Result<T, E>> for Flow<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Flow::Continue(value),
            Err(error) => Flow::Fail(error),
        }
    }
}
