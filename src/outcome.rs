//! `Outcome<T, E>`: success-with-value or failure-with-error.
//!
//! The return shape for fallible collaborators — a database save, a config
//! read — that would otherwise signal by throwing. Callers branch with an
//! exhaustive `match` or a dispatch table; nothing propagates invisibly.

use crate::maybe::Maybe;
use crate::tagged_union;

tagged_union! {
    #[derive(Debug, Clone, PartialEq)]
    pub enum Outcome<T, E> {
        Success(T),
        Failure(E),
    }
}

impl<T, E> Outcome<T, E> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Applies `f` to a success value; failures pass through.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies `f` to a failure's error; successes pass through.
    pub fn map_failure<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// The success value, or `fallback` on failure.
    pub fn success_or(self, fallback: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => fallback,
        }
    }

    /// The opt-in adapter into [`Maybe`], dropping the error detail.
    ///
    /// This is the only path between the two wrappers; there is no `From`
    /// impl, so the conversion never happens behind the caller's back.
    pub fn discard_failure(self) -> Maybe<T> {
        match self {
            Outcome::Success(value) => Maybe::Present(value),
            Outcome::Failure(_) => Maybe::Absent,
        }
    }
}
