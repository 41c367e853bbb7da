//! `Maybe<T>`: the two-variant presence/absence union.
//!
//! Deliberately a plain tagged union rather than a re-export of `Option`, so
//! the substrate's own machinery (tags, dispatch tables, `when`) applies to
//! it. `Option` interop exists, but only as an explicit bridge.

use crate::tagged_union;
use crate::variant::Tagged;

tagged_union! {
    #[derive(Debug, Clone)]
    pub enum Maybe<T> {
        Present(T),
        Absent,
    }
}

impl<T> Maybe<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Maybe::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Maybe::Absent)
    }

    /// The contained value, or `fallback` when absent.
    pub fn get_or(self, fallback: T) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => fallback,
        }
    }

    /// Like [`Maybe::get_or`], computing the fallback lazily.
    pub fn get_or_else(self, fallback: impl FnOnce() -> T) -> T {
        match self {
            Maybe::Present(value) => value,
            Maybe::Absent => fallback(),
        }
    }

    /// Applies `f` to a present value; absence passes through.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        match self {
            Maybe::Present(value) => Maybe::Present(f(value)),
            Maybe::Absent => Maybe::Absent,
        }
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Present(value) => Maybe::Present(value),
            Maybe::Absent => Maybe::Absent,
        }
    }

    /// Tag-only comparison: true iff both sides are `Present` or both are
    /// `Absent`, ignoring payloads.
    ///
    /// Unlike `==` this asks nothing of `T`, so two `Absent` values compare
    /// equal even when `T` has no equality definition at all.
    pub fn same_variant(&self, other: &Self) -> bool {
        self.tag() == other.tag()
    }

    /// Bridge out to the raw `Option` form.
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Present(value) => Some(value),
            Maybe::Absent => None,
        }
    }
}

/// Compatibility shim for callers still handing out raw `Option`s; the
/// two-variant form is the canonical one.
impl<T> From<Option<T>> for Maybe<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(value) => Maybe::Present(value),
            None => Maybe::Absent,
        }
    }
}

impl<T: PartialEq> PartialEq for Maybe<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Maybe::Present(a), Maybe::Present(b)) => a == b,
            (Maybe::Absent, Maybe::Absent) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Maybe<T> {}
