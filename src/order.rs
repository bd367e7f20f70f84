// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Order relations: the caller-supplied, possibly failing total order.
//!
//! A set never compares values directly. Every comparison goes through an
//! [`OrderRelation`], which may refuse to order a pair. A refusal aborts the
//! operation in flight and is handed back to the caller unchanged.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::marker::PhantomData;

use thiserror::Error;

/// A total order over `T` whose comparisons may fail.
pub trait OrderRelation<T: ?Sized> {
    /// The error produced when two values cannot be compared.
    type Error;

    /// Return whether `a` orders strictly before `b`.
    fn less_than(&self, a: &T, b: &T) -> Result<bool, Self::Error>;

    /// Return whether `a` and `b` are equal under this order.
    fn equal(&self, a: &T, b: &T) -> Result<bool, Self::Error>;
}

/// The order given by `Ord`. Never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> OrderRelation<T> for Natural {
    type Error = Infallible;

    fn less_than(&self, a: &T, b: &T) -> Result<bool, Infallible> {
        return Ok(a < b);
    }

    fn equal(&self, a: &T, b: &T) -> Result<bool, Infallible> {
        return Ok(a.cmp(b) == Ordering::Equal);
    }
}

/// Raised by [`Partial`] when two values have no ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("values are not comparable")]
pub struct Incomparable;

/// The order given by `PartialOrd`, failing on unordered pairs such as NaN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Partial;

impl<T: PartialOrd + ?Sized> OrderRelation<T> for Partial {
    type Error = Incomparable;

    fn less_than(&self, a: &T, b: &T) -> Result<bool, Incomparable> {
        return match a.partial_cmp(b) {
            Some(ordering) => Ok(ordering == Ordering::Less),
            None => Err(Incomparable),
        };
    }

    fn equal(&self, a: &T, b: &T) -> Result<bool, Incomparable> {
        return match a.partial_cmp(b) {
            Some(ordering) => Ok(ordering == Ordering::Equal),
            None => Err(Incomparable),
        };
    }
}

/// An order defined by a closure returning `Result<Ordering, E>`.
///
/// ```
/// use std::cmp::Ordering;
/// use skipset::order::{FnOrder, OrderRelation};
///
/// let by_len: FnOrder<&str, _> =
///     FnOrder::new(|a: &&str, b: &&str| Ok::<Ordering, ()>(a.len().cmp(&b.len())));
/// assert_eq!(by_len.less_than(&"ab", &"abc"), Ok(true));
/// assert_eq!(by_len.equal(&"ab", &"cd"), Ok(true));
/// ```
pub struct FnOrder<T: ?Sized, F> {
    compare: F,
    _marker: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> FnOrder<T, F> {
    pub fn new(compare: F) -> FnOrder<T, F> {
        return FnOrder {
            compare,
            _marker: PhantomData,
        };
    }
}

impl<T: ?Sized, F: Clone> Clone for FnOrder<T, F> {
    fn clone(&self) -> Self {
        return FnOrder::new(self.compare.clone());
    }
}

impl<T: ?Sized, E, F> OrderRelation<T> for FnOrder<T, F>
where
    F: Fn(&T, &T) -> Result<Ordering, E>,
{
    type Error = E;

    fn less_than(&self, a: &T, b: &T) -> Result<bool, E> {
        return Ok((self.compare)(a, b)? == Ordering::Less);
    }

    fn equal(&self, a: &T, b: &T) -> Result<bool, E> {
        return Ok((self.compare)(a, b)? == Ordering::Equal);
    }
}
