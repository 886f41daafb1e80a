//! Merge policies for segment trees.
//!
//! A segment tree is built for exactly one [`Aggregate`]: every internal node
//! stores the aggregate of its children, so queries are only meaningful for the
//! aggregate the tree was built with. To answer several kinds of query over the
//! same data, build one tree per aggregate (see [`MultiSegmentTree`]).
//!
//! Built-in aggregates are zero-sized and generic over the primitive integer
//! types:
//!
//! | Aggregate | Merge | Identity |
//! |-----------|-------|----------|
//! | [`Sum`] | `a + b` (checked) | `0` |
//! | [`Min`] | `min(a, b)` | `T::max_value()` |
//! | [`Max`] | `max(a, b)` | `T::min_value()` |
//! | [`Gcd`] | [`gcd`] | `0` |
//! | [`Lcm`] | [`lcm`] | `1` |
//! | [`BitAnd`] | `a & b` | `!0` |
//! | [`BitOr`] | `a \| b` | `0` |
//! | [`BitXor`] | `a ^ b` | `0` |
//!
//! [`MultiSegmentTree`]: crate::MultiSegmentTree

mod arith;
mod kind;

pub use arith::{gcd, lcm};
pub use kind::{AggregateKind, DynAggregate};

use crate::error::ArithmeticError;
use core::fmt;
use core::marker::PhantomData;
use num_traits::PrimInt;

/// An associative, commutative merge function together with its identity.
///
/// Implementations must uphold, for all `a`, `b`, `c`:
/// - `merge(a, merge(b, c)) == merge(merge(a, b), c)`
/// - `merge(a, b) == merge(b, a)`
/// - `merge(a, identity()) == a` (up to normalization, e.g. `gcd` returns `|a|`)
pub trait Aggregate {
    /// The element type stored in the tree.
    type Value: Clone;

    /// The neutral element of [`merge`](Aggregate::merge).
    fn identity(&self) -> Self::Value;

    /// Combines two sub-range summaries.
    ///
    /// # Errors
    /// Returns an [`ArithmeticError`] when the combined value is undefined or
    /// not representable.
    fn merge(&self, lhs: &Self::Value, rhs: &Self::Value) -> Result<Self::Value, ArithmeticError>;
}

macro_rules! integer_aggregate {
    ($(#[$meta:meta])* $name:ident => $kind:ident) => {
        $(#[$meta])*
        pub struct $name<T>(PhantomData<fn() -> T>);

        impl<T> $name<T> {
            /// Creates the aggregate.
            pub const fn new() -> Self {
                Self(PhantomData)
            }

            /// The runtime tag for this aggregate.
            pub const KIND: AggregateKind = AggregateKind::$kind;
        }

        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $name<T> {}

        impl<T> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))
            }
        }
    };
}

integer_aggregate! {
    /// Range sum. Overflow is reported, never wrapped.
    Sum => Sum
}
integer_aggregate! {
    /// Range minimum.
    Min => Min
}
integer_aggregate! {
    /// Range maximum.
    Max => Max
}
integer_aggregate! {
    /// Range greatest common divisor (non-negative).
    Gcd => Gcd
}
integer_aggregate! {
    /// Range least common multiple (non-negative). Two zero operands are an error.
    Lcm => Lcm
}
integer_aggregate! {
    /// Range bitwise AND. The identity has every bit set.
    BitAnd => BitAnd
}
integer_aggregate! {
    /// Range bitwise OR.
    BitOr => BitOr
}
integer_aggregate! {
    /// Range bitwise XOR.
    BitXor => BitXor
}

impl<T: PrimInt> Aggregate for Sum<T> {
    type Value = T;

    fn identity(&self) -> T {
        T::zero()
    }

    fn merge(&self, lhs: &T, rhs: &T) -> Result<T, ArithmeticError> {
        lhs.checked_add(rhs).ok_or(ArithmeticError::Overflow)
    }
}

impl<T: PrimInt> Aggregate for Min<T> {
    type Value = T;

    fn identity(&self) -> T {
        T::max_value()
    }

    fn merge(&self, lhs: &T, rhs: &T) -> Result<T, ArithmeticError> {
        Ok((*lhs).min(*rhs))
    }
}

impl<T: PrimInt> Aggregate for Max<T> {
    type Value = T;

    fn identity(&self) -> T {
        T::min_value()
    }

    fn merge(&self, lhs: &T, rhs: &T) -> Result<T, ArithmeticError> {
        Ok((*lhs).max(*rhs))
    }
}

impl<T: PrimInt> Aggregate for Gcd<T> {
    type Value = T;

    fn identity(&self) -> T {
        T::zero()
    }

    fn merge(&self, lhs: &T, rhs: &T) -> Result<T, ArithmeticError> {
        gcd(*lhs, *rhs)
    }
}

impl<T: PrimInt> Aggregate for Lcm<T> {
    type Value = T;

    fn identity(&self) -> T {
        T::one()
    }

    fn merge(&self, lhs: &T, rhs: &T) -> Result<T, ArithmeticError> {
        lcm(*lhs, *rhs)
    }
}

impl<T: PrimInt> Aggregate for BitAnd<T> {
    type Value = T;

    fn identity(&self) -> T {
        !T::zero()
    }

    fn merge(&self, lhs: &T, rhs: &T) -> Result<T, ArithmeticError> {
        Ok(*lhs & *rhs)
    }
}

impl<T: PrimInt> Aggregate for BitOr<T> {
    type Value = T;

    fn identity(&self) -> T {
        T::zero()
    }

    fn merge(&self, lhs: &T, rhs: &T) -> Result<T, ArithmeticError> {
        Ok(*lhs | *rhs)
    }
}

impl<T: PrimInt> Aggregate for BitXor<T> {
    type Value = T;

    fn identity(&self) -> T {
        T::zero()
    }

    fn merge(&self, lhs: &T, rhs: &T) -> Result<T, ArithmeticError> {
        Ok(*lhs ^ *rhs)
    }
}

/// An aggregate defined by a closure and an explicit identity.
///
/// The closure must be associative and commutative; it cannot fail.
///
/// ```rust
/// use segtree::{Custom, SegmentTree};
///
/// let product = Custom::new(|a: &u64, b: &u64| a * b, 1);
/// let tree = SegmentTree::with_aggregate(&[2, 3, 4], product).unwrap();
/// assert_eq!(tree.query(0, 2).unwrap(), 24);
/// ```
#[derive(Clone)]
pub struct Custom<T, F> {
    combinator: F,
    identity: T,
}

impl<T, F> Custom<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    /// Creates an aggregate from a `combinator` and its neutral element.
    pub fn new(combinator: F, identity: T) -> Self {
        Self {
            combinator,
            identity,
        }
    }
}

impl<T, F> Aggregate for Custom<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    type Value = T;

    fn identity(&self) -> T {
        self.identity.clone()
    }

    fn merge(&self, lhs: &T, rhs: &T) -> Result<T, ArithmeticError> {
        Ok((self.combinator)(lhs, rhs))
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Custom<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Custom")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}
