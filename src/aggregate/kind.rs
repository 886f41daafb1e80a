//! Runtime selection of the built-in integer aggregates.

use super::{Aggregate, BitAnd, BitOr, BitXor, Gcd, Lcm, Max, Min, Sum};
use crate::error::ArithmeticError;
use core::fmt;
use core::marker::PhantomData;
use num_traits::PrimInt;

/// Tag for one of the built-in aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AggregateKind {
    /// See [`Sum`].
    Sum,
    /// See [`Min`].
    Min,
    /// See [`Max`].
    Max,
    /// See [`Gcd`].
    Gcd,
    /// See [`Lcm`].
    Lcm,
    /// See [`BitAnd`].
    BitAnd,
    /// See [`BitOr`].
    BitOr,
    /// See [`BitXor`].
    BitXor,
}

impl AggregateKind {
    /// Every built-in aggregate, in declaration order.
    pub const ALL: [AggregateKind; 8] = [
        AggregateKind::Sum,
        AggregateKind::Min,
        AggregateKind::Max,
        AggregateKind::Gcd,
        AggregateKind::Lcm,
        AggregateKind::BitAnd,
        AggregateKind::BitOr,
        AggregateKind::BitXor,
    ];

    /// Short lowercase name (`"sum"`, `"and"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            AggregateKind::Sum => "sum",
            AggregateKind::Min => "min",
            AggregateKind::Max => "max",
            AggregateKind::Gcd => "gcd",
            AggregateKind::Lcm => "lcm",
            AggregateKind::BitAnd => "and",
            AggregateKind::BitOr => "or",
            AggregateKind::BitXor => "xor",
        }
    }
}

impl fmt::Display for AggregateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A built-in aggregate chosen at run time.
///
/// Trees over `DynAggregate<T>` share one type regardless of kind, which lets
/// them live side by side in a collection.
pub struct DynAggregate<T> {
    kind: AggregateKind,
    _marker: PhantomData<fn() -> T>,
}

impl<T> DynAggregate<T> {
    /// Creates the aggregate for `kind`.
    pub const fn new(kind: AggregateKind) -> Self {
        Self {
            kind,
            _marker: PhantomData,
        }
    }

    /// The selected aggregate.
    pub const fn kind(&self) -> AggregateKind {
        self.kind
    }
}

impl<T> Clone for DynAggregate<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DynAggregate<T> {}

impl<T> fmt::Debug for DynAggregate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DynAggregate").field(&self.kind).finish()
    }
}

impl<T> From<AggregateKind> for DynAggregate<T> {
    fn from(kind: AggregateKind) -> Self {
        Self::new(kind)
    }
}

impl<T: PrimInt> Aggregate for DynAggregate<T> {
    type Value = T;

    fn identity(&self) -> T {
        match self.kind {
            AggregateKind::Sum => Sum::<T>::new().identity(),
            AggregateKind::Min => Min::<T>::new().identity(),
            AggregateKind::Max => Max::<T>::new().identity(),
            AggregateKind::Gcd => Gcd::<T>::new().identity(),
            AggregateKind::Lcm => Lcm::<T>::new().identity(),
            AggregateKind::BitAnd => BitAnd::<T>::new().identity(),
            AggregateKind::BitOr => BitOr::<T>::new().identity(),
            AggregateKind::BitXor => BitXor::<T>::new().identity(),
        }
    }

    fn merge(&self, lhs: &T, rhs: &T) -> Result<T, ArithmeticError> {
        match self.kind {
            AggregateKind::Sum => Sum::<T>::new().merge(lhs, rhs),
            AggregateKind::Min => Min::<T>::new().merge(lhs, rhs),
            AggregateKind::Max => Max::<T>::new().merge(lhs, rhs),
            AggregateKind::Gcd => Gcd::<T>::new().merge(lhs, rhs),
            AggregateKind::Lcm => Lcm::<T>::new().merge(lhs, rhs),
            AggregateKind::BitAnd => BitAnd::<T>::new().merge(lhs, rhs),
            AggregateKind::BitOr => BitOr::<T>::new().merge(lhs, rhs),
            AggregateKind::BitXor => BitXor::<T>::new().merge(lhs, rhs),
        }
    }
}
