//! Index-aware visitation of heterogeneous sequences.
//!
//! Tuples and [`aggregate`](crate::aggregate) structs hold fields of different
//! types, so they cannot be iterated. Instead a visitor is called once per
//! field, in field order, with the field's index and a reference to it. Each
//! call is resolved statically against the field's own type.
//!
//! A closure visitor works when every field has the same type. Anything else
//! takes a visitor type implementing [`Visitor`] for every field type:
//!
//! ```
//! # use enumerate::{enumerate, Visitor};
//! # use std::fmt::Debug;
//! struct Render(Vec<String>);
//!
//! impl<T: Debug> Visitor<usize, T> for Render {
//!     fn visit(&mut self, index: usize, value: &T) {
//!         self.0.push(format!("{index}={value:?}"));
//!     }
//! }
//!
//! let Render(out) = enumerate((1u8, "two", 3.0f32)).each(Render(Vec::new()));
//! assert_eq!(out, ["0=1", "1=\"two\"", "2=3.0"]);
//! ```

use crate::{Category, Index, Tag};
use core::marker::PhantomData;

/// Receives shared references to the fields of a heterogeneous sequence.
pub trait Visitor<I, T: ?Sized> {
    fn visit(&mut self, index: I, value: &T);
}

impl<I, T: ?Sized, F> Visitor<I, T> for F
where
    F: FnMut(I, &T),
{
    #[inline]
    fn visit(&mut self, index: I, value: &T) {
        self(index, value)
    }
}

/// Receives mutable references to the fields of a heterogeneous sequence.
pub trait VisitorMut<I, T: ?Sized> {
    fn visit_mut(&mut self, index: I, value: &mut T);
}

impl<I, T: ?Sized, F> VisitorMut<I, T> for F
where
    F: FnMut(I, &mut T),
{
    #[inline]
    fn visit_mut(&mut self, index: I, value: &mut T) {
        self(index, value)
    }
}

/// Number of fields, known at compile time.
pub trait Arity {
    const ARITY: usize;
}

impl<'a, S: Arity + ?Sized> Arity for &'a S {
    const ARITY: usize = S::ARITY;
}

impl<'a, S: Arity + ?Sized> Arity for &'a mut S {
    const ARITY: usize = S::ARITY;
}

/// Calls `V` with each of the first `limit` fields, in order.
pub trait Fields<V, I>: Arity {
    fn visit_fields(&self, visitor: &mut V, limit: usize);
}

/// Calls `V` with a mutable reference to each of the first `limit` fields, in
/// order. Not implemented through shared references.
pub trait FieldsMut<V, I>: Arity {
    fn visit_fields_mut(&mut self, visitor: &mut V, limit: usize);
}

impl<'a, V, I, S: Fields<V, I> + ?Sized> Fields<V, I> for &'a S {
    #[inline]
    fn visit_fields(&self, visitor: &mut V, limit: usize) {
        (**self).visit_fields(visitor, limit)
    }
}

impl<'a, V, I, S: Fields<V, I> + ?Sized> Fields<V, I> for &'a mut S {
    #[inline]
    fn visit_fields(&self, visitor: &mut V, limit: usize) {
        (**self).visit_fields(visitor, limit)
    }
}

impl<'a, V, I, S: FieldsMut<V, I> + ?Sized> FieldsMut<V, I> for &'a mut S {
    #[inline]
    fn visit_fields_mut(&mut self, visitor: &mut V, limit: usize) {
        (**self).visit_fields_mut(visitor, limit)
    }
}

/// Tuples, classified as [`Category::TupleLike`].
pub trait TupleLike: Arity {}

impl<'a, S: TupleLike + ?Sized> TupleLike for &'a S {}
impl<'a, S: TupleLike + ?Sized> TupleLike for &'a mut S {}

/// Structs annotated with [`aggregate`](crate::aggregate), classified as
/// [`Category::AggregateStruct`].
pub trait Aggregate: Arity {}

impl<'a, S: Aggregate + ?Sized> Aggregate for &'a S {}
impl<'a, S: Aggregate + ?Sized> Aggregate for &'a mut S {}

macro_rules! impl_for_tuple {
    (@count) => {0usize};
    (@count $_:ident $($t:ident)*) => {
        impl_for_tuple!(@count $($t)*) + 1
    };
    ($($idx:tt $T:ident),+) => {
        impl<$($T),+> Arity for ($($T,)+) {
            const ARITY: usize = impl_for_tuple!(@count $($T)+);
        }

        impl<$($T),+> TupleLike for ($($T,)+) {}

        impl<__V, __I: Index, $($T),+> Fields<__V, __I> for ($($T,)+)
        where
            $(__V: Visitor<__I, $T>,)+
        {
            #[inline]
            fn visit_fields(&self, visitor: &mut __V, limit: usize) {
                $(
                    if $idx == limit {
                        return;
                    }
                    <__V as Visitor<__I, $T>>::visit(visitor, __I::from_usize($idx), &self.$idx);
                )+
            }
        }

        impl<__V, __I: Index, $($T),+> FieldsMut<__V, __I> for ($($T,)+)
        where
            $(__V: VisitorMut<__I, $T>,)+
        {
            #[inline]
            fn visit_fields_mut(&mut self, visitor: &mut __V, limit: usize) {
                $(
                    if $idx == limit {
                        return;
                    }
                    <__V as VisitorMut<__I, $T>>::visit_mut(visitor, __I::from_usize($idx), &mut self.$idx);
                )+
            }
        }
    };
}

impl_for_tuple!(0 T0);
impl_for_tuple!(0 T0, 1 T1);
impl_for_tuple!(0 T0, 1 T1, 2 T2);
impl_for_tuple!(0 T0, 1 T1, 2 T2, 3 T3);
impl_for_tuple!(0 T0, 1 T1, 2 T2, 3 T3, 4 T4);
impl_for_tuple!(0 T0, 1 T1, 2 T2, 3 T3, 4 T4, 5 T5);
impl_for_tuple!(0 T0, 1 T1, 2 T2, 3 T3, 4 T4, 5 T5, 6 T6);
impl_for_tuple!(0 T0, 1 T1, 2 T2, 3 T3, 4 T4, 5 T5, 6 T6, 7 T7);

#[cfg(feature = "large-tuples")]
mod large_tuples {
    use super::*;

    impl_for_tuple!(0 T0, 1 T1, 2 T2, 3 T3, 4 T4, 5 T5, 6 T6, 7 T7, 8 T8);
    impl_for_tuple!(0 T0, 1 T1, 2 T2, 3 T3, 4 T4, 5 T5, 6 T6, 7 T7, 8 T8, 9 T9);
    impl_for_tuple!(0 T0, 1 T1, 2 T2, 3 T3, 4 T4, 5 T5, 6 T6, 7 T7, 8 T8, 9 T9, 10 T10);
    impl_for_tuple!(0 T0, 1 T1, 2 T2, 3 T3, 4 T4, 5 T5, 6 T6, 7 T7, 8 T8, 9 T9, 10 T10, 11 T11);
}

/// Wrapper for tuples, argument packs and aggregate structs.
///
/// Visits the first `min(arity, limit)` fields with [`Each::each`], or with
/// [`Each::each_mut`] when the source is owned or mutably borrowed:
///
/// ```
/// # use enumerate::{enumerate, enumerate_with};
/// let mut pair = (1, 2);
/// enumerate(&mut pair).each_mut(|index: usize, value: &mut i32| *value += index as i32 * 10);
/// assert_eq!(pair, (1, 12));
///
/// let mut seen = 0;
/// enumerate_with((1, 2, 3), 2usize).each(|_: usize, _: &i32| seen += 1);
/// assert_eq!(seen, 2);
/// ```
///
/// Shared sources stay shared:
///
/// ```compile_fail
/// # use enumerate::enumerate;
/// let pair = (1, 2);
/// enumerate(&pair).each_mut(|_: usize, value: &mut i32| *value = 0);
/// ```
#[derive(Debug, Clone, Copy)]
#[must_use = "`Each` does nothing until visited"]
pub struct Each<S, I, M> {
    source: S,
    limit: Option<usize>,
    marker: PhantomData<fn() -> (I, M)>,
}

impl<S: Arity, I: Index, M: Tag> Each<S, I, M> {
    #[inline]
    pub(crate) fn new(source: S, limit: Option<usize>) -> Self {
        trace_classified!(M, limit);
        Self {
            source,
            limit,
            marker: PhantomData,
        }
    }

    /// Visits shared references to the fields, returning the visitor.
    #[inline]
    pub fn each<V>(&self, mut visitor: V) -> V
    where
        S: Fields<V, I>,
    {
        self.source.visit_fields(&mut visitor, self.visited());
        visitor
    }

    /// Visits mutable references to the fields, returning the visitor.
    #[inline]
    pub fn each_mut<V>(&mut self, mut visitor: V) -> V
    where
        S: FieldsMut<V, I>,
    {
        self.source.visit_fields_mut(&mut visitor, self.visited());
        visitor
    }

    /// Number of fields of the source.
    #[inline]
    pub fn arity(&self) -> usize {
        S::ARITY
    }

    /// Number of fields that get visited.
    #[inline]
    pub fn len(&self) -> usize {
        self.visited()
    }

    #[inline]
    fn visited(&self) -> usize {
        self.limit.map_or(S::ARITY, |limit| S::ARITY.min(limit))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    #[inline]
    pub fn category(&self) -> Category {
        M::CATEGORY
    }

    /// Same source and bound, visited with indices of type `J`.
    #[inline]
    pub fn index_as<J: Index>(self) -> Each<S, J, M> {
        Each {
            source: self.source,
            limit: self.limit,
            marker: PhantomData,
        }
    }

    #[inline]
    pub fn into_inner(self) -> S {
        self.source
    }
}
