//! Classification tags.
//!
//! [`Category`] is the closed set of iteration strategies. The unit structs in
//! this module are the markers the compiler infers when resolving
//! [`Classify`](crate::Classify); each one names the category it selects.
//! Several markers can share a category, for instance a [`RangeLike`](crate::RangeLike)
//! container and a bare iterator are both [`Category::Container`].

use core::fmt;

/// Iteration strategy chosen for a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Heterogeneous argument pack, visited with `each`.
    VariadicTuple,
    /// Homogeneous argument pack, materialized into an array.
    VariadicArray,
    /// Two raw pointers delimiting a run of elements.
    IteratorPointerPair,
    /// An iterator and a [`Sentinel`](crate::Sentinel) marking its end.
    IteratorSentinelPair,
    /// A range-like container or an iterator.
    Container,
    /// A range-like container or an iterator with an explicit bound.
    ContainerWithLimit,
    /// A tuple.
    TupleLike,
    /// A raw pointer and an element count.
    PointerWithSize,
    /// A string that ends at its terminator character.
    NullTerminatedString,
    /// A fixed-size array, optionally bounded.
    FixedArray,
    /// A struct annotated with [`aggregate`](crate::aggregate).
    AggregateStruct,
}

impl Category {
    /// Kebab-case name, as used in trace events.
    pub const fn name(self) -> &'static str {
        match self {
            Self::VariadicTuple => "variadic-tuple",
            Self::VariadicArray => "variadic-array",
            Self::IteratorPointerPair => "iterator-pointer-pair",
            Self::IteratorSentinelPair => "iterator-sentinel-pair",
            Self::Container => "container",
            Self::ContainerWithLimit => "container-with-limit",
            Self::TupleLike => "tuple-like",
            Self::PointerWithSize => "pointer-with-size",
            Self::NullTerminatedString => "null-terminated-string",
            Self::FixedArray => "fixed-array",
            Self::AggregateStruct => "aggregate-struct",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Marker type selecting one [`Category`].
pub trait Tag: 'static {
    const CATEGORY: Category;
}

macro_rules! tags {
    ($($(#[$attr:meta])* $name:ident => $category:ident;)*) => {$(
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name;

        impl Tag for $name {
            const CATEGORY: Category = Category::$category;
        }
    )*};
}

tags! {
    /// `enumerate!(AsTuple, ..)`
    VariadicTuple => VariadicTuple;
    /// `enumerate!(a, b, ..)` and `enumerate!(AsArray, ..)`
    VariadicArray => VariadicArray;
    /// Two raw pointers.
    PointerPair => IteratorPointerPair;
    /// An iterator and a sentinel.
    Sentinel => IteratorSentinelPair;
    /// A [`RangeLike`](crate::RangeLike) container.
    Container => Container;
    /// Any [`Iterator`].
    Iterator => Container;
    /// A [`RangeLike`](crate::RangeLike) container with a bound.
    ContainerLimit => ContainerWithLimit;
    /// Any [`Iterator`] with a bound.
    IteratorLimit => ContainerWithLimit;
    /// A `&str` or `&String`, iterated by `char`.
    Text => Container;
    /// A `&str` or `&String` with a bound.
    TextLimit => ContainerWithLimit;
    /// A tuple, optionally bounded.
    Tuple => TupleLike;
    /// A raw pointer and a count.
    PointerSize => PointerWithSize;
    /// A `&CStr` or a raw pointer to a terminated character run.
    String => NullTerminatedString;
    /// `[T; N]`, `&[T; N]` or `&mut [T; N]`, optionally bounded.
    FixedArray => FixedArray;
    /// An [`Aggregate`](crate::Aggregate) struct, optionally bounded.
    Aggregate => AggregateStruct;
}
