#![doc = include_str!("README.md")]

/// Make a plain struct enumerable field by field, classified as
/// [`Category::AggregateStruct`].
///
/// Implements [`Arity`], [`Aggregate`], [`Fields`] and [`FieldsMut`]. Fields
/// are visited in declaration order, each with its index.
///
/// ```
/// # use enumerate::*;
/// #[aggregate]
/// struct Point {
///     x: i32,
///     y: i32,
///     z: i32,
/// }
///
/// let mut p = Point { x: 1, y: 2, z: 3 };
/// enumerate(&mut p).each_mut(|index: usize, value: &mut i32| *value *= index as i32);
/// assert_eq!((p.x, p.y, p.z), (0, 2, 6));
///
/// let mut sum = 0;
/// enumerate_with(&p, 2usize).each(|_: usize, value: &i32| sum += value);
/// assert_eq!(sum, 2);
/// ```
///
/// Use `#[aggregate(krate = path)]` when this crate is re-exported under
/// another path.
pub use enumerate_macro::aggregate;

/// Emits the classification event of a newly built wrapper.
macro_rules! trace_classified {
    ($tag:ty, $limit:expr) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(
            category = %<$tag as $crate::Tag>::CATEGORY,
            limit = ?$limit,
            "classified enumerate source"
        );
    };
}

mod classify;
mod each;
mod enumerated;
mod error;
mod index;
mod item;
mod iter;
pub mod sentinel;
mod string;
pub mod tag;

pub use classify::{Classify, ClassifyRaw, FixedArray, RangeLike};
pub use each::{Aggregate, Arity, Each, Fields, FieldsMut, TupleLike, Visitor, VisitorMut};
pub use enumerated::Enumerated;
pub use error::Error;
pub use index::Index;
pub use item::Indexed;
pub use iter::{Iter, Limit, Unbounded};
pub use sentinel::Sentinel;
pub use string::{Character, NulTerminated};
pub use tag::{Category, Tag};

/// Enumerates `source` with its natural index type.
///
/// Containers, iterators, fixed arrays, C strings, tuples and
/// [`aggregate`] structs are accepted; the [`Category`] is chosen at compile
/// time.
///
/// ```
/// # use enumerate::enumerate;
/// let mut v = vec![10, 20, 30];
/// for item in enumerate(&mut v) {
///     *item.value += item.index;
/// }
/// assert_eq!(v, [10, 21, 32]);
///
/// let s: Vec<_> = enumerate(c"01234")
///     .into_iter()
///     .map(|item| (item.index, *item.value))
///     .collect();
/// assert_eq!(s[3], (3, b'3'));
/// assert_eq!(s.len(), 5);
/// ```
#[inline]
pub fn enumerate<S, M>(source: S) -> <S as Classify<(), M>>::Output<<S as Classify<(), M>>::Size>
where
    S: Classify<(), M>,
    M: Tag,
{
    <S as Classify<(), M>>::classify(source, ())
}

/// Enumerates `source` with a second argument: an element-count bound, or a
/// [`Sentinel`] for an iterator.
///
/// A bound larger than the source is harmless; iteration stops at whichever
/// comes first.
///
/// ```
/// # use enumerate::enumerate_with;
/// let v = vec!['a', 'b', 'c', 'd'];
/// let firsts: Vec<_> = enumerate_with(&v, 2u32).into_iter().map(|i| *i.value).collect();
/// assert_eq!(firsts, ['a', 'b']);
///
/// let all = enumerate_with([1, 2], 10usize).into_iter().count();
/// assert_eq!(all, 2);
/// ```
#[inline]
pub fn enumerate_with<S, X, M>(
    source: S,
    second: X,
) -> <S as Classify<X, M>>::Output<<S as Classify<X, M>>::Size>
where
    S: Classify<X, M>,
    M: Tag,
{
    <S as Classify<X, M>>::classify(source, second)
}

/// [`enumerate`] with index type `I`.
///
/// ```
/// # use enumerate::enumerate_as;
/// let last = enumerate_as::<i8, _, _>(vec![(); 5]).into_iter().last();
/// assert_eq!(last.map(|i| i.index), Some(4i8));
/// ```
#[inline]
pub fn enumerate_as<I, S, M>(source: S) -> <S as Classify<(), M>>::Output<I>
where
    I: Index,
    S: Classify<(), M>,
    M: Tag,
{
    <S as Classify<(), M>>::classify(source, ())
}

/// [`enumerate_with`] with index type `I`.
#[inline]
pub fn enumerate_as_with<I, S, X, M>(source: S, second: X) -> <S as Classify<X, M>>::Output<I>
where
    I: Index,
    S: Classify<X, M>,
    M: Tag,
{
    <S as Classify<X, M>>::classify(source, second)
}

/// Checked [`enumerate_with`].
///
/// Negative bounds and inverted iterator spans are reported instead of
/// asserted. So are positions the index type cannot represent, whenever the
/// length of the source or the bound caps them: an unbounded iterator without
/// an upper size hint, or a user [`RangeLike`] without
/// [`known_len`](RangeLike::known_len), is only checked while iterating.
///
/// ```
/// # use enumerate::{try_enumerate_with, Error};
/// let v = [1, 2, 3];
/// assert_eq!(
///     try_enumerate_with(&v, -1i32).err(),
///     Some(Error::NegativeBound { bound: -1 })
/// );
/// assert!(try_enumerate_with(&v, 2i32).is_ok());
/// ```
#[inline]
pub fn try_enumerate_with<S, X, M>(
    source: S,
    second: X,
) -> Result<<S as Classify<X, M>>::Output<<S as Classify<X, M>>::Size>, Error>
where
    S: Classify<X, M>,
    M: Tag,
{
    <S as Classify<X, M>>::try_classify(source, second)
}

/// Checked [`enumerate_as_with`].
///
/// ```
/// # use enumerate::{try_enumerate_as_with, Error};
/// let wide = [0u8; 300];
/// assert!(try_enumerate_as_with::<u8, _, _, _>(&wide, 300usize).is_err());
/// assert!(try_enumerate_as_with::<u8, _, _, _>(&wide, 256usize).is_ok());
/// ```
#[inline]
pub fn try_enumerate_as_with<I, S, X, M>(
    source: S,
    second: X,
) -> Result<<S as Classify<X, M>>::Output<I>, Error>
where
    I: Index,
    S: Classify<X, M>,
    M: Tag,
{
    <S as Classify<X, M>>::try_classify(source, second)
}

/// Enumerates a terminated character run starting at `ptr`.
///
/// # Safety
///
/// See [`ClassifyRaw::classify_raw`]. The returned wrapper borrows the
/// characters for a caller-chosen lifetime `'a`.
///
/// ```
/// # use enumerate::enumerate_raw;
/// let wide: [u16; 3] = [104, 105, 0];
/// let n = unsafe { enumerate_raw(wide.as_ptr()) }.into_iter().count();
/// assert_eq!(n, 2);
/// ```
#[inline]
pub unsafe fn enumerate_raw<'a, P, M>(
    ptr: P,
) -> <P as ClassifyRaw<'a, (), M>>::Output<<P as ClassifyRaw<'a, (), M>>::Size>
where
    P: ClassifyRaw<'a, (), M>,
    M: Tag,
{
    unsafe { <P as ClassifyRaw<'a, (), M>>::classify_raw(ptr, ()) }
}

/// Enumerates the elements between two pointers, or `count` elements from one
/// pointer.
///
/// # Safety
///
/// See [`ClassifyRaw::classify_raw`].
///
/// ```
/// # use enumerate::enumerate_raw_with;
/// let mut v = [1, 2, 3, 4];
/// let range = v.as_mut_ptr_range();
/// for item in unsafe { enumerate_raw_with(range.start, range.end) } {
///     *item.value *= 2;
/// }
/// assert_eq!(v, [2, 4, 6, 8]);
///
/// let total: i32 = unsafe { enumerate_raw_with(v.as_ptr(), 3usize) }
///     .into_iter()
///     .map(|i| *i.value)
///     .sum();
/// assert_eq!(total, 12);
/// ```
#[inline]
pub unsafe fn enumerate_raw_with<'a, P, X, M>(
    ptr: P,
    second: X,
) -> <P as ClassifyRaw<'a, X, M>>::Output<<P as ClassifyRaw<'a, X, M>>::Size>
where
    P: ClassifyRaw<'a, X, M>,
    M: Tag,
{
    unsafe { <P as ClassifyRaw<'a, X, M>>::classify_raw(ptr, second) }
}

/// [`enumerate_raw`] with index type `I`.
///
/// # Safety
///
/// See [`ClassifyRaw::classify_raw`].
#[inline]
pub unsafe fn enumerate_raw_as<'a, I, P, M>(ptr: P) -> <P as ClassifyRaw<'a, (), M>>::Output<I>
where
    I: Index,
    P: ClassifyRaw<'a, (), M>,
    M: Tag,
{
    unsafe { <P as ClassifyRaw<'a, (), M>>::classify_raw(ptr, ()) }
}

/// [`enumerate_raw_with`] with index type `I`.
///
/// # Safety
///
/// See [`ClassifyRaw::classify_raw`].
#[inline]
pub unsafe fn enumerate_raw_as_with<'a, I, P, X, M>(
    ptr: P,
    second: X,
) -> <P as ClassifyRaw<'a, X, M>>::Output<I>
where
    I: Index,
    P: ClassifyRaw<'a, X, M>,
    M: Tag,
{
    unsafe { <P as ClassifyRaw<'a, X, M>>::classify_raw(ptr, second) }
}

/// Checked [`enumerate_raw_with`].
///
/// # Safety
///
/// See [`ClassifyRaw::try_classify_raw`].
///
/// ```
/// # use enumerate::{try_enumerate_raw_with, Error};
/// let v = [1, 2, 3];
/// let range = v.as_ptr_range();
/// let inverted = unsafe { try_enumerate_raw_with(range.end, range.start) };
/// assert_eq!(inverted.err(), Some(Error::InvertedRange { excess: 3 }));
/// ```
#[inline]
pub unsafe fn try_enumerate_raw_with<'a, P, X, M>(
    ptr: P,
    second: X,
) -> Result<<P as ClassifyRaw<'a, X, M>>::Output<<P as ClassifyRaw<'a, X, M>>::Size>, Error>
where
    P: ClassifyRaw<'a, X, M>,
    M: Tag,
{
    unsafe { <P as ClassifyRaw<'a, X, M>>::try_classify_raw(ptr, second) }
}

/// Enumerates a source, or an argument pack.
///
/// - `enumerate!(source)` is [`enumerate`]`(source)`.
/// - `enumerate!(a, b, c)` and `enumerate!(AsArray, a, ..)` collect same-typed
///   values into an array ([`Category::VariadicArray`]).
/// - `enumerate!(AsTuple, a, ..)` keeps values of any types as a tuple, visited
///   with [`Each::each`] ([`Category::VariadicTuple`]).
/// - A leading `as I;` selects the index type for any of the above.
///
/// ```
/// # use enumerate::{enumerate, Category};
/// let pairs: Vec<_> = enumerate!(0, 10, 20, 30, 40).into_iter().map(|i| i.into_pair()).collect();
/// assert_eq!(pairs, [(0, 0), (1, 10), (2, 20), (3, 30), (4, 40)]);
///
/// let single = enumerate!(AsArray, 'z');
/// assert_eq!(single.category(), Category::VariadicArray);
///
/// let mut names = Vec::new();
/// enumerate!(as u8; AsTuple, "one", "two").each(|index: u8, value: &&str| {
///     names.push(format!("{index}:{value}"));
/// });
/// assert_eq!(names, ["0:one", "1:two"]);
///
/// let v = vec![1, 2];
/// let last = enumerate!(as i64; &v).into_iter().last().map(|i| i.index);
/// assert_eq!(last, Some(1i64));
/// ```
#[macro_export]
macro_rules! enumerate {
    (as $index:ty; AsTuple $(, $value:expr)+ $(,)?) => {
        $crate::_imp::variadic_tuple(($($value,)+)).index_as::<$index>()
    };
    (as $index:ty; AsArray $(, $value:expr)+ $(,)?) => {
        $crate::_imp::variadic_array([$($value),+]).index_as::<$index>()
    };
    (as $index:ty; $source:expr $(,)?) => {
        $crate::enumerate_as::<$index, _, _>($source)
    };
    (as $index:ty; $($value:expr),+ $(,)?) => {
        $crate::_imp::variadic_array([$($value),+]).index_as::<$index>()
    };
    (AsTuple $(, $value:expr)+ $(,)?) => {
        $crate::_imp::variadic_tuple(($($value,)+))
    };
    (AsArray $(, $value:expr)+ $(,)?) => {
        $crate::_imp::variadic_array([$($value),+])
    };
    ($source:expr $(,)?) => {
        $crate::enumerate($source)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::_imp::variadic_array([$($value),+])
    };
}

#[doc(hidden)]
pub mod _imp {
    use crate::{tag, Each, Enumerated, TupleLike, Unbounded};

    #[inline]
    pub fn variadic_array<T, const N: usize>(
        values: [T; N],
    ) -> Enumerated<[T; N], usize, tag::VariadicArray> {
        Enumerated::new(values, Unbounded)
    }

    #[inline]
    pub fn variadic_tuple<S: TupleLike>(values: S) -> Each<S, usize, tag::VariadicTuple> {
        Each::new(values, None)
    }
}
