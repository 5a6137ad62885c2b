//! Compile-time classification of enumerate sources.
//!
//! Every supported `(source, second argument)` combination has exactly one
//! impl of [`Classify`] (or [`ClassifyRaw`] for raw pointers), keyed by a
//! marker type from [`tag`]. The entry points leave the marker to inference,
//! so the compiler picks the only impl whose bounds hold:
//!
//! | source | second | marker |
//! |---|---|---|
//! | `It: Iterator` | `E: Sentinel<It>` | [`tag::Sentinel`] |
//! | `C: RangeLike` | none | [`tag::Container`] |
//! | `It: Iterator` | none | [`tag::Iterator`] |
//! | `C: RangeLike` | `N: Index` | [`tag::ContainerLimit`] |
//! | `It: Iterator` | `N: Index` | [`tag::IteratorLimit`] |
//! | `&str`, `&String` | none | [`tag::Text`] |
//! | `&str`, `&String` | `N: Index` | [`tag::TextLimit`] |
//! | `S: TupleLike` | none or `N: Index` | [`tag::Tuple`] |
//! | `&CStr` | none | [`tag::String`] |
//! | `A: FixedArray` | none or `N: Index` | [`tag::FixedArray`] |
//! | `S: Aggregate` | none or `N: Index` | [`tag::Aggregate`] |
//! | `*const T`, `*mut T` | same pointer type | [`tag::PointerPair`] (raw) |
//! | `*const T`, `*mut T` | `N: Index` | [`tag::PointerSize`] (raw) |
//! | `*const C` | none | [`tag::String`] (raw) |
//!
//! No std type satisfies two rows. A source with no row, or a user type that
//! opts into two of them, is rejected at compile time.
//!
//! ```compile_fail
//! # use enumerate::enumerate;
//! // a float is not a sequence
//! enumerate(3.5f64);
//! ```

use crate::{
    tag, Aggregate, Character, Each, Enumerated, Error, Index, NulTerminated, Sentinel, Tag,
    TupleLike, Unbounded,
};
use core::ffi::CStr;
use core::mem::size_of;
use core::slice;
use core::str::Chars;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};

/// A source classified under marker `M`, with `X` as the second argument
/// (`()` when there is none).
pub trait Classify<X, M: Tag>: Sized {
    /// Index type used when the caller does not request one.
    type Size: Index;

    /// Wrapper produced for index type `I`.
    type Output<I: Index>;

    fn classify<I: Index>(self, extra: X) -> Self::Output<I>;

    /// Like [`Classify::classify`], but reports bad bounds and spans instead of
    /// asserting. Indices that would overflow `I` are reported too, whenever
    /// the length of the source or an explicit bound limits them.
    fn try_classify<I: Index>(self, extra: X) -> Result<Self::Output<I>, Error> {
        Ok(self.classify(extra))
    }
}

/// [`Classify`] for raw pointer sources, which borrow memory for a lifetime
/// `'a` chosen by the caller.
pub trait ClassifyRaw<'a, X, M: Tag>: Sized {
    type Size: Index;

    type Output<I: Index>;

    /// # Safety
    ///
    /// - A pointer pair must lie within one allocation, both ends included.
    /// - A pointer and a count must address `count` initialized elements.
    /// - A character pointer must be null or reach a terminator.
    ///
    /// In every case the memory must stay valid for `'a` and must not be
    /// accessed in a conflicting way while the wrapper lives.
    unsafe fn classify_raw<I: Index>(self, extra: X) -> Self::Output<I>;

    /// Checked form of [`ClassifyRaw::classify_raw`].
    ///
    /// # Safety
    ///
    /// Same as [`ClassifyRaw::classify_raw`], except that an inverted pointer
    /// pair is reported rather than assumed away.
    unsafe fn try_classify_raw<I: Index>(self, extra: X) -> Result<Self::Output<I>, Error> {
        Ok(unsafe { self.classify_raw(extra) })
    }
}

/// Sequences with a begin and an end, classified as [`Category::Container`].
///
/// Implemented for the std collections, owned and borrowed, and for slices.
/// Another container opts in with one impl, choosing its own index type:
///
/// ```
/// # use enumerate::{enumerate, RangeLike};
/// struct Ring(Vec<u8>);
///
/// impl<'a> IntoIterator for &'a Ring {
///     type Item = &'a u8;
///     type IntoIter = std::slice::Iter<'a, u8>;
///     fn into_iter(self) -> Self::IntoIter {
///         self.0.iter()
///     }
/// }
///
/// impl<'a> RangeLike for &'a Ring {
///     type Size = u16;
/// }
///
/// let ring = Ring(vec![7, 8]);
/// let indices: Vec<u16> = enumerate(&ring).into_iter().map(|i| i.index).collect();
/// assert_eq!(indices, [0, 1]);
/// ```
///
/// [`Category::Container`]: crate::Category::Container
pub trait RangeLike: IntoIterator {
    type Size: Index;

    /// Number of elements, when known without iterating. The checked entry
    /// points use it to reject index types too narrow for the container.
    #[inline]
    fn known_len(&self) -> Option<usize> {
        None
    }
}

macro_rules! impl_range_like {
    ($({$($gen:tt)*} $ty:ty;)*) => {$(
        impl<$($gen)*> RangeLike for $ty {
            type Size = usize;

            #[inline]
            fn known_len(&self) -> Option<usize> {
                Some(self.len())
            }
        }
    )*};
}

impl_range_like! {
    {T} Vec<T>;
    {'a, T} &'a Vec<T>;
    {'a, T} &'a mut Vec<T>;
    {T} VecDeque<T>;
    {'a, T} &'a VecDeque<T>;
    {'a, T} &'a mut VecDeque<T>;
    {T} LinkedList<T>;
    {'a, T} &'a LinkedList<T>;
    {'a, T} &'a mut LinkedList<T>;
    {T} BTreeSet<T>;
    {'a, T} &'a BTreeSet<T>;
    {T, S} HashSet<T, S>;
    {'a, T, S} &'a HashSet<T, S>;
    {T} BinaryHeap<T>;
    {'a, T} &'a BinaryHeap<T>;
    {K, V} BTreeMap<K, V>;
    {'a, K, V} &'a BTreeMap<K, V>;
    {'a, K, V} &'a mut BTreeMap<K, V>;
    {K, V, S} HashMap<K, V, S>;
    {'a, K, V, S} &'a HashMap<K, V, S>;
    {'a, K, V, S} &'a mut HashMap<K, V, S>;
    {'a, T} &'a [T];
    {'a, T} &'a mut [T];
}

// at most one element, which every index type can count
impl<T> RangeLike for Option<T> {
    type Size = usize;
}

impl<'a, T> RangeLike for &'a Option<T> {
    type Size = usize;
}

impl<'a, T> RangeLike for &'a mut Option<T> {
    type Size = usize;
}

/// Arrays of a length fixed by their type, owned or borrowed.
pub trait FixedArray: IntoIterator {
    const LEN: usize;
}

impl<T, const N: usize> FixedArray for [T; N] {
    const LEN: usize = N;
}

impl<'a, T, const N: usize> FixedArray for &'a [T; N] {
    const LEN: usize = N;
}

impl<'a, T, const N: usize> FixedArray for &'a mut [T; N] {
    const LEN: usize = N;
}

/// Fails unless every position below `len` fits in `I`.
fn check_fits<I: Index>(len: usize) -> Result<(), Error> {
    match len.checked_sub(1) {
        Some(last) => I::try_from_usize(last).map(drop),
        None => Ok(()),
    }
}

/// [`check_fits`] against the tighter of a known length and a bound. Nothing is
/// checked when neither is known.
fn check_upper<I: Index>(len: Option<usize>, bound: Option<usize>) -> Result<(), Error> {
    match len.into_iter().chain(bound).min() {
        Some(upper) => check_fits::<I>(upper),
        None => Ok(()),
    }
}

impl<It, E> Classify<E, tag::Sentinel> for It
where
    It: Iterator,
    E: Sentinel<It>,
{
    type Size = usize;
    type Output<I: Index> = Enumerated<E::Bounded, I, tag::Sentinel>;

    #[inline]
    fn classify<I: Index>(self, end: E) -> Self::Output<I> {
        Enumerated::new(end.bound(self), Unbounded)
    }

    fn try_classify<I: Index>(self, end: E) -> Result<Self::Output<I>, Error> {
        let bounded = end.try_bound(self)?;
        check_upper::<I>(bounded.size_hint().1, None)?;
        Ok(Enumerated::new(bounded, Unbounded))
    }
}

impl<C: RangeLike> Classify<(), tag::Container> for C {
    type Size = <C as RangeLike>::Size;
    type Output<I: Index> = Enumerated<C, I, tag::Container>;

    #[inline]
    fn classify<I: Index>(self, _: ()) -> Self::Output<I> {
        Enumerated::new(self, Unbounded)
    }

    fn try_classify<I: Index>(self, _: ()) -> Result<Self::Output<I>, Error> {
        check_upper::<I>(self.known_len(), None)?;
        Ok(Enumerated::new(self, Unbounded))
    }
}

impl<It: Iterator> Classify<(), tag::Iterator> for It {
    type Size = usize;
    type Output<I: Index> = Enumerated<It, I, tag::Iterator>;

    #[inline]
    fn classify<I: Index>(self, _: ()) -> Self::Output<I> {
        Enumerated::new(self, Unbounded)
    }

    fn try_classify<I: Index>(self, _: ()) -> Result<Self::Output<I>, Error> {
        check_upper::<I>(self.size_hint().1, None)?;
        Ok(Enumerated::new(self, Unbounded))
    }
}

impl<C: RangeLike, N: Index> Classify<N, tag::ContainerLimit> for C {
    type Size = <C as RangeLike>::Size;
    type Output<I: Index> = Enumerated<C, I, tag::ContainerLimit, usize>;

    #[inline]
    fn classify<I: Index>(self, bound: N) -> Self::Output<I> {
        Enumerated::new(self, bound.to_usize())
    }

    fn try_classify<I: Index>(self, bound: N) -> Result<Self::Output<I>, Error> {
        let bound = bound.try_to_usize()?;
        check_upper::<I>(self.known_len(), Some(bound))?;
        Ok(Enumerated::new(self, bound))
    }
}

impl<It: Iterator, N: Index> Classify<N, tag::IteratorLimit> for It {
    type Size = usize;
    type Output<I: Index> = Enumerated<It, I, tag::IteratorLimit, usize>;

    #[inline]
    fn classify<I: Index>(self, bound: N) -> Self::Output<I> {
        Enumerated::new(self, bound.to_usize())
    }

    fn try_classify<I: Index>(self, bound: N) -> Result<Self::Output<I>, Error> {
        let bound = bound.try_to_usize()?;
        check_upper::<I>(self.size_hint().1, Some(bound))?;
        Ok(Enumerated::new(self, bound))
    }
}

impl<S: TupleLike> Classify<(), tag::Tuple> for S {
    type Size = usize;
    type Output<I: Index> = Each<S, I, tag::Tuple>;

    #[inline]
    fn classify<I: Index>(self, _: ()) -> Self::Output<I> {
        Each::new(self, None)
    }

    fn try_classify<I: Index>(self, _: ()) -> Result<Self::Output<I>, Error> {
        check_fits::<I>(S::ARITY)?;
        Ok(Each::new(self, None))
    }
}

impl<S: TupleLike, N: Index> Classify<N, tag::Tuple> for S {
    type Size = usize;
    type Output<I: Index> = Each<S, I, tag::Tuple>;

    #[inline]
    fn classify<I: Index>(self, bound: N) -> Self::Output<I> {
        Each::new(self, Some(bound.to_usize()))
    }

    fn try_classify<I: Index>(self, bound: N) -> Result<Self::Output<I>, Error> {
        let bound = bound.try_to_usize()?;
        check_fits::<I>(S::ARITY.min(bound))?;
        Ok(Each::new(self, Some(bound)))
    }
}

impl<'a> Classify<(), tag::String> for &'a CStr {
    type Size = usize;
    type Output<I: Index> = Enumerated<NulTerminated<'a, u8>, I, tag::String>;

    #[inline]
    fn classify<I: Index>(self, _: ()) -> Self::Output<I> {
        Enumerated::new(NulTerminated::from_cstr(self), Unbounded)
    }

    fn try_classify<I: Index>(self, _: ()) -> Result<Self::Output<I>, Error> {
        check_fits::<I>(self.to_bytes().len())?;
        Ok(Enumerated::new(NulTerminated::from_cstr(self), Unbounded))
    }
}

macro_rules! impl_text {
    ($({$lt:lifetime} $ty:ty),*) => {$(
        impl<$lt> Classify<(), tag::Text> for $ty {
            type Size = usize;
            type Output<I: Index> = Enumerated<Chars<$lt>, I, tag::Text>;

            #[inline]
            fn classify<I: Index>(self, _: ()) -> Self::Output<I> {
                Enumerated::new(self.chars(), Unbounded)
            }

            fn try_classify<I: Index>(self, _: ()) -> Result<Self::Output<I>, Error> {
                check_fits::<I>(self.chars().count())?;
                Ok(Enumerated::new(self.chars(), Unbounded))
            }
        }

        impl<$lt, N: Index> Classify<N, tag::TextLimit> for $ty {
            type Size = usize;
            type Output<I: Index> = Enumerated<Chars<$lt>, I, tag::TextLimit, usize>;

            #[inline]
            fn classify<I: Index>(self, bound: N) -> Self::Output<I> {
                Enumerated::new(self.chars(), bound.to_usize())
            }

            fn try_classify<I: Index>(self, bound: N) -> Result<Self::Output<I>, Error> {
                let bound = bound.try_to_usize()?;
                check_fits::<I>(self.chars().take(bound).count())?;
                Ok(Enumerated::new(self.chars(), bound))
            }
        }
    )*};
}

impl_text!({'a} &'a str, {'a} &'a String);

impl<A: FixedArray> Classify<(), tag::FixedArray> for A {
    type Size = usize;
    type Output<I: Index> = Enumerated<A, I, tag::FixedArray>;

    #[inline]
    fn classify<I: Index>(self, _: ()) -> Self::Output<I> {
        Enumerated::new(self, Unbounded)
    }

    fn try_classify<I: Index>(self, _: ()) -> Result<Self::Output<I>, Error> {
        check_fits::<I>(A::LEN)?;
        Ok(Enumerated::new(self, Unbounded))
    }
}

impl<A: FixedArray, N: Index> Classify<N, tag::FixedArray> for A {
    type Size = usize;
    type Output<I: Index> = Enumerated<A, I, tag::FixedArray, usize>;

    #[inline]
    fn classify<I: Index>(self, bound: N) -> Self::Output<I> {
        Enumerated::new(self, bound.to_usize())
    }

    fn try_classify<I: Index>(self, bound: N) -> Result<Self::Output<I>, Error> {
        let bound = bound.try_to_usize()?;
        check_upper::<I>(Some(A::LEN), Some(bound))?;
        Ok(Enumerated::new(self, bound))
    }
}

impl<S: Aggregate> Classify<(), tag::Aggregate> for S {
    type Size = usize;
    type Output<I: Index> = Each<S, I, tag::Aggregate>;

    #[inline]
    fn classify<I: Index>(self, _: ()) -> Self::Output<I> {
        Each::new(self, None)
    }

    fn try_classify<I: Index>(self, _: ()) -> Result<Self::Output<I>, Error> {
        check_fits::<I>(S::ARITY)?;
        Ok(Each::new(self, None))
    }
}

impl<S: Aggregate, N: Index> Classify<N, tag::Aggregate> for S {
    type Size = usize;
    type Output<I: Index> = Each<S, I, tag::Aggregate>;

    #[inline]
    fn classify<I: Index>(self, bound: N) -> Self::Output<I> {
        Each::new(self, Some(bound.to_usize()))
    }

    fn try_classify<I: Index>(self, bound: N) -> Result<Self::Output<I>, Error> {
        let bound = bound.try_to_usize()?;
        check_fits::<I>(S::ARITY.min(bound))?;
        Ok(Each::new(self, Some(bound)))
    }
}

/// Number of elements from `begin` up to `end`.
///
/// # Safety
///
/// Both pointers must lie within, or one past the end of, the same allocation.
unsafe fn span<T>(begin: *const T, end: *const T) -> Result<usize, Error> {
    if size_of::<T>() == 0 {
        return Ok(0);
    }
    // SAFETY: same allocation, per the caller
    let distance = unsafe { end.offset_from(begin) };
    usize::try_from(distance).map_err(|_| Error::InvertedRange {
        excess: distance.unsigned_abs(),
    })
}

fn unchecked_span(span: Result<usize, Error>) -> usize {
    match span {
        Ok(len) => len,
        Err(err) => {
            if cfg!(debug_assertions) {
                panic!("{err}");
            }
            0
        }
    }
}

unsafe fn view<'a, T>(ptr: *const T, len: usize) -> &'a [T] {
    if len == 0 {
        return &[];
    }
    debug_assert!(!ptr.is_null(), "null pointer to {len} elements");
    // SAFETY: `len` initialized elements at `ptr`, per the caller
    unsafe { slice::from_raw_parts(ptr, len) }
}

unsafe fn view_mut<'a, T>(ptr: *mut T, len: usize) -> &'a mut [T] {
    if len == 0 {
        return &mut [];
    }
    debug_assert!(!ptr.is_null(), "null pointer to {len} elements");
    // SAFETY: `len` initialized elements at `ptr`, not aliased, per the caller
    unsafe { slice::from_raw_parts_mut(ptr, len) }
}

impl<'a, T: 'a> ClassifyRaw<'a, *const T, tag::PointerPair> for *const T {
    type Size = usize;
    type Output<I: Index> = Enumerated<&'a [T], I, tag::PointerPair>;

    #[inline]
    unsafe fn classify_raw<I: Index>(self, end: *const T) -> Self::Output<I> {
        let len = unchecked_span(unsafe { span(self, end) });
        Enumerated::new(unsafe { view(self, len) }, Unbounded)
    }

    unsafe fn try_classify_raw<I: Index>(self, end: *const T) -> Result<Self::Output<I>, Error> {
        let len = unsafe { span(self, end) }?;
        check_fits::<I>(len)?;
        Ok(Enumerated::new(unsafe { view(self, len) }, Unbounded))
    }
}

impl<'a, T: 'a> ClassifyRaw<'a, *mut T, tag::PointerPair> for *mut T {
    type Size = usize;
    type Output<I: Index> = Enumerated<&'a mut [T], I, tag::PointerPair>;

    #[inline]
    unsafe fn classify_raw<I: Index>(self, end: *mut T) -> Self::Output<I> {
        let len = unchecked_span(unsafe { span(self.cast_const(), end.cast_const()) });
        Enumerated::new(unsafe { view_mut(self, len) }, Unbounded)
    }

    unsafe fn try_classify_raw<I: Index>(self, end: *mut T) -> Result<Self::Output<I>, Error> {
        let len = unsafe { span(self.cast_const(), end.cast_const()) }?;
        check_fits::<I>(len)?;
        Ok(Enumerated::new(unsafe { view_mut(self, len) }, Unbounded))
    }
}

impl<'a, T: 'a, N: Index> ClassifyRaw<'a, N, tag::PointerSize> for *const T {
    type Size = usize;
    type Output<I: Index> = Enumerated<&'a [T], I, tag::PointerSize>;

    #[inline]
    unsafe fn classify_raw<I: Index>(self, count: N) -> Self::Output<I> {
        Enumerated::new(unsafe { view(self, count.to_usize()) }, Unbounded)
    }

    unsafe fn try_classify_raw<I: Index>(self, count: N) -> Result<Self::Output<I>, Error> {
        let len = count.try_to_usize()?;
        check_fits::<I>(len)?;
        Ok(Enumerated::new(unsafe { view(self, len) }, Unbounded))
    }
}

impl<'a, T: 'a, N: Index> ClassifyRaw<'a, N, tag::PointerSize> for *mut T {
    type Size = usize;
    type Output<I: Index> = Enumerated<&'a mut [T], I, tag::PointerSize>;

    #[inline]
    unsafe fn classify_raw<I: Index>(self, count: N) -> Self::Output<I> {
        Enumerated::new(unsafe { view_mut(self, count.to_usize()) }, Unbounded)
    }

    unsafe fn try_classify_raw<I: Index>(self, count: N) -> Result<Self::Output<I>, Error> {
        let len = count.try_to_usize()?;
        check_fits::<I>(len)?;
        Ok(Enumerated::new(unsafe { view_mut(self, len) }, Unbounded))
    }
}

impl<'a, C: Character> ClassifyRaw<'a, (), tag::String> for *const C {
    type Size = usize;
    type Output<I: Index> = Enumerated<NulTerminated<'a, C>, I, tag::String>;

    #[inline]
    unsafe fn classify_raw<I: Index>(self, _: ()) -> Self::Output<I> {
        Enumerated::new(unsafe { NulTerminated::from_ptr(self) }, Unbounded)
    }
}
