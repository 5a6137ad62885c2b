use crate::{Category, Index, Indexed, Iter, Limit, Tag, Unbounded};
use core::marker::PhantomData;

/// Iterable wrapper produced for every homogeneous source.
///
/// `S` is the source as classified: an owned container, a borrow of one, an
/// iterator or a view built from raw pointers. `M` is the [`Tag`] the source
/// was classified under. `L` is the bound: [`Unbounded`] or a `usize` count.
///
/// Consuming the wrapper iterates the source by value. An owned source can also
/// be iterated by reference through `&Enumerated` ([`Enumerated::iter`]) and
/// `&mut Enumerated` ([`Enumerated::iter_mut`]):
///
/// ```
/// # use enumerate::enumerate;
/// let mut e = enumerate(vec![String::from("a"), String::from("b")]);
/// for item in &mut e {
///     item.value.push_str(&item.index.to_string());
/// }
/// let labels: Vec<_> = e.iter().map(|item| item.value.as_str()).collect();
/// assert_eq!(labels, ["a0", "b1"]);
/// assert_eq!(e.into_inner(), ["a0", "b1"]);
/// ```
///
/// A shared borrow yields shared references only:
///
/// ```compile_fail
/// # use enumerate::enumerate;
/// let v = vec![1, 2, 3];
/// for item in enumerate(&v) {
///     *item.value += 1;
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Enumerated<S, I, M, L = Unbounded> {
    source: S,
    limit: L,
    marker: PhantomData<fn() -> (I, M)>,
}

impl<S, I: Index, M: Tag, L: Limit> Enumerated<S, I, M, L> {
    #[inline]
    pub(crate) fn new(source: S, limit: L) -> Self {
        trace_classified!(M, limit.get());
        Self {
            source,
            limit,
            marker: PhantomData,
        }
    }

    #[inline]
    pub fn iter<'b>(&'b self) -> Iter<<&'b S as IntoIterator>::IntoIter, I, L>
    where
        &'b S: IntoIterator,
    {
        Iter::new((&self.source).into_iter(), self.limit)
    }

    #[inline]
    pub fn iter_mut<'b>(&'b mut self) -> Iter<<&'b mut S as IntoIterator>::IntoIter, I, L>
    where
        &'b mut S: IntoIterator,
    {
        Iter::new((&mut self.source).into_iter(), self.limit)
    }

    /// The explicit element-count bound, if one was given.
    #[inline]
    pub fn limit(&self) -> Option<usize> {
        self.limit.get()
    }

    #[inline]
    pub fn category(&self) -> Category {
        M::CATEGORY
    }

    /// Same source and bound, iterated with indices of type `J`.
    ///
    /// ```
    /// # use enumerate::enumerate;
    /// let first = enumerate(vec!['x', 'y']).index_as::<i16>().into_iter().next();
    /// assert_eq!(first.map(|i| i.index), Some(0i16));
    /// ```
    #[inline]
    pub fn index_as<J: Index>(self) -> Enumerated<S, J, M, L> {
        Enumerated {
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

impl<S, I, M, L> IntoIterator for Enumerated<S, I, M, L>
where
    S: IntoIterator,
    I: Index,
    L: Limit,
{
    type Item = Indexed<I, S::Item>;
    type IntoIter = Iter<S::IntoIter, I, L>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self.source.into_iter(), self.limit)
    }
}

impl<'b, S, I, M, L> IntoIterator for &'b Enumerated<S, I, M, L>
where
    &'b S: IntoIterator,
    I: Index,
    L: Limit,
{
    type Item = Indexed<I, <&'b S as IntoIterator>::Item>;
    type IntoIter = Iter<<&'b S as IntoIterator>::IntoIter, I, L>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Iter::new((&self.source).into_iter(), self.limit)
    }
}

impl<'b, S, I, M, L> IntoIterator for &'b mut Enumerated<S, I, M, L>
where
    &'b mut S: IntoIterator,
    I: Index,
    L: Limit,
{
    type Item = Indexed<I, <&'b mut S as IntoIterator>::Item>;
    type IntoIter = Iter<<&'b mut S as IntoIterator>::IntoIter, I, L>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        Iter::new((&mut self.source).into_iter(), self.limit)
    }
}
