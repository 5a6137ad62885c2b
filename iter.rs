use crate::{Index, Indexed};
use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

/// Element-count bound carried by [`Iter`] and [`Enumerated`](crate::Enumerated).
///
/// Sources classified without a bound use [`Unbounded`] and those with one use
/// `usize`, so the bound decides at the type level which traversal
/// capabilities survive.
pub trait Limit: Copy + fmt::Debug + sealed::Sealed {
    fn get(self) -> Option<usize>;
}

/// No bound: the iteration ends with the inner iterator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Unbounded;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Unbounded {}
    impl Sealed for usize {}
}

impl Limit for Unbounded {
    #[inline]
    fn get(self) -> Option<usize> {
        None
    }
}

impl Limit for usize {
    #[inline]
    fn get(self) -> Option<usize> {
        Some(self)
    }
}

/// Index-augmenting iterator.
///
/// Wraps an inner iterator and a step counter. Every step yields an
/// [`Indexed`] holding the counter, converted to `I`, and the inner item as is.
/// A `usize` bound ends the iteration once the counter reaches it, which works
/// for single-pass iterators without any random access.
///
/// The traversal capabilities of the inner iterator carry over: `Iter` is
/// double-ended, exact-size and fused whenever the inner iterator is, and
/// [`Iterator::nth`] is forwarded so random-access inners skip in O(1). A
/// bounded `Iter` walks backwards only over exact-size inners, since the
/// elements past the bound have to be skipped first.
///
/// The index counts steps taken, from either end. Iterating backwards
/// therefore starts at index `0` on the last element:
///
/// ```
/// # use enumerate::enumerate;
/// let v = [10, 20, 30];
/// let back: Vec<_> = enumerate(&v).into_iter().rev().map(|i| (i.index, *i.value)).collect();
/// assert_eq!(back, [(0, 30), (1, 20), (2, 10)]);
///
/// let word: String = enumerate("abc".chars()).into_iter().rev().map(|i| i.value).collect();
/// assert_eq!(word, "cba");
/// ```
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<It, I = usize, L = Unbounded> {
    inner: It,
    count: usize,
    limit: L,
    index: PhantomData<fn() -> I>,
}

impl<It, I, L: Limit> Iter<It, I, L> {
    #[inline]
    pub(crate) fn new(inner: It, limit: L) -> Self {
        Self {
            inner,
            count: 0,
            limit,
            index: PhantomData,
        }
    }

    /// Number of steps taken so far, which is also the next index.
    #[inline]
    pub fn steps(&self) -> usize {
        self.count
    }

    /// The bound this iterator stops at, if any.
    #[inline]
    pub fn limit(&self) -> Option<usize> {
        self.limit.get()
    }

    #[inline]
    pub fn into_inner(self) -> It {
        self.inner
    }

    #[inline]
    fn remaining(&self) -> Option<usize> {
        self.limit.get().map(|limit| limit - self.count)
    }

    #[inline]
    fn step<T>(&mut self, value: T) -> Indexed<I, T>
    where
        I: Index,
    {
        let index = I::from_usize(self.count);
        self.count += 1;
        Indexed { index, value }
    }
}

impl<It, I, L> Iterator for Iter<It, I, L>
where
    It: Iterator,
    I: Index,
    L: Limit,
{
    type Item = Indexed<I, It::Item>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining() == Some(0) {
            return None;
        }
        let value = self.inner.next()?;
        Some(self.step(value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        match self.remaining() {
            Some(remaining) => (
                lower.min(remaining),
                Some(upper.map_or(remaining, |upper| upper.min(remaining))),
            ),
            None => (lower, upper),
        }
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if let Some(remaining) = self.remaining() {
            if n >= remaining {
                if remaining > 0 {
                    let _ = self.inner.nth(remaining - 1);
                }
                self.count += remaining;
                return None;
            }
        }
        let value = self.inner.nth(n)?;
        self.count += n;
        Some(self.step(value))
    }
}

impl<It, I> DoubleEndedIterator for Iter<It, I, Unbounded>
where
    It: DoubleEndedIterator,
    I: Index,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let value = self.inner.next_back()?;
        Some(self.step(value))
    }
}

impl<It, I> DoubleEndedIterator for Iter<It, I, usize>
where
    It: DoubleEndedIterator + ExactSizeIterator,
    I: Index,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let remaining = self.limit - self.count;
        if remaining == 0 {
            return None;
        }
        // elements past the bound are dropped from the back first
        let excess = self.inner.len().saturating_sub(remaining);
        let value = if excess > 0 {
            self.inner.nth_back(excess)?
        } else {
            self.inner.next_back()?
        };
        Some(self.step(value))
    }
}

impl<It, I, L> ExactSizeIterator for Iter<It, I, L>
where
    It: ExactSizeIterator,
    I: Index,
    L: Limit,
{
    #[inline]
    fn len(&self) -> usize {
        let len = self.inner.len();
        self.remaining().map_or(len, |remaining| len.min(remaining))
    }
}

impl<It, I, L> FusedIterator for Iter<It, I, L>
where
    It: FusedIterator,
    I: Index,
    L: Limit,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::LinkedList;

    fn pairs<It: Iterator<Item = Indexed<usize, T>>, T>(it: It) -> Vec<(usize, T)> {
        it.map(Indexed::into_pair).collect()
    }

    #[test]
    fn yields_steps_in_order() {
        let it: Iter<_, usize> = Iter::new([5, 6, 7].into_iter(), Unbounded);
        assert_eq!(pairs(it), vec![(0, 5), (1, 6), (2, 7)]);
    }

    #[test]
    fn bound_shorter_than_inner() {
        let it: Iter<_, usize, _> = Iter::new(0..100, 3usize);
        assert_eq!(it.len(), 3);
        assert_eq!(pairs(it), vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn bound_on_single_pass_iterator() {
        // `from_fn` has no length and no random access
        let mut n = 0;
        let source = core::iter::from_fn(move || {
            n += 1;
            Some(n)
        });
        let it: Iter<_, u8, _> = Iter::new(source, 4usize);
        assert_eq!(it.size_hint(), (0, Some(4)));
        assert_eq!(it.map(|i| i.index).collect::<Vec<_>>(), vec![0u8, 1, 2, 3]);
    }

    #[test]
    fn unbounded_size_hint_passes_through() {
        let it: Iter<_, usize> = Iter::new(core::iter::repeat(1), Unbounded);
        assert_eq!(it.size_hint(), (usize::MAX, None));
    }

    #[test]
    fn back_iteration_counts_steps() {
        let list: LinkedList<i32> = [1, 2, 3, 4].into_iter().collect();
        let it: Iter<_, usize> = Iter::new(list.iter(), Unbounded);
        assert_eq!(pairs(it.rev()), vec![(0, &4), (1, &3), (2, &2), (3, &1)]);
    }

    #[test]
    fn unbounded_back_iteration_needs_no_length() {
        // `Filter` and `Chars` are double-ended but not exact-size
        let evens: Iter<_, usize> = Iter::new((1..=6).filter(|n| n % 2 == 0), Unbounded);
        assert_eq!(pairs(evens.rev()), vec![(0, 6), (1, 4), (2, 2)]);

        let mut chars: Iter<_, u8> = Iter::new("xyz".chars(), Unbounded);
        assert_eq!(chars.next_back().map(Indexed::into_pair), Some((0, 'z')));
        assert_eq!(chars.next().map(Indexed::into_pair), Some((1, 'x')));
        assert_eq!(chars.limit(), None);
    }

    #[test]
    fn explicit_max_bound_is_still_a_bound() {
        let it: Iter<_, usize, _> = Iter::new(0..3, usize::MAX);
        assert_eq!(it.limit(), Some(usize::MAX));
        assert_eq!(it.len(), 3);
    }

    #[test]
    fn back_iteration_respects_bound() {
        let it: Iter<_, usize, _> = Iter::new([1, 2, 3, 4, 5].iter(), 2usize);
        assert_eq!(pairs(it.rev()), vec![(0, &2), (1, &1)]);
    }

    #[test]
    fn mixed_ends_share_the_counter() {
        let mut it: Iter<_, usize, _> = Iter::new([1, 2, 3, 4].iter(), 3usize);
        assert_eq!(it.next().map(Indexed::into_pair), Some((0, &1)));
        assert_eq!(it.next_back().map(Indexed::into_pair), Some((1, &3)));
        assert_eq!(it.next().map(Indexed::into_pair), Some((2, &2)));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn nth_skips_and_advances_index() {
        let mut it: Iter<_, usize> = Iter::new(10..20, Unbounded);
        assert_eq!(it.nth(3).map(Indexed::into_pair), Some((3, 13)));
        assert_eq!(it.next().map(Indexed::into_pair), Some((4, 14)));
    }

    #[test]
    fn nth_past_bound_exhausts() {
        let mut it: Iter<_, usize, _> = Iter::new(10..20, 5usize);
        assert_eq!(it.nth(5), None);
        assert_eq!(it.next(), None);
        assert_eq!(it.steps(), 5);
    }

    #[test]
    fn zero_bound_yields_nothing() {
        let mut it: Iter<_, usize, _> = Iter::new([1].iter(), 0usize);
        assert_eq!(it.len(), 0);
        assert!(it.next().is_none());
    }
}
