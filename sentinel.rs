//! End markers for iterator/sentinel pairs.
//!
//! A [`Sentinel`] turns a beginning iterator into one that stops where the
//! sentinel says the sequence ends. Three kinds are provided:
//!
//! - the end iterator of the same sequence, for [`ExactSizeIterator`]s;
//! - [`Until`], a predicate marking the first item past the end;
//! - [`Nul`], which ends at the first [`Character::NUL`].
//!
//! ```
//! # use enumerate::{enumerate_with, sentinel::Until};
//! let v = [3, 1, 4, 1, 5, 9];
//! let begin = v.iter();
//! let mut end = v.iter();
//! end.nth(3);
//! let seen: Vec<_> = enumerate_with(begin, end).into_iter().map(|i| *i.value).collect();
//! assert_eq!(seen, [3, 1, 4, 1]);
//!
//! let small: Vec<_> = enumerate_with(v.iter(), Until(|x: &&i32| **x > 4))
//!     .into_iter()
//!     .map(|i| (i.index, *i.value))
//!     .collect();
//! assert_eq!(small, [(0, 3), (1, 1), (2, 4), (3, 1)]);
//! ```

use crate::{Character, Error};
use core::fmt;
use core::iter::{FusedIterator, Take};

/// Marks where the sequence started by `It` ends.
pub trait Sentinel<It: Iterator> {
    type Bounded: Iterator<Item = It::Item>;

    /// Bounds `begin`. An end that lies before `begin` is a precondition
    /// violation, asserted in debug builds and treated as empty otherwise.
    fn bound(self, begin: It) -> Self::Bounded;

    /// Checked form of [`Sentinel::bound`].
    fn try_bound(self, begin: It) -> Result<Self::Bounded, Error>
    where
        Self: Sized,
    {
        Ok(self.bound(begin))
    }
}

impl<It: ExactSizeIterator> Sentinel<It> for It {
    type Bounded = Take<It>;

    #[inline]
    fn bound(self, begin: It) -> Take<It> {
        debug_assert!(
            begin.len() >= self.len(),
            "range is inverted: end lies {} elements before begin",
            self.len() - begin.len(),
        );
        let span = begin.len().saturating_sub(self.len());
        begin.take(span)
    }

    fn try_bound(self, begin: It) -> Result<Take<It>, Error> {
        let (begin_len, end_len) = (begin.len(), self.len());
        match begin_len.checked_sub(end_len) {
            Some(span) => Ok(begin.take(span)),
            None => Err(Error::InvertedRange {
                excess: end_len - begin_len,
            }),
        }
    }
}

/// Ends the sequence at the first item the predicate accepts.
#[derive(Debug, Clone, Copy)]
pub struct Until<F>(pub F);

impl<It, F> Sentinel<It> for Until<F>
where
    It: Iterator,
    F: FnMut(&It::Item) -> bool,
{
    type Bounded = Terminated<It, F>;

    #[inline]
    fn bound(self, begin: It) -> Self::Bounded {
        Terminated::new(begin, self.0)
    }
}

/// Ends a sequence of `&C` at the first [`Character::NUL`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Nul;

fn is_nul<C: Character>(c: &&C) -> bool {
    **c == C::NUL
}

impl<'a, It, C> Sentinel<It> for Nul
where
    It: Iterator<Item = &'a C>,
    C: Character,
{
    type Bounded = Terminated<It, fn(&&'a C) -> bool>;

    #[inline]
    fn bound(self, begin: It) -> Self::Bounded {
        Terminated::new(begin, is_nul::<C> as fn(&&'a C) -> bool)
    }
}

/// Iterator returned by [`Until`] and [`Nul`].
///
/// The terminating item is consumed from the inner iterator but not yielded.
#[derive(Clone)]
pub struct Terminated<It, F> {
    inner: It,
    predicate: F,
    done: bool,
}

impl<It, F> Terminated<It, F> {
    fn new(inner: It, predicate: F) -> Self {
        Self {
            inner,
            predicate,
            done: false,
        }
    }
}

impl<It, F> Iterator for Terminated<It, F>
where
    It: Iterator,
    F: FnMut(&It::Item) -> bool,
{
    type Item = It::Item;

    #[inline]
    fn next(&mut self) -> Option<It::Item> {
        if self.done {
            return None;
        }
        let item = self.inner.next();
        match item {
            Some(item) if !(self.predicate)(&item) => Some(item),
            _ => {
                self.done = true;
                None
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            (0, self.inner.size_hint().1)
        }
    }
}

impl<It, F> FusedIterator for Terminated<It, F>
where
    It: Iterator,
    F: FnMut(&It::Item) -> bool,
{
}

impl<It: fmt::Debug, F> fmt::Debug for Terminated<It, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Terminated")
            .field("inner", &self.inner)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}
