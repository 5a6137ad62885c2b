/// One step of an enumeration: the index and the element it refers to.
///
/// `value` is whatever the wrapped iterator yields, so its mutability follows
/// the source: `&mut T` for a mutable borrow, `&T` for a shared borrow and `T`
/// for an owned source.
///
/// ```
/// # use enumerate::{enumerate, Indexed};
/// let mut v = vec![1usize, 2, 3];
/// for Indexed { index, value } in enumerate(&mut v) {
///     *value *= index;
/// }
/// assert_eq!(v, [0, 2, 6]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Indexed<I, T> {
    pub index: I,
    pub value: T,
}

impl<I, T> Indexed<I, T> {
    #[inline]
    pub fn new(index: I, value: T) -> Self {
        Self { index, value }
    }

    #[inline]
    pub fn into_pair(self) -> (I, T) {
        (self.index, self.value)
    }
}

impl<I, T> From<Indexed<I, T>> for (I, T) {
    #[inline]
    fn from(item: Indexed<I, T>) -> Self {
        item.into_pair()
    }
}

impl<I, T> From<(I, T)> for Indexed<I, T> {
    #[inline]
    fn from((index, value): (I, T)) -> Self {
        Self { index, value }
    }
}
