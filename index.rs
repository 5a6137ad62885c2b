use crate::Error;
use core::fmt::Debug;
use core::hash::Hash;

mod sealed {
    pub trait Sealed {}
}

/// Integral type usable as an enumeration index or as an explicit bound.
///
/// Implemented for every primitive integer. The natural index type of a source
/// is `usize` unless the source declares another one (see
/// [`RangeLike::Size`](crate::RangeLike::Size)); any other type can be requested
/// with [`enumerate_as`](crate::enumerate_as).
///
/// ```
/// # use enumerate::Index;
/// assert_eq!(<u8 as Index>::from_usize(7), 7u8);
/// assert!(<u8 as Index>::try_from_usize(256).is_err());
/// assert_eq!((-3i32).try_to_usize().is_err(), true);
/// assert_eq!(12u64.to_usize(), 12);
/// ```
pub trait Index: Copy + Debug + Eq + Ord + Hash + Send + Sync + 'static + sealed::Sealed {
    /// Name used in diagnostics.
    const NAME: &'static str;

    /// Converts a zero-based position into this index type.
    ///
    /// Positions that do not fit are a precondition violation: they panic in
    /// debug builds and truncate in release builds.
    fn from_usize(position: usize) -> Self;

    /// Checked form of [`Index::from_usize`].
    fn try_from_usize(position: usize) -> Result<Self, Error>;

    /// Converts an element-count bound into `usize`.
    ///
    /// Negative bounds panic in debug builds and clamp to zero in release
    /// builds. Bounds beyond `usize::MAX` saturate.
    fn to_usize(self) -> usize;

    /// Checked form of [`Index::to_usize`].
    fn try_to_usize(self) -> Result<usize, Error>;
}

macro_rules! impl_index_unsigned {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}
        impl Index for $t {
            const NAME: &'static str = stringify!($t);

            #[inline]
            fn from_usize(position: usize) -> Self {
                debug_assert!(
                    <$t>::try_from(position).is_ok(),
                    "position {} overflows index type `{}`",
                    position,
                    Self::NAME,
                );
                position as $t
            }

            #[inline]
            fn try_from_usize(position: usize) -> Result<Self, Error> {
                <$t>::try_from(position).map_err(|_| Error::IndexOverflow {
                    position,
                    index_type: Self::NAME,
                })
            }

            #[inline]
            fn to_usize(self) -> usize {
                usize::try_from(self).unwrap_or(usize::MAX)
            }

            #[inline]
            fn try_to_usize(self) -> Result<usize, Error> {
                Ok(self.to_usize())
            }
        }
    )*};
}

macro_rules! impl_index_signed {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}
        impl Index for $t {
            const NAME: &'static str = stringify!($t);

            #[inline]
            fn from_usize(position: usize) -> Self {
                debug_assert!(
                    <$t>::try_from(position).is_ok(),
                    "position {} overflows index type `{}`",
                    position,
                    Self::NAME,
                );
                position as $t
            }

            #[inline]
            fn try_from_usize(position: usize) -> Result<Self, Error> {
                <$t>::try_from(position).map_err(|_| Error::IndexOverflow {
                    position,
                    index_type: Self::NAME,
                })
            }

            #[inline]
            fn to_usize(self) -> usize {
                debug_assert!(self >= 0, "enumerate bound {} is negative", self);
                if self < 0 {
                    0
                } else {
                    usize::try_from(self).unwrap_or(usize::MAX)
                }
            }

            #[inline]
            fn try_to_usize(self) -> Result<usize, Error> {
                if self < 0 {
                    Err(Error::NegativeBound { bound: self as i128 })
                } else {
                    Ok(usize::try_from(self).unwrap_or(usize::MAX))
                }
            }
        }
    )*};
}

impl_index_unsigned!(u8, u16, u32, u64, u128, usize);
impl_index_signed!(i8, i16, i32, i64, i128, isize);
