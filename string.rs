use core::ffi::CStr;
use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;

/// Character type of a terminated string.
///
/// ```
/// # use enumerate::Character;
/// assert_eq!(<u16 as Character>::NUL, 0);
/// assert_eq!(<char as Character>::NUL, '\0');
/// ```
pub trait Character: Copy + Eq + 'static {
    /// The terminator.
    const NUL: Self;
}

macro_rules! impl_character {
    ($($t:ty => $nul:expr),*) => {$(
        impl Character for $t {
            const NUL: Self = $nul;
        }
    )*};
}

impl_character!(u8 => 0, i8 => 0, u16 => 0, u32 => 0, char => '\0');

/// Walks a character run up to, not including, its terminator.
///
/// No length is computed up front: each step reads one character and stops at
/// [`Character::NUL`]. A null pointer is an empty string.
pub struct NulTerminated<'a, C> {
    ptr: *const C,
    marker: PhantomData<&'a C>,
}

impl<'a, C: Character> NulTerminated<'a, C> {
    /// # Safety
    ///
    /// `ptr` must be null, or point to a run of `C` that ends with
    /// `C::NUL` and stays valid and unmodified for `'a`.
    #[inline]
    pub unsafe fn from_ptr(ptr: *const C) -> Self {
        Self {
            ptr,
            marker: PhantomData,
        }
    }

    /// Position of the next character to be read.
    #[inline]
    pub fn as_ptr(&self) -> *const C {
        self.ptr
    }
}

impl<'a> NulTerminated<'a, u8> {
    #[inline]
    pub fn from_cstr(s: &'a CStr) -> Self {
        // SAFETY: `CStr` guarantees a terminated run borrowed for `'a`
        unsafe { Self::from_ptr(s.as_ptr().cast::<u8>()) }
    }
}

impl<'a, C: Character> Iterator for NulTerminated<'a, C> {
    type Item = &'a C;

    #[inline]
    fn next(&mut self) -> Option<&'a C> {
        if self.ptr.is_null() {
            return None;
        }
        // SAFETY: non-null and, by the constructor contract, not past the terminator
        let current = unsafe { &*self.ptr };
        if *current == C::NUL {
            return None;
        }
        // SAFETY: `current` is not the terminator, so the next slot is in bounds
        self.ptr = unsafe { self.ptr.add(1) };
        Some(current)
    }
}

impl<'a, C: Character> FusedIterator for NulTerminated<'a, C> {}

impl<'a, C> Clone for NulTerminated<'a, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, C> Copy for NulTerminated<'a, C> {}

impl<'a, C> fmt::Debug for NulTerminated<'a, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NulTerminated").field("ptr", &self.ptr).finish()
    }
}

// SAFETY: only ever hands out `&'a C`, like `&'a [C]`
unsafe impl<'a, C: Sync> Send for NulTerminated<'a, C> {}
unsafe impl<'a, C: Sync> Sync for NulTerminated<'a, C> {}
