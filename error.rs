use thiserror::Error;

/// Errors reported by the checked entry points ([`try_enumerate_with`](crate::try_enumerate_with)
/// and friends) and by the fallible conversions on [`Index`](crate::Index).
///
/// The unchecked entry points treat the same conditions as caller preconditions:
/// they are `debug_assert!`ed and, in release builds, resolved to the nearest
/// safe behavior (empty iteration or a truncated index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// An explicit element-count bound was negative.
    #[error("enumerate bound {bound} is negative")]
    NegativeBound {
        /// The bound as given by the caller
        bound: i128,
    },

    /// A position could not be represented by the requested index type.
    #[error("position {position} does not fit in index type `{index_type}`")]
    IndexOverflow {
        /// Zero-based position of the element
        position: usize,
        /// Name of the requested index type
        index_type: &'static str,
    },

    /// The end of an iterator or pointer pair lies before its beginning.
    #[error("range is inverted: end lies {excess} elements before begin")]
    InvertedRange {
        /// How many elements the end lies before the beginning
        excess: usize,
    },
}
