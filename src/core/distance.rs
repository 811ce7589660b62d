//! Element-scaled and byte-scaled address differences.
//!
//! The two units are separate types on purpose: an `ElementDistance` never
//! silently becomes a `ByteDistance` or the reverse. Converting requires
//! naming the element type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::mem::size_of;

/// Difference between two addresses counted in elements of the handle's type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ElementDistance(isize);

/// Difference between two addresses counted in raw bytes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ByteDistance(isize);

impl ElementDistance {
    pub const fn new(elements: isize) -> Self {
        ElementDistance(elements)
    }

    pub const fn get(self) -> isize {
        self.0
    }

    /// Scale to bytes for elements of type `T`.
    pub const fn to_bytes<T>(self) -> ByteDistance {
        ByteDistance(self.0.wrapping_mul(size_of::<T>() as isize))
    }
}

impl ByteDistance {
    pub const fn new(bytes: isize) -> Self {
        ByteDistance(bytes)
    }

    pub const fn get(self) -> isize {
        self.0
    }

    /// Whole elements of type `T` covered by this many bytes, or `None` when
    /// the byte count is not a multiple of `size_of::<T>()`.
    pub const fn to_elements<T>(self) -> Option<ElementDistance> {
        let size = size_of::<T>() as isize;
        if size == 0 || self.0 % size != 0 {
            return None;
        }
        Some(ElementDistance(self.0 / size))
    }
}

impl fmt::Display for ElementDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for ByteDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<isize> for ElementDistance {
    fn eq(&self, other: &isize) -> bool {
        self.0 == *other
    }
}

impl PartialEq<isize> for ByteDistance {
    fn eq(&self, other: &isize) -> bool {
        self.0 == *other
    }
}
