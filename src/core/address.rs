//! Numeric addresses.
//!
//! `Address` is the plain machine address held by an `AddressHandle`, detached
//! from any element type. All arithmetic here is in raw bytes; element-scaled
//! arithmetic lives on the handle.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A raw machine address.
///
/// Ordering and equality are by numeric value. An `Address` says nothing
/// about what lives at it or whether that memory is still alive.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Address(usize);

impl Address {
    /// The null address.
    pub const NULL: Address = Address(0);

    pub const fn new(value: usize) -> Self {
        Address(value)
    }

    /// Address of the slot `ptr` points at.
    pub fn of<T>(ptr: *const T) -> Self {
        Address(ptr as usize)
    }

    pub const fn value(self) -> usize {
        self.0
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Move by `bytes`, wrapping around the address space.
    pub const fn wrapping_add_bytes(self, bytes: isize) -> Self {
        Address(self.0.wrapping_add_signed(bytes))
    }

    /// Signed byte count from `origin` to `self`.
    pub const fn bytes_from(self, origin: Address) -> isize {
        self.0.wrapping_sub(origin.0) as isize
    }

    /// Whether the address is a multiple of `align` (a power of two).
    pub const fn is_aligned_to(self, align: usize) -> bool {
        self.0 & (align - 1) == 0
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Deserialize from JSON string.
    pub fn from_json(json_str: &str) -> Result<Self> {
        Ok(serde_json::from_str(json_str)?)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl<T> From<*const T> for Address {
    fn from(ptr: *const T) -> Self {
        Address::of(ptr)
    }
}

impl<T> From<*mut T> for Address {
    fn from(ptr: *mut T) -> Self {
        Address::of(ptr.cast_const())
    }
}
