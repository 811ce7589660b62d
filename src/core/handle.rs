//! Address handles: reassignable, non-owning, typed addresses.
//!
//! An `AddressHandle<T>` is a copyable wrapper over `*mut T`. It owns
//! nothing, carries no element count and no lifetime, and every bit pattern
//! is a legal handle. Arithmetic on it is always scaled by `size_of::<T>()`
//! and never touches memory; only `read`, `write`, `read_at` and `write_at`
//! do, and those are `unsafe` because nothing checks the target is alive or
//! in range.

use crate::core::address::Address;
use crate::core::distance::{ByteDistance, ElementDistance};
use std::any::type_name;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem::size_of;
use std::ptr;

/// A movable address typed to `T`.
///
/// Slot `i` from a handle lives at `address + i * size_of::<T>()`.
pub struct AddressHandle<T> {
    ptr: *mut T,
}

impl<T> AddressHandle<T> {
    /// The null handle. Never dereferenceable.
    pub const fn null() -> Self {
        Self {
            ptr: ptr::null_mut(),
        }
    }

    /// Wrap an existing raw pointer.
    pub const fn from_raw(ptr: *mut T) -> Self {
        Self { ptr }
    }

    /// Handle to a lone value (`&value`).
    ///
    /// The handle does not extend the value's lifetime. Once `value` goes out
    /// of scope the handle dangles.
    pub fn address_of(value: &mut T) -> Self {
        Self {
            ptr: value as *mut T,
        }
    }

    pub const fn as_ptr(self) -> *mut T {
        self.ptr
    }

    pub fn address(self) -> Address {
        Address::of(self.ptr.cast_const())
    }

    pub fn is_null(self) -> bool {
        self.ptr.is_null()
    }

    /// Handle `k` elements away (`p + k`). `k` may be negative.
    ///
    /// Uses wrapping arithmetic: the result is always constructible, whether
    /// or not it lands inside the memory the handle came from.
    pub fn offset(self, k: isize) -> Self {
        Self {
            ptr: self.ptr.wrapping_offset(k),
        }
    }

    /// Step forward one element in place (`++p`), returning the new handle.
    pub fn advance(&mut self) -> Self {
        *self = self.offset(1);
        *self
    }

    /// Step back one element in place (`--p`), returning the new handle.
    pub fn retreat(&mut self) -> Self {
        *self = self.offset(-1);
        *self
    }

    /// Reinterpret the address as pointing at a `U`.
    pub fn cast<U>(self) -> AddressHandle<U> {
        AddressHandle {
            ptr: self.ptr.cast::<U>(),
        }
    }

    /// The 1-byte view of this address, used to measure raw byte distances.
    pub fn as_bytes(self) -> AddressHandle<u8> {
        self.cast::<u8>()
    }

    /// `(self - origin) / size_of::<T>()`.
    ///
    /// Only meaningful when both handles come from the same block. Zero-sized
    /// element types always report a distance of zero.
    pub fn address_distance(self, origin: Self) -> ElementDistance {
        let bytes = self.address().bytes_from(origin.address());
        match size_of::<T>() as isize {
            0 => ElementDistance::new(0),
            size => ElementDistance::new(bytes / size),
        }
    }

    /// `self - origin` in raw bytes, computed through the 1-byte view.
    pub fn byte_distance(self, origin: Self) -> ByteDistance {
        let elements = self.as_bytes().address_distance(origin.as_bytes());
        ByteDistance::new(elements.get())
    }

    /// Store `value` at the handle's address (`*p = value`).
    ///
    /// Every other handle to the slot, and the block it belongs to, observes
    /// the new value.
    ///
    /// # Safety
    /// The address must name a slot inside a live block's `0..N` range, or a
    /// live lone value, properly aligned for `T`, with no outstanding Rust
    /// reference to that slot. Anything else is undefined behaviour.
    pub unsafe fn write(self, value: T) {
        // SAFETY: upheld by the caller.
        unsafe { *self.ptr = value }
    }

    /// `p[i] = value`, identical to `p.offset(i).write(value)`.
    ///
    /// # Safety
    /// Same as [`AddressHandle::write`] for the slot `i` elements away.
    pub unsafe fn write_at(self, i: isize, value: T) {
        // SAFETY: upheld by the caller.
        unsafe { self.offset(i).write(value) }
    }
}

impl<T: Copy> AddressHandle<T> {
    /// Read the value at the handle's address (`*p`).
    ///
    /// # Safety
    /// The address must name a slot inside a live block's `0..N` range, or a
    /// live lone value, properly aligned for `T`. The one-past-the-end
    /// sentinel, null, and anything dangling are undefined behaviour.
    pub unsafe fn read(self) -> T {
        // SAFETY: upheld by the caller.
        unsafe { *self.ptr }
    }

    /// `p[i]`, identical to `p.offset(i).read()`.
    ///
    /// # Safety
    /// Same as [`AddressHandle::read`] for the slot `i` elements away.
    pub unsafe fn read_at(self, i: isize) -> T {
        // SAFETY: upheld by the caller.
        unsafe { self.offset(i).read() }
    }
}

impl<T> Clone for AddressHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for AddressHandle<T> {}

impl<T> Default for AddressHandle<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> PartialEq for AddressHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.address() == other.address()
    }
}

impl<T> Eq for AddressHandle<T> {}

impl<T> PartialOrd for AddressHandle<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for AddressHandle<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.address().cmp(&other.address())
    }
}

impl<T> Hash for AddressHandle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.address().hash(state);
    }
}

impl<T> fmt::Debug for AddressHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AddressHandle<{}>({})", type_name::<T>(), self.address())
    }
}

impl<T> fmt::Display for AddressHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.address(), f)
    }
}

impl<T> fmt::Pointer for AddressHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Pointer::fmt(&self.ptr, f)
    }
}
