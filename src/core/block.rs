//! Fixed block bindings: contiguous runs of `N` same-typed elements.
//!
//! A `FixedBlock<T, N>` is the array side of the array/pointer pair. It owns
//! its storage inline, is fully initialized when bound, never resizes and is
//! never rebound. Element `i` lives at `base + i * size_of::<T>()` with no
//! padding in between.
//!
//! Handles obtained through [`FixedBlock::decay`] alias the block's storage,
//! so the elements sit in an `UnsafeCell`: a write through any handle is seen
//! by the block and by every other handle. The block is therefore `!Sync`.

use crate::core::address::Address;
use crate::core::handle::AddressHandle;
use crate::core::walk::Walk;
use crate::error::{Result, ViewError};
use std::cell::UnsafeCell;
use std::fmt;
use std::mem::size_of;
use tracing::{debug, trace};

/// A fixed, non-rebindable block of `N` elements of type `T`.
///
/// Laid out exactly like `[T; N]`.
#[repr(transparent)]
pub struct FixedBlock<T, const N: usize> {
    elements: UnsafeCell<[T; N]>,
}

impl<T, const N: usize> FixedBlock<T, N> {
    /// Bind a block to exactly `N` initial values (`int a[] = {...}`).
    ///
    /// The count is part of the type, so this cannot fail. Zero-sized
    /// element types are rejected at compile time.
    pub fn bind(values: [T; N]) -> Self {
        const { assert!(size_of::<T>() != 0, "element type must not be zero-sized") };
        trace!(len = N, element_size = size_of::<T>(), "binding fixed block");
        Self {
            elements: UnsafeCell::new(values),
        }
    }

    /// Number of elements. Decay forgets this; keep it next to any handle.
    pub const fn len(&self) -> usize {
        N
    }

    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Address of element 0.
    pub fn address(&self) -> Address {
        self.decay().address()
    }

    /// Decay to a handle on element 0.
    ///
    /// One-directional and lossy: the returned handle does not know `N`
    /// and does not keep the block alive.
    pub fn decay(&self) -> AddressHandle<T> {
        let handle = AddressHandle::from_raw(self.elements.get().cast::<T>());
        trace!(base = %handle.address(), len = N, "decay");
        handle
    }

    /// The one-past-the-end sentinel, `decay() + N`. Never dereference it.
    pub fn one_past_end(&self) -> AddressHandle<T> {
        self.decay().offset(N as isize)
    }

    /// Store through element `i` (`a[i] = value`).
    ///
    /// # Safety
    /// `i` must be in `0..N`. No bound is checked; anything else writes
    /// memory the block does not own.
    pub unsafe fn assign(&self, i: isize, value: T) {
        // SAFETY: the caller keeps `i` in range; the block is alive for `&self`.
        unsafe { self.decay().write_at(i, value) }
    }

    /// Checked store: fails with `OutOfRange` instead of writing outside `0..N`.
    pub fn try_assign(&self, i: isize, value: T) -> Result<()> {
        self.check_index(i)?;
        // SAFETY: `i` was just checked against `N`.
        unsafe { self.assign(i, value) };
        Ok(())
    }

    /// Element index a handle points at.
    ///
    /// Fails with `ForeignAddress` when the handle lies outside `0..N` of this
    /// block, between two elements, or on the one-past-the-end sentinel.
    /// Use this before mixing distances from handles of unknown origin.
    pub fn position_of(&self, handle: AddressHandle<T>) -> Result<usize> {
        let bytes = handle.address().bytes_from(self.address());
        let size = size_of::<T>() as isize;
        if bytes < 0 || bytes % size != 0 || (bytes / size) as usize >= N {
            debug!(address = %handle.address(), base = %self.address(), len = N, "foreign handle");
            return Err(ViewError::ForeignAddress {
                address: handle.address().to_string(),
                base: self.address().to_string(),
                len: N,
            });
        }
        Ok((bytes / size) as usize)
    }

    /// Give the elements back, ending the binding.
    pub fn into_inner(self) -> [T; N] {
        self.elements.into_inner()
    }

    fn check_index(&self, i: isize) -> Result<()> {
        if i < 0 || i as usize >= N {
            debug!(index = i, len = N, "checked access out of range");
            return Err(ViewError::OutOfRange { index: i, len: N });
        }
        Ok(())
    }
}

impl<T: Copy, const N: usize> FixedBlock<T, N> {
    /// Bind from a runtime-length initializer.
    ///
    /// Fails with `ShapeMismatch` unless `values.len() == N`; values are never
    /// truncated or padded.
    pub fn try_bind(values: &[T]) -> Result<Self> {
        let array = <[T; N]>::try_from(values).map_err(|_| ViewError::ShapeMismatch {
            expected: N,
            found: values.len(),
        })?;
        Ok(Self::bind(array))
    }

    /// Read element `i` (`a[i]`), defined as `*(decay() + i)`.
    ///
    /// # Safety
    /// `i` must be in `0..N`. Index `N` is the sentinel and anything beyond
    /// reads memory the block does not own.
    pub unsafe fn index(&self, i: isize) -> T {
        // SAFETY: the caller keeps `i` in range; the block is alive for `&self`.
        unsafe { self.decay().read_at(i) }
    }

    /// Checked read: fails with `OutOfRange` instead of reading outside `0..N`.
    pub fn try_index(&self, i: isize) -> Result<T> {
        self.check_index(i)?;
        // SAFETY: `i` was just checked against `N`.
        Ok(unsafe { self.index(i) })
    }

    /// Walk the elements from the decayed handle up to the sentinel.
    pub fn walk(&self) -> Walk<'_, T> {
        Walk::new(self.decay(), self.one_past_end())
    }

    /// Copy of the current contents.
    pub fn to_array(&self) -> [T; N] {
        // SAFETY: the block is `!Sync` and no reference into the cell is
        // handed out, so no write can overlap this read.
        unsafe { *self.elements.get() }
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for FixedBlock<T, N> {
    type Error = ViewError;

    fn try_from(values: &[T]) -> Result<Self> {
        Self::try_bind(values)
    }
}

impl<T, const N: usize> From<[T; N]> for FixedBlock<T, N> {
    fn from(values: [T; N]) -> Self {
        Self::bind(values)
    }
}

impl<'a, T: Copy, const N: usize> IntoIterator for &'a FixedBlock<T, N> {
    type Item = T;
    type IntoIter = Walk<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.walk()
    }
}

/// A clone is a new binding at a different address with the same contents.
impl<T: Copy, const N: usize> Clone for FixedBlock<T, N> {
    fn clone(&self) -> Self {
        Self::bind(self.to_array())
    }
}

impl<T: Copy + fmt::Debug, const N: usize> fmt::Debug for FixedBlock<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedBlock")
            .field("base", &self.address())
            .field("elements", &self.to_array())
            .finish()
    }
}
