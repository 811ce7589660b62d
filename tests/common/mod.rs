//! Shared harnesses for the integration tests.

#![allow(dead_code)]

use arrayview::{AddressHandle, FixedBlock};
use std::ptr;

/// Value stored in the guard words around a guarded block.
pub const GUARD: i32 = 0x5EED;

/// A block with one guard word on each side.
///
/// `repr(C)` fixes the layout, so stepping one element outside the block
/// lands on a guard instead of on unknown stack memory. Handles used for
/// out-of-range access must come from [`Guarded::whole`], whose provenance
/// covers the guards too.
#[repr(C)]
pub struct Guarded<const N: usize> {
    pub before: i32,
    pub block: FixedBlock<i32, N>,
    pub after: i32,
}

impl<const N: usize> Guarded<N> {
    pub fn new(values: [i32; N]) -> Self {
        Self {
            before: GUARD,
            block: FixedBlock::bind(values),
            after: GUARD,
        }
    }

    /// Handle to the `before` guard, with provenance over the whole harness.
    pub fn whole(&mut self) -> AddressHandle<i32> {
        AddressHandle::from_raw(ptr::addr_of_mut!(*self).cast::<i32>())
    }

    /// Element 0 of the block, reached through [`Guarded::whole`].
    pub fn base(&mut self) -> AddressHandle<i32> {
        self.whole().offset(1)
    }
}

/// The five-element block the end-to-end scenarios use.
pub fn hundreds() -> FixedBlock<i32, 5> {
    FixedBlock::bind([100, 200, 300, 400, 500])
}
