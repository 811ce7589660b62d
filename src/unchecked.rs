//! Free-standing unchecked operations.
//!
//! Each function is the array/pointer primitive of the same name, kept apart
//! from any container API so test harnesses can drive the
//! undefined-behaviour-adjacent paths deliberately. None of them checks
//! bounds or liveness; the `unsafe` ones say exactly what the caller owes.

use crate::core::{AddressHandle, ByteDistance, ElementDistance, FixedBlock, Walk};

/// `T a[N] = {...}`.
pub fn bind<T, const N: usize>(values: [T; N]) -> FixedBlock<T, N> {
    FixedBlock::bind(values)
}

/// `a` used as a pointer: the address of element 0, count dropped.
pub fn decay<T, const N: usize>(block: &FixedBlock<T, N>) -> AddressHandle<T> {
    block.decay()
}

/// `*p`.
///
/// # Safety
/// `handle` must address a live element of a block's `0..N` range or a live
/// lone value.
pub unsafe fn dereference<T: Copy>(handle: AddressHandle<T>) -> T {
    // SAFETY: forwarded to the caller.
    unsafe { handle.read() }
}

/// `*p = value`.
///
/// # Safety
/// Same as [`dereference`].
pub unsafe fn dereference_and_assign<T>(handle: AddressHandle<T>, value: T) {
    // SAFETY: forwarded to the caller.
    unsafe { handle.write(value) }
}

/// `p + k`, scaled by `size_of::<T>()`. Never checks where it lands.
pub fn offset<T>(handle: AddressHandle<T>, k: isize) -> AddressHandle<T> {
    handle.offset(k)
}

/// `p[i]`, defined as `*(p + i)`.
///
/// # Safety
/// `handle + i` must satisfy the requirements of [`dereference`].
pub unsafe fn index<T: Copy>(handle: AddressHandle<T>, i: isize) -> T {
    // SAFETY: forwarded to the caller.
    unsafe { dereference(offset(handle, i)) }
}

/// `a - b` for two `T*`, in elements.
pub fn address_distance<T>(a: AddressHandle<T>, b: AddressHandle<T>) -> ElementDistance {
    a.address_distance(b)
}

/// `(char*)a - (char*)b`, in bytes.
pub fn byte_distance<T>(a: AddressHandle<T>, b: AddressHandle<T>) -> ByteDistance {
    a.byte_distance(b)
}

/// `a + N`: the loop sentinel.
pub fn one_past_end<T, const N: usize>(block: &FixedBlock<T, N>) -> AddressHandle<T> {
    block.one_past_end()
}

/// `for (p = a; p < a + N; ++p) yield *p`.
pub fn walk<T: Copy, const N: usize>(block: &FixedBlock<T, N>) -> Walk<'_, T> {
    block.walk()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_equals_offset_dereference() {
        let block = bind([4i32, 8, 15, 16, 23, 42]);
        let base = decay(&block);
        for i in 0..block.len() as isize {
            unsafe {
                assert_eq!(index(base, i), dereference(offset(base, i)));
                assert_eq!(index(base, i), block.index(i));
            }
        }
    }

    #[test]
    fn test_assignment_aliases() {
        let block = bind([100i32, 200, 300]);
        let h1 = offset(decay(&block), 2);
        let h2 = offset(offset(decay(&block), 1), 1);
        unsafe {
            dereference_and_assign(h1, 7);
            assert_eq!(dereference(h2), 7);
            assert_eq!(block.index(2), 7);
        }
    }

    #[test]
    fn test_distance_modes() {
        let block = bind([0i32; 2]);
        let first = decay(&block);
        let second = offset(first, 1);
        assert_eq!(address_distance(second, first), ElementDistance::new(1));
        assert_eq!(byte_distance(second, first), ByteDistance::new(4));
    }

    #[test]
    fn test_walk_stops_before_sentinel() {
        let block = bind([1u8, 2, 3]);
        let end = one_past_end(&block);
        assert_eq!(end, offset(decay(&block), 3));
        assert_eq!(walk(&block).collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
