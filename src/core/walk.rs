//! Walking a block with an advancing handle.
//!
//! `Walk` is the `for (p = a; p < a + n; ++p)` loop as an iterator: one
//! cursor stepped one element at a time and compared with strict less-than
//! against the one-past-the-end sentinel, which is never read.

use crate::core::handle::AddressHandle;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use tracing::trace;

/// Lazy, finite iterator over a block's elements in ascending address order.
///
/// Borrows the block for `'a`, so the block outlives the walk. Call
/// `FixedBlock::walk` again to restart from element 0.
pub struct Walk<'a, T> {
    cursor: AddressHandle<T>,
    end: AddressHandle<T>,
    _block: PhantomData<&'a [T]>,
}

impl<'a, T: Copy> Walk<'a, T> {
    pub(crate) fn new(begin: AddressHandle<T>, end: AddressHandle<T>) -> Self {
        trace!(begin = %begin.address(), end = %end.address(), "walk start");
        Self {
            cursor: begin,
            end,
            _block: PhantomData,
        }
    }

    /// Handle the next `next()` call will read.
    pub fn cursor(&self) -> AddressHandle<T> {
        self.cursor
    }

    /// The sentinel the cursor is compared against.
    pub fn end(&self) -> AddressHandle<T> {
        self.end
    }
}

impl<T: Copy> Iterator for Walk<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.cursor < self.end {
            // SAFETY: `cursor` lies in `[begin, end)` of a block borrowed for 'a.
            let value = unsafe { self.cursor.read() };
            if self.cursor.advance() == self.end {
                trace!(end = %self.end.address(), "walk reached one-past-the-end");
            }
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.address_distance(self.cursor).get().max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl<T: Copy> DoubleEndedIterator for Walk<'_, T> {
    fn next_back(&mut self) -> Option<T> {
        if self.cursor < self.end {
            self.end.retreat();
            // SAFETY: the retreated end is at or above `cursor`, inside the block.
            Some(unsafe { self.end.read() })
        } else {
            None
        }
    }
}

impl<T: Copy> ExactSizeIterator for Walk<'_, T> {}

impl<T: Copy> FusedIterator for Walk<'_, T> {}

impl<T> Clone for Walk<'_, T> {
    fn clone(&self) -> Self {
        Self {
            cursor: self.cursor,
            end: self.end,
            _block: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::block::FixedBlock;

    #[test]
    fn test_walk_in_order() {
        let block = FixedBlock::bind([10, 20, 30, 40, 50]);
        let values: Vec<i32> = block.walk().collect();
        assert_eq!(values, vec![10, 20, 30, 40, 50]);
    }

    #[test]
    fn test_walk_is_restartable() {
        let block = FixedBlock::bind([3u8, 1, 2]);
        let first: Vec<u8> = block.walk().collect();
        let second: Vec<u8> = (&block).into_iter().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_walk_stops_at_sentinel() {
        let block = FixedBlock::bind([1i32, 2]);
        let mut walk = block.walk();
        assert_eq!(walk.len(), 2);
        assert_eq!(walk.next(), Some(1));
        assert_eq!(walk.next(), Some(2));
        assert_eq!(walk.cursor(), block.one_past_end());
        assert_eq!(walk.next(), None);
        assert_eq!(walk.next(), None);
        assert_eq!(walk.cursor(), walk.end());
    }

    #[test]
    fn test_walk_backwards() {
        let block = FixedBlock::bind([1i32, 2, 3]);
        let values: Vec<i32> = block.walk().rev().collect();
        assert_eq!(values, vec![3, 2, 1]);

        let mut walk = block.walk();
        assert_eq!(walk.next(), Some(1));
        assert_eq!(walk.next_back(), Some(3));
        assert_eq!(walk.next(), Some(2));
        assert_eq!(walk.next_back(), None);
    }

    #[test]
    fn test_walk_observes_writes_through_handles() {
        let block = FixedBlock::bind([0i32; 3]);
        let h = block.decay().offset(1);
        unsafe { h.write(7) };
        assert_eq!(block.walk().collect::<Vec<_>>(), vec![0, 7, 0]);
    }
}
