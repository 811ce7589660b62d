//! Passing a block where a handle is expected, and why a block name cannot
//! be rebound while a handle can.

use crate::core::{AddressHandle, FixedBlock};
use crate::demos::transcript::Transcript;
use crate::error::Result;
use tracing::info_span;

/// Reads through a handle and a separately passed count, the way a function
/// taking `const int* arr, int size` must.
///
/// # Safety
/// `arr` must address `size` live, consecutive elements.
pub unsafe fn print_array(t: &mut Transcript, arr: AddressHandle<i32>, size: usize) {
    t.text("Inside print_array (received as pointer):");
    for i in 0..size as isize {
        // SAFETY: `i < size`, guaranteed live by the caller.
        let value = unsafe { arr.offset(i).read() };
        t.text(format!("  *(arr + {}) = {}", i, value));
    }
}

pub fn arrays_as_pointers() -> Result<Transcript> {
    let _span = info_span!("demo", name = "arrays_as_pointers").entered();
    let mut t = Transcript::new("Treating Arrays as Pointers");

    let grades = FixedBlock::bind([95, 87, 72, 91, 88]);
    let size = grades.len();

    t.section("1. Array Decay to Pointer");
    // SAFETY: the decayed handle and `size` describe `grades` exactly.
    unsafe { print_array(&mut t, grades.decay(), size) };

    t.section("2. Pointer Arithmetic on Array Name");
    t.address("grades itself points to address", grades.address());
    // SAFETY: offsets 0, 2 and 4 are within the five elements.
    unsafe {
        t.line("First element (*grades)", grades.decay().read());
        t.line("Third element *(grades + 2)", grades.decay().offset(2).read());
        t.line("Fifth element *(grades + 4)", grades.decay().offset(4).read());
    }

    t.text("");
    t.text("Key difference: arrays can't be reassigned:");
    let mut ptr = grades.decay();
    t.address("  ptr = grades", ptr.address());
    ptr = AddressHandle::null();
    t.line("  after ptr = null, ptr is null", ptr.is_null());
    t.address("  grades still at", grades.address());

    Ok(t)
}
