//! Declaring handles to blocks, element addresses, lone values and
//! handle arithmetic.

use crate::core::{AddressHandle, FixedBlock};
use crate::demos::transcript::Transcript;
use crate::error::Result;
use tracing::info_span;

pub fn pointers_and_arrays() -> Result<Transcript> {
    let _span = info_span!("demo", name = "pointers_and_arrays").entered();
    let mut t = Transcript::new("Pointers and Arrays");

    t.section("1. Declaring Pointers and Arrays");
    let numbers = FixedBlock::bind([10, 20, 30, 40, 50]);
    let size = numbers.len() as isize;
    let ptr = numbers.decay();
    t.line("Array first element", numbers.try_index(0)?);
    // SAFETY: `ptr` is element 0 of `numbers`.
    t.line("Pointer points to", unsafe { ptr.read() });

    t.section("2. Address of Array Elements");
    t.address("Address of numbers array", numbers.address());
    t.address("Address of numbers[0]", ptr.address());
    t.address("Address of numbers[1]", ptr.offset(1).address());
    t.line("Bytes between elements", ptr.offset(1).byte_distance(ptr));
    t.line("Elements between", ptr.offset(1).address_distance(ptr));

    t.section("3. Dereferencing Pointers");
    let mut value = 42;
    let p_value = AddressHandle::address_of(&mut value);
    // SAFETY: `value` outlives every use of `p_value` below.
    t.line("Dereferenced value", unsafe { p_value.read() });
    // SAFETY: as above; `value` is not borrowed while the write happens.
    unsafe { p_value.write(99) };
    t.text("After modification through pointer:");
    t.line("value is now", value);

    t.section("4. Pointer Arithmetic");
    let start = numbers.decay();
    // SAFETY: every offset below stays within 0..size.
    unsafe {
        t.line("start points to", start.read());
        t.line("start + 0 points to", start.offset(0).read());
        t.line("start + 1 points to", start.offset(1).read());
        t.line("start + 3 points to", start.offset(3).read());
        let end = start.offset(size - 1);
        t.line("start + size - 1 points to", end.read());
    }
    let walked: Vec<String> = numbers.walk().map(|v| v.to_string()).collect();
    t.line("Walking with pointer", walked.join(" "));

    Ok(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_values() {
        let t = pointers_and_arrays().unwrap();
        assert_eq!(t.value_of("Pointer points to"), Some("10"));
        assert_eq!(t.value_of("Bytes between elements"), Some("4"));
        assert_eq!(t.value_of("Elements between"), Some("1"));
        assert_eq!(t.value_of("Dereferenced value"), Some("42"));
        assert_eq!(t.value_of("value is now"), Some("99"));
        assert_eq!(t.value_of("start + 1 points to"), Some("20"));
        assert_eq!(t.value_of("start + 3 points to"), Some("40"));
        assert_eq!(t.value_of("start + size - 1 points to"), Some("50"));
        assert_eq!(t.value_of("Walking with pointer"), Some("10 20 30 40 50"));
    }
}
