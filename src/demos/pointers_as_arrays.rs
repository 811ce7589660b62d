//! Bracket indexing on a handle and its equivalence to offset-then-read.

use crate::core::FixedBlock;
use crate::demos::transcript::Transcript;
use crate::error::Result;
use tracing::info_span;

pub fn pointers_as_arrays() -> Result<Transcript> {
    let _span = info_span!("demo", name = "pointers_as_arrays").entered();
    let mut t = Transcript::new("Treating Pointers as Arrays");

    let data = FixedBlock::bind([100, 200, 300, 400, 500]);
    let size = data.len() as isize;
    let ptr = data.decay();

    t.section("1. Bracket Indexing on a Pointer");
    t.line("Array access", format!("data[0] = {}", data.try_index(0)?));
    // SAFETY: indices 0, 2 and 4 are within the five elements.
    unsafe {
        t.line("Pointer access", format!("ptr[0] = {}", ptr.read_at(0)));
        t.line("Pointer access", format!("ptr[2] = {}", ptr.read_at(2)));
        t.line("Pointer access", format!("ptr[4] = {}", ptr.read_at(4)));
    }
    // ptr[5] would compile and read past the block; the checked form refuses.
    match data.try_index(size) {
        Ok(v) => t.line("Checked access", format!("data[{}] = {}", size, v)),
        Err(e) => t.line("Checked access", e),
    }

    t.section("2. Looping with Pointer Using [] Syntax");
    for i in 0..size {
        // SAFETY: `i < size`.
        t.text(format!("ptr[{}] = {}", i, unsafe { ptr.read_at(i) }));
    }

    t.text("");
    t.text("Bonus - these are equivalent:");
    // SAFETY: index 2 is in range.
    unsafe {
        t.line("  ptr[2]     ", ptr.read_at(2));
        t.line("  *(ptr + 2) ", ptr.offset(2).read());
    }

    t.section("3. Writing Through a Pointer");
    // SAFETY: element 0 is in range and no reference into `data` is live.
    unsafe { ptr.write(99) };
    t.line("After *ptr = 99, data[0]", data.try_index(0)?);
    t.line("Distance ptr + 1 - ptr", ptr.offset(1).address_distance(ptr));

    Ok(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_values() {
        let t = pointers_as_arrays().unwrap();
        let text = t.render_text(false);
        assert!(text.contains("Array access: data[0] = 100\n"));
        assert!(text.contains("Pointer access: ptr[0] = 100\n"));
        assert!(text.contains("Pointer access: ptr[2] = 300\n"));
        assert!(text.contains("Pointer access: ptr[4] = 500\n"));
        assert!(text.contains("ptr[3] = 400\n"));
        assert_eq!(
            t.value_of("Checked access"),
            Some("index 5 out of range for block of 5 elements")
        );
        assert_eq!(t.value_of("  ptr[2]     "), t.value_of("  *(ptr + 2) "));
        assert_eq!(t.value_of("After *ptr = 99, data[0]"), Some("99"));
        assert_eq!(t.value_of("Distance ptr + 1 - ptr"), Some("1"));
    }
}
