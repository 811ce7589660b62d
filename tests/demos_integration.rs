//! Full demonstration output with addresses masked.

use arrayview::config::{DemoConfig, DemoSelection, OutputFormat};
use arrayview::demos::{self, arrays_as_pointers, pointers_as_arrays, Entry, Transcript};

const ARRAYS_AS_POINTERS: &str = "\
=== Treating Arrays as Pointers ===

--- 1. Array Decay to Pointer ---
Inside print_array (received as pointer):
  *(arr + 0) = 95
  *(arr + 1) = 87
  *(arr + 2) = 72
  *(arr + 3) = 91
  *(arr + 4) = 88

--- 2. Pointer Arithmetic on Array Name ---
grades itself points to address: <address>
First element (*grades): 95
Third element *(grades + 2): 72
Fifth element *(grades + 4): 88

Key difference: arrays can't be reassigned:
  ptr = grades: <address>
  after ptr = null, ptr is null: true
  grades still at: <address>
";

const POINTERS_AS_ARRAYS: &str = "\
=== Treating Pointers as Arrays ===

--- 1. Bracket Indexing on a Pointer ---
Array access: data[0] = 100
Pointer access: ptr[0] = 100
Pointer access: ptr[2] = 300
Pointer access: ptr[4] = 500
Checked access: index 5 out of range for block of 5 elements

--- 2. Looping with Pointer Using [] Syntax ---
ptr[0] = 100
ptr[1] = 200
ptr[2] = 300
ptr[3] = 400
ptr[4] = 500

Bonus - these are equivalent:
  ptr[2]     : 300
  *(ptr + 2) : 300

--- 3. Writing Through a Pointer ---
After *ptr = 99, data[0]: 99
Distance ptr + 1 - ptr: 1
";

#[test]
fn arrays_as_pointers_text() {
    let t = arrays_as_pointers().unwrap();
    assert_eq!(t.render_text(true), ARRAYS_AS_POINTERS);
}

#[test]
fn pointers_as_arrays_text() {
    let t = pointers_as_arrays().unwrap();
    assert_eq!(t.render_text(true), POINTERS_AS_ARRAYS);
}

#[test]
fn decayed_address_matches_block_address() {
    let t = arrays_as_pointers().unwrap();
    let addresses: Vec<_> = t
        .entries
        .iter()
        .filter_map(|e| match e {
            Entry::Address { address, .. } => Some(*address),
            _ => None,
        })
        .collect();
    assert_eq!(addresses.len(), 3);
    assert!(addresses.iter().all(|a| *a == addresses[0]));
    assert!(!addresses[0].is_null());
}

#[test]
fn unmasked_output_prints_hex_addresses() {
    let t = demos::pointers_and_arrays().unwrap();
    let text = t.render_text(false);
    let line = text
        .lines()
        .find(|l| l.starts_with("Address of numbers[1]: "))
        .unwrap();
    assert!(line.contains("0x"));
}

#[test]
fn render_respects_configuration() {
    let config = DemoConfig {
        demos: DemoSelection {
            pointers_and_arrays: false,
            arrays_as_pointers: true,
            pointers_as_arrays: true,
        },
        output: OutputFormat::Text,
        mask_addresses: true,
        log_json: false,
    };
    let transcripts = demos::run_all(&config.demos).unwrap();
    let rendered = demos::render(&transcripts, &config).unwrap();
    assert_eq!(
        rendered,
        format!("{}\n{}", ARRAYS_AS_POINTERS, POINTERS_AS_ARRAYS)
    );
}

#[test]
fn json_transcripts_roundtrip() {
    let config = DemoConfig {
        output: OutputFormat::Json,
        ..DemoConfig::default()
    };
    let transcripts = demos::run_all(&config.demos).unwrap();
    let rendered = demos::render(&transcripts, &config).unwrap();
    let restored: Vec<Transcript> = serde_json::from_str(&rendered).unwrap();
    assert_eq!(restored, transcripts);
}
