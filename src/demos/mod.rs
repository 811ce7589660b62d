//! Console demonstrations of the array/pointer relationship.
//!
//! Each demonstration binds its own block, exercises the core through
//! `decay`, `offset`, `read`, `walk` and the distance operations, and
//! records what it sees in a [`Transcript`]. Nothing here prints.

pub mod arrays_as_pointers;
pub mod pointers_and_arrays;
pub mod pointers_as_arrays;
pub mod transcript;

pub use arrays_as_pointers::arrays_as_pointers;
pub use pointers_and_arrays::pointers_and_arrays;
pub use pointers_as_arrays::pointers_as_arrays;
pub use transcript::{Entry, Transcript};

use crate::config::{DemoConfig, DemoSelection, OutputFormat};
use crate::error::Result;
use tracing::info;

/// Run the selected demonstrations in their fixed order.
pub fn run_all(selection: &DemoSelection) -> Result<Vec<Transcript>> {
    let mut transcripts = Vec::new();
    if selection.pointers_and_arrays {
        transcripts.push(pointers_and_arrays()?);
    }
    if selection.arrays_as_pointers {
        transcripts.push(arrays_as_pointers()?);
    }
    if selection.pointers_as_arrays {
        transcripts.push(pointers_as_arrays()?);
    }
    info!(count = transcripts.len(), "demonstrations complete");
    Ok(transcripts)
}

/// Render transcripts the way `config` asks for.
///
/// Text transcripts are separated by a blank line; JSON output is a single
/// array.
pub fn render(transcripts: &[Transcript], config: &DemoConfig) -> Result<String> {
    match config.output {
        OutputFormat::Text => Ok(transcripts
            .iter()
            .map(|t| t.render_text(config.mask_addresses))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            let shown: Vec<Transcript> = if config.mask_addresses {
                transcripts.iter().map(Transcript::masked).collect()
            } else {
                transcripts.to_vec()
            };
            Ok(serde_json::to_string_pretty(&shown)?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_all_order() {
        let transcripts = run_all(&DemoSelection::default()).unwrap();
        let titles: Vec<&str> = transcripts.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Pointers and Arrays",
                "Treating Arrays as Pointers",
                "Treating Pointers as Arrays"
            ]
        );
    }

    #[test]
    fn test_selection_skips_disabled() {
        let selection = DemoSelection {
            pointers_and_arrays: false,
            arrays_as_pointers: true,
            pointers_as_arrays: false,
        };
        let transcripts = run_all(&selection).unwrap();
        assert_eq!(transcripts.len(), 1);
        assert_eq!(transcripts[0].title, "Treating Arrays as Pointers");
    }

    #[test]
    fn test_render_json_is_array() {
        let config = DemoConfig {
            output: OutputFormat::Json,
            mask_addresses: true,
            ..DemoConfig::default()
        };
        let transcripts = run_all(&config.demos).unwrap();
        let json = render(&transcripts, &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(3));
        assert!(!json.contains("\"kind\": \"address\""));
    }
}
