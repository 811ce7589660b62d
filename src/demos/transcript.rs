//! Recorded demonstration output.
//!
//! Demos never print directly. They record entries here and the driver
//! decides how to render them. Addresses are kept as `Address` values until
//! rendering so they can be masked for deterministic output.

use crate::core::Address;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Write};

/// Placeholder printed instead of an address when masking.
pub const MASKED_ADDRESS: &str = "<address>";

/// One recorded line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entry {
    /// `--- name ---` heading, preceded by a blank line in text output.
    Section { name: String },
    /// `label: value`
    Line { label: String, value: String },
    /// `label: 0x...`
    Address { label: String, address: Address },
    /// Free text, printed verbatim.
    Text { text: String },
}

/// Output of one demonstration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub title: String,
    pub entries: Vec<Entry>,
}

impl Transcript {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    pub fn section(&mut self, name: impl Into<String>) {
        self.entries.push(Entry::Section { name: name.into() });
    }

    pub fn line(&mut self, label: impl Into<String>, value: impl Display) {
        self.entries.push(Entry::Line {
            label: label.into(),
            value: value.to_string(),
        });
    }

    pub fn address(&mut self, label: impl Into<String>, address: Address) {
        self.entries.push(Entry::Address {
            label: label.into(),
            address,
        });
    }

    pub fn text(&mut self, text: impl Into<String>) {
        self.entries.push(Entry::Text { text: text.into() });
    }

    /// Value of the first `Line` entry with this label.
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.entries.iter().find_map(|entry| match entry {
            Entry::Line { label: l, value } if l == label => Some(value.as_str()),
            _ => None,
        })
    }

    /// Copy with every address entry turned into a masked line.
    pub fn masked(&self) -> Self {
        let entries = self
            .entries
            .iter()
            .map(|entry| match entry {
                Entry::Address { label, .. } => Entry::Line {
                    label: label.clone(),
                    value: MASKED_ADDRESS.to_string(),
                },
                other => other.clone(),
            })
            .collect();
        Self {
            title: self.title.clone(),
            entries,
        }
    }

    /// Render as console text, one entry per line.
    pub fn render_text(&self, mask_addresses: bool) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_text(&mut out, mask_addresses);
        out
    }

    fn write_text(&self, out: &mut String, mask_addresses: bool) -> fmt::Result {
        writeln!(out, "=== {} ===", self.title)?;
        for entry in &self.entries {
            match entry {
                Entry::Section { name } => writeln!(out, "\n--- {} ---", name)?,
                Entry::Line { label, value } => writeln!(out, "{}: {}", label, value)?,
                Entry::Address { label, .. } if mask_addresses => {
                    writeln!(out, "{}: {}", label, MASKED_ADDRESS)?
                }
                Entry::Address { label, address } => writeln!(out, "{}: {}", label, address)?,
                Entry::Text { text } => writeln!(out, "{}", text)?,
            }
        }
        Ok(())
    }

    /// Serialize to JSON string.
    pub fn to_json(&self, mask_addresses: bool) -> Result<String> {
        if mask_addresses {
            Ok(serde_json::to_string_pretty(&self.masked())?)
        } else {
            Ok(serde_json::to_string_pretty(self)?)
        }
    }
}
