//! Shared data model for the extraction pipeline.

use crate::error::JoinError;
use indexmap::IndexSet;

/// A deduplicated set of canonical phone numbers, in order of first
/// appearance. Every member is exactly 11 ASCII digits starting with `7`;
/// the normalizer is the only producer of entries.
pub type PhoneSet = IndexSet<String>;

/// One scalar cell as produced by a source reader.
///
/// Readers convert their native cell representation into this variant at
/// the boundary, so the normalizer never sees format-specific types.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Bool(bool),
    Empty,
}

impl Cell {
    /// Textual representation of the cell, or `None` for an empty cell.
    ///
    /// Integral numbers render without a decimal point, so a phone number
    /// stored as a spreadsheet number keeps its 11 digits.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Cell::Text(s) => Some(s.clone()),
            Cell::Number(n) => Some(n.to_string()),
            Cell::Bool(b) => Some(b.to_string()),
            Cell::Empty => None,
        }
    }
}

/// Column-selection options shared by every table in a batch.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Explicit column label (e.g. `A`, `B`, `AB`). When set, the validity
    /// heuristic is bypassed entirely.
    pub column: Option<String>,
    /// Collect every column above the confident threshold instead of
    /// stopping at the leftmost one.
    pub all_columns: bool,
}

/// What happened to a single input file.
#[derive(Debug)]
pub enum FileOutcome {
    /// Phones were found; counts are relative to the aggregate before the
    /// file was merged in.
    Extracted { new: usize, duplicates: usize },
    /// The file parsed fine but yielded no phone numbers.
    Empty,
    /// The file could not be read or parsed. Never aborts the batch.
    Failed(JoinError),
}
