//! Phonejoin - phone number extraction from mixed tabular batches
//!
//! This library ingests delimited text files and binary spreadsheets,
//! finds the column most likely to contain phone numbers, normalizes every
//! value to the canonical 11-digit form, and deduplicates across all
//! inputs.
//!
//! # Pipeline
//!
//! - Byte-signature sniffing classifies each file as CSV, .xls or .xlsx
//! - A validity-ratio heuristic picks the phone column (or an explicit
//!   column label overrides it)
//! - Values are normalized to 11 ASCII digits starting with `7`
//! - Results merge into one insertion-ordered, deduplicated set
//!
//! # Example
//!
//! ```no_run
//! use phonejoin::aggregate::Aggregator;
//! use phonejoin::types::ExtractOptions;
//! use std::path::Path;
//!
//! let mut aggregator = Aggregator::new(ExtractOptions::default());
//! let outcome = aggregator.ingest(Path::new("contacts.xlsx"));
//! println!("{outcome:?}");
//!
//! for phone in aggregator.finish() {
//!     println!("{phone}");
//! }
//! ```

pub mod aggregate;
pub mod cli;
pub mod column;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod output;
pub mod readers;
pub mod sniff;
pub mod types;

// Re-export commonly used types
pub use error::{JoinError, JoinResult};
pub use types::{Cell, ExtractOptions, FileOutcome, PhoneSet};
