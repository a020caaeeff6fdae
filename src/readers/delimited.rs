//! Delimited-text reader with first-line delimiter sniffing.

use crate::error::{JoinError, JoinResult};
use crate::readers::SheetRows;
use crate::types::Cell;
use csv::ReaderBuilder;
use std::fs;
use std::path::Path;

/// Delimiters the sniffer chooses between, in tie-break order.
const DELIMITER_CANDIDATES: [u8; 3] = [b',', b';', b'|'];

/// Comma wins when the first line contains no candidate at all.
const DEFAULT_DELIMITER: u8 = b',';

/// Read every row of a delimited text file as text cells.
///
/// The file must be valid UTF-8; anything else is a per-file parse
/// failure, reported by the caller and skipped. Rows may have unequal
/// lengths and no header row is assumed.
pub fn read_rows(path: &Path) -> JoinResult<SheetRows> {
    let content = fs::read_to_string(path)
        .map_err(|e| JoinError::Encoding(format!("{}: {e}", path.display())))?;
    let delimiter = content
        .lines()
        .next()
        .map(sniff_delimiter)
        .unwrap_or(DEFAULT_DELIMITER);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(
            record
                .iter()
                .map(|field| Cell::Text(field.to_string()))
                .collect(),
        );
    }
    Ok(rows)
}

/// Pick the most frequent candidate delimiter in a line. Ties resolve to
/// the earlier candidate.
fn sniff_delimiter(line: &str) -> u8 {
    let mut best = DEFAULT_DELIMITER;
    let mut best_count = 0;
    for candidate in DELIMITER_CANDIDATES {
        let count = line.bytes().filter(|b| *b == candidate).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}
