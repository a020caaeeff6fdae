//! Phone number canonicalization.
//!
//! A canonical phone number is exactly 11 ASCII digits starting with `7`.
//! Anything that does not reduce to 10 or 11 digits is not a phone number.

use crate::types::Cell;

/// Normalize one raw string into a canonical phone number.
///
/// Every non-digit character is stripped first, so formatted values like
/// `+7 (999) 123-45-67` and bare values like `89991234567` are both
/// accepted. An 11-digit residue is returned unchanged; a 10-digit residue
/// gets the `7` country prefix; any other length is rejected.
pub fn normalize(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.len() {
        11 => Some(digits),
        10 => Some(format!("7{digits}")),
        _ => None,
    }
}

/// Normalize one cell. Empty cells never produce a phone number.
pub fn normalize_cell(cell: &Cell) -> Option<String> {
    normalize(&cell.to_text()?)
}
