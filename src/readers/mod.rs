//! Row-producing readers for the three supported encodings.

pub mod delimited;
pub mod workbook;

use crate::types::Cell;

/// The rows of one sheet or table, in source order.
pub type SheetRows = Vec<Vec<Cell>>;
