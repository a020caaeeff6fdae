//! Spreadsheet readers built on calamine.
//!
//! Both the legacy binary format and the zip-container format come through
//! here; the caller picks the entry point based on the sniffer's verdict.

use crate::error::JoinResult;
use crate::readers::SheetRows;
use crate::types::Cell;
use calamine::{open_workbook, Data, Reader, Xls, Xlsx};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read every sheet of a legacy binary workbook (.xls).
pub fn read_xls(path: &Path) -> JoinResult<Vec<SheetRows>> {
    let workbook: Xls<_> = open_workbook(path).map_err(calamine::Error::from)?;
    Ok(collect_sheets(workbook))
}

/// Read every sheet of a zip-container workbook (.xlsx).
pub fn read_xlsx(path: &Path) -> JoinResult<Vec<SheetRows>> {
    let workbook: Xlsx<_> = open_workbook(path).map_err(calamine::Error::from)?;
    Ok(collect_sheets(workbook))
}

fn collect_sheets<R>(mut workbook: R) -> Vec<SheetRows>
where
    R: Reader<BufReader<File>>,
{
    let sheet_names = workbook.sheet_names().to_vec();
    let mut sheets = Vec::with_capacity(sheet_names.len());
    for sheet_name in sheet_names {
        // A sheet that fails to decode contributes nothing; the workbook
        // itself already opened, so the other sheets are still usable.
        if let Ok(range) = workbook.worksheet_range(&sheet_name) {
            let rows = range
                .rows()
                .map(|row| row.iter().map(convert_cell).collect())
                .collect();
            sheets.push(rows);
        }
    }
    sheets
}

/// Convert a calamine cell into the pipeline's scalar representation.
fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::String(s) => Cell::Text(s.clone()),
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Bool(*b),
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
        Data::Error(_) | Data::Empty => Cell::Empty,
    }
}
