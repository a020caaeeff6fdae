//! Batch driver: expand inputs, classify each file, extract, merge.

use crate::error::JoinResult;
use crate::extract::extract_phones;
use crate::readers::{delimited, workbook};
use crate::sniff::{detect_format, TableFormat};
use crate::types::{ExtractOptions, FileOutcome, PhoneSet};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Expand user-given paths into a flat, ordered list of files.
/// Directories are walked recursively; only regular files are kept.
pub fn expand_inputs(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path).into_iter().filter_map(Result::ok) {
                if entry.file_type().is_file() {
                    files.push(entry.into_path());
                }
            }
        } else {
            files.push(path.clone());
        }
    }
    files
}

/// Accumulates phone numbers across a batch of files.
///
/// Files are processed strictly one at a time, in input order. A failing
/// file is reported and skipped; it never aborts the batch. The aggregate
/// set grows monotonically: once a phone is present, later occurrences are
/// counted as duplicates and otherwise ignored.
pub struct Aggregator {
    options: ExtractOptions,
    phones: PhoneSet,
}

impl Aggregator {
    pub fn new(options: ExtractOptions) -> Self {
        Self {
            options,
            phones: PhoneSet::new(),
        }
    }

    /// Process one file and merge its phones into the aggregate.
    pub fn ingest(&mut self, path: &Path) -> FileOutcome {
        let file_phones = match self.collect_phones(path) {
            Ok(phones) => phones,
            Err(err) => return FileOutcome::Failed(err),
        };
        if file_phones.is_empty() {
            return FileOutcome::Empty;
        }

        let mut new = 0;
        let mut duplicates = 0;
        for phone in file_phones {
            if self.phones.insert(phone) {
                new += 1;
            } else {
                duplicates += 1;
            }
        }
        FileOutcome::Extracted { new, duplicates }
    }

    /// Classify the file, read its sheets, and extract one deduplicated
    /// set for the whole file.
    fn collect_phones(&self, path: &Path) -> JoinResult<PhoneSet> {
        let sheets = match detect_format(path) {
            TableFormat::Xls => workbook::read_xls(path)?,
            TableFormat::Xlsx => workbook::read_xlsx(path)?,
            TableFormat::Delimited => vec![delimited::read_rows(path)?],
        };

        let mut phones = PhoneSet::new();
        for rows in sheets {
            phones.extend(extract_phones(&rows, &self.options));
        }
        Ok(phones)
    }

    /// Hand the aggregate over once the batch is done.
    pub fn finish(self) -> PhoneSet {
        self.phones
    }
}
