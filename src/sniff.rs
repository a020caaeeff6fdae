//! Byte-signature classification of input files.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// The three tabular encodings the pipeline understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// Delimited text, the fallback when no binary signature matches.
    Delimited,
    /// Legacy binary workbook (BIFF8 .xls).
    Xls,
    /// Zip-container workbook (.xlsx).
    Xlsx,
}

struct Signature {
    format: TableFormat,
    bytes: &'static [u8],
    seek: SeekFrom,
}

// The xlsx check looks for the zip end-of-central-directory record at its
// fixed distance from the end of the file; the xls check looks for the
// BIFF8 BOF record at the sector offsets used by Excel, Calc, and files
// that have been re-saved between the two.
const XLSX_SIG: &[u8] = &[0x50, 0x4B, 0x05, 0x06];
const XLS_SIG: &[u8] = &[0x09, 0x08, 0x10, 0x00, 0x00, 0x06, 0x05, 0x00];

static SIGNATURES: [Signature; 4] = [
    Signature {
        format: TableFormat::Xlsx,
        bytes: XLSX_SIG,
        seek: SeekFrom::End(-22),
    },
    Signature {
        format: TableFormat::Xls,
        bytes: XLS_SIG,
        seek: SeekFrom::Start(512),
    },
    Signature {
        format: TableFormat::Xls,
        bytes: XLS_SIG,
        seek: SeekFrom::Start(1536),
    },
    Signature {
        format: TableFormat::Xls,
        bytes: XLS_SIG,
        seek: SeekFrom::Start(2048),
    },
];

/// Classify a file by probing the known signature offsets, first match
/// wins. A file that is too short for a probe, or unreadable at one, is
/// simply "not that format"; when nothing matches the file is treated as
/// delimited text.
pub fn detect_format(path: &Path) -> TableFormat {
    for signature in &SIGNATURES {
        if matches_signature(path, signature).unwrap_or(false) {
            return signature.format;
        }
    }
    TableFormat::Delimited
}

fn matches_signature(path: &Path, signature: &Signature) -> std::io::Result<bool> {
    let mut file = File::open(path)?;
    file.seek(signature.seek)?;
    let mut buffer = vec![0u8; signature.bytes.len()];
    match file.read_exact(&mut buffer) {
        Ok(()) => Ok(buffer == signature.bytes),
        // Short read past EOF: the probe window does not exist.
        Err(_) => Ok(false),
    }
}
