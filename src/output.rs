//! Final phone list writer.

use crate::error::JoinResult;
use crate::types::PhoneSet;
use std::fs;
use std::path::Path;

/// Write one phone number per line to `path`, creating parent directories
/// as needed. With `sort` the list is ordered lexicographically, otherwise
/// first-seen order is kept.
pub fn write_phones(path: &Path, phones: &PhoneSet, sort: bool) -> JoinResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut lines: Vec<&str> = phones.iter().map(String::as_str).collect();
    if sort {
        lines.sort_unstable();
    }

    let mut content = lines.join("\n");
    if !content.is_empty() {
        content.push('\n');
    }
    fs::write(path, content)?;
    Ok(())
}
