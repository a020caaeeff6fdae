//! Column selection and per-table phone extraction.
//!
//! Given the rows of one table, this module decides which column(s) hold
//! phone numbers and returns their normalized, deduplicated values. The
//! caller either names a column explicitly or leaves the choice to a
//! validity-ratio heuristic: a column where more than 90% of cells
//! normalize is taken on sight, and if no column clears that bar the best
//! column overall is used as long as more than half of its cells qualify.

use crate::column::column_index;
use crate::normalize::normalize_cell;
use crate::types::{Cell, ExtractOptions, PhoneSet};

/// A column is selected without question above this validity ratio.
pub const CONFIDENT_THRESHOLD: f64 = 0.9;

/// The best-effort fallback column must exceed this validity ratio.
pub const FALLBACK_THRESHOLD: f64 = 0.5;

/// Extract the deduplicated phone numbers of one table.
///
/// Rows may have unequal lengths; missing trailing cells count as empty.
/// With an explicit column the heuristic is bypassed: only that column is
/// read, and an out-of-range index yields an empty result. Otherwise
/// columns are scanned left to right and the first confident column wins,
/// unless `all_columns` asks for every confident column.
pub fn extract_phones(rows: &[Vec<Cell>], options: &ExtractOptions) -> PhoneSet {
    let columns = transpose(rows);

    if let Some(label) = &options.column {
        return match columns.get(column_index(label)) {
            Some(column) => normalize_column(column),
            None => PhoneSet::new(),
        };
    }

    let mut phones = PhoneSet::new();
    let mut stats: Vec<(PhoneSet, f64)> = Vec::with_capacity(columns.len());

    for column in &columns {
        let normalized: Vec<String> = column.iter().filter_map(normalize_cell).collect();
        // Ratio counts normalizable cells, not distinct values.
        let ratio = normalized.len() as f64 / column.len() as f64;
        let column_phones: PhoneSet = normalized.into_iter().collect();
        let confident = ratio > CONFIDENT_THRESHOLD;
        if confident {
            phones.extend(column_phones.iter().cloned());
        }
        stats.push((column_phones, ratio));
        if confident && !options.all_columns {
            break;
        }
    }

    if phones.is_empty() {
        // Best-effort pass: the highest-ratio column, rightmost on ties.
        let best = stats
            .iter()
            .enumerate()
            .max_by(|(_, (_, a)), (_, (_, b))| a.total_cmp(b))
            .map(|(index, (_, ratio))| (index, *ratio));
        if let Some((index, ratio)) = best {
            if ratio > FALLBACK_THRESHOLD {
                return std::mem::take(&mut stats[index].0);
            }
        }
    }
    phones
}

/// Rotate rows into columns, padding short rows with empty cells so every
/// column has one entry per row.
fn transpose(rows: &[Vec<Cell>]) -> Vec<Vec<Cell>> {
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut columns = vec![Vec::with_capacity(rows.len()); width];
    for row in rows {
        for (index, column) in columns.iter_mut().enumerate() {
            column.push(row.get(index).cloned().unwrap_or(Cell::Empty));
        }
    }
    columns
}

fn normalize_column(column: &[Cell]) -> PhoneSet {
    column.iter().filter_map(normalize_cell).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text_rows(rows: &[&[&str]]) -> Vec<Vec<Cell>> {
        rows.iter()
            .map(|row| row.iter().map(|s| Cell::Text(s.to_string())).collect())
            .collect()
    }

    fn phones(values: &[&str]) -> PhoneSet {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn confident_column_is_taken_on_sight() {
        let rows = text_rows(&[
            &["Alice", "79991234567"],
            &["Bob", "79991234568"],
            &["Carol", "79991234569"],
        ]);
        let result = extract_phones(&rows, &ExtractOptions::default());
        assert_eq!(
            result,
            phones(&["79991234567", "79991234568", "79991234569"])
        );
    }

    #[test]
    fn leftmost_confident_column_wins_without_all_flag() {
        let rows = text_rows(&[
            &["79991110001", "79992220001"],
            &["79991110002", "79992220002"],
        ]);
        let result = extract_phones(&rows, &ExtractOptions::default());
        assert_eq!(result, phones(&["79991110001", "79991110002"]));
    }

    #[test]
    fn all_flag_collects_every_confident_column() {
        let rows = text_rows(&[
            &["79991110001", "79992220001"],
            &["79991110002", "79992220002"],
        ]);
        let options = ExtractOptions {
            all_columns: true,
            ..Default::default()
        };
        let result = extract_phones(&rows, &options);
        assert_eq!(
            result,
            phones(&[
                "79991110001",
                "79991110002",
                "79992220001",
                "79992220002"
            ])
        );
    }

    #[test]
    fn best_effort_fallback_when_no_column_is_confident() {
        // Phone column is 2/3 valid: above 0.5, below 0.9.
        let rows = text_rows(&[
            &["Alice", "+7 (999) 123-45-67", "34"],
            &["Bob", "89991234567", "41"],
            &["Carol", "abc", "29"],
        ]);
        let result = extract_phones(&rows, &ExtractOptions::default());
        // The two valid inputs differ in their leading digit, so they stay
        // distinct canonical values.
        assert_eq!(result, phones(&["79991234567", "89991234567"]));
    }

    #[test]
    fn nothing_clears_the_fallback_threshold() {
        let rows = text_rows(&[
            &["Alice", "79991234567"],
            &["Bob", "nope"],
            &["Carol", "nope"],
            &["Dave", "nope"],
        ]);
        let result = extract_phones(&rows, &ExtractOptions::default());
        assert!(result.is_empty());
    }

    #[test]
    fn rightmost_column_wins_a_ratio_tie() {
        // Both columns are 1/2 valid; the fallback picks the later one.
        let rows = text_rows(&[
            &["79991110001", "79992220001"],
            &["nope", "nah"],
        ]);
        let result = extract_phones(&rows, &ExtractOptions::default());
        assert_eq!(result, phones(&["79992220001"]));
    }

    #[test]
    fn explicit_column_bypasses_the_heuristic() {
        // Column B is 1/3 valid, far below every threshold, but it was
        // asked for by name.
        let rows = text_rows(&[
            &["79991110001", "x"],
            &["79991110002", "y"],
            &["79991110003", "89991234567"],
        ]);
        let options = ExtractOptions {
            column: Some("B".to_string()),
            ..Default::default()
        };
        let result = extract_phones(&rows, &options);
        assert_eq!(result, phones(&["89991234567"]));
    }

    #[test]
    fn explicit_column_out_of_range_yields_nothing() {
        let rows = text_rows(&[&["79991234567"]]);
        let options = ExtractOptions {
            column: Some("Z".to_string()),
            ..Default::default()
        };
        assert!(extract_phones(&rows, &options).is_empty());
    }

    #[test]
    fn short_rows_are_padded_with_empty_cells() {
        // The second row has no phone cell, so the padded column is 3/4
        // valid: below the confident threshold, caught by the fallback.
        let rows = vec![
            vec![
                Cell::Text("Alice".into()),
                Cell::Text("79991110001".into()),
            ],
            vec![Cell::Text("Bob".into())],
            vec![
                Cell::Text("Carol".into()),
                Cell::Text("79991110002".into()),
            ],
            vec![
                Cell::Text("Dave".into()),
                Cell::Text("79991110003".into()),
            ],
        ];
        let result = extract_phones(&rows, &ExtractOptions::default());
        assert_eq!(
            result,
            phones(&["79991110001", "79991110002", "79991110003"])
        );
    }

    #[test]
    fn empty_table_yields_nothing() {
        assert!(extract_phones(&[], &ExtractOptions::default()).is_empty());
    }

    #[test]
    fn duplicates_within_a_column_collapse_in_first_seen_order() {
        let rows = text_rows(&[
            &["89991234567"],
            &["79991234567"],
            &["8 (999) 123-45-67"],
        ]);
        let result = extract_phones(&rows, &ExtractOptions::default());
        let ordered: Vec<&String> = result.iter().collect();
        assert_eq!(ordered, ["89991234567", "79991234567"]);
    }

    #[test]
    fn nonsense_explicit_label_selects_the_first_column() {
        // Known quirk inherited from the column resolver: an all-invalid
        // label resolves to index 0 instead of being rejected.
        let rows = text_rows(&[&["79991234567", "x"]]);
        let options = ExtractOptions {
            column: Some("?!".to_string()),
            ..Default::default()
        };
        let result = extract_phones(&rows, &options);
        assert_eq!(result, phones(&["79991234567"]));
    }
}
