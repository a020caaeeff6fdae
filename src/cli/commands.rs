use crate::aggregate::{expand_inputs, Aggregator};
use crate::error::JoinResult;
use crate::output::write_phones;
use crate::types::{ExtractOptions, FileOutcome};
use colored::Colorize;
use std::path::PathBuf;
use tracing::{debug, error, info};

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Execute the export run: expand inputs, aggregate every file, write the
/// final list.
///
/// Per-file problems are logged and skipped; only a failure to write the
/// output propagates.
pub fn export(
    inputs: Vec<PathBuf>,
    output: PathBuf,
    column: Option<String>,
    all_columns: bool,
    sort: bool,
) -> JoinResult<()> {
    let files = expand_inputs(&inputs);
    let options = ExtractOptions {
        column,
        all_columns,
    };
    let mut aggregator = Aggregator::new(options);

    for file in &files {
        debug!("Reading `{}`...", file.display());
        match aggregator.ingest(file) {
            FileOutcome::Extracted { new, duplicates } => info!(
                "Got {} phone{} from `{}` ({} duplicate{})!",
                new,
                plural(new),
                file.display(),
                duplicates,
                plural(duplicates),
            ),
            FileOutcome::Empty => info!("Got nothing from `{}`!", file.display()),
            FileOutcome::Failed(err) => error!("Skipping `{}`: {err}", file.display()),
        }
    }

    let phones = aggregator.finish();
    if phones.is_empty() {
        info!("Nothing to export!");
        println!("{}", "Nothing to export".yellow());
        return Ok(());
    }

    info!(
        "Exporting {} phone{} to `{}`!",
        phones.len(),
        plural(phones.len()),
        output.display(),
    );
    write_phones(&output, &phones, sort)?;

    println!(
        "{} {} phone{} -> {}",
        "Exported".bold().green(),
        phones.len(),
        plural(phones.len()),
        output.display(),
    );
    Ok(())
}
