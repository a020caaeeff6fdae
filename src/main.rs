use clap::Parser;
use phonejoin::cli;
use phonejoin::error::JoinResult;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "phonejoin")]
#[command(about = "Join phone numbers from CSV/XLS/XLSX batches into one deduplicated list")]
#[command(long_about = "Phonejoin - batch phone number extraction

Reads every given file (directories are expanded recursively), detects the
format from its bytes, finds the column that holds phone numbers, and
writes all distinct numbers as 11-digit `7...` values, one per line.

COLUMN SELECTION:
  By default the leftmost column where >90% of cells look like phone
  numbers is used; when no column is that clean, the best column above
  50% is taken. Use -c to force a column, --all to take every clean one.

EXAMPLES:
  phonejoin contacts.xlsx legacy.xls export/           # mixed batch
  phonejoin leads.csv -c B -o leads.txt                # explicit column
  phonejoin dump/ --all --no-sort                      # keep first-seen order")]
#[command(version)]
struct Cli {
    /// Input files or directories (directories are walked recursively)
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// The path to output data to
    #[arg(short, long, default_value = "numbers.txt")]
    output: PathBuf,

    /// The column (e.g. A, B, AB) to process from each table
    #[arg(short, long)]
    column: Option<String>,

    /// Use every suggested column from each table (>90% valid)
    #[arg(long)]
    all: bool,

    /// Keep first-seen order instead of sorting the export
    #[arg(long)]
    no_sort: bool,

    /// The logging level used to print information
    #[arg(short = 'l', long, default_value = "info", env = "PHONEJOIN_LOG")]
    logging: String,
}

fn main() -> JoinResult<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.logging).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    cli::export(cli.input, cli.output, cli.column, cli.all, !cli.no_sort)
}
