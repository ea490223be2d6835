//! Rostermerge CLI - merge duplicate student rows in roster exports.
//!
//! ```bash
//! rostermerge roster.csv             # Merge into roster_updated.csv
//! rostermerge                        # Generate dummy.csv and merge it
//! rostermerge roster.csv -o out.csv  # Explicit output path
//! ```

use clap::Parser;
use rostermerge::{
    parse_roster_file, run_parsed, write_dummy_roster, MergeOptions, PipelineOptions,
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rostermerge")]
#[command(about = "Merge duplicate student rows into numbered guardian columns", long_about = None)]
struct Cli {
    /// Input roster CSV (generates and merges dummy.csv when omitted)
    input: Option<PathBuf>,

    /// Output file (default: input with `_updated` before the extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// CSV delimiter (auto-detect if not specified)
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Keep birthdates exactly as they appear in the input
    #[arg(long)]
    raw_birthdates: bool,

    /// Skip rows whose birthdate does not parse instead of aborting
    #[arg(long)]
    skip_bad_birthdates: bool,

    /// Write the parsed input rows as JSON (debug)
    #[arg(long, value_name = "PATH")]
    dump_json: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run_cli(cli) {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let input = match cli.input {
        Some(path) => path,
        None => {
            let path = PathBuf::from("dummy.csv");
            eprintln!("📄 No input given, generating sample roster: {}", path.display());
            write_dummy_roster(&path)?;
            path
        }
    };

    eprintln!("📄 Merging roster: {}", input.display());

    let options = PipelineOptions {
        output: cli.output,
        delimiter: cli.delimiter.map(|c| c as u8),
        merge: MergeOptions {
            normalize_birthdate: !cli.raw_birthdates,
            skip_bad_birthdates: cli.skip_bad_birthdates,
        },
    };

    let parsed = parse_roster_file(&input, options.delimiter)?;
    eprintln!("   Encoding: {}", parsed.encoding);
    eprintln!("   Delimiter: '{}'", format_delimiter(parsed.delimiter));
    eprintln!("   Columns: {}", parsed.headers.join(", "));
    eprintln!("   Rows: {}", parsed.records.len());

    if let Some(ref dump_path) = cli.dump_json {
        let json = serde_json::to_string_pretty(&parsed.records)?;
        fs::write(dump_path, json)?;
        eprintln!("💾 Parsed rows written to: {}", dump_path.display());
    }

    let report = run_parsed(parsed, &input, &options)?;

    eprintln!(
        "📦 Merged {} rows into {} students ({} guardian column groups)",
        report.input_rows, report.students, report.guardian_slots
    );
    eprintln!("✅ {}", report.summary());

    Ok(())
}

fn format_delimiter(d: u8) -> String {
    match d {
        b'\t' => "\\t".to_string(),
        c => (c as char).to_string(),
    }
}
