use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use freqcrack::config::{DEFAULT_OUTPUT, DEFAULT_PREFIX_LEN, DEFAULT_SHIFTS, MAX_WIDTH, MIN_WIDTH};
use freqcrack::io_utils::{crack_cli_error, io_cli_error, simple_cli_error};
use freqcrack::{
    analyze_text, read_input, write_output, AnalysisConfig, CaesarPolicy, CrackError,
    WindowBoundary,
};

/// Analyze the statistical properties of a text file: n-gram distribution,
/// Caesar brute force and a frequency-matched substitution guess.
#[derive(Parser)]
#[command(name = "freqcrack")]
struct Args {
    /// Input file to analyze
    #[arg(short = 'i', long = "input_file_name")]
    input: PathBuf,
    /// N-gram width to print (1 to 20)
    #[arg(short = 'n', long = "choice", allow_negative_numbers = true)]
    choice: i64,
    /// Number of Caesar shifts to print
    #[arg(long, default_value_t = DEFAULT_SHIFTS)]
    shifts: usize,
    /// Number of leading characters fed to the Caesar check
    #[arg(long, default_value_t = DEFAULT_PREFIX_LEN)]
    prefix_len: usize,
    /// Reject non-letter characters in the Caesar prefix instead of normalizing
    #[arg(long)]
    strict_caesar: bool,
    /// Skip the final two windows like the old script did
    #[arg(long)]
    legacy_window: bool,
    /// Do not build the substitution guess or write the output file
    #[arg(long)]
    no_guess: bool,
    /// Destination of the substitution guess
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Optional JSON output path for the full report
    #[arg(long)]
    json: Option<PathBuf>,
    /// Optional CSV output path for the n-gram distribution
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Only print the first N distribution rows
    #[arg(long)]
    top: Option<usize>,
    /// Suppress progress messages on stderr
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if args.top == Some(0) {
        return Err(simple_cli_error("--top must be at least 1").into());
    }

    let width = usize::try_from(args.choice).map_err(|_| {
        simple_cli_error(&format!(
            "invalid arguments: invalid n-gram width {}: expected {MIN_WIDTH}..={MAX_WIDTH}. \
             Please pick an integer choice from {MIN_WIDTH} to {MAX_WIDTH}.",
            args.choice
        ))
    })?;
    let config = AnalysisConfig {
        width,
        boundary: if args.legacy_window {
            WindowBoundary::Legacy
        } else {
            WindowBoundary::Exact
        },
        caesar_shifts: args.shifts,
        caesar_prefix_len: args.prefix_len,
        caesar_policy: if args.strict_caesar {
            CaesarPolicy::Strict
        } else {
            CaesarPolicy::Normalize
        },
        output: (!args.no_guess).then(|| args.output.clone()),
    };
    config
        .validate()
        .map_err(|e| crack_cli_error("invalid arguments", e))?;

    let start = Instant::now();
    let text = read_input(&args.input).map_err(|e| match e {
        CrackError::Io(io) => io_cli_error("reading input file", &args.input, io),
        other => crack_cli_error("reading input file", other),
    })?;
    let report =
        analyze_text(&text, &config).map_err(|e| crack_cli_error("analysis failed", e))?;
    if let (Some(path), Some(decryption)) = (&config.output, &report.decryption) {
        write_output(path, decryption).map_err(|e| match e {
            CrackError::Io(io) => io_cli_error("writing output file", path, io),
            other => crack_cli_error("writing output file", other),
        })?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report.write_text(&mut out, args.top)?;
    out.flush()?;

    if let Some(path) = &args.json {
        let f = File::create(path).map_err(|e| io_cli_error("creating json", path, e))?;
        let mut w = BufWriter::new(f);
        report
            .write_json(&mut w)
            .map_err(|e| crack_cli_error("writing json", e))?;
        w.flush().map_err(|e| io_cli_error("writing json", path, e))?;
    }
    if let Some(path) = &args.csv {
        let f = File::create(path).map_err(|e| io_cli_error("creating csv", path, e))?;
        report
            .write_csv(f)
            .map_err(|e| crack_cli_error("writing csv", e))?;
    }

    if !args.quiet {
        eprintln!(
            "Analyzed {} characters ({} windows of width {}) in {:.2?}",
            report.text_len,
            report.windows,
            report.width,
            start.elapsed()
        );
        if let Some(path) = &config.output {
            eprintln!("Wrote substitution guess to {}", path.display());
        }
    }
    Ok(())
}
