//! keycalc: terminal front end for the push-button calculator
//!
//! ## Usage
//!
//! ```bash
//! echo "12 + 7 =" | keycalc              # prints 19
//! keycalc --degrees                      # interactive, sin/cos/tan in degrees
//! keycalc --config keycalc.json -vv      # settings from JSON, debug logging
//! ```
//!
//! Each input line is split on whitespace. Tokens are keyboard keys
//! (`Enter`, `Escape`, `*`) or keypad labels (`sin`, `MS`, `2nd`); runs of
//! digits are typed one key at a time.

use clap::Parser;
use keycalc::config::CalcConfig;
use keycalc::core::evaluator::Evaluator;
use keycalc::core::modes::{AngleMode, Notation};
use keycalc::driver::{CalculatorDriver, KeyboardDriver};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

/// Push-button scientific calculator
#[derive(Parser, Debug)]
#[command(name = "keycalc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Start in degrees instead of radians
    #[arg(long)]
    degrees: bool,

    /// Start with scientific notation
    #[arg(long)]
    scientific: bool,

    /// JSON configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("keycalc={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = build_config(cli)?;
    debug!(?config, "starting");
    let mut driver = KeyboardDriver::with_evaluator(Evaluator::with_config(&config));

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        process_line(&mut driver, &line?, &mut stdout)?;
    }
    Ok(())
}

fn build_config(cli: &Cli) -> keycalc::core::CalcResult<CalcConfig> {
    let mut config = match &cli.config {
        Some(path) => CalcConfig::load(path)?,
        None => CalcConfig::default(),
    };
    if cli.degrees {
        config = config.with_angle_mode(AngleMode::Degrees);
    }
    if cli.scientific {
        config = config.with_notation(Notation::Scientific);
    }
    Ok(config)
}

/// Presses every token on `line`, then writes the display and trail
///
/// Unknown tokens are reported and skipped; the rest of the line still runs.
fn process_line<D: CalculatorDriver, W: Write>(
    driver: &mut D,
    line: &str,
    out: &mut W,
) -> io::Result<()> {
    let mut pressed = false;
    for token in line.split_whitespace() {
        pressed = true;
        if let Err(e) = driver.run(token) {
            warn!(token, "skipped");
            writeln!(out, "? {e}")?;
        }
    }
    if !pressed {
        return Ok(());
    }
    writeln!(out, "{}", driver.display())?;
    let trail = driver.history_text();
    if !trail.is_empty() {
        writeln!(out, "  {trail}")?;
    }
    out.flush()
}
