mod render;

use clap::{Parser, Subcommand};
use luhnfix_invert::{invert, InvertOptions};
use luhnfix_types::report::{CheckRecord, Outcome, PanRecord, PositionOutcome, RepairReport};
use luhnfix_types::{schema, Pan};
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

/// The demo PANs exercised by `luhnfix builtin`: a 15-digit and a 14-digit
/// PAN, each with its trailing check digit, both failing the check as given.
const BUILTIN_PANS: [&str; 2] = ["1234567812345678", "123456781234560"];

#[derive(Debug, Parser)]
#[command(
    name = "luhnfix",
    version,
    about = "Validate PANs against the Luhn check and compute single-digit repairs."
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the forward Luhn check over one or more digit strings.
    Check(CheckArgs),
    /// For each failing PAN, compute the repair digit at every position.
    Repair(RepairArgs),
    /// Run repair over the built-in demo PANs.
    Builtin(BuiltinArgs),
}

#[derive(Debug, Parser)]
struct CheckArgs {
    /// Digit strings to validate (any non-zero length).
    #[arg(required = true)]
    pans: Vec<String>,

    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Parser)]
struct RepairArgs {
    /// PANs to repair: 14 or 15 digits plus a trailing check digit.
    /// Other lengths are skipped with a diagnostic.
    #[arg(required = true)]
    pans: Vec<String>,

    /// Also attempt the trailing check digit position.
    #[arg(long, default_value_t = false)]
    allow_check_digit: bool,

    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Parser)]
struct BuiltinArgs {
    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Repair(args) => cmd_repair(args.pans, args.allow_check_digit, args.format),
        Command::Builtin(args) => {
            let pans = BUILTIN_PANS.iter().map(|s| s.to_string()).collect();
            cmd_repair(pans, false, args.format)
        }
    }
}

fn cmd_check(args: CheckArgs) -> anyhow::Result<()> {
    let records: Vec<CheckRecord> = args
        .pans
        .iter()
        .map(|pan| CheckRecord {
            pan: pan.clone(),
            valid: luhnfix_check::is_valid(pan),
        })
        .collect();

    match args.format {
        OutputFormat::Text => print!("{}", render::check_text(&records)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
    }
    Ok(())
}

fn cmd_repair(pans: Vec<String>, allow_check_digit: bool, format: OutputFormat) -> anyhow::Result<()> {
    let opts = InvertOptions { allow_check_digit };
    let records: Vec<PanRecord> = pans.iter().map(|pan| repair_one(pan, &opts)).collect();

    match format {
        OutputFormat::Text => print!("{}", render::repair_text(&records)),
        OutputFormat::Json => {
            let report = RepairReport {
                schema: schema::LUHNFIX_REPORT_V1.to_string(),
                records,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}

/// Process one input string: validate, and if it fails, try every alterable
/// position, re-validating each suggested digit with the forward checker.
fn repair_one(input: &str, opts: &InvertOptions) -> PanRecord {
    let pan = match Pan::parse(input) {
        Ok(pan) => pan,
        Err(e) => {
            debug!(pan = input, "skipping: {}", e);
            return PanRecord::Skipped {
                pan: input.to_string(),
                reason: e.to_string(),
            };
        }
    };

    if luhnfix_check::is_valid(input) {
        return PanRecord::AlreadyValid {
            pan: input.to_string(),
        };
    }

    let last_target = if opts.allow_check_digit {
        pan.check_digit_index()
    } else {
        pan.check_digit_index() - 1
    };

    let positions = (0..=last_target)
        .map(|position| {
            let outcome = match invert(&pan, position, opts) {
                Ok(digit) => {
                    // The inverter and the checker are independent; rechecking
                    // here demonstrates agreement on every accepted digit.
                    let altered = pan
                        .with_byte_at(position, digit)
                        .map(|p| p.to_string())
                        .unwrap_or_default();
                    let revalidated = luhnfix_check::is_valid(&altered);
                    Outcome::Digit {
                        digit: digit as char,
                        altered_pan: altered,
                        revalidated,
                    }
                }
                Err(e) => {
                    debug!(pan = input, position, "inversion failed: {}", e);
                    Outcome::Error {
                        kind: e.kind().to_string(),
                        code: e.code(),
                    }
                }
            };
            PositionOutcome { position, outcome }
        })
        .collect();

    PanRecord::Repairable {
        pan: input.to_string(),
        positions,
    }
}
