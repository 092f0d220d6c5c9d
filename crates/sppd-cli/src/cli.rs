//! CLI argument definitions for the SPPD converter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use sppd_model::DEFAULT_HEADER_SEARCH_WINDOW;

#[derive(Parser)]
#[command(
    name = "sppd",
    version,
    about = "SPPD expense converter - normalize trip expense workbooks into one canonical CSV",
    long_about = "Convert SPPD (business trip) expense workbooks into a canonical record set.\n\n\
                  Finds the header row of every sheet, resolves columns by their labels,\n\
                  normalizes dates, amounts and trip numbers, and drops duplicate trips."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert workbooks or CSV files into canonical SPPD records.
    Convert(ConvertArgs),

    /// Show detected header rows and column resolution without converting.
    Inspect(InspectArgs),

    /// List canonical fields and the header labels they accept.
    Fields,
}

/// Options shared by every command that reads input files.
#[derive(Args)]
pub struct InputArgs {
    /// Input files (.xlsx, .xlsm, .xlsb, .xls, .ods, .csv, .tsv), in processing order.
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Only read these sheets, in this order (repeatable; default: all sheets).
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheets: Vec<String>,

    /// Number of leading rows searched for the header row.
    #[arg(long = "header-window", value_name = "ROWS", default_value_t = DEFAULT_HEADER_SEARCH_WINDOW)]
    pub header_window: usize,

    /// Also match header labels by similarity when no alias matches.
    #[arg(long = "lenient")]
    pub lenient: bool,
}

#[derive(Args)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output CSV file (default: stdout).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write the run report as JSON to this file.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Additional footer marker; rows starting with it are skipped (repeatable).
    #[arg(long = "footer-marker", value_name = "TEXT")]
    pub footer_markers: Vec<String>,

    /// Keep only this many leading digits of each trip number.
    #[arg(long = "max-trip-digits", value_name = "DIGITS")]
    pub max_trip_digits: Option<usize>,

    /// Use the sheet name as bank name when a row has none.
    #[arg(long = "bank-from-sheet")]
    pub bank_from_sheet: bool,

    /// Convert and report without writing the CSV.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
