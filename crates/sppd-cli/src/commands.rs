use std::path::PathBuf;

use anyhow::{Context, Result};
use sppd_cli::output::{ReportDocument, write_records_to, write_report};
use sppd_core::{ConversionOutput, ConversionRun, SourceLayout, resolve_layout};
use sppd_ingest::{SheetSelection, read_sources};
use sppd_model::{
    BankNameFallback, ConversionOptions, HeaderMatching, RawSource, SourceRejection,
};
use tracing::info;

use crate::cli::{ConvertArgs, InputArgs, InspectArgs};

pub struct ConvertResult {
    pub output: ConversionOutput,
    /// Where the CSV went; `None` for stdout or a dry run.
    pub output_path: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
    pub dry_run: bool,
}

impl ConvertResult {
    /// True when inputs had sources but none of them could be converted.
    pub fn has_errors(&self) -> bool {
        let report = &self.output.report;
        !report.per_source.is_empty() && report.rejected().count() == report.per_source.len()
    }

    /// The CSV went to stdout, so anything else printed must not.
    pub fn wrote_stdout(&self) -> bool {
        !self.dry_run && self.output_path.is_none()
    }
}

pub struct InspectedSource {
    pub name: String,
    pub rows: usize,
    pub layout: Result<SourceLayout, SourceRejection>,
}

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let options = conversion_options(args);
    let sources = read_inputs(&args.input)?;

    let mut run = ConversionRun::new(options.clone());
    for source in &sources {
        run.process_source(source);
    }
    let output = run.finish();

    if args.dry_run {
        info!(records = output.records.len(), "dry run, CSV not written");
    } else {
        write_records_to(args.output.as_deref(), &output.records)?;
    }
    if let Some(path) = &args.report {
        let document = ReportDocument::new(&args.input.inputs, &options, &output.report);
        write_report(path, &document)?;
    }

    Ok(ConvertResult {
        output,
        output_path: args.output.clone().filter(|_| !args.dry_run),
        report_path: args.report.clone(),
        dry_run: args.dry_run,
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<Vec<InspectedSource>> {
    let options = base_options(&args.input);
    let sources = read_inputs(&args.input)?;
    Ok(sources
        .iter()
        .map(|source| InspectedSource {
            name: source.name.clone(),
            rows: source.grid.len(),
            layout: resolve_layout(&source.grid, &options),
        })
        .collect())
}

fn read_inputs(input: &InputArgs) -> Result<Vec<RawSource>> {
    let selection = SheetSelection::from_names(input.sheets.clone());
    read_sources(&input.inputs, &selection).context("read input files")
}

fn base_options(input: &InputArgs) -> ConversionOptions {
    ConversionOptions::default()
        .with_header_search_window(input.header_window)
        .with_header_matching(if input.lenient {
            HeaderMatching::Lenient
        } else {
            HeaderMatching::Strict
        })
}

fn conversion_options(args: &ConvertArgs) -> ConversionOptions {
    let mut options = base_options(&args.input)
        .with_identifier_max_digits(args.max_trip_digits)
        .with_bank_name_fallback(if args.bank_from_sheet {
            BankNameFallback::SourceName
        } else {
            BankNameFallback::Empty
        });
    for marker in &args.footer_markers {
        options = options.with_footer_marker(marker.as_str());
    }
    options
}
