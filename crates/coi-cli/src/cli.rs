//! CLI argument definitions for the endorsement index tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use coi_enrich::Pass;
use coi_ingest::{ColumnSelector, DEFAULT_CPL_COLUMN};

#[derive(Parser)]
#[command(
    name = "coi-index",
    version,
    about = "Build and enrich the certificate of insurance endorsement index",
    long_about = "Build the endorsement index from spreadsheet exports.\n\n\
                  Extracts records from CSV or workbook sheets into JSON stores,\n\
                  merges CPL restrictions, and derives classification properties."
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
    /// List the sheets of a source with row and column counts.
    ///
    /// With `--columns`, also list each sheet's headers with the positions
    /// accepted by `--code-column` and `--value-column`.
    Sheets(SheetsArgs),

    /// Build records from a sheet and save them to a new store.
    Extract(ExtractArgs),

    /// Merge CPL restrictions from a sheet into an existing store.
    Cpl(CplArgs),

    /// Run enrichment passes over a store.
    Enrich(EnrichArgs),

    /// Build the AM Best carrier index.
    AmBest(AmBestArgs),

    /// List record stores in a directory.
    List(ListArgs),
}

#[derive(Args)]
pub struct SheetsArgs {
    /// CSV or workbook file.
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Also list header names with their 1-based positions.
    #[arg(long = "columns")]
    pub columns: bool,
}

#[derive(Args)]
pub struct ExtractArgs {
    /// CSV or workbook file with `code` and `label` columns.
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Sheet to read (default: first sheet).
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// Category stamped on every record.
    #[arg(long = "category", value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Header of the column holding CPL flags.
    #[arg(long = "cpl-column", value_name = "HEADER", default_value = DEFAULT_CPL_COLUMN)]
    pub cpl_column: String,

    /// Directory for the new store.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Args)]
pub struct CplArgs {
    /// Store to update.
    #[arg(value_name = "STORE")]
    pub store: PathBuf,

    /// CSV or workbook file holding CPL values.
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Sheet to read (default: first sheet).
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// Code column, by header name or 1-based position.
    #[arg(long = "code-column", value_name = "COLUMN")]
    pub code_column: ColumnSelector,

    /// Acceptability column, by header name or 1-based position.
    #[arg(long = "value-column", value_name = "COLUMN")]
    pub value_column: ColumnSelector,

    /// Report changes without writing the store.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct EnrichArgs {
    /// Store to enrich.
    #[arg(value_name = "STORE")]
    pub store: PathBuf,

    /// Pass to run; repeat to run several in the given order.
    #[arg(
        long = "pass",
        value_enum,
        value_name = "PASS",
        required_unless_present = "all",
        conflicts_with = "all"
    )]
    pub passes: Vec<PassArg>,

    /// Run every pass: operations, aggregate, blanket, noc, clear-none.
    #[arg(long = "all")]
    pub all: bool,

    /// Report changes without writing the store.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl EnrichArgs {
    pub fn selected_passes(&self) -> Vec<Pass> {
        if self.all {
            Pass::ALL.to_vec()
        } else {
            self.passes.iter().map(|&pass| pass.into()).collect()
        }
    }
}

#[derive(Args)]
pub struct AmBestArgs {
    /// CSV or workbook file with the AM Best columns.
    #[arg(value_name = "SOURCE")]
    pub source: PathBuf,

    /// Sheet to read (default: first sheet).
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// Directory for `index_amb.json`.
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

#[derive(Args)]
pub struct ListArgs {
    /// Directory to scan.
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,
}

/// CLI pass choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum PassArg {
    #[value(alias = "ops")]
    Operations,
    #[value(alias = "agg")]
    Aggregate,
    Blanket,
    #[value(alias = "notice")]
    Noc,
    #[value(alias = "cleanup")]
    ClearNone,
}

impl From<PassArg> for Pass {
    fn from(pass: PassArg) -> Self {
        match pass {
            PassArg::Operations => Pass::Operations,
            PassArg::Aggregate => Pass::Aggregate,
            PassArg::Blanket => Pass::Blanket,
            PassArg::Noc => Pass::Notice,
            PassArg::ClearNone => Pass::ClearNone,
        }
    }
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
