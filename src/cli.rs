//! Command line arguments.

use clap::{ArgAction, Parser, ValueEnum};

/// VLSM planner - allocate variable-length IPv4 subnets from a base network
///
/// Values not given on the command line are asked for interactively.
#[derive(Parser, Debug, Default, Clone)]
#[command(name = "vlsm-planner")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base network in CIDR notation, e.g. 10.0.0.0/16
    #[arg(short, long)]
    pub network: Option<String>,

    /// Host counts per subnet, comma separated, e.g. 100,50,20
    #[arg(short = 'H', long, value_delimiter = ',', value_parser = clap::value_parser!(u32).range(1..))]
    pub hosts: Vec<u32>,

    /// Spreadsheet file to write (".xlsx" is appended when missing)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Output format on stdout
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Do not write or ask for a spreadsheet
    #[arg(long)]
    pub no_export: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log to stderr, more v's for more detail (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}
