use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "cdft - conceptual DFT reactivity descriptors from the linear energy model.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output, including extrapolation warnings
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute global descriptors from energies at N0 - 1, N0 and N0 + 1.
    Global(GlobalArgs),
    /// Evaluate a local descriptor from densities at N0 - 1, N0 and N0 + 1.
    Local(LocalArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned, human-readable table.
    Pretty,
    /// Machine-readable TOML document.
    Toml,
}

/// Arguments for the `global` subcommand.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// TOML file with three `[[energy]]` entries (`electrons`, `value`).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Write the report to a file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Output format of the report.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    pub format: OutputFormat,

    /// Number of decimal places in the pretty format.
    #[arg(short, long, default_value_t = 6)]
    pub precision: usize,

    /// Also evaluate E(N) and dE/dN at this number of electrons.
    /// Can be used multiple times.
    #[arg(long = "at", value_name = "N")]
    pub at: Vec<f64>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalProperty {
    /// Electron density of the N-electron system.
    Density,
    /// Fukui function of the N-electron system.
    FukuiFunction,
    /// Local softness, the Fukui function scaled by the global softness.
    Softness,
}

/// Arguments for the `local` subcommand.
#[derive(Args, Debug)]
pub struct LocalArgs {
    /// TOML file with three `[[density]]` entries (`electrons`, `values`).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Local property to evaluate.
    #[arg(short = 'P', long, value_enum)]
    pub property: LocalProperty,

    /// Number of electrons to evaluate at. Defaults to the reference N0.
    #[arg(short = 'n', long, value_name = "N")]
    pub electrons: Option<f64>,

    /// Global softness for the softness property, overriding the input file.
    #[arg(short = 's', long, value_name = "FLOAT")]
    pub global_softness: Option<f64>,

    /// Write the CSV output to a file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}
