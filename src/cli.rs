use clap::{Args, Parser, Subcommand, ValueEnum};
use cvss_calc::engine::Formula;
use cvss_calc::types::config::OutputFormat;
use cvss_calc::Selection;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cvss-calc", version, about = "CVSS 3.1 Base Score calculator")]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Extra config file layered over the global and project configs
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a metric selection
    Score(ScoreCommand),
    /// Print the vector string for a metric selection
    Vector(VectorCommand),
    /// List the Base metrics and their values
    Metrics(MetricsCommand),
    /// Read KEY=Value changes from stdin and rescore after each one
    Session(SessionCommand),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormulaArg {
    Simplified,
    Official,
}

impl From<FormulaArg> for Formula {
    fn from(arg: FormulaArg) -> Self {
        match arg {
            FormulaArg::Simplified => Formula::Simplified,
            FormulaArg::Official => Formula::Official,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Md,
}

impl From<ReportFormat> for OutputFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Text => OutputFormat::Text,
            ReportFormat::Json => OutputFormat::Json,
            ReportFormat::Md => OutputFormat::Md,
        }
    }
}

/// One flag per Base metric. Omitted metrics keep their default value.
#[derive(Args, Debug, Default)]
pub struct MetricArgs {
    /// Start from a vector string; individual flags override its values
    #[arg(long)]
    pub vector: Option<String>,
    /// Attack Vector: Network, Adjacent, Local, Physical
    #[arg(long)]
    pub av: Option<String>,
    /// Attack Complexity: Low, High
    #[arg(long)]
    pub ac: Option<String>,
    /// Privileges Required: None, Low, High
    #[arg(long)]
    pub pr: Option<String>,
    /// User Interaction: None, Required
    #[arg(long)]
    pub ui: Option<String>,
    /// Scope: Unchanged, Changed
    #[arg(long = "s")]
    pub scope: Option<String>,
    /// Confidentiality: None, Low, High
    #[arg(long = "c")]
    pub confidentiality: Option<String>,
    /// Integrity: None, Low, High
    #[arg(long = "i")]
    pub integrity: Option<String>,
    /// Availability: None, Low, High
    #[arg(long = "a")]
    pub availability: Option<String>,
}

impl MetricArgs {
    pub fn selection(&self) -> cvss_calc::Result<Selection> {
        let mut selection = match &self.vector {
            Some(vector) => cvss_calc::decode_vector(vector)?,
            None => Selection::default(),
        };
        for (code, label) in self.overrides() {
            if let Some(label) = label {
                selection.set(code, label)?;
            }
        }
        Ok(selection)
    }

    fn overrides(&self) -> [(&'static str, Option<&str>); 8] {
        [
            ("AV", self.av.as_deref()),
            ("AC", self.ac.as_deref()),
            ("PR", self.pr.as_deref()),
            ("UI", self.ui.as_deref()),
            ("S", self.scope.as_deref()),
            ("C", self.confidentiality.as_deref()),
            ("I", self.integrity.as_deref()),
            ("A", self.availability.as_deref()),
        ]
    }
}

#[derive(Args)]
pub struct ScoreCommand {
    #[command(flatten)]
    pub metrics: MetricArgs,
    #[arg(long, value_enum)]
    pub formula: Option<FormulaArg>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct VectorCommand {
    #[command(flatten)]
    pub metrics: MetricArgs,
    /// Prepend CVSS:3.1/ to the output
    #[arg(long)]
    pub prefix: bool,
}

#[derive(Args)]
pub struct MetricsCommand {
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct SessionCommand {
    #[arg(long, value_enum)]
    pub formula: Option<FormulaArg>,
}
