use clap::Subcommand;
use std::path::PathBuf;

use tally::Severity;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge reports and print every remaining issue
    Summary(SummaryArgs),

    /// Merge reports and count issues per property value
    Group(GroupArgs),

    /// Merge reports into a single JSON report
    Merge(MergeArgs),

    /// Initialize a .tally.toml config file in the current directory
    Init,

    /// List the property names accepted by `group --by`
    Properties,
}

#[derive(clap::Args, Debug)]
pub struct SummaryArgs {
    /// JSON reports to merge, in order
    #[arg(required = true)]
    pub reports: Vec<PathBuf>,

    /// Output format: "terminal" or "json"
    #[arg(short, long)]
    pub format: Option<String>,

    /// Write the merged report to file as JSON
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Only keep issues at or above this severity (HIGH, NORMAL, LOW)
    #[arg(long)]
    pub min_severity: Option<Severity>,

    /// Only keep issues whose file name matches this glob
    #[arg(long)]
    pub file: Option<String>,

    /// Fail (exit code 1) if issues at or above this severity remain
    #[arg(long)]
    pub fail_on: Option<Severity>,
}

#[derive(clap::Args, Debug)]
pub struct GroupArgs {
    /// Property to group by, e.g. fileName, category or severity
    #[arg(short, long, default_value = "fileName")]
    pub by: String,

    /// JSON reports to merge, in order
    #[arg(required = true)]
    pub reports: Vec<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct MergeArgs {
    /// JSON reports to merge, in order
    #[arg(required = true)]
    pub reports: Vec<PathBuf>,

    /// Where to write the merged report
    #[arg(short, long)]
    pub out: PathBuf,
}
