use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "notice-splitter",
    about = "Split an aggregated third-party NOTICE file into npm and NuGet notice files",
    version
)]
pub struct Cli {
    /// Source notice file [default: ~/Downloads/NOTICE.txt]
    pub source: Option<PathBuf>,

    /// Base directory for default and config-relative destinations
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// npm notice destination (repeatable; replaces configured destinations)
    #[arg(long = "npm-out", value_name = "FILE")]
    pub npm_out: Vec<PathBuf>,

    /// NuGet notice destination (repeatable; replaces configured destinations)
    #[arg(long = "nuget-out", value_name = "FILE")]
    pub nuget_out: Vec<PathBuf>,

    /// Summary report destination [default: <root>/out/noticeSplitterResults.txt]
    #[arg(long, value_name = "FILE")]
    pub summary: Option<PathBuf>,

    /// Config file [default: <root>/.notice-splitter/config.toml, fallback ~/.config/notice-splitter/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Check every title against the npm / NuGet registries
    #[arg(long)]
    pub online: bool,

    /// Print the npm and NuGet title tables
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print the count lines and the completion marker
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, PartialEq, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
