//! `notice-splitter` — split an aggregated third-party NOTICE file by package ecosystem.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Scan the source notice into a header and npm / NuGet entries ([`notice`]).
//!    A missing source file exits `1` before anything is written.
//! 3. Load output config and resolve destinations ([`config`]).
//! 4. Write both notice documents and the summary report ([`report`]).
//! 5. Optionally check titles against the registries (`--online`, [`registry`]).

mod cli;
mod config;
mod error;
mod models;
mod notice;
mod registry;
mod report;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use cli::{Cli, ReportFormat};
use config::{default_source, load_config, Destinations};
use error::SplitError;
use models::{ComponentType, SplitOutcome, Summary, Verification};
use notice::splitter::split_file;
use notice::title::TitleParser;
use report::terminal::Console;
use report::writer::write_outputs;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = run(&cli).await {
        if let Some(SplitError::SourceNotFound(path)) = e.downcast_ref::<SplitError>() {
            eprintln!(
                "{}",
                format!("Error: The file {} does not exist.", path.display()).red()
            );
            std::process::exit(1);
        }
        return Err(e);
    }

    Ok(())
}

/// Split the source notice and write every output. A missing source fails with
/// [`SplitError::SourceNotFound`] before any destination is touched.
async fn run(cli: &Cli) -> Result<Summary> {
    let source = cli.source.clone().unwrap_or_else(default_source);
    let outcome = split_file(&source)?;

    let config = load_config(&cli.root, cli.config.as_deref())?;
    let dests = Destinations::resolve(
        &cli.root,
        &config,
        &cli.npm_out,
        &cli.nuget_out,
        cli.summary.as_deref(),
    );

    let console = Console {
        quiet: cli.quiet,
        verbose: cli.verbose,
        json: cli.report == ReportFormat::Json,
    };

    console.counts(&outcome);
    let summary = write_outputs(&outcome, &dests, &console)?;
    console.titles(&outcome);

    if cli.online {
        let results = verify_online(&outcome, cli.quiet).await?;
        console.verification(&results);
    }

    if cli.report == ReportFormat::Json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    console.done();

    Ok(summary)
}

async fn verify_online(
    outcome: &SplitOutcome,
    quiet: bool,
) -> Result<Vec<(ComponentType, String, Verification)>> {
    use futures::future::join_all;

    const BATCH_SIZE: usize = 75;

    let client = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()?;
    let parser = TitleParser::new()?;

    let titles: Vec<(ComponentType, String)> = [ComponentType::Npm, ComponentType::Nuget]
        .into_iter()
        .flat_map(|t| outcome.entries(t).iter().map(move |e| (t, e.title.clone())))
        .collect();

    let pb = if !quiet {
        let pb = ProgressBar::new(titles.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let mut results = Vec::with_capacity(titles.len());

    for batch in titles.chunks(BATCH_SIZE) {
        let futures: Vec<_> = batch
            .iter()
            .map(|(comp_type, title)| {
                let client = client.clone();
                let package = parser.parse(title);
                let comp_type = *comp_type;
                async move {
                    let Some(package) = package else {
                        return Verification::Unverified("no package name".to_string());
                    };
                    let found = match comp_type {
                        ComponentType::Npm => {
                            registry::npm::package_exists(
                                &client,
                                &package.name,
                                package.version.as_deref(),
                            )
                            .await
                        }
                        ComponentType::Nuget => {
                            registry::nuget::package_exists(
                                &client,
                                &package.name,
                                package.version.as_deref(),
                            )
                            .await
                        }
                        ComponentType::Unknown => Ok(false),
                    };
                    match found {
                        Ok(true) => Verification::Found,
                        Ok(false) => Verification::NotFound,
                        Err(e) => Verification::Unverified(e.to_string()),
                    }
                }
            })
            .collect();

        let verdicts = join_all(futures).await;

        for ((comp_type, title), verdict) in batch.iter().zip(verdicts) {
            results.push((*comp_type, title.clone(), verdict));
            if let Some(pb) = &pb {
                pb.inc(1);
            }
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::separator::SEPARATOR_START;

    fn cli_for(root: &std::path::Path, source: &std::path::Path) -> Cli {
        let root = root.to_string_lossy().to_string();
        let source = source.to_string_lossy().to_string();
        Cli::try_parse_from(["notice-splitter", source.as_str(), "--root", root.as_str(), "-q"])
            .unwrap()
    }

    #[tokio::test]
    async fn test_missing_source_fails_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let cli = cli_for(dir.path(), &dir.path().join("absent.txt"));

        let err = run(&cli).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SplitError>(),
            Some(SplitError::SourceNotFound(_))
        ));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_run_writes_all_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("NOTICE.txt");
        let s = SEPARATOR_START;
        std::fs::write(
            &source,
            ["NOTICES", s, "lodash@4.17.21", "MIT", s, s, "Newtonsoft.Json 13.0.1", "MIT", s, s]
                .join("\n"),
        )
        .unwrap();
        let cli = cli_for(dir.path(), &source);

        let summary = run(&cli).await.unwrap();
        assert_eq!(summary.total_components, 2);
        assert_eq!(summary.npm_components, 1);
        assert_eq!(summary.nuget_components, 1);
        assert!(dir.path().join("npm_NOTICE.txt").exists());
        assert!(dir.path().join("nuget_NOTICE.txt").exists());
        assert!(dir.path().join("out").join("noticeSplitterResults.txt").exists());
    }
}
