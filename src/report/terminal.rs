use std::path::Path;

use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::models::{ComponentType, SplitOutcome, Verification};
use crate::report::document::{count_lines, sorted_titles};

/// Console output for a run.
///
/// In JSON mode every progress line goes to stderr so stdout carries only the JSON report.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    pub quiet: bool,
    pub verbose: bool,
    pub json: bool,
}

impl Console {
    fn line(&self, msg: &str) {
        if self.json {
            eprintln!("{}", msg);
        } else {
            println!("{}", msg);
        }
    }

    /// Count lines are always printed, even with `--quiet`.
    pub fn counts(&self, outcome: &SplitOutcome) {
        for line in count_lines(outcome) {
            self.line(&line);
        }
    }

    pub fn writing(&self, comp_type: ComponentType, path: &Path) {
        if !self.quiet {
            self.line(&format!(
                "writing {} notice file: {}",
                comp_type,
                path.display().to_string().cyan()
            ));
        }
    }

    pub fn summary_written(&self, path: &Path) {
        if !self.quiet {
            self.line(&format!(
                "summary file written to: {}",
                path.display().to_string().cyan()
            ));
        }
    }

    pub fn done(&self) {
        self.line(&"DONE!".green().bold().to_string());
    }

    /// `--verbose`: one table per ecosystem listing every title.
    pub fn titles(&self, outcome: &SplitOutcome) {
        if !self.verbose || self.quiet {
            return;
        }
        for comp_type in [ComponentType::Npm, ComponentType::Nuget] {
            let titles = sorted_titles(outcome.entries(comp_type));
            if titles.is_empty() {
                continue;
            }
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec![
                    Cell::new("#").add_attribute(Attribute::Bold),
                    Cell::new(format!("{} title", comp_type)).add_attribute(Attribute::Bold),
                ]);
            for (i, title) in titles.iter().enumerate() {
                table.add_row(vec![Cell::new(i + 1), Cell::new(title)]);
            }
            self.line(&table.to_string());
        }
    }

    /// Report titles the registries did not confirm. Found titles are not listed.
    pub fn verification(&self, results: &[(ComponentType, String, Verification)]) {
        let flagged: Vec<_> = results
            .iter()
            .filter(|(_, _, v)| *v != Verification::Found)
            .collect();

        if flagged.is_empty() {
            if !self.quiet {
                self.line(&format!(
                    " {} all {} titles found in their registries",
                    "✓".green(),
                    results.len()
                ));
            }
            return;
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("Ecosystem").add_attribute(Attribute::Bold),
                Cell::new("Title").add_attribute(Attribute::Bold),
                Cell::new("Status").add_attribute(Attribute::Bold),
            ]);

        for (comp_type, title, verification) in flagged {
            let (status, color) = match verification {
                Verification::NotFound => ("⚠ suspect".to_string(), Color::Yellow),
                Verification::Unverified(reason) => {
                    (format!("? unverified: {}", reason), Color::DarkGrey)
                }
                Verification::Found => continue,
            };
            table.add_row(vec![
                Cell::new(comp_type.to_string()),
                Cell::new(title),
                Cell::new(status).fg(color),
            ]);
        }

        self.line(&format!(
            " {} titles not confirmed by their registry:",
            "[WARN]".yellow().bold()
        ));
        self.line(&table.to_string());
    }
}
