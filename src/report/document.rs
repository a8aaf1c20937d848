use std::path::PathBuf;

use crate::models::{LicenseEntry, SplitOutcome, Summary};
use crate::notice::splitter::LINE_ENDING;

/// Underline placed beneath each title section of the summary report.
pub const SUMMARY_SECTION_SEP: &str = "=============";

/// Header followed by every entry body, one after another.
pub fn notice_document(header: &str, entries: &[LicenseEntry]) -> String {
    std::iter::once(header)
        .chain(entries.iter().map(|e| e.body.as_str()))
        .collect::<Vec<_>>()
        .join(LINE_ENDING)
}

/// The three count lines echoed to the console and opening the summary report.
pub fn count_lines(outcome: &SplitOutcome) -> [String; 3] {
    [
        format!(
            "total components: {} (parsed {} lines)",
            outcome.total_found, outcome.lines_scanned
        ),
        format!("npm components  : {}", outcome.npm.len()),
        format!("nuget components: {}", outcome.nuget.len()),
    ]
}

/// Entry titles, sorted case-insensitively by code point (`9x` before `@x`),
/// not by locale collation.
pub fn sorted_titles(entries: &[LicenseEntry]) -> Vec<String> {
    let mut titles: Vec<String> = entries.iter().map(|e| e.title.clone()).collect();
    titles.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
    titles
}

/// Full text of the summary report file.
pub fn summary_report(outcome: &SplitOutcome) -> String {
    let mut summary: Vec<String> = count_lines(outcome).to_vec();

    summary.push(LINE_ENDING.to_string());
    summary.push("npm package titles found:".to_string());
    summary.push(SUMMARY_SECTION_SEP.to_string());
    summary.extend(sorted_titles(&outcome.npm));

    summary.push(LINE_ENDING.to_string());
    summary.push("nuget package titles found:".to_string());
    summary.push(SUMMARY_SECTION_SEP.to_string());
    summary.extend(sorted_titles(&outcome.nuget));

    summary.join(LINE_ENDING)
}

pub fn summary(
    outcome: &SplitOutcome,
    npm_files: &[PathBuf],
    nuget_files: &[PathBuf],
    summary_file: PathBuf,
) -> Summary {
    Summary {
        total_components: outcome.total_found,
        lines_scanned: outcome.lines_scanned,
        npm_components: outcome.npm.len(),
        nuget_components: outcome.nuget.len(),
        npm_titles: sorted_titles(&outcome.npm),
        nuget_titles: sorted_titles(&outcome.nuget),
        npm_files: npm_files.to_vec(),
        nuget_files: nuget_files.to_vec(),
        summary_file,
    }
}
