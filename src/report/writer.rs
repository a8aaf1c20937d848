use std::path::Path;

use crate::config::Destinations;
use crate::error::SplitError;
use crate::models::{ComponentType, SplitOutcome, Summary};
use crate::report::document::{notice_document, summary, summary_report};
use crate::report::terminal::Console;

fn write_file(path: &Path, contents: &str) -> Result<(), SplitError> {
    let write_err = |source| SplitError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, contents).map_err(write_err)
}

/// Write both notice documents to every destination, then the summary report.
///
/// Files are written one after another; a failure leaves earlier files in place.
pub fn write_outputs(
    outcome: &SplitOutcome,
    dests: &Destinations,
    console: &Console,
) -> Result<Summary, SplitError> {
    for (comp_type, paths) in [
        (ComponentType::Npm, &dests.npm),
        (ComponentType::Nuget, &dests.nuget),
    ] {
        let document = notice_document(&outcome.header, outcome.entries(comp_type));
        for path in paths {
            console.writing(comp_type, path);
            write_file(path, &document)?;
        }
    }

    write_file(&dests.summary, &summary_report(outcome))?;
    console.summary_written(&dests.summary);

    Ok(summary(
        outcome,
        &dests.npm,
        &dests.nuget,
        dests.summary.clone(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::separator::SEPARATOR_START;
    use crate::notice::splitter::{split_file, split_reader, LINE_ENDING};
    use std::io::Cursor;

    const QUIET: Console = Console {
        quiet: true,
        verbose: false,
        json: false,
    };

    fn sample() -> SplitOutcome {
        let s = SEPARATOR_START;
        let text = [
            "NOTICES", s, "lodash@4.17.21", "MIT", s, s, "Newtonsoft.Json 13.0.1", "MIT", s, s,
        ]
        .join("\n");
        split_reader(Cursor::new(text)).unwrap()
    }

    #[test]
    fn test_writes_split_documents() {
        let dir = tempfile::tempdir().unwrap();
        let dests = Destinations::defaults(dir.path());
        let summary = write_outputs(&sample(), &dests, &QUIET).unwrap();

        let s = SEPARATOR_START;
        let npm = std::fs::read_to_string(&dests.npm[0]).unwrap();
        assert_eq!(
            npm,
            ["NOTICES", s, s, "lodash@4.17.21", "MIT", s].join(LINE_ENDING)
        );
        let nuget = std::fs::read_to_string(&dests.nuget[0]).unwrap();
        assert_eq!(
            nuget,
            ["NOTICES", s, s, "Newtonsoft.Json 13.0.1", "MIT", s].join(LINE_ENDING)
        );

        let report = std::fs::read_to_string(&dests.summary).unwrap();
        assert!(report.starts_with("total components: 2 (parsed 10 lines)"));
        assert!(report.contains("npm components  : 1"));
        assert!(report.contains("nuget components: 1"));
        assert_eq!(summary.total_components, 2);
    }

    #[test]
    fn test_summary_directory_created() {
        let dir = tempfile::tempdir().unwrap();
        let dests = Destinations::defaults(dir.path());
        assert!(!dir.path().join("out").exists());
        write_outputs(&sample(), &dests, &QUIET).unwrap();
        assert!(dests.summary.exists());
    }

    #[test]
    fn test_fan_out_identical() {
        let dir = tempfile::tempdir().unwrap();
        let mut dests = Destinations::defaults(dir.path());
        dests.npm.push(dir.path().join("dist").join("npm_NOTICE.txt"));
        write_outputs(&sample(), &dests, &QUIET).unwrap();

        let a = std::fs::read(&dests.npm[0]).unwrap();
        let b = std::fs::read(&dests.npm[1]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rerun_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("NOTICE.txt");
        let s = SEPARATOR_START;
        std::fs::write(
            &source,
            ["H", s, "zlib 1", "x", s, s, "Alpha 2", "y", s, s, "axios 1", "z", s, s].join("\n"),
        )
        .unwrap();
        let dests = Destinations::defaults(&dir.path().join("repo"));

        write_outputs(&split_file(&source).unwrap(), &dests, &QUIET).unwrap();
        let first = (
            std::fs::read(&dests.npm[0]).unwrap(),
            std::fs::read(&dests.nuget[0]).unwrap(),
            std::fs::read(&dests.summary).unwrap(),
        );
        write_outputs(&split_file(&source).unwrap(), &dests, &QUIET).unwrap();
        let second = (
            std::fs::read(&dests.npm[0]).unwrap(),
            std::fs::read(&dests.nuget[0]).unwrap(),
            std::fs::read(&dests.summary).unwrap(),
        );
        assert_eq!(first, second);
    }
}
