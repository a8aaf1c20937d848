use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::SplitError;
use crate::models::{ComponentType, LicenseEntry, SplitOutcome};
use crate::notice::classifier::classify;
use crate::notice::separator::{is_separator, DoubleSeparator};

/// Line terminator used when joining buffered lines back into text.
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Everything up to and including the first separator line.
    Header,
    /// Per-component license blocks; never left once entered.
    Body,
}

/// Stateful line scanner that segments a notice stream into a header and
/// per-component license entries.
///
/// Feed lines with [`process_line`](Self::process_line), then call
/// [`finish`](Self::finish) once the stream is exhausted.
#[derive(Debug)]
pub struct NoticeSplitter {
    phase: Phase,
    header: String,
    buffer: Vec<String>,
    comp_type: ComponentType,
    npm_title: String,
    nuget_title: String,
    npm: Vec<LicenseEntry>,
    nuget: Vec<LicenseEntry>,
    separators: DoubleSeparator,
    total_found: usize,
    line_nr: usize,
}

impl Default for NoticeSplitter {
    fn default() -> Self {
        Self::new()
    }
}

impl NoticeSplitter {
    pub fn new() -> Self {
        Self {
            phase: Phase::Header,
            header: String::new(),
            buffer: Vec::new(),
            comp_type: ComponentType::Unknown,
            npm_title: String::new(),
            nuget_title: String::new(),
            npm: Vec::new(),
            nuget: Vec::new(),
            separators: DoubleSeparator::new(),
            total_found: 0,
            line_nr: 0,
        }
    }

    pub fn process_line(&mut self, line: &str) {
        self.line_nr += 1;
        self.buffer.push(line.trim_end().to_string());
        match self.phase {
            Phase::Header => self.process_header(line),
            Phase::Body => self.process_notice(line),
        }
    }

    fn process_header(&mut self, line: &str) {
        if is_separator(line) {
            self.header = self.buffer.join(LINE_ENDING);
            self.buffer.clear();
            self.buffer.push(line.to_string());
            self.phase = Phase::Body;
        }
    }

    fn process_notice(&mut self, line: &str) {
        if self.comp_type == ComponentType::Unknown && !is_separator(line) {
            self.comp_type = classify(line);
            let title = line.trim().to_string();
            match self.comp_type {
                ComponentType::Npm => self.npm_title = title,
                ComponentType::Nuget => self.nuget_title = title,
                ComponentType::Unknown => {}
            }
        }

        // Separators only count once the block has a title.
        if self.comp_type != ComponentType::Unknown && self.separators.feed(line) {
            self.flush_entry();
        }
    }

    /// Close the current block: everything buffered except the closing separator
    /// becomes the entry body, and that separator opens the next block.
    fn flush_entry(&mut self) {
        let last_sep = self.buffer.pop().unwrap_or_default();
        let body = self.buffer.join(LINE_ENDING);

        match self.comp_type {
            ComponentType::Npm => self.npm.push(LicenseEntry {
                title: self.npm_title.clone(),
                body,
            }),
            ComponentType::Nuget => self.nuget.push(LicenseEntry {
                title: self.nuget_title.clone(),
                body,
            }),
            ComponentType::Unknown => return,
        }

        self.total_found += 1;
        self.buffer.clear();
        self.buffer.push(last_sep);
        self.comp_type = ComponentType::Unknown;
    }

    /// Finalize the scan. Any trailing block without a closing double separator is discarded.
    pub fn finish(self) -> SplitOutcome {
        let mut npm = self.npm;
        let mut nuget = self.nuget;
        sort_by_title(&mut npm);
        sort_by_title(&mut nuget);

        SplitOutcome {
            header: self.header,
            npm,
            nuget,
            total_found: self.total_found,
            lines_scanned: self.line_nr,
        }
    }
}

/// Orders by the lowercased title's code points, so punctuation and digits sort
/// by their ASCII position (`9x` before `@x`) rather than by locale collation.
fn sort_by_title(entries: &mut [LicenseEntry]) {
    entries.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
}

/// Lines of one `read_until(b'\n')` chunk. `\n`, `\r\n` and a lone `\r` all terminate a line.
fn chunk_lines(chunk: &[u8]) -> impl Iterator<Item = &[u8]> {
    let chunk = chunk.strip_suffix(b"\n").unwrap_or(chunk);
    let chunk = chunk.strip_suffix(b"\r").unwrap_or(chunk);
    chunk.split(|&b| b == b'\r')
}

/// Scan every line of `reader` and return the split result.
///
/// Invalid UTF-8 is decoded lossily; only I/O failures are errors.
pub fn split_reader<R: BufRead>(mut reader: R) -> std::io::Result<SplitOutcome> {
    let mut splitter = NoticeSplitter::new();
    let mut raw = Vec::new();
    loop {
        raw.clear();
        if reader.read_until(b'\n', &mut raw)? == 0 {
            break;
        }
        for line in chunk_lines(&raw) {
            splitter.process_line(&String::from_utf8_lossy(line));
        }
    }
    Ok(splitter.finish())
}

/// Split the notice file at `path`.
///
/// Fails with [`SplitError::SourceNotFound`] before reading anything if the file is absent.
pub fn split_file(path: &Path) -> Result<SplitOutcome, SplitError> {
    if !path.exists() {
        return Err(SplitError::SourceNotFound(path.to_path_buf()));
    }

    let read_err = |source| SplitError::Read {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(read_err)?;
    split_reader(BufReader::new(file)).map_err(read_err)
}
