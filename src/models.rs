use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Package-registry origin of a notice block, inferred from its title line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentType {
    Unknown,
    Npm,
    Nuget,
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComponentType::Unknown => write!(f, "unknown"),
            ComponentType::Npm => write!(f, "npm"),
            ComponentType::Nuget => write!(f, "nuget"),
        }
    }
}

/// One classified, bounded license block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicenseEntry {
    pub title: String,
    /// Block text from its leading separator up to (excluding) the closing separator.
    pub body: String,
}

/// Result of scanning a complete notice stream.
#[derive(Debug, Clone, Default)]
pub struct SplitOutcome {
    pub header: String,
    /// Sorted case-insensitively by title.
    pub npm: Vec<LicenseEntry>,
    /// Sorted case-insensitively by title.
    pub nuget: Vec<LicenseEntry>,
    pub total_found: usize,
    pub lines_scanned: usize,
}

impl SplitOutcome {
    pub fn entries(&self, comp_type: ComponentType) -> &[LicenseEntry] {
        match comp_type {
            ComponentType::Npm => &self.npm,
            ComponentType::Nuget => &self.nuget,
            ComponentType::Unknown => &[],
        }
    }
}

/// Serializable view of a run, used by `--report json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Summary {
    pub total_components: usize,
    pub lines_scanned: usize,
    pub npm_components: usize,
    pub nuget_components: usize,
    pub npm_titles: Vec<String>,
    pub nuget_titles: Vec<String>,
    pub npm_files: Vec<PathBuf>,
    pub nuget_files: Vec<PathBuf>,
    pub summary_file: PathBuf,
}

/// Package name and optional version parsed from a notice title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRef {
    pub name: String,
    pub version: Option<String>,
}

/// Registry lookup result for a single title (`--online`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    Found,
    NotFound,
    Unverified(String),
}
