use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::Deserialize;

/// Root configuration structure, deserialized from `.notice-splitter/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Output destinations.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where the split documents are written. Relative paths resolve against the root directory.
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    /// npm notice destinations; every path receives the same document.
    pub npm: Option<Vec<PathBuf>>,
    /// NuGet notice destinations; every path receives the same document.
    pub nuget: Option<Vec<PathBuf>>,
    /// Summary report destination.
    pub summary: Option<PathBuf>,
}

/// Load the output configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<root>/.notice-splitter/config.toml`
/// 3. `~/.config/notice-splitter/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(root: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let project_config = root.join(".notice-splitter").join("config.toml");
    if project_config.exists() {
        let content = std::fs::read_to_string(&project_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("notice-splitter")
            .join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(Config::default())
}

/// Default source notice file: `~/Downloads/NOTICE.txt`.
pub fn default_source() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_default()
        .join("Downloads")
        .join("NOTICE.txt")
}

/// Fully resolved output paths for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Destinations {
    pub npm: Vec<PathBuf>,
    pub nuget: Vec<PathBuf>,
    pub summary: PathBuf,
}

impl Destinations {
    pub fn defaults(root: &Path) -> Self {
        Destinations {
            npm: vec![root.join("npm_NOTICE.txt")],
            nuget: vec![root.join("nuget_NOTICE.txt")],
            summary: root.join("out").join("noticeSplitterResults.txt"),
        }
    }

    /// Merge destinations: CLI flags win over the config file, which wins over the defaults.
    pub fn resolve(
        root: &Path,
        config: &Config,
        cli_npm: &[PathBuf],
        cli_nuget: &[PathBuf],
        cli_summary: Option<&Path>,
    ) -> Self {
        let defaults = Self::defaults(root);
        let from_config = |paths: &Option<Vec<PathBuf>>| {
            paths
                .as_ref()
                .map(|ps| ps.iter().map(|p| root.join(p)).collect::<Vec<_>>())
        };

        let npm = if !cli_npm.is_empty() {
            cli_npm.to_vec()
        } else {
            from_config(&config.output.npm).unwrap_or(defaults.npm)
        };

        let nuget = if !cli_nuget.is_empty() {
            cli_nuget.to_vec()
        } else {
            from_config(&config.output.nuget).unwrap_or(defaults.nuget)
        };

        let summary = match cli_summary {
            Some(p) => p.to_path_buf(),
            None => config
                .output
                .summary
                .as_ref()
                .map(|p| root.join(p))
                .unwrap_or(defaults.summary),
        };

        Destinations {
            npm,
            nuget,
            summary,
        }
    }
}
