use anyhow::Result;
use regex::Regex;

use crate::models::PackageRef;

/// Parses notice titles such as `lodash@4.17.21`, `@scope/pkg@1.0.0`,
/// `Newtonsoft.Json 13.0.1` or a bare `Serilog` into a [`PackageRef`].
pub struct TitleParser {
    re: Regex,
}

impl TitleParser {
    pub fn new() -> Result<Self> {
        let re = Regex::new(r"^(@?[^@\s]+)(?:(?:@|\s+)v?(\d\S*))?")?;
        Ok(Self { re })
    }

    /// Extract the package name and version from a notice title line.
    pub fn parse(&self, title: &str) -> Option<PackageRef> {
        let caps = self.re.captures(title.trim())?;
        let name = caps.get(1)?.as_str().to_string();
        let version = caps.get(2).map(|m| m.as_str().to_string());
        Some(PackageRef { name, version })
    }
}
