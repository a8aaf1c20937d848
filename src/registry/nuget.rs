use anyhow::Result;
use reqwest::Client;
use serde::Deserialize;

/// Body of the flat-container `index.json` endpoint.
#[derive(Debug, Deserialize)]
struct VersionIndex {
    versions: Vec<String>,
}

/// Flat-container index URL for a NuGet package; the endpoint expects lowercased ids.
pub fn package_url(id: &str) -> String {
    format!(
        "https://api.nuget.org/v3-flatcontainer/{}/index.json",
        id.to_lowercase()
    )
}

/// Does nuget.org know the package `id` (at `version`, when given)?
pub async fn package_exists(client: &Client, id: &str, version: Option<&str>) -> Result<bool> {
    let response = client
        .get(package_url(id))
        .header("User-Agent", concat!("notice-splitter/", env!("CARGO_PKG_VERSION")))
        .send()
        .await?;

    if !response.status().is_success() {
        return Ok(false);
    }

    let Some(version) = version else {
        return Ok(true);
    };

    let index: VersionIndex = response.json().await?;
    Ok(has_version(&index, version))
}

fn has_version(index: &VersionIndex, version: &str) -> bool {
    index
        .versions
        .iter()
        .any(|v| v.eq_ignore_ascii_case(version))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_url_lowercases_id() {
        assert_eq!(
            package_url("Newtonsoft.Json"),
            "https://api.nuget.org/v3-flatcontainer/newtonsoft.json/index.json"
        );
    }

    #[test]
    fn test_has_version() {
        let index: VersionIndex =
            serde_json::from_str(r#"{"versions":["12.0.3","13.0.1","13.0.4-beta1"]}"#).unwrap();
        assert!(has_version(&index, "13.0.1"));
        assert!(has_version(&index, "13.0.4-BETA1"));
        assert!(!has_version(&index, "9.0.1"));
    }
}
