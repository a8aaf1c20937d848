use anyhow::Result;
use reqwest::Client;

/// Registry URL for an npm package, optionally pinned to a version.
/// Scoped packages are encoded: `@scope/pkg` → `%40scope%2Fpkg`.
pub fn package_url(name: &str, version: Option<&str>) -> String {
    let encoded_name = name.replace('@', "%40").replace('/', "%2F");
    match version {
        Some(version) => format!("https://registry.npmjs.org/{}/{}", encoded_name, version),
        None => format!("https://registry.npmjs.org/{}", encoded_name),
    }
}

/// Does the npm registry know `name` (at `version`, when given)?
pub async fn package_exists(client: &Client, name: &str, version: Option<&str>) -> Result<bool> {
    let response = client
        .get(package_url(name, version))
        .header("User-Agent", concat!("notice-splitter/", env!("CARGO_PKG_VERSION")))
        .header("Accept", "application/json")
        .send()
        .await?;

    Ok(response.status().is_success())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_url() {
        assert_eq!(package_url("lodash", None), "https://registry.npmjs.org/lodash");
        assert_eq!(
            package_url("lodash", Some("4.17.21")),
            "https://registry.npmjs.org/lodash/4.17.21"
        );
        assert_eq!(
            package_url("@babel/core", Some("7.22.0")),
            "https://registry.npmjs.org/%40babel%2Fcore/7.22.0"
        );
    }
}
