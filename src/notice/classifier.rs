use crate::models::ComponentType;

/// Infer the ecosystem of a block from its title line.
///
/// A title starting with a character that lowercasing leaves unchanged (lowercase
/// letters, digits, punctuation) or with `@` is an npm package; anything else,
/// i.e. an uppercase first letter, is a NuGet package. Blank lines stay `Unknown`.
pub fn classify(line: &str) -> ComponentType {
    match line.trim_start().chars().next() {
        None => ComponentType::Unknown,
        Some(c) if c == '@' || c.to_lowercase().eq(std::iter::once(c)) => ComponentType::Npm,
        Some(_) => ComponentType::Nuget,
    }
}
