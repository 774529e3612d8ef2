//! Semantic-version parsing and bumping.

use crate::error::{Error, Result};

/// Version bump kind. `Patch` is the default when no kind is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BumpKind {
    Major,
    Minor,
    #[default]
    Patch,
}

impl BumpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
        }
    }
}

/// Parse a `major.minor.patch` string into its numeric triple.
///
/// Components past the third are ignored. Fewer than three components, or a
/// non-numeric component among the first three, is an error.
pub fn parse_version(version: &str) -> Result<(u32, u32, u32)> {
    let parts: Vec<&str> = version.split('.').collect();
    if parts.len() < 3 {
        return Err(invalid(version, "expected major.minor.patch"));
    }

    let component = |idx: usize, name: &str| -> Result<u32> {
        parts[idx].parse().map_err(|_| {
            invalid(
                version,
                &format!("{} component '{}' is not a number", name, parts[idx]),
            )
        })
    };

    Ok((
        component(0, "major")?,
        component(1, "minor")?,
        component(2, "patch")?,
    ))
}

fn invalid(version: &str, problem: &str) -> Error {
    Error::validation_invalid_argument(
        "version",
        format!("Invalid version '{}': {}", version, problem),
        None,
        None,
    )
}

/// Bump a version string, applying standard semver reset rules.
///
/// Bumping major zeroes minor and patch; bumping minor zeroes patch;
/// bumping patch only increments patch.
pub fn bump_version(version: &str, kind: BumpKind) -> Result<String> {
    let (major, minor, patch) = parse_version(version)?;

    let (major, minor, patch) = match kind {
        BumpKind::Major => (major + 1, 0, 0),
        BumpKind::Minor => (major, minor + 1, 0),
        BumpKind::Patch => (major, minor, patch + 1),
    };

    Ok(format!("{}.{}.{}", major, minor, patch))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_triple() {
        assert_eq!(parse_version("10.20.30").unwrap(), (10, 20, 30));
        assert_eq!(parse_version("0.0.1").unwrap(), (0, 0, 1));
    }

    #[test]
    fn parse_ignores_extra_components() {
        assert_eq!(parse_version("1.2.3.4").unwrap(), (1, 2, 3));
    }

    #[test]
    fn parse_rejects_short_and_non_numeric() {
        assert!(parse_version("1.2").is_err());
        assert!(parse_version("1.2.x").is_err());
        assert!(parse_version("").is_err());
    }

    #[test]
    fn bump_applies_reset_rules() {
        assert_eq!(bump_version("1.2.3", BumpKind::Patch).unwrap(), "1.2.4");
        assert_eq!(bump_version("1.2.3", BumpKind::Minor).unwrap(), "1.3.0");
        assert_eq!(bump_version("1.2.3", BumpKind::Major).unwrap(), "2.0.0");
    }

    #[test]
    fn default_kind_is_patch() {
        assert_eq!(bump_version("0.1.0", BumpKind::default()).unwrap(), "0.1.1");
    }
}
