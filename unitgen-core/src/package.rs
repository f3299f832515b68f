//! Package names and the directories they map to.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// A package name that cannot be mapped to a directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PackageError {
    #[error("package name is empty")]
    Empty,
    #[error("package name '{package}' has an empty segment")]
    EmptySegment { package: String },
    #[error("package name '{package}' has an invalid segment '{segment}'")]
    InvalidSegment { package: String, segment: String },
}

/// Check that every dot-separated segment is a plain identifier.
pub fn validate_package_name(package: &str) -> Result<(), PackageError> {
    if package.is_empty() {
        return Err(PackageError::Empty);
    }
    for segment in package.split('.') {
        if segment.is_empty() {
            return Err(PackageError::EmptySegment {
                package: package.to_string(),
            });
        }
        let valid = segment.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '$')
            && !segment.starts_with(|c: char| c.is_ascii_digit());
        if !valid {
            return Err(PackageError::InvalidSegment {
                package: package.to_string(),
                segment: segment.to_string(),
            });
        }
    }
    Ok(())
}

/// Map `a.b.c` to `root/a/b/c`.
pub fn package_to_directory(root: &Path, package: &str) -> Result<PathBuf, PackageError> {
    validate_package_name(package)?;
    Ok(package
        .split('.')
        .fold(root.to_path_buf(), |dir, segment| dir.join(segment)))
}

/// Derive a package name from a module namespace and revision.
///
/// The namespace is split on every non-alphanumeric character, each segment
/// lowercased, and segments starting with a digit get a `_` prefix. A
/// revision `YYYY-MM-DD` becomes a trailing `revYYMMDD` segment.
///
/// ```
/// use unitgen_core::namespace_to_package_name;
///
/// let package = namespace_to_package_name(
///     "org.example.gen.v1",
///     "urn:example:params:net-interfaces",
///     Some("2024-01-15"),
/// );
/// assert_eq!(package, "org.example.gen.v1.urn.example.params.net.interfaces.rev240115");
/// ```
pub fn namespace_to_package_name(base: &str, namespace: &str, revision: Option<&str>) -> String {
    let mut segments: Vec<String> = base
        .split('.')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    segments.extend(
        namespace
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|s| !s.is_empty())
            .map(|s| {
                let s = s.to_ascii_lowercase();
                if s.starts_with(|c: char| c.is_ascii_digit()) {
                    format!("_{s}")
                } else {
                    s
                }
            }),
    );

    if let Some(revision) = revision {
        let digits: String = revision.chars().filter(char::is_ascii_digit).collect();
        if !digits.is_empty() {
            // YYYYMMDD -> YYMMDD
            let short = if digits.len() == 8 { &digits[2..] } else { &digits };
            segments.push(format!("rev{short}"));
        }
    }

    segments.join(".")
}
