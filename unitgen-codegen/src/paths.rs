//! Path constants for generated files.
//!
//! This module centralizes directory and file names used by the engine,
//! eliminating magic strings scattered throughout the codebase.

use std::{
    io,
    path::{Component, Path, PathBuf},
};

/// Directory (relative to the resource root) holding service registrations.
pub const SERVICES_DIR: &str = "META-INF/services";

/// Unit name of the generated module-info class.
pub const MODULE_INFO_UNIT: &str = "$ModuleInfoImpl";

/// Unit name of the generated binding provider class.
pub const BINDING_PROVIDER_UNIT: &str = "$ModelBindingProvider";

/// Service contract the binding providers are registered under by default.
pub const DEFAULT_SERVICE: &str = "org.unitgen.binding.ModelBindingProvider";

/// Default package prefix for namespace-derived packages.
pub const DEFAULT_BASE_PACKAGE: &str = "org.unitgen.gen.v1";

/// Persistent source root relative to the project base for `language`.
pub fn default_persistent_dir(language: &str) -> String {
    format!("src/main/{language}")
}

/// Absolute form of `path` with `.` and `..` resolved lexically.
///
/// Symlinks are not followed, so the path does not need to exist.
pub fn normalize(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}
