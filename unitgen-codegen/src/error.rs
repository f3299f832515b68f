//! Fatal generation errors.
//!
//! Anything here aborts the whole run. Per-file I/O problems are not errors;
//! they are recorded in [`Emission::failed`](crate::Emission::failed).

use std::{io, path::PathBuf};

use unitgen_core::PackageError;

/// Result type for generation runs.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A renderer produced no text for a unit it accepted.
    #[error("generator '{generator}' produced empty source for '{unit}'")]
    EmptySource { generator: String, unit: String },

    /// A type or module maps to a package that cannot become a directory.
    #[error("invalid package for '{unit}'")]
    InvalidPackage {
        unit: String,
        #[source]
        source: PackageError,
    },

    /// A selected module is not part of the schema context.
    #[error("module '{name}' is not part of the schema context")]
    UnknownModule { name: String },

    /// The regenerated root cannot be cleared without losing other files.
    #[error("refusing to clear '{}': it contains the {contains} '{}'", .path.display(), .other.display())]
    UnsafeOutputDir {
        path: PathBuf,
        contains: &'static str,
        other: PathBuf,
    },

    /// The regenerated root could not be resolved or cleared.
    #[error("could not clear output directory '{}'", .path.display())]
    ClearOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn empty_source(generator: impl Into<String>, unit: impl Into<String>) -> Self {
        Error::EmptySource {
            generator: generator.into(),
            unit: unit.into(),
        }
    }

    pub fn clear_output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::ClearOutput {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_package(unit: impl Into<String>, source: PackageError) -> Self {
        Error::InvalidPackage {
            unit: unit.into(),
            source,
        }
    }
}
