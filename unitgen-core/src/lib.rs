//! Core utilities and types for the unitgen code generator.
//!
//! This crate provides the file writing rules, package path handling and
//! naming helpers shared by the engine and the renderers.

mod file;
mod package;
mod utils;

// File operations
pub use file::{GeneratedFile, Overwrite, WriteResult, write_file};
// Package handling
pub use package::{
    PackageError, namespace_to_package_name, package_to_directory, validate_package_name,
};
// String utilities
pub use utils::{capitalize, to_screaming_snake_case};
