// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;
mod language;
mod model;
mod parse;
mod validate;

pub use config::{Config, OutputConfig, PackagesConfig, ProjectConfig, RegistrationConfig};
pub use error::{Error, Result, SourceContext};
pub use file::{ResolvedPaths, UnitgenToml};
pub use language::Language;
pub use model::{load_model, parse_model};
pub use parse::parse_config;

/// Name of the configuration file looked up by default.
pub const CONFIG_FILE_NAME: &str = "unitgen.toml";
