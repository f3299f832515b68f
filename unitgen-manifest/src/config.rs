//! Schema of `unitgen.toml`.

use std::path::PathBuf;

use serde::Deserialize;

use crate::Language;

/// Root schema for unitgen.toml. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub registration: RegistrationConfig,
    #[serde(default)]
    pub packages: PackagesConfig,
}

/// `[project]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Project base directory, relative to the config file.
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,
    /// Selects the renderers and the conventional persistent root `src/main/<language>`.
    #[serde(default)]
    pub language: Language,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            language: Language::default(),
        }
    }
}

/// `[output]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Regenerated root. Cleared by the build, never hand-edited.
    #[serde(default = "default_generated")]
    pub generated: PathBuf,
    /// Persistent root for hand-maintained units.
    #[serde(default)]
    pub persistent: Option<PathBuf>,
    /// Resource root receiving `META-INF/services`.
    #[serde(default = "default_resources")]
    pub resources: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            generated: default_generated(),
            persistent: None,
            resources: default_resources(),
        }
    }
}

/// `[registration]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistrationConfig {
    /// Service contract name; the generator's default when absent.
    pub service: Option<String>,
}

/// `[packages]`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackagesConfig {
    /// Prefix of namespace-derived packages; the generator's default when absent.
    pub base: Option<String>,
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_generated() -> PathBuf {
    PathBuf::from("target/generated-sources/unitgen")
}

fn default_resources() -> PathBuf {
    PathBuf::from("target/generated-resources/unitgen")
}
