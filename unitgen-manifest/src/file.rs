use std::path::{Path, PathBuf};

use crate::{Config, Error, Result, parse_config};

/// A unitgen.toml file with both raw content and parsed config.
#[derive(Debug)]
pub struct UnitgenToml {
    path: PathBuf,
    content: String,
    config: Config,
}

/// Config paths resolved against the directory holding unitgen.toml.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub project_base: PathBuf,
    pub generated: PathBuf,
    pub persistent: Option<PathBuf>,
    pub resources: PathBuf,
}

impl UnitgenToml {
    /// Open and parse a unitgen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let config = parse_config(&content, &path.display().to_string())?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Directory relative paths in the config are resolved against.
    pub fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    pub fn resolve(&self) -> ResolvedPaths {
        let dir = self.dir();
        let output = &self.config.output;
        ResolvedPaths {
            project_base: dir.join(&self.config.project.base_dir),
            generated: dir.join(&output.generated),
            persistent: output.persistent.as_ref().map(|p| dir.join(p)),
            resources: dir.join(&output.resources),
        }
    }
}
