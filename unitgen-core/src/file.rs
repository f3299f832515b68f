use std::{
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use eyre::{Result, WrapErr};

/// A file whose path, existence policy and content are all derived from itself.
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// How an existing file at [`path`](Self::path) is treated
    fn overwrite(&self) -> Overwrite;

    /// Render the file content
    fn render(&self) -> String;
}

/// Write `content` to `path`, creating parent directories as needed.
///
/// The path is made absolute first. The handle is scoped to this call and
/// released on every exit path; a failed write may leave a partial file.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    let path = std::path::absolute(path)
        .wrap_err_with(|| format!("could not resolve '{}'", path.display()))?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("could not create directory '{}'", parent.display()))?;
    }

    let file = std::fs::File::create(&path)
        .wrap_err_with(|| format!("could not create file '{}'", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(content.as_bytes())
        .and_then(|()| writer.flush())
        .wrap_err_with(|| format!("could not write file '{}'", path.display()))?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written
    Written,
    /// File was skipped (already exists and is kept on purpose)
    Skipped,
    /// File was not written because another unit already owns the path
    Conflict,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite (module artifacts, registration file)
    Always,
    /// Only create if file doesn't exist (hand-maintained units)
    IfMissing,
    /// Never overwrite; an existing file is a naming conflict
    Never,
}

impl Overwrite {
    /// Decide what writing to `path` would do given what is on disk now.
    pub fn decide(self, path: &Path) -> WriteResult {
        self.resolve(path.exists())
    }

    /// Decide given whether the target is taken.
    pub fn resolve(self, exists: bool) -> WriteResult {
        match (self, exists) {
            (Overwrite::Always, _) | (_, false) => WriteResult::Written,
            (Overwrite::IfMissing, true) => WriteResult::Skipped,
            (Overwrite::Never, true) => WriteResult::Conflict,
        }
    }
}
