//! What a run wrote, skipped and failed to write.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use tracing::{debug, error, warn};
use unitgen_core::{Overwrite, WriteResult, write_file};

use crate::paths::normalize;

/// Whether a run touches the disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Write files.
    #[default]
    Write,
    /// Decide everything, write nothing.
    Plan,
}

/// A unit that was not written because its path was already taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    /// Fully qualified name of the unit that lost.
    pub unit: String,
    pub path: PathBuf,
    /// True when the path was claimed earlier in the same run, false when
    /// the file was already on disk.
    pub in_run: bool,
}

/// A unit whose file could not be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub unit: String,
    pub path: PathBuf,
    pub error: String,
}

/// Partitioned result of writing a set of units.
///
/// `written` holds absolute paths. In [`Mode::Plan`] it holds the paths that
/// would have been written.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Emission {
    pub written: Vec<PathBuf>,
    /// Units left alone because a hand-maintained file already exists.
    pub persisted: Vec<PathBuf>,
    pub conflicts: Vec<Conflict>,
    pub failed: Vec<Failure>,
}

impl Emission {
    /// Number of units considered.
    pub fn total(&self) -> usize {
        self.written.len() + self.persisted.len() + self.conflicts.len() + self.failed.len()
    }

    /// Fold another emission into this one.
    pub fn merge(&mut self, other: Emission) {
        self.written.extend(other.written);
        self.persisted.extend(other.persisted);
        self.conflicts.extend(other.conflicts);
        self.failed.extend(other.failed);
    }

    pub fn is_clean(&self) -> bool {
        self.conflicts.is_empty() && self.failed.is_empty()
    }
}

/// Applies the existence policy and records every decision.
///
/// Paths are tracked for the lifetime of the sink so that two units resolving
/// to the same file in one run are always detected, whatever the policy.
/// A sink shared by several passes keeps its claims across them.
#[derive(Debug, Default)]
pub(crate) struct Sink {
    mode: Mode,
    claimed: HashSet<PathBuf>,
    cleared: Option<PathBuf>,
    emission: Emission,
}

impl Sink {
    pub(crate) fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Treat everything under `root` as absent, as a run that clears it first would.
    pub(crate) fn assume_cleared(mut self, root: PathBuf) -> Self {
        self.cleared = Some(root);
        self
    }

    /// Reserve `path` for `unit`. Returns the normalized absolute path when
    /// the unit should be rendered and written; records the skip otherwise.
    pub(crate) fn claim(&mut self, unit: &str, path: &Path, overwrite: Overwrite) -> Option<PathBuf> {
        let path = match normalize(path) {
            Ok(path) => path,
            Err(err) => {
                error!(unit, path = %path.display(), error = %err, "could not resolve output path");
                self.emission.failed.push(Failure {
                    unit: unit.to_string(),
                    path: path.to_path_buf(),
                    error: err.to_string(),
                });
                return None;
            }
        };

        if !self.claimed.insert(path.clone()) {
            warn!(
                unit,
                path = %path.display(),
                "naming conflict: another unit of this run already owns the file, not generated"
            );
            self.emission.conflicts.push(Conflict {
                unit: unit.to_string(),
                path,
                in_run: true,
            });
            return None;
        }

        let cleared = self.cleared.as_ref().is_some_and(|root| path.starts_with(root));
        let decision = if cleared {
            overwrite.resolve(false)
        } else {
            overwrite.decide(&path)
        };
        match decision {
            WriteResult::Written => Some(path),
            WriteResult::Skipped => {
                debug!(unit, path = %path.display(), "already persisted, keeping existing file");
                self.emission.persisted.push(path);
                None
            }
            WriteResult::Conflict => {
                warn!(
                    unit,
                    path = %path.display(),
                    "naming conflict: file with same name already exists and will not be generated"
                );
                self.emission.conflicts.push(Conflict {
                    unit: unit.to_string(),
                    path,
                    in_run: false,
                });
                None
            }
        }
    }

    /// Write a claimed path. Failures are logged and recorded, never raised.
    ///
    /// Returns whether the file was written (or would be, in plan mode).
    pub(crate) fn write(&mut self, unit: &str, path: PathBuf, content: &str) -> bool {
        if self.mode == Mode::Plan {
            self.emission.written.push(path);
            return true;
        }

        match write_file(&path, content) {
            Ok(()) => {
                debug!(unit, path = %path.display(), "wrote file");
                self.emission.written.push(path);
                true
            }
            Err(err) => {
                error!(unit, path = %path.display(), error = %format!("{err:#}"), "could not write file");
                self.emission.failed.push(Failure {
                    unit: unit.to_string(),
                    path,
                    error: format!("{err:#}"),
                });
                false
            }
        }
    }

    /// Everything recorded since the sink was created or last taken from.
    pub(crate) fn emission(&self) -> &Emission {
        &self.emission
    }

    /// Hand over what was recorded so far, keeping the claimed paths.
    pub(crate) fn take(&mut self) -> Emission {
        std::mem::take(&mut self.emission)
    }

    pub(crate) fn finish(self) -> Emission {
        self.emission
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_claim_then_write() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("a").join("Foo.java");

        let mut sink = Sink::new(Mode::Write);
        let claimed = sink.claim("a.Foo", &path, Overwrite::Never).unwrap();
        sink.write("a.Foo", claimed, "class Foo {}");
        let emission = sink.finish();

        assert_eq!(emission.written.len(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "class Foo {}");
    }

    #[test]
    fn test_second_claim_in_run_conflicts_for_every_policy() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Foo.java");

        for overwrite in [Overwrite::Always, Overwrite::IfMissing, Overwrite::Never] {
            let mut sink = Sink::new(Mode::Plan);
            assert!(sink.claim("first", &path, overwrite).is_some());
            assert!(sink.claim("second", &path, overwrite).is_none());

            let emission = sink.finish();
            assert_eq!(emission.conflicts.len(), 1);
            assert!(emission.conflicts[0].in_run);
            assert_eq!(emission.conflicts[0].unit, "second");
        }
    }

    #[test]
    fn test_existing_file_policies() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Foo.java");
        fs::write(&path, "existing").unwrap();

        let mut sink = Sink::new(Mode::Write);
        assert!(sink.claim("kept", &path, Overwrite::IfMissing).is_none());
        let emission = sink.finish();
        assert_eq!(emission.persisted.len(), 1);
        assert!(emission.conflicts.is_empty());

        let mut sink = Sink::new(Mode::Write);
        assert!(sink.claim("clash", &path, Overwrite::Never).is_none());
        let emission = sink.finish();
        assert_eq!(emission.conflicts.len(), 1);
        assert!(!emission.conflicts[0].in_run);

        let mut sink = Sink::new(Mode::Write);
        assert!(sink.claim("regen", &path, Overwrite::Always).is_some());
    }

    #[test]
    fn test_aliased_spellings_of_one_path_conflict() {
        let temp = TempDir::new().unwrap();
        let direct = temp.path().join("out").join("Foo.java");
        let aliased = temp.path().join("out").join("x").join("..").join("Foo.java");

        let mut sink = Sink::new(Mode::Plan);
        assert!(sink.claim("first", &direct, Overwrite::Always).is_some());
        assert!(sink.claim("second", &aliased, Overwrite::Always).is_none());

        let emission = sink.finish();
        assert_eq!(emission.conflicts.len(), 1);
        assert_eq!(emission.conflicts[0].path, direct);
    }

    #[test]
    fn test_unresolvable_path_is_recorded_as_failure() {
        let mut sink = Sink::new(Mode::Write);
        assert!(sink.claim("empty", Path::new(""), Overwrite::Never).is_none());

        let emission = sink.finish();
        assert_eq!(emission.failed.len(), 1);
        assert_eq!(emission.failed[0].unit, "empty");
    }

    #[test]
    fn test_cleared_root_hides_existing_files() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("gen").join("Foo.java");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "stale").unwrap();

        let mut sink = Sink::new(Mode::Plan).assume_cleared(temp.path().join("gen"));
        assert!(sink.claim("a.Foo", &path, Overwrite::Never).is_some());
        assert!(sink.finish().conflicts.is_empty());
    }

    #[test]
    fn test_claims_survive_take() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Foo.java");

        let mut sink = Sink::new(Mode::Plan);
        let claimed = sink.claim("first", &path, Overwrite::Never).unwrap();
        assert!(sink.write("first", claimed, "x"));
        let first = sink.take();
        assert_eq!(first.written.len(), 1);

        assert!(sink.claim("second", &path, Overwrite::Always).is_none());
        let second = sink.finish();
        assert!(second.written.is_empty());
        assert!(second.conflicts[0].in_run);
    }

    #[test]
    fn test_plan_mode_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("Foo.java");

        let mut sink = Sink::new(Mode::Plan);
        let claimed = sink.claim("Foo", &path, Overwrite::Never).unwrap();
        sink.write("Foo", claimed, "class Foo {}");
        let emission = sink.finish();

        assert_eq!(emission.written.len(), 1);
        assert!(!path.exists());
    }

    #[test]
    fn test_write_failure_is_recorded() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("a");
        fs::write(&blocker, "file, not directory").unwrap();
        let path = blocker.join("Foo.java");

        let mut sink = Sink::new(Mode::Write);
        let claimed = sink.claim("a.Foo", &path, Overwrite::Never).unwrap();
        sink.write("a.Foo", claimed, "class Foo {}");
        let emission = sink.finish();

        assert!(emission.written.is_empty());
        assert_eq!(emission.failed.len(), 1);
        assert_eq!(emission.failed[0].unit, "a.Foo");
        assert!(!emission.is_clean());
    }

    #[test]
    fn test_merge_and_total() {
        let mut a = Emission {
            written: vec![PathBuf::from("/x")],
            ..Default::default()
        };
        let b = Emission {
            persisted: vec![PathBuf::from("/y")],
            ..Default::default()
        };
        a.merge(b);
        assert_eq!(a.total(), 2);
        assert!(a.is_clean());
    }
}
