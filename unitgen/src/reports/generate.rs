//! Generate command report data structures.

use std::path::{Path, PathBuf};

use unitgen_codegen::{Emission, GenerationOutcome};

use super::output::{Output, Report};

/// Report data from a generation run.
#[derive(Debug)]
pub struct GenerateReport {
    /// Regenerated output directory.
    pub output_dir: PathBuf,
    /// Whether the run only planned.
    pub dry_run: bool,
    pub outcome: GenerationOutcome,
}

impl GenerateReport {
    /// Whether any file could not be written.
    pub fn has_failures(&self) -> bool {
        !self.outcome.combined().failed.is_empty()
    }

    fn display(&self, path: &Path) -> String {
        path.strip_prefix(&self.output_dir)
            .unwrap_or(path)
            .display()
            .to_string()
    }

    fn render_emission(&self, out: &mut dyn Output, emission: &Emission) {
        let heading = if self.dry_run { "Would write" } else { "Written" };
        if !emission.written.is_empty() {
            out.section(&format!("{heading} ({})", emission.written.len()));
            for path in &emission.written {
                out.added_item(&self.display(path));
            }
            out.newline();
        }

        if !emission.persisted.is_empty() {
            out.section(&format!("Kept hand-maintained ({})", emission.persisted.len()));
            for path in &emission.persisted {
                out.list_item(&path.display().to_string());
            }
            out.newline();
        }

        for conflict in &emission.conflicts {
            let reason = if conflict.in_run {
                "another unit of this run already owns the file"
            } else {
                "file already exists"
            };
            out.warning(&format!(
                "naming conflict: {} not generated, {} ({})",
                conflict.unit,
                reason,
                conflict.path.display()
            ));
        }

        for failure in &emission.failed {
            out.error(&format!(
                "could not write {} ({}): {}",
                failure.unit,
                failure.path.display(),
                failure.error
            ));
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if self.dry_run {
            out.divider("Dry run, nothing written");
        }

        let all = self.outcome.combined();
        self.render_emission(out, &all);

        let modules = &self.outcome.modules;
        if !modules.providers.is_empty() {
            out.section(&format!("Registered providers ({})", modules.providers.len()));
            for (i, provider) in modules.providers.iter().enumerate() {
                out.numbered_item(i + 1, provider);
            }
            out.newline();
        }
        if let Some(registration) = &modules.registration {
            out.key_value("Registration", &registration.display().to_string());
        }

        out.key_value(
            "Summary",
            &format!(
                "{} written, {} kept, {} conflicts, {} failed",
                all.written.len(),
                all.persisted.len(),
                all.conflicts.len(),
                all.failed.len()
            ),
        );
    }
}
