//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from config and model validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Path to the binding model.
    pub model_path: PathBuf,
    pub type_count: usize,
    /// Modules selected for aggregation.
    pub module_count: usize,
    /// Problems that would abort generation.
    pub errors: Vec<String>,
    /// Units that would not be generated.
    pub conflicts: Vec<String>,
    /// Files a generation run would write.
    pub planned: usize,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }

        for conflict in &self.conflicts {
            out.warning(&format!("naming conflict: {conflict}"));
        }

        if !self.errors.is_empty() || !self.conflicts.is_empty() {
            out.newline();
        }

        if self.is_valid() {
            out.preformatted(&format!(
                "✓ {} and {} are valid",
                self.config_path.display(),
                self.model_path.display()
            ));
            out.newline();
            out.key_value("Types", &self.type_count.to_string());
            out.key_value("Modules", &self.module_count.to_string());
            out.key_value("Files to write", &self.planned.to_string());
        }
    }
}
