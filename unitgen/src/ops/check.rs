//! Check operation - validate config and model, then plan in memory.

use std::path::Path;

use unitgen_core::validate_package_name;
use unitgen_ir::BindingModel;
use unitgen_manifest::UnitgenToml;

use crate::{
    language::{LanguageSupport, Settings},
    reports::CheckReport,
};

/// Execute the check operation.
///
/// Nothing is written. The regenerated root is planned as if cleared, so
/// only collisions within the run and nothing under it count as conflicts.
pub fn check(toml: &UnitgenToml, model: &BindingModel, model_path: &Path) -> CheckReport {
    let mut report = CheckReport {
        config_path: toml.path().to_path_buf(),
        model_path: model_path.to_path_buf(),
        type_count: model.types.len(),
        module_count: model.selected_module_names().len(),
        errors: Vec::new(),
        conflicts: Vec::new(),
        planned: 0,
    };

    for ty in &model.types {
        if let Err(e) = validate_package_name(&ty.package_name) {
            report
                .errors
                .push(format!("type {}: {}", ty.fully_qualified_name(), e));
        }
    }
    if let Err(name) = model.selected_modules() {
        report
            .errors
            .push(format!("module '{name}' is not part of the schema context"));
    }
    if !report.errors.is_empty() {
        return report;
    }

    let settings = Settings::from_toml(toml);
    let generator = LanguageSupport::get(settings.language).generator(&settings);
    match generator.plan(model, &settings.generated) {
        Ok(outcome) => {
            let all = outcome.combined();
            report.planned = all.written.len();
            report.conflicts = all
                .conflicts
                .iter()
                .map(|c| format!("{} ({})", c.unit, c.path.display()))
                .collect();
        }
        Err(e) => report.errors.push(e.to_string()),
    }

    report
}
