//! Generate operation - type emission and module aggregation.

use eyre::{Context, Result};
use tracing::debug;
use unitgen_ir::BindingModel;
use unitgen_manifest::UnitgenToml;

use crate::{
    language::{LanguageSupport, Settings},
    reports::GenerateReport,
};

/// Options for the generate operation.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenerateOptions {
    /// Decide everything without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
pub fn generate(
    toml: &UnitgenToml,
    model: &BindingModel,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let settings = Settings::from_toml(toml);
    debug!(
        config = %toml.path().display(),
        language = %settings.language,
        output = %settings.generated.display(),
        base_package = %settings.base_package,
        service = %settings.service,
        "resolved settings"
    );
    let generator = LanguageSupport::get(settings.language).generator(&settings);

    let outcome = if opts.dry_run {
        generator.plan(model, &settings.generated)
    } else {
        generator.generate_sources(model, &settings.generated)
    }
    .wrap_err("Failed to generate sources")?;

    Ok(GenerateReport {
        output_dir: settings.generated,
        dry_run: opts.dry_run,
        outcome,
    })
}
