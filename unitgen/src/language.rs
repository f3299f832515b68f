//! Unified language dispatch.
//!
//! Centralizes language-specific generator creation.

use std::path::PathBuf;

use unitgen_codegen::{
    CodeGenerator, FileEmitter, GeneratorConfig, ModuleAggregator,
    paths::{DEFAULT_BASE_PACKAGE, DEFAULT_SERVICE},
};
use unitgen_codegen_java::JavaModuleRenderer;
use unitgen_manifest::{Language, UnitgenToml};

/// Everything needed to build a generator, resolved from unitgen.toml.
#[derive(Debug, Clone)]
pub struct Settings {
    pub language: Language,
    pub generated: PathBuf,
    pub base_package: String,
    pub service: String,
    pub generator: GeneratorConfig,
}

impl Settings {
    pub fn from_toml(toml: &UnitgenToml) -> Self {
        let config = toml.config();
        let paths = toml.resolve();
        let language = config.project.language;

        Self {
            language,
            generated: paths.generated,
            base_package: config
                .packages
                .base
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_PACKAGE.to_string()),
            service: config
                .registration
                .service
                .clone()
                .unwrap_or_else(|| DEFAULT_SERVICE.to_string()),
            generator: GeneratorConfig {
                project_base: paths.project_base,
                language: language.as_str().to_string(),
                persistent_sources_dir: paths.persistent,
                resource_base_dir: paths.resources,
            },
        }
    }
}

/// Language-specific generator construction.
pub struct LanguageSupport {
    language: Language,
}

impl LanguageSupport {
    pub fn get(language: Language) -> Self {
        Self { language }
    }

    /// Create a generator for this language.
    pub fn generator(&self, settings: &Settings) -> CodeGenerator {
        let extension = self.language.extension();
        match self.language {
            Language::Java => CodeGenerator::new(
                FileEmitter::new(unitgen_codegen_java::capabilities(), extension),
                ModuleAggregator::new(
                    JavaModuleRenderer::new(&settings.base_package, &settings.service),
                    extension,
                    &settings.base_package,
                    &settings.service,
                ),
                settings.generator.clone(),
            ),
        }
    }
}
