//! Per-module artifacts and the merged service registration.
//!
//! Every module contributes a module-info unit, a binding-provider unit and
//! one or more provider identifiers. The identifiers of all modules are
//! merged into a single registration file under `META-INF/services`.

use std::path::{Path, PathBuf};

use indexmap::IndexSet;
use tracing::{debug, info};
use unitgen_core::{
    GeneratedFile, Overwrite, namespace_to_package_name, package_to_directory,
    validate_package_name,
};
use unitgen_ir::{Module, SchemaContext};

use crate::{
    Emission, Error, Mode, Result,
    outcome::Sink,
    paths::{BINDING_PROVIDER_UNIT, MODULE_INFO_UNIT, SERVICES_DIR},
};

/// Sources rendered for one module.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleSources {
    /// Source of the module-info unit.
    pub module_info: String,
    /// Source of the binding-provider unit.
    pub provider: String,
    /// Identifiers to list in the registration file.
    pub providers: Vec<String>,
}

/// Renders the per-module units.
pub trait ModuleRenderer {
    /// Render the artifacts of `module`, whose units live in `package`.
    fn render(&self, module: &Module, package: &str, context: &SchemaContext) -> ModuleSources;
}

/// Deduplicating, insertion-ordered accumulator of provider identifiers.
///
/// Threaded through one aggregation and finished once into a
/// [`RegistrationFile`].
#[derive(Debug, Default, Clone)]
pub struct ProviderRegistry {
    providers: IndexSet<String>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one identifier. Returns false if it was already registered.
    pub fn add(&mut self, provider: impl Into<String>) -> bool {
        self.providers.insert(provider.into())
    }

    pub fn extend<I, S>(&mut self, providers: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.providers.extend(providers.into_iter().map(Into::into));
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.providers.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Finalize into the registration file for `service`.
    pub fn finish(self, service: impl Into<String>) -> RegistrationFile {
        RegistrationFile {
            service: service.into(),
            providers: self.providers.into_iter().collect(),
        }
    }
}

/// `META-INF/services/<service>`: one provider identifier per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationFile {
    pub service: String,
    pub providers: Vec<String>,
}

impl GeneratedFile for RegistrationFile {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(SERVICES_DIR).join(&self.service)
    }

    fn overwrite(&self) -> Overwrite {
        Overwrite::Always
    }

    fn render(&self) -> String {
        self.providers.join("\n")
    }
}

/// Result of one aggregation run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Aggregation {
    /// Module artifacts and the registration file.
    pub emission: Emission,
    /// Registered provider identifiers, in registration order.
    pub providers: Vec<String>,
    /// Where the registration file went, if it was written.
    pub registration: Option<PathBuf>,
}

/// Writes module artifacts and the merged registration file.
pub struct ModuleAggregator {
    renderer: Box<dyn ModuleRenderer>,
    extension: String,
    base_package: String,
    service: String,
}

impl ModuleAggregator {
    pub fn new(
        renderer: impl ModuleRenderer + 'static,
        extension: impl Into<String>,
        base_package: impl Into<String>,
        service: impl Into<String>,
    ) -> Self {
        Self {
            renderer: Box::new(renderer),
            extension: extension.into(),
            base_package: base_package.into(),
            service: service.into(),
        }
    }

    /// Package the units of `module` are generated into.
    pub fn package_for(&self, module: &Module) -> String {
        namespace_to_package_name(
            &self.base_package,
            &module.namespace,
            module.revision.as_deref(),
        )
    }

    /// Write the artifacts of every module, then the registration file.
    ///
    /// Modules are processed sorted by namespace, name and revision, so the
    /// registration order does not depend on the caller's ordering.
    pub fn aggregate(
        &self,
        modules: &[&Module],
        context: &SchemaContext,
        output_root: &Path,
        resource_root: &Path,
    ) -> Result<Aggregation> {
        self.run(modules, context, output_root, resource_root, Mode::Write)
    }

    /// Make every decision [`aggregate`](Self::aggregate) would make without writing.
    pub fn plan(
        &self,
        modules: &[&Module],
        context: &SchemaContext,
        output_root: &Path,
        resource_root: &Path,
    ) -> Result<Aggregation> {
        self.run(modules, context, output_root, resource_root, Mode::Plan)
    }

    fn run(
        &self,
        modules: &[&Module],
        context: &SchemaContext,
        output_root: &Path,
        resource_root: &Path,
        mode: Mode,
    ) -> Result<Aggregation> {
        let mut sink = Sink::new(mode);
        let mut aggregation =
            self.aggregate_into(&mut sink, modules, context, output_root, resource_root)?;
        aggregation.emission = sink.finish();
        Ok(aggregation)
    }

    /// Aggregate through a sink that may already hold claims from another
    /// pass. The returned emission is empty; what was recorded stays in `sink`.
    pub(crate) fn aggregate_into(
        &self,
        sink: &mut Sink,
        modules: &[&Module],
        context: &SchemaContext,
        output_root: &Path,
        resource_root: &Path,
    ) -> Result<Aggregation> {
        validate_package_name(&self.service)
            .map_err(|source| Error::invalid_package(format!("service {}", self.service), source))?;

        let mut modules = modules.to_vec();
        modules.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

        let mut registry = ProviderRegistry::new();

        for module in modules {
            let providers = self.emit_module(sink, module, context, output_root)?;
            info!(module = %module.name, ?providers, "adding module info providers");
            registry.extend(providers);
        }

        let registration = registry.finish(self.service.clone());
        let providers = registration.providers.clone();
        let mut registration_path = None;
        if let Some(path) = sink.claim(
            &self.service,
            &registration.path(resource_root),
            registration.overwrite(),
        ) {
            if sink.write(&self.service, path.clone(), &registration.render()) {
                registration_path = Some(path);
            }
        }

        debug!(
            providers = providers.len(),
            written = sink.emission().written.len(),
            "module aggregation finished"
        );

        Ok(Aggregation {
            emission: Emission::default(),
            providers,
            registration: registration_path,
        })
    }

    fn emit_module(
        &self,
        sink: &mut Sink,
        module: &Module,
        context: &SchemaContext,
        output_root: &Path,
    ) -> Result<Vec<String>> {
        let package = self.package_for(module);
        let package_dir = package_to_directory(output_root, &package)
            .map_err(|source| Error::invalid_package(&module.name, source))?;

        let sources = self.renderer.render(module, &package, context);
        if sources.module_info.is_empty() {
            return Err(Error::empty_source("module-info", &module.name));
        }
        if sources.provider.is_empty() {
            return Err(Error::empty_source("binding-provider", &module.name));
        }

        for (unit_name, source) in [
            (MODULE_INFO_UNIT, &sources.module_info),
            (BINDING_PROVIDER_UNIT, &sources.provider),
        ] {
            let unit = format!("{package}.{unit_name}");
            let path = package_dir.join(format!("{unit_name}.{}", self.extension));
            if let Some(path) = sink.claim(&unit, &path, Overwrite::Always) {
                sink.write(&unit, path, source);
            }
        }

        Ok(sources.providers)
    }
}
