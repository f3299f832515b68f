//! Type emission into the regenerated and persistent source trees.

use std::path::{Path, PathBuf};

use tracing::{debug, info};
use unitgen_core::{Overwrite, package_to_directory};
use unitgen_ir::TypeDescriptor;

use crate::{
    Capabilities, Emission, Error, GeneratorCapability, Mode, Result, outcome::Sink,
};

/// Which of the two output trees a unit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputRoot {
    /// Rewritten on every run. Existing files signal a naming conflict.
    Regenerated,
    /// Hand-maintained. Files are created once and never touched again.
    Persistent,
}

impl OutputRoot {
    /// Route a type: union builders are persisted, everything else regenerated.
    pub fn for_type(ty: &TypeDescriptor) -> Self {
        if ty.is_union_builder() {
            OutputRoot::Persistent
        } else {
            OutputRoot::Regenerated
        }
    }

    /// Existence policy applied to files under this root.
    pub fn overwrite(&self) -> Overwrite {
        match self {
            OutputRoot::Regenerated => Overwrite::Never,
            OutputRoot::Persistent => Overwrite::IfMissing,
        }
    }
}

/// Emits one file per (type, accepting capability) pair.
pub struct FileEmitter {
    capabilities: Capabilities,
    extension: String,
}

impl FileEmitter {
    /// Create an emitter writing files with the given extension (without dot).
    pub fn new(capabilities: Capabilities, extension: impl Into<String>) -> Self {
        Self {
            capabilities,
            extension: extension.into(),
        }
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Write every accepted unit and return what happened to each.
    ///
    /// Empty rendered source or an unusable package name aborts the run.
    /// Existing files and per-file I/O failures do not.
    pub fn emit(
        &self,
        types: &[TypeDescriptor],
        regenerated: &Path,
        persistent: &Path,
    ) -> Result<Emission> {
        self.run(types, regenerated, persistent, Mode::Write)
    }

    /// Make every decision [`emit`](Self::emit) would make without writing.
    pub fn plan(
        &self,
        types: &[TypeDescriptor],
        regenerated: &Path,
        persistent: &Path,
    ) -> Result<Emission> {
        self.run(types, regenerated, persistent, Mode::Plan)
    }

    fn run(
        &self,
        types: &[TypeDescriptor],
        regenerated: &Path,
        persistent: &Path,
        mode: Mode,
    ) -> Result<Emission> {
        let mut sink = Sink::new(mode);
        self.emit_into(&mut sink, types, regenerated, persistent)?;
        Ok(sink.finish())
    }

    /// Emit through a sink that may already hold claims from another pass.
    pub(crate) fn emit_into(
        &self,
        sink: &mut Sink,
        types: &[TypeDescriptor],
        regenerated: &Path,
        persistent: &Path,
    ) -> Result<()> {
        for ty in types {
            for capability in self.capabilities.accepting(ty) {
                let root = OutputRoot::for_type(ty);
                let base = match root {
                    OutputRoot::Regenerated => regenerated,
                    OutputRoot::Persistent => persistent,
                };
                self.emit_unit(sink, ty, capability, base, root)?;
            }
        }

        let emission = sink.emission();
        info!(
            written = emission.written.len(),
            persisted = emission.persisted.len(),
            conflicts = emission.conflicts.len(),
            failed = emission.failed.len(),
            "type emission finished"
        );
        Ok(())
    }

    fn emit_unit(
        &self,
        sink: &mut Sink,
        ty: &TypeDescriptor,
        capability: &dyn GeneratorCapability,
        base: &Path,
        root: OutputRoot,
    ) -> Result<()> {
        let unit = ty.fully_qualified_name();
        let path = self.unit_path(base, ty, capability)?;

        let Some(path) = sink.claim(&unit, &path, root.overwrite()) else {
            return Ok(());
        };

        debug!(unit = %unit, generator = capability.name(), ?root, "rendering unit");
        let source = capability.generate(ty);
        if source.is_empty() {
            return Err(Error::empty_source(capability.name(), unit));
        }

        sink.write(&unit, path, &source);
        Ok(())
    }

    /// `base/<package as path>/<unit name>.<extension>`
    pub fn unit_path(
        &self,
        base: &Path,
        ty: &TypeDescriptor,
        capability: &dyn GeneratorCapability,
    ) -> Result<PathBuf> {
        let package_dir = package_to_directory(base, &ty.package_name)
            .map_err(|source| Error::invalid_package(ty.fully_qualified_name(), source))?;
        Ok(package_dir.join(format!("{}.{}", capability.unit_name(ty), self.extension)))
    }
}
