//! Test utilities for the engine and renderer crates.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use tempfile::TempDir;
use unitgen_ir::{Module, SchemaContext, TypeDescriptor, TypeKind};

use crate::{Capabilities, GeneratorCapability, ModuleRenderer, ModuleSources};

/// Capability accepting exactly one [`TypeKind`].
///
/// Renders `// <name> <fully qualified name>`.
pub struct StubCapability {
    name: &'static str,
    kind: TypeKind,
    suffix: &'static str,
    empty: bool,
}

impl StubCapability {
    pub fn new(name: &'static str, kind: TypeKind) -> Self {
        Self {
            name,
            kind,
            suffix: "",
            empty: false,
        }
    }

    /// Append `suffix` to the unit name.
    pub fn suffix(mut self, suffix: &'static str) -> Self {
        self.suffix = suffix;
        self
    }

    /// Render empty source.
    pub fn empty(mut self) -> Self {
        self.empty = true;
        self
    }
}

impl GeneratorCapability for StubCapability {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_acceptable(&self, ty: &TypeDescriptor) -> bool {
        ty.kind == self.kind
    }

    fn generate(&self, ty: &TypeDescriptor) -> String {
        if self.empty {
            String::new()
        } else {
            format!("// {} {}\n", self.name, ty.fully_qualified_name())
        }
    }

    fn unit_name(&self, ty: &TypeDescriptor) -> String {
        format!("{}{}", ty.name, self.suffix)
    }
}

/// One stub capability per kind, in the standard order.
pub fn stub_capabilities() -> Capabilities {
    Capabilities::new()
        .with(StubCapability::new("interface", TypeKind::Interface))
        .with(StubCapability::new("transfer-object", TypeKind::TransferObject))
        .with(StubCapability::new("enumeration", TypeKind::Enumeration))
        .with(StubCapability::new("builder", TypeKind::Builder))
}

/// Module renderer with canned provider identifiers per module name.
#[derive(Debug, Default)]
pub struct StubModuleRenderer {
    providers: HashMap<String, Vec<String>>,
    empty_module_info: Vec<String>,
    empty_provider: Vec<String>,
}

impl StubModuleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider identifiers reported for `module`.
    pub fn providers<I, S>(mut self, module: &str, providers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.providers.insert(
            module.to_string(),
            providers.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Render an empty module-info unit for `module`.
    pub fn empty_module_info(mut self, module: &str) -> Self {
        self.empty_module_info.push(module.to_string());
        self
    }

    /// Render an empty binding-provider unit for `module`.
    pub fn empty_provider(mut self, module: &str) -> Self {
        self.empty_provider.push(module.to_string());
        self
    }
}

impl ModuleRenderer for StubModuleRenderer {
    fn render(&self, module: &Module, package: &str, _context: &SchemaContext) -> ModuleSources {
        let module_info = if self.empty_module_info.contains(&module.name) {
            String::new()
        } else {
            format!("// module info {} in {}\n", module.name, package)
        };
        let provider = if self.empty_provider.contains(&module.name) {
            String::new()
        } else {
            format!("// provider {}\n", module.name)
        };
        ModuleSources {
            module_info,
            provider,
            providers: self.providers.get(&module.name).cloned().unwrap_or_default(),
        }
    }
}

/// Scratch output tree with `generated/`, `persistent/` and `resources/`.
pub struct TestTree {
    dir: TempDir,
    regenerated: PathBuf,
    persistent: PathBuf,
    resources: PathBuf,
}

impl TestTree {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let regenerated = dir.path().join("generated");
        let persistent = dir.path().join("persistent");
        let resources = dir.path().join("resources");
        for sub in [&regenerated, &persistent, &resources] {
            std::fs::create_dir_all(sub).expect("failed to create test tree");
        }
        Self {
            dir,
            regenerated,
            persistent,
            resources,
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn regenerated(&self) -> &Path {
        &self.regenerated
    }

    pub fn persistent(&self) -> &Path {
        &self.persistent
    }

    pub fn resources(&self) -> &Path {
        &self.resources
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
