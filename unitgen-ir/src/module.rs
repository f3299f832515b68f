//! Schema modules and the context they are resolved in.

use serde::{Deserialize, Serialize};

/// A schema module as seen by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub name: String,
    /// Namespace URI the module's package name is derived from.
    pub namespace: String,
    /// Revision date in `YYYY-MM-DD` form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Names of imported modules.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<String>,
}

impl Module {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            revision: None,
            prefix: None,
            description: None,
            imports: Vec::new(),
        }
    }

    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = Some(revision.into());
        self
    }

    pub fn with_import(mut self, name: impl Into<String>) -> Self {
        self.imports.push(name.into());
        self
    }

    /// Ordering key used to process modules deterministically.
    pub fn sort_key(&self) -> (&str, &str, Option<&str>) {
        (&self.namespace, &self.name, self.revision.as_deref())
    }
}

/// All modules known to a generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaContext {
    #[serde(default)]
    pub modules: Vec<Module>,
}

impl SchemaContext {
    pub fn new(modules: Vec<Module>) -> Self {
        Self { modules }
    }

    /// Find a module by name.
    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.iter().find(|m| m.name == name)
    }

    /// Imported modules of `module` that this context knows about.
    pub fn imports_of<'a>(&'a self, module: &'a Module) -> impl Iterator<Item = &'a Module> + 'a {
        module.imports.iter().filter_map(|name| self.module(name))
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
