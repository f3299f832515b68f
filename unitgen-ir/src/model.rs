//! The translator's output for one generation run.

use serde::{Deserialize, Serialize};

use crate::{Module, SchemaContext, TypeDescriptor};

/// Type descriptors plus the schema context they were derived from.
///
/// This is the document an external translator writes (as JSON) and the
/// generator reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingModel {
    #[serde(default)]
    pub context: SchemaContext,
    #[serde(default)]
    pub types: Vec<TypeDescriptor>,
    /// Modules to generate module artifacts for. All context modules when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modules: Option<Vec<String>>,
}

impl BindingModel {
    /// Names of the modules selected for generation.
    pub fn selected_module_names(&self) -> Vec<&str> {
        match &self.modules {
            Some(names) => names.iter().map(String::as_str).collect(),
            None => self.context.modules.iter().map(|m| m.name.as_str()).collect(),
        }
    }

    /// Resolve the selected modules, returning the first unknown name on failure.
    pub fn selected_modules(&self) -> Result<Vec<&Module>, String> {
        self.selected_module_names()
            .into_iter()
            .map(|name| self.context.module(name).ok_or_else(|| name.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypeKind;

    const MODEL: &str = r#"{
        "context": {
            "modules": [
                { "name": "base", "namespace": "urn:example:base", "revision": "2024-01-15" },
                { "name": "network", "namespace": "urn:example:network", "imports": ["base"] }
            ]
        },
        "types": [
            { "package_name": "a.b", "name": "Foo", "kind": "interface", "builder": true },
            { "package_name": "a.b", "name": "FooBuilder", "kind": "transfer-object", "union_builder": true }
        ]
    }"#;

    #[test]
    fn test_parse_model() {
        let model: BindingModel = serde_json::from_str(MODEL).unwrap();
        assert_eq!(model.context.len(), 2);
        assert_eq!(model.types.len(), 2);
        assert_eq!(model.types[0].kind, TypeKind::Interface);
        assert!(model.types[1].is_union_builder());
    }

    #[test]
    fn test_all_modules_selected_by_default() {
        let model: BindingModel = serde_json::from_str(MODEL).unwrap();
        assert_eq!(model.selected_module_names(), vec!["base", "network"]);
        assert_eq!(model.selected_modules().unwrap().len(), 2);
    }

    #[test]
    fn test_unknown_selected_module() {
        let mut model: BindingModel = serde_json::from_str(MODEL).unwrap();
        model.modules = Some(vec!["base".into(), "ghost".into()]);
        assert_eq!(model.selected_modules().unwrap_err(), "ghost");
    }
}
