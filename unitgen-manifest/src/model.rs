//! Loading the binding model written by the schema translator.

use std::path::Path;

use unitgen_ir::BindingModel;

use crate::{Error, Result, error::SourceContext};

/// Read and parse a binding model JSON file.
pub fn load_model(path: impl AsRef<Path>) -> Result<BindingModel> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    parse_model(&content, path)
}

/// Parse a binding model, reporting errors against `path`.
pub fn parse_model(content: &str, path: impl AsRef<Path>) -> Result<BindingModel> {
    let path = path.as_ref();
    let ctx = SourceContext::new(content, path.display().to_string());
    serde_json::from_str(content).map_err(|e| ctx.model_error(path, e))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use unitgen_ir::TypeKind;

    use super::*;

    const MODEL: &str = r#"{
  "context": {
    "modules": [
      { "name": "net", "namespace": "urn:net", "revision": "2024-01-15" }
    ]
  },
  "types": [
    { "package_name": "a.b", "name": "Foo", "kind": "interface" },
    { "package_name": "a.b", "name": "FooBuilder", "kind": "transfer-object", "union_builder": true }
  ]
}"#;

    #[test]
    fn test_load_model() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("model.json");
        fs::write(&path, MODEL).unwrap();

        let model = load_model(&path).unwrap();
        assert_eq!(model.types.len(), 2);
        assert_eq!(model.types[0].kind, TypeKind::Interface);
        assert!(model.types[1].is_union_builder());
        assert_eq!(model.context.len(), 1);
        assert!(model.modules.is_none());
    }

    #[test]
    fn test_invalid_model_has_span() {
        let err = parse_model("{\n  \"types\": 1\n}", "model.json").unwrap_err();
        match *err {
            Error::Model { ref path, span, .. } => {
                assert_eq!(path, Path::new("model.json"));
                assert!(span.is_some());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_model_is_io_error() {
        let err = load_model("/nonexistent/model.json").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
