//! Config parsing from strings.

use std::str::FromStr;

use crate::{CONFIG_FILE_NAME, Config, Error, Result, error::SourceContext, validate::validate_config};

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, CONFIG_FILE_NAME)
    }
}

/// Parse and validate a unitgen.toml, using `filename` for error reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_config(&config, &ctx)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::Language;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = "".parse().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.project.base_dir, PathBuf::from("."));
        assert_eq!(config.project.language, Language::Java);
        assert_eq!(
            config.output.generated,
            PathBuf::from("target/generated-sources/unitgen")
        );
        assert!(config.output.persistent.is_none());
        assert!(config.registration.service.is_none());
    }

    #[test]
    fn test_full_config() {
        let config: Config = r#"
[project]
base_dir = "app"
language = "java"

[output]
generated = "build/gen"
persistent = "src/main/java"
resources = "build/res"

[registration]
service = "org.example.Provider"

[packages]
base = "org.example.gen"
"#
        .parse()
        .unwrap();

        assert_eq!(config.project.base_dir, PathBuf::from("app"));
        assert_eq!(config.output.persistent, Some(PathBuf::from("src/main/java")));
        assert_eq!(config.output.resources, PathBuf::from("build/res"));
        assert_eq!(config.registration.service.as_deref(), Some("org.example.Provider"));
        assert_eq!(config.packages.base.as_deref(), Some("org.example.gen"));
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let err = "[output]\ngenrated = \"x\"\n".parse::<Config>().unwrap_err();
        assert!(matches!(*err, Error::Parse { span: Some(_), .. }));
    }

    #[test]
    fn test_unknown_language_is_parse_error() {
        let err = "[project]\nlanguage = \"cobol\"\n".parse::<Config>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_invalid_base_package() {
        let err = "[packages]\nbase = \"org..gen\"\n".parse::<Config>().unwrap_err();
        match *err {
            Error::InvalidPackage {
                ref field,
                ref value,
                span,
                ..
            } => {
                assert_eq!(field, "base package");
                assert_eq!(value, "org..gen");
                assert_eq!(span.map(|s| s.offset()), Some(19));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_service_name() {
        let err = "[registration]\nservice = \"\"\n".parse::<Config>().unwrap_err();
        match *err {
            Error::InvalidPackage { ref field, span, .. } => {
                assert_eq!(field, "service name");
                // An empty value has no quoted span; the key is labelled instead.
                assert_eq!(span.map(|s| s.offset()), Some(15));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_generated_dir() {
        let err = "[output]\ngenerated = \"\"\n".parse::<Config>().unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
    }
}
