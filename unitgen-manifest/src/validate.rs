//! Post-parse validation of `unitgen.toml`.

use miette::SourceSpan;
use unitgen_core::validate_package_name;

use crate::{Config, Result, error::SourceContext};

/// Validate a parsed config against its source.
pub(crate) fn validate_config(config: &Config, ctx: &SourceContext) -> Result<()> {
    if let Some(service) = &config.registration.service {
        validate_dotted_name(ctx, "registration.service", "service name", service)?;
    }
    if let Some(base) = &config.packages.base {
        validate_dotted_name(ctx, "packages.base", "base package", base)?;
    }
    if config.output.generated.as_os_str().is_empty() {
        return Err(ctx.validation_error(
            "output.generated must not be empty",
            find_key_span(ctx.src(), "generated"),
        ));
    }
    Ok(())
}

fn validate_dotted_name(ctx: &SourceContext, key: &str, field: &str, value: &str) -> Result<()> {
    validate_package_name(value).map_err(|e| {
        let span = find_value_span(ctx.src(), value)
            .or_else(|| find_key_span(ctx.src(), key.rsplit('.').next().unwrap_or(key)));
        ctx.invalid_package_error(field, value, e.to_string(), span)
    })
}

/// Find the span of a quoted string value, quotes excluded.
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    if value.is_empty() {
        return None;
    }
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{value}{quote}");
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 1, value.len())));
        }
    }
    None
}

/// Find the span of a `key =` assignment's key.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let assigned = trimmed
            .strip_prefix(key)
            .is_some_and(|rest| rest.trim_start().starts_with('='));
        if assigned {
            let start = offset + (line.len() - trimmed.len());
            return Some(SourceSpan::from((start, key.len())));
        }
        offset += line.len();
    }
    None
}
