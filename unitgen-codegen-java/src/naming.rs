//! Java naming conventions.

use unitgen_core::capitalize;

const RESERVED_WORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "false", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "null", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "true", "try", "void", "volatile", "while", "_",
];

/// Field or parameter name for a property, prefixed with `_` when it would
/// collide with a Java keyword.
pub fn escape_identifier(name: &str) -> String {
    if RESERVED_WORDS.contains(&name) {
        format!("_{name}")
    } else {
        name.to_string()
    }
}

/// `getFoo` for property `foo`; `isFoo` for primitive booleans.
pub fn getter_name(property: &str, type_name: &str) -> String {
    let prefix = if type_name == "boolean" { "is" } else { "get" };
    format!("{prefix}{}", capitalize(property))
}

pub(crate) fn setter_name(property: &str) -> String {
    format!("set{}", capitalize(property))
}

/// A Java string literal, quotes included.
pub fn string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// The type a builder named `FooBuilder` produces.
pub(crate) fn built_type_name(builder: &str) -> &str {
    builder.strip_suffix("Builder").unwrap_or(builder)
}
