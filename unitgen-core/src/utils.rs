//! Shared utility functions for code generation.

/// Uppercase the first character (e.g., "fooBar" -> "FooBar")
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Convert a string to SCREAMING_SNAKE_CASE (e.g., "fooBar" -> "FOO_BAR")
pub fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::new();
    let mut prev_lower = false;
    for c in s.chars() {
        if c == '-' || c == '_' || c == ' ' || c == '.' {
            if !result.ends_with('_') && !result.is_empty() {
                result.push('_');
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower {
            result.push('_');
        }
        result.extend(c.to_uppercase());
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("fooBar"), "FooBar");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_to_screaming_snake_case() {
        assert_eq!(to_screaming_snake_case("Red"), "RED");
        assert_eq!(to_screaming_snake_case("fooBar"), "FOO_BAR");
        assert_eq!(to_screaming_snake_case("link-up"), "LINK_UP");
        assert_eq!(to_screaming_snake_case("already_SNAKE"), "ALREADY_SNAKE");
        assert_eq!(to_screaming_snake_case("ipv4Only"), "IPV4_ONLY");
    }
}
