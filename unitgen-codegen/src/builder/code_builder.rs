//! Code builder utility for generating properly indented code.

use super::Indent;

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use unitgen_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::java()
///     .block_with_close("public interface Foo {", "}", |b| b.line("String getName();"))
///     .build();
///
/// assert_eq!(code, "public interface Foo {\n    String getName();\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 4-space indentation.
    pub fn java() -> Self {
        Self::new(Indent::JAVA)
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block with a closing line.
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Add a Javadoc comment. Multi-line text gets one ` * ` line per line.
    pub fn javadoc(self, text: &str) -> Self {
        let mut lines = text.lines();
        match (lines.next(), lines.next()) {
            (None, _) => self,
            (Some(only), None) => self.line(&format!("/** {only} */")),
            (Some(_), Some(_)) => text
                .lines()
                .fold(self.line("/**"), |b, l| {
                    if l.is_empty() {
                        b.line(" *")
                    } else {
                        b.line(&format!(" * {l}"))
                    }
                })
                .line(" */"),
        }
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Get the current buffer contents.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

impl Default for CodeBuilder {
    fn default() -> Self {
        Self::java()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_line() {
        let code = CodeBuilder::java().line("package a.b;").build();
        assert_eq!(code, "package a.b;\n");
    }

    #[test]
    fn test_indentation() {
        let code = CodeBuilder::java()
            .line("class Foo {")
            .indent()
            .line("int x;")
            .dedent()
            .line("}")
            .build();
        assert_eq!(code, "class Foo {\n    int x;\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let code = CodeBuilder::java().dedent().dedent().line("x").build();
        assert_eq!(code, "x\n");
    }

    #[test]
    fn test_blank_line() {
        let code = CodeBuilder::java()
            .indent()
            .line("a")
            .blank()
            .line("b")
            .build();
        assert_eq!(code, "    a\n\n    b\n");
    }

    #[test]
    fn test_single_line_javadoc() {
        let code = CodeBuilder::java().javadoc("A unit.").build();
        assert_eq!(code, "/** A unit. */\n");
    }

    #[test]
    fn test_multi_line_javadoc() {
        let code = CodeBuilder::java()
            .indent()
            .javadoc("First.\n\nSecond.")
            .build();
        assert_eq!(code, "    /**\n     * First.\n     *\n     * Second.\n     */\n");
    }

    #[test]
    fn test_empty_javadoc_is_omitted() {
        assert_eq!(CodeBuilder::java().javadoc("").build(), "");
    }

    #[test]
    fn test_conditional() {
        let code = CodeBuilder::java()
            .when(true, |b| b.line("yes"))
            .when(false, |b| b.line("no"))
            .build();
        assert_eq!(code, "yes\n");
    }

    #[test]
    fn test_each() {
        let code = CodeBuilder::java()
            .each(["A", "B"], |b, name| b.line(&format!("{name},")))
            .build();
        assert_eq!(code, "A,\nB,\n");
    }

    #[test]
    fn test_tab_indent() {
        let code = CodeBuilder::new(Indent::Tab)
            .indent()
            .line("x")
            .build();
        assert_eq!(code, "\tx\n");
    }
}
