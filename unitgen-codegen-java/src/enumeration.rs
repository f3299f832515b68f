use unitgen_codegen::GeneratorCapability;
use unitgen_core::to_screaming_snake_case;
use unitgen_ir::{TypeDescriptor, TypeKind};

use crate::unit;

/// Renders enumerations backed by an `int` value.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumGenerator;

impl GeneratorCapability for EnumGenerator {
    fn name(&self) -> &'static str {
        "enumeration"
    }

    fn is_acceptable(&self, ty: &TypeDescriptor) -> bool {
        ty.kind == TypeKind::Enumeration
    }

    fn generate(&self, ty: &TypeDescriptor) -> String {
        let name = &ty.name;
        let last = ty.values.len().saturating_sub(1);

        unit(&ty.package_name, true)
            .javadoc(ty.description.as_deref().unwrap_or_default())
            .block_with_close(&format!("public enum {name} {{"), "}", |b| {
                b.each(ty.values.iter().enumerate(), |b, (i, v)| {
                    let end = if i == last { ";" } else { "," };
                    b.line(&format!(
                        "{}({}){end}",
                        to_screaming_snake_case(&v.name),
                        v.value
                    ))
                })
                .when(ty.values.is_empty(), |b| b.line(";"))
                .blank()
                .line("private final int value;")
                .blank()
                .block_with_close(&format!("{name}(final int value) {{"), "}", |b| {
                    b.line("this.value = value;")
                })
                .blank()
                .block_with_close("public int getIntValue() {", "}", |b| {
                    b.line("return value;")
                })
                .blank()
                .block_with_close(
                    &format!("public static {name} forValue(final int value) {{"),
                    "}",
                    |b| {
                        b.block_with_close(&format!("for ({name} item : values()) {{"), "}", |b| {
                            b.block_with_close("if (item.value == value) {", "}", |b| {
                                b.line("return item;")
                            })
                        })
                        .line("return null;")
                    },
                )
            })
            .build()
    }

    fn unit_name(&self, ty: &TypeDescriptor) -> String {
        ty.name.clone()
    }
}
