use unitgen_codegen::{GeneratorCapability, builder::CodeBuilder};
use unitgen_ir::{TypeDescriptor, TypeKind};

use crate::{
    naming::{built_type_name, escape_identifier, getter_name},
    unit,
};

/// Renders immutable transfer objects, and the one-time stub of a union
/// builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransferObjectGenerator;

impl TransferObjectGenerator {
    fn value_class(ty: &TypeDescriptor) -> String {
        let name = &ty.name;
        let params = ty
            .properties
            .iter()
            .map(|p| format!("final {} {}", p.type_name, escape_identifier(&p.name)))
            .collect::<Vec<_>>()
            .join(", ");

        unit(&ty.package_name, true)
            .javadoc(ty.description.as_deref().unwrap_or_default())
            .block_with_close(&format!("public class {name} {{"), "}", |b| {
                b.each(&ty.properties, |b, p| {
                    b.line(&format!(
                        "private final {} {};",
                        p.type_name,
                        escape_identifier(&p.name)
                    ))
                })
                .when(!ty.properties.is_empty(), CodeBuilder::blank)
                .block_with_close(&format!("public {name}({params}) {{"), "}", |b| {
                    b.each(&ty.properties, |b, p| {
                        let field = escape_identifier(&p.name);
                        b.line(&format!("this.{field} = {field};"))
                    })
                })
                .each(&ty.properties, |b, p| {
                    b.blank().block_with_close(
                        &format!(
                            "public {} {}() {{",
                            p.type_name,
                            getter_name(&p.name, &p.type_name)
                        ),
                        "}",
                        |b| b.line(&format!("return {};", escape_identifier(&p.name))),
                    )
                })
            })
            .build()
    }

    fn union_builder(ty: &TypeDescriptor) -> String {
        let name = &ty.name;
        let union = built_type_name(name);

        unit(&ty.package_name, false)
            .javadoc(&format!(
                "Builds {union} instances from their string form.\n\
                 \n\
                 Generated once and never overwritten. Implement getDefaultInstance by hand."
            ))
            .block_with_close(&format!("public class {name} {{"), "}", |b| {
                b.block_with_close(&format!("private {name}() {{"), "}", |b| b)
                    .blank()
                    .block_with_close(
                        &format!(
                            "public static {union} getDefaultInstance(final java.lang.String defaultValue) {{"
                        ),
                        "}",
                        |b| {
                            b.line(
                                "throw new java.lang.UnsupportedOperationException(\"Not yet implemented\");",
                            )
                        },
                    )
            })
            .build()
    }
}

impl GeneratorCapability for TransferObjectGenerator {
    fn name(&self) -> &'static str {
        "transfer-object"
    }

    fn is_acceptable(&self, ty: &TypeDescriptor) -> bool {
        ty.kind == TypeKind::TransferObject
    }

    fn generate(&self, ty: &TypeDescriptor) -> String {
        if ty.is_union_builder() {
            Self::union_builder(ty)
        } else {
            Self::value_class(ty)
        }
    }

    fn unit_name(&self, ty: &TypeDescriptor) -> String {
        ty.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use unitgen_ir::Property;

    use super::*;

    #[test]
    fn test_render_value_class() {
        let ty = TypeDescriptor::new("a.b", "Bar", TypeKind::TransferObject)
            .with_property(Property::new("name", "java.lang.String"))
            .with_property(Property::new("default", "int"));

        insta::assert_snapshot!(TransferObjectGenerator.generate(&ty), @r"
        // Generated by unitgen. Do not edit.
        package a.b;

        public class Bar {
            private final java.lang.String name;
            private final int _default;

            public Bar(final java.lang.String name, final int _default) {
                this.name = name;
                this._default = _default;
            }

            public java.lang.String getName() {
                return name;
            }

            public int getDefault() {
                return _default;
            }
        }
        ");
    }

    #[test]
    fn test_render_empty_value_class() {
        let ty = TypeDescriptor::new("a.b", "Unit", TypeKind::TransferObject);
        assert!(
            TransferObjectGenerator
                .generate(&ty)
                .ends_with("public class Unit {\n    public Unit() {\n    }\n}\n")
        );
    }

    #[test]
    fn test_render_union_builder_stub() {
        let ty = TypeDescriptor::union_builder("a.b", "FooBuilder");

        insta::assert_snapshot!(TransferObjectGenerator.generate(&ty), @r#"
        package a.b;

        /**
         * Builds Foo instances from their string form.
         *
         * Generated once and never overwritten. Implement getDefaultInstance by hand.
         */
        public class FooBuilder {
            private FooBuilder() {
            }

            public static Foo getDefaultInstance(final java.lang.String defaultValue) {
                throw new java.lang.UnsupportedOperationException("Not yet implemented");
            }
        }
        "#);
    }
}
