use unitgen_codegen::{GeneratorCapability, builder::CodeBuilder};
use unitgen_ir::{Property, TypeDescriptor, TypeKind};

use crate::{
    naming::{built_type_name, escape_identifier, getter_name, setter_name},
    unit,
};

/// Renders mutable builders, both for explicit builder types and for
/// interfaces that ask for one.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuilderGenerator;

impl BuilderGenerator {
    fn target(ty: &TypeDescriptor) -> &str {
        match ty.kind {
            TypeKind::Builder => built_type_name(&ty.name),
            _ => ty.name.as_str(),
        }
    }

    fn accessors(b: CodeBuilder, builder: &str, p: &Property) -> CodeBuilder {
        let field = escape_identifier(&p.name);
        b.blank()
            .block_with_close(
                &format!("public {} {}() {{", p.type_name, getter_name(&p.name, &p.type_name)),
                "}",
                |b| b.line(&format!("return {field};")),
            )
            .blank()
            .block_with_close(
                &format!(
                    "public {builder} {}(final {} value) {{",
                    setter_name(&p.name),
                    p.type_name
                ),
                "}",
                |b| b.line(&format!("this.{field} = value;")).line("return this;"),
            )
    }

    /// `build()` returning an anonymous implementation of the interface,
    /// closed over a snapshot of the builder's fields.
    fn build_method(b: CodeBuilder, ty: &TypeDescriptor) -> CodeBuilder {
        let target = &ty.name;
        b.blank()
            .block_with_close(&format!("public {target} build() {{"), "}", |b| {
                b.each(&ty.properties, |b, p| {
                    let field = escape_identifier(&p.name);
                    b.line(&format!("final {} {field} = this.{field};", p.type_name))
                })
                .block_with_close(&format!("return new {target}() {{"), "};", |b| {
                    b.each(ty.properties.iter().enumerate(), |b, (i, p)| {
                        b.when(i > 0, CodeBuilder::blank)
                            .line("@Override")
                            .block_with_close(
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
            })
    }
}

impl GeneratorCapability for BuilderGenerator {
    fn name(&self) -> &'static str {
        "builder"
    }

    fn is_acceptable(&self, ty: &TypeDescriptor) -> bool {
        match ty.kind {
            TypeKind::Builder => true,
            TypeKind::Interface => ty.builder,
            _ => false,
        }
    }

    fn generate(&self, ty: &TypeDescriptor) -> String {
        let builder = self.unit_name(ty);
        let target = Self::target(ty);

        unit(&ty.package_name, true)
            .javadoc(&format!("Builder for {target}."))
            .block_with_close(&format!("public class {builder} {{"), "}", |b| {
                b.each(&ty.properties, |b, p| {
                    b.line(&format!("private {} {};", p.type_name, escape_identifier(&p.name)))
                })
                .when(!ty.properties.is_empty(), CodeBuilder::blank)
                .block_with_close(&format!("public {builder}() {{"), "}", |b| b)
                .blank()
                .block_with_close(&format!("public {builder}(final {target} base) {{"), "}", |b| {
                    b.each(&ty.properties, |b, p| {
                        b.line(&format!(
                            "this.{} = base.{}();",
                            escape_identifier(&p.name),
                            getter_name(&p.name, &p.type_name)
                        ))
                    })
                })
                .each(&ty.properties, |b, p| Self::accessors(b, &builder, p))
                .when(ty.kind == TypeKind::Interface, |b| Self::build_method(b, ty))
            })
            .build()
    }

    fn unit_name(&self, ty: &TypeDescriptor) -> String {
        match ty.kind {
            TypeKind::Builder => ty.name.clone(),
            _ => format!("{}Builder", ty.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_builders_and_opted_in_interfaces() {
        let generator = BuilderGenerator;
        assert!(generator.is_acceptable(&TypeDescriptor::new("a", "FooBuilder", TypeKind::Builder)));
        assert!(generator.is_acceptable(&TypeDescriptor::new("a", "Foo", TypeKind::Interface).with_builder()));
        assert!(!generator.is_acceptable(&TypeDescriptor::new("a", "Foo", TypeKind::Interface)));
        assert!(!generator.is_acceptable(&TypeDescriptor::union_builder("a", "FooBuilder")));
    }

    #[test]
    fn test_unit_names() {
        let generator = BuilderGenerator;
        let interface = TypeDescriptor::new("a", "Foo", TypeKind::Interface).with_builder();
        let builder = TypeDescriptor::new("a", "BarBuilder", TypeKind::Builder);
        assert_eq!(generator.unit_name(&interface), "FooBuilder");
        assert_eq!(generator.unit_name(&builder), "BarBuilder");
    }

    #[test]
    fn test_render_interface_builder() {
        let ty = TypeDescriptor::new("a.b", "Foo", TypeKind::Interface)
            .with_builder()
            .with_property(Property::new("name", "java.lang.String"))
            .with_property(Property::new("mtu", "int"));

        insta::assert_snapshot!(BuilderGenerator.generate(&ty), @r"
        // Generated by unitgen. Do not edit.
        package a.b;

        /** Builder for Foo. */
        public class FooBuilder {
            private java.lang.String name;
            private int mtu;

            public FooBuilder() {
            }

            public FooBuilder(final Foo base) {
                this.name = base.getName();
                this.mtu = base.getMtu();
            }

            public java.lang.String getName() {
                return name;
            }

            public FooBuilder setName(final java.lang.String value) {
                this.name = value;
                return this;
            }

            public int getMtu() {
                return mtu;
            }

            public FooBuilder setMtu(final int value) {
                this.mtu = value;
                return this;
            }

            public Foo build() {
                final java.lang.String name = this.name;
                final int mtu = this.mtu;
                return new Foo() {
                    @Override
                    public java.lang.String getName() {
                        return name;
                    }

                    @Override
                    public int getMtu() {
                        return mtu;
                    }
                };
            }
        }
        ");
    }

    #[test]
    fn test_builder_type_has_no_build_method() {
        let ty = TypeDescriptor::new("a.b", "BarBuilder", TypeKind::Builder)
            .with_property(Property::new("id", "long"));
        let source = BuilderGenerator.generate(&ty);

        assert!(source.contains("public BarBuilder(final Bar base) {"));
        assert!(source.contains("public BarBuilder setId(final long value) {"));
        assert!(!source.contains("build()"));
    }
}
