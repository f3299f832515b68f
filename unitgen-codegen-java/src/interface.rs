use unitgen_codegen::GeneratorCapability;
use unitgen_ir::{TypeDescriptor, TypeKind};

use crate::{naming::getter_name, unit};

/// Renders binding interfaces: one getter per property.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterfaceGenerator;

impl GeneratorCapability for InterfaceGenerator {
    fn name(&self) -> &'static str {
        "interface"
    }

    fn is_acceptable(&self, ty: &TypeDescriptor) -> bool {
        ty.kind == TypeKind::Interface
    }

    fn generate(&self, ty: &TypeDescriptor) -> String {
        unit(&ty.package_name, true)
            .javadoc(ty.description.as_deref().unwrap_or_default())
            .block_with_close(&format!("public interface {} {{", ty.name), "}", |b| {
                b.each(&ty.properties, |b, p| {
                    b.line(&format!(
                        "{} {}();",
                        p.type_name,
                        getter_name(&p.name, &p.type_name)
                    ))
                })
            })
            .build()
    }

    fn unit_name(&self, ty: &TypeDescriptor) -> String {
        ty.name.clone()
    }
}
