//! Java renderers for the unitgen code generator.
//!
//! Provides the four type capabilities and the module-info renderer that
//! plug into [`unitgen_codegen`]'s emitter and aggregator.

mod builder;
mod enumeration;
mod interface;
mod module_info;
mod naming;
mod transfer_object;

pub use builder::BuilderGenerator;
pub use enumeration::EnumGenerator;
pub use interface::InterfaceGenerator;
pub use module_info::JavaModuleRenderer;
pub use naming::{escape_identifier, getter_name, string_literal};
pub use transfer_object::TransferObjectGenerator;
use unitgen_codegen::{Capabilities, builder::CodeBuilder};

/// File extension of generated units.
pub const FILE_EXTENSION: &str = "java";

/// Language name, used for the conventional `src/main/java` persistent root.
pub const LANGUAGE: &str = "java";

/// First line of every generated unit.
pub const GENERATED_HEADER: &str = "// Generated by unitgen. Do not edit.";

/// The Java capabilities in processing order: interface, transfer object,
/// enumeration, builder.
pub fn capabilities() -> Capabilities {
    Capabilities::new()
        .with(InterfaceGenerator)
        .with(TransferObjectGenerator)
        .with(EnumGenerator)
        .with(BuilderGenerator)
}

/// Start a compilation unit. Hand-maintained units carry no header.
pub(crate) fn unit(package: &str, generated: bool) -> CodeBuilder {
    CodeBuilder::java()
        .when(generated, |b| b.line(GENERATED_HEADER))
        .line(&format!("package {package};"))
        .blank()
}
