//! Intermediate representation types for the unitgen code generator.
//!
//! These types describe what an external schema-to-type translator hands to
//! the generator: abstract type descriptors and the schema modules they were
//! derived from.
//!
//! # Architecture
//!
//! ```text
//! schema modules → translator (external) → model.json → unitgen-ir → codegen
//! ```
//!
//! The IR types are designed to be:
//! - Language-agnostic (renderers decide the target syntax)
//! - Read-only for the generator (produced once per run, never mutated)
//! - Self-contained (no dependencies beyond `serde`)

mod model;
mod module;
mod types;

pub use model::BindingModel;
pub use module::{Module, SchemaContext};
pub use types::{EnumValue, Property, TypeDescriptor, TypeKind};
