//! File emission and module artifact aggregation for the unitgen code generator.
//!
//! This crate is the engine between the external type translator and the
//! per-kind renderers. It decides which capability renders a type, where the
//! resulting file belongs, whether it may be written, and how per-module
//! artifacts are merged into a single service registration.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, Indent)
//! - [`capability`] - The renderer seam (GeneratorCapability, Capabilities)
//! - [`emitter`] - Type emission into the regenerated and persistent trees
//! - [`aggregate`] - Module artifacts and the merged registration file
//! - [`generator`] - The full run over a binding model
//! - [`testing`] - Test utilities (feature-gated)

pub mod aggregate;
pub mod builder;
pub mod capability;
pub mod emitter;
mod error;
pub mod generator;
mod outcome;
pub mod paths;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use aggregate::{
    Aggregation, ModuleAggregator, ModuleRenderer, ModuleSources, ProviderRegistry,
    RegistrationFile,
};
pub use capability::{Capabilities, GeneratorCapability};
pub use emitter::{FileEmitter, OutputRoot};
pub use error::{Error, Result};
pub use generator::{CodeGenerator, GenerationOutcome, GeneratorConfig};
pub use outcome::{Conflict, Emission, Failure, Mode};
