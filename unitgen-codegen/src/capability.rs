//! The seam between the engine and the per-kind renderers.

use std::fmt;

use unitgen_ir::TypeDescriptor;

/// A renderer for one family of type descriptors.
///
/// Implementations are pure: they never touch the file system. The engine
/// decides where (and whether) the text they produce ends up on disk.
pub trait GeneratorCapability {
    /// Short identifier used in logs and errors (e.g. "interface").
    fn name(&self) -> &'static str;

    /// Whether this capability renders `ty` at all.
    fn is_acceptable(&self, ty: &TypeDescriptor) -> bool;

    /// Render `ty` into source text. Only called when [`is_acceptable`] holds.
    ///
    /// [`is_acceptable`]: GeneratorCapability::is_acceptable
    fn generate(&self, ty: &TypeDescriptor) -> String;

    /// File base name (without extension) of the unit rendered for `ty`.
    fn unit_name(&self, ty: &TypeDescriptor) -> String;
}

/// An ordered list of capabilities.
///
/// Every type is offered to every capability, in insertion order. The order
/// is part of the contract: when two capabilities accept the same type and
/// resolve to the same path, the earlier one writes the file and the later
/// one is reported as a naming conflict.
#[derive(Default)]
pub struct Capabilities {
    entries: Vec<Box<dyn GeneratorCapability>>,
}

impl Capabilities {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a capability at the end of the order.
    pub fn with(mut self, capability: impl GeneratorCapability + 'static) -> Self {
        self.entries.push(Box::new(capability));
        self
    }

    pub fn push(&mut self, capability: Box<dyn GeneratorCapability>) {
        self.entries.push(capability);
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn GeneratorCapability> {
        self.entries.iter().map(|c| c.as_ref())
    }

    /// Names in processing order.
    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(|c| c.name()).collect()
    }

    /// Capabilities that accept `ty`, in processing order.
    pub fn accepting<'a>(
        &'a self,
        ty: &'a TypeDescriptor,
    ) -> impl Iterator<Item = &'a dyn GeneratorCapability> + 'a {
        self.iter().filter(move |c| c.is_acceptable(ty))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
