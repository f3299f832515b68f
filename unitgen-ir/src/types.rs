//! Type descriptor definitions.

use serde::{Deserialize, Serialize};

/// The family a type descriptor belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypeKind {
    /// A generated interface.
    Interface,
    /// A data holder (transfer object).
    TransferObject,
    /// An enumeration.
    Enumeration,
    /// A standalone builder unit.
    Builder,
}

impl TypeKind {
    /// Get the kebab-case string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeKind::Interface => "interface",
            TypeKind::TransferObject => "transfer-object",
            TypeKind::Enumeration => "enumeration",
            TypeKind::Builder => "builder",
        }
    }
}

/// A typed member of an interface or transfer object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Property name in lowerCamelCase.
    pub name: String,
    /// Fully qualified type name of the property.
    #[serde(rename = "type")]
    pub type_name: String,
}

impl Property {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// A constant of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
    pub value: i32,
}

/// Abstract description of one generated source unit.
///
/// The generator only looks at `package_name`, `name`, `kind` and
/// `union_builder`; the remaining fields are payload for renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Dot-separated namespace, e.g. `org.example.gen.v1.foo`.
    pub package_name: String,
    /// Logical unit name, e.g. `Foo`.
    pub name: String,
    pub kind: TypeKind,
    /// Transfer objects only: the unit is hand-extended after first generation.
    #[serde(default)]
    pub union_builder: bool,
    /// Interfaces only: a companion builder unit should be generated.
    #[serde(default)]
    pub builder: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<EnumValue>,
}

impl TypeDescriptor {
    /// Create a descriptor with no renderer payload.
    pub fn new(package_name: impl Into<String>, name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            package_name: package_name.into(),
            name: name.into(),
            kind,
            union_builder: false,
            builder: false,
            description: None,
            properties: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Create a transfer object flagged as a union builder.
    pub fn union_builder(package_name: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            union_builder: true,
            ..Self::new(package_name, name, TypeKind::TransferObject)
        }
    }

    /// Request a companion builder unit (interfaces only).
    pub fn with_builder(mut self) -> Self {
        self.builder = true;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_value(mut self, name: impl Into<String>, value: i32) -> Self {
        self.values.push(EnumValue {
            name: name.into(),
            value,
        });
        self
    }

    /// `package_name.name`
    pub fn fully_qualified_name(&self) -> String {
        if self.package_name.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package_name, self.name)
        }
    }

    /// True for transfer objects whose unit lives in the persistent tree.
    pub fn is_union_builder(&self) -> bool {
        self.kind == TypeKind::TransferObject && self.union_builder
    }
}
