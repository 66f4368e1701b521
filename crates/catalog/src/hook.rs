use crate::component::PropSpec;
use crate::entity::{CatalogEntity, EntityKind};
use crate::status::LifecycleStatus;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A React-style hook exposed by the design system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct HookEntity {
    /// Unique id within the hook collection
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Source location, informational only
    #[serde(default)]
    pub file_path: String,

    /// Parameters, in declaration order
    #[serde(default)]
    pub params: Vec<PropSpec>,

    /// Return type description
    #[serde(default)]
    pub returns: String,

    /// One-line usage example
    #[serde(default)]
    pub usage: String,

    /// Free-text references to platform APIs or utilities; not resolved
    /// into edges, kept for documentation
    #[serde(default)]
    pub dependencies: Vec<String>,

    pub status: LifecycleStatus,

    #[serde(default)]
    pub last_updated: String,
}

impl HookEntity {
    pub fn new(id: impl Into<String>, name: impl Into<String>, status: LifecycleStatus) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            file_path: String::new(),
            params: Vec::new(),
            returns: String::new(),
            usage: String::new(),
            dependencies: Vec::new(),
            status,
            last_updated: String::new(),
        }
    }

    /// Builder: set the return type description
    #[must_use]
    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = ty.into();
        self
    }
}

impl CatalogEntity for HookEntity {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind() -> EntityKind {
        EntityKind::Hook
    }
}
