use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four entity kinds the registry tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Component,
    Utility,
    Hook,
    Page,
}

impl EntityKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Utility => "utility",
            Self::Hook => "hook",
            Self::Page => "page",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Common surface shared by every catalog entity.
///
/// Stores and resolvers are generic over this trait so they never depend
/// on kind-specific fields.
pub trait CatalogEntity: Clone {
    /// Unique id within this entity kind's collection
    fn id(&self) -> &str;

    /// Human-readable name, the target of free-text references
    fn name(&self) -> &str;

    /// Which collection this entity belongs to
    fn kind() -> EntityKind;
}
