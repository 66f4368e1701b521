use crate::entity::{CatalogEntity, EntityKind};
use crate::status::{ComponentCategory, LifecycleStatus};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A declared property on a component's public API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PropSpec {
    /// Property name
    pub name: String,

    /// Type description as written in the source (e.g. "'sm' | 'md' | 'lg'")
    #[serde(rename = "type")]
    pub ty: String,

    /// Whether callers must supply a value
    #[serde(default)]
    pub required: bool,

    /// Default value, if any
    #[serde(default)]
    pub default: Option<String>,

    /// What the property controls
    #[serde(default)]
    pub description: String,
}

impl PropSpec {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            required: false,
            default: None,
            description: String::new(),
        }
    }

    /// Builder: mark as required
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// A UI component in the design system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ComponentEntity {
    /// Unique id within the component collection
    pub id: String,

    /// Component name; composition and page references point at this
    pub name: String,

    /// Atomic-design tier
    pub category: ComponentCategory,

    #[serde(default)]
    pub description: String,

    /// Source location, informational only
    #[serde(default)]
    pub file_path: String,

    /// Declared public properties, in declaration order
    #[serde(default)]
    pub props: Vec<PropSpec>,

    /// Free-text feature tags
    #[serde(default)]
    pub features: Vec<String>,

    /// Free-text references to utilities or external libraries
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Names of components this one is built from
    #[serde(default)]
    pub composition: Vec<String>,

    /// Usage examples
    #[serde(default)]
    pub examples: Vec<String>,

    pub status: LifecycleStatus,

    #[serde(default)]
    pub last_updated: String,
}

impl ComponentEntity {
    /// Create a component with empty optional fields
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: ComponentCategory,
        status: LifecycleStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            description: String::new(),
            file_path: String::new(),
            props: Vec::new(),
            features: Vec::new(),
            dependencies: Vec::new(),
            composition: Vec::new(),
            examples: Vec::new(),
            status,
            last_updated: String::new(),
        }
    }

    /// Builder: set description
    #[must_use]
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = text.into();
        self
    }

    /// Builder: add a feature tag
    #[must_use]
    pub fn add_feature(mut self, tag: impl Into<String>) -> Self {
        self.features.push(tag.into());
        self
    }

    /// Builder: add a dependency reference
    #[must_use]
    pub fn add_dependency(mut self, reference: impl Into<String>) -> Self {
        self.dependencies.push(reference.into());
        self
    }

    /// Builder: add a composition reference (component name)
    #[must_use]
    pub fn add_composition(mut self, name: impl Into<String>) -> Self {
        self.composition.push(name.into());
        self
    }

    /// Builder: add a prop
    #[must_use]
    pub fn add_prop(mut self, prop: PropSpec) -> Self {
        self.props.push(prop);
        self
    }
}

impl CatalogEntity for ComponentEntity {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind() -> EntityKind {
        EntityKind::Component
    }
}
