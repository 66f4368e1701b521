use crate::entity::{CatalogEntity, EntityKind};
use crate::status::PageStatus;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// SEO metadata for a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SeoSpec {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// A routed page of the site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct PageEntity {
    /// Unique id within the page collection
    pub id: String,

    pub name: String,

    /// Route path (e.g. "/design-system")
    pub route: String,

    #[serde(default)]
    pub description: String,

    /// Source location, informational only
    #[serde(default)]
    pub file_path: String,

    /// Layout name, if the page uses one
    #[serde(default)]
    pub layout: Option<String>,

    /// Names of components used on the page
    #[serde(default)]
    pub components: Vec<String>,

    /// Free-text feature tags
    #[serde(default)]
    pub features: Vec<String>,

    #[serde(default)]
    pub seo: Option<SeoSpec>,

    pub status: PageStatus,

    #[serde(default)]
    pub last_updated: String,
}

impl PageEntity {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        route: impl Into<String>,
        status: PageStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            route: route.into(),
            description: String::new(),
            file_path: String::new(),
            layout: None,
            components: Vec::new(),
            features: Vec::new(),
            seo: None,
            status,
            last_updated: String::new(),
        }
    }

    /// Builder: add a component usage reference (component name)
    #[must_use]
    pub fn add_component(mut self, name: impl Into<String>) -> Self {
        self.components.push(name.into());
        self
    }
}

impl CatalogEntity for PageEntity {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind() -> EntityKind {
        EntityKind::Page
    }
}
