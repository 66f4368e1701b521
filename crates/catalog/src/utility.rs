use crate::entity::{CatalogEntity, EntityKind};
use crate::status::{LifecycleStatus, TokenCategory, UtilityCategory};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A documented function exported by a utility module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct FunctionSpec {
    /// Function name; dependency references may point at this
    pub name: String,

    /// Signature as written in the source
    #[serde(default)]
    pub signature: String,

    #[serde(default)]
    pub description: String,

    /// Parameter names
    #[serde(default)]
    pub params: Vec<String>,

    /// Return type description
    #[serde(default)]
    pub returns: String,
}

/// A single design token (CSS custom property or similar)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TokenSpec {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub description: String,
    pub category: TokenCategory,
}

/// A documented CSS class a utility stylesheet provides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CssClassSpec {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// CSS properties the class sets
    #[serde(default)]
    pub properties: Vec<String>,
}

/// A utility module: design tokens, helper functions or constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct UtilityEntity {
    /// Unique id within the utility collection
    pub id: String,

    /// Utility name; the dependency heuristic matches against this
    pub name: String,

    pub category: UtilityCategory,

    #[serde(default)]
    pub description: String,

    /// Source location, informational only
    #[serde(default)]
    pub file_path: String,

    /// Exported symbol names
    #[serde(default)]
    pub exports: Vec<String>,

    /// Documented functions
    #[serde(default)]
    pub functions: Vec<FunctionSpec>,

    /// Design tokens this module defines
    #[serde(default)]
    pub tokens: Vec<TokenSpec>,

    /// CSS classes this module provides
    #[serde(default)]
    pub css_classes: Vec<CssClassSpec>,

    pub status: LifecycleStatus,

    #[serde(default)]
    pub last_updated: String,
}

impl UtilityEntity {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: UtilityCategory,
        status: LifecycleStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            description: String::new(),
            file_path: String::new(),
            exports: Vec::new(),
            functions: Vec::new(),
            tokens: Vec::new(),
            css_classes: Vec::new(),
            status,
            last_updated: String::new(),
        }
    }

    /// Builder: add an exported symbol name
    #[must_use]
    pub fn add_export(mut self, symbol: impl Into<String>) -> Self {
        self.exports.push(symbol.into());
        self
    }

    /// Builder: add a documented function
    #[must_use]
    pub fn add_function(mut self, function: FunctionSpec) -> Self {
        self.functions.push(function);
        self
    }

    /// Builder: add a design token
    #[must_use]
    pub fn add_token(mut self, token: TokenSpec) -> Self {
        self.tokens.push(token);
        self
    }
}

impl CatalogEntity for UtilityEntity {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind() -> EntityKind {
        EntityKind::Utility
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_category_round_trip() {
        let raw = r#"{
            "id": "glass-tokens",
            "name": "glass",
            "category": "tokens",
            "status": "stable",
            "tokens": [
                { "name": "--glass-bg", "value": "rgba(255,255,255,0.08)", "category": "color" }
            ]
        }"#;
        let util: UtilityEntity = serde_json::from_str(raw).unwrap();
        assert_eq!(util.tokens[0].category, TokenCategory::Color);
        assert!(util.exports.is_empty());
    }
}
