use crate::component::ComponentEntity;
use crate::entity::CatalogEntity;
use crate::error::{CatalogError, Result};
use crate::hook::HookEntity;
use crate::page::PageEntity;
use crate::utility::UtilityEntity;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Current catalog document schema version
pub const SCHEMA_VERSION: u32 = 1;

const BUILTIN_DEMO: &str = include_str!("../../../catalogs/demo.json");

/// Declarative catalog document describing a design system.
///
/// This is the external replacement for metadata that used to be hardcoded
/// in the application: content edits no longer require a code deploy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    /// Must equal [`SCHEMA_VERSION`]
    pub schema_version: u32,

    #[serde(default)]
    pub components: Vec<ComponentEntity>,

    #[serde(default)]
    pub utilities: Vec<UtilityEntity>,

    #[serde(default)]
    pub hooks: Vec<HookEntity>,

    #[serde(default)]
    pub pages: Vec<PageEntity>,
}

impl Catalog {
    /// Empty catalog at the current schema version
    #[must_use]
    pub fn empty() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            components: Vec::new(),
            utilities: Vec::new(),
            hooks: Vec::new(),
            pages: Vec::new(),
        }
    }

    /// Parse a catalog from raw bytes: JSON first, then TOML as a fallback.
    /// Validates the schema version and per-collection id uniqueness.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let catalog: Self = match serde_json::from_slice(bytes) {
            Ok(catalog) => catalog,
            Err(json_err) => {
                let text = std::str::from_utf8(bytes).map_err(|utf8_err| CatalogError::Parse {
                    json_error: json_err.to_string(),
                    toml_error: utf8_err.to_string(),
                })?;
                toml::from_str(text).map_err(|toml_err| CatalogError::Parse {
                    json_error: json_err.to_string(),
                    toml_error: toml_err.to_string(),
                })?
            }
        };

        catalog.validate()?;
        log::debug!(
            "Parsed catalog: {} components, {} utilities, {} hooks, {} pages",
            catalog.components.len(),
            catalog.utilities.len(),
            catalog.hooks.len(),
            catalog.pages.len()
        );
        Ok(catalog)
    }

    /// Load and validate a catalog file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_slice(&bytes)?;
        log::info!("Loaded catalog from {}", path.display());
        Ok(catalog)
    }

    /// The bundled demo catalog (InternetFriends design system sample)
    #[must_use]
    pub fn builtin_demo() -> Self {
        Self::from_slice(BUILTIN_DEMO.as_bytes()).expect("bundled demo catalog must parse")
    }

    /// Raw source of the bundled demo catalog, handy as a seed file
    #[must_use]
    pub const fn builtin_demo_source() -> &'static str {
        BUILTIN_DEMO
    }

    /// Check schema version and that ids are non-empty and unique within
    /// each collection. Duplicates across separate register calls are a
    /// registry concern (last-write-wins), not a document concern.
    pub fn validate(&self) -> Result<()> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(CatalogError::UnsupportedSchemaVersion(self.schema_version));
        }
        check_ids("component", &self.components)?;
        check_ids("utility", &self.utilities)?;
        check_ids("hook", &self.hooks)?;
        check_ids("page", &self.pages)?;
        Ok(())
    }
}

fn check_ids<T: CatalogEntity>(kind: &'static str, entities: &[T]) -> Result<()> {
    let mut seen = HashSet::new();
    for (position, entity) in entities.iter().enumerate() {
        let id = entity.id();
        if id.is_empty() {
            return Err(CatalogError::EmptyId { kind, position });
        }
        if !seen.insert(id.to_string()) {
            return Err(CatalogError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_demo_parses() {
        let catalog = Catalog::builtin_demo();
        assert_eq!(catalog.schema_version, SCHEMA_VERSION);
        assert!(!catalog.components.is_empty());
        assert!(!catalog.pages.is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let catalog = Catalog::builtin_demo();
        let raw = serde_json::to_vec(&catalog).unwrap();
        let reparsed = Catalog::from_slice(&raw).unwrap();
        assert_eq!(catalog, reparsed);
    }

    #[test]
    fn test_toml_fallback() {
        let raw = r#"
            schema_version = 1

            [[components]]
            id = "button"
            name = "Button"
            category = "atomic"
            status = "stable"
        "#;
        let catalog = Catalog::from_slice(raw.as_bytes()).unwrap();
        assert_eq!(catalog.components.len(), 1);
        assert_eq!(catalog.components[0].name, "Button");
    }

    #[test]
    fn test_from_path_reads_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, Catalog::builtin_demo_source()).unwrap();

        let catalog = Catalog::from_path(&path).unwrap();
        assert_eq!(catalog, Catalog::builtin_demo());
    }

    #[test]
    fn test_from_path_missing_file_names_the_path() {
        let err = Catalog::from_path("no/such/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(err.to_string().contains("no/such/catalog.json"));
    }

    #[test]
    fn test_rejects_wrong_schema_version() {
        let raw = r#"{ "schema_version": 2 }"#;
        let err = Catalog::from_slice(raw.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::UnsupportedSchemaVersion(2)));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let raw = r#"{
            "schema_version": 1,
            "pages": [
                { "id": "home", "name": "Home", "route": "/", "status": "live" },
                { "id": "home", "name": "Home2", "route": "/2", "status": "draft" }
            ]
        }"#;
        let err = Catalog::from_slice(raw.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId { kind: "page", .. }));
    }

    #[test]
    fn test_rejects_unknown_top_level_field() {
        let raw = r#"{ "schema_version": 1, "widgets": [] }"#;
        assert!(Catalog::from_slice(raw.as_bytes()).is_err());
    }

    #[test]
    fn test_rejects_empty_id() {
        let raw = r#"{
            "schema_version": 1,
            "hooks": [ { "id": "", "name": "useTheme", "status": "stable" } ]
        }"#;
        let err = Catalog::from_slice(raw.as_bytes()).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyId { kind: "hook", position: 0 }));
    }
}
