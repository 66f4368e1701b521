//! # designmap-catalog
//!
//! Data model and declarative catalog loader for the design system registry.
//!
//! Entities come in four kinds — components, utilities, hooks and pages —
//! and are described by an external catalog document (JSON, with a TOML
//! fallback) rather than hardcoded in application code. Cross-references
//! between entities are free-text names; resolving them into edges is the
//! `designmap-graph` crate's job.

mod component;
mod document;
mod entity;
mod error;
mod hook;
mod page;
mod status;
mod utility;

pub use component::{ComponentEntity, PropSpec};
pub use document::{Catalog, SCHEMA_VERSION};
pub use entity::{CatalogEntity, EntityKind};
pub use error::{CatalogError, Result};
pub use hook::HookEntity;
pub use page::{PageEntity, SeoSpec};
pub use status::{
    ComponentCategory, LifecycleStatus, PageStatus, TokenCategory, UtilityCategory,
};
pub use utility::{CssClassSpec, FunctionSpec, TokenSpec, UtilityEntity};
