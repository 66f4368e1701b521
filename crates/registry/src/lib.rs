//! # designmap-registry
//!
//! In-memory metadata store for a design system: four keyed entity
//! collections (components, utilities, hooks, pages) with read accessors,
//! substring and fuzzy search, and count-based stats.
//!
//! Everything here is synchronous, infallible and single-threaded by
//! design: registration trusts its caller, lookups return `Option`, and
//! accessors hand out defensive copies so interleaved UI event handlers
//! can never observe partial mutation.

mod query;
mod rank;
mod registry;
mod stats;
mod store;

pub use rank::ComponentRanker;
pub use registry::DesignRegistry;
pub use stats::{ComponentStats, RegistryTotals};
pub use store::EntityStore;
