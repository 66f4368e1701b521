use crate::registry::DesignRegistry;
use designmap_catalog::{ComponentCategory, LifecycleStatus};
use serde::{Deserialize, Serialize};

/// Count breakdown of the component collection.
///
/// Every field is always present, zero when empty. Deprecated components
/// count toward `total` but have no status bucket of their own: the
/// dashboard only surfaces stable/beta/planned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentStats {
    pub total: usize,
    pub atomic: usize,
    pub molecular: usize,
    pub organism: usize,
    pub stable: usize,
    pub beta: usize,
    pub planned: usize,
}

/// Entity counts across all four collections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryTotals {
    pub components: usize,
    pub utilities: usize,
    pub hooks: usize,
    pub pages: usize,
}

impl DesignRegistry {
    /// Category/status breakdown for dashboard display; pure function of
    /// the component store
    pub fn component_stats(&self) -> ComponentStats {
        let mut stats = ComponentStats::default();
        for component in self.iter_components() {
            stats.total += 1;
            match component.category {
                ComponentCategory::Atomic => stats.atomic += 1,
                ComponentCategory::Molecular => stats.molecular += 1,
                ComponentCategory::Organism => stats.organism += 1,
            }
            match component.status {
                LifecycleStatus::Stable => stats.stable += 1,
                LifecycleStatus::Beta => stats.beta += 1,
                LifecycleStatus::Planned => stats.planned += 1,
                LifecycleStatus::Deprecated => {}
            }
        }
        stats
    }

    pub fn totals(&self) -> RegistryTotals {
        RegistryTotals {
            components: self.iter_components().len(),
            utilities: self.iter_utilities().len(),
            hooks: self.iter_hooks().len(),
            pages: self.iter_pages().len(),
        }
    }
}
