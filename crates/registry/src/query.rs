use crate::registry::DesignRegistry;
use designmap_catalog::{
    ComponentCategory, ComponentEntity, PageEntity, PageStatus, UtilityCategory, UtilityEntity,
};

impl DesignRegistry {
    /// All components in the given atomic-design tier, insertion order
    pub fn components_by_category(&self, category: ComponentCategory) -> Vec<ComponentEntity> {
        self.iter_components()
            .filter(|c| c.category == category)
            .cloned()
            .collect()
    }

    pub fn utilities_by_category(&self, category: UtilityCategory) -> Vec<UtilityEntity> {
        self.iter_utilities()
            .filter(|u| u.category == category)
            .cloned()
            .collect()
    }

    pub fn pages_by_status(&self, status: PageStatus) -> Vec<PageEntity> {
        self.iter_pages()
            .filter(|p| p.status == status)
            .cloned()
            .collect()
    }

    /// Case-insensitive substring search over name, description and
    /// feature tags. An empty or whitespace-only query returns an empty
    /// list: matching everything by default would flood a UI list.
    pub fn search_components(&self, query: &str) -> Vec<ComponentEntity> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let results: Vec<ComponentEntity> = self
            .iter_components()
            .filter(|c| {
                c.name.to_lowercase().contains(&needle)
                    || c.description.to_lowercase().contains(&needle)
                    || c.features.iter().any(|f| f.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();

        log::debug!("search_components('{}') -> {} results", query, results.len());
        results
    }
}
