use crate::store::EntityStore;
use designmap_catalog::{Catalog, ComponentEntity, HookEntity, PageEntity, UtilityEntity};

/// The four entity stores of a design system.
///
/// Constructed once and injected explicitly into whatever consumes it
/// (CLI, UI layer, tests); there is no module-level singleton. The
/// registry has exactly two states: uninitialized and ready — the
/// transition happens in the constructor and is irreversible.
pub struct DesignRegistry {
    components: EntityStore<ComponentEntity>,
    utilities: EntityStore<UtilityEntity>,
    hooks: EntityStore<HookEntity>,
    pages: EntityStore<PageEntity>,
}

impl DesignRegistry {
    pub fn new() -> Self {
        Self {
            components: EntityStore::new(),
            utilities: EntityStore::new(),
            hooks: EntityStore::new(),
            pages: EntityStore::new(),
        }
    }

    /// Build a ready registry from a validated catalog document
    pub fn from_catalog(catalog: Catalog) -> Self {
        let mut registry = Self::new();
        for component in catalog.components {
            registry.register_component(component);
        }
        for utility in catalog.utilities {
            registry.register_utility(utility);
        }
        for hook in catalog.hooks {
            registry.register_hook(hook);
        }
        for page in catalog.pages {
            registry.register_page(page);
        }
        log::info!(
            "Registry ready: {} components, {} utilities, {} hooks, {} pages",
            registry.components.len(),
            registry.utilities.len(),
            registry.hooks.len(),
            registry.pages.len()
        );
        registry
    }

    pub fn register_component(&mut self, component: ComponentEntity) {
        self.components.register(component);
    }

    pub fn register_utility(&mut self, utility: UtilityEntity) {
        self.utilities.register(utility);
    }

    pub fn register_hook(&mut self, hook: HookEntity) {
        self.hooks.register(hook);
    }

    pub fn register_page(&mut self, page: PageEntity) {
        self.pages.register(page);
    }

    pub fn component(&self, id: &str) -> Option<&ComponentEntity> {
        self.components.get(id)
    }

    pub fn utility(&self, id: &str) -> Option<&UtilityEntity> {
        self.utilities.get(id)
    }

    pub fn hook(&self, id: &str) -> Option<&HookEntity> {
        self.hooks.get(id)
    }

    pub fn page(&self, id: &str) -> Option<&PageEntity> {
        self.pages.get(id)
    }

    /// Snapshot of all components in insertion order (defensive copy)
    pub fn components(&self) -> Vec<ComponentEntity> {
        self.components.all()
    }

    pub fn utilities(&self) -> Vec<UtilityEntity> {
        self.utilities.all()
    }

    pub fn hooks(&self) -> Vec<HookEntity> {
        self.hooks.all()
    }

    pub fn pages(&self) -> Vec<PageEntity> {
        self.pages.all()
    }

    pub fn iter_components(&self) -> std::slice::Iter<'_, ComponentEntity> {
        self.components.iter()
    }

    pub fn iter_utilities(&self) -> std::slice::Iter<'_, UtilityEntity> {
        self.utilities.iter()
    }

    pub fn iter_hooks(&self) -> std::slice::Iter<'_, HookEntity> {
        self.hooks.iter()
    }

    pub fn iter_pages(&self) -> std::slice::Iter<'_, PageEntity> {
        self.pages.iter()
    }
}

impl Default for DesignRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use designmap_catalog::Catalog;

    #[test]
    fn test_from_catalog_registers_everything() {
        let catalog = Catalog::builtin_demo();
        let expected = (
            catalog.components.len(),
            catalog.utilities.len(),
            catalog.hooks.len(),
            catalog.pages.len(),
        );

        let registry = DesignRegistry::from_catalog(catalog);

        assert_eq!(registry.components().len(), expected.0);
        assert_eq!(registry.utilities().len(), expected.1);
        assert_eq!(registry.hooks().len(), expected.2);
        assert_eq!(registry.pages().len(), expected.3);
    }

    #[test]
    fn test_lookup_by_id() {
        let registry = DesignRegistry::from_catalog(Catalog::builtin_demo());

        assert_eq!(
            registry.component("button-atomic").map(|c| c.name.as_str()),
            Some("ButtonAtomic")
        );
        assert!(registry.component("no-such-id").is_none());
        assert!(registry.page("home").is_some());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let registry = DesignRegistry::from_catalog(Catalog::builtin_demo());
        let names: Vec<String> = registry
            .iter_utilities()
            .map(|u| u.name.clone())
            .collect();
        assert_eq!(names, vec!["glass", "cn", "spacing"]);
    }
}
