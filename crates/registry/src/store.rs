use designmap_catalog::CatalogEntity;
use std::collections::HashMap;

/// One keyed entity collection: insertion-ordered arena plus an id index.
///
/// Registration is append-only during process lifetime; re-registering an
/// existing id is last-write-wins and keeps the original insertion slot,
/// so `all()` order is stable under overwrite.
pub struct EntityStore<T: CatalogEntity> {
    entries: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: CatalogEntity> EntityStore<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert or overwrite the entry at `entity.id()`. The caller is
    /// trusted; no field validation happens here.
    pub fn register(&mut self, entity: T) {
        match self.index.get(entity.id()) {
            Some(&slot) => {
                log::debug!("Replacing {} '{}'", T::kind(), entity.id());
                self.entries[slot] = entity;
            }
            None => {
                self.index.insert(entity.id().to_string(), self.entries.len());
                self.entries.push(entity);
            }
        }
    }

    /// Lookup by id; absence is a normal outcome, never an error
    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&slot| &self.entries[slot])
    }

    /// Snapshot of all entities in insertion order. Defensive copy: callers
    /// mutating the result cannot corrupt the store.
    pub fn all(&self) -> Vec<T> {
        self.entries.clone()
    }

    /// Borrowing iterator in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: CatalogEntity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use designmap_catalog::{ComponentCategory, ComponentEntity, LifecycleStatus};

    fn component(id: &str, name: &str) -> ComponentEntity {
        ComponentEntity::new(id, name, ComponentCategory::Atomic, LifecycleStatus::Stable)
    }

    #[test]
    fn test_register_and_get() {
        let mut store = EntityStore::new();
        store.register(component("button", "Button"));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("button").unwrap().name, "Button");
        assert!(store.get("missing").is_none());
    }

    #[test]
    fn test_last_write_wins_keeps_slot() {
        let mut store = EntityStore::new();
        store.register(component("a", "First"));
        store.register(component("b", "Second"));
        store.register(component("a", "Replaced"));

        let all = store.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Replaced");
        assert_eq!(all[1].name, "Second");
    }

    #[test]
    fn test_all_is_a_defensive_copy() {
        let mut store = EntityStore::new();
        store.register(component("a", "First"));

        let mut snapshot = store.all();
        snapshot[0].name = "Mutated".to_string();
        snapshot.clear();

        assert_eq!(store.get("a").unwrap().name, "First");
        assert_eq!(store.len(), 1);
    }
}
