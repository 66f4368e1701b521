use crate::types::{EdgeStyle, RelationKind, ResolvedEdge};
use designmap_catalog::{ComponentCategory, ComponentEntity, UtilityEntity};
use designmap_registry::DesignRegistry;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A reference that matched no registered entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UnresolvedReference {
    /// Id of the entity that declared the reference
    pub origin: String,

    pub kind: RelationKind,

    /// The raw free-text reference
    pub reference: String,
}

/// Build-time data-quality report over all declared references.
///
/// The resolver itself stays silent about drops; this report makes them
/// visible so naming drift is caught early instead of degrading the
/// visualization forever.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReferenceReport {
    /// Number of references that produced an edge
    pub resolved: usize,

    pub unresolved: Vec<UnresolvedReference>,
}

impl ReferenceReport {
    pub fn is_clean(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Turns free-text cross-references into resolved id-pair edges.
///
/// Matching is best-effort and never fails: a reference that resolves to
/// nothing produces no edge and no error. Every emitted edge's endpoints
/// exist in the registry.
pub struct RelationResolver<'a> {
    registry: &'a DesignRegistry,
}

impl<'a> RelationResolver<'a> {
    pub fn new(registry: &'a DesignRegistry) -> Self {
        Self { registry }
    }

    /// Resolve all composition, dependency and page-usage references into
    /// an order-stable edge list
    pub fn resolve(&self) -> Vec<ResolvedEdge> {
        let (edges, report) = self.resolve_with_report();
        log::info!(
            "Resolved {} edges ({} references dropped)",
            edges.len(),
            report.unresolved.len()
        );
        edges
    }

    /// Same resolution pass, reporting every dropped reference
    pub fn audit(&self) -> ReferenceReport {
        let (_, report) = self.resolve_with_report();
        report
    }

    fn resolve_with_report(&self) -> (Vec<ResolvedEdge>, ReferenceReport) {
        let mut edges = Vec::new();
        let mut report = ReferenceReport::default();

        // Composition: child component -> composing component, exact name match
        for parent in self.registry.iter_components() {
            for reference in &parent.composition {
                match self.find_component_by_name(reference) {
                    Some(child) => edges.push(ResolvedEdge::new(
                        &child.id,
                        &parent.id,
                        RelationKind::Composition,
                        composition_style(child.category, parent.category),
                        false,
                    )),
                    None => report.unresolved.push(UnresolvedReference {
                        origin: parent.id.clone(),
                        kind: RelationKind::Composition,
                        reference: reference.clone(),
                    }),
                }
            }
        }

        // Dependency: utility -> component, heuristic match, animated
        for component in self.registry.iter_components() {
            for reference in &component.dependencies {
                match self.find_utility_for(reference) {
                    Some(utility) => edges.push(ResolvedEdge::new(
                        &utility.id,
                        &component.id,
                        RelationKind::Dependency,
                        EdgeStyle::Solid,
                        true,
                    )),
                    None => report.unresolved.push(UnresolvedReference {
                        origin: component.id.clone(),
                        kind: RelationKind::Dependency,
                        reference: reference.clone(),
                    }),
                }
            }
        }

        // Page usage: page -> component, exact name match
        for page in self.registry.iter_pages() {
            for reference in &page.components {
                match self.find_component_by_name(reference) {
                    Some(component) => edges.push(ResolvedEdge::new(
                        &page.id,
                        &component.id,
                        RelationKind::PageUsage,
                        EdgeStyle::Solid,
                        false,
                    )),
                    None => report.unresolved.push(UnresolvedReference {
                        origin: page.id.clone(),
                        kind: RelationKind::PageUsage,
                        reference: reference.clone(),
                    }),
                }
            }
        }

        report.resolved = edges.len();
        (edges, report)
    }

    fn find_component_by_name(&self, name: &str) -> Option<&'a ComponentEntity> {
        self.registry.iter_components().find(|c| c.name == name)
    }

    /// First utility (insertion order) matching the reference, testing in
    /// fixed precedence: exact export, exact function name, then the
    /// lowercased reference containing the lowercased utility name.
    fn find_utility_for(&self, reference: &str) -> Option<&'a UtilityEntity> {
        let lowered = reference.to_lowercase();
        self.registry.iter_utilities().find(|utility| {
            utility.exports.iter().any(|e| e == reference)
                || utility.functions.iter().any(|f| f.name == reference)
                || lowered.contains(&utility.name.to_lowercase())
        })
    }
}

/// Adjacent tiers read as assembly steps and render dashed; a tier-skip
/// (atomic straight into an organism) renders solid
fn composition_style(child: ComponentCategory, parent: ComponentCategory) -> EdgeStyle {
    match (child, parent) {
        (ComponentCategory::Atomic, ComponentCategory::Molecular)
        | (ComponentCategory::Molecular, ComponentCategory::Organism) => EdgeStyle::Dashed,
        _ => EdgeStyle::Solid,
    }
}
