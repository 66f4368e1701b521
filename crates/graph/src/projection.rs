use crate::resolver::RelationResolver;
use crate::types::{EdgeStyle, RelationKind, ResolvedEdge};
use designmap_catalog::EntityKind;
use designmap_registry::DesignRegistry;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// Deterministic grid placement: a horizontal band per entity kind, four
// columns per band. Callers run a real layout algorithm afterwards.
const GRID_COLUMNS: usize = 4;
const X_STEP: f32 = 240.0;
const Y_STEP: f32 = 140.0;
const COMPONENT_BAND: f32 = 0.0;
const UTILITY_BAND: f32 = 600.0;
const HOOK_BAND: f32 = 900.0;
const PAGE_BAND: f32 = 1200.0;

/// Provisional 2D position for a node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// Per-kind detail payload of a node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum NodeDetail {
    Component {
        category: String,
        props: Vec<String>,
        features: Vec<String>,
    },
    Utility {
        category: String,
        exports: Vec<String>,
        token_count: usize,
        class_count: usize,
    },
    Hook {
        params: Vec<String>,
        returns: String,
    },
    Page {
        route: String,
        components: Vec<String>,
    },
}

/// Data payload carried by every node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NodeData {
    pub label: String,
    pub description: String,
    pub status: String,
    pub detail: NodeDetail,
}

/// Renderer-agnostic node record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FlowNode {
    /// Entity id
    pub id: String,

    pub kind: EntityKind,

    pub position: Position,

    pub data: NodeData,
}

/// Renderer-agnostic edge record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FlowEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub kind: RelationKind,
    pub style: EdgeStyle,
    pub animated: bool,
}

impl From<ResolvedEdge> for FlowEdge {
    fn from(edge: ResolvedEdge) -> Self {
        Self {
            id: edge.id,
            source: edge.source,
            target: edge.target,
            kind: edge.kind,
            style: edge.style,
            animated: edge.animated,
        }
    }
}

/// Complete graph snapshot for an external rendering layer.
///
/// Pure function of the registry: regenerating without intervening
/// registrations yields structurally identical output, positions included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GraphSnapshot {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

impl GraphSnapshot {
    pub fn build(registry: &DesignRegistry) -> Self {
        Self {
            nodes: generate_nodes(registry),
            edges: generate_edges(registry),
        }
    }
}

/// One node per entity, in store insertion order per kind
pub fn generate_nodes(registry: &DesignRegistry) -> Vec<FlowNode> {
    let mut nodes = Vec::new();

    for (i, component) in registry.iter_components().enumerate() {
        nodes.push(FlowNode {
            id: component.id.clone(),
            kind: EntityKind::Component,
            position: grid_position(i, COMPONENT_BAND),
            data: NodeData {
                label: component.name.clone(),
                description: component.description.clone(),
                status: component.status.to_string(),
                detail: NodeDetail::Component {
                    category: component.category.to_string(),
                    props: component.props.iter().map(|p| p.name.clone()).collect(),
                    features: component.features.clone(),
                },
            },
        });
    }

    for (i, utility) in registry.iter_utilities().enumerate() {
        nodes.push(FlowNode {
            id: utility.id.clone(),
            kind: EntityKind::Utility,
            position: grid_position(i, UTILITY_BAND),
            data: NodeData {
                label: utility.name.clone(),
                description: utility.description.clone(),
                status: utility.status.to_string(),
                detail: NodeDetail::Utility {
                    category: utility.category.to_string(),
                    exports: utility.exports.clone(),
                    token_count: utility.tokens.len(),
                    class_count: utility.css_classes.len(),
                },
            },
        });
    }

    for (i, hook) in registry.iter_hooks().enumerate() {
        nodes.push(FlowNode {
            id: hook.id.clone(),
            kind: EntityKind::Hook,
            position: grid_position(i, HOOK_BAND),
            data: NodeData {
                label: hook.name.clone(),
                description: hook.description.clone(),
                status: hook.status.to_string(),
                detail: NodeDetail::Hook {
                    params: hook.params.iter().map(|p| p.name.clone()).collect(),
                    returns: hook.returns.clone(),
                },
            },
        });
    }

    for (i, page) in registry.iter_pages().enumerate() {
        nodes.push(FlowNode {
            id: page.id.clone(),
            kind: EntityKind::Page,
            position: grid_position(i, PAGE_BAND),
            data: NodeData {
                label: page.name.clone(),
                description: page.description.clone(),
                status: page.status.to_string(),
                detail: NodeDetail::Page {
                    route: page.route.clone(),
                    components: page.components.clone(),
                },
            },
        });
    }

    nodes
}

/// All resolved edges in the renderer's edge schema
pub fn generate_edges(registry: &DesignRegistry) -> Vec<FlowEdge> {
    RelationResolver::new(registry)
        .resolve()
        .into_iter()
        .map(FlowEdge::from)
        .collect()
}

fn grid_position(index: usize, band: f32) -> Position {
    Position {
        x: (index % GRID_COLUMNS) as f32 * X_STEP,
        y: band + (index / GRID_COLUMNS) as f32 * Y_STEP,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use designmap_catalog::Catalog;
    use pretty_assertions::assert_eq;

    fn demo_registry() -> DesignRegistry {
        DesignRegistry::from_catalog(Catalog::builtin_demo())
    }

    #[test]
    fn test_one_node_per_entity() {
        let registry = demo_registry();
        let nodes = generate_nodes(&registry);

        let totals = registry.totals();
        assert_eq!(
            nodes.len(),
            totals.components + totals.utilities + totals.hooks + totals.pages
        );

        let mut ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), nodes.len());
    }

    #[test]
    fn test_snapshot_is_idempotent() {
        let registry = demo_registry();
        let first = GraphSnapshot::build(&registry);
        let second = GraphSnapshot::build(&registry);
        assert_eq!(first, second);
    }

    #[test]
    fn test_edge_endpoints_are_emitted_nodes() {
        let registry = demo_registry();
        let snapshot = GraphSnapshot::build(&registry);

        for edge in &snapshot.edges {
            assert!(snapshot.nodes.iter().any(|n| n.id == edge.source));
            assert!(snapshot.nodes.iter().any(|n| n.id == edge.target));
        }
    }

    #[test]
    fn test_grid_placement_is_deterministic() {
        assert_eq!(grid_position(0, 0.0), Position { x: 0.0, y: 0.0 });
        assert_eq!(grid_position(3, 0.0), Position { x: 720.0, y: 0.0 });
        assert_eq!(grid_position(4, 600.0), Position { x: 0.0, y: 740.0 });
    }

    #[test]
    fn test_component_detail_payload() {
        let registry = demo_registry();
        let nodes = generate_nodes(&registry);
        let button = nodes.iter().find(|n| n.id == "button-atomic").unwrap();

        assert_eq!(button.data.label, "ButtonAtomic");
        match &button.data.detail {
            NodeDetail::Component { category, props, features } => {
                assert_eq!(category, "atomic");
                assert_eq!(props, &vec!["variant", "size", "loading"]);
                assert!(features.contains(&"variants".to_string()));
            }
            other => panic!("unexpected detail: {other:?}"),
        }
    }

    #[test]
    fn test_page_detail_payload() {
        let registry = demo_registry();
        let nodes = generate_nodes(&registry);
        let home = nodes.iter().find(|n| n.id == "home").unwrap();

        match &home.data.detail {
            NodeDetail::Page { route, components } => {
                assert_eq!(route, "/");
                assert_eq!(components.len(), 4);
            }
            other => panic!("unexpected detail: {other:?}"),
        }
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let registry = demo_registry();
        let snapshot = GraphSnapshot::build(&registry);
        let raw = serde_json::to_string(&snapshot).unwrap();
        let reparsed: GraphSnapshot = serde_json::from_str(&raw).unwrap();
        assert_eq!(snapshot.nodes.len(), reparsed.nodes.len());
        assert_eq!(snapshot.edges, reparsed.edges);
    }
}
