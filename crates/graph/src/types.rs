use designmap_catalog::{
    ComponentEntity, EntityKind, HookEntity, PageEntity, UtilityEntity,
};
use petgraph::graph::{DiGraph, NodeIndex};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Kind of resolved relationship between two entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// Component is built from another component (child -> parent)
    Composition,

    /// Utility backs a component (utility -> component)
    Dependency,

    /// Page uses a component (page -> component)
    PageUsage,
}

impl RelationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Composition => "composition",
            Self::Dependency => "dependency",
            Self::PageUsage => "page_usage",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Line style hint for rendering an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EdgeStyle {
    Solid,
    Dashed,
}

/// A resolved, directed relationship between two entity ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ResolvedEdge {
    /// Synthetic id: "{source}-{target}"
    pub id: String,

    /// Source entity id
    pub source: String,

    /// Target entity id
    pub target: String,

    pub kind: RelationKind,

    pub style: EdgeStyle,

    /// Dependency edges are animated to stand out from structural edges
    pub animated: bool,
}

impl ResolvedEdge {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        kind: RelationKind,
        style: EdgeStyle,
        animated: bool,
    ) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: format!("{source}-{target}"),
            source,
            target,
            kind,
            style,
            animated,
        }
    }
}

/// Node in the design graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Entity id
    pub id: String,

    pub name: String,

    pub kind: EntityKind,

    /// Component/utility category, if the kind has one
    pub category: Option<String>,

    pub status: String,
}

impl GraphNode {
    pub fn from_component(component: &ComponentEntity) -> Self {
        Self {
            id: component.id.clone(),
            name: component.name.clone(),
            kind: EntityKind::Component,
            category: Some(component.category.to_string()),
            status: component.status.to_string(),
        }
    }

    pub fn from_utility(utility: &UtilityEntity) -> Self {
        Self {
            id: utility.id.clone(),
            name: utility.name.clone(),
            kind: EntityKind::Utility,
            category: Some(utility.category.to_string()),
            status: utility.status.to_string(),
        }
    }

    pub fn from_hook(hook: &HookEntity) -> Self {
        Self {
            id: hook.id.clone(),
            name: hook.name.clone(),
            kind: EntityKind::Hook,
            category: None,
            status: hook.status.to_string(),
        }
    }

    pub fn from_page(page: &PageEntity) -> Self {
        Self {
            id: page.id.clone(),
            name: page.name.clone(),
            kind: EntityKind::Page,
            category: None,
            status: page.status.to_string(),
        }
    }
}

/// Edge payload in the design graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub kind: RelationKind,
    pub style: EdgeStyle,
    pub animated: bool,
}

/// Design system graph over all four entity kinds
pub struct DesignGraph {
    /// Directed graph (entity -> entity with relationships)
    pub graph: DiGraph<GraphNode, GraphEdge>,

    /// Entity id -> NodeIndex mapping for fast lookup
    pub id_index: HashMap<String, NodeIndex>,
}

impl DesignGraph {
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            id_index: HashMap::new(),
        }
    }

    /// Add node to graph
    pub fn add_node(&mut self, node: GraphNode) -> NodeIndex {
        let id = node.id.clone();
        let idx = self.graph.add_node(node);
        self.id_index.insert(id, idx);
        idx
    }

    /// Add edge between nodes
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, edge: GraphEdge) {
        self.graph.add_edge(from, to, edge);
    }

    /// Find node by entity id
    pub fn find_node(&self, id: &str) -> Option<NodeIndex> {
        self.id_index.get(id).copied()
    }

    /// Get node data
    pub fn get_node(&self, idx: NodeIndex) -> Option<&GraphNode> {
        self.graph.node_weight(idx)
    }

    /// Get all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &GraphNode)> {
        self.graph
            .node_indices()
            .filter_map(move |idx| self.graph.node_weight(idx).map(|node| (idx, node)))
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for DesignGraph {
    fn default() -> Self {
        Self::new()
    }
}
