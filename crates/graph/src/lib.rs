//! # designmap-graph
//!
//! Relationship resolution and graph projection for the design registry.
//!
//! ## Architecture
//!
//! ```text
//! DesignRegistry
//!     │
//!     ├──> Relation Resolver (best-effort name matching)
//!     │      ├─ Composition: child component -> parent, exact name
//!     │      ├─ Dependency: utility -> component, heuristic
//!     │      ├─ Page usage: page -> component, exact name
//!     │      └─ Unresolvable references dropped (audit() reports them)
//!     │
//!     ├──> Design Graph (petgraph)
//!     │      ├─ Nodes: components, utilities, hooks, pages
//!     │      └─ Traversals: building_blocks, dependents, pages_using, related
//!     │
//!     └──> Graph Projection
//!            ├─ FlowNode/FlowEdge snapshot for an external renderer
//!            └─ Deterministic grid placement, real layout happens downstream
//! ```

mod error;
mod graph;
mod projection;
mod resolver;
mod types;

pub use error::{GraphError, Result};
pub use graph::RelatedEntity;
pub use projection::{
    generate_edges, generate_nodes, FlowEdge, FlowNode, GraphSnapshot, NodeData, NodeDetail,
    Position,
};
pub use resolver::{ReferenceReport, RelationResolver, UnresolvedReference};
pub use types::{DesignGraph, EdgeStyle, GraphEdge, GraphNode, RelationKind, ResolvedEdge};
