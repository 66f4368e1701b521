use crate::error::{GraphError, Result};
use crate::resolver::RelationResolver;
use crate::types::{DesignGraph, GraphEdge, GraphNode, RelationKind};
use designmap_registry::DesignRegistry;
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::{HashSet, VecDeque};

/// An entity reachable from a traversal start point
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedEntity {
    pub id: String,

    /// Hop count from the start entity
    pub distance: usize,

    /// Relation kinds along the discovered path
    pub path: Vec<RelationKind>,
}

impl DesignGraph {
    /// Build the full design graph from a registry.
    ///
    /// Phase 1 adds one node per entity, phase 2 resolves references into
    /// edges. Resolver output is sound, so both endpoints of every edge
    /// are already in the index.
    pub fn build(registry: &DesignRegistry) -> Self {
        let mut graph = Self::new();

        for component in registry.iter_components() {
            graph.add_node(GraphNode::from_component(component));
        }
        for utility in registry.iter_utilities() {
            graph.add_node(GraphNode::from_utility(utility));
        }
        for hook in registry.iter_hooks() {
            graph.add_node(GraphNode::from_hook(hook));
        }
        for page in registry.iter_pages() {
            graph.add_node(GraphNode::from_page(page));
        }

        for edge in RelationResolver::new(registry).resolve() {
            if let (Some(from), Some(to)) =
                (graph.find_node(&edge.source), graph.find_node(&edge.target))
            {
                graph.add_edge(
                    from,
                    to,
                    GraphEdge {
                        kind: edge.kind,
                        style: edge.style,
                        animated: edge.animated,
                    },
                );
            }
        }

        log::info!(
            "Built design graph: {} nodes, {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        graph
    }

    /// Components the given component is built from (incoming composition)
    pub fn building_blocks(&self, id: &str) -> Result<Vec<String>> {
        let idx = self.lookup(id)?;
        Ok(self.incoming_ids(idx, |kind| kind == RelationKind::Composition))
    }

    /// Entities built from or backed by the given entity (outgoing
    /// composition and dependency edges)
    pub fn dependents(&self, id: &str) -> Result<Vec<String>> {
        let idx = self.lookup(id)?;
        Ok(self
            .graph
            .edges(idx)
            .filter(|e| {
                matches!(
                    e.weight().kind,
                    RelationKind::Composition | RelationKind::Dependency
                )
            })
            .filter_map(|e| self.get_node(e.target()).map(|n| n.id.clone()))
            .collect())
    }

    /// Pages that use the given component (incoming page-usage)
    pub fn pages_using(&self, id: &str) -> Result<Vec<String>> {
        let idx = self.lookup(id)?;
        Ok(self.incoming_ids(idx, |kind| kind == RelationKind::PageUsage))
    }

    /// All entities within `max_depth` hops, ignoring edge direction.
    /// Returns (id, distance, relation path) in BFS discovery order.
    pub fn related(&self, id: &str, max_depth: usize) -> Result<Vec<RelatedEntity>> {
        let start = self.lookup(id)?;
        let mut visited = HashSet::new();
        let mut result = Vec::new();
        let mut queue = VecDeque::new();

        visited.insert(start);
        queue.push_back((start, 0usize, Vec::new()));

        while let Some((current, depth, path)) = queue.pop_front() {
            if current != start {
                if let Some(node) = self.get_node(current) {
                    result.push(RelatedEntity {
                        id: node.id.clone(),
                        distance: depth,
                        path: path.clone(),
                    });
                }
            }

            if depth < max_depth {
                for direction in [Direction::Outgoing, Direction::Incoming] {
                    for edge in self.graph.edges_directed(current, direction) {
                        let neighbor = match direction {
                            Direction::Outgoing => edge.target(),
                            Direction::Incoming => edge.source(),
                        };
                        if visited.insert(neighbor) {
                            let mut next_path = path.clone();
                            next_path.push(edge.weight().kind);
                            queue.push_back((neighbor, depth + 1, next_path));
                        }
                    }
                }
            }
        }

        Ok(result)
    }

    fn lookup(&self, id: &str) -> Result<NodeIndex> {
        self.find_node(id)
            .ok_or_else(|| GraphError::UnknownEntity(id.to_string()))
    }

    fn incoming_ids(
        &self,
        idx: NodeIndex,
        keep: impl Fn(RelationKind) -> bool,
    ) -> Vec<String> {
        self.graph
            .edges_directed(idx, Direction::Incoming)
            .filter(|e| keep(e.weight().kind))
            .filter_map(|e| self.get_node(e.source()).map(|n| n.id.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use designmap_catalog::Catalog;

    fn demo_graph() -> DesignGraph {
        let registry = DesignRegistry::from_catalog(Catalog::builtin_demo());
        DesignGraph::build(&registry)
    }

    #[test]
    fn test_build_counts() {
        let graph = demo_graph();
        // 7 components + 3 utilities + 2 hooks + 3 pages
        assert_eq!(graph.node_count(), 15);
        assert!(graph.edge_count() > 0);
    }

    #[test]
    fn test_building_blocks_of_navigation() {
        let graph = demo_graph();
        let mut blocks = graph.building_blocks("navigation-molecular").unwrap();
        blocks.sort();
        assert_eq!(blocks, vec!["button-atomic", "glass-card-atomic"]);
    }

    #[test]
    fn test_dependents_of_button() {
        let graph = demo_graph();
        let dependents = graph.dependents("button-atomic").unwrap();
        // Button is a building block of navigation, contact form, header and hero
        assert!(dependents.contains(&"navigation-molecular".to_string()));
        assert!(dependents.contains(&"header-organism".to_string()));
        assert!(!dependents.contains(&"home".to_string()));
    }

    #[test]
    fn test_pages_using_component() {
        let graph = demo_graph();
        let mut pages = graph.pages_using("header-organism").unwrap();
        pages.sort();
        assert_eq!(pages, vec!["contact", "design-system", "home"]);
    }

    #[test]
    fn test_related_respects_depth() {
        let graph = demo_graph();

        let one_hop = graph.related("button-atomic", 1).unwrap();
        assert!(one_hop.iter().all(|r| r.distance == 1));
        assert!(one_hop.iter().any(|r| r.id == "navigation-molecular"));

        let two_hops = graph.related("button-atomic", 2).unwrap();
        assert!(two_hops.len() > one_hop.len());
        // No direct edge between button and glass card; shortest route is
        // through navigation, class-names or home
        assert!(two_hops
            .iter()
            .any(|r| r.id == "glass-card-atomic" && r.distance == 2));
    }

    #[test]
    fn test_related_path_records_relations() {
        let graph = demo_graph();
        let related = graph.related("home", 1).unwrap();
        assert!(related
            .iter()
            .all(|r| r.path == vec![RelationKind::PageUsage]));
    }

    #[test]
    fn test_unknown_entity_errors() {
        let graph = demo_graph();
        assert!(matches!(
            graph.building_blocks("no-such-id"),
            Err(GraphError::UnknownEntity(_))
        ));
    }
}
