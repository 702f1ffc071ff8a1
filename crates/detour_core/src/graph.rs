use anyhow::{bail, Result};
use log::debug;

use crate::constants::{LocationId, Weight};

/// Node identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(u32);

impl NodeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for NodeIndex {
    fn from(ix: usize) -> Self {
        NodeIndex::new(ix)
    }
}

/// Short version of `NodeIndex::new`
pub fn node_index(index: usize) -> NodeIndex {
    NodeIndex::new(index)
}

/// Edge identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeIndex(u32);

impl EdgeIndex {
    #[inline]
    pub fn new(x: usize) -> Self {
        EdgeIndex(x as u32)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// An undirected road between two locations.
#[derive(Debug, Clone)]
pub struct Edge {
    pub source: NodeIndex,
    pub target: NodeIndex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: NodeIndex, target: NodeIndex, weight: Weight) -> Self {
        Edge {
            source,
            target,
            weight,
        }
    }

    fn connects(&self, a: NodeIndex, b: NodeIndex) -> bool {
        (self.source == a && self.target == b) || (self.source == b && self.target == a)
    }

    fn opposite(&self, node: NodeIndex) -> NodeIndex {
        if self.source == node {
            self.target
        } else {
            self.source
        }
    }
}

/// Immutable undirected road network over `num_nodes` locations.
///
/// Every edge is stored once; its index appears in the incidence list of
/// both endpoints. Only the minimum weight per unordered pair of locations
/// is retained.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    pub edges: Vec<Edge>,
    edges_at: Vec<Vec<EdgeIndex>>,
}

impl RoadNetwork {
    pub fn with_nodes(num_nodes: usize) -> Self {
        Self {
            edges: Vec::new(),
            edges_at: vec![Vec::new(); num_nodes],
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.edges_at.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> {
        (0..self.num_nodes()).map(NodeIndex::new)
    }

    /// Add a new `edge` to the network.
    ///
    /// **Panics** if an endpoint does not exist or the edge is a self-loop.
    ///
    /// If the two endpoints are already connected, the stored weight is
    /// lowered to the new weight when that is smaller and the existing edge
    /// index is returned; a more expensive duplicate changes nothing.
    pub fn add_edge(&mut self, edge: Edge) -> EdgeIndex {
        assert!(
            edge.source.index() < self.num_nodes(),
            "Source node index ({}) does not exist",
            edge.source.index()
        );
        assert!(
            edge.target.index() < self.num_nodes(),
            "Target node index ({}) does not exist",
            edge.target.index()
        );
        assert!(
            edge.source != edge.target,
            "Self-loop at node index {}",
            edge.source.index()
        );

        for edge_idx in self.edges_at[edge.source.index()].iter() {
            let old_edge = &self.edges[edge_idx.index()];
            if old_edge.connects(edge.source, edge.target) {
                if edge.weight < old_edge.weight {
                    self.edges[edge_idx.index()].weight = edge.weight;
                }
                return *edge_idx;
            }
        }

        let edge_idx = EdgeIndex::new(self.edges.len());
        self.edges_at[edge.source.index()].push(edge_idx);
        self.edges_at[edge.target.index()].push(edge_idx);
        self.edges.push(edge);

        edge_idx
    }

    pub fn add_edges(&mut self, edges: Vec<Edge>) {
        for edge in edges {
            self.add_edge(edge);
        }
    }

    /// Returns an iterator over the neighbors of `node` with the weight of
    /// the connecting road. Empty for isolated nodes.
    pub fn neighbors(&self, node: NodeIndex) -> impl Iterator<Item = (NodeIndex, Weight)> + '_ {
        self.edges_at[node.index()].iter().map(move |edge_idx| {
            let edge = &self.edges[edge_idx.index()];
            (edge.opposite(node), edge.weight)
        })
    }

    /// The minimum recorded weight between `a` and `b`, if they are
    /// directly connected.
    pub fn weight(&self, a: NodeIndex, b: NodeIndex) -> Option<Weight> {
        self.edges_at[a.index()]
            .iter()
            .map(|edge_idx| &self.edges[edge_idx.index()])
            .find(|edge| edge.connects(a, b))
            .map(|edge| edge.weight)
    }

    /// The cheapest weight among all roads touching `node`; `None` when the
    /// node is isolated.
    pub fn cheapest_incident_weight(&self, node: NodeIndex) -> Option<Weight> {
        self.edges_at[node.index()]
            .iter()
            .map(|edge_idx| self.edges[edge_idx.index()].weight)
            .min()
    }

    /// Build a network from the raw case description: `locations` numbered
    /// `1..=locations` and `(source, target, weight)` road triples.
    ///
    /// Ids outside `[1, locations]` are rejected. Self-loops are dropped
    /// since they cannot take part in a route between distinct locations.
    pub fn from_roads(
        locations: usize,
        roads: &[(LocationId, LocationId, Weight)],
    ) -> Result<Self> {
        let mut network = RoadNetwork::with_nodes(locations);

        for &(source, target, weight) in roads {
            if source < 1 || source > locations {
                bail!(
                    "Road source id {} outside of [1, {}]",
                    source,
                    locations
                );
            }
            if target < 1 || target > locations {
                bail!(
                    "Road target id {} outside of [1, {}]",
                    target,
                    locations
                );
            }
            if source == target {
                debug!("Dropping self-loop at location {}", source);
                continue;
            }
            network.add_edge(Edge::new(
                NodeIndex::new(source - 1),
                NodeIndex::new(target - 1),
                weight,
            ));
        }

        debug!(
            "Road network has {} locations and {} distinct roads",
            network.num_nodes(),
            network.num_edges()
        );
        Ok(network)
    }
}

/// Macro to create an undirected road between two node indices
///
/// road!(0, 1, 3) connects node 0 and node 1 with weight 3
#[macro_export]
macro_rules! road {
    ($source:expr , $target:expr, $weight:expr) => {
        $crate::graph::Edge::new(
            $crate::graph::node_index($source),
            $crate::graph::node_index($target),
            $weight,
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_roads_keep_minimum_weight() {
        let mut g = RoadNetwork::with_nodes(2);

        let first = g.add_edge(road!(0, 1, 5));
        let second = g.add_edge(road!(0, 1, 3));

        assert_eq!(first, second);
        assert_eq!(g.num_edges(), 1);
        assert_eq!(g.weight(node_index(0), node_index(1)), Some(3));

        // Larger duplicate afterwards changes nothing
        g.add_edge(road!(1, 0, 7));
        assert_eq!(g.num_edges(), 1);
        assert_eq!(g.weight(node_index(0), node_index(1)), Some(3));
    }

    #[test]
    fn duplicate_roads_smaller_first() {
        let mut g = RoadNetwork::with_nodes(2);

        g.add_edge(road!(0, 1, 3));
        g.add_edge(road!(0, 1, 5));

        assert_eq!(g.weight(node_index(0), node_index(1)), Some(3));
    }

    #[test]
    fn weights_are_symmetric() {
        let mut g = RoadNetwork::with_nodes(3);
        g.add_edge(road!(0, 1, 4));
        g.add_edge(road!(2, 1, 9));

        for (a, b) in [(0, 1), (1, 2), (0, 2)] {
            assert_eq!(
                g.weight(node_index(a), node_index(b)),
                g.weight(node_index(b), node_index(a))
            );
        }
        assert_eq!(g.weight(node_index(0), node_index(2)), None);
    }

    #[test]
    fn isolated_node() {
        let g = RoadNetwork::with_nodes(2);

        assert_eq!(g.neighbors(node_index(0)).count(), 0);
        assert_eq!(g.cheapest_incident_weight(node_index(0)), None);
    }

    #[test]
    fn cheapest_incident_weight() {
        let mut g = RoadNetwork::with_nodes(3);
        g.add_edge(road!(0, 1, 4));
        g.add_edge(road!(0, 2, 2));

        assert_eq!(g.cheapest_incident_weight(node_index(0)), Some(2));
        assert_eq!(g.cheapest_incident_weight(node_index(1)), Some(4));
        assert_eq!(g.cheapest_incident_weight(node_index(2)), Some(2));
    }

    #[test]
    fn from_roads_maps_one_based_ids() {
        let g = RoadNetwork::from_roads(3, &[(1, 2, 5), (2, 3, 2)]).unwrap();

        assert_eq!(g.num_nodes(), 3);
        assert_eq!(g.weight(node_index(0), node_index(1)), Some(5));
        assert_eq!(g.weight(node_index(1), node_index(2)), Some(2));
    }

    #[test]
    fn from_roads_rejects_bad_ids() {
        assert!(RoadNetwork::from_roads(3, &[(0, 2, 5)]).is_err());
        assert!(RoadNetwork::from_roads(3, &[(1, 4, 5)]).is_err());
    }

    #[test]
    fn from_roads_drops_self_loops() {
        let g = RoadNetwork::from_roads(2, &[(1, 1, 5), (1, 2, 3)]).unwrap();

        assert_eq!(g.num_edges(), 1);
        assert_eq!(g.weight(node_index(0), node_index(0)), None);
    }
}
