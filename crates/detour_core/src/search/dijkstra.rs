use std::collections::BinaryHeap;

use anyhow::{bail, Result};
use log::debug;
use rustc_hash::FxHashMap;

use crate::constants::{Weight, INFINITY};
use crate::graph::{NodeIndex, RoadNetwork};
use crate::search::Candidate;
use crate::statistics::SearchStats;

/// Best known distance to one node within a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeCost {
    pub weight: Weight,
    /// Still the unbeaten direct road from the run's source.
    pub via_direct: bool,
}

/// Distances from one source to every reachable node.
///
/// Each entry carries a flag telling whether the distance is still the
/// direct road out of the source. A direct distance is only replaced by a
/// strictly cheaper one, so every unflagged entry is a route over two or
/// more roads that beats any direct road to its endpoint.
#[derive(Debug)]
pub struct DistanceTable {
    source: NodeIndex,
    costs: FxHashMap<NodeIndex, NodeCost>,
}

impl DistanceTable {
    pub fn source(&self) -> NodeIndex {
        self.source
    }

    /// Best known cost to `node`; `None` when unreachable.
    pub fn cost(&self, node: NodeIndex) -> Option<NodeCost> {
        self.costs.get(&node).copied()
    }

    /// Distances reached over two or more roads, excluding the source
    /// itself and every node whose best distance is still its direct road.
    pub fn multi_hop(&self) -> impl Iterator<Item = (NodeIndex, Weight)> + '_ {
        let source = self.source;
        self.costs
            .iter()
            .filter(move |(node, cost)| **node != source && !cost.via_direct)
            .map(|(node, cost)| (*node, cost.weight))
    }
}

/// Single-source shortest paths with direct-road bookkeeping.
pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    g: &'a RoadNetwork,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a RoadNetwork) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    /// Computes the distance from `source` to every reachable node.
    ///
    /// Fails when `source` does not exist in the network.
    pub fn search(&mut self, source: NodeIndex) -> Result<DistanceTable> {
        if source.index() >= self.g.num_nodes() {
            bail!(
                "Source node index ({}) does not exist in a network of {} nodes",
                source.index(),
                self.g.num_nodes()
            );
        }

        self.stats.init();

        let mut costs: FxHashMap<NodeIndex, NodeCost> = FxHashMap::default();
        costs.insert(
            source,
            NodeCost {
                weight: 0,
                via_direct: false,
            },
        );

        let mut queue = BinaryHeap::new();
        queue.push(Candidate::new(source, 0));

        while let Some(Candidate { weight, node_idx }) = queue.pop() {
            // Stale entry left behind by a later improvement
            if weight > costs.get(&node_idx).map_or(INFINITY, |c| c.weight) {
                continue;
            }
            self.stats.nodes_settled += 1;

            for (neighbor, edge_weight) in self.g.neighbors(node_idx) {
                let new_distance = weight.saturating_add(edge_weight);
                if new_distance < costs.get(&neighbor).map_or(INFINITY, |c| c.weight) {
                    costs.insert(
                        neighbor,
                        NodeCost {
                            weight: new_distance,
                            via_direct: node_idx == source,
                        },
                    );
                    queue.push(Candidate::new(neighbor, new_distance));
                }
            }
        }

        self.stats.finish();
        debug!(
            "Settled {} nodes from source {} in {:?}",
            self.stats.nodes_settled,
            source.index(),
            self.stats.duration
        );

        Ok(DistanceTable { source, costs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::node_index;
    use crate::road;

    #[test]
    fn distances_on_a_square() {
        // 0 - 1
        // |   |
        // 2 - 3
        let mut g = RoadNetwork::with_nodes(4);
        g.add_edge(road!(0, 1, 10));
        g.add_edge(road!(0, 2, 1));
        g.add_edge(road!(2, 3, 1));
        g.add_edge(road!(3, 1, 1));

        let mut d = Dijkstra::new(&g);
        let table = d.search(node_index(0)).unwrap();

        // Direct road to 2 stays unbeaten
        assert_eq!(
            table.cost(node_index(2)),
            Some(NodeCost {
                weight: 1,
                via_direct: true
            })
        );
        // 3 has no direct road; reached over 0-2-3
        assert_eq!(
            table.cost(node_index(3)),
            Some(NodeCost {
                weight: 2,
                via_direct: false
            })
        );
        // The direct road 0-1 of weight 10 is beaten by 0-2-3-1
        assert_eq!(
            table.cost(node_index(1)),
            Some(NodeCost {
                weight: 3,
                via_direct: false
            })
        );

        let mut multi: Vec<_> = table.multi_hop().collect();
        multi.sort();
        assert_eq!(multi, vec![(node_index(1), 3), (node_index(3), 2)]);
    }

    #[test]
    fn unreachable_nodes_are_absent() {
        // 0 - 1   2 - 3
        let mut g = RoadNetwork::with_nodes(4);
        g.add_edge(road!(0, 1, 1));
        g.add_edge(road!(2, 3, 1));

        let mut d = Dijkstra::new(&g);
        let table = d.search(node_index(0)).unwrap();

        assert_eq!(table.cost(node_index(2)), None);
        assert_eq!(table.cost(node_index(3)), None);
        assert_eq!(table.multi_hop().count(), 0);
    }

    #[test]
    fn equal_cost_detour_keeps_direct_flag() {
        // Direct 0-1 costs 2, the route 0-2-1 costs 2 as well
        let mut g = RoadNetwork::with_nodes(3);
        g.add_edge(road!(0, 1, 2));
        g.add_edge(road!(0, 2, 1));
        g.add_edge(road!(2, 1, 1));

        let mut d = Dijkstra::new(&g);
        let table = d.search(node_index(0)).unwrap();

        assert_eq!(
            table.cost(node_index(1)),
            Some(NodeCost {
                weight: 2,
                via_direct: true
            })
        );
        // Both reachable nodes keep their direct-road distance
        assert_eq!(table.multi_hop().count(), 0);
    }

    #[test]
    fn invalid_source_is_rejected() {
        let g = RoadNetwork::with_nodes(2);
        let mut d = Dijkstra::new(&g);

        assert!(d.search(node_index(2)).is_err());
    }

    #[test]
    fn matches_brute_force_on_a_lattice() {
        //  0 - 1 - 2
        //  |   |   |
        //  3 - 4 - 5
        let mut g = RoadNetwork::with_nodes(6);
        g.add_edge(road!(0, 1, 2));
        g.add_edge(road!(1, 2, 9));
        g.add_edge(road!(0, 3, 4));
        g.add_edge(road!(1, 4, 1));
        g.add_edge(road!(2, 5, 3));
        g.add_edge(road!(3, 4, 2));
        g.add_edge(road!(4, 5, 6));

        let mut d = Dijkstra::new(&g);
        let table = d.search(node_index(0)).unwrap();

        let expected = [(1, 2), (2, 11), (3, 4), (4, 3), (5, 9)];
        for (node, weight) in expected {
            assert_eq!(table.cost(node_index(node)).unwrap().weight, weight);
        }
    }
}
