use std::cmp::Reverse;

use anyhow::Result;
use log::debug;
use priority_queue::PriorityQueue;

use crate::constants::{Weight, INFINITY};
use crate::graph::{NodeIndex, RoadNetwork};
use crate::search::dijkstra::Dijkstra;
use crate::statistics::SearchStats;

/// Finds the cheapest route over two or more roads that beats the direct
/// road between its endpoints (any finite cost counts when the endpoints
/// are not directly connected).
///
/// `None` means no such route exists in the network.
pub struct DetourSearch<'a> {
    pub stats: SearchStats,
    g: &'a RoadNetwork,
}

impl<'a> DetourSearch<'a> {
    pub fn new(graph: &'a RoadNetwork) -> Self {
        DetourSearch {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    /// Pruned search: sources are scanned in ascending order of their
    /// cheapest incident road, and the scan stops once that lower bound
    /// exceeds the best route found so far.
    ///
    /// Per source only routes of exactly two roads are considered. That is
    /// enough: a cheaper route over more roads either has a qualifying
    /// two-road prefix or can be shortened through the direct road at its
    /// second node.
    pub fn run(&mut self) -> Option<Weight> {
        self.stats.init();

        let mut best = INFINITY;

        let mut queue: PriorityQueue<NodeIndex, Reverse<Weight>> = PriorityQueue::new();
        for node in self.g.node_indices() {
            if let Some(cheapest) = self.g.cheapest_incident_weight(node) {
                queue.push(node, Reverse(cheapest));
            }
        }

        while let Some((source, Reverse(cheapest))) = queue.pop() {
            // Every route out of `source` starts with a road of at least
            // `cheapest`, so no remaining source can undercut `best`.
            if cheapest > best {
                break;
            }
            self.stats.nodes_settled += 1;

            for (first_hop, first_weight) in self.g.neighbors(source) {
                if first_weight >= best {
                    continue;
                }
                for (second_hop, second_weight) in self.g.neighbors(first_hop) {
                    if second_hop == source {
                        continue;
                    }
                    let candidate = first_weight.saturating_add(second_weight);
                    if candidate >= best {
                        continue;
                    }
                    // A route only qualifies when it beats the direct road
                    // between its endpoints
                    match self.g.weight(source, second_hop) {
                        Some(direct) if candidate >= direct => {}
                        _ => best = candidate,
                    }
                }
            }
        }

        self.stats.finish();
        debug!(
            "Scanned {} sources in {:?}, best detour: {:?}",
            self.stats.nodes_settled, self.stats.duration, best
        );

        (best < INFINITY).then_some(best)
    }

    /// Baseline: one full shortest-path run per source, folding every
    /// multi-hop distance into the minimum. Slower than [`Self::run`] but
    /// covers routes of any length directly; kept as the reference the
    /// pruned search is checked against.
    pub fn run_exhaustive(&mut self) -> Result<Option<Weight>> {
        self.stats.init();

        let mut best = INFINITY;
        for source in self.g.node_indices() {
            let mut dijkstra = Dijkstra::new(self.g);
            let table = dijkstra.search(source)?;
            self.stats.nodes_settled += dijkstra.stats.nodes_settled;

            for (_, weight) in table.multi_hop() {
                best = best.min(weight);
            }
        }

        self.stats.finish();
        Ok((best < INFINITY).then_some(best))
    }
}
