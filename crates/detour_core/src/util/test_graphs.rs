//! Small fixture networks shared between unit tests and benchmarks.

use crate::graph::RoadNetwork;
use crate::road;

/// Three locations where the route A-B-C (5 + 2) undercuts the direct road
/// A-C of weight 8.
pub fn triangle_with_shortcut() -> RoadNetwork {
    RoadNetwork::from_roads(3, &[(1, 2, 5), (2, 3, 2), (1, 3, 8)])
        .expect("fixture roads are well-formed")
}

/// A hub location connected to two leaves that share no direct road.
pub fn star_pair() -> RoadNetwork {
    RoadNetwork::from_roads(3, &[(1, 2, 1), (1, 3, 1)]).expect("fixture roads are well-formed")
}

/// Complete network on `n` locations where every road costs `weight`, so no
/// multi-road route ever beats a direct road.
pub fn uniform_complete(n: usize, weight: u64) -> RoadNetwork {
    let mut g = RoadNetwork::with_nodes(n);
    for a in 0..n {
        for b in (a + 1)..n {
            g.add_edge(road!(a, b, weight));
        }
    }
    g
}

/// Eleven lettered locations with mixed weights.
pub fn lettered_network() -> RoadNetwork {
    let mut g = RoadNetwork::with_nodes(11);

    let (a, b, c, d, e, f) = (0, 1, 2, 3, 4, 5);
    let (gg, h, i, j, k) = (6, 7, 8, 9, 10);

    g.add_edge(road!(a, b, 3));
    g.add_edge(road!(a, c, 5));
    g.add_edge(road!(a, k, 3));

    g.add_edge(road!(b, d, 5));
    g.add_edge(road!(b, c, 3));

    g.add_edge(road!(c, d, 2));
    g.add_edge(road!(c, j, 2));

    g.add_edge(road!(d, j, 4));
    g.add_edge(road!(d, e, 7));

    g.add_edge(road!(e, j, 3));
    g.add_edge(road!(e, f, 6));

    g.add_edge(road!(f, h, 2));
    g.add_edge(road!(f, gg, 4));

    g.add_edge(road!(gg, h, 3));
    g.add_edge(road!(gg, i, 5));

    g.add_edge(road!(h, i, 3));
    g.add_edge(road!(h, j, 2));

    g.add_edge(road!(i, j, 4));
    g.add_edge(road!(i, k, 6));

    g.add_edge(road!(j, k, 3));

    g
}
