//! Find the cheapest route between any two locations that uses two or more
//! roads and still beats the direct road between its endpoints.
//!
//! # Basic usage
//! ```
//! use detour_core::prelude::*;
//!
//! // Locations 1..=3; the route 1-2-3 (5 + 2) undercuts the direct road
//! // 1-3 of weight 8
//! let network = RoadNetwork::from_roads(3, &[(1, 2, 5), (2, 3, 2), (1, 3, 8)]).unwrap();
//!
//! let mut search = DetourSearch::new(&network);
//! assert_eq!(search.run(), Some(7));
//! ```
//! [`RoadNetwork`]: crate::graph::RoadNetwork
pub mod constants;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod statistics;
pub mod util;
