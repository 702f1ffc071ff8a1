pub use crate::constants::Weight;
pub use crate::graph::node_index;
pub use crate::graph::{Edge, NodeIndex, RoadNetwork};
pub use crate::search::detour::DetourSearch;
pub use crate::search::dijkstra::Dijkstra;
