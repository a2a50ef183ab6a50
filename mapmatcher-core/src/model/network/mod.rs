mod edge_id;
mod road_network;
mod network_graph;

pub use edge_id::EdgeId;
pub use road_network::Network;
pub use network_graph::NetworkGraph;
